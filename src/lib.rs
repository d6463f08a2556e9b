pub mod ambient;
pub mod auth;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod shutdown;
pub mod ui;
pub mod wm;
