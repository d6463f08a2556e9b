//! Window-manager integration.
//!
//! While locked, the compositor must stop dispatching its own keybinds so
//! every key reaches the lock surfaces. On Hyprland that is a dedicated
//! submap entered through `hyprctl`.

use std::process::{Command, Stdio};

use crate::config::WindowManagerConfig;

/// Fire-and-forget requests to the window manager.
pub trait WindowManager: Send {
    fn enter_exclusive_input_mode(&self);

    fn leave_exclusive_input_mode(&self);
}

/// Runs configured command lines, e.g. `hyprctl dispatch submap lockscreen`.
pub struct CommandWindowManager {
    enter: Vec<String>,
    leave: Vec<String>,
}

impl CommandWindowManager {
    pub fn new(enter: Vec<String>, leave: Vec<String>) -> Self {
        Self { enter, leave }
    }

    pub fn from_config(config: &WindowManagerConfig) -> Self {
        Self::new(config.enter_command.clone(), config.leave_command.clone())
    }
}

impl WindowManager for CommandWindowManager {
    fn enter_exclusive_input_mode(&self) {
        run_command("enter", &self.enter);
    }

    fn leave_exclusive_input_mode(&self) {
        run_command("leave", &self.leave);
    }
}

fn run_command(action: &str, argv: &[String]) {
    let Some((program, args)) = argv.split_first() else {
        return;
    };

    let result = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            tracing::debug!(action, %program, "window manager command ran");
        }
        Ok(status) => {
            tracing::warn!(action, %program, %status, "window manager command failed");
        }
        Err(err) => {
            tracing::warn!(action, %program, "window manager command not run: {}", err);
        }
    }
}
