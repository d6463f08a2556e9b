//! Terminal frontend.
//!
//! Draws the same surface projection as the overlay into the alternate
//! screen of the controlling terminal. Useful on a text console or when
//! no Wayland compositor is running.

pub mod digits;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod screen;

use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::ambient::quote::{self, QuoteSource};
use crate::ambient::AmbientSource;
use crate::config::Config;
use crate::controller::{LockController, Response};
use crate::error::LockError;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::ui::console::events::{AppEvent, EventHandler};
use crate::ui::console::screen::LockTerminal;
use crate::ui::surface::{Surface, SurfaceModel};

const TICK_RATE: Duration = Duration::from_secs(1);

pub fn run(config: &Config) -> Result<(), LockError> {
    let quote = fetch_quote(config)?;
    let coordinator = ShutdownCoordinator::new();
    let mut controller = LockController::from_config(config, coordinator.handle());
    let ambient = AmbientSource::from_config(config);
    let mut model = SurfaceModel::new(quote, ambient.capture());

    // Declared after the controller so it is restored first on every exit;
    // the controller then releases the compositor submap when dropped.
    let mut terminal = LockTerminal::take_over()?;
    let events = EventHandler::new(TICK_RATE, coordinator.handle());

    loop {
        terminal.draw(&model)?;

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => match controller.handle_key(input::classify(&key)) {
                Response::Unchanged => {}
                Response::Render(directive) => model.apply(&directive),
                Response::Unlocked => break,
            },
            Ok(AppEvent::Tick) => model.refresh(&ambient.capture()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Err(LockError::InputClosed),
        }
    }

    coordinator.advance(ShutdownPhase::ClosingSurfaces);
    drop(terminal);
    coordinator.advance(ShutdownPhase::Complete);
    Ok(())
}

fn fetch_quote(config: &Config) -> Result<String, LockError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let text = runtime.block_on(QuoteSource::from_config(&config.quote).fetch());
    Ok(quote::attributed(&text, &config.quote.attribution))
}
