//! Rendering tests for the terminal frontend using ratatui's TestBackend.

mod common;

use common::*;
use custom_lock::ambient::{AmbientSnapshot, ClockText};
use custom_lock::ui::console::render::draw;
use custom_lock::ui::key::KeyInput;
use custom_lock::ui::surface::{Surface, SurfaceModel};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn snapshot() -> AmbientSnapshot {
    AmbientSnapshot {
        clock: ClockText {
            date: "09:41 AM".to_string(),
            hour: "09".to_string(),
            minute: "41".to_string(),
        },
        battery: "󰂁 83%".to_string(),
    }
}

fn render(model: &SurfaceModel) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| draw(frame, model)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn idle_shows_top_bar_and_no_frame() {
    let model = SurfaceModel::new("\"Be water.\" — Bruce Lee".to_string(), snapshot());
    let screen = render(&model);
    assert!(screen.contains("09:41 AM"));
    assert!(screen.contains("Be water."));
    assert!(screen.contains("83%"));
    assert!(!screen.contains('●'));
    assert!(!screen.contains("Wrong password"));
}

#[test]
fn typing_shows_dots_never_the_password() {
    let mut h = make_controller("secret");
    type_text(&mut h.controller, "zqx");

    let mut model = SurfaceModel::new("quote".to_string(), snapshot());
    model.apply(&h.controller.directive());
    let screen = render(&model);

    assert_eq!(screen.matches('●').count(), 3);
    assert!(!screen.contains("zqx"));
}

#[test]
fn failed_attempt_shows_error_banner() {
    let mut h = make_controller("secret");
    type_text(&mut h.controller, "wrong");
    h.controller.handle_key(KeyInput::Enter);

    let mut model = SurfaceModel::new("quote".to_string(), snapshot());
    model.apply(&h.controller.directive());
    let screen = render(&model);

    assert!(screen.contains("Wrong password"));
    assert!(!screen.contains('●'));
}

#[test]
fn refresh_updates_clock_text() {
    let mut model = SurfaceModel::new("quote".to_string(), snapshot());
    let mut later = snapshot();
    later.clock.date = "10:02 AM".to_string();
    model.refresh(&later);
    assert!(render(&model).contains("10:02 AM"));
}
