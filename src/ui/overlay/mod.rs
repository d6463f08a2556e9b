//! Wayland layer-shell frontend.
//!
//! One overlay surface per output, all drawn from the same
//! [`SurfaceModel`], with exclusive keyboard focus.

pub mod keys;
pub mod view;

use std::path::PathBuf;
use std::time::Duration;

use iced::{event, keyboard, Element, Event, Subscription, Task};
use iced_layershell::build_pattern::application;
use iced_layershell::reexport::{Anchor, KeyboardInteractivity, Layer};
use iced_layershell::settings::{LayerShellSettings, StartMode};
use iced_layershell::to_layer_message;

use crate::ambient::quote::{self, QuoteSource};
use crate::ambient::wallpaper::WallpaperBlur;
use crate::ambient::AmbientSource;
use crate::config::Config;
use crate::controller::{LockController, Response};
use crate::error::LockError;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle, ShutdownPhase};
use crate::ui::key::KeyInput;
use crate::ui::surface::{Surface, SurfaceModel};
use crate::ui::theme;

const NAMESPACE: &str = "lockscreen";
const TICK_RATE: Duration = Duration::from_secs(1);

#[to_layer_message]
#[derive(Debug, Clone)]
pub enum Message {
    Key(KeyInput),
    Tick,
    QuoteReady(String),
    WallpaperReady(Option<PathBuf>),
}

struct LockScreen {
    controller: LockController,
    model: SurfaceModel,
    background: Option<PathBuf>,
    ambient: AmbientSource,
    shutdown: ShutdownHandle,
}

impl LockScreen {
    fn new(
        controller: LockController,
        ambient: AmbientSource,
        quote: String,
        shutdown: ShutdownHandle,
    ) -> Self {
        let model = SurfaceModel::new(quote, ambient.capture());
        Self {
            controller,
            model,
            background: None,
            ambient,
            shutdown,
        }
    }

    fn boot(config: &Config, shutdown: ShutdownHandle) -> (Self, Task<Message>) {
        let screen = Self::new(
            LockController::from_config(config, shutdown.clone()),
            AmbientSource::from_config(config),
            quote::attributed(&config.quote.fallback, &config.quote.attribution),
            shutdown,
        );

        let attribution = config.quote.attribution.clone();
        let mut tasks = vec![Task::perform(
            QuoteSource::from_config(&config.quote).fetch(),
            move |text| Message::QuoteReady(quote::attributed(&text, &attribution)),
        )];
        if config.wallpaper.enabled {
            tasks.push(Task::perform(
                WallpaperBlur::from_config(&config.wallpaper).prepare(),
                Message::WallpaperReady,
            ));
        }

        (screen, Task::batch(tasks))
    }

    fn namespace() -> String {
        NAMESPACE.to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Key(key) => match self.controller.handle_key(key) {
                Response::Unchanged => {}
                Response::Render(directive) => {
                    tracing::trace!(view = directive.view.as_str(), "surface update");
                    self.model.apply(&directive);
                }
                Response::Unlocked => {
                    self.shutdown.advance(ShutdownPhase::ClosingSurfaces);
                    return iced::exit();
                }
            },
            Message::Tick => self.model.refresh(&self.ambient.capture()),
            Message::QuoteReady(text) => self.model.set_quote(text),
            Message::WallpaperReady(path) => {
                if path.is_none() {
                    tracing::info!("no wallpaper available, using solid background");
                }
                self.background = path;
            }
            _ => {}
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::surface(&self.model, self.background.as_deref())
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            event::listen_with(key_message),
            iced::time::every(TICK_RATE).map(|_| Message::Tick),
        ])
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: view::color(theme::FALLBACK_BG),
            text_color: view::color(theme::FG),
        }
    }
}

fn key_message(event: Event, _status: event::Status, _window: iced::window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, text, .. }) => {
            Some(Message::Key(keys::classify(&key, text.as_deref())))
        }
        _ => None,
    }
}

pub fn run(config: &Config) -> Result<(), LockError> {
    let coordinator = ShutdownCoordinator::new();
    let handle = coordinator.handle();
    let config = config.clone();

    let settings = LayerShellSettings {
        layer: Layer::Overlay,
        anchor: Anchor::Top | Anchor::Bottom | Anchor::Left | Anchor::Right,
        keyboard_interactivity: KeyboardInteractivity::Exclusive,
        exclusive_zone: -1,
        size: Some((0, 0)),
        start_mode: StartMode::AllScreens,
        ..Default::default()
    };
    tracing::debug!(?settings, "starting overlay");

    application(
        move || LockScreen::boot(&config, handle.clone()),
        LockScreen::namespace,
        LockScreen::update,
        LockScreen::view,
    )
    .style(LockScreen::style)
    .subscription(LockScreen::subscription)
    .layer_settings(settings)
    .run()
    .map_err(|err| LockError::Overlay {
        reason: err.to_string(),
    })?;

    coordinator.advance(ShutdownPhase::Complete);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::auth::Authenticator;
    use crate::ui::session::{ViewName, WRONG_PASSWORD};
    use crate::wm::WindowManager;

    struct FixedPassword(&'static str);

    impl Authenticator for FixedPassword {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn authenticate(&self, _user: &str, secret: &str) -> bool {
            secret == self.0
        }
    }

    #[derive(Clone, Default)]
    struct CountingWindowManager(Arc<AtomicUsize>);

    impl WindowManager for CountingWindowManager {
        fn enter_exclusive_input_mode(&self) {}

        fn leave_exclusive_input_mode(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Fixture {
        screen: LockScreen,
        coordinator: ShutdownCoordinator,
        left: CountingWindowManager,
        battery: std::path::PathBuf,
        dir: TempDir,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let battery = dir.path().join("capacity");
        let mut config = Config::default();
        config.battery.capacity_path = battery.clone();

        let coordinator = ShutdownCoordinator::new();
        let left = CountingWindowManager::default();
        let controller = LockController::new(
            "alice".to_string(),
            Box::new(FixedPassword("pw")),
            Box::new(left.clone()),
            coordinator.handle(),
        );
        let screen = LockScreen::new(
            controller,
            AmbientSource::from_config(&config),
            "startup quote".to_string(),
            coordinator.handle(),
        );
        Fixture {
            screen,
            coordinator,
            left,
            battery,
            dir,
        }
    }

    fn press(screen: &mut LockScreen, keys: &str) {
        for ch in keys.chars() {
            let _ = screen.update(Message::Key(KeyInput::PrintableChar(ch)));
        }
    }

    #[test]
    fn key_messages_drive_the_shared_model() {
        let mut f = fixture();
        press(&mut f.screen, "abc");
        assert_eq!(f.screen.model.view(), ViewName::Typing);
        assert_eq!(f.screen.model.directive.dots, 3);
        assert_eq!(f.screen.model.directive, f.screen.controller.directive());

        let _ = f.screen.update(Message::Key(KeyInput::Enter));
        assert_eq!(f.screen.model.view(), ViewName::Idle);
        assert_eq!(f.screen.model.directive.error.as_deref(), Some(WRONG_PASSWORD));

        let _ = f.screen.update(Message::Key(KeyInput::ModifierOnly));
        assert_eq!(f.screen.model.directive, f.screen.controller.directive());

        // Every output renders this one model.
        let _ = f.screen.view();
    }

    #[test]
    fn tick_and_quote_update_ambient_text() {
        let mut f = fixture();
        assert_eq!(f.screen.model.quote, "startup quote");
        assert!(!f.screen.model.ambient.battery.contains('%'));

        std::fs::write(&f.battery, "42\n").unwrap();
        let _ = f.screen.update(Message::Tick);
        assert!(f.screen.model.ambient.battery.ends_with("42%"));

        let _ = f.screen.update(Message::QuoteReady("\"Know thyself.\" — Thales".to_string()));
        assert_eq!(f.screen.model.quote, "\"Know thyself.\" — Thales");
    }

    #[test]
    fn wallpaper_message_sets_background() {
        let mut f = fixture();
        let path = f.dir.path().join("blurred.png");
        let _ = f.screen.update(Message::WallpaperReady(Some(path.clone())));
        assert_eq!(f.screen.background.as_deref(), Some(path.as_path()));

        let _ = f.screen.update(Message::WallpaperReady(None));
        assert!(f.screen.background.is_none());
    }

    #[test]
    fn correct_password_closes_surfaces() {
        let mut f = fixture();
        press(&mut f.screen, "pw");
        let _ = f.screen.update(Message::Key(KeyInput::Enter));

        assert!(f.screen.controller.session().is_unlocked());
        assert!(f.coordinator.is_shutting_down());
        assert_eq!(f.coordinator.phase(), ShutdownPhase::ClosingSurfaces);
        assert_eq!(f.left.0.load(Ordering::SeqCst), 1);

        // Late key events after unlock change nothing.
        let before = f.screen.model.clone();
        press(&mut f.screen, "x");
        assert_eq!(f.screen.model, before);
    }
}
