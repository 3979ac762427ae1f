// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the customization form, the active theme,
//! the overlay phase and the toast manager, and translates messages into side
//! effects like image loading. Policy decisions (window size, which phase
//! accepts input, startup precedence of CLI over config) live here so user
//! facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::domain::UiPhase;
use crate::i18n::fluent::I18n;
use crate::ui::customizer;
use crate::ui::notifications::{self, Notification};
use crate::ui::theme::{ThemeId, ThemeTokens};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: ThemeId,
    phase: UiPhase,
    /// Time of the last tick; overlays animate against it.
    now: Instant,
    customizer: customizer::State,
    /// Toast notification manager for problems outside the form.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("phase", &self.phase)
            .field("customizer", &self.customizer)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// The configuration is loaded by the caller so logging can be set up first.
pub fn run(flags: Flags, config: Config, config_warning: Option<String>) -> iced::Result {
    // iced 0.14 boots through an `Fn`; every call gets its own copy.
    let boot = move || App::new(flags.clone(), &config, config_warning.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_start(I18n::default(), ThemeId::default(), Instant::now())
    }
}

impl App {
    fn with_start(i18n: I18n, theme: ThemeId, now: Instant) -> Self {
        Self {
            i18n,
            theme,
            phase: UiPhase::starting_at(now),
            now,
            customizer: customizer::State::new(),
            notifications: notifications::Manager::new(),
        }
    }

    /// Initializes application state, reports a broken config file and
    /// optionally starts loading the image given on the command line.
    pub fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let theme = flags.theme.unwrap_or(config.general.theme);
        let mut app = Self::with_start(i18n, theme, Instant::now());

        tracing::info!(
            theme = %theme,
            locale = %app.i18n.current_locale(),
            "starting"
        );

        if let Some(key) = config_warning {
            let now = app.now;
            app.notifications.push(Notification::config_warning(key), now);
        }

        let task = match flags.file_path {
            Some(path) => update::load_image_task(path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.tokens().iced_theme()
    }

    fn tokens(&self) -> ThemeTokens {
        self.theme.tokens()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.phase.needs_tick(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            theme: &mut self.theme,
            phase: &mut self.phase,
            now: &mut self.now,
            customizer: &mut self.customizer,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Customizer(message) => update::handle_customizer_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::CycleTheme => update::handle_cycle_theme(&mut ctx),
            Message::ModifiersChanged(modifiers) => {
                ctx.customizer.set_modifiers(modifiers);
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::ImageDialogResult(path) => update::handle_dialog_result(path),
            Message::ImageLoaded { path, result } => {
                update::handle_image_loaded(&mut ctx, &path, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            tokens: self.tokens(),
            phase: self.phase,
            now: self.now,
            customizer: &self.customizer,
            notifications: &self.notifications,
        })
    }
}
