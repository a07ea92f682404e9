// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dial pad, call
//! submission, and toast notifications.
//!
//! The `App` struct wires together the dial pad component, the resolved
//! call endpoint, and the notification manager. This file intentionally
//! keeps policy decisions (number validation, endpoint resolution, toast
//! copy) close to the main update loop so it is easy to audit
//! user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::call;
use crate::ui::dialer;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use tracing::{debug, error, warn};

/// Toast copy for a submission rejected before it reaches the network.
const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid 10-digit US phone number";

/// Toast copy for a submission the endpoint accepted.
const CALL_SUCCESS_MESSAGE: &str = "Call initiated successfully!";

/// Toast copy for a submission that failed in transit or was rejected.
const CALL_FAILURE_MESSAGE: &str = "Failed to initiate call. Please try again.";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Root Iced application state that bridges the dial pad, call
/// submission, and toast notifications.
pub struct App {
    dialer: dialer::State,
    /// Resolved call endpoint (CLI flag beats settings.toml).
    endpoint: String,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("number", &self.dialer.number().as_str())
            .field("visible_toasts", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings.
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
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            dialer: dialer::State::new(),
            endpoint: config::DEFAULT_CALL_ENDPOINT.to_string(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher and the persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = App {
            theme_mode: config.general.theme_mode,
            // CLI override beats settings.toml, which beats the built-in default
            endpoint: flags
                .endpoint
                .unwrap_or_else(|| config.call_endpoint().to_string()),
            ..App::default()
        };

        if let Some(message) = config_warning {
            warn!("{message}");
            app.notifications.push(Notification::failure(message));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("IcedDial")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dialer(dialer_message) => {
                match dialer::update(dialer_message, &mut self.dialer) {
                    dialer::Event::None => Task::none(),
                    dialer::Event::SubmitRequested => self.submit_call(),
                }
            }
            Message::CallCompleted(result) => {
                match result {
                    Ok(()) => {
                        self.notifications
                            .push(Notification::success(CALL_SUCCESS_MESSAGE));
                    }
                    Err(err) => {
                        error!("call submission failed: {err}");
                        self.notifications
                            .push(Notification::failure(CALL_FAILURE_MESSAGE));
                    }
                }
                Task::none()
            }
            Message::Tick(_instant) => {
                // Age out expired toasts; the view reads fade directly
                self.notifications.tick();
                Task::none()
            }
        }
    }

    /// Validates the dialed number and, when complete, spawns the HTTP
    /// submission. The buffer is left untouched either way so the user
    /// can correct or redial without retyping.
    fn submit_call(&mut self) -> Task<Message> {
        let number = self.dialer.number();

        if !number.is_complete() {
            self.notifications
                .push(Notification::failure(INVALID_NUMBER_MESSAGE));
            return Task::none();
        }

        let endpoint = self.endpoint.clone();
        let phone_number = number.country_prefixed();
        debug!(endpoint = %endpoint, number = %phone_number, "submitting call");

        Task::perform(
            async move { call::initiate(&endpoint, &phone_number).await },
            Message::CallCompleted,
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            dialer: &self.dialer,
            notifications: &self.notifications,
        })
    }
}
