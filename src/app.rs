// SPDX-License-Identifier: MPL-2.0
//! Demo application exercising the toast engine end to end.
//!
//! The `App` wires a [`Registry`], an [`Overlay`] and a diagnostics log
//! into a small Iced application: buttons spawn toasts of every kind, a
//! duplicate button demonstrates the refresh-in-place dedup policy, and a
//! delayed button dispatches from a background task through a
//! [`Dispatcher`](crate::registry::Dispatcher).

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsLog;
use crate::domain::toast::ToastKind;
use crate::registry::Registry;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toasts::{self, Overlay};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, window, Element, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Duration;

/// Launch options received from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Explicit config file path, overriding the platform default.
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toasts(toasts::Message),
    Spawn(ToastKind),
    SpawnDuplicate,
    SpawnDelayed,
    DelayedDispatched,
}

/// Root application state.
pub struct App {
    registry: Registry,
    overlay: Overlay,
    diagnostics: DiagnosticsLog,
    spawned: usize,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };
        let app = Self::from_config(&config);
        (app, Task::none())
    }

    fn from_config(config: &Config) -> Self {
        let diagnostics = DiagnosticsLog::default();
        let mut registry = Registry::new().with_default_duration(config.default_duration());
        registry.set_diagnostics(diagnostics.handle());

        Self {
            registry,
            overlay: Overlay::from_config(config),
            diagnostics,
            spawned: 0,
        }
    }

    fn title(&self) -> String {
        String::from("Iced Toasts")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toasts(msg) => {
                self.overlay.update(&mut self.registry, msg);
                self.diagnostics.drain();
                Task::none()
            }
            Message::Spawn(kind) => {
                self.spawned += 1;
                self.registry
                    .add(format!("This is {} toast #{}", kind.as_str(), self.spawned), kind, None);
                self.overlay.sync_now(&self.registry);
                Task::none()
            }
            Message::SpawnDuplicate => {
                // Same (message, kind) every press: the registry refreshes
                // the existing toast instead of stacking copies.
                self.registry.push_success("File saved");
                self.overlay.sync_now(&self.registry);
                Task::none()
            }
            Message::SpawnDelayed => {
                let dispatcher = self.registry.dispatcher();
                Task::perform(
                    async move {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        dispatcher.add_toast("Background job finished", ToastKind::Info, None);
                    },
                    |()| Message::DelayedDispatched,
                )
            }
            Message::DelayedDispatched => {
                // The tick subscription may be idle; pick the request up now.
                self.registry.poll_dispatch();
                self.overlay.sync_now(&self.registry);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let spawn_row = Row::new()
            .spacing(spacing::XS)
            .push(button(text("Success")).on_press(Message::Spawn(ToastKind::Success)))
            .push(button(text("Error")).on_press(Message::Spawn(ToastKind::Error)))
            .push(button(text("Warning")).on_press(Message::Spawn(ToastKind::Warning)))
            .push(button(text("Info")).on_press(Message::Spawn(ToastKind::Info)));

        let extras_row = Row::new()
            .spacing(spacing::XS)
            .push(button(text("Duplicate")).on_press(Message::SpawnDuplicate))
            .push(button(text("Delayed (1s)")).on_press(Message::SpawnDelayed));

        let status = text(format!(
            "{} active / {} diagnostic events",
            self.registry.len(),
            self.diagnostics.len()
        ))
        .size(typography::CAPTION);

        let controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text("Toast playground").size(typography::BODY))
            .push(spawn_row)
            .push(extras_row)
            .push(status);

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(content)
            .push(self.overlay.view(&self.registry).map(Message::Toasts))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.overlay.subscription(&self.registry).map(Message::Toasts)
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(560.0, 400.0),
        min_size: Some(Size::new(400.0, 300.0)),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_adds_a_toast_and_a_timer() {
        let mut app = App::from_config(&Config::default());

        let _ = app.update(Message::Spawn(ToastKind::Success));

        assert_eq!(app.registry.len(), 1);
        assert_eq!(app.overlay.timer_count(), 1);
    }

    #[test]
    fn duplicate_spawns_collapse_into_one_toast() {
        let mut app = App::from_config(&Config::default());

        let _ = app.update(Message::SpawnDuplicate);
        let _ = app.update(Message::SpawnDuplicate);

        assert_eq!(app.registry.len(), 1);
    }
}
