// SPDX-License-Identifier: MPL-2.0
//! Toast card rendering.
//!
//! Cards are small bordered containers with a kind-colored accent, an
//! optional remaining-time caption, and a dismiss control. Each card is
//! wrapped in a mouse area so hovering suspends the countdown.

use super::overlay::{Message, Overlay};
use crate::domain::timer::{Phase, ToastTimer};
use crate::domain::toast::{Toast, ToastKind};
use crate::registry::Registry;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Duration;

/// Renders the toast overlay with all active toasts.
///
/// Positions toasts in the bottom-right corner, stacked vertically with
/// the oldest on top. Toasts added between ticks are rendered as soon as
/// their timer exists (the next tick or an explicit sync).
pub(super) fn view_overlay<'a>(overlay: &'a Overlay, registry: &'a Registry) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = registry
        .snapshot()
        .iter()
        .filter_map(|toast| {
            overlay
                .timer(toast.id())
                .map(|timer| card(toast, timer, overlay.show_remaining(), overlay.width()))
        })
        .collect();

    if cards.is_empty() {
        // Return an empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Renders a single toast card.
fn card<'a>(
    toast: &'a Toast,
    timer: &ToastTimer,
    show_remaining: bool,
    width: f32,
) -> Element<'a, Message> {
    let toast_id = toast.id();
    let accent = kind_color(toast.kind());
    // Entry and exit transitions render faded so they read as motion even
    // without animated geometry.
    let faded = matches!(timer.phase(), Phase::Entering | Phase::Exiting);

    let icon = Text::new(kind_glyph(toast.kind()))
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(fade(accent, faded)),
        });

    let message_widget = Text::new(toast.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(fade(theme.palette().text, faded)),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if show_remaining {
        let caption = Text::new(format_remaining(timer.remaining()))
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            });
        content = content.push(caption);
    }

    let dismiss_button = button(Text::new("\u{00d7}").size(typography::BODY))
        .on_press(Message::Dismiss(toast_id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);
    content = content.push(dismiss_button);

    let body = Container::new(content)
        .width(Length::Fixed(width))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent, faded));

    mouse_area(body)
        .on_enter(Message::PointerEntered(toast_id))
        .on_exit(Message::PointerExited(toast_id))
        .into()
}

/// Maps a toast kind onto its accent color.
fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => palette::SUCCESS_500,
        ToastKind::Error => palette::ERROR_500,
        ToastKind::Warning => palette::WARNING_500,
        ToastKind::Info => palette::INFO_500,
    }
}

/// Text glyph standing in for a severity icon.
fn kind_glyph(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "\u{2713}",
        ToastKind::Error => "\u{2717}",
        ToastKind::Warning => "!",
        ToastKind::Info => "i",
    }
}

fn fade(color: Color, faded: bool) -> Color {
    if faded {
        Color {
            a: opacity::TRANSITION,
            ..color
        }
    } else {
        color
    }
}

fn format_remaining(remaining: Duration) -> String {
    format!("{:.1}s", remaining.as_secs_f32())
}

/// Style function for the toast card container.
fn card_style(theme: &Theme, accent: Color, faded: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: fade(accent, faded),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if faded { shadow::NONE } else { shadow::MD },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
