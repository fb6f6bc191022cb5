// SPDX-License-Identifier: MPL-2.0
//! Widget rendering for the presented toast.
//!
//! Builds the card as an Iced element: background, rounded corners,
//! shadow, optional icon, wrapping label, and the action button. The card
//! emits [`SurfaceEvent`]s — a tap anywhere on it and the action button
//! are two of the four dismissal triggers.

use super::surface::{Surface, SurfaceEvent};
use crate::design_tokens::{radius, shadow, sizing, spacing};
use crate::style::ContentAlignment;
use iced::widget::image::Image;
use iced::widget::{button, container, mouse_area, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

impl Surface {
    /// Renders the toast card.
    ///
    /// The host places the returned element inside the frame computed by
    /// the [`TransitionController`](super::TransitionController); the card
    /// itself fills whatever width it is given.
    pub fn view(&self) -> Element<'_, SurfaceEvent> {
        let style = self.toast().style();
        let text_color = style.text_color();
        let background = style.background();
        let action_color = style.action_text_color();

        let label = Text::new(self.toast().message())
            .font(style.font())
            .size(style.font_size())
            .align_x(style.text_alignment())
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });
        let label_slot = Container::new(label)
            .width(Length::Fill)
            .padding([spacing::LABEL_PAD_Y, 0.0]);

        let action = button(
            Text::new(self.toast().action())
                .font(style.action_font())
                .size(style.action_font_size()),
        )
        .on_press(SurfaceEvent::ActionActivated)
        .padding(spacing::XXS)
        .style(move |_theme: &Theme, status| action_button_style(action_color, status));

        // Raster icons render with their own colors; no icon, no slot.
        let icon = style.icon().map(|handle| {
            Image::new(handle.clone())
                .width(Length::Fixed(sizing::ICON_MD))
                .height(Length::Fixed(sizing::ICON_MD))
        });

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        match style.content_alignment() {
            ContentAlignment::LeftToRight => {
                if let Some(icon) = icon {
                    row = row.push(icon);
                }
                row = row.push(label_slot).push(action);
            }
            ContentAlignment::RightToLeft => {
                row = row.push(action).push(label_slot);
                if let Some(icon) = icon {
                    row = row.push(icon);
                }
            }
        }

        let card = Container::new(row)
            .width(Length::Fill)
            .padding(style.content_insets())
            .style(move |_theme: &Theme| card_style(background, text_color));

        mouse_area(card).on_press(SurfaceEvent::Tapped).into()
    }
}

fn card_style(background: Color, text_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::CARD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

fn action_button_style(title_color: Color, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Active | button::Status::Hovered | button::Status::Pressed => title_color,
        button::Status::Disabled => Color {
            a: 0.5,
            ..title_color
        },
    };

    button::Style {
        background: None,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
