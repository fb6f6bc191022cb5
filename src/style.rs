// SPDX-License-Identifier: MPL-2.0
//! Visual styling for toasts.
//!
//! A [`Style`] is a fully immutable value object describing how a toast is
//! drawn: colors, fonts, icon, alignment, width policy, and content
//! insets. Styles are built with defaulted `with_*` methods; every field
//! has a documented default, so `Style::default()` is a complete,
//! presentable style.

use crate::design_tokens::{palette, sizing};
use iced::alignment;
use iced::widget::image::Handle;
use iced::{Color, Font, Padding};

/// Width policy for the toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    /// An absolute width in logical pixels, taken as given regardless of
    /// the container width.
    Fixed(f32),
    /// A ratio of the container width. Values outside `0.0..=1.0` fall
    /// back to the full container width.
    ScreenPercentage(f32),
}

/// Whether the icon precedes or follows the label/button group.
///
/// `RightToLeft` mirrors the whole row (button, label, icon); the three
/// slots are never permuted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAlignment {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Immutable visual description of a toast.
#[derive(Debug, Clone)]
pub struct Style {
    background: Color,
    text_color: Color,
    tint: Color,
    action_text_color: Color,
    font: Font,
    font_size: f32,
    action_font: Font,
    action_font_size: f32,
    icon: Option<Handle>,
    text_alignment: alignment::Horizontal,
    content_alignment: ContentAlignment,
    width: Width,
    content_insets: Padding,
    content_offset: Padding,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: palette::GRAY_900,
            text_color: palette::WHITE,
            tint: palette::WHITE,
            action_text_color: palette::WHITE,
            font: Font::default(),
            font_size: sizing::FONT_BODY,
            action_font: Font::default(),
            action_font_size: sizing::FONT_BODY,
            icon: None,
            text_alignment: alignment::Horizontal::Left,
            content_alignment: ContentAlignment::default(),
            width: Width::ScreenPercentage(0.92),
            content_insets: Padding {
                top: 12.0,
                right: 17.0,
                bottom: 11.0,
                left: 14.0,
            },
            content_offset: Padding::ZERO,
        }
    }
}

impl Style {
    /// Creates a style with all defaults. Equivalent to `Style::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color of the card. (Default is dark gray.)
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Sets the label text color. (Default is white.)
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the icon tint. (Default is white.)
    #[must_use]
    pub fn with_tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    /// Sets the action button title color. (Default is white.)
    #[must_use]
    pub fn with_action_text_color(mut self, color: Color) -> Self {
        self.action_text_color = color;
        self
    }

    /// Sets the label font. (Default is the system font at 14.)
    #[must_use]
    pub fn with_font(mut self, font: Font, size: f32) -> Self {
        self.font = font;
        self.font_size = size;
        self
    }

    /// Sets the action button font. (Default is the system font at 14.)
    #[must_use]
    pub fn with_action_font(mut self, font: Font, size: f32) -> Self {
        self.action_font = font;
        self.action_font_size = size;
        self
    }

    /// Sets the icon image. (Default is no icon; without one, the label
    /// shifts to the card edge and no icon slot is reserved.)
    #[must_use]
    pub fn with_icon(mut self, icon: Handle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the label text alignment. (Default is left.)
    #[must_use]
    pub fn with_text_alignment(mut self, align: alignment::Horizontal) -> Self {
        self.text_alignment = align;
        self
    }

    /// Sets the icon/label/button ordering. (Default is `LeftToRight`.)
    #[must_use]
    pub fn with_content_alignment(mut self, align: ContentAlignment) -> Self {
        self.content_alignment = align;
        self
    }

    /// Sets the width policy. (Default is `ScreenPercentage(0.92)`.)
    #[must_use]
    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Sets the insets between the card edge and its content.
    /// (Default is 12/17/11/14 top/right/bottom/left.)
    #[must_use]
    pub fn with_content_insets(mut self, insets: Padding) -> Self {
        self.content_insets = insets;
        self
    }

    /// Sets an explicit screen offset. When non-zero it replaces the
    /// safe-area-derived insets entirely. (Default is zero.)
    #[must_use]
    pub fn with_content_offset(mut self, offset: Padding) -> Self {
        self.content_offset = offset;
        self
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    #[must_use]
    pub fn tint(&self) -> Color {
        self.tint
    }

    #[must_use]
    pub fn action_text_color(&self) -> Color {
        self.action_text_color
    }

    #[must_use]
    pub fn font(&self) -> Font {
        self.font
    }

    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    #[must_use]
    pub fn action_font(&self) -> Font {
        self.action_font
    }

    #[must_use]
    pub fn action_font_size(&self) -> f32 {
        self.action_font_size
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Handle> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn text_alignment(&self) -> alignment::Horizontal {
        self.text_alignment
    }

    #[must_use]
    pub fn content_alignment(&self) -> ContentAlignment {
        self.content_alignment
    }

    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }

    #[must_use]
    pub fn content_insets(&self) -> Padding {
        self.content_insets
    }

    #[must_use]
    pub fn content_offset(&self) -> Padding {
        self.content_offset
    }

    /// Whether an explicit content offset is set.
    #[must_use]
    pub fn has_content_offset(&self) -> bool {
        let o = self.content_offset;
        o.top != 0.0 || o.right != 0.0 || o.bottom != 0.0 || o.left != 0.0
    }
}

/// Parses a CSS-style hex color (`"#rrggbb"`, `"#rrggbbaa"`, short forms).
///
/// Malformed input yields opaque black rather than an error; callers never
/// see a parse failure.
#[must_use]
pub fn color_from_hex(hex: &str) -> Color {
    hex.parse().unwrap_or(palette::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_documented_defaults() {
        let style = Style::default();
        assert_eq!(style.width(), Width::ScreenPercentage(0.92));
        assert_eq!(style.content_alignment(), ContentAlignment::LeftToRight);
        assert_eq!(style.text_alignment(), alignment::Horizontal::Left);
        assert!(style.icon().is_none());
        assert!(!style.has_content_offset());
        assert_eq!(style.content_insets().top, 12.0);
        assert_eq!(style.content_insets().left, 14.0);
        assert_eq!(style.content_insets().bottom, 11.0);
        assert_eq!(style.content_insets().right, 17.0);
        assert_eq!(style.font_size(), 14.0);
    }

    #[test]
    fn builder_overrides_individual_fields() {
        let style = Style::new()
            .with_background(Color::from_rgb(0.2, 0.0, 0.0))
            .with_width(Width::Fixed(280.0))
            .with_content_alignment(ContentAlignment::RightToLeft);

        assert_eq!(style.width(), Width::Fixed(280.0));
        assert_eq!(style.content_alignment(), ContentAlignment::RightToLeft);
        // Untouched fields keep their defaults
        assert_eq!(style.text_color(), palette::WHITE);
    }

    #[test]
    fn content_offset_detection() {
        let style = Style::new().with_content_offset(Padding {
            top: 40.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        });
        assert!(style.has_content_offset());
    }

    #[test]
    fn hex_parsing_round_trips_primaries() {
        let red = color_from_hex("#ff0000");
        assert_eq!(red.r, 1.0);
        assert_eq!(red.g, 0.0);
        assert_eq!(red.b, 0.0);
        assert_eq!(red.a, 1.0);
    }

    #[test]
    fn malformed_hex_falls_back_to_opaque_black() {
        for bad in ["", "#", "not-a-color", "#12345", "#gghhii"] {
            let color = color_from_hex(bad);
            assert_eq!(color, palette::BLACK, "input {bad:?}");
        }
    }
}
