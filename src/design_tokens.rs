// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the toast card.
//!
//! A small, self-consistent set of visual constants: base palette,
//! spacing scale, component sizes, corner radii, and shadows. The default
//! [`Style`](crate::style::Style) and the card rendering draw exclusively
//! from these tokens so that the library has a single place to tune its
//! look.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Spacing (4px base grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;

    /// Gap between the icon and the label.
    pub const ICON_GAP: f32 = 13.0;

    /// Vertical breathing room around the label inside the content row.
    pub const LABEL_PAD_Y: f32 = 4.5;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Default font size for the message label and the action button.
    pub const FONT_BODY: f32 = 14.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;

    /// Corner radius of the toast card.
    pub const CARD: f32 = 14.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };
}
