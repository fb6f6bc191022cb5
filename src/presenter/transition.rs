// SPDX-License-Identifier: MPL-2.0
//! Transition and geometry computation for the presented toast.
//!
//! The controller is deliberately stateless: it holds the descriptor and
//! the host's geometry queries, nothing else. Every frame is computed from
//! the container's *current* bounds, so a rotation or parent resize is
//! handled by simply asking again.

use crate::design_tokens::{sizing, spacing};
use crate::host::Host;
use crate::toast::{Direction, Location, Toast};
use iced_core::{Point, Rectangle, Size};

/// Cosmetic padding between the toast and the nearest container edge when
/// no safe-area or chrome contribution applies.
pub const COSMETIC_INSET: f32 = 10.0;

/// Start and end rectangles of one animation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrames {
    pub from: Rectangle,
    pub to: Rectangle,
}

impl TransitionFrames {
    /// Interpolated frame at `progress` (clamped to `0.0..=1.0`), eased
    /// with an ease-out cubic so the card decelerates into place.
    #[must_use]
    pub fn frame_at(&self, progress: f32) -> Rectangle {
        let t = ease_out_cubic(progress.clamp(0.0, 1.0));
        Rectangle {
            x: lerp(self.from.x, self.to.x, t),
            y: lerp(self.from.y, self.to.y, t),
            width: lerp(self.from.width, self.to.width, t),
            height: lerp(self.from.height, self.to.height, t),
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Computes the presented toast's geometry and its enter/exit frames.
pub struct TransitionController<'a> {
    toast: &'a Toast,
    host: &'a dyn Host,
    cosmetic_inset: f32,
}

impl<'a> TransitionController<'a> {
    #[must_use]
    pub fn new(toast: &'a Toast, host: &'a dyn Host) -> Self {
        Self {
            toast,
            host,
            cosmetic_inset: COSMETIC_INSET,
        }
    }

    /// Overrides the cosmetic edge padding (configurable via
    /// [`Config::cosmetic_inset`](crate::config::Config)).
    #[must_use]
    pub fn with_cosmetic_inset(mut self, inset: f32) -> Self {
        self.cosmetic_inset = inset;
        self
    }

    /// Resolves the width policy against `container_width`.
    ///
    /// Fixed widths are taken as given; percentages outside `0.0..=1.0`
    /// fall back to the full container width.
    #[must_use]
    pub fn resolved_width(&self, container_width: f32) -> f32 {
        use crate::style::Width;
        match self.toast.style().width() {
            Width::Fixed(value) => value,
            Width::ScreenPercentage(pct) if (0.0..=1.0).contains(&pct) => container_width * pct,
            Width::ScreenPercentage(_) => container_width,
        }
    }

    /// The on-screen rectangle of the fully presented toast, computed from
    /// the container's current bounds.
    #[must_use]
    pub fn resting_frame(&self) -> Rectangle {
        let geometry = self.host.container(self.toast.owner());
        let width = self.resolved_width(geometry.width);
        let height = self.content_height(width);

        let style = self.toast.style();
        let y = match self.toast.location() {
            Location::Top => {
                let base = if style.has_content_offset() {
                    style.content_offset().top
                } else {
                    geometry.safe_area.top
                };
                base + self.cosmetic_inset
            }
            Location::Bottom => {
                let base = if style.has_content_offset() {
                    style.content_offset().bottom
                } else {
                    geometry.safe_area.bottom + self.host.bottom_bar_height(self.toast.owner())
                };
                let inset = if base == 0.0 { self.cosmetic_inset } else { base };
                geometry.height - height - inset
            }
        };

        let x = (geometry.width - width) / 2.0;
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    /// Frames of the enter animation: fully off-container along the
    /// presenting direction, sliding to the resting frame.
    #[must_use]
    pub fn present_frames(&self) -> TransitionFrames {
        let resting = self.resting_frame();
        TransitionFrames {
            from: self.offscreen_frame(self.toast.presenting_direction(), resting),
            to: resting,
        }
    }

    /// Frames of the exit animation: from the resting frame to fully
    /// off-container along the dismissing direction.
    #[must_use]
    pub fn dismiss_frames(&self) -> TransitionFrames {
        let resting = self.resting_frame();
        TransitionFrames {
            from: resting,
            to: self.offscreen_frame(self.toast.dismissing_direction(), resting),
        }
    }

    /// Content-derived height: wrapped label height floored at the icon
    /// row, plus the style's content insets.
    fn content_height(&self, width: f32) -> f32 {
        let style = self.toast.style();
        let insets = style.content_insets();

        let icon_slot = if style.icon().is_some() {
            sizing::ICON_MD + spacing::ICON_GAP
        } else {
            0.0
        };
        let content_width = (width - insets.left - insets.right - icon_slot).max(0.0);

        let label_height = self
            .host
            .text_height(self.toast.message(), content_width, style.font_size());
        let row_height = (label_height + 2.0 * spacing::LABEL_PAD_Y).max(if style.icon().is_some()
        {
            sizing::ICON_MD
        } else {
            0.0
        });

        row_height + insets.top + insets.bottom
    }

    fn offscreen_frame(&self, direction: Direction, resting: Rectangle) -> Rectangle {
        let geometry = self.host.container(self.toast.owner());
        match direction {
            Direction::Left => Rectangle {
                x: -resting.width,
                ..resting
            },
            Direction::Right => Rectangle {
                x: geometry.width,
                ..resting
            },
            Direction::Vertical => match self.toast.location() {
                Location::Top => Rectangle {
                    y: -resting.height,
                    ..resting
                },
                Location::Bottom => Rectangle {
                    y: geometry.height,
                    ..resting
                },
            },
        }
    }
}
