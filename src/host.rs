// SPDX-License-Identifier: MPL-2.0
//! Contracts between the presentation core and the host toolkit.
//!
//! The core never touches the host's view hierarchy directly. Everything
//! it needs — current container geometry, intrinsic text measurement,
//! owner liveness, sibling chrome, and the three presentation commands —
//! goes through the [`Host`] trait. A real application implements it over
//! its window/runtime; tests implement it with a recording fake.

use crate::presenter::surface::{Surface, TimerToken};
use crate::presenter::transition::TransitionFrames;
use crate::toast::ScreenHandle;
use iced_core::Padding;
use std::time::Duration;

/// Snapshot of the container a toast is presented into.
///
/// Queried fresh on every geometry computation so that rotation and
/// resizes are always reflected; the core caches nothing derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub width: f32,
    pub height: f32,
    /// Portion of the container obscured by system chrome.
    pub safe_area: Padding,
}

impl ContainerGeometry {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            safe_area: Padding::ZERO,
        }
    }

    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Padding) -> Self {
        self.safe_area = safe_area;
        self
    }
}

/// Host-toolkit integration surface.
pub trait Host {
    /// Current geometry of the container belonging to `owner`.
    fn container(&self, owner: ScreenHandle) -> ContainerGeometry;

    /// Measured height of `text` wrapped at `max_width` with the given
    /// font size.
    fn text_height(&self, text: &str, max_width: f32, font_size: f32) -> f32;

    /// Whether the screen behind `owner` is still live and displayable.
    /// Dead owners cause their queued toasts to be dropped silently.
    fn is_owner_live(&self, owner: ScreenHandle) -> bool;

    /// Height of a persistent bottom bar adjacent to `owner`, so
    /// bottom-located toasts stack above it instead of covering it.
    fn bottom_bar_height(&self, _owner: ScreenHandle) -> f32 {
        0.0
    }

    /// Makes `surface` visible, animating from `frames.from` to
    /// `frames.to`. The host must deliver
    /// [`SurfaceEvent::PresentAnimationFinished`](crate::presenter::SurfaceEvent)
    /// once the enter animation completes.
    fn present(&mut self, surface: &Surface, frames: TransitionFrames);

    /// Schedules delivery of
    /// [`SurfaceEvent::TimerFired(token)`](crate::presenter::SurfaceEvent)
    /// after `delay`. Stale tokens are ignored by the core, so the host
    /// need not cancel a schedule that lost the race.
    fn schedule_dismiss(&mut self, token: TimerToken, delay: Duration);

    /// Runs the exit animation from `frames.from` to `frames.to` and
    /// delivers
    /// [`SurfaceEvent::DismissAnimationFinished`](crate::presenter::SurfaceEvent)
    /// when it completes. When `animated` is false the host only removes
    /// the surface; the presenter completes the dismissal synchronously
    /// and no event is expected.
    fn dismiss(&mut self, surface: &Surface, frames: TransitionFrames, animated: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Minimal;

    impl Host for Minimal {
        fn container(&self, _owner: ScreenHandle) -> ContainerGeometry {
            ContainerGeometry::new(400.0, 800.0)
        }
        fn text_height(&self, _text: &str, _max_width: f32, _font_size: f32) -> f32 {
            17.0
        }
        fn is_owner_live(&self, _owner: ScreenHandle) -> bool {
            true
        }
        fn present(&mut self, _surface: &Surface, _frames: TransitionFrames) {}
        fn schedule_dismiss(&mut self, _token: TimerToken, _delay: Duration) {}
        fn dismiss(&mut self, _surface: &Surface, _frames: TransitionFrames, _animated: bool) {}
    }

    #[test]
    fn bottom_bar_height_defaults_to_zero() {
        let host = Minimal;
        assert_eq!(host.bottom_bar_height(ScreenHandle::new()), 0.0);
    }

    #[test]
    fn container_geometry_defaults_to_zero_safe_area() {
        let geometry = ContainerGeometry::new(400.0, 800.0);
        assert_eq!(geometry.safe_area, Padding::ZERO);
    }
}
