// SPDX-License-Identifier: MPL-2.0
//! Core toast descriptor.
//!
//! A [`Toast`] is the immutable value object a caller hands to the
//! [`Presenter`](crate::presenter::Presenter): what to say, how to look,
//! where to appear, and how to move. Duration and completion handler are
//! the only late-bound fields; they are fixed exactly once when the toast
//! is shown and never change afterwards.

use crate::style::Style;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration as StdDuration;

/// Non-owning handle to the screen that requested a toast.
///
/// The presenter never extends the screen's lifetime through this handle;
/// liveness is a host query ([`Host::is_owner_live`](crate::host::Host)),
/// and a toast whose owner has gone away by dequeue time is silently
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenHandle(u64);

impl ScreenHandle {
    /// Allocates a fresh, process-unique handle.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ScreenHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Where on the container the toast rests. (Default is `Top`.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Top,
    Bottom,
}

/// Axis along which a toast enters or exits. (Default is `Vertical`.)
///
/// `Left`/`Right` slide the card fully off the corresponding container
/// edge; `Vertical` slides it off the edge matching its [`Location`].
/// Presenting and dismissing directions are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Vertical,
}

/// How long a toast stays visible before timing out. (Default is `Average`.)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Duration {
    /// 2 seconds.
    Short,
    /// 4 seconds.
    Average,
    /// 8 seconds.
    Long,
    /// A caller-supplied number of seconds.
    Custom(f32),
}

impl Default for Duration {
    fn default() -> Self {
        Duration::Average
    }
}

impl Duration {
    /// The wall-clock length of this preset.
    #[must_use]
    pub fn length(self) -> StdDuration {
        match self {
            Duration::Short => StdDuration::from_secs(2),
            Duration::Average => StdDuration::from_secs(4),
            Duration::Long => StdDuration::from_secs(8),
            Duration::Custom(secs) => StdDuration::from_secs_f32(secs.max(0.0)),
        }
    }
}

/// Why a toast left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalReason {
    /// The surface was tapped.
    Tapped,
    /// The action button was activated.
    PerformedAction,
    /// The dismissal timer expired.
    TimedOut,
    /// `Presenter::dismiss_current` was called.
    Manual,
}

/// One-shot callback invoked with the reason a toast was dismissed.
pub type CompletionHandler = Box<dyn FnOnce(DismissalReason)>;

/// Descriptor for a single toast presentation.
pub struct Toast {
    message: String,
    action: String,
    style: Style,
    location: Location,
    presenting_direction: Direction,
    dismissing_direction: Direction,
    duration: Duration,
    completion: Option<CompletionHandler>,
    owner: ScreenHandle,
}

impl Toast {
    /// Creates a descriptor with the given message, bound to `owner`.
    /// Everything else starts at its documented default.
    #[must_use]
    pub fn new(message: impl Into<String>, owner: ScreenHandle) -> Self {
        Self {
            message: message.into(),
            action: String::new(),
            style: Style::default(),
            location: Location::default(),
            presenting_direction: Direction::default(),
            dismissing_direction: Direction::default(),
            duration: Duration::default(),
            completion: None,
            owner,
        }
    }

    /// Sets the action button label. An empty label still renders the
    /// button slot, matching the card layout contract.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_presenting_direction(mut self, direction: Direction) -> Self {
        self.presenting_direction = direction;
        self
    }

    #[must_use]
    pub fn with_dismissing_direction(mut self, direction: Direction) -> Self {
        self.dismissing_direction = direction;
        self
    }

    /// Fixes the duration and completion handler. Called exactly once, by
    /// [`Presenter::show`](crate::presenter::Presenter::show).
    pub(crate) fn set_shown(&mut self, duration: Duration, completion: Option<CompletionHandler>) {
        self.duration = duration;
        self.completion = completion;
    }

    /// Releases the completion handler for its single invocation.
    pub(crate) fn take_completion(&mut self) -> Option<CompletionHandler> {
        self.completion.take()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn presenting_direction(&self) -> Direction {
        self.presenting_direction
    }

    #[must_use]
    pub fn dismissing_direction(&self) -> Direction {
        self.dismissing_direction
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn owner(&self) -> ScreenHandle {
        self.owner
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("message", &self.message)
            .field("action", &self.action)
            .field("location", &self.location)
            .field("presenting_direction", &self.presenting_direction)
            .field("dismissing_direction", &self.dismissing_direction)
            .field("duration", &self.duration)
            .field("has_completion", &self.completion.is_some())
            .field("owner", &self.owner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_handles_are_unique() {
        let a = ScreenHandle::new();
        let b = ScreenHandle::new();
        assert_ne!(a, b);
    }

    #[test]
    fn duration_presets_have_documented_lengths() {
        assert_eq!(Duration::Short.length(), StdDuration::from_secs(2));
        assert_eq!(Duration::Average.length(), StdDuration::from_secs(4));
        assert_eq!(Duration::Long.length(), StdDuration::from_secs(8));
        assert_eq!(
            Duration::Custom(5.5).length(),
            StdDuration::from_secs_f32(5.5)
        );
    }

    #[test]
    fn negative_custom_duration_clamps_to_zero() {
        assert_eq!(Duration::Custom(-1.0).length(), StdDuration::ZERO);
    }

    #[test]
    fn new_toast_uses_defaults_until_shown() {
        let toast = Toast::new("saved", ScreenHandle::new());
        assert_eq!(toast.location(), Location::Top);
        assert_eq!(toast.presenting_direction(), Direction::Vertical);
        assert_eq!(toast.dismissing_direction(), Direction::Vertical);
        assert_eq!(toast.duration(), Duration::Average);
        assert!(toast.action().is_empty());
    }

    #[test]
    fn set_shown_fixes_duration_and_handler() {
        let mut toast = Toast::new("saved", ScreenHandle::new());
        toast.set_shown(Duration::Short, Some(Box::new(|_| {})));
        assert_eq!(toast.duration(), Duration::Short);
        assert!(toast.take_completion().is_some());
        // The handler is one-shot
        assert!(toast.take_completion().is_none());
    }

    #[test]
    fn builder_sets_directions_independently() {
        let toast = Toast::new("moved", ScreenHandle::new())
            .with_presenting_direction(Direction::Left)
            .with_dismissing_direction(Direction::Vertical);
        assert_eq!(toast.presenting_direction(), Direction::Left);
        assert_eq!(toast.dismissing_direction(), Direction::Vertical);
    }
}
