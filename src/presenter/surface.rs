// SPDX-License-Identifier: MPL-2.0
//! The on-screen surface of a single toast.
//!
//! A [`Surface`] is a one-shot state machine bound to exactly one
//! descriptor for its whole life:
//!
//! ```text
//! Constructed -> Presenting -> Visible -> Dismissing -> Dismissed
//! ```
//!
//! It is never reused. The four dismissal triggers (tap, action button,
//! timer, manual call) race through a single guard: the first to observe a
//! dismissible phase records its reason, every later trigger is a no-op.
//! Timer fires additionally carry a generation-checked [`TimerToken`], so
//! a scheduled fire that lost the race is harmless even if it is delivered
//! late.

use crate::toast::{CompletionHandler, DismissalReason, Toast};

/// Unique identity of a surface, distinguishing timer tokens across
/// successive presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Proof that a timer fire belongs to the currently armed timer of the
/// currently presented surface. Stale tokens are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    surface: SurfaceId,
    generation: u64,
}

/// Events the host delivers back into the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The enter animation completed; the surface is now resting.
    PresentAnimationFinished,
    /// The surface was tapped anywhere.
    Tapped,
    /// The action button was activated.
    ActionActivated,
    /// A scheduled dismissal timer fired.
    TimerFired(TimerToken),
    /// The exit animation completed; the surface is off screen.
    DismissAnimationFinished,
}

/// Lifecycle phase of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Constructed,
    Presenting,
    Visible,
    Dismissing(DismissalReason),
    /// Terminal; the surface is discarded after reaching this phase.
    Dismissed,
}

/// A toast bound to the screen, tracking its presentation lifecycle.
#[derive(Debug)]
pub struct Surface {
    id: SurfaceId,
    toast: Toast,
    phase: Phase,
    timer_generation: u64,
}

impl Surface {
    pub(crate) fn new(toast: Toast) -> Self {
        Self {
            id: SurfaceId::new(),
            toast,
            phase: Phase::Constructed,
            timer_generation: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `Constructed -> Presenting`, on being handed to the host.
    pub(crate) fn begin_presenting(&mut self) -> bool {
        if self.phase == Phase::Constructed {
            self.phase = Phase::Presenting;
            true
        } else {
            false
        }
    }

    /// `Presenting -> Visible`, once the enter animation completes.
    /// Returns the token for the dismissal timer armed by this transition.
    pub(crate) fn enter_visible(&mut self) -> Option<TimerToken> {
        if self.phase != Phase::Presenting {
            return None;
        }
        self.phase = Phase::Visible;
        self.timer_generation += 1;
        Some(TimerToken {
            surface: self.id,
            generation: self.timer_generation,
        })
    }

    /// Whether a timer fire still refers to this surface's armed timer.
    pub(crate) fn timer_is_current(&self, token: TimerToken) -> bool {
        token.surface == self.id
            && token.generation == self.timer_generation
            && self.phase == Phase::Visible
    }

    /// First-wins dismissal guard: transitions to `Dismissing` with
    /// `reason` if the surface is still presentable, returns `false` for
    /// every later (losing) trigger.
    ///
    /// Triggers are accepted from `Presenting` as well as `Visible`: a
    /// manual dismissal may arrive while the card is still sliding in.
    pub(crate) fn begin_dismissing(&mut self, reason: DismissalReason) -> bool {
        match self.phase {
            Phase::Presenting | Phase::Visible => {
                self.phase = Phase::Dismissing(reason);
                true
            }
            Phase::Constructed | Phase::Dismissing(_) | Phase::Dismissed => false,
        }
    }

    /// `Dismissing -> Dismissed`. Releases the recorded reason and the
    /// one-shot completion handler; returns `None` for stray completion
    /// events in any other phase.
    pub(crate) fn finish(&mut self) -> Option<(DismissalReason, Option<CompletionHandler>)> {
        match self.phase {
            Phase::Dismissing(reason) => {
                self.phase = Phase::Dismissed;
                Some((reason, self.toast.take_completion()))
            }
            _ => None,
        }
    }
}
