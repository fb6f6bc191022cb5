// SPDX-License-Identifier: MPL-2.0
//! Toast presentation service.
//!
//! The [`Presenter`] is the serialization authority: it owns the FIFO
//! queue of pending descriptors, the single busy flag, and the currently
//! presented [`Surface`]. It is an explicit object — create one at your
//! composition root and inject it into call sites; there is no hidden
//! global. All methods run on the UI thread; there is no parallel
//! mutation and no locking.
//!
//! # Flow
//!
//! A caller builds a [`Toast`](crate::Toast) and hands it to
//! [`Presenter::show`]. The presenter enqueues it and, when idle, binds it
//! to a fresh surface, computes its transition frames, and asks the
//! [`Host`] to display it. The host delivers [`SurfaceEvent`]s back
//! (animation completions, taps, timer fires); when the exit animation
//! finishes the presenter invokes the completion handler, clears the busy
//! flag, and presents the next queued toast — strictly in enqueue order,
//! never overlapping.

pub mod surface;
pub mod timer;
pub mod transition;
mod view;

pub use surface::{Phase, Surface, SurfaceEvent, SurfaceId, TimerToken};
pub use timer::{DismissScheduler, ScheduledDismiss};
pub use transition::{TransitionController, TransitionFrames, COSMETIC_INSET};

use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use crate::host::Host;
use crate::toast::{CompletionHandler, DismissalReason, Duration, ScreenHandle, Toast};
use iced_core::Rectangle;
use std::collections::VecDeque;
use std::time::Duration as StdDuration;

/// Queue manager and presentation state machine. One per process.
pub struct Presenter {
    host: Box<dyn Host>,
    queue: VecDeque<Toast>,
    busy: bool,
    current: Option<Surface>,
    cosmetic_inset: f32,
    animation: StdDuration,
    default_duration: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Presenter {
    /// Creates a presenter over `host` with default configuration.
    #[must_use]
    pub fn new(host: Box<dyn Host>) -> Self {
        Self::with_config(host, &Config::default())
    }

    /// Creates a presenter with explicit configuration.
    #[must_use]
    pub fn with_config(host: Box<dyn Host>, config: &Config) -> Self {
        Self {
            host,
            queue: VecDeque::new(),
            busy: false,
            current: None,
            cosmetic_inset: config.cosmetic_inset(),
            animation: config.animation(),
            default_duration: Duration::Custom(config.default_duration_secs()),
            diagnostics: None,
        }
    }

    /// Attaches a diagnostics handle; lifecycle events are logged to it
    /// from then on.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Fixes `toast`'s duration and completion handler, then enqueues it
    /// and presents immediately if nothing else is on screen.
    pub fn show(
        &mut self,
        mut toast: Toast,
        duration: Duration,
        completion: Option<CompletionHandler>,
    ) {
        toast.set_shown(duration, completion);
        self.enqueue_and_attempt(toast);
    }

    /// [`show`](Self::show) with the configured default duration.
    pub fn show_with_default_duration(
        &mut self,
        toast: Toast,
        completion: Option<CompletionHandler>,
    ) {
        self.show(toast, self.default_duration, completion);
    }

    /// Appends `toast` to the queue tail and attempts a presentation.
    pub fn enqueue_and_attempt(&mut self, toast: Toast) {
        self.log(ToastEvent::Enqueued);
        self.queue.push_back(toast);
        self.attempt_present();
    }

    /// Dismisses the currently presented toast on behalf of `owner`.
    ///
    /// No-op when nothing is presented or the presented toast belongs to
    /// a different owner. The surface runs through the normal dismissal
    /// sequence with reason [`DismissalReason::Manual`]; with
    /// `animated == false` the exit completes synchronously.
    pub fn dismiss_current(&mut self, owner: ScreenHandle, animated: bool) {
        if !self.busy {
            return;
        }
        let owned = self
            .current
            .as_ref()
            .is_some_and(|surface| surface.toast().owner() == owner);
        if owned {
            self.begin_dismiss(DismissalReason::Manual, animated);
        }
    }

    /// Routes a host-delivered event into the current surface.
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::PresentAnimationFinished => {
                let Some(surface) = self.current.as_mut() else {
                    return;
                };
                if let Some(token) = surface.enter_visible() {
                    let delay = surface.toast().duration().length();
                    self.host.schedule_dismiss(token, delay);
                }
            }
            SurfaceEvent::Tapped => self.begin_dismiss(DismissalReason::Tapped, true),
            SurfaceEvent::ActionActivated => {
                self.begin_dismiss(DismissalReason::PerformedAction, true);
            }
            SurfaceEvent::TimerFired(token) => {
                let current = self
                    .current
                    .as_ref()
                    .is_some_and(|surface| surface.timer_is_current(token));
                if current {
                    self.begin_dismiss(DismissalReason::TimedOut, true);
                }
            }
            SurfaceEvent::DismissAnimationFinished => self.finish_dismissal(),
        }
    }

    /// The presented toast's resting rectangle, recomputed from the
    /// container's current bounds. Call from the host's layout pass after
    /// a rotation or resize.
    #[must_use]
    pub fn resting_frame(&self) -> Option<Rectangle> {
        self.current.as_ref().map(|surface| {
            TransitionController::new(surface.toast(), self.host.as_ref())
                .with_cosmetic_inset(self.cosmetic_inset)
                .resting_frame()
        })
    }

    /// The currently presented surface, if any.
    #[must_use]
    pub fn current_surface(&self) -> Option<&Surface> {
        self.current.as_ref()
    }

    /// Whether a toast is currently on screen (from dequeue until its
    /// dismissal notification is processed).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Number of descriptors waiting behind the presented toast.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Suggested length for enter/exit animations.
    #[must_use]
    pub fn animation_duration(&self) -> StdDuration {
        self.animation
    }

    /// Pops queued descriptors until one with a live owner is found and
    /// presents it. Descriptors whose owners are gone are dropped
    /// silently. No-op while busy.
    fn attempt_present(&mut self) {
        if self.busy {
            return;
        }
        while let Some(toast) = self.queue.pop_front() {
            if !self.host.is_owner_live(toast.owner()) {
                self.log(ToastEvent::DroppedDeadOwner);
                continue;
            }

            let mut surface = Surface::new(toast);
            surface.begin_presenting();
            let frames = TransitionController::new(surface.toast(), self.host.as_ref())
                .with_cosmetic_inset(self.cosmetic_inset)
                .present_frames();

            self.busy = true;
            self.host.present(&surface, frames);
            self.log(ToastEvent::Presented);
            self.current = Some(surface);
            return;
        }
    }

    fn begin_dismiss(&mut self, reason: DismissalReason, animated: bool) {
        let Some(surface) = self.current.as_mut() else {
            return;
        };
        if !surface.begin_dismissing(reason) {
            return;
        }
        let frames = TransitionController::new(surface.toast(), self.host.as_ref())
            .with_cosmetic_inset(self.cosmetic_inset)
            .dismiss_frames();
        self.host.dismiss(surface, frames, animated);

        if !animated {
            self.finish_dismissal();
        }
    }

    /// Completes the dismissal sequence: completion handler first, then
    /// busy flag cleared and the next presentation attempted — in that
    /// order, on the same call, so the next toast can never render over a
    /// still-fading predecessor.
    fn finish_dismissal(&mut self) {
        let Some(mut surface) = self.current.take() else {
            return;
        };
        match surface.finish() {
            Some((reason, completion)) => {
                if let Some(handler) = completion {
                    handler(reason);
                }
                self.log(ToastEvent::Dismissed { reason });
                self.busy = false;
                self.attempt_present();
            }
            // Stray completion event; the surface stays where it was.
            None => self.current = Some(surface),
        }
    }

    fn log(&self, event: ToastEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}
