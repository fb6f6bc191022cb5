// SPDX-License-Identifier: MPL-2.0
//! Cancellable dismissal timer, for hosts driven by a tokio runtime.
//!
//! The presentation core only requires that *some* mechanism delivers
//! [`SurfaceEvent::TimerFired`](super::SurfaceEvent) after the toast's
//! duration; the token generation guard already neutralizes late fires.
//! This module provides a ready-made implementation: each armed timer is
//! one spawned task racing a sleep against a cancellation signal, and
//! fired tokens arrive on a channel the host forwards into
//! [`Presenter::handle_event`](super::Presenter::handle_event).

use super::surface::TimerToken;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::sleep;

/// Spawns one cancellable task per armed dismissal timer.
#[derive(Debug, Clone)]
pub struct DismissScheduler {
    tx: mpsc::UnboundedSender<TimerToken>,
}

impl DismissScheduler {
    /// Creates a scheduler and the receiving end of its token channel.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Arms a timer that sends `token` after `delay`.
    ///
    /// The returned guard cancels the timer when dropped; hold it for as
    /// long as the schedule should stand, or call
    /// [`ScheduledDismiss::cancel`] to cancel it explicitly.
    #[must_use]
    pub fn schedule(&self, token: TimerToken, delay: Duration) -> ScheduledDismiss {
        let tx = self.tx.clone();
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::select! {
                () = sleep(delay) => {
                    let _ = tx.send(token);
                }
                _ = cancel_rx => {}
            }
        });
        ScheduledDismiss { cancel: cancel_tx }
    }
}

/// Guard for one armed timer. Dropping it cancels the schedule.
#[derive(Debug)]
pub struct ScheduledDismiss {
    cancel: oneshot::Sender<()>,
}

impl ScheduledDismiss {
    /// Cancels the schedule; the token will never be delivered.
    pub fn cancel(self) {
        let _ = self.cancel.send(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::surface::Surface;
    use crate::toast::{ScreenHandle, Toast};

    fn token() -> TimerToken {
        let mut surface = Surface::new(Toast::new("m", ScreenHandle::new()));
        surface.begin_presenting();
        surface.enter_visible().expect("freshly presenting surface")
    }

    #[tokio::test(start_paused = true)]
    async fn fires_at_the_deadline_not_before() {
        let (scheduler, mut rx) = DismissScheduler::new();
        let token = token();
        let _guard = scheduler.schedule(token, Duration::from_secs(2));

        let early = tokio::time::timeout(Duration::from_millis(1990), rx.recv()).await;
        assert!(early.is_err(), "timer must not fire before the deadline");

        let fired = tokio::time::timeout(Duration::from_millis(50), rx.recv())
            .await
            .expect("timer fires at the deadline")
            .expect("channel stays open");
        assert_eq!(fired, token);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_schedule_never_fires() {
        let (scheduler, mut rx) = DismissScheduler::new();
        let guard = scheduler.schedule(token(), Duration::from_secs(2));
        guard.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_guard_cancels() {
        let (scheduler, mut rx) = DismissScheduler::new();
        let guard = scheduler.schedule(token(), Duration::from_secs(2));
        drop(guard);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn independent_schedules_deliver_their_own_tokens() {
        let (scheduler, mut rx) = DismissScheduler::new();
        let first = token();
        let second = token();
        let _a = scheduler.schedule(first, Duration::from_secs(1));
        let _b = scheduler.schedule(second, Duration::from_secs(2));

        let one = rx.recv().await.expect("first fire");
        let two = rx.recv().await.expect("second fire");
        assert_eq!(one, first);
        assert_eq!(two, second);
    }
}
