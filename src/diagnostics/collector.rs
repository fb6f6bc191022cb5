// SPDX-License-Identifier: MPL-2.0
//! Collector pairing: a non-blocking sending handle and the draining side.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, ToastEvent};

/// Default ring-buffer capacity.
const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// Default channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Sending side. Cheap to clone and share.
///
/// Logging never blocks: when the channel is full the event is dropped,
/// protecting the UI thread from backpressure.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle event, timestamped now.
    pub fn log(&self, event: ToastEvent) {
        let _ = self.tx.try_send(DiagnosticEvent::new(event));
    }
}

/// Receiving side: drains handle events into a bounded ring buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector and its handle with default capacities.
    #[must_use]
    pub fn new() -> (DiagnosticsHandle, Self) {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a collector with explicit buffer and channel capacities.
    #[must_use]
    pub fn with_capacity(
        buffer_capacity: usize,
        channel_capacity: usize,
    ) -> (DiagnosticsHandle, Self) {
        let (tx, rx) = bounded(channel_capacity.max(1));
        (
            DiagnosticsHandle { tx },
            Self {
                rx,
                buffer: CircularBuffer::with_capacity(buffer_capacity),
            },
        )
    }

    /// Moves all pending channel events into the buffer. Call
    /// periodically (or before reading) from wherever the collector
    /// lives.
    pub fn drain(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Captured events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::DismissalReason;

    #[test]
    fn logged_events_arrive_in_order() {
        let (handle, mut collector) = DiagnosticsCollector::new();
        handle.log(ToastEvent::Enqueued);
        handle.log(ToastEvent::Presented);
        handle.log(ToastEvent::Dismissed {
            reason: DismissalReason::Tapped,
        });

        collector.drain();
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ToastEvent::Enqueued,
                ToastEvent::Presented,
                ToastEvent::Dismissed {
                    reason: DismissalReason::Tapped
                },
            ]
        );
    }

    #[test]
    fn full_channel_drops_events_silently() {
        let (handle, mut collector) = DiagnosticsCollector::with_capacity(16, 2);
        for _ in 0..5 {
            handle.log(ToastEvent::Enqueued);
        }
        collector.drain();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn buffer_keeps_only_the_newest_events() {
        let (handle, mut collector) = DiagnosticsCollector::with_capacity(2, 16);
        handle.log(ToastEvent::Enqueued);
        handle.log(ToastEvent::Presented);
        handle.log(ToastEvent::DroppedDeadOwner);

        collector.drain();
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![ToastEvent::Presented, ToastEvent::DroppedDeadOwner]
        );
    }

    #[test]
    fn clones_of_a_handle_feed_the_same_collector() {
        let (handle, mut collector) = DiagnosticsCollector::new();
        let other = handle.clone();
        handle.log(ToastEvent::Enqueued);
        other.log(ToastEvent::Presented);

        collector.drain();
        assert_eq!(collector.len(), 2);
    }
}
