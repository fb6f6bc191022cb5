// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the toast lifecycle.

use crate::toast::DismissalReason;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lifecycle event the presenter reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToastEvent {
    /// A descriptor was appended to the queue.
    Enqueued,
    /// A descriptor was dequeued and its surface handed to the host.
    Presented,
    /// The presented surface completed its dismissal sequence.
    Dismissed { reason: DismissalReason },
    /// A queued descriptor was discarded because its owner was gone at
    /// dequeue time.
    DroppedDeadOwner,
}

/// A [`ToastEvent`] stamped with its capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: ToastEvent,
}

impl DiagnosticEvent {
    pub fn new(kind: ToastEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}
