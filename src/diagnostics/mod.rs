// SPDX-License-Identifier: MPL-2.0
//! Optional lifecycle telemetry for the presentation pipeline.
//!
//! Call sites hold a cheap, cloneable [`DiagnosticsHandle`] and log
//! [`ToastEvent`]s without blocking; a [`DiagnosticsCollector`] drains the
//! channel into a memory-bounded ring buffer for later inspection. The
//! presenter logs enqueue, present, dismiss (with reason), and
//! dropped-dead-owner events when a handle is attached via
//! [`Presenter::set_diagnostics`](crate::presenter::Presenter::set_diagnostics).
//!
//! Everything here is opt-in: a presenter without a handle logs nothing
//! and pays nothing.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, ToastEvent};
