// SPDX-License-Identifier: MPL-2.0
//! `iced_crouton` presents transient toast notifications for applications
//! built with the Iced GUI toolkit.
//!
//! Callers build a [`Toast`] — message, optional action button, style,
//! placement, and directional enter/exit animations — and hand it to a
//! [`Presenter`], which guarantees that exactly one toast is visible at a
//! time and serializes the rest in a FIFO queue. Toasts dismiss on tap,
//! action, timeout, or an explicit call, and report the reason through an
//! optional completion handler.
//!
//! The library never touches the host's view hierarchy directly: geometry
//! queries, screen liveness, and presentation commands go through the
//! [`Host`] trait, which keeps the whole pipeline testable without a
//! window.
//!
//! ```no_run
//! use iced_crouton::{Presenter, ScreenHandle, Toast};
//! use iced_crouton::toast::Duration;
//! # fn host() -> Box<dyn iced_crouton::Host> { unimplemented!() }
//!
//! let mut presenter = Presenter::new(host());
//! let screen = ScreenHandle::new();
//!
//! presenter.show(
//!     Toast::new("Image saved", screen).with_action("Undo"),
//!     Duration::Short,
//!     Some(Box::new(|reason| println!("dismissed: {reason:?}"))),
//! );
//! ```

#![doc(html_root_url = "https://docs.rs/iced_crouton/0.1.0")]

pub mod config;
pub mod design_tokens;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod presenter;
pub mod style;
pub mod toast;

#[cfg(test)]
pub mod test_utils;

pub use host::{ContainerGeometry, Host};
pub use presenter::{Presenter, Surface, SurfaceEvent};
pub use style::{ContentAlignment, Style, Width};
pub use toast::{DismissalReason, Direction, Duration, Location, ScreenHandle, Toast};
