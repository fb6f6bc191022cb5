// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for presentation constants.
//!
//! Single source of truth for every configurable default; [`Config`]
//! accessors fall back to these when a field is absent.
//!
//! [`Config`]: super::Config

/// Default length of enter/exit animations (in milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Default visible duration for `show_with_default_duration` (in seconds).
/// Matches the `Average` duration preset.
pub const DEFAULT_DURATION_SECS: f32 = 4.0;

/// Default cosmetic padding between a toast and the container edge.
pub const DEFAULT_COSMETIC_INSET: f32 = 10.0;
