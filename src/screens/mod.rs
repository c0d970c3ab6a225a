// SPDX-License-Identifier: MIT

//! Screen state machines: per-screen models, messages, and update functions.
//!
//! Screens hold state and decide, they never render. Each `update` is pure
//! over its model; side effects are requested through screen-level command
//! enums that the root kernel translates into [`crate::mvu::Command`]s.

pub mod generate;
pub mod scan;

/// User-visible outcome a screen hands up to the root status/error display.
pub struct ScreenEvent {
    pub message: String,
    pub is_error: bool,
}
