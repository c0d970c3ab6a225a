// SPDX-License-Identifier: MIT

//! Application core for qrdial, a phone-number QR assistant.
//!
//! One user generates a QR code carrying their phone number as a `tel:`
//! payload; another user scans it and the app places the call. This crate
//! holds everything below the platform shell: the payload codec, the
//! generate/scan screen state machines, theme preferences, and the
//! Model-View-Update kernel. Cameras, QR rasterization, the share sheet,
//! the print service, the dial intent, and the phone-auth identity service
//! are reached only through the narrow traits in [`services`], so the whole
//! core runs and tests without any platform present.

pub mod logic;
pub mod models;
pub mod mvu;
pub mod screens;
pub mod services;
pub mod settings;
