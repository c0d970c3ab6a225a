// SPDX-License-Identifier: MIT

//! Capability interfaces for platform integrations.
//!
//! Every platform touchpoint (dial intent, share sheet, print service,
//! camera permission prompt, identity provider) sits behind its own narrow
//! trait so the kernel and the codec run with zero platform dependencies.
//! The embedding shell supplies real implementations; tests supply
//! recording doubles.

pub mod dialer;
pub mod identity;

use anyhow::Result;

use crate::models::phone::{PhoneNumber, QrPayload};

/// Hand a `tel:` URI to the operating system to place a call.
pub use dialer::SystemDialer;
/// Delegated phone-auth provider contract.
pub use identity::{Confirmation, IdentityProvider};

/// Dial intent: ask the OS to initiate a call.
pub trait Dialer {
    fn dial(&mut self, number: &PhoneNumber) -> Result<()>;
}

/// Presentation of a rendered QR image to the user.
///
/// Rasterizing the payload into an image is the platform's job; this trait
/// only receives the exact text to encode.
pub trait QrPresenter {
    /// Open the platform share sheet with the rendered code.
    fn share(&mut self, payload: &QrPayload) -> Result<()>;

    /// Send the rendered code to the platform print service.
    fn print(&mut self, payload: &QrPayload) -> Result<()>;
}

/// Camera permission prompt.
pub trait CameraAccess {
    /// Prompt the user for camera access; returns whether it was granted.
    fn request_permission(&mut self) -> bool;
}

/// Bundle of platform services handed to [`crate::mvu::run_command`].
pub struct Platform<'a> {
    pub dialer: &'a mut dyn Dialer,
    pub presenter: &'a mut dyn QrPresenter,
    pub camera: &'a mut dyn CameraAccess,
    pub identity: &'a mut dyn IdentityProvider,
}
