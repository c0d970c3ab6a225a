// SPDX-License-Identifier: MIT

//! Delegated phone-auth identity provider.
//!
//! Sign-in is a two-step exchange: the provider sends a one-time code over
//! SMS and returns a pending [`Confirmation`]; the user-entered code is then
//! verified against that confirmation. The actual provider (SMS delivery,
//! account state) lives outside this crate.

use anyhow::Result;
use uuid::Uuid;

use crate::models::phone::PhoneNumber;

/// Pending sign-in session returned by [`IdentityProvider::send_code`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    session: Uuid,
    number: PhoneNumber,
}

impl Confirmation {
    pub fn new(number: PhoneNumber) -> Self {
        Self {
            session: Uuid::new_v4(),
            number,
        }
    }

    /// Provider-side session identifier.
    pub fn session(&self) -> Uuid {
        self.session
    }

    /// The number awaiting verification.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}

/// Contract for the third-party phone-auth service.
pub trait IdentityProvider {
    /// Send a one-time code to `number` and open a pending confirmation.
    fn send_code(&mut self, number: &PhoneNumber) -> Result<Confirmation>;

    /// Verify a user-entered code against a pending confirmation.
    fn verify_code(&mut self, confirmation: &Confirmation, code: &str) -> Result<()>;
}
