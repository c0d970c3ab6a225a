// SPDX-License-Identifier: MIT

//! Dial intent backed by the operating system URI handler.

use anyhow::{Context, Result};

use super::Dialer;
use crate::logic::phone::TEL_PREFIX;
use crate::models::phone::PhoneNumber;

/// [`Dialer`] that opens a `tel:` URI with the OS default handler.
///
/// On desktop this lands in whatever application claims the `tel` scheme;
/// mobile shells replace it with a native dial intent.
#[derive(Debug, Default)]
pub struct SystemDialer;

impl Dialer for SystemDialer {
    fn dial(&mut self, number: &PhoneNumber) -> Result<()> {
        let uri = format!("{TEL_PREFIX}{number}");
        open::that(&uri).with_context(|| format!("Failed to open dial intent {uri}"))
    }
}
