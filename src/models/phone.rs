// SPDX-License-Identifier: MIT

//! Validated phone-number and QR-payload newtypes.
//!
//! Both types are only constructed by [`crate::logic::phone`], so holding one
//! means the value already passed validation. Neither is ever persisted; a
//! value lives for the duration of one generate-or-scan interaction.

use std::fmt;

/// A normalized telephone number: an optional leading `+` followed by
/// 10 to 15 ASCII decimal digits, no whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The literal text embedded in a QR barcode image: `tel:` followed by a
/// normalized [`PhoneNumber`] with a mandatory leading `+`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrPayload(String);

impl QrPayload {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// The exact string a QR renderer should rasterize.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
