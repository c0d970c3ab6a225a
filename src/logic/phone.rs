// SPDX-License-Identifier: MIT

//! Phone-number to QR-payload codec.
//!
//! Responsibilities:
//! - Normalize raw keyboard input into a canonical `tel:` payload for QR
//!   generation.
//! - Parse text scanned from a QR image back into a dialable number.
//!
//! Encoding and decoding deliberately validate at different strictness
//! levels. The generation side owns its normalization and always emits a
//! leading `+` (bare digit strings are treated as implicitly international).
//! The scanning side must accept codes produced by earlier, laxer encoders
//! and by unrelated QR generators, so the `tel:` prefix and the `+` are both
//! optional there. Keep the two patterns separate; unifying them silently
//! changes the accepted input sets.

use thiserror::Error;

use crate::models::phone::{PhoneNumber, QrPayload};

/// URI scheme prefix embedded in generated payloads.
pub const TEL_PREFIX: &str = "tel:";

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Rejection raised by [`encode`] and [`decode`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Input did not normalize to `+` plus 10-15 digits. Carries the
    /// original input so the UI can echo it back to the user.
    #[error("not a valid phone number: {raw:?}")]
    InvalidFormat { raw: String },
}

/// Build the canonical QR payload for a user-entered phone number.
///
/// Whitespace is stripped anywhere in the input, a missing leading `+` is
/// prepended, and the result must be `+` followed by 10-15 decimal digits.
/// Pure: identical input always yields identical output.
///
/// # Errors
///
/// [`ValidationError::InvalidFormat`] when the normalized input does not
/// match the strict pattern, including empty or whitespace-only input.
pub fn encode(raw: &str) -> Result<QrPayload, ValidationError> {
    let cleaned = strip_whitespace(raw);
    let normalized = if cleaned.starts_with('+') {
        cleaned
    } else {
        format!("+{cleaned}")
    };

    if !digits_in_range(&normalized[1..]) {
        return Err(ValidationError::InvalidFormat {
            raw: raw.to_string(),
        });
    }

    Ok(QrPayload::new(format!("{TEL_PREFIX}{normalized}")))
}

/// Parse text read from a QR image into a dialable number.
///
/// A literal leading `tel:` is stripped when present; payloads without it
/// are accepted as-is since third-party codes never carried the scheme.
/// After whitespace removal the remainder must match the permissive
/// pattern: optional `+`, then 10-15 decimal digits. A scanned `+` is
/// preserved, a missing one is NOT prepended.
///
/// # Errors
///
/// [`ValidationError::InvalidFormat`] when the cleaned remainder does not
/// match the permissive pattern.
pub fn decode(scanned: &str) -> Result<PhoneNumber, ValidationError> {
    let body = scanned.strip_prefix(TEL_PREFIX).unwrap_or(scanned);
    normalize_lenient(body).map_err(|_| ValidationError::InvalidFormat {
        raw: scanned.to_string(),
    })
}

/// Normalize and validate with the permissive pattern (`+` optional).
///
/// Shared by [`decode`] and by the sign-in flow, which accepts numbers the
/// same way the identity provider does, without forcing the `+`.
pub fn normalize_lenient(raw: &str) -> Result<PhoneNumber, ValidationError> {
    let cleaned = strip_whitespace(raw);
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);

    if !digits_in_range(digits) {
        return Err(ValidationError::InvalidFormat {
            raw: raw.to_string(),
        });
    }

    Ok(PhoneNumber::new(cleaned))
}

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn digits_in_range(digits: &str) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}
