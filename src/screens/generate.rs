// SPDX-License-Identifier: MIT

//! Generate-tab state machine: phone entry, OTP verification, QR display.
//!
//! The user signs in with their phone number before a code is issued: enter
//! the number, receive a one-time code over SMS, verify it, then the QR
//! payload appears. Sign-in validates with the lenient pattern (the identity
//! provider accepts numbers without a `+`), but the payload itself always
//! goes through the strict encoder so generated codes are canonical.

use crate::logic::phone::{self, ValidationError};
use crate::models::phone::{PhoneNumber, QrPayload};
use crate::services::identity::Confirmation;

/// Which part of the flow is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerateStep {
    #[default]
    Phone,
    Otp,
    Qr,
}

/// Generate screen state.
#[derive(Default)]
pub struct GenerateModel {
    pub step: GenerateStep,
    /// Raw text from the phone-number field.
    pub phone_input: String,
    /// Raw text from the OTP field.
    pub otp_input: String,
    /// Pending sign-in session, present between send and verify.
    pub confirmation: Option<Confirmation>,
    /// Payload to hand to the QR renderer once verified.
    pub qr: Option<QrPayload>,
    /// Inline error shown under the active input.
    pub error: Option<String>,
}

/// Messages handled by this screen.
pub enum GenerateMsg {
    PhoneChanged(String),
    OtpChanged(String),
    /// Send (or resend) the one-time code.
    SendSmsRequested,
    CodeSent(Result<Confirmation, String>),
    VerifyRequested,
    CodeVerified(Result<(), String>),
}

/// Side effects requested by this screen.
pub enum GenerateCommand {
    SendSignInCode(PhoneNumber),
    VerifyCode {
        confirmation: Confirmation,
        code: String,
    },
}

/// Advance the generate flow.
pub fn update(model: &mut GenerateModel, msg: GenerateMsg, cmds: &mut Vec<GenerateCommand>) {
    match msg {
        GenerateMsg::PhoneChanged(text) => model.phone_input = text,
        GenerateMsg::OtpChanged(text) => model.otp_input = text,
        GenerateMsg::SendSmsRequested => {
            if model.phone_input.trim().is_empty() {
                model.error = Some("Please enter a phone number.".to_string());
                return;
            }
            match phone::normalize_lenient(&model.phone_input) {
                Ok(number) => {
                    model.error = None;
                    cmds.push(GenerateCommand::SendSignInCode(number));
                }
                Err(ValidationError::InvalidFormat { .. }) => {
                    model.error =
                        Some("Invalid phone number format (e.g., +1234567890).".to_string());
                }
            }
        }
        GenerateMsg::CodeSent(result) => match result {
            Ok(confirmation) => {
                model.confirmation = Some(confirmation);
                model.step = GenerateStep::Otp;
                model.error = None;
            }
            Err(err) => {
                model.error = Some(if err.is_empty() {
                    "Failed to send SMS.".to_string()
                } else {
                    err
                });
            }
        },
        GenerateMsg::VerifyRequested => {
            if model.otp_input.trim().is_empty() {
                model.error = Some("Please enter the OTP.".to_string());
                return;
            }
            match &model.confirmation {
                Some(confirmation) => {
                    model.error = None;
                    cmds.push(GenerateCommand::VerifyCode {
                        confirmation: confirmation.clone(),
                        code: model.otp_input.trim().to_string(),
                    });
                }
                None => model.error = Some("No confirmation pending.".to_string()),
            }
        }
        GenerateMsg::CodeVerified(result) => match result {
            Ok(()) => match phone::encode(&model.phone_input) {
                Ok(payload) => {
                    model.qr = Some(payload);
                    model.confirmation = None;
                    model.otp_input.clear();
                    model.step = GenerateStep::Qr;
                    model.error = None;
                }
                Err(ValidationError::InvalidFormat { .. }) => {
                    // Verified against an edited input; force re-entry.
                    model.step = GenerateStep::Phone;
                    model.confirmation = None;
                    model.error =
                        Some("Invalid phone number format (e.g., +1234567890).".to_string());
                }
            },
            Err(err) => {
                model.error = Some(if err.is_empty() {
                    "Invalid OTP. Try again.".to_string()
                } else {
                    err
                });
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::phone::PhoneNumber;

    fn enter_phone(model: &mut GenerateModel, text: &str) -> Vec<GenerateCommand> {
        let mut cmds = Vec::new();
        update(model, GenerateMsg::PhoneChanged(text.to_string()), &mut cmds);
        update(model, GenerateMsg::SendSmsRequested, &mut cmds);
        cmds
    }

    #[test]
    fn empty_phone_sets_error_without_command() {
        let mut model = GenerateModel::default();
        let cmds = enter_phone(&mut model, "   ");

        assert!(cmds.is_empty());
        assert_eq!(model.error.as_deref(), Some("Please enter a phone number."));
    }

    #[test]
    fn invalid_phone_never_reaches_the_provider() {
        let mut model = GenerateModel::default();
        let cmds = enter_phone(&mut model, "12345");

        assert!(cmds.is_empty());
        assert!(
            model
                .error
                .as_deref()
                .is_some_and(|e| e.contains("Invalid phone number"))
        );
    }

    #[test]
    fn valid_phone_requests_sign_in_code() {
        let mut model = GenerateModel::default();
        let cmds = enter_phone(&mut model, "123 456 7890");

        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            GenerateCommand::SendSignInCode(number) => assert_eq!(number.as_str(), "1234567890"),
            _ => panic!("unexpected command"),
        }
        assert!(model.error.is_none());
    }

    #[test]
    fn happy_path_ends_with_canonical_payload() {
        let mut model = GenerateModel::default();
        enter_phone(&mut model, "123 456 7890");

        let confirmation = Confirmation::new(PhoneNumber::new("1234567890".into()));
        let mut cmds = Vec::new();
        update(
            &mut model,
            GenerateMsg::CodeSent(Ok(confirmation)),
            &mut cmds,
        );
        assert_eq!(model.step, GenerateStep::Otp);

        update(
            &mut model,
            GenerateMsg::OtpChanged("123456".to_string()),
            &mut cmds,
        );
        update(&mut model, GenerateMsg::VerifyRequested, &mut cmds);
        assert!(matches!(
            cmds.last(),
            Some(GenerateCommand::VerifyCode { code, .. }) if code == "123456"
        ));

        update(&mut model, GenerateMsg::CodeVerified(Ok(())), &mut cmds);
        assert_eq!(model.step, GenerateStep::Qr);
        assert_eq!(
            model.qr.as_ref().map(|q| q.as_str()),
            Some("tel:+1234567890")
        );
        assert!(model.confirmation.is_none());
    }

    #[test]
    fn provider_failure_keeps_current_step() {
        let mut model = GenerateModel::default();
        enter_phone(&mut model, "1234567890");

        let mut cmds = Vec::new();
        update(
            &mut model,
            GenerateMsg::CodeSent(Err("quota exceeded".to_string())),
            &mut cmds,
        );

        assert_eq!(model.step, GenerateStep::Phone);
        assert_eq!(model.error.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn verify_without_pending_confirmation_errors() {
        let mut model = GenerateModel::default();
        model.otp_input = "123456".to_string();

        let mut cmds = Vec::new();
        update(&mut model, GenerateMsg::VerifyRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.error.as_deref(), Some("No confirmation pending."));
    }

    #[test]
    fn empty_otp_sets_error_without_command() {
        let mut model = GenerateModel::default();
        model.confirmation = Some(Confirmation::new(PhoneNumber::new("+1234567890".into())));

        let mut cmds = Vec::new();
        update(&mut model, GenerateMsg::VerifyRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.error.as_deref(), Some("Please enter the OTP."));
    }

    #[test]
    fn failed_verification_allows_retry() {
        let mut model = GenerateModel::default();
        model.confirmation = Some(Confirmation::new(PhoneNumber::new("+1234567890".into())));
        model.step = GenerateStep::Otp;
        model.otp_input = "000000".to_string();

        let mut cmds = Vec::new();
        update(
            &mut model,
            GenerateMsg::CodeVerified(Err(String::new())),
            &mut cmds,
        );

        assert_eq!(model.step, GenerateStep::Otp);
        assert_eq!(model.error.as_deref(), Some("Invalid OTP. Try again."));
        assert!(model.confirmation.is_some());
    }

    #[test]
    fn resend_from_otp_step_requests_a_fresh_code() {
        let mut model = GenerateModel::default();
        enter_phone(&mut model, "1234567890");
        model.step = GenerateStep::Otp;

        let mut cmds = Vec::new();
        update(&mut model, GenerateMsg::SendSmsRequested, &mut cmds);

        assert!(matches!(
            cmds.as_slice(),
            [GenerateCommand::SendSignInCode(_)]
        ));
    }
}
