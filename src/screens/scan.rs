// SPDX-License-Identifier: MIT

//! Scan-tab state machine: camera permission lifecycle and single-shot scan.
//!
//! Permission is requested once when the screen is entered; denial is a
//! visible state with a re-request button. The first decodable frame latches
//! the screen so a code held in front of the camera fires exactly one dial
//! intent; further frames are dropped until the user taps Scan Again.

use crate::logic::phone;
use crate::models::phone::PhoneNumber;
use crate::screens::ScreenEvent;

/// Fixed alert text for frames that do not decode to a phone number.
pub const INVALID_QR_MESSAGE: &str = "The QR code does not contain a valid phone number.";

/// Camera permission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Permission {
    #[default]
    Unknown,
    Requesting,
    Granted,
    Denied,
}

/// Scan screen state.
#[derive(Default)]
pub struct ScanModel {
    pub permission: Permission,
    /// Raw text of the latched scan, shown in the result overlay.
    pub scanned: Option<String>,
}

/// Messages handled by this screen.
pub enum ScanMsg {
    /// The screen became visible; kicks off the initial permission prompt.
    ScreenEntered,
    /// The user tapped the explicit grant button after a denial.
    GrantRequested,
    PermissionResult(bool),
    /// The barcode collaborator read text from a camera frame.
    FrameScanned(String),
    ScanAgain,
}

/// Side effects requested by this screen.
pub enum ScanCommand {
    RequestPermission,
    Dial(PhoneNumber),
}

/// Advance the scan flow. Returns an event for the root status/error
/// surface when a frame produced a user-visible outcome.
pub fn update(
    model: &mut ScanModel,
    msg: ScanMsg,
    cmds: &mut Vec<ScanCommand>,
) -> Option<ScreenEvent> {
    match msg {
        ScanMsg::ScreenEntered => {
            if model.permission == Permission::Unknown {
                model.permission = Permission::Requesting;
                cmds.push(ScanCommand::RequestPermission);
            }
            None
        }
        ScanMsg::GrantRequested => {
            if model.permission != Permission::Granted {
                model.permission = Permission::Requesting;
                cmds.push(ScanCommand::RequestPermission);
            }
            None
        }
        ScanMsg::PermissionResult(granted) => {
            model.permission = if granted {
                Permission::Granted
            } else {
                Permission::Denied
            };
            None
        }
        ScanMsg::FrameScanned(data) => {
            if model.permission != Permission::Granted || model.scanned.is_some() {
                return None;
            }
            model.scanned = Some(data.clone());
            match phone::decode(&data) {
                Ok(number) => {
                    cmds.push(ScanCommand::Dial(number));
                    None
                }
                Err(_) => Some(ScreenEvent {
                    message: INVALID_QR_MESSAGE.to_string(),
                    is_error: true,
                }),
            }
        }
        ScanMsg::ScanAgain => {
            model.scanned = None;
            None
        }
    }
}
