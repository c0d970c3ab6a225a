// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring screens, messages, and commands.
//!
//! `update` is pure over [`AppModel`]; every side effect is a [`Command`]
//! executed by the embedding shell through [`run_command`] against the
//! injected [`Platform`] services, with the resulting [`Msg`] fed back in.
//! Execution is single-threaded and synchronous: commands run between
//! update calls, there are no channels and no cancellation.

use std::path::PathBuf;

use crate::models::phone::{PhoneNumber, QrPayload};
use crate::models::theme::{SystemScheme, ThemeMode};
use crate::screens::generate::{self, GenerateCommand, GenerateModel, GenerateMsg};
use crate::screens::scan::{self, ScanCommand, ScanModel, ScanMsg};
use crate::services::Platform;
use crate::services::identity::Confirmation;
use crate::settings::{self, Preferences};

/// Top-level application state.
pub struct AppModel {
    /// Generate screen state.
    pub generate: GenerateModel,
    /// Scan screen state.
    pub scan: ScanModel,
    /// Current theme override.
    pub theme: ThemeMode,
    /// Last host-reported color scheme, for resolving `System`.
    pub system_scheme: SystemScheme,
    /// Where the preferences file lives, decided by the shell.
    pub preferences_path: PathBuf,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in an alert.
    pub error: Option<String>,
    /// Count of queued commands, for shell-side progress display.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(preferences_path: PathBuf) -> Self {
        Self {
            generate: GenerateModel::default(),
            scan: ScanModel::default(),
            theme: ThemeMode::default(),
            system_scheme: SystemScheme::default(),
            preferences_path,
            status: None,
            error: None,
            pending_commands: 0,
        }
    }

    /// Effective dark flag after resolving `System`.
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark(self.system_scheme)
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    /// App start; loads persisted preferences.
    Started,
    PreferencesLoaded(Result<Preferences, String>),
    PreferencesSaved(Result<(), String>),
    SetThemeMode(ThemeMode),
    ToggleTheme,
    SystemSchemeChanged(SystemScheme),
    /// Share the generated QR through the platform share sheet.
    ShareRequested,
    /// Print the generated QR.
    PrintRequested,
    ShareCompleted(Result<(), String>),
    PrintCompleted(Result<(), String>),
    DialCompleted(Result<(), String>),
    DismissError,
    Generate(GenerateMsg),
    Scan(ScanMsg),
}

/// Commands represent side effects executed between update calls.
pub enum Command {
    LoadPreferences(PathBuf),
    SavePreferences {
        path: PathBuf,
        preferences: Preferences,
    },
    RequestCameraPermission,
    Dial(PhoneNumber),
    ShareQr(QrPayload),
    PrintQr(QrPayload),
    SendSignInCode(PhoneNumber),
    VerifyCode {
        confirmation: Confirmation,
        code: String,
    },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Started => cmds.push(Command::LoadPreferences(model.preferences_path.clone())),
        Msg::PreferencesLoaded(result) => match result {
            Ok(preferences) => model.theme = preferences.theme,
            Err(err) => surface_event(model, format!("Failed to load preferences:\n\n{err}"), true),
        },
        Msg::PreferencesSaved(result) => {
            if let Err(err) = result {
                surface_event(model, format!("Failed to save preferences:\n\n{err}"), true);
            }
        }
        Msg::SetThemeMode(mode) => {
            model.theme = mode;
            push_save_preferences(model, cmds);
        }
        Msg::ToggleTheme => {
            model.theme = model.theme.toggled(model.system_scheme);
            push_save_preferences(model, cmds);
        }
        Msg::SystemSchemeChanged(scheme) => model.system_scheme = scheme,
        Msg::ShareRequested => {
            if let Some(payload) = &model.generate.qr {
                cmds.push(Command::ShareQr(payload.clone()));
            }
        }
        Msg::PrintRequested => {
            if let Some(payload) = &model.generate.qr {
                cmds.push(Command::PrintQr(payload.clone()));
            }
        }
        Msg::ShareCompleted(result) => match result {
            Ok(()) => surface_event(model, "QR code shared.".to_string(), false),
            Err(err) => surface_event(model, format!("Failed to share QR code:\n\n{err}"), true),
        },
        Msg::PrintCompleted(result) => match result {
            Ok(()) => surface_event(model, "QR code sent to printer.".to_string(), false),
            Err(err) => surface_event(model, format!("Failed to print QR code:\n\n{err}"), true),
        },
        Msg::DialCompleted(result) => {
            if let Err(err) = result {
                surface_event(model, format!("Failed to place call:\n\n{err}"), true);
            }
        }
        Msg::DismissError => model.error = None,
        Msg::Generate(m) => {
            let mut gen_cmds = Vec::new();
            generate::update(&mut model.generate, m, &mut gen_cmds);
            for c in gen_cmds {
                match c {
                    GenerateCommand::SendSignInCode(number) => {
                        cmds.push(Command::SendSignInCode(number))
                    }
                    GenerateCommand::VerifyCode { confirmation, code } => {
                        cmds.push(Command::VerifyCode { confirmation, code })
                    }
                }
            }
        }
        Msg::Scan(m) => {
            let mut scan_cmds = Vec::new();
            if let Some(event) = scan::update(&mut model.scan, m, &mut scan_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in scan_cmds {
                match c {
                    ScanCommand::RequestPermission => cmds.push(Command::RequestCameraPermission),
                    ScanCommand::Dial(number) => cmds.push(Command::Dial(number)),
                }
            }
        }
    }
}

/// Execute a command against the platform services and return the result.
pub fn run_command(platform: &mut Platform<'_>, cmd: Command) -> Msg {
    match cmd {
        Command::LoadPreferences(path) => {
            Msg::PreferencesLoaded(settings::load_preferences(&path).map_err(|e| e.to_string()))
        }
        Command::SavePreferences { path, preferences } => Msg::PreferencesSaved(
            settings::save_preferences(&path, &preferences).map_err(|e| e.to_string()),
        ),
        Command::RequestCameraPermission => {
            let granted = platform.camera.request_permission();
            Msg::Scan(ScanMsg::PermissionResult(granted))
        }
        Command::Dial(number) => {
            Msg::DialCompleted(platform.dialer.dial(&number).map_err(|e| e.to_string()))
        }
        Command::ShareQr(payload) => {
            Msg::ShareCompleted(platform.presenter.share(&payload).map_err(|e| e.to_string()))
        }
        Command::PrintQr(payload) => {
            Msg::PrintCompleted(platform.presenter.print(&payload).map_err(|e| e.to_string()))
        }
        Command::SendSignInCode(number) => Msg::Generate(GenerateMsg::CodeSent(
            platform
                .identity
                .send_code(&number)
                .map_err(|e| e.to_string()),
        )),
        Command::VerifyCode { confirmation, code } => Msg::Generate(GenerateMsg::CodeVerified(
            platform
                .identity
                .verify_code(&confirmation, &code)
                .map_err(|e| e.to_string()),
        )),
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

fn push_save_preferences(model: &AppModel, cmds: &mut Vec<Command>) {
    cmds.push(Command::SavePreferences {
        path: model.preferences_path.clone(),
        preferences: Preferences { theme: model.theme },
    });
}
