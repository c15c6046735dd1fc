pub mod catalog;
pub mod classify;
pub mod config;
pub mod recommend;
pub mod shapes;

use std::fs;
use std::path::Path;

use anyhow::Context;
use facecut_core::config::{AppConfig, LoadOptions};
use facecut_core::errors::{ApplicationError, DomainError, InterfaceError};
use facecut_core::LandmarkSet;
use serde::Serialize;
use serde_json::Value;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_INPUT: u8 = 3;
pub const EXIT_CLASSIFICATION: u8 = 4;
pub const EXIT_NO_SUITABLE_STYLES: u8 = 5;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: &impl Serialize,
    ) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self::ok(command, message.into(), Some(data)),
            Err(error) => Self::failure(command, "serialization", error.to_string(), 1),
        }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            hint: None,
            correlation_id: None,
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Failure envelope for an error that went through the interface mapping.
    fn interface_failure(
        command: &str,
        error_class: &str,
        error: &InterfaceError,
        exit_code: u8,
    ) -> Self {
        let correlation_id = match error {
            InterfaceError::BadRequest { correlation_id, .. }
            | InterfaceError::NotFound { correlation_id, .. }
            | InterfaceError::Internal { correlation_id, .. } => correlation_id.clone(),
        };
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: error.to_string(),
            hint: Some(error.user_message().to_string()),
            correlation_id: Some(correlation_id),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    fn ok(command: &str, message: String, data: Option<Value>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message,
            hint: None,
            correlation_id: None,
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

pub(crate) fn load_config(command: &str, options: LoadOptions) -> Result<AppConfig, CommandResult> {
    AppConfig::load(options).map_err(|error| application_failure(command, error.into()))
}

pub(crate) fn read_landmarks(path: &Path) -> anyhow::Result<LandmarkSet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read landmarks file `{}`", path.display()))?;
    LandmarkSet::from_json_str(&raw)
        .with_context(|| format!("landmarks file `{}` is not a JSON point array", path.display()))
}

pub(crate) fn input_failure(command: &str, error: anyhow::Error) -> CommandResult {
    CommandResult::failure(command, "input", format!("{error:#}"), EXIT_INPUT)
}

pub(crate) fn domain_failure(command: &str, error: DomainError) -> CommandResult {
    application_failure(command, error.into())
}

/// Exit code and error class come from the application error; the message, hint and
/// correlation id come from its interface mapping.
pub(crate) fn application_failure(command: &str, error: ApplicationError) -> CommandResult {
    let (error_class, exit_code) = match &error {
        ApplicationError::Domain(DomainError::Recommendation(_)) => {
            ("no_suitable_styles", EXIT_NO_SUITABLE_STYLES)
        }
        ApplicationError::Domain(DomainError::Classification(_)) => {
            ("classification", EXIT_CLASSIFICATION)
        }
        ApplicationError::Catalog(_) => ("catalog", EXIT_INPUT),
        ApplicationError::Configuration(_) => ("config_validation", EXIT_CONFIG),
    };

    let interface = error.into_interface(command);
    tracing::warn!(
        event_name = "cli.command.failed",
        correlation_id = command,
        error_class,
        error = %interface,
        "command failed"
    );
    CommandResult::interface_failure(command, error_class, &interface, exit_code)
}
