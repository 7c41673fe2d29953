//! CLI error types with miette diagnostics.
//!
//! Maps `ndfc_api::Error` and `ConfigError` into user-facing errors with
//! actionable help text.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use ndfc_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to the controller")]
    #[diagnostic(
        code(ndfc::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Try: ndfc credentials details --insecure"
        )
    )]
    ConnectionFailed {
        #[source]
        source: ndfc_api::Error,
    },

    #[error("TLS certificate verification failed: {reason}")]
    #[diagnostic(
        code(ndfc::tls_error),
        help(
            "The controller may be using a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or configure ca_cert in your profile."
        )
    )]
    TlsError { reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(ndfc::timeout),
        help("Increase the timeout with --timeout or check controller responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed (RETURN_CODE {return_code})")]
    #[diagnostic(
        code(ndfc::auth_failed),
        help(
            "Verify the username and API key for this profile.\n\
             Run: ndfc config set-api-key --profile {profile}"
        )
    )]
    AuthFailed { return_code: u16, profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(ndfc::no_credentials),
        help(
            "Store an API key with: ndfc config set-api-key\n\
             Or set the ND_API_KEY environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Controller ───────────────────────────────────────────────────

    #[error("{message}")]
    #[diagnostic(
        code(ndfc::not_found),
        help("Run: ndfc switches inventory --fabric <FABRIC> to see the fabric's switches")
    )]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(code(ndfc::api_error))]
    Api {
        message: String,
        #[source]
        source: ndfc_api::Error,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ndfc::validation))]
    Validation { field: String, reason: String },

    #[error("Invalid input file {}", path.display())]
    #[diagnostic(
        code(ndfc::invalid_input),
        help("{reason}")
    )]
    InvalidInput { path: PathBuf, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(ndfc::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No controller configured")]
    #[diagnostic(
        code(ndfc::no_config),
        help(
            "Pass --controller (or set ND_CONTROLLER), or add a profile to\n\
             {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(ndfc::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(ndfc::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::InvalidInput { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ndfc_api::Error → CliError mapping ──────────────────────────────

impl From<ndfc_api::Error> for CliError {
    fn from(err: ndfc_api::Error) -> Self {
        use ndfc_api::Error as ApiError;

        if let Some(mapped) = classify(err.root()) {
            return mapped;
        }
        if matches!(err.root(), ApiError::Transport(e) if e.is_connect()) {
            return Self::ConnectionFailed { source: err };
        }
        if err.is_not_found() {
            return Self::NotFound {
                message: err.to_string(),
            };
        }
        Self::Api {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Errors whose root cause has a dedicated diagnostic.
fn classify(root: &ndfc_api::Error) -> Option<CliError> {
    use ndfc_api::Error as ApiError;

    match root {
        ApiError::Tls(reason) => Some(CliError::TlsError {
            reason: reason.clone(),
        }),
        ApiError::Timeout { timeout_secs } => Some(CliError::Timeout {
            seconds: *timeout_secs,
        }),
        ApiError::Controller {
            return_code: code @ (401 | 403),
            ..
        } => Some(CliError::AuthFailed {
            return_code: *code,
            profile: "current".into(),
        }),
        ApiError::Validation { field, reason } => Some(CliError::Validation {
            field: field.clone(),
            reason: reason.clone(),
        }),
        ApiError::NoSwitchesToDelete => Some(CliError::Validation {
            field: "config".into(),
            reason: root.to_string(),
        }),
        _ => None,
    }
}

// ── ConfigError → CliError mapping ──────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::ProfileNotFound { name } => Self::ProfileNotFound {
                name,
                available: "(see: ndfc config profiles)".into(),
            },
            ConfigError::Figment(e) => Self::Config(e),
            ConfigError::Yaml { path, source } => Self::InvalidInput {
                path,
                reason: source.to_string(),
            },
            ConfigError::Invalid { path, source } => Self::InvalidInput {
                path,
                reason: source.to_string(),
            },
            ConfigError::Serialization(e) => Self::Validation {
                field: "config".into(),
                reason: e.to_string(),
            },
            ConfigError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_usage() {
        let err = CliError::from(ConfigError::Validation {
            field: "controller".into(),
            reason: "invalid URL".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn unknown_switch_maps_to_not_found() {
        let err = CliError::from(ndfc_api::Error::UnknownSwitch {
            switch_name: "LE9".into(),
            fabric_name: "SITE1".into(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "switch_name LE9 not found in fabric SITE1");
    }

    #[test]
    fn no_switches_to_delete_is_a_usage_error() {
        let err = CliError::from(ndfc_api::Error::NoSwitchesToDelete);
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn scripted_exhaustion_is_general() {
        let err = CliError::from(ndfc_api::Error::ResponsesExhausted);
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().contains("No more scripted responses"));
    }
}
