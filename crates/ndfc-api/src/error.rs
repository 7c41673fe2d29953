use std::fmt;

use thiserror::Error;

use crate::sender::Verb;

/// Which inventory index a lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    SwitchName,
    Ipv4Address,
    SerialNumber,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SwitchName => "Switch name",
            Self::Ipv4Address => "IPv4 address",
            Self::SerialNumber => "Serial number",
        };
        f.write_str(label)
    }
}

/// Top-level error type for the `ndfc-api` crate.
///
/// Covers input validation, transport failures, controller rejections and
/// inventory lookups. The CLI maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Input ───────────────────────────────────────────────────────
    /// A configuration value or request body failed validation.
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // ── Sending ─────────────────────────────────────────────────────
    /// A business object failed to complete its round trip. Wraps the
    /// underlying cause with the operation that was attempted.
    #[error("{operation}: unable to send {verb} request to the controller: {source}")]
    Send {
        operation: &'static str,
        verb: Verb,
        #[source]
        source: Box<Error>,
    },

    /// The controller answered, but the response handler judged the reply
    /// unsuccessful.
    #[error("Controller rejected {verb} {path} (RETURN_CODE {return_code}): {message}")]
    Controller {
        verb: Verb,
        path: String,
        return_code: u16,
        message: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Inventory ───────────────────────────────────────────────────
    /// No switch in the fabric inventory matches the lookup key.
    #[error("{kind} {key} not found in fabric {fabric_name}.")]
    NotFound {
        kind: LookupKind,
        key: String,
        fabric_name: String,
    },

    /// The switch exists but lacks the requested field.
    #[error("{kind} {key} has no {field} in fabric {fabric_name}.")]
    MissingField {
        kind: LookupKind,
        key: String,
        field: &'static str,
        fabric_name: String,
    },

    /// A credential operation named a switch its fabric does not have.
    #[error("switch_name {switch_name} not found in fabric {fabric_name}")]
    UnknownSwitch {
        switch_name: String,
        fabric_name: String,
    },

    /// A user credential delete resolved to no switches.
    #[error("No valid switches found to delete credentials")]
    NoSwitchesToDelete,

    // ── Scripted sender ─────────────────────────────────────────────
    /// A failure injected into `ScriptedSender`.
    #[error("Simulated failure: {0}")]
    Simulated(String),

    /// `ScriptedSender` ran out of queued responses.
    #[error("No more scripted responses")]
    ResponsesExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wrap `self` as the cause of a failed round trip.
    pub(crate) fn sending(self, operation: &'static str, verb: Verb) -> Self {
        Self::Send {
            operation,
            verb,
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through `Send` wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Self::Send { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns `true` if this is a "not found" error, either an inventory
    /// miss or a 404 from the controller.
    pub fn is_not_found(&self) -> bool {
        match self.root() {
            Self::NotFound { .. } | Self::UnknownSwitch { .. } => true,
            Self::Controller { return_code, .. } => *return_code == 404,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self.root() {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            Self::Controller { return_code, .. } => matches!(return_code, 502..=504),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_wrapper_annotates_message() {
        let err = Error::Controller {
            verb: Verb::Get,
            path: "/api/v1/manage/credentials/details".into(),
            return_code: 500,
            message: "Internal Server Error".into(),
        }
        .sending("CredentialsDetailsGet", Verb::Get);

        let text = err.to_string();
        assert!(text.starts_with("CredentialsDetailsGet: unable to send GET request"));
        assert!(text.contains("RETURN_CODE 500"));
    }

    #[test]
    fn not_found_looks_through_wrappers() {
        let err = Error::NotFound {
            kind: LookupKind::SwitchName,
            key: "LE1".into(),
            fabric_name: "SITE1".into(),
        }
        .sending("UserSwitchSave", Verb::Post);

        assert!(err.is_not_found());
        assert_eq!(
            err.root().to_string(),
            "Switch name LE1 not found in fabric SITE1."
        );
    }

    #[test]
    fn gateway_errors_are_transient() {
        let err = Error::Controller {
            verb: Verb::Get,
            path: "/".into(),
            return_code: 503,
            message: "Service Unavailable".into(),
        };
        assert!(err.is_transient());
        assert!(!err.is_not_found());
    }
}
