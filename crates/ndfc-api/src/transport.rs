// Shared transport configuration for building reqwest::Client instances.
//
// TLS verification, timeout, and the static API-key headers the controller
// accepts all live here so `HttpSender` only deals with request mechanics.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

const USER_AGENT: &str = concat!("ndfc/", env!("CARGO_PKG_VERSION"));

/// Header carrying the controller user that owns the API key.
pub const USERNAME_HEADER: &str = "X-Nd-Username";
/// Header carrying the API key itself.
pub const API_KEY_HEADER: &str = "X-Nd-Apikey";

/// TLS verification mode.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed controllers).
    DangerAcceptInvalid,
}

/// Static API-key credentials attached to every request.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    pub username: String,
    pub key: SecretString,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
    pub api_key: Option<ApiKeyAuth>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
            api_key: None,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(self.default_headers()?);

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Attach API-key credentials.
    pub fn with_api_key(mut self, username: impl Into<String>, key: SecretString) -> Self {
        self.api_key = Some(ApiKeyAuth {
            username: username.into(),
            key,
        });
        self
    }

    fn default_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        let Some(auth) = &self.api_key else {
            return Ok(headers);
        };

        let username = HeaderValue::from_str(&auth.username)
            .map_err(|_| Error::validation("username", "not a valid header value"))?;
        let mut key = HeaderValue::from_str(auth.key.expose_secret())
            .map_err(|_| Error::validation("api_key", "not a valid header value"))?;
        key.set_sensitive(true);

        headers.insert(USERNAME_HEADER, username);
        headers.insert(API_KEY_HEADER, key);
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_becomes_default_headers() {
        let config = TransportConfig::default()
            .with_api_key("admin", SecretString::from("s3cret".to_owned()));
        let headers = config.default_headers().expect("headers");

        assert_eq!(headers[USERNAME_HEADER], "admin");
        assert!(headers[API_KEY_HEADER].is_sensitive());
    }

    #[test]
    fn no_api_key_means_no_headers() {
        let headers = TransportConfig::default()
            .default_headers()
            .expect("headers");
        assert!(headers.is_empty());
    }

    #[test]
    fn newline_in_username_is_rejected() {
        let config = TransportConfig::default()
            .with_api_key("ad\nmin", SecretString::from("key".to_owned()));
        assert!(matches!(
            config.default_headers(),
            Err(Error::Validation { .. })
        ));
    }
}
