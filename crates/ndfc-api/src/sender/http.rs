// reqwest-backed Sender
//
// Joins the endpoint path onto the controller base URL, sends the request,
// and folds whatever comes back into a `ControllerResponse`. Non-2xx replies
// are not errors here; `ResponseHandler` decides what counts as success.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use super::{ControllerResponse, RestRequest, Sender, Verb};
use crate::error::Error;
use crate::transport::TransportConfig;

/// HTTP sender for the controller's REST API.
#[derive(Debug, Clone)]
pub struct HttpSender {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpSender {
    /// Create a sender from a `TransportConfig`.
    ///
    /// `base_url` is the controller root (e.g. `https://10.1.1.1`); endpoint
    /// paths already start with `/api/...`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout: transport.timeout,
        })
    }

    /// Create a sender around a pre-built `reqwest::Client`.
    ///
    /// `timeout` is applied to every request on top of whatever the client
    /// was built with.
    pub fn with_client(http: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            http,
            base_url,
            timeout,
        }
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for an endpoint path (query string included).
    pub(crate) fn url_for(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    async fn read_body(resp: reqwest::Response) -> Result<(u16, String, Value), Error> {
        let status = resp.status();
        let message = status.canonical_reason().unwrap_or_default().to_owned();
        let body = resp.text().await?;

        let data = if body.trim().is_empty() {
            json!({})
        } else {
            serde_json::from_str::<Value>(&body).unwrap_or_else(|_| json!({ "raw": body }))
        };
        Ok((status.as_u16(), message, data))
    }
}

#[async_trait]
impl Sender for HttpSender {
    async fn send(&self, request: &RestRequest) -> Result<ControllerResponse, Error> {
        let url = self.url_for(&request.path)?;
        debug!(verb = %request.verb, %url, "sending request");

        let builder = match request.verb {
            Verb::Get => self.http.get(url),
            Verb::Post => self.http.post(url),
            Verb::Put => self.http.put(url),
            Verb::Delete => self.http.delete(url),
        };
        let builder = match &request.payload {
            Some(payload) => builder.json(payload),
            None => builder,
        }
        .timeout(self.timeout);

        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                Error::Transport(e)
            }
        })?;

        let (return_code, message, data) = Self::read_body(resp).await?;
        debug!(return_code, "received response");

        Ok(ControllerResponse {
            return_code,
            method: request.verb.to_string(),
            request_path: request.path.clone(),
            message,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_without_double_slash() {
        let base = Url::parse("https://10.1.1.1/").expect("url");
        let sender =
            HttpSender::with_client(reqwest::Client::new(), base, Duration::from_secs(30));

        let url = sender
            .url_for("/api/v1/manage/switches?fabricName=SITE1")
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://10.1.1.1/api/v1/manage/switches?fabricName=SITE1"
        );
    }

    #[test]
    fn with_client_keeps_given_timeout() {
        let base = Url::parse("https://10.1.1.1").expect("url");
        let sender =
            HttpSender::with_client(reqwest::Client::new(), base, Duration::from_secs(5));
        assert_eq!(sender.timeout, Duration::from_secs(5));
    }
}
