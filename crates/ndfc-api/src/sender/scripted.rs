// Replay sender
//
// Hands out pre-recorded controller replies in FIFO order and remembers what
// it was asked to send. Used by the test suites and by the CLI's `--replay`
// mode so operations can run without a live controller.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use super::{ControllerResponse, RestRequest, Sender};
use crate::error::Error;

#[derive(Debug, Default)]
struct State {
    responses: VecDeque<ControllerResponse>,
    requests: Vec<RestRequest>,
    failure: Option<String>,
}

/// A `Sender` that replays queued responses.
///
/// ```
/// use ndfc_api::{ControllerResponse, ScriptedSender};
/// use serde_json::json;
///
/// let sender = ScriptedSender::new([ControllerResponse::new(200, json!({"items": []}))]);
/// assert_eq!(sender.remaining(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedSender {
    state: Mutex<State>,
}

impl ScriptedSender {
    pub fn new(responses: impl IntoIterator<Item = ControllerResponse>) -> Self {
        Self {
            state: Mutex::new(State {
                responses: responses.into_iter().collect(),
                ..State::default()
            }),
        }
    }

    /// Load replies from a JSON file holding an array of responses.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let body = std::fs::read_to_string(path)?;
        let responses: Vec<ControllerResponse> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body,
            })?;
        Ok(Self::new(responses))
    }

    /// Queue another reply.
    pub fn push(&self, response: ControllerResponse) {
        self.lock().responses.push_back(response);
    }

    /// Make the next `send` fail with `Error::Simulated(message)`.
    /// The queued replies are left untouched.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RestRequest> {
        self.lock().requests.clone()
    }

    /// Number of replies still queued.
    pub fn remaining(&self) -> usize {
        self.lock().responses.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Sender for ScriptedSender {
    async fn send(&self, request: &RestRequest) -> Result<ControllerResponse, Error> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        debug!(verb = %request.verb, path = %request.path, "replaying response");

        if let Some(message) = state.failure.take() {
            return Err(Error::Simulated(message));
        }

        let mut response = state
            .responses
            .pop_front()
            .ok_or(Error::ResponsesExhausted)?;
        if response.method.is_empty() {
            response.method = request.verb.to_string();
        }
        if response.request_path.is_empty() {
            response.request_path.clone_from(&request.path);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;
    use crate::sender::Verb;

    #[tokio::test]
    async fn replays_in_order_and_records_requests() {
        let sender = ScriptedSender::new([
            ControllerResponse::new(200, json!({"n": 1})),
            ControllerResponse::new(200, json!({"n": 2})),
        ]);

        let first = sender
            .send(&RestRequest::new(Verb::Get, "/a"))
            .await
            .expect("first");
        let second = sender
            .send(&RestRequest::new(Verb::Delete, "/b"))
            .await
            .expect("second");

        assert_eq!(first.data["n"], 1);
        assert_eq!(first.request_path, "/a");
        assert_eq!(second.method, "DELETE");
        assert_eq!(sender.requests().len(), 2);
        assert!(matches!(
            sender.send(&RestRequest::new(Verb::Get, "/c")).await,
            Err(Error::ResponsesExhausted)
        ));
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let sender = ScriptedSender::new([ControllerResponse::new(200, json!({}))]);
        sender.fail_next("commit exploded");

        let err = sender
            .send(&RestRequest::new(Verb::Get, "/a"))
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Simulated(ref m) if m == "commit exploded"));

        assert!(sender.send(&RestRequest::new(Verb::Get, "/a")).await.is_ok());
    }

    #[test]
    fn loads_responses_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"[{{"RETURN_CODE": 200, "MESSAGE": "OK", "DATA": {{"switches": []}}}}]"#
        )
        .expect("write");

        let sender = ScriptedSender::from_file(file.path()).expect("load");
        assert_eq!(sender.remaining(), 1);
    }

    #[test]
    fn rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "{{not json").expect("write");

        assert!(matches!(
            ScriptedSender::from_file(file.path()),
            Err(Error::Deserialization { .. })
        ));
    }
}
