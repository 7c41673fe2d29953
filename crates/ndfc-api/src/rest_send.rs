// RestSend: the single handle business objects are given.
//
// Owns the injected sender and the response handler. One `commit` is one
// round trip: send, classify, and either hand back the reply or turn an
// unsuccessful one into `Error::Controller`.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::error::Error;
use crate::sender::{ControllerResponse, RestRequest, Sender, Verb};

/// How the response handler classified a reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitResult {
    pub success: bool,
    /// A mutating request was accepted.
    pub changed: bool,
    /// A GET returned the requested object.
    pub found: bool,
}

/// Classifies controller replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseHandler;

impl ResponseHandler {
    /// - GET, 2xx: success, found
    /// - GET, 404: success, not found
    /// - non-GET, 2xx: success, changed
    /// - anything else: failure
    pub fn evaluate(self, verb: Verb, response: &ControllerResponse) -> CommitResult {
        let ok = (200..300).contains(&response.return_code);
        match verb {
            Verb::Get if ok => CommitResult {
                success: true,
                changed: false,
                found: true,
            },
            Verb::Get if response.return_code == 404 => CommitResult {
                success: true,
                changed: false,
                found: false,
            },
            Verb::Post | Verb::Put | Verb::Delete if ok => CommitResult {
                success: true,
                changed: true,
                found: false,
            },
            _ => CommitResult::default(),
        }
    }
}

/// A reply together with its classification.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub response: ControllerResponse,
    pub result: CommitResult,
}

/// Sends requests through an injected `Sender`.
///
/// Cloning is cheap; every clone shares the same sender.
#[derive(Clone)]
pub struct RestSend {
    sender: Arc<dyn Sender>,
    handler: ResponseHandler,
    check_mode: bool,
}

impl std::fmt::Debug for RestSend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestSend")
            .field("handler", &self.handler)
            .field("check_mode", &self.check_mode)
            .finish_non_exhaustive()
    }
}

impl RestSend {
    pub fn new(sender: Arc<dyn Sender>) -> Self {
        Self {
            sender,
            handler: ResponseHandler,
            check_mode: false,
        }
    }

    /// In check mode, mutating requests are not sent; a synthetic
    /// `200 OK` reply with empty `DATA` is returned instead.
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }

    pub fn check_mode(&self) -> bool {
        self.check_mode
    }

    /// Send `request` once and classify the reply.
    pub async fn commit(&self, request: &RestRequest) -> Result<SendOutcome, Error> {
        debug!(verb = %request.verb, path = %request.path, check_mode = self.check_mode, "commit");

        let response = if self.check_mode && request.verb.is_mutating() {
            info!(verb = %request.verb, path = %request.path, "check mode: request not sent");
            ControllerResponse::new(200, json!({})).for_request(request)
        } else {
            self.sender.send(request).await?
        };

        let result = self.handler.evaluate(request.verb, &response);
        debug!(
            return_code = response.return_code,
            success = result.success,
            changed = result.changed,
            found = result.found,
            "response evaluated"
        );

        if !result.success {
            return Err(Error::Controller {
                verb: request.verb,
                path: request.path.clone(),
                return_code: response.return_code,
                message: failure_message(&response),
            });
        }
        Ok(SendOutcome { response, result })
    }

    /// `commit`, with any failure wrapped as `Error::Send` for `operation`.
    pub(crate) async fn commit_as(
        &self,
        operation: &'static str,
        request: &RestRequest,
    ) -> Result<SendOutcome, Error> {
        self.commit(request)
            .await
            .map_err(|e| e.sending(operation, request.verb))
    }
}

/// Prefer the controller's own error text over the bare status reason.
fn failure_message(response: &ControllerResponse) -> String {
    ["message", "error", "detail"]
        .iter()
        .find_map(|key| response.data.get(key).and_then(|v| v.as_str()))
        .map_or_else(|| response.message.clone(), str::to_owned)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::sender::ScriptedSender;

    fn response(code: u16) -> ControllerResponse {
        ControllerResponse::new(code, json!({}))
    }

    #[test]
    fn get_classification() {
        let handler = ResponseHandler;
        let ok = handler.evaluate(Verb::Get, &response(200));
        assert!(ok.success && ok.found && !ok.changed);

        let missing = handler.evaluate(Verb::Get, &response(404));
        assert!(missing.success && !missing.found);

        assert!(!handler.evaluate(Verb::Get, &response(500)).success);
    }

    #[test]
    fn mutating_classification() {
        let handler = ResponseHandler;
        let created = handler.evaluate(Verb::Post, &response(201));
        assert!(created.success && created.changed);

        assert!(!handler.evaluate(Verb::Delete, &response(404)).success);
        assert!(!handler.evaluate(Verb::Put, &response(400)).success);
    }

    #[tokio::test]
    async fn unsuccessful_reply_becomes_controller_error() {
        let sender = Arc::new(ScriptedSender::new([ControllerResponse::new(
            400,
            json!({"message": "switchUsername is required"}),
        )
        .with_message("Bad Request")]));
        let rest_send = RestSend::new(sender);

        let err = rest_send
            .commit(&RestRequest::new(Verb::Post, "/api/v1/manage/credentials/switches"))
            .await
            .expect_err("should fail");

        match err {
            Error::Controller {
                return_code,
                message,
                ..
            } => {
                assert_eq!(return_code, 400);
                assert_eq!(message, "switchUsername is required");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_mode_skips_mutations_but_sends_gets() {
        let sender = Arc::new(ScriptedSender::new([response(200)]));
        let rest_send = RestSend::new(sender.clone()).with_check_mode(true);

        let outcome = rest_send
            .commit(&RestRequest::new(
                Verb::Delete,
                "/api/v1/manage/credentials/defaultSwitchCredentials",
            ))
            .await
            .expect("check mode delete");
        assert!(outcome.result.changed);
        assert!(sender.requests().is_empty());

        rest_send
            .commit(&RestRequest::new(Verb::Get, "/api/v1/manage/credentials/details"))
            .await
            .expect("get");
        assert_eq!(sender.requests().len(), 1);
    }
}
