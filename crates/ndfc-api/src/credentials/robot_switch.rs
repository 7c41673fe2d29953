use serde_json::Value;
use tracing::info;

use super::{CredentialsChange, str_field};
use crate::endpoints::Endpoint;
use crate::endpoints::credentials as ep;
use crate::error::Error;
use crate::rest_send::RestSend;
use crate::validators::{RobotSwitchSaveConfig, Validate};

/// Read the robot switch credentials.
#[derive(Debug, Clone)]
pub struct RobotSwitchGet {
    rest_send: RestSend,
}

impl RobotSwitchGet {
    pub fn new(rest_send: RestSend) -> Self {
        Self { rest_send }
    }

    pub async fn commit(&self) -> Result<RobotSwitchCredentials, Error> {
        let outcome = self
            .rest_send
            .commit_as("RobotSwitchGet", &ep::RobotSwitchGet.request())
            .await?;
        Ok(RobotSwitchCredentials {
            found: outcome.result.found,
            data: outcome.response.data,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RobotSwitchCredentials {
    found: bool,
    data: Value,
}

impl RobotSwitchCredentials {
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn found(&self) -> bool {
        self.found
    }

    /// Controller user the robot credentials belong to.
    pub fn nd_username(&self) -> &str {
        str_field(&self.data, "ndUsername")
    }

    pub fn switch_username(&self) -> &str {
        str_field(&self.data, "switchUsername")
    }
}

/// Store robot switch credentials.
#[derive(Debug, Clone)]
pub struct RobotSwitchSave {
    rest_send: RestSend,
    config: RobotSwitchSaveConfig,
}

impl RobotSwitchSave {
    pub fn new(rest_send: RestSend, config: RobotSwitchSaveConfig) -> Self {
        Self { rest_send, config }
    }

    pub async fn commit(&self) -> Result<CredentialsChange, Error> {
        self.config.validate()?;
        let endpoint =
            ep::RobotSwitchSave::new(&self.config.switch_username, &self.config.switch_password)?;
        let outcome = self
            .rest_send
            .commit_as("RobotSwitchSave", &endpoint.request())
            .await?;

        info!(user = endpoint.switch_username(), "robot switch credentials saved");
        Ok(CredentialsChange::new(
            outcome,
            format!(
                "Robot switch credentials saved for user {}",
                endpoint.switch_username()
            ),
        ))
    }
}

/// Remove the robot switch credentials.
#[derive(Debug, Clone)]
pub struct RobotSwitchDelete {
    rest_send: RestSend,
}

impl RobotSwitchDelete {
    pub fn new(rest_send: RestSend) -> Self {
        Self { rest_send }
    }

    pub async fn commit(&self) -> Result<CredentialsChange, Error> {
        let outcome = self
            .rest_send
            .commit_as("RobotSwitchDelete", &ep::RobotSwitchDelete.request())
            .await?;
        info!("robot switch credentials deleted");
        Ok(CredentialsChange::new(outcome, "Robot switch credentials deleted"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use secrecy::SecretString;
    use serde_json::json;

    use super::*;
    use crate::sender::{ControllerResponse, ScriptedSender};

    #[tokio::test]
    async fn get_reads_both_usernames() {
        let sender = Arc::new(ScriptedSender::new([ControllerResponse::new(
            200,
            json!({"ndUsername": "admin", "switchUsername": "robot"}),
        )]));
        let creds = RobotSwitchGet::new(RestSend::new(sender))
            .commit()
            .await
            .expect("get");
        assert_eq!(creds.nd_username(), "admin");
        assert_eq!(creds.switch_username(), "robot");
    }

    #[tokio::test]
    async fn save_marks_body_as_robot() {
        let sender = Arc::new(ScriptedSender::new([ControllerResponse::new(200, json!({}))]));
        let config = RobotSwitchSaveConfig {
            switch_username: "robot".into(),
            switch_password: SecretString::from("pw".to_owned()),
        };

        let change = RobotSwitchSave::new(RestSend::new(sender.clone()), config)
            .commit()
            .await
            .expect("save");

        assert_eq!(change.summary(), "Robot switch credentials saved for user robot");
        let payload = sender.requests()[0].payload.clone().expect("payload");
        assert_eq!(payload["isRobot"], json!(true));
    }

    #[tokio::test]
    async fn check_mode_delete_sends_nothing() {
        let sender = Arc::new(ScriptedSender::default());
        let rest_send = RestSend::new(sender.clone()).with_check_mode(true);

        let change = RobotSwitchDelete::new(rest_send).commit().await.expect("check mode");
        assert!(change.changed());
        assert!(sender.requests().is_empty());
    }
}
