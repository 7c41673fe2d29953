use serde_json::Value;
use tracing::info;

use super::{CredentialsChange, str_field};
use crate::endpoints::Endpoint;
use crate::endpoints::credentials as ep;
use crate::error::Error;
use crate::rest_send::RestSend;
use crate::validators::{DefaultSwitchSaveConfig, Validate};

/// Read the fabric-wide default switch credentials.
#[derive(Debug, Clone)]
pub struct DefaultSwitchGet {
    rest_send: RestSend,
}

impl DefaultSwitchGet {
    pub fn new(rest_send: RestSend) -> Self {
        Self { rest_send }
    }

    pub async fn commit(&self) -> Result<DefaultSwitchCredentials, Error> {
        let outcome = self
            .rest_send
            .commit_as("DefaultSwitchGet", &ep::DefaultSwitchGet.request())
            .await?;
        Ok(DefaultSwitchCredentials {
            found: outcome.result.found,
            data: outcome.response.data,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultSwitchCredentials {
    found: bool,
    data: Value,
}

impl DefaultSwitchCredentials {
    /// The reply's `DATA`.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// `false` when the controller answered 404.
    pub fn found(&self) -> bool {
        self.found
    }

    pub fn switch_username(&self) -> &str {
        str_field(&self.data, "switchUsername")
    }
}

/// Store new default switch credentials.
#[derive(Debug, Clone)]
pub struct DefaultSwitchSave {
    rest_send: RestSend,
    config: DefaultSwitchSaveConfig,
}

impl DefaultSwitchSave {
    pub fn new(rest_send: RestSend, config: DefaultSwitchSaveConfig) -> Self {
        Self { rest_send, config }
    }

    pub async fn commit(&self) -> Result<CredentialsChange, Error> {
        self.config.validate()?;
        let endpoint =
            ep::DefaultSwitchSave::new(&self.config.switch_username, &self.config.switch_password)?;
        let outcome = self
            .rest_send
            .commit_as("DefaultSwitchSave", &endpoint.request())
            .await?;

        info!(user = endpoint.switch_username(), "default switch credentials saved");
        Ok(CredentialsChange::new(
            outcome,
            format!(
                "Default switch credentials saved for user {}",
                endpoint.switch_username()
            ),
        ))
    }
}

/// Remove the default switch credentials.
#[derive(Debug, Clone)]
pub struct DefaultSwitchDelete {
    rest_send: RestSend,
}

impl DefaultSwitchDelete {
    pub fn new(rest_send: RestSend) -> Self {
        Self { rest_send }
    }

    pub async fn commit(&self) -> Result<CredentialsChange, Error> {
        let outcome = self
            .rest_send
            .commit_as("DefaultSwitchDelete", &ep::DefaultSwitchDelete.request())
            .await?;
        info!("default switch credentials deleted");
        Ok(CredentialsChange::new(
            outcome,
            "Default switch credentials deleted",
        ))
    }
}
