use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::endpoints::credentials as ep;
use crate::error::Error;
use crate::rest_send::RestSend;

/// Read the credentials overview.
#[derive(Debug, Clone)]
pub struct CredentialsDetailsGet {
    rest_send: RestSend,
}

impl CredentialsDetailsGet {
    pub fn new(rest_send: RestSend) -> Self {
        Self { rest_send }
    }

    pub async fn commit(&self) -> Result<CredentialsDetails, Error> {
        let outcome = self
            .rest_send
            .commit_as("CredentialsDetailsGet", &ep::CredentialsDetailsGet.request())
            .await?;
        Ok(CredentialsDetails {
            data: outcome.response.data,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CredentialsDetails {
    data: Value,
}

impl CredentialsDetails {
    pub fn data(&self) -> &Value {
        &self.data
    }
}
