use serde_json::Value;
use tracing::info;

use crate::endpoints::fabrics as ep;
use crate::endpoints::{Endpoint, QueryFilter};
use crate::error::Error;
use crate::rest_send::RestSend;
use crate::validators::{FabricDetailGetConfig, Validate};

/// Query fabric details, narrowed by a filter.
#[derive(Debug, Clone)]
pub struct FabricDetailGet {
    rest_send: RestSend,
    endpoint: ep::FabricDetailGet,
}

impl FabricDetailGet {
    pub fn new(rest_send: RestSend, query_filter: QueryFilter) -> Self {
        Self {
            rest_send,
            endpoint: ep::FabricDetailGet::new(query_filter),
        }
    }

    /// Build from a validated input document.
    pub fn from_config(rest_send: RestSend, config: &FabricDetailGetConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::new(rest_send, config.to_query_filter()))
    }

    pub fn query_filter(&self) -> &QueryFilter {
        &self.endpoint.query_filter
    }

    pub async fn commit(&self) -> Result<FabricDetails, Error> {
        let outcome = self
            .rest_send
            .commit_as("FabricDetailGet", &self.endpoint.request())
            .await?;
        info!(path = %outcome.response.request_path, "fabric details retrieved");
        Ok(FabricDetails {
            found: outcome.result.found,
            data: outcome.response.data,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FabricDetails {
    found: bool,
    data: Value,
}

impl FabricDetails {
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn found(&self) -> bool {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::sender::{ControllerResponse, ScriptedSender};

    #[tokio::test]
    async fn commit_sends_filtered_path() {
        let sender = Arc::new(ScriptedSender::new([ControllerResponse::new(
            200,
            json!({"fabrics": [{"name": "SITE1"}]}),
        )]));
        let config = FabricDetailGetConfig {
            filter: Some("name:SITE1".into()),
            ..FabricDetailGetConfig::default()
        };

        let details = FabricDetailGet::from_config(RestSend::new(sender.clone()), &config)
            .expect("valid config")
            .commit()
            .await
            .expect("commit");

        assert_eq!(details.data()["fabrics"][0]["name"], json!("SITE1"));
        assert_eq!(
            sender.requests()[0].path,
            "/api/v1/manage/fabrics?category=fabric&filter=name%3ASITE1"
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let sender = Arc::new(ScriptedSender::default());
        let config = FabricDetailGetConfig {
            filter: Some(String::new()),
            ..FabricDetailGetConfig::default()
        };
        assert!(FabricDetailGet::from_config(RestSend::new(sender), &config).is_err());
    }
}
