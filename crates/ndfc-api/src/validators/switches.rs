//! Schema for switch inventory queries.

use serde::Deserialize;

use super::{Validate, check_len};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryGetItem {
    pub fabric_name: String,
}

impl Validate for InventoryGetItem {
    fn validate(&self) -> Result<(), Error> {
        check_len("fabric_name", &self.fabric_name, 1, None)
    }
}

/// ```yaml
/// config:
///   - fabric_name: SITE1
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryGetConfig {
    pub config: Vec<InventoryGetItem>,
}

impl Validate for InventoryGetConfig {
    fn validate(&self) -> Result<(), Error> {
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_fabric_name_fails() {
        let config: InventoryGetConfig =
            serde_json::from_value(json!({"config": [{"fabric_name": ""}]})).expect("parse");
        assert!(config.validate().is_err());
    }
}
