//! Switch endpoints under `/api/v1/manage/switches`.

use super::{Endpoint, SWITCHES, with_query};
use crate::error::Error;
use crate::sender::Verb;

/// `GET /switches?fabricName=<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchesInventoryGet {
    fabric_name: String,
}

impl SwitchesInventoryGet {
    /// Fails if `fabric_name` is empty.
    pub fn new(fabric_name: impl Into<String>) -> Result<Self, Error> {
        let fabric_name = fabric_name.into();
        if fabric_name.is_empty() {
            return Err(Error::validation(
                "fabric_name",
                "must be set before requesting the switch inventory",
            ));
        }
        Ok(Self { fabric_name })
    }

    pub fn fabric_name(&self) -> &str {
        &self.fabric_name
    }
}

impl Endpoint for SwitchesInventoryGet {
    fn verb(&self) -> Verb {
        Verb::Get
    }

    fn path(&self) -> String {
        with_query(SWITCHES, [("fabricName", self.fabric_name.clone())])
    }

    fn description(&self) -> &'static str {
        "Get Switches Inventory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_path_carries_fabric_name() {
        let ep = SwitchesInventoryGet::new("SITE1").expect("valid");
        assert_eq!(ep.path(), "/api/v1/manage/switches?fabricName=SITE1");
        assert_eq!(ep.description(), "Get Switches Inventory");
    }

    #[test]
    fn empty_fabric_name_is_rejected() {
        assert!(matches!(
            SwitchesInventoryGet::new(""),
            Err(Error::Validation { .. })
        ));
    }
}
