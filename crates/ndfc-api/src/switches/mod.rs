// Switch inventory
//
// One GET returns every switch in a fabric. `SwitchInventory` indexes that
// list three ways and answers the name/IP/serial cross lookups that the
// user credential operations depend on.

mod inventory;

use tracing::info;

use crate::endpoints::Endpoint;
use crate::endpoints::switches as ep;
use crate::error::Error;
use crate::rest_send::RestSend;

pub use inventory::{SwitchInventory, SwitchRecord};

/// Fetch the switch inventory of one fabric.
#[derive(Debug, Clone)]
pub struct SwitchesInventoryGet {
    rest_send: RestSend,
    fabric_name: String,
}

impl SwitchesInventoryGet {
    pub fn new(rest_send: RestSend, fabric_name: impl Into<String>) -> Self {
        Self {
            rest_send,
            fabric_name: fabric_name.into(),
        }
    }

    pub fn fabric_name(&self) -> &str {
        &self.fabric_name
    }

    pub async fn commit(&self) -> Result<SwitchInventory, Error> {
        let endpoint = ep::SwitchesInventoryGet::new(self.fabric_name.as_str())?;
        let request = endpoint.request();
        let outcome = self
            .rest_send
            .commit_as("SwitchesInventoryGet", &request)
            .await?;

        let inventory = SwitchInventory::from_response(&self.fabric_name, outcome.response)?;
        info!(
            fabric = %self.fabric_name,
            switches = inventory.switches().len(),
            "switch inventory retrieved"
        );
        Ok(inventory)
    }
}
