use indexmap::IndexMap;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use super::{CredentialsChange, serial_number_of, str_field};
use crate::endpoints::Endpoint;
use crate::endpoints::credentials as ep;
use crate::error::Error;
use crate::rest_send::RestSend;
use crate::switches::{SwitchInventory, SwitchesInventoryGet};
use crate::validators::{UserSwitchDeleteItem, UserSwitchSaveItem, Validate};

const RECORD_KEYS: [&str; 7] = [
    "credentialStore",
    "fabricName",
    "ip",
    "switchId",
    "switchName",
    "switchUsername",
    "type",
];

/// Read per-switch user credentials, optionally narrowed to one switch.
#[derive(Debug, Clone)]
pub struct UserSwitchGet {
    rest_send: RestSend,
    filter: String,
}

impl UserSwitchGet {
    pub fn new(rest_send: RestSend) -> Self {
        Self {
            rest_send,
            filter: String::new(),
        }
    }

    /// Select the record whose `switchName` equals `switch_name`.
    pub fn with_filter(mut self, switch_name: impl Into<String>) -> Self {
        self.filter = switch_name.into();
        self
    }

    pub async fn commit(&self) -> Result<UserSwitchCredentials, Error> {
        let outcome = self
            .rest_send
            .commit_as("UserSwitchGet", &ep::UserSwitchGet.request())
            .await?;

        let items: Vec<Map<String, Value>> = match outcome.response.data_field("items") {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_object().cloned())
                .collect(),
            _ => Vec::new(),
        };
        debug!(items = items.len(), filter = %self.filter, "user switch credentials");
        Ok(UserSwitchCredentials::new(items, self.filter.clone()))
    }
}

/// User switch credentials plus the record selected by the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSwitchCredentials {
    items: Vec<Map<String, Value>>,
    filter: String,
    filtered: Value,
}

impl UserSwitchCredentials {
    fn new(items: Vec<Map<String, Value>>, filter: String) -> Self {
        let empty: Map<String, Value> = RECORD_KEYS
            .iter()
            .map(|key| ((*key).to_owned(), Value::String(String::new())))
            .collect();

        // Last match wins.
        let filtered = if filter.is_empty() {
            None
        } else {
            items
                .iter()
                .rev()
                .find(|item| item.get("switchName").and_then(Value::as_str) == Some(filter.as_str()))
                .cloned()
        };

        Self {
            items,
            filter,
            filtered: Value::Object(filtered.unwrap_or(empty)),
        }
    }

    /// `DATA.items`, objects only.
    pub fn data(&self) -> &[Map<String, Value>] {
        &self.items
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// `true` when a filter was applied.
    pub fn data_filtered(&self) -> bool {
        !self.filter.is_empty()
    }

    /// The selected record, or a record of empty strings when nothing
    /// matched.
    pub fn filtered_data(&self) -> &Value {
        &self.filtered
    }

    pub fn credential_store(&self) -> &str {
        str_field(&self.filtered, "credentialStore")
    }

    pub fn credential_type(&self) -> &str {
        str_field(&self.filtered, "type")
    }

    pub fn fabric_name(&self) -> &str {
        str_field(&self.filtered, "fabricName")
    }

    pub fn ip(&self) -> &str {
        str_field(&self.filtered, "ip")
    }

    pub fn switch_id(&self) -> &str {
        str_field(&self.filtered, "switchId")
    }

    pub fn switch_name(&self) -> &str {
        str_field(&self.filtered, "switchName")
    }

    pub fn switch_username(&self) -> &str {
        str_field(&self.filtered, "switchUsername")
    }
}

/// Store user credentials for a single switch.
///
/// The switch is named by hostname; its serial number is looked up in the
/// fabric inventory before the save is sent.
#[derive(Debug, Clone)]
pub struct UserSwitchSave {
    rest_send: RestSend,
    item: UserSwitchSaveItem,
}

impl UserSwitchSave {
    pub fn new(rest_send: RestSend, item: UserSwitchSaveItem) -> Self {
        Self { rest_send, item }
    }

    pub async fn commit(&self) -> Result<CredentialsChange, Error> {
        self.item.validate()?;
        let inventory = SwitchesInventoryGet::new(self.rest_send.clone(), &self.item.fabric_name)
            .commit()
            .await?;
        let serial_number = serial_number_of(&inventory, &self.item.switch_name)?;

        let payload = json!({
            "switchIds": [{"switchId": serial_number}],
            "switchUsername": self.item.switch_username,
            "switchPassword": self.item.switch_password.expose_secret(),
        });
        let request = ep::UserSwitchSave.request().with_payload(payload);
        let outcome = self.rest_send.commit_as("UserSwitchSave", &request).await?;

        info!(
            fabric = %self.item.fabric_name,
            switch = %self.item.switch_name,
            serial_number = %serial_number,
            "user switch credentials saved"
        );
        Ok(CredentialsChange::new(
            outcome,
            format!(
                "User switch credentials saved for fabric {} switch {} serial number {}",
                self.item.fabric_name, self.item.switch_name, serial_number
            ),
        ))
    }
}

/// A switch whose user credentials were removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedSwitch {
    pub fabric_name: String,
    pub switch_name: String,
    pub serial_number: String,
}

/// Remove user credentials from one or more switches, across fabrics.
#[derive(Debug, Clone)]
pub struct UserSwitchDelete {
    rest_send: RestSend,
    items: Vec<UserSwitchDeleteItem>,
}

impl UserSwitchDelete {
    pub fn new(rest_send: RestSend, items: Vec<UserSwitchDeleteItem>) -> Self {
        Self { rest_send, items }
    }

    pub async fn commit(&self) -> Result<UserSwitchDeleteReport, Error> {
        self.items.validate()?;

        let mut inventories: IndexMap<String, SwitchInventory> = IndexMap::new();
        let mut switches = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !inventories.contains_key(&item.fabric_name) {
                let inventory =
                    SwitchesInventoryGet::new(self.rest_send.clone(), &item.fabric_name)
                        .commit()
                        .await?;
                inventories.insert(item.fabric_name.clone(), inventory);
            }
            let Some(inventory) = inventories.get(&item.fabric_name) else {
                continue;
            };
            switches.push(DeletedSwitch {
                fabric_name: item.fabric_name.clone(),
                switch_name: item.switch_name.clone(),
                serial_number: serial_number_of(inventory, &item.switch_name)?,
            });
        }
        if switches.is_empty() {
            return Err(Error::NoSwitchesToDelete);
        }

        let serial_numbers: Vec<&str> = switches
            .iter()
            .map(|switch| switch.serial_number.as_str())
            .collect();
        let request = ep::UserSwitchDelete
            .request()
            .with_payload(json!({ "switchIds": serial_numbers }));
        let outcome = self.rest_send.commit_as("UserSwitchDelete", &request).await?;

        let summary = format!(
            "User switch credentials deleted for {} switch(es)",
            switches.len()
        );
        let report = UserSwitchDeleteReport {
            change: CredentialsChange::new(outcome, summary),
            switches,
            inventories,
        };
        info!(count = report.switches.len(), "user switch credentials deleted");
        Ok(report)
    }
}

/// Which switches were cleared, and the inventories used to find them.
#[derive(Debug, Clone)]
pub struct UserSwitchDeleteReport {
    pub change: CredentialsChange,
    switches: Vec<DeletedSwitch>,
    inventories: IndexMap<String, SwitchInventory>,
}

impl UserSwitchDeleteReport {
    pub fn switches(&self) -> &[DeletedSwitch] {
        &self.switches
    }

    /// Inventory fetched for each fabric, keyed by fabric name.
    pub fn fabric_inventory(&self) -> &IndexMap<String, SwitchInventory> {
        &self.inventories
    }

    /// One line per switch: `Fabric F switch S serial number N.`
    pub fn summary(&self) -> String {
        self.switches
            .iter()
            .map(|switch| {
                format!(
                    "Fabric {} switch {} serial number {}.\n",
                    switch.fabric_name, switch.switch_name, switch.serial_number
                )
            })
            .collect()
    }
}
