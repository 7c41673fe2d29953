use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, LookupKind};
use crate::sender::ControllerResponse;

/// One entry of `DATA.switches`.
///
/// Only the fields the indexer needs are typed; everything else the
/// controller sends is kept in `extra`. A typed field holding a value of the
/// wrong JSON type reads as absent, so that record just drops out of the
/// matching index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRecord {
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub hostname: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub serial_number: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub fabric_management_ip: Option<String>,
    #[serde(
        default,
        deserialize_with = "bool_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub vpc_configured: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn bool_or_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

impl SwitchRecord {
    fn key(&self, kind: LookupKind) -> Option<&str> {
        match kind {
            LookupKind::SwitchName => self.hostname.as_deref(),
            LookupKind::Ipv4Address => self.fabric_management_ip.as_deref(),
            LookupKind::SerialNumber => self.serial_number.as_deref(),
        }
    }
}

fn field_label(kind: LookupKind) -> &'static str {
    match kind {
        LookupKind::SwitchName => "switch name",
        LookupKind::Ipv4Address => "IPv4 address",
        LookupKind::SerialNumber => "serial number",
    }
}

/// A fabric's switches, indexed by name, management IPv4 address and
/// serial number.
///
/// Each index maps its key to a position in `switches()`. Records without
/// the key are left out of that index. A duplicate key points at the last
/// record carrying it but keeps the position where it was first seen.
#[derive(Debug, Clone)]
pub struct SwitchInventory {
    fabric_name: String,
    response: ControllerResponse,
    meta: Value,
    switches: Vec<SwitchRecord>,
    by_switch_name: IndexMap<String, usize>,
    by_ipv4_address: IndexMap<String, usize>,
    by_serial_number: IndexMap<String, usize>,
}

impl SwitchInventory {
    /// Index the switches carried in `response`.
    ///
    /// A reply without `DATA.switches` yields an empty inventory.
    pub fn from_response(
        fabric_name: impl Into<String>,
        response: ControllerResponse,
    ) -> Result<Self, Error> {
        let switches = match response.data_field("switches") {
            Value::Null => Vec::new(),
            value => Vec::<SwitchRecord>::deserialize(value).map_err(|e| {
                Error::Deserialization {
                    message: format!("DATA.switches: {e}"),
                    body: value.to_string(),
                }
            })?,
        };
        let meta = match response.data_field("meta") {
            Value::Null => Value::Object(Map::new()),
            value => value.clone(),
        };
        Ok(Self::build(fabric_name.into(), response, meta, switches))
    }

    fn build(
        fabric_name: String,
        response: ControllerResponse,
        meta: Value,
        switches: Vec<SwitchRecord>,
    ) -> Self {
        let mut by_switch_name = IndexMap::new();
        let mut by_ipv4_address = IndexMap::new();
        let mut by_serial_number = IndexMap::new();

        for (position, switch) in switches.iter().enumerate() {
            if let Some(name) = &switch.hostname {
                by_switch_name.insert(name.clone(), position);
            }
            if let Some(ip) = &switch.fabric_management_ip {
                by_ipv4_address.insert(ip.clone(), position);
            }
            if let Some(serial) = &switch.serial_number {
                by_serial_number.insert(serial.clone(), position);
            }
        }

        Self {
            fabric_name,
            response,
            meta,
            switches,
            by_switch_name,
            by_ipv4_address,
            by_serial_number,
        }
    }

    // ── Response metadata ───────────────────────────────────────────

    pub fn fabric_name(&self) -> &str {
        &self.fabric_name
    }

    /// The whole `DATA` object.
    pub fn data(&self) -> &Value {
        &self.response.data
    }

    /// `DATA.meta`, or an empty object.
    pub fn inventory_meta(&self) -> &Value {
        &self.meta
    }

    pub fn request_method(&self) -> &str {
        &self.response.method
    }

    pub fn request_path(&self) -> &str {
        &self.response.request_path
    }

    pub fn response_message(&self) -> &str {
        &self.response.message
    }

    pub fn return_code(&self) -> u16 {
        self.response.return_code
    }

    // ── Records and indices ─────────────────────────────────────────

    pub fn switches(&self) -> &[SwitchRecord] {
        &self.switches
    }

    /// Switch names, in index order.
    pub fn devices(&self) -> Vec<&str> {
        self.by_switch_name.keys().map(String::as_str).collect()
    }

    pub fn by_switch_name(&self) -> impl Iterator<Item = (&str, &SwitchRecord)> {
        self.index_iter(&self.by_switch_name)
    }

    pub fn by_ipv4_address(&self) -> impl Iterator<Item = (&str, &SwitchRecord)> {
        self.index_iter(&self.by_ipv4_address)
    }

    pub fn by_serial_number(&self) -> impl Iterator<Item = (&str, &SwitchRecord)> {
        self.index_iter(&self.by_serial_number)
    }

    /// The record a key resolves to through the given index.
    pub fn get(&self, kind: LookupKind, key: &str) -> Option<&SwitchRecord> {
        self.index(kind)
            .get(key)
            .and_then(|&position| self.switches.get(position))
    }

    fn index(&self, kind: LookupKind) -> &IndexMap<String, usize> {
        match kind {
            LookupKind::SwitchName => &self.by_switch_name,
            LookupKind::Ipv4Address => &self.by_ipv4_address,
            LookupKind::SerialNumber => &self.by_serial_number,
        }
    }

    fn index_iter<'a>(
        &'a self,
        index: &'a IndexMap<String, usize>,
    ) -> impl Iterator<Item = (&'a str, &'a SwitchRecord)> {
        index.iter().filter_map(|(key, &position)| {
            self.switches
                .get(position)
                .map(|switch| (key.as_str(), switch))
        })
    }

    // ── Cross lookups ───────────────────────────────────────────────

    fn resolve(&self, from: LookupKind, key: &str, to: LookupKind) -> Result<&str, Error> {
        let switch = self.get(from, key).ok_or_else(|| Error::NotFound {
            kind: from,
            key: key.to_owned(),
            fabric_name: self.fabric_name.clone(),
        })?;
        switch.key(to).ok_or_else(|| Error::MissingField {
            kind: from,
            key: key.to_owned(),
            field: field_label(to),
            fabric_name: self.fabric_name.clone(),
        })
    }

    pub fn switch_name_to_serial_number(&self, switch_name: &str) -> Result<&str, Error> {
        self.resolve(LookupKind::SwitchName, switch_name, LookupKind::SerialNumber)
    }

    pub fn switch_name_to_ipv4_address(&self, switch_name: &str) -> Result<&str, Error> {
        self.resolve(LookupKind::SwitchName, switch_name, LookupKind::Ipv4Address)
    }

    pub fn ipv4_address_to_switch_name(&self, ipv4_address: &str) -> Result<&str, Error> {
        self.resolve(LookupKind::Ipv4Address, ipv4_address, LookupKind::SwitchName)
    }

    pub fn ipv4_address_to_serial_number(&self, ipv4_address: &str) -> Result<&str, Error> {
        self.resolve(LookupKind::Ipv4Address, ipv4_address, LookupKind::SerialNumber)
    }

    pub fn serial_number_to_ipv4_address(&self, serial_number: &str) -> Result<&str, Error> {
        self.resolve(LookupKind::SerialNumber, serial_number, LookupKind::Ipv4Address)
    }

    pub fn serial_number_to_switch_name(&self, serial_number: &str) -> Result<&str, Error> {
        self.resolve(LookupKind::SerialNumber, serial_number, LookupKind::SwitchName)
    }

    /// Whether two switches look like vPC peers.
    ///
    /// Both names must resolve to serial numbers. The reply carries no peer
    /// serial, so two distinct switches that both report `vpcConfigured`
    /// are treated as peers.
    pub fn is_vpc_peer(&self, switch_name: &str, peer_switch_name: &str) -> Result<bool, Error> {
        let serial_number = self.switch_name_to_serial_number(switch_name)?;
        let peer_serial_number = self.switch_name_to_serial_number(peer_switch_name)?;

        let configured = |name: &str| {
            self.get(LookupKind::SwitchName, name)
                .and_then(|switch| switch.vpc_configured)
                == Some(true)
        };

        Ok(configured(switch_name)
            && configured(peer_switch_name)
            && serial_number != peer_serial_number)
    }
}
