// Credential business objects
//
// Fabric-wide default and robot credentials, per-switch user credentials,
// and the credentials overview. Each object is built with a `RestSend` and
// its inputs; a successful `commit` returns the typed view of the reply.

mod default_switch;
mod details;
mod robot_switch;
mod user_switch;

use serde_json::Value;

use crate::error::Error;
use crate::rest_send::{CommitResult, SendOutcome};
use crate::sender::ControllerResponse;
use crate::switches::SwitchInventory;

pub use default_switch::{
    DefaultSwitchCredentials, DefaultSwitchDelete, DefaultSwitchGet, DefaultSwitchSave,
};
pub use details::{CredentialsDetails, CredentialsDetailsGet};
pub use robot_switch::{RobotSwitchCredentials, RobotSwitchDelete, RobotSwitchGet, RobotSwitchSave};
pub use user_switch::{
    DeletedSwitch, UserSwitchCredentials, UserSwitchDelete, UserSwitchDeleteReport,
    UserSwitchGet, UserSwitchSave,
};

/// What a credential save or delete reports back.
#[derive(Debug, Clone)]
pub struct CredentialsChange {
    pub result: CommitResult,
    pub response: ControllerResponse,
    summary: String,
}

impl CredentialsChange {
    pub(crate) fn new(outcome: SendOutcome, summary: impl Into<String>) -> Self {
        Self {
            result: outcome.result,
            response: outcome.response,
            summary: summary.into(),
        }
    }

    /// One-line description of what was done.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn changed(&self) -> bool {
        self.result.changed
    }
}

/// `value[key]` as a string, or `""`.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Serial number of `switch_name`, or `UnknownSwitch` if the fabric has
/// no such switch (or it has no serial number).
pub(crate) fn serial_number_of(
    inventory: &SwitchInventory,
    switch_name: &str,
) -> Result<String, Error> {
    inventory
        .switch_name_to_serial_number(switch_name)
        .ok()
        .filter(|serial| !serial.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| Error::UnknownSwitch {
            switch_name: switch_name.to_owned(),
            fabric_name: inventory.fabric_name().to_owned(),
        })
}
