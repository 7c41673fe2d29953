// Input schemas
//
// Each operation reads its parameters from a YAML document. These structs
// describe that document; serde enforces presence and types, `Validate`
// enforces lengths and other ranges serde cannot express.

pub mod credentials;
pub mod fabric;
pub mod switches;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

pub use credentials::{
    DefaultSwitchSaveConfig, RobotSwitchSaveConfig, UserSwitchDeleteConfig,
    UserSwitchDeleteItem, UserSwitchGetConfig, UserSwitchSaveConfig, UserSwitchSaveItem,
};
pub use fabric::FabricDetailGetConfig;
pub use switches::{InventoryGetConfig, InventoryGetItem};

/// Range checks applied after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), Error>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), Error> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Character-count bounds for a string field.
pub(crate) fn check_len(
    field: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), Error> {
    let len = value.chars().count();
    if len < min {
        let unit = if min == 1 { "character" } else { "characters" };
        return Err(Error::validation(
            field,
            format!("must contain at least {min} {unit}"),
        ));
    }
    if let Some(max) = max.filter(|&max| len > max) {
        return Err(Error::validation(
            field,
            format!("must contain at most {max} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn check_secret_len(field: &str, value: &SecretString, min: usize) -> Result<(), Error> {
    check_len(field, value.expose_secret(), min, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds() {
        assert!(check_len("fabric_name", "SITE1", 1, Some(64)).is_ok());

        let err = check_len("fabric_name", "", 1, Some(64)).expect_err("too short");
        assert_eq!(
            err.to_string(),
            "Invalid fabric_name: must contain at least 1 character"
        );

        let long = "x".repeat(65);
        let err = check_len("fabric_name", &long, 1, Some(64)).expect_err("too long");
        assert_eq!(
            err.to_string(),
            "Invalid fabric_name: must contain at most 64 characters"
        );
    }

    #[test]
    fn secret_bounds() {
        let empty = SecretString::from(String::new());
        assert!(check_secret_len("switch_password", &empty, 1).is_err());
    }
}
