//! Schemas for the credential operations.

use secrecy::SecretString;
use serde::Deserialize;

use super::{Validate, check_len, check_secret_len};
use crate::error::Error;

const FABRIC_NAME_MAX: usize = 64;

/// ```yaml
/// switch_username: admin
/// switch_password: secret
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultSwitchSaveConfig {
    pub switch_username: String,
    pub switch_password: SecretString,
}

impl Validate for DefaultSwitchSaveConfig {
    fn validate(&self) -> Result<(), Error> {
        check_len("switch_username", &self.switch_username, 1, None)?;
        check_secret_len("switch_password", &self.switch_password, 1)
    }
}

/// Same shape as [`DefaultSwitchSaveConfig`].
#[derive(Debug, Clone, Deserialize)]
pub struct RobotSwitchSaveConfig {
    pub switch_username: String,
    pub switch_password: SecretString,
}

impl Validate for RobotSwitchSaveConfig {
    fn validate(&self) -> Result<(), Error> {
        check_len("switch_username", &self.switch_username, 1, None)?;
        check_secret_len("switch_password", &self.switch_password, 1)
    }
}

/// Optional switch-name filter for user credential lookups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSwitchGetConfig {
    #[serde(default)]
    pub filter: String,
}

impl Validate for UserSwitchGetConfig {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSwitchSaveItem {
    pub fabric_name: String,
    pub switch_name: String,
    pub switch_username: String,
    pub switch_password: SecretString,
}

impl Validate for UserSwitchSaveItem {
    fn validate(&self) -> Result<(), Error> {
        check_len("fabric_name", &self.fabric_name, 1, Some(FABRIC_NAME_MAX))?;
        check_len("switch_name", &self.switch_name, 1, None)?;
        check_len("switch_username", &self.switch_username, 1, None)?;
        check_secret_len("switch_password", &self.switch_password, 1)
    }
}

/// ```yaml
/// config:
///   - fabric_name: SITE1
///     switch_name: LE1
///     switch_username: admin
///     switch_password: secret
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct UserSwitchSaveConfig {
    pub config: Vec<UserSwitchSaveItem>,
}

impl Validate for UserSwitchSaveConfig {
    fn validate(&self) -> Result<(), Error> {
        self.config.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSwitchDeleteItem {
    pub fabric_name: String,
    pub switch_name: String,
}

impl Validate for UserSwitchDeleteItem {
    fn validate(&self) -> Result<(), Error> {
        check_len("fabric_name", &self.fabric_name, 1, Some(FABRIC_NAME_MAX))?;
        check_len("switch_name", &self.switch_name, 1, None)
    }
}

/// ```yaml
/// config:
///   - fabric_name: SITE1
///     switch_name: LE1
///   - fabric_name: SITE2
///     switch_name: LE2
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct UserSwitchDeleteConfig {
    pub config: Vec<UserSwitchDeleteItem>,
}

impl Validate for UserSwitchDeleteConfig {
    fn validate(&self) -> Result<(), Error> {
        self.config.validate()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_save_requires_both_fields() {
        let missing: Result<DefaultSwitchSaveConfig, _> =
            serde_json::from_value(json!({"switch_username": "admin"}));
        assert!(missing.is_err());

        let config: DefaultSwitchSaveConfig =
            serde_json::from_value(json!({"switch_username": "", "switch_password": "pw"}))
                .expect("parse");
        assert!(config.validate().is_err());
    }

    #[test]
    fn robot_save_accepts_valid_input() {
        let config: RobotSwitchSaveConfig =
            serde_json::from_value(json!({"switch_username": "robot", "switch_password": "pw"}))
                .expect("parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.switch_password.expose_secret(), "pw");
    }

    #[test]
    fn user_get_filter_defaults_to_empty() {
        let config: UserSwitchGetConfig = serde_json::from_value(json!({})).expect("parse");
        assert_eq!(config.filter, "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn user_save_checks_every_item() {
        let config: UserSwitchSaveConfig = serde_json::from_value(json!({
            "config": [
                {"fabric_name": "SITE1", "switch_name": "LE1",
                 "switch_username": "admin", "switch_password": "pw"},
                {"fabric_name": "x".repeat(65), "switch_name": "LE2",
                 "switch_username": "admin", "switch_password": "pw"}
            ]
        }))
        .expect("parse");

        let err = config.validate().expect_err("second item too long");
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "fabric_name"));
    }

    #[test]
    fn user_delete_requires_switch_name() {
        let config: UserSwitchDeleteConfig = serde_json::from_value(json!({
            "config": [{"fabric_name": "SITE1", "switch_name": ""}]
        }))
        .expect("parse");
        assert!(config.validate().is_err());
    }
}
