//! Credential endpoints under `/api/v1/manage/credentials`.
//!
//! Default and robot switch credentials are fabric-wide; user switch
//! credentials are per switch and keyed by serial number.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use super::{CREDENTIALS, Endpoint, simple_endpoint};
use crate::error::Error;
use crate::sender::Verb;

simple_endpoint!(
    /// `GET /credentials/defaultSwitchCredentials`
    DefaultSwitchGet,
    Verb::Get,
    format!("{CREDENTIALS}/defaultSwitchCredentials"),
    "Get Default Switch Credentials"
);

simple_endpoint!(
    /// `DELETE /credentials/defaultSwitchCredentials`
    DefaultSwitchDelete,
    Verb::Delete,
    format!("{CREDENTIALS}/defaultSwitchCredentials"),
    "Delete Default Switch Credentials"
);

simple_endpoint!(
    /// `GET /credentials/robotSwitchCredentials`
    RobotSwitchGet,
    Verb::Get,
    format!("{CREDENTIALS}/robotSwitchCredentials"),
    "Get Robot Switch Credentials"
);

simple_endpoint!(
    /// `DELETE /credentials/robotSwitchCredentials`
    RobotSwitchDelete,
    Verb::Delete,
    format!("{CREDENTIALS}/robotSwitchCredentials"),
    "Delete Robot Switch Credentials"
);

simple_endpoint!(
    /// `GET /credentials/switches`
    UserSwitchGet,
    Verb::Get,
    format!("{CREDENTIALS}/switches"),
    "Get User Switch Credentials"
);

simple_endpoint!(
    /// `POST /credentials/switches`
    UserSwitchSave,
    Verb::Post,
    format!("{CREDENTIALS}/switches"),
    "Save User Switch Credentials"
);

simple_endpoint!(
    /// `POST /credentials/switches/actions/remove`
    ///
    /// Removal is a POST carrying the serial numbers, not a DELETE.
    UserSwitchDelete,
    Verb::Post,
    format!("{CREDENTIALS}/switches/actions/remove"),
    "Delete User Switch Credentials"
);

simple_endpoint!(
    /// `GET /credentials/details`
    CredentialsDetailsGet,
    Verb::Get,
    format!("{CREDENTIALS}/details"),
    "Get Credentials Details"
);

/// Username/password pair shared by the default and robot save bodies.
///
/// Both values must be non-empty once trimmed; they are sent as given.
#[derive(Debug, Clone)]
struct SwitchLogin {
    username: String,
    password: SecretString,
}

impl SwitchLogin {
    fn new(username: &str, password: &SecretString) -> Result<Self, Error> {
        if username.trim().is_empty() {
            return Err(Error::validation(
                "switchUsername",
                "must contain at least 1 character",
            ));
        }
        if password.expose_secret().trim().is_empty() {
            return Err(Error::validation(
                "switchPassword",
                "must contain at least 1 character",
            ));
        }
        Ok(Self {
            username: username.to_owned(),
            password: SecretString::from(password.expose_secret().to_owned()),
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "switchUsername": self.username,
            "switchPassword": self.password.expose_secret(),
        })
    }
}

/// `POST /credentials/defaultSwitchCredentials`
///
/// Body: `{"switchUsername": "...", "switchPassword": "..."}`
#[derive(Debug, Clone)]
pub struct DefaultSwitchSave {
    login: SwitchLogin,
}

impl DefaultSwitchSave {
    pub fn new(switch_username: &str, switch_password: &SecretString) -> Result<Self, Error> {
        Ok(Self {
            login: SwitchLogin::new(switch_username, switch_password)?,
        })
    }

    pub fn switch_username(&self) -> &str {
        &self.login.username
    }
}

impl Endpoint for DefaultSwitchSave {
    fn verb(&self) -> Verb {
        Verb::Post
    }

    fn path(&self) -> String {
        format!("{CREDENTIALS}/defaultSwitchCredentials")
    }

    fn description(&self) -> &'static str {
        "Save Default Switch Credentials"
    }

    fn body(&self) -> Option<Value> {
        Some(self.login.to_json())
    }
}

/// `POST /credentials/robotSwitchCredentials`
///
/// Same body as [`DefaultSwitchSave`] plus `"isRobot": true`.
#[derive(Debug, Clone)]
pub struct RobotSwitchSave {
    login: SwitchLogin,
}

impl RobotSwitchSave {
    pub fn new(switch_username: &str, switch_password: &SecretString) -> Result<Self, Error> {
        Ok(Self {
            login: SwitchLogin::new(switch_username, switch_password)?,
        })
    }

    pub fn switch_username(&self) -> &str {
        &self.login.username
    }
}

impl Endpoint for RobotSwitchSave {
    fn verb(&self) -> Verb {
        Verb::Post
    }

    fn path(&self) -> String {
        format!("{CREDENTIALS}/robotSwitchCredentials")
    }

    fn description(&self) -> &'static str {
        "Save Robot Switch Credentials"
    }

    fn body(&self) -> Option<Value> {
        let mut body = self.login.to_json();
        body["isRobot"] = Value::Bool(true);
        Some(body)
    }
}
