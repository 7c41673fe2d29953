//! Credential command handlers.

use serde_json::{Map, Value};
use tabled::Tabled;

use ndfc_api::RestSend;
use ndfc_api::credentials::{
    CredentialsDetailsGet, DefaultSwitchDelete, DefaultSwitchGet, DefaultSwitchSave,
    DeletedSwitch, RobotSwitchDelete, RobotSwitchGet, RobotSwitchSave, UserSwitchDelete,
    UserSwitchGet, UserSwitchSave,
};
use ndfc_api::validators::{
    DefaultSwitchSaveConfig, RobotSwitchSaveConfig, UserSwitchDeleteConfig, UserSwitchGetConfig,
    UserSwitchSaveConfig,
};

use crate::cli::{
    CredentialsArgs, CredentialsCommand, FabricCredentialCommand, GlobalOpts,
    UserCredentialCommand,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct UserCredentialRow {
    #[tabled(rename = "Fabric")]
    fabric: String,
    #[tabled(rename = "Switch")]
    switch: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Store")]
    store: String,
}

impl From<&Map<String, Value>> for UserCredentialRow {
    fn from(item: &Map<String, Value>) -> Self {
        let field = |key: &str| item.get(key).map(output::scalar).unwrap_or_default();
        Self {
            fabric: field("fabricName"),
            switch: field("switchName"),
            ip: field("ip"),
            serial: field("switchId"),
            username: field("switchUsername"),
            kind: field("type"),
            store: field("credentialStore"),
        }
    }
}

#[derive(Tabled)]
struct DeletedSwitchRow {
    #[tabled(rename = "Fabric")]
    fabric: String,
    #[tabled(rename = "Switch")]
    switch: String,
    #[tabled(rename = "Serial")]
    serial: String,
}

impl From<&DeletedSwitch> for DeletedSwitchRow {
    fn from(s: &DeletedSwitch) -> Self {
        Self {
            fabric: s.fabric_name.clone(),
            switch: s.switch_name.clone(),
            serial: s.serial_number.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    rest_send: &RestSend,
    args: CredentialsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CredentialsCommand::Default(args) => default_switch(rest_send, args.command, global).await,
        CredentialsCommand::Robot(args) => robot_switch(rest_send, args.command, global).await,
        CredentialsCommand::User(args) => user_switch(rest_send, args.command, global).await,
        CredentialsCommand::Details => {
            let details = CredentialsDetailsGet::new(rest_send.clone()).commit().await?;
            let out = output::render_value(&global.output, details.data());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

async fn default_switch(
    rest_send: &RestSend,
    command: FabricCredentialCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        FabricCredentialCommand::Get => {
            let creds = DefaultSwitchGet::new(rest_send.clone()).commit().await?;
            if !creds.found() && !global.quiet {
                eprintln!("No default switch credentials configured");
            }
            let out = output::render_value(&global.output, creds.data());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FabricCredentialCommand::Save { config } => {
            let config: DefaultSwitchSaveConfig = util::read_config(&config)?;
            let change = DefaultSwitchSave::new(rest_send.clone(), config)
                .commit()
                .await?;
            util::report_change(&change, global);
            Ok(())
        }

        FabricCredentialCommand::Delete => {
            if !util::confirm(
                "Delete the default switch credentials?",
                "credentials default delete",
                global,
            )? {
                return Ok(());
            }
            let change = DefaultSwitchDelete::new(rest_send.clone()).commit().await?;
            util::report_change(&change, global);
            Ok(())
        }
    }
}

async fn robot_switch(
    rest_send: &RestSend,
    command: FabricCredentialCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        FabricCredentialCommand::Get => {
            let creds = RobotSwitchGet::new(rest_send.clone()).commit().await?;
            if !creds.found() && !global.quiet {
                eprintln!("No robot switch credentials configured");
            }
            let out = output::render_value(&global.output, creds.data());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FabricCredentialCommand::Save { config } => {
            let config: RobotSwitchSaveConfig = util::read_config(&config)?;
            let change = RobotSwitchSave::new(rest_send.clone(), config)
                .commit()
                .await?;
            util::report_change(&change, global);
            Ok(())
        }

        FabricCredentialCommand::Delete => {
            if !util::confirm(
                "Delete the robot switch credentials?",
                "credentials robot delete",
                global,
            )? {
                return Ok(());
            }
            let change = RobotSwitchDelete::new(rest_send.clone()).commit().await?;
            util::report_change(&change, global);
            Ok(())
        }
    }
}

async fn user_switch(
    rest_send: &RestSend,
    command: UserCredentialCommand,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        UserCredentialCommand::Get { config, switch } => {
            let filter = match (config, switch) {
                (Some(path), _) => util::read_config::<UserSwitchGetConfig>(&path)?.filter,
                (None, Some(switch)) => switch,
                (None, None) => String::new(),
            };
            let creds = UserSwitchGet::new(rest_send.clone())
                .with_filter(filter)
                .commit()
                .await?;

            let out = if creds.data_filtered() {
                output::render_value(&global.output, creds.filtered_data())
            } else {
                output::render_list(
                    &global.output,
                    creds.data(),
                    |item| UserCredentialRow::from(item),
                    |item| {
                        item.get("switchName")
                            .map(output::scalar)
                            .unwrap_or_default()
                    },
                )
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UserCredentialCommand::Save { config } => {
            let config: UserSwitchSaveConfig = util::read_config(&config)?;
            for item in config.config {
                let change = UserSwitchSave::new(rest_send.clone(), item).commit().await?;
                util::report_change(&change, global);
            }
            Ok(())
        }

        UserCredentialCommand::Delete { config } => {
            let config: UserSwitchDeleteConfig = util::read_config(&config)?;
            if !util::confirm(
                &format!(
                    "Delete user credentials from {} switch(es)?",
                    config.config.len()
                ),
                "credentials user delete",
                global,
            )? {
                return Ok(());
            }
            let report = UserSwitchDelete::new(rest_send.clone(), config.config)
                .commit()
                .await?;

            let out = output::render_list(
                &global.output,
                report.switches(),
                |s| DeletedSwitchRow::from(s),
                |s| s.serial_number.clone(),
            );
            output::print_output(&out, global.quiet);
            util::report_change(&report.change, global);
            Ok(())
        }
    }
}
