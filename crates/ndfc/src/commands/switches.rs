//! Switch inventory command handlers.

use serde::Serialize;
use tabled::Tabled;

use ndfc_api::RestSend;
use ndfc_api::switches::{SwitchRecord, SwitchesInventoryGet};
use ndfc_api::validators::InventoryGetConfig;

use crate::cli::{GlobalOpts, InventoryArgs, SwitchesArgs, SwitchesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Output rows ─────────────────────────────────────────────────────

/// A switch tagged with the fabric it was listed from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FabricSwitch {
    fabric_name: String,
    #[serde(flatten)]
    record: SwitchRecord,
}

#[derive(Tabled)]
struct SwitchRow {
    #[tabled(rename = "Fabric")]
    fabric: String,
    #[tabled(rename = "Switch")]
    name: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "vPC")]
    vpc: String,
}

impl From<&FabricSwitch> for SwitchRow {
    fn from(s: &FabricSwitch) -> Self {
        Self {
            fabric: s.fabric_name.clone(),
            name: s.record.hostname.clone().unwrap_or_default(),
            ip: s.record.fabric_management_ip.clone().unwrap_or_default(),
            serial: s.record.serial_number.clone().unwrap_or_default(),
            vpc: match s.record.vpc_configured {
                Some(true) => "yes".into(),
                Some(false) => "no".into(),
                None => String::new(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VpcPeerCheck {
    fabric_name: String,
    switch_name: String,
    peer_switch_name: String,
    vpc_peer: bool,
}

fn vpc_detail(check: &VpcPeerCheck) -> String {
    let verdict = if check.vpc_peer { "are" } else { "are not" };
    format!(
        "{} and {} {verdict} vPC peers in fabric {}",
        check.switch_name, check.peer_switch_name, check.fabric_name
    )
}

// ── Handler ─────────────────────────────────────────────────────────

/// Fabric names from `--config` or repeated `--fabric` flags.
fn fabric_names(args: InventoryArgs) -> Result<Vec<String>, CliError> {
    match args.config {
        Some(path) => {
            let config: InventoryGetConfig = util::read_config(&path)?;
            Ok(config.config.into_iter().map(|item| item.fabric_name).collect())
        }
        None => Ok(args.fabric),
    }
}

pub async fn handle(
    rest_send: &RestSend,
    args: SwitchesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SwitchesCommand::Inventory(args) => {
            let mut rows = Vec::new();
            for fabric_name in fabric_names(args)? {
                let inventory = SwitchesInventoryGet::new(rest_send.clone(), fabric_name)
                    .commit()
                    .await?;
                rows.extend(inventory.switches().iter().map(|record| FabricSwitch {
                    fabric_name: inventory.fabric_name().to_owned(),
                    record: record.clone(),
                }));
            }
            let out = output::render_list(&global.output, &rows, |s| SwitchRow::from(s), |s| {
                s.record.serial_number.clone().unwrap_or_default()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SwitchesCommand::VpcPeer {
            fabric,
            switch,
            peer,
        } => {
            let inventory = SwitchesInventoryGet::new(rest_send.clone(), fabric.as_str())
                .commit()
                .await?;
            let check = VpcPeerCheck {
                vpc_peer: inventory.is_vpc_peer(&switch, &peer)?,
                fabric_name: fabric,
                switch_name: switch,
                peer_switch_name: peer,
            };
            let out = output::render_single(&global.output, &check, vpc_detail, |c| {
                c.vpc_peer.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
