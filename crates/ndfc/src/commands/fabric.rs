//! Fabric command handlers.

use ndfc_api::RestSend;
use ndfc_api::fabric::FabricDetailGet;
use ndfc_api::validators::FabricDetailGetConfig;

use crate::cli::{FabricArgs, FabricCommand, FabricDetailArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

/// Query parameters from `--config` or from the individual flags.
fn detail_config(args: FabricDetailArgs) -> Result<FabricDetailGetConfig, CliError> {
    if let Some(path) = args.config {
        return util::read_config(&path);
    }
    Ok(FabricDetailGetConfig {
        max: args.max,
        filter: args.filter,
        offset: args.offset,
        sort: args.sort,
    })
}

pub async fn handle(
    rest_send: &RestSend,
    args: FabricArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FabricCommand::Detail(args) => {
            let config = detail_config(args)?;
            let details = FabricDetailGet::from_config(rest_send.clone(), &config)?
                .commit()
                .await?;
            if !details.found() && !global.quiet {
                eprintln!("No fabrics matched");
            }
            let out = output::render_value(&global.output, details.data());
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_query_config() {
        let config = detail_config(FabricDetailArgs {
            config: None,
            filter: Some("name:SITE1".into()),
            max: Some(10),
            offset: None,
            sort: Some("-name".into()),
        })
        .expect("config");
        assert_eq!(
            config,
            FabricDetailGetConfig {
                max: Some(10),
                filter: Some("name:SITE1".into()),
                offset: None,
                sort: Some("-name".into()),
            }
        );
    }
}
