//! Command dispatch: bridges CLI args -> business objects -> output formatting.

pub mod config_cmd;
pub mod credentials;
pub mod fabric;
pub mod switches;
pub mod util;

use ndfc_api::RestSend;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    rest_send: &RestSend,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Credentials(args) => credentials::handle(rest_send, args, global).await,
        Command::Fabric(args) => fabric::handle(rest_send, args, global).await,
        Command::Switches(args) => switches::handle(rest_send, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
