//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::path::Path;

use serde::de::DeserializeOwned;

use ndfc_api::credentials::CredentialsChange;
use ndfc_api::validators::Validate;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` or `--check-mode`
/// was passed.
///
/// Without a terminal to prompt on, `--yes` is required.
pub fn confirm(message: &str, action: &str, global: &GlobalOpts) -> Result<bool, CliError> {
    if global.yes || global.check_mode {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and validate an operation's YAML input file.
pub fn read_config<T>(path: &Path) -> Result<T, CliError>
where
    T: DeserializeOwned + Validate,
{
    Ok(ndfc_config::read_operation_config(path)?)
}

/// Report a credential change on stderr.
pub fn report_change(change: &CredentialsChange, global: &GlobalOpts) {
    if global.quiet {
        return;
    }
    let color = output::should_color(&global.color);
    let prefix = if global.check_mode { "(check mode) " } else { "" };
    eprintln!(
        "{prefix}{}: {}",
        output::status_label(change.changed(), color),
        change.summary()
    );
}
