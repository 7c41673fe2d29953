//! CLI configuration: thin wrapper around `ndfc_config`.
//!
//! Applies `GlobalOpts` overrides (--controller, --api-key, ...) on top of
//! the selected profile and builds the `RestSend` every command runs on.

use std::sync::Arc;

use secrecy::SecretString;
use tracing::debug;

use ndfc_api::{HttpSender, RestSend, ScriptedSender};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use ndfc_config::{Config, Profile, config_path, load_config, load_config_or_default, save_config};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// The named profile with CLI flag overrides applied.
///
/// Without a matching profile, `--controller` alone is enough to build one.
pub fn effective_profile(
    global: &GlobalOpts,
    config: &Config,
    profile_name: &str,
) -> Result<Profile, CliError> {
    let mut profile = match config.profiles.get(profile_name) {
        Some(profile) => profile.clone(),
        None if global.controller.is_some() => Profile::default(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name.into(),
                available: available_profiles(config),
            });
        }
        None => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    if let Some(ref controller) = global.controller {
        profile.controller.clone_from(controller);
    }
    if let Some(ref username) = global.username {
        profile.username = Some(username.clone());
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    Ok(profile)
}

/// Comma separated profile names, or `(none)`.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Build the `RestSend` for controller-bound commands.
///
/// `--replay` swaps the HTTP sender for recorded responses, so no profile
/// is needed.
pub fn build_rest_send(global: &GlobalOpts) -> Result<RestSend, CliError> {
    if let Some(ref path) = global.replay {
        debug!(path = %path.display(), "replaying recorded responses");
        let sender = ScriptedSender::from_file(path)?;
        return Ok(RestSend::new(Arc::new(sender)).with_check_mode(global.check_mode));
    }

    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);
    let profile = effective_profile(global, &cfg, &profile_name)?;

    let explicit_key = global.api_key.clone().map(SecretString::from);
    let (url, transport) =
        ndfc_config::profile_to_transport(&profile, &profile_name, &cfg.defaults, explicit_key)?;
    debug!(profile = %profile_name, controller = %url, "using controller");

    let sender = HttpSender::new(url, &transport)?;
    Ok(RestSend::new(Arc::new(sender)).with_check_mode(global.check_mode))
}
