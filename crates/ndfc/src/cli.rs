//! Clap derive structures for the `ndfc` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ndfc: operate a network-fabric controller from the command line
#[derive(Debug, Parser)]
#[command(
    name = "ndfc",
    version,
    about = "Manage fabric controller credentials, fabrics and switch inventory",
    long_about = "Manage a network-fabric controller from the command line.\n\n\
        Each command reads its inputs from flags or a YAML file (--config),\n\
        sends one request per operation, and renders the reply.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "ND_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Controller URL (overrides profile)
    #[arg(long, short = 'c', env = "ND_CONTROLLER", global = true)]
    pub controller: Option<String>,

    /// Controller user owning the API key (overrides profile)
    #[arg(long, short = 'u', env = "ND_USERNAME", global = true)]
    pub username: Option<String>,

    /// Controller API key
    #[arg(long, env = "ND_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ND_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ND_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "ND_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Report what would change without sending POST/PUT/DELETE requests
    #[arg(long, global = true)]
    pub check_mode: bool,

    /// Replay recorded controller responses from a JSON file instead of
    /// contacting a controller
    #[arg(long, value_name = "FILE", global = true)]
    pub replay: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage switch credentials
    #[command(alias = "creds")]
    Credentials(CredentialsArgs),

    /// Query fabrics
    Fabric(FabricArgs),

    /// Query switch inventory
    #[command(alias = "sw")]
    Switches(SwitchesArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CREDENTIALS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CredentialsArgs {
    #[command(subcommand)]
    pub command: CredentialsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CredentialsCommand {
    /// Fabric-wide default switch credentials
    Default(FabricCredentialArgs),

    /// Robot switch credentials
    Robot(FabricCredentialArgs),

    /// Per-switch user credentials
    User(UserCredentialArgs),

    /// Show the credentials overview
    Details,
}

#[derive(Debug, Args)]
pub struct FabricCredentialArgs {
    #[command(subcommand)]
    pub command: FabricCredentialCommand,
}

#[derive(Debug, Subcommand)]
pub enum FabricCredentialCommand {
    /// Show the stored credentials
    Get,

    /// Store credentials from a YAML file
    ///
    /// The file holds `switch_username` and `switch_password`.
    Save {
        /// YAML file with the credentials
        #[arg(long, short = 'f')]
        config: PathBuf,
    },

    /// Delete the stored credentials
    Delete,
}

#[derive(Debug, Args)]
pub struct UserCredentialArgs {
    #[command(subcommand)]
    pub command: UserCredentialCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCredentialCommand {
    /// List user switch credentials, or show one switch
    Get {
        /// YAML file with an optional `filter` (switch name)
        #[arg(long, short = 'f', conflicts_with = "switch")]
        config: Option<PathBuf>,

        /// Show only this switch
        #[arg(long, short = 's')]
        switch: Option<String>,
    },

    /// Save user credentials for the switches listed in a YAML file
    Save {
        /// YAML file with a `config` list of fabric/switch/username/password
        #[arg(long, short = 'f')]
        config: PathBuf,
    },

    /// Delete user credentials for the switches listed in a YAML file
    Delete {
        /// YAML file with a `config` list of fabric/switch pairs
        #[arg(long, short = 'f')]
        config: PathBuf,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FABRIC
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FabricArgs {
    #[command(subcommand)]
    pub command: FabricCommand,
}

#[derive(Debug, Subcommand)]
pub enum FabricCommand {
    /// Show fabric details
    Detail(FabricDetailArgs),
}

#[derive(Debug, Args)]
pub struct FabricDetailArgs {
    /// YAML file with `filter`, `max`, `offset` and `sort`
    #[arg(long, short = 'f', conflicts_with_all = ["filter", "max", "offset", "sort"])]
    pub config: Option<PathBuf>,

    /// Lucene-style filter (e.g. "name:SITE1")
    #[arg(long)]
    pub filter: Option<String>,

    /// Maximum number of records to return
    #[arg(long)]
    pub max: Option<u32>,

    /// Number of records to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Sort properties, comma separated; prefix with '-' for descending
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SWITCHES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SwitchesArgs {
    #[command(subcommand)]
    pub command: SwitchesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SwitchesCommand {
    /// List the switches of one or more fabrics
    #[command(alias = "ls")]
    Inventory(InventoryArgs),

    /// Check whether two switches are vPC peers
    VpcPeer {
        /// Fabric both switches belong to
        #[arg(long)]
        fabric: String,

        /// First switch name
        switch: String,

        /// Second switch name
        peer: String,
    },
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["config", "fabric"])))]
pub struct InventoryArgs {
    /// YAML file with a `config` list of `fabric_name` entries
    #[arg(long, short = 'f')]
    pub config: Option<PathBuf>,

    /// Fabric name (repeatable)
    #[arg(long)]
    pub fabric: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the resolved configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an API key in the system keyring
    SetApiKey {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
