//! Clap derive structures for the `squeakdash` CLI.
//!
//! Defines the command tree, global flags, and shared argument types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// squeakdash -- terminal dashboard for a squeaknode admin service
#[derive(Debug, Parser)]
#[command(
    name = "squeakdash",
    version,
    about = "Administer a squeaknode from the command line",
    long_about = "Browse profiles, squeaks and peers of a squeaknode, inspect its\n\
        paired Lightning node, and manage peers through the node's admin service.",
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
    /// Config profile to use
    #[arg(long, short = 'p', env = "SQUEAKDASH_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Admin service host (overrides profile)
    #[arg(long, short = 'H', env = "SQUEAKDASH_HOST", global = true)]
    pub host: Option<String>,

    /// Admin service port (overrides profile)
    #[arg(long, env = "SQUEAKDASH_PORT", global = true)]
    pub port: Option<u16>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SQUEAKDASH_OUTPUT",
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

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SQUEAKDASH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Tab-separated rows, no header (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Self::On
    }
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Greet the admin service (health check)
    Hello(HelloArgs),

    /// Show the paired Lightning node
    Info,

    /// Signing and contact profiles
    #[command(alias = "prof")]
    Profiles(ProfilesArgs),

    /// Squeaks from followed profiles
    #[command(alias = "sq")]
    Squeaks(SqueaksArgs),

    /// Manage squeak peers
    Peers(PeersArgs),

    /// Peers of the paired Lightning node
    #[command(alias = "ln")]
    LightningPeers(LightningPeersArgs),

    /// Lightning node summary and wallet balance
    Wallet,

    /// Sync squeaks with peers
    Sync,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// A row as shown by a `list` command, counting from 1.
#[derive(Debug, Args)]
pub struct RowArg {
    /// Row number (1 = first row of `list`)
    pub row: usize,
}

// ── Hello ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HelloArgs {
    /// Name to greet with
    #[arg(long, short = 'n', default_value = "World")]
    pub name: String,
}

// ── Profiles ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub command: ProfilesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfilesCommand {
    /// List signing and contact profiles
    #[command(alias = "ls")]
    List,

    /// Create a profile with a new signing key
    #[command(name = "create-signing")]
    CreateSigning {
        /// Profile name
        name: String,
    },

    /// Add a contact profile for someone else's squeak address
    #[command(name = "add-contact")]
    AddContact {
        /// Profile name
        name: String,
        /// Squeak address of the contact
        address: String,
    },

    /// Follow or unfollow a profile
    Following {
        /// Profile ID
        id: i64,
        state: Toggle,
    },

    /// Turn sharing of a profile's squeaks on or off
    Sharing {
        /// Profile ID
        id: i64,
        state: Toggle,
    },

    /// Delete a profile
    #[command(alias = "rm")]
    Delete {
        /// Profile ID
        id: i64,
    },

    /// Print the address page of a listed profile
    Open {
        #[command(flatten)]
        row: RowArg,

        /// Row refers to the contacts table instead of signing profiles
        #[arg(long)]
        contacts: bool,
    },
}

// ── Squeaks ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SqueaksArgs {
    #[command(subcommand)]
    pub command: SqueaksCommand,
}

#[derive(Debug, Subcommand)]
pub enum SqueaksCommand {
    /// List followed squeaks
    #[command(alias = "ls")]
    List,

    /// Print the page of a listed squeak
    Open(RowArg),
}

// ── Peers ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PeersArgs {
    #[command(subcommand)]
    pub command: PeersCommand,
}

#[derive(Debug, Subcommand)]
pub enum PeersCommand {
    /// List squeak peers
    #[command(alias = "ls")]
    List,

    /// Register a squeak peer
    #[command(alias = "add")]
    Create {
        /// Peer name
        name: String,
        /// Peer host
        #[arg(value_name = "HOST")]
        peer_host: String,
        /// Peer port (the node's default peer port when omitted)
        #[arg(value_name = "PORT")]
        peer_port: Option<u16>,
    },

    /// Delete a peer
    #[command(alias = "rm")]
    Delete {
        /// Peer ID
        id: i64,
    },

    /// Turn uploading to a peer on or off
    Uploading {
        /// Peer ID
        id: i64,
        state: Toggle,
    },

    /// Turn downloading from a peer on or off
    Downloading {
        /// Peer ID
        id: i64,
        state: Toggle,
    },

    /// Print the page of a listed peer
    Open(RowArg),
}

// ── Lightning peers ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LightningPeersArgs {
    #[command(subcommand)]
    pub command: LightningPeersCommand,
}

#[derive(Debug, Subcommand)]
pub enum LightningPeersCommand {
    /// List peers of the Lightning node
    #[command(alias = "ls")]
    List,

    /// Print the node page of a listed peer
    Open(RowArg),
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or extend the config file with a profile
    Init {
        /// Profile name
        #[arg(long)]
        name: Option<String>,

        /// Admin service host (prompted when omitted)
        #[arg(long = "admin-host")]
        admin_host: Option<String>,

        /// Admin service port
        #[arg(long = "admin-port")]
        admin_port: Option<u16>,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
