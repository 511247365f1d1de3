//! Command-line interface for snake_pilot.

use clap::{Args, Parser, Subcommand};

/// Snake Pilot - publishes snake-game commands to a pub/sub topic
#[derive(Parser, Debug)]
#[command(name = "snake_pilot")]
#[command(about = "Publishes snake-game join and move commands", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drive moves from the keyboard (w/a/s/d or arrows, q to quit)
    Keys {
        /// Player display name. Prompted for when omitted.
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        transport: TransportArgs,
    },

    /// Emit random legal moves on a fixed interval
    Auto {
        /// Player display name
        #[arg(long, default_value = "AutoPlayer")]
        name: String,

        /// Seconds between moves
        #[arg(long, default_value = "3")]
        interval_secs: u64,

        /// RNG seed for reproducible runs. Seeded from the OS when omitted.
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        transport: TransportArgs,
    },
}

/// Topic addressing shared by both drivers
#[derive(Args, Debug, Clone)]
pub struct TransportArgs {
    /// Base URL of the publish endpoint
    #[arg(long, default_value = "http://localhost:8085/v1")]
    pub server_url: String,

    /// Cloud project the command topic lives in
    #[arg(long, default_value = "local-game")]
    pub project: String,

    /// Command topic name
    #[arg(long, default_value = "game-commands")]
    pub topic: String,
}
