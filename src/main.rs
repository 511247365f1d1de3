//! Snake Pilot - game-command publisher CLI
//!
//! Publishes join and move commands for a snake-style game, driven either by
//! the keyboard or by a randomized timer loop.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, TransportArgs};
use snake_pilot::{
    CommandEmitter, ConsoleObserver, EmitterConfig, HttpPublisher, KeyboardSource, PlayerIdentity,
    RandomSource, TracingObserver, run_session,
};
use std::io::Write;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Keys { name, transport } => run_keys(name, transport).await,
        Command::Auto {
            name,
            interval_secs,
            seed,
            transport,
        } => run_auto(name, interval_secs, seed, transport).await,
    }
}

/// Run the interactive keyboard driver
async fn run_keys(name: Option<String>, transport: TransportArgs) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt_name()?,
    };
    let identity = PlayerIdentity::generate(name);
    let emitter = build_emitter(&transport, identity, Box::new(ConsoleObserver));

    println!("Starting game generator for player: {}", emitter.identity().name());
    println!("Player ID: {}", emitter.identity().id());
    println!("Publishing to topic: {}", emitter.config().topic_path());
    println!("{}", "-".repeat(50));
    println!("Controls: W=UP, A=LEFT, S=DOWN, D=RIGHT, Q=QUIT");
    println!("{}", "-".repeat(50));

    let mut source = KeyboardSource::new();
    run_session(&emitter, &mut source).await?;

    println!("Stopping generator...");
    Ok(())
}

/// Run the autonomous random driver
async fn run_auto(
    name: String,
    interval_secs: u64,
    seed: Option<u64>,
    transport: TransportArgs,
) -> Result<()> {
    let identity = PlayerIdentity::generate(name);
    let emitter = build_emitter(&transport, identity, Box::new(TracingObserver));

    info!(
        player = %emitter.identity().name(),
        player_id = %emitter.identity().id(),
        topic = %emitter.config().topic_path(),
        interval_secs,
        "starting autonomous generator"
    );

    let interval = Duration::from_secs(interval_secs);
    let mut source = match seed {
        Some(seed) => RandomSource::with_seed(interval, seed),
        None => RandomSource::new(interval),
    };
    run_session(&emitter, &mut source).await?;

    info!("stopping generator");
    Ok(())
}

fn build_emitter(
    transport: &TransportArgs,
    identity: PlayerIdentity,
    observer: Box<dyn snake_pilot::EmitObserver>,
) -> CommandEmitter<HttpPublisher> {
    CommandEmitter::new(
        EmitterConfig::new(transport.project.clone(), transport.topic.clone()),
        identity,
        HttpPublisher::new(transport.server_url.clone()),
        observer,
    )
}

/// Reads the player name from stdin, defaulting to "Player" on blank input.
fn prompt_name() -> Result<String> {
    print!("Enter your player name: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read player name")?;

    let name = line.trim();
    if name.is_empty() {
        Ok("Player".to_string())
    } else {
        Ok(name.to_string())
    }
}
