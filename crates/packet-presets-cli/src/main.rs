use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use packet_presets_core::render::{HtmlListRenderer, PresetListRenderer};
use packet_presets_core::{Direction, PresetManager};
use packet_presets_infrastructure::{AppConfig, JsonFileStore, KeyValuePresetStore, PresetPaths};
use strum::IntoEnumIterator;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod host;
mod live;

use host::TerminalHost;

#[derive(Parser)]
#[command(name = "packet-presets")]
#[command(about = "Save and restore hidden-packet filter presets", long_about = None)]
struct Cli {
    /// Path to config.toml (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the version stores
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Host version whose store to use
    #[arg(long, global = true)]
    host_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved presets
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save the live configuration as a new preset
    Save {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Replace the live configuration with a preset
    Load { id: String },
    /// Delete a preset
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// Hide a packet in the live configuration
    Hide { direction: Direction, packet: String },
    /// Stop hiding a packet in the live configuration
    Unhide { direction: Direction, packet: String },
    /// Print the live configuration
    Show,
    /// Print the preset list as HTML
    Render,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<(AppConfig, PathBuf)> {
    let paths = PresetPaths::new();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => paths.config_file().context("Failed to locate config file")?,
    };
    let mut config = AppConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    if let Some(version) = &cli.host_version {
        config.host_version = version.clone();
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }

    let data_dir = config
        .resolve_data_dir(&paths)
        .context("Failed to locate data directory")?;
    Ok((config, data_dir))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let (config, data_dir) = load_config(&cli)?;
    init_tracing(&config.log_level);

    let kv = Arc::new(JsonFileStore::new(&data_dir, &config.host_version));
    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let manager = PresetManager::new(
        KeyValuePresetStore::new(kv.clone()),
        TerminalHost::new(assume_yes),
    );

    match cli.command {
        Commands::List { json } => {
            let presets = manager.list_custom_presets();
            if json {
                println!("{}", serde_json::to_string_pretty(&presets)?);
            } else {
                for preset in presets {
                    println!("{}\t{}", preset.id, preset.name);
                }
            }
        }
        Commands::Save { name } => {
            let live = live::load(&kv);
            match manager.save_current_as_preset(&name.join(" "), &live) {
                Ok(preset) => println!("Saved \"{}\" ({})", preset.name, preset.id),
                Err(e) if e.is_user_visible() => return Ok(ExitCode::FAILURE),
                Err(e) => debug!("Nothing saved: {}", e),
            }
        }
        Commands::Load { id } => {
            let mut live = live::load(&kv);
            if !manager.load_custom_preset(&id, &mut live) {
                return Ok(ExitCode::FAILURE);
            }
            if manager.host().take_live_changed() {
                live::save(&kv, &live);
                print_live(&live);
            }
        }
        Commands::Delete { id, .. } => {
            if !manager.delete_custom_preset(&id) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Hide { direction, packet } => {
            let mut live = live::load(&kv);
            if live.hide(direction, packet) {
                live::save(&kv, &live);
            }
        }
        Commands::Unhide { direction, packet } => {
            let mut live = live::load(&kv);
            if live.unhide(direction, &packet) {
                live::save(&kv, &live);
            }
        }
        Commands::Show => print_live(&live::load(&kv)),
        Commands::Render => {
            println!(
                "{}",
                HtmlListRenderer::default().render(&manager.list_custom_presets())
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_live(live: &packet_presets_core::HiddenPackets) {
    for direction in Direction::iter() {
        println!("{}: {}", direction, live.direction(direction).join(", "));
    }
}
