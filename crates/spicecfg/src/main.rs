//! spicecfg: command-line front end for the Spicetify config file.
//!
//! # Usage
//!
//! ```text
//! spicecfg [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   init                       Create or update config.ini and report what changed
//!   show [--json]              Print the whole config
//!   get <SECTION> <KEY>        Print one value
//!   set <SECTION> <KEY> <VAL>  Change one value and save
//!   path                       Print the config file location
//!   detect                     Show the Spotify paths found on this host
//! ```
//!
//! `--config` may also be given through `SPICETIFY_CONFIG`.  Log verbosity is
//! controlled by `RUST_LOG` (default `info`); logs go to stderr so command
//! output on stdout stays scriptable.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spicecfg::{default_config_path, native_probe, Config, DetectedPaths, LoadOutcome, PathProbe};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Manage the Spicetify config.ini.
#[derive(Debug, Parser)]
#[command(name = "spicecfg", about = "Manage the Spicetify config.ini", version)]
struct Cli {
    /// Path of the config file.  Defaults to the platform config directory.
    #[arg(long, global = true, env = "SPICETIFY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the config if missing, or add keys missing from it.
    Init,
    /// Print the whole config.
    Show {
        /// Print as JSON instead of INI.
        #[arg(long)]
        json: bool,
    },
    /// Print the value of SECTION.KEY.
    Get { section: String, key: String },
    /// Set SECTION.KEY to VALUE and save the file.
    Set {
        section: String,
        key: String,
        value: String,
    },
    /// Print the config file location.
    Path,
    /// Probe this host for Spotify's install directory and prefs file.
    Detect,
}

impl Cli {
    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => default_config_path().context("use --config to choose a location"),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let probe = native_probe();
    run(cli, probe.as_ref())
}

fn run(cli: Cli, probe: &dyn PathProbe) -> anyhow::Result<()> {
    let path = cli.config_path()?;

    match cli.command {
        Command::Path => println!("{}", path.display()),

        Command::Detect => {
            let found = DetectedPaths::detect(probe);
            println!("spotify_path = {}", display_or_missing(found.app_path.as_ref()));
            println!("prefs_path = {}", display_or_missing(found.prefs_path.as_ref()));
            if found.app_path.is_none() {
                if let Some(hint) = probe.app_path_hint() {
                    println!("{hint}");
                }
            }
        }

        Command::Init => {
            let (config, outcome) = open(&path, probe)?;
            println!("{}", config.path().display());
            match outcome {
                LoadOutcome::Loaded => println!("config is up to date"),
                LoadOutcome::Updated(report) => {
                    for (section, key) in &report.added_keys {
                        println!("added {section}.{key}");
                    }
                }
                LoadOutcome::Created { warnings, .. } => {
                    println!("default config generated");
                    for warning in warnings {
                        println!("warning: {warning}");
                    }
                }
            }
        }

        Command::Show { json } => {
            let (config, _) = open(&path, probe)?;
            if json {
                let text = serde_json::to_string_pretty(config.document())
                    .context("rendering config as JSON")?;
                println!("{text}");
            } else {
                let text = spicecfg_core::serialize_document(config.document())
                    .context("rendering config as INI")?;
                print!("{text}");
            }
        }

        Command::Get { section, key } => {
            let (config, _) = open(&path, probe)?;
            let Some(value) = config.try_section(&section).and_then(|s| s.get(&key)) else {
                bail!("{section}.{key} is not set in {}", path.display());
            };
            println!("{value}");
        }

        Command::Set {
            section,
            key,
            value,
        } => {
            let (mut config, _) = open(&path, probe)?;
            config
                .document_mut()
                .section_or_insert(&section)
                .set(key, value);
            config
                .write()
                .with_context(|| format!("saving {}", path.display()))?;
        }
    }

    Ok(())
}

fn open(path: &std::path::Path, probe: &dyn PathProbe) -> anyhow::Result<(Config, LoadOutcome)> {
    Config::open_with_probe(path, probe).with_context(|| format!("opening {}", path.display()))
}

fn display_or_missing(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "<not found>".to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
