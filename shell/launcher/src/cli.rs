use clap::{Parser, Subcommand};
use ignition_runtime::EmulatorId;
use std::{num::NonZeroU32, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub action: CliAction,
}

#[derive(Clone, Subcommand)]
pub enum CliAction {
    /// Write an emulator's config files and launch it
    Launch {
        #[clap(short, long)]
        emulator: EmulatorId,
        #[clap(short, long)]
        rom: PathBuf,
        #[clap(long)]
        width: NonZeroU32,
        #[clap(long)]
        height: NonZeroU32,
        /// RON file describing the assigned controller roster
        #[clap(short, long)]
        controllers: Option<PathBuf>,
        /// Per-system options as key=value pairs
        #[clap(short, long = "option")]
        options: Vec<String>,
        /// Print the command instead of spawning it
        #[clap(long)]
        dry_run: bool,
    },
    /// Print the static hotkey bindings for an emulator
    Hotkeys {
        #[clap(short, long)]
        emulator: EmulatorId,
    },
}
