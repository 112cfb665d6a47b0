use crate::command::Command;
use ignition_config::{Resolution, SystemConfig, paths::SystemPaths};
use ignition_input::{Controller, HotkeysContext};
use std::{collections::BTreeMap, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A detected lightgun, present for contract completeness
pub struct Gun {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A detected wheel, present for contract completeness
pub struct Wheel {
    pub id: String,
    pub name: String,
}

/// Everything a generator may consult while building its launch command
///
/// Borrowed wholesale because nothing here outlives the generate call,
/// except the files the generator writes
#[derive(Debug, Clone)]
pub struct GenerationContext<'a> {
    pub system: &'a SystemConfig,
    pub rom: &'a Path,
    pub controllers: &'a [Controller],
    pub metadata: &'a BTreeMap<String, String>,
    pub guns: &'a [Gun],
    pub wheels: &'a [Wheel],
    pub resolution: Resolution,
    pub paths: &'a SystemPaths,
}

#[derive(thiserror::Error, Debug)]
/// Ways a generate call can fail, all fatal for this launch attempt
pub enum GeneratorError {
    #[error(transparent)]
    /// Filesystem failure creating directories or writing config files
    Io(#[from] std::io::Error),
    #[error("invalid launch arguments: {0}")]
    /// The launch argument helper rejected the accumulated arguments
    InvalidLaunchArgs(String),
}

/// One emulator adapter
///
/// `generate` owns writing the emulator's native config format and building
/// its launch command, side effects are confined to the emulator's own
/// subdirectories under [SystemPaths]
pub trait Generator {
    fn generate(&self, ctx: &GenerationContext) -> Result<Command, GeneratorError>;

    /// Static hotkey bindings, callable without a prior generate
    fn hotkeys_context(&self) -> HotkeysContext;
}
