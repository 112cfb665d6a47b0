//! Shell that turns a launch request into emulator config files and a
//! running emulator process

use crate::cli::{Cli, CliAction};
use clap::Parser;
use ignition_config::{
    Resolution, SystemConfig,
    environment::{ENVIRONMENT_LOCATION, Environment},
};
use ignition_definition_eduke32::Eduke32;
use ignition_definition_melonds::MelonDs;
use ignition_definition_odcommander::Odcommander;
use ignition_input::Controller;
use ignition_runtime::{Command, EmulatorId, GenerationContext, GeneratorRegistry};
use ron::ser::PrettyConfig;
use std::{
    collections::BTreeMap,
    fs::File,
    num::NonZeroU32,
    ops::Deref,
    path::PathBuf,
    process::{self, ExitCode},
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

mod cli;

fn main() -> ExitCode {
    let environment = File::open(ENVIRONMENT_LOCATION.deref())
        .ok()
        .and_then(|file| Environment::load(file).ok())
        .unwrap_or_default();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(create_filter());
    // The log file lives on the data partition, which may not exist yet
    let file_layer = File::create(&environment.log_location).ok().map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_filter(create_filter())
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("ignition v{}", env!("CARGO_PKG_VERSION"));

    let mut registry = GeneratorRegistry::default();
    registry.register(EmulatorId::Eduke32, Eduke32);
    registry.register(EmulatorId::Melonds, MelonDs);
    registry.register(EmulatorId::Odcommander, Odcommander);

    match Cli::parse().action {
        CliAction::Launch {
            emulator,
            rom,
            width,
            height,
            controllers,
            options,
            dry_run,
        } => launch(
            &registry,
            &environment,
            emulator,
            rom,
            width,
            height,
            controllers,
            &options,
            dry_run,
        ),
        CliAction::Hotkeys { emulator } => hotkeys(&registry, emulator),
    }
}

#[allow(clippy::too_many_arguments)]
fn launch(
    registry: &GeneratorRegistry,
    environment: &Environment,
    emulator: EmulatorId,
    rom: PathBuf,
    width: NonZeroU32,
    height: NonZeroU32,
    controllers: Option<PathBuf>,
    options: &[String],
    dry_run: bool,
) -> ExitCode {
    let Some(generator) = registry.get(emulator) else {
        tracing::error!("No generator registered for {}", emulator);
        return ExitCode::FAILURE;
    };

    let mut system = SystemConfig::default();
    for option in options {
        let Some((name, value)) = option.split_once('=') else {
            tracing::error!("Option {:?} is not of the form key=value", option);
            return ExitCode::FAILURE;
        };
        system.insert(name, value);
    }

    let controllers: Vec<Controller> = match controllers {
        Some(path) => {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    tracing::error!("Could not open controller roster {:?}: {}", path, error);
                    return ExitCode::FAILURE;
                }
            };
            match ron::de::from_reader(file) {
                Ok(roster) => roster,
                Err(error) => {
                    tracing::error!("Could not parse controller roster {:?}: {}", path, error);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Vec::new(),
    };

    let metadata = BTreeMap::new();
    let command = match generator.generate(&GenerationContext {
        system: &system,
        rom: &rom,
        controllers: &controllers,
        metadata: &metadata,
        guns: &[],
        wheels: &[],
        resolution: Resolution {
            width: width.get(),
            height: height.get(),
        },
        paths: &environment.paths,
    }) {
        Ok(command) => command,
        Err(error) => {
            tracing::error!("Generation for {} failed: {}", emulator, error);
            return ExitCode::FAILURE;
        }
    };

    if dry_run {
        for (name, value) in &command.env {
            println!("{name}={value}");
        }
        println!("{command}");
        return ExitCode::SUCCESS;
    }

    spawn(&command)
}

/// The process launcher boundary, one spawn and wait, no supervision
fn spawn(command: &Command) -> ExitCode {
    let mut args = command.rendered_args().into_iter();
    let Some(program) = args.next() else {
        tracing::error!("Generator produced an empty command");
        return ExitCode::FAILURE;
    };

    tracing::info!("Launching {}", command);

    match process::Command::new(&program)
        .args(args)
        .envs(&command.env)
        .status()
    {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            tracing::warn!("{} exited with {}", program, status);
            ExitCode::FAILURE
        }
        Err(error) => {
            tracing::error!("Failed to spawn {}: {}", program, error);
            ExitCode::FAILURE
        }
    }
}

fn hotkeys(registry: &GeneratorRegistry, emulator: EmulatorId) -> ExitCode {
    let Some(generator) = registry.get(emulator) else {
        tracing::error!("No generator registered for {}", emulator);
        return ExitCode::FAILURE;
    };

    match ron::ser::to_string_pretty(
        &generator.hotkeys_context(),
        PrettyConfig::new().struct_names(false),
    ) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("Could not render hotkeys context: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn create_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_regex(true)
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
