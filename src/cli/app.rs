use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reservoir_catalog::{CatalogConfig, NumberFormat, Reservoir, ReservoirManager};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "reservoir-catalog")]
#[command(about = "Build the sample reservoir catalog, list it and export it as text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Export target (overrides the config file)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Print numbers with this many decimals instead of the shortest form
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add the sample reservoirs, list them and save them
    Demo,
    /// Same as `demo`, but remove the record at INDEX (zero-based) first
    Remove {
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
}

pub struct App {
    manager: ReservoirManager,
    command: Command,
}

impl App {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = resolve_config(&cli)?;
        Ok(Self {
            manager: ReservoirManager::with_config(config),
            command: cli.command.unwrap_or(Command::Demo),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        run_demo(&mut self.manager, self.command)?;
        Ok(())
    }
}

/// Load the samples into `manager`, apply `command`, list and export.
///
/// Returns the number of exported lines, or `None` when the export target
/// could not be opened (already reported on the manager's error sink).
pub fn run_demo<D: Write, E: Write>(
    manager: &mut ReservoirManager<D, E>,
    command: Command,
) -> Result<Option<usize>> {
    for reservoir in sample_reservoirs() {
        manager.add_reservoir(&reservoir);
    }

    if let Command::Remove { index } = command {
        // A negative index maps to usize::MAX, which no collection reaches.
        let index = usize::try_from(index).unwrap_or(usize::MAX);
        manager.remove_reservoir(index);
    }

    manager
        .display_all()
        .context("Failed to write reservoir listing")?;

    let written = manager.save();
    if let Some(written) = written {
        info!(
            written,
            path = %manager.catalog_config().output_path.display(),
            "catalog exported"
        );
    }
    Ok(written)
}

pub fn sample_reservoirs() -> [Reservoir; 2] {
    [
        Reservoir::new("Lake Baikal", 80.0, 636.0, 1642.0, "Lake"),
        Reservoir::new("Black Sea", 1170.0, 580.0, 2210.0, "Sea"),
    ]
}

fn resolve_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => CatalogConfig::default(),
    };
    if let Some(output) = &cli.output {
        config = config.output_path(output);
    }
    if let Some(precision) = cli.precision {
        config = config.number_format(NumberFormat::Fixed(precision));
    }
    Ok(config)
}
