//! `room-fit` command line front end.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use room_fit::{
    Catalog, CheckRequest, CheckerConfig, CliDriver, DriverResult, FileSink, FitChecker, LogLevel,
    Logger,
};

const LOG_FILE_MAX_BYTES: u64 = 1024 * 1024;

#[derive(Parser)]
#[command(name = "room-fit")]
#[command(about = "Check whether furniture fits your room before buying it")]
#[command(version)]
struct Cli {
    /// JSON catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append JSON-lines logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Lowest level written to the log file
    #[arg(long, global = true, value_enum, default_value = "info")]
    log_level: LevelArg,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the furniture catalog
    Catalog,

    /// Check every catalog item against a room
    Check {
        /// Room length in meters
        #[arg(long, allow_hyphen_values = true)]
        length: String,

        /// Room width in meters
        #[arg(long, allow_hyphen_values = true)]
        width: String,

        /// Room height in meters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Catalog id of the item to overlay on the visualization
        #[arg(short, long)]
        select: Option<String>,

        /// Write the room visualization as SVG
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Print the listing and scene layout as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LevelArg> for LogLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Trace => LogLevel::Trace,
            LevelArg::Debug => LogLevel::Debug,
            LevelArg::Info => LogLevel::Info,
            LevelArg::Warn => LogLevel::Warn,
            LevelArg::Error => LogLevel::Error,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("room-fit: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> DriverResult<()> {
    let config = match &cli.config {
        Some(path) => CheckerConfig::load(path)?,
        None => CheckerConfig::default(),
    };
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let mut checker = FitChecker::new(config, catalog)?;
    if let Some(path) = &cli.log_file {
        let sink = FileSink::new(path, LOG_FILE_MAX_BYTES)?;
        checker = checker.with_logger(Logger::new(sink).with_min_level(cli.log_level.into()));
    }

    let color = !cli.no_color && io::stdout().is_terminal();
    let mut driver = CliDriver::new(checker).with_color(color);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Catalog => driver.run_catalog(&mut stdout),
        Commands::Check {
            length,
            width,
            height,
            select,
            svg,
            json,
        } => driver.run_check(
            &mut stdout,
            &CheckRequest {
                length,
                width,
                height,
                select,
                svg,
                json,
            },
        ),
    }
}
