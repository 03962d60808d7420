//! The `tychos` command.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tychos_app::AppError;
use tychos_app::platform::PlatformDirs;
use tychos_app::session::{self, InstantReport};
use tychos_config::{CliArgs, Config};
use tychos_ephem::{EphemeridesRequest, ExportFormat, StepUnit, write_export};
use tychos_orbit::BodyTable;
use tychos_time::{CivilDate, CivilTime, date_time_to_pos};

#[derive(Parser, Debug)]
#[command(name = "tychos", about = "Tychos geocentric model: time, positions and ephemerides")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert between simulation time, calendar date and Julian day.
    Convert {
        #[arg(long, allow_negative_numbers = true, conflicts_with = "date")]
        pos: Option<f64>,
        /// Calendar date, YYYY-MM-DD.
        #[arg(long)]
        date: Option<String>,
        /// Clock time, HH:MM:SS.
        #[arg(long, default_value = "00:00:00")]
        time: String,
    },
    /// Print RA, declination, distance and elongation at one instant.
    Position {
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "00:00:00")]
        time: String,
        /// Bodies to report; the configured trackable list when omitted.
        #[arg(long = "body")]
        bodies: Vec<String>,
    },
    /// Generate ephemerides over a date range and export them.
    Ephemerides {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        step: Option<f64>,
        /// seconds, minutes, hours, days, weeks, months or years.
        #[arg(long)]
        unit: Option<StepUnit>,
        #[arg(long = "body")]
        bodies: Vec<String>,
        /// Export directory.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Export JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },
    /// Work with body tables.
    Bodies {
        /// Write the built-in table as RON to this file.
        #[arg(long)]
        write: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = try_main(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve_and_create(cli.args.config.as_deref())?;

    let mut config = match Config::load_or_create(&dirs.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config, using defaults: {e}");
            Config::default()
        }
    };
    config.apply_cli_overrides(&cli.args);

    tychos_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    run(cli.command, &config, &dirs)
}

fn run(command: Command, config: &Config, dirs: &PlatformDirs) -> Result<(), AppError> {
    match command {
        Command::Convert { pos, date, time } => {
            let pos = match (pos, date) {
                (Some(pos), _) => pos,
                (None, Some(date)) => instant(&date, &time)?,
                (None, None) => return Err(AppError::MissingInstant),
            };
            println!("{}", InstantReport::at(pos));
        }
        Command::Position { date, time, bodies } => {
            let mut ctx = session::build_context(config)?;
            ctx.set_pos(instant(&date, &time)?);
            let bodies = if bodies.is_empty() {
                config.simulation.trackable.clone()
            } else {
                bodies
            };

            println!("{}", InstantReport::at(ctx.pos()));
            println!();
            println!(
                "{:<14}{:<12}{:<13}{:<16}{}",
                "Body", "RA", "Dec", "Distance", "Elongation"
            );
            for (name, result) in session::positions(&ctx, &bodies) {
                match result {
                    Ok(r) => println!(
                        "{name:<14}{:<12}{:<13}{:<16}{}",
                        r.ra, r.dec, r.dist, r.elongation
                    ),
                    Err(e) => println!("{name:<14}not available ({e})"),
                }
            }
        }
        Command::Ephemerides {
            start,
            end,
            step,
            unit,
            bodies,
            out,
            json,
        } => {
            let mut ctx = session::build_context(config)?;
            let mut generator = session::build_generator(config);
            let bodies = if bodies.is_empty() {
                config.simulation.trackable.clone()
            } else {
                bodies
            };
            let request = EphemeridesRequest::new(
                start,
                end,
                step.unwrap_or(config.ephemerides.step_size),
                unit.unwrap_or(config.ephemerides.step_unit),
                bodies,
            );

            let data = session::run_ephemerides(&mut ctx, &mut generator, request, |p| {
                eprint!("\rGenerating ephemerides... {p:>3}%");
            })?;
            eprintln!();

            let dir = out
                .or_else(|| config.ephemerides.export_dir.clone())
                .unwrap_or_else(|| dirs.data_dir.clone());
            let format = if json {
                ExportFormat::Json
            } else {
                ExportFormat::Text
            };
            let path = write_export(&dir, &data, format)?;
            println!(
                "{} rows ({} unavailable) written to {}",
                data.total_rows(),
                data.gap_count(),
                path.display()
            );
        }
        Command::Bodies { write } => {
            BodyTable::tychos().save(&write)?;
            println!("Wrote built-in body table to {}", write.display());
        }
    }
    Ok(())
}

fn instant(date: &str, time: &str) -> Result<f64, AppError> {
    let date = CivilDate::parse_valid(date)?;
    let time = CivilTime::parse_valid(time)?;
    Ok(date_time_to_pos(date, time))
}
