// src/main.rs
//! Geospot - coordinate parsing and point geometry from the command line

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use geospot::{
    config::{DistanceUnit, GeoConfig, Notation},
    display::{terminal::TerminalDisplay, JsonDisplay, Report, ReportDisplay},
    geo::{parse_degrees_minutes, parse_degrees_minutes_seconds},
    ExifGps, GeoPoint,
};
use std::{io, path::PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "geospot", version, about = "Parse coordinates and measure between points")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert one DM or DMS coordinate to decimal degrees
    Parse {
        text: String,
        /// Read the text as degrees, minutes and seconds
        #[arg(long)]
        dms: bool,
    },
    /// Build a point from a latitude and a longitude
    #[command(allow_negative_numbers = true)]
    Point(PointArgs),
    /// Distance between two points
    #[command(allow_negative_numbers = true)]
    Distance {
        #[command(flatten)]
        points: PairArgs,
        /// Report kilometers instead of meters
        #[arg(long)]
        km: bool,
        /// Decimal places of the result
        #[arg(long)]
        precision: Option<u32>,
    },
    /// Bearing and compass direction from the first point to the second
    #[command(allow_negative_numbers = true)]
    Bearing {
        #[command(flatten)]
        points: PairArgs,
    },
    /// Centre of a set of `LAT,LON` decimal points
    #[command(allow_negative_numbers = true)]
    Center {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<String>,
    },
    /// Read the position from an EXIF GPS JSON dump
    Exif { file: PathBuf },
    /// Show the active configuration, optionally writing it out
    Config {
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Args)]
struct PointArgs {
    #[arg(allow_hyphen_values = true)]
    latitude: String,
    #[arg(allow_hyphen_values = true)]
    longitude: String,
    #[arg(long, value_enum)]
    notation: Option<NotationArg>,
}

#[derive(Debug, Args)]
struct PairArgs {
    #[arg(allow_hyphen_values = true)]
    from_latitude: String,
    #[arg(allow_hyphen_values = true)]
    from_longitude: String,
    #[arg(allow_hyphen_values = true)]
    to_latitude: String,
    #[arg(allow_hyphen_values = true)]
    to_longitude: String,
    #[arg(long, value_enum)]
    notation: Option<NotationArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NotationArg {
    Decimal,
    Dm,
    Dms,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Decimal => Notation::Decimal,
            NotationArg::Dm => Notation::Dm,
            NotationArg::Dms => Notation::Dms,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    if let Command::Config { save } = cli.command {
        if save {
            let saved = match cli.config {
                Some(ref path) => config.save_to(path),
                None => config.save(),
            };
            saved.context("Failed to save configuration")?;
        }
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let report = run(&cli.command, &config)?;

    let display: Box<dyn ReportDisplay> = if cli.json {
        Box::new(JsonDisplay)
    } else {
        Box::new(TerminalDisplay::new(config.color && !cli.no_color))
    };

    let mut stdout = io::stdout().lock();
    display.render(&mut stdout, &report)?;

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GeoConfig> {
    match path {
        Some(path) => GeoConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(GeoConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default configuration");
            GeoConfig::default()
        })),
    }
}

fn run(command: &Command, config: &GeoConfig) -> anyhow::Result<Report> {
    let report = match command {
        Command::Parse { text, dms } => {
            let degrees = if *dms {
                parse_degrees_minutes_seconds(text)?
            } else {
                parse_degrees_minutes(text)?
            };
            Report::Coordinate {
                input: text.clone(),
                degrees,
            }
        }
        Command::Point(args) => {
            let notation = args.notation.map(Notation::from).unwrap_or(config.notation);
            let point = notation.parse_point(&args.latitude, &args.longitude)?;
            Report::Point {
                point,
                has_location: point.has_location(),
            }
        }
        Command::Distance {
            points,
            km,
            precision,
        } => {
            let (from, to) = points.resolve(config)?;
            let unit = if *km {
                DistanceUnit::Kilometers
            } else {
                config.distance_unit
            };
            let precision = precision.unwrap_or(config.distance_precision);
            let distance = match unit {
                DistanceUnit::Meters => from.distance_in_meters(&to, precision),
                DistanceUnit::Kilometers => from.distance_in_kilometers(&to, precision),
            };
            Report::Distance {
                from,
                to,
                distance,
                unit,
            }
        }
        Command::Bearing { points } => {
            let (from, to) = points.resolve(config)?;
            Report::Bearing {
                from,
                to,
                bearing: from.bearing_to(&to, 0),
                exact: from.initial_bearing_to(&to),
                direction: from.compass_direction_to(&to),
            }
        }
        Command::Center { points } => {
            let points = points
                .iter()
                .map(|text| parse_decimal_pair(text))
                .collect::<anyhow::Result<Vec<GeoPoint>>>()?;
            Report::Center {
                count: points.len(),
                located: points.iter().filter(|p| p.has_location()).count(),
                center: GeoPoint::center(&points),
            }
        }
        Command::Exif { file } => {
            let contents = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let exif: ExifGps = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse EXIF JSON in {}", file.display()))?;
            let point = GeoPoint::from_exif(&exif)?;
            Report::Point {
                point,
                has_location: point.has_location(),
            }
        }
        Command::Config { .. } => bail!("config is handled before dispatch"),
    };

    debug!(?report, "command finished");
    Ok(report)
}

impl PairArgs {
    fn resolve(&self, config: &GeoConfig) -> geospot::Result<(GeoPoint, GeoPoint)> {
        let notation = self.notation.map(Notation::from).unwrap_or(config.notation);
        Ok((
            notation.parse_point(&self.from_latitude, &self.from_longitude)?,
            notation.parse_point(&self.to_latitude, &self.to_longitude)?,
        ))
    }
}

fn parse_decimal_pair(text: &str) -> anyhow::Result<GeoPoint> {
    let Some((latitude, longitude)) = text.split_once(',') else {
        bail!("expected LAT,LON but got {:?}", text);
    };
    Ok(Notation::Decimal.parse_point(latitude, longitude)?)
}
