pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use facecut_core::config::{AppConfig, LoadOptions, LogFormat};
use facecut_core::catalog::DEFAULT_PAGE_LIMIT;
use facecut_core::{
    FaceShape, Gender, HairType, LengthCategory, PageRequest, StyleFilter, StyleOrder,
};

use crate::commands::recommend::RecommendArgs;

#[derive(Debug, Parser)]
#[command(
    name = "facecut",
    about = "Face shape analysis and hairstyle recommendations",
    long_about = "Classify a face shape from detector landmarks and rank hairstyles that suit it.",
    after_help = "Examples:\n  facecut classify --landmarks face.json\n  facecut recommend --shape heart --premium\n  facecut catalog --shape round --shape oval --gender female --limit 5"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Classify a face shape from a JSON array of landmark points")]
    Classify {
        #[arg(long, help = "Path to a JSON file of landmark points")]
        landmarks: PathBuf,
    },
    #[command(about = "Rank hairstyles for a face, from landmarks or an already known shape")]
    Recommend {
        #[arg(long, conflicts_with = "shape", help = "Path to a JSON file of landmark points")]
        landmarks: Option<PathBuf>,
        #[arg(long, help = "Face shape decided elsewhere (oval, round, square, ...)")]
        shape: Option<FaceShape>,
        #[arg(long, requires = "shape", help = "Confidence (0-100) for --shape")]
        confidence: Option<f64>,
        #[arg(long, help = "Show every matching style instead of the free-tier subset")]
        premium: bool,
        #[arg(long, help = "JSON catalog to rank instead of the configured one")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Browse the style catalog; repeat a filter flag to match any of its values")]
    Catalog {
        #[arg(
            long,
            conflicts_with_all = ["shape", "hair_type", "gender", "length"],
            help = "Show a single style by id"
        )]
        id: Option<String>,
        #[arg(long)]
        shape: Vec<FaceShape>,
        #[arg(long)]
        hair_type: Vec<HairType>,
        #[arg(long)]
        gender: Vec<Gender>,
        #[arg(long)]
        length: Vec<LengthCategory>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        min_maintenance: Option<u8>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        max_maintenance: Option<u8>,
        #[arg(
            long,
            default_value_t = DEFAULT_PAGE_LIMIT,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long, default_value_t = StyleOrder::Name, help = "name or catalog")]
        order: StyleOrder,
    },
    #[command(about = "Describe face shapes and their styling tips")]
    Shapes {
        #[arg(long)]
        shape: Option<FaceShape>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        init_logging(&config);
    }

    let result = match cli.command {
        Command::Classify { landmarks } => commands::classify::run(&landmarks),
        Command::Recommend { landmarks, shape, confidence, premium, catalog } => {
            commands::recommend::run(RecommendArgs { landmarks, shape, confidence, premium, catalog })
        }
        Command::Catalog { id: Some(id), .. } => commands::catalog::show(&id),
        Command::Catalog {
            id: None,
            shape,
            hair_type,
            gender,
            length,
            min_maintenance,
            max_maintenance,
            limit,
            offset,
            order,
        } => commands::catalog::run(
            StyleFilter {
                face_shapes: shape,
                hair_types: hair_type,
                genders: gender,
                lengths: length,
                min_maintenance,
                max_maintenance,
            },
            PageRequest { limit, offset, order },
        ),
        Command::Shapes { shape } => commands::shapes::run(shape),
        Command::Config => commands::config::run(),
    };

    tracing::debug!(
        event_name = "cli.command.finished",
        exit_code = result.exit_code,
        "command finished"
    );

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logs go to stderr so stdout carries only the JSON envelope.
fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
