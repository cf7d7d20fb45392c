use crate::commands::{run_edit, run_score, run_template, run_validate};
use clap::{Args, Parser, Subcommand};
use qc_engine::config::AppConfig;
use qc_engine::error::AppError;
use qc_engine::ingest::MAX_CLIP_INDEX;
use qc_engine::profiles::ProductKind;
use qc_engine::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qc-review",
    about = "Score detected subtitle and dub defects against client QC profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a detector export and print clip scores, asset score and the review queue
    Score(ScoreArgs),
    /// Check profile documents (and optionally a detector export) for configuration drift
    Validate(ValidateArgs),
    /// Clone a profile and/or edit one of its checks, writing the documents back out
    Edit(EditArgs),
    /// Print the built-in template profile as JSON
    Template,
}

/// Which profile, product and language to resolve.
#[derive(Args, Debug, Default)]
pub(crate) struct SelectionArgs {
    /// Profile documents (JSON array); the built-in template is used when omitted
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
    /// Profile id to activate instead of the configured template
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Product kind (dubbed_audio, subtitles, sdh, closed_captions)
    #[arg(long, value_parser = parse_product)]
    pub(crate) product: Option<ProductKind>,
    /// Language code, e.g. en or fr-FR
    #[arg(long)]
    pub(crate) language: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
    /// Detector export (CSV with Clip, Category, Check, Severity, Time, Description)
    #[arg(long)]
    pub(crate) defects: PathBuf,
    /// Total clip count, for assets whose trailing clips had no defects
    #[arg(long, value_parser = parse_clip_count)]
    pub(crate) clip_count: Option<usize>,
    /// Queue clips scoring below this instead of the configured threshold
    #[arg(long)]
    pub(crate) pass_threshold: Option<f64>,
    /// Emit JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
    /// Also check that every defect in this export references a configured check
    #[arg(long)]
    pub(crate) defects: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EditArgs {
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
    /// Clone the active profile under this id before editing
    #[arg(long)]
    pub(crate) clone_as: Option<String>,
    /// Client name for the clone (defaults to the new id)
    #[arg(long, requires = "clone_as")]
    pub(crate) client: Option<String>,
    /// Category of the check to edit
    #[arg(long, requires = "check")]
    pub(crate) category: Option<String>,
    /// Check to edit
    #[arg(long, requires = "category")]
    pub(crate) check: Option<String>,
    #[arg(long)]
    pub(crate) enabled: Option<bool>,
    /// ERROR, WARNING or INFO
    #[arg(long)]
    pub(crate) severity: Option<String>,
    /// Non-numeric input is treated as 0
    #[arg(long)]
    pub(crate) weight: Option<String>,
    /// Non-numeric input is treated as 0
    #[arg(long)]
    pub(crate) penalty: Option<String>,
    /// binary, threshold, range or percentage
    #[arg(long)]
    pub(crate) measurement_type: Option<String>,
    /// Where to write the resulting profile documents (stdout when omitted)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

fn parse_product(raw: &str) -> Result<ProductKind, String> {
    ProductKind::from_key(raw).ok_or_else(|| {
        format!("unknown product '{raw}', expected dubbed_audio, subtitles, sdh or closed_captions")
    })
}

fn parse_clip_count(raw: &str) -> Result<usize, String> {
    let count: usize = raw.trim().parse().map_err(|_| format!("'{raw}' is not a clip count"))?;
    if count > MAX_CLIP_INDEX + 1 {
        return Err(format!("at most {} clips are supported", MAX_CLIP_INDEX + 1));
    }
    Ok(count)
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Score(args) => run_score(&config, args),
        Command::Validate(args) => run_validate(&config, args),
        Command::Edit(args) => run_edit(&config, args),
        Command::Template => run_template(),
    }
}
