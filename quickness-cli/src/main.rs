use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use quickness::{
    suggest_filename, CaptureSession, DocumentPlanner, ElementDescriptor, PageLayout,
    QuicknessConfig, ScoredCandidate, TargetScorer,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "quickness",
    about = "Capture-target scoring and PDF page planning for THE QUICKNESS",
    version,
    author
)]
struct Cli {
    /// JSON configuration file (scoring weights and layout options)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an ancestor chain and pick the element to capture
    Score {
        /// JSON array of element descriptors, pointer target first ("-" for stdin)
        input: PathBuf,

        /// Number of chain entries to consider
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,
    },

    /// Plan the PDF pages for a capture session
    Plan {
        /// JSON capture session ("-" for stdin)
        input: PathBuf,

        /// Output file for the plan (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page size preset: a4, letter or legal
        #[arg(short, long)]
        page: Option<String>,

        /// Capture time used for the file name (RFC 3339, defaults to now)
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Suggest a file name for a capture with the given note
    Filename {
        /// Note text
        note: Vec<String>,

        /// Capture time (RFC 3339, defaults to now)
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport {
    best: Option<ScoredCandidate>,
    ranking: Vec<ScoredCandidate>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Score { input, max_depth } => {
            let chain: Vec<ElementDescriptor> = serde_json::from_str(&read_input(&input)?)
                .with_context(|| format!("Invalid element chain in {}", input.display()))?;
            let max_depth = max_depth.unwrap_or(config.scoring.max_depth);

            let scorer = TargetScorer::with_weights(config.scoring);
            let report = ScoreReport {
                best: scorer.best_candidate(&chain, max_depth),
                ranking: scorer.rank(&chain, max_depth),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Plan {
            input,
            output,
            page,
            timestamp,
        } => {
            let session: CaptureSession = serde_json::from_str(&read_input(&input)?)
                .with_context(|| format!("Invalid capture session in {}", input.display()))?;

            let mut options = config.layout;
            if let Some(name) = page {
                let margin = options.page.margin_mm;
                options.page = PageLayout::from_name(&name)?.with_margin(margin);
            }
            let planner = DocumentPlanner::new(options)?;

            let plan = planner.plan_at(&session, parse_timestamp(timestamp.as_deref())?);
            let json = serde_json::to_string_pretty(&plan)?;
            info!(
                pages = plan.page_count,
                elements = plan.elements.len(),
                filename = %plan.filename,
                "planned capture document"
            );

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("✓ Plan for {} written to {}", plan.filename, path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Filename { note, timestamp } => {
            let note = note.join(" ");
            println!(
                "{}",
                suggest_filename(&note, parse_timestamp(timestamp.as_deref())?)
            );
        }

        Commands::Config => {
            println!("{}", config.to_json_pretty()?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "quickness=debug,quickness_cli=debug"
    } else {
        "quickness=info,quickness_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<QuicknessConfig> {
    match path {
        Some(path) => {
            let config = QuicknessConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            debug!(path = %path.display(), "using configuration file");
            Ok(config)
        }
        None => Ok(QuicknessConfig::default()),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_timestamp(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        None => Ok(Utc::now()),
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
            Err(e) => bail!("Invalid timestamp '{raw}': {e}"),
        },
    }
}
