//! Memolog CLI

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use memolog::output::{self, OutputFormat};
use memolog::{
    AnalysisConfig, Note, build_link_graph, check_integrity_with_config, create_link,
    find_broken_links, find_orphaned_memos, get_backlinks_with_context,
    highlight_links_with_class, is_valid_memo_id, load_notes, load_settings,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Memolog - analyze links between memos
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of {"id", "content"} notes
    #[arg(short, long, env = "MEMOLOG_NOTES", global = true)]
    notes: Option<PathBuf>,

    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long, env = "MEMOLOG_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format (json, human)
    #[arg(short, long, default_value = "json", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the reference graph
    Graph,
    /// List notes referencing an id, with previews
    Backlinks {
        id: String,
        /// Characters of context on each side (overrides settings)
        #[arg(long)]
        context: Option<usize>,
    },
    /// List notes with neither outgoing nor incoming links
    Orphans,
    /// List links to ids that are not in the corpus
    Broken,
    /// Full integrity report; exits with status 1 when unhealthy
    Check,
    /// Rewrite link syntax in TEXT into anchors
    Highlight { text: String },
    /// Print link syntax for an id
    Link {
        id: String,
        #[arg(long)]
        text: Option<String>,
    },
    /// Check whether an id can be linked
    Validate { id: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}

fn require_notes(path: Option<&PathBuf>) -> Result<Vec<Note>> {
    let Some(path) = path else {
        bail!("This command needs a corpus: pass --notes <FILE> or set MEMOLOG_NOTES");
    };
    load_notes(path).with_context(|| format!("Failed to load notes from {}", path.display()))
}

fn print(
    format: OutputFormat,
    json: impl FnOnce() -> serde_json::Result<String>,
    human: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json().context("Failed to serialize output")?),
        OutputFormat::Human => println!("{}", human()),
    }
    Ok(())
}

fn run(args: Args, settings: &AnalysisConfig) -> Result<ExitCode> {
    let format = args.format;

    match args.command {
        Command::Graph => {
            let notes = require_notes(args.notes.as_ref())?;
            let graph = build_link_graph(&notes);
            print(format, || output::to_json(&graph), || output::render_graph(&graph))?;
        }
        Command::Backlinks { id, context } => {
            let notes = require_notes(args.notes.as_ref())?;
            let context_length = context.unwrap_or(settings.context_length);
            let backlinks = get_backlinks_with_context(&id, &notes, context_length);
            print(
                format,
                || output::to_json(&backlinks),
                || output::render_backlinks(&id, &backlinks),
            )?;
        }
        Command::Orphans => {
            let notes = require_notes(args.notes.as_ref())?;
            let orphans = find_orphaned_memos(&notes);
            print(
                format,
                || output::to_json(&orphans),
                || output::render_orphans(&orphans),
            )?;
        }
        Command::Broken => {
            let notes = require_notes(args.notes.as_ref())?;
            let broken = find_broken_links(&notes);
            print(
                format,
                || output::to_json(&broken),
                || output::render_broken_links(&broken),
            )?;
        }
        Command::Check => {
            let notes = require_notes(args.notes.as_ref())?;
            let report = check_integrity_with_config(&notes, settings);
            print(
                format,
                || output::to_json(&report),
                || output::render_report(&report),
            )?;
            if !report.is_healthy() {
                log::warn!("Corpus health score {} is below 80", report.health_score);
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Highlight { text } => {
            println!("{}", highlight_links_with_class(&text, &settings.link_class));
        }
        Command::Link { id, text } => {
            if !is_valid_memo_id(&id) {
                log::warn!(
                    "{:?} is not a valid memo id; the link will not be recognized",
                    id
                );
            }
            println!("{}", create_link(&id, text.as_deref()));
        }
        Command::Validate { id } => {
            let valid = is_valid_memo_id(&id);
            print(
                format,
                || output::to_json(&serde_json::json!({ "id": id, "valid": valid })),
                || format!("{}: {}", id, if valid { "valid" } else { "invalid" }),
            )?;
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    log::debug!("Memolog v{}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings(args.config.as_deref()).context("Failed to load settings")?;
    log::debug!("Settings: {:?}", settings);

    run(args, &settings)
}
