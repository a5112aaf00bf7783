use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use topterms::config::Config;
use topterms::output::{summaries_to_json, terminal};
use topterms::topics::export::TopicModelExport;

/// topterms: summarize fitted topic models by their top-weighted terms.
///
/// Reads a topic-by-term weight matrix exported from any topic model
/// (NMF, LDA, ...) and prints the highest-weighted vocabulary terms of
/// each topic. Also cleans raw tweets ahead of vectorization.
#[derive(Parser)]
#[command(name = "topterms", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top-weighted terms of every topic in a model export
    Extract {
        /// JSON export: {"vocabulary": [...], "weights": [[...], ...]}
        #[arg(long, short)]
        input: PathBuf,

        /// Terms per topic (default: TOPTERMS_TOP_N or 10)
        #[arg(long)]
        top_n: Option<usize>,

        /// Rank raw weights instead of row-normalized ones
        #[arg(long)]
        no_normalize: bool,

        /// Return every term when --top-n exceeds the vocabulary size
        #[arg(long)]
        clamp: bool,

        /// Leave out topics whose weights sum to zero
        #[arg(long)]
        skip_degenerate: bool,

        /// Print JSON instead of a bar chart
        #[arg(long)]
        json: bool,
    },

    /// Clean raw tweets (one per line) into space-separated tokens
    Clean {
        /// Input file (default: stdin)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Keep English stop words
        #[arg(long)]
        keep_stop_words: bool,

        /// Shortest token to keep (default: TOPTERMS_MIN_TOKEN_LEN or 2)
        #[arg(long)]
        min_len: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging on stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topterms=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Extract {
            input,
            top_n,
            no_normalize,
            clamp,
            skip_degenerate,
            json,
        } => {
            if let Some(n) = top_n {
                config.top_n = n;
            }
            if no_normalize {
                config.normalize = false;
            }
            config.clamp_top_n |= clamp;
            config.skip_degenerate |= skip_degenerate;

            let export = TopicModelExport::load(&input)?;
            info!(
                topics = export.num_topics(),
                terms = export.num_terms(),
                "Summarizing {}",
                input.display()
            );

            let summaries = config
                .extractor()
                .extract_from(&export)
                .with_context(|| format!("Failed to summarize {}", input.display()))?;

            if json {
                println!("{}", summaries_to_json(&summaries)?);
            } else {
                terminal::display_topics(&summaries);
                if !config.normalize {
                    println!("{}", "Weights shown are raw model weights.".dimmed());
                }
            }
        }

        Commands::Clean {
            input,
            keep_stop_words,
            min_len,
        } => {
            config.keep_stop_words |= keep_stop_words;
            if let Some(n) = min_len {
                config.min_token_len = n;
            }

            let cleaner = config.cleaner()?;

            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
                )),
                None => Box::new(io::stdin().lock()),
            };

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let mut read = 0usize;
            let mut written = 0usize;

            for line in reader.lines() {
                let line = line.context("Failed to read input line")?;
                read += 1;
                let cleaned = cleaner.clean_to_string(&line);
                if cleaned.is_empty() {
                    continue;
                }
                writeln!(out, "{cleaned}")?;
                written += 1;
            }

            info!(read, written, "Cleaned tweets");
        }
    }

    Ok(())
}
