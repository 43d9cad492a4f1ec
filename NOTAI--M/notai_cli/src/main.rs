use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use notai_nlp::{NlpConfig, NlpRuntime};
use serde_json::json;
use shared_logging::{JsonLogger, LogLevel, LogRecord, LogSink};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "notai", version, about = "Flashcards and answers from study notes")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON-lines log file; overrides `[logging] log_path`.
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates question/answer pairs from text.
    Generate {
        #[command(flatten)]
        source: TextSource,
        /// Number of pairs to return.
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// Deck label echoed with the pairs.
        #[arg(long)]
        deck: Option<String>,
        /// Fixed seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Answers a question about a note.
    Ask {
        #[arg(long)]
        question: String,
        #[command(flatten)]
        note: NoteSource,
    },
    /// Summarizes a note.
    Summarize {
        #[command(flatten)]
        note: NoteSource,
    },
    /// Lists the main topics of a note.
    Topics {
        #[command(flatten)]
        note: NoteSource,
    },
    /// Reads JSON commands from stdin and answers on stdout.
    Console,
}

#[derive(Args, Debug)]
struct TextSource {
    /// File holding the source text.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Inline source text.
    #[arg(long)]
    text: Option<String>,
}

#[derive(Args, Debug)]
struct NoteSource {
    /// File holding the note.
    #[arg(long, conflicts_with = "note")]
    note_file: Option<PathBuf>,
    /// Inline note content.
    #[arg(long)]
    note: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => NlpConfig::load(path)?,
        None => NlpConfig::default(),
    };
    if let Some(log) = &cli.log {
        config.logging.log_path = Some(log.clone());
    }
    if let Commands::Generate { seed: Some(seed), .. } = &cli.command {
        config.generator.seed = Some(*seed);
    }
    let runtime = Arc::new(NlpRuntime::from_config(&config)?);
    let executor = Runtime::new().context("starting async runtime")?;

    match cli.command {
        Commands::Generate {
            source,
            count,
            deck,
            ..
        } => {
            let text = read_input(source.file, source.text, "--file or --text")?;
            let report = executor.block_on(runtime.generate(&text, count))?;
            if report.pairs.is_empty() {
                eprintln!("no questions could be generated; try more detailed content");
            }
            let output = json!({ "deck": deck, "pairs": report.pairs, "report": {
                "sentences_seen": report.sentences_seen,
                "sentences_skipped": report.sentences_skipped,
                "sentences_failed": report.sentences_failed,
                "duplicates_removed": report.duplicates_removed,
                "truncated_by_budget": report.truncated_by_budget,
            }});
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Ask { question, note } => {
            let note = read_input(note.note_file, note.note, "--note-file or --note")?;
            let answer = runtime.answer(&question, &note);
            println!("{}", serde_json::to_string_pretty(&json!({ "answer": answer }))?);
        }
        Commands::Summarize { note } => {
            let note = read_input(note.note_file, note.note, "--note-file or --note")?;
            let summary = runtime.summarize(&note);
            println!("{}", serde_json::to_string_pretty(&json!({ "summary": summary }))?);
        }
        Commands::Topics { note } => {
            let note = read_input(note.note_file, note.note, "--note-file or --note")?;
            let topics = runtime.topics(&note);
            println!("{}", serde_json::to_string_pretty(&json!({ "topics": topics }))?);
        }
        Commands::Console => {
            executor.block_on(Arc::clone(&runtime).serve_console())?;
        }
    }

    if let Some(path) = &config.logging.log_path {
        let logger = JsonLogger::new(path)?;
        let record = LogRecord::new("notai-cli", LogLevel::Info, "cli.command.completed");
        logger.write(&record)?;
    }
    Ok(())
}

fn read_input(file: Option<PathBuf>, inline: Option<String>, flags: &str) -> Result<String> {
    match (file, inline) {
        (Some(path), _) => fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display())),
        (None, Some(text)) => Ok(text),
        (None, None) => bail!("provide {flags}"),
    }
}
