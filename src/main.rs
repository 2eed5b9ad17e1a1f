use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use quiz_bank::report::write_summary;
use quiz_bank::{QuestionBank, QuestionFactory, QuizError, SequentialIds, DEFAULT_QUESTIONS_PATH};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One summary line per question
    Text,
    /// The validated questions as JSON
    Json,
}

/// Check a quiz question bank and print a summary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Number questions 1, 2, 3, ... instead of using random ids
    #[arg(long)]
    sequential_ids: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), QuizError> {
    info!(path = %args.questions.display(), "checking question bank");

    let bank = if args.sequential_ids {
        QuestionBank::from_json_with(&args.questions, &QuestionFactory::new(SequentialIds::new()))?
    } else {
        QuestionBank::from_json(&args.questions)?
    };

    match args.format {
        Format::Text => write_summary(&bank, &mut io::stdout().lock())?,
        Format::Json => println!("{}", serde_json::to_string_pretty(bank.questions())?),
    }

    Ok(())
}
