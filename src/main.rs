use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use topic_quiz::{DEFAULT_QUESTIONS_PATH, DEFAULT_QUESTION_COUNT, QuestionBank, Quiz, QuizConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, env = "QUIZ_QUESTIONS", default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Number of questions to draw
    #[arg(short = 'n', long, env = "QUIZ_COUNT", default_value_t = DEFAULT_QUESTION_COUNT)]
    count: usize,

    /// Topic to pre-select (repeatable)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Seed for reproducible question draws
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,

    /// File to write logs to; the quiz owns the terminal, so nothing is
    /// logged without it
    #[arg(long, env = "QUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    info!("Starting topic quiz");

    let bank = QuestionBank::load(&args.questions)
        .with_context(|| format!("failed to load questions from {}", args.questions.display()))?;

    let config = QuizConfig::new(args.count)
        .with_tags(args.tags)
        .with_seed(args.seed);

    Quiz::new(bank, config).run().context("error running quiz")?;
    Ok(())
}
