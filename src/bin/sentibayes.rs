use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use sentibayes::config::{CorpusConfig, TrainerConfig};
use sentibayes::serialization;
use sentibayes::{tokenize, BayesModel, Trainer};
use serde_json::json;

const DEFAULT_POS_MODEL: &str = "pos.dat";
const DEFAULT_NEG_MODEL: &str = "neg.dat";

#[derive(Parser, Debug)]
#[command(author, version, about = "Naive Bayes sentiment toolkit", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Train a sentiment model from a directory of labeled reviews
    Train(TrainArgs),
    /// Classify text with a trained model
    Classify(ClassifyArgs),
    /// Tokenize text and print the resulting tokens
    Tokenize(TokenizeArgs),
    /// Inspect persisted frequency tables
    Info(InfoArgs),
}

#[derive(Args, Debug)]
struct TrainArgs {
    /// Directory of labeled training documents
    corpus: PathBuf,

    /// Filename prefix marking positive documents
    #[arg(long, value_name = "PREFIX")]
    positive_prefix: Option<String>,

    /// Filename prefix marking negative documents
    #[arg(long, value_name = "PREFIX")]
    negative_prefix: Option<String>,

    /// Output path for the positive frequency table
    #[arg(long, value_name = "PATH", default_value = DEFAULT_POS_MODEL)]
    pos_output: PathBuf,

    /// Output path for the negative frequency table
    #[arg(long, value_name = "PATH", default_value = DEFAULT_NEG_MODEL)]
    neg_output: PathBuf,

    /// Recurse into subdirectories of the corpus
    #[arg(long)]
    recursive: bool,

    /// Follow symlinks during traversal
    #[arg(long)]
    follow_symlinks: bool,

    /// Disable per-document logging/progress
    #[arg(long)]
    no_progress: bool,

    /// Emit pretty JSON tables
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Text to classify; reads stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Read the text to classify from a file
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Path of the persisted positive table
    #[arg(long, value_name = "PATH", default_value = DEFAULT_POS_MODEL)]
    pos_model: PathBuf,

    /// Path of the persisted negative table
    #[arg(long, value_name = "PATH", default_value = DEFAULT_NEG_MODEL)]
    neg_model: PathBuf,

    /// Print the log-likelihood scores alongside the label
    #[arg(long)]
    scores: bool,

    /// Emit a machine-readable JSON record
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct TokenizeArgs {
    /// Text to tokenize; reads stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Read the text to tokenize from a file
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Emit a JSON array instead of one token per line
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// Path of the persisted positive table
    #[arg(long, value_name = "PATH", default_value = DEFAULT_POS_MODEL)]
    pos_model: PathBuf,

    /// Path of the persisted negative table
    #[arg(long, value_name = "PATH", default_value = DEFAULT_NEG_MODEL)]
    neg_model: PathBuf,

    /// Number of most frequent tokens to list per class
    #[arg(long, value_name = "N", default_value_t = 10)]
    top: usize,

    /// Emit machine-readable JSON summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(args) => run_train(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Tokenize(args) => run_tokenize(args),
        Commands::Info(args) => run_info(args),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            0 => LevelFilter::Info,
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn run_train(args: TrainArgs) -> Result<()> {
    let defaults = TrainerConfig::default();
    let trainer_cfg = TrainerConfig::builder()
        .positive_prefix(args.positive_prefix.unwrap_or(defaults.positive_prefix))
        .negative_prefix(args.negative_prefix.unwrap_or(defaults.negative_prefix))
        .show_progress(!args.no_progress)
        .build()?;
    let corpus_cfg = CorpusConfig::builder()
        .recursive(args.recursive)
        .follow_symlinks(args.follow_symlinks)
        .build();

    let spinner = if args.no_progress {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} training tables... {elapsed}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    };

    let trainer = Trainer::new(trainer_cfg);
    let start = Instant::now();
    let artifacts = trainer
        .train_from_dir(&args.corpus, &corpus_cfg)
        .with_context(|| format!("failed to train from {}", args.corpus.display()))?;
    if let Some(pb) = spinner {
        pb.finish_with_message("training complete");
    }
    let elapsed = start.elapsed();

    serialization::save_model(&artifacts.model, &args.pos_output, &args.neg_output, args.pretty)
        .with_context(|| {
            format!(
                "failed to save tables to {} and {}",
                args.pos_output.display(),
                args.neg_output.display()
            )
        })?;

    let metrics = &artifacts.metrics;
    info!(
        "training complete: documents={} positive={} negative={} skipped={} duration={elapsed:.2?}",
        metrics.documents_seen,
        metrics.positive_documents,
        metrics.negative_documents,
        metrics.skipped_documents
    );
    println!(
        "✅ wrote tables with {} positive / {} negative tokens to {} and {}",
        artifacts.model.positive().total(),
        artifacts.model.negative().total(),
        args.pos_output.display(),
        args.neg_output.display()
    );
    println!(
        "   documents {} ({} positive, {} negative, {} skipped) | duration {elapsed:.2?}",
        metrics.documents_seen,
        metrics.positive_documents,
        metrics.negative_documents,
        metrics.skipped_documents
    );

    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let model = load_model(&args.pos_model, &args.neg_model)?;
    let text = resolve_text(&args.text, args.input.as_deref())?;

    let scores = model.scores(&text)?;
    let label = scores.label();

    if args.json {
        let mut record = json!({ "label": label });
        if args.scores {
            record["scores"] = json!(scores);
        }
        println!("{}", serde_json::to_string(&record)?);
    } else if args.scores {
        println!("{label}");
        println!("positive score: {:.6}", scores.positive);
        println!("negative score: {:.6}", scores.negative);
    } else {
        println!("{label}");
    }

    Ok(())
}

fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let text = resolve_text(&args.text, args.input.as_deref())?;
    let tokens = tokenize(&text);

    if args.json {
        println!("{}", serde_json::to_string(&tokens)?);
    } else {
        for token in tokens {
            println!("{token}");
        }
    }

    Ok(())
}

fn run_info(args: InfoArgs) -> Result<()> {
    let model = load_model(&args.pos_model, &args.neg_model)?;

    if args.json {
        let summary = json!({
            "positive": table_summary(model.positive(), args.top),
            "negative": table_summary(model.negative(), args.top),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for (name, table) in [("Positive", model.positive()), ("Negative", model.negative())] {
        println!("{name} table");
        println!("  Distinct tokens: {}", table.len());
        println!("  Total tokens   : {}", table.total());
        let top = top_tokens(table, args.top);
        if top.is_empty() {
            println!("  Top tokens     : (none)");
        } else {
            let rendered = top
                .iter()
                .map(|(token, count)| format!("{token} ({count})"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  Top tokens     : {rendered}");
        }
    }

    Ok(())
}

fn load_model(pos_model: &std::path::Path, neg_model: &std::path::Path) -> Result<BayesModel> {
    BayesModel::load(pos_model, neg_model).with_context(|| {
        format!(
            "failed to load model from {} and {}",
            pos_model.display(),
            neg_model.display()
        )
    })
}

fn resolve_text(words: &[String], input: Option<&std::path::Path>) -> Result<String> {
    if let Some(path) = input {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read text from stdin")?;
    Ok(buffer)
}

fn top_tokens(table: &sentibayes::FrequencyTable, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = table
        .iter()
        .map(|(token, count)| (token.to_owned(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

fn table_summary(table: &sentibayes::FrequencyTable, limit: usize) -> serde_json::Value {
    let top: Vec<serde_json::Value> = top_tokens(table, limit)
        .into_iter()
        .map(|(token, count)| json!({ "token": token, "count": count }))
        .collect();
    json!({
        "distinct_tokens": table.len(),
        "total_tokens": table.total(),
        "top_tokens": top,
    })
}
