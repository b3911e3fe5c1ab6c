use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use studyforge::generation::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use studyforge::{CompletionConfig, OllamaClient, StudyPipeline};

#[derive(Parser)]
#[command(name = "studyforge", version, about = "Generate study material from documents with a local LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Args)]
struct ModelArgs {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate summary, flashcards and quiz in one pass.
    Process {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        llm: ModelArgs,
    },
    /// Generate only the flashcard deck.
    Flashcards {
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        llm: ModelArgs,
    },
    /// Generate only the quiz.
    Quiz {
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        llm: ModelArgs,
    },
    /// Generate only the markdown summary.
    Summary {
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        llm: ModelArgs,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_pipeline(args: &ModelArgs) -> anyhow::Result<StudyPipeline<OllamaClient>> {
    let config = CompletionConfig::default()
        .with_endpoint(&args.endpoint)
        .with_model(&args.model)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let client = OllamaClient::new(config).context("could not build the completion client")?;
    Ok(StudyPipeline::new(Arc::new(client)))
}

fn read_document(file: &PathBuf) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("could not read document {:?}", file))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Process { file, output, llm } => {
            let content = read_document(&file)?;
            let package = build_pipeline(&llm)?.process_document(&content);
            let rendered = serde_json::to_string_pretty(&package)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("could not write {:?}", path))?;
                    info!(output = %path.display(), "study package written");
                }
                None => println!("{rendered}"),
            }
        }
        Commands::Flashcards { file, llm } => {
            let content = read_document(&file)?;
            let deck = build_pipeline(&llm)?.generate_flashcards(&content);
            println!("{}", serde_json::to_string_pretty(&deck)?);
        }
        Commands::Quiz { file, llm } => {
            let content = read_document(&file)?;
            let quiz = build_pipeline(&llm)?.generate_quiz(&content);
            println!("{}", serde_json::to_string_pretty(&quiz)?);
        }
        Commands::Summary { file, llm } => {
            let content = read_document(&file)?;
            println!("{}", build_pipeline(&llm)?.generate_summary(&content));
        }
    }

    Ok(())
}
