use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sift_corpus::Corpus;
use sift_embeddings::{EmbeddingConfig, HttpEmbeddingClient};
use sift_eval::{
    BenchmarkGenerator, EvaluationHarness, FaithfulnessGrader, Report, detailed_log,
    load_benchmark, save_benchmark,
};
use sift_llm_client::{HttpClientConfig, HttpCompletionClient};
use sift_pipeline::{PipelineConfig, RetrievalPipeline};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "sift", about = "Adaptive hybrid retrieval over a document corpus")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer a question against the corpus
    Ask(AskArgs),

    /// Generate or replay an evaluation benchmark
    Benchmark(BenchmarkCli),
}

#[derive(Debug, Parser)]
struct AskArgs {
    /// The question to answer
    #[arg(value_name = "QUESTION")]
    question: String,

    /// Path to the corpus file, one document per line
    #[arg(short, long, value_name = "PATH")]
    corpus: PathBuf,
}

#[derive(Debug, Parser)]
struct BenchmarkCli {
    #[command(subcommand)]
    command: BenchmarkCommand,
}

#[derive(Debug, Subcommand)]
enum BenchmarkCommand {
    /// Generate a synthetic benchmark from the corpus
    Generate(GenerateArgs),

    /// Replay a benchmark through the pipeline and grade every answer
    Run(RunArgs),
}

#[derive(Debug, Parser)]
struct GenerateArgs {
    /// Path to the corpus file, one document per line
    #[arg(short, long, value_name = "PATH")]
    corpus: PathBuf,

    /// Where to write the benchmark (JSON array)
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,
}

#[derive(Debug, Parser)]
struct RunArgs {
    /// Path to the corpus file, one document per line
    #[arg(short, long, value_name = "PATH")]
    corpus: PathBuf,

    /// Path to the benchmark file
    #[arg(short, long, value_name = "PATH")]
    benchmark: PathBuf,

    /// Benchmark items evaluated concurrently
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

fn chat_config() -> Result<HttpClientConfig> {
    let api_key = std::env::var("SIFT_API_KEY").context("SIFT_API_KEY is not set")?;
    let mut config = HttpClientConfig {
        api_key,
        ..Default::default()
    };
    if let Ok(base_url) = std::env::var("SIFT_BASE_URL") {
        config.base_url = base_url;
    }
    if let Ok(model) = std::env::var("SIFT_CHAT_MODEL") {
        config.model = model;
    }
    Ok(config)
}

fn embedding_config() -> Result<EmbeddingConfig> {
    let api_key = std::env::var("SIFT_API_KEY").context("SIFT_API_KEY is not set")?;
    let mut config = EmbeddingConfig {
        api_key,
        ..Default::default()
    };
    if let Ok(base_url) = std::env::var("SIFT_BASE_URL") {
        config.base_url = base_url;
    }
    if let Ok(model) = std::env::var("SIFT_EMBED_MODEL") {
        config.model = model;
    }
    Ok(config)
}

fn build_pipeline() -> Result<(Arc<RetrievalPipeline>, Arc<HttpCompletionClient>)> {
    let chat = Arc::new(HttpCompletionClient::new(chat_config()?)?);
    let embedder = Arc::new(HttpEmbeddingClient::new(embedding_config()?)?);

    let pipeline = RetrievalPipeline::new(
        PipelineConfig::default(),
        chat.clone(),
        embedder,
        chat.clone(),
    )?;

    Ok((Arc::new(pipeline), chat))
}

async fn run_ask(args: AskArgs) -> Result<()> {
    let corpus = Corpus::load(&args.corpus)
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;
    let (pipeline, _) = build_pipeline()?;

    let outcome = pipeline.answer(&args.question, &corpus).await?;

    println!("Query: {}", args.question);
    println!("Route taken: {}", outcome.route);
    println!("Retrieved context: {}", outcome.context);
    println!("Answer: {}", outcome.answer);
    Ok(())
}

async fn run_generate(args: GenerateArgs) -> Result<()> {
    let corpus = Corpus::load(&args.corpus)
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;
    let chat = Arc::new(HttpCompletionClient::new(chat_config()?)?);

    let generator = BenchmarkGenerator::new(chat);
    let benchmark = generator.generate(&corpus).await;

    save_benchmark(&args.output, &benchmark)
        .with_context(|| format!("failed to write benchmark {}", args.output.display()))?;

    println!(
        "Created a synthetic evaluation test suite of {} data points.",
        benchmark.len()
    );
    Ok(())
}

async fn run_benchmark(args: RunArgs) -> Result<()> {
    let corpus = Corpus::load(&args.corpus)
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;
    let benchmark = load_benchmark(&args.benchmark)
        .with_context(|| format!("failed to load benchmark {}", args.benchmark.display()))?;

    let (pipeline, chat) = build_pipeline()?;
    let harness = EvaluationHarness::new(pipeline, FaithfulnessGrader::new(chat))
        .with_concurrency(args.concurrency);

    let records = harness.run(&benchmark, &corpus).await;

    print!("{}", detailed_log(&records));
    print!("{}", Report::from_records(&records).render());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Ask(args) => run_ask(args).await,
        Command::Benchmark(bench) => match bench.command {
            BenchmarkCommand::Generate(args) => run_generate(args).await,
            BenchmarkCommand::Run(args) => run_benchmark(args).await,
        },
    }
}
