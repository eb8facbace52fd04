use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use digraph_gen::check::{check_edge_list, Limits};
use digraph_gen::config::{ConfigError, GeneratorConfig, GraphCreationConfig, Overrides};
use digraph_gen::testcase::{write_testcase, Format};

#[derive(Parser)]
#[command(name = "digraph-gen")]
#[command(about = "Random weighted digraph generator for shortest path test cases", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random graph and print it (the default)
    Generate(GenerateArgs),

    /// Read an edge list from stdin and verify it is a valid test case
    Check {
        /// Lowest allowed edge weight
        #[arg(long)]
        min_weight: Option<u64>,

        /// Highest allowed edge weight
        #[arg(long)]
        max_weight: Option<u64>,

        /// Sampling attempts the list was generated with
        #[arg(short = 'e', long)]
        attempts: Option<usize>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// YAML file with generator parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of vertices [default: 500]
    #[arg(short = 'n', long)]
    vertices: Option<usize>,

    /// Number of sampled edges, repeated pairs overwrite each other [default: 100000]
    #[arg(short = 'e', long)]
    attempts: Option<usize>,

    /// Lowest edge weight [default: 0]
    #[arg(long)]
    min_weight: Option<u64>,

    /// Highest edge weight [default: 2000]
    #[arg(long)]
    max_weight: Option<u64>,

    /// Seed for reproducible output, drawn from the OS if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::EdgeList)]
    format: Format,
}

impl GenerateArgs {
    fn resolve(&self) -> Result<GeneratorConfig, ConfigError> {
        let creation = match &self.config {
            Some(path) => GraphCreationConfig::from_yaml_file(path)?,
            None => GraphCreationConfig::default(),
        };

        creation.with_overrides(&Overrides {
            seed: self.seed,
            vertices: self.vertices,
            attempts: self.attempts,
            min_weight: self.min_weight,
            max_weight: self.max_weight,
        })
    }
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let config = args.resolve().context("invalid generator configuration")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_testcase(&config, args.format, &mut out).context("failed to write graph")
}

fn check(min_weight: Option<u64>, max_weight: Option<u64>, attempts: Option<usize>) -> Result<()> {
    let limits = Limits::new(min_weight, max_weight, attempts).context("invalid limits")?;

    let summary = check_edge_list(io::stdin().lock(), &limits).context("invalid edge list")?;
    println!("ok: {} vertices, {} edges", summary.vertices, summary.edges);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Generate(args)) => generate(&args),
        Some(Commands::Check {
            min_weight,
            max_weight,
            attempts,
        }) => check(min_weight, max_weight, attempts),
        None => generate(&cli.generate),
    }
}
