use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "qbfpt",
    version,
    about = "MAX-QBF/PT experiment driver — batch benchmark runs and a GA solver"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the external solver tool once per benchmark instance
    Batch(BatchArgs),
    /// Solve a single instance with the genetic algorithm
    Solve(SolveArgs),
    /// Generate a random instance file
    Gen(GenArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// Solver variant to drive; also names the results subdirectory
    pub mode: String,

    /// Directory receiving one output file per instance, under <MODE>/
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Launcher argv prefix placed before the tool path
    #[arg(
        long,
        value_delimiter = ' ',
        default_values_t = vec!["java".to_string(), "-jar".to_string()]
    )]
    pub launcher: Vec<String>,

    /// Tool handed to the launcher (default: <MODE>.jar)
    #[arg(long)]
    pub tool: Option<PathBuf>,

    /// Comma-separated instance identifiers (default: the benchmark set)
    #[arg(long, value_delimiter = ',')]
    pub instances: Option<Vec<String>>,

    /// Write a JSON batch report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SolveArgs {
    /// Instance file to solve
    #[arg(long)]
    pub instance: PathBuf,

    /// Maximum number of generations
    #[arg(long, default_value_t = 1000)]
    pub generations: u32,

    /// Population size (rounded up to even)
    #[arg(long, default_value_t = 1000)]
    pub pop_size: usize,

    /// Per-locus mutation probability
    #[arg(long, default_value_t = 0.005)]
    pub mutation_rate: f64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit a machine-readable JSON record instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GenArgs {
    /// Number of binary variables
    #[arg(long)]
    pub size: usize,

    /// RNG seed for reproducible instances
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}
