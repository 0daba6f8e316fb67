use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use spmat::{
    ensure_output_dir, par_multiply, render, Element, MatrixFile, MatrixSummary, ParallelConfig,
    PrintConfig, SparseMatrix,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "SPMAT CLI - Arithmetic on sparse matrices stored as text triple files")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of the same shape
    Add(BinaryArgs),
    /// Subtract the second matrix from the first
    Subtract(BinaryArgs),
    /// Multiply two matrices
    Multiply {
        #[command(flatten)]
        args: BinaryArgs,

        /// Spread output rows across threads
        #[arg(long)]
        parallel: bool,

        /// Worker threads for --parallel (default: all cores)
        #[arg(long, requires = "parallel")]
        threads: Option<usize>,
    },
    /// Transpose a matrix
    Transpose {
        /// Matrix file
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show dimensions and fill of a matrix
    Info {
        /// Matrix file
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a matrix
    Show {
        /// Matrix file
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct BinaryArgs {
    /// Left operand file
    left: PathBuf,

    /// Right operand file
    right: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Also save the result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the CSR view as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Rows shown in the table
    #[arg(long, default_value_t = 10)]
    max_rows: usize,

    /// Columns shown in the table
    #[arg(long, default_value_t = 10)]
    max_cols: usize,
}

impl OutputArgs {
    fn print_config(&self) -> PrintConfig {
        PrintConfig::default()
            .with_max_rows(self.max_rows)
            .with_max_cols(self.max_cols)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Add(args) => {
            let (a, b) = load_pair(args)?;
            emit(&a.add(&b)?, &args.output, true)
        }
        Commands::Subtract(args) => {
            let (a, b) = load_pair(args)?;
            emit(&a.subtract(&b)?, &args.output, true)
        }
        Commands::Multiply {
            args,
            parallel,
            threads,
        } => {
            let (a, b) = load_pair(args)?;
            let product = if *parallel {
                let mut config = ParallelConfig::always();
                if let Some(threads) = threads {
                    config = config.with_num_threads(*threads);
                }
                par_multiply(&a, &b, &config)?
            } else {
                a.multiply(&b)?
            };
            emit(&product, &args.output, true)
        }
        Commands::Transpose { input, output } => {
            let matrix = load(input)?;
            emit(&matrix.transpose(), output, true)
        }
        Commands::Info { input, json } => {
            let summary = MatrixSummary::of(&load(input)?);
            if *json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
            Ok(())
        }
        Commands::Show { input, output } => emit(&load(input)?, output, false),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> Result<SparseMatrix<Element>> {
    MatrixFile::read(path).with_context(|| format!("failed to load {}", path.display()))
}

fn load_pair(args: &BinaryArgs) -> Result<(SparseMatrix<Element>, SparseMatrix<Element>)> {
    let left = load(&args.left)?;
    let right = load(&args.right)?;
    info!(
        left = ?left.dimensions(),
        right = ?right.dimensions(),
        "loaded operands"
    );
    Ok((left, right))
}

/// Print a matrix, prefixed with `Result:` when it came out of an operation
fn emit(result: &SparseMatrix<Element>, output: &OutputArgs, labelled: bool) -> Result<()> {
    print!("{}", format_output(result, output, labelled)?);

    if let Some(path) = &output.output {
        if let Some(parent) = path.parent() {
            ensure_output_dir(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        MatrixFile::write(result, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), nnz = result.nnz(), "saved result");
    }
    Ok(())
}

fn format_output(
    result: &SparseMatrix<Element>,
    output: &OutputArgs,
    labelled: bool,
) -> Result<String> {
    if output.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&result.to_csr())?));
    }
    let table = render(result, &output.print_config())?;
    Ok(if labelled {
        format!("Result:\n{table}")
    } else {
        table
    })
}
