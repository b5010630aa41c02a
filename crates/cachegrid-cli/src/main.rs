use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "cachegrid",
    about = "CacheGrid — edge video cache placement and scoring",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a solution against its problem instance.
    ///
    /// Prints the normalized latency savings (ms saved per 1000 requests).
    /// An infeasible solution fails with a nonzero exit instead of a score.
    Score {
        /// Problem instance file
        input: String,
        /// Solution file to validate and score
        solution: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Build a placement for a problem instance.
    ///
    /// Strategies: popularity (weighted first-fit) or savings
    /// (latency-savings greedy).
    Place {
        /// Problem instance file
        input: String,
        /// Placement strategy: popularity or savings
        #[arg(short, long, default_value = "popularity")]
        strategy: String,
        /// Write the solution to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Emit only caches that store at least one video
        #[arg(long)]
        skip_empty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so a piped `place` leaves pure solution text on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cachegrid_placement=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { input, solution, format } => {
            commands::score::score(&input, &solution, &format)
        }
        Commands::Place { input, strategy, output, skip_empty } => {
            commands::place::place(&input, &strategy, output.as_deref(), skip_empty)
        }
    }
}
