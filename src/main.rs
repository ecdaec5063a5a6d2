use clap::{Args, Parser, Subcommand};
use squarefree_rs::{Equivalence, SearchConfig, Structure};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Search for repetition-free strings and morphisms under relaxed equivalences.
#[derive(Parser)]
#[command(name = "squarefree", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Depth-first search for repetition-free strings
    Dfs {
        #[command(flatten)]
        common: CommonArgs,

        /// Do not extend strings beyond this length
        #[arg(long)]
        max_len: Option<usize>,
    },
    /// Enumerate morphisms whose images of the seed texts stay repetition-free
    Morphisms {
        #[command(flatten)]
        common: CommonArgs,

        /// Maximum length of the strings in the coding morphism
        #[arg(long, default_value_t = 5)]
        codelength: usize,

        /// Applications of the seed morphism to the start word `a`
        #[arg(long, default_value_t = 6)]
        iterations: usize,

        /// Seed for shuffling candidate images (random if omitted)
        #[arg(long, env = "SQUAREFREE_SEED")]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Size of the alphabet (2 means {a, b})
    #[arg(short, long, default_value_t = 2)]
    sigma: usize,

    /// Structure to forbid: SQUARE or CUBE
    #[arg(short = 'o', long = "structure", default_value = "SQUARE")]
    structure: String,

    /// Equivalence: STRICT, PARAMETERIZED, ORDER_PRESERVING, WEAK_ORDER_PRESERVING, CARTESIAN
    #[arg(short = 't', long = "type", default_value = "PARAMETERIZED")]
    equivalence: String,

    /// Minimum length of repeated roots
    #[arg(short, long, default_value_t = 1)]
    length: usize,

    /// Stop after this many results
    #[arg(long)]
    limit: Option<usize>,
}

impl CommonArgs {
    fn config(&self) -> squarefree_rs::Result<SearchConfig> {
        Ok(SearchConfig {
            sigma: self.sigma,
            structure: self.structure.parse::<Structure>()?,
            equivalence: self.equivalence.parse::<Equivalence>()?,
            min_root: self.length,
            ..Default::default()
        })
    }
}

fn run(cli: Cli) -> squarefree_rs::Result<()> {
    match cli.command {
        Command::Dfs { common, max_len } => {
            let config = common.config()?;
            info!(?config, "depth-first search");
            let mut search = config.depth_first_search()?;
            if let Some(max_len) = max_len {
                search = search.with_max_len(max_len);
            }
            for word in search.by_ref().take(common.limit.unwrap_or(usize::MAX)) {
                println!("{}", word);
            }
            info!(stats = ?search.stats(), "search finished");
        }
        Command::Morphisms {
            common,
            codelength,
            iterations,
            seed,
        } => {
            let config = SearchConfig {
                max_image_len: codelength,
                iterations,
                rng_seed: seed,
                ..common.config()?
            };
            info!(?config, "morphism search");
            let mut search = config.morphism_search()?;
            for code in search.by_ref().take(common.limit.unwrap_or(usize::MAX)) {
                println!("{}", code);
            }
            let stats = search.stats();
            info!(
                tested = stats.tested,
                accepted = stats.accepted,
                rate = format!("{:.4}%", stats.acceptance_rate()),
                "search finished"
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
