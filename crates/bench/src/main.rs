use anyhow::{Context, Result, bail};
use bench::{
    ALL_PATTERNS, DEFAULT_ARRAY_LENGTH, Pattern, RNG_SEED, Report, TimingConfig,
    min_execution_time, sorts_correctly,
};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sorting::{
    DEFAULT_MIN_RUN, HybridConfig, SortAlgorithm, SortContext, all_algorithms, is_quadratic,
};

/// Times sorting algorithms on generated integer arrays and prints the
/// fastest round for each algorithm.
#[derive(Parser, Debug)]
#[command(name = "sortbench", version)]
struct Cli {
    /// Number of elements per input array.
    #[arg(long, default_value_t = DEFAULT_ARRAY_LENGTH)]
    len: usize,

    /// Number of timed rounds; the minimum is reported.
    #[arg(long, default_value_t = 3)]
    repeat: usize,

    /// Sorts per round.
    #[arg(long, default_value_t = 10)]
    number: usize,

    /// Run length of the hybrid sort's insertion pass.
    #[arg(long, default_value_t = DEFAULT_MIN_RUN)]
    min_run: usize,

    #[arg(long, default_value_t = RNG_SEED)]
    seed: u64,

    /// Algorithm to time, by name. Repeatable; defaults to every algorithm
    /// except the bubble sorts.
    #[arg(short, long = "algorithm")]
    algorithms: Vec<SortAlgorithm>,

    /// Input shape. Repeatable; defaults to all shapes.
    #[arg(short, long = "pattern", value_enum)]
    patterns: Vec<Pattern>,
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("SORTBENCH_LOG")
        .write_style("SORTBENCH_LOG_STYLE");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    log::debug!("sortbench options: {cli:?}");

    let config = HybridConfig::new(cli.min_run).context("invalid --min-run")?;
    let timing = TimingConfig {
        repeat: cli.repeat,
        number: cli.number,
    };

    let algorithms = if cli.algorithms.is_empty() {
        all_algorithms()
            .iter()
            .copied()
            .filter(|&algo| !is_quadratic(algo) || algo == SortAlgorithm::InsertionSort)
            .collect()
    } else {
        cli.algorithms
    };
    let patterns = if cli.patterns.is_empty() {
        ALL_PATTERNS.to_vec()
    } else {
        cli.patterns
    };

    let mut rng = StdRng::seed_from_u64(cli.seed);
    for pattern in patterns {
        let input = pattern.generate(cli.len, &mut rng);
        println!("{}", pattern.heading());

        for &algo in &algorithms {
            let mut ctx = SortContext::with_seed(config, cli.seed);
            if !sorts_correctly(algo, &input, &mut ctx) {
                bail!("{algo} did not reproduce the sorted {} input", pattern.label());
            }

            let min_time = min_execution_time(algo, &input, timing, &mut ctx);
            log::debug!("{algo} on {}: {min_time:?}", pattern.label());
            let report = Report {
                algorithm: algo,
                min_time,
            };
            println!("{report}");
        }
    }

    Ok(())
}
