use anyhow::Context;
use clap::{ArgAction, Parser};
use project_euler::{MultiplesReport, PROBLEMS, run_problem};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "project-euler")]
#[command(about = "Run Project Euler solutions")]
struct Cli {
    /// Run a specific problem by number
    #[arg(short, long)]
    problem: Option<u32>,

    /// Run all available problems
    #[arg(short, long)]
    all: bool,

    /// Sum the multiples of two steps below --bound
    #[arg(short, long, num_args = 2, value_names = ["A", "B"], action = ArgAction::Set)]
    steps: Option<Vec<u64>>,

    /// Exclusive upper bound used with --steps
    #[arg(short, long, default_value_t = 1000, requires = "steps")]
    bound: u64,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A single problem gets debug output; everything else stays quiet.
    init_tracing(if cli.problem.is_some() { "debug" } else { "info" });

    if cli.all {
        for &id in PROBLEMS {
            let answer = run_problem(id).with_context(|| format!("problem {} failed", id))?;
            println!("The answer to Problem {} is: {}", id, answer);
        }
    } else if let Some(id) = cli.problem {
        let answer = run_problem(id).with_context(|| format!("problem {} failed", id))?;
        println!("The answer to Problem {} is: {}", id, answer);
    } else if let Some(&[step_a, step_b]) = cli.steps.as_deref() {
        info!(step_a, step_b, bound = cli.bound, "summing multiples");
        let report = MultiplesReport::compute(step_a, step_b, cli.bound)
            .context("cannot sum multiples")?;
        println!("{}", report);
    } else {
        eprintln!("Usage: project-euler --problem <N> | --all | --steps <A> <B> [--bound <U>]");
        eprintln!("Available problems: {:?}", PROBLEMS);
    }
    Ok(())
}
