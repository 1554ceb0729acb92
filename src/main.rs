//! kmeanspp CLI
//!
//! Usage: kmeanspp [--seed N] K [MAX_ITER] EPS FILE_A FILE_B

use clap::Parser;
use kmeanspp::cli::execute;
use kmeanspp::config::GENERIC_FAILURE;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kmeanspp")]
#[command(about = "K-means clustering with k-means++ seeding", long_about = None)]
struct Cli {
    /// Seed for the k-means++ random stream
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// K [MAX_ITER] EPS FILE_A FILE_B
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    // Initialize logging; stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Panics are reported as the generic failure, cause kept out of stdout
    panic::set_hook(Box::new(|info| debug!(%info, "panic during run")));

    match panic::catch_unwind(AssertUnwindSafe(|| execute(&cli.args, cli.seed))) {
        Ok(Ok(report)) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            debug!(error = %err, "run failed");
            println!("{}", err.user_message());
            ExitCode::FAILURE
        }
        Err(_) => {
            println!("{GENERIC_FAILURE}");
            ExitCode::FAILURE
        }
    }
}
