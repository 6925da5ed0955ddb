use std::process::ExitCode;

use bigfact::{run, ProductSettings, ReportSettings};
use clap::Parser;
use tracing::{error, info, Level};

#[derive(Parser, Debug)]
#[command(name = "bigfact")]
#[command(about = "Digit count of a! and the matching leading digits of b!")]
#[command(version)]
struct Args {
    /// Magnitude whose factorial's digit count is estimated (any size)
    #[arg(default_value_t = 3_000_000_000_000, allow_negative_numbers = true)]
    a: i64,

    /// Magnitude whose factorial is computed exactly
    #[arg(default_value_t = 10_000_000, allow_negative_numbers = true)]
    b: i64,

    /// Worker threads for the product (default: twice the CPU count)
    #[arg(long)]
    threads: Option<usize>,

    /// Ranges of at most this many integers are multiplied without forking
    #[arg(long, default_value_t = ProductSettings::default().parallel_threshold)]
    parallel_threshold: u64,

    /// Check the estimated digit count of b! against the exact value
    #[arg(long)]
    verify: bool,

    /// Log stage progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let threads = args
        .threads
        .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get() * 2));
    let settings = ReportSettings {
        a: args.a,
        b: args.b,
        verify: args.verify,
        product: ProductSettings {
            parallel_threshold: args.parallel_threshold,
            num_threads: threads,
        },
    };
    info!(?settings, "starting");

    match run(&settings) {
        Ok(report) => {
            println!("{report}");
            info!(timings = ?report.timings, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
