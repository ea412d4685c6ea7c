mod error;

use std::io::Write;
use std::process::ExitCode;

use pwgen_lib::password::PasswordLength;
use pwgen_lib::random::{entropy_rng, generate, seeded_rng};

use clap::Parser;
use log::debug;
use rand::RngCore;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(version, about = "Print random lowercase passwords")]
struct Args {
    /// Password length
    #[arg(short, long, value_name = "length", default_value_t = 10, allow_negative_numbers = true)]
    length: i64,

    /// Number of passwords to print, one per line
    #[arg(short, long, value_name = "count", default_value_t = 1)]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long, value_name = "seed")]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn write_passwords<R: RngCore + ?Sized, W: Write>(
    count: usize,
    length: PasswordLength,
    rng: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    debug!("printing {} passwords of length {}", count, length);

    for _ in 0..count {
        let password = generate(length, rng)?;
        writeln!(out, "{}", password)?;
    }
    out.flush()?;

    Ok(())
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let length = PasswordLength::try_from(args.length)?;

    match args.seed {
        Some(seed) => {
            debug!("using seed {}", seed);
            write_passwords(args.count, length, &mut seeded_rng(seed), out)
        }
        None => write_passwords(args.count, length, &mut entropy_rng()?, out),
    }
}

// Returns the process exit status
fn execute<W: Write, E: Write>(args: &Args, out: &mut W, err: &mut E) -> u8 {
    match run(args, out) {
        Ok(()) => 0,
        Err(error) => {
            debug!("failed to generate password: {:?}", error);
            let _ = writeln!(err, "error: {}", error);
            1
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let status = execute(&args, &mut std::io::stdout().lock(), &mut std::io::stderr());
    ExitCode::from(status)
}
