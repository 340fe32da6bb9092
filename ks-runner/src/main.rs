use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgMatches, Command};
use ks_runner::{load_settings, solve, SolverSettings};
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const USAGE_HINT: &str = "This test requires an input file.  Please select one from the data directory. (i.e. ks-runner ./data/ks_4_0)";

fn cli() -> Command {
    Command::new("ks-runner")
        .about("Runs an external knapsack solver on a problem input file")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            arg!([INPUT] "Path to the problem input file, or '-' for stdin")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--settings <SETTINGS> "Settings json string or path to json file")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--solver <PATH> "Path to the solver executable")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"work-dir" <DIR> "Directory where temporary input files are written")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                ),
        )
        .init();

    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input_path = match matches.get_one::<String>("INPUT") {
        Some(path) => path.trim(),
        None => {
            println!("{}", USAGE_HINT);
            return Ok(());
        }
    };

    let mut settings = match matches.get_one::<String>("settings") {
        Some(settings) => load_settings(settings)?,
        None => SolverSettings::default(),
    };
    if let Some(solver) = matches.get_one::<PathBuf>("solver") {
        settings.solver = solver.clone();
    }
    if let Some(work_dir) = matches.get_one::<PathBuf>("work-dir") {
        settings.work_dir = work_dir.clone();
    }

    let input = load_input(input_path)?;
    let output = solve(&settings, &input)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn load_input(input: &str) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(anyhow!("Input path is empty"));
    }
    if input == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read input from stdin")?;
        return Ok(buffer);
    }
    fs::read(input).with_context(|| format!("Failed to read input file: {}", input))
}
