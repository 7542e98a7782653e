use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use treesnap::cli::Cli;
use treesnap::config::{Config, Output};
use treesnap::output;
use treesnap::tree::write_lines;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_cli(&cli);
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("treesnap: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    info!(root = %config.root.display(), "building tree");
    let lines = treesnap::snapshot(config)?;
    info!(lines = lines.len(), "rendered tree");

    match &config.output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            write_lines(&mut stdout, &lines)?;
            if !lines.is_empty() {
                writeln!(stdout)?;
            }
            stdout.flush()?;
        }
        Output::File(path) => {
            output::write_snapshot(path, &lines)?;
            info!(path = %path.display(), "wrote snapshot");
            println!("{}", output::summary(lines.len()));
            println!("Done");
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
