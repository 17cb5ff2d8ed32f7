use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use freestanding::{DEMOS, Demo, find, runner::Runner};
use log::{error, info};

#[derive(Parser, Debug)]
#[clap(name = "Freestanding Demo Harness")]
#[command(version, about)]
struct Args {
    /// How long to wait for a demo before killing it
    #[arg(short, long, default_value = "5s")]
    timeout: humantime::Duration,
    /// Run the existing binaries without rebuilding them first
    #[arg(long)]
    no_build: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single demo and check its output and exit status
    Run {
        /// Which demo to run
        demo: String,
        /// Output file for the results (CSV)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run every demo in the catalog with the same settings
    RunAll {
        /// Output file for the results (CSV)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn run_demos(runner: &Runner, demos: &[&Demo], output: Option<PathBuf>) -> anyhow::Result<()> {
    let mut writer = output.map(csv::Writer::from_path).transpose()?;

    let mut failed = 0;
    for demo in demos {
        let outcome = runner.run(demo.name)?;
        let datum = demo.check(&outcome);
        if datum.passed {
            info!(
                "{}: exit code {:?}, {} bytes on stdout",
                datum.demo, datum.exit_code, datum.stdout_len
            );
        } else {
            failed += 1;
            error!(
                "{}: expected exit code {} and {:?} on stdout, observed exit code {:?} and {:?}",
                demo.name,
                demo.expected_exit,
                String::from_utf8_lossy(demo.expected_stdout),
                datum.exit_code,
                String::from_utf8_lossy(&outcome.stdout),
            );
        }
        if let Some(ref mut writer) = writer {
            writer.serialize(&datum)?;
        }
    }
    if let Some(ref mut writer) = writer {
        writer.flush()?;
    }

    if failed > 0 {
        bail!("{failed} of {} demos misbehaved", demos.len());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = Runner::new(args.timeout.into());
    if !args.no_build {
        runner.build()?;
    }

    match args.command {
        Commands::Run { demo, output } => {
            let Some(demo) = find(&demo) else {
                let known: Vec<_> = DEMOS.iter().map(|d| d.name).collect();
                bail!("unknown demo {demo:?}, expected one of {known:?}");
            };
            run_demos(&runner, &[demo], output)
        }
        Commands::RunAll { output } => {
            let demos: Vec<_> = DEMOS.iter().collect();
            run_demos(&runner, &demos, output)
        }
    }
}
