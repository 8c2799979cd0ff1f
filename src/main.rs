mod cli;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::Args;
use log::warn;
use std::io::Write;
use std::process::ExitCode;
use tafs::{prepare_stations, Report, StationId, Tafs, STATION_RULES};

fn main() -> ExitCode {
    // RUST_LOG overrides the default level, e.g. RUST_LOG=tafs=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(message) = args.excess_warning() {
        warn!("{}", message);
    }
    let stations = match prepare_stations(&args.stations, args.ignore_malformed) {
        Ok(stations) => stations,
        Err(e) => {
            eprintln!("{}  {}", e, STATION_RULES);
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::from(2);
        }
    };

    match run(&args, &stations) {
        Ok(report) => {
            for source in &report.degraded {
                eprintln!("Warning: no {} data could be retrieved", source);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, stations: &[StationId]) -> anyhow::Result<Report> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    let client = Tafs::with_base_url(args.base_url.clone());

    let report = runtime
        .block_on(
            client
                .report()
                .stations(stations)
                .options(args.report_options())
                .call(),
        )
        .context("Failed to build report")?;

    let mut out = std::io::stdout().lock();
    write!(out, "{}", report).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;
    Ok(report)
}
