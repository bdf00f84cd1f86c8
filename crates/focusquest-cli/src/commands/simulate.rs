use clap::Args;
use focusquest_core::Config;
use serde::Serialize;

use super::{build_session, event_line, print_summary};

#[derive(Args)]
pub struct SimulateArgs {
    /// Session length in minutes (1-120)
    #[arg(long)]
    minutes: Option<u32>,
    /// RNG seed for a reproducible adventure
    #[arg(long)]
    seed: Option<u64>,
    /// Print the summary and log as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SimulationReport<'a> {
    summary: focusquest_core::SessionSummary,
    log: &'a focusquest_core::EventLog,
}

pub fn run(args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut session = build_session(&config, args.minutes, args.seed)?;
    session.start();

    let summary = loop {
        if let Some(summary) = session.advance().completed {
            break summary;
        }
    };

    if args.json {
        let report = SimulationReport {
            summary,
            log: session.log(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&summary);
        println!();
        println!("Adventure Log");
        for event in session.log() {
            println!("  {}", event_line("--:--", event));
        }
    }
    Ok(())
}
