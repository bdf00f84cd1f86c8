use std::time::Duration;

use clap::Args;
use focusquest_core::driver::{self, with_session};
use focusquest_core::Config;

use super::{build_session, event_line, print_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Session length in minutes (1-120)
    #[arg(long)]
    minutes: Option<u32>,
    /// RNG seed for a reproducible adventure
    #[arg(long)]
    seed: Option<u64>,
    /// Milliseconds per clock tick
    #[arg(long)]
    tick_ms: Option<u64>,
    /// Print events and summary as JSON lines
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let session = build_session(&config, args.minutes, args.seed)?;
    let period = Duration::from_millis(args.tick_ms.unwrap_or(config.driver.tick_millis));

    let shared = driver::shared(session);
    with_session(&shared, |s| s.start())?;
    if !args.json {
        let remaining = with_session(&shared, |s| s.remaining_display())?;
        println!("Focus session started: {remaining}");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let observed = shared.clone();
    let json = args.json;
    let summary = runtime.block_on(driver::run_until_complete(shared.clone(), period, |outcome| {
        let Some(event) = &outcome.generated else {
            return;
        };
        if json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::warn!(%err, "failed to encode event"),
            }
        } else {
            let remaining = with_session(&observed, |s| s.remaining_display()).unwrap_or_default();
            println!("{}", event_line(&remaining, event));
        }
    }))?;
    let Some(summary) = summary else {
        return Err("session was reset before it completed".into());
    };

    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}
