pub mod completions;
pub mod config;
pub mod run;
pub mod simulate;

use focusquest_core::{Config, Event, Session, SessionSummary};

/// Build a session from the stored config plus command-line overrides.
pub fn build_session(
    config: &Config,
    minutes: Option<u32>,
    seed: Option<u64>,
) -> Result<Session, Box<dyn std::error::Error>> {
    let mut session_config = config.session.clone();
    if seed.is_some() {
        session_config.seed = seed;
    }
    let mut session = Session::new(session_config);
    if let Some(minutes) = minutes {
        session.set_duration(minutes)?;
    }
    Ok(session)
}

pub fn event_line(remaining: &str, event: &Event) -> String {
    format!("[{remaining}] {} {}: {}", event.icon, event.title, event.description)
}

pub fn print_summary(summary: &SessionSummary) {
    println!("Adventure Summary");
    println!("  🧠 Focus Points: {}", summary.focus_points);
    println!("  📊 Total EXP: {}", summary.experience);
    println!("  💰 Total Gold: {}", summary.gold);
    println!("  ❤️ Final Health: {}", summary.final_health);
}
