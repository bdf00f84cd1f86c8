//! Real-time driver.
//!
//! Feeds a shared session from a `tokio` interval. Every access goes through
//! the session's mutex, and the lock is never held across an `.await`, so
//! other tasks (a UI, a command handler) can toggle or inspect the session
//! between ticks.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::adventure::{RandomSource, SeededRandom};
use crate::error::{CoreError, Result};
use crate::session::{Session, SessionSnapshot, SessionSummary, TickOutcome};

pub type SharedSession<R = SeededRandom> = Arc<Mutex<Session<R>>>;

pub fn shared<R>(session: Session<R>) -> SharedSession<R> {
    Arc::new(Mutex::new(session))
}

/// Lock the session and run `f` against it.
pub fn with_session<R, T>(session: &SharedSession<R>, f: impl FnOnce(&mut Session<R>) -> T) -> Result<T> {
    let mut guard = session
        .lock()
        .map_err(|e| CoreError::Poisoned(e.to_string()))?;
    Ok(f(&mut guard))
}

pub fn snapshot<R: RandomSource>(session: &SharedSession<R>) -> Result<SessionSnapshot> {
    with_session(session, |s| s.snapshot())
}

enum Step {
    Ticked(TickOutcome),
    Completed(SessionSummary),
    Reset,
}

/// Call [`Session::advance`] once per `tick_period` until the session
/// completes, handing every outcome to `observer`.
///
/// Periods in which the session is idle are no-ops, so pausing the session
/// from another task simply stalls the countdown. A session that is already
/// completed returns its summary straight away. If another task resets the
/// session, the run is abandoned and `Ok(None)` is returned.
pub async fn run_until_complete<R, F>(
    session: SharedSession<R>,
    tick_period: Duration,
    mut observer: F,
) -> Result<Option<SessionSummary>>
where
    R: RandomSource,
    F: FnMut(&TickOutcome),
{
    let (epoch, shown) = with_session(&session, |s| (s.reset_count(), s.summary().copied()))?;
    if let Some(summary) = shown {
        debug!(?summary, "session already completed");
        return Ok(Some(summary));
    }

    let mut ticker = interval(tick_period.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately; a second has not elapsed yet.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let step = with_session(&session, |s| {
            if s.reset_count() != epoch {
                Step::Reset
            } else if let Some(summary) = s.summary() {
                Step::Completed(*summary)
            } else {
                Step::Ticked(s.advance())
            }
        })?;
        match step {
            Step::Ticked(outcome) => {
                observer(&outcome);
                if let Some(summary) = outcome.completed {
                    debug!(?summary, "driver finished");
                    return Ok(Some(summary));
                }
            }
            Step::Completed(summary) => return Ok(Some(summary)),
            Step::Reset => {
                debug!("session reset under the driver");
                return Ok(None);
            }
        }
    }
}
