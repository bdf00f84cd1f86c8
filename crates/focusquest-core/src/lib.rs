//! # FocusQuest Core Library
//!
//! This library provides the core logic for FocusQuest, a focus timer that
//! turns a countdown into a small adventure. While the timer runs the player
//! earns a focus point per second, and every few seconds a random battle,
//! treasure find or rest changes their health, experience and gold.
//!
//! ## Architecture
//!
//! - **Clock**: A tick-driven countdown; the caller supplies the ticks
//! - **Adventure**: Weighted random events drawn through a swappable
//!   [`RandomSource`]
//! - **Session**: The state machine tying clock, player and log together
//! - **Driver**: A `tokio` loop that ticks a shared session in real time
//!
//! Presentation is left to callers. The bundled CLI is one such caller.
//!
//! ## Key Components
//!
//! - [`Session`]: Session state machine
//! - [`EventLog`]: Newest-first adventure log
//! - [`Config`]: Application configuration management

pub mod adventure;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod log;
pub mod player;
pub mod session;
pub mod timer;

pub use adventure::{Encounter, Enemy, EventGenerator, RandomSource, ScriptedRandom, SeededRandom, TreasureItem};
pub use config::{Config, DriverConfig, SessionConfig};
pub use driver::{run_until_complete, SharedSession};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::{Event, EventKind};
pub use log::EventLog;
pub use player::{PlayerState, MAX_HEALTH};
pub use session::{
    Session, SessionPhase, SessionSnapshot, SessionSummary, TickOutcome, MAX_DURATION_MINUTES,
    MIN_DURATION_MINUTES,
};
pub use timer::{format_mm_ss, Clock, TickResult};
