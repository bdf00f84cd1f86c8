mod clock;

pub use clock::{format_mm_ss, Clock, TickResult, DEFAULT_DURATION_SECS};
