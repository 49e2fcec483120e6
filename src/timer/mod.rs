//! Timer data model and countdown core.
//!
//! This module owns the persisted `TimerRecord` entity, the closed
//! `ThemeKind` enumeration, the pure time-remaining computation, and the
//! repeating-tick abstraction that drives live views.

pub mod record;
pub mod remaining;
pub mod ticker;

pub use record::{ThemeKind, TimerRecord, DEFAULT_THEME_COLOR};
pub use remaining::{
    now_local_ms, parse_target, remaining, remaining_from_str, RawRemaining, RemainingTime,
};
pub use ticker::Ticker;
