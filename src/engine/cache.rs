//! Parse-state cache.
//!
//! Per record the lazy view trigger sees one of three states:
//!
//! ```text
//!             view, text yields values
//! Unparsed ─────────────────────────────▶ Parsed
//!    │  ▲                                   │
//!    │  │ cooldown expires                  │ save, text now empty
//!    │  │                                   │ or yields nothing
//!    ▼  │                                   ▼
//! CooldownActive ◀── view, empty text ── Unparsed
//!                    or no values
//! ```
//!
//! Only the lazy trigger consults this. An explicit save re-extracts no matter
//! what state the record is in.

use chrono::{DateTime, Utc};

/// Negative-result marker as reported by a cooldown store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cooldown {
    Active { until: DateTime<Utc> },
    /// A marker exists but its expiry has passed. Treated like `Absent`.
    Expired,
    Absent,
}

impl Cooldown {
    pub fn is_active(&self) -> bool {
        matches!(self, Cooldown::Active { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Unparsed,
    Parsed,
    CooldownActive { until: DateTime<Utc> },
}

impl ParseState {
    /// A stored result takes precedence over any cooldown still lingering.
    pub fn classify(has_result: bool, cooldown: Cooldown) -> Self {
        match (has_result, cooldown) {
            (true, _) => ParseState::Parsed,
            (false, Cooldown::Active { until }) => ParseState::CooldownActive { until },
            (false, Cooldown::Expired | Cooldown::Absent) => ParseState::Unparsed,
        }
    }
}

/// What the lazy trigger should do for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Extract,
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyParsed,
    CoolingDown { until: DateTime<Utc> },
}

pub fn decide(state: ParseState) -> Decision {
    match state {
        ParseState::Unparsed => Decision::Extract,
        ParseState::Parsed => Decision::Skip(SkipReason::AlreadyParsed),
        ParseState::CooldownActive { until } => Decision::Skip(SkipReason::CoolingDown { until }),
    }
}
