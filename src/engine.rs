//! Extraction engine and parse-state cache.
//!
//! ## How the parts work together
//!
//! ```text
//! rules::get()  ──┐
//!                 │  PatternTable::new              (table.rs)
//!                 └───────────────┬──────────────
//!                                 │
//! raw text ── normalize ──────────┤                 (normalize.rs)
//!                                 │
//!          TriggerInfo::scan ─────┼─ gate fields (phrases) and
//!          (trigger.rs)           │  matchers (buckets)
//!                                 v
//!                   PatternExtractor::extract       (extract.rs)
//!                     - per field, matchers in order
//!                     - first capture wins
//!                     - matcher-specific conversion
//!                                 │
//!                                 v
//!                           ParsedResult
//! ```
//!
//! The lazy view trigger consults [`cache::decide`] before any of this runs;
//! see `cache.rs` for the state machine.
//!
//! ## Responsibilities by module
//!
//! - `table.rs`: the immutable, indexed pattern table and the `BucketMask`
//!   gating features.
//! - `normalize.rs`: markup stripping and whitespace collapsing.
//! - `trigger.rs`: one cheap scan of the normalized text that decides which
//!   fields and matchers are worth running.
//! - `extract.rs`: the `Extract` seam and the table-driven implementation.
//! - `metrics.rs`: opt-in timing and per-field traces.
//! - `cache.rs`: parse-state classification and the lazy-trigger decision.
//!
//! ## Debugging
//!
//! Run with `NUTRILABEL_LOG=nutrilabel=trace` to see gating and matcher traces.

#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/table.rs"]
mod table;
#[path = "engine/trigger.rs"]
mod trigger;

pub use cache::{Cooldown, Decision, ParseState, SkipReason, decide};
pub use extract::{Extract, PatternExtractor};
pub use metrics::{ExtractMetrics, FieldTrace};
pub use normalize::normalize;
pub use table::{BucketMask, PatternTable};
