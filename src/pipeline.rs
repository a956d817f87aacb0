//! Record triggers.
//!
//! Two entry points drive extraction for a catalog record:
//!
//! - [`NutritionFacts::on_record_saved`]: an explicit save always re-extracts
//!   and overwrites or deletes the stored result. It never looks at the
//!   cooldown.
//! - [`NutritionFacts::on_record_viewed`]: the lazy read-time path. It only
//!   extracts when the record has no result and no live cooldown, and it sets
//!   a cooldown when the attempt comes up empty so that repeated views of an
//!   unparsable record stay cheap.

use crate::clock::{Clock, SystemClock};
use crate::engine::{Cooldown, Decision, Extract, ParseState, PatternExtractor, SkipReason, decide, normalize};
use crate::render::{self, RenderOptions};
use crate::store::{CooldownStore, RecordId, ResultStore, SourceStore, StoreError};
use crate::{ParsedResult, default_table};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// How long an empty lazy attempt suppresses further lazy attempts.
    pub cooldown: TimeDelta,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions { cooldown: TimeDelta::hours(1) }
    }
}

/// What a trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The record is not a kind this pipeline handles. Nothing was touched.
    Ineligible,
    /// The lazy trigger found nothing to do.
    Skipped(SkipReason),
    /// Extraction matched `fields` nutrients and the result was stored.
    Stored { fields: usize },
    /// The save trigger found no text or no values and removed any result.
    Cleared,
    /// The lazy trigger found no text or no values.
    CooldownSet { until: DateTime<Utc> },
}

/// The extraction pipeline bound to a store, an extractor and a clock.
pub struct NutritionFacts<S, E = PatternExtractor<'static>, C = SystemClock> {
    store: S,
    extractor: E,
    clock: C,
    options: PipelineOptions,
}

impl<S> NutritionFacts<S>
where
    S: SourceStore + ResultStore + CooldownStore,
{
    /// Default pattern table, system clock, one-hour cooldown.
    pub fn new(store: S) -> Self {
        Self::with_parts(store, PatternExtractor::new(default_table()), SystemClock, PipelineOptions::default())
    }
}

impl<S, E, C> NutritionFacts<S, E, C>
where
    S: SourceStore + ResultStore + CooldownStore,
    E: Extract,
    C: Clock,
{
    pub fn with_parts(store: S, extractor: E, clock: C, options: PipelineOptions) -> Self {
        NutritionFacts { store, extractor, clock, options }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Explicit save: re-extract unconditionally.
    pub fn on_record_saved(&self, id: RecordId) -> Result<TriggerOutcome, StoreError> {
        if !self.store.is_eligible(id)? {
            return Ok(TriggerOutcome::Ineligible);
        }

        let result = match self.read_source(id)? {
            Some(text) => self.extract(&text),
            None => ParsedResult::new(),
        };

        if result.is_empty() {
            self.store.delete_result(id)?;
            debug!(record = %id, "save: no values, result removed");
            return Ok(TriggerOutcome::Cleared);
        }

        let fields = result.len();
        self.store.put_result(id, result)?;
        debug!(record = %id, fields, "save: result stored");
        Ok(TriggerOutcome::Stored { fields })
    }

    /// Lazy view: extract only if the record is unparsed.
    pub fn on_record_viewed(&self, id: RecordId) -> Result<TriggerOutcome, StoreError> {
        if !self.store.is_eligible(id)? {
            return Ok(TriggerOutcome::Ineligible);
        }

        let now = self.clock.now();
        if let Decision::Skip(reason) = decide(self.classify(id, now)?) {
            debug!(record = %id, ?reason, "view: skipped");
            return Ok(TriggerOutcome::Skipped(reason));
        }

        let result = match self.read_source(id)? {
            Some(text) => self.extract(&text),
            None => ParsedResult::new(),
        };

        if result.is_empty() {
            let until = now + self.options.cooldown;
            self.store.set_cooldown(id, until)?;
            debug!(record = %id, %until, "view: no values, cooling down");
            return Ok(TriggerOutcome::CooldownSet { until });
        }

        let fields = result.len();
        self.store.put_result(id, result)?;
        self.store.clear_cooldown(id)?;
        debug!(record = %id, fields, "view: result stored");
        Ok(TriggerOutcome::Stored { fields })
    }

    pub fn state(&self, id: RecordId) -> Result<ParseState, StoreError> {
        self.classify(id, self.clock.now())
    }

    /// Run the lazy trigger, then render whatever result the record has.
    ///
    /// Storage failures are logged and yield `None`; the page renders without
    /// a panel.
    pub fn render_panel(&self, id: RecordId, options: &RenderOptions) -> Option<String> {
        match self.on_record_viewed(id) {
            Ok(TriggerOutcome::Ineligible) => return None,
            Ok(_) => {}
            Err(err) => warn!(record = %id, error = %err, "lazy extraction failed"),
        }

        match self.store.stored_result(id) {
            Ok(Some(result)) => render::render_panel(&result, options),
            Ok(None) => None,
            Err(err) => {
                warn!(record = %id, error = %err, "could not load nutrition result");
                None
            }
        }
    }

    /// Page classes for an eligible record; `None` for anything else.
    pub fn body_classes(&self, id: RecordId) -> Option<[&'static str; 2]> {
        let has_result = match self.store.is_eligible(id) {
            Ok(true) => self.store.has_result(id),
            Ok(false) => return None,
            Err(err) => Err(err),
        };
        match has_result {
            Ok(true) => Some(["has-nutrition-facts", "nutrition-data-available"]),
            Ok(false) => Some(["no-nutrition-facts", "nutrition-data-unavailable"]),
            Err(err) => {
                warn!(record = %id, error = %err, "could not read nutrition state");
                None
            }
        }
    }

    fn classify(&self, id: RecordId, now: DateTime<Utc>) -> Result<ParseState, StoreError> {
        let has_result = self.store.has_result(id)?;
        let cooldown = if has_result { Cooldown::Absent } else { self.store.cooldown(id, now)? };
        Ok(ParseState::classify(has_result, cooldown))
    }

    /// Source text, unwrapped and with blank text treated as missing.
    fn read_source(&self, id: RecordId) -> Result<Option<String>, StoreError> {
        let text = self.store.source_text(id)?.and_then(|source| source.into_text());
        Ok(text.filter(|t| !t.trim().is_empty()))
    }

    fn extract(&self, raw: &str) -> ParsedResult {
        self.extractor.extract(&normalize(raw))
    }
}
