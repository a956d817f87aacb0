use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use nutrilabel::{
    Extract, ManualClock, MemoryStore, Nutrient, NutritionFacts, ParseState, ParsedResult, PatternExtractor,
    PipelineOptions, RecordId, RenderOptions, ResultStore, SkipReason, SourceText, TriggerOutcome, default_table,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default extractor that counts how often it runs. Clones share the count.
#[derive(Clone)]
struct Probe {
    inner: PatternExtractor<'static>,
    calls: Arc<AtomicUsize>,
}

impl Probe {
    fn new() -> Self {
        Probe { inner: PatternExtractor::new(default_table()), calls: Arc::new(AtomicUsize::new(0)) }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Extract for Probe {
    fn extract(&self, normalized: &str) -> ParsedResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.extract(normalized)
    }
}

struct Harness {
    store: Arc<MemoryStore>,
    clock: ManualClock,
    probe: Probe,
    facts: NutritionFacts<Arc<MemoryStore>, Probe, ManualClock>,
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
}

fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let clock = ManualClock::new(start());
    let probe = Probe::new();
    let facts =
        NutritionFacts::with_parts(store.clone(), probe.clone(), clock.clone(), PipelineOptions::default());
    Harness { store, clock, probe, facts }
}

const PRODUCT: RecordId = RecordId(42);

#[test]
fn empty_source_sets_cooldown_on_view() {
    let h = harness();
    h.store.insert_product(PRODUCT, Some("".into())).unwrap();

    let outcome = h.facts.on_record_viewed(PRODUCT).unwrap();
    let until = start() + TimeDelta::hours(1);
    assert_eq!(outcome, TriggerOutcome::CooldownSet { until });
    assert_eq!(h.store.cooldown_until(PRODUCT).unwrap(), Some(until));
    assert_eq!(h.facts.state(PRODUCT).unwrap(), ParseState::CooldownActive { until });
    assert!(h.store.stored_result(PRODUCT).unwrap().is_none());
}

#[test]
fn second_view_during_cooldown_does_not_extract() {
    let h = harness();
    h.store.insert_product(PRODUCT, Some("Ingredients: oats, honey".into())).unwrap();

    assert!(matches!(h.facts.on_record_viewed(PRODUCT).unwrap(), TriggerOutcome::CooldownSet { .. }));
    assert_eq!(h.probe.calls(), 1);

    h.clock.advance(TimeDelta::minutes(59));
    let outcome = h.facts.on_record_viewed(PRODUCT).unwrap();
    assert_eq!(outcome, TriggerOutcome::Skipped(SkipReason::CoolingDown { until: start() + TimeDelta::hours(1) }));
    assert_eq!(h.probe.calls(), 1);
}

#[test]
fn view_after_cooldown_expires_extracts_again() {
    let h = harness();
    h.store.insert_product(PRODUCT, Some("nothing useful".into())).unwrap();
    h.facts.on_record_viewed(PRODUCT).unwrap();

    // the catalog sync fills in the label while the cooldown is live
    h.store.set_source(PRODUCT, Some("Calories 240".into())).unwrap();
    h.clock.advance(TimeDelta::hours(1));
    assert_eq!(h.facts.state(PRODUCT).unwrap(), ParseState::Unparsed);

    assert_eq!(h.facts.on_record_viewed(PRODUCT).unwrap(), TriggerOutcome::Stored { fields: 1 });
    assert_eq!(h.probe.calls(), 2);
    assert_eq!(h.store.cooldown_until(PRODUCT).unwrap(), None);
    assert_eq!(h.store.stored_result(PRODUCT).unwrap().unwrap().amount(Nutrient::Calories), Some(240.0));
}

#[test]
fn save_overrides_live_cooldown() {
    let h = harness();
    h.store.insert_product(PRODUCT, None).unwrap();
    h.facts.on_record_viewed(PRODUCT).unwrap();

    h.store.set_source(PRODUCT, Some("Total Fat 5g<br>Protein 3g".into())).unwrap();
    assert_eq!(h.facts.on_record_saved(PRODUCT).unwrap(), TriggerOutcome::Stored { fields: 2 });
    assert_eq!(h.facts.state(PRODUCT).unwrap(), ParseState::Parsed);

    let result = h.store.stored_result(PRODUCT).unwrap().unwrap();
    assert_eq!(result.amount(Nutrient::TotalFat), Some(5.0));
    assert_eq!(result.amount(Nutrient::Protein), Some(3.0));
}

#[test]
fn save_with_emptied_source_deletes_result() {
    let h = harness();
    h.store.insert_product(PRODUCT, Some("Calories 120".into())).unwrap();
    assert!(matches!(h.facts.on_record_saved(PRODUCT).unwrap(), TriggerOutcome::Stored { .. }));

    h.store.set_source(PRODUCT, Some("   ".into())).unwrap();
    assert_eq!(h.facts.on_record_saved(PRODUCT).unwrap(), TriggerOutcome::Cleared);
    assert!(h.store.stored_result(PRODUCT).unwrap().is_none());

    // and again when the text is present but yields nothing
    h.store.set_source(PRODUCT, Some("Calories 120".into())).unwrap();
    h.facts.on_record_saved(PRODUCT).unwrap();
    h.store.set_source(PRODUCT, Some("see packaging".into())).unwrap();
    assert_eq!(h.facts.on_record_saved(PRODUCT).unwrap(), TriggerOutcome::Cleared);
    assert!(h.store.stored_result(PRODUCT).unwrap().is_none());
    assert_eq!(h.facts.state(PRODUCT).unwrap(), ParseState::Unparsed);
}

#[test]
fn eu_salt_is_stored_as_sodium() {
    let h = harness();
    h.store.insert_product(PRODUCT, Some("Salt 2g".into())).unwrap();
    h.facts.on_record_saved(PRODUCT).unwrap();
    assert_eq!(h.store.stored_result(PRODUCT).unwrap().unwrap().amount(Nutrient::Sodium), Some(800.0));
}

#[test]
fn collection_wrapped_source_is_unwrapped() {
    let h = harness();
    let wrapped = SourceText::List(vec!["Calories 240<br/>Sodium 160mg".to_string()]);
    h.store.insert_product(PRODUCT, Some(wrapped)).unwrap();

    assert_eq!(h.facts.on_record_viewed(PRODUCT).unwrap(), TriggerOutcome::Stored { fields: 2 });
    let result = h.store.stored_result(PRODUCT).unwrap().unwrap();
    assert_eq!(result.amount(Nutrient::Calories), Some(240.0));
    assert_eq!(result.amount(Nutrient::Sodium), Some(160.0));
}

#[test]
fn ineligible_records_are_left_alone() {
    let h = harness();
    let page = RecordId(7);
    h.store.insert_record(page, false, Some("Calories 240".into())).unwrap();

    assert_eq!(h.facts.on_record_saved(page).unwrap(), TriggerOutcome::Ineligible);
    assert_eq!(h.facts.on_record_viewed(page).unwrap(), TriggerOutcome::Ineligible);
    assert_eq!(h.facts.render_panel(page, &RenderOptions::default()), None);
    assert_eq!(h.facts.body_classes(page), None);
    assert_eq!(h.probe.calls(), 0);
    assert!(h.store.stored_result(page).unwrap().is_none());
    assert_eq!(h.store.cooldown_until(page).unwrap(), None);
}

#[test]
fn render_panel_parses_lazily_once() {
    let h = harness();
    h.store.insert_product(PRODUCT, Some("Serving Size 1 cup Calories 120 Total Fat 5g Sodium 200mg".into())).unwrap();

    let html = h.facts.render_panel(PRODUCT, &RenderOptions::default()).unwrap();
    assert!(html.contains(r#"itemprop="servingSize">1 cup</span>"#));
    assert!(html.contains(r#"itemprop="sodiumContent">200mg</span>"#));

    let again = h.facts.render_panel(PRODUCT, &RenderOptions::default()).unwrap();
    assert_eq!(html, again);
    assert_eq!(h.probe.calls(), 1);
    assert_eq!(h.facts.body_classes(PRODUCT), Some(["has-nutrition-facts", "nutrition-data-available"]));
}

#[test]
fn render_panel_without_data_is_none() {
    let h = harness();
    h.store.insert_product(PRODUCT, Some("Made with love".into())).unwrap();
    assert_eq!(h.facts.render_panel(PRODUCT, &RenderOptions::default()), None);
    assert_eq!(h.facts.body_classes(PRODUCT), Some(["no-nutrition-facts", "nutrition-data-unavailable"]));
}

#[test]
fn default_pipeline_works_end_to_end() {
    let store = MemoryStore::new();
    store.insert_product(PRODUCT, Some("Calories 90<br>Protein 3g".into())).unwrap();
    let facts = NutritionFacts::new(&store);

    assert_eq!(facts.on_record_viewed(PRODUCT).unwrap(), TriggerOutcome::Stored { fields: 2 });
    assert_eq!(facts.on_record_viewed(PRODUCT).unwrap(), TriggerOutcome::Skipped(SkipReason::AlreadyParsed));
}
