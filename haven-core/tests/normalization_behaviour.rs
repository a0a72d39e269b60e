#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for value normalization and town profiling.

use std::cell::RefCell;

use haven_core::{
    CanonicalValue, Criterion, ProfileError, RawSections, RawTown, Taxonomy, TownProfile,
    UnmappedValueError,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    taxonomy: RefCell<Option<Taxonomy>>,
    normalized: RefCell<Option<Result<CanonicalValue, UnmappedValueError>>>,
    town: RefCell<Option<Result<TownProfile, ProfileError>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        taxonomy: RefCell::new(None),
        normalized: RefCell::new(None),
        town: RefCell::new(None),
    }
}

#[given("the default taxonomy")]
fn default_taxonomy(context: &TestContext) {
    *context.taxonomy.borrow_mut() = Some(Taxonomy::default());
}

#[when("I normalize the sunshine descriptor \"Often Cloudy\"")]
fn normalize_often_cloudy(context: &TestContext) {
    normalize(context, Criterion::Sunshine, "Often Cloudy");
}

#[when("I normalize the canonical sunshine value less_sunny")]
fn normalize_less_sunny(context: &TestContext) {
    normalize(context, Criterion::Sunshine, "less_sunny");
}

#[when("I normalize the sunshine descriptor \"purple\"")]
fn normalize_purple(context: &TestContext) {
    normalize(context, Criterion::Sunshine, "purple");
}

#[when("I normalize a healthcare score of 7.5")]
fn normalize_healthcare_score(context: &TestContext) {
    let result = with_taxonomy(context, |taxonomy| {
        taxonomy.normalize_number(Criterion::Healthcare, 7.5)
    });
    *context.normalized.borrow_mut() = Some(result);
}

#[when("I profile a town whose sunshine is \"bioluminescent\"")]
fn profile_unmapped_town(context: &TestContext) {
    let raw = RawTown::new("atlantis", "Atlantis")
        .with(Criterion::Summer, "warm")
        .with(Criterion::Sunshine, "bioluminescent");
    let result = with_taxonomy(context, |taxonomy| TownProfile::from_raw(&raw, taxonomy));
    *context.town.borrow_mut() = Some(result);
}

#[when("I profile the regression town without humidity")]
fn profile_town_without_humidity(context: &TestContext) {
    let mut raw = RawTown::new("regression-town", "Regression Town")
        .with(Criterion::Summer, "mild")
        .with(Criterion::Humidity, "balanced")
        .with(Criterion::Sunshine, "often_cloudy");
    strip(&mut raw.attributes, Criterion::Humidity);
    let result = with_taxonomy(context, |taxonomy| TownProfile::from_raw(&raw, taxonomy));
    *context.town.borrow_mut() = Some(result);
}

#[then("the canonical sunshine value is less_sunny")]
fn assert_less_sunny(context: &TestContext) {
    assert_normalized(context, "less_sunny");
}

#[then("the canonical healthcare value is good")]
fn assert_good(context: &TestContext) {
    assert_normalized(context, "good");
}

#[then("normalization fails with an unmapped value")]
fn assert_unmapped(context: &TestContext) {
    let normalized = context.normalized.borrow();
    let err = normalized
        .as_ref()
        .expect("normalization must have run")
        .as_ref()
        .expect_err("value should be unmapped");
    assert_eq!(err.criterion, Criterion::Sunshine);
}

#[then("profiling fails with reason unmapped-value")]
fn assert_profile_unmapped(context: &TestContext) {
    let town = context.town.borrow();
    let err = town
        .as_ref()
        .expect("profiling must have run")
        .as_ref()
        .expect_err("town should be rejected");
    assert_eq!(err.reason_code(), "unmapped-value");
}

#[then("the town has no humidity attribute")]
fn assert_no_humidity(context: &TestContext) {
    let town = context.town.borrow();
    let profile = town
        .as_ref()
        .expect("profiling must have run")
        .as_ref()
        .expect("town should be profiled");
    assert!(profile.attribute(Criterion::Humidity).is_none());
    assert!(profile.attribute(Criterion::Summer).is_some());
}

fn with_taxonomy<T>(context: &TestContext, action: impl FnOnce(&Taxonomy) -> T) -> T {
    let taxonomy = context.taxonomy.borrow();
    action(taxonomy.as_ref().expect("taxonomy must be initialised"))
}

fn normalize(context: &TestContext, criterion: Criterion, raw: &str) {
    let result = with_taxonomy(context, |taxonomy| taxonomy.normalize(criterion, raw));
    *context.normalized.borrow_mut() = Some(result);
}

fn assert_normalized(context: &TestContext, expected: &str) {
    let normalized = context.normalized.borrow();
    let value = normalized
        .as_ref()
        .expect("normalization must have run")
        .as_ref()
        .expect("value should be mapped");
    assert_eq!(value.as_str(), expected);
}

fn strip(sections: &mut RawSections, criterion: Criterion) {
    if let Some(section) = sections.get_mut(&criterion.category()) {
        section.remove(&criterion);
    }
}

#[scenario(path = "tests/features/normalization.feature", index = 0)]
fn finer_descriptor_collapses(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/normalization.feature", index = 1)]
fn canonical_values_are_idempotent(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/normalization.feature", index = 2)]
fn unknown_descriptor_is_rejected(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/normalization.feature", index = 3)]
fn healthcare_score_is_bucketed(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/normalization.feature", index = 4)]
fn unmapped_town_is_rejected(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/normalization.feature", index = 5)]
fn missing_attribute_is_tolerated(context: TestContext) {
    let _ = context;
}
