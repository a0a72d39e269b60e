#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for catalog ranking.

use std::cell::RefCell;

use haven_core::RawTown;
use haven_core::test_support::{full_preferences, sample_catalog, unmapped_town};
use haven_scorer::{MatchEngine, Ranking};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    engine: RefCell<Option<MatchEngine>>,
    towns: RefCell<Vec<RawTown>>,
    ranking: RefCell<Option<Ranking>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        engine: RefCell::new(None),
        towns: RefCell::new(Vec::new()),
        ranking: RefCell::new(None),
    }
}

#[given("the default match engine")]
fn default_engine(context: &TestContext) {
    *context.engine.borrow_mut() = Some(MatchEngine::with_defaults());
}

#[given("the sample catalog")]
fn catalog(context: &TestContext) {
    context.towns.borrow_mut().extend(sample_catalog());
}

#[given("a town whose sunshine has no mapping")]
fn unmapped(context: &TestContext) {
    context.towns.borrow_mut().push(unmapped_town());
}

#[when("I rank the catalog against the full preferences")]
fn rank_all(context: &TestContext) {
    rank(context, None);
}

#[when("I rank the top 2 towns against the full preferences")]
fn rank_top_two(context: &TestContext) {
    rank(context, Some(2));
}

#[then("alicante is ranked first")]
fn assert_alicante_first(context: &TestContext) {
    let ranking = context.ranking.borrow();
    let first = ranking
        .as_ref()
        .expect("ranking must have run")
        .ranked
        .first()
        .map(|result| result.town_id.clone());
    assert_eq!(first.as_deref(), Some("alicante"));
}

#[then("every catalog town is ranked")]
fn assert_catalog_ranked(context: &TestContext) {
    let ranking = context.ranking.borrow();
    let ranked = &ranking.as_ref().expect("ranking must have run").ranked;
    assert_eq!(ranked.len(), sample_catalog().len());
}

#[then("atlantis is excluded with reason unmapped-value")]
fn assert_atlantis_excluded(context: &TestContext) {
    let ranking = context.ranking.borrow();
    let excluded = &ranking.as_ref().expect("ranking must have run").excluded;
    let exclusion = excluded
        .iter()
        .find(|exclusion| exclusion.town_id == "atlantis")
        .expect("atlantis is excluded");
    assert_eq!(exclusion.reason, "unmapped-value");
}

#[then("2 towns are ranked")]
fn assert_two_ranked(context: &TestContext) {
    let ranking = context.ranking.borrow();
    let ranked = &ranking.as_ref().expect("ranking must have run").ranked;
    assert_eq!(ranked.len(), 2);
}

fn rank(context: &TestContext, limit: Option<usize>) {
    let engine = context.engine.borrow();
    let towns = context.towns.borrow();
    let ranking = engine
        .as_ref()
        .expect("engine must be initialised")
        .rank(&full_preferences(), &towns, limit)
        .expect("valid preferences");
    *context.ranking.borrow_mut() = Some(ranking);
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn best_town_ranks_first(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn unmapped_town_is_excluded(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn limit_truncates_ranking(context: TestContext) {
    let _ = context;
}
