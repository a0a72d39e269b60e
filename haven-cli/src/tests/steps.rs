//! Behaviour-driven step definitions driving the rank, score and
//! check-config scenarios.

use super::helpers::{Workspace, write_json_fixture, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use haven_core::test_support::{full_preferences, ideal_town, sample_catalog, unmapped_town};
use haven_core::{Criterion, ProfileError, RawPreferences, RawTown};
use haven_scorer::{MALFORMED_RECORD, MatchError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Debug)]
struct CliWorld {
    _workspace: Workspace,
    preferences: Utf8PathBuf,
    towns: Utf8PathBuf,
    town: Utf8PathBuf,
    config: Utf8PathBuf,
    include_towns: RefCell<bool>,
    extra_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    stderr: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CliWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        Self {
            preferences: workspace.path("preferences.json"),
            towns: workspace.path("towns.json"),
            town: workspace.path("town.json"),
            config: workspace.path("scoring.json"),
            _workspace: workspace,
            include_towns: RefCell::new(false),
            extra_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            stderr: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, argv: Vec<String>) {
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let mut stdout = self.stdout.borrow_mut();
        let mut stderr = self.stderr.borrow_mut();
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Rank(args) => run_rank(args, &mut *stdout),
            Command::Score(args) => run_score(args, &mut *stdout, &mut *stderr),
            Command::CheckConfig(args) => run_check_config(&args, &mut *stdout),
        });
        self.result.replace(Some(outcome));
    }

    fn stdout_json(&self) -> Value {
        serde_json::from_slice(&self.stdout.borrow()).expect("stdout should hold JSON")
    }

    fn stderr_text(&self) -> String {
        String::from_utf8(self.stderr.borrow().clone()).expect("stderr utf-8")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected failure")
        })
    }
}

#[fixture]
fn world() -> CliWorld {
    CliWorld::new()
}

#[given("a full preference profile on disk")]
fn full_preference_profile(#[from(world)] world: &CliWorld) {
    write_json_fixture(&world.preferences, &full_preferences());
}

#[given("a preference profile with an unmapped value on disk")]
fn unmapped_preference_profile(#[from(world)] world: &CliWorld) {
    let preferences = RawPreferences::default().with(Criterion::Summer, "lukewarm");
    write_json_fixture(&world.preferences, &preferences);
}

#[given("a humidity preference of dry on disk")]
fn humidity_preference(#[from(world)] world: &CliWorld) {
    let preferences = RawPreferences::default().with(Criterion::Humidity, "dry");
    write_json_fixture(&world.preferences, &preferences);
}

#[given("the sample catalog on disk")]
fn sample_catalog_on_disk(#[from(world)] world: &CliWorld) {
    write_json_fixture(&world.towns, &sample_catalog());
    world.include_towns.replace(true);
}

#[given("a catalog with an unmapped town on disk")]
fn catalog_with_unmapped_town(#[from(world)] world: &CliWorld) {
    let mut catalog = sample_catalog();
    catalog.push(unmapped_town());
    write_json_fixture(&world.towns, &catalog);
    world.include_towns.replace(true);
}

#[given("a catalog with a malformed record on disk")]
fn catalog_with_malformed_record(#[from(world)] world: &CliWorld) {
    let mut records: Vec<Value> = sample_catalog()
        .iter()
        .map(|town| serde_json::to_value(town).expect("serializable town"))
        .collect();
    records.push(serde_json::json!({
        "id": "oddville",
        "attributes": {"climate": {"snowfall": "lots"}},
    }));
    write_json_fixture(&world.towns, &records);
    world.include_towns.replace(true);
}

#[given("the ranking is limited to two towns")]
fn ranking_limited(#[from(world)] world: &CliWorld) {
    world
        .extra_args
        .borrow_mut()
        .extend([format!("--{ARG_LIMIT}"), "2".to_owned()]);
}

#[given("the ideal town on disk")]
fn ideal_town_on_disk(#[from(world)] world: &CliWorld) {
    write_json_fixture(&world.town, &ideal_town());
}

#[given("a balanced-humidity town on disk")]
fn balanced_town_on_disk(#[from(world)] world: &CliWorld) {
    let town = RawTown::new("balanced", "Balanced").with(Criterion::Humidity, "balanced");
    write_json_fixture(&world.town, &town);
}

#[given("the town file contains invalid JSON")]
fn town_contains_invalid_json(#[from(world)] world: &CliWorld) {
    write_utf8(&world.town, b"{ not valid json");
}

#[given("a scoring configuration with custom partial credit on disk")]
fn custom_partial_credit(#[from(world)] world: &CliWorld) {
    write_utf8(&world.config, br#"{"partial_credit": 0.5}"#);
}

#[given("a scoring configuration whose weights sum to 90 on disk")]
fn weights_sum_to_ninety(#[from(world)] world: &CliWorld) {
    write_utf8(
        &world.config,
        br#"{"category_weights": {"region": 20, "climate": 15, "culture": 15,
            "hobbies": 10, "administration": 20, "cost": 10}}"#,
    );
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &CliWorld) {
    let mut argv = vec![
        "haven".to_owned(),
        "rank".to_owned(),
        world.preferences.as_str().to_owned(),
    ];
    if *world.include_towns.borrow() {
        argv.extend([format!("--{ARG_TOWNS}"), world.towns.as_str().to_owned()]);
    }
    argv.extend(world.extra_args.borrow().iter().cloned());
    world.run(argv);
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &CliWorld) {
    world.run(vec![
        "haven".to_owned(),
        "score".to_owned(),
        world.preferences.as_str().to_owned(),
        format!("--{ARG_TOWN}"),
        world.town.as_str().to_owned(),
    ]);
}

#[when("I run the score command with the configuration")]
fn run_score_with_configuration(#[from(world)] world: &CliWorld) {
    world.run(vec![
        "haven".to_owned(),
        "score".to_owned(),
        world.preferences.as_str().to_owned(),
        format!("--{ARG_TOWN}"),
        world.town.as_str().to_owned(),
        format!("--{ARG_CONFIG}"),
        world.config.as_str().to_owned(),
    ]);
}

#[when("I run the check-config command")]
fn run_check_config_command(#[from(world)] world: &CliWorld) {
    world.run(vec![
        "haven".to_owned(),
        "check-config".to_owned(),
        world.config.as_str().to_owned(),
    ]);
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CliWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("alicante heads the printed ranking")]
fn alicante_heads_ranking(#[from(world)] world: &CliWorld) {
    let output = world.stdout_json();
    assert_eq!(output["ranked"][0]["town_id"], "alicante");
    assert_eq!(
        output["ranked"].as_array().map(Vec::len),
        Some(sample_catalog().len())
    );
}

#[then("the printed ranking holds two towns")]
fn ranking_holds_two(#[from(world)] world: &CliWorld) {
    let output = world.stdout_json();
    assert_eq!(output["ranked"].as_array().map(Vec::len), Some(2));
}

#[then("atlantis is listed as excluded")]
fn atlantis_excluded(#[from(world)] world: &CliWorld) {
    let output = world.stdout_json();
    assert_eq!(output["excluded"][0]["town_id"], "atlantis");
    assert_eq!(output["excluded"][0]["reason"], "unmapped-value");
}

#[then("oddville is listed as malformed")]
fn oddville_malformed(#[from(world)] world: &CliWorld) {
    let output = world.stdout_json();
    assert_eq!(output["excluded"][0]["town_id"], "oddville");
    assert_eq!(output["excluded"][0]["reason"], MALFORMED_RECORD);
}

#[then("the summary reads excellent")]
fn summary_reads_excellent(#[from(world)] world: &CliWorld) {
    let summary = world.stderr_text();
    assert!(summary.ends_with(" excellent\n"), "{summary}");
}

#[then("the summary reads fair")]
fn summary_reads_fair(#[from(world)] world: &CliWorld) {
    // dry against balanced earns half the humidity weight
    let summary = world.stderr_text();
    assert_eq!(summary, "Balanced (balanced): 50 fair\n");
}

#[then("the configuration is reported valid")]
fn configuration_reported_valid(#[from(world)] world: &CliWorld) {
    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    assert_eq!(stdout, format!("{}: configuration is valid\n", world.config));
}

#[then("the command fails because the towns path is missing")]
fn fails_missing_towns(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_TOWNS),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the preferences are unmapped")]
fn fails_unmapped_preferences(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::Match {
            source:
                MatchError::Preferences {
                    source: ProfileError::Unmapped(_),
                },
        } => {}
        other => panic!("expected an unmapped preference, found {other:?}"),
    }
}

#[then("the command fails because the town JSON is invalid")]
fn fails_invalid_town_json(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::ParseInput { field, .. } => assert_eq!(*field, ARG_TOWN),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[then("the command fails because the configuration is invalid")]
fn fails_invalid_configuration(#[from(world)] world: &CliWorld) {
    match &*world.error() {
        CliError::InvalidConfig { path, .. } => assert_eq!(*path, world.config),
        other => panic!("expected InvalidConfig, found {other:?}"),
    }
}

macro_rules! register_cli_scenario {
    ($fn_name:ident, $feature:literal, $scenario_title:literal) => {
        #[scenario(path = $feature, name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_cli_scenario!(
    rank_happy_path,
    "tests/features/rank_command.feature",
    "ranking a catalog from JSON"
);
register_cli_scenario!(
    rank_with_limit,
    "tests/features/rank_command.feature",
    "limiting the printed ranking"
);
register_cli_scenario!(
    rank_excludes_unmapped,
    "tests/features/rank_command.feature",
    "excluding towns with unmapped values"
);
register_cli_scenario!(
    rank_excludes_malformed,
    "tests/features/rank_command.feature",
    "excluding malformed catalog records"
);
register_cli_scenario!(
    rank_missing_towns,
    "tests/features/rank_command.feature",
    "rejecting a missing catalog path"
);
register_cli_scenario!(
    score_ideal_town,
    "tests/features/score_command.feature",
    "scoring an ideal town"
);
register_cli_scenario!(
    score_unmapped_preferences,
    "tests/features/score_command.feature",
    "rejecting preferences with unmapped values"
);
register_cli_scenario!(
    score_invalid_town_json,
    "tests/features/score_command.feature",
    "rejecting malformed town JSON"
);
register_cli_scenario!(
    check_valid_config,
    "tests/features/check_config_command.feature",
    "accepting a valid configuration"
);
register_cli_scenario!(
    check_invalid_config,
    "tests/features/check_config_command.feature",
    "rejecting category weights that do not sum to 100"
);
register_cli_scenario!(
    score_with_custom_config,
    "tests/features/check_config_command.feature",
    "scoring with a custom configuration"
);
