#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Property tests for the normalizer and adjacency validation.

use std::collections::BTreeMap;

use haven_core::{AdjacencyTable, Criterion, Taxonomy};
use proptest::prelude::*;

const HUMIDITY: [&str; 3] = ["dry", "balanced", "humid"];

fn criterion_strategy() -> impl Strategy<Value = Criterion> {
    proptest::sample::select(Criterion::ALL.to_vec())
}

fn descriptor_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,12}",
        "[A-Za-z _-]{1,16}",
        proptest::sample::select(vec![
            "often cloudy".to_owned(),
            "Mostly-Sunny".to_owned(),
            "BALANCED".to_owned(),
            "scuba diving".to_owned(),
        ]),
    ]
}

fn edges_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..HUMIDITY.len(), 0..HUMIDITY.len()), 0..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn normalization_is_idempotent(
        criterion in criterion_strategy(),
        raw in descriptor_strategy(),
    ) {
        let taxonomy = Taxonomy::default();
        if let Ok(value) = taxonomy.normalize(criterion, &raw) {
            let again = taxonomy
                .normalize(criterion, value.as_str())
                .expect("canonical values normalize");
            prop_assert_eq!(again, value);
        }
    }

    #[test]
    fn normalized_values_belong_to_the_vocabulary(
        criterion in criterion_strategy(),
        raw in descriptor_strategy(),
    ) {
        let taxonomy = Taxonomy::default();
        if let Ok(value) = taxonomy.normalize(criterion, &raw) {
            let vocabulary = taxonomy.vocabulary(criterion).expect("vocabulary exists");
            prop_assert!(vocabulary.rank(&value).is_some());
        }
    }

    #[test]
    fn loaded_tables_are_symmetric(edges in edges_strategy()) {
        let taxonomy = Taxonomy::default();
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (from, to) in &edges {
            let (Some(source), Some(target)) = (HUMIDITY.get(*from), HUMIDITY.get(*to)) else {
                continue;
            };
            entries
                .entry((*source).to_owned())
                .or_default()
                .push((*target).to_owned());
        }
        if let Ok(table) = AdjacencyTable::from_config(Criterion::Humidity, &entries, &taxonomy) {
            for a in HUMIDITY {
                for b in HUMIDITY {
                    let left = taxonomy.normalize(Criterion::Humidity, a).expect("canonical");
                    let right = taxonomy.normalize(Criterion::Humidity, b).expect("canonical");
                    prop_assert_eq!(
                        table.is_adjacent(&left, &right),
                        table.is_adjacent(&right, &left)
                    );
                    if a == b {
                        prop_assert!(!table.is_adjacent(&left, &right));
                    }
                }
            }
        }
    }
}
