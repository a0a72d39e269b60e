//! Region scoring.
//!
//! The broad region is nominal: only an exact region (or any member of a
//! multi-select) earns credit. Geographic features and vegetation are sets
//! on both sides and score by coverage.

use haven_core::{Category, Criterion};

use super::CategoryScorer;
use crate::Rule;

/// Scorer for [`Category::Region`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionScorer;

impl CategoryScorer for RegionScorer {
    fn category(&self) -> Category {
        Category::Region
    }

    fn rule(&self, criterion: Criterion) -> Rule {
        match criterion {
            Criterion::GeographicFeatures | Criterion::Vegetation => Rule::Coverage,
            _ => Rule::Match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::test_helpers::score;
    use haven_core::{Outcome, RawPreferences, RawTown};
    use rstest::rstest;

    #[rstest]
    #[case(&["europe", "mediterranean"], Outcome::Exact)]
    #[case(&["asia"], Outcome::NoMatch)]
    fn any_selected_region_matches(#[case] regions: &[&str], #[case] expected: Outcome) {
        let preferences = RawPreferences::default().with(
            Criterion::Region,
            regions
                .iter()
                .map(|region| (*region).to_owned())
                .collect::<Vec<_>>(),
        );
        let town = RawTown::new("t", "T").with(Criterion::Region, "southern europe");
        let result = score(Category::Region, &preferences, &town);
        let region = result.criterion(Criterion::Region).expect("region is listed");
        assert_eq!(region.outcome, expected);
    }

    #[rstest]
    fn neighbouring_regions_earn_nothing() {
        let preferences = RawPreferences::default().with(Criterion::Region, "europe");
        let town = RawTown::new("t", "T").with(Criterion::Region, "mediterranean");
        let result = score(Category::Region, &preferences, &town);
        assert_eq!(result.sub_score, Some(0));
    }

    #[rstest]
    fn features_score_by_coverage() {
        let preferences = RawPreferences::default()
            .with(Criterion::GeographicFeatures, ["coastal", "mountains"])
            .with(Criterion::Vegetation, ["mediterranean"]);
        let town = RawTown::new("t", "T")
            .with(Criterion::GeographicFeatures, ["beach", "plains"])
            .with(Criterion::Vegetation, ["mediterranean", "forest"]);
        let result = score(Category::Region, &preferences, &town);
        let features = result
            .criterion(Criterion::GeographicFeatures)
            .expect("features are listed");
        assert_eq!(features.outcome, Outcome::Partial);
        assert!((features.achieved - 17.5).abs() < 1e-9);
        // (17.5 + 25) / 60
        assert_eq!(result.sub_score, Some(71));
    }
}
