//! Category scorers.
//!
//! Each category decides which [`Rule`] scores each of its criteria; the
//! shared primitive does the rest. A category's sub-score is
//! `round(100 * achieved / possible)`, or excluded when nothing in it was
//! stated.

use haven_core::{Category, CategoryScore, Criterion, PreferenceProfile, TownProfile};

use crate::Rule;
use crate::engine::ScoringTables;
use crate::primitive::score_criterion;

pub mod administration;
pub mod climate;
pub mod cost;
pub mod culture;
pub mod hobbies;
pub mod region;

/// Scores the criteria of one category.
pub trait CategoryScorer: Send + Sync {
    /// Category handled by this scorer.
    fn category(&self) -> Category;

    /// Rule applied to `criterion`, which belongs to [`Self::category`].
    fn rule(&self, criterion: Criterion) -> Rule;
}

/// Return the scorer for `category`.
#[must_use]
pub fn scorer_for(category: Category) -> &'static dyn CategoryScorer {
    match category {
        Category::Region => &region::RegionScorer,
        Category::Climate => &climate::ClimateScorer,
        Category::Culture => &culture::CultureScorer,
        Category::Hobbies => &hobbies::HobbiesScorer,
        Category::Administration => &administration::AdministrationScorer,
        Category::Cost => &cost::CostScorer,
    }
}

/// Score every criterion of `category` and total the results.
///
/// Missing town attributes for stated preferences are logged as incomplete
/// profiles.
pub(crate) fn score_category(
    tables: &ScoringTables,
    category: Category,
    weight: u32,
    preferences: &PreferenceProfile,
    town: &TownProfile,
) -> CategoryScore {
    let scorer = scorer_for(category);
    debug_assert_eq!(scorer.category(), category, "scorer registered for the wrong category");
    let criteria = category
        .criteria()
        .map(|criterion| {
            let score = score_criterion(
                tables,
                scorer.rule(criterion),
                criterion,
                preferences.get(criterion),
                town.attribute(criterion),
            );
            if score.attribute_missing {
                log::warn!(
                    "incomplete profile: town '{}' has no {criterion} value; scored as no match",
                    town.id()
                );
            }
            score
        })
        .collect();
    CategoryScore::new(category, weight, criteria)
}

#[cfg(test)]
mod tests {
    use haven_core::Category;
    use rstest::rstest;

    use super::scorer_for;

    #[rstest]
    fn every_category_has_its_own_scorer() {
        for category in Category::ALL {
            assert_eq!(scorer_for(category).category(), category);
        }
    }
}
