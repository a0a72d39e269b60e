//! The comparison primitive shared by every category scorer.
//!
//! A criterion of weight `w` is scored by one [`Rule`]:
//!
//! - [`Rule::Match`]: equal values earn `w`, adjacent values earn
//!   `w * partial_credit`. A set preference takes the best of its members, so
//!   adding members never lowers the credit.
//! - [`Rule::AtLeast`]: an attribute ranked at or above a preferred value
//!   earns `w`; one ranked just below it (and adjacent) earns partial credit.
//! - [`Rule::Coverage`]: the fraction of preferred values the town offers,
//!   directly or through an equivalence, multiplied by `w`.
//! - [`Rule::Bracket`]: an amount inside a selected bracket earns `w`; one
//!   within a bracket width of it earns partial credit.
//!
//! Unspecified preferences and missing attributes are resolved before any
//! rule runs.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use haven_core::{Attribute, CanonicalValue, Criterion, CriterionScore, Outcome, Preference};

use crate::engine::ScoringTables;

/// How a criterion compares a preference with an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exact or adjacent value.
    Match,
    /// Value at or above the preferred rank.
    AtLeast,
    /// Proportional coverage of a preferred set.
    Coverage,
    /// Containment in a budget bracket.
    Bracket,
}

/// Score one criterion.
///
/// Returns [`Outcome::ExcludedUnspecified`] for an unspecified preference and
/// flags `attribute_missing` when the town has no value.
pub(crate) fn score_criterion(
    tables: &ScoringTables,
    rule: Rule,
    criterion: Criterion,
    preference: &Preference,
    attribute: Option<&Attribute>,
) -> CriterionScore {
    let weight = tables.criterion_weights.weight(criterion);
    if preference.is_unspecified() {
        return CriterionScore::excluded(criterion, weight);
    }
    let Some(present) = attribute else {
        return CriterionScore::missing(criterion, weight);
    };
    let credit = tables.adjacency.partial_credit(criterion).get();
    let (fraction, outcome) = match rule {
        Rule::Match => best_of(preference, |wanted| match_value(tables, criterion, wanted, present)),
        Rule::AtLeast => {
            best_of(preference, |wanted| at_least(tables, criterion, wanted, present))
        }
        Rule::Coverage => coverage(tables, criterion, preference, present),
        Rule::Bracket => best_of(preference, |wanted| bracket(tables, criterion, wanted, present)),
    };
    let fraction_awarded = match outcome {
        Outcome::Exact => 1.0,
        Outcome::Partial => fraction.unwrap_or(credit),
        Outcome::NoMatch | Outcome::ExcludedUnspecified => 0.0,
    };
    CriterionScore::scored(criterion, weight, points(weight, fraction_awarded), outcome)
}

#[expect(
    clippy::float_arithmetic,
    reason = "criterion points scale the integer weight by a fraction"
)]
fn points(weight: u32, fraction: f64) -> f64 {
    f64::from(weight) * fraction
}

/// Rank outcomes so the best member of a set preference wins.
const fn strength(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Exact => 2,
        Outcome::Partial => 1,
        Outcome::NoMatch | Outcome::ExcludedUnspecified => 0,
    }
}

fn best_of(
    preference: &Preference,
    judge: impl FnMut(&CanonicalValue) -> Outcome,
) -> (Option<f64>, Outcome) {
    let outcome = preference
        .values()
        .map(judge)
        .max_by_key(|outcome| strength(*outcome))
        .unwrap_or(Outcome::NoMatch);
    (None, outcome)
}

fn match_value(
    tables: &ScoringTables,
    criterion: Criterion,
    wanted: &CanonicalValue,
    attribute: &Attribute,
) -> Outcome {
    let Attribute::Scalar(offered) = attribute else {
        return Outcome::NoMatch;
    };
    if wanted == offered {
        Outcome::Exact
    } else if tables.adjacency.is_adjacent(criterion, wanted, offered) {
        Outcome::Partial
    } else {
        Outcome::NoMatch
    }
}

fn at_least(
    tables: &ScoringTables,
    criterion: Criterion,
    wanted: &CanonicalValue,
    attribute: &Attribute,
) -> Outcome {
    let Attribute::Scalar(offered) = attribute else {
        return Outcome::NoMatch;
    };
    let Some(vocabulary) = tables.taxonomy.vocabulary(criterion) else {
        return Outcome::NoMatch;
    };
    match (vocabulary.rank(wanted), vocabulary.rank(offered)) {
        (Some(floor), Some(rank)) if rank >= floor => Outcome::Exact,
        (Some(_), Some(_)) if tables.adjacency.is_adjacent(criterion, wanted, offered) => {
            Outcome::Partial
        }
        _ => Outcome::NoMatch,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "coverage is the ratio of two small member counts"
)]
fn coverage(
    tables: &ScoringTables,
    criterion: Criterion,
    preference: &Preference,
    attribute: &Attribute,
) -> (Option<f64>, Outcome) {
    let offered: BTreeSet<CanonicalValue> = match attribute {
        Attribute::Set(values) => values.clone(),
        Attribute::Scalar(value) => BTreeSet::from([value.clone()]),
        Attribute::Amount(_) => BTreeSet::new(),
    };
    let wanted = preference.len();
    let covered = preference
        .values()
        .filter(|value| tables.equivalences.satisfies(criterion, value, &offered))
        .count();
    if wanted == 0 || covered == 0 {
        return (Some(0.0), Outcome::NoMatch);
    }
    if covered == wanted {
        return (Some(1.0), Outcome::Exact);
    }
    (Some(covered as f64 / wanted as f64), Outcome::Partial)
}

fn bracket(
    tables: &ScoringTables,
    criterion: Criterion,
    wanted: &CanonicalValue,
    attribute: &Attribute,
) -> Outcome {
    let Attribute::Amount(amount) = attribute else {
        return Outcome::NoMatch;
    };
    let Some(selected) = tables
        .brackets
        .table(criterion)
        .and_then(|table| table.get(wanted))
    else {
        return Outcome::NoMatch;
    };
    if selected.contains(*amount) {
        Outcome::Exact
    } else if selected.distance(*amount) <= selected.width() {
        Outcome::Partial
    } else {
        Outcome::NoMatch
    }
}
