//! Scoring results and their audit breakdown.
//!
//! Every point awarded is traceable: a [`MatchResult`] holds one
//! [`CategoryScore`] per category and each of those lists a
//! [`CriterionScore`] per criterion with the points achieved, the points
//! possible and the outcome that produced them.

use serde::Serialize;

use crate::{Category, Criterion};

/// How a single criterion was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Full credit.
    Exact,
    /// Partial credit for a near miss or partial coverage.
    Partial,
    /// No credit.
    #[serde(rename = "none")]
    NoMatch,
    /// No preference was stated; the criterion does not count.
    ExcludedUnspecified,
}

/// Result for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    /// Criterion scored.
    pub criterion: Criterion,
    /// Criterion weight within its category.
    pub weight: u32,
    /// Points awarded.
    pub achieved: f64,
    /// Points available; zero when excluded.
    pub possible: f64,
    /// How the points were decided.
    pub outcome: Outcome,
    /// The town had no value for a stated preference.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub attribute_missing: bool,
}

impl CriterionScore {
    /// A criterion without a stated preference.
    #[must_use]
    pub const fn excluded(criterion: Criterion, weight: u32) -> Self {
        Self {
            criterion,
            weight,
            achieved: 0.0,
            possible: 0.0,
            outcome: Outcome::ExcludedUnspecified,
            attribute_missing: false,
        }
    }

    /// A stated preference the town has no value for.
    #[must_use]
    pub fn missing(criterion: Criterion, weight: u32) -> Self {
        Self {
            criterion,
            weight,
            achieved: 0.0,
            possible: f64::from(weight),
            outcome: Outcome::NoMatch,
            attribute_missing: true,
        }
    }

    /// A scored criterion.
    #[must_use]
    pub fn scored(criterion: Criterion, weight: u32, achieved: f64, outcome: Outcome) -> Self {
        Self {
            criterion,
            weight,
            achieved,
            possible: f64::from(weight),
            outcome,
            attribute_missing: false,
        }
    }
}

/// Round a percentage into `0..=100`.
///
/// Non-finite input yields zero.
///
/// # Examples
/// ```
/// use haven_core::round_percent;
///
/// assert_eq!(round_percent(96.82), 97);
/// assert_eq!(round_percent(140.0), 100);
/// assert_eq!(round_percent(f64::NAN), 0);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped to 0..=100 before the cast"
)]
pub fn round_percent(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Result for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    /// Category scored.
    pub category: Category,
    /// Category weight used in aggregation.
    pub weight: u32,
    /// Sum of points achieved.
    pub achieved: f64,
    /// Sum of points possible.
    pub possible: f64,
    /// Rounded percentage, `None` when nothing in the category counts.
    pub sub_score: Option<u8>,
    /// Per-criterion breakdown.
    pub criteria: Vec<CriterionScore>,
}

impl CategoryScore {
    /// Total the criterion results and derive the sub-score.
    ///
    /// # Examples
    /// ```
    /// use haven_core::{Category, CategoryScore, Criterion, CriterionScore, Outcome};
    ///
    /// let score = CategoryScore::new(Category::Hobbies, 10, vec![
    ///     CriterionScore::scored(Criterion::Activities, 60, 30.0, Outcome::Partial),
    ///     CriterionScore::excluded(Criterion::Interests, 40),
    /// ]);
    /// assert_eq!(score.sub_score, Some(50));
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "category totals are sums and ratios of fractional points"
    )]
    pub fn new(category: Category, weight: u32, criteria: Vec<CriterionScore>) -> Self {
        let achieved: f64 = criteria.iter().map(|score| score.achieved).sum();
        let possible: f64 = criteria.iter().map(|score| score.possible).sum();
        let sub_score = (possible > 0.0).then(|| round_percent(100.0 * achieved / possible));
        Self {
            category,
            weight,
            achieved,
            possible,
            sub_score,
            criteria,
        }
    }

    /// Report whether the category drops out of aggregation.
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        self.sub_score.is_none()
    }

    /// Return the result for one criterion.
    #[must_use]
    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionScore> {
        self.criteria
            .iter()
            .find(|score| score.criterion == criterion)
    }
}

/// Overall match score.
///
/// `NotRanked` is distinct from a score of zero: it means no category had a
/// stated preference, so there is nothing to rank on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum OverallScore {
    /// A rounded percentage in `0..=100`.
    Scored {
        /// The percentage.
        score: u8,
    },
    /// Every category was excluded.
    NotRanked,
}

impl OverallScore {
    /// Return the percentage, if ranked.
    #[must_use]
    pub const fn score(self) -> Option<u8> {
        match self {
            Self::Scored { score } => Some(score),
            Self::NotRanked => None,
        }
    }

    /// Report whether the result can be ranked.
    #[must_use]
    pub const fn is_ranked(self) -> bool {
        matches!(self, Self::Scored { .. })
    }
}

/// Full result for one preference profile against one town.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Town identifier.
    pub town_id: String,
    /// Town display name.
    pub town_name: String,
    /// Overall score.
    pub overall: OverallScore,
    /// Per-category breakdown in aggregation order.
    pub categories: Vec<CategoryScore>,
}

impl MatchResult {
    /// Return the breakdown for `category`.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories
            .iter()
            .find(|score| score.category == category)
    }

    /// Iterate over criteria whose town attribute was missing.
    pub fn missing_attributes(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.categories
            .iter()
            .flat_map(|category| category.criteria.iter())
            .filter(|score| score.attribute_missing)
            .map(|score| score.criterion)
    }
}
