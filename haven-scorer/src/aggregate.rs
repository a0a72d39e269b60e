//! Combine category sub-scores into an overall score.
#![forbid(unsafe_code)]

use haven_core::{CategoryScore, CategoryWeights, OverallScore, round_percent};

/// Weighted mean of the included category sub-scores.
///
/// Excluded categories drop their weight from the denominator, so the
/// remaining weights are renormalized. When no category is included, or the
/// included categories carry no weight, the result is
/// [`OverallScore::NotRanked`].
///
/// # Examples
/// ```
/// use haven_core::{Category, CategoryScore, CategoryWeights, Criterion, CriterionScore, Outcome};
/// use haven_scorer::aggregate;
///
/// let weights = CategoryWeights::default();
/// let climate = CategoryScore::new(Category::Climate, 15, vec![
///     CriterionScore::scored(Criterion::Summer, 21, 21.0, Outcome::Exact),
/// ]);
/// let cost = CategoryScore::new(Category::Cost, 20, vec![
///     CriterionScore::scored(Criterion::Rent, 30, 0.0, Outcome::NoMatch),
/// ]);
/// // (15 * 100 + 20 * 0) / 35
/// assert_eq!(aggregate(&[climate, cost], &weights).score(), Some(43));
/// ```
#[must_use]
pub fn aggregate(categories: &[CategoryScore], weights: &CategoryWeights) -> OverallScore {
    let (numerator, denominator) = categories
        .iter()
        .filter_map(|score| {
            score
                .sub_score
                .map(|sub_score| (weights.weight(score.category), sub_score))
        })
        .fold((0_u64, 0_u64), |(numerator, denominator), (weight, sub_score)| {
            (
                numerator.saturating_add(u64::from(weight).saturating_mul(u64::from(sub_score))),
                denominator.saturating_add(u64::from(weight)),
            )
        });
    if denominator == 0 {
        return OverallScore::NotRanked;
    }
    let mean = ratio(numerator, denominator);
    OverallScore::Scored {
        score: round_percent(mean),
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "weighted sums stay far below the f64 mantissa limit"
)]
fn ratio(numerator: u64, denominator: u64) -> f64 {
    numerator as f64 / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::{Category, Criterion, CriterionScore, Outcome};
    use rstest::rstest;

    fn category(name: Category, sub_score: Option<u8>) -> CategoryScore {
        let criterion = name
            .criteria()
            .next()
            .expect("every category has criteria");
        let score = match sub_score {
            Some(percent) => CriterionScore::scored(
                criterion,
                100,
                f64::from(percent),
                Outcome::Partial,
            ),
            None => CriterionScore::excluded(criterion, 100),
        };
        CategoryScore::new(name, 0, vec![score])
    }

    #[rstest]
    fn all_excluded_is_not_ranked() {
        let scores: Vec<_> = Category::ALL
            .into_iter()
            .map(|name| category(name, None))
            .collect();
        assert_eq!(
            aggregate(&scores, &CategoryWeights::default()),
            OverallScore::NotRanked
        );
    }

    #[rstest]
    fn empty_input_is_not_ranked() {
        assert_eq!(
            aggregate(&[], &CategoryWeights::default()),
            OverallScore::NotRanked
        );
    }

    #[rstest]
    fn zero_is_a_score_not_a_sentinel() {
        let scores = [category(Category::Hobbies, Some(0))];
        assert_eq!(
            aggregate(&scores, &CategoryWeights::default()),
            OverallScore::Scored { score: 0 }
        );
    }

    #[rstest]
    fn excluded_categories_renormalize_the_weights() {
        let scores = [
            category(Category::Region, Some(100)),
            category(Category::Climate, Some(60)),
            category(Category::Culture, None),
            category(Category::Cost, None),
        ];
        // (20 * 100 + 15 * 60) / 35 = 82.86
        assert_eq!(
            aggregate(&scores, &CategoryWeights::default()).score(),
            Some(83)
        );
    }

    #[rstest]
    fn full_marks_everywhere_is_one_hundred() {
        let scores: Vec<_> = Category::ALL
            .into_iter()
            .map(|name| category(name, Some(100)))
            .collect();
        assert_eq!(
            aggregate(&scores, &CategoryWeights::default()).score(),
            Some(100)
        );
    }

    #[rstest]
    fn weights_come_from_the_table_not_the_breakdown() {
        let mut table = CategoryWeights::default_map();
        table.insert(Category::Region, 0);
        table.insert(Category::Climate, 35);
        let weights = CategoryWeights::new(table).expect("sums to 100");
        let scores = [
            category(Category::Region, Some(100)),
            category(Category::Climate, Some(40)),
        ];
        assert_eq!(aggregate(&scores, &weights).score(), Some(40));
    }

    #[rstest]
    fn included_categories_without_weight_are_not_ranked() {
        let mut table = CategoryWeights::default_map();
        table.insert(Category::Region, 0);
        table.insert(Category::Climate, 35);
        let weights = CategoryWeights::new(table).expect("sums to 100");
        let scores = [category(Category::Region, Some(100))];
        assert_eq!(aggregate(&scores, &weights), OverallScore::NotRanked);
    }
}
