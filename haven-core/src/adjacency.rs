//! Nearness relations for ordinal criteria.
//!
//! Each ordinal criterion carries a symmetric, irreflexive adjacency relation
//! over its canonical values. A preference that misses the town's value but
//! sits next to it earns a configurable fraction of the criterion's weight.
//! Default tables link consecutive values of each scale, so on a three-point
//! scale the middle value touches both ends and the ends touch only the
//! middle.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::taxonomy::Scale;
use crate::{CanonicalValue, ConfigurationError, Criterion, Shape, Taxonomy};

/// Fraction of a criterion's weight awarded for a near miss.
///
/// Always lies strictly between zero and one.
///
/// # Examples
/// ```
/// use haven_core::PartialCredit;
///
/// assert_eq!(PartialCredit::default().get(), 0.7);
/// assert!(PartialCredit::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PartialCredit(f64);

impl PartialCredit {
    /// Default near-miss fraction.
    pub const DEFAULT: Self = Self(0.70);

    /// Validate a near-miss fraction.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::PartialCreditOutOfRange`] unless
    /// `0 < value < 1`.
    pub fn new(value: f64) -> Result<Self, ConfigurationError> {
        if value.is_finite() && value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(ConfigurationError::PartialCreditOutOfRange { value })
        }
    }

    /// Return the fraction.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for PartialCredit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for PartialCredit {
    type Error = ConfigurationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartialCredit> for f64 {
    fn from(credit: PartialCredit) -> Self {
        credit.0
    }
}

/// Adjacency relation for one ordinal criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTable {
    criterion: Criterion,
    neighbours: BTreeMap<CanonicalValue, BTreeSet<CanonicalValue>>,
}

impl AdjacencyTable {
    /// Link each value of an ordered scale to its immediate neighbours.
    #[must_use]
    pub fn linear(criterion: Criterion, scale: &[CanonicalValue]) -> Self {
        let mut neighbours: BTreeMap<CanonicalValue, BTreeSet<CanonicalValue>> = BTreeMap::new();
        for pair in scale.windows(2) {
            if let [lower, upper] = pair {
                neighbours
                    .entry(lower.clone())
                    .or_default()
                    .insert(upper.clone());
                neighbours
                    .entry(upper.clone())
                    .or_default()
                    .insert(lower.clone());
            }
        }
        Self {
            criterion,
            neighbours,
        }
    }

    /// Build a table from configuration entries of the form
    /// `value -> [neighbours]`.
    ///
    /// Entries are normalized through `taxonomy`, so aliases are accepted.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when the criterion is not an ordinal
    /// scalar, an entry names a value outside the criterion's vocabulary, a
    /// value is listed as its own neighbour, or an entry lacks its mirror.
    pub fn from_config(
        criterion: Criterion,
        entries: &BTreeMap<String, Vec<String>>,
        taxonomy: &Taxonomy,
    ) -> Result<Self, ConfigurationError> {
        if criterion.shape() != Shape::Scalar || taxonomy.scale(criterion) != Scale::Ordinal {
            return Err(ConfigurationError::AdjacencyOnNominalCriterion { criterion });
        }
        let mut neighbours: BTreeMap<CanonicalValue, BTreeSet<CanonicalValue>> = BTreeMap::new();
        for (value, adjacent) in entries {
            let from = taxonomy.normalize(criterion, value)?;
            let targets = neighbours.entry(from.clone()).or_default();
            for raw in adjacent {
                let to = taxonomy.normalize(criterion, raw)?;
                if to == from {
                    return Err(ConfigurationError::SelfAdjacency {
                        criterion,
                        value: from.to_string(),
                    });
                }
                targets.insert(to);
            }
        }
        for (from, targets) in &neighbours {
            if let Some(to) = targets.iter().find(|to| {
                neighbours
                    .get(*to)
                    .is_none_or(|mirror| !mirror.contains(from))
            }) {
                return Err(ConfigurationError::AsymmetricAdjacency {
                    criterion,
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }
        Ok(Self {
            criterion,
            neighbours,
        })
    }

    /// Criterion the table belongs to.
    #[must_use]
    pub const fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Report whether `a` and `b` are distinct neighbours.
    #[must_use]
    pub fn is_adjacent(&self, a: &CanonicalValue, b: &CanonicalValue) -> bool {
        a != b
            && self
                .neighbours
                .get(a)
                .is_some_and(|targets| targets.contains(b))
    }

    /// Iterate over the neighbours of `value`.
    pub fn neighbours(&self, value: &CanonicalValue) -> impl Iterator<Item = &CanonicalValue> {
        self.neighbours.get(value).into_iter().flatten()
    }
}

/// Adjacency tables and partial-credit fractions for every criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyTables {
    tables: BTreeMap<Criterion, AdjacencyTable>,
    partial_credit: PartialCredit,
    overrides: BTreeMap<Criterion, PartialCredit>,
}

impl AdjacencyTables {
    /// Derive linear tables for every ordinal scalar criterion in
    /// `taxonomy`, with the default partial credit.
    #[must_use]
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let tables = Criterion::ALL
            .into_iter()
            .filter(|criterion| {
                criterion.shape() == Shape::Scalar
                    && taxonomy.scale(*criterion) == Scale::Ordinal
            })
            .filter_map(|criterion| {
                taxonomy.vocabulary(criterion).map(|vocabulary| {
                    (
                        criterion,
                        AdjacencyTable::linear(criterion, vocabulary.values()),
                    )
                })
            })
            .collect();
        Self {
            tables,
            partial_credit: PartialCredit::DEFAULT,
            overrides: BTreeMap::new(),
        }
    }

    /// Replace the table for the table's criterion.
    #[must_use]
    pub fn with_table(mut self, table: AdjacencyTable) -> Self {
        self.tables.insert(table.criterion(), table);
        self
    }

    /// Set the fraction used for criteria without an override.
    #[must_use]
    pub const fn with_partial_credit(mut self, credit: PartialCredit) -> Self {
        self.partial_credit = credit;
        self
    }

    /// Set the fraction for one criterion.
    #[must_use]
    pub fn with_override(mut self, criterion: Criterion, credit: PartialCredit) -> Self {
        self.overrides.insert(criterion, credit);
        self
    }

    /// Return the table for a criterion, if it is ordinal.
    #[must_use]
    pub fn table(&self, criterion: Criterion) -> Option<&AdjacencyTable> {
        self.tables.get(&criterion)
    }

    /// Report whether `a` and `b` are neighbours for `criterion`.
    ///
    /// Nominal criteria are never adjacent.
    ///
    /// # Examples
    /// ```
    /// use haven_core::{AdjacencyTables, Criterion, Taxonomy};
    ///
    /// let taxonomy = Taxonomy::default();
    /// let tables = AdjacencyTables::new(&taxonomy);
    /// let dry = taxonomy.normalize(Criterion::Humidity, "dry").unwrap();
    /// let balanced = taxonomy.normalize(Criterion::Humidity, "balanced").unwrap();
    /// let humid = taxonomy.normalize(Criterion::Humidity, "humid").unwrap();
    /// assert!(tables.is_adjacent(Criterion::Humidity, &dry, &balanced));
    /// assert!(!tables.is_adjacent(Criterion::Humidity, &dry, &humid));
    /// ```
    #[must_use]
    pub fn is_adjacent(&self, criterion: Criterion, a: &CanonicalValue, b: &CanonicalValue) -> bool {
        self.table(criterion)
            .is_some_and(|table| table.is_adjacent(a, b))
    }

    /// Near-miss fraction for a criterion.
    #[must_use]
    pub fn partial_credit(&self, criterion: Criterion) -> PartialCredit {
        self.overrides
            .get(&criterion)
            .copied()
            .unwrap_or(self.partial_credit)
    }
}

impl Default for AdjacencyTables {
    fn default() -> Self {
        Self::new(&Taxonomy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn taxonomy() -> Taxonomy {
        Taxonomy::default()
    }

    fn value(taxonomy: &Taxonomy, criterion: Criterion, raw: &str) -> CanonicalValue {
        taxonomy.normalize(criterion, raw).expect("canonical value")
    }

    fn entries(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(from, to)| {
                (
                    (*from).to_owned(),
                    to.iter().map(|raw| (*raw).to_owned()).collect(),
                )
            })
            .collect()
    }

    #[rstest]
    fn default_tables_link_consecutive_values(taxonomy: Taxonomy) {
        let tables = AdjacencyTables::new(&taxonomy);
        let mild = value(&taxonomy, Criterion::Summer, "mild");
        let warm = value(&taxonomy, Criterion::Summer, "warm");
        let hot = value(&taxonomy, Criterion::Summer, "hot");
        assert!(tables.is_adjacent(Criterion::Summer, &mild, &warm));
        assert!(tables.is_adjacent(Criterion::Summer, &warm, &hot));
        assert!(tables.is_adjacent(Criterion::Summer, &hot, &warm));
        assert!(!tables.is_adjacent(Criterion::Summer, &mild, &hot));
        assert!(!tables.is_adjacent(Criterion::Summer, &mild, &mild));
    }

    #[rstest]
    fn nominal_and_cost_criteria_have_no_tables(taxonomy: Taxonomy) {
        let tables = AdjacencyTables::new(&taxonomy);
        assert!(tables.table(Criterion::Region).is_none());
        assert!(tables.table(Criterion::Activities).is_none());
        assert!(tables.table(Criterion::Rent).is_none());
        assert!(tables.table(Criterion::Healthcare).is_some());
    }

    #[rstest]
    fn configured_tables_accept_symmetric_entries(taxonomy: Taxonomy) {
        let table = AdjacencyTable::from_config(
            Criterion::Humidity,
            &entries(&[("dry", &["humid"]), ("humid", &["dry"])]),
            &taxonomy,
        )
        .expect("symmetric table");
        let dry = value(&taxonomy, Criterion::Humidity, "dry");
        let humid = value(&taxonomy, Criterion::Humidity, "humid");
        assert!(table.is_adjacent(&dry, &humid));
        assert_eq!(table.neighbours(&dry).count(), 1);
    }

    #[rstest]
    fn asymmetric_entries_are_rejected(taxonomy: Taxonomy) {
        let err = AdjacencyTable::from_config(
            Criterion::Humidity,
            &entries(&[("dry", &["balanced"])]),
            &taxonomy,
        )
        .expect_err("missing mirror");
        assert_eq!(err, ConfigurationError::AsymmetricAdjacency {
            criterion: Criterion::Humidity,
            from: "dry".to_owned(),
            to: "balanced".to_owned(),
        });
    }

    #[rstest]
    fn self_adjacency_is_rejected(taxonomy: Taxonomy) {
        let err = AdjacencyTable::from_config(
            Criterion::Humidity,
            &entries(&[("dry", &["arid"])]),
            &taxonomy,
        )
        .expect_err("alias folds onto itself");
        assert!(matches!(err, ConfigurationError::SelfAdjacency { .. }));
    }

    #[rstest]
    #[case(Criterion::Region, "europe", "asia")]
    #[case(Criterion::LivingCost, "under_1500", "1500_2000")]
    fn tables_on_non_ordinal_criteria_are_rejected(
        taxonomy: Taxonomy,
        #[case] criterion: Criterion,
        #[case] from: &str,
        #[case] to: &str,
    ) {
        let err = AdjacencyTable::from_config(
            criterion,
            &entries(&[(from, &[to]), (to, &[from])]),
            &taxonomy,
        )
        .expect_err("not ordinal");
        assert_eq!(err, ConfigurationError::AdjacencyOnNominalCriterion {
            criterion
        });
    }

    #[rstest]
    fn unknown_values_are_rejected(taxonomy: Taxonomy) {
        let err = AdjacencyTable::from_config(
            Criterion::Humidity,
            &entries(&[("dry", &["soggy"])]),
            &taxonomy,
        )
        .expect_err("soggy is not a humidity value");
        assert!(matches!(err, ConfigurationError::UnknownValue(_)));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.5)]
    #[case(f64::NAN)]
    fn partial_credit_must_lie_strictly_inside_unit_interval(#[case] raw: f64) {
        assert!(PartialCredit::new(raw).is_err());
    }

    #[rstest]
    fn overrides_take_precedence(taxonomy: Taxonomy) {
        let half = PartialCredit::new(0.5).expect("valid credit");
        let tables = AdjacencyTables::new(&taxonomy).with_override(Criterion::Precipitation, half);
        assert_eq!(tables.partial_credit(Criterion::Precipitation), half);
        assert_eq!(tables.partial_credit(Criterion::Summer), PartialCredit::DEFAULT);
    }

    #[rstest]
    fn partial_credit_deserialises_with_validation() {
        let credit: PartialCredit = serde_json::from_str("0.5").expect("valid credit");
        assert_eq!(credit.get(), 0.5);
        assert!(serde_json::from_str::<PartialCredit>("1.5").is_err());
    }
}
