//! Substitutes used when covering set-valued preferences.
//!
//! An equivalence says that a town offering one value also satisfies a wanted
//! value, e.g. a town with `sailing` covers a wish for `water_sports`.
//! Equivalences are directional: `walking <- hiking` does not imply
//! `hiking <- walking`.

use std::collections::{BTreeMap, BTreeSet};

use crate::{CanonicalValue, ConfigurationError, Criterion, Shape, Taxonomy};

/// Raw equivalence configuration: criterion -> wanted value -> substitutes.
pub type EquivalenceConfig = BTreeMap<Criterion, BTreeMap<String, Vec<String>>>;

/// Validated equivalences for set-valued criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equivalences {
    groups: BTreeMap<Criterion, BTreeMap<CanonicalValue, BTreeSet<CanonicalValue>>>,
}

impl Equivalences {
    /// Validate equivalence groups against the taxonomy.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::EquivalenceOnScalarCriterion`] for
    /// criteria that are not set-valued and
    /// [`ConfigurationError::UnknownValue`] for values outside the
    /// vocabulary.
    pub fn from_config(
        config: &EquivalenceConfig,
        taxonomy: &Taxonomy,
    ) -> Result<Self, ConfigurationError> {
        let mut groups = BTreeMap::new();
        for (criterion, entries) in config {
            if criterion.shape() != Shape::Set {
                return Err(ConfigurationError::EquivalenceOnScalarCriterion {
                    criterion: *criterion,
                });
            }
            let mut table: BTreeMap<CanonicalValue, BTreeSet<CanonicalValue>> = BTreeMap::new();
            for (wanted, substitutes) in entries {
                let key = taxonomy.normalize(*criterion, wanted)?;
                let group = table.entry(key.clone()).or_default();
                for raw in substitutes {
                    let substitute = taxonomy.normalize(*criterion, raw)?;
                    if substitute != key {
                        group.insert(substitute);
                    }
                }
            }
            groups.insert(*criterion, table);
        }
        Ok(Self { groups })
    }

    /// Built-in equivalences.
    #[must_use]
    pub fn default_config() -> EquivalenceConfig {
        let group = |wanted: &str, substitutes: &[&str]| {
            (
                wanted.to_owned(),
                substitutes.iter().map(|raw| (*raw).to_owned()).collect(),
            )
        };
        BTreeMap::from([
            (
                Criterion::Activities,
                BTreeMap::from([
                    group("water_sports", &["swimming", "sailing", "diving"]),
                    group("walking", &["hiking"]),
                ]),
            ),
            (
                Criterion::Interests,
                BTreeMap::from([
                    group("arts", &["museums", "theater"]),
                    group("history", &["museums"]),
                ]),
            ),
        ])
    }

    /// Built-in equivalences validated against `taxonomy`.
    ///
    /// # Panics
    /// Panics if the built-in groups name a value missing from the activity
    /// or interest vocabularies. Neither vocabulary is configurable.
    #[must_use]
    #[expect(
        clippy::expect_used,
        reason = "built-in groups are static and covered by unit tests"
    )]
    pub fn builtin(taxonomy: &Taxonomy) -> Self {
        Self::from_config(&Self::default_config(), taxonomy)
            .expect("built-in equivalences are valid")
    }

    /// Report whether `offered` satisfies `wanted`, directly or through a
    /// substitute.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use haven_core::{Criterion, Equivalences, Taxonomy};
    ///
    /// let taxonomy = Taxonomy::default();
    /// let equivalences = Equivalences::builtin(&taxonomy);
    /// let wanted = taxonomy.normalize(Criterion::Activities, "water sports").unwrap();
    /// let offered: BTreeSet<_> = [taxonomy.normalize(Criterion::Activities, "sailing").unwrap()]
    ///     .into_iter()
    ///     .collect();
    /// assert!(equivalences.satisfies(Criterion::Activities, &wanted, &offered));
    /// ```
    #[must_use]
    pub fn satisfies(
        &self,
        criterion: Criterion,
        wanted: &CanonicalValue,
        offered: &BTreeSet<CanonicalValue>,
    ) -> bool {
        offered.contains(wanted)
            || self
                .substitutes(criterion, wanted)
                .any(|substitute| offered.contains(substitute))
    }

    /// Iterate over the substitutes accepted for `wanted`.
    pub fn substitutes(
        &self,
        criterion: Criterion,
        wanted: &CanonicalValue,
    ) -> impl Iterator<Item = &CanonicalValue> {
        self.groups
            .get(&criterion)
            .and_then(|table| table.get(wanted))
            .into_iter()
            .flatten()
    }
}
