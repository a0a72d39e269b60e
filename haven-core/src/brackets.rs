//! Monthly budget brackets for cost criteria.
//!
//! A budget preference selects one or more brackets; a town's monthly amount
//! is then tested for containment. Brackets are half-open (`min <= x < max`),
//! contiguous and strictly increasing, with exactly one open-ended bracket at
//! the top.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CanonicalValue, ConfigurationError, Criterion, Shape};

/// Declarative description of one bracket, as found in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketSpec {
    /// Identifier users select, e.g. `1500_2000`.
    pub id: String,
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound; `None` for the open-ended top bracket.
    #[serde(default)]
    pub max: Option<f64>,
}

impl BracketSpec {
    /// Build a bounded bracket specification.
    #[must_use]
    pub fn bounded(id: &str, min: f64, max: f64) -> Self {
        Self {
            id: id.to_owned(),
            min,
            max: Some(max),
        }
    }

    /// Build the open-ended top bracket specification.
    #[must_use]
    pub fn open(id: &str, min: f64) -> Self {
        Self {
            id: id.to_owned(),
            min,
            max: None,
        }
    }
}

/// A validated bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket {
    id: CanonicalValue,
    min: f64,
    max: Option<f64>,
    width: f64,
}

impl Bracket {
    /// Bracket identifier.
    #[must_use]
    pub const fn id(&self) -> &CanonicalValue {
        &self.id
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Exclusive upper bound, `None` for the open-ended top bracket.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Width used for the one-bracket tolerance. Open-ended brackets borrow
    /// the width of the bracket below them.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Report whether `amount` falls inside the bracket.
    #[must_use]
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount < max)
    }

    /// Distance from `amount` to the nearest edge of the bracket, zero when
    /// contained.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "distances between amounts are differences of floats"
    )]
    pub fn distance(&self, amount: f64) -> f64 {
        if amount < self.min {
            return self.min - amount;
        }
        match self.max {
            Some(max) if amount >= max => amount - max,
            _ => 0.0,
        }
    }
}

/// Ordered brackets for a single cost criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketTable {
    brackets: Vec<Bracket>,
}

impl BracketTable {
    /// Validate and build a bracket table.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when the criterion is not a cost
    /// criterion, or when the brackets are empty, overlapping, gapped,
    /// decreasing, duplicated, or lack a single open-ended top bracket.
    #[expect(
        clippy::float_arithmetic,
        reason = "bracket widths are differences of bounds"
    )]
    pub fn new(criterion: Criterion, specs: &[BracketSpec]) -> Result<Self, ConfigurationError> {
        if criterion.shape() != Shape::Amount {
            return Err(ConfigurationError::BracketsOnNonCostCriterion { criterion });
        }
        let invalid = |reason| ConfigurationError::InvalidBracketTable { criterion, reason };
        let Some((last, bounded)) = specs.split_last() else {
            return Err(invalid("no brackets defined"));
        };
        if last.max.is_some() {
            return Err(invalid("the top bracket must be open-ended"));
        }
        if specs.iter().any(|spec| !spec.min.is_finite() || spec.min < 0.0) {
            return Err(invalid("lower bounds must be finite and non-negative"));
        }

        let mut brackets = Vec::with_capacity(specs.len());
        let mut previous_width = None;
        for (index, spec) in bounded.iter().enumerate() {
            let Some(max) = spec.max.filter(|max| max.is_finite()) else {
                return Err(invalid("only the top bracket may be open-ended"));
            };
            if max <= spec.min {
                return Err(invalid("upper bounds must exceed lower bounds"));
            }
            let next_min = specs.get(index + 1).map(|next| next.min);
            if next_min != Some(max) {
                return Err(invalid("brackets must be contiguous"));
            }
            let width = max - spec.min;
            previous_width = Some(width);
            brackets.push(Bracket {
                id: CanonicalValue::new(fold_bracket_id(&spec.id)),
                min: spec.min,
                max: Some(max),
                width,
            });
        }
        let Some(top_width) = previous_width else {
            return Err(invalid("at least one bounded bracket is required"));
        };
        brackets.push(Bracket {
            id: CanonicalValue::new(fold_bracket_id(&last.id)),
            min: last.min,
            max: None,
            width: top_width,
        });

        for (index, bracket) in brackets.iter().enumerate() {
            if brackets
                .iter()
                .skip(index + 1)
                .any(|other| other.id == bracket.id)
            {
                return Err(invalid("bracket identifiers must be unique"));
            }
        }
        Ok(Self { brackets })
    }

    /// Look up a bracket by identifier.
    #[must_use]
    pub fn get(&self, id: &CanonicalValue) -> Option<&Bracket> {
        self.brackets.iter().find(|bracket| &bracket.id == id)
    }

    /// Find the bracket containing `amount`.
    #[must_use]
    pub fn containing(&self, amount: f64) -> Option<&Bracket> {
        self.brackets.iter().find(|bracket| bracket.contains(amount))
    }

    /// Iterate over the brackets from cheapest to most expensive.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Bracket> {
        self.brackets.iter()
    }
}

/// Bracket tables for every cost criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketTables {
    tables: BTreeMap<Criterion, BracketTable>,
}

impl BracketTables {
    /// Validate bracket specifications keyed by criterion.
    ///
    /// Every cost criterion must have a table.
    ///
    /// # Errors
    /// Propagates [`BracketTable::new`] failures and reports cost criteria
    /// without a table.
    pub fn from_specs(
        specs: &BTreeMap<Criterion, Vec<BracketSpec>>,
    ) -> Result<Self, ConfigurationError> {
        let mut tables = BTreeMap::new();
        for (criterion, table) in specs {
            tables.insert(*criterion, BracketTable::new(*criterion, table)?);
        }
        if let Some(criterion) = Criterion::ALL
            .into_iter()
            .filter(|criterion| criterion.shape() == Shape::Amount)
            .find(|criterion| !tables.contains_key(criterion))
        {
            return Err(ConfigurationError::InvalidBracketTable {
                criterion,
                reason: "no brackets defined",
            });
        }
        Ok(Self { tables })
    }

    /// Return the table for a criterion.
    #[must_use]
    pub fn table(&self, criterion: Criterion) -> Option<&BracketTable> {
        self.tables.get(&criterion)
    }

    /// Default monthly brackets in US dollars.
    #[must_use]
    pub fn default_specs() -> BTreeMap<Criterion, Vec<BracketSpec>> {
        BTreeMap::from([
            (Criterion::LivingCost, vec![
                BracketSpec::bounded("under_1500", 0.0, 1500.0),
                BracketSpec::bounded("1500_2000", 1500.0, 2000.0),
                BracketSpec::bounded("2000_2500", 2000.0, 2500.0),
                BracketSpec::bounded("2500_3000", 2500.0, 3000.0),
                BracketSpec::bounded("3000_4000", 3000.0, 4000.0),
                BracketSpec::open("over_4000", 4000.0),
            ]),
            (Criterion::Rent, vec![
                BracketSpec::bounded("under_500", 0.0, 500.0),
                BracketSpec::bounded("500_750", 500.0, 750.0),
                BracketSpec::bounded("750_1000", 750.0, 1000.0),
                BracketSpec::bounded("1000_1500", 1000.0, 1500.0),
                BracketSpec::bounded("1500_2000", 1500.0, 2000.0),
                BracketSpec::open("over_2000", 2000.0),
            ]),
            (Criterion::HealthcareCost, vec![
                BracketSpec::bounded("under_100", 0.0, 100.0),
                BracketSpec::bounded("100_200", 100.0, 200.0),
                BracketSpec::bounded("200_300", 200.0, 300.0),
                BracketSpec::bounded("300_500", 300.0, 500.0),
                BracketSpec::open("over_500", 500.0),
            ]),
        ])
    }
}

impl Default for BracketTables {
    #[expect(
        clippy::expect_used,
        reason = "built-in bracket tables are static and covered by unit tests"
    )]
    fn default() -> Self {
        Self::from_specs(&Self::default_specs()).expect("built-in bracket tables are valid")
    }
}

fn fold_bracket_id(raw: &str) -> String {
    crate::taxonomy::fold_key(raw)
}
