//! Scoring configuration documents.
//!
//! A [`ScoringConfig`] is plain data: weights, partial-credit fractions,
//! adjacency overrides, equivalences and bracket tables. Every field has a
//! built-in default, so a JSON document only needs to name what it changes.
//! Nothing is validated until [`MatchEngine::new`](crate::MatchEngine::new)
//! builds the tables.
//!
//! Criterion weights and bracket tables merge per entry over the defaults:
//! supplying weights for `climate` leaves the other categories untouched.
//! Category weights, adjacency entries and equivalences are taken as given.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::io::Read;

use haven_core::{
    BracketSpec, BracketTables, Category, CategoryWeights, Criterion, CriterionWeights,
    EquivalenceConfig, Equivalences, PartialCredit,
};
use serde::{Deserialize, Serialize};

use crate::ConfigLoadError;

/// Raw adjacency entries: criterion -> value -> neighbours.
pub type AdjacencyConfig = BTreeMap<Criterion, BTreeMap<String, Vec<String>>>;

/// Tunable scoring tables.
///
/// # Examples
/// ```
/// use haven_scorer::ScoringConfig;
///
/// let config = ScoringConfig::from_json(r#"{"partial_credit": 0.5}"#).unwrap();
/// assert_eq!(config.partial_credit, 0.5);
/// assert_eq!(config.category_weights, ScoringConfig::default().category_weights);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of each category; must cover all six and sum to 100.
    pub category_weights: BTreeMap<Category, u32>,
    /// Criterion weights per category; each category sums to 100.
    pub criterion_weights: BTreeMap<Category, BTreeMap<Criterion, u32>>,
    /// Near-miss fraction used when no override applies.
    pub partial_credit: f64,
    /// Per-criterion near-miss fractions.
    pub partial_credit_overrides: BTreeMap<Criterion, f64>,
    /// Adjacency tables replacing the linear defaults.
    pub adjacency: AdjacencyConfig,
    /// Substitutes for set-valued criteria.
    pub equivalences: EquivalenceConfig,
    /// Cost bracket tables.
    pub brackets: BTreeMap<Criterion, Vec<BracketSpec>>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            category_weights: CategoryWeights::default_map(),
            criterion_weights: CriterionWeights::default_map(),
            partial_credit: PartialCredit::DEFAULT.get(),
            partial_credit_overrides: BTreeMap::new(),
            adjacency: BTreeMap::new(),
            equivalences: Equivalences::default_config(),
            brackets: BracketTables::default_specs(),
        }
    }
}

impl ScoringConfig {
    /// Parse a JSON document.
    ///
    /// # Errors
    /// Returns [`ConfigLoadError::Parse`] when the document is malformed or
    /// names unknown fields, categories or criteria.
    pub fn from_json(document: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(document).map_err(|source| ConfigLoadError::Parse { source })
    }

    /// Parse a JSON document from a reader.
    ///
    /// # Errors
    /// Returns [`ConfigLoadError::Parse`] when reading fails or the document
    /// is malformed.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigLoadError> {
        serde_json::from_reader(reader).map_err(|source| ConfigLoadError::Parse { source })
    }

    /// Criterion weights with the configured tables laid over the defaults.
    pub(crate) fn merged_criterion_weights(&self) -> BTreeMap<Category, BTreeMap<Criterion, u32>> {
        let mut merged = CriterionWeights::default_map();
        merged.extend(
            self.criterion_weights
                .iter()
                .map(|(category, table)| (*category, table.clone())),
        );
        merged
    }

    /// Bracket specifications with the configured tables laid over the
    /// defaults.
    pub(crate) fn merged_brackets(&self) -> BTreeMap<Criterion, Vec<BracketSpec>> {
        let mut merged = BracketTables::default_specs();
        merged.extend(
            self.brackets
                .iter()
                .map(|(criterion, specs)| (*criterion, specs.clone())),
        );
        merged
    }
}
