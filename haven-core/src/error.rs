//! Error types shared across the Haven engine.

use thiserror::Error;

use crate::{Category, Criterion, Shape};

/// A name did not match any known category or criterion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{name}'")]
pub struct UnknownNameError {
    /// What was being parsed.
    pub kind: &'static str,
    /// Offending input.
    pub name: String,
}

impl UnknownNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
        }
    }
}

/// A raw value has no canonical mapping for its criterion.
///
/// Scoring for the affected record must stop rather than guess a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{criterion} value {value:?} has no canonical mapping")]
pub struct UnmappedValueError {
    /// Criterion the value was recorded against.
    pub criterion: Criterion,
    /// Raw value as supplied.
    pub value: String,
}

impl UnmappedValueError {
    pub(crate) fn new(criterion: Criterion, value: impl Into<String>) -> Self {
        Self {
            criterion,
            value: value.into(),
        }
    }
}

/// Static scoring configuration is unusable.
///
/// These errors are fatal at start-up: no engine can be built while any of
/// them is present.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A category has no weight.
    #[error("category {category} has no weight")]
    MissingCategoryWeight {
        /// Category without a weight.
        category: Category,
    },
    /// Category weights do not add up to 100.
    #[error("category weights sum to {total}, expected 100")]
    CategoryWeightSum {
        /// Actual sum.
        total: u32,
    },
    /// A category has no criterion weight table.
    #[error("category {category} has no criterion weights")]
    MissingCriterionWeights {
        /// Category without a table.
        category: Category,
    },
    /// A criterion weight table omits one of the category's criteria.
    #[error("criterion {criterion} has no weight")]
    MissingCriterionWeight {
        /// Criterion without a weight.
        criterion: Criterion,
    },
    /// A criterion was listed under a category it does not belong to.
    #[error("criterion {criterion} does not belong to category {category}")]
    CriterionOutsideCategory {
        /// Misplaced criterion.
        criterion: Criterion,
        /// Category it was listed under.
        category: Category,
    },
    /// Criterion weights within a category do not add up to 100.
    #[error("criterion weights for {category} sum to {total}, expected 100")]
    CriterionWeightSum {
        /// Category whose table is wrong.
        category: Category,
        /// Actual sum.
        total: u32,
    },
    /// A partial-credit fraction lies outside the open interval `(0, 1)`.
    #[error("partial credit {value} is outside (0, 1)")]
    PartialCreditOutOfRange {
        /// Offending fraction.
        value: f64,
    },
    /// Adjacency was declared for a criterion that is not a scalar on an
    /// ordinal scale.
    #[error("criterion {criterion} does not score by adjacency and cannot carry an adjacency table")]
    AdjacencyOnNominalCriterion {
        /// Criterion the table was declared for.
        criterion: Criterion,
    },
    /// An adjacency table lists `from -> to` without the reverse entry.
    #[error("adjacency for {criterion} lists {from} -> {to} but not {to} -> {from}")]
    AsymmetricAdjacency {
        /// Criterion whose table is asymmetric.
        criterion: Criterion,
        /// Value whose neighbour list contains `to`.
        from: String,
        /// Neighbour missing the reverse entry.
        to: String,
    },
    /// An adjacency table declares a value adjacent to itself.
    #[error("adjacency for {criterion} declares {value} adjacent to itself")]
    SelfAdjacency {
        /// Criterion whose table is wrong.
        criterion: Criterion,
        /// Offending value.
        value: String,
    },
    /// A table referenced a value outside the criterion's vocabulary.
    #[error("configuration references an unknown value: {0}")]
    UnknownValue(#[source] UnmappedValueError),
    /// Equivalences were declared for a criterion without a set shape.
    #[error("criterion {criterion} is not set-valued and cannot carry equivalences")]
    EquivalenceOnScalarCriterion {
        /// Criterion the equivalences were declared for.
        criterion: Criterion,
    },
    /// Brackets were declared for a criterion without an amount shape.
    #[error("criterion {criterion} is not a cost criterion and cannot carry brackets")]
    BracketsOnNonCostCriterion {
        /// Criterion the brackets were declared for.
        criterion: Criterion,
    },
    /// A bracket table is malformed.
    #[error("bracket table for {criterion} is invalid: {reason}")]
    InvalidBracketTable {
        /// Criterion whose table is malformed.
        criterion: Criterion,
        /// Description of the defect.
        reason: &'static str,
    },
}

impl From<UnmappedValueError> for ConfigurationError {
    fn from(source: UnmappedValueError) -> Self {
        Self::UnknownValue(source)
    }
}

/// A raw preference or town profile could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A value has no canonical mapping.
    #[error(transparent)]
    Unmapped(#[from] UnmappedValueError),
    /// A preference listed an empty set instead of being left unspecified.
    #[error("{criterion} preference is an empty list; omit it or use null for no preference")]
    EmptySet {
        /// Criterion with the empty set.
        criterion: Criterion,
    },
    /// A criterion was listed under the wrong category.
    #[error("criterion {criterion} does not belong to category {category}")]
    MisplacedCriterion {
        /// Misplaced criterion.
        criterion: Criterion,
        /// Category it was listed under.
        category: Category,
    },
    /// A town attribute has the wrong shape for its criterion.
    #[error("{criterion} attribute must be {expected}, found {found:?}")]
    ShapeMismatch {
        /// Criterion whose value has the wrong shape.
        criterion: Criterion,
        /// Shape the criterion requires.
        expected: Shape,
        /// The offending value as supplied.
        found: String,
    },
    /// A town record has a blank identifier.
    #[error("town identifier must not be blank")]
    BlankTownId,
}

impl ProfileError {
    /// Stable reason code used when a town is excluded from a ranking.
    ///
    /// # Examples
    /// ```
    /// use haven_core::ProfileError;
    ///
    /// assert_eq!(ProfileError::BlankTownId.reason_code(), "blank-town-id");
    /// ```
    #[must_use]
    pub const fn reason_code(&self) -> &'static str {
        match self {
            Self::Unmapped(_) => "unmapped-value",
            Self::EmptySet { .. } => "empty-set",
            Self::MisplacedCriterion { .. } => "misplaced-criterion",
            Self::ShapeMismatch { .. } => "shape-mismatch",
            Self::BlankTownId => "blank-town-id",
        }
    }
}
