//! Core domain types for the Haven matching engine.
//!
//! Preferences and town attributes are organised into six
//! [`Category`] values, each grouping several [`Criterion`] values. Raw
//! input is mapped onto closed vocabularies by the [`Taxonomy`]; ordinal
//! criteria carry [`AdjacencyTables`] for partial credit, cost criteria
//! carry [`BracketTables`], and set-valued criteria may accept substitutes
//! through [`Equivalences`]. Constructors that validate return `Result` so
//! bad configuration is rejected before anything is scored.

#![forbid(unsafe_code)]

mod adjacency;
mod brackets;
mod category;
mod equivalence;
mod error;
mod profile;
mod result;
mod scorer;
pub mod taxonomy;
mod town;
mod value;
mod weights;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use adjacency::{AdjacencyTable, AdjacencyTables, PartialCredit};
pub use brackets::{Bracket, BracketSpec, BracketTable, BracketTables};
pub use category::{Category, Criterion, Shape};
pub use equivalence::{EquivalenceConfig, Equivalences};
pub use error::{ConfigurationError, ProfileError, UnknownNameError, UnmappedValueError};
pub use profile::{PreferenceProfile, RawPreferences, RawSections};
pub use result::{
    CategoryScore, CriterionScore, MatchResult, Outcome, OverallScore, round_percent,
};
pub use scorer::Scorer;
pub use taxonomy::{Scale, Taxonomy, Vocabulary};
pub use town::{RawTown, TownProfile};
pub use value::{Attribute, CanonicalValue, Preference, RawValue};
pub use weights::{CategoryWeights, CriterionWeights, WEIGHT_TOTAL};
