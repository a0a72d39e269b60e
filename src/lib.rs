//! Facade crate for the Haven retirement-destination matching engine.
//!
//! This crate re-exports the core domain types and exposes the match engine
//! behind the `scorer` feature flag.

#![forbid(unsafe_code)]

pub use haven_core::{
    Attribute, Category, CategoryScore, CategoryWeights, ConfigurationError, Criterion,
    CriterionScore, CriterionWeights, MatchResult, Outcome, OverallScore, Preference,
    PreferenceProfile, ProfileError, RawPreferences, RawTown, RawValue, Scorer, Taxonomy,
    TownProfile,
};

#[cfg(feature = "test-support")]
pub use haven_core::test_support;

#[cfg(feature = "scorer")]
pub use haven_scorer::{
    ConfigLoadError, Exclusion, MatchEngine, MatchError, Ranking, ScoringConfig,
};
