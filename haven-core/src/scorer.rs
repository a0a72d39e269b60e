//! Score a town against a preference profile.
//!
//! The `Scorer` trait produces a [`MatchResult`](crate::MatchResult) for a
//! normalized [`PreferenceProfile`](crate::PreferenceProfile) and
//! [`TownProfile`](crate::TownProfile).

use crate::{MatchResult, PreferenceProfile, TownProfile};

/// Compute a match result for one (preferences, town) pair.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a catalog can be
/// scored across threads against one shared profile, and must be pure:
/// scoring the same pair twice yields the same result.
///
/// # Examples
///
/// ```rust
/// use haven_core::{
///     MatchResult, OverallScore, PreferenceProfile, RawTown, Scorer, Taxonomy, TownProfile,
/// };
///
/// struct Indifferent;
///
/// impl Scorer for Indifferent {
///     fn score(&self, _preferences: &PreferenceProfile, town: &TownProfile) -> MatchResult {
///         MatchResult {
///             town_id: town.id().to_owned(),
///             town_name: town.name().to_owned(),
///             overall: OverallScore::NotRanked,
///             categories: Vec::new(),
///         }
///     }
/// }
///
/// let town = TownProfile::from_raw(&RawTown::new("porto", "Porto"), &Taxonomy::default()).unwrap();
/// let result = Indifferent.score(&PreferenceProfile::default(), &town);
/// assert!(!result.overall.is_ranked());
/// ```
pub trait Scorer: Send + Sync {
    /// Score `town` according to `preferences`.
    fn score(&self, preferences: &PreferenceProfile, town: &TownProfile) -> MatchResult;
}
