//! The match engine: validated tables plus the scoring pipeline.
//!
//! A [`MatchEngine`] is built once from a [`ScoringConfig`] and is read-only
//! afterwards. Scoring a pair normalizes both sides, runs the six category
//! scorers and aggregates their sub-scores. Ranking a catalog maps that
//! pipeline over the towns in parallel and sorts the results
//! deterministically.
#![forbid(unsafe_code)]

use std::cmp::Reverse;

use haven_core::{
    AdjacencyTable, AdjacencyTables, BracketTables, Category, CategoryScore, CategoryWeights,
    ConfigurationError, CriterionWeights, Equivalences, MatchResult, PartialCredit,
    PreferenceProfile, ProfileError, RawPreferences, RawTown, Scorer, Taxonomy, TownProfile,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::categories::score_category;
use crate::{ConfigLoadError, MatchError, ScoringConfig, aggregate};

/// Validated lookup tables shared by every scorer.
#[derive(Debug, Clone)]
pub(crate) struct ScoringTables {
    pub(crate) taxonomy: Taxonomy,
    pub(crate) adjacency: AdjacencyTables,
    pub(crate) equivalences: Equivalences,
    pub(crate) brackets: BracketTables,
    pub(crate) criterion_weights: CriterionWeights,
}

impl Default for ScoringTables {
    fn default() -> Self {
        let brackets = BracketTables::default();
        let taxonomy = Taxonomy::new(&brackets);
        Self {
            adjacency: AdjacencyTables::new(&taxonomy),
            equivalences: Equivalences::builtin(&taxonomy),
            criterion_weights: CriterionWeights::default(),
            brackets,
            taxonomy,
        }
    }
}

/// Reason code for catalog records that do not decode as a town.
pub const MALFORMED_RECORD: &str = "malformed-record";

/// A town dropped from a ranking because its record could not be
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    /// Identifier of the rejected record.
    pub town_id: String,
    /// Stable reason code, e.g. `unmapped-value`.
    pub reason: &'static str,
    /// Human-readable description of the failure.
    pub detail: String,
}

impl Exclusion {
    fn new(town: &RawTown, error: &ProfileError) -> Self {
        Self {
            town_id: town.id.clone(),
            reason: error.reason_code(),
            detail: error.to_string(),
        }
    }

    fn malformed(town_id: String, error: &serde_json::Error) -> Self {
        Self {
            town_id,
            reason: MALFORMED_RECORD,
            detail: error.to_string(),
        }
    }
}

/// Outcome of ranking a catalog against one preference profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    /// Ranked results, best first; ties broken by town id.
    pub ranked: Vec<MatchResult>,
    /// Towns scored but not ranked because no preference was stated.
    pub unranked: Vec<MatchResult>,
    /// Towns whose records failed normalization.
    pub excluded: Vec<Exclusion>,
}

/// Scores towns against preference profiles.
///
/// # Examples
/// ```
/// use haven_core::{Criterion, RawPreferences, RawTown};
/// use haven_scorer::MatchEngine;
///
/// let engine = MatchEngine::with_defaults();
/// let preferences = RawPreferences::default().with(Criterion::Summer, "warm");
/// let towns = [
///     RawTown::new("porto", "Porto").with(Criterion::Summer, "mild"),
///     RawTown::new("seville", "Seville").with(Criterion::Summer, "very hot"),
///     RawTown::new("malaga", "Malaga").with(Criterion::Summer, "warm"),
/// ];
/// let ranking = engine.rank(&preferences, &towns, None).unwrap();
/// let order: Vec<_> = ranking.ranked.iter().map(|result| result.town_id.as_str()).collect();
/// assert_eq!(order, ["malaga", "porto", "seville"]);
/// ```
#[derive(Debug, Clone)]
pub struct MatchEngine {
    tables: ScoringTables,
    category_weights: CategoryWeights,
}

impl MatchEngine {
    /// Validate `config` and build the engine.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when weights do not sum to 100, a
    /// partial-credit fraction lies outside `(0, 1)`, an adjacency table is
    /// asymmetric or names unknown values, an equivalence targets a scalar
    /// criterion, or a bracket table is malformed.
    pub fn new(config: &ScoringConfig) -> Result<Self, ConfigurationError> {
        let brackets = BracketTables::from_specs(&config.merged_brackets())?;
        let taxonomy = Taxonomy::new(&brackets);
        let mut adjacency = AdjacencyTables::new(&taxonomy)
            .with_partial_credit(PartialCredit::new(config.partial_credit)?);
        for (criterion, credit) in &config.partial_credit_overrides {
            adjacency = adjacency.with_override(*criterion, PartialCredit::new(*credit)?);
        }
        for (criterion, entries) in &config.adjacency {
            adjacency =
                adjacency.with_table(AdjacencyTable::from_config(*criterion, entries, &taxonomy)?);
        }
        let equivalences = Equivalences::from_config(&config.equivalences, &taxonomy)?;
        let criterion_weights = CriterionWeights::new(config.merged_criterion_weights())?;
        let category_weights = CategoryWeights::new(config.category_weights.clone())?;
        Ok(Self {
            tables: ScoringTables {
                taxonomy,
                adjacency,
                equivalences,
                brackets,
                criterion_weights,
            },
            category_weights,
        })
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigLoadError::Parse`] for malformed documents and
    /// [`ConfigLoadError::Invalid`] for documents that fail validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigLoadError> {
        let config = ScoringConfig::from_json(document)?;
        Ok(Self::new(&config)?)
    }

    /// Engine with the built-in tables.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            tables: ScoringTables::default(),
            category_weights: CategoryWeights::default(),
        }
    }

    /// Taxonomy used to normalize raw values.
    #[must_use]
    pub const fn taxonomy(&self) -> &Taxonomy {
        &self.tables.taxonomy
    }

    /// Category weights used in aggregation.
    #[must_use]
    pub const fn category_weights(&self) -> &CategoryWeights {
        &self.category_weights
    }

    /// Normalize a raw preference profile.
    ///
    /// # Errors
    /// Returns [`MatchError::Preferences`] when a value has no canonical
    /// mapping or a set preference is empty.
    pub fn normalize_preferences(
        &self,
        raw: &RawPreferences,
    ) -> Result<PreferenceProfile, MatchError> {
        PreferenceProfile::from_raw(raw, &self.tables.taxonomy)
            .map_err(|source| MatchError::Preferences { source })
    }

    /// Normalize a raw town record.
    ///
    /// # Errors
    /// Returns [`MatchError::Town`] when the record cannot be normalized.
    pub fn normalize_town(&self, raw: &RawTown) -> Result<TownProfile, MatchError> {
        TownProfile::from_raw(raw, &self.tables.taxonomy).map_err(|source| MatchError::Town {
            town_id: raw.id.clone(),
            source,
        })
    }

    /// Score a single category.
    #[must_use]
    pub fn score_category(
        &self,
        category: Category,
        preferences: &PreferenceProfile,
        town: &TownProfile,
    ) -> CategoryScore {
        score_category(
            &self.tables,
            category,
            self.category_weights.weight(category),
            preferences,
            town,
        )
    }

    /// Normalize both sides and score the pair.
    ///
    /// # Errors
    /// Returns [`MatchError`] when either side fails normalization.
    pub fn score_raw(
        &self,
        preferences: &RawPreferences,
        town: &RawTown,
    ) -> Result<MatchResult, MatchError> {
        let profile = self.normalize_preferences(preferences)?;
        let attributes = self.normalize_town(town)?;
        Ok(self.score(&profile, &attributes))
    }

    /// Score every town in `towns` and order the results.
    ///
    /// Ranked results are sorted by overall score, highest first, then by
    /// town id. Towns that fail normalization are excluded with a reason
    /// code rather than failing the request; `limit` truncates the ranked
    /// list only.
    ///
    /// # Errors
    /// Returns [`MatchError::Preferences`] when the preference profile
    /// cannot be normalized.
    pub fn rank(
        &self,
        preferences: &RawPreferences,
        towns: &[RawTown],
        limit: Option<usize>,
    ) -> Result<Ranking, MatchError> {
        let profile = self.ranking_profile(preferences, towns.len())?;
        let outcomes = towns
            .par_iter()
            .map(|raw| self.score_record(&profile, raw))
            .collect();
        Ok(collect_ranking(outcomes, limit))
    }

    /// Rank a catalog of undecoded JSON records.
    ///
    /// Each record is decoded on its own, so a record with an unknown
    /// criterion or a malformed value is excluded with reason
    /// `malformed-record` while the rest of the catalog is still ranked.
    /// Records without a string `id` are named by their position, e.g. `#3`.
    ///
    /// # Errors
    /// Returns [`MatchError::Preferences`] when the preference profile
    /// cannot be normalized.
    pub fn rank_records(
        &self,
        preferences: &RawPreferences,
        records: &[Value],
        limit: Option<usize>,
    ) -> Result<Ranking, MatchError> {
        let profile = self.ranking_profile(preferences, records.len())?;
        let outcomes = records
            .par_iter()
            .enumerate()
            .map(|(index, record)| {
                RawTown::deserialize(record)
                    .map_err(|error| Exclusion::malformed(record_id(record, index), &error))
                    .and_then(|raw| self.score_record(&profile, &raw))
            })
            .collect();
        Ok(collect_ranking(outcomes, limit))
    }

    fn ranking_profile(
        &self,
        preferences: &RawPreferences,
        catalog_len: usize,
    ) -> Result<PreferenceProfile, MatchError> {
        let profile = self.normalize_preferences(preferences)?;
        if profile.is_blank() {
            log::warn!("no preferences stated; every town will be listed as unranked");
        } else {
            log::debug!(
                "ranking {catalog_len} towns on {} stated criteria",
                profile.stated().count()
            );
        }
        Ok(profile)
    }

    fn score_record(
        &self,
        profile: &PreferenceProfile,
        raw: &RawTown,
    ) -> Result<MatchResult, Exclusion> {
        TownProfile::from_raw(raw, &self.tables.taxonomy)
            .map(|town| self.score(profile, &town))
            .map_err(|error| Exclusion::new(raw, &error))
    }
}

fn record_id(record: &Value, index: usize) -> String {
    record
        .get("id")
        .and_then(Value::as_str)
        .map_or_else(|| format!("#{index}"), str::to_owned)
}

fn collect_ranking(outcomes: Vec<Result<MatchResult, Exclusion>>, limit: Option<usize>) -> Ranking {
    let mut ranking = Ranking {
        ranked: Vec::new(),
        unranked: Vec::new(),
        excluded: Vec::new(),
    };
    for outcome in outcomes {
        match outcome {
            Ok(result) if result.overall.is_ranked() => ranking.ranked.push(result),
            Ok(result) => ranking.unranked.push(result),
            Err(exclusion) => {
                log::warn!(
                    "excluding town '{}' from ranking ({}): {}",
                    exclusion.town_id,
                    exclusion.reason,
                    exclusion.detail
                );
                ranking.excluded.push(exclusion);
            }
        }
    }
    ranking.ranked.sort_by(|left, right| {
        Reverse(left.overall.score())
            .cmp(&Reverse(right.overall.score()))
            .then_with(|| left.town_id.cmp(&right.town_id))
    });
    if let Some(count) = limit {
        ranking.ranked.truncate(count);
    }
    ranking
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Scorer for MatchEngine {
    fn score(&self, preferences: &PreferenceProfile, town: &TownProfile) -> MatchResult {
        let categories: Vec<CategoryScore> = Category::ALL
            .into_iter()
            .map(|category| self.score_category(category, preferences, town))
            .collect();
        let overall = aggregate(&categories, &self.category_weights);
        log::debug!("scored town '{}': {overall:?}", town.id());
        MatchResult {
            town_id: town.id().to_owned(),
            town_name: town.name().to_owned(),
            overall,
            categories,
        }
    }
}
