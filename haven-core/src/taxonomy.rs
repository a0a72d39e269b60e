//! Canonical vocabularies and the normalizer that maps raw values onto them.
//!
//! Every criterion owns a closed vocabulary. Raw descriptors are folded
//! (trimmed, lowercased, spaces and hyphens turned into underscores) and then
//! looked up among the canonical values and an explicit alias table, so a
//! finer descriptor such as `often_cloudy` collapses onto `less_sunny`.
//! Ordinal vocabularies are listed from one end of their scale to the other;
//! administration criteria also accept 0-10 numeric scores, and cost criteria
//! accept amounts that fall inside a bracket.
//!
//! Values with no mapping are rejected with [`UnmappedValueError`]; nothing is
//! defaulted silently.

use std::collections::BTreeMap;

use crate::{BracketTables, CanonicalValue, Criterion, Shape, UnmappedValueError};

/// Whether a criterion's vocabulary has an implied order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Unordered labels; only exact matches score.
    Nominal,
    /// Ordered labels; neighbours earn partial credit.
    Ordinal,
}

struct VocabularySpec {
    criterion: Criterion,
    scale: Scale,
    canonical: &'static [&'static str],
    aliases: &'static [(&'static str, &'static str)],
    scores: Option<&'static [(f64, &'static str)]>,
}

/// Maximum value of the 0-10 quality scores accepted for administration.
const SCORE_CEILING: f64 = 10.0;

const QUALITY_SCORES: &[(f64, &str)] = &[(7.0, "good"), (4.0, "functional"), (0.0, "basic")];
const QUALITY_ALIASES: &[(&str, &str)] = &[
    ("poor", "basic"),
    ("limited", "basic"),
    ("low", "basic"),
    ("adequate", "functional"),
    ("fair", "functional"),
    ("average", "functional"),
    ("moderate", "functional"),
    ("excellent", "good"),
    ("high", "good"),
    ("very_good", "good"),
];
const QUALITY_SCALE: &[&str] = &["basic", "functional", "good"];

const VOCABULARIES: &[VocabularySpec] = &[
    VocabularySpec {
        criterion: Criterion::Region,
        scale: Scale::Nominal,
        canonical: &[
            "europe",
            "mediterranean",
            "north_america",
            "central_america",
            "south_america",
            "caribbean",
            "asia",
            "oceania",
            "africa",
            "middle_east",
        ],
        aliases: &[
            ("northern_europe", "europe"),
            ("western_europe", "europe"),
            ("eastern_europe", "europe"),
            ("central_europe", "europe"),
            ("southern_europe", "mediterranean"),
            ("usa", "north_america"),
            ("united_states", "north_america"),
            ("canada", "north_america"),
            ("southeast_asia", "asia"),
            ("east_asia", "asia"),
            ("south_asia", "asia"),
            ("australia_new_zealand", "oceania"),
            ("pacific", "oceania"),
            ("north_africa", "africa"),
            ("sub_saharan_africa", "africa"),
            ("gulf", "middle_east"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::GeographicFeatures,
        scale: Scale::Nominal,
        canonical: &[
            "coastal",
            "mountains",
            "island",
            "lakes",
            "river",
            "valley",
            "desert",
            "forest",
            "plains",
        ],
        aliases: &[
            ("coast", "coastal"),
            ("beach", "coastal"),
            ("beaches", "coastal"),
            ("ocean", "coastal"),
            ("seaside", "coastal"),
            ("mountain", "mountains"),
            ("mountainous", "mountains"),
            ("alpine", "mountains"),
            ("islands", "island"),
            ("lake", "lakes"),
            ("lakeside", "lakes"),
            ("rivers", "river"),
            ("riverside", "river"),
            ("valleys", "valley"),
            ("forests", "forest"),
            ("woodland", "forest"),
            ("flat", "plains"),
            ("prairie", "plains"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Vegetation,
        scale: Scale::Nominal,
        canonical: &[
            "tropical",
            "subtropical",
            "mediterranean",
            "forest",
            "grassland",
            "desert",
        ],
        aliases: &[
            ("rainforest", "tropical"),
            ("forested", "forest"),
            ("woodland", "forest"),
            ("temperate_forest", "forest"),
            ("prairie", "grassland"),
            ("steppe", "grassland"),
            ("savanna", "grassland"),
            ("arid", "desert"),
            ("xeric", "desert"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Summer,
        scale: Scale::Ordinal,
        canonical: &["mild", "warm", "hot"],
        aliases: &[
            ("cool", "mild"),
            ("temperate", "mild"),
            ("pleasant", "mild"),
            ("moderate", "warm"),
            ("very_warm", "hot"),
            ("very_hot", "hot"),
            ("scorching", "hot"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Winter,
        scale: Scale::Ordinal,
        canonical: &["cold", "cool", "mild"],
        aliases: &[
            ("freezing", "cold"),
            ("very_cold", "cold"),
            ("harsh", "cold"),
            ("chilly", "cool"),
            ("moderate", "cool"),
            ("warm", "mild"),
            ("temperate", "mild"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Humidity,
        scale: Scale::Ordinal,
        canonical: &["dry", "balanced", "humid"],
        aliases: &[
            ("arid", "dry"),
            ("low", "dry"),
            ("very_dry", "dry"),
            ("moderate", "balanced"),
            ("normal", "balanced"),
            ("comfortable", "balanced"),
            ("high", "humid"),
            ("very_humid", "humid"),
            ("muggy", "humid"),
            ("tropical", "humid"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Sunshine,
        scale: Scale::Ordinal,
        canonical: &["often_sunny", "balanced", "less_sunny"],
        aliases: &[
            ("mostly_sunny", "often_sunny"),
            ("abundant", "often_sunny"),
            ("sunny", "often_sunny"),
            ("very_sunny", "often_sunny"),
            ("partly_sunny", "balanced"),
            ("moderate", "balanced"),
            ("average", "balanced"),
            ("often_cloudy", "less_sunny"),
            ("mostly_cloudy", "less_sunny"),
            ("cloudy", "less_sunny"),
            ("overcast", "less_sunny"),
            ("limited", "less_sunny"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Precipitation,
        scale: Scale::Ordinal,
        canonical: &["mostly_dry", "balanced", "less_dry"],
        aliases: &[
            ("dry", "mostly_dry"),
            ("arid", "mostly_dry"),
            ("low", "mostly_dry"),
            ("moderate", "balanced"),
            ("often_rainy", "less_dry"),
            ("rainy", "less_dry"),
            ("wet", "less_dry"),
            ("high", "less_dry"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::SeasonalVariation,
        scale: Scale::Ordinal,
        canonical: &["minimal", "moderate", "distinct"],
        aliases: &[
            ("low", "minimal"),
            ("stable", "minimal"),
            ("year_round", "minimal"),
            ("medium", "moderate"),
            ("high", "distinct"),
            ("extreme", "distinct"),
            ("four_seasons", "distinct"),
            ("all_seasons", "distinct"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::EnglishProficiency,
        scale: Scale::Ordinal,
        canonical: &["low", "moderate", "high"],
        aliases: &[
            ("none", "low"),
            ("minimal", "low"),
            ("limited", "low"),
            ("basic", "moderate"),
            ("some", "moderate"),
            ("medium", "moderate"),
            ("widespread", "high"),
            ("fluent", "high"),
            ("native", "high"),
            ("very_high", "high"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::ExpatCommunity,
        scale: Scale::Ordinal,
        canonical: &["small", "moderate", "large"],
        aliases: &[
            ("none", "small"),
            ("minimal", "small"),
            ("tiny", "small"),
            ("medium", "moderate"),
            ("growing", "moderate"),
            ("big", "large"),
            ("established", "large"),
            ("very_large", "large"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::PaceOfLife,
        scale: Scale::Ordinal,
        canonical: &["relaxed", "moderate", "fast"],
        aliases: &[
            ("slow", "relaxed"),
            ("laid_back", "relaxed"),
            ("calm", "relaxed"),
            ("balanced", "moderate"),
            ("medium", "moderate"),
            ("busy", "fast"),
            ("hectic", "fast"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::UrbanRural,
        scale: Scale::Ordinal,
        canonical: &["rural", "suburban", "urban"],
        aliases: &[
            ("countryside", "rural"),
            ("village", "rural"),
            ("small_town", "suburban"),
            ("town", "suburban"),
            ("city", "urban"),
            ("metropolitan", "urban"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::DiningNightlife,
        scale: Scale::Ordinal,
        canonical: &["quiet", "moderate", "vibrant"],
        aliases: &[
            ("limited", "quiet"),
            ("low", "quiet"),
            ("medium", "moderate"),
            ("some", "moderate"),
            ("lively", "vibrant"),
            ("high", "vibrant"),
            ("excellent", "vibrant"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::CulturalEvents,
        scale: Scale::Ordinal,
        canonical: &["rare", "occasional", "frequent"],
        aliases: &[
            ("few", "rare"),
            ("limited", "rare"),
            ("low", "rare"),
            ("some", "occasional"),
            ("regular", "occasional"),
            ("moderate", "occasional"),
            ("many", "frequent"),
            ("abundant", "frequent"),
            ("high", "frequent"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Activities,
        scale: Scale::Nominal,
        canonical: &[
            "golf",
            "tennis",
            "hiking",
            "cycling",
            "swimming",
            "water_sports",
            "sailing",
            "diving",
            "fishing",
            "skiing",
            "yoga",
            "walking",
        ],
        aliases: &[
            ("golf_courses", "golf"),
            ("golfing", "golf"),
            ("tennis_courts", "tennis"),
            ("hiking_trails", "hiking"),
            ("trekking", "hiking"),
            ("biking", "cycling"),
            ("bicycling", "cycling"),
            ("cycling_paths", "cycling"),
            ("swimming_pools", "swimming"),
            ("pools", "swimming"),
            ("watersports", "water_sports"),
            ("boating", "sailing"),
            ("yachting", "sailing"),
            ("scuba", "diving"),
            ("scuba_diving", "diving"),
            ("snorkeling", "diving"),
            ("ski", "skiing"),
            ("ski_resorts", "skiing"),
            ("winter_sports", "skiing"),
            ("walking_paths", "walking"),
            ("strolling", "walking"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Interests,
        scale: Scale::Nominal,
        canonical: &[
            "arts",
            "music",
            "theater",
            "museums",
            "cooking",
            "wine",
            "gardening",
            "history",
            "photography",
            "volunteering",
            "nightlife",
            "markets",
        ],
        aliases: &[
            ("art", "arts"),
            ("galleries", "arts"),
            ("art_galleries", "arts"),
            ("live_music", "music"),
            ("concerts", "music"),
            ("theatre", "theater"),
            ("museum", "museums"),
            ("culinary", "cooking"),
            ("cooking_classes", "cooking"),
            ("wineries", "wine"),
            ("vineyards", "wine"),
            ("wine_tasting", "wine"),
            ("gardens", "gardening"),
            ("historic_sites", "history"),
            ("heritage", "history"),
            ("volunteer", "volunteering"),
            ("charity", "volunteering"),
            ("bars", "nightlife"),
            ("clubs", "nightlife"),
            ("farmers_markets", "markets"),
            ("local_markets", "markets"),
        ],
        scores: None,
    },
    VocabularySpec {
        criterion: Criterion::Healthcare,
        scale: Scale::Ordinal,
        canonical: QUALITY_SCALE,
        aliases: QUALITY_ALIASES,
        scores: Some(QUALITY_SCORES),
    },
    VocabularySpec {
        criterion: Criterion::Safety,
        scale: Scale::Ordinal,
        canonical: QUALITY_SCALE,
        aliases: QUALITY_ALIASES,
        scores: Some(QUALITY_SCORES),
    },
    VocabularySpec {
        criterion: Criterion::GovernmentEfficiency,
        scale: Scale::Ordinal,
        canonical: QUALITY_SCALE,
        aliases: QUALITY_ALIASES,
        scores: Some(QUALITY_SCORES),
    },
    VocabularySpec {
        criterion: Criterion::PoliticalStability,
        scale: Scale::Ordinal,
        canonical: QUALITY_SCALE,
        aliases: QUALITY_ALIASES,
        scores: Some(QUALITY_SCORES),
    },
    VocabularySpec {
        criterion: Criterion::VisaAccess,
        scale: Scale::Ordinal,
        canonical: &["difficult", "moderate", "easy"],
        aliases: &[
            ("hard", "difficult"),
            ("restrictive", "difficult"),
            ("strict", "difficult"),
            ("medium", "moderate"),
            ("average", "moderate"),
            ("simple", "easy"),
            ("straightforward", "easy"),
            ("visa_free", "easy"),
            ("open", "easy"),
        ],
        scores: Some(&[(7.0, "easy"), (4.0, "moderate"), (0.0, "difficult")]),
    },
];

/// Numeric readings accepted for a criterion, bucketed by lower bound.
#[derive(Debug, Clone, PartialEq)]
struct NumericBands {
    /// `(lower bound, value)` pairs in descending order of bound.
    steps: Vec<(f64, CanonicalValue)>,
    /// Inclusive upper limit, if any.
    ceiling: Option<f64>,
}

impl NumericBands {
    fn bucket(&self, reading: f64) -> Option<&CanonicalValue> {
        if !reading.is_finite() || self.ceiling.is_some_and(|ceiling| reading > ceiling) {
            return None;
        }
        self.steps
            .iter()
            .find(|(lower, _)| reading >= *lower)
            .map(|(_, value)| value)
    }
}

/// The closed vocabulary for one criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    scale: Scale,
    canonical: Vec<CanonicalValue>,
    aliases: BTreeMap<String, CanonicalValue>,
    bands: Option<NumericBands>,
}

impl Vocabulary {
    /// Whether the vocabulary is ordered.
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Canonical values, in scale order for ordinal vocabularies.
    #[must_use]
    pub fn values(&self) -> &[CanonicalValue] {
        &self.canonical
    }

    /// Position of a canonical value on the scale.
    #[must_use]
    pub fn rank(&self, value: &CanonicalValue) -> Option<usize> {
        self.canonical.iter().position(|candidate| candidate == value)
    }

    fn lookup(&self, folded: &str) -> Option<&CanonicalValue> {
        self.canonical
            .iter()
            .find(|candidate| candidate.as_str() == folded)
            .or_else(|| self.aliases.get(folded))
    }

    fn from_spec(spec: &VocabularySpec) -> Self {
        let canonical = spec
            .canonical
            .iter()
            .map(|value| CanonicalValue::new(*value))
            .collect();
        let aliases = spec
            .aliases
            .iter()
            .map(|(alias, target)| ((*alias).to_owned(), CanonicalValue::new(*target)))
            .collect();
        let bands = spec.scores.map(|steps| NumericBands {
            steps: steps
                .iter()
                .map(|(lower, value)| (*lower, CanonicalValue::new(*value)))
                .collect(),
            ceiling: Some(SCORE_CEILING),
        });
        Self {
            scale: spec.scale,
            canonical,
            aliases,
            bands,
        }
    }
}

/// Canonical vocabularies for every criterion plus the normalizer over them.
///
/// # Examples
/// ```
/// use haven_core::{Criterion, Taxonomy};
///
/// let taxonomy = Taxonomy::default();
/// let value = taxonomy.normalize(Criterion::Sunshine, "Often Cloudy").unwrap();
/// assert_eq!(value.as_str(), "less_sunny");
///
/// // Normalization is idempotent.
/// let again = taxonomy.normalize(Criterion::Sunshine, value.as_str()).unwrap();
/// assert_eq!(again, value);
///
/// assert!(taxonomy.normalize(Criterion::Sunshine, "purple").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    vocabularies: BTreeMap<Criterion, Vocabulary>,
}

impl Taxonomy {
    /// Build the taxonomy, deriving cost vocabularies from `brackets`.
    #[must_use]
    pub fn new(brackets: &BracketTables) -> Self {
        let mut vocabularies: BTreeMap<_, _> = VOCABULARIES
            .iter()
            .map(|spec| (spec.criterion, Vocabulary::from_spec(spec)))
            .collect();
        for criterion in Criterion::ALL
            .into_iter()
            .filter(|criterion| criterion.shape() == Shape::Amount)
        {
            let Some(table) = brackets.table(criterion) else {
                continue;
            };
            let canonical: Vec<_> = table.iter().map(|bracket| bracket.id().clone()).collect();
            let steps = table
                .iter()
                .rev()
                .map(|bracket| (bracket.min(), bracket.id().clone()))
                .collect();
            vocabularies.insert(criterion, Vocabulary {
                scale: Scale::Ordinal,
                canonical,
                aliases: BTreeMap::new(),
                bands: Some(NumericBands {
                    steps,
                    ceiling: None,
                }),
            });
        }
        Self { vocabularies }
    }

    /// Return the vocabulary for a criterion.
    #[must_use]
    pub fn vocabulary(&self, criterion: Criterion) -> Option<&Vocabulary> {
        self.vocabularies.get(&criterion)
    }

    /// Whether the criterion's vocabulary is ordered.
    #[must_use]
    pub fn scale(&self, criterion: Criterion) -> Scale {
        self.vocabulary(criterion)
            .map_or(Scale::Nominal, Vocabulary::scale)
    }

    /// Map a raw descriptor onto the criterion's canonical value.
    ///
    /// # Errors
    /// Returns [`UnmappedValueError`] when neither the canonical vocabulary
    /// nor the alias table contains the folded descriptor.
    pub fn normalize(
        &self,
        criterion: Criterion,
        raw: &str,
    ) -> Result<CanonicalValue, UnmappedValueError> {
        let folded = fold_key(raw);
        let value = self
            .vocabulary(criterion)
            .and_then(|vocabulary| vocabulary.lookup(&folded))
            .ok_or_else(|| UnmappedValueError::new(criterion, raw))?;
        if value.as_str() != folded {
            log::debug!("{criterion}: mapped {raw:?} onto {value}");
        }
        Ok(value.clone())
    }

    /// Map a numeric reading onto the criterion's canonical value.
    ///
    /// Quality criteria accept 0-10 scores; cost criteria accept amounts and
    /// return the bracket that contains them.
    ///
    /// # Errors
    /// Returns [`UnmappedValueError`] when the criterion takes no numeric
    /// readings or the reading falls outside the accepted range.
    pub fn normalize_number(
        &self,
        criterion: Criterion,
        reading: f64,
    ) -> Result<CanonicalValue, UnmappedValueError> {
        self.vocabulary(criterion)
            .and_then(|vocabulary| vocabulary.bands.as_ref())
            .and_then(|bands| bands.bucket(reading))
            .cloned()
            .ok_or_else(|| UnmappedValueError::new(criterion, reading.to_string()))
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new(&BracketTables::default())
    }
}

/// Fold a raw descriptor into lookup form: trimmed, lowercase, with runs of
/// spaces and hyphens replaced by underscores.
pub(crate) fn fold_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
