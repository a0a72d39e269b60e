//! Category and criterion weight tables.
//!
//! Both tables are integer percentages. Category weights sum to exactly 100;
//! within each category the criterion weights also sum to exactly 100.
//! Validation happens once, when the tables are built.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Category, ConfigurationError, Criterion};

/// Required total for every weight table.
pub const WEIGHT_TOTAL: u32 = 100;

fn total<'a>(weights: impl Iterator<Item = &'a u32>) -> u32 {
    weights.fold(0_u32, |sum, weight| sum.saturating_add(*weight))
}

/// Weights for the six categories.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use haven_core::{Category, CategoryWeights};
///
/// let weights = CategoryWeights::default();
/// assert_eq!(weights.weight(Category::Climate), 15);
///
/// let mut lopsided = CategoryWeights::default_map();
/// lopsided.insert(Category::Cost, 90);
/// assert!(CategoryWeights::new(lopsided).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryWeights(BTreeMap<Category, u32>);

impl CategoryWeights {
    /// Validate and build category weights.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::MissingCategoryWeight`] when a category
    /// is absent and [`ConfigurationError::CategoryWeightSum`] when the total
    /// is not 100.
    pub fn new(weights: BTreeMap<Category, u32>) -> Result<Self, ConfigurationError> {
        if let Some(category) = Category::ALL
            .into_iter()
            .find(|category| !weights.contains_key(category))
        {
            return Err(ConfigurationError::MissingCategoryWeight { category });
        }
        let sum = total(weights.values());
        if sum != WEIGHT_TOTAL {
            return Err(ConfigurationError::CategoryWeightSum { total: sum });
        }
        Ok(Self(weights))
    }

    /// Weight of `category`.
    #[must_use]
    pub fn weight(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or_default()
    }

    /// Iterate over `(category, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(category, weight)| (*category, *weight))
    }

    /// Built-in category weights.
    #[must_use]
    pub fn default_map() -> BTreeMap<Category, u32> {
        BTreeMap::from([
            (Category::Region, 20),
            (Category::Climate, 15),
            (Category::Culture, 15),
            (Category::Hobbies, 10),
            (Category::Administration, 20),
            (Category::Cost, 20),
        ])
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self(Self::default_map())
    }
}

/// Per-category weights for each criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriterionWeights(BTreeMap<Category, BTreeMap<Criterion, u32>>);

impl CriterionWeights {
    /// Validate and build criterion weights.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when a category has no table, a
    /// criterion is listed under the wrong category or is missing, or a
    /// category's weights do not sum to 100.
    pub fn new(
        weights: BTreeMap<Category, BTreeMap<Criterion, u32>>,
    ) -> Result<Self, ConfigurationError> {
        for category in Category::ALL {
            let Some(table) = weights.get(&category) else {
                return Err(ConfigurationError::MissingCriterionWeights { category });
            };
            if let Some(criterion) = table
                .keys()
                .find(|criterion| criterion.category() != category)
            {
                return Err(ConfigurationError::CriterionOutsideCategory {
                    criterion: *criterion,
                    category,
                });
            }
            if let Some(criterion) = category
                .criteria()
                .find(|criterion| !table.contains_key(criterion))
            {
                return Err(ConfigurationError::MissingCriterionWeight { criterion });
            }
            let sum = total(table.values());
            if sum != WEIGHT_TOTAL {
                return Err(ConfigurationError::CriterionWeightSum {
                    category,
                    total: sum,
                });
            }
        }
        Ok(Self(weights))
    }

    /// Weight of `criterion` within its category.
    ///
    /// # Examples
    /// ```
    /// use haven_core::{Criterion, CriterionWeights};
    ///
    /// let weights = CriterionWeights::default();
    /// assert_eq!(weights.weight(Criterion::Precipitation), 9);
    /// ```
    #[must_use]
    pub fn weight(&self, criterion: Criterion) -> u32 {
        self.0
            .get(&criterion.category())
            .and_then(|table| table.get(&criterion))
            .copied()
            .unwrap_or_default()
    }

    /// Built-in criterion weights.
    #[must_use]
    pub fn default_map() -> BTreeMap<Category, BTreeMap<Criterion, u32>> {
        use Criterion as C;
        BTreeMap::from([
            (
                Category::Region,
                BTreeMap::from([(C::Region, 40), (C::GeographicFeatures, 35), (C::Vegetation, 25)]),
            ),
            (
                Category::Climate,
                BTreeMap::from([
                    (C::Summer, 21),
                    (C::Winter, 21),
                    (C::Humidity, 17),
                    (C::Sunshine, 17),
                    (C::Precipitation, 9),
                    (C::SeasonalVariation, 15),
                ]),
            ),
            (
                Category::Culture,
                BTreeMap::from([
                    (C::EnglishProficiency, 20),
                    (C::ExpatCommunity, 15),
                    (C::PaceOfLife, 20),
                    (C::UrbanRural, 20),
                    (C::DiningNightlife, 10),
                    (C::CulturalEvents, 15),
                ]),
            ),
            (
                Category::Hobbies,
                BTreeMap::from([(C::Activities, 60), (C::Interests, 40)]),
            ),
            (
                Category::Administration,
                BTreeMap::from([
                    (C::Healthcare, 30),
                    (C::Safety, 25),
                    (C::GovernmentEfficiency, 15),
                    (C::PoliticalStability, 15),
                    (C::VisaAccess, 15),
                ]),
            ),
            (
                Category::Cost,
                BTreeMap::from([(C::LivingCost, 50), (C::Rent, 30), (C::HealthcareCost, 20)]),
            ),
        ])
    }
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self(Self::default_map())
    }
}
