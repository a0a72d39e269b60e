//! Categories and the sub-criteria they group.
//!
//! Both enums offer compile-time safety for profile lookups and serialise as
//! lowercase `snake_case` identifiers.
//!
//! # Examples
//! ```
//! use haven_core::{Category, Criterion};
//!
//! assert_eq!(Category::Climate.as_str(), "climate");
//! assert_eq!(Criterion::Sunshine.category(), Category::Climate);
//! assert_eq!(Criterion::SeasonalVariation.to_string(), "seasonal_variation");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownNameError;

/// One of the six top-level preference domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Broad region, landscape and vegetation.
    Region,
    /// Temperatures, humidity, sunshine and rainfall.
    Climate,
    /// Language, community and lifestyle.
    Culture,
    /// Activities and interests a town supports.
    Hobbies,
    /// Healthcare, safety, governance and visas.
    Administration,
    /// Living, housing and healthcare costs.
    Cost,
}

impl Category {
    /// Every category in aggregation order.
    pub const ALL: [Self; 6] = [
        Self::Region,
        Self::Climate,
        Self::Culture,
        Self::Hobbies,
        Self::Administration,
        Self::Cost,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use haven_core::Category;
    ///
    /// assert_eq!(Category::Administration.as_str(), "administration");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Climate => "climate",
            Self::Culture => "culture",
            Self::Hobbies => "hobbies",
            Self::Administration => "administration",
            Self::Cost => "cost",
        }
    }

    /// Iterate over the criteria belonging to this category.
    ///
    /// # Examples
    /// ```
    /// use haven_core::{Category, Criterion};
    ///
    /// let hobbies: Vec<_> = Category::Hobbies.criteria().collect();
    /// assert_eq!(hobbies, vec![Criterion::Activities, Criterion::Interests]);
    /// ```
    pub fn criteria(self) -> impl Iterator<Item = Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(move |criterion| criterion.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNameError::new("category", s))
    }
}

/// How a town records an attribute for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// A single canonical value.
    Scalar,
    /// A set of canonical values, possibly empty.
    Set,
    /// A monetary amount per month.
    Amount,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scalar => "a single value",
            Self::Set => "a list of values",
            Self::Amount => "a monthly amount",
        })
    }
}

/// A single attribute within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Broad world region.
    Region,
    /// Landscape features such as coastline or mountains.
    GeographicFeatures,
    /// Dominant vegetation types.
    Vegetation,
    /// Summer temperatures.
    Summer,
    /// Winter temperatures.
    Winter,
    /// Humidity level.
    Humidity,
    /// Amount of sunshine.
    Sunshine,
    /// Amount of rainfall.
    Precipitation,
    /// Difference between the seasons.
    SeasonalVariation,
    /// How widely English is spoken.
    EnglishProficiency,
    /// Size of the expatriate community.
    ExpatCommunity,
    /// Everyday pace of life.
    PaceOfLife,
    /// Rural to urban setting.
    UrbanRural,
    /// Restaurants and nightlife.
    DiningNightlife,
    /// Frequency of cultural events.
    CulturalEvents,
    /// Physical activities.
    Activities,
    /// Leisure interests.
    Interests,
    /// Healthcare quality.
    Healthcare,
    /// Personal safety.
    Safety,
    /// Efficiency of public administration.
    GovernmentEfficiency,
    /// Political stability.
    PoliticalStability,
    /// Ease of obtaining residence visas.
    VisaAccess,
    /// Monthly cost of living.
    LivingCost,
    /// Monthly rent.
    Rent,
    /// Monthly healthcare spend.
    HealthcareCost,
}

impl Criterion {
    /// Every criterion, grouped by category.
    pub const ALL: [Self; 25] = [
        Self::Region,
        Self::GeographicFeatures,
        Self::Vegetation,
        Self::Summer,
        Self::Winter,
        Self::Humidity,
        Self::Sunshine,
        Self::Precipitation,
        Self::SeasonalVariation,
        Self::EnglishProficiency,
        Self::ExpatCommunity,
        Self::PaceOfLife,
        Self::UrbanRural,
        Self::DiningNightlife,
        Self::CulturalEvents,
        Self::Activities,
        Self::Interests,
        Self::Healthcare,
        Self::Safety,
        Self::GovernmentEfficiency,
        Self::PoliticalStability,
        Self::VisaAccess,
        Self::LivingCost,
        Self::Rent,
        Self::HealthcareCost,
    ];

    /// Return the category owning this criterion.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Region | Self::GeographicFeatures | Self::Vegetation => Category::Region,
            Self::Summer
            | Self::Winter
            | Self::Humidity
            | Self::Sunshine
            | Self::Precipitation
            | Self::SeasonalVariation => Category::Climate,
            Self::EnglishProficiency
            | Self::ExpatCommunity
            | Self::PaceOfLife
            | Self::UrbanRural
            | Self::DiningNightlife
            | Self::CulturalEvents => Category::Culture,
            Self::Activities | Self::Interests => Category::Hobbies,
            Self::Healthcare
            | Self::Safety
            | Self::GovernmentEfficiency
            | Self::PoliticalStability
            | Self::VisaAccess => Category::Administration,
            Self::LivingCost | Self::Rent | Self::HealthcareCost => Category::Cost,
        }
    }

    /// Return the shape of the town attribute for this criterion.
    ///
    /// # Examples
    /// ```
    /// use haven_core::{Criterion, Shape};
    ///
    /// assert_eq!(Criterion::Activities.shape(), Shape::Set);
    /// assert_eq!(Criterion::Rent.shape(), Shape::Amount);
    /// assert_eq!(Criterion::Winter.shape(), Shape::Scalar);
    /// ```
    #[must_use]
    pub const fn shape(self) -> Shape {
        match self {
            Self::GeographicFeatures | Self::Vegetation | Self::Activities | Self::Interests => {
                Shape::Set
            }
            Self::LivingCost | Self::Rent | Self::HealthcareCost => Shape::Amount,
            _ => Shape::Scalar,
        }
    }

    /// Return the criterion as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::GeographicFeatures => "geographic_features",
            Self::Vegetation => "vegetation",
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::Humidity => "humidity",
            Self::Sunshine => "sunshine",
            Self::Precipitation => "precipitation",
            Self::SeasonalVariation => "seasonal_variation",
            Self::EnglishProficiency => "english_proficiency",
            Self::ExpatCommunity => "expat_community",
            Self::PaceOfLife => "pace_of_life",
            Self::UrbanRural => "urban_rural",
            Self::DiningNightlife => "dining_nightlife",
            Self::CulturalEvents => "cultural_events",
            Self::Activities => "activities",
            Self::Interests => "interests",
            Self::Healthcare => "healthcare",
            Self::Safety => "safety",
            Self::GovernmentEfficiency => "government_efficiency",
            Self::PoliticalStability => "political_stability",
            Self::VisaAccess => "visa_access",
            Self::LivingCost => "living_cost",
            Self::Rent => "rent",
            Self::HealthcareCost => "healthcare_cost",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownNameError::new("criterion", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Category::Hobbies.to_string(), Category::Hobbies.as_str());
        assert_eq!(Criterion::PaceOfLife.to_string(), Criterion::PaceOfLife.as_str());
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Category::from_str("weather").expect_err("unknown category");
        assert!(err.to_string().contains("unknown category"));
    }

    #[rstest]
    #[case("Climate", Category::Climate)]
    #[case(" cost ", Category::Cost)]
    fn parsing_ignores_case_and_padding(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(Category::from_str(raw).expect("known category"), expected);
    }

    #[rstest]
    fn every_criterion_round_trips_through_its_name() {
        for criterion in Criterion::ALL {
            assert_eq!(Criterion::from_str(criterion.as_str()), Ok(criterion));
        }
    }

    #[rstest]
    #[case(Category::Region, 3)]
    #[case(Category::Climate, 6)]
    #[case(Category::Culture, 6)]
    #[case(Category::Hobbies, 2)]
    #[case(Category::Administration, 5)]
    #[case(Category::Cost, 3)]
    fn categories_own_their_criteria(#[case] category: Category, #[case] expected: usize) {
        assert_eq!(category.criteria().count(), expected);
    }
}
