//! Test-only fixtures shared by unit, behaviour and benchmark code.
//!
//! The climate regression pair and a small catalog of fully described towns
//! live here so every crate exercises the same data.

use crate::{Criterion, RawPreferences, RawTown};

/// Climate preferences from the climate regression scenario.
///
/// Seasonal variation is left unspecified.
#[must_use]
pub fn regression_preferences() -> RawPreferences {
    RawPreferences::default()
        .with(Criterion::Summer, "mild")
        .with(Criterion::Winter, "mild")
        .with(Criterion::Humidity, "balanced")
        .with(Criterion::Sunshine, "less_sunny")
        .with(Criterion::Precipitation, "balanced")
        .without(Criterion::SeasonalVariation)
}

/// The regression preferences with a precipitation set that omits the
/// town's value but contains its neighbours.
#[must_use]
pub fn regression_variant_preferences() -> RawPreferences {
    regression_preferences().with(Criterion::Precipitation, ["mostly_dry", "less_dry"])
}

/// Town from the climate regression scenario.
///
/// Sunshine is recorded with the finer descriptor `often_cloudy`.
#[must_use]
pub fn regression_town() -> RawTown {
    RawTown::new("regression-town", "Regression Town")
        .with(Criterion::Summer, "mild")
        .with(Criterion::Winter, "mild")
        .with(Criterion::Humidity, "balanced")
        .with(Criterion::Sunshine, "often_cloudy")
        .with(Criterion::Precipitation, "balanced")
}

/// Preferences stating a value for every criterion.
#[must_use]
pub fn full_preferences() -> RawPreferences {
    RawPreferences::default()
        .with(Criterion::Region, "mediterranean")
        .with(Criterion::GeographicFeatures, ["coastal", "mountains"])
        .with(Criterion::Vegetation, ["mediterranean"])
        .with(Criterion::Summer, "warm")
        .with(Criterion::Winter, "mild")
        .with(Criterion::Humidity, "balanced")
        .with(Criterion::Sunshine, "often_sunny")
        .with(Criterion::Precipitation, "mostly_dry")
        .with(Criterion::SeasonalVariation, "moderate")
        .with(Criterion::EnglishProficiency, "moderate")
        .with(Criterion::ExpatCommunity, "moderate")
        .with(Criterion::PaceOfLife, "relaxed")
        .with(Criterion::UrbanRural, "suburban")
        .with(Criterion::DiningNightlife, "moderate")
        .with(Criterion::CulturalEvents, "occasional")
        .with(Criterion::Activities, ["golf", "water_sports", "walking"])
        .with(Criterion::Interests, ["wine", "history"])
        .with(Criterion::Healthcare, "good")
        .with(Criterion::Safety, "good")
        .with(Criterion::GovernmentEfficiency, "functional")
        .with(Criterion::PoliticalStability, "good")
        .with(Criterion::VisaAccess, "moderate")
        .with(Criterion::LivingCost, "2000_2500")
        .with(Criterion::Rent, ["750_1000", "1000_1500"])
        .with(Criterion::HealthcareCost, "100_200")
}

/// A town matching [`full_preferences`] on every criterion.
#[must_use]
pub fn ideal_town() -> RawTown {
    RawTown::new("alicante", "Alicante")
        .in_country("Spain")
        .with(Criterion::Region, "mediterranean")
        .with(Criterion::GeographicFeatures, ["coastal", "mountains", "valley"])
        .with(Criterion::Vegetation, ["mediterranean", "subtropical"])
        .with(Criterion::Summer, "warm")
        .with(Criterion::Winter, "mild")
        .with(Criterion::Humidity, "balanced")
        .with(Criterion::Sunshine, "often_sunny")
        .with(Criterion::Precipitation, "mostly_dry")
        .with(Criterion::SeasonalVariation, "moderate")
        .with(Criterion::EnglishProficiency, "high")
        .with(Criterion::ExpatCommunity, "moderate")
        .with(Criterion::PaceOfLife, "relaxed")
        .with(Criterion::UrbanRural, "suburban")
        .with(Criterion::DiningNightlife, "moderate")
        .with(Criterion::CulturalEvents, "occasional")
        .with(Criterion::Activities, ["golf", "sailing", "hiking", "tennis"])
        .with(Criterion::Interests, ["wine", "museums"])
        .with(Criterion::Healthcare, 8.0)
        .with(Criterion::Safety, "good")
        .with(Criterion::GovernmentEfficiency, "good")
        .with(Criterion::PoliticalStability, "good")
        .with(Criterion::VisaAccess, "easy")
        .with(Criterion::LivingCost, 2200.0)
        .with(Criterion::Rent, 900.0)
        .with(Criterion::HealthcareCost, 150.0)
}

/// A small catalog with a spread of fits for [`full_preferences`].
#[must_use]
pub fn sample_catalog() -> Vec<RawTown> {
    vec![
        ideal_town(),
        RawTown::new("porto", "Porto")
            .in_country("Portugal")
            .with(Criterion::Region, "southern europe")
            .with(Criterion::GeographicFeatures, ["coastal", "river"])
            .with(Criterion::Vegetation, ["forest"])
            .with(Criterion::Summer, "warm")
            .with(Criterion::Winter, "cool")
            .with(Criterion::Humidity, "humid")
            .with(Criterion::Sunshine, "balanced")
            .with(Criterion::Precipitation, "balanced")
            .with(Criterion::SeasonalVariation, "moderate")
            .with(Criterion::EnglishProficiency, "moderate")
            .with(Criterion::ExpatCommunity, "large")
            .with(Criterion::PaceOfLife, "moderate")
            .with(Criterion::UrbanRural, "urban")
            .with(Criterion::DiningNightlife, "vibrant")
            .with(Criterion::CulturalEvents, "frequent")
            .with(Criterion::Activities, ["walking", "swimming"])
            .with(Criterion::Interests, ["wine", "music"])
            .with(Criterion::Healthcare, "good")
            .with(Criterion::Safety, "good")
            .with(Criterion::GovernmentEfficiency, "functional")
            .with(Criterion::PoliticalStability, "good")
            .with(Criterion::VisaAccess, "easy")
            .with(Criterion::LivingCost, 1900.0)
            .with(Criterion::Rent, 1100.0)
            .with(Criterion::HealthcareCost, 120.0),
        RawTown::new("chiang-mai", "Chiang Mai")
            .in_country("Thailand")
            .with(Criterion::Region, "southeast asia")
            .with(Criterion::GeographicFeatures, ["mountains", "valley"])
            .with(Criterion::Vegetation, ["tropical"])
            .with(Criterion::Summer, "hot")
            .with(Criterion::Winter, "mild")
            .with(Criterion::Humidity, "humid")
            .with(Criterion::Sunshine, "balanced")
            .with(Criterion::Precipitation, "less_dry")
            .with(Criterion::SeasonalVariation, "distinct")
            .with(Criterion::EnglishProficiency, "low")
            .with(Criterion::ExpatCommunity, "large")
            .with(Criterion::PaceOfLife, "relaxed")
            .with(Criterion::UrbanRural, "urban")
            .with(Criterion::DiningNightlife, "vibrant")
            .with(Criterion::CulturalEvents, "frequent")
            .with(Criterion::Activities, ["hiking", "yoga"])
            .with(Criterion::Interests, ["cooking", "markets"])
            .with(Criterion::Healthcare, 6.0)
            .with(Criterion::Safety, "functional")
            .with(Criterion::GovernmentEfficiency, "basic")
            .with(Criterion::PoliticalStability, "functional")
            .with(Criterion::VisaAccess, "moderate")
            .with(Criterion::LivingCost, 1200.0)
            .with(Criterion::Rent, 450.0)
            .with(Criterion::HealthcareCost, 80.0),
        RawTown::new("bergen", "Bergen")
            .in_country("Norway")
            .with(Criterion::Region, "northern europe")
            .with(Criterion::GeographicFeatures, ["coastal", "mountains"])
            .with(Criterion::Summer, "mild")
            .with(Criterion::Winter, "cold")
            .with(Criterion::Humidity, "humid")
            .with(Criterion::Sunshine, "less_sunny")
            .with(Criterion::Precipitation, "less_dry")
            .with(Criterion::Healthcare, "good")
            .with(Criterion::Safety, "good")
            .with(Criterion::LivingCost, 4500.0),
    ]
}

/// A town whose sunshine descriptor has no canonical mapping.
#[must_use]
pub fn unmapped_town() -> RawTown {
    RawTown::new("atlantis", "Atlantis")
        .with(Criterion::Summer, "warm")
        .with(Criterion::Sunshine, "bioluminescent")
}
