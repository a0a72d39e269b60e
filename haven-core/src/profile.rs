//! User preference profiles.
//!
//! [`RawPreferences`] mirrors what a preference-capture form submits: per
//! category, a map from criterion to a raw value or `null`. Normalizing it
//! yields a [`PreferenceProfile`] whose values are all canonical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    CanonicalValue, Category, Criterion, Preference, ProfileError, RawValue, Taxonomy,
    UnmappedValueError,
};

static UNSPECIFIED: Preference = Preference::Unspecified;

/// Raw values keyed by category then criterion.
pub type RawSections = BTreeMap<Category, BTreeMap<Criterion, Option<RawValue>>>;

/// Preferences as submitted, before normalization.
///
/// # Examples
/// ```
/// use haven_core::{Category, Criterion, RawPreferences};
///
/// let raw: RawPreferences = serde_json::from_str(
///     r#"{"climate": {"summer": "mild", "humidity": null}}"#,
/// ).unwrap();
/// assert_eq!(raw.sections().len(), 1);
/// assert!(raw.sections()[&Category::Climate].contains_key(&Criterion::Humidity));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPreferences(RawSections);

impl RawPreferences {
    /// Record a raw value for `criterion` under its own category.
    #[must_use]
    pub fn with(mut self, criterion: Criterion, value: impl Into<RawValue>) -> Self {
        self.0
            .entry(criterion.category())
            .or_default()
            .insert(criterion, Some(value.into()));
        self
    }

    /// Record an explicit "no preference" for `criterion`.
    #[must_use]
    pub fn without(mut self, criterion: Criterion) -> Self {
        self.0
            .entry(criterion.category())
            .or_default()
            .insert(criterion, None);
        self
    }

    /// Borrow the raw sections.
    #[must_use]
    pub const fn sections(&self) -> &RawSections {
        &self.0
    }
}

impl From<RawSections> for RawPreferences {
    fn from(sections: RawSections) -> Self {
        Self(sections)
    }
}

/// A normalized set of preferences.
///
/// Criteria absent from the profile are [`Preference::Unspecified`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PreferenceProfile {
    preferences: BTreeMap<Criterion, Preference>,
}

impl PreferenceProfile {
    /// Normalize raw preferences.
    ///
    /// # Errors
    /// Returns [`ProfileError`] when a criterion is filed under the wrong
    /// category, a list is empty, or a value has no canonical mapping.
    ///
    /// # Examples
    /// ```
    /// use haven_core::{Criterion, Preference, PreferenceProfile, RawPreferences, Taxonomy};
    ///
    /// let taxonomy = Taxonomy::default();
    /// let raw = RawPreferences::default()
    ///     .with(Criterion::Sunshine, "Often Cloudy")
    ///     .without(Criterion::SeasonalVariation);
    /// let profile = PreferenceProfile::from_raw(&raw, &taxonomy).unwrap();
    /// assert!(matches!(profile.get(Criterion::Sunshine), Preference::Scalar(v) if v.as_str() == "less_sunny"));
    /// assert!(profile.get(Criterion::SeasonalVariation).is_unspecified());
    /// assert!(profile.get(Criterion::Rent).is_unspecified());
    /// ```
    pub fn from_raw(raw: &RawPreferences, taxonomy: &Taxonomy) -> Result<Self, ProfileError> {
        let mut preferences = BTreeMap::new();
        for (category, section) in raw.sections() {
            for (criterion, value) in section {
                if criterion.category() != *category {
                    return Err(ProfileError::MisplacedCriterion {
                        criterion: *criterion,
                        category: *category,
                    });
                }
                let preference = match value {
                    None => Preference::Unspecified,
                    Some(RawValue::Text(text)) => {
                        Preference::Scalar(taxonomy.normalize(*criterion, text)?)
                    }
                    Some(RawValue::Number(reading)) => {
                        Preference::Scalar(taxonomy.normalize_number(*criterion, *reading)?)
                    }
                    Some(RawValue::List(items)) => Preference::set(
                        *criterion,
                        items
                            .iter()
                            .map(|item| taxonomy.normalize(*criterion, item))
                            .collect::<Result<Vec<CanonicalValue>, UnmappedValueError>>()?,
                    )?,
                };
                preferences.insert(*criterion, preference);
            }
        }
        Ok(Self { preferences })
    }

    /// Return the preference for `criterion`.
    #[must_use]
    pub fn get(&self, criterion: Criterion) -> &Preference {
        self.preferences.get(&criterion).unwrap_or(&UNSPECIFIED)
    }

    /// Record a normalized preference.
    #[must_use]
    pub fn with(mut self, criterion: Criterion, preference: Preference) -> Self {
        self.preferences.insert(criterion, preference);
        self
    }

    /// Iterate over the criteria with a stated preference.
    pub fn stated(&self) -> impl Iterator<Item = (Criterion, &Preference)> {
        self.preferences
            .iter()
            .filter(|(_, preference)| !preference.is_unspecified())
            .map(|(criterion, preference)| (*criterion, preference))
    }

    /// Report whether no preference is stated at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.stated().next().is_none()
    }
}
