//! Town records and their normalized attribute profiles.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::profile::RawSections;
use crate::{
    Attribute, CanonicalValue, Criterion, ProfileError, RawValue, Shape, Taxonomy,
    UnmappedValueError,
};

/// A town record as supplied by the catalog.
///
/// # Examples
/// ```
/// use haven_core::RawTown;
///
/// let town: RawTown = serde_json::from_str(
///     r#"{"id": "valencia", "name": "Valencia", "country": "Spain",
///         "attributes": {"climate": {"summer": "hot"}}}"#,
/// ).unwrap();
/// assert_eq!(town.id, "valencia");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTown {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Country, if known.
    #[serde(default)]
    pub country: Option<String>,
    /// Raw attribute values keyed by category then criterion.
    #[serde(default)]
    pub attributes: RawSections,
}

impl RawTown {
    /// Start a record with the given identifier and display name.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Record a raw attribute under its own category.
    #[must_use]
    pub fn with(mut self, criterion: Criterion, value: impl Into<RawValue>) -> Self {
        self.attributes
            .entry(criterion.category())
            .or_default()
            .insert(criterion, Some(value.into()));
        self
    }

    /// Record the country.
    #[must_use]
    pub fn in_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_owned());
        self
    }
}

/// A town with every attribute normalized.
///
/// Attributes that were `null` or omitted are absent and score as
/// non-matches against any stated preference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TownProfile {
    id: String,
    name: String,
    country: Option<String>,
    attributes: BTreeMap<Criterion, Attribute>,
}

impl TownProfile {
    /// Normalize a raw town record.
    ///
    /// Scalar criteria accept a descriptor or, where the vocabulary has a
    /// numeric scale, a number. Set criteria accept a list or a single
    /// descriptor. Cost criteria accept finite, non-negative amounts.
    ///
    /// # Errors
    /// Returns [`ProfileError`] when the identifier is blank, a criterion is
    /// filed under the wrong category, a value has the wrong shape, or a
    /// value has no canonical mapping.
    pub fn from_raw(raw: &RawTown, taxonomy: &Taxonomy) -> Result<Self, ProfileError> {
        let id = raw.id.trim();
        if id.is_empty() {
            return Err(ProfileError::BlankTownId);
        }
        let mut attributes = BTreeMap::new();
        for (category, section) in &raw.attributes {
            for (criterion, value) in section {
                if criterion.category() != *category {
                    return Err(ProfileError::MisplacedCriterion {
                        criterion: *criterion,
                        category: *category,
                    });
                }
                if let Some(present) = value {
                    attributes.insert(*criterion, normalize_attribute(*criterion, present, taxonomy)?);
                }
            }
        }
        Ok(Self {
            id: id.to_owned(),
            name: raw.name.clone(),
            country: raw.country.clone(),
            attributes,
        })
    }

    /// Town identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country, if known.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Return the attribute for `criterion`, or `None` when absent.
    #[must_use]
    pub fn attribute(&self, criterion: Criterion) -> Option<&Attribute> {
        self.attributes.get(&criterion)
    }
}

fn normalize_attribute(
    criterion: Criterion,
    value: &RawValue,
    taxonomy: &Taxonomy,
) -> Result<Attribute, ProfileError> {
    let mismatch = || ProfileError::ShapeMismatch {
        criterion,
        expected: criterion.shape(),
        found: value.describe(),
    };
    match (criterion.shape(), value) {
        (Shape::Scalar, RawValue::Text(text)) => {
            Ok(Attribute::Scalar(taxonomy.normalize(criterion, text)?))
        }
        (Shape::Scalar, RawValue::Number(reading)) => {
            Ok(Attribute::Scalar(taxonomy.normalize_number(criterion, *reading)?))
        }
        (Shape::Set, RawValue::Text(text)) => {
            Ok(Attribute::Set(BTreeSet::from([taxonomy.normalize(criterion, text)?])))
        }
        (Shape::Set, RawValue::List(items)) => items
            .iter()
            .map(|item| taxonomy.normalize(criterion, item))
            .collect::<Result<BTreeSet<CanonicalValue>, UnmappedValueError>>()
            .map(Attribute::Set)
            .map_err(ProfileError::from),
        (Shape::Amount, RawValue::Number(amount)) => {
            if amount.is_finite() && *amount >= 0.0 {
                Ok(Attribute::Amount(*amount))
            } else {
                Err(UnmappedValueError::new(criterion, value.describe()).into())
            }
        }
        _ => Err(mismatch()),
    }
}
