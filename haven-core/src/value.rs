//! Raw and canonical values recorded against a criterion.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Criterion, ProfileError};

/// A value drawn from a criterion's canonical vocabulary.
///
/// Canonical values are only produced by the [`Taxonomy`](crate::Taxonomy)
/// and by bracket tables, so holding one proves the value was normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalValue(String);

impl CanonicalValue {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A value as it arrives from preference capture or the town catalog.
///
/// JSON strings, numbers and string arrays map onto the three variants;
/// `null` is represented by the surrounding `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A numeric reading, e.g. a 0-10 quality score or a monthly cost.
    Number(f64),
    /// A single descriptor.
    Text(String),
    /// Several descriptors.
    List(Vec<String>),
}

impl RawValue {
    /// Render the value for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<const N: usize> From<[&str; N]> for RawValue {
    fn from(values: [&str; N]) -> Self {
        Self::List(values.iter().map(|value| (*value).to_owned()).collect())
    }
}

impl From<Vec<String>> for RawValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// A user's stated preference for one criterion.
///
/// `Unspecified` means "no opinion" and excludes the criterion from scoring.
/// A `Set` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Preference {
    /// No preference was stated.
    #[default]
    Unspecified,
    /// A single acceptable value.
    Scalar(CanonicalValue),
    /// Several acceptable values (multi-select).
    Set(BTreeSet<CanonicalValue>),
}

impl Preference {
    /// Build a multi-select preference.
    ///
    /// # Errors
    /// Returns [`ProfileError::EmptySet`] when `values` is empty; "no
    /// preference" must be expressed as [`Preference::Unspecified`].
    pub fn set<I>(criterion: Criterion, values: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = CanonicalValue>,
    {
        let set: BTreeSet<_> = values.into_iter().collect();
        if set.is_empty() {
            return Err(ProfileError::EmptySet { criterion });
        }
        Ok(Self::Set(set))
    }

    /// Report whether the preference is unspecified.
    #[must_use]
    pub const fn is_unspecified(&self) -> bool {
        matches!(self, Self::Unspecified)
    }

    /// Iterate over the acceptable values; empty when unspecified.
    pub fn values(&self) -> Box<dyn Iterator<Item = &CanonicalValue> + '_> {
        match self {
            Self::Unspecified => Box::new(std::iter::empty()),
            Self::Scalar(value) => Box::new(std::iter::once(value)),
            Self::Set(values) => Box::new(values.iter()),
        }
    }

    /// Number of acceptable values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Unspecified => 0,
            Self::Scalar(_) => 1,
            Self::Set(values) => values.len(),
        }
    }

    /// Report whether no value is acceptable, which only holds when
    /// unspecified.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_unspecified()
    }
}

/// A measured town attribute for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Attribute {
    /// A single canonical value.
    Scalar(CanonicalValue),
    /// A set of canonical values such as supported activities.
    Set(BTreeSet<CanonicalValue>),
    /// A monthly amount in US dollars.
    Amount(f64),
}
