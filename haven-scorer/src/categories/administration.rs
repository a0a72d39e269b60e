//! Administration scoring.
//!
//! Healthcare, safety, government efficiency, political stability and visa
//! access are all "at least" criteria: a town that beats the stated level is
//! a full match, one level short earns partial credit.

use haven_core::{Category, Criterion};

use super::CategoryScorer;
use crate::Rule;

/// Scorer for [`Category::Administration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AdministrationScorer;

impl CategoryScorer for AdministrationScorer {
    fn category(&self) -> Category {
        Category::Administration
    }

    fn rule(&self, _criterion: Criterion) -> Rule {
        Rule::AtLeast
    }
}
