//! Culture scoring.
//!
//! English proficiency is an "at least" criterion: a town where more English
//! is spoken than asked for still matches. The remaining lifestyle criteria
//! are ordinal scales scored by exact or adjacent match.

use haven_core::{Category, Criterion};

use super::CategoryScorer;
use crate::Rule;

/// Scorer for [`Category::Culture`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CultureScorer;

impl CategoryScorer for CultureScorer {
    fn category(&self) -> Category {
        Category::Culture
    }

    fn rule(&self, criterion: Criterion) -> Rule {
        match criterion {
            Criterion::EnglishProficiency => Rule::AtLeast,
            _ => Rule::Match,
        }
    }
}
