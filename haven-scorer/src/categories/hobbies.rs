//! Hobbies scoring.
//!
//! Activities and interests are sets on both sides. Credit is the share of
//! wanted values the town offers, where an equivalent offering (sailing for
//! water sports) counts as covering the wish.

use haven_core::{Category, Criterion};

use super::CategoryScorer;
use crate::Rule;

/// Scorer for [`Category::Hobbies`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HobbiesScorer;

impl CategoryScorer for HobbiesScorer {
    fn category(&self) -> Category {
        Category::Hobbies
    }

    fn rule(&self, _criterion: Criterion) -> Rule {
        Rule::Coverage
    }
}
