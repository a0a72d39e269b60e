//! Cost scoring.
//!
//! Budget preferences select one or more brackets. A town's monthly amount
//! inside a selected bracket is a full match; within one bracket width of a
//! selected bracket it earns partial credit.

use haven_core::{Category, Criterion};

use super::CategoryScorer;
use crate::Rule;

/// Scorer for [`Category::Cost`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CostScorer;

impl CategoryScorer for CostScorer {
    fn category(&self) -> Category {
        Category::Cost
    }

    fn rule(&self, _criterion: Criterion) -> Rule {
        Rule::Bracket
    }
}
