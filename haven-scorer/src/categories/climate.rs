//! Climate scoring.
//!
//! All six climate criteria sit on three-point ordinal scales and use the
//! [`Rule::Match`] comparison: exact values earn full weight, neighbouring
//! values earn partial credit. A town that records a finer descriptor (e.g.
//! `often_cloudy` sunshine) has already been collapsed onto the canonical
//! scale by the normalizer, so it matches exactly.

use haven_core::{Category, Criterion};

use super::CategoryScorer;
use crate::Rule;

/// Scorer for [`Category::Climate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClimateScorer;

impl CategoryScorer for ClimateScorer {
    fn category(&self) -> Category {
        Category::Climate
    }

    fn rule(&self, _criterion: Criterion) -> Rule {
        Rule::Match
    }
}
