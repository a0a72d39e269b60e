//! Scoring engine for Haven.
//!
//! The crate turns a validated [`ScoringConfig`] into a [`MatchEngine`] that
//! scores towns against preference profiles:
//! - **Category scorers** apply one comparison [`Rule`] per criterion and
//!   total the points achieved against the points possible. Unspecified
//!   preferences drop out; missing town attributes count against the town
//!   and are logged.
//! - **Aggregation** renormalizes the category weights over the categories
//!   that had a stated preference, yielding a 0-100 score or
//!   [`OverallScore::NotRanked`](haven_core::OverallScore::NotRanked).
//! - **Ranking** scores a catalog in parallel with `rayon` and sorts the
//!   results by score then town id. Records that fail normalization are
//!   excluded with a reason code instead of failing the request.
//!
//! # Examples
//!
//! ```
//! use haven_core::{Criterion, RawPreferences, RawTown};
//! use haven_scorer::MatchEngine;
//!
//! let engine = MatchEngine::from_json(r#"{"partial_credit": 0.5}"#).unwrap();
//! let preferences = RawPreferences::default().with(Criterion::Humidity, "balanced");
//! let town = RawTown::new("porto", "Porto").with(Criterion::Humidity, "humid");
//! let result = engine.score_raw(&preferences, &town).unwrap();
//! assert_eq!(result.overall.score(), Some(50));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
pub mod categories;
mod config;
mod engine;
mod error;
mod primitive;

pub use aggregate::aggregate;
pub use categories::{CategoryScorer, scorer_for};
pub use config::{AdjacencyConfig, ScoringConfig};
pub use engine::{Exclusion, MALFORMED_RECORD, MatchEngine, Ranking};
pub use error::{ConfigLoadError, MatchError};
pub use primitive::Rule;
