//! Output formatting shared by the subcommands.

use std::io::Write;

use haven_core::{Criterion, MatchResult, OverallScore};
use serde::Serialize;

use crate::CliError;

/// Presentation band for an overall score.
pub(crate) const fn band(score: u8) -> &'static str {
    match score {
        80.. => "excellent",
        60..=79 => "good",
        _ => "fair",
    }
}

/// One-line summary of a match, e.g. `Porto (porto): 87 excellent`.
///
/// Criteria the town had no value for are appended as
/// `(missing: rent, safety)`.
pub(crate) fn summary(result: &MatchResult) -> String {
    let label = if result.town_name.is_empty() {
        result.town_id.clone()
    } else {
        format!("{} ({})", result.town_name, result.town_id)
    };
    let line = match result.overall {
        OverallScore::Scored { score } => format!("{label}: {score} {}", band(score)),
        OverallScore::NotRanked => format!("{label}: not ranked (no preferences stated)"),
    };
    let missing: Vec<&str> = result.missing_attributes().map(Criterion::as_str).collect();
    if missing.is_empty() {
        line
    } else {
        format!("{line} (missing: {})", missing.join(", "))
    }
}

pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    write_line(writer, &payload)
}

pub(crate) fn write_line(writer: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writer
        .write_all(line.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
