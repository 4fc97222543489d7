//! Army list parsing.
//!
//! The first non-blank line names the faction, every further non-blank line is
//! an entry such as `15 Boyz` or just `Warboss` (one model).

use crate::error::{PointsError, Result};
use crate::models::{ArmyList, ListEntry};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref QUANTITY_PREFIX: Regex = Regex::new(r"^\s*(\d+)(.*)").unwrap();
}

/// Parses one entry line. `line_no` is only used for error reporting.
pub fn parse_list_entry(line_no: usize, line: &str) -> Result<ListEntry> {
    let Some(caps) = QUANTITY_PREFIX.captures(line) else {
        debug!("line {line_no}: no quantity, defaulting to 1");
        return Ok(ListEntry {
            quantity: 1,
            name: line.trim().to_string(),
        });
    };

    let quantity = caps[1]
        .parse::<u32>()
        .map_err(|_| PointsError::InvalidQuantity {
            line: line_no,
            value: caps[1].to_string(),
        })?;

    Ok(ListEntry {
        quantity,
        name: caps[2].trim().to_string(),
    })
}

/// Parses the lines of an army list file.
///
/// Fails with [`PointsError::EmptyList`] when there is no faction line.
pub fn parse_army_list<I, S>(lines: I) -> Result<ArmyList>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut faction = None;
    let mut entries = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        if faction.is_none() {
            faction = Some(line.trim().to_string());
            continue;
        }

        let entry = parse_list_entry(index + 1, line)?;
        debug!("line {}: {} x '{}'", index + 1, entry.quantity, entry.name);
        entries.push(entry);
    }

    let faction = faction.ok_or(PointsError::EmptyList)?;
    Ok(ArmyList { faction, entries })
}

#[cfg(test)]
#[path = "army_list_tests.rs"]
mod tests;
