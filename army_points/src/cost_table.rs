//! Points document parsing.
//!
//! A points document is loosely structured text:
//!
//! ```text
//! Orks
//! Boyz
//! 10 models 70 pts
//! 20 models 130 pts
//! Warboss 65 pts
//! ```
//!
//! Lines containing the cost marker are cost lines; every other non-blank line
//! is either a faction or a unit name. A name line directly followed by another
//! name line is a faction, a name line followed by a cost line is a unit.

use crate::models::{CostEntry, CostTable};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

/// Substring marking a cost line.
pub const COST_MARKER: &str = "pts";

lazy_static! {
    /// "10 models ... 70 pts"
    static ref TIERED_COST: Regex = Regex::new(r"(\d+) models?.*?(\d+) pts").unwrap();
    /// "Warboss 65 pts"
    static ref NAMED_COST: Regex = Regex::new(r"(.*?)(\d+) pts").unwrap();
}

/// A cost line, as extracted from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostLine {
    /// Tier for whichever unit is current.
    Tiered(CostEntry),
    /// Single-model cost that names its own unit.
    Named { unit: String, entry: CostEntry },
}

/// Parses a line containing the cost marker.
///
/// Returns `None` when neither pattern matches or a number overflows.
pub fn parse_cost_line(line: &str) -> Option<CostLine> {
    if let Some(caps) = TIERED_COST.captures(line) {
        let tier = caps[1].parse().ok()?;
        let cost = caps[2].parse().ok()?;
        return Some(CostLine::Tiered(CostEntry { tier, cost }));
    }

    let caps = NAMED_COST.captures(line)?;
    let cost = caps[2].parse().ok()?;
    Some(CostLine::Named {
        unit: caps[1].trim().to_string(),
        entry: CostEntry { tier: 1, cost },
    })
}

/// Where the parser is within the faction / unit / cost structure.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    /// Nothing seen yet; the first name line is the faction.
    ExpectFaction,
    /// Inside a faction, between units.
    ExpectUnitOrCost,
    /// A name line is pending; the next line decides what it was.
    ExpectCost { pending: String },
}

/// Parser accumulator threaded through every line.
#[derive(Debug)]
struct CostTableParser {
    state: ParseState,
    faction: Option<String>,
    unit: Option<String>,
    table: CostTable,
}

impl CostTableParser {
    fn new() -> Self {
        Self {
            state: ParseState::ExpectFaction,
            faction: None,
            unit: None,
            table: CostTable::new(),
        }
    }

    fn feed(mut self, line_no: usize, line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return self;
        }

        let state = std::mem::replace(&mut self.state, ParseState::ExpectUnitOrCost);
        let is_cost_line = line.contains(COST_MARKER);

        self.state = match (state, is_cost_line) {
            (ParseState::ExpectFaction, false) => {
                debug!("line {line_no}: faction '{line}'");
                self.faction = Some(line.to_string());
                ParseState::ExpectUnitOrCost
            }
            (ParseState::ExpectFaction, true) => {
                warn!("line {line_no}: cost line before any faction, skipping: '{line}'");
                ParseState::ExpectFaction
            }
            (ParseState::ExpectUnitOrCost, false) => ParseState::ExpectCost {
                pending: line.to_string(),
            },
            (ParseState::ExpectUnitOrCost, true) => {
                self.apply_cost_line(line_no, line);
                ParseState::ExpectUnitOrCost
            }
            (ParseState::ExpectCost { pending }, true) => {
                debug!("line {line_no}: unit '{pending}'");
                self.unit = Some(pending);
                self.apply_cost_line(line_no, line);
                ParseState::ExpectUnitOrCost
            }
            (ParseState::ExpectCost { pending }, false) => {
                debug!("line {line_no}: faction '{pending}'");
                self.faction = Some(pending);
                self.unit = None;
                ParseState::ExpectCost {
                    pending: line.to_string(),
                }
            }
        };

        self
    }

    fn apply_cost_line(&mut self, line_no: usize, line: &str) {
        let Some(faction) = self.faction.as_deref() else {
            return;
        };

        match parse_cost_line(line) {
            Some(CostLine::Tiered(entry)) => match self.unit.as_deref() {
                Some(unit) => {
                    debug!(
                        "line {line_no}: {unit} up to {} models for {} pts",
                        entry.tier, entry.cost
                    );
                    self.table.push(faction, unit, entry);
                }
                None => warn!("line {line_no}: tier line without a unit, skipping: '{line}'"),
            },
            Some(CostLine::Named { unit, entry }) => {
                debug!("line {line_no}: {unit} for {} pts", entry.cost);
                self.table.push(faction, &unit, entry);
                self.unit = Some(unit);
            }
            None => warn!("line {line_no}: unrecognised cost line, skipping: '{line}'"),
        }
    }

    fn finish(self) -> CostTable {
        if let ParseState::ExpectCost { pending } = &self.state {
            debug!("trailing name '{pending}' has no costs");
        }
        self.table
    }
}

/// Builds a cost table from the lines of a points document.
///
/// Never fails: lines that cannot be interpreted are logged and skipped.
pub fn parse_cost_table<I, S>(lines: I) -> CostTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .fold(CostTableParser::new(), |parser, (index, line)| {
            parser.feed(index + 1, line.as_ref())
        })
        .finish()
}

#[cfg(test)]
#[path = "cost_table_tests.rs"]
mod tests;
