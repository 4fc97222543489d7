//! Data model shared by the parsers, the resolver and the formatters.

use serde::Serialize;
use std::collections::BTreeMap;

/// One price tier: `cost` points for up to `tier` models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostEntry {
    pub tier: u32,
    pub cost: u32,
}

/// Unit name -> tiers, in document order.
pub type UnitTable = BTreeMap<String, Vec<CostEntry>>;

/// Faction -> unit -> tiers, as parsed from a points document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostTable {
    factions: BTreeMap<String, UnitTable>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tier to `unit` within `faction`, creating both on first use.
    pub fn push(&mut self, faction: &str, unit: &str, entry: CostEntry) {
        self.factions
            .entry(faction.to_string())
            .or_default()
            .entry(unit.to_string())
            .or_default()
            .push(entry);
    }

    /// Faction names in sorted order.
    pub fn factions(&self) -> impl Iterator<Item = &str> {
        self.factions.keys().map(String::as_str)
    }

    pub fn units(&self, faction: &str) -> Option<&UnitTable> {
        self.factions.get(faction)
    }

    pub fn entries(&self, faction: &str, unit: &str) -> Option<&[CostEntry]> {
        self.factions
            .get(faction)
            .and_then(|units| units.get(unit))
            .map(Vec::as_slice)
    }

    /// Number of factions.
    pub fn len(&self) -> usize {
        self.factions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }
}

/// A single line of a user's army list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub quantity: u32,
    pub name: String,
}

/// A parsed army list: requested faction and entries in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmyList {
    pub faction: String,
    pub entries: Vec<ListEntry>,
}

/// A list entry matched against the cost table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub tier: u32,
    pub name: String,
    pub cost: u32,
}

/// Fully priced army list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsReport {
    pub faction: String,
    pub total: u64,
    pub entries: Vec<ResolvedEntry>,
}

impl PointsReport {
    pub fn new(faction: String, entries: Vec<ResolvedEntry>) -> Self {
        let total = entries.iter().map(|e| u64::from(e.cost)).sum();
        Self {
            faction,
            total,
            entries,
        }
    }
}
