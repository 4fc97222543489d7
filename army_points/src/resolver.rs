//! Resolves requested faction and unit names against a cost table.
//!
//! Names are matched approximately: the single best-scoring canonical name is
//! taken as long as it clears the cutoff. With the default cutoff of 0 some
//! name is always picked when the faction has any units at all.

use crate::error::{PointsError, Result};
use crate::models::{ArmyList, CostTable, PointsReport, ResolvedEntry, UnitTable};
use crate::similarity::best_match;
use log::{debug, info};

/// Matching policy for faction and unit names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolver {
    cutoff: f64,
}

impl Default for Resolver {
    fn default() -> Self {
        Self { cutoff: 0.0 }
    }
}

impl Resolver {
    /// Creates a resolver rejecting matches that score below `cutoff`.
    pub fn new(cutoff: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(PointsError::InvalidCutoff(cutoff));
        }
        Ok(Self { cutoff })
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Canonical faction name closest to `requested`.
    pub fn resolve_faction<'t>(&self, requested: &str, table: &'t CostTable) -> Result<&'t str> {
        let faction = best_match(requested, table.factions(), self.cutoff).ok_or_else(|| {
            PointsError::FactionNotFound {
                faction: requested.to_string(),
            }
        })?;

        if faction != requested {
            info!("Faction '{requested}' matched to '{faction}'");
        }
        Ok(faction)
    }

    /// Matches `requested` to a unit and picks the smallest tier that holds
    /// `quantity` models.
    ///
    /// Tiers are scanned in document order, so a quantity equal to a tier's
    /// limit resolves to that tier.
    pub fn resolve_unit(
        &self,
        quantity: u32,
        requested: &str,
        units: &UnitTable,
    ) -> Result<ResolvedEntry> {
        let name = best_match(requested, units.keys().map(String::as_str), self.cutoff)
            .ok_or_else(|| PointsError::UnitNotFound {
                name: requested.to_string(),
            })?;

        if name != requested {
            info!("Unit '{requested}' matched to '{name}'");
        }

        units
            .get(name)
            .into_iter()
            .flatten()
            .find(|entry| quantity <= entry.tier)
            .map(|entry| ResolvedEntry {
                tier: entry.tier,
                name: name.to_string(),
                cost: entry.cost,
            })
            .ok_or_else(|| PointsError::QuantityTooGreat {
                quantity,
                name: requested.to_string(),
            })
    }

    /// Prices a whole army list. Stops at the first entry that cannot be
    /// resolved, so a report is either complete or absent.
    pub fn price_list(&self, list: &ArmyList, table: &CostTable) -> Result<PointsReport> {
        let faction = self.resolve_faction(&list.faction, table)?;
        let units = table
            .units(faction)
            .ok_or_else(|| PointsError::FactionNotFound {
                faction: list.faction.clone(),
            })?;

        let entries = list
            .entries
            .iter()
            .map(|entry| self.resolve_unit(entry.quantity, &entry.name, units))
            .collect::<Result<Vec<_>>>()?;

        let report = PointsReport::new(faction.to_string(), entries);
        debug!(
            "Priced {} entries for {}: {} pts",
            report.entries.len(),
            report.faction,
            report.total
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
