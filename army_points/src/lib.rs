//! Army Points - tabletop army list calculator
//!
//! Parses a plain-text points document into a faction / unit / tier table and
//! prices a user's army list against it, tolerating misspelled names.

pub mod army_list;
pub mod cost_table;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod resolver;
pub mod similarity;

use std::path::Path;

pub use army_list::parse_army_list;
pub use cost_table::parse_cost_table;
pub use error::{PointsError, Result};
pub use formatters::{format_report, format_report_json, render, OutputFormat};
pub use io::{read_army_list, read_cost_table};
pub use models::{ArmyList, CostEntry, CostTable, ListEntry, PointsReport, ResolvedEntry};
pub use resolver::Resolver;

/// Default location of the points document.
pub const DEFAULT_POINTS_FILE: &str = "./points.txt";

/// Loads both files and prices the list.
///
/// Both paths are checked before either file is parsed.
pub fn price_files<P, Q>(points_file: P, list_file: Q, resolver: &Resolver) -> Result<PointsReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    io::require_file(&list_file)?;
    io::require_file(&points_file)?;

    let table = read_cost_table(points_file)?;
    let list = read_army_list(list_file)?;
    resolver.price_list(&list, &table)
}
