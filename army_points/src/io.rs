use std::fs;
use std::path::Path;

use crate::army_list::parse_army_list;
use crate::cost_table::parse_cost_table;
use crate::error::{PointsError, Result};
use crate::models::{ArmyList, CostTable};

/// Checks if a path exists
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Fails with [`PointsError::FileNotFound`] unless `path` is an existing file.
pub fn require_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path_exists(path) && path.is_file() {
        Ok(())
    } else {
        Err(PointsError::FileNotFound(path.to_path_buf()))
    }
}

fn read_text(path: &Path) -> Result<String> {
    require_file(path)?;
    fs::read_to_string(path).map_err(|source| PointsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_cost_table<P: AsRef<Path>>(path: P) -> Result<CostTable> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let table = parse_cost_table(text.lines());
    log::info!(
        "Loaded {} faction(s) from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

pub fn read_army_list<P: AsRef<Path>>(path: P) -> Result<ArmyList> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let list = parse_army_list(text.lines())?;
    log::info!(
        "Loaded {} entries for '{}' from {}",
        list.entries.len(),
        list.faction,
        path.display()
    );
    Ok(list)
}
