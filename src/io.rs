//! JSON I/O helpers for spectra files and result summaries.
//!
//! - `load_spectra_json`: read a grid + flux/ivar batch from a JSON file.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! FITS readers and instrument pipelines live upstream; this crate only
//! consumes already-extracted numeric arrays.

use crate::spectra::SpectraBlock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk spectra batch: one shared grid, one flux/ivar row per spectrum.
#[derive(Debug, Deserialize, Serialize)]
pub struct SpectraFile {
    pub grid: Vec<f64>,
    pub flux: Vec<Vec<f64>>,
    pub ivar: Vec<Vec<f64>>,
}

/// A loaded, shape-checked spectra batch.
#[derive(Debug)]
pub struct SpectraSet {
    pub grid: Vec<f64>,
    pub flux: SpectraBlock,
    pub ivar: SpectraBlock,
}

/// Load a spectra batch from JSON and validate its shape.
pub fn load_spectra_json(path: &Path) -> Result<SpectraSet, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let file: SpectraFile = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;

    if file.flux.len() != file.ivar.len() {
        return Err(format!(
            "{}: flux has {} spectra but ivar has {}",
            path.display(),
            file.flux.len(),
            file.ivar.len()
        ));
    }
    let n_pixels = file.grid.len();
    for (name, rows) in [("flux", &file.flux), ("ivar", &file.ivar)] {
        if let Some(row) = rows.iter().find(|r| r.len() != n_pixels) {
            return Err(format!(
                "{}: a {name} row has {} pixels, expected {} (grid length)",
                path.display(),
                row.len(),
                n_pixels
            ));
        }
    }

    Ok(SpectraSet {
        grid: file.grid,
        flux: SpectraBlock::from_rows(&file.flux),
        ivar: SpectraBlock::from_rows(&file.ivar),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
