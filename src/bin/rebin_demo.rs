use serde::{Deserialize, Serialize};
use spectra_rebin::geometry::Geometry;
use spectra_rebin::grids::{LINEAR_WAVE, LOG_WAVE};
use spectra_rebin::io::{load_spectra_json, write_json_file};
use spectra_rebin::{detect_geometry, rebin_block};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RebinToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub target: TargetGridConfig,
    pub output: RebinOutputConfig,
}

/// Which target grid to rebin onto.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGridConfig {
    #[default]
    Log,
    Linear,
    Custom {
        start: f64,
        step: f64,
        len: usize,
        log10: bool,
    },
}

#[derive(Debug, Deserialize)]
pub struct RebinOutputConfig {
    #[serde(rename = "rebinned_json")]
    pub rebinned_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<RebinToolConfig, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let target: Vec<f64> = match config.target {
        TargetGridConfig::Log => LOG_WAVE.clone(),
        TargetGridConfig::Linear => LINEAR_WAVE.clone(),
        TargetGridConfig::Custom {
            start,
            step,
            len,
            log10,
        } => {
            if log10 {
                spectra_rebin::grids::log_uniform(start, step, len)
            } else {
                spectra_rebin::grids::linear_uniform(start, step, len)
            }
        }
    };
    let geometry = detect_geometry(&target).map_err(|e| format!("Bad target grid: {e}"))?;

    let set = load_spectra_json(&config.input)?;
    let (new_flux, new_ivar) = rebin_block(&set.flux, &set.ivar, &set.grid, &target)
        .map_err(|e| format!("Rebinning failed: {e}"))?;

    let covered = new_ivar.data.iter().filter(|&&v| v > 0.0).count();
    let summary = RebinSummary {
        n_spectra: new_flux.n_spectra,
        source_pixels: set.grid.len(),
        target_pixels: target.len(),
        covered_bins: covered,
        geometry,
        grid: target,
        flux: rows_of(&new_flux),
        ivar: rows_of(&new_ivar),
    };
    write_json_file(&config.output.rebinned_json, &summary)?;

    println!(
        "Rebinned {} spectra ({} -> {} pixels) to {}",
        summary.n_spectra,
        summary.source_pixels,
        summary.target_pixels,
        config.output.rebinned_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: rebin_demo <config.json>".to_string()
}

fn rows_of(block: &spectra_rebin::SpectraBlock) -> Vec<Vec<f64>> {
    block.rows().map(<[f64]>::to_vec).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RebinSummary {
    n_spectra: usize,
    source_pixels: usize,
    target_pixels: usize,
    covered_bins: usize,
    geometry: Geometry,
    grid: Vec<f64>,
    flux: Vec<Vec<f64>>,
    ivar: Vec<Vec<f64>>,
}
