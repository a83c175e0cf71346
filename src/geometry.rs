//! Grid regularity check: classify a wavelength grid as linear-uniform or
//! log-uniform and extract its step parameter.
//!
//! The bin arithmetic in [`crate::regrid`] is closed-form and only valid on a
//! constant-step grid, so everything downstream funnels through
//! [`detect_geometry`] first.

use serde::Serialize;

/// Relative tolerance on consecutive steps against the mean step. Loose
/// enough to pass grids whose values were rounded to one decimal place,
/// strict enough to reject grids mixing two resolutions.
const STEP_RTOL: f64 = 1e-3;

/// Geometry of a regular wavelength grid.
///
/// Produced once by [`detect_geometry`] and passed around explicitly; the
/// step parameters are the endpoint-based means over the whole grid, which
/// averages out per-point decimal rounding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// Constant additive step: `grid[i+1] - grid[i] == step`.
    Linear { step: f64 },
    /// Constant multiplicative step: `grid[i+1] / grid[i] == ratio`.
    Log { ratio: f64 },
}

/// Reasons why a target grid cannot be used for rebinning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
    TooFewPoints {
        found: usize,
    },
    /// Neither constant-step geometry holds; carries the worst observed
    /// relative deviation under each hypothesis.
    IrregularSpacing {
        linear_dev: f64,
        log_dev: f64,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::TooFewPoints { found } => {
                write!(f, "grid too short ({found} < 2 points)")
            }
            GridError::IrregularSpacing { linear_dev, log_dev } => write!(
                f,
                "grid spacing is neither linear nor log-uniform \
                 (relative step deviation: linear {linear_dev:.2e}, log {log_dev:.2e})"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Classify `grid` as linear- or log-uniform within [`STEP_RTOL`].
///
/// Linear is tried first: a log-uniform grid has visibly growing differences
/// over the spans seen here, so the two hypotheses do not overlap in
/// practice. Requires a strictly increasing grid of length ≥ 2.
pub fn detect_geometry(grid: &[f64]) -> Result<Geometry, GridError> {
    let n = grid.len();
    if n < 2 {
        return Err(GridError::TooFewPoints { found: n });
    }

    let step = (grid[n - 1] - grid[0]) / (n - 1) as f64;
    let linear_dev = max_relative_deviation(grid, step, |w| w[1] - w[0]);
    if step > 0.0 && linear_dev <= STEP_RTOL {
        return Ok(Geometry::Linear { step });
    }

    let mut log_dev = f64::INFINITY;
    if grid[0] > 0.0 {
        let log_step = (grid[n - 1] / grid[0]).ln() / (n - 1) as f64;
        log_dev = max_relative_deviation(grid, log_step, |w| (w[1] / w[0]).ln());
        if log_step > 0.0 && log_dev <= STEP_RTOL {
            return Ok(Geometry::Log {
                ratio: log_step.exp(),
            });
        }
    }

    Err(GridError::IrregularSpacing { linear_dev, log_dev })
}

/// Worst |observed − mean| / mean over consecutive pairs, where `observed`
/// is extracted by `pair_step` from each window of two grid points.
fn max_relative_deviation(grid: &[f64], mean: f64, pair_step: impl Fn(&[f64]) -> f64) -> f64 {
    if mean <= 0.0 {
        return f64::INFINITY;
    }
    grid.windows(2)
        .map(|w| (pair_step(w) - mean).abs() / mean)
        .fold(0.0, f64::max)
}
