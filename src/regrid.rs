//! Grid mapper: assign every source-grid sample to a target-grid bin.
//!
//! Target bins are left-edge half-open intervals in the target grid's own
//! geometry, extended to an idealized infinite grid: bin `b` starts at target
//! point `b`. The continuous bin coordinate is closed-form (constant step),
//! which is why the target grid must pass the regularity check first.

use crate::geometry::{detect_geometry, Geometry, GridError};
use log::debug;
use serde::Serialize;

/// Nudge applied before flooring the continuous bin coordinate. Source
/// points sitting mathematically on a bin edge land a few ulps below the
/// integer when the grids carry decimal rounding; without the nudge they
/// would fall into the bin to the left. Real in-bin offsets are never this
/// small (the finest in-domain ratio is 17 source pixels per bin).
const EDGE_EPS: f64 = 1e-6;

/// Per-source-sample assignment onto a target grid.
///
/// `bins` holds raw, unclamped indices into the idealized extension of the
/// target grid, so a caller can tell "below range" (negative) from "above
/// range" (`>= target_len`). `keep` is true iff the index is in range.
#[derive(Clone, Debug, Serialize)]
pub struct BinMapping {
    pub bins: Vec<i64>,
    pub keep: Vec<bool>,
    pub target_len: usize,
    pub geometry: Geometry,
}

impl BinMapping {
    /// Number of source samples the mapping covers.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of source samples that fall inside the target range.
    pub fn kept(&self) -> usize {
        self.keep.iter().filter(|&&k| k).count()
    }
}

/// Map every wavelength of `source_grid` to a bin of `target_grid`.
///
/// Only the target grid is validated; the source grid may be arbitrary
/// (non-uniform spacing included) since only its values are used. Fails iff
/// the target grid is not regular.
pub fn regrid(source_grid: &[f64], target_grid: &[f64]) -> Result<BinMapping, GridError> {
    let geometry = detect_geometry(target_grid)?;
    let origin = target_grid[0];

    let bins: Vec<i64> = match geometry {
        Geometry::Linear { step } => source_grid
            .iter()
            .map(|&w| ((w - origin) / step + EDGE_EPS).floor() as i64)
            .collect(),
        Geometry::Log { ratio } => {
            let log_step = ratio.ln();
            source_grid
                .iter()
                .map(|&w| ((w / origin).ln() / log_step + EDGE_EPS).floor() as i64)
                .collect()
        }
    };

    let target_len = target_grid.len();
    let keep: Vec<bool> = bins
        .iter()
        .map(|&b| b >= 0 && (b as usize) < target_len)
        .collect();

    let mapping = BinMapping {
        bins,
        keep,
        target_len,
        geometry,
    };
    debug!(
        "regrid: {:?}, {} of {} source samples in range",
        geometry,
        mapping.kept(),
        mapping.len()
    );
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_grid(start: f64, step: f64, len: usize) -> Vec<f64> {
        (0..len).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn identity_mapping_on_a_linear_grid() {
        let grid = linear_grid(3600.0, 10.0, 64);
        let mapping = regrid(&grid, &grid).unwrap();
        let expected: Vec<i64> = (0..64).collect();
        assert_eq!(mapping.bins, expected);
        assert!(mapping.keep.iter().all(|&k| k));
        assert_eq!(mapping.target_len, 64);
    }

    #[test]
    fn mapping_length_follows_the_source_grid() {
        let source = linear_grid(3000.0, 5.0, 1000);
        let target = linear_grid(3600.0, 10.0, 64);
        let mapping = regrid(&source, &target).unwrap();
        assert_eq!(mapping.bins.len(), 1000);
        assert_eq!(mapping.keep.len(), 1000);
    }

    #[test]
    fn out_of_range_indices_are_raw_not_clamped() {
        let target = linear_grid(3600.0, 10.0, 4);
        let source = [3550.0, 3600.0, 3639.9, 3640.0, 3700.0];
        let mapping = regrid(&source, &target).unwrap();
        assert_eq!(mapping.bins, vec![-5, 0, 3, 4, 10]);
        assert_eq!(mapping.keep, vec![false, true, true, false, false]);
    }

    #[test]
    fn exact_edges_belong_to_the_right_bin() {
        // One-decimal values: 3613.6 is the left edge of bin 1 and its
        // continuous coordinate computes to just under 1.0 in f64.
        let target: Vec<f64> = (0..458).map(|i| (36000.0 + 136.0 * i as f64) / 10.0).collect();
        let source = [3613.6, 3627.2, 3681.6];
        let mapping = regrid(&source, &target).unwrap();
        assert_eq!(mapping.bins, vec![1, 2, 6]);
    }

    #[test]
    fn log_target_uses_multiplicative_coordinates() {
        let l0 = 3600.0_f64.log10();
        let target: Vec<f64> = (0..100).map(|i| 10f64.powf(l0 + 1e-3 * i as f64)).collect();
        // A point halfway (geometrically) between target[9] and target[10]
        // belongs to bin 9 under left-edge semantics.
        let w = (target[9] * target[10]).sqrt();
        let mapping = regrid(&[w], &target).unwrap();
        assert_eq!(mapping.bins, vec![9]);
        assert!(mapping.keep[0]);
    }

    #[test]
    fn irregular_target_is_refused() {
        let mut target = linear_grid(3600.0, 10.0, 40);
        target.extend(linear_grid(4000.0, 40.0, 145));
        let source = linear_grid(3600.0, 0.8, 100);
        assert!(matches!(
            regrid(&source, &target),
            Err(GridError::IrregularSpacing { .. })
        ));
    }
}
