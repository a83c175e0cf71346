//! Synthetic grids and spectra for the integration suite.

/// Native instrument grid: 0.8 Å steps from 3600 Å to 9824 Å inclusive
/// (7781 pixels), values stored to one decimal place.
pub fn native_grid() -> Vec<f64> {
    (0..7781).map(|i| round_decimal(3600.0 + 0.8 * i as f64)).collect()
}

/// Linear grid with arbitrary integer start/step, as produced by hand.
pub fn coarse_grid() -> Vec<f64> {
    (0..620).map(|i| 3600.0 + 10.0 * i as f64).collect()
}

/// Deliberately irregular grid: 10 Å steps up to 4000 Å, then 40 Å steps.
pub fn mixed_step_grid() -> Vec<f64> {
    let mut grid: Vec<f64> = (0..40).map(|i| 3600.0 + 10.0 * i as f64).collect();
    grid.extend((0..145).map(|i| 4000.0 + 40.0 * i as f64));
    grid
}

/// A smooth emission-line spectrum on `grid`: unit continuum plus a
/// Gaussian line, with constant unit weights.
pub fn gaussian_line_spectrum(grid: &[f64], center: f64, sigma: f64) -> (Vec<f64>, Vec<f64>) {
    let flux = grid
        .iter()
        .map(|&w| {
            let z = (w - center) / sigma;
            1.0 + 5.0 * (-0.5 * z * z).exp()
        })
        .collect();
    let ivar = vec![1.0; grid.len()];
    (flux, ivar)
}

fn round_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
