//! Canonical classifier wavelength grids and grid builders.
//!
//! Both canonical grids start at 3600 Å. The log grid steps by 1e-3 in
//! log10-wavelength over 443 points; the linear grid steps by 13.6 Å over
//! 458 points (= 17 native 0.8 Å instrument pixels per bin, values stored to
//! one decimal place). They are immutable process-wide constants and always
//! pass the regularity check.

use std::sync::LazyLock;

/// First wavelength of both canonical grids, in Angstrom.
pub const WAVE_START: f64 = 3600.0;
/// Log10-wavelength step of the canonical log grid.
pub const LOG10_STEP: f64 = 1e-3;
/// Number of pixels in the canonical log grid.
pub const LOG_WAVE_LEN: usize = 443;
/// Additive step of the canonical linear grid, in Angstrom.
pub const LINEAR_STEP: f64 = 13.6;
/// Number of pixels in the canonical linear grid.
pub const LINEAR_WAVE_LEN: usize = 458;

/// 443-point log-uniform classifier grid.
pub static LOG_WAVE: LazyLock<Vec<f64>> =
    LazyLock::new(|| log_uniform(WAVE_START, LOG10_STEP, LOG_WAVE_LEN));

/// 458-point linear classifier grid, values rounded to one decimal place.
pub static LINEAR_WAVE: LazyLock<Vec<f64>> = LazyLock::new(|| {
    linear_uniform(WAVE_START, LINEAR_STEP, LINEAR_WAVE_LEN)
        .into_iter()
        .map(round_decimal)
        .collect()
});

/// Build a log-uniform grid: `10^(log10(start) + i·log10_step)`.
pub fn log_uniform(start: f64, log10_step: f64, len: usize) -> Vec<f64> {
    let l0 = start.log10();
    (0..len)
        .map(|i| 10f64.powf(l0 + log10_step * i as f64))
        .collect()
}

/// Build a linear-uniform grid: `start + i·step`.
pub fn linear_uniform(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Round to one decimal place, matching how instrument grids are published.
#[inline]
fn round_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
