mod common;

use common::synthetic_spectra::{coarse_grid, mixed_step_grid, native_grid};
use spectra_rebin::grids::{LINEAR_WAVE, LOG_WAVE};
use spectra_rebin::{regrid, GridError};

#[test]
fn log_grid_maps_onto_itself_as_identity() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mapping = regrid(&LOG_WAVE, &LOG_WAVE).expect("canonical log grid is regular");

    let expected: Vec<i64> = (0..443).collect();
    assert_eq!(mapping.bins, expected);
    assert!(mapping.keep.iter().all(|&k| k));
}

#[test]
fn linear_grid_maps_onto_itself_as_identity() {
    // The coarse 13.6 Å grid built by hand matches the canonical linear
    // grid value for value, so the mapping must be the identity.
    let rebuilt: Vec<f64> = (0..458)
        .map(|i| (36000.0 + 136.0 * i as f64) / 10.0)
        .collect();
    let mapping = regrid(&rebuilt, &LINEAR_WAVE).expect("canonical linear grid is regular");

    let expected: Vec<i64> = (0..458).collect();
    assert_eq!(mapping.bins, expected);
    assert!(mapping.keep.iter().all(|&k| k));
}

#[test]
fn native_grid_downsamples_seventeen_to_one() {
    // 17 native 0.8 Å pixels per 13.6 Å bin; 458·17 overshoots the native
    // grid by 5 pixels, so the last bin only collects 12.
    let native = native_grid();
    let mapping = regrid(&native, &LINEAR_WAVE).unwrap();

    let expected: Vec<i64> = (0..458i64)
        .flat_map(|b| std::iter::repeat(b).take(17))
        .take(native.len())
        .collect();
    assert_eq!(expected.len(), 458 * 17 - 5);
    assert_eq!(mapping.bins, expected);
    assert!(mapping.keep.iter().all(|&k| k));
}

#[test]
fn native_grid_onto_log_grid_stays_in_range() {
    let native = native_grid();
    let mapping = regrid(&native, &LOG_WAVE).unwrap();

    assert_eq!(mapping.bins.len(), native.len());
    assert!(mapping.keep.iter().all(|&k| k));
    assert!(mapping.bins.windows(2).all(|w| w[0] <= w[1]));

    // Spot values from an independently computed reference mapping.
    assert_eq!(mapping.bins[0], 0);
    assert_eq!(mapping.bins[16], 1);
    assert_eq!(mapping.bins[1000], 87);
    assert_eq!(mapping.bins[2500], 191);
    assert_eq!(mapping.bins[5000], 324);
    assert_eq!(mapping.bins[7000], 407);
    assert_eq!(mapping.bins[7780], 435);

    // Log bins widen with wavelength: 11 native pixels per bin at the blue
    // end, 28 in the last covered bin.
    let count = |b: i64| mapping.bins.iter().filter(|&&v| v == b).count();
    assert_eq!(count(0), 11);
    assert_eq!(count(1), 10);
    assert_eq!(count(435), 28);
}

#[test]
fn arbitrary_coarse_grid_onto_log_grid() {
    let coarse = coarse_grid();
    let mapping = regrid(&coarse, &LOG_WAVE).unwrap();

    assert_eq!(mapping.bins.len(), 620);
    assert!(mapping.keep.iter().all(|&k| k));
    assert!(mapping.bins.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(mapping.bins[0], 0);
    assert_eq!(mapping.bins[1], 1);
    assert_eq!(mapping.bins[100], 106);
    assert_eq!(mapping.bins[619], 434);
}

#[test]
fn mixed_step_target_is_rejected() {
    let native = native_grid();
    let err = regrid(&native, &mixed_step_grid()).unwrap_err();
    assert!(matches!(err, GridError::IrregularSpacing { .. }));
}
