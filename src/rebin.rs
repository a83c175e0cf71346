//! Flux reducer: aggregate source samples into target bins by
//! inverse-variance weighting.
//!
//! Every output bin collects the kept source samples that map to it:
//! `new_ivar[b] = Σ ivar`, `new_flux[b] = Σ flux·ivar / new_ivar[b]`. Bins
//! with no contribution (or only zero-weight samples) come out as `(0, 0)`,
//! never NaN. Out-of-range samples are dropped via the keep mask — detector
//! arms legitimately cover only part of the target range.

use crate::geometry::GridError;
use crate::regrid::{regrid, BinMapping};
use crate::spectra::SpectraBlock;
use log::debug;

/// Rebin one spectrum through a precomputed mapping into caller buffers.
///
/// `out_flux`/`out_ivar` must have length `mapping.target_len`; previous
/// contents are overwritten.
pub fn rebin_into(
    flux: &[f64],
    ivar: &[f64],
    mapping: &BinMapping,
    out_flux: &mut [f64],
    out_ivar: &mut [f64],
) {
    assert_eq!(flux.len(), ivar.len(), "flux/ivar length mismatch");
    assert_eq!(flux.len(), mapping.len(), "sample/mapping length mismatch");
    assert_eq!(out_flux.len(), mapping.target_len, "output length mismatch");
    assert_eq!(out_ivar.len(), mapping.target_len, "output length mismatch");

    out_flux.fill(0.0);
    out_ivar.fill(0.0);
    for i in 0..flux.len() {
        if !mapping.keep[i] {
            continue;
        }
        let b = mapping.bins[i] as usize;
        out_flux[b] += flux[i] * ivar[i];
        out_ivar[b] += ivar[i];
    }
    for b in 0..out_flux.len() {
        if out_ivar[b] > 0.0 {
            out_flux[b] /= out_ivar[b];
        } else {
            out_flux[b] = 0.0;
        }
    }
}

/// Rebin a single spectrum from `source_grid` onto `out_grid`.
///
/// Fails iff `out_grid` is not regular (propagated from the grid mapper).
pub fn rebin(
    flux: &[f64],
    ivar: &[f64],
    source_grid: &[f64],
    out_grid: &[f64],
) -> Result<(Vec<f64>, Vec<f64>), GridError> {
    assert_eq!(
        flux.len(),
        source_grid.len(),
        "samples must align with the source grid"
    );
    let mapping = regrid(source_grid, out_grid)?;
    let mut out_flux = vec![0.0; out_grid.len()];
    let mut out_ivar = vec![0.0; out_grid.len()];
    rebin_into(flux, ivar, &mapping, &mut out_flux, &mut out_ivar);
    Ok((out_flux, out_ivar))
}

/// Rebin a batch of spectra sharing one source grid.
///
/// The bin mapping is computed once and reused across rows; rows are
/// reduced independently (in parallel with the `parallel` feature).
pub fn rebin_block(
    flux: &SpectraBlock,
    ivar: &SpectraBlock,
    source_grid: &[f64],
    out_grid: &[f64],
) -> Result<(SpectraBlock, SpectraBlock), GridError> {
    assert!(flux.same_shape(ivar), "flux/ivar shape mismatch");
    assert_eq!(
        flux.n_pixels,
        source_grid.len(),
        "samples must align with the source grid"
    );

    let mapping = regrid(source_grid, out_grid)?;
    let mut out_flux = SpectraBlock::new(flux.n_spectra, out_grid.len());
    let mut out_ivar = SpectraBlock::new(flux.n_spectra, out_grid.len());
    reduce_rows(flux, ivar, &mapping, &mut out_flux, &mut out_ivar);
    debug!(
        "rebin_block: {} spectra, {} -> {} pixels",
        flux.n_spectra,
        flux.n_pixels,
        out_grid.len()
    );
    Ok((out_flux, out_ivar))
}

/// Rebin a batch where each spectrum carries its own wavelength grid
/// (`source_grids` row `s` aligns with `flux`/`ivar` row `s`).
///
/// The mapping is recomputed per row; `out_grid` is validated once up front
/// so a bad target fails before any row is touched.
pub fn rebin_block_per_row(
    flux: &SpectraBlock,
    ivar: &SpectraBlock,
    source_grids: &SpectraBlock,
    out_grid: &[f64],
) -> Result<(SpectraBlock, SpectraBlock), GridError> {
    assert!(flux.same_shape(ivar), "flux/ivar shape mismatch");
    assert!(
        flux.same_shape(source_grids),
        "per-row grids must match the sample shape"
    );

    crate::geometry::detect_geometry(out_grid)?;
    let mut out_flux = SpectraBlock::new(flux.n_spectra, out_grid.len());
    let mut out_ivar = SpectraBlock::new(flux.n_spectra, out_grid.len());
    for s in 0..flux.n_spectra {
        // Already validated; per-row failure would be the same error.
        let mapping = regrid(source_grids.row(s), out_grid)?;
        rebin_into(
            flux.row(s),
            ivar.row(s),
            &mapping,
            out_flux.row_mut(s),
            out_ivar.row_mut(s),
        );
    }
    Ok((out_flux, out_ivar))
}

#[cfg(not(feature = "parallel"))]
fn reduce_rows(
    flux: &SpectraBlock,
    ivar: &SpectraBlock,
    mapping: &BinMapping,
    out_flux: &mut SpectraBlock,
    out_ivar: &mut SpectraBlock,
) {
    for s in 0..flux.n_spectra {
        rebin_into(
            flux.row(s),
            ivar.row(s),
            mapping,
            out_flux.row_mut(s),
            out_ivar.row_mut(s),
        );
    }
}

#[cfg(feature = "parallel")]
fn reduce_rows(
    flux: &SpectraBlock,
    ivar: &SpectraBlock,
    mapping: &BinMapping,
    out_flux: &mut SpectraBlock,
    out_ivar: &mut SpectraBlock,
) {
    use rayon::prelude::*;

    let n_in = flux.n_pixels.max(1);
    let n_out = mapping.target_len.max(1);
    out_flux
        .data
        .par_chunks_mut(n_out)
        .zip(out_ivar.data.par_chunks_mut(n_out))
        .zip(
            flux.data
                .par_chunks(n_in)
                .zip(ivar.data.par_chunks(n_in)),
        )
        .for_each(|((of, oi), (f, iv))| rebin_into(f, iv, mapping, of, oi));
}
