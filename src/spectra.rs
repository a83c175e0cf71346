//! Owned row-major storage for a batch of spectra sharing a pixel count.
//!
//! One row per spectrum. Flux and ivar travel as two blocks of identical
//! shape, positionally aligned with a wavelength grid.

/// Row-major `f64` matrix of `n_spectra × n_pixels` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectraBlock {
    /// Number of spectra (rows)
    pub n_spectra: usize,
    /// Number of pixels per spectrum (columns)
    pub n_pixels: usize,
    /// Backing storage in row-major order
    pub data: Vec<f64>,
}

impl SpectraBlock {
    /// Construct a zero-initialized block of `n_spectra × n_pixels`.
    pub fn new(n_spectra: usize, n_pixels: usize) -> Self {
        Self {
            n_spectra,
            n_pixels,
            data: vec![0.0; n_spectra * n_pixels],
        }
    }

    /// Construct from per-spectrum rows. All rows must share one length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n_pixels = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == n_pixels),
            "all spectra must have the same pixel count"
        );
        Self {
            n_spectra: rows.len(),
            n_pixels,
            data: rows.concat(),
        }
    }

    /// True when the block holds the same row/column counts as `other`.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.n_spectra == other.n_spectra && self.n_pixels == other.n_pixels
    }

    /// Borrow one spectrum.
    #[inline]
    pub fn row(&self, s: usize) -> &[f64] {
        let start = s * self.n_pixels;
        &self.data[start..start + self.n_pixels]
    }

    /// Mutably borrow one spectrum.
    #[inline]
    pub fn row_mut(&mut self, s: usize) -> &mut [f64] {
        let start = s * self.n_pixels;
        &mut self.data[start..start + self.n_pixels]
    }

    /// Iterate over spectra in row order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_pixels.max(1))
    }
}
