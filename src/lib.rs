#![doc = include_str!("../README.md")]

pub mod geometry;
pub mod grids;
pub mod io;
pub mod rebin;
pub mod regrid;
pub mod spectra;

// --- High-level re-exports -------------------------------------------------

pub use crate::geometry::{detect_geometry, Geometry, GridError};
pub use crate::rebin::{rebin, rebin_block, rebin_block_per_row, rebin_into};
pub use crate::regrid::{regrid, BinMapping};
pub use crate::spectra::SpectraBlock;

/// Small prelude for quick experiments.
///
/// ```
/// use spectra_rebin::prelude::*;
/// use spectra_rebin::grids::LOG_WAVE;
///
/// # fn main() {
/// let mapping = regrid(&LOG_WAVE, &LOG_WAVE).expect("canonical grid is regular");
/// assert_eq!(mapping.kept(), LOG_WAVE.len());
/// # }
/// ```
pub mod prelude {
    pub use crate::geometry::{Geometry, GridError};
    pub use crate::rebin::{rebin, rebin_block, rebin_block_per_row};
    pub use crate::regrid::{regrid, BinMapping};
    pub use crate::spectra::SpectraBlock;
}
