pub mod synthetic_spectra;
