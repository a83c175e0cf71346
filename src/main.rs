use spectra_rebin::grids::LOG_WAVE;
use spectra_rebin::rebin;

fn main() {
    // Demo stub: rebins a flat synthetic spectrum on the native 0.8 Å grid
    // onto the canonical log classifier grid.
    let source_grid: Vec<f64> = (0..7781).map(|i| 3600.0 + 0.8 * i as f64).collect();
    let flux = vec![1.0; source_grid.len()];
    let ivar = vec![4.0; source_grid.len()];

    match rebin(&flux, &ivar, &source_grid, &LOG_WAVE) {
        Ok((new_flux, new_ivar)) => {
            let covered = new_ivar.iter().filter(|&&v| v > 0.0).count();
            println!(
                "rebinned {} -> {} pixels ({} covered), flux[0]={:.3}",
                flux.len(),
                new_flux.len(),
                covered,
                new_flux[0]
            );
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
