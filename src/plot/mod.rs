//! Plot Module: SVG Figures for the Lessons
//!
//! - `barcode.rs`: one bar panel per homological dimension
//! - `diagram.rs`: persistence diagrams (birth vs. death)
//! - `cloud.rs`: point clouds, landmark overlays, Rips complexes at a
//!   fixed scale and covering-radius curves
//!
//! Plots are side effects only; every function returns `Ok(())` once the
//! SVG is on disk.

mod barcode;
mod cloud;
mod diagram;

use plotters::style::{RGBColor, BLUE, GREEN, MAGENTA, RED};

use crate::topology::PersistenceDiagram;

pub use barcode::plot_barcode;
pub use cloud::{plot_cloud, plot_covering_curves, plot_rips_complex};
pub use diagram::plot_diagram;

pub(crate) const PLOT_WIDTH: u32 = 720;
pub(crate) const PANEL_HEIGHT: u32 = 220;

const PALETTE: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

/// Colour of homology dimension (or series) `k`
pub(crate) fn color_for(k: usize) -> RGBColor {
    PALETTE[k % PALETTE.len()]
}

/// Display maximum for a diagram: 10% above its largest finite value
pub fn display_max(pd: &PersistenceDiagram) -> f64 {
    let hi = pd.max_finite_value();
    if hi > 0.0 { hi * 1.1 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::PersistenceInterval;

    #[test]
    fn test_display_max() {
        assert_eq!(display_max(&PersistenceDiagram::new()), 1.0);

        let mut pd = PersistenceDiagram::new();
        pd.add(PersistenceInterval::new(0.0, f64::INFINITY, 0));
        pd.add(PersistenceInterval::new(0.5, 2.0, 1));
        assert!((display_max(&pd) - 2.2).abs() < 1e-12);
    }
}
