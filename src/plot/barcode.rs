//! Barcode Plots
//!
//! One horizontal-bar panel per homological dimension. Bars that never
//! die are clipped at the display maximum and finished with an open
//! arrow head (">") so they read as "continues to ∞".

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

use super::{color_for, PANEL_HEIGHT, PLOT_WIDTH};
use crate::error::{NotebookError, Result};

/// Render `dgms[d]` (the (birth, death) pairs of dimension d) as stacked barcodes
pub fn plot_barcode(path: &Path, dgms: &[Vec<(f64, f64)>], max_display: f64) -> Result<()> {
    if dgms.is_empty() {
        return Err(NotebookError::InvalidParameter(
            "barcode needs at least one dimension".into(),
        ));
    }
    if !(max_display.is_finite() && max_display > 0.0) {
        return Err(NotebookError::InvalidParameter(format!(
            "display maximum must be positive and finite, got {}",
            max_display
        )));
    }

    let height = PANEL_HEIGHT * dgms.len() as u32;
    let root = SVGBackend::new(path, (PLOT_WIDTH, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((dgms.len(), 1));
    for (dim, (panel, bars)) in panels.iter().zip(dgms).enumerate() {
        draw_panel(panel, dim, bars, max_display)?;
    }

    root.present()?;
    Ok(())
}

/// Horizontal extent of one bar after clipping at the display maximum
#[derive(Debug, Clone, Copy, PartialEq)]
struct BarExtent {
    start: f64,
    end: f64,
    /// Death at ∞: drawn to `max_display` and finished with an arrow
    unbounded: bool,
}

fn bar_extent(birth: f64, death: f64, max_display: f64) -> BarExtent {
    let end = if death.is_finite() { death.min(max_display) } else { max_display };
    BarExtent {
        start: birth.min(end),
        end,
        unbounded: death.is_infinite(),
    }
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    dim: usize,
    bars: &[(f64, f64)],
    max_display: f64,
) -> Result<()> {
    let color = color_for(dim);
    let arrow = max_display * 0.02;
    let rows = bars.len().max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("H{}", dim), ("sans-serif", 18).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(10)
        .build_cartesian_2d(0f64..max_display + 2.0 * arrow, -0.5f64..rows - 0.5)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("scale ε")
        .draw()?;

    let extents: Vec<BarExtent> = bars
        .iter()
        .map(|&(birth, death)| bar_extent(birth, death, max_display))
        .collect();

    chart.draw_series(extents.iter().enumerate().map(|(i, bar)| {
        let y = i as f64;
        Rectangle::new([(bar.start, y - 0.35), (bar.end, y + 0.35)], color.filled())
    }))?;

    chart.draw_series(
        extents
            .iter()
            .enumerate()
            .filter(|(_, bar)| bar.unbounded)
            .map(|(i, bar)| {
                let y = i as f64;
                PathElement::new(
                    vec![
                        (bar.end, y + 0.45),
                        (bar.end + arrow, y),
                        (bar.end, y - 0.45),
                    ],
                    BLACK.stroke_width(2),
                )
            }),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polylines(dgms: &[Vec<(f64, f64)>], max_display: f64) -> usize {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("barcode.svg");
        plot_barcode(&path, dgms, max_display).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        svg.matches("<polyline").count()
    }

    #[test]
    fn test_infinite_death_drawn_to_display_max() {
        let bar = bar_extent(0.5, f64::INFINITY, 2.0);
        assert_eq!(bar, BarExtent { start: 0.5, end: 2.0, unbounded: true });
    }

    #[test]
    fn test_long_finite_bar_clipped_without_arrow() {
        let bar = bar_extent(0.5, 3.0, 2.0);
        assert_eq!(bar, BarExtent { start: 0.5, end: 2.0, unbounded: false });

        let inside = bar_extent(0.2, 1.4, 2.0);
        assert_eq!(inside, BarExtent { start: 0.2, end: 1.4, unbounded: false });

        // Born past the display maximum: collapses onto it
        let late = bar_extent(2.5, 3.0, 2.0);
        assert_eq!(late.start, 2.0);
        assert_eq!(late.end, 2.0);
    }

    #[test]
    fn test_one_arrow_per_infinite_bar() {
        let finite = vec![
            vec![(0.0, 0.2), (0.0, 0.5), (0.0, 1.9)],
            vec![(0.3, 1.4), (0.6, 1.8)],
        ];
        let one_infinite = vec![
            vec![(0.0, 0.2), (0.0, 0.5), (0.0, f64::INFINITY)],
            vec![(0.3, 1.4), (0.6, 1.8)],
        ];
        let two_infinite = vec![
            vec![(0.0, 0.2), (0.0, 0.5), (0.0, f64::INFINITY)],
            vec![(0.3, 1.4), (0.6, f64::INFINITY)],
        ];

        let base = polylines(&finite, 2.0);
        assert_eq!(polylines(&one_infinite, 2.0), base + 1);
        assert_eq!(polylines(&two_infinite, 2.0), base + 2);
    }

    #[test]
    fn test_clipped_finite_bar_gets_no_arrow() {
        let inside = vec![vec![(0.0, 0.5), (0.0, 1.5)]];
        let beyond = vec![vec![(0.0, 0.5), (0.0, 7.5)]];

        assert_eq!(polylines(&inside, 2.0), polylines(&beyond, 2.0));
    }

    #[test]
    fn test_empty_dimension_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        plot_barcode(&path, &[vec![(0.0, f64::INFINITY)], vec![]], 1.0).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_rejects_bad_display_max() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.svg");

        assert!(plot_barcode(&path, &[vec![(0.0, 1.0)]], f64::INFINITY).is_err());
        assert!(plot_barcode(&path, &[], 1.0).is_err());
    }
}
