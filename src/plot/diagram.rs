//! Persistence Diagram Plots
//!
//! Each interval becomes the point (birth, death) above the diagonal.
//! Essential classes are placed on a dashed horizontal "∞" line drawn at
//! the display maximum.

use plotters::prelude::*;
use std::path::Path;

use super::{color_for, PLOT_WIDTH};
use crate::error::{NotebookError, Result};
use crate::topology::PersistenceDiagram;

/// Scatter the diagram's dimensions 0..=maxdim on one set of axes
pub fn plot_diagram(
    path: &Path,
    pd: &PersistenceDiagram,
    maxdim: usize,
    max_display: f64,
    title: &str,
) -> Result<()> {
    if !(max_display.is_finite() && max_display > 0.0) {
        return Err(NotebookError::InvalidParameter(format!(
            "display maximum must be positive and finite, got {}",
            max_display
        )));
    }

    let hi = max_display * 1.08;
    let root = SVGBackend::new(path, (PLOT_WIDTH, PLOT_WIDTH)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..hi, 0f64..hi)?;

    chart
        .configure_mesh()
        .x_desc("birth")
        .y_desc("death")
        .draw()?;

    chart.draw_series(LineSeries::new(vec![(0.0, 0.0), (hi, hi)], BLACK.stroke_width(1)))?;

    // Dashed ∞ line
    let dash = hi / 60.0;
    chart.draw_series((0..30).map(|k| {
        let x0 = 2.0 * k as f64 * dash;
        PathElement::new(
            vec![(x0, max_display), ((x0 + dash).min(hi), max_display)],
            BLACK.mix(0.5).stroke_width(1),
        )
    }))?;
    chart.draw_series(std::iter::once(Text::new(
        "∞".to_string(),
        (hi * 0.01, max_display + hi * 0.035),
        ("sans-serif", 16).into_font(),
    )))?;

    for dim in 0..=maxdim {
        let color = color_for(dim);
        let points: Vec<(f64, f64)> = pd
            .dim(dim)
            .iter()
            .map(|i| {
                let death = if i.is_essential() { max_display } else { i.death.min(max_display) };
                (i.birth.min(max_display), death)
            })
            .collect();

        chart
            .draw_series(points.into_iter().map(move |p| Circle::new(p, 4, color.filled())))?
            .label(format!("H{}", dim))
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
