//! Point Clouds, Rips Complexes and Covering-Radius Curves
//!
//! All clouds are drawn in their first two coordinates; 3-D datasets
//! (trefoil, torus) appear as their projection onto the xy-plane.

use ndarray::Array2;
use plotters::prelude::*;
use std::path::Path;
use tracing::warn;

use super::{color_for, PLOT_WIDTH};
use crate::error::{NotebookError, Result};
use crate::topology::VietorisRips;

/// Shaded triangles per complex plot; denser complexes are thinned evenly
const MAX_DRAWN_TRIANGLES: usize = 4000;

/// Padded square bounding box of the first two coordinates
fn bounds(points: &Array2<f64>) -> Result<(std::ops::Range<f64>, std::ops::Range<f64>)> {
    if points.nrows() == 0 {
        return Err(NotebookError::EmptyCloud);
    }
    if points.ncols() < 2 {
        return Err(NotebookError::DimensionMismatch(points.ncols(), 2));
    }

    let column = |c: usize| {
        points.column(c).iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    };
    let (x0, x1) = column(0);
    let (y0, y1) = column(1);

    // Same span on both axes so circles look round
    let half = ((x1 - x0).max(y1 - y0) / 2.0).max(1e-9) * 1.1;
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    Ok((cx - half..cx + half, cy - half..cy + half))
}

/// Scatter a cloud, highlighting `landmarks` if given
pub fn plot_cloud(
    path: &Path,
    points: &Array2<f64>,
    landmarks: Option<&[usize]>,
    title: &str,
) -> Result<()> {
    let (xr, yr) = bounds(points)?;
    if let Some(&bad) = landmarks.into_iter().flatten().find(|&&i| i >= points.nrows()) {
        return Err(NotebookError::InvalidParameter(format!(
            "landmark index {} out of range for {} points",
            bad,
            points.nrows()
        )));
    }

    let root = SVGBackend::new(path, (PLOT_WIDTH, PLOT_WIDTH)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(15)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(xr, yr)?;
    chart.configure_mesh().draw()?;

    let base = if landmarks.is_some() { BLACK.mix(0.3) } else { color_for(0).to_rgba() };
    chart.draw_series(
        points
            .rows()
            .into_iter()
            .map(|p| Circle::new((p[0], p[1]), 2, base.filled())),
    )?;

    if let Some(idx) = landmarks {
        let highlight = color_for(1);
        chart.draw_series(
            idx.iter()
                .map(|&i| Circle::new((points[[i, 0]], points[[i, 1]]), 4, highlight.filled())),
        )?;
    }

    root.present()?;
    Ok(())
}

/// Draw the Rips complex at scale ε: shaded triangles, edges, vertices
pub fn plot_rips_complex(
    path: &Path,
    points: &Array2<f64>,
    epsilon: f64,
    title: &str,
) -> Result<()> {
    let (xr, yr) = bounds(points)?;
    let vr = VietorisRips::from_points(points);
    let xy = |i: usize| (points[[i, 0]], points[[i, 1]]);

    let root = SVGBackend::new(path, (PLOT_WIDTH, PLOT_WIDTH)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{} (ε = {:.3})", title, epsilon), ("sans-serif", 20).into_font())
        .margin(15)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(xr, yr)?;
    chart.configure_mesh().draw()?;

    let triangles = vr.triangles_at(epsilon);
    let stride = triangles.len().div_ceil(MAX_DRAWN_TRIANGLES).max(1);
    if stride > 1 {
        warn!(
            total = triangles.len(),
            drawn = triangles.len().div_ceil(stride),
            epsilon,
            "thinning triangles in complex plot"
        );
    }

    let fill = color_for(1).mix(0.15);
    chart.draw_series(
        triangles
            .into_iter()
            .step_by(stride)
            .map(|(i, j, k)| Polygon::new(vec![xy(i), xy(j), xy(k)], fill.filled())),
    )?;

    chart.draw_series(
        vr.edges_at(epsilon)
            .into_iter()
            .map(|(i, j)| PathElement::new(vec![xy(i), xy(j)], BLACK.mix(0.6).stroke_width(1))),
    )?;

    let vertex = color_for(0);
    chart.draw_series((0..vr.n_points()).map(|i| Circle::new(xy(i), 3, vertex.filled())))?;

    root.present()?;
    Ok(())
}

/// Covering radius (y) against landmark count (x), one line per heuristic
pub fn plot_covering_curves(
    path: &Path,
    curves: &[(&str, Vec<(f64, f64)>)],
    title: &str,
) -> Result<()> {
    let x_max = curves
        .iter()
        .flat_map(|(_, c)| c.iter().map(|p| p.0))
        .fold(1.0, f64::max);
    let y_max = curves
        .iter()
        .flat_map(|(_, c)| c.iter().map(|p| p.1))
        .filter(|v| v.is_finite())
        .fold(1e-9, f64::max);

    let root = SVGBackend::new(path, (PLOT_WIDTH, PLOT_WIDTH * 3 / 4)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max * 1.05)?;

    chart
        .configure_mesh()
        .x_desc("landmarks")
        .y_desc("covering radius")
        .draw()?;

    for (k, (name, curve)) in curves.iter().enumerate() {
        let color = color_for(k);
        chart
            .draw_series(LineSeries::new(curve.iter().copied(), color.stroke_width(2)))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn square() -> Array2<f64> {
        array![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
    }

    #[test]
    fn test_cloud_with_landmarks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.svg");

        plot_cloud(&path, &square(), Some(&[0, 2]), "square").unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.matches("<circle").count() >= 6);
    }

    #[test]
    fn test_complex_draws_triangles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("complex.svg");

        plot_rips_complex(&path, &square(), 1.5, "square").unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<polygon"));
    }

    #[test]
    fn test_landmark_out_of_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cloud.svg");

        assert!(matches!(
            plot_cloud(&path, &square(), Some(&[0, 4]), "square"),
            Err(NotebookError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_dense_complex_is_thinned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dense.svg");
        // 30 points on a circle: every triple is a triangle at ε = 10
        let n = 30;
        let points = Array2::from_shape_fn((n, 2), |(i, c)| {
            let t = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            if c == 0 { t.cos() } else { t.sin() }
        });

        plot_rips_complex(&path, &points, 10.0, "dense").unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        let drawn = svg.matches("<polygon").count();
        assert!(drawn > 0);
        assert!(drawn <= MAX_DRAWN_TRIANGLES, "drew {} triangles", drawn);
    }

    #[test]
    fn test_one_dimensional_cloud_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.svg");
        let line = array![[0.0], [1.0]];

        assert!(matches!(
            plot_cloud(&path, &line, None, "line"),
            Err(NotebookError::DimensionMismatch(1, 2))
        ));
    }

    #[test]
    fn test_covering_curves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curves.svg");
        let curves = vec![
            ("maxmin", vec![(1.0, 2.0), (2.0, 1.0), (3.0, 0.5)]),
            ("uniform", vec![(1.0, 2.5), (2.0, 1.8), (3.0, 1.1)]),
        ];

        plot_covering_curves(&path, &curves, "covering radius").unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("maxmin"));
        assert!(svg.contains("uniform"));
    }
}
