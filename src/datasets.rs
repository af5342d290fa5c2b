//! Synthetic Point Clouds for the Lessons
//!
//! Each generator returns an N×d array, one point per row:
//!
//! - **circle**: S¹ with Gaussian jitter, one long H1 bar
//! - **annulus**: area-uniform samples of a thick ring, H1 bar born late
//! - **trefoil**: the (2,3) torus knot in ℝ³, a single loop despite the knotting
//! - **torus**: T² in ℝ³, two H1 bars and one H2 bar
//!
//! All randomness flows through the caller's `Rng` so a seed reproduces
//! the cloud exactly.

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use std::f64::consts::PI;

use crate::error::{NotebookError, Result};

fn angle_distribution() -> Result<Uniform<f64>> {
    Uniform::new(0.0, 2.0 * PI).map_err(|e| NotebookError::InvalidParameter(e.to_string()))
}

fn noise_distribution(noise: f64) -> Result<Normal<f64>> {
    Normal::new(0.0, noise).map_err(|e| NotebookError::InvalidParameter(e.to_string()))
}

/// `n` points on a circle of radius `radius`, jittered by N(0, noise²) per coordinate
pub fn circle<R: Rng + ?Sized>(n: usize, radius: f64, noise: f64, rng: &mut R) -> Result<Array2<f64>> {
    let angle = angle_distribution()?;
    let jitter = noise_distribution(noise)?;

    let mut points = Array2::<f64>::zeros((n, 2));
    for mut row in points.rows_mut() {
        let theta = angle.sample(rng);
        row[0] = radius * theta.cos() + jitter.sample(rng);
        row[1] = radius * theta.sin() + jitter.sample(rng);
    }
    Ok(points)
}

/// `n` points uniform by area in the ring r_inner ≤ |x| ≤ r_outer
pub fn annulus<R: Rng + ?Sized>(n: usize, r_inner: f64, r_outer: f64, rng: &mut R) -> Result<Array2<f64>> {
    if !(0.0 <= r_inner && r_inner < r_outer) {
        return Err(NotebookError::InvalidParameter(format!(
            "annulus needs 0 <= r_inner < r_outer, got {} and {}",
            r_inner, r_outer
        )));
    }

    let angle = angle_distribution()?;
    let (a2, b2) = (r_inner * r_inner, r_outer * r_outer);

    let mut points = Array2::<f64>::zeros((n, 2));
    for mut row in points.rows_mut() {
        let theta = angle.sample(rng);
        // Inverse CDF of the radial density ∝ r
        let r = (a2 + rng.random::<f64>() * (b2 - a2)).sqrt();
        row[0] = r * theta.cos();
        row[1] = r * theta.sin();
    }
    Ok(points)
}

/// `n` points on the trefoil knot
///
///   γ(t) = (sin t + 2 sin 2t, cos t − 2 cos 2t, −sin 3t)
pub fn trefoil<R: Rng + ?Sized>(n: usize, noise: f64, rng: &mut R) -> Result<Array2<f64>> {
    let angle = angle_distribution()?;
    let jitter = noise_distribution(noise)?;

    let mut points = Array2::<f64>::zeros((n, 3));
    for mut row in points.rows_mut() {
        let t = angle.sample(rng);
        row[0] = t.sin() + 2.0 * (2.0 * t).sin() + jitter.sample(rng);
        row[1] = t.cos() - 2.0 * (2.0 * t).cos() + jitter.sample(rng);
        row[2] = -(3.0 * t).sin() + jitter.sample(rng);
    }
    Ok(points)
}

/// `n` points on a torus with tube centre radius `r_major` and tube radius `r_minor`
pub fn torus<R: Rng + ?Sized>(n: usize, r_major: f64, r_minor: f64, rng: &mut R) -> Result<Array2<f64>> {
    if !(0.0 < r_minor && r_minor < r_major) {
        return Err(NotebookError::InvalidParameter(format!(
            "torus needs 0 < r_minor < r_major, got {} and {}",
            r_minor, r_major
        )));
    }

    let angle = angle_distribution()?;

    let mut points = Array2::<f64>::zeros((n, 3));
    for mut row in points.rows_mut() {
        let u = angle.sample(rng);
        let v = angle.sample(rng);
        row[0] = (r_major + r_minor * v.cos()) * u.cos();
        row[1] = (r_major + r_minor * v.cos()) * u.sin();
        row[2] = r_minor * v.sin();
    }
    Ok(points)
}
