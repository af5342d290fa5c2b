//! Hausdorff Distance Between Point Clouds
//!
//!   d_H(X, Y) = max( sup_{x∈X} inf_{y∈Y} d(x, y), sup_{y∈Y} inf_{x∈X} d(x, y) )
//!
//! For a subset L ⊆ X the second term vanishes, so d_H(X, L) equals the
//! covering radius of L. Stability of Rips persistence then gives
//!
//!   d_B(Dgm(X), Dgm(L)) ≤ 2 · d_H(X, L)

use ndarray::Array2;

use super::distance::cross_distances;
use crate::error::{NotebookError, Result};

/// Directed Hausdorff distance: max over `a` of the distance to the nearest point of `b`
pub fn directed_hausdorff(a: &Array2<f64>, b: &Array2<f64>) -> Result<f64> {
    if a.nrows() == 0 || b.nrows() == 0 {
        return Err(NotebookError::EmptyCloud);
    }

    let cd = cross_distances(a, b)?;
    Ok(cd
        .rows()
        .into_iter()
        .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
        .fold(0.0, f64::max))
}

/// Symmetric Hausdorff distance
pub fn hausdorff(a: &Array2<f64>, b: &Array2<f64>) -> Result<f64> {
    Ok(directed_hausdorff(a, b)?.max(directed_hausdorff(b, a)?))
}

/// Hausdorff distance between a full cloud and a subset of its own points,
/// read straight off the precomputed distance matrix
pub fn hausdorff_to_subset(dm: &Array2<f64>, indices: &[usize]) -> Result<f64> {
    if indices.is_empty() {
        return Err(NotebookError::EmptySample);
    }
    Ok(crate::sampling::covering_radius(dm, indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::euclidean_distance_matrix;
    use ndarray::array;

    #[test]
    fn test_self_distance_zero() {
        let a = array![[0.0, 0.0], [1.0, 2.0], [3.0, -1.0]];
        assert_eq!(hausdorff(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_directed_is_asymmetric() {
        // b is a strict subset of a
        let a = array![[0.0, 0.0], [10.0, 0.0]];
        let b = array![[0.0, 0.0]];

        assert_eq!(directed_hausdorff(&b, &a).unwrap(), 0.0);
        assert!((directed_hausdorff(&a, &b).unwrap() - 10.0).abs() < 1e-12);
        assert!((hausdorff(&a, &b).unwrap() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_subset_matches_point_version() {
        let a = array![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 3.0]];
        let dm = euclidean_distance_matrix(&a);
        let idx = [0, 3];
        let b = a.select(ndarray::Axis(0), &idx);

        let from_matrix = hausdorff_to_subset(&dm, &idx).unwrap();
        let from_points = hausdorff(&a, &b).unwrap();
        assert!((from_matrix - from_points).abs() < 1e-12);
    }

    #[test]
    fn test_empty_rejected() {
        let a = array![[0.0, 0.0]];
        let empty = Array2::<f64>::zeros((0, 2));
        assert!(hausdorff(&a, &empty).is_err());
    }
}
