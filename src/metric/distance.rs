//! Dense Euclidean Distance Matrices
//!
//! Every other stage of the pipeline (sampling, the Rips engine, the
//! display complex) works on a precomputed N×N matrix. Holding it in
//! memory is the dominant cost of the whole lesson, which is what
//! motivates landmark subsampling in the first place.

use ndarray::{Array2, ArrayView1};

use crate::error::{NotebookError, Result};

/// Euclidean distance between two coordinate rows
#[inline]
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Compute the symmetric pairwise distance matrix of a point cloud
pub fn euclidean_distance_matrix(points: &Array2<f64>) -> Array2<f64> {
    let n = points.nrows();
    let mut dm = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in i + 1..n {
            let dist = euclidean(points.row(i), points.row(j));
            dm[[i, j]] = dist;
            dm[[j, i]] = dist;
        }
    }

    dm
}

/// Distances from every row of `a` to every row of `b` (shape |a|×|b|)
pub fn cross_distances(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if a.ncols() != b.ncols() {
        return Err(NotebookError::DimensionMismatch(a.ncols(), b.ncols()));
    }

    let mut out = Array2::<f64>::zeros((a.nrows(), b.nrows()));
    for (i, p) in a.rows().into_iter().enumerate() {
        for (j, q) in b.rows().into_iter().enumerate() {
            out[[i, j]] = euclidean(p, q);
        }
    }
    Ok(out)
}

/// Number of points described by a distance matrix, rejecting non-square input
pub fn check_square(dm: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = dm.dim();
    if rows != cols {
        return Err(NotebookError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Restrict a distance matrix to the given indices (in order, duplicates kept)
pub fn submatrix(dm: &Array2<f64>, indices: &[usize]) -> Array2<f64> {
    let k = indices.len();
    Array2::from_shape_fn((k, k), |(a, b)| dm[[indices[a], indices[b]]])
}

/// Gather the rows of a point cloud selected by `indices`
pub fn select_points(points: &Array2<f64>, indices: &[usize]) -> Array2<f64> {
    points.select(ndarray::Axis(0), indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_right_triangle() {
        let points = array![[0.0, 0.0], [3.0, 0.0], [0.0, 4.0]];
        let dm = euclidean_distance_matrix(&points);

        assert!((dm[[0, 1]] - 3.0).abs() < 1e-12);
        assert!((dm[[0, 2]] - 4.0).abs() < 1e-12);
        assert!((dm[[1, 2]] - 5.0).abs() < 1e-12);
        assert_eq!(dm[[1, 2]], dm[[2, 1]]);
        for i in 0..3 {
            assert_eq!(dm[[i, i]], 0.0);
        }
    }

    #[test]
    fn test_non_square_rejected() {
        let dm = Array2::<f64>::zeros((3, 4));
        assert!(matches!(
            check_square(&dm),
            Err(NotebookError::NotSquare { rows: 3, cols: 4 })
        ));
    }

    #[test]
    fn test_cross_distances_shape() {
        let a = array![[0.0, 0.0], [1.0, 0.0]];
        let b = array![[0.0, 1.0], [0.0, 2.0], [0.0, 3.0]];
        let cd = cross_distances(&a, &b).unwrap();

        assert_eq!(cd.dim(), (2, 3));
        assert!((cd[[0, 2]] - 3.0).abs() < 1e-12);
        assert!((cd[[1, 0]] - 2.0_f64.sqrt()).abs() < 1e-12);

        let c = array![[0.0, 0.0, 0.0]];
        assert!(cross_distances(&a, &c).is_err());
    }

    #[test]
    fn test_submatrix_keeps_order() {
        let points = array![[0.0], [1.0], [3.0]];
        let dm = euclidean_distance_matrix(&points);
        let sub = submatrix(&dm, &[2, 0]);

        assert_eq!(sub.dim(), (2, 2));
        assert!((sub[[0, 1]] - 3.0).abs() < 1e-12);
    }
}
