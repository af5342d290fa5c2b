//! Sampling Module: Landmark Selection on a Distance Matrix
//!
//! Rips persistence on N points needs the full N×N matrix and, for H1,
//! O(N³) triangles. Replacing X by a landmark set L ⊂ X with small
//! covering radius
//!
//!   r(L) = max_{x∈X} min_{l∈L} d(x, l) = d_H(X, L)
//!
//! keeps the diagram within 2·r(L) of the original in bottleneck distance.
//!
//! Two heuristics:
//!
//! - **maxmin** (greedy farthest-point traversal): deterministic after the
//!   first pick, spreads landmarks evenly, r(L) non-increasing in |L|
//! - **uniform**: independent draws with replacement; cheap but leaves
//!   holes in sparse regions

mod maxmin;
mod uniform;

use ndarray::Array2;

pub use maxmin::{covering_radius_profile, maxmin, maxmin_from};
pub use uniform::uniform;

/// Landmark indices together with their covering radius
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Indices into the original cloud, in selection order
    pub indices: Vec<usize>,
    /// Max over all points of the distance to the nearest landmark
    pub covering_radius: f64,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of distinct indices (uniform samples may repeat points)
    pub fn n_distinct(&self) -> usize {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len()
    }
}

/// Brute-force covering radius of `indices` inside the cloud described by `dm`
pub fn covering_radius(dm: &Array2<f64>, indices: &[usize]) -> f64 {
    (0..dm.nrows())
        .map(|p| {
            indices
                .iter()
                .map(|&l| dm[[p, l]])
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_covering_radius_line() {
        let dm = array![
            [0.0, 1.0, 2.0],
            [1.0, 0.0, 1.0],
            [2.0, 1.0, 0.0]
        ];

        assert_eq!(covering_radius(&dm, &[1]), 1.0);
        assert_eq!(covering_radius(&dm, &[0]), 2.0);
        assert_eq!(covering_radius(&dm, &[0, 1, 2]), 0.0);
    }

    #[test]
    fn test_n_distinct() {
        let s = Sample { indices: vec![3, 1, 3, 0], covering_radius: 0.0 };
        assert_eq!(s.len(), 4);
        assert_eq!(s.n_distinct(), 3);
    }
}
