//! Vietoris-Rips Complex at a Fixed Scale
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! This builder only answers display questions (which edges and triangles
//! to draw at a given ε, how many components are visible). Persistence is
//! computed by the engine in `ripser.rs`.

use ndarray::Array2;
use std::collections::HashSet;

use crate::error::Result;
use crate::metric::{check_square, euclidean_distance_matrix};

/// Rips complex viewer over a precomputed distance matrix
#[derive(Debug, Clone)]
pub struct VietorisRips {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
}

impl VietorisRips {
    /// Create from a precomputed distance matrix
    pub fn from_distance_matrix(distances: &Array2<f64>) -> Result<Self> {
        check_square(distances)?;
        Ok(Self {
            distances: distances.clone(),
        })
    }

    /// Create from point cloud (computes distance matrix)
    pub fn from_points(points: &Array2<f64>) -> Self {
        Self {
            distances: euclidean_distance_matrix(points),
        }
    }

    /// All edges present at scale ε
    pub fn edges_at(&self, epsilon: f64) -> Vec<(usize, usize)> {
        let n = self.distances.nrows();
        let mut edges = Vec::new();

        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] <= epsilon {
                    edges.push((i, j));
                }
            }
        }

        edges
    }

    /// All triangles present at scale ε
    pub fn triangles_at(&self, epsilon: f64) -> Vec<(usize, usize, usize)> {
        let n = self.distances.nrows();
        let mut triangles = Vec::new();

        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] > epsilon {
                    continue;
                }
                for k in j + 1..n {
                    if self.distances[[i, k]] <= epsilon && self.distances[[j, k]] <= epsilon {
                        triangles.push((i, j, k));
                    }
                }
            }
        }

        triangles
    }

    /// Count connected components of the 1-skeleton at scale ε (union-find)
    pub fn count_components_at(&self, epsilon: f64) -> usize {
        let n = self.distances.nrows();
        let mut parent: Vec<usize> = (0..n).collect();
        let mut rank = vec![0usize; n];

        fn find(parent: &mut [usize], i: usize) -> usize {
            if parent[i] != i {
                parent[i] = find(parent, parent[i]);
            }
            parent[i]
        }

        fn union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
            let rx = find(parent, x);
            let ry = find(parent, y);
            if rx != ry {
                if rank[rx] < rank[ry] {
                    parent[rx] = ry;
                } else if rank[rx] > rank[ry] {
                    parent[ry] = rx;
                } else {
                    parent[ry] = rx;
                    rank[rx] += 1;
                }
            }
        }

        for (i, j) in self.edges_at(epsilon) {
            union(&mut parent, &mut rank, i, j);
        }

        let mut roots = HashSet::new();
        for i in 0..n {
            roots.insert(find(&mut parent, i));
        }
        roots.len()
    }

    /// Euler characteristic V − E + F of the 2-skeleton at scale ε
    pub fn euler_characteristic_at(&self, epsilon: f64) -> i64 {
        let v = self.n_points() as i64;
        let e = self.edges_at(epsilon).len() as i64;
        let f = self.triangles_at(epsilon).len() as i64;
        v - e + f
    }

    /// Number of points
    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    pub fn distances(&self) -> &Array2<f64> {
        &self.distances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_triangle() {
        // Equilateral triangle with side 1
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.5, 0.75_f64.sqrt()]
        ];

        let vr = VietorisRips::from_points(&points);

        // At ε < 1, three components
        assert_eq!(vr.count_components_at(0.8), 3);
        assert!(vr.triangles_at(0.8).is_empty());

        // At ε ≥ 1, one component and the filled triangle
        assert_eq!(vr.count_components_at(1.2), 1);
        assert_eq!(vr.edges_at(1.2).len(), 3);
        assert_eq!(vr.triangles_at(1.2), vec![(0, 1, 2)]);
        assert_eq!(vr.euler_characteristic_at(1.2), 1);
    }

    #[test]
    fn test_square_hole() {
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0]
        ];
        let vr = VietorisRips::from_points(&points);

        // Sides only: a hollow square, χ = 4 − 4 + 0 = 0
        assert_eq!(vr.edges_at(1.1).len(), 4);
        assert_eq!(vr.euler_characteristic_at(1.1), 0);

        // Diagonals fill it in: all 6 edges, 4 triangles
        assert_eq!(vr.triangles_at(1.5).len(), 4);
    }

    #[test]
    fn test_rejects_non_square_matrix() {
        assert!(VietorisRips::from_distance_matrix(&Array2::zeros((2, 3))).is_err());
    }
}
