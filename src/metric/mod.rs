//! Metric Module: Distances Between Points, Clouds and Diagrams
//!
//! - `distance.rs`: dense Euclidean distance matrices
//! - `hausdorff.rs`: Hausdorff distance between point clouds
//! - `bottleneck.rs`: bottleneck distance between persistence diagrams
//!
//! Together they make the stability theorem checkable on real data:
//!
//!   d_B(Dgm(X), Dgm(L)) ≤ 2 · d_H(X, L)

mod bottleneck;
mod distance;
mod hausdorff;

pub use bottleneck::{bottleneck, bottleneck_finite};
pub use distance::{
    check_square, cross_distances, euclidean, euclidean_distance_matrix, select_points,
    submatrix,
};
pub use hausdorff::{directed_hausdorff, hausdorff, hausdorff_to_subset};
