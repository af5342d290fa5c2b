//! # TDA Landmarks
//!
//! Persistent homology of point clouds via Rips filtrations, and landmark
//! subsampling to make it affordable, for an introductory course in
//! topological data analysis.
//!
//! ## Theoretical Framework
//!
//! Rips persistence of N points needs the full N×N distance matrix and a
//! number of simplices that grows like N³ already for H1. Replacing the
//! cloud X by a subset L ⊂ X costs at most
//!
//!   d_B(Dgm(X), Dgm(L)) ≤ 2 · d_H(X, L)
//!
//! in bottleneck distance (Hausdorff stability), and for a subset the
//! Hausdorff distance is exactly the covering radius of L. Good landmarks
//! are therefore landmarks with a small covering radius.
//!
//! ### Methodology
//!
//! 1. **Datasets**: circle, noisy annulus, trefoil knot, torus
//!
//! 2. **Sampling**: greedy farthest-point (maxmin) traversal versus
//!    uniform draws with replacement, both reporting the covering radius
//!
//! 3. **Persistence**: standard reduction of the Rips boundary matrix,
//!    with ripser-style options (maxdim, threshold, Z/pZ, n_perm)
//!
//! 4. **Comparison**: Hausdorff and bottleneck distances to check the
//!    stability bound on real samples
//!
//! 5. **Plots**: barcodes, persistence diagrams, clouds and complexes
//!
//! ## Lessons
//!
//! `circle_rips`, `annulus_subsampling`, `trefoil_landmarks` and
//! `torus_landmarks` under `src/bin/` each print timings and write SVGs.
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Chazal, de Silva, Oudot, "Persistence stability for geometric complexes" (2014)
//! - de Silva & Carlsson, "Topological estimation using witness complexes" (2004)

pub mod config;
pub mod datasets;
pub mod error;
pub mod metric;
pub mod plot;
pub mod sampling;
pub mod topology;

pub use error::{NotebookError, Result};

pub use config::{LessonArgs, LessonConfig};

// Re-exports from sampling
pub use sampling::{
    covering_radius, covering_radius_profile, maxmin, maxmin_from, uniform, Sample,
};

// Re-exports from topology
pub use topology::{
    ripser, ripser_points, BettiCurve, BettiNumbers, PersistenceDiagram, PersistenceInterval,
    RipsOptions, RipsOutput, VietorisRips,
};

// Re-exports from metric
pub use metric::{bottleneck, directed_hausdorff, euclidean_distance_matrix, hausdorff};

// Re-exports from plot
pub use plot::{
    display_max, plot_barcode, plot_cloud, plot_covering_curves, plot_diagram, plot_rips_complex,
};
