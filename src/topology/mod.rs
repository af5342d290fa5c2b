//! Topology Module: Rips Filtrations and Persistent Homology
//!
//! For a point cloud X we build the filtration of simplicial complexes
//! VR_ε(X) indexed by the scale parameter ε. Persistent homology tracks
//! the birth and death of topological features (connected components,
//! loops, voids) across this filtration.
//!
//! - `vietoris_rips.rs`: the complex at one scale, for drawing it
//! - `ripser.rs`: the persistence engine (standard reduction over Z/pZ)
//! - `diagram.rs`: persistence intervals and diagrams
//! - `betti.rs`: Betti numbers read off a diagram

mod betti;
mod diagram;
mod ripser;
mod vietoris_rips;

pub use betti::{BettiCurve, BettiNumbers};
pub use diagram::{PersistenceDiagram, PersistenceInterval};
pub use ripser::{ripser, ripser_points, RipsOptions, RipsOutput, MAX_SUPPORTED_DIM};
pub use vietoris_rips::VietorisRips;
