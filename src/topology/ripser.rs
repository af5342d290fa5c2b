//! Rips Persistence Engine
//!
//! Computes persistent homology of the Vietoris-Rips filtration of a
//! distance matrix with a ripser-style interface: maximum homology
//! dimension, distance threshold, prime coefficient field and an optional
//! greedy landmark subsample (`n_perm`).
//!
//! ## Algorithm Overview
//!
//! 1. Enumerate all cliques up to dimension maxdim + 1 with their
//!    diameters as filtration values
//! 2. Sort simplices by (birth, dimension, lexicographic vertices)
//! 3. Reduce the boundary matrix left-to-right over Z/pZ
//! 4. Read persistence pairs off the pivots; unpaired cycles are essential
//!
//! No clearing, cohomology or apparent-pair shortcuts: this is the plain
//! standard algorithm, sized for the few hundred points a lesson uses.
//!
//! ## Reference
//!
//! Edelsbrunner, Letscher, Zomorodian (2002). "Topological Persistence
//! and Simplification". Discrete & Computational Geometry.

use ndarray::Array2;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;
use tracing::debug;

use super::{PersistenceDiagram, PersistenceInterval};
use crate::error::{NotebookError, Result};
use crate::metric::{check_square, euclidean_distance_matrix, submatrix};
use crate::sampling::maxmin_from;

/// Highest homology dimension the engine builds simplices for
pub const MAX_SUPPORTED_DIM: usize = 2;

/// Engine parameters, mirroring the usual Rips front-ends
#[derive(Debug, Clone, PartialEq)]
pub struct RipsOptions {
    /// Maximum homology dimension to compute
    pub maxdim: usize,
    /// Only edges of length ≤ thresh enter the filtration
    pub thresh: f64,
    /// Characteristic of the coefficient field Z/pZ
    pub coeff: u32,
    /// Greedy (maxmin) landmark count; `None` uses every point
    pub n_perm: Option<usize>,
}

impl Default for RipsOptions {
    fn default() -> Self {
        Self {
            maxdim: 1,
            thresh: f64::INFINITY,
            coeff: 2,
            n_perm: None,
        }
    }
}

impl RipsOptions {
    pub fn maxdim(mut self, maxdim: usize) -> Self {
        self.maxdim = maxdim;
        self
    }

    pub fn thresh(mut self, thresh: f64) -> Self {
        self.thresh = thresh;
        self
    }

    pub fn coeff(mut self, coeff: u32) -> Self {
        self.coeff = coeff;
        self
    }

    pub fn n_perm(mut self, n_perm: usize) -> Self {
        self.n_perm = Some(n_perm);
        self
    }
}

/// Output of a persistence computation
#[derive(Debug, Clone)]
pub struct RipsOutput {
    /// Intervals for dimensions 0..=maxdim
    pub diagram: PersistenceDiagram,
    /// Indices of the points the filtration was built on
    pub idx_perm: Vec<usize>,
    /// Covering radius of `idx_perm` (0 when every point is used)
    pub r_cover: f64,
    /// Number of edges in the filtration
    pub num_edges: usize,
}

/// Vertex slots of the largest simplex built (a tetrahedron for H2)
const MAX_VERTICES: usize = MAX_SUPPORTED_DIM + 2;

/// A simplex in the filtration with its birth time
#[derive(Debug, Clone, Copy)]
struct FilteredSimplex {
    /// Vertex indices (sorted), valid up to `len`
    vertices: [usize; MAX_VERTICES],
    len: usize,
    /// Filtration value when simplex appears
    birth: f64,
}

impl FilteredSimplex {
    fn vertex(v: usize) -> Self {
        let mut vertices = [0; MAX_VERTICES];
        vertices[0] = v;
        Self { vertices, len: 1, birth: 0.0 }
    }

    fn vertices(&self) -> &[usize] {
        &self.vertices[..self.len]
    }

    fn dimension(&self) -> usize {
        self.len - 1
    }

    /// Coface with one more (larger) vertex
    fn extend(&self, v: usize, birth: f64) -> Self {
        let mut next = *self;
        next.vertices[self.len] = v;
        next.len += 1;
        next.birth = birth;
        next
    }

    /// Face with vertex `skip` removed
    fn face(&self, skip: usize) -> ([usize; MAX_VERTICES], usize) {
        let mut face = [0; MAX_VERTICES];
        let mut k = 0;
        for (i, &v) in self.vertices().iter().enumerate() {
            if i != skip {
                face[k] = v;
                k += 1;
            }
        }
        (face, k)
    }
}

/// Sparse column over Z/pZ: row index → non-zero coefficient
#[derive(Debug, Clone, Default)]
struct SparseColumn {
    entries: BTreeMap<usize, u64>,
}

impl SparseColumn {
    fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest (maximum) non-zero row with its coefficient
    fn low(&self) -> Option<(usize, u64)> {
        self.entries.iter().next_back().map(|(&r, &c)| (r, c))
    }

    fn add_entry(&mut self, row: usize, value: u64, p: u64) {
        let entry = self.entries.entry(row).or_insert(0);
        *entry = (*entry + value) % p;
        if *entry == 0 {
            self.entries.remove(&row);
        }
    }

    /// self += factor · other (mod p)
    fn add_scaled(&mut self, other: &SparseColumn, factor: u64, p: u64) {
        for (&row, &c) in &other.entries {
            self.add_entry(row, factor * c % p, p);
        }
    }
}

/// Compute Rips persistence of a distance matrix
pub fn ripser(dm: &Array2<f64>, opts: &RipsOptions) -> Result<RipsOutput> {
    let n = check_square(dm)?;
    if n == 0 {
        return Err(NotebookError::EmptyCloud);
    }
    if opts.maxdim > MAX_SUPPORTED_DIM {
        return Err(NotebookError::UnsupportedDimension(opts.maxdim));
    }
    if !is_prime(opts.coeff) {
        return Err(NotebookError::InvalidCoefficient(opts.coeff));
    }

    let start = Instant::now();

    let (idx_perm, r_cover, work) = match opts.n_perm {
        Some(k) if k < n => {
            let sample = maxmin_from(dm, k, 0)?;
            let work = submatrix(dm, &sample.indices);
            (sample.indices, sample.covering_radius, work)
        }
        _ => ((0..n).collect(), 0.0, dm.clone()),
    };

    // Past the enclosing radius the complex is a cone, so nothing changes
    let thresh = opts.thresh.min(enclosing_radius(&work));
    let simplices = build_filtration(&work, thresh, opts.maxdim + 1);
    let num_edges = simplices.iter().filter(|s| s.dimension() == 1).count();
    let diagram = reduce(&simplices, opts.maxdim, opts.coeff as u64);

    debug!(
        n_points = n,
        n_used = idx_perm.len(),
        n_simplices = simplices.len(),
        num_edges,
        thresh,
        r_cover,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "rips persistence"
    );

    Ok(RipsOutput {
        diagram,
        idx_perm,
        r_cover,
        num_edges,
    })
}

/// Compute Rips persistence of a Euclidean point cloud
pub fn ripser_points(points: &Array2<f64>, opts: &RipsOptions) -> Result<RipsOutput> {
    if points.nrows() == 0 {
        return Err(NotebookError::EmptyCloud);
    }
    ripser(&euclidean_distance_matrix(points), opts)
}

/// All cliques of dimension ≤ `top_dim` with diameter ≤ `thresh`, sorted
/// into filtration order
fn build_filtration(dm: &Array2<f64>, thresh: f64, top_dim: usize) -> Vec<FilteredSimplex> {
    let n = dm.nrows();

    // 0-simplices (vertices) - all born at time 0
    let mut layer: Vec<FilteredSimplex> = (0..n).map(FilteredSimplex::vertex).collect();
    let mut simplices = layer.clone();

    // Each k-simplex extends a (k-1)-simplex by a larger vertex adjacent to all of it
    for _ in 1..=top_dim {
        let mut next = Vec::new();
        for s in &layer {
            let last = s.vertices()[s.len - 1];
            'candidate: for v in last + 1..n {
                let mut birth = s.birth;
                for &u in s.vertices() {
                    let d = dm[[u, v]];
                    if d > thresh {
                        continue 'candidate;
                    }
                    birth = birth.max(d);
                }
                next.push(s.extend(v, birth));
            }
        }
        if next.is_empty() {
            break;
        }
        simplices.extend_from_slice(&next);
        layer = next;
    }

    simplices.sort_by(|a, b| {
        a.birth
            .total_cmp(&b.birth)
            .then(a.dimension().cmp(&b.dimension()))
            .then(a.vertices().cmp(b.vertices()))
    });
    simplices
}

/// min_i max_j d(i, j): beyond it one point is adjacent to all others
fn enclosing_radius(dm: &Array2<f64>) -> f64 {
    dm.rows()
        .into_iter()
        .map(|row| row.iter().fold(0.0_f64, |m, &d| m.max(d)))
        .fold(f64::INFINITY, f64::min)
}

/// Standard column reduction; returns intervals for dimensions ≤ maxdim
fn reduce(simplices: &[FilteredSimplex], maxdim: usize, p: u64) -> PersistenceDiagram {
    let m = simplices.len();

    let simplex_index: HashMap<&[usize], usize> = simplices
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.vertices(), idx))
        .collect();

    let mut columns: Vec<SparseColumn> = Vec::with_capacity(m);
    let mut low_to_col: HashMap<usize, usize> = HashMap::new();

    // Unpaired cycles of dimension maxdim seen so far. A reduced column's
    // pivot is always such a cycle, so with none alive every top-dimension
    // column reduces to zero and can be skipped.
    let top_dim = maxdim + 1;
    let mut live_cycles = 0usize;

    for (col_idx, simplex) in simplices.iter().enumerate() {
        let dim = simplex.dimension();
        if dim == top_dim && live_cycles == 0 {
            columns.push(SparseColumn::default());
            continue;
        }

        let mut boundary = SparseColumn::default();

        // ∂[v0, ..., vk] = Σ (-1)^i [v0, ..., v̂i, ..., vk]
        if dim > 0 {
            for i in 0..simplex.len {
                let (face, len) = simplex.face(i);
                if let Some(&face_idx) = simplex_index.get(&face[..len]) {
                    let sign = if i % 2 == 0 { 1 } else { p - 1 };
                    boundary.add_entry(face_idx, sign, p);
                }
            }
        }

        while let Some((low_idx, value)) = boundary.low() {
            match low_to_col.get(&low_idx) {
                Some(&pivot_col) => {
                    let pivot = &columns[pivot_col];
                    let pivot_value = pivot.entries[&low_idx];
                    let factor = value * mod_inverse(pivot_value, p) % p;
                    boundary.add_scaled(pivot, p - factor, p);
                }
                None => break,
            }
        }

        match boundary.low() {
            Some((low_idx, _)) => {
                low_to_col.insert(low_idx, col_idx);
                if dim == top_dim {
                    live_cycles -= 1;
                }
            }
            None if dim == maxdim => live_cycles += 1,
            None => {}
        }

        columns.push(boundary);
    }

    let mut diagram = PersistenceDiagram::new();
    let mut paired = vec![false; m];

    for (col_idx, column) in columns.iter().enumerate() {
        if let Some((low_idx, _)) = column.low() {
            // This column kills the class created by simplex low_idx
            let birth_simplex = &simplices[low_idx];
            let death_simplex = &simplices[col_idx];
            paired[low_idx] = true;
            paired[col_idx] = true;

            if death_simplex.birth > birth_simplex.birth {
                diagram.add(PersistenceInterval::new(
                    birth_simplex.birth,
                    death_simplex.birth,
                    birth_simplex.dimension(),
                ));
            }
        }
    }

    for (idx, simplex) in simplices.iter().enumerate() {
        if !paired[idx] && columns[idx].is_zero() && simplex.dimension() <= maxdim {
            diagram.add(PersistenceInterval::new(
                simplex.birth,
                f64::INFINITY,
                simplex.dimension(),
            ));
        }
    }

    diagram
}

fn is_prime(p: u32) -> bool {
    if p < 2 {
        return false;
    }
    let p = p as u64;
    (2u64..).take_while(|d| d * d <= p).all(|d| p % d != 0)
}

/// Multiplicative inverse in Z/pZ via Fermat's little theorem
fn mod_inverse(a: u64, p: u64) -> u64 {
    let mut result = 1;
    let mut base = a % p;
    let mut exp = p - 2;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % p;
        }
        base = base * base % p;
        exp >>= 1;
    }
    result
}
