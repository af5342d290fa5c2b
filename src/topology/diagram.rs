//! Persistence Diagrams
//!
//! A persistence interval [b, d) represents a topological feature that is
//! "born" at scale b and "dies" at scale d. Features still alive at the
//! end of the filtration are essential and carry d = ∞.
//!
//! ## Interpretation
//!
//! - Long bars are robust structure (the circle's loop, the torus' void)
//! - Short bars near the diagonal are sampling noise
//! - Stability: perturbing the cloud by ε in Hausdorff distance moves the
//!   diagram by at most 2ε in bottleneck distance

/// A persistence interval [birth, death)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistenceInterval {
    pub birth: f64,
    pub death: f64,
    pub dimension: usize,
}

impl PersistenceInterval {
    pub fn new(birth: f64, death: f64, dimension: usize) -> Self {
        Self { birth, death, dimension }
    }

    /// Lifetime of the feature (∞ for essential classes)
    pub fn persistence(&self) -> f64 {
        if self.death.is_infinite() {
            f64::INFINITY
        } else {
            self.death - self.birth
        }
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }

    /// Is the feature alive at scale `epsilon`?
    pub fn contains(&self, epsilon: f64) -> bool {
        self.birth <= epsilon && epsilon < self.death
    }
}

/// Persistence diagram: collection of intervals across dimensions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistenceDiagram {
    pub intervals: Vec<PersistenceInterval>,
}

impl PersistenceDiagram {
    pub fn new() -> Self {
        Self { intervals: Vec::new() }
    }

    pub fn add(&mut self, interval: PersistenceInterval) {
        self.intervals.push(interval);
    }

    /// Build a single-dimension diagram from (birth, death) pairs
    pub fn from_pairs(dimension: usize, pairs: &[(f64, f64)]) -> Self {
        Self {
            intervals: pairs
                .iter()
                .map(|&(b, d)| PersistenceInterval::new(b, d, dimension))
                .collect(),
        }
    }

    /// Highest dimension carrying at least one interval
    pub fn max_dimension(&self) -> Option<usize> {
        self.intervals.iter().map(|i| i.dimension).max()
    }

    /// Get all intervals for a given dimension
    pub fn dim(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals.iter().filter(|i| i.dimension == d).collect()
    }

    /// Finite intervals in dimension d
    pub fn finite(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && !i.is_essential())
            .collect()
    }

    /// Essential intervals in dimension d
    pub fn essential(&self, d: usize) -> Vec<&PersistenceInterval> {
        self.intervals
            .iter()
            .filter(|i| i.dimension == d && i.is_essential())
            .collect()
    }

    /// (birth, death) pairs of dimension d, sorted by birth then death
    pub fn pairs(&self, d: usize) -> Vec<(f64, f64)> {
        let mut pairs: Vec<(f64, f64)> = self
            .dim(d)
            .into_iter()
            .map(|i| (i.birth, i.death))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        pairs
    }

    /// Per-dimension pairs for 0..=max_dim, the layout the barcode plot consumes
    pub fn by_dimension(&self, max_dim: usize) -> Vec<Vec<(f64, f64)>> {
        (0..=max_dim).map(|d| self.pairs(d)).collect()
    }

    /// Total persistence of finite bars in dimension d
    pub fn total_persistence(&self, d: usize) -> f64 {
        self.finite(d).iter().map(|i| i.persistence()).sum()
    }

    /// Maximum persistence of a finite bar in dimension d
    pub fn max_persistence(&self, d: usize) -> f64 {
        self.finite(d)
            .iter()
            .map(|i| i.persistence())
            .fold(0.0, f64::max)
    }

    /// The `k` longest finite bars of dimension d, longest first
    pub fn most_persistent(&self, d: usize, k: usize) -> Vec<PersistenceInterval> {
        let mut finite: Vec<PersistenceInterval> = self.finite(d).into_iter().copied().collect();
        finite.sort_by(|a, b| b.persistence().total_cmp(&a.persistence()));
        finite.truncate(k);
        finite
    }

    /// Largest finite filtration value appearing in the diagram
    pub fn max_finite_value(&self) -> f64 {
        self.intervals
            .iter()
            .flat_map(|i| [i.birth, i.death])
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}
