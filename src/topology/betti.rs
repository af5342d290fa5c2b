//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a topological space:
//!
//! - β₀: Number of connected components
//! - β₁: Number of 1-dimensional loops/cycles
//! - β₂: Number of 2-dimensional voids/cavities
//!
//! At scale ε they are read off a persistence diagram as the number of
//! bars alive at ε, i.e. birth ≤ ε < death.

use super::PersistenceDiagram;

/// Betti numbers at a specific filtration value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BettiNumbers {
    pub beta_0: usize,  // Connected components
    pub beta_1: usize,  // Loops
    pub beta_2: usize,  // Voids
    pub epsilon: f64,   // Filtration scale
}

impl BettiNumbers {
    pub fn new(beta_0: usize, beta_1: usize, beta_2: usize, epsilon: f64) -> Self {
        Self { beta_0, beta_1, beta_2, epsilon }
    }

    /// Count bars of each dimension alive at scale ε
    pub fn at_scale(pd: &PersistenceDiagram, epsilon: f64) -> Self {
        let alive = |d: usize| pd.dim(d).iter().filter(|i| i.contains(epsilon)).count();
        Self::new(alive(0), alive(1), alive(2), epsilon)
    }

    /// Euler characteristic χ = β₀ - β₁ + β₂
    pub fn euler_characteristic(&self) -> i64 {
        self.beta_0 as i64 - self.beta_1 as i64 + self.beta_2 as i64
    }
}

/// Betti curve: sequence of Betti numbers across a uniform scale grid
#[derive(Debug, Clone)]
pub struct BettiCurve {
    pub values: Vec<BettiNumbers>,
}

impl BettiCurve {
    /// Evaluate Betti numbers at `n_steps + 1` scales from 0 to `max_epsilon`
    pub fn compute(pd: &PersistenceDiagram, max_epsilon: f64, n_steps: usize) -> Self {
        let n_steps = n_steps.max(1);
        let values = (0..=n_steps)
            .map(|step| max_epsilon * step as f64 / n_steps as f64)
            .map(|eps| BettiNumbers::at_scale(pd, eps))
            .collect();

        Self { values }
    }

    /// Get β₁ curve
    pub fn beta_1_curve(&self) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.epsilon, b.beta_1)).collect()
    }

    /// Scales at which β₁ equals `target`, as a list of (start, end) grid runs
    pub fn beta_1_plateaus(&self, target: usize) -> Vec<(f64, f64)> {
        let mut runs = Vec::new();
        let mut start: Option<f64> = None;
        let mut prev = 0.0;

        for b in &self.values {
            match (b.beta_1 == target, start) {
                (true, None) => start = Some(b.epsilon),
                (false, Some(s)) => {
                    runs.push((s, prev));
                    start = None;
                }
                _ => {}
            }
            prev = b.epsilon;
        }
        if let Some(s) = start {
            runs.push((s, prev));
        }
        runs
    }
}
