//! Bottleneck Distance Between Persistence Diagrams
//!
//! d_B(D, D') = inf over matchings γ of sup_x ‖x − γ(x)‖_∞
//!
//! where every point may also be matched to the diagonal at cost
//! (death − birth) / 2. The optimum is one of finitely many candidate
//! costs, so we sort the candidates and binary-search for the smallest
//! one admitting a perfect matching in the thresholded bipartite graph.
//!
//! ## Graph layout
//!
//! Left side:  points of D, then one diagonal slot per point of D'
//! Right side: points of D', then one diagonal slot per point of D
//!
//! A point of D may only use its own diagonal slot; diagonal slots are
//! always free to pair with each other.

use crate::topology::PersistenceDiagram;

/// Bottleneck distance in one homological dimension
///
/// Essential bars are matched among themselves by birth; a different
/// number of essential bars makes the distance infinite.
pub fn bottleneck(a: &PersistenceDiagram, b: &PersistenceDiagram, dimension: usize) -> f64 {
    let essential = essential_distance(
        a.essential(dimension).iter().map(|i| i.birth).collect(),
        b.essential(dimension).iter().map(|i| i.birth).collect(),
    );

    let fa: Vec<(f64, f64)> = a.finite(dimension).iter().map(|i| (i.birth, i.death)).collect();
    let fb: Vec<(f64, f64)> = b.finite(dimension).iter().map(|i| (i.birth, i.death)).collect();

    essential.max(bottleneck_finite(&fa, &fb))
}

/// Optimal matching of essential births on the line is the sorted pairing
fn essential_distance(mut a: Vec<f64>, mut b: Vec<f64>) -> f64 {
    if a.len() != b.len() {
        return f64::INFINITY;
    }
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

fn linf(p: (f64, f64), q: (f64, f64)) -> f64 {
    (p.0 - q.0).abs().max((p.1 - q.1).abs())
}

fn to_diagonal(p: (f64, f64)) -> f64 {
    (p.1 - p.0) / 2.0
}

/// Bottleneck distance between two diagrams of finite points
pub fn bottleneck_finite(a: &[(f64, f64)], b: &[(f64, f64)]) -> f64 {
    let (m, n) = (a.len(), b.len());
    if m == 0 && n == 0 {
        return 0.0;
    }

    let mut candidates: Vec<f64> = Vec::with_capacity(m * n + m + n + 1);
    candidates.push(0.0);
    for &p in a {
        candidates.push(to_diagonal(p));
        for &q in b {
            candidates.push(linf(p, q));
        }
    }
    for &q in b {
        candidates.push(to_diagonal(q));
    }
    candidates.sort_by(f64::total_cmp);
    candidates.dedup();

    // Matching everything to the diagonal is always feasible, so the
    // largest candidate is an upper bound.
    let (mut lo, mut hi) = (0usize, candidates.len() - 1);
    while lo < hi {
        let mid = (lo + hi) / 2;
        if has_perfect_matching(&threshold_graph(a, b, candidates[mid])) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    candidates[lo]
}

/// Adjacency lists (left → right) of edges with cost ≤ `eps`
fn threshold_graph(a: &[(f64, f64)], b: &[(f64, f64)], eps: f64) -> Vec<Vec<usize>> {
    let (m, n) = (a.len(), b.len());
    let mut adj = vec![Vec::new(); m + n];

    for (i, &p) in a.iter().enumerate() {
        for (j, &q) in b.iter().enumerate() {
            if linf(p, q) <= eps {
                adj[i].push(j);
            }
        }
        if to_diagonal(p) <= eps {
            adj[i].push(n + i);
        }
    }

    for (j, &q) in b.iter().enumerate() {
        let slot = m + j;
        if to_diagonal(q) <= eps {
            adj[slot].push(j);
        }
        for i in 0..m {
            adj[slot].push(n + i);
        }
    }

    adj
}

/// Kuhn's augmenting-path algorithm on a square bipartite graph
fn has_perfect_matching(adj: &[Vec<usize>]) -> bool {
    let size = adj.len();
    let mut match_right: Vec<Option<usize>> = vec![None; size];

    fn augment(
        v: usize,
        adj: &[Vec<usize>],
        visited: &mut [bool],
        match_right: &mut [Option<usize>],
    ) -> bool {
        for &u in &adj[v] {
            if visited[u] {
                continue;
            }
            visited[u] = true;
            let free = match match_right[u] {
                None => true,
                Some(w) => augment(w, adj, visited, match_right),
            };
            if free {
                match_right[u] = Some(v);
                return true;
            }
        }
        false
    }

    for v in 0..size {
        let mut visited = vec![false; size];
        if !augment(v, adj, &mut visited, &mut match_right) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::PersistenceInterval;

    #[test]
    fn test_identical_diagrams() {
        let d = [(0.0, 1.0), (0.2, 0.5), (1.0, 3.0)];
        assert_eq!(bottleneck_finite(&d, &d), 0.0);
    }

    #[test]
    fn test_single_bar_against_empty() {
        let d = [(1.0, 3.0)];
        assert!((bottleneck_finite(&d, &[]) - 1.0).abs() < 1e-12);
        assert!((bottleneck_finite(&[], &d) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_shifted_bar() {
        // Matching the two bars costs 0.25, sending both to the diagonal costs 1.0
        let a = [(1.0, 3.0)];
        let b = [(1.25, 3.1)];
        assert!((bottleneck_finite(&a, &b) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_noise_goes_to_diagonal() {
        let a = [(0.0, 2.0), (0.5, 0.6)];
        let b = [(0.0, 2.1)];
        // The short bar is absorbed by the diagonal at cost 0.05
        assert!((bottleneck_finite(&a, &b) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let a = [(0.0, 1.0), (0.3, 2.0), (1.1, 1.4)];
        let b = [(0.1, 1.2), (0.4, 1.7)];
        assert_eq!(bottleneck_finite(&a, &b), bottleneck_finite(&b, &a));
    }

    #[test]
    fn test_essential_bars() {
        let mut a = PersistenceDiagram::new();
        a.add(PersistenceInterval::new(0.0, f64::INFINITY, 0));
        a.add(PersistenceInterval::new(0.0, 0.5, 0));

        let mut b = PersistenceDiagram::new();
        b.add(PersistenceInterval::new(0.0, f64::INFINITY, 0));
        assert!((bottleneck(&a, &b, 0) - 0.25).abs() < 1e-12);

        b.add(PersistenceInterval::new(0.0, f64::INFINITY, 0));
        assert!(bottleneck(&a, &b, 0).is_infinite());
    }
}
