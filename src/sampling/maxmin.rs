//! Greedy Farthest-Point (maxmin) Sampling
//!
//! Start from one point; repeatedly add the point whose distance to the
//! current landmark set is largest:
//!
//!   l_{k+1} = argmax_{x∈X} min_{i≤k} d(x, l_i)
//!
//! Keeping the running minimum per point makes each step one pass over a
//! distance row, O(n·N) overall on a precomputed matrix. The resulting
//! ordering is a greedy permutation: every prefix is itself a maxmin
//! sample, and the covering radius after k picks is non-increasing in k.

use ndarray::Array2;
use rand::Rng;
use tracing::debug;

use super::Sample;
use crate::error::{NotebookError, Result};
use crate::metric::check_square;

/// Maxmin sample of size `n` whose first landmark is drawn uniformly at random
pub fn maxmin<R: Rng + ?Sized>(dm: &Array2<f64>, n: usize, rng: &mut R) -> Result<Sample> {
    let n_points = check_square(dm)?;
    check_size(n, n_points)?;

    let first = rng.random_range(0..n_points);
    maxmin_from(dm, n, first)
}

/// Maxmin sample of size `n` starting from a fixed landmark
pub fn maxmin_from(dm: &Array2<f64>, n: usize, first: usize) -> Result<Sample> {
    let n_points = validate(dm, n, first)?;

    let (indices, radii) = traverse(dm, n, first);
    let covering_radius = radii.last().copied().unwrap_or(0.0);

    debug!(
        n_points,
        n_landmarks = n,
        first,
        covering_radius,
        "maxmin sample"
    );

    Ok(Sample { indices, covering_radius })
}

/// Covering radius after each of the first `n` maxmin picks from `first`
///
/// Entry k-1 is the covering radius of the first k landmarks, so the
/// whole "radius vs. sample size" curve costs a single traversal.
pub fn covering_radius_profile(dm: &Array2<f64>, n: usize, first: usize) -> Result<Vec<f64>> {
    validate(dm, n, first)?;
    Ok(traverse(dm, n, first).1)
}

fn check_size(n: usize, n_points: usize) -> Result<()> {
    if n == 0 {
        return Err(NotebookError::EmptySample);
    }
    if n > n_points {
        return Err(NotebookError::SampleTooLarge {
            requested: n,
            available: n_points,
        });
    }
    Ok(())
}

fn validate(dm: &Array2<f64>, n: usize, first: usize) -> Result<usize> {
    let n_points = check_square(dm)?;
    check_size(n, n_points)?;
    if first >= n_points {
        return Err(NotebookError::InvalidParameter(format!(
            "start index {} out of range for {} points",
            first, n_points
        )));
    }
    Ok(n_points)
}

/// Run the traversal, returning landmarks and the radius after each pick
fn traverse(dm: &Array2<f64>, n: usize, first: usize) -> (Vec<usize>, Vec<f64>) {
    let n_points = dm.nrows();
    let mut indices = Vec::with_capacity(n);
    let mut radii = Vec::with_capacity(n);
    let mut selected = vec![false; n_points];

    // Distance from every point to the current landmark set
    let mut min_dist: Vec<f64> = dm.row(first).to_vec();
    indices.push(first);
    selected[first] = true;
    radii.push(max_of(&min_dist));

    for _ in 1..n {
        let next = farthest_unselected(&min_dist, &selected);
        indices.push(next);
        selected[next] = true;

        for (d, &x) in min_dist.iter_mut().zip(dm.row(next).iter()) {
            if x < *d {
                *d = x;
            }
        }
        radii.push(max_of(&min_dist));
    }

    (indices, radii)
}

/// First index attaining the largest distance among points not yet picked.
/// Only differs from a plain argmax when the cloud has coincident points.
fn farthest_unselected(min_dist: &[f64], selected: &[bool]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (i, &d) in min_dist.iter().enumerate() {
        if selected[i] {
            continue;
        }
        match best {
            Some((_, b)) if d <= b => {}
            _ => best = Some((i, d)),
        }
    }
    // check_size guarantees an unselected point remains
    best.map(|(i, _)| i).unwrap_or(0)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::euclidean_distance_matrix;
    use crate::sampling::covering_radius;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_square() -> Array2<f64> {
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0]
        ];
        euclidean_distance_matrix(&points)
    }

    fn random_cloud(seed: u64, n: usize) -> Array2<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = Array2::from_shape_fn((n, 3), |_| rng.random::<f64>());
        euclidean_distance_matrix(&points)
    }

    #[test]
    fn test_square_picks_diagonal() {
        let dm = unit_square();
        let sample = maxmin_from(&dm, 2, 0).unwrap();

        assert_eq!(sample.indices, vec![0, 2]);
        assert!((dm[[0, 2]] - 2.0_f64.sqrt()).abs() < 1e-12);
        // Corners 1 and 3 sit one side-length away from both landmarks
        assert!((sample.covering_radius - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_centre_half_diagonal() {
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
            [0.0, 1.0],
            [0.5, 0.5]
        ];
        let dm = euclidean_distance_matrix(&points);
        let half_diagonal = 2.0_f64.sqrt() / 2.0;

        assert!((covering_radius(&dm, &[4]) - half_diagonal).abs() < 1e-12);

        // From a corner the centre is never the farthest point
        let sample = maxmin_from(&dm, 2, 0).unwrap();
        assert_eq!(sample.indices, vec![0, 2]);
    }

    #[test]
    fn test_full_sample_is_permutation() {
        let dm = random_cloud(7, 25);
        let sample = maxmin_from(&dm, 25, 3).unwrap();

        let mut sorted = sample.indices.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..25).collect::<Vec<_>>());
        assert_eq!(sample.covering_radius, 0.0);
    }

    #[test]
    fn test_distinct_and_in_range() {
        let dm = random_cloud(11, 40);
        let mut rng = StdRng::seed_from_u64(11);

        for n in 1..=40 {
            let sample = maxmin(&dm, n, &mut rng).unwrap();
            assert_eq!(sample.len(), n);
            assert_eq!(sample.n_distinct(), n);
            assert!(sample.indices.iter().all(|&i| i < 40));
        }
    }

    #[test]
    fn test_radius_matches_brute_force() {
        let dm = random_cloud(3, 30);
        let mut rng = StdRng::seed_from_u64(5);

        for n in [1, 2, 5, 10, 29] {
            let sample = maxmin(&dm, n, &mut rng).unwrap();
            let brute = covering_radius(&dm, &sample.indices);
            assert!((sample.covering_radius - brute).abs() < 1e-12);
        }
    }

    #[test]
    fn test_radius_non_increasing_for_fixed_seed() {
        let dm = random_cloud(42, 50);
        let mut last = f64::INFINITY;

        for n in 1..=50 {
            let mut rng = StdRng::seed_from_u64(9);
            let sample = maxmin(&dm, n, &mut rng).unwrap();
            assert!(sample.covering_radius >= 0.0);
            assert!(sample.covering_radius <= last + 1e-12);
            last = sample.covering_radius;
        }
    }

    #[test]
    fn test_prefix_property() {
        let dm = random_cloud(1, 30);
        let long = maxmin_from(&dm, 20, 4).unwrap();
        let short = maxmin_from(&dm, 8, 4).unwrap();
        assert_eq!(&long.indices[..8], &short.indices[..]);
    }

    #[test]
    fn test_profile_matches_samples() {
        let dm = random_cloud(8, 20);
        let profile = covering_radius_profile(&dm, 12, 0).unwrap();

        assert_eq!(profile.len(), 12);
        for k in [1, 4, 12] {
            let sample = maxmin_from(&dm, k, 0).unwrap();
            assert!((profile[k - 1] - sample.covering_radius).abs() < 1e-12);
        }
    }

    #[test]
    fn test_coincident_points_stay_distinct() {
        let points = array![[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]];
        let dm = euclidean_distance_matrix(&points);
        let sample = maxmin_from(&dm, 3, 1).unwrap();

        assert_eq!(sample.indices, vec![1, 0, 2]);
    }

    #[test]
    fn test_invalid_sizes() {
        let dm = unit_square();
        assert!(matches!(maxmin_from(&dm, 0, 0), Err(NotebookError::EmptySample)));
        assert!(matches!(
            maxmin_from(&dm, 5, 0),
            Err(NotebookError::SampleTooLarge { requested: 5, available: 4 })
        ));
        assert!(maxmin_from(&dm, 2, 4).is_err());
        assert!(maxmin_from(&Array2::zeros((2, 3)), 1, 0).is_err());
    }
}
