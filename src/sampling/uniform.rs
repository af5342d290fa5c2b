//! Uniform Random Sampling
//!
//! Draws `n` indices independently and uniformly, **with replacement**:
//! the same point may be drawn more than once, and `n` may even exceed
//! the cloud size. The lesson text sometimes describes this as sampling
//! "without replacement"; the with-replacement behaviour is what the
//! timing and covering-radius comparisons are computed against, so it is
//! kept as is. Duplicates only shrink the effective landmark set.

use ndarray::Array2;
use rand::Rng;
use tracing::{debug, warn};

use super::{covering_radius, Sample};
use crate::error::{NotebookError, Result};
use crate::metric::check_square;

/// Uniform sample of `n` indices (with replacement) and its covering radius
pub fn uniform<R: Rng + ?Sized>(dm: &Array2<f64>, n: usize, rng: &mut R) -> Result<Sample> {
    let n_points = check_square(dm)?;
    if n == 0 {
        return Err(NotebookError::EmptySample);
    }
    if n_points == 0 {
        return Err(NotebookError::EmptyCloud);
    }

    let indices: Vec<usize> = (0..n).map(|_| rng.random_range(0..n_points)).collect();
    let covering_radius = covering_radius(dm, &indices);

    let sample = Sample { indices, covering_radius };
    let distinct = sample.n_distinct();
    if distinct < n {
        warn!(n, distinct, "uniform sample drew duplicate points");
    }
    debug!(n_points, n_landmarks = n, covering_radius, "uniform sample");

    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::euclidean_distance_matrix;
    use crate::sampling::maxmin_from;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn random_cloud(seed: u64, n: usize) -> Array2<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = Array2::from_shape_fn((n, 2), |_| rng.random::<f64>());
        euclidean_distance_matrix(&points)
    }

    #[test]
    fn test_size_and_range() {
        let dm = random_cloud(1, 30);
        let mut rng = StdRng::seed_from_u64(2);

        for n in [1, 5, 30, 60] {
            let sample = uniform(&dm, n, &mut rng).unwrap();
            assert_eq!(sample.len(), n);
            assert!(sample.indices.iter().all(|&i| i < 30));
        }
    }

    #[test]
    fn test_draws_with_replacement() {
        // 60 draws from 30 points must repeat
        let dm = random_cloud(4, 30);
        let mut rng = StdRng::seed_from_u64(4);
        let sample = uniform(&dm, 60, &mut rng).unwrap();

        assert!(sample.n_distinct() < sample.len());
    }

    #[test]
    fn test_radius_matches_brute_force() {
        let dm = random_cloud(9, 40);
        let mut rng = StdRng::seed_from_u64(9);

        for n in [1, 3, 10, 40] {
            let sample = uniform(&dm, n, &mut rng).unwrap();
            let brute = covering_radius(&dm, &sample.indices);
            assert!(sample.covering_radius >= 0.0);
            assert!((sample.covering_radius - brute).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reproducible_with_seed() {
        let dm = random_cloud(5, 20);
        let a = uniform(&dm, 8, &mut StdRng::seed_from_u64(77)).unwrap();
        let b = uniform(&dm, 8, &mut StdRng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_maxmin_covers_at_least_as_well_on_average() {
        let dm = random_cloud(12, 200);
        let mut rng = StdRng::seed_from_u64(12);

        let greedy = maxmin_from(&dm, 20, 0).unwrap().covering_radius;
        let mean_uniform: f64 = (0..20)
            .map(|_| uniform(&dm, 20, &mut rng).unwrap().covering_radius)
            .sum::<f64>()
            / 20.0;

        assert!(greedy < mean_uniform);
    }

    #[test]
    fn test_empty_rejected() {
        let dm = random_cloud(1, 5);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(uniform(&dm, 0, &mut rng), Err(NotebookError::EmptySample)));
        assert!(matches!(
            uniform(&Array2::zeros((0, 0)), 3, &mut rng),
            Err(NotebookError::EmptyCloud)
        ));
    }
}
