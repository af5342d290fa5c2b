//! Lesson 3: Landmarks on the Trefoil Knot
//!
//! The trefoil is knotted in ℝ³ but intrinsically a circle, so its Rips
//! barcode should show one long H1 bar. We first compare how fast the
//! covering radius shrinks for maxmin and uniform landmarks, then let the
//! engine pick its own maxmin landmarks (`n_perm`).

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use tda_landmarks::config::{banner, init_tracing, section};
use tda_landmarks::metric::submatrix;
use tda_landmarks::{
    covering_radius_profile, datasets, display_max, euclidean_distance_matrix, plot_barcode,
    plot_cloud, plot_covering_curves, ripser, uniform, LessonArgs, LessonConfig, NotebookError,
};

fn main() -> Result<(), NotebookError> {
    init_tracing();
    let config = LessonArgs::parse().resolve(LessonConfig {
        n_points: 400,
        n_landmarks: 60,
        noise: 0.03,
        ..LessonConfig::default()
    })?;

    banner("Lesson 3: Maxmin Landmarks on a Trefoil Knot");

    println!("Parameters:");
    println!("  N = {} points, noise σ = {:.3}", config.n_points, config.noise);
    println!("  n = {} landmarks", config.n_landmarks);
    println!("  seed = {}", config.seed);

    if config.n_points == 0 {
        return Err(NotebookError::EmptyCloud);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let points = datasets::trefoil(config.n_points, config.noise, &mut rng)?;
    let dm = euclidean_distance_matrix(&points);

    section("Covering Radius vs. Number of Landmarks");

    let k_max = (2 * config.n_landmarks).min(config.n_points);
    let first = rng.random_range(0..config.n_points);
    let greedy = covering_radius_profile(&dm, k_max, first)?;

    let mut random_curve = Vec::with_capacity(k_max);
    for k in 1..=k_max {
        random_curve.push((k as f64, uniform(&dm, k, &mut rng)?.covering_radius));
    }
    let greedy_curve: Vec<(f64, f64)> = greedy
        .iter()
        .enumerate()
        .map(|(i, &r)| ((i + 1) as f64, r))
        .collect();

    println!("    n     maxmin    uniform");
    println!("───────────────────────────────");
    for k in [1, 5, 10, 20, 40, k_max] {
        if k > k_max {
            continue;
        }
        println!(
            "  {:4}    {:.4}    {:.4}",
            k,
            greedy_curve[k - 1].1,
            random_curve[k - 1].1
        );
    }

    plot_covering_curves(
        &config.plot_path("trefoil_covering")?,
        &[("maxmin", greedy_curve), ("uniform", random_curve)],
        "trefoil: covering radius",
    )?;

    section("Persistence from Engine Landmarks");

    let opts = config.rips_options().n_perm(config.n_landmarks);
    let start = Instant::now();
    let out = ripser(&dm, &opts)?;
    println!(
        "  {} landmarks, r_cover = {:.4}, {:.1} ms",
        out.idx_perm.len(),
        out.r_cover,
        start.elapsed().as_secs_f64() * 1e3
    );

    // Bars longer than 2·r_cover cannot be explained by the subsampling alone
    let signal: Vec<_> = out
        .diagram
        .finite(1)
        .into_iter()
        .filter(|i| i.persistence() > 2.0 * out.r_cover)
        .collect();
    println!("  H1 bars longer than 2·r_cover: {}", signal.len());
    for bar in out.diagram.most_persistent(1, 3) {
        println!("    [{:.4}, {:.4})  persistence {:.4}", bar.birth, bar.death, bar.persistence());
    }

    let sample = uniform(&dm, config.n_landmarks, &mut rng)?;
    let random_pd = ripser(&submatrix(&dm, &sample.indices), &config.rips_options())?.diagram;
    println!(
        "\n  Uniform sample of the same size: r = {:.4}, H1 max persistence {:.4}",
        sample.covering_radius,
        random_pd.max_persistence(1)
    );

    let max_display = config.max_display.unwrap_or_else(|| display_max(&out.diagram));
    plot_cloud(
        &config.plot_path("trefoil_landmarks")?,
        &points,
        Some(&out.idx_perm),
        "trefoil (xy projection)",
    )?;
    plot_barcode(
        &config.plot_path("trefoil_barcode")?,
        &out.diagram.by_dimension(config.maxdim),
        max_display,
    )?;

    println!("\n  Plots written to {}", config.out_dir.display());
    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Lesson Complete");
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}
