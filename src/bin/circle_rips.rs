//! Lesson 1: Rips Filtration and Persistence of a Circle
//!
//! Samples a jittered circle, draws the Rips complex at a few scales to
//! show the loop appearing and then filling in, and computes the barcode.
//! The single long H1 bar is the circle; everything else is noise.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

use tda_landmarks::config::{banner, init_tracing, section};
use tda_landmarks::{
    datasets, display_max, euclidean_distance_matrix, plot_barcode, plot_cloud, plot_diagram,
    plot_rips_complex, ripser, BettiCurve, LessonArgs, LessonConfig, NotebookError,
    VietorisRips,
};

fn main() -> Result<(), NotebookError> {
    init_tracing();
    let config = LessonArgs::parse().resolve(LessonConfig {
        n_points: 100,
        noise: 0.05,
        ..LessonConfig::default()
    })?;

    banner("Lesson 1: Rips Filtration of a Circle");

    println!("Parameters:");
    println!("  N = {} points on the unit circle", config.n_points);
    println!("  noise σ = {:.3}", config.noise);
    println!("  maxdim = {}, coefficients Z/{}Z", config.maxdim, config.coeff);
    println!("  seed = {}", config.seed);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let points = datasets::circle(config.n_points, 1.0, config.noise, &mut rng)?;
    let dm = euclidean_distance_matrix(&points);
    plot_cloud(&config.plot_path("circle_cloud")?, &points, None, "circle")?;

    section("Rips Complex at Increasing Scale");

    let vr = VietorisRips::from_distance_matrix(&dm)?;
    println!("  ε       edges   triangles   β₀    χ");
    println!("─────────────────────────────────────────");
    for (k, &eps) in [0.1, 0.25, 0.5, 1.0, 1.8].iter().enumerate() {
        println!(
            "  {:.2}   {:6}   {:9}   {:3}   {:4}",
            eps,
            vr.edges_at(eps).len(),
            vr.triangles_at(eps).len(),
            vr.count_components_at(eps),
            vr.euler_characteristic_at(eps)
        );
        plot_rips_complex(
            &config.plot_path(&format!("circle_complex_{}", k))?,
            &points,
            eps,
            "Rips complex",
        )?;
    }

    section("Persistent Homology");

    let start = Instant::now();
    let out = ripser(&dm, &config.rips_options())?;
    let elapsed = start.elapsed();
    let pd = &out.diagram;
    info!(num_edges = out.num_edges, "circle persistence done");

    println!("  Computed in {:.1} ms ({} edges)", elapsed.as_secs_f64() * 1e3, out.num_edges);
    for d in 0..=config.maxdim {
        println!(
            "  H{}: {} finite bars, {} essential, max persistence {:.4}",
            d,
            pd.finite(d).len(),
            pd.essential(d).len(),
            pd.max_persistence(d)
        );
    }

    println!("\n  Longest H1 bars:");
    for bar in pd.most_persistent(1, 3) {
        println!("    [{:.4}, {:.4})  persistence {:.4}", bar.birth, bar.death, bar.persistence());
    }

    let max_display = config.max_display.unwrap_or_else(|| display_max(pd));
    let curve = BettiCurve::compute(pd, max_display, 200);
    for (lo, hi) in curve.beta_1_plateaus(1) {
        println!("  β₁ = 1 for ε ∈ [{:.3}, {:.3}]", lo, hi);
    }

    plot_barcode(
        &config.plot_path("circle_barcode")?,
        &pd.by_dimension(config.maxdim),
        max_display,
    )?;
    plot_diagram(
        &config.plot_path("circle_diagram")?,
        pd,
        config.maxdim,
        max_display,
        "circle",
    )?;

    println!("\n  Plots written to {}", config.out_dir.display());
    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Lesson Complete");
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}
