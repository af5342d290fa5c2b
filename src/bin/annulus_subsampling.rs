//! Lesson 2: Subsampling a Noisy Annulus
//!
//! Computes Rips persistence of the full cloud, then of a maxmin and a
//! uniform subsample of the same size. For each subsample we report:
//!
//! - wall-clock time of sampling + persistence
//! - covering radius r = d_H(X, L)
//! - bottleneck distance to the full diagram, against the bound 2r
//!
//! Maxmin landmarks give a smaller r, hence a tighter guarantee.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use tda_landmarks::config::{banner, init_tracing, section};
use tda_landmarks::metric::{hausdorff_to_subset, submatrix};
use tda_landmarks::{
    bottleneck, datasets, display_max, euclidean_distance_matrix, maxmin, plot_barcode,
    plot_cloud, plot_diagram, ripser, uniform, LessonArgs, LessonConfig, NotebookError,
    PersistenceDiagram, RipsOptions, Sample,
};

struct Trial {
    name: &'static str,
    sample: Sample,
    diagram: PersistenceDiagram,
    elapsed: Duration,
}

fn run_trial(
    name: &'static str,
    dm: &ndarray::Array2<f64>,
    opts: &RipsOptions,
    draw: impl FnOnce() -> Result<Sample, NotebookError>,
) -> Result<Trial, NotebookError> {
    let start = Instant::now();
    let sample = draw()?;
    let sub = submatrix(dm, &sample.indices);
    let diagram = ripser(&sub, opts)?.diagram;
    let elapsed = start.elapsed();
    info!(name, landmarks = sample.len(), "subsample persistence done");

    Ok(Trial { name, sample, diagram, elapsed })
}

fn main() -> Result<(), NotebookError> {
    init_tracing();
    let config = LessonArgs::parse().resolve(LessonConfig {
        n_points: 200,
        n_landmarks: 50,
        ..LessonConfig::default()
    })?;

    banner("Lesson 2: Maxmin vs. Uniform Subsampling of an Annulus");

    println!("Parameters:");
    println!("  N = {} points in the annulus 1 ≤ |x| ≤ 2", config.n_points);
    println!("  n = {} landmarks per subsample", config.n_landmarks);
    println!("  seed = {}", config.seed);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let points = datasets::annulus(config.n_points, 1.0, 2.0, &mut rng)?;
    let dm = euclidean_distance_matrix(&points);
    let opts = config.rips_options();

    section("Full Cloud");

    let start = Instant::now();
    let full = ripser(&dm, &opts)?;
    let full_elapsed = start.elapsed();
    println!(
        "  {} points, {} edges: {:.1} ms",
        config.n_points,
        full.num_edges,
        full_elapsed.as_secs_f64() * 1e3
    );
    println!(
        "  H1 max persistence {:.4} ({} bars)",
        full.diagram.max_persistence(1),
        full.diagram.finite(1).len()
    );

    section("Subsamples");

    let n = config.n_landmarks;
    let trials = vec![
        run_trial("maxmin", &dm, &opts, || maxmin(&dm, n, &mut rng))?,
        run_trial("uniform", &dm, &opts, || uniform(&dm, n, &mut rng))?,
    ];

    println!("  method    distinct   time(ms)   d_H      d_B(H0)  d_B(H1)  2·d_H    bound");
    println!("─────────────────────────────────────────────────────────────────────────────");
    for t in &trials {
        let d_h = hausdorff_to_subset(&dm, &t.sample.indices)?;
        let db0 = bottleneck(&full.diagram, &t.diagram, 0);
        let db1 = bottleneck(&full.diagram, &t.diagram, 1);
        let holds = db0.max(db1) <= 2.0 * d_h + 1e-9;
        if !holds {
            warn!(method = t.name, "stability bound violated");
        }

        println!(
            "  {:8}  {:8}   {:8.1}   {:.4}   {:.4}   {:.4}   {:.4}   {}",
            t.name,
            t.sample.n_distinct(),
            t.elapsed.as_secs_f64() * 1e3,
            d_h,
            db0,
            db1,
            2.0 * d_h,
            if holds { "✓" } else { "×" }
        );
    }

    println!(
        "\n  Speed-up vs. full cloud: maxmin ×{:.1}, uniform ×{:.1}",
        full_elapsed.as_secs_f64() / trials[0].elapsed.as_secs_f64().max(1e-9),
        full_elapsed.as_secs_f64() / trials[1].elapsed.as_secs_f64().max(1e-9)
    );

    section("Engine-side Landmarks");

    let start = Instant::now();
    let engine = ripser(&dm, &opts.clone().n_perm(n))?;
    println!(
        "  n_perm = {}: r_cover = {:.4}, {:.1} ms, d_B(H1) to full = {:.4}",
        n,
        engine.r_cover,
        start.elapsed().as_secs_f64() * 1e3,
        bottleneck(&full.diagram, &engine.diagram, 1)
    );

    let max_display = config.max_display.unwrap_or_else(|| display_max(&full.diagram));
    plot_cloud(&config.plot_path("annulus_cloud")?, &points, None, "annulus")?;
    plot_barcode(
        &config.plot_path("annulus_barcode_full")?,
        &full.diagram.by_dimension(config.maxdim),
        max_display,
    )?;
    plot_diagram(
        &config.plot_path("annulus_diagram_full")?,
        &full.diagram,
        config.maxdim,
        max_display,
        "annulus (full)",
    )?;
    for t in &trials {
        plot_cloud(
            &config.plot_path(&format!("annulus_cloud_{}", t.name))?,
            &points,
            Some(&t.sample.indices),
            &format!("{} landmarks", t.name),
        )?;
        plot_barcode(
            &config.plot_path(&format!("annulus_barcode_{}", t.name))?,
            &t.diagram.by_dimension(config.maxdim),
            max_display,
        )?;
        plot_diagram(
            &config.plot_path(&format!("annulus_diagram_{}", t.name))?,
            &t.diagram,
            config.maxdim,
            max_display,
            &format!("annulus ({})", t.name),
        )?;
    }

    println!("\n  Plots written to {}", config.out_dir.display());
    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Lesson Complete");
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}
