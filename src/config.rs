//! Lesson Configuration
//!
//! Every lesson binary starts from its own defaults (`LessonConfig`),
//! optionally overlaid with a JSON file and then with command-line flags:
//!
//! ```text
//! defaults  ──►  --config lesson.json  ──►  --seed / --out-dir
//! ```
//!
//! Unknown JSON keys are rejected so a typo does not silently fall back
//! to a default.

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::error::{NotebookError, Result};
use crate::topology::RipsOptions;

/// Parameters of one lesson run
#[derive(Debug, Clone, PartialEq)]
pub struct LessonConfig {
    /// Seed for dataset generation and sampling
    pub seed: u64,
    /// Points in the full cloud
    pub n_points: usize,
    /// Landmarks per subsample
    pub n_landmarks: usize,
    /// Maximum homology dimension
    pub maxdim: usize,
    /// Coefficient field characteristic
    pub coeff: u32,
    /// Rips distance threshold (None = unbounded)
    pub thresh: Option<f64>,
    /// Gaussian jitter of the dataset
    pub noise: f64,
    /// Scale used in place of ∞ on plots (None = derive from the diagram)
    pub max_display: Option<f64>,
    /// Directory receiving SVG plots
    pub out_dir: PathBuf,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            n_points: 200,
            n_landmarks: 50,
            maxdim: 1,
            coeff: 2,
            thresh: None,
            noise: 0.05,
            max_display: None,
            out_dir: PathBuf::from("plots"),
        }
    }
}

/// JSON overlay: every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub seed: Option<u64>,
    pub n_points: Option<usize>,
    pub n_landmarks: Option<usize>,
    pub maxdim: Option<usize>,
    pub coeff: Option<u32>,
    pub thresh: Option<f64>,
    pub noise: Option<f64>,
    pub max_display: Option<f64>,
    pub out_dir: Option<PathBuf>,
}

impl LessonConfig {
    /// Overlay the fields present in a config file
    pub fn with_overrides(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.seed {
            self.seed = v;
        }
        if let Some(v) = file.n_points {
            self.n_points = v;
        }
        if let Some(v) = file.n_landmarks {
            self.n_landmarks = v;
        }
        if let Some(v) = file.maxdim {
            self.maxdim = v;
        }
        if let Some(v) = file.coeff {
            self.coeff = v;
        }
        if file.thresh.is_some() {
            self.thresh = file.thresh;
        }
        if let Some(v) = file.noise {
            self.noise = v;
        }
        if file.max_display.is_some() {
            self.max_display = file.max_display;
        }
        if let Some(v) = file.out_dir {
            self.out_dir = v;
        }
        self
    }

    /// Parse a JSON overlay and apply it
    pub fn merge_json_str(self, json: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Ok(self.with_overrides(file))
    }

    /// Read a JSON overlay from disk and apply it
    pub fn merge_json_file(self, path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| NotebookError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_json_str(&json)
    }

    /// Engine options for the full cloud
    pub fn rips_options(&self) -> RipsOptions {
        let opts = RipsOptions::default().maxdim(self.maxdim).coeff(self.coeff);
        match self.thresh {
            Some(t) => opts.thresh(t),
            None => opts,
        }
    }

    /// Output path for a named plot, creating the directory if needed
    pub fn plot_path(&self, name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.out_dir)?;
        Ok(self.out_dir.join(format!("{}.svg", name)))
    }
}

/// Command-line flags shared by every lesson
#[derive(Debug, Parser)]
pub struct LessonArgs {
    /// Random seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory for SVG plots (overrides the config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// JSON file overriding lesson defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl LessonArgs {
    /// Resolve defaults → config file → flags
    pub fn resolve(self, defaults: LessonConfig) -> Result<LessonConfig> {
        let mut config = match &self.config {
            Some(path) => defaults.merge_json_file(path)?,
            None => defaults,
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(dir) = self.out_dir {
            config.out_dir = dir;
        }
        Ok(config)
    }
}

/// Install the fmt subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Print a lesson banner in the house style
pub fn banner(title: &str) {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════════════════════════════\n");
}

/// Print a section header
pub fn section(title: &str) {
    println!("\n══════════════════════════════════════════════════════════════");
    println!("  {}", title);
    println!("══════════════════════════════════════════════════════════════\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_overlay() {
        let config = LessonConfig::default()
            .merge_json_str(r#"{ "seed": 17, "n_landmarks": 30, "thresh": 1.5 }"#)
            .unwrap();

        assert_eq!(config.seed, 17);
        assert_eq!(config.n_landmarks, 30);
        assert_eq!(config.thresh, Some(1.5));
        assert_eq!(config.n_points, LessonConfig::default().n_points);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = LessonConfig::default().merge_json_str(r#"{ "n_landmark": 30 }"#);
        assert!(matches!(err, Err(NotebookError::Config(_))));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lesson.json");
        std::fs::write(&path, r#"{ "seed": 1, "coeff": 3 }"#).unwrap();

        let args = LessonArgs::parse_from([
            "lesson",
            "--seed",
            "99",
            "--config",
            path.to_str().unwrap(),
        ]);
        let config = args.resolve(LessonConfig::default()).unwrap();

        assert_eq!(config.seed, 99);
        assert_eq!(config.coeff, 3);
        assert_eq!(config.rips_options().coeff, 3);
    }

    #[test]
    fn test_missing_config_file() {
        let args = LessonArgs::parse_from(["lesson", "--config", "/nonexistent/lesson.json"]);
        assert!(matches!(
            args.resolve(LessonConfig::default()),
            Err(NotebookError::ReadConfig { .. })
        ));
    }

    #[test]
    fn test_rips_options_threshold() {
        let mut config = LessonConfig::default();
        assert!(config.rips_options().thresh.is_infinite());

        config.thresh = Some(0.8);
        assert_eq!(config.rips_options().thresh, 0.8);
    }
}
