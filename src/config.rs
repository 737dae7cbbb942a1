//! Render configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::screen;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_OUTPUT: &str = "mandelbrot_fractal_pattern.png";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Image size in pixels. Default 800×800.
    pub size: screen::Size,
    /// Iteration budget per pixel. Default 1000.
    pub max_iterations: u32,
    /// Plane window. Default `[-2, 1] × [-1.5, 1.5]`.
    pub window: screen::Window,
    /// Where the PNG goes.
    pub output: PathBuf,
    /// Worker threads for the pixel loop. `1` computes strictly sequentially.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: screen::Size {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            },
            max_iterations: DEFAULT_MAX_ITERATIONS,
            window: screen::Window::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            threads: num_cpus::get(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            bail!(
                "invalid dimensions {}x{}: both must be at least 1",
                self.size.width,
                self.size.height
            );
        }
        if self.max_iterations == 0 {
            bail!("max_iterations must be at least 1");
        }
        if !self.window.is_finite() {
            bail!("plane window bounds must be finite: {:?}", self.window);
        }
        if self.threads == 0 {
            bail!("threads must be at least 1");
        }
        Ok(())
    }

    /// Overlay every field set in `file` onto `self`.
    pub fn apply(&mut self, file: ConfigFile) {
        if let Some(v) = file.width {
            self.size.width = v;
        }
        if let Some(v) = file.height {
            self.size.height = v;
        }
        if let Some(v) = file.max_iterations {
            self.max_iterations = v;
        }
        if let Some(v) = file.min_real {
            self.window.min_real = v;
        }
        if let Some(v) = file.max_real {
            self.window.max_real = v;
        }
        if let Some(v) = file.min_imag {
            self.window.min_imag = v;
        }
        if let Some(v) = file.max_imag {
            self.window.max_imag = v;
        }
        if let Some(v) = file.output {
            self.output = v;
        }
        if let Some(v) = file.threads {
            self.threads = v;
        }
    }
}

/// On-disk TOML form of [`Config`]. Every key is optional; missing keys keep
/// their defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_iterations: Option<u32>,
    pub min_real: Option<f64>,
    pub max_real: Option<f64>,
    pub min_imag: Option<f64>,
    pub max_imag: Option<f64>,
    pub output: Option<PathBuf>,
    pub threads: Option<usize>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("invalid TOML in config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_render() {
        let config = Config::default();
        assert_eq!(config.size.width, 800);
        assert_eq!(config.size.height, 800);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(
            config.window,
            screen::Window {
                min_real: -2.0,
                max_real: 1.0,
                min_imag: -1.5,
                max_imag: 1.5,
            }
        );
        assert_eq!(config.output, PathBuf::from("mandelbrot_fractal_pattern.png"));
        assert!(config.threads >= 1);
        config.validate().unwrap();
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        let mut config = Config::default();
        config.size.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_iteration_budget_is_rejected() {
        let config = Config {
            max_iterations: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn infinite_window_is_rejected() {
        let mut config = Config::default();
        config.window.min_real = f64::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_threads_is_rejected() {
        let config = Config {
            threads: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let file = ConfigFile::parse(
            r#"
            width = 320
            max_iterations = 64
            min_imag = -1.0
            output = "small.png"
            "#,
        )
        .unwrap();

        let mut config = Config::default();
        config.apply(file);

        assert_eq!(config.size.width, 320);
        assert_eq!(config.size.height, DEFAULT_HEIGHT);
        assert_eq!(config.max_iterations, 64);
        assert_eq!(config.window.min_imag, -1.0);
        assert_eq!(config.window.max_imag, 1.5);
        assert_eq!(config.output, PathBuf::from("small.png"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn empty_file_changes_nothing() {
        let mut config = Config::default();
        config.apply(ConfigFile::parse("").unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "height = 600\nthreads = 1").unwrap();

        let loaded = ConfigFile::load(file.path()).unwrap();
        assert_eq!(loaded.height, Some(600));
        assert_eq!(loaded.threads, Some(1));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = ConfigFile::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(error.to_string().contains("cannot read config file"));
    }
}
