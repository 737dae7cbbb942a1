use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::{Config, ConfigFile};

/// Render the Mandelbrot set to a PNG file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML file with any of the settings below. Flags take precedence.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels [default: 800].
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels [default: 800].
    #[arg(long)]
    pub height: Option<u32>,

    /// Iteration budget per pixel [default: 1000].
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Left edge of the plane window [default: -2.0].
    #[arg(long, allow_negative_numbers = true)]
    pub min_real: Option<f64>,

    /// Right edge of the plane window [default: 1.0].
    #[arg(long, allow_negative_numbers = true)]
    pub max_real: Option<f64>,

    /// Top edge of the plane window (first image row) [default: -1.5].
    #[arg(long, allow_negative_numbers = true)]
    pub min_imag: Option<f64>,

    /// Bottom edge of the plane window [default: 1.5].
    #[arg(long, allow_negative_numbers = true)]
    pub max_imag: Option<f64>,

    /// Output PNG path [default: mandelbrot_fractal_pattern.png].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worker threads; 1 renders sequentially [default: number of CPUs].
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Defaults, then the config file if one was given, then flags.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = Config::default();
        if let Some(path) = &self.config {
            config.apply(ConfigFile::load(path)?);
        }
        config.apply(self.overrides());
        config.validate()?;
        Ok(config)
    }

    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            min_real: self.min_real,
            max_real: self.max_real,
            min_imag: self.min_imag,
            max_imag: self.max_imag,
            output: self.output.clone(),
            threads: self.threads,
        }
    }
}
