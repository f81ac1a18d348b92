//! Host configuration, loaded from YAML.
//!
//! None of these values affect stepping correctness. They size the window,
//! pace the ticker, seed the random fill, and size the classification pool.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::automaton::seeding::DEFAULT_FILL_DENSITY;
use crate::error::{LifeError, Result};

/// Top-level configuration. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Visible rows.
    pub rows: usize,
    /// Visible columns.
    pub cols: usize,
    /// Milliseconds between scheduled steps.
    pub step_interval_ms: u64,
    /// Probability a cell starts alive on random fill.
    pub fill_density: f64,
    /// Edge length of one cell on screen, in pixels.
    pub cell_size_px: u32,
    /// Classification pool size.
    pub threads: usize,
    /// Seed for reproducible random fills.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        LifeConfig {
            rows: 40,
            cols: 40,
            step_interval_ms: 500,
            fill_density: DEFAULT_FILL_DENSITY,
            cell_size_px: 15,
            threads: 1,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Load and validate a YAML file.
    ///
    /// # Errors
    ///
    /// [`LifeError::ConfigIo`] if the file cannot be read,
    /// [`LifeError::ConfigYaml`] if it is not valid YAML, or
    /// [`LifeError::InvalidConfig`] if a value is unusable.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate a YAML string.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fill_density) {
            return Err(LifeError::InvalidConfig(format!(
                "fill_density {} is not within [0, 1]",
                self.fill_density
            )));
        }
        if self.step_interval_ms == 0 {
            return Err(LifeError::InvalidConfig("step_interval_ms must be positive".into()));
        }
        if self.cell_size_px == 0 {
            return Err(LifeError::InvalidConfig("cell_size_px must be positive".into()));
        }
        if i32::try_from(self.rows).is_err() || i32::try_from(self.cols).is_err() {
            return Err(LifeError::InvalidConfig(format!(
                "{}x{} window exceeds coordinate range",
                self.rows, self.cols
            )));
        }
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Square window that fits a `width_px x height_px` viewport.
    pub fn grid_for_viewport(&self, width_px: u32, height_px: u32) -> (usize, usize) {
        let n = (width_px.min(height_px) / self.cell_size_px.max(1)) as usize;
        (n, n)
    }

    /// Resize the window to fit a viewport.
    pub fn fit_viewport(mut self, width_px: u32, height_px: u32) -> Self {
        let (rows, cols) = self.grid_for_viewport(width_px, height_px);
        self.rows = rows;
        self.cols = cols;
        self
    }
}
