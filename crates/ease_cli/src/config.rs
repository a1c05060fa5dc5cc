//! Animation file handling (ease.toml)

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One animation run, as read from `ease.toml`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimationConfig {
    /// Catalog curve name
    #[serde(default = "default_curve")]
    pub curve: String,
    /// Value at the first frame
    #[serde(default = "default_begin")]
    pub begin: f64,
    /// Value the animation heads to
    #[serde(default = "default_finish")]
    pub finish: f64,
    /// Duration in frames
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Starting frame
    #[serde(default)]
    pub start: f64,
    /// Frames per second for the driver loop
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Overshoot for the Back curves
    #[serde(default)]
    pub overshoot: Option<f64>,
}

fn default_curve() -> String {
    "easeInCubic".to_string()
}

fn default_begin() -> f64 {
    100.0
}

fn default_finish() -> f64 {
    220.0
}

fn default_duration() -> f64 {
    30.0
}

fn default_fps() -> u32 {
    60
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            curve: default_curve(),
            begin: default_begin(),
            finish: default_finish(),
            duration: default_duration(),
            start: 0.0,
            fps: default_fps(),
            overshoot: None,
        }
    }
}

impl AnimationConfig {
    /// Load an animation file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Total change applied over the duration
    pub fn change(&self) -> f64 {
        self.finish - self.begin
    }

    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            bail!("fps must be greater than zero");
        }
        Ok(())
    }
}
