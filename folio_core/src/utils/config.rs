use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_BLOB_COUNT, DEFAULT_BLOB_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_MIN_DISTANCE,
    MAX_PERCENT, MIN_PERCENT, TILT_HOVER_SCALE, TILT_MAX_ROTATION, TILT_PERSPECTIVE,
};
use crate::utils::error::{FolioError, ResultExt};

/// Environment variable overriding `placement.min_distance`.
pub const MIN_DISTANCE_ENV: &str = "FOLIO_MIN_DISTANCE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub placement: PlacementConfig,
    pub tilt: TiltConfig,
    pub blobs: BlobConfig,
}

/// Settings for the minimum-distance sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub min_distance: f64,
    pub max_attempts: u32,
    pub min_percent: u32,
    pub max_percent: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_percent: MIN_PERCENT,
            max_percent: MAX_PERCENT,
        }
    }
}

/// Settings for hover tilt cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Rotation limit in degrees, applied to both axes
    pub max_rotation: f64,
    /// CSS perspective distance in pixels
    pub perspective: f64,
    pub hover_scale: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotation: TILT_MAX_ROTATION,
            perspective: TILT_PERSPECTIVE,
            hover_scale: TILT_HOVER_SCALE,
        }
    }
}

/// Decorative background blobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobConfig {
    pub count: usize,
    /// Blob diameter in pixels
    pub size: f64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BLOB_COUNT,
            size: DEFAULT_BLOB_SIZE,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_file_context(&path.display().to_string())?;
        let config: Config = serde_yaml::from_str(&content).map_err(FolioError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config in the on-disk YAML format.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self).map_err(FolioError::from)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(FolioError::from)?;
        }

        let content = self.to_yaml()?;
        fs::write(path, content).map_err(FolioError::from)?;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
            .join("config.yaml")
    }

    /// Loads the user config, falling back to defaults when the file is
    /// missing or unreadable, then applies environment overrides.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::get_config_path();

        let mut config = if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::get_config_path())
    }

    /// Applies `FOLIO_MIN_DISTANCE` when set.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(MIN_DISTANCE_ENV) {
            let value = raw.trim().parse::<f64>().with_config_context(MIN_DISTANCE_ENV)?;
            tracing::debug!(min_distance = value, "min distance overridden from environment");
            self.placement.min_distance = value;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        let placement = &self.placement;
        if !placement.min_distance.is_finite() {
            return Err(FolioError::Config("placement.min_distance must be finite".into()).into());
        }
        if placement.min_percent > placement.max_percent || placement.max_percent > 100 {
            return Err(FolioError::InvalidPercentRange {
                min: placement.min_percent,
                max: placement.max_percent,
            }
            .into());
        }
        if !(self.tilt.max_rotation.is_finite() && self.tilt.max_rotation >= 0.0) {
            return Err(FolioError::Config("tilt.max_rotation must be non-negative".into()).into());
        }
        if !(self.tilt.perspective.is_finite() && self.tilt.perspective > 0.0) {
            return Err(FolioError::Config("tilt.perspective must be positive".into()).into());
        }
        if !(self.blobs.size.is_finite() && self.blobs.size >= 0.0) {
            return Err(FolioError::Config("blobs.size must be non-negative".into()).into());
        }
        Ok(())
    }
}
