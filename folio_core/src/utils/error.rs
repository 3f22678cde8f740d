//! Centralized error handling for folio-fx
//!
//! This module follows a two-layer approach:
//! - `thiserror` for library-style errors with proper error types
//! - `anyhow` for application-level error handling with context
//!
//! # Usage
//!
//! ```rust
//! use folio_core::utils::error::{FolioResult, ResultExt};
//!
//! fn read_settings(path: &str) -> FolioResult<String> {
//!     std::fs::read_to_string(path).with_config_context(path)
//! }
//! ```

use thiserror::Error;

/// Errors raised by the folio-fx models.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Viewport dimensions must be finite and non-negative
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    /// Percentage range must satisfy min <= max <= 100
    #[error("Invalid percent range: {min}..={max}")]
    InvalidPercentRange { min: u32, max: u32 },

    /// Blob index outside the field
    #[error("Unknown blob: {0}")]
    UnknownBlob(usize),

    /// Testimonial index outside the list
    #[error("Unknown testimonial: {0}")]
    UnknownTestimonial(usize),

    /// Filter button index outside the button row
    #[error("Unknown filter button: {0}")]
    UnknownFilterButton(usize),

    /// Tilt card index outside the page
    #[error("Unknown card: {0}")]
    UnknownCard(usize),

    /// Contact form field that was never registered
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Navigation link label that matches no link
    #[error("Unknown navigation link: {0}")]
    UnknownLink(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for folio-fx operations
pub type FolioResult<T> = anyhow::Result<T>;

/// Extension trait for adding folio-specific context to errors
pub trait ResultExt<T> {
    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> FolioResult<T>;

    /// Add file operation context to an error
    fn with_file_context(self, path: &str) -> FolioResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_config_context(self, setting: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }

    fn with_file_context(self, path: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }
}
