//! Shared utilities: configuration management and error types.

pub mod config;
pub mod error;

// Available exports via submodules:
// config::{Config, PlacementConfig, TiltConfig, BlobConfig}
// error::{FolioError, FolioResult, ResultExt}
