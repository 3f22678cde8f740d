//! Integration tests for the configuration module

use folio_core::utils::config::MIN_DISTANCE_ENV;
use folio_core::{BlobField, Config, PlacementSampler};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

struct HomeGuard {
    original: Option<String>,
}

impl HomeGuard {
    fn set(path: &std::path::Path) -> Self {
        let original = env::var("HOME").ok();
        env::set_var("HOME", path);
        Self { original }
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
    }
}

#[test]
fn test_config_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");

    let mut original = Config::default();
    original.placement.min_distance = 150.0;
    original.placement.max_attempts = 250;
    original.tilt.max_rotation = 20.0;
    original.blobs.count = 8;
    original.save_to_file(&config_path)?;

    let content = fs::read_to_string(&config_path)?;
    assert!(content.contains("min_distance: 150"));
    assert!(content.contains("max_rotation: 20"));

    let loaded = Config::load_from_file(&config_path)?;
    assert_eq!(loaded, original);

    let sampler = PlacementSampler::from_config(&loaded.placement)?;
    assert_eq!(sampler.min_distance(), 150.0);
    assert_eq!(sampler.max_attempts(), 250);

    let field = BlobField::from_config(&loaded)?;
    assert_eq!(field.len(), 8);
    Ok(())
}

#[test]
#[serial]
fn test_load_or_default_flow() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let _home = HomeGuard::set(temp_dir.path());
    env::remove_var(MIN_DISTANCE_ENV);

    let config = Config::load_or_default()?;
    assert_eq!(config, Config::default());

    let folio_dir = temp_dir.path().join(".folio");
    fs::create_dir_all(&folio_dir)?;
    fs::write(
        folio_dir.join("config.yaml"),
        "placement:\n  min_distance: 60\nblobs:\n  count: 3\n",
    )?;

    let config = Config::load_or_default()?;
    assert_eq!(config.placement.min_distance, 60.0);
    assert_eq!(config.blobs.count, 3);
    assert_eq!(config.placement.max_attempts, 1000);
    Ok(())
}

#[test]
#[serial]
fn test_unreadable_config_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let _home = HomeGuard::set(temp_dir.path());
    env::remove_var(MIN_DISTANCE_ENV);

    let folio_dir = temp_dir.path().join(".folio");
    fs::create_dir_all(&folio_dir)?;
    fs::write(folio_dir.join("config.yaml"), "placement: [not, a, map]\n")?;

    let config = Config::load_or_default()?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
#[serial]
fn test_min_distance_env_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let _home = HomeGuard::set(temp_dir.path());

    env::set_var(MIN_DISTANCE_ENV, "42.5");
    let config = Config::load_or_default();
    env::remove_var(MIN_DISTANCE_ENV);

    assert_eq!(config?.placement.min_distance, 42.5);
    Ok(())
}

#[test]
#[serial]
fn test_invalid_env_override_is_an_error() {
    let mut config = Config::default();
    env::set_var(MIN_DISTANCE_ENV, "far");
    let result = config.apply_env_overrides();
    env::remove_var(MIN_DISTANCE_ENV);

    let err = result.unwrap_err();
    assert!(format!("{:?}", err).contains(MIN_DISTANCE_ENV));
}
