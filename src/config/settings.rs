//! Application settings loading from config.toml
//!
//! The optional TOML file can override the database URL and declare an
//! initial product catalog used to seed the database at startup. A missing
//! file yields defaults; a malformed file is a hard configuration error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Optional database URL; `DATABASE_URL` in the environment wins over this
    pub database_url: Option<String>,
    /// Products to seed into the catalog on startup
    #[serde(default)]
    pub catalog: Vec<ProductSeed>,
}

/// Configuration for a single seeded product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Product name; seeding skips names already in the catalog
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Price per unit
    pub price: f64,
    /// Initial stock quantity
    pub stock_quantity: f64,
}

/// Loads application settings from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the default location (./config.toml), falling back to
/// defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<AppConfig> {
    let path = Path::new("config.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
            database_url = "sqlite://data/shop.sqlite"

            [[catalog]]
            name = "Coffee"
            description = "Whole beans, 1kg"
            price = 14.50
            stock_quantity = 25.0

            [[catalog]]
            name = "Mug"
            price = 6.0
            stock_quantity = 40.0
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.database_url,
            Some("sqlite://data/shop.sqlite".to_string())
        );
        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.catalog[0].name, "Coffee");
        assert_eq!(config.catalog[0].price, 14.50);
        assert_eq!(config.catalog[1].description, None);
        assert_eq!(config.catalog[1].stock_quantity, 40.0);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.database_url, None);
        assert!(config.catalog.is_empty());
    }
}
