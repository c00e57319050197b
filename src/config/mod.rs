/// Database connection and table creation
pub mod database;

/// Application settings loading from config.toml
pub mod settings;
