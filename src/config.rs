use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Caché (0 o negativo = deshabilitado)
    pub cache_size: i64,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            cache_size: match var("CACHE_SIZE") {
                Some(val) if !val.trim().is_empty() => val
                    .trim()
                    .parse()
                    .with_context(|| format!("CACHE_SIZE inválido: {val}"))?,
                _ => defaults.cache_size,
            },
            log_level: var("LOG_LEVEL")
                .map(|val| val.trim().to_lowercase())
                .filter(|val| !val.is_empty())
                .unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validates configuration values for correctness.
    ///
    /// A non-positive cache size is accepted: it disables caching.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            anyhow::bail!(
                "Log level must be one of {:?}, got: {}",
                LOG_LEVELS,
                self.log_level
            );
        }

        Ok(())
    }

    /// Capacidad efectiva del caché; valores negativos se tratan como 0.
    pub fn cache_capacity(&self) -> usize {
        usize::try_from(self.cache_size).unwrap_or(0)
    }

    /// Returns a summary of the current configuration for logging.
    pub fn summary(&self) -> String {
        let cache = match self.cache_capacity() {
            0 => "disabled".to_string(),
            n => format!("{} entries", n),
        };
        format!("Config Summary: Cache: {}, Log level: {}", cache, self.log_level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_size: 5000,
            log_level: "info".to_string(),
        }
    }
}
