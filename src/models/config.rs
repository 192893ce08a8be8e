use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Configuration options for the Farm-Easy catalog service.
///
/// Read from `config/settings.yaml` (optional) and then from `APP__*`
/// environment variables, e.g. `APP__PORT=9000`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// JSON seed with products, categories and sellers.
    pub catalog_path: String,
    /// Show sold, expired and pending listings in browse results.
    pub include_inactive: bool,
    pub default_per_page: usize,
    pub max_per_page: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            catalog_path: "data/catalog.json".to_string(),
            include_inactive: false,
            default_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_per_page: 100,
        }
    }
}

impl ServerConfig {
    /// Loads settings from `path` (without extension) layered under the environment.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Clamps a requested page size to the configured bounds.
    pub fn per_page(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_per_page)
            .clamp(1, self.max_per_page.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load("does/not/exist/settings").unwrap();
        assert_eq!(config.port, ServerConfig::default().port);
        assert!(!config.include_inactive);
    }

    #[test]
    fn reads_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "port: 9100\ninclude_inactive: true\nmax_per_page: 10").unwrap();

        let config = ServerConfig::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.port, 9100);
        assert!(config.include_inactive);
        assert_eq!(config.max_per_page, 10);
        assert_eq!(config.address, "127.0.0.1");
    }

    #[test]
    fn per_page_is_clamped() {
        let config = ServerConfig::default();
        assert_eq!(config.per_page(None), DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(config.per_page(Some(0)), 1);
        assert_eq!(config.per_page(Some(5000)), 100);
    }
}
