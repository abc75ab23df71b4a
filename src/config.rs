use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// HTTP timeout for image fetches, in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with image fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Image loading configuration
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Configuration for the image-loading collaborator
#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    /// Whether row images are fetched at all
    #[serde(default = "default_images_enabled")]
    pub enabled: bool,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enabled: default_images_enabled(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            images: ImagesConfig::default(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "recetario/0.1".to_string()
}

fn default_images_enabled() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECETARIO__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECETARIO__IMAGES__ENABLED
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECETARIO__IMAGES__ENABLED
            .add_source(
                Environment::with_prefix("RECETARIO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_without_file_uses_defaults() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("RECETARIO_"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        // No config.toml is present in the repository, so load() falls
        // through to the serde defaults
        let config = AppConfig::load().expect("defaults should load without a file");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.user_agent, "recetario/0.1");
        assert!(config.images.enabled);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_user_agent(), "recetario/0.1");
        assert!(default_images_enabled());
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.images.enabled);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = toml_str(
            r#"
            timeout = 5

            [images]
            enabled = false
            "#,
        );
        assert_eq!(config.timeout, 5);
        assert_eq!(config.user_agent, "recetario/0.1");
        assert!(!config.images.enabled);
    }

    fn toml_str(raw: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
