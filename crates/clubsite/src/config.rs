//! Configuration management for clubsite.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user config dir holding the config file.
const CONFIG_DIR_NAME: &str = "clubsite";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CLUBSITE_";

/// Upper bound for the simulated join delay.
const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CLUBSITE_`, `__` between levels,
///    e.g. `CLUBSITE_SERVER__PORT=9000`)
/// 2. TOML config file at `~/.config/clubsite/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity and metadata.
    pub site: SiteConfig,
    /// Fixture location.
    pub content: ContentConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Join form settings.
    pub join: JoinConfig,
    /// Static export settings.
    pub build: BuildConfig,
}

/// Site identity shown in page chrome and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Club name, used as the title suffix and brand.
    pub name: String,
    /// One-line description used in the footer and meta tags.
    pub tagline: String,
    /// Public origin used for Open Graph URLs.
    pub base_url: String,
    /// Name shown in the footer copyright line.
    pub copyright_holder: String,
}

/// Where fixtures are read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory containing `groups.json`, `projects.json` and friends.
    pub data_dir: PathBuf,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Join form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// Length of the simulated submission delay in milliseconds.
    pub submit_delay_ms: u64,
}

/// Static export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory the HTML tree is written to.
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "TechBit Coding Club".to_string(),
            tagline: "Empowering students to explore, learn, and build in AI, Data Science, Java, and MERN."
                .to_string(),
            base_url: "https://coding-club.example.com".to_string(),
            copyright_holder: "Godavari College Of Engineering".to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "site.name must not be empty".to_string(),
            });
        }

        if !(self.site.base_url.starts_with("http://") || self.site.base_url.starts_with("https://"))
        {
            return Err(Error::ConfigValidation {
                message: format!(
                    "site.base_url must start with http:// or https:// (got {})",
                    self.site.base_url
                ),
            });
        }

        if self.server.port == 0 {
            return Err(Error::ConfigValidation {
                message: "server.port must be greater than 0".to_string(),
            });
        }

        if self.join.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            return Err(Error::ConfigValidation {
                message: format!(
                    "join.submit_delay_ms ({}) cannot exceed {MAX_SUBMIT_DELAY_MS}",
                    self.join.submit_delay_ms
                ),
            });
        }

        Ok(())
    }

    /// Get the `host:port` pair the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get the join delay as a Duration.
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.join.submit_delay_ms)
    }

    /// Absolute public URL of a site path.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        self.site.page_url(path)
    }
}

impl SiteConfig {
    /// Absolute public URL of a site path, for Open Graph metadata.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path == "/" || path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{}", path.trim_start_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.site.name, "TechBit Coding Club");
        assert_eq!(config.content.data_dir, PathBuf::from("data"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.join.submit_delay_ms, 1000);
        assert_eq!(config.build.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_site_name() {
        let mut config = Config::default();
        config.site.name = "   ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("site.name"));
    }

    #[test]
    fn test_validate_bad_base_url() {
        let mut config = Config::default();
        config.site.base_url = "coding-club.example.com".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("site.base_url"));
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("server.port"));
    }

    #[test]
    fn test_validate_excessive_delay() {
        let mut config = Config::default();
        config.join.submit_delay_ms = 120_000;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("submit_delay_ms"));
    }

    #[test]
    fn test_bind_address() {
        let mut config = Config::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 3000;

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_submit_delay() {
        assert_eq!(Config::default().submit_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_page_url() {
        let mut config = Config::default();
        config.site.base_url = "https://club.example.org/".to_string();

        assert_eq!(config.page_url("/"), "https://club.example.org");
        assert_eq!(
            config.page_url("/groups/ai-ml"),
            "https://club.example.org/groups/ai-ml"
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("clubsite"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        figment::Jail::expect_with(|_jail| {
            // A missing file falls back to defaults
            let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "[server]\nport = 9090\n\n[join]\nsubmit_delay_ms = 10\n",
            )?;

            let config = Config::load_from(Some(PathBuf::from("config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.join.submit_delay_ms, 10);
            assert_eq!(config.site, SiteConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[site]\nbase_url = \"ftp://nope\"\n")?;

            let result = Config::load_from(Some(PathBuf::from("config.toml")));
            assert!(matches!(result, Err(Error::ConfigValidation { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[server]\nport = 9090\nhost = \"0.0.0.0\"\n")?;
            jail.set_env("CLUBSITE_SERVER__PORT", "9100");
            jail.set_env("CLUBSITE_JOIN__SUBMIT_DELAY_MS", "25");

            let config = Config::load_from(Some(PathBuf::from("config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.join.submit_delay_ms, 25);
            Ok(())
        });
    }

    #[test]
    fn test_site_config_deserialize_partial() {
        let json = r#"{"name": "Byte Club"}"#;
        let site: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(site.name, "Byte Club");
        assert_eq!(site.base_url, SiteConfig::default().base_url);
    }
}
