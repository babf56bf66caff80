//! Site configuration from blogdoc.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Main site configuration from blogdoc.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site title, shown in every page's header
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Optional site description
    pub site_description: Option<String>,

    /// Base path prepended to relative media references when exporting
    /// (images and videos); absolute paths and full URLs are left alone
    #[serde(default = "default_media_base_path")]
    pub media_base_path: String,
}

fn default_site_title() -> String {
    "Blog".to_string()
}

fn default_media_base_path() -> String {
    "/blog/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            site_description: None,
            media_base_path: default_media_base_path(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a blogdoc.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the blogdoc.toml configuration file
    ///
    /// # Returns
    /// * `Ok(SiteConfig)` - Successfully loaded configuration
    /// * `Err(SiteConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        let content = fs::read_to_string(&path)?;
        let config: SiteConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, SiteConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            log::info!(
                "no config at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// Save configuration to a blogdoc.toml file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SiteConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}

/// Errors that can occur when loading or saving site configuration
#[derive(Error, Debug)]
pub enum SiteConfigError {
    /// IO error when reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Error serializing to TOML
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_roundtrip() {
        let config = SiteConfig {
            site_title: "RenderCloud Blog".to_string(),
            site_description: Some("Notes from the render farm".to_string()),
            media_base_path: "/assets/blog/".to_string(),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.site_title, "RenderCloud Blog");
        assert_eq!(
            parsed.site_description.as_deref(),
            Some("Notes from the render farm")
        );
        assert_eq!(parsed.media_base_path, "/assets/blog/");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: SiteConfig = toml::from_str("site_title = \"X\"").unwrap();

        assert_eq!(config.site_title, "X");
        assert_eq!(config.site_description, None);
        assert_eq!(config.media_base_path, "/blog/");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let config = SiteConfig::load_or_default("does/not/exist/blogdoc.toml").unwrap();

        assert_eq!(config.site_title, "Blog");
        assert_eq!(config.media_base_path, "/blog/");
    }
}
