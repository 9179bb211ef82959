//! Configuration file support.
//!
//! A site is described by one TOML (preferred) or JSON file. Every key is
//! optional; anything left out falls back to the built-in defaults.
//!
//! ```toml
//! [hero]
//! name = "Ada Lovelace"
//! title = "Analyst"
//!
//! [hero.contacts]
//! github = "https://github.com/ada"
//!
//! [[gallery.projects]]
//! title = "Difference Engine"
//! image_url = "https://example.com/engine.png"
//! tools = ["Brass", "Patience"]
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::{PortfolioError, Result};
use crate::types::SiteConfig;

/// Serialization format of a config file, chosen by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.json` is JSON; `.toml` or no extension is TOML; anything else is rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            None => Ok(ConfigFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ConfigFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ConfigFormat::Json),
            Some(_) => Err(PortfolioError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl SiteConfig {
    /// Load a config file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| PortfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match format {
            ConfigFormat::Toml => {
                toml::from_str(&content).map_err(|source| PortfolioError::Toml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|source| PortfolioError::Json {
                    path: path.to_path_buf(),
                    source,
                })?
            }
        };

        debug!(path = %path.display(), ?format, "loaded site config");
        Ok(config)
    }

    /// Pretty TOML, suitable as a starter file.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactChannel, Contacts, Profile};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create config");
        write!(file, "{}", content).expect("write config");
        path
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(&temp, "site.toml", "");
        let config = SiteConfig::load(&path).expect("load");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_hero_keeps_other_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(
            &temp,
            "site.toml",
            r#"
[hero]
name = "Ada Lovelace"
"#,
        );
        let config = SiteConfig::load(&path).expect("load");
        assert_eq!(config.hero.name, "Ada Lovelace");
        assert_eq!(config.hero.title, Profile::default().title);
        assert_eq!(config.hero.contacts, Contacts::default());
    }

    #[test]
    fn explicit_contacts_table_replaces_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(
            &temp,
            "site.toml",
            r#"
[hero.contacts]
github = "https://github.com/x"
"#,
        );
        let config = SiteConfig::load(&path).expect("load");
        let links = config.hero.contacts.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].channel, ContactChannel::Github);
    }

    #[test]
    fn projects_preserve_file_order() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(
            &temp,
            "site.toml",
            r#"
[[gallery.projects]]
title = "First"
live_url = "https://first.dev"

[[gallery.projects]]
title = "Second"
category = "Tools"
"#,
        );
        let config = SiteConfig::load(&path).expect("load");
        let projects = &config.gallery.projects;
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "First");
        assert_eq!(projects[0].live_link(), Some("https://first.dev"));
        assert_eq!(projects[0].code_link(), None);
        assert_eq!(projects[1].category_label(), Some("Tools"));
        assert_eq!(config.gallery.title, "FEATURED PROJECTS");
    }

    #[test]
    fn loads_json() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(
            &temp,
            "site.json",
            r#"{ "about": { "strengths": [] }, "footer": { "tagline": "bye" } }"#,
        );
        let config = SiteConfig::load(&path).expect("load");
        assert!(config.about.strengths.is_empty());
        assert_eq!(config.footer.tagline, "bye");
    }

    #[test]
    fn rejects_unknown_extension() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(&temp, "site.yaml", "hero: {}");
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, PortfolioError::UnsupportedFormat { .. }));
    }

    #[test]
    fn reports_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(matches!(err, PortfolioError::Io { .. }));
    }

    #[test]
    fn reports_bad_toml() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_file(&temp, "site.toml", "[hero\nname = 1");
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, PortfolioError::Toml { .. }));
    }

    #[test]
    fn default_config_survives_toml_round_trip() {
        let text = SiteConfig::default().to_toml_string().expect("encode");
        let parsed: SiteConfig = toml::from_str(&text).expect("decode");
        assert_eq!(parsed, SiteConfig::default());
    }
}
