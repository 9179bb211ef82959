//! Errors raised at the configuration boundary.
//!
//! Rendering itself cannot fail; only reading and writing config files can.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(thiserror::Error, Debug)]
pub enum PortfolioError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported config format: {} (expected .toml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_file() {
        let err = PortfolioError::UnsupportedFormat {
            path: PathBuf::from("site.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("site.yaml"));
        assert!(msg.contains("unsupported config format"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;

        let err = PortfolioError::Io {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("failed to read missing.toml"));
        assert!(err.source().is_some());
    }
}
