//! End-to-End CLI tests for the portfolio binary

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the bundled demo configuration
fn demo_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/portfolio.toml")
}

/// Get a command pointing to the portfolio binary
fn portfolio() -> Command {
    cargo_bin_cmd!("portfolio")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        portfolio()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("init"))
            .stdout(predicate::str::contains("timeline"));
    }

    #[test]
    fn shows_version() {
        portfolio()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        portfolio().assert().failure();
    }
}

// ============================================
// build
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_every_section() {
        let tmp = TempDir::new().expect("tempdir");
        let out = tmp.path().join("index.html");

        portfolio()
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(&out).expect("page written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        for section in ["hero", "gallery", "about", "footer"] {
            assert!(
                html.contains(&format!(r#"data-section="{}""#, section)),
                "missing {} section",
                section
            );
        }
    }

    #[test]
    fn writes_to_stdout_with_dash() {
        portfolio()
            .args(["build", "--out", "-"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("FEATURED PROJECTS"));
    }

    #[test]
    fn uses_demo_config() {
        portfolio()
            .args(["build", "--out", "-", "--config"])
            .arg(demo_config())
            .assert()
            .success()
            .stdout(predicate::str::contains("Jordan Reyes"))
            .stdout(predicate::str::contains(r#"data-channel="github""#))
            .stdout(predicate::str::contains("mailto:").not());
    }

    #[test]
    fn missing_config_fails() {
        let tmp = TempDir::new().expect("tempdir");
        portfolio()
            .args(["build", "--out", "-", "--config"])
            .arg(tmp.path().join("nope.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }

    #[test]
    fn unsupported_extension_fails() {
        let tmp = TempDir::new().expect("tempdir");
        let config = tmp.path().join("site.yaml");
        fs::write(&config, "hero: {}").expect("write config");

        portfolio()
            .args(["build", "--out", "-", "--config"])
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("site.yaml"));
    }
}

// ============================================
// init
// ============================================

mod init {
    use super::*;

    #[test]
    fn writes_loadable_defaults() {
        let tmp = TempDir::new().expect("tempdir");
        let config = tmp.path().join("portfolio.toml");

        portfolio()
            .args(["init", "--out"])
            .arg(&config)
            .assert()
            .success();

        let text = fs::read_to_string(&config).expect("config written");
        assert!(text.contains("[hero]"));
        assert!(text.contains("Your Name"));

        portfolio()
            .args(["build", "--out", "-", "--config"])
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("Your Name"));
    }

    #[test]
    fn refuses_to_overwrite() {
        let tmp = TempDir::new().expect("tempdir");
        let config = tmp.path().join("portfolio.toml");
        fs::write(&config, "# mine").expect("seed file");

        portfolio()
            .args(["init", "--out"])
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));

        assert_eq!(fs::read_to_string(&config).expect("read"), "# mine");
    }

    #[test]
    fn force_overwrites() {
        let tmp = TempDir::new().expect("tempdir");
        let config = tmp.path().join("portfolio.toml");
        fs::write(&config, "# mine").expect("seed file");

        portfolio()
            .args(["init", "--force", "--out"])
            .arg(&config)
            .assert()
            .success();

        assert!(fs::read_to_string(&config).expect("read").contains("[hero]"));
    }
}

// ============================================
// timeline
// ============================================

mod timeline {
    use super::*;

    #[test]
    fn hero_reveals_at_top() {
        portfolio()
            .arg("timeline")
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"hero\s+mount\s+revealed at 0px").unwrap());
    }

    #[test]
    fn reports_every_section_with_cues() {
        portfolio()
            .args(["timeline", "--viewport-height", "900", "--scroll-step", "100"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gallery"))
            .stdout(predicate::str::contains("revealed at 200px"))
            .stdout(predicate::str::contains("footer"))
            .stdout(predicate::str::contains("headline"));
    }

    #[test]
    fn huge_viewport_finishes() {
        portfolio()
            .args(["timeline", "--viewport-height", "4294967295", "--scroll-step", "1"])
            .timeout(std::time::Duration::from_secs(30))
            .assert()
            .success()
            .stdout(predicate::str::contains("never revealed").not());
    }

    #[test]
    fn tiny_viewport_never_reveals() {
        portfolio()
            .args(["timeline", "--viewport-height", "150"])
            .assert()
            .success()
            .stdout(predicate::str::contains("never revealed"));
    }
}
