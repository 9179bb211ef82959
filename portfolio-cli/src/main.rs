//! portfolio - render a single-page portfolio to static HTML
//!
//! ```text
//! portfolio init                       # write portfolio.toml with the defaults
//! portfolio build -c portfolio.toml    # render index.html
//! portfolio timeline -c portfolio.toml # when does each section reveal?
//! ```
//!
//! Logs go to stderr so `build --out -` can be piped.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use portfolio::reveal::Trigger;
use portfolio::timeline::{SectionKind, SectionTimeline, simulate};
use portfolio::types::SiteConfig;
use portfolio::{RenderContext, render_page};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Render a single-page personal portfolio to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to a single HTML file
    Build {
        /// Site configuration (TOML or JSON); built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file, or `-` for stdout
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,
    },

    /// Write the default configuration as TOML
    Init {
        /// Destination file
        #[arg(short, long, default_value = "portfolio.toml")]
        out: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Simulate scrolling and print when each section reveals
    Timeline {
        /// Site configuration (TOML or JSON); built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Viewport height in px; every section is this tall
        #[arg(long, default_value_t = 900)]
        viewport_height: u32,

        /// Scroll distance between samples in px
        #[arg(long, default_value_t = 100)]
        scroll_step: u32,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            debug!("No config given, using built-in defaults");
            Ok(SiteConfig::default())
        }
    }
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn build(config: Option<&Path>, out: &Path) -> Result<()> {
    let config = load_config(config)?;
    let html = render_page(&config, &RenderContext::now());

    if is_stdout(out) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .context("Failed to write page to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    } else {
        fs::write(out, &html).with_context(|| format!("Failed to write {}", out.display()))?;
    }

    info!(
        sections = SectionKind::ALL.len(),
        projects = config.gallery.projects.len(),
        bytes = html.len(),
        "Wrote {}",
        if is_stdout(out) {
            "page to stdout".to_string()
        } else {
            out.display().to_string()
        }
    );
    Ok(())
}

fn init(out: &Path, force: bool) -> Result<()> {
    if out.exists() && !force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            out.display()
        );
    }

    let toml = SiteConfig::default()
        .to_toml_string()
        .context("Failed to encode default config")?;
    fs::write(out, toml).with_context(|| format!("Failed to write {}", out.display()))?;

    info!("Wrote default config to {}", out.display());
    Ok(())
}

fn describe_trigger(trigger: Trigger) -> String {
    match trigger {
        Trigger::Mount => "mount".to_string(),
        Trigger::Viewport { margin_px } => format!("viewport -{}px", margin_px),
    }
}

fn print_section(out: &mut impl Write, section: &SectionTimeline) -> io::Result<()> {
    let revealed = match section.revealed_at_scroll {
        Some(offset) => format!("revealed at {}px", offset),
        None => "never revealed".to_string(),
    };
    writeln!(
        out,
        "{:<8} {:<16} {}  (settles after {:.2}s)",
        section.section.label(),
        describe_trigger(section.trigger),
        revealed,
        section.settles_after()
    )?;
    for cue in &section.cues {
        writeln!(
            out,
            "    {:>5.2}s .. {:>5.2}s  {}",
            cue.motion.starts_at(),
            cue.motion.settles_at(),
            cue.label
        )?;
    }
    Ok(())
}

fn timeline(config: Option<&Path>, viewport_height: u32, scroll_step: u32) -> Result<()> {
    let config = load_config(config)?;
    let report = simulate(
        &config,
        f64::from(viewport_height),
        f64::from(scroll_step),
    );

    let mut stdout = io::stdout().lock();
    for section in &report {
        print_section(&mut stdout, section).context("Failed to write timeline")?;
    }
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("portfolio v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Build { config, out } => build(config.as_deref(), &out),
        Command::Init { out, force } => init(&out, force),
        Command::Timeline {
            config,
            viewport_height,
            scroll_step,
        } => timeline(config.as_deref(), viewport_height, scroll_step),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[portfolio] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
