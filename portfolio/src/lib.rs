//! # portfolio
//!
//! Leptos SSR renderer for a single-page personal portfolio.
//!
//! The page is four full-height sections (Hero, Project Gallery, About,
//! Footer) rendered to one self-contained HTML document. Each section enters
//! once, either on mount or when it first scrolls into view, with CSS
//! transitions described by plain-data [`motion::Motion`] values.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::{render_page, RenderContext, types::SiteConfig};
//!
//! let mut config = SiteConfig::default();
//! config.hero.name = "Ada Lovelace".into();
//!
//! let html = render_page(&config, &RenderContext::for_year(2025));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Ada Lovelace"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Input records, each field defaulted from [`defaults`]
//! - [`config`] - Loading a [`types::SiteConfig`] from TOML or JSON
//! - [`components`] - Leptos UI components, one per section
//! - [`motion`] - Entrance animation descriptors
//! - [`reveal`] - One-shot mount / viewport triggers
//! - [`timeline`] - Scroll simulation over the reveal model
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait with no reactive runtime
//! and no hydration. The only script in the output is the small inline
//! runtime that flips `data-reveal` attributes.

#![doc(html_root_url = "https://docs.rs/portfolio/0.3.0")]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod defaults;
pub mod error;
pub mod motion;
pub mod reveal;
pub mod styles;
pub mod timeline;
pub mod types;

pub use error::{PortfolioError, Result};

use chrono::Datelike;
use components::PortfolioDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;
use types::SiteConfig;

/// Values captured once per render that don't come from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderContext {
    /// Calendar year shown in the footer
    pub year: i32,
}

impl RenderContext {
    /// Context for a render happening now.
    pub fn now() -> Self {
        Self {
            year: current_year(),
        }
    }

    /// Context pinned to a given year.
    pub fn for_year(year: i32) -> Self {
        Self { year }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::now()
    }
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render the complete portfolio page.
///
/// Rendering cannot fail: every absent input has already been filled from
/// [`defaults`], and affordances without a URL are simply omitted.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use portfolio::{render_page, RenderContext, types::SiteConfig};
///
/// let html = render_page(&SiteConfig::default(), &RenderContext::now());
/// assert!(html.contains(r#"data-section="footer""#));
/// ```
pub fn render_page(config: &SiteConfig, ctx: &RenderContext) -> String {
    debug!(
        projects = config.gallery.projects.len(),
        strengths = config.about.strengths.len(),
        year = ctx.year,
        "rendering portfolio page"
    );

    let doc = view! {
        <PortfolioDocument config=config.clone() year=ctx.year />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Contacts, Project};

    fn section_pos(html: &str, name: &str) -> usize {
        html.find(&format!(r#"data-section="{}""#, name))
            .unwrap_or_else(|| panic!("{} section missing", name))
    }

    #[test]
    fn renders_default_page() {
        let html = render_page(&SiteConfig::default(), &RenderContext::for_year(2025));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("PORTFOLIO"));
        assert!(html.contains("FEATURED PROJECTS"));
        assert!(html.contains("ABOUT"));
        assert!(html.contains("THANKS FOR"));
        assert!(html.contains("<span>2025</span>"));
    }

    #[test]
    fn sections_render_in_page_order() {
        let html = render_page(&SiteConfig::default(), &RenderContext::for_year(2025));
        let hero = section_pos(&html, "hero");
        let gallery = section_pos(&html, "gallery");
        let about = section_pos(&html, "about");
        let footer = section_pos(&html, "footer");
        assert!(hero < gallery && gallery < about && about < footer);
    }

    #[test]
    fn every_section_starts_hidden() {
        let html = render_page(&SiteConfig::default(), &RenderContext::for_year(2025));
        // Stylesheet and runtime mention the attribute too; count markup only.
        let start = html.find("<main").expect("main rendered");
        let end = html.find("</main>").expect("main closed");
        let page = &html[start..end];
        assert_eq!(page.matches(r#"data-reveal="hidden""#).count(), 4);
        assert_eq!(page.matches(r#"data-trigger="mount""#).count(), 1);
        assert_eq!(page.matches(r#"data-trigger="viewport""#).count(), 3);
    }

    #[test]
    fn renders_custom_config() {
        let mut config = SiteConfig::default();
        config.hero.name = "Grace Hopper".into();
        config.hero.contacts = Contacts {
            github: Some("https://github.com/grace".into()),
            ..Contacts::none()
        };
        config.gallery.projects = vec![Project {
            title: "Compiler".into(),
            live_url: Some("https://a0.dev".into()),
            ..Default::default()
        }];

        let html = render_page(&config, &RenderContext::for_year(1952));
        assert!(html.contains("<title>Grace Hopper | Portfolio</title>"));
        assert_eq!(html.matches(r#"class="contact-tile""#).count(), 1);
        assert_eq!(html.matches("<article").count(), 1);
        assert!(html.contains(r#"href="https://a0.dev""#));
    }

    #[test]
    fn render_context_now_uses_current_year() {
        assert_eq!(RenderContext::now().year, current_year());
    }
}
