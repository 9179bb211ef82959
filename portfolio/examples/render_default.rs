//! Render the built-in default portfolio.
//!
//! Run with: `cargo run --example render_default`

use portfolio::{RenderContext, render_page, types::SiteConfig};

fn main() -> portfolio::Result<()> {
    // Every field falls back to the built-in defaults
    let mut config = SiteConfig::default();
    config.hero.name = "Sam Doe".into();

    let html = render_page(&config, &RenderContext::now());

    let output_path = "portfolio.html";
    std::fs::write(output_path, &html).map_err(|source| portfolio::PortfolioError::Io {
        path: output_path.into(),
        source,
    })?;

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
    Ok(())
}
