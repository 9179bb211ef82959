//! Root document component - the complete HTML page
//!
//! Head with the embedded stylesheet and a `<noscript>` fallback, body with
//! the page and the inline reveal runtime.

use leptos::prelude::*;

use super::page::HomePage;
use crate::styles::{NOSCRIPT_CSS, PORTFOLIO_CSS};
use crate::types::SiteConfig;

/// The complete HTML document for the portfolio
#[component]
pub fn PortfolioDocument(config: SiteConfig, year: i32) -> impl IntoView {
    let title = config.document_title();
    let lang = config.page.lang.clone();

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PORTFOLIO_CSS}</style>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <HomePage config=config year=year />
                <script>{REVEAL_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Flips each section's `data-reveal` to `visible` once its trigger fires.
///
/// Mount sections flip two animation frames after a forced reflow. Viewport
/// sections get one IntersectionObserver each, with the root margin shrunk by
/// `data-margin`, and are unobserved after the first hit.
const REVEAL_SCRIPT: &str = r#"
(() => {
  const reveal = (el) => { el.dataset.reveal = 'visible'; };
  const sections = Array.from(document.querySelectorAll('[data-reveal="hidden"]'));

  // 1. Mount triggers. The hidden pose must be styled before the flip.
  const mounted = sections.filter(el => el.dataset.trigger === 'mount');
  mounted.forEach(el => { void el.offsetWidth; });
  requestAnimationFrame(() => requestAnimationFrame(() => mounted.forEach(reveal)));

  // 2. Viewport triggers
  const watched = sections.filter(el => el.dataset.trigger === 'viewport');
  if (!('IntersectionObserver' in window)) {
    watched.forEach(reveal);
    return;
  }
  watched.forEach(el => {
    const margin = parseInt(el.dataset.margin || '0', 10) || 0;
    const observer = new IntersectionObserver((entries) => {
      entries.forEach(entry => {
        if (!entry.isIntersecting) return;
        reveal(entry.target);
        observer.unobserve(entry.target);
      });
    }, { rootMargin: '-' + margin + 'px' });
    observer.observe(el);
  });
})();
"#;
