//! Leptos UI components for rendering the portfolio page.
//!
//! Each section is a `#[component]` function taking its own slice of
//! [`crate::types::SiteConfig`]; every prop is optional and falls back to the
//! values in [`crate::defaults`].
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument
//! └── HomePage
//!     ├── Hero            (mount trigger)
//!     │   └── ContactTile (per non-empty contact)
//!     ├── ProjectGallery  (viewport trigger)
//!     │   └── ProjectCell (per project, span from SPAN_PATTERN)
//!     ├── AboutSection    (viewport trigger)
//!     │   └── StrengthItem
//!     └── Footer          (viewport trigger)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but a single
//! section can be rendered on its own:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use portfolio::components::Footer;
//!
//! let html = view! { <Footer year=2025 /> }.to_html();
//! assert!(html.contains("THANKS FOR"));
//! ```

mod about;
mod animate;
mod document;
mod footer;
mod gallery;
mod hero;
mod icons;
mod page;

pub use about::{ABOUT_TRIGGER, AboutSection, QUOTE_AUTHOR, QUOTE_TEXT};
pub use animate::{Reveal, motion_class};
pub use document::PortfolioDocument;
pub use footer::{FOOTER_TRIGGER, Footer};
pub use gallery::{CellSpan, GALLERY_TRIGGER, ProjectGallery, SPAN_PATTERN, span_for};
pub use hero::{HERO_TRIGGER, Hero};
pub use icons::*;
pub use page::HomePage;

/// Per-section cue lists, consumed by [`crate::timeline`].
pub mod cues {
    pub use super::about::cues as about;
    pub use super::footer::cues as footer;
    pub use super::gallery::cues as gallery;
    pub use super::hero::cues as hero;
}
