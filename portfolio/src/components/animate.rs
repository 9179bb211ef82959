//! Generic "animate on trigger" helpers.
//!
//! An element opts into the entrance machinery by carrying the `motion` class
//! and its descriptor's inline style. The enclosing section's `data-reveal`
//! attribute decides which pose is in effect.

use leptos::prelude::*;

use crate::motion::Motion;

/// Class list for an animated element: `motion` plus any extra classes.
pub fn motion_class(extra: &str) -> String {
    if extra.is_empty() {
        "motion".to_string()
    } else {
        format!("motion {}", extra)
    }
}

/// A `<div>` that enters with `motion` when its section reveals.
#[component]
pub fn Reveal(
    motion: Motion,
    /// Extra CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=motion_class(class) style=motion.to_style()>
            {children()}
        </div>
    }
}
