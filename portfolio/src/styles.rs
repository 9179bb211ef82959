//! CSS for the portfolio page.
//!
//! The stylesheet is embedded in the document so the output is a single
//! self-contained file. Entrance animations are driven entirely from here:
//! every `.motion` element carries its poses as custom properties (see
//! [`crate::motion::Motion::to_style`]) and the enclosing section's
//! `data-reveal` attribute selects which pose applies.
//!
//! # Customization
//!
//! ```rust
//! use portfolio::styles::PORTFOLIO_CSS;
//!
//! let accent = ".hero-title { color: #f5d90a; }";
//! let combined = format!("{}\n{}", PORTFOLIO_CSS, accent);
//! assert!(combined.contains(".collage"));
//! ```

/// Complete CSS for the page - monochrome, film-grain dark theme.
///
/// This CSS provides:
/// - Base typography and the near-black palette
/// - The `data-reveal` / `.motion` entrance machinery
/// - Hero badges and contact tiles
/// - The 12-column collage grid and its hover overlay
/// - About's two-column editorial layout
/// - Footer buttons
/// - A `prefers-reduced-motion` override
pub const PORTFOLIO_CSS: &str = r#"
:root {
    --bg-page: #0a0a0a;
    --bg-panel: rgba(26, 26, 26, 0.5);
    --text-bright: #ffffff;
    --text-soft: rgba(255, 255, 255, 0.8);
    --text-dim: rgba(255, 255, 255, 0.6);
    --text-faint: rgba(255, 255, 255, 0.4);
    --border-subtle: rgba(255, 255, 255, 0.1);
    --border-visible: rgba(255, 255, 255, 0.2);
    --border-strong: rgba(255, 255, 255, 0.3);
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --container-max: 72rem;
    --container-wide: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--bg-page);
    color: var(--text-bright);
    line-height: 1.5;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
    max-width: 100%;
}

/* Sections --------------------------------------------------------------- */

.section {
    position: relative;
    min-height: 100vh;
    padding: 8rem 1.5rem;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    width: 100%;
}

.container-wide {
    max-width: var(--container-wide);
    margin: 0 auto;
}

.section-title {
    font-size: clamp(3.75rem, 9vw, 6rem);
    font-weight: 900;
    letter-spacing: -0.05em;
    margin: 0 0 5rem;
}

.section-title.centered {
    text-align: center;
}

/* Entrance machinery ------------------------------------------------------ */

.motion {
    transition-property: opacity, transform;
    transition-duration: var(--motion-duration, 0s);
    transition-delay: var(--motion-delay, 0s);
    transition-timing-function: var(--motion-ease, ease);
    will-change: opacity, transform;
}

[data-reveal="hidden"] .motion {
    opacity: var(--from-opacity, 1);
    transform: translate(var(--from-x, 0px), var(--from-y, 0px)) scale(var(--from-scale, 1));
}

[data-reveal="visible"] .motion {
    opacity: var(--to-opacity, 1);
    transform: translate(var(--to-x, 0px), var(--to-y, 0px)) scale(var(--to-scale, 1));
}

/* Hero -------------------------------------------------------------------- */

.hero {
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 5rem 1.5rem;
}

.film-grain::before {
    content: "";
    position: absolute;
    inset: 0;
    pointer-events: none;
    opacity: 0.05;
    background-image: radial-gradient(rgba(255, 255, 255, 0.6) 1px, transparent 1px);
    background-size: 3px 3px;
}

.hero-stack > * + * {
    margin-top: 4rem;
}

.hero-title {
    font-size: clamp(3rem, 12vw, 10rem);
    font-weight: 900;
    text-align: center;
    letter-spacing: -0.05em;
    line-height: 1;
    margin: 0;
}

.hero-profile {
    display: grid;
    gap: 3rem;
    align-items: center;
}

.hero-photo {
    display: flex;
    justify-content: center;
}

.hero-photo-frame {
    position: relative;
}

.hero-photo-glow {
    position: absolute;
    inset: 0;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.1);
    filter: blur(40px);
}

.hero-photo img {
    position: relative;
    width: 16rem;
    height: 16rem;
    object-fit: cover;
    border-radius: 9999px;
    border: 4px solid var(--border-visible);
}

.hero-intro {
    border: 1px solid var(--border-visible);
    padding: 2rem;
    background: var(--bg-panel);
    backdrop-filter: blur(4px);
}

.hero-name {
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 700;
    margin: 0 0 0.5rem;
}

.hero-role {
    font-size: 1.25rem;
    color: var(--text-dim);
    margin: 0 0 1rem;
}

.hero-bio {
    color: var(--text-soft);
    line-height: 1.625;
    margin: 0;
}

.contact-row {
    display: flex;
    justify-content: center;
    gap: 1.5rem;
}

.contact-tile {
    width: 3.5rem;
    height: 3.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 1px solid var(--border-visible);
    transition: background-color 0.15s;
}

.contact-tile:hover,
.contact-tile:focus-visible {
    background: rgba(255, 255, 255, 0.1);
}

.badge-group-label {
    text-align: center;
    font-size: 0.875rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: var(--text-dim);
    margin: 0 0 1rem;
}

.badge-list {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.75rem;
    list-style: none;
    margin: 0;
    padding: 0;
}

.tool-badge {
    padding: 0.5rem 1.5rem;
    border: 1px solid var(--border-visible);
    background: rgba(26, 26, 26, 0.3);
    color: rgba(255, 255, 255, 0.9);
    font-size: 0.875rem;
    font-weight: 500;
}

.skill-badge {
    padding: 0.5rem 1rem;
    border: 1px solid var(--border-strong);
    border-radius: 9999px;
    font-size: 0.875rem;
}

/* Gallery ----------------------------------------------------------------- */

.collage {
    display: grid;
    grid-template-columns: 1fr;
    grid-auto-rows: 300px;
    gap: 1.5rem;
}

.project-cell {
    position: relative;
    overflow: hidden;
    border: 1px solid var(--border-subtle);
}

.cell-media {
    position: absolute;
    inset: 0;
}

.cell-media img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.7s;
}

.cell-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent);
    opacity: 0.8;
    transition: opacity 0.15s;
}

.cell-category {
    position: absolute;
    top: 1rem;
    left: 1rem;
    z-index: 10;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--text-soft);
    border: 1px solid var(--border-strong);
    padding: 0.25rem 0.75rem;
    background: rgba(0, 0, 0, 0.3);
    backdrop-filter: blur(4px);
}

.cell-content {
    position: absolute;
    inset: 0;
    z-index: 10;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    transform: translateY(1rem);
    transition: transform 0.5s;
}

.cell-title {
    font-size: clamp(1.5rem, 3vw, 1.875rem);
    font-weight: 700;
    margin: 0 0 0.5rem;
}

.cell-reveal {
    opacity: 0;
    transition: opacity 0.5s;
}

.cell-description {
    color: var(--text-soft);
    margin: 0 0 1rem;
}

.cell-tools {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin: 0 0 1rem;
    padding: 0;
    list-style: none;
    transition-delay: 0.1s;
}

.cell-tool {
    font-size: 0.75rem;
    padding: 0.25rem 0.5rem;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid var(--border-visible);
}

.cell-links {
    display: flex;
    gap: 0.75rem;
    transition-delay: 0.15s;
}

.cell-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.875rem;
}

.cell-link:hover {
    color: rgba(255, 255, 255, 0.7);
}

.project-cell:hover .cell-media img,
.project-cell:focus-within .cell-media img {
    transform: scale(1.1);
}

.project-cell:hover .cell-shade,
.project-cell:focus-within .cell-shade {
    opacity: 0.9;
}

.project-cell:hover .cell-content,
.project-cell:focus-within .cell-content {
    transform: translateY(0);
}

.project-cell:hover .cell-reveal,
.project-cell:focus-within .cell-reveal {
    opacity: 1;
}

/* About ------------------------------------------------------------------- */

.about-columns {
    display: grid;
    gap: 4rem;
}

.about-bio {
    border-left: 2px solid var(--border-strong);
    padding-left: 1.5rem;
}

.about-bio p {
    font-size: clamp(1.25rem, 2.5vw, 1.5rem);
    line-height: 1.625;
    font-weight: 300;
    color: rgba(255, 255, 255, 0.9);
    margin: 0;
}

.strength-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.strength {
    border-bottom: 1px solid var(--border-subtle);
    padding-bottom: 1.5rem;
    margin-bottom: 2rem;
}

.strength:last-child {
    border-bottom: 0;
}

.strength-title {
    font-size: 1.125rem;
    font-weight: 700;
    letter-spacing: 0.025em;
    text-transform: uppercase;
    margin: 0 0 0.5rem;
}

.strength-description {
    color: rgba(255, 255, 255, 0.7);
    line-height: 1.625;
    margin: 0;
}

.about-quote {
    margin-top: 6rem;
    text-align: center;
}

.about-quote blockquote {
    font-size: clamp(1.875rem, 4vw, 3rem);
    font-weight: 300;
    font-style: italic;
    color: var(--text-dim);
    max-width: 56rem;
    margin: 0 auto;
}

.about-quote figcaption {
    margin-top: 1rem;
    font-size: 0.875rem;
    letter-spacing: 0.1em;
    color: var(--text-faint);
}

/* Footer ------------------------------------------------------------------ */

.site-footer {
    display: flex;
    align-items: center;
    justify-content: center;
}

.site-footer .container {
    text-align: center;
}

.site-footer .container > * + * {
    margin-top: 4rem;
}

.footer-headline {
    font-size: clamp(3rem, 8vw, 8rem);
    font-weight: 900;
    line-height: 1;
    letter-spacing: -0.05em;
    margin: 0;
}

.footer-buttons {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
}

.footer-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 2rem;
    border: 1px solid var(--border-strong);
    border-radius: 0.375rem;
    font-weight: 500;
    transition: background-color 0.15s;
}

.footer-button:hover,
.footer-button:focus-visible {
    background: rgba(255, 255, 255, 0.1);
}

.footer-tagline {
    color: var(--text-dim);
    font-size: 1.125rem;
    font-style: italic;
    margin: 0 0 1rem;
}

.footer-year {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    color: var(--text-faint);
    font-size: 0.875rem;
    letter-spacing: 0.3em;
}

.footer-rule {
    height: 1px;
    width: 4rem;
    background: var(--border-visible);
}

/* Responsive -------------------------------------------------------------- */

@media (min-width: 768px) {
    .hero-profile,
    .about-columns {
        grid-template-columns: 1fr 1fr;
    }

    .hero-photo {
        justify-content: flex-end;
    }

    .hero-photo img {
        width: 20rem;
        height: 20rem;
    }

    .collage {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .collage {
        grid-template-columns: repeat(12, 1fr);
    }

    .span-wide-tall {
        grid-column: span 7;
        grid-row: span 2;
    }

    .span-narrow-short {
        grid-column: span 5;
        grid-row: span 1;
    }
}

@media (prefers-reduced-motion: reduce) {
    .motion,
    .cell-content,
    .cell-reveal,
    .cell-media img {
        transition: none !important;
    }

    [data-reveal] .motion {
        opacity: 1 !important;
        transform: none !important;
    }
}
"#;

/// Shown only when scripting is off: nothing waits for a trigger that never comes.
pub const NOSCRIPT_CSS: &str =
    "[data-reveal] .motion { opacity: 1 !important; transform: none !important; }";
