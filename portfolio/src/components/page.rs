//! Composition root: the four sections in page order.

use leptos::prelude::*;

use super::about::AboutSection;
use super::footer::Footer;
use super::gallery::ProjectGallery;
use super::hero::Hero;
use crate::types::SiteConfig;

/// Hero, Gallery, About, Footer. Each section receives its own slice of the
/// configuration; nothing flows back up.
#[component]
pub fn HomePage(config: SiteConfig, year: i32) -> impl IntoView {
    let SiteConfig {
        hero,
        gallery,
        about,
        footer,
        ..
    } = config;

    view! {
        <main class="page">
            <Hero profile=hero />
            <ProjectGallery gallery=gallery />
            <AboutSection about=about />
            <Footer footer=footer year=year />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn sections_in_fixed_order() {
        let html = view! { <HomePage config=SiteConfig::default() year=2030 /> }.to_html();
        let order: Vec<usize> = ["hero", "gallery", "about", "footer"]
            .iter()
            .map(|s| {
                html.find(&format!(r#"data-section="{}""#, s))
                    .expect("section rendered")
            })
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<span>2030</span>"));
    }
}
