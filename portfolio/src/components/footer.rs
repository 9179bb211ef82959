//! Footer - closing headline, contact buttons, tagline and year

use leptos::prelude::*;

use super::animate::{Reveal, motion_class};
use super::icons::{ICON_CODE, ICON_FILE_TEXT, ICON_GITHUB, ICON_LINKEDIN, Icon};
use crate::motion::{Cue, Motion, fade, rise, zoom_in};
use crate::reveal::{RevealState, Trigger};
use crate::types::{FooterButton, FooterConfig};

pub const FOOTER_TRIGGER: Trigger = Trigger::in_view();

fn headline_motion() -> Motion {
    zoom_in()
}

fn buttons_motion() -> Motion {
    rise(40.0, 0.8).delayed(0.3)
}

fn tagline_motion() -> Motion {
    fade(0.8).delayed(0.6)
}

pub fn cues() -> Vec<Cue> {
    vec![
        Cue::new("headline", headline_motion()),
        Cue::new("buttons", buttons_motion()),
        Cue::new("tagline", tagline_motion()),
    ]
}

fn button_icon(button: FooterButton) -> &'static str {
    match button {
        FooterButton::Resume => ICON_FILE_TEXT,
        FooterButton::Github => ICON_GITHUB,
        FooterButton::Codeforces => ICON_CODE,
        FooterButton::Linkedin => ICON_LINKEDIN,
    }
}

/// Closing section.
///
/// Unlike the hero's contact row, the buttons are never filtered: an empty URL
/// still renders its button.
#[component]
pub fn Footer(
    #[prop(optional)] footer: FooterConfig,
    /// Year shown under the tagline
    #[prop(default = crate::current_year())]
    year: i32,
) -> impl IntoView {
    let buttons = footer.buttons();
    let tagline = footer.tagline;

    view! {
        <footer
            id="contact"
            class="section site-footer"
            data-section="footer"
            data-reveal=RevealState::Hidden.as_str()
            data-trigger=FOOTER_TRIGGER.as_attr()
            data-margin=FOOTER_TRIGGER.margin_attr()
        >
            <div class="container">
                <h2 class=motion_class("footer-headline") style=headline_motion().to_style()>
                    "THANKS FOR"
                    <br />
                    "VISITING"
                </h2>

                <Reveal motion=buttons_motion() class="footer-buttons">
                    {buttons
                        .into_iter()
                        .map(|(button, href)| {
                            view! {
                                <a
                                    href=href
                                    class="footer-button"
                                    data-button=button.label().to_lowercase()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <Icon path=button_icon(button) />
                                    <span>{button.label()}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </Reveal>

                <Reveal motion=tagline_motion()>
                    <p class="footer-tagline">{tagline}</p>
                    <div class="footer-year">
                        <span class="footer-rule"></span>
                        <span>{year}</span>
                        <span class="footer-rule"></span>
                    </div>
                </Reveal>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_render_full_footer() {
        let html = view! { <Footer /> }.to_html();
        assert!(html.contains("THANKS FOR"));
        assert!(html.contains("VISITING"));
        assert!(html.contains("Crafted with passion &amp; precision"));
        assert_eq!(html.matches(r#"class="footer-button""#).count(), 4);
        assert!(html.contains(r#"data-trigger="viewport""#));
    }

    #[test]
    fn default_year_is_current() {
        let year = chrono::Local::now().year();
        let html = view! { <Footer /> }.to_html();
        assert!(html.contains(&format!("<span>{}</span>", year)));
    }

    #[test]
    fn explicit_year_wins() {
        let html = view! { <Footer year=1999 /> }.to_html();
        assert!(html.contains("<span>1999</span>"));
    }

    #[test]
    fn buttons_render_even_when_empty() {
        let footer = FooterConfig {
            resume_url: String::new(),
            github_url: String::new(),
            codeforces_url: String::new(),
            linkedin_url: String::new(),
            ..Default::default()
        };
        let html = view! { <Footer footer=footer /> }.to_html();
        assert_eq!(html.matches(r#"class="footer-button""#).count(), 4);
    }

    #[test]
    fn buttons_keep_fixed_order() {
        let html = view! { <Footer /> }.to_html();
        let positions: Vec<usize> = ["resume", "github", "codeforces", "linkedin"]
            .iter()
            .map(|b| {
                html.find(&format!(r#"data-button="{}""#, b))
                    .expect("button rendered")
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn cue_timing() {
        let starts: Vec<f64> = cues().iter().map(|c| c.motion.starts_at()).collect();
        assert_eq!(starts, vec![0.0, 0.3, 0.6]);
        assert_eq!(headline_motion().initial.scale, 0.9);
    }
}
