//! About section - bio, strengths, closing quote

use leptos::prelude::*;

use super::animate::{Reveal, motion_class};
use crate::motion::{Cue, Motion, Stagger, rise, slide_in};
use crate::reveal::{RevealState, Trigger};
use crate::types::{AboutConfig, Strength};

pub const ABOUT_TRIGGER: Trigger = Trigger::in_view();

const STRENGTH_STAGGER: Stagger = Stagger::new(0.5, 0.1);

pub const QUOTE_TEXT: &str =
    "Design is not just what it looks like and feels like. Design is how it works.";
pub const QUOTE_AUTHOR: &str = "Steve Jobs";

fn title_motion() -> Motion {
    rise(40.0, 0.8)
}

fn bio_motion() -> Motion {
    slide_in(-40.0).delayed(0.2)
}

fn strengths_motion() -> Motion {
    slide_in(40.0).delayed(0.4)
}

fn strength_motion(index: usize) -> Motion {
    STRENGTH_STAGGER.apply(rise(20.0, 0.6), index)
}

fn quote_motion() -> Motion {
    rise(40.0, 0.8).delayed(0.8)
}

pub fn cues(about: &AboutConfig) -> Vec<Cue> {
    let mut cues = vec![
        Cue::new("title", title_motion()),
        Cue::new("bio", bio_motion()),
        Cue::new("strengths", strengths_motion()),
    ];
    cues.extend(
        about
            .strengths
            .iter()
            .enumerate()
            .map(|(i, s)| Cue::new(format!("strength {}", s.title), strength_motion(i))),
    );
    cues.push(Cue::new("quote", quote_motion()));
    cues
}

/// Two-column about block. Omitting `about` renders the built-in copy.
#[component]
pub fn AboutSection(#[prop(optional)] about: AboutConfig) -> impl IntoView {
    let AboutConfig {
        title,
        bio,
        strengths,
    } = about;

    view! {
        <section
            id="about"
            class="section about"
            data-section="about"
            data-reveal=RevealState::Hidden.as_str()
            data-trigger=ABOUT_TRIGGER.as_attr()
            data-margin=ABOUT_TRIGGER.margin_attr()
        >
            <div class="container">
                <h2 class=motion_class("section-title") style=title_motion().to_style()>
                    {title}
                </h2>

                <div class="about-columns">
                    <Reveal motion=bio_motion() class="about-bio">
                        <p>{bio}</p>
                    </Reveal>

                    <Reveal motion=strengths_motion() class="about-strengths">
                        <ul class="strength-list">
                            {strengths
                                .into_iter()
                                .enumerate()
                                .map(|(index, strength)| view! { <StrengthItem index=index strength=strength /> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </Reveal>
                </div>

                <figure class=motion_class("about-quote") style=quote_motion().to_style()>
                    <blockquote>{format!("\u{201c}{}\u{201d}", QUOTE_TEXT)}</blockquote>
                    <figcaption>{format!("\u{2014} {}", QUOTE_AUTHOR.to_uppercase())}</figcaption>
                </figure>
            </div>
        </section>
    }
}

#[component]
fn StrengthItem(index: usize, strength: Strength) -> impl IntoView {
    let Strength { title, description } = strength;

    view! {
        <li class=motion_class("strength") style=strength_motion(index).to_style()>
            <h3 class="strength-title">{title}</h3>
            <p class="strength-description">{description}</p>
        </li>
    }
}
