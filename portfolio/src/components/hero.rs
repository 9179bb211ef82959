//! Hero section - headline, profile block, contacts, badge groups
//!
//! The hero is the top of the page, so it reveals on mount rather than on
//! scroll. Its six groups rise in one after another; the badges inside the
//! last two groups pop in on their own, later stagger.

use leptos::prelude::*;

use super::animate::{Reveal, motion_class};
use super::icons::{ICON_CODE, ICON_ENVELOPE, ICON_GITHUB, ICON_LINKEDIN, Icon};
use crate::motion::{Cue, Motion, Stagger, fade_in_up, pop_in};
use crate::reveal::{RevealState, Trigger};
use crate::types::{ContactChannel, ContactLink, Profile};

pub const HERO_TRIGGER: Trigger = Trigger::Mount;

const GROUP_STAGGER: Stagger = Stagger::new(0.0, 0.1);
const TECH_STAGGER: Stagger = Stagger::new(0.8, 0.05);
const SKILL_STAGGER: Stagger = Stagger::new(1.0, 0.05);

const GROUPS: [&str; 6] = [
    "headline",
    "photo",
    "intro",
    "contacts",
    "tech stack",
    "core strengths",
];

fn group(index: usize) -> Motion {
    GROUP_STAGGER.apply(fade_in_up(), index)
}

/// Every animated element of the hero, in document order.
pub fn cues(profile: &Profile) -> Vec<Cue> {
    let mut cues: Vec<Cue> = GROUPS
        .iter()
        .enumerate()
        .map(|(i, label)| Cue::new(*label, group(i)))
        .collect();
    cues.extend(
        profile
            .tech_tools
            .iter()
            .enumerate()
            .map(|(i, tool)| Cue::new(format!("tool {}", tool), TECH_STAGGER.apply(pop_in(), i))),
    );
    cues.extend(
        profile
            .soft_skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                Cue::new(format!("skill {}", skill), SKILL_STAGGER.apply(pop_in(), i))
            }),
    );
    cues
}

fn channel_icon(channel: ContactChannel) -> &'static str {
    match channel {
        ContactChannel::Codeforces => ICON_CODE,
        ContactChannel::Github => ICON_GITHUB,
        ContactChannel::Linkedin => ICON_LINKEDIN,
        ContactChannel::Email => ICON_ENVELOPE,
    }
}

/// Top-of-page hero. Omitting `profile` renders the built-in defaults.
#[component]
pub fn Hero(#[prop(optional)] profile: Profile) -> impl IntoView {
    let Profile {
        name,
        title,
        bio,
        photo_url,
        tech_tools,
        soft_skills,
        contacts,
    } = profile;
    let photo_alt = name.clone();
    let links = contacts.links();

    view! {
        <section
            id="hero"
            class="section hero film-grain"
            data-section="hero"
            data-reveal=RevealState::Hidden.as_str()
            data-trigger=HERO_TRIGGER.as_attr()
            data-margin=HERO_TRIGGER.margin_attr()
        >
            <div class="container hero-stack">
                <h1 class=motion_class("hero-title") style=group(0).to_style()>
                    "PORTFOLIO"
                </h1>

                <div class="hero-profile">
                    <Reveal motion=group(1) class="hero-photo">
                        <div class="hero-photo-frame">
                            <div class="hero-photo-glow"></div>
                            <img src=photo_url alt=photo_alt />
                        </div>
                    </Reveal>

                    <Reveal motion=group(2) class="hero-intro">
                        <h2 class="hero-name">{name}</h2>
                        <p class="hero-role">{title}</p>
                        <p class="hero-bio">{bio}</p>
                    </Reveal>
                </div>

                <Reveal motion=group(3) class="contact-row">
                    {links
                        .into_iter()
                        .map(|link| view! { <ContactTile link=link /> })
                        .collect::<Vec<_>>()}
                </Reveal>

                <Reveal motion=group(4) class="badge-group">
                    <h3 class="badge-group-label">"Tech Stack"</h3>
                    <ul class="badge-list">
                        {tech_tools
                            .into_iter()
                            .enumerate()
                            .map(|(i, tool)| {
                                view! {
                                    <li
                                        class=motion_class("tool-badge")
                                        style=TECH_STAGGER.apply(pop_in(), i).to_style()
                                    >
                                        {tool}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Reveal>

                <Reveal motion=group(5) class="badge-group">
                    <h3 class="badge-group-label">"Core Strengths"</h3>
                    <ul class="badge-list">
                        {soft_skills
                            .into_iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <li
                                        class=motion_class("skill-badge")
                                        style=SKILL_STAGGER.apply(pop_in(), i).to_style()
                                    >
                                        {skill}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}

/// One icon-only contact link
#[component]
fn ContactTile(link: ContactLink) -> impl IntoView {
    let ContactLink { channel, href } = link;
    let external = channel.is_external();

    view! {
        <a
            href=href
            class="contact-tile"
            data-channel=channel.as_label()
            aria-label=channel.label()
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            <Icon path=channel_icon(channel) size="24" />
        </a>
    }
}
