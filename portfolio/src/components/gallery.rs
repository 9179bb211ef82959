//! Project gallery - collage grid with hover overlays
//!
//! Cell spans follow a fixed four-step pattern keyed on the project's index,
//! so the collage repeats predictably no matter how many projects there are.

use leptos::prelude::*;

use super::animate::motion_class;
use super::icons::{ICON_ARROW_SQUARE_OUT, ICON_GITHUB, Icon};
use crate::motion::{Cue, Motion, Stagger, rise};
use crate::reveal::{RevealState, Trigger};
use crate::types::{GalleryConfig, Project};

pub const GALLERY_TRIGGER: Trigger = Trigger::in_view();

const CELL_STAGGER: Stagger = Stagger::new(0.0, 0.1);

/// Grid footprint of one collage cell on wide screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellSpan {
    /// 7 of 12 columns, 2 rows
    WideTall,
    /// 5 of 12 columns, 1 row
    NarrowShort,
}

impl CellSpan {
    pub fn class(&self) -> &'static str {
        match self {
            CellSpan::WideTall => "span-wide-tall",
            CellSpan::NarrowShort => "span-narrow-short",
        }
    }

    pub fn columns(&self) -> u8 {
        match self {
            CellSpan::WideTall => 7,
            CellSpan::NarrowShort => 5,
        }
    }

    pub fn rows(&self) -> u8 {
        match self {
            CellSpan::WideTall => 2,
            CellSpan::NarrowShort => 1,
        }
    }
}

/// The collage rhythm. Cell `i` uses `SPAN_PATTERN[i % 4]`.
pub const SPAN_PATTERN: [CellSpan; 4] = [
    CellSpan::WideTall,
    CellSpan::NarrowShort,
    CellSpan::NarrowShort,
    CellSpan::WideTall,
];

pub fn span_for(index: usize) -> CellSpan {
    SPAN_PATTERN[index % SPAN_PATTERN.len()]
}

fn title_motion() -> Motion {
    rise(40.0, 0.8)
}

fn cell_motion(index: usize) -> Motion {
    CELL_STAGGER.apply(rise(60.0, 0.8), index)
}

/// Every animated element of the gallery, in document order.
pub fn cues(gallery: &GalleryConfig) -> Vec<Cue> {
    std::iter::once(Cue::new("title", title_motion()))
        .chain(
            gallery
                .projects
                .iter()
                .enumerate()
                .map(|(i, p)| Cue::new(format!("project {}", p.title), cell_motion(i))),
        )
        .collect()
}

/// Featured projects collage. Omitting `gallery` renders the sample projects.
#[component]
pub fn ProjectGallery(#[prop(optional)] gallery: GalleryConfig) -> impl IntoView {
    let GalleryConfig { title, projects } = gallery;

    view! {
        <section
            id="projects"
            class="section gallery"
            data-section="gallery"
            data-reveal=RevealState::Hidden.as_str()
            data-trigger=GALLERY_TRIGGER.as_attr()
            data-margin=GALLERY_TRIGGER.margin_attr()
        >
            <div class="container-wide">
                <h2 class=motion_class("section-title centered") style=title_motion().to_style()>
                    {title}
                </h2>

                <div class="collage">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCell index=index project=project /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One collage tile
#[component]
fn ProjectCell(index: usize, project: Project) -> impl IntoView {
    let span = span_for(index);
    let category = project.category_label().map(str::to_string);
    let code_link = project.code_link().map(str::to_string);
    let live_link = project.live_link().map(str::to_string);
    let Project {
        title,
        description,
        image_url,
        tools,
        ..
    } = project;
    let image_alt = title.clone();

    view! {
        <article
            class=motion_class(&format!("project-cell {}", span.class()))
            style=cell_motion(index).to_style()
            data-index=index.to_string()
            tabindex="0"
        >
            <div class="cell-media">
                <img src=image_url alt=image_alt loading="lazy" />
                <div class="cell-shade"></div>
            </div>

            {category.map(|category| view! {
                <div class="cell-category">
                    <span>{category}</span>
                </div>
            })}

            <div class="cell-content">
                <h3 class="cell-title">{title}</h3>
                <p class="cell-description cell-reveal">{description}</p>

                <ul class="cell-tools cell-reveal">
                    {tools
                        .into_iter()
                        .map(|tool| view! { <li class="cell-tool">{tool}</li> })
                        .collect::<Vec<_>>()}
                </ul>

                <div class="cell-links cell-reveal">
                    {code_link.map(|href| view! {
                        <a href=href class="cell-link" data-link="code" target="_blank" rel="noopener noreferrer">
                            <Icon path=ICON_GITHUB size="16" />
                            <span>"Code"</span>
                        </a>
                    })}
                    {live_link.map(|href| view! {
                        <a href=href class="cell-link" data-link="live" target="_blank" rel="noopener noreferrer">
                            <Icon path=ICON_ARROW_SQUARE_OUT size="16" />
                            <span>"Live"</span>
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}
