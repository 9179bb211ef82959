//! Scroll simulation over the reveal model.
//!
//! Lays the four sections out one viewport tall each, scrolls from the top to
//! the bottom in fixed steps, and records the offset at which each section's
//! observer fires. Combined with each section's cue list this gives the full
//! entrance schedule of the page without a browser.
//!
//! ```rust
//! use portfolio::timeline::{simulate, SectionKind};
//! use portfolio::types::SiteConfig;
//!
//! let report = simulate(&SiteConfig::default(), 900.0, 100.0);
//! assert_eq!(report[0].section, SectionKind::Hero);
//! assert_eq!(report[0].revealed_at_scroll, Some(0.0));
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::components::{ABOUT_TRIGGER, FOOTER_TRIGGER, GALLERY_TRIGGER, HERO_TRIGGER, cues};
use crate::motion::Cue;
use crate::reveal::{MountObserver, ObservesVisibility, Rect, Trigger, Viewport, ViewportObserver};
use crate::types::SiteConfig;

/// The page's sections, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Gallery,
    About,
    Footer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Hero,
        SectionKind::Gallery,
        SectionKind::About,
        SectionKind::Footer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Gallery => "gallery",
            SectionKind::About => "about",
            SectionKind::Footer => "footer",
        }
    }

    pub fn trigger(&self) -> Trigger {
        match self {
            SectionKind::Hero => HERO_TRIGGER,
            SectionKind::Gallery => GALLERY_TRIGGER,
            SectionKind::About => ABOUT_TRIGGER,
            SectionKind::Footer => FOOTER_TRIGGER,
        }
    }

    fn cues(&self, config: &SiteConfig) -> Vec<Cue> {
        match self {
            SectionKind::Hero => cues::hero(&config.hero),
            SectionKind::Gallery => cues::gallery(&config.gallery),
            SectionKind::About => cues::about(&config.about),
            SectionKind::Footer => cues::footer(),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// When one section reveals and what it animates once it does.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTimeline {
    pub section: SectionKind,
    pub trigger: Trigger,
    /// Scroll offset (px) of the first sample that revealed the section;
    /// `None` if it never revealed.
    pub revealed_at_scroll: Option<f64>,
    /// Cue times are relative to the reveal.
    pub cues: Vec<Cue>,
}

impl SectionTimeline {
    /// Seconds from the reveal until the last cue settles.
    pub fn settles_after(&self) -> f64 {
        self.cues
            .iter()
            .map(|c| c.motion.settles_at())
            .fold(0.0, f64::max)
    }
}

enum Observer {
    Mount(MountObserver),
    Viewport(ViewportObserver),
}

impl Observer {
    fn for_trigger(trigger: Trigger) -> Self {
        match trigger {
            Trigger::Mount => Observer::Mount(MountObserver::new()),
            Trigger::Viewport { margin_px } => Observer::Viewport(ViewportObserver::new(margin_px)),
        }
    }

    fn as_dyn(&mut self) -> &mut dyn ObservesVisibility {
        match self {
            Observer::Mount(o) => o,
            Observer::Viewport(o) => o,
        }
    }
}

/// Upper bound on geometry samples per simulation.
pub const MAX_SAMPLES: usize = 10_000;

struct Tracked {
    section: SectionKind,
    rect: Rect,
    observer: Observer,
    revealed_at: Rc<Cell<Option<f64>>>,
}

/// Scroll through the page and report when each section reveals.
///
/// A non-positive `scroll_step` falls back to one viewport per step. A step so
/// small that the scroll would take more than [`MAX_SAMPLES`] samples is
/// widened to fit. The final sample is always taken at the maximum scroll
/// offset.
pub fn simulate(config: &SiteConfig, viewport_height: f64, scroll_step: f64) -> Vec<SectionTimeline> {
    let height = if viewport_height.is_finite() && viewport_height > 0.0 {
        viewport_height
    } else {
        0.0
    };
    let step = if scroll_step.is_finite() && scroll_step > 0.0 {
        scroll_step
    } else if height > 0.0 {
        height
    } else {
        1.0
    };

    let scroll = Rc::new(Cell::new(0.0_f64));
    let mut tracked: Vec<Tracked> = SectionKind::ALL
        .iter()
        .enumerate()
        .map(|(i, &section)| {
            let mut observer = Observer::for_trigger(section.trigger());
            let revealed_at = Rc::new(Cell::new(None));
            let slot = Rc::clone(&revealed_at);
            let clock = Rc::clone(&scroll);
            observer
                .as_dyn()
                .on_visible(Box::new(move || slot.set(Some(clock.get()))));
            Tracked {
                section,
                rect: Rect::new(i as f64 * height, height),
                observer,
                revealed_at,
            }
        })
        .collect();

    for entry in tracked.iter_mut() {
        if let Observer::Mount(observer) = &mut entry.observer {
            observer.mount();
        }
    }

    let max_scroll = (SectionKind::ALL.len() - 1) as f64 * height;
    let step = step.max(max_scroll / MAX_SAMPLES as f64);
    let mut offset = 0.0;
    loop {
        scroll.set(offset);
        let viewport = Viewport::new(offset, height);
        for entry in tracked.iter_mut() {
            if let Observer::Viewport(observer) = &mut entry.observer {
                if observer.observe(&entry.rect, &viewport) {
                    debug!(section = %entry.section, scroll = offset, "section revealed");
                }
            }
        }
        if offset >= max_scroll {
            break;
        }
        offset = (offset + step).min(max_scroll);
    }

    tracked
        .into_iter()
        .map(|entry| SectionTimeline {
            section: entry.section,
            trigger: entry.section.trigger(),
            revealed_at_scroll: entry.revealed_at.get(),
            cues: entry.section.cues(config),
        })
        .collect()
}
