//! One-shot entrance triggers.
//!
//! Every section starts [`RevealState::Hidden`] and flips to
//! [`RevealState::Visible`] exactly once: on mount for the hero, on first
//! intersection with a margin-shrunk viewport for everything else. Nothing
//! ever flips it back.
//!
//! The browser side of this lives in the page's inline runtime script, which
//! reads the `data-trigger` / `data-margin` attributes produced by
//! [`Trigger::as_attr`] and [`Trigger::margin_attr`]. The types here model the
//! same contract so it can be tested and simulated without a browser.

use std::fmt;

use tracing::trace;

/// The two states of an animated unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Value of the `data-reveal` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Visible => "visible",
        }
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monotonic Hidden -> Visible flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Moves to Visible. Returns `true` only for the call that made the change.
    pub fn fire(&mut self) -> bool {
        if self.is_visible() {
            return false;
        }
        self.state = RevealState::Visible;
        true
    }
}

/// Margin applied by the scroll-triggered sections (px, all four sides).
pub const DEFAULT_VIEWPORT_MARGIN: u32 = 100;

/// What makes a section reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the section is mounted.
    Mount,
    /// When the section overlaps the viewport shrunk by `margin_px` on every side.
    Viewport { margin_px: u32 },
}

impl Trigger {
    /// Viewport trigger with [`DEFAULT_VIEWPORT_MARGIN`].
    pub const fn in_view() -> Self {
        Trigger::Viewport {
            margin_px: DEFAULT_VIEWPORT_MARGIN,
        }
    }

    /// Value of the `data-trigger` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Trigger::Mount => "mount",
            Trigger::Viewport { .. } => "viewport",
        }
    }

    /// Value of the `data-margin` attribute (`0` for mount triggers).
    pub fn margin_attr(&self) -> String {
        match self {
            Trigger::Mount => "0".to_string(),
            Trigger::Viewport { margin_px } => margin_px.to_string(),
        }
    }
}

/// Vertical extent of an element in page coordinates (px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible window: scroll offset and height (px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    /// Whether `element` overlaps this viewport after shrinking it by `margin`
    /// on both edges. Touching edges do not count.
    pub fn intersects(&self, element: &Rect, margin: f64) -> bool {
        let top = self.scroll_top + margin;
        let bottom = self.scroll_top + self.height - margin;
        if bottom <= top {
            return false;
        }
        element.top < bottom && element.bottom() > top
    }
}

/// Something that can tell a section when it has become visible.
///
/// The callback runs at most once. Registering after the unit is already
/// visible runs it immediately. Dropping the observer drops an unfired
/// callback, which is the whole teardown story.
pub trait ObservesVisibility {
    fn trigger(&self) -> Trigger;

    fn state(&self) -> RevealState;

    fn on_visible(&mut self, callback: Box<dyn FnOnce()>);
}

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct Slot {
    latch: RevealLatch,
    callback: Option<Callback>,
}

impl Slot {
    fn register(&mut self, callback: Callback) {
        if self.latch.is_visible() {
            callback();
        } else {
            self.callback = Some(callback);
        }
    }

    fn fire(&mut self) -> bool {
        if !self.latch.fire() {
            return false;
        }
        if let Some(callback) = self.callback.take() {
            callback();
        }
        true
    }
}

/// Reveals on mount.
#[derive(Default)]
pub struct MountObserver {
    slot: Slot,
}

impl MountObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the unit mounted. Returns `true` the first time only.
    pub fn mount(&mut self) -> bool {
        let fired = self.slot.fire();
        if fired {
            trace!("mount trigger fired");
        }
        fired
    }
}

impl ObservesVisibility for MountObserver {
    fn trigger(&self) -> Trigger {
        Trigger::Mount
    }

    fn state(&self) -> RevealState {
        self.slot.latch.state()
    }

    fn on_visible(&mut self, callback: Box<dyn FnOnce()>) {
        self.slot.register(callback);
    }
}

/// Reveals on the first observation that crosses the margin threshold.
pub struct ViewportObserver {
    margin_px: u32,
    slot: Slot,
}

impl ViewportObserver {
    pub fn new(margin_px: u32) -> Self {
        Self {
            margin_px,
            slot: Slot::default(),
        }
    }

    /// Feeds one geometry sample. Returns `true` only for the sample that
    /// caused the reveal; later samples are ignored, including scroll-outs.
    pub fn observe(&mut self, element: &Rect, viewport: &Viewport) -> bool {
        if self.slot.latch.is_visible() {
            return false;
        }
        if !viewport.intersects(element, f64::from(self.margin_px)) {
            return false;
        }
        trace!(
            scroll_top = viewport.scroll_top,
            element_top = element.top,
            "viewport trigger fired"
        );
        self.slot.fire()
    }
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_MARGIN)
    }
}

impl ObservesVisibility for ViewportObserver {
    fn trigger(&self) -> Trigger {
        Trigger::Viewport {
            margin_px: self.margin_px,
        }
    }

    fn state(&self) -> RevealState {
        self.slot.latch.state()
    }

    fn on_visible(&mut self, callback: Box<dyn FnOnce()>) {
        self.slot.register(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn FnOnce()>) {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        (hits, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::new();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(latch.fire());
        assert!(!latch.fire());
        assert_eq!(latch.state(), RevealState::Visible);
    }

    #[test]
    fn mount_observer_calls_back_once() {
        let (hits, callback) = counter();
        let mut observer = MountObserver::new();
        observer.on_visible(callback);
        assert_eq!(hits.get(), 0);

        assert!(observer.mount());
        assert!(!observer.mount());
        assert_eq!(hits.get(), 1);
        assert_eq!(observer.state(), RevealState::Visible);
    }

    #[test]
    fn late_registration_runs_immediately() {
        let mut observer = MountObserver::new();
        observer.mount();
        let (hits, callback) = counter();
        observer.on_visible(callback);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn viewport_margin_delays_trigger() {
        let mut observer = ViewportObserver::new(100);
        let (hits, callback) = counter();
        observer.on_visible(callback);

        let section = Rect::new(900.0, 900.0);
        // Section top sits 50px above the viewport's bottom edge: inside the margin.
        assert!(!observer.observe(&section, &Viewport::new(50.0, 900.0)));
        assert_eq!(observer.state(), RevealState::Hidden);

        // 150px above the bottom edge: past the margin.
        assert!(observer.observe(&section, &Viewport::new(150.0, 900.0)));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn viewport_state_never_reverts() {
        let mut observer = ViewportObserver::default();
        let section = Rect::new(1000.0, 800.0);
        assert!(observer.observe(&section, &Viewport::new(1000.0, 900.0)));

        // Scrolled far away, then back.
        assert!(!observer.observe(&section, &Viewport::new(0.0, 900.0)));
        assert_eq!(observer.state(), RevealState::Visible);
        assert!(!observer.observe(&section, &Viewport::new(1000.0, 900.0)));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let viewport = Viewport::new(0.0, 900.0);
        assert!(!viewport.intersects(&Rect::new(800.0, 100.0), 100.0));
        assert!(viewport.intersects(&Rect::new(799.0, 100.0), 100.0));
    }

    #[test]
    fn oversized_margin_never_intersects() {
        let viewport = Viewport::new(0.0, 150.0);
        assert!(!viewport.intersects(&Rect::new(0.0, 1000.0), 100.0));
    }

    #[test]
    fn dropping_observer_releases_callback() {
        let (hits, callback) = counter();
        {
            let mut observer = ViewportObserver::default();
            observer.on_visible(callback);
        }
        assert_eq!(hits.get(), 0);
        assert_eq!(Rc::strong_count(&hits), 1);
    }

    #[test]
    fn trigger_attributes() {
        assert_eq!(Trigger::Mount.as_attr(), "mount");
        assert_eq!(Trigger::Mount.margin_attr(), "0");
        assert_eq!(Trigger::in_view().as_attr(), "viewport");
        assert_eq!(Trigger::in_view().margin_attr(), "100");
        assert_eq!(ViewportObserver::default().trigger(), Trigger::in_view());
        assert_eq!(MountObserver::new().trigger(), Trigger::Mount);
    }
}
