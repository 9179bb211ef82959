//! Entrance animation descriptors.
//!
//! An animated element is described by a [`Motion`]: the pose it starts in
//! (`initial`), the pose it rests in (`animate`), and how it gets there
//! ([`Transition`]). Descriptors are plain data; nothing here knows about a
//! browser. [`Motion::to_style`] turns one into CSS custom properties that the
//! embedded stylesheet consumes, and [`Motion::pose_at`] evaluates it directly.
//!
//! ```rust
//! use portfolio::motion::{fade_in_up, Stagger};
//!
//! let stagger = Stagger::new(0.0, 0.1);
//! let third = stagger.apply(fade_in_up(), 2);
//! assert_eq!(third.transition.delay, 0.2);
//! assert!(third.to_style().contains("--motion-delay:0.2s"));
//! ```

use serde::{Deserialize, Serialize};

/// Visual state of an element: opacity, translation (px) and uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent, otherwise at rest.
    pub const fn transparent() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub const fn with_x(self, x: f64) -> Pose {
        Pose { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Pose {
        Pose { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Pose {
        Pose { scale, ..self }
    }

    fn lerp(self, to: Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// Timing curve for a transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// CSS `ease`, the default for transitions without an explicit curve.
    Standard,
    /// Arbitrary cubic Bézier with control points `(x1, y1, x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

/// The site's signature curve: a slight wind-up, then a long settle.
pub const SIGNATURE_EASE: Ease = Ease::CubicBezier(0.6, -0.05, 0.01, 0.99);

impl Ease {
    fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Ease::Linear => None,
            Ease::Standard => Some((0.25, 0.1, 0.25, 1.0)),
            Ease::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// CSS `transition-timing-function` value.
    pub fn css(self) -> String {
        match self.control_points() {
            None => "linear".to_string(),
            Some((x1, y1, x2, y2)) => format!(
                "cubic-bezier({},{},{},{})",
                css_number(x1),
                css_number(y1),
                css_number(x2),
                css_number(y2)
            ),
        }
    }

    /// Map normalized progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let Some((x1, y1, x2, y2)) = self.control_points() else {
            return t;
        };
        if t == 0.0 || t == 1.0 {
            return t;
        }

        // Solve bezier_x(s) = t for s by bisection; x is monotonic for x1, x2 in [0, 1].
        let bezier = |a: f64, b: f64, s: f64| {
            let inv = 1.0 - s;
            3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
        };
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        let mut s = t;
        for _ in 0..48 {
            let x = bezier(x1, x2, s);
            if (x - t).abs() < 1e-7 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        bezier(y1, y2, s)
    }
}

/// How an element moves from its initial pose to rest. Times are seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
        }
    }
}

/// One element's entrance: initial pose, resting pose, transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub initial: Pose,
    pub animate: Pose,
    pub transition: Transition,
}

impl Motion {
    /// Animate from `initial` to [`Pose::REST`].
    pub const fn from_pose(initial: Pose, transition: Transition) -> Self {
        Self {
            initial,
            animate: Pose::REST,
            transition,
        }
    }

    /// Same motion, starting `seconds` later.
    pub fn delayed(mut self, seconds: f64) -> Self {
        self.transition.delay += seconds;
        self
    }

    /// Time at which the element starts moving, relative to the trigger.
    pub fn starts_at(&self) -> f64 {
        round_millis(self.transition.delay)
    }

    /// Time at which the element reaches its resting pose.
    pub fn settles_at(&self) -> f64 {
        round_millis(self.transition.delay + self.transition.duration)
    }

    /// Pose `elapsed` seconds after the trigger fired.
    pub fn pose_at(&self, elapsed: f64) -> Pose {
        let Transition {
            duration,
            delay,
            ease,
        } = self.transition;
        if elapsed <= delay {
            return self.initial;
        }
        if duration <= 0.0 || elapsed >= delay + duration {
            return self.animate;
        }
        let progress = ease.apply((elapsed - delay) / duration);
        self.initial.lerp(self.animate, progress)
    }

    /// Inline style carrying both poses and the transition as custom properties.
    pub fn to_style(&self) -> String {
        let Motion {
            initial: from,
            animate: to,
            transition,
        } = self;
        format!(
            "--from-opacity:{};--from-x:{}px;--from-y:{}px;--from-scale:{};\
             --to-opacity:{};--to-x:{}px;--to-y:{}px;--to-scale:{};\
             --motion-duration:{}s;--motion-delay:{}s;--motion-ease:{}",
            css_number(from.opacity),
            css_number(from.x),
            css_number(from.y),
            css_number(from.scale),
            css_number(to.opacity),
            css_number(to.x),
            css_number(to.y),
            css_number(to.scale),
            css_number(transition.duration),
            css_number(transition.delay),
            transition.ease.css(),
        )
    }
}

/// Per-sibling delay: item `i` starts `base + step * i` seconds after the trigger.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    pub fn delay(&self, index: usize) -> f64 {
        round_millis(self.base + self.step * index as f64)
    }

    /// `motion` with its delay replaced by this stagger's delay for `index`.
    pub fn apply(&self, mut motion: Motion, index: usize) -> Motion {
        motion.transition.delay = self.delay(index);
        motion
    }
}

/// A labelled motion, as listed by each section for timeline reporting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cue {
    pub label: String,
    pub motion: Motion,
}

impl Cue {
    pub fn new(label: impl Into<String>, motion: Motion) -> Self {
        Self {
            label: label.into(),
            motion,
        }
    }
}

// --- Presets used by the sections ---------------------------------------

/// Hero groups: rise 60px and fade in on the signature curve.
pub fn fade_in_up() -> Motion {
    Motion::from_pose(
        Pose::transparent().with_y(60.0),
        Transition::new(0.8, SIGNATURE_EASE),
    )
}

/// Rise `distance` px and fade in.
pub fn rise(distance: f64, duration: f64) -> Motion {
    Motion::from_pose(
        Pose::transparent().with_y(distance),
        Transition::new(duration, Ease::Standard),
    )
}

/// Slide in horizontally from `offset` px and fade in.
pub fn slide_in(offset: f64) -> Motion {
    Motion::from_pose(
        Pose::transparent().with_x(offset),
        Transition::new(0.8, Ease::Standard),
    )
}

/// Badges: grow from 80% and fade in.
pub fn pop_in() -> Motion {
    Motion::from_pose(
        Pose::transparent().with_scale(0.8),
        Transition::new(0.3, Ease::Standard),
    )
}

/// Large headline: grow from 90% on the signature curve.
pub fn zoom_in() -> Motion {
    Motion::from_pose(
        Pose::transparent().with_scale(0.9),
        Transition::new(1.0, SIGNATURE_EASE),
    )
}

/// Opacity only.
pub fn fade(duration: f64) -> Motion {
    Motion::from_pose(
        Pose::transparent(),
        Transition::new(duration, Ease::Standard),
    )
}

fn round_millis(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Shortest decimal form with at most three fractional digits.
fn css_number(value: f64) -> String {
    format!("{}", round_millis(value))
}
