//! Keyframes, named animations, and transition timing.
//!
//! Motion stays short and ease-out; only status indicators loop.

use std::fmt;
use std::time::Duration;

/// One stop of a keyframe set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    /// Stop selector, e.g. `0%` or `0%, 100%`.
    pub offset: &'static str,
    /// `(property, value)` declarations; property names are camelCase as Tailwind expects.
    pub declarations: &'static [(&'static str, &'static str)],
}

/// Named keyframe set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyframeSet {
    /// `@keyframes` name.
    pub name: &'static str,
    /// Stops in order.
    pub frames: &'static [Keyframe],
}

/// Named animation backing an `animate-*` utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Utility suffix (`fade-in` for `animate-fade-in`).
    pub name: &'static str,
    /// Keyframe set name.
    pub keyframes: &'static str,
    /// CSS duration.
    pub duration: &'static str,
    /// CSS timing function.
    pub timing: &'static str,
    /// Loops forever when set.
    pub infinite: bool,
}

impl Animation {
    /// CSS `animation` shorthand, e.g. `fadeIn 200ms ease-out`.
    pub fn css_value(&self) -> String {
        let mut value = format!("{} {} {}", self.keyframes, self.duration, self.timing);
        if self.infinite {
            value.push_str(" infinite");
        }
        value
    }

    /// Utility class that applies this animation.
    pub fn class(&self) -> String {
        format!("animate-{}", self.name)
    }
}

/// Transition duration steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionDuration {
    /// No transition.
    Instant,
    /// Hover and press feedback.
    Fast,
    /// Default component transitions.
    Normal,
    /// Panels and overlays.
    Slow,
    /// Large layout shifts.
    Slower,
}

impl TransitionDuration {
    /// Every duration, shortest first.
    pub const ALL: [TransitionDuration; 5] = [
        Self::Instant,
        Self::Fast,
        Self::Normal,
        Self::Slow,
        Self::Slower,
    ];

    /// Tailwind key.
    pub fn token(self) -> &'static str {
        match self {
            Self::Instant => "0",
            Self::Fast => "fast",
            Self::Normal => "normal",
            Self::Slow => "slow",
            Self::Slower => "slower",
        }
    }

    /// Length of the transition.
    pub fn duration(self) -> Duration {
        Duration::from_millis(match self {
            Self::Instant => 0,
            Self::Fast => 150,
            Self::Normal => 200,
            Self::Slow => 300,
            Self::Slower => 500,
        })
    }

    /// CSS value, e.g. `150ms`.
    pub fn css_value(self) -> String {
        format!("{}ms", self.duration().as_millis())
    }
}

impl fmt::Display for TransitionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

const fn frame(
    offset: &'static str,
    declarations: &'static [(&'static str, &'static str)],
) -> Keyframe {
    Keyframe {
        offset,
        declarations,
    }
}

/// All keyframe sets.
pub const KEYFRAMES: &[KeyframeSet] = &[
    KeyframeSet {
        name: "fadeIn",
        frames: &[frame("0%", &[("opacity", "0")]), frame("100%", &[("opacity", "1")])],
    },
    KeyframeSet {
        name: "fadeOut",
        frames: &[frame("0%", &[("opacity", "1")]), frame("100%", &[("opacity", "0")])],
    },
    KeyframeSet {
        name: "slideUp",
        frames: &[
            frame("0%", &[("opacity", "0"), ("transform", "translateY(8px)")]),
            frame("100%", &[("opacity", "1"), ("transform", "translateY(0)")]),
        ],
    },
    KeyframeSet {
        name: "slideDown",
        frames: &[
            frame("0%", &[("opacity", "0"), ("transform", "translateY(-8px)")]),
            frame("100%", &[("opacity", "1"), ("transform", "translateY(0)")]),
        ],
    },
    KeyframeSet {
        name: "slideLeft",
        frames: &[
            frame("0%", &[("opacity", "0"), ("transform", "translateX(8px)")]),
            frame("100%", &[("opacity", "1"), ("transform", "translateX(0)")]),
        ],
    },
    KeyframeSet {
        name: "slideRight",
        frames: &[
            frame("0%", &[("opacity", "0"), ("transform", "translateX(-8px)")]),
            frame("100%", &[("opacity", "1"), ("transform", "translateX(0)")]),
        ],
    },
    KeyframeSet {
        name: "scaleIn",
        frames: &[
            frame("0%", &[("opacity", "0"), ("transform", "scale(0.95)")]),
            frame("100%", &[("opacity", "1"), ("transform", "scale(1)")]),
        ],
    },
    KeyframeSet {
        name: "scaleOut",
        frames: &[
            frame("0%", &[("opacity", "1"), ("transform", "scale(1)")]),
            frame("100%", &[("opacity", "0"), ("transform", "scale(0.95)")]),
        ],
    },
    KeyframeSet {
        name: "pulseSubtle",
        frames: &[
            frame("0%, 100%", &[("opacity", "1")]),
            frame("50%", &[("opacity", "0.7")]),
        ],
    },
    KeyframeSet {
        name: "shimmer",
        frames: &[
            frame("0%", &[("backgroundPosition", "-200% 0")]),
            frame("100%", &[("backgroundPosition", "200% 0")]),
        ],
    },
    KeyframeSet {
        name: "spinSlow",
        frames: &[
            frame("0%", &[("transform", "rotate(0deg)")]),
            frame("100%", &[("transform", "rotate(360deg)")]),
        ],
    },
    KeyframeSet {
        name: "spinFast",
        frames: &[
            frame("0%", &[("transform", "rotate(0deg)")]),
            frame("100%", &[("transform", "rotate(360deg)")]),
        ],
    },
];

const fn animation(
    name: &'static str,
    keyframes: &'static str,
    duration: &'static str,
    timing: &'static str,
    infinite: bool,
) -> Animation {
    Animation {
        name,
        keyframes,
        duration,
        timing,
        infinite,
    }
}

/// All named animations.
pub const ANIMATIONS: &[Animation] = &[
    animation("fade-in", "fadeIn", "200ms", "ease-out", false),
    animation("fade-out", "fadeOut", "200ms", "ease-out", false),
    animation("slide-up", "slideUp", "300ms", "ease-out", false),
    animation("slide-down", "slideDown", "300ms", "ease-out", false),
    animation("slide-left", "slideLeft", "300ms", "ease-out", false),
    animation("slide-right", "slideRight", "300ms", "ease-out", false),
    animation("scale-in", "scaleIn", "200ms", "ease-out", false),
    animation("scale-out", "scaleOut", "200ms", "ease-out", false),
    animation("pulse-subtle", "pulseSubtle", "2s", "ease-in-out", true),
    animation("shimmer", "shimmer", "2s", "ease-in-out", true),
    // Tailwind ships the `spin` keyframes; only the speeds are new.
    animation("spin-slow", "spin", "1.5s", "linear", true),
    animation("spin-fast", "spin", "0.5s", "linear", true),
];

/// Easing curves by Tailwind key.
pub const TIMING_FUNCTIONS: &[(&str, &str)] = &[
    ("DEFAULT", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("linear", "linear"),
    ("in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("bounce", "cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
];

/// Animation by utility suffix.
pub fn animation_named(name: &str) -> Option<&'static Animation> {
    ANIMATIONS.iter().find(|animation| animation.name == name)
}

/// Keyframe set by name.
pub fn keyframes_named(name: &str) -> Option<&'static KeyframeSet> {
    KEYFRAMES.iter().find(|set| set.name == name)
}
