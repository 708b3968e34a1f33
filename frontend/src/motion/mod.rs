//! Timing curves, tweens and the animation clock used by the hero's
//! entrance and float effects.

pub mod clock;
pub mod easing;
pub mod timeline;

pub use clock::{provide_animation_clock, use_animation_clock, AnimationClock};
pub use easing::{CubicBezier, Easing};
pub use timeline::{css_number, Frame, Loop, Timing, Tween};
