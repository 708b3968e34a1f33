use crate::config::RuntimeConfig;
use crate::motion::{Easing, Frame, Loop, Timing, Tween};

pub const DEFAULT_BADGE: &str = "Kokonut UI";
pub const DEFAULT_TITLE1: &str = "Elevate Your";
pub const DEFAULT_TITLE2: &str = "Digital Vision";
pub const SUBTEXT: &str =
    "Crafting exceptional digital experiences through innovative design and cutting-edge technology.";
pub const BADGE_ICON_URL: &str = "https://kokonutui.com/logo.svg";
pub const BRAND_NAME: &str = "Kokonut";
pub const SCRIPT_FONT: &str = "font-['Pacifico']";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroCopy {
    pub badge: String,
    pub title1: String,
    pub title2: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            badge: DEFAULT_BADGE.into(),
            title1: DEFAULT_TITLE1.into(),
            title2: DEFAULT_TITLE2.into(),
        }
    }
}

impl HeroCopy {
    /// Explicit values win over runtime config, which wins over the defaults.
    pub fn resolve(
        badge: Option<String>,
        title1: Option<String>,
        title2: Option<String>,
        config: &RuntimeConfig,
    ) -> Self {
        let defaults = Self::default();
        Self {
            badge: badge.or_else(|| config.badge.clone()).unwrap_or(defaults.badge),
            title1: title1.or_else(|| config.title1.clone()).unwrap_or(defaults.title1),
            title2: title2.or_else(|| config.title2.clone()).unwrap_or(defaults.title2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { name: "Home", href: "#" },
    NavItem { name: "Features", href: "#" },
    NavItem { name: "Pricing", href: "#" },
    NavItem { name: "About", href: "#" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Pink,
    Blue,
    Teal,
    Amber,
}

impl Accent {
    pub fn name(&self) -> &'static str {
        match self {
            Accent::Purple => "purple",
            Accent::Pink => "pink",
            Accent::Blue => "blue",
            Accent::Teal => "teal",
            Accent::Amber => "amber",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
    pub width: u32,
    pub height: u32,
    pub rotate: f64,
    pub accent: Accent,
    pub delay: f64,
    pub position: &'static str,
}

pub const SHAPES: [ShapeSpec; 5] = [
    ShapeSpec {
        width: 600,
        height: 140,
        rotate: 12.0,
        accent: Accent::Purple,
        delay: 0.3,
        position: "left-[-10%] md:left-[-5%] top-[15%] md:top-[20%]",
    },
    ShapeSpec {
        width: 500,
        height: 120,
        rotate: -15.0,
        accent: Accent::Pink,
        delay: 0.5,
        position: "right-[-5%] md:right-[0%] top-[70%] md:top-[75%]",
    },
    ShapeSpec {
        width: 300,
        height: 80,
        rotate: -8.0,
        accent: Accent::Blue,
        delay: 0.4,
        position: "left-[5%] md:left-[10%] bottom-[5%] md:bottom-[10%]",
    },
    ShapeSpec {
        width: 200,
        height: 60,
        rotate: 20.0,
        accent: Accent::Teal,
        delay: 0.6,
        position: "right-[15%] md:right-[20%] top-[10%] md:top-[15%]",
    },
    ShapeSpec {
        width: 150,
        height: 40,
        rotate: -25.0,
        accent: Accent::Amber,
        delay: 0.7,
        position: "left-[20%] md:left-[25%] top-[5%] md:top-[10%]",
    },
];

const SHAPE_EASE: Easing = Easing::bezier(0.23, 0.86, 0.39, 0.96);
pub const SHAPE_ENTRANCE: Timing = Timing::new(2.4, 0.0, SHAPE_EASE);
// The fade keeps the shape's delay but not its curve.
pub const SHAPE_FADE_IN: Timing = Timing::new(1.2, 0.0, Easing::EaseInOut);
pub const SHAPE_DROP: f64 = -150.0;
pub const SHAPE_TWIST: f64 = -15.0;
pub const SHAPE_FLOAT: Loop = Loop::new(&[0.0, 15.0, 0.0], 12.0, Easing::EaseInOut);

pub const FADE_UP: Timing = Timing::new(1.0, 0.5, Easing::bezier(0.25, 0.4, 0.25, 1.0));
pub const FADE_UP_STAGGER: f64 = 0.2;
pub const FADE_UP_OFFSET: f64 = 30.0;

impl ShapeSpec {
    /// Entrance drop, twist and fade, gated by the shape's delay.
    pub fn entrance_frame(&self, elapsed: f64) -> Frame {
        let motion = SHAPE_ENTRANCE.delayed(self.delay);
        Frame {
            opacity: Tween::new(0.0, 1.0, SHAPE_FADE_IN.delayed(self.delay)).sample(elapsed),
            y: Tween::new(SHAPE_DROP, 0.0, motion).sample(elapsed),
            rotate: Some(Tween::new(self.rotate + SHAPE_TWIST, self.rotate, motion).sample(elapsed)),
        }
    }
}

/// Vertical bob shared by every shape; runs from mount, independent of the entrance delay.
pub fn float_offset(elapsed: f64) -> f64 {
    SHAPE_FLOAT.sample(elapsed)
}

pub fn fade_up_timing(index: usize) -> Timing {
    FADE_UP.delayed(FADE_UP.delay + index as f64 * FADE_UP_STAGGER)
}

pub fn fade_up_frame(index: usize, elapsed: f64) -> Frame {
    let timing = fade_up_timing(index);
    Frame {
        opacity: Tween::new(0.0, 1.0, timing).sample(elapsed),
        y: Tween::new(FADE_UP_OFFSET, 0.0, timing).sample(elapsed),
        rotate: None,
    }
}
