use super::easing::Easing;

/// Duration, start offset and curve of one animated track, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration: f64, delay: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay,
            easing,
        }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// Eased progress at `elapsed` seconds after mount.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if self.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        self.easing.apply((local / self.duration).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub timing: Timing,
}

impl Tween {
    pub const fn new(from: f64, to: f64, timing: Timing) -> Self {
        Self { from, to, timing }
    }

    pub fn sample(&self, elapsed: f64) -> f64 {
        lerp(self.from, self.to, self.timing.progress(elapsed))
    }
}

/// Evenly spaced keyframes repeated forever. The easing applies per segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop {
    pub keyframes: &'static [f64],
    pub period: f64,
    pub easing: Easing,
}

impl Loop {
    pub const fn new(keyframes: &'static [f64], period: f64, easing: Easing) -> Self {
        Self {
            keyframes,
            period,
            easing,
        }
    }

    pub fn sample(&self, elapsed: f64) -> f64 {
        match self.keyframes {
            [] => 0.0,
            [only] => *only,
            frames => {
                if elapsed <= 0.0 || self.period <= 0.0 {
                    return frames[0];
                }
                let segments = frames.len() - 1;
                let phase = (elapsed % self.period) / self.period;
                let position = phase * segments as f64;
                let index = (position.floor() as usize).min(segments - 1);
                let local = position - index as f64;
                lerp(frames[index], frames[index + 1], self.easing.apply(local))
            }
        }
    }
}

/// Sampled visual state of an animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub y: f64,
    pub rotate: Option<f64>,
}

impl Frame {
    pub fn to_style(&self) -> String {
        let mut transform = format!("translateY({}px)", css_number(self.y));
        if let Some(rotate) = self.rotate {
            transform.push_str(&format!(" rotate({}deg)", css_number(rotate)));
        }
        format!(
            "opacity: {}; transform: {}",
            css_number(self.opacity),
            transform
        )
    }
}

pub fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

/// Rounds to three decimals and drops negative zero.
pub fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0 + 0.0;
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOAT: Loop = Loop::new(&[0.0, 15.0, 0.0], 12.0, Easing::EaseInOut);

    #[test]
    fn timing_waits_for_delay() {
        let timing = Timing::new(1.0, 0.5, Easing::Linear);
        assert_eq!(timing.progress(0.0), 0.0);
        assert_eq!(timing.progress(0.5), 0.0);
        assert_eq!(timing.progress(1.0), 0.5);
        assert_eq!(timing.progress(4.0), 1.0);
    }

    #[test]
    fn zero_duration_jumps_at_delay() {
        let timing = Timing::new(0.0, 1.0, Easing::Linear);
        assert_eq!(timing.progress(0.99), 0.0);
        assert_eq!(timing.progress(1.0), 1.0);
    }

    #[test]
    fn tween_interpolates_between_endpoints() {
        let tween = Tween::new(-150.0, 0.0, Timing::new(2.0, 0.0, Easing::Linear));
        assert_eq!(tween.sample(0.0), -150.0);
        assert_eq!(tween.sample(1.0), -75.0);
        assert_eq!(tween.sample(9.0), 0.0);
    }

    #[test]
    fn loop_visits_keyframes_each_cycle() {
        assert_eq!(FLOAT.sample(0.0), 0.0);
        assert!((FLOAT.sample(6.0) - 15.0).abs() < 1e-9);
        assert!((FLOAT.sample(3.0) - 7.5).abs() < 1e-3);
        assert!(FLOAT.sample(12.0).abs() < 1e-9);
        assert!((FLOAT.sample(18.0) - 15.0).abs() < 1e-9);
        assert!((FLOAT.sample(1203.0) - FLOAT.sample(3.0)).abs() < 1e-6);
    }

    #[test]
    fn loop_never_leaves_keyframe_range() {
        for step in 0..500 {
            let value = FLOAT.sample(step as f64 * 0.137);
            assert!((0.0..=15.0).contains(&value), "value={value}");
        }
    }

    #[test]
    fn frame_style_formats_transform() {
        let frame = Frame {
            opacity: 0.0,
            y: -150.0,
            rotate: Some(-3.0),
        };
        assert_eq!(
            frame.to_style(),
            "opacity: 0; transform: translateY(-150px) rotate(-3deg)"
        );

        let fade = Frame {
            opacity: 0.5,
            y: 12.34567,
            rotate: None,
        };
        assert_eq!(fade.to_style(), "opacity: 0.5; transform: translateY(12.346px)");
    }

    #[test]
    fn css_number_drops_negative_zero() {
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(-0.0001), "0");
    }
}
