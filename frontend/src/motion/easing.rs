/// CSS-style cubic bezier timing curve with fixed endpoints (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const SUBDIVISION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        ((a * t + b) * t + c) * t
    }

    fn slope(p1: f64, p2: f64, t: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Finds the curve parameter whose x equals `x`.
    fn solve_curve_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= error / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..SUBDIVISION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn apply(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_curve_x(progress))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseInOut,
    Bezier(CubicBezier),
}

const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

impl Easing {
    pub const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Easing::Bezier(CubicBezier::new(x1, y1, x2, y2))
    }

    pub fn apply(&self, progress: f64) -> f64 {
        match self {
            Easing::Linear => progress.clamp(0.0, 1.0),
            Easing::EaseInOut => EASE_IN_OUT.apply(progress),
            Easing::Bezier(curve) => curve.apply(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn endpoints_are_pinned() {
        let curve = Easing::bezier(0.23, 0.86, 0.39, 0.96);
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
        assert_eq!(curve.apply(-2.0), 0.0);
        assert_eq!(curve.apply(3.0), 1.0);
    }

    #[test]
    fn diagonal_bezier_is_identity() {
        let curve = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 0..=10 {
            let x = step as f64 / 10.0;
            assert!(close(curve.apply(x), x), "x={x}");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        assert!(close(Easing::EaseInOut.apply(0.5), 0.5));
        let early = Easing::EaseInOut.apply(0.25);
        let late = Easing::EaseInOut.apply(0.75);
        assert!(close(early + late, 1.0));
        assert!(early < 0.25);
    }

    #[test]
    fn entrance_curve_front_loads_progress() {
        let curve = Easing::bezier(0.25, 0.4, 0.25, 1.0);
        assert!(curve.apply(0.5) > 0.5);
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = curve.apply(step as f64 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn linear_clamps() {
        assert_eq!(Easing::Linear.apply(0.3), 0.3);
        assert_eq!(Easing::Linear.apply(1.7), 1.0);
    }
}
