//! Easing Module
//!
//! Easing curves for the squish timelines. Each function maps a
//! normalized time in 0..=1 to a normalized progress in roughly 0..=1
//! (bounce and elastic overshoot on purpose).

/// An easing curve: normalized time in, progress out.
pub type EaseFn = fn(f32) -> f32;

/// Identity curve.
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-in-out: slow start, slow finish.
pub fn power1_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Cubic ease-out: fast start, decelerating finish.
pub fn power2_out(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

/// Bouncing ease-out, like a ball settling on the floor.
pub fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Elastic ease-out: springs past the target and oscillates in.
pub fn elastic_out(t: f32) -> f32 {
    use std::f32::consts::TAU;
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let c = TAU / 3.0;
    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [(&str, EaseFn); 5] = [
        ("linear", linear),
        ("power1_in_out", power1_in_out),
        ("power2_out", power2_out),
        ("bounce_out", bounce_out),
        ("elastic_out", elastic_out),
    ];

    #[test]
    fn test_endpoints_pinned() {
        for (name, ease) in CURVES {
            assert!(ease(0.0).abs() < 1e-5, "{name}(0) should be 0");
            assert!((ease(1.0) - 1.0).abs() < 1e-5, "{name}(1) should be 1");
        }
    }

    #[test]
    fn test_power1_symmetry() {
        for t in [0.1, 0.25, 0.4] {
            let a = power1_in_out(t);
            let b = power1_in_out(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_power2_out_decelerates() {
        // First half covers more ground than the second
        let first = power2_out(0.5);
        assert!(first > 0.5);
    }

    #[test]
    fn test_bounce_stays_below_one() {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            assert!(bounce_out(t) <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_elastic_overshoots() {
        let mut max = 0.0_f32;
        for i in 0..=200 {
            let t = i as f32 / 200.0;
            max = max.max(elastic_out(t));
        }
        assert!(max > 1.0, "elastic should spring past the target");
    }
}
