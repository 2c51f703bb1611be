//! Intensity curve shaping.
//!
//! Maps a normalized progress value through one of the named easing
//! functions. Progress is clamped to `[0, 1]` before shaping; `surge` may
//! overshoot 1.0 and relies on downstream clamping.

use motioncraft_spec::CurveShape;

/// Shapes progress `t` through the given curve.
pub fn shaped_progress(curve: CurveShape, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match curve {
        CurveShape::EaseIn => t * t,
        CurveShape::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        CurveShape::Sine => 0.5 - 0.5 * (std::f64::consts::PI * t).cos(),
        CurveShape::Surge => t.powf(0.6) * (1.0 + 0.1 * (10.0 * t).sin()),
        CurveShape::Decay => 1.0 - (1.0 - t).powf(0.6),
        CurveShape::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0) * (-2.0 * t + 2.0) / 2.0
            }
        }
    }
}
