//! Cross-call continuity blending.
//!
//! Successive synthesis calls drive the same actuator, so a new curve must
//! not jump away from wherever the previous call left the hardware. The
//! blend ramps the first few samples from the caller-supplied previous
//! value toward their synthesized values.

/// Number of head samples blended toward the previous value.
pub const BLEND_STEPS: usize = 5;

/// Blends the head of `samples` from `previous_value` toward the curve.
///
/// The first `min(5, len)` samples are linearly interpolated with
/// `factor = i / blend_steps`, so sample 0 equals the previous value
/// exactly and convergence toward the synthesized curve is monotonic.
pub fn blend_head(samples: &mut [f64], previous_value: f64) {
    let blend_steps = BLEND_STEPS.min(samples.len());
    for i in 0..blend_steps {
        let factor = i as f64 / blend_steps as f64;
        samples[i] = previous_value + (samples[i] - previous_value) * factor;
    }
}
