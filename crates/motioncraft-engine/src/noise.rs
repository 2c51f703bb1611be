//! Fractal noise generation.
//!
//! Builds multi-octave smoothed noise from a single uniform base signal:
//! each octave is a causal moving average of the base at a progressively
//! narrower window, summed at halving amplitude and normalized. The result
//! approximates self-similar noise cheaply, without gradient tables.

use crate::rng::Mulberry32;

/// Default octave count.
pub const DEFAULT_OCTAVES: u32 = 3;

/// Generates a normalized multi-octave noise sequence of length `len`.
///
/// Values are approximately in `[0, 1]`. Smoothing is causal: near index 0
/// the averaging window shrinks to the samples seen so far rather than
/// wrapping or padding.
pub fn fractal_noise(len: usize, rng: &mut Mulberry32, octaves: u32) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }

    let base: Vec<f64> = (0..len).map(|_| rng.next_f64()).collect();
    let mut out = vec![0.0; len];
    let mut amplitude = 1.0;
    let mut amplitude_sum = 0.0;

    for octave in 0..octaves {
        let window = len.checked_shr(octave + 2).unwrap_or(0).max(1);

        // Running causal window sum over the base signal.
        let mut sum = 0.0;
        for i in 0..len {
            sum += base[i];
            if i >= window {
                sum -= base[i - window];
            }
            let span = (i + 1).min(window);
            out[i] += sum / span as f64 * amplitude;
        }

        amplitude_sum += amplitude;
        amplitude *= 0.5;
    }

    for value in &mut out {
        *value /= amplitude_sum;
    }
    out
}
