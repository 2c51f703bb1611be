//! Phase-based curve synthesis.
//!
//! Walks a normalized phase list and builds the raw intensity curve:
//! shaped interpolation with tempo modulation per phase, trailing gap fill,
//! then fractal noise, rest events, and micro-jitter/swing drawn from a
//! single seeded generator. Continuity blending and post-processing happen
//! downstream in [`crate::blend`] and [`crate::post`].

use motioncraft_spec::{MicroParams, Phase};

use crate::noise::{fractal_noise, DEFAULT_OCTAVES};
use crate::rng::Mulberry32;
use crate::shape::shaped_progress;

const TAU: f64 = std::f64::consts::TAU;

/// Intensity written into steps no phase covers, when there is no
/// preceding sample to repeat.
const GAP_FILL: f64 = 0.1;

/// Builds the deterministic phase skeleton: shaped interpolation plus tempo
/// modulation, with trailing gaps filled from the preceding sample.
///
/// Each phase claims `max(1, floor(steps * duration_ratio))` steps from the
/// running offset; flooring can leave a tail uncovered, which repeats the
/// last written sample (or a quiet baseline when nothing was written).
pub fn base_curve(phases: &[Phase], steps: usize) -> Vec<f64> {
    let mut curve = vec![0.0; steps];
    let mut offset = 0usize;

    for phase in phases {
        if offset >= steps {
            break;
        }
        let count = ((steps as f64 * phase.duration_ratio).floor() as usize).max(1);
        let writable = count.min(steps - offset);

        for i in 0..writable {
            let t = i as f64 / count.saturating_sub(1).max(1) as f64;
            let shaped = shaped_progress(phase.intensity_curve, t);
            let base = phase.floor + (phase.peak - phase.floor) * shaped;

            let elapsed = (offset + i) as f64 * 0.1;
            let tempo = (TAU * phase.tempo_hz * elapsed).sin() * phase.variation * 0.5;

            curve[offset + i] = (base + tempo).clamp(0.0, 1.0);
        }
        offset += count;
    }

    for i in offset.min(steps)..steps {
        curve[i] = if i > 0 { curve[i - 1] } else { GAP_FILL };
    }
    curve
}

/// Finds the phase active at fractional position `position` in `[0, 1)`.
///
/// Scans in order, accumulating ratios, and returns the first phase whose
/// cumulative ratio reaches the position within a small tolerance; float
/// drift at the tail resolves to the last phase.
fn phase_at(phases: &[Phase], position: f64) -> Option<&Phase> {
    const EPSILON: f64 = 1e-9;

    let mut cumulative = 0.0;
    for phase in phases {
        cumulative += phase.duration_ratio;
        if cumulative >= position - EPSILON {
            return Some(phase);
        }
    }
    phases.last()
}

/// Builds the full raw curve: skeleton plus noise, rests, and micro texture.
///
/// Draw discipline: `steps` noise draws, then one rest draw per step, then
/// one jitter draw per step, all from `rng`. The stream position never
/// depends on parameter values, only on `steps`.
pub fn modulated_curve(
    phases: &[Phase],
    micro: MicroParams,
    steps: usize,
    rng: &mut Mulberry32,
) -> Vec<f64> {
    let mut curve = base_curve(phases, steps);

    let noise = fractal_noise(steps, rng, DEFAULT_OCTAVES);
    for (i, sample) in curve.iter_mut().enumerate() {
        let position = i as f64 / steps as f64;
        if let Some(phase) = phase_at(phases, position) {
            *sample = (*sample + (noise[i] - 0.5) * 2.0 * phase.variation * 0.15)
                .clamp(0.0, 1.0);
        }
    }

    for (i, sample) in curve.iter_mut().enumerate() {
        let position = i as f64 / steps as f64;
        let draw = rng.next_f64();
        if let Some(phase) = phase_at(phases, position) {
            if draw < phase.rests * 0.2 {
                // Historical rest formula, preserved exactly: the sample is
                // re-anchored near the phase floor, not zeroed.
                *sample = phase.floor + (*sample - phase.floor) * 0.2;
            }
        }
    }

    for (i, sample) in curve.iter_mut().enumerate() {
        let jitter = (rng.next_f64() - 0.5) * 2.0 * micro.jitter;
        let swing = if i % 2 == 0 {
            micro.swing * 0.05
        } else {
            -micro.swing * 0.05
        };
        *sample = (*sample + jitter + swing).clamp(0.0, 1.0);
    }

    curve
}
