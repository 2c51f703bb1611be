//! Main entry point for curve generation.
//!
//! Implements the degradation ladder over the synthesis paths: a usable
//! phase spec drives structured synthesis, anything unusable drives the
//! keyword heuristic, and a missing response (upstream failure) yields the
//! last-resort pattern. No tier can fail; the caller always receives a
//! bounded, non-empty curve.

use motioncraft_spec::{normalize_phases, resolve_micro, MotionSpec};

use crate::blend::blend_head;
use crate::heuristic::{heuristic_curve, params_from_text};
use crate::post::{post_process, PostParams};
use crate::rng::{seed_or_entropy, Mulberry32};
use crate::synth::modulated_curve;

/// Output tick length; one sample is emitted per tick.
pub const TICK_MS: u64 = 100;

/// Which tier of the degradation ladder produced a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveSource {
    /// Structured synthesis from a normalized phase spec.
    Phases,
    /// Keyword-derived heuristic synthesis.
    Heuristic,
    /// Last-resort pattern; no usable upstream input at all.
    Failsafe,
}

impl CurveSource {
    /// Returns the tier name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveSource::Phases => "phases",
            CurveSource::Heuristic => "heuristic",
            CurveSource::Failsafe => "failsafe",
        }
    }
}

impl std::fmt::Display for CurveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of curve generation.
#[derive(Debug, Clone)]
pub struct CurveResult {
    /// Actuator intensity samples, one per tick, each in `[0, 1]`.
    pub samples: Vec<f64>,
    /// Tier that produced the samples.
    pub source: CurveSource,
    /// Seed that drove the randomized passes, when any ran. Recorded even
    /// when drawn from entropy so a run can be reproduced after the fact.
    pub seed: Option<u32>,
    /// BLAKE3 hash of the sample bytes, for reproducibility checks.
    pub curve_hash: String,
}

/// Number of samples for a requested duration: one per tick, never zero.
pub fn step_count(duration_ms: u64) -> usize {
    ((duration_ms / TICK_MS) as usize).max(1)
}

/// Generates a curve from an upstream response, degrading as needed.
///
/// `response_text` of `None` models upstream failure and selects the
/// last-resort tier directly. `previous_value` is the terminal sample of
/// the prior curve on this channel (0.0 when there is none); non-finite
/// values are treated as 0.0.
pub fn generate(
    response_text: Option<&str>,
    duration_ms: u64,
    previous_value: f64,
) -> CurveResult {
    let previous = sanitize_unit(previous_value);

    match response_text {
        Some(text) => match MotionSpec::from_response(text) {
            Ok(spec) => generate_from_spec(&spec, duration_ms, previous),
            Err(_) => generate_heuristic(text, duration_ms, previous),
        },
        None => {
            let samples = failsafe_curve(step_count(duration_ms), previous);
            finish(samples, CurveSource::Failsafe, None)
        }
    }
}

/// Structured synthesis from an already-parsed spec.
///
/// Reproducible only when the spec carries a seed; otherwise one is drawn
/// from entropy and recorded in the result.
pub fn generate_from_spec(
    spec: &MotionSpec,
    duration_ms: u64,
    previous_value: f64,
) -> CurveResult {
    let previous = sanitize_unit(previous_value);
    let steps = step_count(duration_ms);

    let phases = normalize_phases(&spec.phases);
    let micro = resolve_micro(&spec.micro);
    let seed = seed_or_entropy(spec.seed);
    let mut rng = Mulberry32::new(seed);

    let mut samples = modulated_curve(&phases, micro, steps, &mut rng);
    blend_head(&mut samples, previous);
    let samples = post_process(samples, PostParams::phase_synthesis());

    finish(samples, CurveSource::Phases, Some(seed))
}

/// Heuristic synthesis from free text.
pub fn generate_heuristic(text: &str, duration_ms: u64, previous_value: f64) -> CurveResult {
    let previous = sanitize_unit(previous_value);
    let steps = step_count(duration_ms);

    let params = params_from_text(text);
    let mut samples = heuristic_curve(&params, steps);
    blend_head(&mut samples, previous);
    let samples = post_process(samples, PostParams::heuristic());

    finish(samples, CurveSource::Heuristic, None)
}

/// The last-resort pattern: a gentle drift from the previous value toward
/// mid intensity with a small ripple. Slew-bounded by construction, so it
/// skips the post-processor.
pub fn failsafe_curve(steps: usize, previous_value: f64) -> Vec<f64> {
    let previous = sanitize_unit(previous_value);
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            (previous * (1.0 - t) + 0.5 * t + 0.1 * (10.0 * t).sin()).clamp(0.0, 1.0)
        })
        .collect()
}

fn finish(samples: Vec<f64>, source: CurveSource, seed: Option<u32>) -> CurveResult {
    let curve_hash = curve_hash(&samples);
    CurveResult {
        samples,
        source,
        seed,
        curve_hash,
    }
}

/// BLAKE3 hash of the little-endian sample bytes, hex-encoded.
pub fn curve_hash(samples: &[f64]) -> String {
    let mut hasher = blake3::Hasher::new();
    for sample in samples {
        hasher.update(&sample.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

fn sanitize_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SPEC_JSON: &str = r#"{
        "phases": [
            {"name": "build", "duration_ratio": 0.7, "floor": 0.1, "peak": 0.8,
             "intensity_curve": "easeIn", "tempo_hz": 1.0, "variation": 0.3,
             "rests": 0.1},
            {"name": "fade", "duration_ratio": 0.3, "floor": 0.0, "peak": 0.4,
             "intensity_curve": "decay"}
        ],
        "micro": {"humanize_jitter": 0.02, "swing": 0.1},
        "seed": 42
    }"#;

    #[test]
    fn test_step_count() {
        assert_eq!(step_count(0), 1);
        assert_eq!(step_count(99), 1);
        assert_eq!(step_count(100), 1);
        assert_eq!(step_count(500), 5);
        assert_eq!(step_count(1050), 10);
    }

    #[test]
    fn test_structured_path_selected() {
        let result = generate(Some(SPEC_JSON), 2000, 0.0);
        assert_eq!(result.source, CurveSource::Phases);
        assert_eq!(result.seed, Some(42));
        assert_eq!(result.samples.len(), 20);
    }

    #[test]
    fn test_unusable_spec_degrades_to_heuristic() {
        for text in [
            "please move gently",
            r#"{"phases": []}"#,
            r#"{"phases": ["#,
            r#"{"phases": 7}"#,
        ] {
            let result = generate(Some(text), 1000, 0.0);
            assert_eq!(result.source, CurveSource::Heuristic, "text: {text}");
            assert_eq!(result.samples.len(), 10);
        }
    }

    #[test]
    fn test_upstream_failure_selects_failsafe() {
        let result = generate(None, 1000, 0.3);
        assert_eq!(result.source, CurveSource::Failsafe);
        assert_eq!(result.seed, None);
        assert_eq!(result.samples.len(), 10);
    }

    #[test]
    fn test_failsafe_pattern_values() {
        let curve = failsafe_curve(5, 0.0);
        for (i, &v) in curve.iter().enumerate() {
            let t = i as f64 / 5.0;
            let expected = (0.5 * t + 0.1 * (10.0 * t).sin()).clamp(0.0, 1.0);
            assert!((v - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_all_tiers_stay_bounded() {
        for result in [
            generate(Some(SPEC_JSON), 3000, 0.9),
            generate(Some("erratic fast"), 3000, 0.9),
            generate(None, 3000, 0.9),
        ] {
            for &v in &result.samples {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_seeded_runs_are_bit_identical() {
        let a = generate(Some(SPEC_JSON), 5000, 0.25);
        let b = generate(Some(SPEC_JSON), 5000, 0.25);
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.curve_hash, b.curve_hash);
    }

    #[test]
    fn test_unseeded_spec_still_reports_seed() {
        let text = r#"{"phases": [{"duration_ratio": 1}]}"#;
        let result = generate(Some(text), 1000, 0.0);
        assert_eq!(result.source, CurveSource::Phases);
        assert!(result.seed.is_some());
    }

    #[test]
    fn test_previous_value_is_sanitized() {
        let result = generate(None, 500, f64::NAN);
        assert!(result.samples.iter().all(|v| v.is_finite()));

        let result = generate(None, 500, 7.0);
        // Clamped previous value: the pattern starts from 1.0, not 7.0.
        assert!(result.samples[0] <= 1.0);
    }

    #[test]
    fn test_curve_hash_matches_content() {
        let a = curve_hash(&[0.0, 0.5, 1.0]);
        let b = curve_hash(&[0.0, 0.5, 1.0]);
        let c = curve_hash(&[0.0, 0.5, 0.9]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }
}
