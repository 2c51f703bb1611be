//! Phase normalization.
//!
//! Repairs a raw phase list into a non-empty, fully-populated segmentation
//! whose duration ratios sum to exactly 1.0. This path never fails: missing
//! or non-numeric fields take the documented defaults, out-of-range values
//! clamp, and a degenerate list (empty, or all ratios zero) is replaced by a
//! single synthetic full-duration phase.

use crate::spec::{CurveShape, Micro, MicroParams, Phase, RawPhase};

/// Default phase label.
pub const DEFAULT_NAME: &str = "phase";
/// Default fraction of the step budget per phase.
pub const DEFAULT_DURATION_RATIO: f64 = 0.2;
/// Default low intensity bound.
pub const DEFAULT_FLOOR: f64 = 0.1;
/// Default high intensity bound.
pub const DEFAULT_PEAK: f64 = 0.8;
/// Default oscillation frequency in Hz.
pub const DEFAULT_TEMPO_HZ: f64 = 0.5;
/// Default modulation magnitude.
pub const DEFAULT_VARIATION: f64 = 0.2;
/// Default rest-event weight.
pub const DEFAULT_RESTS: f64 = 0.05;
/// Default per-step jitter magnitude.
pub const DEFAULT_JITTER: f64 = 0.02;
/// Default swing magnitude.
pub const DEFAULT_SWING: f64 = 0.0;

fn unit(value: Option<f64>, default: f64) -> f64 {
    value.unwrap_or(default).clamp(0.0, 1.0)
}

/// Normalizes a raw phase list into a usable segmentation.
///
/// Ratios of the returned phases sum to 1.0 within floating tolerance and
/// the list is never empty.
pub fn normalize_phases(raw: &[RawPhase]) -> Vec<Phase> {
    let mut phases: Vec<Phase> = raw
        .iter()
        .map(|p| Phase {
            name: p
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            duration_ratio: unit(p.duration_ratio, DEFAULT_DURATION_RATIO),
            floor: unit(p.floor, DEFAULT_FLOOR),
            peak: unit(p.peak, DEFAULT_PEAK),
            intensity_curve: p.intensity_curve.unwrap_or_default(),
            tempo_hz: p.tempo_hz.unwrap_or(DEFAULT_TEMPO_HZ).max(0.0),
            variation: unit(p.variation, DEFAULT_VARIATION),
            rests: unit(p.rests, DEFAULT_RESTS),
        })
        .collect();

    let total: f64 = phases.iter().map(|p| p.duration_ratio).sum();
    if total <= 0.0 {
        return vec![full_duration_phase()];
    }

    for phase in &mut phases {
        phase.duration_ratio /= total;
    }
    phases
}

/// The synthetic phase substituted for a degenerate list.
pub fn full_duration_phase() -> Phase {
    Phase {
        name: DEFAULT_NAME.to_string(),
        duration_ratio: 1.0,
        floor: DEFAULT_FLOOR,
        peak: DEFAULT_PEAK,
        intensity_curve: CurveShape::default(),
        tempo_hz: DEFAULT_TEMPO_HZ,
        variation: DEFAULT_VARIATION,
        rests: DEFAULT_RESTS,
    }
}

/// Resolves raw micro settings into clamped magnitudes.
pub fn resolve_micro(micro: &Micro) -> MicroParams {
    MicroParams {
        jitter: unit(micro.humanize_jitter, DEFAULT_JITTER),
        swing: unit(micro.swing, DEFAULT_SWING),
    }
}
