//! Keyword-driven fallback synthesis.
//!
//! When the upstream response yields no usable phase spec, coarse synthesis
//! parameters are derived from substring matches in the free text and fed
//! to a simple sine-sum generator. Matches are case-sensitive and compound;
//! the path is fully deterministic.

const TAU: f64 = std::f64::consts::TAU;

/// Flat parameter set derived from free text.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicParams {
    /// Center intensity of the generated motion.
    pub intensity: f64,
    /// Primary oscillation frequency in Hz.
    pub frequency: f64,
    /// Suppression of the secondary slow wobble (1.0 removes it).
    pub smoothness: f64,
    /// Amplitude of the primary oscillation.
    pub variation: f64,
}

impl Default for HeuristicParams {
    fn default() -> Self {
        Self {
            intensity: 0.5,
            frequency: 1.0,
            smoothness: 0.8,
            variation: 0.3,
        }
    }
}

/// Derives synthesis parameters from keyword matches in `text`.
///
/// Checks are independent, so multiple keywords compound ("gentle" and
/// "slow" together halve both intensity and frequency).
pub fn params_from_text(text: &str) -> HeuristicParams {
    let mut params = HeuristicParams::default();

    if text.contains("gentle") {
        params.intensity *= 0.5;
    }
    if text.contains("intense") {
        params.intensity *= 1.5;
    }
    if text.contains("slow") {
        params.frequency *= 0.5;
    }
    if text.contains("fast") {
        params.frequency *= 1.5;
    }
    if text.contains("smooth") {
        params.smoothness = 1.0;
    }
    if text.contains("erratic") {
        params.variation = 0.8;
    }

    params
}

/// Generates the raw heuristic curve over `steps` 100 ms ticks.
///
/// Each sample is a center intensity plus a primary oscillation and a slow
/// secondary wobble that `smoothness` suppresses; time is elapsed seconds.
pub fn heuristic_curve(params: &HeuristicParams, steps: usize) -> Vec<f64> {
    (0..steps)
        .map(|i| {
            let t = i as f64 * 0.1;
            let base = params.intensity
                + (TAU * params.frequency * t).sin() * params.variation
                + (TAU * t).sin() * (1.0 - params.smoothness);
            base.clamp(0.0, 1.0)
        })
        .collect()
}
