//! Motioncraft Synthesis Backend
//!
//! This crate turns movement specs into bounded, time-quantized actuator
//! intensity curves. It is the only component that touches randomness, and
//! all of it is deterministic: given the same spec (including its seed),
//! duration, and previous value, two runs produce bit-identical output.
//!
//! # Degradation ladder
//!
//! Upstream input is untrusted. Synthesis never fails; it degrades:
//!
//! 1. A usable phase spec drives structured synthesis
//!    ([`generate_from_spec`]).
//! 2. Unusable specs fall back to keyword-derived heuristic synthesis over
//!    the raw text ([`generate_heuristic`]).
//! 3. A missing response (upstream failure) yields the last-resort pattern
//!    ([`failsafe_curve`]).
//!
//! The tier that ran is recorded as a [`CurveSource`] in the result.
//!
//! # Determinism
//!
//! All randomness flows through [`rng::Mulberry32`], seeded per call from
//! the spec. Omitting the seed draws one from entropy and forfeits
//! reproducibility; the drawn seed is still reported so a run can be
//! replayed. The result carries a BLAKE3 `curve_hash` of the sample bytes
//! so callers and tests can compare runs cheaply.
//!
//! # Example
//!
//! ```
//! use motioncraft_engine::{generate, CurveSource};
//!
//! let response = r#"{"phases": [{"duration_ratio": 1, "intensity_curve": "easeIn"}],
//!                    "seed": 42}"#;
//! let result = generate(Some(response), 1500, 0.0);
//!
//! assert_eq!(result.source, CurveSource::Phases);
//! assert_eq!(result.samples.len(), 15);
//! assert!(result.samples.iter().all(|&v| (0.0..=1.0).contains(&v)));
//! ```
//!
//! # Crate structure
//!
//! - [`generate()`] - entry point implementing the degradation ladder
//! - [`blend`] - cross-call continuity blending
//! - [`heuristic`] - keyword fallback parameters and generator
//! - [`noise`] - fractal multi-octave noise
//! - [`post`] - velocity clamp and EMA smoothing
//! - [`rng`] - deterministic seeded generator
//! - [`shape`] - named intensity curves
//! - [`synth`] - phase-based curve synthesis

pub mod blend;
pub mod generate;
pub mod heuristic;
pub mod noise;
pub mod post;
pub mod rng;
pub mod shape;
pub mod synth;

// Re-export main types at crate root
pub use generate::{
    curve_hash, failsafe_curve, generate, generate_from_spec, generate_heuristic, step_count,
    CurveResult, CurveSource, TICK_MS,
};
pub use post::PostParams;
