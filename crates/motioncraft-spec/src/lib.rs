//! Motioncraft Movement Spec Library
//!
//! This crate provides the types, lenient parsing, and normalization for
//! Motioncraft movement specs. Specs are JSON documents emitted by an
//! upstream language model that describe a multi-phase actuator movement;
//! they arrive embedded in free text and may be partially invalid or
//! adversarially malformed, so every ingestion path here repairs rather
//! than rejects.
//!
//! # Overview
//!
//! - **Extraction**: [`extract::extract_json_object`] pulls the first
//!   balanced `{...}` span out of a raw model response.
//! - **Parsing**: [`MotionSpec`] deserializes with every field optional and
//!   leniently typed; non-numeric values count as absent, unknown fields are
//!   ignored, unknown curve names fall back to the default shape.
//! - **Normalization**: [`normalize::normalize_phases`] produces a
//!   non-empty, clamped, sum-to-one [`Phase`] list; it never fails.
//!
//! # Example
//!
//! ```
//! use motioncraft_spec::{normalize_phases, MotionSpec};
//!
//! let response = r#"Here you go!
//! {"phases": [{"name": "build", "duration_ratio": 1, "intensity_curve": "easeIn"}],
//!  "seed": 42}"#;
//!
//! let spec = MotionSpec::from_response(response).unwrap();
//! let phases = normalize_phases(&spec.phases);
//!
//! assert_eq!(phases.len(), 1);
//! assert_eq!(phases[0].duration_ratio, 1.0);
//! ```
//!
//! # Modules
//!
//! - [`error`]: typed reasons a response holds no usable spec
//! - [`extract`]: balanced JSON object extraction from free text
//! - [`normalize`]: phase list repair and micro resolution
//! - [`spec`]: raw and normalized spec types

pub mod error;
pub mod extract;
pub mod normalize;
pub mod spec;

// Re-export commonly used items at the crate root
pub use error::{SpecError, SpecResult};
pub use extract::extract_json_object;
pub use normalize::{full_duration_phase, normalize_phases, resolve_micro};
pub use spec::{CurveShape, Micro, MicroParams, MotionSpec, Phase, RawPhase};
