//! Main movement spec types.
//!
//! The upstream model emits a loosely-typed JSON object; every field here is
//! optional and leniently typed so that adversarially malformed input is
//! repaired instead of rejected. [`crate::normalize`] turns the raw types
//! into fully-populated, clamped values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{SpecError, SpecResult};
use crate::extract::extract_json_object;

/// Named intensity curves for within-phase shaping.
///
/// Wire names are `easeIn | easeOut | easeInOut | sine | surge | decay`,
/// matched case-insensitively. Unknown or missing names resolve to
/// [`CurveShape::EaseInOut`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveShape {
    /// Quadratic ease-in: t^2.
    EaseIn,
    /// Quadratic ease-out: 1 - (1-t)^2.
    EaseOut,
    /// Quadratic ease-in-out (the default).
    #[default]
    EaseInOut,
    /// Half-cosine ramp.
    Sine,
    /// Fast sub-linear rise with a superimposed ripple.
    Surge,
    /// Mirrored surge: fast initial rise flattening out.
    Decay,
}

impl CurveShape {
    /// Resolves a curve name, falling back to the default for unknown input.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "easein" => CurveShape::EaseIn,
            "easeout" => CurveShape::EaseOut,
            "easeinout" => CurveShape::EaseInOut,
            "sine" => CurveShape::Sine,
            "surge" => CurveShape::Surge,
            "decay" => CurveShape::Decay,
            _ => CurveShape::default(),
        }
    }

    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveShape::EaseIn => "easeIn",
            CurveShape::EaseOut => "easeOut",
            CurveShape::EaseInOut => "easeInOut",
            CurveShape::Sine => "sine",
            CurveShape::Surge => "surge",
            CurveShape::Decay => "decay",
        }
    }
}

impl std::fmt::Display for CurveShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurveShape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-string values count as omitted rather than invalid.
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some(name) => CurveShape::from_name(name),
            None => CurveShape::default(),
        })
    }
}

/// One raw segment of a movement as received from upstream.
///
/// Every field is optional; `None` means absent or non-numeric and is filled
/// with the documented default during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhase {
    /// Label for the segment; carries no semantics.
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Fraction of the total step budget this phase occupies.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration_ratio: Option<f64>,

    /// Low end of the intensity interpolation.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub floor: Option<f64>,

    /// High end of the intensity interpolation.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub peak: Option<f64>,

    /// Intensity curve name.
    #[serde(default)]
    pub intensity_curve: Option<CurveShape>,

    /// Within-phase oscillation frequency in Hz.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tempo_hz: Option<f64>,

    /// Modulation and noise magnitude.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub variation: Option<f64>,

    /// Probability weight of a rest event per step.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rests: Option<f64>,
}

/// Raw micro-texture settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Micro {
    /// Per-step random jitter magnitude.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub humanize_jitter: Option<f64>,

    /// Alternating even/odd step bias magnitude.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub swing: Option<f64>,
}

/// A movement specification as extracted from an upstream response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MotionSpec {
    /// Ordered phase list; phases play in sequence.
    #[serde(default, deserialize_with = "lenient_phases")]
    pub phases: Vec<RawPhase>,

    /// Micro-texture settings.
    #[serde(default, deserialize_with = "lenient_micro")]
    pub micro: Micro,

    /// Seed for reproducible synthesis. Absent means the engine draws an
    /// entropy seed and the run is not reproducible.
    #[serde(default, deserialize_with = "lenient_seed")]
    pub seed: Option<u32>,
}

impl MotionSpec {
    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Extracts and parses a usable spec from a raw model response.
    ///
    /// Returns a typed error when the text holds no balanced JSON object,
    /// the object does not parse, or the parsed spec declares no phases.
    pub fn from_response(text: &str) -> SpecResult<Self> {
        let json = extract_json_object(text).ok_or(SpecError::NoJsonObject)?;
        let spec = Self::from_json(json)?;
        if spec.phases.is_empty() {
            return Err(SpecError::NoPhases);
        }
        Ok(spec)
    }

    /// Returns true if the spec declares at least one phase.
    pub fn has_phases(&self) -> bool {
        !self.phases.is_empty()
    }
}

/// A fully-populated, clamped phase produced by normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phase {
    /// Label; non-semantic.
    pub name: String,
    /// Fraction of total steps; sums to 1.0 across the list.
    pub duration_ratio: f64,
    /// Low end of the intensity interpolation, in [0, 1].
    pub floor: f64,
    /// High end of the intensity interpolation, in [0, 1].
    pub peak: f64,
    /// Intensity curve.
    pub intensity_curve: CurveShape,
    /// Oscillation frequency in Hz, >= 0.
    pub tempo_hz: f64,
    /// Modulation and noise magnitude, in [0, 1].
    pub variation: f64,
    /// Rest-event probability weight, in [0, 1].
    pub rests: f64,
}

/// Resolved micro-texture magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicroParams {
    /// Per-step random jitter magnitude, in [0, 1].
    pub jitter: f64,
    /// Alternating step bias magnitude, in [0, 1].
    pub swing: f64,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

fn lenient_seed<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    // Finite numbers truncate toward zero into u32 wrapping range; anything
    // else counts as absent.
    Ok(value
        .as_f64()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64 as u32))
}

fn lenient_micro<'de, D>(deserializer: D) -> Result<Micro, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).unwrap_or_default())
    } else {
        Ok(Micro::default())
    }
}

fn lenient_phases<'de, D>(deserializer: D) -> Result<Vec<RawPhase>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Some(items) = value.as_array() else {
        return Ok(Vec::new());
    };
    Ok(items
        .iter()
        .map(|item| {
            if item.is_object() {
                serde_json::from_value(item.clone()).unwrap_or_default()
            } else {
                RawPhase::default()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_curve_shape_names() {
        assert_eq!(CurveShape::from_name("easeIn"), CurveShape::EaseIn);
        assert_eq!(CurveShape::from_name("EASEOUT"), CurveShape::EaseOut);
        assert_eq!(CurveShape::from_name("Sine"), CurveShape::Sine);
        assert_eq!(CurveShape::from_name("surge"), CurveShape::Surge);
        assert_eq!(CurveShape::from_name("decay"), CurveShape::Decay);
        assert_eq!(CurveShape::from_name("wobble"), CurveShape::EaseInOut);
        assert_eq!(CurveShape::from_name(""), CurveShape::EaseInOut);
    }

    #[test]
    fn test_parse_full_spec() {
        let spec = MotionSpec::from_json(
            r#"{
                "phases": [
                    {"name": "build", "duration_ratio": 0.6, "floor": 0.2,
                     "peak": 0.9, "intensity_curve": "easeIn", "tempo_hz": 1.2,
                     "variation": 0.4, "rests": 0.1},
                    {"name": "settle", "duration_ratio": 0.4}
                ],
                "micro": {"humanize_jitter": 0.05, "swing": 0.3},
                "seed": 42
            }"#,
        )
        .unwrap();

        assert_eq!(spec.phases.len(), 2);
        assert_eq!(spec.seed, Some(42));
        assert_eq!(spec.phases[0].name.as_deref(), Some("build"));
        assert_eq!(spec.phases[0].intensity_curve, Some(CurveShape::EaseIn));
        assert_eq!(spec.phases[1].floor, None);
        assert_eq!(spec.micro.humanize_jitter, Some(0.05));
    }

    #[test]
    fn test_non_numeric_fields_count_as_absent() {
        let spec = MotionSpec::from_json(
            r#"{
                "phases": [
                    {"duration_ratio": "half", "floor": null, "peak": true,
                     "tempo_hz": [1], "variation": {"x": 1}, "name": 7}
                ]
            }"#,
        )
        .unwrap();

        let phase = &spec.phases[0];
        assert_eq!(phase.duration_ratio, None);
        assert_eq!(phase.floor, None);
        assert_eq!(phase.peak, None);
        assert_eq!(phase.tempo_hz, None);
        assert_eq!(phase.variation, None);
        assert_eq!(phase.name, None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let spec = MotionSpec::from_json(
            r#"{"phases": [{"duration_ratio": 1, "mood": "spicy"}], "model": "x"}"#,
        )
        .unwrap();
        assert_eq!(spec.phases.len(), 1);
    }

    #[test]
    fn test_unknown_curve_name_defaults() {
        let spec =
            MotionSpec::from_json(r#"{"phases": [{"intensity_curve": "zigzag"}]}"#).unwrap();
        assert_eq!(spec.phases[0].intensity_curve, Some(CurveShape::EaseInOut));
    }

    #[test]
    fn test_non_array_phases_yield_empty_list() {
        let spec = MotionSpec::from_json(r#"{"phases": "lots"}"#).unwrap();
        assert!(!spec.has_phases());
    }

    #[test]
    fn test_non_object_phase_entries_become_defaults() {
        let spec = MotionSpec::from_json(r#"{"phases": [3, {"duration_ratio": 1}]}"#).unwrap();
        assert_eq!(spec.phases.len(), 2);
        assert_eq!(spec.phases[0].duration_ratio, None);
        assert_eq!(spec.phases[1].duration_ratio, Some(1.0));
    }

    #[test]
    fn test_non_object_micro_becomes_default() {
        let spec = MotionSpec::from_json(r#"{"micro": 5}"#).unwrap();
        assert_eq!(spec.micro.humanize_jitter, None);
        assert_eq!(spec.micro.swing, None);
    }

    #[test]
    fn test_seed_coercion() {
        let spec = MotionSpec::from_json(r#"{"seed": 42.9}"#).unwrap();
        assert_eq!(spec.seed, Some(42));

        let spec = MotionSpec::from_json(r#"{"seed": "many"}"#).unwrap();
        assert_eq!(spec.seed, None);

        let spec = MotionSpec::from_json(r#"{"seed": -1}"#).unwrap();
        assert_eq!(spec.seed, Some(u32::MAX));
    }

    #[test]
    fn test_from_response_tiers() {
        let ok = MotionSpec::from_response("text {\"phases\": [{}]} text").unwrap();
        assert!(ok.has_phases());

        assert!(matches!(
            MotionSpec::from_response("no spec here"),
            Err(SpecError::NoJsonObject)
        ));
        assert!(matches!(
            MotionSpec::from_response("{\"phases\": []}"),
            Err(SpecError::NoPhases)
        ));
        assert!(matches!(
            MotionSpec::from_response("{\"phases\": [{\"a\": }]}"),
            Err(SpecError::JsonParse(_))
        ));
    }
}
