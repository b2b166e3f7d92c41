mod ellipse;
mod hyperbola;
mod parabola;

pub use ellipse::Ellipse;
pub use hyperbola::Hyperbola;
pub use parabola::Parabola;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConicError, ParameterError, Result};
use crate::math::TOLERANCE;

/// The four axis-aligned conic sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConicType {
    Parabola,
    Circle,
    Ellipse,
    Hyperbola,
}

impl ConicType {
    /// All conic types, in selector order.
    pub const ALL: [ConicType; 4] = [
        ConicType::Parabola,
        ConicType::Circle,
        ConicType::Ellipse,
        ConicType::Hyperbola,
    ];

    /// Lowercase identifier, as used in serialized data.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConicType::Parabola => "parabola",
            ConicType::Circle => "circle",
            ConicType::Ellipse => "ellipse",
            ConicType::Hyperbola => "hyperbola",
        }
    }

    /// Capitalized name for headings.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ConicType::Parabola => "Parabola",
            ConicType::Circle => "Circle",
            ConicType::Ellipse => "Ellipse",
            ConicType::Hyperbola => "Hyperbola",
        }
    }

    /// Theme color associated with the conic type, as a hex string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            ConicType::Parabola => "#3b82f6",
            ConicType::Circle => "#ef4444",
            ConicType::Ellipse => "#22c55e",
            ConicType::Hyperbola => "#f97316",
        }
    }

    /// How the cutting plane meets the double cone to produce this conic.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ConicType::Parabola => "The plane is parallel to a generating line of the cone.",
            ConicType::Circle => "The plane is perpendicular to the axis of the cone.",
            ConicType::Ellipse => "The plane is tilted and cuts one nappe completely.",
            ConicType::Hyperbola => "The plane is steep enough to cut both nappes.",
        }
    }

    /// Whether the `b` parameter is meaningful for this type.
    #[must_use]
    pub fn uses_b(self) -> bool {
        matches!(self, ConicType::Ellipse | ConicType::Hyperbola)
    }
}

impl fmt::Display for ConicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConicType {
    type Err = ConicError;

    fn from_str(s: &str) -> Result<Self> {
        ConicType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ConicError::UnrecognizedConicType(s.to_owned()))
    }
}

/// Raw scalar parameters of a conic, as supplied by the caller.
///
/// - parabola: `a` is the nonzero leading coefficient, `b` is ignored.
/// - circle: `a` is the radius, `b` is ignored.
/// - ellipse / hyperbola: `a` and `b` are the semi-axes.
///
/// `(h, k)` is the vertex (parabola) or center (all others).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub a: f64,
    #[serde(default = "default_b")]
    pub b: f64,
    pub h: f64,
    pub k: f64,
}

fn default_b() -> f64 {
    1.0
}

impl ParameterSet {
    /// Creates a parameter set.
    #[must_use]
    pub fn new(a: f64, b: f64, h: f64, k: f64) -> Self {
        Self { a, b, h, k }
    }

    /// Creates a parameter set for a conic with a single shape parameter
    /// (parabola or circle). `b` mirrors `a`.
    #[must_use]
    pub fn axial(a: f64, h: f64, k: f64) -> Self {
        Self { a, b: a, h, k }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1.0,
            h: 0.0,
            k: 0.0,
        }
    }
}

/// Slider domain of the interactive controls.
///
/// The core never clamps; a UI layer uses this to keep its values inside the
/// valid region before calling into the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterRange {
    /// Lower bound for `a` and `b`.
    pub axis_min: f64,
    /// Upper bound for `a` and `b`.
    pub axis_max: f64,
    /// Lower bound for `h` and `k`.
    pub shift_min: f64,
    /// Upper bound for `h` and `k`.
    pub shift_max: f64,
}

impl Default for ParameterRange {
    fn default() -> Self {
        Self {
            axis_min: 0.1,
            axis_max: 10.0,
            shift_min: -10.0,
            shift_max: 10.0,
        }
    }
}

impl ParameterRange {
    /// Returns `params` with every field clamped into the range.
    #[must_use]
    pub fn clamp(&self, params: &ParameterSet) -> ParameterSet {
        ParameterSet {
            a: params.a.clamp(self.axis_min, self.axis_max),
            b: params.b.clamp(self.axis_min, self.axis_max),
            h: params.h.clamp(self.shift_min, self.shift_max),
            k: params.k.clamp(self.shift_min, self.shift_max),
        }
    }

    /// Returns whether every field of `params` lies inside the range.
    #[must_use]
    pub fn contains(&self, params: &ParameterSet) -> bool {
        let axis = self.axis_min..=self.axis_max;
        let shift = self.shift_min..=self.shift_max;
        axis.contains(&params.a)
            && axis.contains(&params.b)
            && shift.contains(&params.h)
            && shift.contains(&params.k)
    }
}

/// A validated conic section.
///
/// A circle is an [`Ellipse`] with equal semi-axes; it shares every
/// sampling and feature computation with the ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conic {
    Parabola(Parabola),
    Circle(Ellipse),
    Ellipse(Ellipse),
    Hyperbola(Hyperbola),
}

impl Conic {
    /// Validates `params` against the preconditions of `conic_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ConicError::InvalidParameter`] if a shift is not finite, the
    /// parabola coefficient is zero, or a radius or semi-axis is not positive.
    pub fn new(conic_type: ConicType, params: &ParameterSet) -> Result<Self> {
        let ParameterSet { a, b, h, k } = *params;
        let conic = match conic_type {
            ConicType::Parabola => Conic::Parabola(Parabola::new(a, h, k)?),
            ConicType::Circle => Conic::Circle(Ellipse::circle(a, h, k)?),
            ConicType::Ellipse => Conic::Ellipse(Ellipse::new(a, b, h, k)?),
            ConicType::Hyperbola => Conic::Hyperbola(Hyperbola::new(a, b, h, k)?),
        };
        Ok(conic)
    }

    /// Returns the type tag of this conic.
    #[must_use]
    pub fn conic_type(&self) -> ConicType {
        match self {
            Conic::Parabola(_) => ConicType::Parabola,
            Conic::Circle(_) => ConicType::Circle,
            Conic::Ellipse(_) => ConicType::Ellipse,
            Conic::Hyperbola(_) => ConicType::Hyperbola,
        }
    }

    /// Returns the canonical parameters of this conic. For a circle `b`
    /// equals the radius; for a parabola `b` is reported as `1`.
    #[must_use]
    pub fn parameters(&self) -> ParameterSet {
        match self {
            Conic::Parabola(p) => ParameterSet::new(p.a(), default_b(), p.h(), p.k()),
            Conic::Circle(e) | Conic::Ellipse(e) => ParameterSet::new(e.a(), e.b(), e.h(), e.k()),
            Conic::Hyperbola(hy) => ParameterSet::new(hy.a(), hy.b(), hy.h(), hy.k()),
        }
    }

    /// Returns the eccentricity: `0` for a circle, `1` for a parabola.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        match self {
            Conic::Parabola(p) => p.eccentricity(),
            Conic::Circle(e) | Conic::Ellipse(e) => e.eccentricity(),
            Conic::Hyperbola(hy) => hy.eccentricity(),
        }
    }
}

pub(crate) fn require_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NonFinite { parameter, value }.into())
    }
}

pub(crate) fn require_nonzero(parameter: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(parameter, value)?;
    if value.abs() < TOLERANCE {
        tracing::debug!(parameter, value, "rejecting zero parameter");
        return Err(ParameterError::Zero { parameter, value }.into());
    }
    Ok(value)
}

pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(parameter, value)?;
    if value < TOLERANCE {
        tracing::debug!(parameter, value, "rejecting non-positive parameter");
        return Err(ParameterError::NonPositive { parameter, value }.into());
    }
    Ok(value)
}
