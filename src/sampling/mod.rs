mod ellipse;
mod hyperbola;
mod parabola;

pub use ellipse::sample_ellipse;
pub use hyperbola::sample_hyperbola;
pub use parabola::sample_parabola;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplingError};
use crate::geometry::Conic;
use crate::math::{round_to, Point2};

/// Decimal places kept for sampled coordinates.
pub(crate) const COORD_DECIMALS: i32 = 2;

/// Decimal places kept for the parabola's sweep variable `x`.
pub(crate) const PARABOLA_X_DECIMALS: i32 = 1;

/// Upper bound on the number of samples a single sweep may produce.
const MAX_SAMPLES_PER_SWEEP: f64 = 100_000.0;

/// Parameters controlling curve sampling and the visible viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    /// Half-width of the square viewport; points with `|x|` or `|y|` beyond
    /// it are dropped.
    pub viewport: f64,
    /// The parabola is swept over `x` in `[-parabola_range, parabola_range]`.
    pub parabola_range: f64,
    /// Step of the parabola's `x` sweep.
    pub parabola_step: f64,
    /// Parabola points with `|y|` above this are dropped.
    pub parabola_y_max: f64,
    /// Angular step of the ellipse sweep over `[0, 2π]`, in radians.
    pub angle_step: f64,
    /// Each hyperbola branch is swept over `t` in `[-t_max, t_max]`.
    pub hyperbola_t_max: f64,
    /// Step of the hyperbola's `t` sweep.
    pub hyperbola_step: f64,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            viewport: 15.0,
            parabola_range: 10.0,
            parabola_step: 0.1,
            parabola_y_max: 20.0,
            angle_step: 0.1,
            hyperbola_t_max: 3.0,
            hyperbola_step: 0.1,
        }
    }
}

impl SamplingParams {
    /// Checks every field, as [`validate_parabola`](Self::validate_parabola),
    /// [`validate_ellipse`](Self::validate_ellipse) and
    /// [`validate_hyperbola`](Self::validate_hyperbola) together.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidParameters`] describing the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        self.validate_parabola()?;
        self.validate_ellipse()?;
        self.validate_hyperbola()
    }

    /// Checks the fields used by the parabola sampler.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidParameters`] if the range, step or
    /// `y` bound is not finite and positive, or the step is too small.
    pub fn validate_parabola(&self) -> Result<()> {
        require_positive("parabola_range", self.parabola_range)?;
        require_positive("parabola_step", self.parabola_step)?;
        require_positive("parabola_y_max", self.parabola_y_max)?;
        require_sweep("parabola_step", 2.0 * self.parabola_range / self.parabola_step)
    }

    /// Checks the fields used by the ellipse sampler.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidParameters`] if the viewport or angle
    /// step is not finite and positive, or the step is too small.
    pub fn validate_ellipse(&self) -> Result<()> {
        require_positive("viewport", self.viewport)?;
        require_positive("angle_step", self.angle_step)?;
        require_sweep("angle_step", std::f64::consts::TAU / self.angle_step)
    }

    /// Checks the fields used by the hyperbola sampler.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidParameters`] if the viewport, `t`
    /// range or step is not finite and positive, or the step is too small.
    pub fn validate_hyperbola(&self) -> Result<()> {
        require_positive("viewport", self.viewport)?;
        require_positive("hyperbola_t_max", self.hyperbola_t_max)?;
        require_positive("hyperbola_step", self.hyperbola_step)?;
        require_sweep("hyperbola_step", 2.0 * self.hyperbola_t_max / self.hyperbola_step)
    }

    /// Returns whether `p` lies inside the square viewport.
    #[must_use]
    pub fn in_viewport(&self, p: &Point2) -> bool {
        p.x.abs() <= self.viewport && p.y.abs() <= self.viewport
    }
}

/// An ordered point approximation of one conic instance.
///
/// Points are grouped into branches: one for parabolas and ellipses, two for
/// hyperbolas (right branch first, then left). [`CurveSample::points`] walks
/// all branches in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSample {
    branches: Vec<Vec<Point2>>,
    closed: bool,
}

impl CurveSample {
    pub(crate) fn single(points: Vec<Point2>, closed: bool) -> Self {
        Self {
            branches: vec![points],
            closed,
        }
    }

    pub(crate) fn from_branches(branches: Vec<Vec<Point2>>) -> Self {
        Self {
            branches,
            closed: false,
        }
    }

    /// Returns the branches in sweep order.
    #[must_use]
    pub fn branches(&self) -> &[Vec<Point2>] {
        &self.branches
    }

    /// Iterates over every point, branch by branch.
    pub fn points(&self) -> impl Iterator<Item = &Point2> {
        self.branches.iter().flatten()
    }

    /// Returns all points as one flat sequence.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Point2> {
        self.points().copied().collect()
    }

    /// Returns the total number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.iter().map(Vec::len).sum()
    }

    /// Returns whether no point survived clipping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.iter().all(Vec::is_empty)
    }

    /// Returns whether the sample is a full, unclipped closed loop.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Samples any conic with the sampler for its type.
///
/// # Errors
///
/// Returns an error if `params` is invalid.
pub fn sample_conic(conic: &Conic, params: &SamplingParams) -> Result<CurveSample> {
    match conic {
        Conic::Parabola(p) => sample_parabola(p, params),
        Conic::Circle(e) | Conic::Ellipse(e) => sample_ellipse(e, params),
        Conic::Hyperbola(hy) => sample_hyperbola(hy, params),
    }
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SamplingError::InvalidParameters(format!(
            "{name} must be finite and positive, got {value}"
        ))
        .into())
    }
}

fn require_sweep(name: &str, count: f64) -> Result<()> {
    if count > MAX_SAMPLES_PER_SWEEP {
        return Err(SamplingError::InvalidParameters(format!(
            "{name} is too small: sweep would produce {count:.0} samples"
        ))
        .into());
    }
    Ok(())
}

/// Rounds both coordinates to the sampling precision.
pub(crate) fn round_point(p: Point2) -> Point2 {
    Point2::new(round_to(p.x, COORD_DECIMALS), round_to(p.y, COORD_DECIMALS))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ConicError;
    use crate::geometry::{ConicType, ParameterSet};

    #[test]
    fn default_params_are_valid() {
        assert!(SamplingParams::default().validate().is_ok());
    }

    #[test]
    fn zero_step_is_rejected() {
        let params = SamplingParams {
            angle_step: 0.0,
            ..SamplingParams::default()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, ConicError::Sampling(_)));
        assert!(err.to_string().contains("angle_step"));
    }

    #[test]
    fn nan_bound_is_rejected() {
        let params = SamplingParams {
            viewport: f64::NAN,
            ..SamplingParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn tiny_step_is_rejected() {
        let params = SamplingParams {
            parabola_step: 1e-9,
            ..SamplingParams::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn each_curve_checks_only_its_own_fields() {
        let params = SamplingParams {
            hyperbola_step: 0.0,
            ..SamplingParams::default()
        };
        assert!(params.validate_parabola().is_ok());
        assert!(params.validate_ellipse().is_ok());
        assert!(params.validate_hyperbola().is_err());
        assert!(params.validate().is_err());
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: SamplingParams = serde_json::from_str(r#"{"viewport": 8}"#).unwrap();
        assert!((params.viewport - 8.0).abs() < f64::EPSILON);
        assert!((params.parabola_y_max - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flat_view_preserves_branch_order() {
        let sample = CurveSample::from_branches(vec![
            vec![Point2::new(1.0, 0.0), Point2::new(2.0, 1.0)],
            vec![Point2::new(-1.0, 0.0)],
        ]);
        assert_eq!(sample.len(), 3);
        assert_eq!(
            sample.to_vec(),
            vec![Point2::new(1.0, 0.0), Point2::new(2.0, 1.0), Point2::new(-1.0, 0.0)]
        );
        assert!(!sample.is_closed());
    }

    #[test]
    fn empty_branches_are_empty() {
        let sample = CurveSample::from_branches(vec![Vec::new(), Vec::new()]);
        assert!(sample.is_empty());
        assert!(CurveSample::default().is_empty());
    }

    #[test]
    fn sample_conic_dispatches_circle_to_ellipse() {
        let params = SamplingParams::default();
        let circle = Conic::new(ConicType::Circle, &ParameterSet::axial(2.0, 0.0, 0.0)).unwrap();
        let ellipse = Conic::new(ConicType::Ellipse, &ParameterSet::new(2.0, 2.0, 0.0, 0.0)).unwrap();
        assert_eq!(
            sample_conic(&circle, &params).unwrap(),
            sample_conic(&ellipse, &params).unwrap()
        );
    }
}
