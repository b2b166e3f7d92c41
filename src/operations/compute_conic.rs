use crate::equation::format_equation;
use crate::error::{ConicError, Result};
use crate::features::{geometric_elements, GeometricElement, Palette};
use crate::geometry::{Conic, ConicType, ParameterSet};
use crate::sampling::{sample_conic, CurveSample, SamplingParams};

/// Everything a plot needs for one conic instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConicOutput {
    /// Sampled curve, clipped to the viewport.
    pub points: CurveSample,
    /// Annotation elements inside the viewport.
    pub elements: Vec<GeometricElement>,
    /// Canonical equation string.
    pub equation: String,
    /// Eccentricity of the conic.
    pub eccentricity: f64,
}

/// Computes the sample, features and equation of a conic.
///
/// Circles go through the ellipse sampler and feature code with both
/// semi-axes set to the radius.
pub struct ComputeConic {
    conic_type: ConicType,
    params: ParameterSet,
    sampling: SamplingParams,
    palette: Palette,
}

impl ComputeConic {
    /// Creates a new `ComputeConic` operation with default sampling and
    /// palette.
    #[must_use]
    pub fn new(conic_type: ConicType, params: ParameterSet) -> Self {
        Self {
            conic_type,
            params,
            sampling: SamplingParams::default(),
            palette: Palette::default(),
        }
    }

    /// Overrides the sampling parameters.
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    /// Overrides the annotation palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Executes the computation.
    ///
    /// Parameters are validated before anything is sampled.
    ///
    /// # Errors
    ///
    /// Returns [`ConicError::InvalidParameter`] if the parameters violate the
    /// preconditions of the conic type, or [`ConicError::Sampling`] if the
    /// sampling parameters are invalid.
    pub fn execute(&self) -> Result<ConicOutput> {
        let conic = Conic::new(self.conic_type, &self.params)?;
        let points = sample_conic(&conic, &self.sampling)?;
        let elements = geometric_elements(&conic, self.sampling.viewport, &self.palette);
        let equation = format_equation(self.conic_type, &conic.parameters());

        tracing::debug!(
            conic_type = %self.conic_type,
            points = points.len(),
            elements = elements.len(),
            %equation,
            "computed conic"
        );

        Ok(ConicOutput {
            points,
            elements,
            equation,
            eccentricity: conic.eccentricity(),
        })
    }
}

/// Computes a conic with default sampling and palette.
///
/// # Errors
///
/// Returns an error if the parameters are invalid for `conic_type`.
pub fn compute_conic(conic_type: ConicType, params: &ParameterSet) -> Result<ConicOutput> {
    ComputeConic::new(conic_type, *params).execute()
}

/// Computes a conic keyed by type name.
///
/// An unknown name yields an empty [`ConicOutput`] rather than an error.
///
/// # Errors
///
/// Returns an error if the name is known but the parameters are invalid.
pub fn compute_conic_named(conic_type: &str, params: &ParameterSet) -> Result<ConicOutput> {
    match conic_type.parse::<ConicType>() {
        Ok(t) => compute_conic(t, params),
        Err(ConicError::UnrecognizedConicType(name)) => {
            tracing::debug!(%name, "unrecognized conic type, returning empty output");
            Ok(ConicOutput::default())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ParameterError;
    use approx::assert_relative_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn parabola_output() {
        init_tracing();
        let out = compute_conic(ConicType::Parabola, &ParameterSet::axial(2.0, 3.0, -1.0)).unwrap();
        assert_eq!(out.equation, "y = 2(x - 3)² - 1");
        assert!(!out.points.is_empty());
        assert_eq!(out.points.branches().len(), 1);
        assert_relative_eq!(out.eccentricity, 1.0);
        assert_eq!(out.elements.len(), 3);
    }

    #[test]
    fn circle_matches_equal_axis_ellipse() {
        init_tracing();
        let circle = compute_conic(ConicType::Circle, &ParameterSet::axial(5.0, 0.0, 0.0)).unwrap();
        let ellipse = compute_conic(ConicType::Ellipse, &ParameterSet::new(5.0, 5.0, 0.0, 0.0)).unwrap();
        assert_eq!(circle.points, ellipse.points);
        assert_eq!(circle.elements, ellipse.elements);
        assert_relative_eq!(circle.eccentricity, ellipse.eccentricity);
        assert_eq!(circle.equation, "(x)² + (y)² = 5²");
        assert_relative_eq!(circle.eccentricity, 0.0);
        assert!(circle.points.is_closed());
    }

    #[test]
    fn circle_ignores_b() {
        let a = compute_conic(ConicType::Circle, &ParameterSet::new(3.0, 1.0, 0.0, 0.0)).unwrap();
        let b = compute_conic(ConicType::Circle, &ParameterSet::new(3.0, 8.0, 0.0, 0.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hyperbola_output() {
        let out = compute_conic(ConicType::Hyperbola, &ParameterSet::new(3.0, 4.0, 0.0, 2.0)).unwrap();
        assert_eq!(out.equation, "(x)²/3² - (y - 2)²/4² = 1");
        assert_eq!(out.points.branches().len(), 2);
        assert_relative_eq!(out.eccentricity, 5.0 / 3.0);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        for t in ConicType::ALL {
            let params = ParameterSet::new(2.5, 1.5, -1.0, 0.5);
            let first = compute_conic(t, &params).unwrap();
            let second = compute_conic(t, &params).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn invalid_parameters_fail_fast() {
        let err = compute_conic(ConicType::Parabola, &ParameterSet::axial(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ConicError::InvalidParameter(ParameterError::Zero { .. })));
        let err = compute_conic(ConicType::Ellipse, &ParameterSet::new(2.0, 0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ConicError::InvalidParameter(ParameterError::NonPositive { .. })));
    }

    #[test]
    fn invalid_sampling_is_reported() {
        let sampling = SamplingParams {
            hyperbola_step: 0.0,
            ..SamplingParams::default()
        };
        let err = ComputeConic::new(ConicType::Hyperbola, ParameterSet::new(1.0, 1.0, 0.0, 0.0))
            .with_sampling(sampling)
            .execute()
            .unwrap_err();
        assert!(matches!(err, ConicError::Sampling(_)));
    }

    #[test]
    fn narrower_viewport_drops_more() {
        let params = ParameterSet::new(3.0, 4.0, 0.0, 0.0);
        let wide = compute_conic(ConicType::Hyperbola, &params).unwrap();
        let narrow = ComputeConic::new(ConicType::Hyperbola, params)
            .with_sampling(SamplingParams {
                viewport: 4.0,
                ..SamplingParams::default()
            })
            .execute()
            .unwrap();
        assert!(narrow.points.len() < wide.points.len());
        // Foci at x = ±5 fall outside a viewport of 4.
        assert!(narrow.elements.iter().all(|el| !el.label().starts_with("Focus")));
    }

    #[test]
    fn custom_palette_reaches_elements() {
        let palette = Palette {
            center: "black".to_owned(),
            ..Palette::default()
        };
        let out = ComputeConic::new(ConicType::Circle, ParameterSet::axial(2.0, 0.0, 0.0))
            .with_palette(palette)
            .execute()
            .unwrap();
        assert!(matches!(
            &out.elements[0],
            GeometricElement::Point { color, .. } if color == "black"
        ));
    }

    #[test]
    fn unknown_name_gives_empty_output() {
        let out = compute_conic_named("cardioid", &ParameterSet::default()).unwrap();
        assert_eq!(out, ConicOutput::default());
        assert!(out.points.is_empty());
        assert!(out.elements.is_empty());
        assert!(out.equation.is_empty());
    }

    #[test]
    fn known_name_delegates() {
        let out = compute_conic_named("ellipse", &ParameterSet::new(3.0, 2.0, 1.0, 0.0)).unwrap();
        assert_eq!(out.equation, "(x - 1)²/3² + (y)²/2² = 1");
        assert!(compute_conic_named("ellipse", &ParameterSet::new(-3.0, 2.0, 0.0, 0.0)).is_err());
    }
}
