use crate::error::Result;
use crate::geometry::Hyperbola;
use crate::math::{sweep, Point2};

use super::{round_point, CurveSample, SamplingParams};

/// Samples both branches of a hyperbola over `t` in `[-t_max, t_max]`.
///
/// The right branch comes first, then the left; each is clipped to the
/// viewport independently. The branches are kept separate so a renderer
/// can avoid joining the last right point to the first left point.
///
/// # Errors
///
/// Returns an error if `params` is invalid.
pub fn sample_hyperbola(hyperbola: &Hyperbola, params: &SamplingParams) -> Result<CurveSample> {
    params.validate_hyperbola()?;

    let t_max = params.hyperbola_t_max;
    let branch = |eval: fn(&Hyperbola, f64) -> Point2| -> Vec<Point2> {
        sweep(-t_max, t_max, params.hyperbola_step)
            .map(|t| eval(hyperbola, t))
            .filter(|p| params.in_viewport(p))
            .map(round_point)
            .collect()
    };

    let right = branch(Hyperbola::evaluate_right);
    let left = branch(Hyperbola::evaluate_left);
    tracing::trace!(right = right.len(), left = left.len(), "sampled hyperbola");
    Ok(CurveSample::from_branches(vec![right, left]))
}
