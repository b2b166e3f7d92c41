use crate::error::Result;
use crate::geometry::Parabola;
use crate::math::{round_to, sweep, Point2};

use super::{CurveSample, SamplingParams, COORD_DECIMALS, PARABOLA_X_DECIMALS};

/// Samples a parabola by sweeping `x` over `[-range, range]`.
///
/// Points with `|y|` above `parabola_y_max` are dropped, so steep parabolas
/// yield a sample with gaps at the ends of the sweep. The result is ordered
/// by increasing `x`.
///
/// # Errors
///
/// Returns an error if `params` is invalid.
pub fn sample_parabola(parabola: &Parabola, params: &SamplingParams) -> Result<CurveSample> {
    params.validate_parabola()?;

    let range = params.parabola_range;
    let points: Vec<Point2> = sweep(-range, range, params.parabola_step)
        .filter_map(|x| {
            let y = parabola.evaluate(x);
            (y.abs() <= params.parabola_y_max).then(|| {
                Point2::new(round_to(x, PARABOLA_X_DECIMALS), round_to(y, COORD_DECIMALS))
            })
        })
        .collect();

    tracing::trace!(count = points.len(), "sampled parabola");
    Ok(CurveSample::single(points, false))
}
