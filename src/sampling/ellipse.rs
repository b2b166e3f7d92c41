use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::Ellipse;
use crate::math::{sweep, Point2};

use super::{round_point, CurveSample, SamplingParams};

/// Samples an ellipse (or circle) by sweeping the angle over `[0, 2π]`.
///
/// Points outside the viewport are dropped; an ellipse lying entirely
/// outside it yields an empty sample. The sample is reported closed only
/// when no point was dropped.
///
/// # Errors
///
/// Returns an error if `params` is invalid.
pub fn sample_ellipse(ellipse: &Ellipse, params: &SamplingParams) -> Result<CurveSample> {
    params.validate_ellipse()?;

    let mut swept = 0usize;
    let points: Vec<Point2> = sweep(0.0, TAU, params.angle_step)
        .map(|t| ellipse.evaluate(t))
        .inspect(|_| swept += 1)
        .filter(|p| params.in_viewport(p))
        .map(round_point)
        .collect();

    let closed = !points.is_empty() && points.len() == swept;
    tracing::trace!(count = points.len(), swept, closed, "sampled ellipse");
    Ok(CurveSample::single(points, closed))
}
