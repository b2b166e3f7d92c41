use crate::error::Result;
use crate::math::{Point2, Vector2};

use super::{require_finite, require_positive};

/// A hyperbola with horizontal transverse axis,
/// `((x - h)/a)² - ((y - k)/b)² = 1`.
///
/// Branches are parametrized by `t`:
/// right `(a cosh t + h, b sinh t + k)`, left `(-a cosh t + h, b sinh t + k)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperbola {
    a: f64,
    b: f64,
    h: f64,
    k: f64,
}

impl Hyperbola {
    /// Creates a new hyperbola.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is non-positive or any parameter
    /// is not finite.
    pub fn new(a: f64, b: f64, h: f64, k: f64) -> Result<Self> {
        Ok(Self {
            a: require_positive("a", a)?,
            b: require_positive("b", b)?,
            h: require_finite("h", h)?,
            k: require_finite("k", k)?,
        })
    }

    /// Returns the transverse semi-axis.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the conjugate semi-axis.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the horizontal shift.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Returns the vertical shift.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Returns the center `(h, k)`.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.h, self.k)
    }

    /// Distance from the center to each focus, `sqrt(a² + b²)`.
    #[must_use]
    pub fn focal_distance(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Returns both foci, left first.
    #[must_use]
    pub fn foci(&self) -> [Point2; 2] {
        let offset = Vector2::x() * self.focal_distance();
        [self.center() - offset, self.center() + offset]
    }

    /// Returns both vertices `(h ± a, k)`, left first.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 2] {
        let offset = Vector2::x() * self.a;
        [self.center() - offset, self.center() + offset]
    }

    /// Returns `sqrt(a² + b²) / a`, always greater than `1`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.focal_distance() / self.a
    }

    /// Evaluates the right branch at `t`.
    #[must_use]
    pub fn evaluate_right(&self, t: f64) -> Point2 {
        Point2::new(self.a * t.cosh() + self.h, self.b * t.sinh() + self.k)
    }

    /// Evaluates the left branch at `t`.
    #[must_use]
    pub fn evaluate_left(&self, t: f64) -> Point2 {
        Point2::new(-self.a * t.cosh() + self.h, self.b * t.sinh() + self.k)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn foci_three_four_five() {
        let hy = Hyperbola::new(3.0, 4.0, 0.0, 2.0).unwrap();
        let [f1, f2] = hy.foci();
        assert_relative_eq!(f1, Point2::new(-5.0, 2.0));
        assert_relative_eq!(f2, Point2::new(5.0, 2.0));
        assert_relative_eq!(hy.eccentricity(), 5.0 / 3.0);
    }

    #[test]
    fn vertices_on_transverse_axis() {
        let hy = Hyperbola::new(2.0, 1.0, 1.0, 1.0).unwrap();
        let [v1, v2] = hy.vertices();
        assert_relative_eq!(v1, Point2::new(-1.0, 1.0));
        assert_relative_eq!(v2, Point2::new(3.0, 1.0));
    }

    #[test]
    fn branches_meet_vertices_at_zero() {
        let hy = Hyperbola::new(2.0, 1.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(hy.evaluate_right(0.0), hy.vertices()[1]);
        assert_relative_eq!(hy.evaluate_left(0.0), hy.vertices()[0]);
    }

    #[test]
    fn evaluated_points_satisfy_equation() {
        let hy = Hyperbola::new(2.0, 3.0, -1.0, 0.5).unwrap();
        for t in [-2.0, -0.5, 0.7, 1.9] {
            for p in [hy.evaluate_right(t), hy.evaluate_left(t)] {
                let u = (p.x - hy.h()) / hy.a();
                let v = (p.y - hy.k()) / hy.b();
                assert_relative_eq!(u * u - v * v, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn invalid_axes() {
        assert!(Hyperbola::new(0.0, 1.0, 0.0, 0.0).is_err());
        assert!(Hyperbola::new(1.0, -2.0, 0.0, 0.0).is_err());
    }
}
