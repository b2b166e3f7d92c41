use crate::error::Result;
use crate::math::Point2;

use super::{require_finite, require_nonzero};

/// A vertical parabola `y = a(x - h)² + k`.
///
/// The vertex is `(h, k)`; the parabola opens upward for `a > 0` and
/// downward for `a < 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabola {
    a: f64,
    h: f64,
    k: f64,
}

impl Parabola {
    /// Creates a new parabola.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` is zero (within tolerance) or any parameter is
    /// not finite.
    pub fn new(a: f64, h: f64, k: f64) -> Result<Self> {
        Ok(Self {
            a: require_nonzero("a", a)?,
            h: require_finite("h", h)?,
            k: require_finite("k", k)?,
        })
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
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

    /// Returns the vertex `(h, k)`.
    #[must_use]
    pub fn vertex(&self) -> Point2 {
        Point2::new(self.h, self.k)
    }

    /// Signed distance from the vertex to the focus, `1 / (4a)`.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        1.0 / (4.0 * self.a)
    }

    /// Returns the focus `(h, k + p)`.
    #[must_use]
    pub fn focus(&self) -> Point2 {
        Point2::new(self.h, self.k + self.focal_length())
    }

    /// Returns the `y` of the horizontal directrix `y = k - p`.
    ///
    /// The directrix does not depend on `h`.
    #[must_use]
    pub fn directrix(&self) -> f64 {
        self.k - self.focal_length()
    }

    /// Evaluates `y` at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.h;
        self.a * dx * dx + self.k
    }

    /// Always `1`.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        1.0
    }
}
