use crate::error::Result;
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{require_finite, require_positive};

/// An axis-aligned ellipse `((x - h)/a)² + ((y - k)/b)² = 1`.
///
/// `a` is the semi-axis along `x` and `b` along `y`; either may be the major
/// one. A circle is the case `a == b`.
///
/// `P(t) = (a cos t + h, b sin t + k)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    a: f64,
    b: f64,
    h: f64,
    k: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
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

    /// Creates a circle of the given radius centered at `(h, k)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or any parameter is not
    /// finite.
    pub fn circle(radius: f64, h: f64, k: f64) -> Result<Self> {
        Self::new(radius, radius, h, k)
    }

    /// Returns the semi-axis along `x`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the semi-axis along `y`.
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

    /// Returns whether both semi-axes are equal.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        (self.a - self.b).abs() < TOLERANCE
    }

    /// Returns whether the major axis lies along `x` (`a > b`).
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.a > self.b
    }

    /// Distance from the center to each focus, `sqrt(|a² - b²|)`.
    #[must_use]
    pub fn focal_distance(&self) -> f64 {
        (self.a * self.a - self.b * self.b).abs().sqrt()
    }

    /// Unit direction of the major axis.
    fn major_dir(&self) -> Vector2 {
        if self.is_horizontal() {
            Vector2::x()
        } else {
            Vector2::y()
        }
    }

    /// Returns both foci on the major axis, lower coordinate first. For a
    /// circle both collapse to the center.
    #[must_use]
    pub fn foci(&self) -> [Point2; 2] {
        let offset = self.major_dir() * self.focal_distance();
        let center = self.center();
        [center - offset, center + offset]
    }

    /// Returns the two major-axis vertices, lower coordinate first.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 2] {
        let offset = if self.is_horizontal() {
            Vector2::x() * self.a
        } else {
            Vector2::y() * self.b
        };
        let center = self.center();
        [center - offset, center + offset]
    }

    /// Returns `sqrt(|a² - b²|) / max(a, b)`, which is `0` for a circle.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.focal_distance() / self.a.max(self.b)
    }

    /// Evaluates the ellipse at angle `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(self.a * t.cos() + self.h, self.b * t.sin() + self.k)
    }
}
