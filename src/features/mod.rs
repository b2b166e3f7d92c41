//! Derived geometric features: foci, vertices, centers, directrices and
//! eccentricity, plus the annotation list handed to a plot overlay.
//!
//! The free functions take raw scalars and validate them the same way
//! [`Conic::new`] does, so `a = 0` for a parabola is rejected instead of
//! producing an infinite focus.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Conic, ConicType, Ellipse, Hyperbola, ParameterSet, Parabola};
use crate::math::Point2;

/// A feature to annotate on the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GeometricElement {
    /// A labeled point.
    Point {
        x: f64,
        y: f64,
        label: String,
        color: String,
    },
    /// A labeled horizontal line `y = const`.
    Line { y: f64, label: String, color: String },
}

impl GeometricElement {
    /// Creates a point element.
    #[must_use]
    pub fn point(p: Point2, label: impl Into<String>, color: impl Into<String>) -> Self {
        GeometricElement::Point {
            x: p.x,
            y: p.y,
            label: label.into(),
            color: color.into(),
        }
    }

    /// Creates a horizontal line element.
    #[must_use]
    pub fn line(y: f64, label: impl Into<String>, color: impl Into<String>) -> Self {
        GeometricElement::Line {
            y,
            label: label.into(),
            color: color.into(),
        }
    }

    /// Returns the element's label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            GeometricElement::Point { label, .. } | GeometricElement::Line { label, .. } => label,
        }
    }

    /// Returns whether every coordinate of the element lies within
    /// `[-viewport, viewport]`.
    #[must_use]
    pub fn is_within(&self, viewport: f64) -> bool {
        match self {
            GeometricElement::Point { x, y, .. } => x.abs() <= viewport && y.abs() <= viewport,
            GeometricElement::Line { y, .. } => y.abs() <= viewport,
        }
    }
}

/// Colors used for annotation elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub focus: String,
    pub vertex: String,
    pub center: String,
    pub directrix: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            focus: "#ef4444".to_owned(),
            vertex: "#22c55e".to_owned(),
            center: "#6b7280".to_owned(),
            directrix: "#f97316".to_owned(),
        }
    }
}

/// Returns the focus `(h, k + 1/(4a))` of `y = a(x - h)² + k`.
///
/// # Errors
///
/// Returns an error if `a` is zero or any parameter is not finite.
pub fn parabola_focus(a: f64, h: f64, k: f64) -> Result<Point2> {
    Ok(Parabola::new(a, h, k)?.focus())
}

/// Returns the `y` of the directrix `y = k - 1/(4a)`. The directrix is
/// horizontal and independent of the horizontal shift.
///
/// # Errors
///
/// Returns an error if `a` is zero or any parameter is not finite.
pub fn parabola_directrix(a: f64, k: f64) -> Result<f64> {
    Ok(Parabola::new(a, 0.0, k)?.directrix())
}

/// Returns the two foci of an axis-aligned ellipse, on the major axis.
///
/// # Errors
///
/// Returns an error if a semi-axis is non-positive or any parameter is not
/// finite.
pub fn ellipse_foci(a: f64, b: f64, h: f64, k: f64) -> Result<[Point2; 2]> {
    Ok(Ellipse::new(a, b, h, k)?.foci())
}

/// Returns the two major-axis vertices of an axis-aligned ellipse.
///
/// # Errors
///
/// Returns an error if a semi-axis is non-positive or any parameter is not
/// finite.
pub fn ellipse_vertices(a: f64, b: f64, h: f64, k: f64) -> Result<[Point2; 2]> {
    Ok(Ellipse::new(a, b, h, k)?.vertices())
}

/// Returns the two foci `(h ± sqrt(a² + b²), k)` of a hyperbola.
///
/// # Errors
///
/// Returns an error if a semi-axis is non-positive or any parameter is not
/// finite.
pub fn hyperbola_foci(a: f64, b: f64, h: f64, k: f64) -> Result<[Point2; 2]> {
    Ok(Hyperbola::new(a, b, h, k)?.foci())
}

/// Returns the two vertices `(h ± a, k)` of a hyperbola.
///
/// # Errors
///
/// Returns an error if a semi-axis is non-positive or any parameter is not
/// finite.
pub fn hyperbola_vertices(a: f64, b: f64, h: f64, k: f64) -> Result<[Point2; 2]> {
    Ok(Hyperbola::new(a, b, h, k)?.vertices())
}

/// Returns the eccentricity of a conic of the given type. `b` is ignored for
/// circles and parabolas.
///
/// # Errors
///
/// Returns an error if the shape parameters are invalid for `conic_type`.
pub fn eccentricity(conic_type: ConicType, a: f64, b: f64) -> Result<f64> {
    let conic = Conic::new(conic_type, &ParameterSet::new(a, b, 0.0, 0.0))?;
    Ok(conic.eccentricity())
}

/// Builds the annotation elements of `conic`, dropping any element outside
/// `[-viewport, viewport]`.
///
/// - parabola: vertex, focus and directrix
/// - circle, ellipse and hyperbola: center, both foci and both vertices
///   (a circle's foci coincide with its center)
#[must_use]
pub fn geometric_elements(conic: &Conic, viewport: f64, palette: &Palette) -> Vec<GeometricElement> {
    let mut elements = Vec::new();
    match conic {
        Conic::Parabola(p) => {
            elements.push(GeometricElement::point(p.vertex(), "Vertex", &palette.vertex));
            elements.push(GeometricElement::point(p.focus(), "Focus", &palette.focus));
            elements.push(GeometricElement::line(p.directrix(), "Directrix", &palette.directrix));
        }
        Conic::Circle(e) | Conic::Ellipse(e) => {
            push_center_foci_vertices(&mut elements, e.center(), e.foci(), e.vertices(), palette);
        }
        Conic::Hyperbola(hy) => {
            push_center_foci_vertices(&mut elements, hy.center(), hy.foci(), hy.vertices(), palette);
        }
    }

    let total = elements.len();
    elements.retain(|el| el.is_within(viewport));
    tracing::trace!(kept = elements.len(), dropped = total - elements.len(), "built elements");
    elements
}

fn push_center_foci_vertices(
    elements: &mut Vec<GeometricElement>,
    center: Point2,
    foci: [Point2; 2],
    vertices: [Point2; 2],
    palette: &Palette,
) {
    elements.push(GeometricElement::point(center, "Center", &palette.center));
    for (i, f) in foci.into_iter().enumerate() {
        elements.push(GeometricElement::point(f, format!("Focus {}", i + 1), &palette.focus));
    }
    for (i, v) in vertices.into_iter().enumerate() {
        elements.push(GeometricElement::point(v, format!("Vertex {}", i + 1), &palette.vertex));
    }
}
