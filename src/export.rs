//! Plain-data export of a computed conic: a JSON record of the equation and
//! parameters, and a CSV dump of the sampled points.
//!
//! No clock or file access happens here; the caller supplies the timestamp
//! and decides where the rendered text goes.

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::geometry::{ConicType, ParameterSet};
use crate::math::Point2;
use crate::sampling::CurveSample;

/// A serializable sampled point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point2> for DataPoint {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<&Point2> for DataPoint {
    fn from(p: &Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Parameters as exported: only the fields meaningful for the conic type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportParameters {
    /// Ellipse and hyperbola.
    Biaxial { a: f64, b: f64, h: f64, k: f64 },
    /// Parabola and circle.
    Single { a: f64, h: f64, k: f64 },
}

impl ExportParameters {
    /// Selects the fields of `params` that apply to `conic_type`.
    #[must_use]
    pub fn new(conic_type: ConicType, params: &ParameterSet) -> Self {
        let ParameterSet { a, b, h, k } = *params;
        if conic_type.uses_b() {
            ExportParameters::Biaxial { a, b, h, k }
        } else {
            ExportParameters::Single { a, h, k }
        }
    }
}

/// Exported snapshot of one conic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    #[serde(rename = "type")]
    pub conic_type: ConicType,
    pub equation: String,
    pub parameters: ExportParameters,
    pub timestamp: String,
}

impl ExportData {
    /// Creates an export record.
    #[must_use]
    pub fn new(
        conic_type: ConicType,
        equation: impl Into<String>,
        params: &ParameterSet,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            conic_type,
            equation: equation.into(),
            parameters: ExportParameters::new(conic_type, params),
            timestamp: timestamp.into(),
        }
    }

    /// Renders the record as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ExportError::from)?)
    }

    /// Parses a record previously produced by [`ExportData::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialize`] if the text is not a valid record.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text).map_err(ExportError::from)?)
    }
}

/// Converts a sample to serializable points, branch by branch.
#[must_use]
pub fn data_points(sample: &CurveSample) -> Vec<DataPoint> {
    sample.points().map(DataPoint::from).collect()
}

/// Renders a sample as CSV with an `x,y` header.
#[must_use]
pub fn points_to_csv(sample: &CurveSample) -> String {
    let mut csv = String::from("x,y\n");
    for p in sample.points() {
        csv.push_str(&format!("{},{}\n", p.x, p.y));
    }
    csv
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::compute_conic;

    #[test]
    fn parabola_export_omits_b() {
        let params = ParameterSet::new(2.0, 9.0, 3.0, -1.0);
        let data = ExportData::new(ConicType::Parabola, "y = 2(x - 3)² - 1", &params, "2024-01-01T00:00:00Z");
        let json: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "parabola");
        assert_eq!(json["equation"], "y = 2(x - 3)² - 1");
        assert_eq!(json["parameters"]["a"], 2.0);
        assert!(json["parameters"].get("b").is_none());
        assert_eq!(json["timestamp"], "2024-01-01T00:00:00Z");
    }

    #[test]
    fn ellipse_export_keeps_b() {
        let params = ParameterSet::new(3.0, 2.0, 1.0, 0.0);
        let data = ExportData::new(ConicType::Ellipse, "", &params, "t");
        let json: serde_json::Value = serde_json::to_value(&data).unwrap();
        assert_eq!(json["parameters"]["b"], 2.0);
    }

    #[test]
    fn json_is_two_space_indented() {
        let data = ExportData::new(ConicType::Circle, "(x)² + (y)² = 1²", &ParameterSet::default(), "t");
        let text = data.to_json().unwrap();
        assert!(text.contains("\n  \"type\": \"circle\""));
    }

    #[test]
    fn json_reads_back() {
        let data = ExportData::new(ConicType::Hyperbola, "eq", &ParameterSet::new(3.0, 4.0, 0.0, 2.0), "t");
        let back = ExportData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn malformed_json_is_an_export_error() {
        let err = ExportData::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::error::ConicError::Export(_)));
    }

    #[test]
    fn csv_lists_every_point() {
        let out = compute_conic(ConicType::Hyperbola, &ParameterSet::new(1.0, 1.0, 0.0, 0.0)).unwrap();
        let csv = points_to_csv(&out.points);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("x,y"));
        assert_eq!(lines.count(), out.points.len());
        assert_eq!(data_points(&out.points).len(), out.points.len());
    }

    #[test]
    fn csv_of_empty_sample_is_header_only() {
        assert_eq!(points_to_csv(&CurveSample::default()), "x,y\n");
    }

    #[test]
    fn csv_formats_plain_numbers() {
        let sample = CurveSample::single(vec![Point2::new(1.0, -2.5)], false);
        assert_eq!(points_to_csv(&sample), "x,y\n1,-2.5\n");
    }
}
