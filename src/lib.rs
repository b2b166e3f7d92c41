//! Sampling, derived features and canonical equations of axis-aligned conic
//! sections.
//!
//! Everything here is a pure function of its inputs: a [`ConicType`] and a
//! [`ParameterSet`] go in, and a point sample, annotation elements and an
//! equation string come out.
//!
//! ```
//! use conics::{compute_conic, ConicType, ParameterSet};
//!
//! let out = compute_conic(ConicType::Ellipse, &ParameterSet::new(3.0, 2.0, 1.0, 0.0))?;
//! assert_eq!(out.equation, "(x - 1)²/3² + (y)²/2² = 1");
//! assert!(out.points.is_closed());
//! # Ok::<(), conics::ConicError>(())
//! ```

pub mod equation;
pub mod error;
pub mod export;
pub mod features;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod sampling;

pub use error::{ConicError, Result};
pub use geometry::{Conic, ConicType, ParameterSet};
pub use operations::{compute_conic, compute_conic_named, ComputeConic, ConicOutput};
