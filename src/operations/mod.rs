mod compute_conic;

pub use compute_conic::{compute_conic, compute_conic_named, ComputeConic, ConicOutput};
