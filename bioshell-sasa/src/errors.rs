use thiserror::Error;

/// Errors that may appear while computing a Lee & Richards SASA.
#[derive(Debug, Error)]
pub enum SasaError {
    #[error("can't compute SASA of an empty structure")]
    EmptyStructure,

    #[error("slice thickness delta must be strictly positive, got {0}")]
    InvalidSliceThickness(f64),

    #[error("probe radius must be non-negative, got {0}")]
    InvalidProbeRadius(f64),

    #[error("{n_coords} coordinates were provided but {n_radii} radii")]
    RadiiLengthMismatch { n_coords: usize, n_radii: usize },

    #[error("atom {index} has a negative radius: {radius}")]
    NegativeRadius { index: usize, radius: f64 },
}
