//! Astrometry error types.

/// Reasons an astrometric reading is not available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstroError {
    /// A required body is not present in the current model state.
    #[error("body '{0}' is not available in the current model")]
    MissingBody(String),

    /// Target and observer coincide, so there is no line of sight.
    #[error("target coincides with the observer")]
    DegenerateGeometry,
}
