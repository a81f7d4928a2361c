//! Surface-side failure taxonomy.
//!
//! Only the initialize hook is fallible; the engine catches these at the
//! facade boundary, logs them, and keeps processing the rest of the batch.

use thiserror::Error;

use super::tag::SurfaceTag;

/// Failures a surface can report while being brought under management.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The expected presentation root is absent or malformed. The surface
    /// is skipped for the current operation; the batch continues.
    #[error("surface `{0}` has no usable presentation root")]
    MissingRoot(SurfaceTag),

    /// The initialize hook itself failed. Carries whatever error the host
    /// hook produced.
    #[error("initialize hook failed: {0}")]
    Initialize(#[from] anyhow::Error),
}
