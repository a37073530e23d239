use thiserror::Error;

use crate::source::SourceError;

/// Terminal outcomes of a chunk mesh job. No error path produces partial
/// output: a mesh is either fully emitted or fully suppressed.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The voxel source reported a failure.
    #[error("voxel query failed")]
    Source(#[source] SourceError),

    /// Cooperative cancellation was observed between phases.
    #[error("mesh job cancelled")]
    Cancelled,
}
