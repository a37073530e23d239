//! Shared constants for boxel-mesh-cpu.

/// Reference chunk edge length in voxels.
pub const CHUNK_SIZE: usize = 32;

/// Voxel-center convention: emitted geometry is shifted so integer voxel
/// coordinates land on cell centers.
pub(crate) const CENTER_OFFSET: f32 = -0.5;

pub(crate) const VERTS_PER_QUAD: usize = 4;
pub(crate) const INDICES_PER_QUAD: usize = 6;
