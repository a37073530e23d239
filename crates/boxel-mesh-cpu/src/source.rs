use std::error::Error;

use boxel_geom::{IBox, IVec3};

/// Failure reported by a [`VoxelSource`] query. Propagated to the caller
/// verbatim; the mesher performs no retries.
pub type SourceError = Box<dyn Error + Send + Sync>;

/// RGBA voxel color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Material {
    pub color: [u8; 4],
}

impl Material {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { color: [r, g, b, a] }
    }

    /// Little-endian RGBA8 packing used by the texture-data buffer.
    #[inline]
    pub fn packed(self) -> u32 {
        let [r, g, b, a] = self.color;
        u32::from(r) | u32::from(g) << 8 | u32::from(b) << 16 | u32::from(a) << 24
    }
}

/// External voxel data the mesher pulls from. The mesher issues exactly one
/// `query_values` call per chunk over the padded window bounds, and one
/// `query_material` call per sampled voxel when materials are requested.
pub trait VoxelSource {
    /// Region lock held while the mesher reads values and materials. The
    /// mesher drops it after the last material read and before collision
    /// meshing begins.
    type ReadGuard;

    fn acquire_read_lock(&self, bounds: IBox) -> Self::ReadGuard;

    /// Fills `out` with one occupancy bit per cell of `shape` in x-fastest
    /// order, sampling the lattice `bounds.min + cell * (bounds.size() /
    /// shape)`. `out.len()` equals `shape.volume()`.
    fn query_values(
        &self,
        bounds: IBox,
        shape: IVec3,
        lod: u32,
        out: &mut [bool],
    ) -> Result<(), SourceError>;

    fn query_material(&self, pos: IVec3, lod: u32) -> Material;
}
