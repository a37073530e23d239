use boxel_geom::IVec3;
use boxel_grid::BitGrid;

use crate::build::ChunkParams;
use crate::error::MeshError;
use crate::source::VoxelSource;

/// Padded occupancy window: `(n + 2)^3` solidity bits covering the chunk plus
/// a one-voxel apron, indexed by local coordinates in `[-1, n]`. The apron
/// supplies neighbor occupancy for faces on the chunk boundary.
pub struct OccupancyWindow {
    bits: BitGrid,
    n: usize,
}

impl OccupancyWindow {
    /// Fills the window with a single `query_values` call over the padded
    /// bounds with the chunk's LOD stride.
    pub fn from_source<S: VoxelSource>(
        source: &S,
        params: &ChunkParams,
    ) -> Result<Self, MeshError> {
        let padded = params.n + 2;
        let mut cells = vec![false; padded * padded * padded];
        source
            .query_values(
                params.padded_bounds(),
                IVec3::splat(padded as i32),
                params.lod,
                &mut cells,
            )
            .map_err(MeshError::Source)?;
        let mut bits = BitGrid::new(cells.len());
        for (i, &solid) in cells.iter().enumerate() {
            if solid {
                bits.set(i, true);
            }
        }
        Ok(Self { bits, n: params.n })
    }

    /// Builds a window directly from a predicate over `[-1, n]^3`.
    pub fn from_fn(n: usize, mut solid: impl FnMut(i32, i32, i32) -> bool) -> Self {
        let padded = n + 2;
        let mut bits = BitGrid::new(padded * padded * padded);
        let mut i = 0;
        for z in -1..=n as i32 {
            for y in -1..=n as i32 {
                for x in -1..=n as i32 {
                    if solid(x, y, z) {
                        bits.set(i, true);
                    }
                    i += 1;
                }
            }
        }
        Self { bits, n }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    fn idx(&self, x: i32, y: i32, z: i32) -> usize {
        debug_assert!(x >= -1 && x <= self.n as i32);
        debug_assert!(y >= -1 && y <= self.n as i32);
        debug_assert!(z >= -1 && z <= self.n as i32);
        let p = self.n + 2;
        (x + 1) as usize + (y + 1) as usize * p + (z + 1) as usize * p * p
    }

    #[inline]
    pub fn solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.bits.test(self.idx(x, y, z))
    }

    /// True iff no voxel in the window (apron included) is solid.
    pub fn none_solid(&self) -> bool {
        self.bits.none_set()
    }

    /// Copies the interior `n^3` solidity bits into a fresh grid laid out
    /// `x + y*n + z*n^2`, the box mesher's working layout.
    pub fn solid_grid(&self) -> BitGrid {
        let n = self.n;
        let mut grid = BitGrid::new(n * n * n);
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    if self.solid(x as i32, y as i32, z as i32) {
                        grid.set(x + y * n + z * n * n, true);
                    }
                }
            }
        }
        grid
    }
}
