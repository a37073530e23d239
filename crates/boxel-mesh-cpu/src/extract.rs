use boxel_grid::BitGrid;

use crate::face::Face;
use crate::window::OccupancyWindow;

/// Builds the six per-direction face masks from the padded window: a bit is
/// set exactly where a solid voxel has an empty neighbor in that direction.
/// Faces against the apron count; each neighbor is read at most once per
/// solid voxel.
pub fn extract_faces(window: &OccupancyWindow) -> [BitGrid; 6] {
    let n = window.n();
    let mut masks: [BitGrid; 6] = core::array::from_fn(|_| BitGrid::new(n * n * n));
    for z in 0..n as i32 {
        for y in 0..n as i32 {
            for x in 0..n as i32 {
                if !window.solid(x, y, z) {
                    continue;
                }
                let (xu, yu, zu) = (x as usize, y as usize, z as usize);
                if !window.solid(x - 1, y, z) {
                    masks[0].set(Face::NegX.mask_index(n, xu, yu, zu), true);
                }
                if !window.solid(x + 1, y, z) {
                    masks[1].set(Face::PosX.mask_index(n, xu, yu, zu), true);
                }
                if !window.solid(x, y - 1, z) {
                    masks[2].set(Face::NegY.mask_index(n, xu, yu, zu), true);
                }
                if !window.solid(x, y + 1, z) {
                    masks[3].set(Face::PosY.mask_index(n, xu, yu, zu), true);
                }
                if !window.solid(x, y, z - 1) {
                    masks[4].set(Face::NegZ.mask_index(n, xu, yu, zu), true);
                }
                if !window.solid(x, y, z + 1) {
                    masks[5].set(Face::PosZ.mask_index(n, xu, yu, zu), true);
                }
            }
        }
    }
    masks
}
