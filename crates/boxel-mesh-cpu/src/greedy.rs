use boxel_geom::{IBox, IVec3};
use boxel_grid::BitGrid;

use crate::window::OccupancyWindow;

/// Merged rectangle within a single face layer. `u`/`v` are the in-plane
/// start coordinates, `w`/`h` the extents along them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quad {
    pub layer: u32,
    pub u: u32,
    pub v: u32,
    pub w: u32,
    pub h: u32,
}

/// Collapses each `n*n` layer of a face mask into maximal rectangles,
/// appending them to `out`. Width is grown before height; the tie-break and
/// the scan order make the output deterministic. The mask is consumed: every
/// covered bit is cleared, and each bit is cleared at most once.
pub fn greedy_quads(mask: &mut BitGrid, n: usize, out: &mut Vec<Quad>) {
    debug_assert_eq!(mask.len(), n * n * n);
    for layer in 0..n {
        let base = layer * n * n;
        for u in 0..n {
            let mut v = 0;
            while v < n {
                let seed = base + u + v * n;
                if !mask.test(seed) {
                    v += 1;
                    continue;
                }
                // The seed is consumed like every other covered bit, so the
                // layer is all-zero once its quads are emitted.
                mask.set(seed, false);
                let mut w = 1;
                while u + w < n && mask.test_and_clear(base + (u + w) + v * n) {
                    w += 1;
                }
                let mut h = 1;
                while v + h < n && mask.test_and_clear_range(base + u + (v + h) * n, w) {
                    h += 1;
                }
                out.push(Quad {
                    layer: layer as u32,
                    u: u as u32,
                    v: v as u32,
                    w: w as u32,
                    h: h as u32,
                });
                v += h;
            }
        }
    }
}

/// Collapses the solid-voxel grid (`x + y*n + z*n^2` layout) into maximal
/// boxes. Extents grow x before y before z; deterministic. The grid is
/// consumed.
pub fn greedy_boxes(solid: &mut BitGrid, n: usize, out: &mut Vec<IBox>) {
    debug_assert_eq!(solid.len(), n * n * n);
    let n2 = n * n;
    for x in 0..n {
        for y in 0..n {
            let mut z = 0;
            while z < n {
                let seed = x + y * n + z * n2;
                if !solid.test(seed) {
                    z += 1;
                    continue;
                }
                solid.set(seed, false);
                let mut sx = 1;
                while x + sx < n && solid.test_and_clear(seed + sx) {
                    sx += 1;
                }
                let mut sy = 1;
                while y + sy < n && solid.test_and_clear_range(x + (y + sy) * n + z * n2, sx) {
                    sy += 1;
                }
                let mut sz = 1;
                while z + sz < n && clear_slab(solid, n, x, sx, y, sy, z + sz) {
                    sz += 1;
                }
                let min = IVec3::new(x as i32, y as i32, z as i32);
                let size = IVec3::new(sx as i32, sy as i32, sz as i32);
                out.push(IBox::new(min, min + size));
                z += sz;
            }
        }
    }
}

/// Tests every row of the `sx * sy` slab at depth `z` before clearing any,
/// so a partial slab leaves the grid untouched.
fn clear_slab(
    solid: &mut BitGrid,
    n: usize,
    x: usize,
    sx: usize,
    y: usize,
    sy: usize,
    z: usize,
) -> bool {
    let n2 = n * n;
    for row in 0..sy {
        if !solid.test_range(x + (y + row) * n + z * n2, sx) {
            return false;
        }
    }
    for row in 0..sy {
        solid.set_range(x + (y + row) * n + z * n2, sx, false);
    }
    true
}

/// Drops every box whose six outward one-voxel slabs are entirely solid in
/// the window. Such a box is fully enclosed: it contributes no visible
/// geometry and no reachable collision surface. Runs against the intact
/// occupancy window, not the grid the box mesher consumed.
pub fn cull_enclosed_boxes(window: &OccupancyWindow, boxes: &mut Vec<IBox>) {
    boxes.retain(|b| !box_is_enclosed(window, b));
}

fn box_is_enclosed(window: &OccupancyWindow, b: &IBox) -> bool {
    for x in b.min.x..b.max.x {
        for y in b.min.y..b.max.y {
            if !window.solid(x, y, b.min.z - 1) || !window.solid(x, y, b.max.z) {
                return false;
            }
        }
    }
    for x in b.min.x..b.max.x {
        for z in b.min.z..b.max.z {
            if !window.solid(x, b.min.y - 1, z) || !window.solid(x, b.max.y, z) {
                return false;
            }
        }
    }
    for y in b.min.y..b.max.y {
        for z in b.min.z..b.max.z {
            if !window.solid(b.min.x - 1, y, z) || !window.solid(b.max.x, y, z) {
                return false;
            }
        }
    }
    true
}
