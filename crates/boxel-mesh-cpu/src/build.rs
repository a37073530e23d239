use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use boxel_geom::{Aabb, IBox, IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{CENTER_OFFSET, CHUNK_SIZE};
use crate::error::MeshError;
use crate::extract::extract_faces;
use crate::face::Face;
use crate::greedy::{cull_enclosed_boxes, greedy_boxes, greedy_quads, Quad};
use crate::mesh_build::{emit_quad, MeshBuild};
use crate::source::VoxelSource;
use crate::window::OccupancyWindow;

/// Immutable per-chunk meshing parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkParams {
    /// Chunk edge length in voxels. Must be a power of two.
    pub n: usize,
    /// World coordinate of the chunk's min corner.
    pub origin: IVec3,
    /// LOD stride applied to voxel coordinates when emitting world space.
    /// Must be at least 1.
    pub step: i32,
    pub lod: u32,
}

impl ChunkParams {
    /// Parameters at the reference chunk size.
    pub fn new(origin: IVec3, step: i32, lod: u32) -> Self {
        Self {
            n: CHUNK_SIZE,
            origin,
            step,
            lod,
        }
    }

    pub fn with_size(n: usize, origin: IVec3, step: i32, lod: u32) -> Self {
        Self { n, origin, step, lod }
    }

    /// World bounds of the padded sampling window; also the region the
    /// source must keep read-locked while the mesher runs.
    pub fn padded_bounds(&self) -> IBox {
        let min = self.origin - IVec3::splat(self.step);
        IBox::new(min, min + IVec3::splat((self.n as i32 + 2) * self.step))
    }

    fn validate(&self) {
        assert!(
            self.n.is_power_of_two(),
            "chunk size must be a power of two, got {}",
            self.n
        );
        assert!(self.step >= 1, "step must be at least 1, got {}", self.step);
    }
}

/// What the caller wants out of a chunk mesh job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshRequest {
    /// Sample per-voxel materials into vertex data.
    pub materials: bool,
    /// Produce greedy collision boxes alongside the render mesh.
    pub collision: bool,
}

/// Output of one chunk mesh job.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshResult {
    pub mesh: MeshBuild,
    /// World-space collision boxes; `None` when collision was not requested.
    pub collision: Option<Vec<Aabb>>,
}

#[inline]
fn elapsed_us(start: Instant) -> u32 {
    start.elapsed().as_micros().min(u128::from(u32::MAX)) as u32
}

#[inline]
fn box_to_world(b: IBox, step: i32) -> Aabb {
    b.scaled(step).to_aabb().shifted(Vec3::splat(CENTER_OFFSET))
}

/// Meshes one chunk: samples the padded occupancy window, extracts exposed
/// faces, merges them into quads per direction, and (when requested) merges
/// the solid volume into collision boxes with fully enclosed boxes culled.
///
/// `cancel` is polled between the six directions and between box merging and
/// culling; an observed cancellation yields `Err(Cancelled)` with no output.
///
/// # Panics
///
/// If `params.n` is not a power of two or `params.step < 1`.
pub fn mesh_chunk<S: VoxelSource>(
    source: &S,
    params: &ChunkParams,
    request: &MeshRequest,
    cancel: &AtomicBool,
) -> Result<MeshResult, MeshError> {
    params.validate();
    let n = params.n;
    let t_total = Instant::now();

    let guard = source.acquire_read_lock(params.padded_bounds());

    let t_sample = Instant::now();
    let window = OccupancyWindow::from_source(source, params)?;
    let sample_us = elapsed_us(t_sample);

    if window.none_solid() {
        drop(guard);
        return Ok(MeshResult {
            mesh: MeshBuild::default(),
            collision: request.collision.then(Vec::new),
        });
    }

    let t_faces = Instant::now();
    let mut masks = extract_faces(&window);
    let faces_us = elapsed_us(t_faces);

    let t_quads = Instant::now();
    let mut mesh = MeshBuild::default();
    let mut quads: Vec<Quad> = Vec::new();
    for face in Face::ALL {
        if cancel.load(Ordering::Relaxed) {
            return Err(MeshError::Cancelled);
        }
        quads.clear();
        greedy_quads(&mut masks[face.index()], n, &mut quads);
        for &quad in &quads {
            if request.materials {
                let (x_axis, y_axis) = face.plane_axes();
                let mut sampler = |du: u32, dv: u32| {
                    let mut p = IVec3::ZERO;
                    p[x_axis] = (quad.u + du) as i32;
                    p[y_axis] = (quad.v + dv) as i32;
                    p[face.normal_axis()] = quad.layer as i32;
                    source.query_material(p * params.step + params.origin, params.lod)
                };
                emit_quad(&mut mesh, face, quad, params.step, Some(&mut sampler));
            } else {
                emit_quad(&mut mesh, face, quad, params.step, None);
            }
        }
    }
    let quads_us = elapsed_us(t_quads);

    // All source reads are done; release the region before collision meshing.
    drop(guard);

    let mut boxes_us = 0;
    let collision = if request.collision {
        if mesh.idx.is_empty() {
            // No exposed face: the chunk is fully enclosed and every box
            // would be culled anyway.
            Some(Vec::new())
        } else {
            let t_boxes = Instant::now();
            let mut solid = window.solid_grid();
            let mut boxes = Vec::new();
            greedy_boxes(&mut solid, n, &mut boxes);
            if cancel.load(Ordering::Relaxed) {
                return Err(MeshError::Cancelled);
            }
            cull_enclosed_boxes(&window, &mut boxes);
            boxes_us = elapsed_us(t_boxes);
            Some(
                boxes
                    .iter()
                    .map(|&b| box_to_world(b, params.step))
                    .collect(),
            )
        }
    } else {
        None
    };

    log::info!(
        target: "perf",
        "us sample={} faces={} quads={} boxes={} total={} mesh_chunk n={} step={} verts={}",
        sample_us,
        faces_us,
        quads_us,
        boxes_us,
        elapsed_us(t_total),
        n,
        params.step,
        mesh.vertex_count()
    );

    Ok(MeshResult { mesh, collision })
}

/// Positions-and-indices-only variant of [`mesh_chunk`]: no material
/// sampling, no collision boxes.
pub fn mesh_chunk_geometry<S: VoxelSource>(
    source: &S,
    params: &ChunkParams,
    cancel: &AtomicBool,
) -> Result<(Vec<f32>, Vec<u32>), MeshError> {
    let result = mesh_chunk(source, params, &MeshRequest::default(), cancel)?;
    Ok((result.mesh.pos, result.mesh.idx))
}
