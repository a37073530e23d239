//! CPU greedy cubic mesher: turns solid/empty voxel occupancy into a minimal
//! set of merged render quads and axis-aligned collision boxes.
//!
//! The pipeline per chunk: fill the padded occupancy window from a
//! [`VoxelSource`], extract six per-direction face masks, collapse each mask
//! into maximal rectangles with bitwise row operations, emit vertices, then
//! optionally collapse the solid volume into boxes and cull the fully
//! enclosed ones. Everything is job-local; the mesher holds no shared state.
#![forbid(unsafe_code)]

mod build;
mod constants;
mod error;
mod extract;
mod face;
mod greedy;
mod material;
mod mesh_build;
mod source;
mod window;

pub use build::{mesh_chunk, mesh_chunk_geometry, ChunkParams, MeshRequest, MeshResult};
pub use constants::CHUNK_SIZE;
pub use error::MeshError;
pub use extract::extract_faces;
pub use face::Face;
pub use greedy::{cull_enclosed_boxes, greedy_boxes, greedy_quads, Quad};
pub use material::VertexMaterial;
pub use mesh_build::{emit_quad, MeshBuild};
pub use source::{Material, SourceError, VoxelSource};
pub use window::OccupancyWindow;
