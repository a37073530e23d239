use boxel_geom::Vec3;

use crate::constants::{CENTER_OFFSET, INDICES_PER_QUAD, VERTS_PER_QUAD};
use crate::face::Face;
use crate::greedy::Quad;
use crate::material::VertexMaterial;
use crate::source::Material;

/// Mesh output buffers, one flat array per vertex attribute.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    /// 3 per vertex.
    pub pos: Vec<f32>,
    /// 3 per vertex, unit, along the face normal.
    pub norm: Vec<f32>,
    /// 3 per vertex, unit, along the face's u axis.
    pub tan: Vec<f32>,
    /// 2 per vertex; spans `{0, w} x {0, h}` so unit-voxel textures tile
    /// across merged quads.
    pub uv: Vec<f32>,
    /// Packed [`VertexMaterial`] per vertex.
    pub mat: Vec<u32>,
    /// Monotonically increasing in allocation order, 6 per quad.
    pub idx: Vec<u32>,
    /// Flat RGBA texels referenced by textured vertex materials.
    pub tex: Vec<u32>,
}

impl MeshBuild {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / INDICES_PER_QUAD
    }
}

/// Quad corners in `(u, v)` order: the vertex walk is counterclockwise in
/// the face plane.
const CORNERS: [(u32, u32); VERTS_PER_QUAD] = [(0, 0), (1, 0), (1, 1), (0, 1)];

/// Appends one merged rectangle as four vertices and six indices.
///
/// `sample` reads the voxel material at offset `(du, dv)` inside the quad;
/// `None` skips material sampling and leaves the default material on all
/// four vertices. A `1x1` quad (or a merged quad whose sampled colors are
/// all equal) takes the solid-color form and allocates no texture data.
pub fn emit_quad(
    build: &mut MeshBuild,
    face: Face,
    quad: Quad,
    step: i32,
    sample: Option<&mut dyn FnMut(u32, u32) -> Material>,
) {
    let z_axis = face.normal_axis();
    let (x_axis, y_axis) = face.plane_axes();
    let positive = face.is_positive();

    let base = build.vertex_count() as u32;
    // Positive faces wind (0,1,2 / 0,2,3); negative faces reverse so every
    // triangle's edge cross product points along the face normal.
    let order: [u32; INDICES_PER_QUAD] = if positive {
        [0, 1, 2, 0, 2, 3]
    } else {
        [2, 1, 0, 3, 2, 0]
    };
    build.idx.extend(order.iter().map(|&o| base + o));

    let mut vmat = VertexMaterial::DEFAULT;
    if let Some(sample) = sample {
        if quad.w == 1 && quad.h == 1 {
            vmat = VertexMaterial::from_color(sample(0, 0));
            vmat.set_use_texture_false();
        } else {
            let mut colors = Vec::with_capacity((quad.w * quad.h) as usize);
            for dv in 0..quad.h {
                for du in 0..quad.w {
                    colors.push(sample(du, dv));
                }
            }
            if colors.iter().all(|&c| c == colors[0]) {
                vmat = VertexMaterial::from_color(colors[0]);
                vmat.set_use_texture_false();
            } else {
                vmat.set_quad_width(quad.w);
                vmat.set_texture_data_index(build.tex.len() as u32);
                build.tex.extend(colors.iter().map(|c| c.packed()));
            }
        }
    }

    let normal = face.normal();
    let mut tangent = Vec3::ZERO;
    tangent[x_axis] = 1.0;

    // Positive faces sit on the far plane of their layer.
    let layer = quad.layer + u32::from(positive);
    for &(cu, cv) in &CORNERS {
        let mut p = Vec3::ZERO;
        p[x_axis] = (quad.u + quad.w * cu) as f32;
        p[y_axis] = (quad.v + quad.h * cv) as f32;
        p[z_axis] = layer as f32;
        let p = p * step as f32 + Vec3::splat(CENTER_OFFSET);
        build.pos.extend_from_slice(&[p.x, p.y, p.z]);
        build.norm.extend_from_slice(&[normal.x, normal.y, normal.z]);
        build.tan.extend_from_slice(&[tangent.x, tangent.y, tangent.z]);
        build
            .uv
            .extend_from_slice(&[(quad.w * cu) as f32, (quad.h * cv) as f32]);
        build.mat.push(vmat.raw());
    }
}
