use crate::source::Material;

const USE_TEXTURE_BIT: u32 = 1 << 31;
const WIDTH_SHIFT: u32 = 25;
const WIDTH_MASK: u32 = 0x3F;
const INDEX_MASK: u32 = (1 << 25) - 1;

/// Packed per-vertex material, shared by the four vertices of a quad.
///
/// Bit layout:
/// - bit 31: `use_texture`, set when the shader should fetch per-voxel
///   colors from the texture-data buffer
/// - bits 25..31: quad width in voxels (the texture row length)
/// - bits 0..25: offset of the quad's first texel in the texture-data buffer
/// - with `use_texture` clear, bits 0..24 hold a solid RGB color instead
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexMaterial(u32);

impl VertexMaterial {
    pub const DEFAULT: VertexMaterial = VertexMaterial(0);

    /// Solid-color material; `use_texture` stays clear. Alpha is dropped,
    /// cubic quads are opaque.
    #[inline]
    pub fn from_color(m: Material) -> Self {
        let [r, g, b, _] = m.color;
        Self(u32::from(r) | u32::from(g) << 8 | u32::from(b) << 16)
    }

    #[inline]
    pub fn set_use_texture_false(&mut self) {
        self.0 &= !USE_TEXTURE_BIT;
    }

    /// Records the quad width and marks the quad as textured.
    #[inline]
    pub fn set_quad_width(&mut self, w: u32) {
        debug_assert!(w <= WIDTH_MASK);
        self.0 = (self.0 & !(WIDTH_MASK << WIDTH_SHIFT))
            | USE_TEXTURE_BIT
            | ((w & WIDTH_MASK) << WIDTH_SHIFT);
    }

    #[inline]
    pub fn set_texture_data_index(&mut self, i: u32) {
        debug_assert!(i <= INDEX_MASK);
        self.0 = (self.0 & !INDEX_MASK) | (i & INDEX_MASK);
    }

    #[inline]
    pub fn uses_texture(self) -> bool {
        self.0 & USE_TEXTURE_BIT != 0
    }

    #[inline]
    pub fn quad_width(self) -> u32 {
        (self.0 >> WIDTH_SHIFT) & WIDTH_MASK
    }

    #[inline]
    pub fn texture_data_index(self) -> u32 {
        self.0 & INDEX_MASK
    }

    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}
