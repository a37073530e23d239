use boxel_geom::Vec3;

/// Face directions in mask order. The normal axis is `index / 2` and odd
/// indices point along the positive axis, so `(-X,+X,-Y,+Y,-Z,+Z)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

impl Face {
    /// All six directions in mask order; also the emission order.
    pub const ALL: [Face; 6] = [
        Face::NegX,
        Face::PosX,
        Face::NegY,
        Face::PosY,
        Face::NegZ,
        Face::PosZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `NegX` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::NegX,
            1 => Face::PosX,
            2 => Face::NegY,
            3 => Face::PosY,
            4 => Face::NegZ,
            5 => Face::PosZ,
            _ => Face::NegX,
        }
    }

    /// True for `+X`, `+Y`, `+Z`.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.index() & 1 == 1
    }

    /// Axis the face normal lies on: 0 = X, 1 = Y, 2 = Z.
    #[inline]
    pub fn normal_axis(self) -> usize {
        self.index() >> 1
    }

    /// In-plane axes `(u, v)` such that `(u, v, normal_axis)` is a cyclic
    /// permutation of `(X, Y, Z)`.
    #[inline]
    pub fn plane_axes(self) -> (usize, usize) {
        let z = self.normal_axis();
        ((z + 1) % 3, (z + 2) % 3)
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let mut n = Vec3::ZERO;
        n[self.normal_axis()] = if self.is_positive() { 1.0 } else { -1.0 };
        n
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
            Face::NegY => (0, -1, 0),
            Face::PosY => (0, 1, 0),
            Face::NegZ => (0, 0, -1),
            Face::PosZ => (0, 0, 1),
        }
    }

    /// Index of voxel `(x, y, z)` in this direction's `n^3` face mask. The
    /// in-plane axes vary fastest and the normal axis selects the layer, so
    /// each layer is one contiguous `n*n` run of bits.
    #[inline]
    pub fn mask_index(self, n: usize, x: usize, y: usize, z: usize) -> usize {
        let c = [x, y, z];
        let (u, v) = self.plane_axes();
        c[u] + c[v] * n + c[self.normal_axis()] * n * n
    }
}
