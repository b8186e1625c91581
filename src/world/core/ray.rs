use super::{BlockId, VoxelPos};
use glam::{IVec3, Vec3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Direction is normalized; a zero direction stays zero and never hits
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }
}

/// The six axis-aligned faces of a voxel
///
/// Declaration order is the meshing order: Top, Bottom, Front, Back, Left, Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Top,    // +Y
    Bottom, // -Y
    Front,  // +Z
    Back,   // -Z
    Left,   // -X
    Right,  // +X
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Front,
        BlockFace::Back,
        BlockFace::Left,
        BlockFace::Right,
    ];

    /// Position in `ALL` and in the mesh face table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Offset to the neighbor across this face
    pub fn offset(self) -> IVec3 {
        match self {
            BlockFace::Top => IVec3::new(0, 1, 0),
            BlockFace::Bottom => IVec3::new(0, -1, 0),
            BlockFace::Front => IVec3::new(0, 0, 1),
            BlockFace::Back => IVec3::new(0, 0, -1),
            BlockFace::Left => IVec3::new(-1, 0, 0),
            BlockFace::Right => IVec3::new(1, 0, 0),
        }
    }

    /// Face of the voxel entered when a ray crosses a boundary on `axis`
    /// while moving in direction `step` (+1 or -1)
    pub fn entered_through(axis: usize, step: i32) -> Self {
        match (axis, step > 0) {
            (0, true) => BlockFace::Left,
            (0, false) => BlockFace::Right,
            (1, true) => BlockFace::Bottom,
            (1, false) => BlockFace::Top,
            (_, true) => BlockFace::Back,
            (_, false) => BlockFace::Front,
        }
    }
}

/// Result of a successful raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// First non-empty voxel along the ray
    pub target: VoxelPos,
    /// Voxel the ray occupied just before entering `target`
    pub placement: VoxelPos,
    /// Id stored at `target`
    pub block: BlockId,
    /// Distance along the ray to the boundary of `target`
    pub distance: f32,
    /// Face of `target` the ray entered through
    pub face: BlockFace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_order_matches_index() {
        for (i, face) in BlockFace::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_entered_face_points_back_at_ray() {
        // The entered face's normal always opposes the step direction
        for axis in 0..3 {
            for step in [-1, 1] {
                let face = BlockFace::entered_through(axis, step);
                assert_eq!(face.offset()[axis], -step);
            }
        }
    }

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);

        let still = Ray::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(still.direction, Vec3::ZERO);
    }
}
