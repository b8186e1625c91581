//! Engine-wide constants
//!
//! Grouped by the subsystem that owns them. Everything tunable at runtime
//! lives in `config` and only takes its defaults from here.

/// World and mesh layout constants
pub mod core {
    /// Default world extent along X (voxels)
    pub const WORLD_SIZE_X: u32 = 64;
    /// Default world extent along Y (voxels)
    pub const WORLD_SIZE_Y: u32 = 16;
    /// Default world extent along Z (voxels)
    pub const WORLD_SIZE_Z: u32 = 64;

    /// Scalars per vertex: position(3) + normal(3) + uv(2) + block id(1) + texture index(1)
    pub const VERTEX_ATTRIBUTES: usize = 10;
    /// Two triangles per emitted face
    pub const VERTICES_PER_FACE: usize = 6;
    /// Faces per cube
    pub const FACES_PER_BLOCK: usize = 6;
    /// Half the edge of a voxel in world units
    pub const HALF_BLOCK: f32 = 0.5;
}

/// Player physics defaults
pub mod physics {
    /// Gravity acceleration (units/s^2)
    pub const GRAVITY: f32 = -25.0;
    /// Vertical velocity applied by a jump
    pub const JUMP_VELOCITY: f32 = 10.0;
    /// Horizontal velocity multiplier per grounded tick
    pub const GROUND_DAMPING: f32 = 0.8;
    /// Horizontal speed below which a grounded entity is stopped
    pub const STOP_SPEED_THRESHOLD: f32 = 0.05;
    /// Tolerance for "resting on top" after a vertical correction
    pub const GROUND_TOLERANCE: f32 = 1.0e-3;

    /// Walking speed (units/s)
    pub const WALK_SPEED: f32 = 3.5;
    /// Sprinting speed (units/s)
    pub const SPRINT_SPEED: f32 = 5.5;
    /// Sneaking speed (units/s)
    pub const SNEAK_SPEED: f32 = 2.5;

    /// Standing hitbox (full size, width/height/depth)
    pub const STANDING_SIZE: [f32; 3] = [0.6, 1.8, 0.6];
    /// Sneaking hitbox (full size, width/height/depth)
    pub const SNEAKING_SIZE: [f32; 3] = [0.6, 1.5, 0.6];

    /// Player spawn point
    pub const SPAWN_POSITION: [f32; 3] = [8.0, 15.0, 8.0];
    /// Camera anchor relative to the player's center
    pub const EYE_OFFSET: [f32; 3] = [-0.45, 0.36, -0.45];
}

/// Ray interaction constants
pub mod interaction {
    /// Maximum distance at which blocks can be targeted
    pub const MAX_REACH: f32 = 8.0;
    /// Crossings closer than this are treated as simultaneous (X, then Y, then Z wins)
    pub const DDA_TIE_EPSILON: f32 = 1.0e-4;
    /// Click ray origin shift along the look direction (negative pulls it back)
    pub const RAY_FORWARD_OFFSET: f32 = -0.25;
    /// Click ray origin shift in world space, applied after the forward shift
    pub const RAY_ORIGIN_SHIFT: [f32; 3] = [0.35, 0.25, 0.35];
}

/// Day/night light orbit
pub mod lighting {
    /// Radius of the sun's orbit around the world center
    pub const LIGHT_ORBIT_RADIUS: f32 = 30.0;
    /// Seconds per full orbit
    pub const LIGHT_CYCLE_DURATION: f32 = 300.0;
    /// Sun color handed to the renderer
    pub const SUN_COLOR: [f32; 3] = [1.0, 0.78, 0.0];
}
