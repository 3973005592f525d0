//! Ray-casting core for a tile map rendered as a pseudo-3D view.
//!
//! A [`RayField`] holds one [`RayRecord`] per screen column. Each frame,
//! [`RayField::cast_all_rays`] casts a ray for every column from the player's
//! position and records the nearest wall it meets. Wall projection and the
//! [`minimap`] read the records until the next build.

pub mod caster;
pub mod map;
pub mod minimap;
pub mod player;
pub mod ray;
pub mod scan;

pub use caster::{cast_ray, RayField};
pub use map::{GridMap, Map};
pub use player::{Camera, Player};
pub use ray::{normalize_angle, Cardinal, RayRecord, NO_HIT};

/// Side length of one map cell in world units.
pub const TILE_SIZE: f32 = 64.;

/// One full turn in radians; ray angles are kept in `[0, TWO_PI)`.
pub const TWO_PI: f32 = std::f32::consts::TAU;

/// World to minimap scale.
pub const MINIMAP_SCALE_FACTOR: f32 = 0.25;

/// Screen columns, and so rays, when a map doesn't say otherwise.
pub const DEFAULT_NUM_RAYS: usize = 640;

/// Horizontal field of view when a map doesn't say otherwise.
pub const DEFAULT_FOV_DEGREES: f32 = 60.;

// helper trait to convert strings into std::error types
#[cfg(feature = "sdl")]
trait StringToAnyhow<T> {
    fn ah(self) -> anyhow::Result<T>;
}

#[cfg(feature = "sdl")]
impl<T> StringToAnyhow<T> for Result<T, String> {
    fn ah(self) -> anyhow::Result<T> {
        self.map_err(|err| anyhow::anyhow!("{err}"))
    }
}
