use glam::Vec2;

use crate::map::GridMap;
use crate::player::{Camera, Player};
use crate::ray::{normalize_angle, RayRecord, NO_HIT};
use crate::scan::{horizontal_intersection, vertical_intersection, AxisHit};

/// Casts a single ray from `origin` and returns the nearest wall it meets.
///
/// `angle` may be any finite value; the record carries it normalized.
pub fn cast_ray(map: &impl GridMap, origin: Vec2, angle: f32) -> RayRecord {
    let angle = normalize_angle(angle);

    let horizontal = horizontal_intersection(map, origin, angle);
    let vertical = vertical_intersection(map, origin, angle);

    let (hit, distance, was_hit_vertical) = nearest(origin, horizontal, vertical);

    RayRecord {
        distance,
        wall_hit: hit.map(|hit| hit.point).unwrap_or(Vec2::ZERO),
        wall_hit_content: hit.map(|hit| hit.content).unwrap_or(0),
        was_hit_vertical,
        ray_angle: angle,
    }
}

/// Picks the closer of the two scan results. Ties go to the vertical hit.
fn nearest(
    origin: Vec2,
    horizontal: Option<AxisHit>,
    vertical: Option<AxisHit>,
) -> (Option<AxisHit>, f32, bool) {
    let distance = |hit: Option<AxisHit>| hit.map_or(NO_HIT, |hit| origin.distance(hit.point));
    let horizontal_distance = distance(horizontal);
    let vertical_distance = distance(vertical);

    if vertical.is_some() && vertical_distance <= horizontal_distance {
        (vertical, vertical_distance, true)
    } else {
        (horizontal, horizontal_distance, false)
    }
}

/// One ray per screen column, rebuilt in full every frame.
///
/// Readers should only look at [`RayField::rays`] after a call to
/// [`RayField::cast_all_rays`] for the current frame.
#[derive(Clone, PartialEq, Debug)]
pub struct RayField {
    camera: Camera,
    rays: Vec<RayRecord>,
}

impl RayField {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            rays: vec![RayRecord::default(); camera.num_rays()],
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Records of the last build, left to right.
    pub fn rays(&self) -> &[RayRecord] {
        &self.rays
    }

    pub fn len(&self) -> usize {
        self.rays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// Casts the ray at `angle` into column `strip`.
    ///
    /// # Panics
    ///
    /// If `strip` is not a column of this field.
    pub fn cast_ray(&mut self, map: &impl GridMap, player: &Player, angle: f32, strip: usize) {
        self.rays[strip] = cast_ray(map, player.pos, angle);
    }

    /// Casts every column's ray for the player's current position and heading.
    pub fn cast_all_rays(&mut self, map: &impl GridMap, player: &Player) -> &[RayRecord] {
        for column in 0..self.rays.len() {
            let angle = player.direction + self.camera.column_angle(column);
            self.cast_ray(map, player, angle, column);
        }
        self.log_build();

        &self.rays
    }

    /// Same as [`RayField::cast_all_rays`], spreading columns over the rayon
    /// thread pool. Each column only writes its own slot.
    #[cfg(feature = "rayon")]
    pub fn par_cast_all_rays<M: GridMap + Sync>(&mut self, map: &M, player: &Player) -> &[RayRecord] {
        use rayon::prelude::*;

        let camera = self.camera;
        self.rays
            .par_iter_mut()
            .enumerate()
            .for_each(|(column, ray)| {
                *ray = cast_ray(map, player.pos, player.direction + camera.column_angle(column));
            });
        self.log_build();

        &self.rays
    }

    fn log_build(&self) {
        log::debug!(
            "cast {} rays, {} hit a wall",
            self.rays.len(),
            self.rays.iter().filter(|ray| ray.is_hit()).count()
        );
    }
}
