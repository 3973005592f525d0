use glam::Vec2;
use std::f32::consts::PI;

use crate::{DEFAULT_FOV_DEGREES, DEFAULT_NUM_RAYS};

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Player {
    pub pos: Vec2,
    /// heading in radians, 0 points along +x and angles grow towards +y
    pub direction: f32,
}

impl Player {
    pub fn new(pos: Vec2, direction: f32) -> Self {
        Self { pos, direction }
    }
}

/// Planar projection camera: one ray per screen column.
///
/// Always has at least two columns and a field of view strictly between 0
/// and π, so every column gets its own finite angle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera {
    num_rays: usize,
    fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            num_rays: DEFAULT_NUM_RAYS,
            fov: DEFAULT_FOV_DEGREES.to_radians(),
        }
    }
}

impl Camera {
    /// `fov` is the horizontal field of view in radians.
    pub fn new(num_rays: usize, fov: f32) -> anyhow::Result<Self> {
        if num_rays < 2 {
            anyhow::bail!("camera needs at least two rays, got {num_rays}");
        }
        if !(fov > 0. && fov < PI) {
            anyhow::bail!("field of view must be between 0 and 180 degrees, got {fov} radians");
        }

        Ok(Self { num_rays, fov })
    }

    /// Number of screen columns, and so of rays in a field.
    pub fn num_rays(&self) -> usize {
        self.num_rays
    }

    /// Horizontal field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Distance from the eye to the projection plane, in screen columns.
    pub fn proj_plane(&self) -> f32 {
        (self.num_rays / 2) as f32 / (self.fov / 2.).tan()
    }

    /// Angle between the heading and the ray through `column`.
    ///
    /// Columns are spaced evenly on the projection plane rather than in
    /// angle, so the offset is `atan` of the column's distance from center.
    pub fn column_angle(&self, column: usize) -> f32 {
        let displacement = column as isize - (self.num_rays / 2) as isize;
        (displacement as f32 / self.proj_plane()).atan()
    }
}
