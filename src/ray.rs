use glam::Vec2;
use std::f32::consts::PI;

use crate::{TILE_SIZE, TWO_PI};

/// Distance recorded for a ray that left the map without hitting a wall.
pub const NO_HIT: f32 = f32::INFINITY;

/// Side of a map cell a ray struck.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

/// Which way a ray points along y. Screen coordinates, so down is +y.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Vertical {
    Up,
    Down,
}

/// Which way a ray points along x.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Horizontal {
    Left,
    Right,
}

impl Vertical {
    pub fn sign(self) -> f32 {
        match self {
            Vertical::Up => -1.,
            Vertical::Down => 1.,
        }
    }
}

impl Horizontal {
    pub fn sign(self) -> f32 {
        match self {
            Horizontal::Left => -1.,
            Horizontal::Right => 1.,
        }
    }
}

/// Quadrant a normalized ray angle points into.
///
/// Rays exactly along an axis are classified as up (angles 0 and π) or left
/// (angle π/2 and 3π/2).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Facing {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Facing {
    pub fn of(angle: f32) -> Self {
        let vertical = if angle > 0. && angle < PI {
            Vertical::Down
        } else {
            Vertical::Up
        };
        let horizontal = if angle < 0.5 * PI || angle > 1.5 * PI {
            Horizontal::Right
        } else {
            Horizontal::Left
        };

        Self {
            vertical,
            horizontal,
        }
    }
}

/// Wraps any finite angle into `[0, 2π)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let mut angle = angle % TWO_PI;
    if angle < 0. {
        angle += TWO_PI;
    }
    // a tiny negative remainder rounds up to 2π when corrected
    if angle >= TWO_PI {
        angle = 0.;
    }
    angle
}

/// Result of casting one ray, one per screen column.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayRecord {
    /// distance from the player to the hit, [`NO_HIT`] when nothing was hit
    pub distance: f32,
    pub wall_hit: Vec2,
    pub wall_hit_content: i32,
    pub was_hit_vertical: bool,
    /// normalized angle of the ray
    pub ray_angle: f32,
}

impl Default for RayRecord {
    fn default() -> Self {
        Self {
            distance: NO_HIT,
            wall_hit: Vec2::ZERO,
            wall_hit_content: 0,
            was_hit_vertical: false,
            ray_angle: 0.,
        }
    }
}

impl RayRecord {
    /// Whether the hit fields are meaningful.
    pub fn is_hit(&self) -> bool {
        self.distance != NO_HIT
    }

    /// Side of the struck cell facing the player.
    pub fn face(&self) -> Option<Cardinal> {
        if !self.is_hit() {
            return None;
        }

        let facing = Facing::of(self.ray_angle);
        Some(match (self.was_hit_vertical, facing) {
            (true, Facing { horizontal: Horizontal::Right, .. }) => Cardinal::West,
            (true, Facing { horizontal: Horizontal::Left, .. }) => Cardinal::East,
            (false, Facing { vertical: Vertical::Down, .. }) => Cardinal::North,
            (false, Facing { vertical: Vertical::Up, .. }) => Cardinal::South,
        })
    }

    /// Where along the struck face the ray landed, in `[0, TILE_SIZE)`,
    /// measured left to right as seen from the player.
    pub fn hit_offset(&self) -> Option<f32> {
        let offset = match self.face()? {
            Cardinal::North => TILE_SIZE - self.wall_hit.x.rem_euclid(TILE_SIZE),
            Cardinal::East => TILE_SIZE - self.wall_hit.y.rem_euclid(TILE_SIZE),
            Cardinal::South => self.wall_hit.x.rem_euclid(TILE_SIZE),
            Cardinal::West => self.wall_hit.y.rem_euclid(TILE_SIZE),
        };
        Some(if offset >= TILE_SIZE { 0. } else { offset })
    }

    /// Distance projected onto the view direction, which keeps walls
    /// straight when projected.
    pub fn perpendicular_distance(&self, heading: f32) -> f32 {
        self.distance * (self.ray_angle - heading).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn normalize_range() {
        for angle in [
            0., 1., -1., TWO_PI, -TWO_PI, 7. * PI, -7. * PI, 1e4, -1e4, -1e-9, 1e-9,
        ] {
            let normalized = normalize_angle(angle);
            assert!(
                (0. ..TWO_PI).contains(&normalized),
                "{angle} normalized to {normalized}"
            );
        }
    }

    #[test]
    fn normalize_periodic() {
        for angle in [0.1, 1., 2.5, 4., 6., -0.3, -3.] {
            let a = normalize_angle(angle);
            let b = normalize_angle(angle + TWO_PI);
            assert!((a - b).abs() < 1e-5, "{angle}: {a} vs {b}");
        }
        assert_eq!(normalize_angle(-FRAC_PI_2), 3. * FRAC_PI_2);
    }

    #[test]
    fn facing_quadrants() {
        let f = Facing::of(FRAC_PI_4);
        assert_eq!((f.vertical, f.horizontal), (Vertical::Down, Horizontal::Right));
        let f = Facing::of(3. * FRAC_PI_4);
        assert_eq!((f.vertical, f.horizontal), (Vertical::Down, Horizontal::Left));
        let f = Facing::of(5. * FRAC_PI_4);
        assert_eq!((f.vertical, f.horizontal), (Vertical::Up, Horizontal::Left));
        let f = Facing::of(7. * FRAC_PI_4);
        assert_eq!((f.vertical, f.horizontal), (Vertical::Up, Horizontal::Right));
        // along the axes
        assert_eq!(Facing::of(0.).vertical, Vertical::Up);
        assert_eq!(Facing::of(FRAC_PI_2).horizontal, Horizontal::Left);
    }

    #[test]
    fn faces_and_offsets() {
        let ray = RayRecord {
            distance: 10.,
            wall_hit: Vec2::new(128., 80.),
            wall_hit_content: 1,
            was_hit_vertical: true,
            ray_angle: 0.1,
        };
        assert_eq!(ray.face(), Some(Cardinal::West));
        assert_eq!(ray.hit_offset(), Some(16.));

        let ray = RayRecord {
            wall_hit: Vec2::new(80., 64.),
            was_hit_vertical: false,
            ray_angle: 4.,
            ..ray
        };
        assert_eq!(ray.face(), Some(Cardinal::South));
        assert_eq!(ray.hit_offset(), Some(16.));

        // looking left onto the right side of a cell, offsets run bottom to top
        let ray = RayRecord {
            wall_hit: Vec2::new(128., 80.),
            was_hit_vertical: true,
            ray_angle: 3.,
            ..ray
        };
        assert_eq!(ray.face(), Some(Cardinal::East));
        assert_eq!(ray.hit_offset(), Some(48.));
        let ray = RayRecord {
            wall_hit: Vec2::new(128., 64.),
            ..ray
        };
        assert_eq!(ray.hit_offset(), Some(0.));

        assert_eq!(RayRecord::default().face(), None);
        assert_eq!(RayRecord::default().hit_offset(), None);
    }

    #[test]
    fn perpendicular() {
        let ray = RayRecord {
            distance: 2.,
            ray_angle: 1.,
            ..Default::default()
        };
        assert_eq!(ray.perpendicular_distance(1.), 2.);
        assert!((ray.perpendicular_distance(1. + FRAC_PI_2 / 1.5) - 1.).abs() < 1e-5);
    }
}
