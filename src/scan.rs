//! Grid traversal along one family of gridlines.
//!
//! Each scanner starts at the first gridline ahead of the origin and steps one
//! tile at a time until the sampled cell holds a wall or the probe leaves the
//! map. Both are pure: the result is returned rather than kept between calls.

use glam::Vec2;

use crate::map::GridMap;
use crate::ray::{Facing, Horizontal, Vertical};
use crate::TILE_SIZE;

/// Where a scan touched a wall.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AxisHit {
    /// point on the gridline, not the sample point inside the cell
    pub point: Vec2,
    pub content: i32,
}

/// Walks the horizontal gridlines (constant y) crossed by the ray.
///
/// `angle` must already be normalized.
pub fn horizontal_intersection(map: &impl GridMap, origin: Vec2, angle: f32) -> Option<AxisHit> {
    let facing = Facing::of(angle);
    let tan = angle.tan();

    let mut y = (origin.y / TILE_SIZE).floor() * TILE_SIZE;
    if facing.vertical == Vertical::Down {
        y += TILE_SIZE;
    }
    let x = origin.x + (y - origin.y) / tan;

    let step = Vec2::new(
        (TILE_SIZE / tan).abs() * facing.horizontal.sign(),
        TILE_SIZE * facing.vertical.sign(),
    );
    // sample the cell above the line when moving up
    let sample = match facing.vertical {
        Vertical::Up => Vec2::new(0., -1.),
        Vertical::Down => Vec2::ZERO,
    };

    scan(map, Vec2::new(x, y), step, sample)
}

/// Walks the vertical gridlines (constant x) crossed by the ray.
///
/// `angle` must already be normalized.
pub fn vertical_intersection(map: &impl GridMap, origin: Vec2, angle: f32) -> Option<AxisHit> {
    let facing = Facing::of(angle);
    let tan = angle.tan();

    let mut x = (origin.x / TILE_SIZE).floor() * TILE_SIZE;
    if facing.horizontal == Horizontal::Right {
        x += TILE_SIZE;
    }
    let y = origin.y + (x - origin.x) * tan;

    let step = Vec2::new(
        TILE_SIZE * facing.horizontal.sign(),
        (TILE_SIZE * tan).abs() * facing.vertical.sign(),
    );
    // sample the cell left of the line when moving left
    let sample = match facing.horizontal {
        Horizontal::Left => Vec2::new(-1., 0.),
        Horizontal::Right => Vec2::ZERO,
    };

    scan(map, Vec2::new(x, y), step, sample)
}

fn scan(map: &impl GridMap, mut touch: Vec2, step: Vec2, sample: Vec2) -> Option<AxisHit> {
    while map.is_inside_map(touch) {
        let check = touch + sample;
        if map.has_wall_at(check) {
            let cell = (check / TILE_SIZE).floor();
            return Some(AxisHit {
                point: touch,
                content: map.content_at(cell.y as i32, cell.x as i32),
            });
        }
        touch += step;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Map;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    // 5x5 room with a 3x3 interior, spawn in the middle at (160, 160)
    fn room() -> Map {
        Map::parse(
            "!!!!MAIN
#1
%2

##%##
#...#
%.*.%
#...#
##%##
",
        )
        .unwrap()
    }

    fn center() -> Vec2 {
        Vec2::new(160., 160.)
    }

    #[test]
    fn horizontal_down() {
        let hit = horizontal_intersection(&room(), center(), FRAC_PI_2).unwrap();
        assert_eq!(hit.point.y, 256.);
        assert!((hit.point.x - 160.).abs() < 1e-3);
        assert_eq!(hit.content, 2);
    }

    #[test]
    fn horizontal_up() {
        let hit = horizontal_intersection(&room(), center(), 3. * FRAC_PI_2).unwrap();
        assert_eq!(hit.point.y, 64.);
        assert!((hit.point.x - 160.).abs() < 1e-3);
        assert_eq!(hit.content, 2);
    }

    #[test]
    fn vertical_right() {
        let hit = vertical_intersection(&room(), center(), 0.).unwrap();
        assert_eq!(hit.point, Vec2::new(256., 160.));
        assert_eq!(hit.content, 2);
    }

    #[test]
    fn vertical_left() {
        let hit = vertical_intersection(&room(), center(), PI).unwrap();
        assert_eq!(hit.point.x, 64.);
        assert!((hit.point.y - 160.).abs() < 1e-3);
        assert_eq!(hit.content, 2);
    }

    #[test]
    fn parallel_rays_miss() {
        // a ray along x never crosses a horizontal gridline, and vice versa
        assert_eq!(horizontal_intersection(&room(), center(), 0.), None);
        assert_eq!(horizontal_intersection(&room(), center(), PI), None);
        assert_eq!(vertical_intersection(&room(), center(), FRAC_PI_2), None);
        assert_eq!(vertical_intersection(&room(), center(), 3. * FRAC_PI_2), None);
    }

    #[test]
    fn diagonal_quadrants() {
        let map = room();
        for (angle, corner) in [
            (FRAC_PI_4, Vec2::new(256., 256.)),
            (3. * FRAC_PI_4, Vec2::new(64., 256.)),
            (5. * FRAC_PI_4, Vec2::new(64., 64.)),
            (7. * FRAC_PI_4, Vec2::new(256., 64.)),
        ] {
            let h = horizontal_intersection(&map, center(), angle).unwrap();
            let v = vertical_intersection(&map, center(), angle).unwrap();
            // every hit lands on its own family of gridlines
            assert_eq!(h.point.y % TILE_SIZE, 0., "{angle}");
            assert_eq!(v.point.x % TILE_SIZE, 0., "{angle}");
            assert!(h.point.distance(corner) < 1.5 * TILE_SIZE, "{angle}: {h:?}");
            assert!(v.point.distance(corner) < 1.5 * TILE_SIZE, "{angle}: {v:?}");
        }
    }

    #[test]
    fn starting_on_a_gridline() {
        let map = room();
        // on the line between interior columns 1 and 2
        let origin = Vec2::new(128., 160.);
        let left = vertical_intersection(&map, origin, PI).unwrap();
        assert_eq!(left.point.x, 64.);
        let right = vertical_intersection(&map, origin, 0.).unwrap();
        assert_eq!(right.point, Vec2::new(256., 160.));

        // on the line between interior rows 1 and 2
        let origin = Vec2::new(160., 128.);
        let up = horizontal_intersection(&map, origin, 3. * FRAC_PI_2).unwrap();
        assert_eq!(up.point.y, 64.);
        let down = horizontal_intersection(&map, origin, FRAC_PI_2).unwrap();
        assert_eq!(down.point.y, 256.);
    }

    #[test]
    fn open_edge_misses() {
        let map = Map::parse("!!!!MAIN\n#1\n\n#....\n.....\n..*..\n.....\n.....\n").unwrap();
        assert_eq!(vertical_intersection(&map, center(), 0.), None);
        assert_eq!(horizontal_intersection(&map, center(), FRAC_PI_2), None);
        assert_eq!(horizontal_intersection(&map, center(), 0.3), None);
    }
}
