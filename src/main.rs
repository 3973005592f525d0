use anyhow::Context;
use std::path::PathBuf;
use yaw_caster::{Map, Player, RayField};

const DEFAULT_MAP: &str = "map/map.yaw";

// print every this many columns
const REPORT_STRIDE: usize = 32;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_custom_env("YAW_LOG");

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| DEFAULT_MAP.into());
    let map = Map::load(&path)?;

    log::info!("initializing player");
    let player = Player::new(map.spawn().context("no spawn in map")?, map.heading);

    let mut field = RayField::new(map.camera);
    log::info!(
        "casting {} rays over {:.1} degrees",
        field.len(),
        field.camera().fov().to_degrees()
    );
    let rays = field.cast_all_rays(&map, &player);

    println!("column   angle  distance  side   content");
    for (column, ray) in rays.iter().enumerate().step_by(REPORT_STRIDE) {
        match ray.face() {
            Some(face) => println!(
                "{column:>6} {:>7.2} {:>9.2}  {:<6} {}",
                ray.ray_angle.to_degrees(),
                ray.perpendicular_distance(player.direction),
                format!("{face:?}"),
                ray.wall_hit_content,
            ),
            None => println!(
                "{column:>6} {:>7.2} {:>9}  -      -",
                ray.ray_angle.to_degrees(),
                "none"
            ),
        }
    }

    let misses = rays.iter().filter(|ray| !ray.is_hit()).count();
    if misses > 0 {
        log::warn!("{misses} rays left the map without hitting a wall");
    }

    Ok(())
}
