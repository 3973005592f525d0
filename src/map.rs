use anyhow::Context;
use glam::Vec2;
use std::collections::HashMap;
use std::fs::read_to_string;
use std::ops::ControlFlow;
use std::path::Path;

use crate::player::Camera;
use crate::TILE_SIZE;

/// Queries the ray caster needs from a tile map.
///
/// The scanners step outward until `is_inside_map` returns false, so an
/// implementation must report every point far enough from the origin as
/// outside. A map that is inside everywhere makes a ray that never meets a
/// wall scan forever.
pub trait GridMap {
    /// Whether `point` lies within the overall map bounds.
    fn is_inside_map(&self, point: Vec2) -> bool;

    /// Whether the cell containing `point` holds a wall.
    fn has_wall_at(&self, point: Vec2) -> bool;

    /// Content code of the cell at `row`, `col`. Zero means empty.
    fn content_at(&self, row: i32, col: i32) -> i32;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tile {
    Empty,
    Spawn,
    Custom(char),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub main_tiles: Vec<Tile>,
    /// content code of every custom tile, keyed by its map character
    pub custom_tiles: HashMap<char, i32>,
    pub camera: Camera,
    /// initial player heading in radians
    pub heading: f32,
}

impl Map {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::info!("loading map at {}", path.display());
        let file = read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&file).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut lines = source.lines();
        let mut this = Self::default();

        while let Some(line) = lines.by_ref().next() {
            match line {
                "" => continue,
                "!!!!META" => this.parse_meta(&mut lines)?,
                "!!!!MAIN" => this.parse_main(&mut lines)?,
                other => anyhow::bail!("unrecognized directive: {other}"),
            }
        }

        if this.main_tiles.is_empty() {
            anyhow::bail!("map has no tiles");
        }
        log::info!(
            "map is {}x{} tiles with {} wall kinds",
            this.width,
            this.height,
            this.custom_tiles.len()
        );

        Ok(this)
    }

    fn parse_meta<'lines>(
        &mut self,
        mut lines: impl Iterator<Item = &'lines str>,
    ) -> anyhow::Result<()> {
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            let mut chunks = line.split(',');
            let directive = chunks.by_ref().next().unwrap_or_default();
            let params = chunks
                .map(|param| param.split_once('='))
                .collect::<Option<HashMap<_, _>>>()
                .context("incorrectly formatted meta")?;
            match directive {
                "camera" => {
                    let mut num_rays = self.camera.num_rays();
                    let mut fov = self.camera.fov();
                    if let Some(rays) = params.get("rays") {
                        num_rays = rays.parse().context("bad ray count")?;
                    }
                    if let Some(degrees) = params.get("fov") {
                        let degrees = degrees.parse::<f32>().context("bad fov")?;
                        if !(degrees > 0. && degrees < 180.) {
                            anyhow::bail!("fov must be between 0 and 180 degrees, got {degrees}");
                        }
                        fov = degrees.to_radians();
                    }
                    self.camera = Camera::new(num_rays, fov)?;
                }
                "heading" => {
                    self.heading = params
                        .get("deg")
                        .context("heading without deg")?
                        .parse::<f32>()
                        .context("bad heading")?
                        .to_radians();
                }
                other => anyhow::bail!("unrecognized meta directive: {other}"),
            }
        }

        Ok(())
    }

    fn parse_main<'lines>(
        &mut self,
        mut lines: impl Iterator<Item = &'lines str>,
    ) -> anyhow::Result<()> {
        let mut custom_tiles = HashMap::new();

        // tile legend, one `<char><content code>` per line
        let legend = lines.by_ref().try_for_each(|s| {
            if s.is_empty() {
                return ControlFlow::Break(Ok(()));
            }

            let mut chars = s.chars();
            let Some(id) = chars.next() else {
                return ControlFlow::Break(Ok(()));
            };
            let content = match chars.as_str().trim().parse::<i32>() {
                Ok(0) => return ControlFlow::Break(Err(anyhow::anyhow!("tile {id} has content 0"))),
                Ok(content) => content,
                Err(err) => {
                    return ControlFlow::Break(Err(anyhow::anyhow!("bad content for tile {id}: {err}")))
                }
            };
            custom_tiles.insert(id, content);

            ControlFlow::Continue(())
        });
        if let ControlFlow::Break(result) = legend {
            result?;
        }

        let mut width = None;
        let mut height = 0;
        let mut tiles = vec![];
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            let row_width = line.chars().count();
            match width {
                None => width = Some(row_width),
                Some(width) if width != row_width => {
                    anyhow::bail!("row {height} is {row_width} tiles wide, expected {width}")
                }
                Some(_) => {}
            }

            height += 1;
            for tile in line.chars() {
                tiles.push(match tile {
                    ' ' | '.' => Tile::Empty,
                    '*' => Tile::Spawn,
                    tile if custom_tiles.contains_key(&tile) => Tile::Custom(tile),
                    other => anyhow::bail!("invalid tile in map: {other}"),
                });
            }
        }

        self.width = width.unwrap_or(0);
        self.height = height;
        self.main_tiles = tiles;
        self.custom_tiles = custom_tiles;

        Ok(())
    }

    /// Top left corner of the tile at `idx`.
    pub fn idx_to_vec(&self, idx: usize) -> Vec2 {
        let x = idx % self.width;
        let y = (idx - x) / self.width;
        Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE)
    }

    /// Center of the spawn tile.
    pub fn spawn(&self) -> Option<Vec2> {
        let idx = self.main_tiles.iter().position(|x| x == &Tile::Spawn)?;
        Some(self.idx_to_vec(idx) + Vec2::splat(TILE_SIZE / 2.))
    }

    fn tile(&self, row: i32, col: i32) -> Option<&Tile> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        self.main_tiles.get(row as usize * self.width + col as usize)
    }
}

impl GridMap for Map {
    fn is_inside_map(&self, point: Vec2) -> bool {
        point.x >= 0.
            && point.y >= 0.
            && point.x < self.width as f32 * TILE_SIZE
            && point.y < self.height as f32 * TILE_SIZE
    }

    fn has_wall_at(&self, point: Vec2) -> bool {
        if !self.is_inside_map(point) {
            return false;
        }
        let cell = (point / TILE_SIZE).floor();
        self.content_at(cell.y as i32, cell.x as i32) != 0
    }

    fn content_at(&self, row: i32, col: i32) -> i32 {
        match self.tile(row, col) {
            Some(Tile::Custom(id)) => self.custom_tiles.get(id).copied().unwrap_or(0),
            _ => 0,
        }
    }
}
