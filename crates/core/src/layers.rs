//! Tile layer surfaces: the three index layers the furnisher writes and the
//! shadow layer the visibility engine drives. Reads are shared with the
//! rendering host; writes belong to this crate alone.

use crate::rng::RandomSource;
use crate::table::TileTable;
use crate::types::{Pos, TileIndex};

/// A 2-D grid of optional tile indices plus a collision mask recomputed on
/// demand. Out-of-bounds writes clip silently; out-of-bounds reads are empty
/// and colliding, so the map edge always blocks movement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileLayer {
    width: usize,
    height: usize,
    cells: Vec<Option<TileIndex>>,
    colliding: Vec<bool>,
}

impl TileLayer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            colliding: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill(&mut self, tile: TileIndex) {
        self.cells.fill(Some(tile));
    }

    pub fn put_tile(&mut self, tile: TileIndex, pos: Pos) {
        if let Some(index) = self.index(pos) {
            self.cells[index] = Some(tile);
        }
    }

    pub fn tile_at(&self, pos: Pos) -> Option<TileIndex> {
        self.index(pos).and_then(|index| self.cells[index])
    }

    /// Resolves the table once per cell of the rectangle, row-major, clipped
    /// to the layer bounds. Zero-sized rectangles write nothing.
    pub fn weighted_fill(
        &mut self,
        table: &TileTable,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        rng: &mut dyn RandomSource,
    ) {
        for cell_y in y..y + height {
            for cell_x in x..x + width {
                let tile = table.resolve(rng);
                self.put_tile(tile, Pos { y: cell_y, x: cell_x });
            }
        }
    }

    /// Recomputes the collision mask: a cell collides iff it holds a tile
    /// whose index is not in `walkable`. Empty cells never collide.
    pub fn set_collision_by_exclusion(&mut self, walkable: &[TileIndex]) {
        for (cell, collides) in self.cells.iter().zip(self.colliding.iter_mut()) {
            *collides = match cell {
                Some(tile) => !walkable.contains(tile),
                None => false,
            };
        }
    }

    pub fn collides_at(&self, pos: Pos) -> bool {
        match self.index(pos) {
            Some(index) => self.colliding[index],
            None => true,
        }
    }

    /// Cells holding `tile`, row-major. Test and host convenience.
    pub fn find_tiles(&self, tile: TileIndex) -> Vec<Pos> {
        let mut found = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                if self.tile_at(pos) == Some(tile) {
                    found.push(pos);
                }
            }
        }
        found
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

/// Per-room reveal level, painted into the shadow layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    /// Never visited; rendered fully dark.
    Opaque,
    /// Previously visited; rendered at half darkness.
    Dim,
    /// The active room; no overlay at all.
    Clear,
}

/// The visibility overlay grid. Starts fully opaque; only the visibility
/// engine writes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowLayer {
    width: usize,
    height: usize,
    shades: Vec<Shade>,
}

impl ShadowLayer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, shades: vec![Shade::Opaque; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out of bounds reads as opaque.
    pub fn shade_at(&self, pos: Pos) -> Shade {
        if pos.x < 0 || pos.y < 0 {
            return Shade::Opaque;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return Shade::Opaque;
        }
        self.shades[y * self.width + x]
    }

    /// Sets every cell of the inclusive rectangle, clipped to bounds.
    pub fn set_rect(&mut self, left: i32, top: i32, right: i32, bottom: i32, shade: Shade) {
        let from_x = left.max(0) as usize;
        let from_y = top.max(0) as usize;
        if right < 0 || bottom < 0 {
            return;
        }
        let to_x = (right as usize).min(self.width.saturating_sub(1));
        let to_y = (bottom as usize).min(self.height.saturating_sub(1));
        for y in from_y..=to_y {
            for x in from_x..=to_x {
                self.shades[y * self.width + x] = shade;
            }
        }
    }
}
