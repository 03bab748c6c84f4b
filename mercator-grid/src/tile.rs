//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid cells

use crate::coord::{pixel_to_geo, GeoPoint, PixelPoint, BASE_TILE_SIZE};
use std::fmt;

/// Position of a tile within a mosaic (0-based, row-major)
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug, Default)]
pub struct GridPosition {
    pub row: u32,
    pub col: u32,
}

impl GridPosition {
    pub fn new(row: u32, col: u32) -> GridPosition {
        GridPosition { row, col }
    }
    /// Upper left pixel of this tile in the mosaic image
    pub fn pixel_offset(&self, tile_size: u32) -> (u32, u32) {
        (self.col * tile_size, self.row * tile_size)
    }
}

/// Cell of the 256 pixel base grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Tile {
    /// Absolute column index at `zoom`
    pub col: u32,
    /// Absolute row index at `zoom`, 0 at north
    pub row: u32,
    pub zoom: u8,
    pub grid_position: GridPosition,
}

impl Tile {
    pub fn new(col: u32, row: u32, zoom: u8) -> Tile {
        Tile {
            col,
            row,
            zoom,
            grid_position: GridPosition::default(),
        }
    }
    pub fn with_grid_position(self, grid_position: GridPosition) -> Tile {
        Tile {
            grid_position,
            ..self
        }
    }
    pub fn grid_position(&self) -> GridPosition {
        self.grid_position
    }
    /// Pixel space center of the tile
    pub fn center_pixel(&self) -> PixelPoint {
        let base = f64::from(BASE_TILE_SIZE);
        PixelPoint::new(
            (f64::from(self.col) + 0.5) * base,
            (f64::from(self.row) + 0.5) * base,
            self.zoom,
        )
    }
    /// Geographic center of the tile.
    ///
    /// Static map services address images by center coordinate, not by tile index.
    pub fn center(&self) -> GeoPoint {
        pixel_to_geo(&self.center_pixel())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile (x: {}, y: {}), zoom: {}, position: ({}, {})",
            self.col, self.row, self.zoom, self.grid_position.row, self.grid_position.col
        )
    }
}
