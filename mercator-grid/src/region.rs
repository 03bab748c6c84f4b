//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Region planning

use crate::coord::{check_zoom, geo_to_tile, GeoPoint, BASE_TILE_SIZE};
use crate::error::GridError;
use crate::region_iterator::RegionTiles;
use crate::tile::Tile;
use std::cmp;
use std::fmt;

/// Tile mosaic covering the rectangle between two geographic corners.
///
/// The corners may be given in any order as long as they are opposite
/// corners of the region.
#[derive(PartialEq, Clone, Debug)]
pub struct RegionPlan {
    upper_left: GeoPoint,
    lower_right: GeoPoint,
    zoom: u8,
    /// Width and height of the requested tile images, in pixels.
    output_tile_size: u32,
    upper_left_tile: Tile,
    lower_right_tile: Tile,
    tile_count_x: u32,
    tile_count_y: u32,
}

fn check_tile_size(output_tile_size: u32) -> Result<u32, GridError> {
    if output_tile_size == 0 || output_tile_size % BASE_TILE_SIZE != 0 {
        Err(GridError::InvalidTileSize(output_tile_size))
    } else {
        Ok(output_tile_size)
    }
}

/// Number of output tiles needed along one axis.
///
/// Deliberately covers up to one extra tile, so the requested area is
/// never clipped at the mosaic border.
fn covering_count(from: u32, to: u32, output_tile_size: u32) -> u32 {
    let span = (i64::from(to) - i64::from(from)).abs() + 1;
    let scale = f64::from(BASE_TILE_SIZE) / f64::from(output_tile_size);
    (span as f64 * scale).floor() as u32 + 1
}

impl RegionPlan {
    pub fn new(
        upper_left: GeoPoint,
        lower_right: GeoPoint,
        zoom: u8,
        output_tile_size: u32,
    ) -> Result<RegionPlan, GridError> {
        let zoom = check_zoom(zoom)?;
        let output_tile_size = check_tile_size(output_tile_size)?;
        let upper_left = upper_left.at_zoom(zoom)?;
        let lower_right = lower_right.at_zoom(zoom)?;

        let upper_left_tile = geo_to_tile(&upper_left)?;
        let lower_right_tile = geo_to_tile(&lower_right)?;
        debug!(
            "corner tiles at zoom {}: ({}, {}) - ({}, {})",
            zoom,
            upper_left_tile.col,
            upper_left_tile.row,
            lower_right_tile.col,
            lower_right_tile.row
        );

        let tile_count_x = covering_count(
            upper_left_tile.col,
            lower_right_tile.col,
            output_tile_size,
        );
        let tile_count_y = covering_count(
            upper_left_tile.row,
            lower_right_tile.row,
            output_tile_size,
        );
        debug!(
            "{}x{} tiles of {} pixels",
            tile_count_x, tile_count_y, output_tile_size
        );

        Ok(RegionPlan {
            upper_left,
            lower_right,
            zoom,
            output_tile_size,
            upper_left_tile,
            lower_right_tile,
            tile_count_x,
            tile_count_y,
        })
    }
    pub fn upper_left(&self) -> &GeoPoint {
        &self.upper_left
    }
    pub fn lower_right(&self) -> &GeoPoint {
        &self.lower_right
    }
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
    pub fn output_tile_size(&self) -> u32 {
        self.output_tile_size
    }
    pub fn upper_left_tile(&self) -> &Tile {
        &self.upper_left_tile
    }
    pub fn lower_right_tile(&self) -> &Tile {
        &self.lower_right_tile
    }
    /// Base tiles covered by one output tile along each axis
    pub fn scale_factor(&self) -> u32 {
        self.output_tile_size / BASE_TILE_SIZE
    }
    /// Absolute (col, row) of the first mosaic tile
    pub fn origin(&self) -> (u32, u32) {
        (
            cmp::min(self.upper_left_tile.col, self.lower_right_tile.col),
            cmp::min(self.upper_left_tile.row, self.lower_right_tile.row),
        )
    }
    pub fn tile_count_x(&self) -> u32 {
        self.tile_count_x
    }
    pub fn tile_count_y(&self) -> u32 {
        self.tile_count_y
    }
    pub fn tile_count(&self) -> u64 {
        u64::from(self.tile_count_x) * u64::from(self.tile_count_y)
    }
    /// Width of the mosaic image in pixels
    pub fn mosaic_width(&self) -> u32 {
        self.tile_count_x * self.output_tile_size
    }
    /// Height of the mosaic image in pixels
    pub fn mosaic_height(&self) -> u32 {
        self.tile_count_y * self.output_tile_size
    }
    /// Tiles to fetch in row-major order. Every call starts a new enumeration.
    pub fn tiles(&self) -> RegionTiles {
        let (col, row) = self.origin();
        RegionTiles::new(
            col,
            row,
            self.scale_factor(),
            self.zoom,
            self.tile_count_x,
            self.tile_count_y,
        )
    }
}

impl<'a> IntoIterator for &'a RegionPlan {
    type Item = Tile;
    type IntoIter = RegionTiles;

    fn into_iter(self) -> RegionTiles {
        self.tiles()
    }
}

impl fmt::Display for RegionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region UL({:.6}, {:.6}), LR({:.6}, {:.6}), zoom: {}\nWidth: {}, Height: {}, Tiles: {}",
            self.upper_left.latitude(),
            self.upper_left.longitude(),
            self.lower_right.latitude(),
            self.lower_right.longitude(),
            self.zoom,
            self.mosaic_width(),
            self.mosaic_height(),
            self.tile_count()
        )
    }
}

/// Plan the tile mosaic for the region between two corners.
///
/// Both corners are tagged with `zoom` before projection.
pub fn plan_region(
    upper_left: GeoPoint,
    lower_right: GeoPoint,
    zoom: u8,
    output_tile_size: u32,
) -> Result<RegionPlan, GridError> {
    RegionPlan::new(upper_left, lower_right, zoom, output_tile_size)
}
