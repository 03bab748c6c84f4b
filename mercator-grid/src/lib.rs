//! A library for Web Mercator tile mosaic calculations
//!
//! ## Coordinate conversions
//!
//! ```rust
//! use mercator_grid::{geo_to_pixel, geo_to_tile, GeoPoint};
//!
//! let chicago = GeoPoint::new(41.850033, -87.6500523, 3).unwrap();
//! let pixel = geo_to_pixel(&chicago);
//! assert_eq!((pixel.x().floor(), pixel.y().floor()), (525.0, 761.0));
//! let tile = geo_to_tile(&chicago).unwrap();
//! assert_eq!((tile.col, tile.row), (2, 2));
//! ```
//!
//! ## Region plans
//!
//! ```rust
//! use mercator_grid::{plan_region, GeoPoint};
//!
//! let ul = GeoPoint::new(35.874970, 23.417749, 9).unwrap();
//! let lr = GeoPoint::new(34.727331, 26.515893, 9).unwrap();
//! let plan = plan_region(ul, lr, 9, 512).unwrap();
//! assert_eq!((plan.mosaic_width(), plan.mosaic_height()), (1536, 1024));
//! for tile in plan.tiles() {
//!     let (x, y) = tile.grid_position().pixel_offset(plan.output_tile_size());
//!     println!("{} at ({}, {}): center {}", tile, x, y, tile.center());
//! }
//! ```

#[macro_use]
extern crate log;

mod coord;
mod error;
mod point;
mod region;
mod region_iterator;
mod tile;

#[cfg(test)]
mod region_test;

pub use coord::{
    geo_to_pixel, geo_to_tile, geo_to_world, pixel_to_geo, pixel_to_tile, pixel_to_world,
    world_to_geo, world_to_pixel, world_to_tile, GeoPoint, PixelPoint, WorldPoint,
    BASE_TILE_SIZE, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_ZOOM,
};
pub use error::{ErrorKind, GridError};
pub use point::Point;
pub use region::{plan_region, RegionPlan};
pub use region_iterator::RegionTiles;
pub use tile::{GridPosition, Tile};
