//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate spaces of the spherical Web Mercator projection
//!
//! Forward chain: geographic → world → pixel → tile.
//! Reverse chain: pixel → world → geographic.

use crate::error::GridError;
use crate::point::Point;
use crate::tile::Tile;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Tile size the projection formulas are based on, independent of the
/// size of the tiles requested from an imagery service.
pub const BASE_TILE_SIZE: u32 = 256;

pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 20;

pub const MAX_LAT: f64 = 90.0;
pub const MAX_LON: f64 = 180.0;

const HALF_BASE: f64 = BASE_TILE_SIZE as f64 / 2.0;

pub(crate) fn check_zoom(zoom: u8) -> Result<u8, GridError> {
    if zoom > MAX_ZOOM {
        Err(GridError::InvalidZoom(zoom))
    } else {
        Ok(zoom)
    }
}

fn check_same_zoom(left: u8, right: u8) -> Result<(), GridError> {
    if left != right {
        Err(GridError::ZoomMismatch { left, right })
    } else {
        Ok(())
    }
}

/// Number of base tiles along one axis at `zoom`, as scale factor
fn zoom_scale(zoom: u8) -> f64 {
    f64::from(zoom).exp2()
}

/// Geographic coordinate in degrees, tagged with a zoom level.
///
/// Latitude is not clamped to the Mercator-safe range of ±85.05°.
/// Points beyond that latitude project outside of the tile grid.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    zoom: u8,
}

impl GeoPoint {
    /// Validated point from user input
    pub fn new(latitude: f64, longitude: f64, zoom: u8) -> Result<GeoPoint, GridError> {
        // NaN fails both comparisons
        if !(latitude.abs() < MAX_LAT) {
            return Err(GridError::InvalidLatitude(latitude));
        }
        if !(longitude.abs() <= MAX_LON) {
            return Err(GridError::InvalidLongitude(longitude));
        }
        check_zoom(zoom)?;
        Ok(GeoPoint {
            latitude,
            longitude,
            zoom,
        })
    }
    // Result of an inverse projection. Longitudes beyond ±180 occur for
    // tiles right of the antimeridian and are kept as computed.
    fn projected(latitude: f64, longitude: f64, zoom: u8) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
            zoom,
        }
    }
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
    /// Same location tagged with another zoom level
    pub fn at_zoom(&self, zoom: u8) -> Result<GeoPoint, GridError> {
        Ok(GeoPoint {
            zoom: check_zoom(zoom)?,
            ..*self
        })
    }
    /// Offset in degrees (x: longitude, y: latitude)
    pub fn offset_from(&self, other: &GeoPoint) -> Result<Point<f64>, GridError> {
        check_same_zoom(self.zoom, other.zoom)?;
        Ok(Point::new(
            self.longitude - other.longitude,
            self.latitude - other.latitude,
        ))
    }
}

impl Add<Point<f64>> for GeoPoint {
    type Output = GeoPoint;

    /// Shift by a degree offset (x: longitude, y: latitude)
    fn add(self, offset: Point<f64>) -> GeoPoint {
        GeoPoint::projected(
            self.latitude + offset.y,
            self.longitude + offset.x,
            self.zoom,
        )
    }
}

impl Sub<Point<f64>> for GeoPoint {
    type Output = GeoPoint;

    fn sub(self, offset: Point<f64>) -> GeoPoint {
        GeoPoint::projected(
            self.latitude - offset.y,
            self.longitude - offset.x,
            self.zoom,
        )
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeoPoint (lat: {:.6}, long: {:.6}), zoom: {}",
            self.latitude, self.longitude, self.zoom
        )
    }
}

/// Planar point types share their arithmetic: translation by an offset,
/// scaling by a scalar and zoom-checked addition and subtraction.
macro_rules! planar_point {
    ($name:ident, $label:expr) => {
        #[derive(PartialEq, Clone, Copy, Debug)]
        pub struct $name {
            x: f64,
            y: f64,
            zoom: u8,
        }

        impl $name {
            pub fn new(x: f64, y: f64, zoom: u8) -> $name {
                $name { x, y, zoom }
            }
            pub fn x(&self) -> f64 {
                self.x
            }
            pub fn y(&self) -> f64 {
                self.y
            }
            pub fn zoom(&self) -> u8 {
                self.zoom
            }
            pub fn as_point(&self) -> Point<f64> {
                Point::new(self.x, self.y)
            }
            pub fn checked_add(&self, other: &$name) -> Result<$name, GridError> {
                check_same_zoom(self.zoom, other.zoom)?;
                Ok($name::new(self.x + other.x, self.y + other.y, self.zoom))
            }
            pub fn checked_sub(&self, other: &$name) -> Result<$name, GridError> {
                check_same_zoom(self.zoom, other.zoom)?;
                Ok($name::new(self.x - other.x, self.y - other.y, self.zoom))
            }
            pub fn offset_from(&self, other: &$name) -> Result<Point<f64>, GridError> {
                check_same_zoom(self.zoom, other.zoom)?;
                Ok(self.as_point() - other.as_point())
            }
        }

        impl Add<Point<f64>> for $name {
            type Output = $name;

            fn add(self, offset: Point<f64>) -> $name {
                $name::new(self.x + offset.x, self.y + offset.y, self.zoom)
            }
        }

        impl Sub<Point<f64>> for $name {
            type Output = $name;

            fn sub(self, offset: Point<f64>) -> $name {
                $name::new(self.x - offset.x, self.y - offset.y, self.zoom)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;

            fn mul(self, scale: f64) -> $name {
                $name::new(self.x * scale, self.y * scale, self.zoom)
            }
        }

        impl Div<f64> for $name {
            type Output = $name;

            fn div(self, scale: f64) -> $name {
                $name::new(self.x / scale, self.y / scale, self.zoom)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{} (x: {:.6}, y: {:.6}), zoom: {}",
                    $label, self.x, self.y, self.zoom
                )
            }
        }
    };
}

planar_point!(WorldPoint, "WorldPoint");
planar_point!(PixelPoint, "PixelPoint");

impl WorldPoint {
    /// World coordinates don't depend on zoom; only the tag changes.
    pub fn at_zoom(&self, zoom: u8) -> WorldPoint {
        WorldPoint::new(self.x, self.y, zoom)
    }
}

impl PixelPoint {
    /// Same location in the pixel plane of another zoom level
    pub fn rescale(&self, zoom: u8) -> PixelPoint {
        let factor = zoom_scale(zoom) / zoom_scale(self.zoom);
        PixelPoint::new(self.x * factor, self.y * factor, zoom)
    }
}

/// Web Mercator forward projection
pub fn geo_to_world(geo: &GeoPoint) -> WorldPoint {
    let lat = geo.latitude.to_radians();
    let mercator = -(PI / 4.0 + lat / 2.0).tan().ln();
    WorldPoint::new(
        HALF_BASE * (geo.longitude / 180.0 + 1.0),
        HALF_BASE * (mercator / PI + 1.0),
        geo.zoom,
    )
}

/// Web Mercator inverse projection
pub fn world_to_geo(world: &WorldPoint) -> GeoPoint {
    let base = f64::from(BASE_TILE_SIZE);
    let longitude = (world.x * 2.0 / base - 1.0) * 180.0;
    let inv_mercator = (PI * (1.0 - world.y * 2.0 / base)).exp();
    let latitude = (inv_mercator.atan() - PI / 4.0) * 360.0 / PI;
    GeoPoint::projected(latitude, longitude, world.zoom)
}

pub fn world_to_pixel(world: &WorldPoint) -> PixelPoint {
    let scale = zoom_scale(world.zoom);
    PixelPoint::new(world.x * scale, world.y * scale, world.zoom)
}

pub fn pixel_to_world(pixel: &PixelPoint) -> WorldPoint {
    let scale = zoom_scale(pixel.zoom);
    WorldPoint::new(pixel.x / scale, pixel.y / scale, pixel.zoom)
}

pub fn geo_to_pixel(geo: &GeoPoint) -> PixelPoint {
    world_to_pixel(&geo_to_world(geo))
}

pub fn pixel_to_geo(pixel: &PixelPoint) -> GeoPoint {
    world_to_geo(&pixel_to_world(pixel))
}

/// Tile containing the pixel. Fails for pixels left of or above the grid origin.
pub fn pixel_to_tile(pixel: &PixelPoint) -> Result<Tile, GridError> {
    let base = f64::from(BASE_TILE_SIZE);
    let col = (pixel.x / base).floor();
    let row = (pixel.y / base).floor();
    let max = f64::from(u32::MAX);
    if !(0.0..=max).contains(&col) || !(0.0..=max).contains(&row) {
        return Err(GridError::InvalidTileIndex {
            x: pixel.x,
            y: pixel.y,
            zoom: pixel.zoom,
        });
    }
    Ok(Tile::new(col as u32, row as u32, pixel.zoom))
}

pub fn world_to_tile(world: &WorldPoint) -> Result<Tile, GridError> {
    pixel_to_tile(&world_to_pixel(world))
}

pub fn geo_to_tile(geo: &GeoPoint) -> Result<Tile, GridError> {
    pixel_to_tile(&geo_to_pixel(geo))
}

impl From<&GeoPoint> for WorldPoint {
    fn from(geo: &GeoPoint) -> WorldPoint {
        geo_to_world(geo)
    }
}

impl From<&WorldPoint> for GeoPoint {
    fn from(world: &WorldPoint) -> GeoPoint {
        world_to_geo(world)
    }
}

impl From<&WorldPoint> for PixelPoint {
    fn from(world: &WorldPoint) -> PixelPoint {
        world_to_pixel(world)
    }
}

impl From<&PixelPoint> for WorldPoint {
    fn from(pixel: &PixelPoint) -> WorldPoint {
        pixel_to_world(pixel)
    }
}
