//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid errors

use crate::coord::MAX_ZOOM;
use thiserror::Error;

/// Error category
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ErrorKind {
    /// Operands live in incompatible coordinate spaces
    TypeMismatch,
    /// Input outside the mathematical domain of the projection
    Domain,
    /// Invalid planner configuration
    Config,
}

/// Errors of the projection and planning functions.
///
/// None of these are transient: they describe invalid caller input.
#[derive(Error, PartialEq, Clone, Debug)]
pub enum GridError {
    #[error("Zoom level mismatch: {left} != {right}")]
    ZoomMismatch { left: u8, right: u8 },

    #[error("Invalid latitude: {0} (must be strictly between -90 and 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    #[error("Invalid zoom level: {0} (must be between 0 and {max})", max = MAX_ZOOM)]
    InvalidZoom(u8),

    #[error("No valid tile index for pixel ({x}, {y}) at zoom {zoom}")]
    InvalidTileIndex { x: f64, y: f64, zoom: u8 },

    #[error("Invalid output tile size {0}: must be a positive multiple of 256")]
    InvalidTileSize(u32),
}

impl GridError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GridError::ZoomMismatch { .. } => ErrorKind::TypeMismatch,
            GridError::InvalidLatitude(_)
            | GridError::InvalidLongitude(_)
            | GridError::InvalidZoom(_)
            | GridError::InvalidTileIndex { .. } => ErrorKind::Domain,
            GridError::InvalidTileSize(_) => ErrorKind::Config,
        }
    }
}

#[test]
fn test_error_kinds() {
    assert_eq!(
        GridError::ZoomMismatch { left: 3, right: 4 }.kind(),
        ErrorKind::TypeMismatch
    );
    assert_eq!(GridError::InvalidLatitude(90.0).kind(), ErrorKind::Domain);
    assert_eq!(GridError::InvalidTileSize(300).kind(), ErrorKind::Config);
    assert_eq!(
        GridError::InvalidZoom(21).to_string(),
        "Invalid zoom level: 21 (must be between 0 and 20)"
    );
}
