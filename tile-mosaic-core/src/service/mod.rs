//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod manifest;
pub mod request;

pub use self::manifest::{tile_filename, Manifest, TileEntry};
pub use self::request::{corner_markers, Marker, RequestTemplate};
