//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile manifest
//!
//! Everything the fetch, storage and compositing steps need to know
//! about one tile, keyed by its mosaic grid position.

use crate::core::config::{OutputCfg, RequestCfg};
use crate::service::request::{corner_markers, Marker, RequestTemplate};
use mercator_grid::{GridPosition, RegionPlan};

/// Planned tile
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TileEntry {
    /// Mosaic row
    pub row: u32,
    /// Mosaic column
    pub col: u32,
    /// Absolute tile index at plan zoom
    pub tile_x: u32,
    pub tile_y: u32,
    /// Request center
    pub lat: f64,
    pub lon: f64,
    /// Paste position in the mosaic image
    pub offset_x: u32,
    pub offset_y: u32,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct Manifest {
    pub name: String,
    pub zoom: u8,
    pub tile_size: u32,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
    pub tiles: Vec<TileEntry>,
}

/// File name of a downloaded tile
pub fn tile_filename(output: &OutputCfg, position: GridPosition) -> String {
    format!(
        "{}_{}_{}.{}",
        output.name, position.row, position.col, output.format
    )
}

impl Manifest {
    pub fn new(plan: &RegionPlan, output: &OutputCfg, request: Option<&RequestCfg>) -> Manifest {
        let template = request.map(|cfg| RequestTemplate::new(cfg, plan, &output.format));
        let tile_size = plan.output_tile_size();
        let tiles = plan
            .tiles()
            .enumerate()
            .map(|(no, tile)| {
                let center = tile.center();
                let position = tile.grid_position();
                let (offset_x, offset_y) = position.pixel_offset(tile_size);
                TileEntry {
                    row: position.row,
                    col: position.col,
                    tile_x: tile.col,
                    tile_y: tile.row,
                    lat: center.latitude(),
                    lon: center.longitude(),
                    offset_x,
                    offset_y,
                    file: tile_filename(output, position),
                    url: template.as_ref().map(|t| t.url(&center, no as u64)),
                }
            })
            .collect::<Vec<_>>();
        let markers = match request {
            Some(cfg) if cfg.markers => corner_markers(plan),
            _ => Vec::new(),
        };
        debug!("manifest '{}' with {} tiles", output.name, tiles.len());
        Manifest {
            name: output.name.clone(),
            zoom: plan.zoom(),
            tile_size,
            width: plan.mosaic_width(),
            height: plan.mosaic_height(),
            markers,
            tiles,
        }
    }
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
    pub fn as_csv(&self) -> String {
        let mut csv = String::from("row,col,tile_x,tile_y,lat,lon,offset_x,offset_y,file\n");
        for t in &self.tiles {
            csv.push_str(&format!(
                "{},{},{},{},{:.6},{:.6},{},{},{}\n",
                t.row, t.col, t.tile_x, t.tile_y, t.lat, t.lon, t.offset_x, t.offset_y, t.file
            ));
        }
        csv
    }
}
