//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Static map request URLs

use crate::core::config::RequestCfg;
use mercator_grid::{GeoPoint, RegionPlan};
use std::cmp;

/// Labelled map marker
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Marker {
    pub label: String,
    pub color: String,
    pub lat: f64,
    pub lon: f64,
}

impl Marker {
    fn new(label: &str, color: &str, lat: f64, lon: f64) -> Marker {
        Marker {
            label: label.to_string(),
            color: color.to_string(),
            lat,
            lon,
        }
    }
    /// Query parameter of a static map request
    pub fn url_param(&self) -> String {
        format!(
            "&markers=color:{}%7Clabel:{}%7C{:.6},{:.6}",
            self.color, self.label, self.lat, self.lon
        )
    }
}

/// Markers A-D at the region corners, clockwise from upper left
pub fn corner_markers(plan: &RegionPlan) -> Vec<Marker> {
    let ul = plan.upper_left();
    let lr = plan.lower_right();
    vec![
        Marker::new("A", "black", ul.latitude(), ul.longitude()),
        Marker::new("B", "red", ul.latitude(), lr.longitude()),
        Marker::new("C", "green", lr.latitude(), lr.longitude()),
        Marker::new("D", "blue", lr.latitude(), ul.longitude()),
    ]
}

pub struct RequestTemplate<'a> {
    cfg: &'a RequestCfg,
    zoom: u8,
    size: u32,
    format: String,
    markers: String,
}

impl<'a> RequestTemplate<'a> {
    pub fn new(cfg: &'a RequestCfg, plan: &RegionPlan, format: &str) -> RequestTemplate<'a> {
        let markers = if cfg.markers {
            corner_markers(plan)
                .iter()
                .map(|m| m.url_param())
                .collect::<String>()
        } else {
            String::new()
        };
        RequestTemplate {
            cfg,
            zoom: plan.zoom(),
            size: plan.output_tile_size(),
            format: format.to_string(),
            markers,
        }
    }
    /// API key for the request with number `request_no` (0-based).
    ///
    /// Keys are used in turn, each for `quota` requests.
    pub fn api_key(&self, request_no: u64) -> Option<&str> {
        if self.cfg.keys.is_empty() {
            return None;
        }
        let quota = cmp::max(self.cfg.quota, 1);
        let idx = (request_no / quota) % self.cfg.keys.len() as u64;
        Some(self.cfg.keys[idx as usize].as_str())
    }
    /// Request URL for the image centered at `center`
    pub fn url(&self, center: &GeoPoint, request_no: u64) -> String {
        self.cfg
            .url
            .replace("{lat}", &format!("{:.6}", center.latitude()))
            .replace("{lon}", &format!("{:.6}", center.longitude()))
            .replace("{zoom}", &self.zoom.to_string())
            .replace("{size}", &self.size.to_string())
            .replace("{scale}", &self.cfg.scale.to_string())
            .replace("{format}", &self.format)
            .replace("{maptype}", &self.cfg.maptype)
            .replace("{markers}", &self.markers)
            .replace("{key}", self.api_key(request_no).unwrap_or(""))
    }
}
