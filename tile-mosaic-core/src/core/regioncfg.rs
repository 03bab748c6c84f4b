//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::RegionCfg;
use crate::core::Config;
use mercator_grid::{GeoPoint, RegionPlan};

fn corner(name: &str, (lat, lon): (f64, f64), zoom: u8) -> Result<GeoPoint, String> {
    GeoPoint::new(lat, lon, zoom).map_err(|e| format!("Invalid {} corner: {}", name, e))
}

impl<'a> Config<'a, RegionCfg> for RegionPlan {
    fn from_config(cfg: &RegionCfg) -> Result<Self, String> {
        let upper_left = corner("upper_left", cfg.upper_left, cfg.zoom)?;
        let lower_right = corner("lower_right", cfg.lower_right, cfg.zoom)?;
        RegionPlan::new(upper_left, lower_right, cfg.zoom, cfg.tile_size).map_err(|e| e.to_string())
    }
    fn gen_config() -> String {
        let toml = r#"
[region]
upper_left = [35.874970, 23.417749] # lat, lon
lower_right = [34.727331, 26.515893]
zoom = 9
tile_size = 512 # Multiple of 256
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            r#"
[region]
upper_left = [{:.6}, {:.6}]
lower_right = [{:.6}, {:.6}]
zoom = {}
tile_size = {}
"#,
            self.upper_left().latitude(),
            self.upper_left().longitude(),
            self.lower_right().latitude(),
            self.lower_right().longitude(),
            self.zoom(),
            self.output_tile_size()
        )
    }
}
