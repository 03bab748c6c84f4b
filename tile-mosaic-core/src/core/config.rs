//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub region: RegionCfg,
    #[serde(default)]
    pub output: OutputCfg,
    pub request: Option<RequestCfg>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RegionCfg {
    /// Upper left corner as (latitude, longitude) in degrees.
    pub upper_left: (f64, f64),
    /// Lower right corner as (latitude, longitude) in degrees.
    pub lower_right: (f64, f64),
    pub zoom: u8,
    /// Width and height of the requested tile images (multiple of 256, Default: 512)
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
}

pub fn default_tile_size() -> u32 {
    512
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct OutputCfg {
    /// Base name of tile files and mosaic
    #[serde(default = "default_name")]
    pub name: String,
    /// Image format (file extension)
    #[serde(default = "default_format")]
    pub format: String,
}

pub fn default_name() -> String {
    "map".to_string()
}

pub fn default_format() -> String {
    "png".to_string()
}

impl Default for OutputCfg {
    fn default() -> OutputCfg {
        OutputCfg {
            name: default_name(),
            format: default_format(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RequestCfg {
    /// Request URL with placeholders {lat}, {lon}, {zoom}, {size}, {scale},
    /// {format}, {maptype}, {markers} and {key}
    pub url: String,
    /// API keys, switched after `quota` requests each
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default = "default_quota")]
    pub quota: u64,
    #[serde(default = "default_scale")]
    pub scale: u8,
    #[serde(default = "default_maptype")]
    pub maptype: String,
    /// Add region corner markers to every request
    #[serde(default)]
    pub markers: bool,
}

pub fn default_quota() -> u64 {
    24000
}

pub fn default_scale() -> u8 {
    2
}

pub fn default_maptype() -> String {
    "roadmap".to_string()
}

pub const DEFAULT_CONFIG: &'static str = r#"
[region]
upper_left = [35.874970, 23.417749] # lat, lon
lower_right = [34.727331, 26.515893]
zoom = 9
tile_size = 512 # Multiple of 256

[output]
name = "map"
format = "png"

#[request]
#url = "https://maps.googleapis.com/maps/api/staticmap?center={lat},{lon}&format={format}&zoom={zoom}&size={size}x{size}&scale={scale}&maptype={maptype}{markers}&key={key}"
#keys = ["YOUR_API_KEY"]
#quota = 24000
#markers = true
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };
    info!("Reading configuration from '{}'", path);

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for shell style ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| {
        let cause = e.source().map_or(e.to_string(), |source| source.to_string());
        format!("Template error: {}", cause)
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
