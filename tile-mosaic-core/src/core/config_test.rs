//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{
    parse_config, read_config, ApplicationCfg, OutputCfg, RegionCfg, DEFAULT_CONFIG,
};

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.region.upper_left, (35.874970, 23.417749));
    assert_eq!(config.region.lower_right, (34.727331, 26.515893));
    assert_eq!(config.region.zoom, 9);
    assert_eq!(config.region.tile_size, 512);
    assert_eq!(config.output.name, "aegean");
    let request = config.request.expect("missing [request]");
    assert_eq!(request.keys, vec!["KEY1".to_string(), "KEY2".to_string()]);
    assert_eq!(request.quota, 4);
    assert_eq!(request.scale, 2);
    assert_eq!(request.maptype, "roadmap");
    assert!(request.markers);
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config.err().unwrap().starts_with("src/core/mod.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());
}

#[test]
fn test_defaults() {
    let toml = r#"
        [region]
        upper_left = [30.2, 30.9]
        lower_right = [29.8, 31.6]
        zoom = 13
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        config.region,
        RegionCfg {
            upper_left: (30.2, 30.9),
            lower_right: (29.8, 31.6),
            zoom: 13,
            tile_size: 512,
        }
    );
    assert_eq!(config.output, OutputCfg::default());
    assert_eq!(config.output.name, "map");
    assert_eq!(config.output.format, "png");
    assert!(config.request.is_none());
}

#[test]
fn test_missing_region() {
    let toml = r#"
        [output]
        name = "x"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    let err = config.err().unwrap();
    assert!(err.contains("missing field `region`"), "{}", err);
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.region.zoom, 9);
    assert!(config.request.is_none());
}

#[test]
fn test_env_template() {
    std::env::set_var("TILE_MOSAIC_TEST_KEY", "secret");
    let toml = r#"
        [region]
        upper_left = [30.2, 30.9]
        lower_right = [29.8, 31.6]
        zoom = 13

        [request]
        url = "https://example.com/?c={lat},{lon}&key={key}"
        keys = ["{{env.TILE_MOSAIC_TEST_KEY}}"]
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.request.unwrap().keys, vec!["secret".to_string()]);

    let toml = r#"
        [request]
        keys = ["${TILE_MOSAIC_TEST_KEY}"]
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        "Replace environment variable syntax ${VARNAME} with `{{env.VARNAME}}`",
        config.err().unwrap()
    );

    let toml = r#"
        [request]
        keys = ["{{env.TILE_MOSAIC_UNDEFINED_VARIABLE}}"]
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().starts_with("Template error: "));
}
