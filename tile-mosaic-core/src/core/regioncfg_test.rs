//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, RegionCfg};
use crate::core::{parse_config, Config};
use mercator_grid::{RegionPlan, Tile};

#[test]
fn test_plan_from_config() {
    let toml = r#"
        #[region]
        upper_left = [35.874970, 23.417749]
        lower_right = [34.727331, 26.515893]
        zoom = 9
        tile_size = 512
        "#;
    let config: RegionCfg = parse_config(toml.to_string(), "").unwrap();
    let plan = RegionPlan::from_config(&config).unwrap();
    assert_eq!(*plan.upper_left_tile(), Tile::new(289, 201, 9));
    assert_eq!((plan.tile_count_x(), plan.tile_count_y()), (3, 2));
    assert_eq!((plan.mosaic_width(), plan.mosaic_height()), (1536, 1024));
}

#[test]
fn test_invalid_region() {
    let mut config = RegionCfg {
        upper_left: (35.874970, 23.417749),
        lower_right: (34.727331, 26.515893),
        zoom: 9,
        tile_size: 500,
    };
    assert_eq!(
        RegionPlan::from_config(&config).err().unwrap(),
        "Invalid output tile size 500: must be a positive multiple of 256"
    );

    config.tile_size = 512;
    config.upper_left = (95.0, 23.4);
    assert_eq!(
        RegionPlan::from_config(&config).err().unwrap(),
        "Invalid upper_left corner: Invalid latitude: 95 (must be strictly between -90 and 90)"
    );

    config.upper_left = (35.874970, 23.417749);
    config.lower_right = (34.7, 190.0);
    assert_eq!(
        RegionPlan::from_config(&config).err().unwrap(),
        "Invalid lower_right corner: Invalid longitude: 190 (must be between -180 and 180)"
    );

    config.lower_right = (34.727331, 26.515893);
    config.zoom = 22;
    assert!(RegionPlan::from_config(&config)
        .err()
        .unwrap()
        .contains("Invalid zoom level: 22"));
}

#[test]
fn test_gen_config() {
    let config: ApplicationCfg =
        parse_config(<RegionPlan as Config<RegionCfg>>::gen_config(), "").unwrap();
    let plan = RegionPlan::from_config(&config.region).unwrap();
    assert_eq!(plan.zoom(), 9);

    let runtime = plan.gen_runtime_config();
    let config: ApplicationCfg = parse_config(runtime, "").unwrap();
    assert_eq!(
        config.region,
        RegionCfg {
            upper_left: (35.874970, 23.417749),
            lower_right: (34.727331, 26.515893),
            zoom: 9,
            tile_size: 512,
        }
    );
}
