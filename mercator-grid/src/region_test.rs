//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coord::GeoPoint;
use crate::error::GridError;
use crate::region::{plan_region, RegionPlan};
use crate::tile::{GridPosition, Tile};

fn crete_rhodes(zoom: u8) -> (GeoPoint, GeoPoint) {
    (
        GeoPoint::new(35.874970, 23.417749, zoom).unwrap(),
        GeoPoint::new(34.727331, 26.515893, zoom).unwrap(),
    )
}

fn positions(plan: &RegionPlan) -> Vec<(u32, u32)> {
    plan.tiles()
        .map(|t| (t.grid_position.row, t.grid_position.col))
        .collect()
}

#[test]
fn test_plan_512() {
    let (ul, lr) = crete_rhodes(9);
    let plan = plan_region(ul, lr, 9, 512).unwrap();

    assert_eq!(*plan.upper_left_tile(), Tile::new(289, 201, 9));
    assert_eq!(*plan.lower_right_tile(), Tile::new(293, 203, 9));
    // spans 5 x 3 base tiles, scaled by 256/512
    assert_eq!(plan.tile_count_x(), 3);
    assert_eq!(plan.tile_count_y(), 2);
    assert_eq!(plan.tile_count(), 6);
    assert_eq!(plan.scale_factor(), 2);
    assert_eq!(plan.mosaic_width(), 1536);
    assert_eq!(plan.mosaic_height(), 1024);

    let tiles = plan.tiles().collect::<Vec<_>>();
    let cells = tiles
        .iter()
        .map(|t| (t.col, t.row, t.zoom))
        .collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (289, 201, 9),
            (291, 201, 9),
            (293, 201, 9),
            (289, 203, 9),
            (291, 203, 9),
            (293, 203, 9),
        ]
    );
    assert_eq!(tiles[4].grid_position(), GridPosition::new(1, 1));
    assert_eq!(tiles[4].grid_position().pixel_offset(512), (512, 512));
}

#[test]
fn test_plan_256() {
    let (ul, lr) = crete_rhodes(9);
    let plan = plan_region(ul, lr, 9, 256).unwrap();
    assert_eq!(plan.tile_count_x(), 6);
    assert_eq!(plan.tile_count_y(), 4);
    assert_eq!(plan.scale_factor(), 1);
    assert_eq!(plan.mosaic_width(), 1536);
    assert_eq!(plan.mosaic_height(), 1024);

    let last = plan.tiles().last().unwrap();
    assert_eq!((last.col, last.row), (294, 204));
    assert_eq!(last.grid_position(), GridPosition::new(3, 5));
}

#[test]
fn test_single_point() {
    let p = GeoPoint::new(30.061366, 31.190270, 17).unwrap();
    for size in &[512, 768, 1024] {
        let plan = plan_region(p, p, 17, *size).unwrap();
        assert_eq!(plan.tile_count(), 1);
        let tiles = plan.tiles().collect::<Vec<_>>();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].grid_position(), GridPosition::new(0, 0));
        assert_eq!((plan.mosaic_width(), plan.mosaic_height()), (*size, *size));
    }

    // base sized tiles get the extra row and column
    let plan = plan_region(p, p, 17, 256).unwrap();
    assert_eq!((plan.tile_count_x(), plan.tile_count_y()), (2, 2));
}

#[test]
fn test_corner_order() {
    let (ul, lr) = crete_rhodes(9);
    let plan = plan_region(ul, lr, 9, 512).unwrap();
    let reversed = plan_region(lr, ul, 9, 512).unwrap();
    assert_eq!(reversed.tile_count_x(), plan.tile_count_x());
    assert_eq!(reversed.tile_count_y(), plan.tile_count_y());
    assert_eq!(reversed.origin(), (289, 201));
    assert_eq!(
        reversed.tiles().collect::<Vec<_>>(),
        plan.tiles().collect::<Vec<_>>()
    );

    // lower left / upper right
    let ll = GeoPoint::new(ul.latitude(), lr.longitude(), 9).unwrap();
    let ur = GeoPoint::new(lr.latitude(), ul.longitude(), 9).unwrap();
    let diagonal = plan_region(ll, ur, 9, 512).unwrap();
    assert_eq!(diagonal.origin(), plan.origin());
    assert_eq!(diagonal.tile_count(), plan.tile_count());
}

#[test]
fn test_grid_positions_row_major() {
    let ul = GeoPoint::new(30.2, 30.9, 13).unwrap();
    let lr = GeoPoint::new(29.8, 31.6, 13).unwrap();
    let plan = plan_region(ul, lr, 13, 1024).unwrap();

    let mut expected = Vec::new();
    for row in 0..plan.tile_count_y() {
        for col in 0..plan.tile_count_x() {
            expected.push((row, col));
        }
    }
    assert_eq!(positions(&plan), expected);
    assert_eq!(plan.tiles().len() as u64, plan.tile_count());

    for tile in &plan {
        let (x, y) = tile.grid_position().pixel_offset(plan.output_tile_size());
        assert!(x + plan.output_tile_size() <= plan.mosaic_width());
        assert!(y + plan.output_tile_size() <= plan.mosaic_height());
        assert_eq!(
            tile.col,
            plan.origin().0 + tile.grid_position.col * plan.scale_factor()
        );
        assert_eq!(
            tile.row,
            plan.origin().1 + tile.grid_position.row * plan.scale_factor()
        );
    }
}

#[test]
fn test_restartable() {
    let (ul, lr) = crete_rhodes(10);
    let plan = plan_region(ul, lr, 10, 512).unwrap();
    let first = plan.tiles().collect::<Vec<_>>();
    let second = (&plan).into_iter().collect::<Vec<_>>();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_invalid_tile_size() {
    let (ul, lr) = crete_rhodes(9);
    for size in &[0, 100, 128, 300, 640] {
        assert_eq!(
            plan_region(ul, lr, 9, *size).unwrap_err(),
            GridError::InvalidTileSize(*size)
        );
    }
    assert!(plan_region(ul, lr, 9, 1280).is_ok());
}

#[test]
fn test_invalid_zoom() {
    let (ul, lr) = crete_rhodes(9);
    assert_eq!(
        plan_region(ul, lr, 21, 512).unwrap_err(),
        GridError::InvalidZoom(21)
    );
}

#[test]
fn test_corner_zoom_retagged() {
    let (ul, lr) = crete_rhodes(3);
    let plan = RegionPlan::new(ul, lr, 9, 512).unwrap();
    assert_eq!(plan.upper_left().zoom(), 9);
    assert_eq!(plan.lower_right().zoom(), 9);

    let (ul9, lr9) = crete_rhodes(9);
    assert_eq!(plan, plan_region(ul9, lr9, 9, 512).unwrap());
}

#[test]
fn test_polar_corner() {
    let ul = GeoPoint::new(87.0, 10.0, 5).unwrap();
    let lr = GeoPoint::new(80.0, 20.0, 5).unwrap();
    assert!(matches!(
        plan_region(ul, lr, 5, 512),
        Err(GridError::InvalidTileIndex { .. })
    ));
}

#[test]
fn test_display() {
    let (ul, lr) = crete_rhodes(9);
    let plan = plan_region(ul, lr, 9, 512).unwrap();
    assert_eq!(
        format!("{}", plan),
        "Region UL(35.874970, 23.417749), LR(34.727331, 26.515893), zoom: 9\nWidth: 1536, Height: 1024, Tiles: 6"
    );
}
