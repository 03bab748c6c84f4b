//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Mosaic iterators

use crate::tile::{GridPosition, Tile};

/// Row-by-row iterator over the tiles of a region
#[derive(Clone, Debug)]
pub struct RegionTiles {
    origin_col: u32,
    origin_row: u32,
    step: u32,
    zoom: u8,
    count_x: u32,
    count_y: u32,
    row: u32,
    col: u32,
    finished: bool,
}

impl RegionTiles {
    pub fn new(
        origin_col: u32,
        origin_row: u32,
        step: u32,
        zoom: u8,
        count_x: u32,
        count_y: u32,
    ) -> RegionTiles {
        RegionTiles {
            origin_col,
            origin_row,
            step,
            zoom,
            count_x,
            count_y,
            row: 0,
            col: 0,
            // Return "empty" iterator for an empty grid
            finished: count_x == 0 || count_y == 0,
        }
    }
    fn remaining(&self) -> usize {
        if self.finished {
            0
        } else {
            let total = u64::from(self.count_x) * u64::from(self.count_y);
            let done = u64::from(self.row) * u64::from(self.count_x) + u64::from(self.col);
            (total - done) as usize
        }
    }
}

impl Iterator for RegionTiles {
    /// Tile with absolute index and mosaic position
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.finished {
            return None;
        }
        let current = Tile::new(
            self.origin_col + self.col * self.step,
            self.origin_row + self.row * self.step,
            self.zoom,
        )
        .with_grid_position(GridPosition::new(self.row, self.col));
        if self.col < self.count_x - 1 {
            self.col += 1;
        } else if self.row < self.count_y - 1 {
            self.row += 1;
            self.col = 0;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RegionTiles {}

#[test]
fn test_row_major_iter() {
    let cells = RegionTiles::new(10, 20, 2, 5, 3, 2)
        .map(|t| (t.col, t.row, t.grid_position.row, t.grid_position.col))
        .collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (10, 20, 0, 0),
            (12, 20, 0, 1),
            (14, 20, 0, 2),
            (10, 22, 1, 0),
            (12, 22, 1, 1),
            (14, 22, 1, 2),
        ]
    );
}

#[test]
fn test_exact_size() {
    let mut iter = RegionTiles::new(0, 0, 1, 3, 4, 3);
    assert_eq!(iter.len(), 12);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 10);
    assert_eq!(iter.count(), 10);
}

#[test]
fn test_empty_grid() {
    let cells = RegionTiles::new(0, 0, 1, 3, 0, 3).collect::<Vec<_>>();
    assert_eq!(cells, vec![]);
    assert_eq!(RegionTiles::new(0, 0, 1, 3, 2, 0).len(), 0);
}
