//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Plain 2D vectors

use std::ops::{Add, Div, Mul, Sub};

/// Numeric pair without any coordinate space attached.
///
/// Used as offset between two points of the same space.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Point<T> {
        Point { x, y }
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Point<T>;

    fn add(self, other: Point<T>) -> Point<T> {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Point<T>;

    fn sub(self, other: Point<T>) -> Point<T> {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point<T> {
    type Output = Point<T>;

    fn mul(self, scale: T) -> Point<T> {
        Point::new(self.x * scale, self.y * scale)
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Point<T> {
    type Output = Point<T>;

    fn div(self, scale: T) -> Point<T> {
        Point::new(self.x / scale, self.y / scale)
    }
}

#[test]
fn test_point_arithmetic() {
    let p = Point::new(0, 0);
    let q = Point::new(3, 4);
    assert_eq!(p + q, Point::new(3, 4));
    assert_eq!(p - q, Point::new(-3, -4));
    assert_eq!(q * 2, Point::new(6, 8));
    assert_eq!(q / 2, Point::new(1, 2));
    assert!(p != q);

    let f = Point::new(1.5, -2.0) * 2.0;
    assert_eq!(f, Point::new(3.0, -4.0));
}
