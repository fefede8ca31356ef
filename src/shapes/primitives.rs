//! Primitive shapes - Circle, Triangle, Square
//!
//! The triangle and square are closed vertex loops: the first corner is
//! repeated at the end so the drawn polyline closes.

use std::f64::consts::TAU;

use nalgebra::Matrix2xX;

use super::traits::Shape;
use crate::geometry::{linspace, points_from_pairs};

/// A circle centered on the local origin
///
/// ## Parametric Equation
/// ```text
/// x = radius * cos(t)
/// y = radius * sin(t),   t in [0, 2π]
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn outline(&self, samples: usize) -> Matrix2xX<f64> {
        let angles = linspace(0.0, TAU, samples);
        Matrix2xX::from_fn(angles.len(), |row, col| {
            let t = angles[col];
            if row == 0 {
                self.radius * t.cos()
            } else {
                self.radius * t.sin()
            }
        })
    }
}

/// An isosceles triangle with its apex on the +Y axis
///
/// Base and height both equal `side_length`.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub side_length: f64,
}

impl Triangle {
    pub fn new(side_length: f64) -> Self {
        Self { side_length }
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn outline(&self, _samples: usize) -> Matrix2xX<f64> {
        let half = self.side_length / 2.0;
        points_from_pairs(&[
            (0.0, half),
            (-half, -half),
            (half, -half),
            (0.0, half), // Close loop
        ])
    }
}

/// An axis-aligned square centered on the local origin
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    pub side_length: f64,
}

impl Square {
    pub fn new(side_length: f64) -> Self {
        Self { side_length }
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn outline(&self, _samples: usize) -> Matrix2xX<f64> {
        let half = self.side_length / 2.0;
        points_from_pairs(&[
            (-half, -half),
            (half, -half),
            (half, half),
            (-half, half),
            (-half, -half), // Close loop
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_circle_points_lie_on_radius() {
        let circle = Circle::new(5.0);
        let path = circle.local_path(100);
        assert_eq!(path.ncols(), 100);
        for column in path.column_iter() {
            assert!((column.norm() - 5.0).abs() < EPS);
        }
    }

    #[test]
    fn test_circle_starts_and_ends_on_positive_x() {
        let outline = Circle::new(2.0).outline(9);
        assert!((outline[(0, 0)] - 2.0).abs() < EPS);
        assert!(outline[(1, 0)].abs() < EPS);
        assert!((outline[(0, 8)] - 2.0).abs() < EPS);
        assert!(outline[(1, 8)].abs() < EPS);
    }

    #[test]
    fn test_triangle_loop_is_closed() {
        let outline = Triangle::new(20.0).outline(100);
        assert_eq!(outline.ncols(), 4);
        assert_eq!(outline.column(0), outline.column(3));
        assert_eq!(outline[(1, 0)], 10.0);
        assert_eq!(outline[(0, 1)], -10.0);
    }

    #[test]
    fn test_square_loop_is_closed() {
        let outline = Square::new(20.0).outline(100);
        assert_eq!(outline.ncols(), 5);
        assert_eq!(outline.column(0), outline.column(4));
        for column in outline.column_iter() {
            assert_eq!(column[0].abs(), 10.0);
            assert_eq!(column[1].abs(), 10.0);
        }
    }

    #[test]
    fn test_vertex_loops_tile_to_frame_count() {
        for (shape, period) in [
            (&Triangle::new(20.0) as &dyn Shape, 4),
            (&Square::new(20.0) as &dyn Shape, 5),
        ] {
            let outline = shape.outline(0);
            for frame_count in [1, 3, 4, 5, 7, 100] {
                let path = shape.local_path(frame_count);
                assert_eq!(path.ncols(), frame_count);
                for i in 0..frame_count {
                    assert_eq!(path.column(i), outline.column(i % period));
                }
            }
        }
    }
}
