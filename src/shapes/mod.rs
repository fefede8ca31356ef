//! Shapes module - builds the local paths the end effector follows
//!
//! This module provides:
//! - `Shape` trait for abstracting over trajectory shapes
//! - Primitive shapes: Circle, Triangle, Square
//! - `TrajectoryShape`, the closed set of shapes a run can select
//! - `build_paths`, which offsets a shape into the trajectory frame

mod primitives;
mod traits;

pub use primitives::{Circle, Square, Triangle};
pub use traits::Shape;

use std::str::FromStr;

use nalgebra::{Matrix2xX, Vector2};
use thiserror::Error;

use crate::geometry::translate;

/// Errors that can occur while resolving a shape selector
#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("Unsupported trajectory shape: {0:?}")]
    UnsupportedShape(String),
}

/// Shape kinds accepted by the selector
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
}

impl ShapeKind {
    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Square => "square",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ShapeError::UnsupportedShape(s.to_string()))
    }
}

/// The trajectory shape selected for a run
///
/// Only the parameters a variant uses are carried: the circle needs its
/// radius, the vertex loops their side length.
#[derive(Clone, Debug, PartialEq)]
pub enum TrajectoryShape {
    Circle(Circle),
    Triangle(Triangle),
    Square(Square),
}

impl TrajectoryShape {
    /// Resolve a selector string into a shape
    ///
    /// Fails with `ShapeError::UnsupportedShape` for anything other than
    /// `circle`, `triangle` or `square`.
    pub fn from_selector(selector: &str, radius: f64, side_length: f64) -> Result<Self, ShapeError> {
        let shape = match selector.parse::<ShapeKind>()? {
            ShapeKind::Circle => TrajectoryShape::Circle(Circle::new(radius)),
            ShapeKind::Triangle => TrajectoryShape::Triangle(Triangle::new(side_length)),
            ShapeKind::Square => TrajectoryShape::Square(Square::new(side_length)),
        };
        Ok(shape)
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            TrajectoryShape::Circle(shape) => shape,
            TrajectoryShape::Triangle(shape) => shape,
            TrajectoryShape::Square(shape) => shape,
        }
    }
}

impl Shape for TrajectoryShape {
    fn name(&self) -> &'static str {
        self.as_shape().name()
    }

    fn outline(&self, samples: usize) -> Matrix2xX<f64> {
        self.as_shape().outline(samples)
    }

    fn local_path(&self, frame_count: usize) -> Matrix2xX<f64> {
        self.as_shape().local_path(frame_count)
    }
}

/// Local-frame paths for one run, already offset by the trajectory origin
#[derive(Clone, Debug)]
pub struct ShapePaths {
    /// One point per frame, followed by the end effector before rotation
    pub local_path: Matrix2xX<f64>,
    /// Polyline drawn as the desired shape
    pub outline: Matrix2xX<f64>,
}

/// Build both local paths for `shape` and move them to `origin`
pub fn build_paths<S: Shape + ?Sized>(shape: &S, origin: Vector2<f64>, frame_count: usize) -> ShapePaths {
    ShapePaths {
        local_path: translate(&shape.local_path(frame_count), origin),
        outline: translate(&shape.outline(frame_count), origin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("triangle".parse::<ShapeKind>(), Ok(ShapeKind::Triangle));
        assert_eq!("square".parse::<ShapeKind>(), Ok(ShapeKind::Square));
    }

    #[test]
    fn test_unsupported_selector() {
        let err = TrajectoryShape::from_selector("pentagon", 5.0, 20.0).unwrap_err();
        assert_eq!(err, ShapeError::UnsupportedShape("pentagon".to_string()));
        assert!(err.to_string().contains("pentagon"));

        // Selectors are exact, lowercase names
        assert!(TrajectoryShape::from_selector("Circle", 5.0, 20.0).is_err());
        assert!(TrajectoryShape::from_selector("", 5.0, 20.0).is_err());
    }

    #[test]
    fn test_selector_picks_the_right_parameter() {
        assert_eq!(
            TrajectoryShape::from_selector("circle", 5.0, 20.0),
            Ok(TrajectoryShape::Circle(Circle::new(5.0)))
        );
        assert_eq!(
            TrajectoryShape::from_selector("square", 5.0, 20.0),
            Ok(TrajectoryShape::Square(Square::new(20.0)))
        );
    }

    #[test]
    fn test_build_paths_offsets_both_outputs() {
        let shape = TrajectoryShape::from_selector("square", 5.0, 4.0).unwrap();
        let paths = build_paths(&shape, Vector2::new(2.5, -1.0), 7);

        assert_eq!(paths.local_path.ncols(), 7);
        assert_eq!(paths.outline.ncols(), 5);

        // First corner (-2, -2) moved by the origin
        assert_eq!(paths.outline[(0, 0)], 0.5);
        assert_eq!(paths.outline[(1, 0)], -3.0);
        // Frame 5 wraps back to the first corner
        assert_eq!(paths.local_path.column(5), paths.outline.column(0));
    }

    #[test]
    fn test_circle_paths_share_samples() {
        let shape = TrajectoryShape::from_selector("circle", 1.0, 20.0).unwrap();
        let paths = build_paths(&shape, Vector2::new(2.5, 2.5), 50);
        assert_eq!(paths.local_path, paths.outline);
    }
}
