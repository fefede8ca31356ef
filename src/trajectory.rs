//! Trajectory computation
//!
//! Everything the animation needs is computed once, up front:
//! - the angle sequence, one angle per frame over a full turn
//! - the local path and outline of the selected shape
//! - the spinning square outline
//! - the global path, `global_path[i] = rotate(local_path[i], angle[i])`

use std::f64::consts::TAU;
use std::fmt;

use nalgebra::{Matrix2xX, Point2, Vector2};
use serde::Serialize;

use crate::config::TrajectoryConfig;
use crate::geometry::{linspace, rotate_point};
use crate::shapes::{build_paths, Shape, ShapeError, Square};

/// Precomputed trajectory for one run
///
/// Only `compute` builds one, so there is always at least one frame.
#[derive(Clone, Debug)]
pub struct Trajectory {
    base: Point2<f64>,
    origin: Vector2<f64>,
    shape_name: &'static str,
    angles: Vec<f64>,
    /// End effector position of each frame before rotation
    local_path: Matrix2xX<f64>,
    /// Desired shape outline, origin-offset
    shape_outline: Matrix2xX<f64>,
    /// Spinning square outline, centered on the world origin
    square_outline: Matrix2xX<f64>,
    /// End effector position of each frame in world coordinates
    global_path: Vec<Point2<f64>>,
}

impl Trajectory {
    /// Compute every path for `config`
    ///
    /// Fails only when the shape selector is not recognized. Nothing is
    /// computed in that case.
    pub fn compute(config: &TrajectoryConfig) -> Result<Self, ShapeError> {
        let shape = config.shape()?;
        let frame_count = config.frame_count.get();

        let angles = linspace(0.0, TAU, frame_count);
        let paths = build_paths(&shape, config.origin(), frame_count);
        let square_outline = Square::new(config.side_length).outline(0);

        let global_path: Vec<Point2<f64>> = paths
            .local_path
            .column_iter()
            .zip(&angles)
            .map(|(local, &theta)| rotate_point(&Point2::new(local[0], local[1]), theta))
            .collect();

        log::debug!(
            "Computed {} trajectory: {} frames, outline of {} points",
            shape.name(),
            global_path.len(),
            paths.outline.ncols()
        );

        Ok(Self {
            base: config.base(),
            origin: config.origin(),
            shape_name: shape.name(),
            angles,
            local_path: paths.local_path,
            shape_outline: paths.outline,
            square_outline,
            global_path,
        })
    }

    /// Fixed anchor of the arm
    pub fn base(&self) -> Point2<f64> {
        self.base
    }

    pub fn shape_name(&self) -> &'static str {
        self.shape_name
    }

    /// Rotation angle of each frame
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// End effector position at `frame` before rotation
    pub fn local_point(&self, frame: usize) -> Option<Point2<f64>> {
        (frame < self.local_path.ncols())
            .then(|| Point2::new(self.local_path[(0, frame)], self.local_path[(1, frame)]))
    }

    pub fn shape_outline(&self) -> &Matrix2xX<f64> {
        &self.shape_outline
    }

    pub fn square_outline(&self) -> &Matrix2xX<f64> {
        &self.square_outline
    }

    pub fn global_path(&self) -> &[Point2<f64>] {
        &self.global_path
    }

    /// Number of animation frames
    pub fn frame_count(&self) -> usize {
        self.global_path.len()
    }

    /// Distance from the base point to the end effector at `frame`
    pub fn arm_length_at(&self, frame: usize) -> Option<f64> {
        self.global_path
            .get(frame)
            .map(|point| nalgebra::distance(&self.base, point))
    }

    /// Report printed once the animation is over
    pub fn summary(&self) -> Summary {
        let final_position = self.global_path[self.global_path.len() - 1];
        Summary {
            arm_length: nalgebra::distance(&self.base, &final_position),
            final_position: (final_position.x, final_position.y),
            trajectory_origin: (self.origin.x, self.origin.y),
            shape: self.shape_name,
        }
    }
}

/// End-of-run report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Distance from the base point to the last end effector position
    pub arm_length: f64,
    pub final_position: (f64, f64),
    pub trajectory_origin: (f64, f64),
    pub shape: &'static str,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Arm Length: {}", self.arm_length)?;
        writeln!(
            f,
            "Final End Effector Position: [{}, {}]",
            self.final_position.0, self.final_position.1
        )?;
        writeln!(
            f,
            "Trajectory Origin: ({}, {})",
            self.trajectory_origin.0, self.trajectory_origin.1
        )?;
        write!(f, "Trajectory Shape: {}", self.shape)
    }
}
