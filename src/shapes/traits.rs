//! Shape trait definition
//!
//! A trajectory shape knows two things: the outline drawn on the plot, and
//! the per-frame local path the end effector follows before rotation.

use nalgebra::Matrix2xX;

/// A shape the end effector can trace
///
/// ## Coordinate System
///
/// Both outputs are 2×N matrices (row 0 = X, row 1 = Y) in the shape's own
/// frame, centered on the world origin. The trajectory origin offset is
/// applied later by the path builder.
pub trait Shape {
    /// Selector name of this shape (`"circle"`, `"triangle"`, ...)
    fn name(&self) -> &'static str;

    /// Outline polyline drawn as the "desired shape"
    ///
    /// Parametric shapes are sampled at `samples` points; vertex loops
    /// ignore it and return their fixed corners.
    fn outline(&self, samples: usize) -> Matrix2xX<f64>;

    /// Exactly `frame_count` points, one per animation frame
    ///
    /// The default repeats the outline in order until `frame_count` points
    /// are produced. For a parametric outline sampled at `frame_count`
    /// points this is the outline itself.
    fn local_path(&self, frame_count: usize) -> Matrix2xX<f64> {
        tile(&self.outline(frame_count), frame_count)
    }
}

/// Repeat the columns of `pattern` cyclically to exactly `count` columns
pub fn tile(pattern: &Matrix2xX<f64>, count: usize) -> Matrix2xX<f64> {
    let period = pattern.ncols();
    if period == 0 {
        return Matrix2xX::zeros(0);
    }
    Matrix2xX::from_fn(count, |row, col| pattern[(row, col % period)])
}
