//! Canvas contract between the animation and a display surface
//!
//! The animation only ever names a series and hands over its points; how a
//! series is styled and drawn is up to the canvas.

use nalgebra::Point2;

/// The plot elements of the animation
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Series {
    /// Segment from the base point to the end effector
    Arm,
    /// Marker at the tip of the arm
    EndEffector,
    /// Marker at the arm anchor
    Base,
    /// Every end effector position visited so far
    Trace,
    /// The square spinning about the world origin
    SpinningSquare,
    /// The rotating outline of the selected shape
    DesiredShape,
}

/// How a series is drawn
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mark {
    Line,
    Dashed,
    Point,
}

impl Series {
    /// Draw order, back to front
    pub fn all() -> &'static [Series] {
        &[
            Series::SpinningSquare,
            Series::DesiredShape,
            Series::Trace,
            Series::Arm,
            Series::Base,
            Series::EndEffector,
        ]
    }

    /// Default legend label
    pub fn label(&self) -> &'static str {
        match self {
            Series::Arm => "Arm",
            Series::EndEffector => "End effector",
            Series::Base => "Base point",
            Series::Trace => "Path so far",
            Series::SpinningSquare => "Spinning square",
            Series::DesiredShape => "Desired shape",
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Series::EndEffector | Series::Base => Mark::Point,
            Series::Trace => Mark::Dashed,
            Series::Arm | Series::SpinningSquare | Series::DesiredShape => Mark::Line,
        }
    }
}

/// A 2D surface the animation draws on
pub trait Canvas {
    /// Replace the legend label of a series
    fn set_label(&mut self, series: Series, label: String);

    /// Replace the points of a series
    fn update_series(&mut self, series: Series, points: &[Point2<f64>]);

    /// Make the current frame visible
    fn present(&mut self);

    /// Show the finished plot with its legend
    fn show_final(&mut self);
}
