//! Fixed parameter block for a run
//!
//! Nothing here is read from disk or the command line. The defaults are the
//! parameters the animation is built around.

use std::num::NonZeroUsize;
use std::time::Duration;

use nalgebra::{Point2, Vector2};
use serde::Serialize;

use crate::shapes::{ShapeError, TrajectoryShape};

/// Side of the spinning square and of the triangle/square trajectories
pub const SIDE_LENGTH: f64 = 20.0;

/// Arm anchor, at the center of a 29-unit frame
pub const BASE_POINT: (f64, f64) = (29.0 / 2.0, 29.0 / 2.0);

/// One frame per rotation step
pub const FRAME_COUNT: usize = 100;

/// Shape selector: `"circle"`, `"triangle"` or `"square"`
pub const TRAJECTORY_SHAPE: &str = "circle";

pub const TRAJECTORY_ORIGIN: (f64, f64) = (2.5, 2.5);

/// Circle radius (ignored by the vertex-loop shapes)
pub const RADIUS: f64 = 5.0;

/// Delay between two animation frames
pub const FRAME_PAUSE: Duration = Duration::from_millis(50);

/// Trajectory parameters
#[derive(Clone, Debug, Serialize)]
pub struct TrajectoryConfig {
    pub side_length: f64,
    /// Fixed anchor of the arm (x_a, y_a)
    pub base_point: (f64, f64),
    pub frame_count: NonZeroUsize,
    /// Shape selector, resolved by `shape()`
    pub shape: String,
    pub trajectory_origin: (f64, f64),
    pub radius: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            side_length: SIDE_LENGTH,
            base_point: BASE_POINT,
            frame_count: NonZeroUsize::new(FRAME_COUNT).unwrap_or(NonZeroUsize::MIN),
            shape: TRAJECTORY_SHAPE.to_string(),
            trajectory_origin: TRAJECTORY_ORIGIN,
            radius: RADIUS,
        }
    }
}

impl TrajectoryConfig {
    /// Resolve the shape selector
    pub fn shape(&self) -> Result<TrajectoryShape, ShapeError> {
        TrajectoryShape::from_selector(&self.shape, self.radius, self.side_length)
    }

    pub fn base(&self) -> Point2<f64> {
        Point2::new(self.base_point.0, self.base_point.1)
    }

    pub fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.trajectory_origin.0, self.trajectory_origin.1)
    }
}

/// Plot window settings
#[derive(Clone, Debug, Serialize)]
pub struct DisplayConfig {
    pub title: String,
    /// Inner window size in points
    pub window_size: [f32; 2],
    /// Visible X range (min, max)
    pub x_range: (f64, f64),
    /// Visible Y range (min, max)
    pub y_range: (f64, f64),
    /// Grid spacing in world units
    pub grid_step: f64,
    #[serde(skip)]
    pub frame_pause: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Animated End Effector Trajectory with Spinning Square".to_string(),
            window_size: [700.0, 760.0],
            x_range: (-30.0, 20.0),
            y_range: (-30.0, 20.0),
            grid_step: 10.0,
            frame_pause: FRAME_PAUSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape;

    #[test]
    fn test_defaults_match_parameter_block() {
        let config = TrajectoryConfig::default();
        assert_eq!(config.frame_count.get(), 100);
        assert_eq!(config.base_point, (14.5, 14.5));
        assert_eq!(config.trajectory_origin, (2.5, 2.5));
        assert_eq!(config.shape().map(|s| s.name()), Ok("circle"));
    }

    #[test]
    fn test_unsupported_shape_in_config() {
        let config = TrajectoryConfig {
            shape: "pentagon".to_string(),
            ..TrajectoryConfig::default()
        };
        assert!(config.shape().is_err());
    }

    #[test]
    fn test_config_serializes_for_logging() {
        let json = serde_json::to_string(&TrajectoryConfig::default()).unwrap();
        assert!(json.contains("\"shape\":\"circle\""));
        assert!(json.contains("\"frame_count\":100"));
    }
}
