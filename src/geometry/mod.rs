//! Geometry module - planar transforms used to animate the trajectory
//!
//! This module provides:
//! - The 2D rotation transform, for single points and 2×N batches
//! - Translation of point batches
//! - Evenly spaced sample generation (`linspace`)

mod transform;

pub use transform::{
    columns_to_points, linspace, points_from_pairs, rotate_point, rotate_points, translate,
};
