//! Render module - display surface for the animation
//!
//! This module provides:
//! - `Canvas`, the contract the animation draws through
//! - `PlotView`, an egui XY plot implementing it

mod canvas;
mod plot;

pub use canvas::{Canvas, Series};
pub use plot::PlotView;
