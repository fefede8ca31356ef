//! arm-trajectory - Rotating end-effector trajectory viewer
//!
//! Computes the path of an arm's end effector while its trajectory shape
//! spins about the world origin, then animates it frame by frame:
//! - arm segment from the fixed base point to the end effector
//! - dashed trace of every position visited so far
//! - spinning square and rotating desired shape outline
//!
//! A summary is printed to stdout once the window is closed.

use std::time::{Duration, Instant};

use eframe::egui;
use thiserror::Error;

mod animation;
mod config;
mod geometry;
mod render;
mod shapes;
mod trajectory;

use animation::Animator;
use config::{DisplayConfig, TrajectoryConfig};
use render::PlotView;
use shapes::ShapeError;
use trajectory::Trajectory;

/// Errors that abort a run
#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Failed to serialize configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Display failed: {0}")]
    Display(#[from] eframe::Error),
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::info!("Starting arm-trajectory");

    let config = TrajectoryConfig::default();
    let display = DisplayConfig::default();
    log::info!("Trajectory config: {}", serde_json::to_string(&config)?);
    log::debug!("Display config: {}", serde_json::to_string(&display)?);

    // Shape errors surface here, before a window exists
    let trajectory = Trajectory::compute(&config)?;
    let summary = trajectory.summary();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(display.window_size)
            .with_title(&display.title),
        ..Default::default()
    };

    eframe::run_native(
        "arm-trajectory",
        options,
        Box::new(move |_cc| Ok(Box::new(TrajectoryApp::new(trajectory, display)))),
    )?;

    println!("{summary}");
    Ok(())
}

/// Main application state
struct TrajectoryApp {
    animator: Animator,
    plot: PlotView,
    frame_pause: Duration,
    /// When the last frame was presented
    last_frame: Option<Instant>,
    finished: bool,
}

impl TrajectoryApp {
    fn new(trajectory: Trajectory, display: DisplayConfig) -> Self {
        let frame_pause = display.frame_pause;
        let mut plot = PlotView::new(display);
        let animator = Animator::new(trajectory);
        animator.prepare(&mut plot);

        Self {
            animator,
            plot,
            frame_pause,
            last_frame: None,
            finished: false,
        }
    }

    /// Render at most one frame, once the pause since the previous one is over
    fn advance(&mut self) {
        if self.finished {
            return;
        }
        let due = self
            .last_frame
            .map_or(true, |presented| presented.elapsed() >= self.frame_pause);
        if !due {
            return;
        }

        if self.animator.is_finished() {
            self.animator.finish(&mut self.plot);
            self.finished = true;
        } else if self.animator.render_next(&mut self.plot).is_some() {
            self.last_frame = Some(Instant::now());
        }
    }
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance();
        if !self.finished {
            ctx.request_repaint_after(self.frame_pause);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("Shape: {}", self.animator.trajectory().shape_name()));
                ui.separator();
                ui.small(format!(
                    "Frame: {}/{}",
                    self.plot.frames_presented(),
                    self.animator.trajectory().frame_count()
                ));
                ui.separator();
                ui.small(if self.plot.legend_visible() { "Done" } else { "Animating" });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.plot.show(ui);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn app(frame_count: usize) -> TrajectoryApp {
        let config = TrajectoryConfig {
            frame_count: NonZeroUsize::new(frame_count).unwrap(),
            ..TrajectoryConfig::default()
        };
        let display = DisplayConfig {
            frame_pause: Duration::ZERO,
            ..DisplayConfig::default()
        };
        TrajectoryApp::new(Trajectory::compute(&config).unwrap(), display)
    }

    #[test]
    fn test_app_presents_each_frame_then_legend() {
        let mut app = app(5);
        for presented in 1..=5 {
            app.advance();
            assert_eq!(app.plot.frames_presented(), presented);
            assert!(!app.plot.legend_visible());
        }

        app.advance();
        assert!(app.finished);
        assert!(app.plot.legend_visible());

        // Nothing changes once finished
        app.advance();
        assert_eq!(app.plot.frames_presented(), 5);
    }

    #[test]
    fn test_app_waits_for_frame_pause() {
        let mut app = app(5);
        app.frame_pause = Duration::from_secs(3600);

        app.advance();
        app.advance();
        assert_eq!(app.plot.frames_presented(), 1);
    }

    #[test]
    fn test_unsupported_shape_stops_before_window() {
        let config = TrajectoryConfig {
            shape: "pentagon".to_string(),
            ..TrajectoryConfig::default()
        };
        let err: AppError = Trajectory::compute(&config).unwrap_err().into();
        assert!(matches!(err, AppError::Shape(_)));
        assert_eq!(err.to_string(), "Unsupported trajectory shape: \"pentagon\"");
    }
}
