//! Frame-by-frame animation of a precomputed trajectory
//!
//! Each frame moves the arm and end effector to the next global path point,
//! extends the trace, and redraws the spinning square and desired shape at
//! the frame angle. The sequence is strictly forward:
//!
//! ```text
//! prepare -> frame 0 -> frame 1 -> ... -> frame N-1 -> finish
//! ```

use std::thread;
use std::time::Duration;

use nalgebra::Point2;

use crate::config::TrajectoryConfig;
use crate::geometry::{columns_to_points, rotate_points};
use crate::render::{Canvas, Series};
use crate::shapes::ShapeError;
use crate::trajectory::{Summary, Trajectory};

/// Steps through a trajectory, one frame per call
pub struct Animator {
    trajectory: Trajectory,
    next_frame: usize,
    /// End effector positions of every rendered frame
    trace: Vec<Point2<f64>>,
}

impl Animator {
    pub fn new(trajectory: Trajectory) -> Self {
        let capacity = trajectory.frame_count();
        Self {
            trajectory,
            next_frame: 0,
            trace: Vec::with_capacity(capacity),
        }
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Number of frames rendered so far
    pub fn frames_rendered(&self) -> usize {
        self.next_frame
    }

    pub fn is_finished(&self) -> bool {
        self.next_frame >= self.trajectory.frame_count()
    }

    /// Draw the static elements before the first frame
    pub fn prepare<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let base = self.trajectory.base();
        canvas.update_series(Series::Base, &[base]);

        if let Some(length) = self.trajectory.arm_length_at(0) {
            canvas.set_label(Series::Arm, format!("{} {}", Series::Arm.label(), length));
        }
    }

    /// Render the next frame and present it
    ///
    /// Returns the index of the rendered frame, or `None` once every frame
    /// has been rendered.
    pub fn render_next<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Option<usize> {
        let frame = self.next_frame;
        let tip = *self.trajectory.global_path().get(frame)?;
        let theta = self.trajectory.angles()[frame];

        canvas.update_series(Series::Arm, &[self.trajectory.base(), tip]);
        canvas.update_series(Series::EndEffector, &[tip]);

        self.trace.push(tip);
        canvas.update_series(Series::Trace, &self.trace);

        let square = rotate_points(self.trajectory.square_outline(), theta);
        canvas.update_series(Series::SpinningSquare, &columns_to_points(&square));

        let shape = rotate_points(self.trajectory.shape_outline(), theta);
        canvas.update_series(Series::DesiredShape, &columns_to_points(&shape));

        canvas.present();

        log::trace!(
            "Frame {}: theta {:.4}, local {:?} -> global ({:.4}, {:.4})",
            frame,
            theta,
            self.trajectory.local_point(frame).map(|p| (p.x, p.y)),
            tip.x,
            tip.y
        );

        self.next_frame += 1;
        Some(frame)
    }

    /// Show the final frame with its legend
    pub fn finish<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Summary {
        canvas.show_final();
        let summary = self.trajectory.summary();
        log::info!(
            "Animation finished after {} frames, arm length {:.4}",
            self.frames_rendered(),
            summary.arm_length
        );
        summary
    }
}

/// Run the whole animation on `canvas`, sleeping `pause` after each frame
///
/// An unsupported shape fails before anything is drawn. The window driver
/// in `main` paces frames with repaints instead.
#[allow(dead_code)]
pub fn animate<C: Canvas + ?Sized>(
    config: &TrajectoryConfig,
    canvas: &mut C,
    pause: Duration,
) -> Result<Summary, ShapeError> {
    let trajectory = Trajectory::compute(config)?;
    let mut animator = Animator::new(trajectory);

    animator.prepare(canvas);
    while animator.render_next(canvas).is_some() {
        thread::sleep(pause);
    }

    Ok(animator.finish(canvas))
}
