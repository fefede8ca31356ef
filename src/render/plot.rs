//! XY plot widget
//!
//! Draws the animation series on a fixed world window with a grid, tick
//! labels, a title and, once the run is over, a legend.
//!
//! ## Coordinate System
//!
//! World coordinates map linearly onto the plot frame with equal aspect:
//! - X: `x_range.0` = left edge, `x_range.1` = right edge
//! - Y: `y_range.0` = bottom edge, `y_range.1` = top edge

use std::collections::HashMap;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use nalgebra::Point2;

use super::canvas::{Canvas, Mark, Series};
use crate::config::DisplayConfig;

/// Visual settings for the plot
#[derive(Clone)]
pub struct PlotSettings {
    pub background: Color32,
    pub frame_color: Color32,
    pub grid_color: Color32,
    pub text_color: Color32,
    /// Line thickness in pixels
    pub line_width: f32,
    /// Marker radius in pixels
    pub marker_radius: f32,
    pub dash_length: f32,
    pub gap_length: f32,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            frame_color: Color32::from_gray(40),
            grid_color: Color32::from_gray(215),
            text_color: Color32::from_gray(20),
            line_width: 1.5,
            marker_radius: 4.0,
            dash_length: 6.0,
            gap_length: 4.0,
        }
    }
}

/// Color of each series
pub fn series_color(series: Series) -> Color32 {
    let (r, g, b, alpha) = match series {
        Series::Arm => (255, 0, 0, 1.0),
        Series::EndEffector => (0, 0, 255, 1.0),
        Series::Base => (0, 128, 0, 1.0),
        Series::Trace => (0, 0, 255, 0.5),
        Series::SpinningSquare => (0, 0, 0, 0.3),
        Series::DesiredShape => (191, 0, 191, 0.4),
    };
    Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0_f32) as u8)
}

/// Margins around the plot frame, in pixels: (left, top, right, bottom)
const MARGINS: (f32, f32, f32, f32) = (44.0, 34.0, 12.0, 40.0);

/// Live XY plot
///
/// Keeps one point buffer per series; each `update_series` replaces a
/// buffer and `show` draws whatever is buffered.
pub struct PlotView {
    pub settings: PlotSettings,
    display: DisplayConfig,
    series: HashMap<Series, Vec<Point2<f64>>>,
    labels: HashMap<Series, String>,
    show_legend: bool,
    frames_presented: usize,
}

impl PlotView {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            settings: PlotSettings::default(),
            display,
            series: HashMap::new(),
            labels: HashMap::new(),
            show_legend: false,
            frames_presented: 0,
        }
    }

    /// Number of frames presented so far
    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    pub fn legend_visible(&self) -> bool {
        self.show_legend
    }

    fn label(&self, series: Series) -> &str {
        self.labels
            .get(&series)
            .map(String::as_str)
            .unwrap_or_else(|| series.label())
    }

    /// Largest rect inside `area` with the aspect ratio of the world window
    pub fn fit_frame(&self, area: Rect) -> Rect {
        let span_x = (self.display.x_range.1 - self.display.x_range.0) as f32;
        let span_y = (self.display.y_range.1 - self.display.y_range.0) as f32;
        let scale = (area.width() / span_x).min(area.height() / span_y);
        Rect::from_center_size(area.center(), Vec2::new(span_x * scale, span_y * scale))
    }

    /// Convert a world point to screen coordinates inside `frame`
    pub fn world_to_screen(&self, point: &Point2<f64>, frame: Rect) -> Pos2 {
        let (x_min, x_max) = self.display.x_range;
        let (y_min, y_max) = self.display.y_range;

        let norm_x = ((point.x - x_min) / (x_max - x_min)) as f32;
        let norm_y = ((point.y - y_min) / (y_max - y_min)) as f32;

        // Screen Y increases downward
        Pos2::new(
            frame.left() + norm_x * frame.width(),
            frame.bottom() - norm_y * frame.height(),
        )
    }

    /// Draw the plot into the available space
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let (left, top, right, bottom) = MARGINS;

        let area = Rect::from_min_max(
            response.rect.min + Vec2::new(left, top),
            response.rect.max - Vec2::new(right, bottom),
        );
        let frame = self.fit_frame(area);

        painter.rect_filled(response.rect, 0.0, self.settings.background);
        self.draw_grid(&painter, frame);
        self.draw_titles(&painter, frame);

        let clipped = painter.with_clip_rect(frame);
        for &series in Series::all() {
            self.draw_series(&clipped, frame, series);
        }

        painter.rect_stroke(frame, 0.0, Stroke::new(1.0, self.settings.frame_color));

        if self.show_legend {
            self.draw_legend(&painter, frame);
        }

        response
    }

    /// World values of the grid lines along one axis
    fn grid_values(&self, range: (f64, f64)) -> Vec<f64> {
        let step = self.display.grid_step;
        let first = (range.0 / step).ceil() as i64;
        let last = (range.1 / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }

    fn draw_grid(&self, painter: &egui::Painter, frame: Rect) {
        let stroke = Stroke::new(0.5, self.settings.grid_color);
        let font = FontId::proportional(11.0);

        for x in self.grid_values(self.display.x_range) {
            let pos = self.world_to_screen(&Point2::new(x, self.display.y_range.0), frame);
            painter.line_segment([Pos2::new(pos.x, frame.top()), Pos2::new(pos.x, frame.bottom())], stroke);
            painter.text(
                Pos2::new(pos.x, frame.bottom() + 4.0),
                Align2::CENTER_TOP,
                format!("{x}"),
                font.clone(),
                self.settings.text_color,
            );
        }

        for y in self.grid_values(self.display.y_range) {
            let pos = self.world_to_screen(&Point2::new(self.display.x_range.0, y), frame);
            painter.line_segment([Pos2::new(frame.left(), pos.y), Pos2::new(frame.right(), pos.y)], stroke);
            painter.text(
                Pos2::new(frame.left() - 6.0, pos.y),
                Align2::RIGHT_CENTER,
                format!("{y}"),
                font.clone(),
                self.settings.text_color,
            );
        }
    }

    fn draw_titles(&self, painter: &egui::Painter, frame: Rect) {
        let color = self.settings.text_color;
        painter.text(
            Pos2::new(frame.center().x, frame.top() - 8.0),
            Align2::CENTER_BOTTOM,
            &self.display.title,
            FontId::proportional(15.0),
            color,
        );
        painter.text(
            Pos2::new(frame.center().x, frame.bottom() + 20.0),
            Align2::CENTER_TOP,
            "X",
            FontId::proportional(13.0),
            color,
        );
        painter.text(
            Pos2::new(frame.left() - 32.0, frame.center().y),
            Align2::RIGHT_CENTER,
            "Y",
            FontId::proportional(13.0),
            color,
        );
    }

    fn draw_series(&self, painter: &egui::Painter, frame: Rect, series: Series) {
        let Some(points) = self.series.get(&series) else {
            return;
        };
        if points.is_empty() {
            return;
        }

        let color = series_color(series);
        let stroke = Stroke::new(self.settings.line_width, color);
        let screen: Vec<Pos2> = points.iter().map(|p| self.world_to_screen(p, frame)).collect();

        match series.mark() {
            Mark::Line if screen.len() >= 2 => {
                painter.add(egui::Shape::line(screen, stroke));
            }
            Mark::Dashed if screen.len() >= 2 => {
                painter.extend(egui::Shape::dashed_line(
                    &screen,
                    stroke,
                    self.settings.dash_length,
                    self.settings.gap_length,
                ));
            }
            Mark::Line | Mark::Dashed | Mark::Point => {
                for pos in screen {
                    painter.circle_filled(pos, self.settings.marker_radius, color);
                }
            }
        }
    }

    fn draw_legend(&self, painter: &egui::Painter, frame: Rect) {
        let font = FontId::proportional(12.0);
        let row_height = 18.0;
        let swatch = 22.0;
        let entries: Vec<(Series, &str)> = Series::all()
            .iter()
            .rev()
            .map(|&series| (series, self.label(series)))
            .collect();

        let text_width = entries
            .iter()
            .map(|(_, label)| label.chars().count() as f32 * 7.0)
            .fold(0.0, f32::max);
        let size = Vec2::new(swatch + text_width + 20.0, row_height * entries.len() as f32 + 8.0);
        let legend = Rect::from_min_size(Pos2::new(frame.right() - size.x - 8.0, frame.top() + 8.0), size);

        painter.rect_filled(legend, 3.0, Color32::from_white_alpha(230));
        painter.rect_stroke(legend, 3.0, Stroke::new(0.5, self.settings.grid_color));

        for (row, (series, label)) in entries.into_iter().enumerate() {
            let y = legend.top() + 4.0 + row_height * (row as f32 + 0.5);
            let start = Pos2::new(legend.left() + 6.0, y);
            let end = Pos2::new(start.x + swatch, y);
            let color = series_color(series);

            let stroke = Stroke::new(self.settings.line_width, color);
            match series.mark() {
                Mark::Point => {
                    painter.circle_filled(start.lerp(end, 0.5), self.settings.marker_radius, color);
                }
                Mark::Line => {
                    painter.line_segment([start, end], stroke);
                }
                Mark::Dashed => {
                    painter.extend(egui::Shape::dashed_line(&[start, end], stroke, 5.0, 3.0));
                }
            }

            painter.text(
                Pos2::new(end.x + 8.0, y),
                Align2::LEFT_CENTER,
                label,
                font.clone(),
                self.settings.text_color,
            );
        }
    }
}

impl Canvas for PlotView {
    fn set_label(&mut self, series: Series, label: String) {
        self.labels.insert(series, label);
    }

    fn update_series(&mut self, series: Series, points: &[Point2<f64>]) {
        let buffer = self.series.entry(series).or_default();
        buffer.clear();
        buffer.extend_from_slice(points);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }

    fn show_final(&mut self) {
        self.show_legend = true;
    }
}
