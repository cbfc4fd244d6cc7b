//! The "Config" and "Position" panels drawn over the fractal.

use std::time::Duration;

use eframe::egui;

use crate::shaders::ColoringMode;
use crate::view::{PointerState, ViewState, MAX_ITERATIONS};

/// Time between the last two frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTiming {
    frame_time: f32,
}

impl FrameTiming {
    pub fn new(frame_time: f32) -> Self {
        Self { frame_time }
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time * 1000.0
    }

    /// `None` until a non-zero frame time has been measured.
    pub fn fps(&self) -> Option<f32> {
        (self.frame_time > 0.0).then(|| 1.0 / self.frame_time)
    }
}

pub fn timing_line(timing: &FrameTiming) -> String {
    match timing.fps() {
        Some(fps) => format!("fps: {fps:5.2} ({:.2}ms)", timing.frame_time_ms()),
        None => "fps: -".to_owned(),
    }
}

pub fn draw_time_line(draw_time: Duration) -> String {
    format!("draw: {:.2}ms", draw_time.as_secs_f64() * 1000.0)
}

pub fn position_lines(
    view: &ViewState,
    pointer: &PointerState,
    pointer_fractal: Option<(f64, f64)>,
) -> Vec<String> {
    let (cx, cy) = view.center();
    let (re_min, re_max) = view.real_bounds();
    let (im_min, im_max) = view.imag_bounds();
    let (px, py) = pointer.last_position;

    let mut lines = vec![
        format!("center: {cx} {cy}"),
        format!("real: {re_min} {re_max}"),
        format!("imag: {im_min} {im_max}"),
        format!("scale: {}", view.scale()),
        format!("iter: {}", view.iterations()),
        format!("ratio: {}", view.aspect_ratio()),
        format!("mouse: {px} {py}"),
    ];
    if let Some((fx, fy)) = pointer_fractal {
        lines.push(format!("point: {fx} {fy}"));
    }
    lines
}

/// What the user changed through the panels this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayActions {
    pub iterations: Option<u32>,
    pub coloring: Option<ColoringMode>,
    pub reset: bool,
}

pub struct OverlayInput<'a> {
    pub view: &'a ViewState,
    pub pointer: &'a PointerState,
    pub pointer_fractal: Option<(f64, f64)>,
    pub timing: FrameTiming,
    pub draw_time: Duration,
    pub coloring: ColoringMode,
}

pub fn show(ctx: &egui::Context, input: &OverlayInput<'_>) -> OverlayActions {
    let mut actions = OverlayActions::default();

    egui::Window::new("Config").show(ctx, |ui| {
        ui.label("Hello fractal world!");
        ui.label(timing_line(&input.timing));
        ui.label(draw_time_line(input.draw_time));

        // Edited on a copy, applied through the dispatch table
        let mut iterations = input.view.iterations();
        if ui
            .add(egui::Slider::new(&mut iterations, 0..=MAX_ITERATIONS).text("iterations"))
            .changed()
        {
            actions.iterations = Some(iterations);
        }

        let mut coloring = input.coloring;
        egui::ComboBox::from_label("coloring")
            .selected_text(coloring.label())
            .show_ui(ui, |ui| {
                for mode in ColoringMode::ALL {
                    ui.selectable_value(&mut coloring, mode, mode.label());
                }
            });
        if coloring != input.coloring {
            actions.coloring = Some(coloring);
        }
    });

    egui::Window::new("Position").show(ctx, |ui| {
        for line in position_lines(input.view, input.pointer, input.pointer_fractal) {
            ui.label(line);
        }
        if ui.button("Reset view").clicked() {
            actions.reset = true;
        }
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_reports_fps_and_milliseconds() {
        let timing = FrameTiming::new(0.016);
        assert_eq!(timing_line(&timing), "fps: 62.50 (16.00ms)");
    }

    #[test]
    fn zero_frame_time_has_no_fps() {
        assert_eq!(FrameTiming::default().fps(), None);
        assert_eq!(timing_line(&FrameTiming::default()), "fps: -");
    }

    #[test]
    fn position_panel_lists_bounds_and_pointer() {
        let view = ViewState::new((0.5, 0.0), 1.5, 100, 2.0);
        let pointer = PointerState {
            last_position: (640.0, 360.0),
        };
        let lines = position_lines(&view, &pointer, Some((0.5, 0.0)));
        assert_eq!(
            lines,
            vec![
                "center: 0.5 0",
                "real: -1 2",
                "imag: -1.5 1.5",
                "scale: 1.5",
                "iter: 100",
                "ratio: 2",
                "mouse: 640 360",
                "point: 0.5 0",
            ]
        );
    }

    #[test]
    fn pointer_point_is_omitted_without_a_window() {
        let view = ViewState::new((0.0, 0.0), 1.0, 10, 1.0);
        let lines = position_lines(&view, &PointerState::default(), None);
        assert!(lines.iter().all(|l| !l.starts_with("point:")));
    }

    #[test]
    fn draw_time_in_milliseconds() {
        assert_eq!(draw_time_line(Duration::from_micros(2500)), "draw: 2.50ms");
    }
}
