use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use eframe::glow::{self, HasContext};
use eframe::{egui, App};

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::input::{Interaction, ViewerEvent};
use crate::overlay::{self, FrameTiming, OverlayInput};
use crate::palette::Palette;
use crate::render::{RenderDriver, Uniforms};
use crate::shaders::ColoringMode;

pub struct ViewerApp {
    interaction: Interaction,           // View, pointer and window size
    coloring: ColoringMode,             // Fragment shader in use
    renderer: Arc<Mutex<RenderDriver>>, // Shared with the paint callback
    /// Time spent in the last GL paint callback
    t_render: Arc<Mutex<Duration>>,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &ViewerConfig) -> Result<Self> {
        let gl = cc.gl.as_ref().ok_or(ViewerError::NoGlContext)?;
        log::info!("GL {:?}", gl.version());

        let palette = Palette::load(&config.palette_path)?;
        let renderer = RenderDriver::new(gl, &palette, config.background)?;

        Ok(Self {
            interaction: Interaction::new(config),
            coloring: config.coloring,
            renderer: Arc::new(Mutex::new(renderer)),
            t_render: Arc::new(Mutex::new(Duration::ZERO)),
        })
    }

    /// Replays this frame's raw input through the dispatch table. egui has
    /// already consumed the same events, so its capture verdict is final.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        self.interaction.dispatch(
            &ViewerEvent::Resize {
                width: f64::from(screen.width()),
                height: f64::from(screen.height()),
            },
            false,
        );

        // Decided from last frame's layout, before the overlay is rebuilt
        let ui_captured = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
        let (events, dragging) = ctx.input(|i| (i.events.clone(), i.pointer.any_down()));

        for event in events.iter().flat_map(|e| translate(e, dragging)) {
            self.interaction.dispatch(&event, ui_captured);
        }
    }

    fn paint_fractal(&self, ctx: &egui::Context) {
        let uniforms = Uniforms::from(&self.interaction.view);
        let coloring = self.coloring;
        let renderer = Arc::clone(&self.renderer);
        let t_render = Arc::clone(&self.t_render);

        let callback = egui_glow::CallbackFn::new(move |_info, painter| {
            let start = Instant::now();
            if let Ok(renderer) = renderer.lock() {
                renderer.paint(painter.gl(), &uniforms, coloring);
            }
            if let Ok(mut t) = t_render.lock() {
                *t = start.elapsed();
            }
        });

        // Background layer so the overlay windows draw on top
        ctx.layer_painter(egui::LayerId::background()).add(egui::PaintCallback {
            rect: ctx.screen_rect(),
            callback: Arc::new(callback),
        });
    }
}

/// Maps one egui event to zero, one or two viewer events.
fn translate(event: &egui::Event, dragging: bool) -> Vec<ViewerEvent> {
    match *event {
        egui::Event::PointerMoved(pos) => {
            let (x, y) = (f64::from(pos.x), f64::from(pos.y));
            let mut out = vec![ViewerEvent::PointerMove { x, y }];
            if dragging {
                out.push(ViewerEvent::PointerDrag { x, y });
            }
            out
        }
        egui::Event::MouseWheel { delta, .. } => vec![ViewerEvent::Scroll {
            offset: f64::from(delta.y),
        }],
        // Only the primary button recenters, other buttons stay with egui
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => {
            let (x, y) = (f64::from(pos.x), f64::from(pos.y));
            if pressed {
                vec![ViewerEvent::Press { x, y }]
            } else {
                vec![ViewerEvent::Release { x, y }]
            }
        }
        egui::Event::Key { .. } => vec![ViewerEvent::Key],
        egui::Event::Text(_) => vec![ViewerEvent::Text],
        _ => Vec::new(),
    }
}

impl App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let draw_time = self.t_render.lock().map(|t| *t).unwrap_or_default();
        let timing = FrameTiming::new(ctx.input(|i| i.unstable_dt));

        let actions = overlay::show(
            ctx,
            &OverlayInput {
                view: &self.interaction.view,
                pointer: &self.interaction.pointer,
                pointer_fractal: self.interaction.pointer_fractal(),
                timing,
                draw_time,
                coloring: self.coloring,
            },
        );

        if let Some(iterations) = actions.iterations {
            self.interaction
                .dispatch(&ViewerEvent::IterationsChanged(iterations), false);
        }
        if actions.reset {
            self.interaction.dispatch(&ViewerEvent::ResetView, false);
        }
        if let Some(coloring) = actions.coloring {
            log::info!("coloring mode -> {}", coloring.label());
            self.coloring = coloring;
        }

        self.paint_fractal(ctx);

        // Continuous redraw keeps the fps readout live
        ctx.request_repaint();
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let (Some(gl), Ok(renderer)) = (gl, self.renderer.lock()) {
            renderer.destroy(gl);
        }
    }
}
