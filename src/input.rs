//! Input events and the table of state transitions they drive.
//!
//! Every event reaches the UI backend before it gets here. Transitions
//! marked [`Gate::Uncaptured`] are skipped when the UI claimed the event.

use crate::config::{ViewerConfig, ZoomFactors};
use crate::mapping::{screen_to_fractal, WindowSize};
use crate::view::{PointerState, ViewState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent {
    PointerMove { x: f64, y: f64 },
    PointerDrag { x: f64, y: f64 },
    /// Positive offset is scroll up.
    Scroll { offset: f64 },
    Press { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    Key,
    Text,
    Resize { width: f64, height: f64 },
    IterationsChanged(u32),
    ResetView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerMove,
    PointerDrag,
    Scroll,
    Press,
    Release,
    Key,
    Text,
    Resize,
    IterationsChanged,
    ResetView,
}

impl ViewerEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ViewerEvent::PointerMove { .. } => EventKind::PointerMove,
            ViewerEvent::PointerDrag { .. } => EventKind::PointerDrag,
            ViewerEvent::Scroll { .. } => EventKind::Scroll,
            ViewerEvent::Press { .. } => EventKind::Press,
            ViewerEvent::Release { .. } => EventKind::Release,
            ViewerEvent::Key => EventKind::Key,
            ViewerEvent::Text => EventKind::Text,
            ViewerEvent::Resize { .. } => EventKind::Resize,
            ViewerEvent::IterationsChanged(_) => EventKind::IterationsChanged,
            ViewerEvent::ResetView => EventKind::ResetView,
        }
    }
}

/// Whether a transition runs regardless of UI capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    Uncaptured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed.
    Applied,
    /// The UI claimed the event.
    Captured,
    /// Nothing to do for this event.
    Ignored,
}

type Transition = fn(&mut Interaction, &ViewerEvent) -> Outcome;

const DISPATCH: [(EventKind, Gate, Transition); 10] = [
    (EventKind::PointerMove, Gate::Always, pointer_moved),
    (EventKind::PointerDrag, Gate::Always, forwarded_only),
    (EventKind::Scroll, Gate::Uncaptured, scrolled),
    (EventKind::Press, Gate::Uncaptured, pressed),
    (EventKind::Release, Gate::Always, forwarded_only),
    (EventKind::Key, Gate::Always, forwarded_only),
    (EventKind::Text, Gate::Always, forwarded_only),
    (EventKind::Resize, Gate::Always, resized),
    (EventKind::IterationsChanged, Gate::Always, iterations_changed),
    (EventKind::ResetView, Gate::Always, reset_view),
];

/// The viewer's mutable state: what is shown, where the pointer is, and
/// the window it is shown in.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub view: ViewState,
    pub pointer: PointerState,
    window: Option<WindowSize>,
    initial: ViewState,
    zoom: ZoomFactors,
}

impl Interaction {
    pub fn new(config: &ViewerConfig) -> Self {
        let view = config.initial_view_state();
        Self {
            view,
            pointer: PointerState::default(),
            window: WindowSize::new(
                f64::from(config.window_size.0),
                f64::from(config.window_size.1),
            ),
            initial: view,
            zoom: config.zoom,
        }
    }

    pub fn window(&self) -> Option<WindowSize> {
        self.window
    }

    /// Fractal point under the pointer, if the window has an area.
    pub fn pointer_fractal(&self) -> Option<(f64, f64)> {
        self.window
            .map(|size| screen_to_fractal(self.pointer.last_position, size, &self.view))
    }

    /// Runs the table entry for `event`. `ui_captured` is what the UI
    /// backend reported for this event.
    pub fn dispatch(&mut self, event: &ViewerEvent, ui_captured: bool) -> Outcome {
        let kind = event.kind();
        let Some((_, gate, transition)) = DISPATCH.iter().find(|(k, _, _)| *k == kind) else {
            return Outcome::Ignored;
        };

        if *gate == Gate::Uncaptured && ui_captured {
            return Outcome::Captured;
        }

        let outcome = transition(self, event);
        if outcome == Outcome::Applied {
            log::trace!("{kind:?} applied, view now {:?}", self.view);
        }
        outcome
    }
}

fn pointer_moved(state: &mut Interaction, event: &ViewerEvent) -> Outcome {
    let ViewerEvent::PointerMove { x, y } = *event else {
        return Outcome::Ignored;
    };
    state.pointer.last_position = (x, y);
    Outcome::Applied
}

fn scrolled(state: &mut Interaction, event: &ViewerEvent) -> Outcome {
    let ViewerEvent::Scroll { offset } = *event else {
        return Outcome::Ignored;
    };
    let factor = if offset > 0.0 {
        state.zoom.scroll_up
    } else if offset < 0.0 {
        state.zoom.scroll_down
    } else {
        return Outcome::Ignored;
    };

    if state.view.zoom_by(factor) {
        Outcome::Applied
    } else {
        log::warn!("zoom step refused at scale {}", state.view.scale());
        Outcome::Ignored
    }
}

fn pressed(state: &mut Interaction, event: &ViewerEvent) -> Outcome {
    let ViewerEvent::Press { x, y } = *event else {
        return Outcome::Ignored;
    };
    let Some(size) = state.window else {
        return Outcome::Ignored;
    };

    let target = screen_to_fractal((x, y), size, &state.view);
    log::debug!("recenter on ({x}, {y}) -> {target:?}");
    state.view.set_center(target);
    Outcome::Applied
}

fn resized(state: &mut Interaction, event: &ViewerEvent) -> Outcome {
    let ViewerEvent::Resize { width, height } = *event else {
        return Outcome::Ignored;
    };
    if state.window.map(|w| (w.width(), w.height())) == Some((width, height)) {
        return Outcome::Ignored;
    }

    state.window = WindowSize::new(width, height);
    match state.window {
        Some(size) => {
            state.view.set_aspect_ratio(size.aspect_ratio());
            Outcome::Applied
        }
        None => Outcome::Ignored,
    }
}

fn iterations_changed(state: &mut Interaction, event: &ViewerEvent) -> Outcome {
    let ViewerEvent::IterationsChanged(iterations) = *event else {
        return Outcome::Ignored;
    };
    state.view.set_iterations(iterations);
    Outcome::Applied
}

fn reset_view(state: &mut Interaction, _: &ViewerEvent) -> Outcome {
    let ratio = state.view.aspect_ratio();
    state.view = state.initial;
    state.view.set_aspect_ratio(ratio);
    Outcome::Applied
}

fn forwarded_only(_: &mut Interaction, _: &ViewerEvent) -> Outcome {
    Outcome::Ignored
}
