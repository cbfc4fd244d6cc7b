use mandelbrot_viewer::{
    screen_to_fractal, Interaction, Outcome, ViewerConfig, ViewerEvent, WindowSize,
    MAX_ITERATIONS,
};

fn viewer() -> Interaction {
    Interaction::new(&ViewerConfig::default())
}

#[test]
fn hd_window_center_is_a_fixed_point() {
    let state = viewer();
    let size = state.window().expect("default window has an area");
    assert_eq!((size.width(), size.height()), (1280.0, 720.0));
    assert_eq!(screen_to_fractal((640.0, 360.0), size, &state.view), (0.5, 0.0));
}

#[test]
fn press_recenters_on_the_pre_press_mapping() {
    let mut state = viewer();
    let size = state.window().unwrap();
    let expected = screen_to_fractal((320.0, 180.0), size, &state.view);

    let outcome = state.dispatch(&ViewerEvent::Press { x: 320.0, y: 180.0 }, false);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(state.view.center(), expected);
    // Left of center lands right of the old center: the horizontal flip.
    assert!(expected.0 > 0.5);
    assert!(expected.1 < 0.0);
}

#[test]
fn captured_press_leaves_center_unchanged() {
    let mut state = viewer();
    let outcome = state.dispatch(&ViewerEvent::Press { x: 10.0, y: 10.0 }, true);
    assert_eq!(outcome, Outcome::Captured);
    assert_eq!(state.view.center(), (0.5, 0.0));
}

#[test]
fn repeated_scrolls_are_geometric() {
    let mut state = viewer();
    let mut expected = state.view.scale();
    for _ in 0..50 {
        let before = state.view.scale();
        state.dispatch(&ViewerEvent::Scroll { offset: 1.0 }, false);
        expected *= 1.05;
        assert!(state.view.scale() > before);
        assert_eq!(state.view.scale(), expected);
    }
    for _ in 0..50 {
        let before = state.view.scale();
        state.dispatch(&ViewerEvent::Scroll { offset: -1.0 }, false);
        expected *= 0.95;
        assert!(state.view.scale() < before);
        assert_eq!(state.view.scale(), expected);
    }
}

#[test]
fn slider_values_are_taken_exactly() {
    let mut state = viewer();
    for v in [0, 1, 100, 1024, 2047, MAX_ITERATIONS] {
        state.dispatch(&ViewerEvent::IterationsChanged(v), false);
        assert_eq!(state.view.iterations(), v);
    }
}

#[test]
fn pointer_fractal_follows_pointer_and_view() {
    let mut state = viewer();
    state.dispatch(&ViewerEvent::PointerMove { x: 640.0, y: 360.0 }, true);
    assert_eq!(state.pointer_fractal(), Some((0.5, 0.0)));

    state.dispatch(&ViewerEvent::PointerMove { x: 0.0, y: 0.0 }, false);
    let size = WindowSize::new(1280.0, 720.0).unwrap();
    assert_eq!(
        state.pointer_fractal(),
        Some(screen_to_fractal((0.0, 0.0), size, &state.view))
    );
}

#[test]
fn shader_scale_stays_positive_and_finite_at_zoom_extremes() {
    use mandelbrot_viewer::render::Uniforms;

    let mut state = viewer();
    for _ in 0..2100 {
        state.dispatch(&ViewerEvent::Scroll { offset: -1.0 }, false);
        let scale = Uniforms::from(&state.view).scale;
        assert!(scale.is_finite() && scale > 0.0, "scale uniform {scale}");
    }
    assert_eq!(
        state.dispatch(&ViewerEvent::Scroll { offset: -1.0 }, false),
        Outcome::Ignored
    );

    let mut state = viewer();
    for _ in 0..1900 {
        state.dispatch(&ViewerEvent::Scroll { offset: 1.0 }, false);
        let scale = Uniforms::from(&state.view).scale;
        assert!(scale.is_finite() && scale > 0.0, "scale uniform {scale}");
    }
    assert_eq!(
        state.dispatch(&ViewerEvent::Scroll { offset: 1.0 }, false),
        Outcome::Ignored
    );
}
