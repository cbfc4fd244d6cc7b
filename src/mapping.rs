//! Pixel to complex-plane mapping.
//!
//! The shader subtracts the `Center` uniform from the plane point it renders,
//! so the viewer's center lives in that negated space. Mapping a pixel with
//! the horizontal axis flipped and the vertical axis direct lands on exactly
//! that space, which is why a click recenters on the clicked spot.

use crate::view::ViewState;

/// Window extent in pixels. Both sides are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    width: f64,
    height: f64,
}

impl WindowSize {
    /// `None` for a zero-area (e.g. minimised) window.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            .then_some(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Maps pixel `(px, py)` to the point it selects for `view`.
pub fn screen_to_fractal(pixel: (f64, f64), size: WindowSize, view: &ViewState) -> (f64, f64) {
    let (cx, cy) = view.center();
    let scale = view.scale();

    let fx_min = cx - scale;
    let fy_min = cy - scale;

    let fx = (1.0 - pixel.0 / size.width) * (2.0 * scale) + fx_min;
    let fy = (pixel.1 / size.height) * (2.0 * scale) + fy_min;

    (fx, fy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hd() -> WindowSize {
        WindowSize::new(1280.0, 720.0).unwrap()
    }

    #[test]
    fn window_center_maps_to_view_center() {
        let view = ViewState::new((0.5, 0.0), 1.5, 100, 16.0 / 9.0);
        assert_eq!(screen_to_fractal((640.0, 360.0), hd(), &view), (0.5, 0.0));
    }

    #[test]
    fn horizontal_axis_is_mirrored() {
        let view = ViewState::new((0.5, 0.0), 1.5, 100, 16.0 / 9.0);
        // Left edge lands on center.x + scale, top edge on center.y - scale.
        assert_eq!(screen_to_fractal((0.0, 360.0), hd(), &view), (2.0, 0.0));
        assert_eq!(screen_to_fractal((1280.0, 360.0), hd(), &view), (-1.0, 0.0));
        assert_eq!(screen_to_fractal((640.0, 0.0), hd(), &view), (0.5, -1.5));
        assert_eq!(screen_to_fractal((640.0, 720.0), hd(), &view), (0.5, 1.5));
    }

    #[test]
    fn doubling_scale_doubles_offset_from_center() {
        let size = WindowSize::new(800.0, 600.0).unwrap();
        let center = (-0.75, 0.25);
        let narrow = ViewState::new(center, 0.5, 100, 4.0 / 3.0);
        let wide = ViewState::new(center, 1.0, 100, 4.0 / 3.0);

        for pixel in [(0.0, 0.0), (123.0, 456.0), (800.0, 17.5), (399.0, 301.0)] {
            let a = screen_to_fractal(pixel, size, &narrow);
            let b = screen_to_fractal(pixel, size, &wide);
            let da = (a.0 - center.0, a.1 - center.1);
            let db = (b.0 - center.0, b.1 - center.1);
            assert!((db.0 - 2.0 * da.0).abs() < 1e-12);
            assert!((db.1 - 2.0 * da.1).abs() < 1e-12);
        }
    }

    #[test]
    fn mapping_is_deterministic_and_continuous() {
        let size = hd();
        let view = ViewState::new((0.1, -0.2), 0.75, 100, 16.0 / 9.0);
        let p = screen_to_fractal((300.0, 200.0), size, &view);
        assert_eq!(p, screen_to_fractal((300.0, 200.0), size, &view));

        let q = screen_to_fractal((300.001, 200.001), size, &view);
        assert!((p.0 - q.0).abs() < 1e-5);
        assert!((p.1 - q.1).abs() < 1e-5);
    }

    #[test]
    fn zero_area_window_is_rejected() {
        assert!(WindowSize::new(0.0, 720.0).is_none());
        assert!(WindowSize::new(1280.0, 0.0).is_none());
        assert!(WindowSize::new(-1.0, 10.0).is_none());
        assert_eq!(hd().aspect_ratio(), 1280.0 / 720.0);
    }
}
