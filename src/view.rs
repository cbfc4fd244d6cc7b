//! Interaction state owned by the viewer.

/// Highest escape-time cutoff the overlay slider can produce.
pub const MAX_ITERATIONS: u32 = 2048;

/// The part of the complex plane being shown, plus the cutoff used to
/// colour it. This is the only state pushed to the shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    center: (f64, f64),
    scale: f64,
    iterations: u32,
    aspect_ratio: f64,
}

impl ViewState {
    /// A `scale` or `aspect_ratio` the shader cannot represent falls back to 1.0.
    pub fn new(center: (f64, f64), scale: f64, iterations: u32, aspect_ratio: f64) -> Self {
        let positive = |v: f64| if uniform_safe(v) { v } else { 1.0 };
        Self {
            center,
            scale: positive(scale),
            iterations: iterations.min(MAX_ITERATIONS),
            aspect_ratio: positive(aspect_ratio),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Half-width of the visible region along the shorter axis.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn set_center(&mut self, center: (f64, f64)) {
        self.center = center;
    }

    /// Multiplies the scale by `factor`. A step whose result would reach the
    /// shader as zero, subnormal or infinite is refused and `false` is returned.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        let next = self.scale * factor;
        if uniform_safe(next) {
            self.scale = next;
            true
        } else {
            false
        }
    }

    /// Values above [`MAX_ITERATIONS`] are clamped.
    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations.min(MAX_ITERATIONS);
    }

    pub fn set_aspect_ratio(&mut self, ratio: f64) {
        if uniform_safe(ratio) {
            self.aspect_ratio = ratio;
        }
    }

    /// Real axis bounds, `center.x ± scale`.
    pub fn real_bounds(&self) -> (f64, f64) {
        (self.center.0 - self.scale, self.center.0 + self.scale)
    }

    /// Imaginary axis bounds, `center.y ± scale`.
    pub fn imag_bounds(&self) -> (f64, f64) {
        (self.center.1 - self.scale, self.center.1 + self.scale)
    }
}

/// Positive and still a normal number once narrowed to the `f32` uniform.
fn uniform_safe(v: f64) -> bool {
    v > 0.0 && (v as f32).is_normal()
}

/// Last pointer position seen, in window pixels with the origin top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub last_position: (f64, f64),
}
