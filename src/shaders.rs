//! GLSL sources for the full-screen quad and the two colouring variants.
//!
//! Uniform names (`Texture`, `Center`, `Scale`, `Ratio`, `Iter`) are shared
//! with [`crate::render`] and must stay in sync with it.

#[cfg(target_arch = "wasm32")]
const VERSION: &str = "#version 300 es";
#[cfg(not(target_arch = "wasm32"))]
const VERSION: &str = "#version 330";

// Fullscreen quad as a 4-vertex triangle strip, no vertex buffer needed
pub const VERTEX_SHADER: &str = r#"
    precision highp float;

    out vec2 v_text;

    void main() {
        vec2 positions[4] = vec2[](
            vec2(-1.0, -1.0), // Bottom-left
            vec2(-1.0,  1.0), // Top-left
            vec2( 1.0, -1.0), // Bottom-right
            vec2( 1.0,  1.0)  // Top-right
        );
        v_text = positions[gl_VertexID];
        gl_Position = vec4(v_text, 0.0, 1.0);
    }
"#;

// Plain escape-time count looked up in the palette
const ESCAPE_TIME_SHADER: &str = r#"
    precision highp float;

    in vec2 v_text;
    out vec4 f_color;

    uniform sampler2D Texture;
    uniform vec2 Center;
    uniform float Scale;
    uniform float Ratio;
    uniform int Iter;

    void main() {
        vec2 c;
        int i;

        c.x = Ratio * v_text.x * Scale - Center.x;
        c.y = v_text.y * Scale - Center.y;

        vec2 z = c;

        for (i = 0; i < Iter; i++) {
            float x = (z.x * z.x - z.y * z.y) + c.x;
            float y = (z.y * z.x + z.x * z.y) + c.y;

            if ((x * x + y * y) > 4.0) {
                break;
            }

            z.x = x;
            z.y = y;
        }

        float t = (i == Iter) ? 0.0 : float(i) / float(Iter);
        f_color = texture(Texture, vec2(t, 0.5));
    }
"#;

// Continuous iteration count, black inside the set
const SMOOTH_SHADER: &str = r#"
    precision highp float;

    in vec2 v_text;
    out vec4 f_color;

    uniform sampler2D Texture;
    uniform vec2 Center;
    uniform float Scale;
    uniform float Ratio;
    uniform int Iter;

    void main() {
        vec2 c;
        int i;

        c.x = Ratio * v_text.x * Scale - Center.x;
        c.y = v_text.y * Scale - Center.y;

        vec2 z = c;

        for (i = 0; i < Iter; i++) {
            z = vec2(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y) + c;

            if (dot(z, z) > 4.0) {
                break;
            }
        }

        if (i == Iter) {
            f_color = vec4(0.0, 0.0, 0.0, 1.0);
            return;
        }

        // log(log|z|) renormalisation, |z| > 2 here so both logs are defined
        float log_zn = log(dot(z, z)) / 2.0;
        float nu = log(log_zn / log(2.0)) / log(2.0);
        float smooth_i = float(i) + 1.0 - nu;

        float t = clamp(smooth_i / float(Iter), 0.0, 1.0);
        f_color = texture(Texture, vec2(t, 0.5));
    }
"#;

/// Which fragment shader colours the fractal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColoringMode {
    #[default]
    EscapeTime,
    Smooth,
}

impl ColoringMode {
    pub const ALL: [ColoringMode; 2] = [ColoringMode::EscapeTime, ColoringMode::Smooth];

    pub fn label(self) -> &'static str {
        match self {
            ColoringMode::EscapeTime => "Escape time",
            ColoringMode::Smooth => "Smooth",
        }
    }

    pub fn fragment_source(self) -> &'static str {
        match self {
            ColoringMode::EscapeTime => ESCAPE_TIME_SHADER,
            ColoringMode::Smooth => SMOOTH_SHADER,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ColoringMode::EscapeTime => 0,
            ColoringMode::Smooth => 1,
        }
    }
}

/// Prefixes `body` with the GLSL version line for the current target.
pub fn versioned(body: &str) -> String {
    format!("{VERSION}\n{body}")
}
