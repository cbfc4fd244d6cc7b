use eframe::glow::{self, HasContext};

use crate::error::{Result, ViewerError};
use crate::palette::Palette;
use crate::shaders::{self, ColoringMode};
use crate::view::ViewState;

/// One frame's worth of shader inputs, snapshotted from [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniforms {
    pub center: [f32; 2],
    pub scale: f32,
    pub ratio: f32,
    pub iterations: i32,
}

impl From<&ViewState> for Uniforms {
    fn from(view: &ViewState) -> Self {
        let (cx, cy) = view.center();
        Self {
            center: [cx as f32, cy as f32],
            scale: view.scale() as f32,
            ratio: view.aspect_ratio() as f32,
            iterations: i32::try_from(view.iterations()).unwrap_or(i32::MAX),
        }
    }
}

/// GL objects for drawing the fractal quad. Created once at startup and
/// released by [`RenderDriver::destroy`].
pub struct RenderDriver {
    programs: [glow::Program; 2], // Indexed by ColoringMode::index
    vao: glow::VertexArray,       // Empty, vertices come from gl_VertexID
    palette: glow::Texture,       // width x 1 RGBA lookup table
    background: [f32; 3],
}

impl RenderDriver {
    pub fn new(gl: &glow::Context, palette: &Palette, background: [f32; 3]) -> Result<Self> {
        unsafe {
            let programs = [
                Self::compile_program(gl, ColoringMode::EscapeTime)?,
                Self::compile_program(gl, ColoringMode::Smooth)?,
            ];
            let vao = gl
                .create_vertex_array()
                .map_err(|reason| ViewerError::GlResource { what: "vertex array", reason })?;
            let palette = Self::upload_palette(gl, palette)?;

            log::info!("compiled {} shader variants", programs.len());
            Ok(Self {
                programs,
                vao,
                palette,
                background,
            })
        }
    }

    unsafe fn compile_program(gl: &glow::Context, mode: ColoringMode) -> Result<glow::Program> {
        let program = gl
            .create_program()
            .map_err(|reason| ViewerError::GlResource { what: "program", reason })?;

        let shader_sources = [
            (glow::VERTEX_SHADER, "vertex", shaders::VERTEX_SHADER),
            (glow::FRAGMENT_SHADER, mode.label(), mode.fragment_source()),
        ];

        let mut shaders = Vec::with_capacity(shader_sources.len());
        for (shader_type, stage, shader_source) in shader_sources {
            let shader = gl
                .create_shader(shader_type)
                .map_err(|reason| ViewerError::GlResource { what: "shader", reason })?;

            gl.shader_source(shader, &shaders::versioned(shader_source));
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                for shader in shaders {
                    gl.delete_shader(shader);
                }
                gl.delete_program(program);
                return Err(ViewerError::ShaderCompile { stage, log });
            }

            gl.attach_shader(program, shader);
            shaders.push(shader);
        }

        gl.link_program(program);
        let linked = gl.get_program_link_status(program);

        // Shaders are part of the program once linked
        for shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        if !linked {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(ViewerError::ProgramLink(log));
        }

        Ok(program)
    }

    unsafe fn upload_palette(gl: &glow::Context, palette: &Palette) -> Result<glow::Texture> {
        let texture = gl
            .create_texture()
            .map_err(|reason| ViewerError::GlResource { what: "palette texture", reason })?;
        let width = i32::try_from(palette.len()).map_err(|_| ViewerError::GlResource {
            what: "palette texture",
            reason: format!("palette too wide: {}", palette.len()),
        })?;
        let bytes = palette.as_bytes();

        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        // Rows are tightly packed RGBA
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGBA8 as i32,
            width,
            1,
            0,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelUnpackData::Slice(Some(&bytes)),
        );

        // Linear between entries, no wrap past either end of the palette
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
        gl.bind_texture(glow::TEXTURE_2D, None);

        let error = gl.get_error();
        if error != glow::NO_ERROR {
            gl.delete_texture(texture);
            return Err(ViewerError::GlResource {
                what: "palette texture",
                reason: format!("GL error {error:#x} during upload"),
            });
        }

        Ok(texture)
    }

    /// Clears the current viewport and draws the quad with `uniforms`.
    pub fn paint(&self, gl: &glow::Context, uniforms: &Uniforms, mode: ColoringMode) {
        let program = self.programs[mode.index()];

        unsafe {
            // Scissored to the callback rect by egui_glow
            let [r, g, b] = self.background;
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(program));
            gl.bind_vertex_array(Some(self.vao));

            // Palette on unit 0
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.palette));
            gl.uniform_1_i32(gl.get_uniform_location(program, "Texture").as_ref(), 0);

            gl.uniform_2_f32(
                gl.get_uniform_location(program, "Center").as_ref(),
                uniforms.center[0],
                uniforms.center[1],
            );
            gl.uniform_1_f32(gl.get_uniform_location(program, "Scale").as_ref(), uniforms.scale);
            gl.uniform_1_f32(gl.get_uniform_location(program, "Ratio").as_ref(), uniforms.ratio);
            gl.uniform_1_i32(gl.get_uniform_location(program, "Iter").as_ref(), uniforms.iterations);

            // Two triangles covering the viewport
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);

            let error = gl.get_error();
            if error != glow::NO_ERROR {
                log::warn!("OpenGL error during rendering: {error:#x}");
            }

            // Leave the state egui expects
            gl.bind_texture(glow::TEXTURE_2D, None);
            gl.bind_vertex_array(None);
            gl.use_program(None);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            for program in self.programs {
                gl.delete_program(program);
            }
            gl.delete_vertex_array(self.vao);
            gl.delete_texture(self.palette);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_snapshot_the_view() {
        let view = ViewState::new((0.5, -0.25), 1.5, 100, 16.0 / 9.0);
        let uniforms = Uniforms::from(&view);
        assert_eq!(uniforms.center, [0.5, -0.25]);
        assert_eq!(uniforms.scale, 1.5);
        assert_eq!(uniforms.iterations, 100);
        assert!((uniforms.ratio - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_iterations_reach_the_shader_as_zero() {
        let view = ViewState::new((0.0, 0.0), 1.0, 0, 1.0);
        assert_eq!(Uniforms::from(&view).iterations, 0);
    }
}
