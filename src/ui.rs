use ggez;
use ggez::graphics;
use ggez::timer;
use ggez::{GameError, GameResult};

use gfx_core::{handle::RenderTargetView, memory::Typed};
use gfx_device_gl;

use imgui;
use imgui::*;
use imgui_gfx_renderer::*;

use crate::state::GameState;

type GfxRenderer = Renderer<gfx_core::format::Rgba8, gfx_device_gl::Resources>;

// Status bar drawn on top of the simulation
pub struct UiWrapper {
    pub imgui: imgui::Context,
    pub renderer: GfxRenderer,
    hidpi_factor: f32,
}

fn status_lines(state: &GameState, fps: f64) -> Vec<String> {
    let mut lines = Vec::new();
    if state.paused {
        lines.push("PAUSED".to_string());
    }
    lines.push(format!("Day: {:.0}", state.days()));
    lines.push(format!("Scale: {:.1} px/AU", state.scale));
    if !state.show_trails {
        lines.push("Trails off".to_string());
    }
    lines.push(format!("FPS: {:.0}", fps));
    lines
}

fn build_main_menu(ui: &Ui, state: &GameState, fps: f64) {
    // Menus are disabled as they only display information
    let token = ui.push_style_color(StyleColor::TextDisabled, [1.0, 1.0, 1.0, 1.0]);
    ui.main_menu_bar(|| {
        for line in status_lines(state, fps) {
            ui.menu(&ImString::new(line), false, || {});
        }
    });
    token.pop(&ui);
}

fn render_ui(ctx: &mut ggez::Context, ui: Ui, renderer: &mut GfxRenderer) -> GameResult<()> {
    let (factory, _, encoder, _, render_target) = graphics::gfx_objects(ctx);
    let draw_data = ui.render();
    renderer
        .render(
            &mut *factory,
            encoder,
            &mut RenderTargetView::new(render_target.clone()),
            draw_data,
        )
        .map_err(|e| GameError::RenderError(format!("imgui: {:?}", e)))
}

impl UiWrapper {
    pub fn new(ctx: &mut ggez::Context, hidpi_factor: f32) -> GameResult<Self> {
        let mut imgui = imgui::Context::create();
        imgui.set_ini_filename(None::<std::path::PathBuf>);

        let (factory, gfx_device, _, _, _) = graphics::gfx_objects(ctx);
        let shaders = {
            let version = gfx_device.get_info().shading_language;
            if version.is_embedded {
                if version.major >= 3 {
                    Shaders::GlSlEs300
                } else {
                    Shaders::GlSlEs100
                }
            } else if version.major >= 4 {
                Shaders::GlSl400
            } else if version.major >= 3 {
                Shaders::GlSl130
            } else {
                Shaders::GlSl110
            }
        };
        let renderer = Renderer::init(&mut imgui, &mut *factory, shaders)
            .map_err(|e| GameError::RenderError(format!("imgui: {:?}", e)))?;

        Ok(Self {
            imgui,
            renderer,
            hidpi_factor,
        })
    }

    pub fn draw(&mut self, ctx: &mut ggez::Context, state: &GameState) -> GameResult<()> {
        let fps = timer::fps(ctx);
        self.prepare_frame(ctx);

        let ui = self.imgui.frame();
        build_main_menu(&ui, state, fps);
        render_ui(ctx, ui, &mut self.renderer)
    }

    fn prepare_frame(&mut self, ctx: &mut ggez::Context) {
        let io = self.imgui.io_mut();
        let (draw_width, draw_height) = graphics::drawable_size(ctx);
        io.display_size = [draw_width, draw_height];
        io.display_framebuffer_scale = [self.hidpi_factor, self.hidpi_factor];
        // imgui rejects a zero delta on the very first frame
        io.delta_time = timer::duration_to_f64(timer::delta(ctx)).max(1e-4) as f32;
    }
}
