use clap::Parser;
use tracing::{error, info};

use ggez;
use ggez::conf;
use ggez::event::{self, KeyCode, KeyMods};
use ggez::graphics::{self, Font};
use ggez::input::mouse;
use ggez::timer;
use ggez::{Context, ContextBuilder, GameError, GameResult};

use heavens::config::Config;
use heavens::render::Renderer;
use heavens::scenario;
use heavens::state::GameState;
use heavens::ui::UiWrapper;

const ZOOM_STEP: f64 = 1.25;

struct Game {
    // Kept apart so the state can be borrowed while drawing
    state: GameState,
    renderer: Renderer,
    ui: UiWrapper,
    fps: u32,
}

impl Game {
    fn new(ctx: &mut Context, config: &Config) -> GameResult<Game> {
        let state = GameState::new(config, scenario::solar_system(config.trail_len));
        let ui = UiWrapper::new(ctx, 1.0)?;
        Ok(Game {
            state,
            renderer: Renderer::new(Font::default()),
            ui,
            fps: config.fps,
        })
    }
}

impl event::EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        // Ticks missed during a stall are dropped, not caught up
        let mut due_ticks = 0;
        while timer::check_update_time(ctx, self.fps) {
            due_ticks += 1;
        }
        self.state.frame(due_ticks);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        self.renderer.draw(ctx, &self.state)?;
        self.ui.draw(ctx, &self.state)?;
        graphics::present(ctx)?;
        timer::yield_now();
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, key: KeyCode, _mods: KeyMods, _: bool) {
        match key {
            KeyCode::Q | KeyCode::Escape => event::quit(ctx),
            KeyCode::P => self.state.paused = !self.state.paused,
            KeyCode::T => self.state.show_trails = !self.state.show_trails,
            KeyCode::Up => self.state.zoom(ZOOM_STEP),
            KeyCode::Down => self.state.zoom(1.0 / ZOOM_STEP),
            _ => (),
        }
    }

    fn mouse_motion_event(&mut self, ctx: &mut Context, _x: f32, _y: f32, dx: f32, dy: f32) {
        if mouse::button_pressed(ctx, mouse::MouseButton::Left) {
            self.state.pan(dx, dy);
        }
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> bool {
        info!(days = self.state.days(), "quitting");
        false
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();
}

fn main() -> GameResult {
    init_tracing();

    let config = Config::parse();
    if let Err(e) = config.validate() {
        error!("invalid configuration: {}", e);
        return Err(GameError::ConfigError(e.to_string()));
    }
    info!(?config, "loaded configuration");

    let w = config.width as f32;
    let h = config.height as f32;
    let cb = ContextBuilder::new("heavens", "heavens")
        .window_setup(conf::WindowSetup::default().title("Planet System Simulation"))
        .window_mode(conf::WindowMode::default().dimensions(w, h).resizable(false));
    let (ctx, event_loop) = &mut cb.build()?;
    graphics::set_screen_coordinates(ctx, graphics::Rect::new(0.0, 0.0, w, h))?;

    let game = &mut Game::new(ctx, &config)?;
    event::run(ctx, event_loop, game)
}
