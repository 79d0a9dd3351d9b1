use ggez::graphics::{self, Color, DrawMode, DrawParam, Font, Text};
use ggez::{Context, GameResult};
use nalgebra::Point2;

use crate::body::Body;
use crate::state::GameState;

const LABEL_SIZE: f32 = 16.0;
const TRAIL_WIDTH: f32 = 1.0;

/// Draws bodies, their names and their trails.
///
/// Holds no simulation state; everything is read from the `GameState`
/// passed in each frame.
pub struct Renderer {
    font: Font,
}

impl Renderer {
    pub fn new(font: Font) -> Self {
        Renderer { font }
    }

    pub fn draw(&self, ctx: &mut Context, state: &GameState) -> GameResult<()> {
        graphics::clear(ctx, Color::new(0.0, 0.0, 0.0, 1.0));

        if state.show_trails {
            for b in state.registry.iter() {
                self.draw_trail(ctx, state, b)?;
            }
        }
        for b in state.registry.iter() {
            self.draw_body(ctx, state, b)?;
        }
        Ok(())
    }

    fn draw_trail(&self, ctx: &mut Context, state: &GameState, body: &Body) -> GameResult<()> {
        let points: Vec<Point2<f32>> = body
            .trail
            .iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p| state.global_to_local_coords(p))
            .collect();
        // A polyline needs two distinct points
        if points.len() < 2 || points.iter().all(|p| *p == points[0]) {
            return Ok(());
        }

        let line = graphics::Mesh::new_line(ctx, &points, TRAIL_WIDTH, Color::from(body.color))?;
        graphics::draw(ctx, &line, DrawParam::default())
    }

    fn draw_body(&self, ctx: &mut Context, state: &GameState, body: &Body) -> GameResult<()> {
        if !body.is_finite() {
            return Ok(());
        }

        let circle = graphics::Mesh::new_circle(
            ctx,
            DrawMode::fill(),
            Point2::new(0.0, 0.0),
            body.radius,
            0.1,
            Color::from(body.color),
        )?;

        let dest = state.global_to_local_coords(&body.pos);
        graphics::draw(ctx, &circle, DrawParam::default().dest(dest))?;

        if let Some(name) = &body.name {
            let text = Text::new((name.as_str(), self.font, LABEL_SIZE));
            let (w, h) = text.dimensions(ctx);
            let label_dest = Point2::new(
                dest.x - w as f32 / 2.0,
                dest.y - h as f32 - body.radius,
            );
            graphics::draw(ctx, &text, DrawParam::default().dest(label_dest))?;
        }
        Ok(())
    }
}
