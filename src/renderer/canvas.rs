//! Canvas 2D render adapter (browser only)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::RenderAdapter;
use super::shapes::{DrawCommand, DrawList, frame_commands};
use crate::sim::GameState;

/// Replays draw lists onto a `CanvasRenderingContext2d`
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn replay(&self, list: &DrawList) {
        let ctx = &self.ctx;
        for command in &list.commands {
            match command {
                DrawCommand::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.begin_path();
                    if let Err(e) =
                        ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, PI * 2.0)
                    {
                        log::warn!("arc failed: {:?}", e);
                    }
                    ctx.set_fill_style_str(color);
                    ctx.fill();
                    ctx.close_path();
                }
                DrawCommand::Rect { pos, size, color } => {
                    ctx.begin_path();
                    ctx.rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                    ctx.set_fill_style_str(color);
                    ctx.fill();
                    ctx.close_path();
                }
                DrawCommand::Text {
                    pos,
                    text,
                    font,
                    color,
                } => {
                    ctx.set_font(font);
                    ctx.set_fill_style_str(color);
                    if let Err(e) = ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                        log::warn!("fill_text failed: {:?}", e);
                    }
                }
            }
        }
    }
}

impl RenderAdapter for CanvasRenderer {
    fn draw_frame(&mut self, state: &GameState) {
        self.replay(&frame_commands(state));
    }
}
