//! Draw-list generation for 2D primitives

use glam::Vec2;

use crate::sim::GameState;

/// Fill colour for every game object
pub const FILL_COLOR: &str = "#0095dd";
/// Score font
pub const SCORE_FONT: &str = "20px Arial";
/// Score label distance from the right edge
const SCORE_INSET_X: f32 = 100.0;
/// Score baseline
const SCORE_Y: f32 = 30.0;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    Text {
        pos: Vec2,
        text: String,
        font: &'static str,
        color: &'static str,
    },
}

/// Ordered primitives for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of rectangles, paddle included
    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    /// Text of the first text command, if any
    pub fn text(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Build the draw list for a frame: clear, ball, paddle, score, bricks
///
/// Hidden bricks are skipped.
pub fn frame_commands(state: &GameState) -> DrawList {
    let mut list = DrawList {
        commands: Vec::with_capacity(4 + state.bricks.total()),
    };

    list.push(DrawCommand::Clear {
        width: state.width(),
        height: state.height(),
    });

    list.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.size,
        color: FILL_COLOR,
    });

    let paddle = &state.paddle;
    list.push(DrawCommand::Rect {
        pos: paddle.pos,
        size: Vec2::new(paddle.width, paddle.height),
        color: FILL_COLOR,
    });

    list.push(DrawCommand::Text {
        pos: Vec2::new(state.width() - SCORE_INSET_X, SCORE_Y),
        text: format!("Score: {}", state.score),
        font: SCORE_FONT,
        color: FILL_COLOR,
    });

    for brick in state.bricks.iter().filter(|b| b.visible) {
        list.push(DrawCommand::Rect {
            pos: brick.pos,
            size: brick.size,
            color: FILL_COLOR,
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_full_frame() {
        let state = GameState::new(&Settings::default());
        let list = frame_commands(&state);

        assert_eq!(list.len(), 4 + 45);
        assert_eq!(
            list.commands[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        assert!(matches!(
            list.commands[1],
            DrawCommand::Circle { radius, .. } if radius == 10.0
        ));
        assert_eq!(list.rect_count(), 46);
        assert_eq!(list.text(), Some("Score: 0"));
    }

    #[test]
    fn test_hidden_bricks_skipped() {
        let mut state = GameState::new(&Settings::default());
        state.score = 3;
        for brick in state.bricks.iter_mut().take(3) {
            brick.visible = false;
        }

        let list = frame_commands(&state);
        assert_eq!(list.rect_count(), 1 + 42);
        assert_eq!(list.text(), Some("Score: 3"));
    }

    #[test]
    fn test_score_position_follows_surface() {
        let state = GameState::new(&Settings::for_surface(1000.0, 700.0));
        let list = frame_commands(&state);
        let pos = list.commands.iter().find_map(|c| match c {
            DrawCommand::Text { pos, .. } => Some(*pos),
            _ => None,
        });
        assert_eq!(pos, Some(Vec2::new(900.0, 30.0)));
    }
}
