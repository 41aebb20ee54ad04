pub mod components;
pub mod frontend;
pub mod geom;
pub mod params;
pub mod resources;

pub use components::*;
pub use frontend::*;
pub use geom::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;

/// Loop lifecycle. `Terminated` is terminal; there is no pause state and
/// no win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Owns all game state and drives the fixed-timestep simulation.
///
/// Single-threaded by design: every entity is mutated exactly once per
/// tick by the loop thread, so no locking is needed anywhere.
pub struct GameLoop {
    left_paddle: Paddle,
    right_paddle: Paddle,
    ball: Ball,
    score: ScoreBoard,
    state: LoopState,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            ball: Ball::new(),
            score: ScoreBoard::new(),
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    /// Run until a quit signal arrives, at a fixed `TICK_HZ` cadence.
    pub fn run<S, I, C>(&mut self, surface: &mut S, input: &mut I, clock: &mut C)
    where
        S: DisplaySurface,
        I: InputSource,
        C: Clock,
    {
        while self.state == LoopState::Running {
            clock.wait_for_next_tick(Params::TICK_HZ);
            self.tick(surface, input);
        }
    }

    /// One tick: drain input, advance the ball, draw the frame.
    ///
    /// A quit signal anywhere in the drain terminates the loop and skips
    /// the rest of the tick. Every recognized key-down steps its paddle
    /// immediately, so several presses within one tick all apply.
    pub fn tick<S, I>(&mut self, surface: &mut S, input: &mut I)
    where
        S: DisplaySurface,
        I: InputSource,
    {
        while let Some(event) = input.poll() {
            match event {
                InputEvent::Quit => {
                    self.state = LoopState::Terminated;
                    return;
                }
                InputEvent::KeyDown(key) => self.handle_key(key),
            }
        }

        if let Some(scorer) = self.ball.advance(&self.left_paddle, &self.right_paddle) {
            self.score.record_point(scorer);
        }

        self.render(surface);
    }

    fn handle_key(&mut self, key: Key) {
        if key == Params::PADDLE_RIGHT_UP_KEY {
            self.right_paddle.step(Direction::Up);
        } else if key == Params::PADDLE_RIGHT_DOWN_KEY {
            self.right_paddle.step(Direction::Down);
        } else if key == Params::PADDLE_LEFT_UP_KEY {
            self.left_paddle.step(Direction::Up);
        } else if key == Params::PADDLE_LEFT_DOWN_KEY {
            self.left_paddle.step(Direction::Down);
        }
    }

    fn render<S: DisplaySurface>(&self, surface: &mut S) {
        surface.clear(Color::BLACK);

        let (left, right) = self.score.snapshot();
        let text_x = Params::SCREEN_WIDTH / 2.0 - 80.0;
        surface.draw_text(
            &format!("Player 1 (right): {right}"),
            Vec2::new(text_x, Params::TEXT_BUFFER),
            Color::YELLOW,
        );
        surface.draw_text(
            &format!("Player 2 (left):  {left}"),
            Vec2::new(text_x, Params::TEXT_BUFFER * 3.0),
            Color::YELLOW,
        );

        surface.draw_rect(self.left_paddle.bounds(), Color::BLUE);
        surface.draw_rect(self.right_paddle.bounds(), Color::BLUE);
        surface.draw_circle(self.ball.pos, Params::BALL_RADIUS, Color::GREEN);

        surface.present();
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
