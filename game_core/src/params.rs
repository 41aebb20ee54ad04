use crate::frontend::Key;

/// Fixed tuning parameters for the game
///
/// Everything here is decided at build time; there is no runtime
/// configuration.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_SPEED: f32 = 30.0; // px per tick
    pub const PADDLE_WALL_TOP: f32 = 0.0;
    pub const PADDLE_WALL_BOTTOM: f32 = Self::SCREEN_HEIGHT - Self::PADDLE_HEIGHT;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 4.0; // px per tick
    pub const BALL_SPEED_Y: f32 = 2.0;
    // Wall bounds are inset by the radius so they apply to the ball's center.
    pub const BALL_WALL_TOP: f32 = Self::BALL_RADIUS;
    pub const BALL_WALL_BOTTOM: f32 = Self::SCREEN_HEIGHT - Self::BALL_RADIUS;
    pub const BALL_WALL_LEFT: f32 = Self::BALL_RADIUS;
    pub const BALL_WALL_RIGHT: f32 = Self::SCREEN_WIDTH - Self::BALL_RADIUS;

    // Loop
    pub const TICK_HZ: u32 = 50;

    // HUD
    pub const TEXT_BUFFER: f32 = 10.0;

    // Keybindings (player 1 is the right paddle, player 2 the left)
    pub const PADDLE_RIGHT_UP_KEY: Key = Key::Up;
    pub const PADDLE_RIGHT_DOWN_KEY: Key = Key::Down;
    pub const PADDLE_LEFT_UP_KEY: Key = Key::Char('q');
    pub const PADDLE_LEFT_DOWN_KEY: Key = Key::Char('a');
}
