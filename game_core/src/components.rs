use glam::Vec2;

use crate::geom::Aabb;
use crate::params::Params;

/// Which edge of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Vertical movement request for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A player's paddle, pinned to the left or right edge of the field
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    side: Side,
    top_y: f32,
}

impl Paddle {
    /// Spawn vertically centered on the given side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            top_y: (Params::SCREEN_HEIGHT - Params::PADDLE_HEIGHT) / 2.0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn top_y(&self) -> f32 {
        self.top_y
    }

    /// X of the paddle's left edge, fixed by its side
    pub fn x(&self) -> f32 {
        match self.side {
            Side::Left => 0.0,
            Side::Right => Params::SCREEN_WIDTH - Params::PADDLE_WIDTH,
        }
    }

    /// Move one step toward `dir`, then clamp to the field.
    ///
    /// Clamping, not rejection: at a wall the paddle overshoots and is
    /// pulled back to the exact bound, so repeated steps into the wall
    /// are no-ops.
    pub fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.top_y -= Params::PADDLE_SPEED,
            Direction::Down => self.top_y += Params::PADDLE_SPEED,
        }
        self.top_y = self
            .top_y
            .clamp(Params::PADDLE_WALL_TOP, Params::PADDLE_WALL_BOTTOM);
    }

    /// Collision box recomputed from the current position
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x(), self.top_y),
            Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
        )
    }
}

/// The pong ball
///
/// Velocity component magnitudes are fixed; collisions only flip signs.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Spawn at screen center, heading down-right
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(Params::SCREEN_WIDTH / 2.0, Params::SCREEN_HEIGHT / 2.0),
            vel: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
        }
    }

    /// Bounding box of the drawn circle
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(Params::BALL_RADIUS * 2.0))
    }

    /// Advance one tick, bouncing off paddles and walls.
    ///
    /// Returns the side that earned a point when the ball crossed a goal
    /// line. Paddle hits are checked before the goal line, so a paddle
    /// that reaches the ball on the same tick it crosses still saves the
    /// point. The x-axis branches are mutually exclusive; the vertical
    /// bounce below is applied independently of them.
    pub fn advance(&mut self, left: &Paddle, right: &Paddle) -> Option<Side> {
        self.pos += self.vel;

        let bounds = self.bounds();
        let mut scorer = None;

        if bounds.intersects(&right.bounds()) {
            self.pos.x = Params::BALL_WALL_RIGHT - Params::PADDLE_WIDTH;
            self.vel.x = -Params::BALL_SPEED_X;
        } else if bounds.intersects(&left.bounds()) {
            self.pos.x = Params::BALL_WALL_LEFT + Params::PADDLE_WIDTH;
            self.vel.x = Params::BALL_SPEED_X;
        } else if self.pos.x >= Params::BALL_WALL_RIGHT {
            scorer = Some(Side::Left);
            self.pos.x = Params::BALL_WALL_RIGHT;
            self.vel.x = -Params::BALL_SPEED_X;
        } else if self.pos.x <= Params::BALL_WALL_LEFT {
            scorer = Some(Side::Right);
            self.pos.x = Params::BALL_WALL_LEFT;
            self.vel.x = Params::BALL_SPEED_X;
        }

        if self.pos.y >= Params::BALL_WALL_BOTTOM {
            self.pos.y = Params::BALL_WALL_BOTTOM;
            self.vel.y = -Params::BALL_SPEED_Y;
        } else if self.pos.y <= Params::BALL_WALL_TOP {
            self.pos.y = Params::BALL_WALL_TOP;
            self.vel.y = Params::BALL_SPEED_Y;
        }

        scorer
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddles() -> (Paddle, Paddle) {
        (Paddle::new(Side::Left), Paddle::new(Side::Right))
    }

    /// Park a paddle well away from the ball's path
    fn parked(side: Side) -> Paddle {
        let mut p = Paddle::new(side);
        for _ in 0..20 {
            p.step(Direction::Down);
        }
        p
    }

    #[test]
    fn test_paddle_spawns_centered() {
        let p = Paddle::new(Side::Left);
        assert_eq!(p.top_y(), 210.0);
        assert_eq!(p.x(), 0.0);
        assert_eq!(
            Paddle::new(Side::Right).x(),
            Params::SCREEN_WIDTH - Params::PADDLE_WIDTH
        );
    }

    #[test]
    fn test_paddle_stops_at_top_wall() {
        let mut p = Paddle::new(Side::Left);
        for _ in 0..100 {
            p.step(Direction::Up);
        }
        assert_eq!(p.top_y(), Params::PADDLE_WALL_TOP, "clamped, never negative");
        p.step(Direction::Up);
        assert_eq!(p.top_y(), Params::PADDLE_WALL_TOP, "further presses are no-ops");
    }

    #[test]
    fn test_paddle_stops_at_bottom_wall() {
        let mut p = Paddle::new(Side::Right);
        for _ in 0..100 {
            p.step(Direction::Down);
        }
        assert_eq!(p.top_y(), Params::PADDLE_WALL_BOTTOM);
        p.step(Direction::Down);
        assert_eq!(p.top_y(), Params::PADDLE_WALL_BOTTOM);
    }

    #[test]
    fn test_paddle_bounds_track_position() {
        let mut p = Paddle::new(Side::Right);
        p.step(Direction::Up);
        let b = p.bounds();
        assert_eq!(b.min.y, p.top_y());
        assert_eq!(b.min.x, p.x());
        assert_eq!(b.width(), Params::PADDLE_WIDTH);
        assert_eq!(b.height(), Params::PADDLE_HEIGHT);
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let (left, right) = paddles();
        let mut ball = Ball::new();
        let start = ball.pos;
        let scorer = ball.advance(&left, &right);
        assert_eq!(scorer, None);
        assert_eq!(ball.pos, start + Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_ball_reflects_off_top_wall() {
        let (left, right) = paddles();
        let mut ball = Ball::new();
        ball.pos = Vec2::new(320.0, Params::BALL_WALL_TOP);
        ball.vel = Vec2::new(4.0, -2.0);

        ball.advance(&left, &right);

        assert_eq!(ball.pos.y, Params::BALL_WALL_TOP, "snapped to the bound");
        assert_eq!(ball.vel.y, Params::BALL_SPEED_Y, "now heading down");
        assert_eq!(ball.vel.x, 4.0, "x velocity untouched");
    }

    #[test]
    fn test_ball_reflects_off_bottom_wall() {
        let (left, right) = paddles();
        let mut ball = Ball::new();
        ball.pos = Vec2::new(320.0, Params::BALL_WALL_BOTTOM);
        ball.vel = Vec2::new(4.0, 2.0);

        ball.advance(&left, &right);

        assert_eq!(ball.pos.y, Params::BALL_WALL_BOTTOM);
        assert_eq!(ball.vel.y, -Params::BALL_SPEED_Y);
    }

    #[test]
    fn test_ball_scores_for_left_at_right_wall() {
        let left = Paddle::new(Side::Left);
        let right = parked(Side::Right); // out of the ball's path
        let mut ball = Ball::new();
        ball.pos = Vec2::new(Params::BALL_WALL_RIGHT, 240.0);
        ball.vel = Vec2::new(4.0, 0.0);

        let scorer = ball.advance(&left, &right);

        assert_eq!(scorer, Some(Side::Left), "left player takes the point");
        assert_eq!(ball.pos.x, Params::BALL_WALL_RIGHT, "snapped to the wall");
        assert_eq!(ball.vel.x, -4.0, "heading back left");
    }

    #[test]
    fn test_ball_scores_for_right_at_left_wall() {
        let left = parked(Side::Left);
        let right = Paddle::new(Side::Right);
        let mut ball = Ball::new();
        ball.pos = Vec2::new(Params::BALL_WALL_LEFT, 240.0);
        ball.vel = Vec2::new(-4.0, 0.0);

        let scorer = ball.advance(&left, &right);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(ball.pos.x, Params::BALL_WALL_LEFT);
        assert_eq!(ball.vel.x, 4.0);
    }

    #[test]
    fn test_right_paddle_hit_bounces_without_score() {
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        let mut ball = Ball::new();
        // Heading into the right paddle's box
        ball.pos = Vec2::new(right.x() - 2.0, right.top_y() + 30.0);
        ball.vel = Vec2::new(4.0, 0.0);

        let scorer = ball.advance(&left, &right);

        assert_eq!(scorer, None, "a paddle hit never scores");
        assert_eq!(ball.vel.x, -Params::BALL_SPEED_X);
        assert_eq!(
            ball.pos.x,
            Params::BALL_WALL_RIGHT - Params::PADDLE_WIDTH,
            "snapped clear of the paddle"
        );
    }

    #[test]
    fn test_left_paddle_hit_bounces_without_score() {
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        let mut ball = Ball::new();
        ball.pos = Vec2::new(left.x() + Params::PADDLE_WIDTH + 2.0, left.top_y() + 30.0);
        ball.vel = Vec2::new(-4.0, 0.0);

        let scorer = ball.advance(&left, &right);

        assert_eq!(scorer, None);
        assert_eq!(ball.vel.x, Params::BALL_SPEED_X);
        assert_eq!(ball.pos.x, Params::BALL_WALL_LEFT + Params::PADDLE_WIDTH);
    }

    #[test]
    fn test_paddle_hit_wins_over_goal_line() {
        // Ball past the right wall bound *and* overlapping the right
        // paddle on the same tick: the paddle branch must win.
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        let mut ball = Ball::new();
        ball.pos = Vec2::new(Params::BALL_WALL_RIGHT, right.top_y() + 30.0);
        ball.vel = Vec2::new(4.0, 0.0);

        let scorer = ball.advance(&left, &right);

        assert_eq!(scorer, None, "the save beats the goal line");
        assert_eq!(ball.pos.x, Params::BALL_WALL_RIGHT - Params::PADDLE_WIDTH);
        assert_eq!(ball.vel.x, -Params::BALL_SPEED_X);
    }

    #[test]
    fn test_corner_hit_reflects_both_axes() {
        let left = parked(Side::Left);
        let right = parked(Side::Right);
        let mut ball = Ball::new();
        ball.pos = Vec2::new(Params::BALL_WALL_RIGHT, Params::BALL_WALL_TOP);
        ball.vel = Vec2::new(4.0, -2.0);

        let scorer = ball.advance(&left, &right);

        // Goal-line handling and the vertical bounce are independent.
        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(ball.vel, Vec2::new(-4.0, 2.0));
        assert_eq!(
            ball.pos,
            Vec2::new(Params::BALL_WALL_RIGHT, Params::BALL_WALL_TOP)
        );
    }

    #[test]
    fn test_ball_stays_within_walls_over_many_ticks() {
        let mut left = Paddle::new(Side::Left);
        let mut right = Paddle::new(Side::Right);
        let mut ball = Ball::new();

        for i in 0..2000 {
            // Wiggle the paddles so both hit and miss cases occur
            let dir = if i % 3 == 0 {
                Direction::Up
            } else {
                Direction::Down
            };
            left.step(dir);
            right.step(dir);
            ball.advance(&left, &right);

            assert!(
                (Params::BALL_WALL_LEFT..=Params::BALL_WALL_RIGHT).contains(&ball.pos.x),
                "x out of bounds at tick {}: {}",
                i,
                ball.pos.x
            );
            assert!(
                (Params::BALL_WALL_TOP..=Params::BALL_WALL_BOTTOM).contains(&ball.pos.y),
                "y out of bounds at tick {}: {}",
                i,
                ball.pos.y
            );
        }
    }
}
