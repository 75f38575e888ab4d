use glam::Vec2;
use strum_macros::EnumIter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The angle, in degrees clockwise from "up", that the ship faces when travelling this way.
    pub fn facing_angle(&self) -> f64 {
        match self {
            Direction::Up => 0.0,
            Direction::Down => 180.0,
            Direction::Left => 270.0,
            Direction::Right => 90.0,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        (*self).into()
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -Vec2::Y,
            Direction::Down => Vec2::Y,
            Direction::Left => -Vec2::X,
            Direction::Right => Vec2::X,
        }
    }
}
