use crate::error::SimError;
use crate::utils::Vec2;
use std::str::FromStr;

/// 4 fixed directions for tiny, predictable loops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl FromStr for Direction {
    type Err = SimError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // byte match is faster than string match
        match s.as_bytes() {
            b"up" => Ok(Direction::Up),
            b"down" => Ok(Direction::Down),
            b"left" => Ok(Direction::Left),
            b"right" => Ok(Direction::Right),
            _ => Err(SimError::InvalidDirection(s.to_string())),
        }
    }
}

impl Direction {
    /// All possible directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Axis-aligned unit vector, y grows upward
    #[inline]
    pub const fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0.0, y: 1.0 },
            Direction::Down => Vec2 { x: 0.0, y: -1.0 },
            Direction::Left => Vec2 { x: -1.0, y: 0.0 },
            Direction::Right => Vec2 { x: 1.0, y: 0.0 },
        }
    }
}
