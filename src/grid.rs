use crate::consts::GRID_SIZE;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// The grid-aligned cell closest to the middle of the arena.
    pub fn center(&self) -> Pos {
        Pos {
            x: self.width / GRID_SIZE / 2 * GRID_SIZE,
            y: self.height / GRID_SIZE / 2 * GRID_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Direction {
        match rng.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

impl PosDelta {
    pub fn times(self, scale: i32) -> PosDelta {
        PosDelta {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

impl Pos {
    pub fn wrapped_add(&self, delta: PosDelta, size: Size) -> Pos {
        let new_x = (i32::from(self.x) + delta.x).rem_euclid(i32::from(size.width)) as u16;
        let new_y = (i32::from(self.y) + delta.y).rem_euclid(i32::from(size.height)) as u16;
        Pos { x: new_x, y: new_y }
    }

    /// One cell in the given direction, wrapping at the arena edges.
    pub fn step(&self, dir: Direction, size: Size) -> Pos {
        self.wrapped_add(PosDelta::from(dir).times(i32::from(GRID_SIZE)), size)
    }
}
