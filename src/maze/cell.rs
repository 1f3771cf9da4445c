use crate::error::MazeError;

/// Grid coordinate of a cell: `x` is the column, `y` the row.
/// Signed so that off-grid neighbours can be expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Location { x, y }
    }

    /// The location one step away towards `side`, regardless of grid bounds.
    pub fn step(self, side: Side) -> Location {
        let (dx, dy) = side.offset();
        Location::new(self.x + dx, self.y + dy)
    }
}

/// One of the four walls of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The side a neighbour sees the same wall from.
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Unit offset `(dx, dy)` pointing through this side. `y` grows downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::Top => (0, -1),
            Side::Right => (1, 0),
            Side::Bottom => (0, 1),
            Side::Left => (-1, 0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Side {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Side::ALL
            .get(value as usize)
            .copied()
            .ok_or(MazeError::UnknownSide(value))
    }
}

/// A single maze cell with its four walls and a visited mark.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    location: Location,
    /// Wall presence indexed by `Side`; `true` means the wall is standing.
    walls: [bool; 4],
    visited: bool,
}

impl Cell {
    pub fn new(location: Location) -> Self {
        Cell {
            location,
            walls: [true; 4],
            visited: false,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn has_wall(&self, side: Side) -> bool {
        self.walls[side.index()]
    }

    pub fn is_open(&self, side: Side) -> bool {
        !self.has_wall(side)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn open(&mut self, side: Side) {
        self.walls[side.index()] = false;
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}
