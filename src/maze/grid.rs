use super::cell::{Cell, Location, Side};
use crate::error::{MazeError, Result};

/// Rectangular grid of cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Box<[Cell]>,
    col_count: u16,
    row_count: u16,
}

impl Grid {
    /// Builds a grid with every wall standing and no cell visited.
    pub fn new(col_count: u16, row_count: u16) -> Result<Self> {
        if col_count == 0 || row_count == 0 {
            return Err(MazeError::InvalidDimensions {
                col_count,
                row_count,
            });
        }
        let cells = (0..row_count as i32)
            .flat_map(|y| (0..col_count as i32).map(move |x| Cell::new(Location::new(x, y))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid {
            cells,
            col_count,
            row_count,
        })
    }

    pub fn col_count(&self) -> u16 {
        self.col_count
    }

    pub fn row_count(&self) -> u16 {
        self.row_count
    }

    pub fn contains(&self, location: Location) -> bool {
        (0..self.col_count as i32).contains(&location.x)
            && (0..self.row_count as i32).contains(&location.y)
    }

    fn ravel_index(&self, location: Location) -> Option<usize> {
        self.contains(location)
            .then(|| location.y as usize * self.col_count as usize + location.x as usize)
    }

    pub fn cell(&self, location: Location) -> Option<&Cell> {
        self.ravel_index(location).map(|idx| &self.cells[idx])
    }

    fn cell_mut(&mut self, location: Location, side: Side) -> Result<&mut Cell> {
        match self.ravel_index(location) {
            Some(idx) => Ok(&mut self.cells[idx]),
            None => Err(MazeError::OutOfRange {
                location,
                side: Some(side),
            }),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The adjacent location through `side`, or `None` when `location` sits on
    /// that boundary (or is not on the grid at all).
    pub fn neighbor(&self, location: Location, side: Side) -> Option<Location> {
        if !self.contains(location) {
            return None;
        }
        let next = location.step(side);
        self.contains(next).then_some(next)
    }

    /// Opens the wall on `side` of `location`, and the facing wall of the
    /// neighbour when there is one. Outer boundary sides only touch the one cell.
    pub fn hide_wall(&mut self, location: Location, side: Side) -> Result<()> {
        let neighbor = self.neighbor(location, side);
        self.cell_mut(location, side)?.open(side);
        if let Some(neighbor) = neighbor {
            self.cell_mut(neighbor, side.opposite())?
                .open(side.opposite());
        }
        Ok(())
    }

    pub fn is_open(&self, location: Location, side: Side) -> Result<bool> {
        self.cell(location)
            .map(|cell| cell.is_open(side))
            .ok_or(MazeError::OutOfRange {
                location,
                side: Some(side),
            })
    }

    /// Whether `from` and its neighbour through `side` are joined by a passage.
    pub fn is_passage(&self, from: Location, side: Side) -> bool {
        self.neighbor(from, side).is_some() && matches!(self.is_open(from, side), Ok(true))
    }

    pub fn is_visited(&self, location: Location) -> bool {
        self.cell(location).is_some_and(Cell::is_visited)
    }

    pub(crate) fn set_visited(&mut self, location: Location) -> Result<()> {
        let idx = self.ravel_index(location).ok_or(MazeError::OutOfRange {
            location,
            side: None,
        })?;
        self.cells[idx].set_visited(true);
        Ok(())
    }

    /// Clears every visited mark; walls are left as they are.
    pub fn reset_visited(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.set_visited(false));
    }

    /// Number of opened walls shared by two cells, each counted once.
    pub fn internal_passages(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Side::Right, Side::Bottom]
                    .into_iter()
                    .filter(|&side| self.is_passage(cell.location(), side))
                    .count()
            })
            .sum()
    }
}
