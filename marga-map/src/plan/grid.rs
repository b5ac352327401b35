//! Fixed-size cell grid for one floor.

use crate::core::{Cell, CellKind, GridCoord};

/// Sentinel for out-of-range reads.
static EMPTY_CELL: Cell = Cell {
    kind: CellKind::Empty,
    name: None,
};

/// A fixed-size 2D array of cells, addressed by (x, y) from the
/// top-left corner. Dimensions are constant for the lifetime of a
/// loaded floor; out-of-range access reads as empty space.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid from document rows. Rows may be ragged in the
    /// document; width is the widest row and short rows read as empty
    /// past their end.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Grid {
        let height = rows.len() as i32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as i32;
        Grid {
            width,
            height,
            rows,
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Is the coordinate inside the grid bounds?
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Cell at the coordinate; empty space when out of range.
    pub fn cell(&self, coord: GridCoord) -> &Cell {
        if !self.in_bounds(coord) {
            return &EMPTY_CELL;
        }
        self.rows
            .get(coord.y as usize)
            .and_then(|row| row.get(coord.x as usize))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Iterate all named cells with their coordinates, row-major.
    pub fn named_cells(&self) -> impl Iterator<Item = (GridCoord, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.name
                    .as_ref()
                    .map(|_| (GridCoord::new(x as i32, y as i32), cell))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellKind;

    fn named(kind: CellKind, name: &str) -> Cell {
        Cell {
            kind,
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn test_out_of_bounds_reads_empty() {
        let grid = Grid::from_rows(vec![vec![named(CellKind::Room, "A")]]);
        assert_eq!(grid.cell(GridCoord::new(-1, 0)), &Cell::EMPTY);
        assert_eq!(grid.cell(GridCoord::new(0, 5)), &Cell::EMPTY);
        assert_eq!(grid.cell(GridCoord::new(0, 0)).name.as_deref(), Some("A"));
    }

    #[test]
    fn test_ragged_rows_pad_with_empty() {
        let grid = Grid::from_rows(vec![
            vec![named(CellKind::Room, "A"), named(CellKind::Corridor, "c1")],
            vec![named(CellKind::Room, "B")],
        ]);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        // second row is short; (1, 1) is inside bounds but empty
        assert_eq!(grid.cell(GridCoord::new(1, 1)), &Cell::EMPTY);
    }

    #[test]
    fn test_named_cells_row_major() {
        let grid = Grid::from_rows(vec![
            vec![named(CellKind::Room, "A"), Cell::EMPTY],
            vec![Cell::EMPTY, named(CellKind::Room, "B")],
        ]);
        let names: Vec<_> = grid
            .named_cells()
            .map(|(coord, cell)| (coord, cell.name.clone().unwrap()))
            .collect();
        assert_eq!(names.len(), 2);
        assert_eq!(names[0], (GridCoord::new(0, 0), "A".to_string()));
        assert_eq!(names[1], (GridCoord::new(1, 1), "B".to_string()));
    }
}
