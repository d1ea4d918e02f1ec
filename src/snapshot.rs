use crate::color::Rgb;
use crate::particle::Particle;

/// Read-only view of a grid's cells for rendering.
///
/// Exposes only whether a cell is occupied and the occupant's color.
#[derive(Clone, Copy)]
pub struct CellsView<'a> {
    cells: &'a [Option<Particle>],
    width: usize,
    height: usize,
}

impl<'a> CellsView<'a> {
    pub(crate) fn new(cells: &'a [Option<Particle>], width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at `(row, col)`, `None` when empty or out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col].map(|p| p.color())
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Option<Rgb>> + 'a> + 'a {
        let cells = self.cells;
        cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.map(|p| p.color())))
    }

    /// Every occupied cell as `(row, col, color)`, top-left first.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + 'a {
        let (cells, width) = (self.cells, self.width);
        cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|p| (i / width, i % width, p.color())))
    }
}
