use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Shape of a grid as `(rows, cols)`, for grids this crate allocated itself.
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (rows as Coord, cols as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, grid_size(self))
    }
}

/// Walks the 3x3 window around `center`, clipped to the grid, skipping `center` itself.
///
/// Yields row-major order. Works in `u16` so windows at the `Coord::MAX` edge do not overflow.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    first_col: u16,
    last_row: u16,
    last_col: u16,
    cursor: Option<(u16, u16)>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (row, col) = (u16::from(center.0), u16::from(center.1));
        let (rows, cols) = (u16::from(bounds.0), u16::from(bounds.1));

        let first_row = row.saturating_sub(1);
        let first_col = col.saturating_sub(1);
        let last_row = (row + 1).min(rows.saturating_sub(1));
        let last_col = (col + 1).min(cols.saturating_sub(1));

        let empty = rows == 0 || cols == 0 || first_row > last_row || first_col > last_col;
        Self {
            center,
            first_col,
            last_row,
            last_col,
            cursor: (!empty).then_some((first_row, first_col)),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (row, col) = self.cursor?;
            self.cursor = if col < self.last_col {
                Some((row, col + 1))
            } else if row < self.last_row {
                Some((row + 1, self.first_col))
            } else {
                None
            };

            let coords = (row as Coord, col as Coord);
            if coords != self.center {
                return Some(coords);
            }
        }
    }
}
