//! Piece catalog - tetromino shape matrices and rotation
//!
//! Shapes are dense row-major 0/1 matrices, kept as tight as the piece
//! (no padding rows/columns), so rotation of an RxC matrix yields a CxR one.
//! Catalog order matches the kind indices in `slowtris_types::PieceKind`.

use slowtris_types::{PieceKind, BOARD_WIDTH};

/// Maximum shape dimension (the I piece is 4 wide)
pub const MAX_SHAPE_DIM: usize = 4;

const SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Dense 0/1 shape matrix with flat fixed-size storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    /// Row-major, only the first `rows * cols` entries are meaningful;
    /// the rest stay zero so equality is structural.
    cells: [u8; SHAPE_CELLS],
}

impl ShapeMatrix {
    /// Build from row slices. Panics on empty, ragged, or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);

        let mut cells = [0u8; SHAPE_CELLS];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged shape matrix");
            for (c, &v) in row.iter().enumerate() {
                cells[r * cols + c] = if v != 0 { 1 } else { 0 };
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (row, col) is occupied. Out of range reads as empty.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        if row >= self.rows() || col >= self.cols() {
            return false;
        }
        self.cells[row * self.cols() + col] != 0
    }

    /// Iterate occupied cells as `(dx, dy)` offsets from the piece origin.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |r| {
            (0..cols).filter_map(move |c| {
                if self.cells[r * cols + c] != 0 {
                    Some((c as i8, r as i8))
                } else {
                    None
                }
            })
        })
    }

    /// 90 degree clockwise rotation: transpose, then reverse each row.
    ///
    /// An RxC matrix becomes CxR; four applications return an equivalent
    /// matrix.
    pub fn rotated_cw(&self) -> Self {
        let (r, c) = (self.rows(), self.cols());
        let mut cells = [0u8; SHAPE_CELLS];
        // new[i][j] = old[R-1-j][i]
        for i in 0..c {
            for j in 0..r {
                cells[i * r + j] = self.cells[(r - 1 - j) * c + i];
            }
        }
        Self {
            rows: c as u8,
            cols: r as u8,
            cells,
        }
    }

    /// Counter-clockwise rotation, implemented as three clockwise turns.
    pub fn rotated_ccw(&self) -> Self {
        self.rotated_cw().rotated_cw().rotated_cw()
    }
}

/// Spawn orientation shape for a piece kind.
pub fn shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// Display color for a piece kind (RGB).
pub fn color(kind: PieceKind) -> (u8, u8, u8) {
    match kind {
        PieceKind::I => (0x00, 0xf0, 0xf0),
        PieceKind::J => (0x00, 0x00, 0xf0),
        PieceKind::L => (0xf0, 0xa0, 0x00),
        PieceKind::O => (0xf0, 0xf0, 0x00),
        PieceKind::S => (0x00, 0xf0, 0x00),
        PieceKind::T => (0xa0, 0x00, 0xf0),
        PieceKind::Z => (0xf0, 0x00, 0x00),
    }
}

/// Spawn column for a shape: centered, wide pieces biased left.
pub fn spawn_x(shape: &ShapeMatrix) -> i8 {
    let half_width = (shape.cols() + 1) / 2;
    (BOARD_WIDTH as i8) / 2 - half_width as i8
}

#[cfg(test)]
mod tests {
    use super::*;
    use slowtris_types::ALL_KINDS;

    #[test]
    fn test_catalog_has_four_cells_per_shape() {
        for kind in ALL_KINDS {
            assert_eq!(shape(kind).occupied().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let i = shape(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));

        let r = i.rotated_cw();
        assert_eq!((r.rows(), r.cols()), (4, 1));
        for row in 0..4 {
            assert!(r.is_set(row, 0));
        }
    }

    #[test]
    fn test_rotation_cw_contents() {
        // J: [1,0,0]    rotates to  [1,1]
        //    [1,1,1]                [1,0]
        //                           [1,0]
        let j = shape(PieceKind::J).rotated_cw();
        assert_eq!((j.rows(), j.cols()), (3, 2));
        assert!(j.is_set(0, 0) && j.is_set(0, 1));
        assert!(j.is_set(1, 0) && !j.is_set(1, 1));
        assert!(j.is_set(2, 0) && !j.is_set(2, 1));
    }

    #[test]
    fn test_four_rotations_identity() {
        for kind in ALL_KINDS {
            let original = shape(kind);
            let back = original
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(back, original, "{:?}", kind);
        }
    }

    #[test]
    fn test_ccw_is_three_cw() {
        for kind in ALL_KINDS {
            let s = shape(kind);
            assert_eq!(
                s.rotated_ccw(),
                s.rotated_cw().rotated_cw().rotated_cw(),
                "{:?}",
                kind
            );
        }
    }

    #[test]
    fn test_spawn_x_centers_shapes() {
        // 4 wide (I): 5 - 2 = 3
        assert_eq!(spawn_x(&shape(PieceKind::I)), 3);
        // 3 wide (J/L/S/T/Z): 5 - 2 = 3
        assert_eq!(spawn_x(&shape(PieceKind::T)), 3);
        // 2 wide (O): 5 - 1 = 4
        assert_eq!(spawn_x(&shape(PieceKind::O)), 4);
    }

    #[test]
    fn test_is_set_out_of_range_is_empty() {
        let o = shape(PieceKind::O);
        assert!(!o.is_set(2, 0));
        assert!(!o.is_set(0, 2));
    }
}
