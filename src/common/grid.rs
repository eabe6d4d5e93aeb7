//! 反復回数グリッド

/// 行優先で並んだピクセルごとの反復回数
///
/// 値 `max_iterations` は発散しなかった点（集合の内部とみなす）を表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl IterationGrid {
    /// 0 で埋めた `width * height` のグリッド
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row < self.height {
            Some(&self.cells[row * self.width..(row + 1) * self.width])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact(0) はパニックするので幅0の場合は空にする
        self.cells.chunks_exact(self.width.max(1)).take(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut grid = IterationGrid::zeroed(3, 2);
        for (i, cell) in grid.cells_mut().iter_mut().enumerate() {
            *cell = i as u32;
        }
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(0, 2), Some(2));
        assert_eq!(grid.get(1, 0), Some(3));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.row(1), Some(&[3, 4, 5][..]));
        assert_eq!(grid.rows().count(), 2);
    }
}
