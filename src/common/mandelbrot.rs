//! マンデルブロ集合計算関数

use std::ops::Range;

use super::constants::ESCAPE_RADIUS_SQUARED;
use super::grid::IterationGrid;
use super::view::ViewDescriptor;

/// 1点の反復回数を計算
///
/// z[0] = 0 なので z[1] = c から始める。実部と虚部を分けて
///   ar = br^2 - bi^2 + cr
///   ai = 2 * br * bi + ci
/// として更新する。最初の判定で |c|^2 > 4 なら 0、最後まで発散しなければ `max_iter`。
#[inline]
pub fn escape_time(cr: f64, ci: f64, max_iter: u32) -> u32 {
    let mut ar = cr;
    let mut ai = ci;
    let mut n = 0;

    while n < max_iter && ar * ar + ai * ai <= ESCAPE_RADIUS_SQUARED {
        let br = ar;
        let bi = ai;
        ar = br * br - bi * bi + cr;
        ai = 2.0 * br * bi + ci;
        n += 1;
    }
    n
}

/// ビューからピクセル座標 → 複素平面座標への対応
///
/// 左上から始まり、行が進むほど虚部が小さくなる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub real_start: f64,
    pub real_step: f64,
    pub imag_start: f64,
    pub imag_step: f64,
    pub width: usize,
    pub max_iterations: u32,
}

impl Sampling {
    pub fn new(view: &ViewDescriptor) -> Self {
        Self {
            real_start: view.center.re - view.real_range / 2.0,
            real_step: view.real_range / view.x_pixels as f64,
            imag_start: view.center.im + view.imag_range / 2.0,
            imag_step: -view.imag_range / view.y_pixels as f64,
            width: view.x_pixels,
            max_iterations: view.max_iterations,
        }
    }

    /// ピクセル (row, col) のサンプル点
    #[inline]
    pub fn point(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.real_start + col as f64 * self.real_step,
            self.imag_start + row as f64 * self.imag_step,
        )
    }

    /// `rows` の範囲を計算して `out` に書き込む
    ///
    /// `out` は `rows` に対応するグリッドの部分スライスで、長さは `rows.len() * width`。
    pub fn compute_rows(&self, rows: Range<usize>, out: &mut [u32]) {
        debug_assert_eq!(out.len(), rows.len() * self.width);
        if self.width == 0 {
            return;
        }
        for (row, cells) in rows.zip(out.chunks_exact_mut(self.width)) {
            for (col, cell) in cells.iter_mut().enumerate() {
                let (cr, ci) = self.point(row, col);
                *cell = escape_time(cr, ci, self.max_iterations);
            }
        }
    }
}

/// 単一スレッドで全ピクセルを順に計算する
///
/// 行並列版と結果が一致することの基準として使う。
pub fn compute_sequential(view: &ViewDescriptor) -> IterationGrid {
    let mut grid = IterationGrid::zeroed(view.x_pixels, view.y_pixels);
    Sampling::new(view).compute_rows(0..view.y_pixels, grid.cells_mut());
    grid
}
