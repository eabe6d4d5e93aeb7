//! 行バンド単位の並列計算

use std::ops::Range;

use rayon::ThreadPool;

use super::mandelbrot::Sampling;

/// `rows` 行を `workers` 個の連続したバンドに分割する
///
/// 各バンドは `rows / workers` 行で、割り切れない分は最後のバンドが受け持つ。
/// 行数がワーカー数より少ない場合は先頭のバンドが空になる。
pub fn row_bands(rows: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let per_band = rows / workers;
    (0..workers)
        .map(|band| {
            let start = band * per_band;
            if band + 1 == workers {
                start..rows
            } else {
                start..start + per_band
            }
        })
        .collect()
}

/// グリッドをバンドごとの互いに素なスライスに分け、各バンドを1タスクとして並列に計算する
///
/// スコープを抜けた時点で全バンドの書き込みが完了している。
pub fn compute_bands(pool: &ThreadPool, sampling: &Sampling, bands: &[Range<usize>], grid: &mut [u32]) {
    let width = sampling.width;
    pool.scope(|s| {
        let mut rest = grid;
        for band in bands.iter().cloned() {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * width);
            rest = tail;
            if band.is_empty() {
                continue;
            }
            s.spawn(move |_| sampling.compute_rows(band, chunk));
        }
    });
}
