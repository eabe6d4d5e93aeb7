//! 表示領域が変わったときだけ再計算するフラクタルエンジン

use std::num::NonZeroUsize;
use std::time::Instant;

use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::bands::{compute_bands, row_bands};
use super::colors::{encode_grid, Encoding};
use super::constants::DEFAULT_WORKERS;
use super::error::EngineError;
use super::grid::IterationGrid;
use super::mandelbrot::Sampling;
use super::view::ViewDescriptor;

/// エンジンの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// 行バンドの数（= スレッド数）
    pub workers: usize,
    /// `render` で使うピクセルのエンコード方式
    pub encoding: Encoding,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            encoding: Encoding::default(),
        }
    }
}

impl EngineConfig {
    /// 利用可能な並列度をワーカー数にする
    pub fn from_hardware() -> Self {
        let workers = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(DEFAULT_WORKERS);
        Self {
            workers,
            ..Self::default()
        }
    }
}

/// 最後に計算したビューとそのグリッド
#[derive(Debug)]
enum Cache {
    Empty,
    Populated {
        view: ViewDescriptor,
        grid: IterationGrid,
    },
}

pub struct FractalEngine {
    config: EngineConfig,
    pool: ThreadPool,
    cache: Cache,
    passes: u64,
}

impl FractalEngine {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        if config.workers == 0 {
            return Err(EngineError::ZeroWorkers);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("almondbread-band-{}", i))
            .build()?;
        Ok(Self {
            config,
            pool,
            cache: Cache::Empty,
            passes: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// エンコード方式はグリッドに影響しないのでキャッシュは保持する
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.config.encoding = encoding;
    }

    /// これまでに実行した計算パスの回数
    pub fn compute_passes(&self) -> u64 {
        self.passes
    }

    pub fn last_view(&self) -> Option<&ViewDescriptor> {
        match &self.cache {
            Cache::Empty => None,
            Cache::Populated { view, .. } => Some(view),
        }
    }

    /// キャッシュを捨て、次の呼び出しで必ず再計算させる
    pub fn invalidate(&mut self) {
        self.cache = Cache::Empty;
    }

    /// ビューの反復回数グリッドを返す。前回と同じビューならキャッシュをそのまま返す
    pub fn iterations(&mut self, view: &ViewDescriptor) -> Result<&IterationGrid, EngineError> {
        self.get_or_compute(view)
    }

    /// ビューを ARGB8888 で `pixels` に書き込む
    ///
    /// `pixels` の長さは `4 * x_pixels * y_pixels` でなければならない。
    /// アルファのバイトは書き換えないので、呼び出し側で初期化しておくこと。
    pub fn render(&mut self, view: &ViewDescriptor, pixels: &mut [u8]) -> Result<(), EngineError> {
        let expected = view.buffer_len();
        if pixels.len() != expected {
            return Err(EngineError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        let encoding = self.config.encoding;
        let grid = self.get_or_compute(view)?;
        encode_grid(grid, view.max_iterations, encoding, pixels);
        Ok(())
    }

    fn get_or_compute(&mut self, view: &ViewDescriptor) -> Result<&IterationGrid, EngineError> {
        let hit = matches!(&self.cache, Cache::Populated { view: last, .. } if last == view);
        if hit {
            trace!("キャッシュを再利用: {:?}", view);
        } else {
            view.validate()?;
            let grid = self.compute_pass(view);
            self.cache = Cache::Populated { view: *view, grid };
        }

        match &self.cache {
            Cache::Populated { grid, .. } => Ok(grid),
            Cache::Empty => unreachable!("直前で格納済み"),
        }
    }

    fn compute_pass(&mut self, view: &ViewDescriptor) -> IterationGrid {
        let start = Instant::now();
        let mut grid = IterationGrid::zeroed(view.x_pixels, view.y_pixels);
        let bands = row_bands(view.y_pixels, self.config.workers);
        compute_bands(&self.pool, &Sampling::new(view), &bands, grid.cells_mut());
        self.passes += 1;

        debug!(
            "計算パス #{}: {}x{} 反復上限 {} | 中心 ({:.6}, {:.6}i) 範囲 {:.3e} x {:.3e} | {} バンド | {:.2?}",
            self.passes,
            view.x_pixels,
            view.y_pixels,
            view.max_iterations,
            view.center.re,
            view.center.im,
            view.real_range,
            view.imag_range,
            bands.len(),
            start.elapsed()
        );
        grid
    }
}
