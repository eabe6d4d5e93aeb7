//! マンデルブロ集合の脱出時間エンジン
//!
//! 表示領域（[`ViewDescriptor`]）が前回と変わったときだけ、行をバンドに分けて
//! 並列に再計算する。結果は反復回数のグリッド、または ARGB8888 のバイト列で取り出せる。
//!
//! ```no_run
//! use almondbread::{colors::opaque_buffer, FractalEngine, ViewDescriptor};
//!
//! let mut engine = FractalEngine::new()?;
//! let view = ViewDescriptor::default();
//! let mut pixels = opaque_buffer(view.pixel_count());
//! engine.render(&view, &mut pixels)?;
//! # Ok::<(), almondbread::EngineError>(())
//! ```

pub mod common;

pub use common::colors::{self, Encoding};
pub use common::engine::{EngineConfig, FractalEngine};
pub use common::error::{EngineError, ViewError};
pub use common::grid::IterationGrid;
pub use common::view::ViewDescriptor;
