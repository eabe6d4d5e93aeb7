//! エラー型

use std::error::Error;
use std::fmt;

/// ビュー記述子の不変条件違反
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewError {
    NonPositiveRealRange(f64),
    NonPositiveImagRange(f64),
    NonFiniteCenter,
    ZeroWidth,
    ZeroHeight,
    ZeroIterations,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::NonPositiveRealRange(r) => {
                write!(f, "実軸の範囲は正の有限値が必要です: {}", r)
            }
            ViewError::NonPositiveImagRange(r) => {
                write!(f, "虚軸の範囲は正の有限値が必要です: {}", r)
            }
            ViewError::NonFiniteCenter => write!(f, "中心座標が有限値ではありません"),
            ViewError::ZeroWidth => write!(f, "横方向のピクセル数が0です"),
            ViewError::ZeroHeight => write!(f, "縦方向のピクセル数が0です"),
            ViewError::ZeroIterations => write!(f, "最大反復回数が0です"),
        }
    }
}

impl Error for ViewError {}

/// エンジン呼び出し時のエラー
#[derive(Debug)]
pub enum EngineError {
    /// 不正なビューが渡された
    InvalidView(ViewError),
    /// ピクセルバッファの長さがビューと一致しない
    BufferSize { expected: usize, actual: usize },
    /// ワーカー数が0
    ZeroWorkers,
    /// スレッドプールの生成に失敗
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidView(e) => write!(f, "不正なビュー: {}", e),
            EngineError::BufferSize { expected, actual } => write!(
                f,
                "ピクセルバッファの長さが不正です: 期待値 {} バイト, 実際 {} バイト",
                expected, actual
            ),
            EngineError::ZeroWorkers => write!(f, "ワーカー数は1以上が必要です"),
            EngineError::ThreadPool(e) => write!(f, "スレッドプールの生成に失敗しました: {}", e),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::InvalidView(e) => Some(e),
            EngineError::ThreadPool(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ViewError> for EngineError {
    fn from(e: ViewError) -> Self {
        EngineError::InvalidView(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for EngineError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        EngineError::ThreadPool(e)
    }
}
