//! 共通定数

/// ビューア描画領域の幅
pub const WINDOW_WIDTH: usize = 800;
/// ビューア描画領域の高さ
pub const WINDOW_HEIGHT: usize = 600;

/// 初期表示の中心（実部, 虚部）
pub const DEFAULT_CENTER: (f64, f64) = (-0.5, 0.0);
/// 初期表示の実軸方向の幅
pub const DEFAULT_REAL_RANGE: f64 = 3.0;
/// 初期表示の虚軸方向の高さ
pub const DEFAULT_IMAG_RANGE: f64 = 2.0;

/// 最大反復回数の初期値
pub const MAX_ITER: u32 = 255;
/// 最大反復回数の上限（I キーで倍増させる際の天井）
pub const MAX_ITER_LIMIT: u32 = 1 << 16;

/// 発散判定の半径
pub const ESCAPE_RADIUS: f64 = 2.0;
/// 発散判定は平方根を避けて二乗値で比較する
pub const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// 既定のワーカー数（行バンド数）
pub const DEFAULT_WORKERS: usize = 4;

/// 1ピクセルあたりのバイト数（ARGB8888）
pub const BYTES_PER_PIXEL: usize = 4;

/// 矢印キー1回あたりのパン量（表示範囲に対する割合）
pub const PAN_FRACTION: f64 = 0.1;

/// ズームイン倍率
pub const ZOOM_FACTOR_IN: f64 = 0.75;

/// ズームアウト倍率
pub const ZOOM_FACTOR_OUT: f64 = 1.0 / ZOOM_FACTOR_IN;
