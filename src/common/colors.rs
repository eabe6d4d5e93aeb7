//! 反復回数からピクセルへの変換

use rayon::prelude::*;

use super::constants::BYTES_PER_PIXEL;
use super::grid::IterationGrid;

/// ピクセルのエンコード方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// 反復回数をビットシフトして 3 チャンネルに並べる（仮の配色）
    #[default]
    Shifted,
    /// グラデーションのカラーマップ。内部は黒
    Palette,
}

impl Encoding {
    pub fn toggled(self) -> Self {
        match self {
            Encoding::Shifted => Encoding::Palette,
            Encoding::Palette => Encoding::Shifted,
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Shifted => write!(f, "シフト"),
            Encoding::Palette => write!(f, "カラーマップ"),
        }
    }
}

/// カラーマップ
pub const COLORS: [(f64, f64, f64); 10] = [
    (0.0, 0.0, 0.2), // 深い青
    (0.1, 0.2, 0.5), // 青
    (0.2, 0.5, 0.8), // 水色
    (0.5, 0.8, 0.9), // 薄い水色
    (1.0, 1.0, 0.8), // クリーム
    (1.0, 0.8, 0.3), // 黄色
    (1.0, 0.5, 0.1), // オレンジ
    (0.8, 0.2, 0.1), // 赤
    (0.5, 0.0, 0.2), // 暗い赤
    (0.0, 0.0, 0.0), // 黒
];

/// 反復回数から (r, g, b) を計算
pub fn iter_to_rgb(iter: u32, max_iter: u32) -> (u8, u8, u8) {
    if iter >= max_iter {
        return (0, 0, 0);
    }

    let t = iter as f64 / max_iter as f64;
    let scaled = t * (COLORS.len() - 1) as f64;
    let idx = (scaled as usize).min(COLORS.len() - 2);
    let frac = scaled - idx as f64;

    let (r1, g1, b1) = COLORS[idx];
    let (r2, g2, b2) = COLORS[idx + 1];

    let r = ((r1 + (r2 - r1) * frac) * 255.0) as u8;
    let g = ((g1 + (g2 - g1) * frac) * 255.0) as u8;
    let b = ((b1 + (b2 - b1) * frac) * 255.0) as u8;
    (r, g, b)
}

/// 1ピクセル分の先頭3バイトを書き込む。4バイト目（アルファ）は触らない
///
/// リトルエンディアンの ARGB8888 として読むとバイト順は B, G, R, A。
#[inline]
fn encode_pixel(pixel: &mut [u8], value: u32, max_iter: u32, encoding: Encoding) {
    match encoding {
        Encoding::Shifted => {
            pixel[0] = (value & 0xFF) as u8;
            pixel[1] = ((value >> 1) & 0xFF) as u8;
            pixel[2] = ((value >> 2) & 0xFF) as u8;
        }
        Encoding::Palette => {
            let (r, g, b) = iter_to_rgb(value, max_iter);
            pixel[0] = b;
            pixel[1] = g;
            pixel[2] = r;
        }
    }
}

/// グリッド全体を行優先でピクセルバッファへ書き込む
///
/// `pixels.len()` は `4 * grid.len()` であること（呼び出し側で検査済み）。
pub fn encode_grid(grid: &IterationGrid, max_iter: u32, encoding: Encoding, pixels: &mut [u8]) {
    debug_assert_eq!(pixels.len(), grid.len() * BYTES_PER_PIXEL);
    pixels
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(grid.cells().par_iter())
        .for_each(|(pixel, &value)| encode_pixel(pixel, value, max_iter, encoding));
}

/// アルファを 0xFF で初期化したバッファ
pub fn opaque_buffer(pixel_count: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; pixel_count * BYTES_PER_PIXEL];
    for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        pixel[3] = 0xFF;
    }
    pixels
}

/// ARGB8888 のバイト列を minifb 等が受け取る 0RGB の u32 列に変換
pub fn to_u32_pixels(pixels: &[u8]) -> Vec<u32> {
    pixels
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|p| u32::from_le_bytes([p[0], p[1], p[2], p[3]]) & 0x00FF_FFFF)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(values: &[u32]) -> IterationGrid {
        let mut grid = IterationGrid::zeroed(values.len(), 1);
        grid.cells_mut().copy_from_slice(values);
        grid
    }

    #[test]
    fn shifted_encoding_leaves_alpha() {
        let grid = grid_of(&[0, 7, 255, 1000]);
        let mut pixels = opaque_buffer(4);
        encode_grid(&grid, 1000, Encoding::Shifted, &mut pixels);
        assert_eq!(
            pixels,
            vec![
                0, 0, 0, 0xFF, //
                7, 3, 1, 0xFF, //
                255, 127, 63, 0xFF, //
                232, 244, 250, 0xFF,
            ]
        );
    }

    #[test]
    fn alpha_keeps_whatever_was_there() {
        let grid = grid_of(&[5, 5]);
        let mut pixels = vec![0x11u8; 8];
        encode_grid(&grid, 10, Encoding::Shifted, &mut pixels);
        assert_eq!(pixels[3], 0x11);
        assert_eq!(pixels[7], 0x11);
    }

    #[test]
    fn palette_interior_is_black() {
        assert_eq!(iter_to_rgb(256, 256), (0, 0, 0));
        let grid = grid_of(&[50, 50]);
        let mut pixels = opaque_buffer(2);
        encode_grid(&grid, 50, Encoding::Palette, &mut pixels);
        assert_eq!(&pixels[..4], &[0, 0, 0, 0xFF]);
    }

    #[test]
    fn palette_writes_bgr_order() {
        let (r, g, b) = iter_to_rgb(0, 100);
        assert_eq!((r, g, b), (0, 0, 51));
        let grid = grid_of(&[0]);
        let mut pixels = opaque_buffer(1);
        encode_grid(&grid, 100, Encoding::Palette, &mut pixels);
        assert_eq!(pixels, vec![51, 0, 0, 0xFF]);
        assert_eq!(to_u32_pixels(&pixels), vec![0x00_00_00_33]);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Encoding::default().toggled(), Encoding::Palette);
        assert_eq!(Encoding::Palette.toggled(), Encoding::Shifted);
    }
}
