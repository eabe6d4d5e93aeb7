//! マンデルブロ集合インタラクティブビューア
//!
//! 毎フレーム現在のビューでエンジンを呼び、返ってきたバッファをそのまま表示する。
//! ビューが変わらない限りエンジンはキャッシュを返すので再計算は起きない。
//!
//! 操作方法:
//!   - 矢印キー: 移動（パン）
//!   - + / = キー: 拡大
//!   - - キー: 縮小
//!   - I / K キー: 最大反復回数を倍 / 半分に
//!   - C キー: 配色の切り替え
//!   - R キー: 初期表示にリセット
//!   - S キー: 現在の表示を画像として保存
//!   - Q / Escape キー: 終了

use std::process::ExitCode;
use std::time::{Duration, Instant};

use almondbread::colors::{opaque_buffer, to_u32_pixels};
use almondbread::common::constants::*;
use almondbread::{EngineConfig, FractalEngine, ViewDescriptor};
use image::{ImageBuffer, Rgb};
use log::{debug, error, info};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

/// ビューアの状態
struct ViewerState {
    view: ViewDescriptor,
    pixels: Vec<u8>,
    save_counter: u32,
}

impl ViewerState {
    fn new() -> Self {
        let view = ViewDescriptor::default();
        Self {
            pixels: opaque_buffer(view.pixel_count()),
            view,
            save_counter: 0,
        }
    }

    fn reset(&mut self) {
        self.view = ViewDescriptor::default();
    }

    /// 表示範囲に対する割合で中心を動かす
    fn pan(&mut self, dx: f64, dy: f64) {
        self.view.center.re += dx * self.view.real_range;
        self.view.center.im += dy * self.view.imag_range;
    }

    fn zoom(&mut self, factor: f64) {
        self.view.real_range *= factor;
        self.view.imag_range *= factor;
    }

    fn scale_iterations(&mut self, up: bool) {
        let max = self.view.max_iterations;
        self.view.max_iterations = if up {
            max.saturating_mul(2).min(MAX_ITER_LIMIT)
        } else {
            (max / 2).max(1)
        };
    }

    fn save_image(&mut self) -> image::ImageResult<String> {
        self.save_counter += 1;
        let filename = format!("almondbread_{:03}.png", self.save_counter);

        let width = self.view.x_pixels;
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(width as u32, self.view.y_pixels as u32, |x, y| {
                let i = ((y as usize) * width + (x as usize)) * BYTES_PER_PIXEL;
                // バイト順は B, G, R, A
                Rgb([self.pixels[i + 2], self.pixels[i + 1], self.pixels[i]])
            });

        img.save(&filename)?;
        Ok(filename)
    }
}

/// キー入力をビューに反映する。ビューが変わったら true
fn handle_keys(window: &Window, state: &mut ViewerState, engine: &mut FractalEngine) -> bool {
    let before = state.view;

    for key in window.get_keys_pressed(KeyRepeat::Yes) {
        match key {
            Key::Left => state.pan(-PAN_FRACTION, 0.0),
            Key::Right => state.pan(PAN_FRACTION, 0.0),
            Key::Up => state.pan(0.0, PAN_FRACTION),
            Key::Down => state.pan(0.0, -PAN_FRACTION),
            Key::Equal | Key::NumPadPlus => state.zoom(ZOOM_FACTOR_IN),
            Key::Minus | Key::NumPadMinus => state.zoom(ZOOM_FACTOR_OUT),
            Key::I => state.scale_iterations(true),
            Key::K => state.scale_iterations(false),
            _ => {}
        }
    }

    if window.is_key_pressed(Key::R, KeyRepeat::No) {
        state.reset();
        info!("リセット");
    }

    if window.is_key_pressed(Key::C, KeyRepeat::No) {
        let encoding = engine.config().encoding.toggled();
        engine.set_encoding(encoding);
        info!("配色: {}", encoding);
    }

    if window.is_key_pressed(Key::S, KeyRepeat::No) {
        match state.save_image() {
            Ok(filename) => info!("画像を保存しました: {}", filename),
            Err(e) => error!("画像の保存に失敗しました: {}", e),
        }
    }

    state.view != before
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = FractalEngine::with_config(EngineConfig::from_hardware())?;
    info!("ワーカー数: {}", engine.config().workers);

    let mut state = ViewerState::new();

    let mut window = Window::new(
        "Almondbread",
        state.view.x_pixels,
        state.view.y_pixels,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(60);

    let mut frames = 0u32;
    let mut fps_timer = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        if handle_keys(&window, &mut state, &mut engine) {
            let v = &state.view;
            debug!(
                "ビュー変更: 中心 ({:.6}, {:.6}i) | 範囲 {:.3e} x {:.3e} | 反復上限 {}",
                v.center.re, v.center.im, v.real_range, v.imag_range, v.max_iterations
            );
        }

        engine.render(&state.view, &mut state.pixels)?;

        window.update_with_buffer(
            &to_u32_pixels(&state.pixels),
            state.view.x_pixels,
            state.view.y_pixels,
        )?;

        frames += 1;
        let elapsed = fps_timer.elapsed();
        if elapsed >= Duration::from_secs(1) {
            info!(
                "FPS: {:.1} | 計算パス累計: {}",
                frames as f64 / elapsed.as_secs_f64(),
                engine.compute_passes()
            );
            frames = 0;
            fps_timer = Instant::now();
        }
    }

    info!("終了しました");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("操作方法:");
    println!("  - 矢印キー: 移動（パン）");
    println!("  - + / = キー: 拡大, - キー: 縮小");
    println!("  - I / K キー: 最大反復回数を倍 / 半分に");
    println!("  - C キー: 配色の切り替え");
    println!("  - R キー: 初期表示にリセット");
    println!("  - S キー: 現在の表示を画像として保存");
    println!("  - Q / Escape キー: 終了");
    println!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
