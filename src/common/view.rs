//! 複素平面上の表示領域

use num_complex::Complex;

use super::constants::{
    BYTES_PER_PIXEL, DEFAULT_CENTER, DEFAULT_IMAG_RANGE, DEFAULT_REAL_RANGE, MAX_ITER,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
use super::error::ViewError;

/// 中心点と実軸・虚軸の幅で表した表示領域、解像度、最大反復回数
///
/// 値の比較は全フィールドの構造比較で、再計算が必要かどうかの判定にのみ使う。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewDescriptor {
    pub center: Complex<f64>,
    pub real_range: f64,
    pub imag_range: f64,
    pub x_pixels: usize,
    pub y_pixels: usize,
    pub max_iterations: u32,
}

impl ViewDescriptor {
    pub fn new(
        center: Complex<f64>,
        real_range: f64,
        imag_range: f64,
        x_pixels: usize,
        y_pixels: usize,
        max_iterations: u32,
    ) -> Self {
        Self {
            center,
            real_range,
            imag_range,
            x_pixels,
            y_pixels,
            max_iterations,
        }
    }

    /// 不変条件を検査し、最初に違反したものを返す
    pub fn validate(&self) -> Result<(), ViewError> {
        if !(self.center.re.is_finite() && self.center.im.is_finite()) {
            return Err(ViewError::NonFiniteCenter);
        }
        // NaN もここで弾かれる
        if !(self.real_range > 0.0 && self.real_range.is_finite()) {
            return Err(ViewError::NonPositiveRealRange(self.real_range));
        }
        if !(self.imag_range > 0.0 && self.imag_range.is_finite()) {
            return Err(ViewError::NonPositiveImagRange(self.imag_range));
        }
        if self.x_pixels == 0 {
            return Err(ViewError::ZeroWidth);
        }
        if self.y_pixels == 0 {
            return Err(ViewError::ZeroHeight);
        }
        if self.max_iterations == 0 {
            return Err(ViewError::ZeroIterations);
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.x_pixels * self.y_pixels
    }

    /// ARGB8888 バッファに必要なバイト数
    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

impl Default for ViewDescriptor {
    fn default() -> Self {
        Self::new(
            Complex::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            DEFAULT_REAL_RANGE,
            DEFAULT_IMAG_RANGE,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            MAX_ITER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewDescriptor {
        ViewDescriptor::new(Complex::new(-0.5, 0.0), 1.0, 1.4321, 1024, 1024, 1024)
    }

    #[test]
    fn equal_views_compare_equal() {
        let a = view();
        let b = view();
        assert_eq!(a, b);
    }

    #[test]
    fn any_changed_field_breaks_equality() {
        let a = view();

        let mut c = a;
        c.center += Complex::new(0.1, 0.0);
        assert_ne!(a, c);

        let mut c = a;
        c.x_pixels += 1;
        assert_ne!(a, c);
        c.x_pixels -= 1;
        assert_eq!(a, c);

        let mut c = a;
        c.imag_range *= 0.75;
        assert_ne!(a, c);

        let mut c = a;
        c.max_iterations = 2048;
        assert_ne!(a, c);
    }

    #[test]
    fn default_view_is_valid() {
        let v = ViewDescriptor::default();
        assert_eq!(v.validate(), Ok(()));
        assert_eq!(v.pixel_count(), 800 * 600);
        assert_eq!(v.buffer_len(), 4 * 800 * 600);
    }

    #[test]
    fn validate_rejects_each_invariant() {
        let mut v = view();
        v.real_range = 0.0;
        assert_eq!(v.validate(), Err(ViewError::NonPositiveRealRange(0.0)));

        let mut v = view();
        v.imag_range = -1.0;
        assert_eq!(v.validate(), Err(ViewError::NonPositiveImagRange(-1.0)));

        let mut v = view();
        v.real_range = f64::NAN;
        assert!(matches!(
            v.validate(),
            Err(ViewError::NonPositiveRealRange(_))
        ));

        let mut v = view();
        v.center = Complex::new(f64::INFINITY, 0.0);
        assert_eq!(v.validate(), Err(ViewError::NonFiniteCenter));

        let mut v = view();
        v.x_pixels = 0;
        assert_eq!(v.validate(), Err(ViewError::ZeroWidth));

        let mut v = view();
        v.y_pixels = 0;
        assert_eq!(v.validate(), Err(ViewError::ZeroHeight));

        let mut v = view();
        v.max_iterations = 0;
        assert_eq!(v.validate(), Err(ViewError::ZeroIterations));
    }
}
