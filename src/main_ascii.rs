//! 反復回数を数字（mod 10）で標準出力に描く

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use almondbread::common::constants::MAX_ITER;
use almondbread::{FractalEngine, IterationGrid, ViewDescriptor};
use log::error;
use num_complex::Complex;

const COLS: usize = 150;
const ROWS: usize = 50;

fn print_grid(grid: &IterationGrid, out: &mut impl Write) -> io::Result<()> {
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|&v| char::from_digit(v % 10, 10).unwrap_or('?'))
            .collect();
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // 1文字あたり実軸 0.025, 虚軸 0.05
    let view = ViewDescriptor::new(
        Complex::new(-0.5, 0.0),
        COLS as f64 * 0.025,
        ROWS as f64 * 0.05,
        COLS,
        ROWS,
        MAX_ITER,
    );
    let mut engine = FractalEngine::new()?;
    let grid = engine.iterations(&view)?;

    let stdout = io::stdout();
    print_grid(grid, &mut BufWriter::new(stdout.lock()))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_line_per_row() {
        let view = ViewDescriptor::new(Complex::new(-0.5, 0.0), 3.0, 2.0, 6, 3, 25);
        let mut engine = FractalEngine::new().unwrap();
        let grid = engine.iterations(&view).unwrap();
        let mut out = Vec::new();
        print_grid(grid, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 6));
        assert!(text.lines().flat_map(str::chars).all(|c| c.is_ascii_digit() || c == '\n'));
    }
}
