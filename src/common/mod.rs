pub mod bands;
pub mod colors;
pub mod constants;
pub mod engine;
pub mod error;
pub mod grid;
pub mod mandelbrot;
pub mod view;
