//! Escape-time Mandelbrot renderer that writes an RGB PNG.
//!
//! [`compute`] holds the per-point iteration, [`colour`] turns iteration counts
//! into pixels and [`render`] drives the whole image and writes it to disk.

pub mod buffer;
pub mod cli;
pub mod colour;
pub mod compute;
pub mod config;
pub mod pixel;
pub mod render;
pub mod screen;
pub mod stats;
