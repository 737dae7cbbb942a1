//! Escape-time evaluation of `z ← z² + c`.

use crate::pixel::Complex;

/// Orbits whose magnitude reaches this value are guaranteed to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

/**
Number of iterations of `z ← z² + c`, starting from `z = 0`, before `|z| ≥ 2`.

The result is in `[0, max_iterations]`. A result equal to `max_iterations` means
the orbit stayed bounded for the whole budget, which is taken to mean `c` is
(probably) inside the set.
*/
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iterations = 0;
    while z.norm() < ESCAPE_RADIUS && iterations < max_iterations {
        z = z.square() + c;
        iterations += 1;
    }
    iterations
}

pub fn evaluate(real: f64, imaginary: f64, max_iterations: u32) -> u32 {
    escape_time(Complex::new(real, imaginary), max_iterations)
}
