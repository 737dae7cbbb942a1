//! Colouring algorithms.

use crate::pixel::Rgb;

/**
Map an escape-time result to a colour.

Points that exhausted the iteration budget are black. Everything else gets a
smooth gradient built from three Bernstein-like polynomials of
`t = iterations / max_iterations`:

- red: `9 (1-t) t³`
- green: `15 (1-t)² t²`
- blue: `8.5 (1-t)³ t`
*/
pub fn colourize(iterations: u32, max_iterations: u32) -> Rgb {
    if iterations == max_iterations {
        return Rgb::BLACK;
    }

    let t = iterations as f64 / max_iterations as f64;
    let s = 1.0 - t;

    Rgb {
        r: channel(9.0 * s * t * t * t),
        g: channel(15.0 * s * s * t * t),
        b: channel(8.5 * s * s * s * t),
    }
}

/// Scale a polynomial value in `[0, 1]` to a byte. The 1.5 gain pushes channel
/// peaks past 255, so the truncated result is clamped.
fn channel(value: f64) -> u8 {
    (value * 255.0 * 1.5).clamp(0.0, 255.0) as u8
}
