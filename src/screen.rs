use crate::pixel::Complex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// The rectangle of the complex plane that is stretched over the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub min_real: f64,
    pub max_real: f64,
    pub min_imag: f64,
    pub max_imag: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            min_real: -2.0,
            max_real: 1.0,
            min_imag: -1.5,
            max_imag: 1.5,
        }
    }
}

impl Window {
    /**
    Plane point under pixel `(x, y)`.

    Pixel `(0, 0)` lands exactly on `(min_real, min_imag)`; the far edges
    `max_real`/`max_imag` are never reached, since `x < width` and `y < height`.
    Image rows grow downwards, so rows are ordered by increasing imaginary part.
    */
    pub fn to_plane(&self, size: Size, x: u32, y: u32) -> Complex {
        Complex {
            real: self.min_real
                + (x as f64 / size.width as f64) * (self.max_real - self.min_real),
            imaginary: self.min_imag
                + (y as f64 / size.height as f64) * (self.max_imag - self.min_imag),
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.min_real, self.max_real, self.min_imag, self.max_imag]
            .iter()
            .all(|bound| bound.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size {
        width: 800,
        height: 800,
    };

    #[test]
    fn first_pixel_is_window_corner() {
        let window = Window::default();
        assert_eq!(window.to_plane(SIZE, 0, 0), Complex::new(-2.0, -1.5));
    }

    #[test]
    fn mapping_uses_fractional_steps() {
        let window = Window::default();
        // 400 / 800 must be 0.5, not truncated to 0.
        assert_eq!(window.to_plane(SIZE, 400, 400), Complex::new(-0.5, 0.0));
        assert_eq!(window.to_plane(SIZE, 1, 0).real, -2.0 + (1.0 / 800.0) * 3.0);
    }

    #[test]
    fn last_pixel_stops_short_of_far_edge() {
        let window = Window::default();
        let c = window.to_plane(SIZE, 799, 799);
        assert!(c.real < window.max_real);
        assert!(c.imaginary < window.max_imag);
    }

    #[test]
    fn degenerate_window_maps_everything_to_one_point() {
        let window = Window {
            min_real: 0.0,
            max_real: 0.0,
            min_imag: 0.0,
            max_imag: 0.0,
        };
        let size = Size {
            width: 1,
            height: 1,
        };
        assert_eq!(window.to_plane(size, 0, 0), Complex::ZERO);
    }

    #[test]
    fn non_finite_bounds_are_detected() {
        assert!(Window::default().is_finite());
        let window = Window {
            max_imag: f64::NAN,
            ..Window::default()
        };
        assert!(!window.is_finite());
    }
}
