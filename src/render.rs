//! The raster driver: compute every pixel, then write the image.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{
    buffer::PixelBuffer, colour::colourize, compute::escape_time, config::Config, stats::Histogram,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Computing,
    Writing,
    Done,
    Failed,
}

#[derive(Debug)]
pub struct Rendered {
    pub buffer: PixelBuffer,
    pub histogram: Histogram,
}

/// Fill `buffer` with the escape-time colouring of `config`'s window.
///
/// Rows are spread over the current rayon pool. Each row is written by exactly
/// one worker, and every pixel depends only on its own coordinates, so the
/// result is the same for any number of threads.
pub fn fill(buffer: &mut PixelBuffer, config: &Config) -> Histogram {
    let size = buffer.size();
    let window = config.window;
    let max_iterations = config.max_iterations;

    buffer
        .pixels_mut()
        .par_chunks_exact_mut(size.width as usize)
        .enumerate()
        .map(|(y, row)| {
            let mut histogram = Histogram::default();
            for (x, pixel) in row.iter_mut().enumerate() {
                let c = window.to_plane(size, x as u32, y as u32);
                let iterations = escape_time(c, max_iterations);
                histogram.record(iterations, max_iterations);
                *pixel = colourize(iterations, max_iterations);
            }
            histogram
        })
        .reduce(Histogram::default, Histogram::merge)
}

/// Compute the whole image on a dedicated pool of `config.threads` workers.
pub fn compute(config: &Config) -> Result<Rendered> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .thread_name(|index| format!("mandelbrot-{index}"))
        .build()
        .context("cannot start worker threads")?;

    let mut buffer = PixelBuffer::new(config.size);
    let histogram = pool.install(|| fill(&mut buffer, config));
    Ok(Rendered { buffer, histogram })
}

/// Encode `buffer` as an 8-bit RGB PNG at `path`.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let size = buffer.size();
    trace!(
        "encoding {}x{} png, stride {} bytes",
        size.width,
        size.height,
        buffer.stride()
    );
    image::save_buffer_with_format(
        path,
        buffer.as_bytes(),
        size.width,
        size.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("cannot write {}", path.display()))
}

/// Runs the render as `Computing → Writing → Done`, or `Failed` if the image
/// can't be written.
pub struct Driver<'a> {
    config: &'a Config,
    state: State,
}

impl<'a> Driver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            state: State::Computing,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    fn transition(&mut self, next: State) {
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn run(&mut self) -> Result<Rendered> {
        if self.state != State::Computing {
            bail!("render already ran and ended in {:?}", self.state);
        }
        debug!("rendering with {:?}", self.config);

        info!("Generating Mandelbrot...");
        let rendered = match compute(self.config) {
            Ok(rendered) => rendered,
            Err(error) => {
                self.transition(State::Failed);
                return Err(error);
            }
        };
        info!("Mandelbrot generation complete.");
        info!("Image buffer size: {}", rendered.buffer.len_bytes());

        let histogram = &rendered.histogram;
        debug!(
            "{} interior pixels, {} escaped over {} distinct counts, range {:?}",
            histogram.interior,
            histogram.escaped,
            histogram.distinct_escape_counts(),
            histogram.escape_range()
        );

        self.transition(State::Writing);
        if let Err(error) = write_png(&rendered.buffer, &self.config.output) {
            self.transition(State::Failed);
            return Err(error.context("Failed to save the image!"));
        }

        self.transition(State::Done);
        info!("Image saved successfully!");
        Ok(rendered)
    }
}
