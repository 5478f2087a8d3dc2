//! Presentation collaborators.
//!
//! A [`Presenter`] receives the finished buffer once per frame. Because it
//! takes `&PixelBuffer`, the borrow checker guarantees no rasterization is in
//! flight while a frame is being copied out.

mod png_encoder;

pub use png_encoder::PngEncoder;

use crate::color::Color;
use crate::error::Result;
use crate::framebuffer::PixelBuffer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Consumer of finished frames.
pub trait Presenter {
    /// Take one finished frame.
    ///
    /// # Errors
    ///
    /// Implementation specific; typically I/O or encoding failures.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()>;
}

/// Writes each presented frame as `<prefix>_<NNNN>.png` into a directory.
#[derive(Debug, Clone)]
pub struct PngPresenter {
    dir: PathBuf,
    prefix: String,
    frames: u32,
}

impl PngPresenter {
    /// Presenter writing into `dir`, which is created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: "frame".to_string(),
            frames: 0,
        })
    }

    /// Use `prefix` for file names instead of `frame`.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Frames written so far.
    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    /// Path the next frame will be written to.
    #[must_use]
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("{}_{:04}.png", self.prefix, self.frames))
    }
}

impl Presenter for PngPresenter {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        let path = self.next_path();
        PngEncoder::write_to_file(buffer, &path)?;
        debug!("presented frame {} to {}", self.frames, path.display());
        self.frames += 1;
        Ok(())
    }
}

/// Alternating redraw color, owned by the presentation context.
///
/// Starts at white; each [`RedrawToggle::next`] returns the current color
/// and flips to the other one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawToggle {
    dark: bool,
}

impl RedrawToggle {
    /// New toggle starting at white.
    #[must_use]
    pub const fn new() -> Self {
        Self { dark: false }
    }

    /// Current color, then flip.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Color {
        let color = self.peek();
        self.dark = !self.dark;
        color
    }

    /// Color the next call to [`RedrawToggle::next`] returns.
    #[must_use]
    pub const fn peek(&self) -> Color {
        if self.dark {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}
