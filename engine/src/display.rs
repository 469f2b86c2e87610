use std::fmt;

use crate::{config::SpriteMode, execution::InterpreterError};

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// The 64x32 monochrome framebuffer, one byte (0 or 1) per pixel.
///
/// Only the clear-screen and draw instructions mutate it. `dirty` tells the
/// presenter that the contents changed since it last acknowledged them.
#[derive(Clone)]
pub(crate) struct Framebuffer {
    pixels: [u8; DISPLAY_SIZE],
    dirty: bool,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self {
            pixels: [0; DISPLAY_SIZE],
            dirty: true,
        }
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lit = self.pixels.iter().filter(|&&p| p != 0).count();
        f.debug_struct("Framebuffer")
            .field("lit", &lit)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Framebuffer {
    pub(crate) fn clear(&mut self) {
        self.pixels.fill(0);
        self.dirty = true;
    }

    pub(crate) fn mark_presented(&mut self) {
        self.dirty = false;
    }

    /// XORs an 8-pixel-wide sprite onto the buffer at (`x`, `y`), one byte per
    /// row, most significant bit leftmost.
    ///
    /// Returns `true` if any set sprite bit hit a pixel that was already lit.
    /// With `strict` set, a sprite reaching past the end of the buffer in
    /// [`SpriteMode::Linear`] is rejected before any pixel changes.
    pub(crate) fn draw_sprite(
        &mut self,
        x: u8,
        y: u8,
        rows: &[u8],
        mode: SpriteMode,
        strict: bool,
    ) -> Result<bool, InterpreterError> {
        if strict {
            if let Some(index) = Self::lit_indices(x, y, rows, mode).find(|&i| i >= DISPLAY_SIZE) {
                return Err(InterpreterError::PixelOutOfRange(index));
            }
        }

        let mut collision = false;
        for index in Self::lit_indices(x, y, rows, mode) {
            let Some(pixel) = self.pixels.get_mut(index) else {
                continue;
            };
            collision |= *pixel == 1;
            *pixel ^= 1;
        }

        self.dirty = true;
        Ok(collision)
    }

    /// Buffer indices of the set bits in `rows`; may exceed the buffer in
    /// linear mode.
    fn lit_indices(
        x: u8,
        y: u8,
        rows: &[u8],
        mode: SpriteMode,
    ) -> impl Iterator<Item = usize> + '_ {
        rows.iter().enumerate().flat_map(move |(row, &data)| {
            (0..8)
                .filter(move |column| data & (0x80 >> column) != 0)
                .map(move |column| {
                    let px = x as usize + column;
                    let py = y as usize + row;
                    match mode {
                        SpriteMode::Linear => px + py * DISPLAY_WIDTH,
                        SpriteMode::Wrap => {
                            (px % DISPLAY_WIDTH) + (py % DISPLAY_HEIGHT) * DISPLAY_WIDTH
                        }
                    }
                })
        })
    }

    pub(crate) fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            pixels: self.pixels,
            dirty: self.dirty,
        }
    }
}

/// Read-only copy of the framebuffer handed to the presentation layer.
#[derive(Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    pixels: [u8; DISPLAY_SIZE],
    dirty: bool,
}

impl DisplaySnapshot {
    /// Row-major pixels, each 0 or 1.
    pub fn pixels(&self) -> &[u8; DISPLAY_SIZE] {
        &self.pixels
    }

    /// Whether the framebuffer changed since the presenter last called
    /// [`Interpreter::mark_presented`](crate::Interpreter::mark_presented).
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Panics if the coordinates are off-screen.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        assert!(x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT, "pixel ({x}, {y}) is off-screen");
        self.pixels[x + y * DISPLAY_WIDTH] != 0
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(DISPLAY_WIDTH)
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }
}

impl fmt::Debug for DisplaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplaySnapshot")
            .field("lit", &self.lit_count())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl fmt::Display for DisplaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &pixel in row {
                f.write_str(if pixel != 0 { "█" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
