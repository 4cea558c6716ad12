//! Map frame buffer
//!
//! Four parallel arrays over a `width x height` grid. Host coordinates are
//! 1-based horizontally and 0-based vertically; anything out of range wraps.

use crate::host::MappedGlyph;

/// Character stored in blank cells
pub const BLANK_CHAR: u8 = b' ';

/// Shadow copy of the map window
#[derive(Debug, Clone)]
pub struct GlyphFrameBuffer {
    width: usize,
    height: usize,
    glyphs: Vec<i16>,
    chars: Vec<u8>,
    colors: Vec<u8>,
    specials: Vec<u8>,
}

impl GlyphFrameBuffer {
    /// Create a blank buffer; zero dimensions are raised to one
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let cells = width * height;
        let mut buffer = Self {
            width,
            height,
            glyphs: vec![0; cells],
            chars: vec![0; cells],
            colors: vec![0; cells],
            specials: vec![0; cells],
        };
        buffer.reset();
        buffer
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat offset of host coordinate (x, y)
    pub fn offset(&self, x: i32, y: i32) -> usize {
        let row = i64::from(y).rem_euclid(self.height as i64) as usize;
        let col = (i64::from(x) - 1).rem_euclid(self.width as i64) as usize;
        row * self.width + col
    }

    /// Store the raw glyph id; ids beyond i16 are truncated as the host does
    pub fn write(&mut self, x: i32, y: i32, glyph: i32) {
        let offset = self.offset(x, y);
        self.glyphs[offset] = glyph as i16;
    }

    /// Store the rendered facts of a cell
    pub fn write_mapped(&mut self, x: i32, y: i32, mapped: MappedGlyph) {
        let offset = self.offset(x, y);
        self.chars[offset] = mapped.ch;
        self.colors[offset] = mapped.color;
        self.specials[offset] = mapped.special;
    }

    /// Blank every cell
    pub fn reset(&mut self) {
        self.glyphs.fill(0);
        self.chars.fill(BLANK_CHAR);
        self.colors.fill(0);
        self.specials.fill(0);
    }

    /// Glyph and rendered facts at a 0-based grid position
    pub fn cell(&self, row: usize, col: usize) -> Option<(i16, MappedGlyph)> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let i = row * self.width + col;
        Some((
            self.glyphs[i],
            MappedGlyph {
                ch: self.chars[i],
                color: self.colors[i],
                special: self.specials[i],
            },
        ))
    }

    pub fn glyphs(&self) -> &[i16] {
        &self.glyphs
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    pub fn specials(&self) -> &[u8] {
        &self.specials
    }

    pub fn is_blank(&self) -> bool {
        self.glyphs.iter().all(|&g| g == 0)
            && self.chars.iter().all(|&c| c == BLANK_CHAR)
            && self.colors.iter().all(|&c| c == 0)
            && self.specials.iter().all(|&s| s == 0)
    }
}
