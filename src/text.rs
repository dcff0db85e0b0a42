//! Scalable bitmap text
//!
//! Glyphs are 5x7 cell bitmaps stretched to the requested pixel height.
//! Anti-aliased rendering takes 4x4 coverage samples per pixel; aliased
//! rendering samples each pixel center once.
//!
//! ```ignore
//! use treasure_hunt::{Font, Surface, print_text};
//!
//! let mut screen = Surface::new(800, 600);
//! let font = Font::new(64.0);
//! print_text(&mut screen, "You won!", &font, None);
//! ```

use crate::surface::{Color, Surface};

/// Color used by [`print_text`] when none is given
pub const DEFAULT_TEXT_COLOR: Color = Color::TOMATO;

/// Glyph grid size in cells
const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Horizontal cells per character including the one-cell gap
const ADVANCE_COLS: usize = GLYPH_COLS + 1;

/// Coverage samples per axis when anti-aliasing
const AA_SAMPLES: usize = 4;

/// A bitmap font at a fixed pixel height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_FONT_SIZE)
    }
}

impl Font {
    /// Create a font whose glyphs are `size` pixels tall (minimum 1)
    pub fn new(size: f32) -> Self {
        let size = if size.is_finite() { size.max(1.0) } else { 1.0 };
        Self { size }
    }

    #[inline]
    pub fn size_px(&self) -> f32 {
        self.size
    }

    /// Side length of one glyph cell in pixels
    #[inline]
    fn cell(&self) -> f32 {
        self.size / GLYPH_ROWS as f32
    }

    /// Line height in whole pixels
    pub fn height(&self) -> u32 {
        self.size.ceil() as u32
    }

    /// Dimensions of the surface [`render`](Self::render) would produce
    pub fn size(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count();
        if chars == 0 {
            return (0, self.height());
        }
        let cols = chars * ADVANCE_COLS - 1;
        let width = (cols as f32 * self.cell()).ceil() as u32;
        (width, self.height())
    }

    /// Render `text` onto a new transparent surface
    pub fn render(&self, text: &str, antialias: bool, color: Color) -> Surface {
        let glyphs: Vec<[u8; GLYPH_ROWS]> = text.chars().map(glyph).collect();
        let (width, height) = self.size(text);
        let mut surface = Surface::new(width, height);

        let cell = self.cell();
        let samples = if antialias { AA_SAMPLES } else { 1 };
        let step = 1.0 / samples as f32;
        let total = (samples * samples) as f32;

        let lit = |sx: f32, sy: f32| -> bool {
            let cx = (sx / cell) as usize;
            let cy = (sy / cell) as usize;
            let (index, col) = (cx / ADVANCE_COLS, cx % ADVANCE_COLS);
            if cy >= GLYPH_ROWS || col >= GLYPH_COLS {
                return false;
            }
            glyphs
                .get(index)
                .is_some_and(|rows| (rows[cy] >> (GLYPH_COLS - 1 - col)) & 1 == 1)
        };

        for py in 0..height {
            for px in 0..width {
                let mut hits = 0usize;
                for j in 0..samples {
                    for i in 0..samples {
                        let sx = px as f32 + (i as f32 + 0.5) * step;
                        let sy = py as f32 + (j as f32 + 0.5) * step;
                        if lit(sx, sy) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    let coverage = hits as f32 / total;
                    surface.set_at(px as i32, py as i32, color.with_coverage(coverage));
                }
            }
        }

        surface
    }
}

/// Render `text` anti-aliased and blit it centered on `surface`.
///
/// `None` uses [`DEFAULT_TEXT_COLOR`].
pub fn print_text(surface: &mut Surface, text: &str, font: &Font, color: Option<Color>) {
    let text_surface = font.render(text, true, color.unwrap_or(DEFAULT_TEXT_COLOR));

    let mut rect = text_surface.get_rect();
    let (w, h) = surface.size();
    rect.set_center(((w / 2) as i32, (h / 2) as i32));

    surface.blit(&text_surface, (rect.x, rect.y));
}

/// Rows of a 5x7 glyph, bit 4 = leftmost column
fn glyph(c: char) -> [u8; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        ' ' => [0x00; GLYPH_ROWS],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '=' => [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        // Hollow box for anything unmapped
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}
