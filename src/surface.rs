//! CPU pixel buffers used for sprites and rendered text
//!
//! A [`Surface`] is a row-major RGBA8 buffer. Blitting composites the
//! source over the destination with straight (non-premultiplied) alpha.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// An RGBA8 color
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const TOMATO: Color = Color::rgb(255, 99, 71);
    pub const CORAL: Color = Color::rgb(255, 127, 80);
    pub const CRIMSON: Color = Color::rgb(220, 20, 60);
    pub const GRAY: Color = Color::rgb(190, 190, 190);
    pub const NAVY: Color = Color::rgb(0, 0, 128);
    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Look up a named color (case-insensitive, spaces and underscores ignored)
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let color = match key.as_str() {
            "transparent" => Color::TRANSPARENT,
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "yellow" => Color::YELLOW,
            "gold" => Color::GOLD,
            "orange" => Color::ORANGE,
            "tomato" => Color::TOMATO,
            "coral" => Color::CORAL,
            "crimson" => Color::CRIMSON,
            "gray" | "grey" => Color::GRAY,
            "navy" => Color::NAVY,
            "skyblue" => Color::SKY_BLUE,
            _ => return None,
        };
        Some(color)
    }

    /// Same color with alpha scaled by `coverage` (0.0 - 1.0)
    pub fn with_coverage(self, coverage: f32) -> Self {
        let a = (self.a as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Composite `self` over `dst` (straight alpha)
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0 => return dst,
            255 => return self,
            _ => {}
        }
        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }
        let mix = |s: u8, d: u8| -> u8 {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: (out_a * 255.0).round() as u8,
        }
    }
}

/// Integer rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Move the rect so its center lands on `(cx, cy)`
    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Intersection of two rects (zero-sized at the origin of `self` if disjoint)
    pub fn clip(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return Rect::new(self.x, self.y, 0, 0);
        }
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Display pixel format a surface is converted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Per-pixel alpha preserved
    #[default]
    Rgba,
    /// Opaque; alpha is forced to 255
    Rgb,
}

/// A 2D pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<Color>,
}

impl Surface {
    /// Transparent black surface with per-pixel alpha
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Rgba,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let pixels = img
            .pixels()
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            format: PixelFormat::Rgba,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bounding rect at the origin
    pub fn get_rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get_at(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel; out-of-bounds writes are ignored
    pub fn set_at(&mut self, x: i32, y: i32, color: Color) {
        let opaque = self.format == PixelFormat::Rgb;
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = if opaque { Color { a: 255, ..color } } else { color };
        }
    }

    pub fn fill(&mut self, color: Color) {
        let color = match self.format {
            PixelFormat::Rgba => color,
            PixelFormat::Rgb => Color { a: 255, ..color },
        };
        self.pixels.fill(color);
    }

    /// Copy of this surface in the given display format
    pub fn convert(&self, format: PixelFormat) -> Surface {
        let pixels = match format {
            PixelFormat::Rgba => self.pixels.clone(),
            PixelFormat::Rgb => self.pixels.iter().map(|c| Color { a: 255, ..*c }).collect(),
        };
        Surface {
            width: self.width,
            height: self.height,
            format,
            pixels,
        }
    }

    /// Composite `src` with its top-left corner at `dest`.
    ///
    /// Returns the destination area actually touched after clipping.
    pub fn blit(&mut self, src: &Surface, dest: (i32, i32)) -> Rect {
        let target = Rect::new(dest.0, dest.1, src.width as i32, src.height as i32);
        let area = target.clip(&self.get_rect());
        let opaque_dst = self.format == PixelFormat::Rgb;

        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let Some(s) = src.get_at(x - dest.0, y - dest.1) else {
                    continue;
                };
                let Some(i) = self.index(x, y) else {
                    continue;
                };
                let d = self.pixels[i];
                let mut out = s.over(if opaque_dst { Color { a: 255, ..d } } else { d });
                if opaque_dst {
                    out.a = 255;
                }
                self.pixels[i] = out;
            }
        }

        area
    }
}
