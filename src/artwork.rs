//! Official artwork decoding and half-block rendering

use image::imageops::FilterType;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::Widget;
use serde::{Deserialize, Serialize};

/// Artwork is downsampled to fit this many pixels per side. One terminal cell
/// holds two vertical pixels, so this is also the rendered width in columns.
pub const ARTWORK_PIXELS: u32 = 32;

const ALPHA_CUTOFF: u8 = 128;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub width: u16,
    pub height: u16,
    /// Row-major RGBA pixels.
    pub pixels: Vec<[u8; 4]>,
}

impl Artwork {
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Terminal rows needed to draw the whole image.
    pub fn rows(&self) -> u16 {
        self.height.div_ceil(2)
    }

    fn opaque_color(&self, x: u16, y: u16) -> Option<Color> {
        let [r, g, b, a] = self.pixel(x, y)?;
        (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
    }
}

pub fn decode(bytes: &[u8], max_pixels: u32) -> Result<Artwork, image::ImageError> {
    let image = image::load_from_memory(bytes)?;
    let resized = image.resize(max_pixels, max_pixels, FilterType::Triangle);
    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba.pixels().map(|pixel| pixel.0).collect();
    Ok(Artwork {
        width: width as u16,
        height: height as u16,
        pixels,
    })
}

/// Draws artwork centered in its area using `▀`/`▄` cells; transparent
/// pixels leave the background untouched.
pub struct ArtworkView<'a> {
    artwork: &'a Artwork,
}

impl<'a> ArtworkView<'a> {
    pub fn new(artwork: &'a Artwork) -> Self {
        Self { artwork }
    }
}

impl Widget for ArtworkView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let art = self.artwork;
        let cols = art.width.min(area.width);
        let rows = art.rows().min(area.height);
        let offset_x = area.x + area.width.saturating_sub(cols) / 2;
        let offset_y = area.y + area.height.saturating_sub(rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let top = art.opaque_color(col, row * 2);
                let bottom = art.opaque_color(col, row * 2 + 1);
                let Some(cell) = buf.cell_mut(Position::new(offset_x + col, offset_y + row))
                else {
                    continue;
                };
                match (top, bottom) {
                    (Some(top), Some(bottom)) => {
                        cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                    }
                    (Some(top), None) => {
                        cell.set_symbol("▀").set_fg(top);
                    }
                    (None, Some(bottom)) => {
                        cell.set_symbol("▄").set_fg(bottom);
                    }
                    (None, None) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    use super::*;

    fn png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn test_decode_downsamples_keeping_aspect() {
        let bytes = png(64, 32, [255, 0, 0, 255]);
        let artwork = decode(&bytes, 16).expect("decode");
        assert_eq!(artwork.width, 16);
        assert_eq!(artwork.height, 8);
        assert_eq!(artwork.rows(), 4);
        let [r, g, _, a] = artwork.pixel(0, 0).expect("pixel in bounds");
        assert!(r > 250 && g < 5 && a > 250);
        assert_eq!(artwork.pixel(16, 0), None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode(b"not an image", 16).is_err());
    }

    #[test]
    fn test_render_draws_half_blocks() {
        let artwork = Artwork {
            width: 2,
            height: 2,
            pixels: vec![[10, 20, 30, 255], [0, 0, 0, 0], [1, 2, 3, 255], [0, 0, 0, 0]],
        };
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        ArtworkView::new(&artwork).render(area, &mut buf);

        let first = &buf[(0, 0)];
        assert_eq!(first.symbol(), "▀");
        assert_eq!(first.fg, Color::Rgb(10, 20, 30));
        assert_eq!(first.bg, Color::Rgb(1, 2, 3));
        assert_eq!(buf[(1, 0)].symbol(), " ");
    }
}
