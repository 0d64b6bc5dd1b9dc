//! Official artwork downscaled to terminal cells

use image::imageops::FilterType;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Thumbnail size in pixels. Each cell holds two stacked pixels, so this
/// is 20 columns by 10 rows on screen.
pub const ARTWORK_WIDTH: u32 = 20;
pub const ARTWORK_HEIGHT: u32 = 20;

const ALPHA_CUTOFF: u8 = 128;
const UPPER_HALF: char = '▀';

/// RGBA pixels, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Thumbnail {
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let px = self.pixels.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel(x, y)
            .filter(|px| px[3] >= ALPHA_CUTOFF)
            .map(|px| Color::Rgb(px[0], px[1], px[2]))
    }

    /// Height in terminal rows.
    pub fn rows(&self) -> u16 {
        self.height.div_ceil(2) as u16
    }
}

/// Decode image bytes and fit them into `max_width` x `max_height`,
/// keeping the aspect ratio.
pub fn decode_thumbnail(
    bytes: &[u8],
    max_width: u32,
    max_height: u32,
) -> Result<Thumbnail, String> {
    let image = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let fitted = image
        .resize(max_width.max(1), max_height.max(1), FilterType::Triangle)
        .to_rgba8();
    let (width, height) = fitted.dimensions();
    Ok(Thumbnail {
        width,
        height,
        pixels: fitted.into_raw(),
    })
}

/// Half-block rendering of a [`Thumbnail`], centered in its area.
pub struct ArtworkView<'a> {
    pub thumbnail: &'a Thumbnail,
    pub background: Color,
}

impl Widget for ArtworkView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let thumb = self.thumbnail;
        let cols = (thumb.width as u16).min(area.width);
        let rows = thumb.rows().min(area.height);
        let left = area.x + (area.width - cols) / 2;
        let top = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let upper = thumb.color_at(col as u32, row as u32 * 2);
                let lower = thumb.color_at(col as u32, row as u32 * 2 + 1);
                if upper.is_none() && lower.is_none() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((left + col, top + row)) {
                    cell.set_char(UPPER_HALF)
                        .set_fg(upper.unwrap_or(self.background))
                        .set_bg(lower.unwrap_or(self.background));
                }
            }
        }
    }
}
