//! PNG bar chart of the most frequent words.
//!
//! Labels are drawn with a tiny built-in 5x7 bitmap font, so no font files are needed.
//! Letters are shown in capitals; characters without a glyph are drawn as a hollow box.

use std::path::{Path, PathBuf};

use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::image::{ImageFormat, Rgb, RgbImage};
use imageproc::rect::Rect;
use log::debug;

use crate::error::{AnalysisError, Result};
use crate::frequency::RankedEntry;
use crate::io::{absolute, ensure_parent_dir};

/// Number of entries drawn.
pub const CHART_ENTRIES: usize = 10;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 480;
const MARGIN_LEFT: u32 = 40;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 50;
const MARGIN_BOTTOM: u32 = 50;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const BAR: Rgb<u8> = Rgb([70, 130, 180]);
const TEXT: Rgb<u8> = Rgb([20, 20, 20]);

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

///Renders the first ten entries as a bar chart and saves it as PNG.
pub fn render_chart(entries: &[RankedEntry], path: &Path) -> Result<PathBuf> {
    let top = chart_entries(entries);
    let img = draw_chart(top, "TOP 10 WORDS");

    ensure_parent_dir(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| AnalysisError::export(path, e))?;
    debug!("chart with {} bars written to {}", top.len(), path.display());
    Ok(absolute(path))
}

///The leading entries that get a bar, at most [`CHART_ENTRIES`].
pub(crate) fn chart_entries(entries: &[RankedEntry]) -> &[RankedEntry] {
    &entries[..entries.len().min(CHART_ENTRIES)]
}

fn plot_bottom() -> u32 {
    HEIGHT - MARGIN_BOTTOM
}

fn plot_height() -> u32 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

///Bar rectangles, one per entry, scaled so the largest count fills the plot height.
pub(crate) fn bar_rects(entries: &[RankedEntry]) -> Vec<Rect> {
    let max = entries.iter().map(|e| e.count).max().unwrap_or(0);
    if entries.is_empty() || max == 0 {
        return Vec::new();
    }
    let slot = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / entries.len() as u32;
    let bar_w = (slot * 7 / 10).max(1);

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let h = ((entry.count as u64 * plot_height() as u64) / max as u64).max(1) as u32;
            let x = MARGIN_LEFT + i as u32 * slot + (slot - bar_w) / 2;
            let y = plot_bottom() - h;
            Rect::at(x as i32, y as i32).of_size(bar_w, h)
        })
        .collect()
}

fn draw_chart(entries: &[RankedEntry], title: &str) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let title_x = (WIDTH.saturating_sub(text_width(title, 2))) / 2;
    draw_text(&mut img, title, title_x, 15, 2);

    let origin = (MARGIN_LEFT as f32, plot_bottom() as f32);
    draw_line_segment_mut(&mut img, origin, ((WIDTH - MARGIN_RIGHT) as f32, origin.1), AXIS);
    draw_line_segment_mut(&mut img, origin, (origin.0, MARGIN_TOP as f32 - 10.0), AXIS);

    let slot = if entries.is_empty() {
        0
    } else {
        (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / entries.len() as u32
    };

    for (i, (entry, rect)) in entries.iter().zip(bar_rects(entries)).enumerate() {
        draw_filled_rect_mut(&mut img, rect, BAR);

        let count = entry.count.to_string();
        let count_w = text_width(&count, 2);
        let cx = rect.left() as u32 + rect.width() / 2;
        let count_y = (rect.top() as u32).saturating_sub(GLYPH_H * 2 + 4);
        draw_text(&mut img, &count, cx.saturating_sub(count_w / 2), count_y, 2);

        let (label, scale) = fit_label(&entry.word, slot);
        let label_w = text_width(&label, scale);
        let slot_x = MARGIN_LEFT + i as u32 * slot;
        let label_x = slot_x + slot.saturating_sub(label_w) / 2;
        draw_text(&mut img, &label, label_x, plot_bottom() + 10, scale);
    }
    img
}

///Picks the largest scale at which the word fits the slot, cutting it if even scale 1 is too wide.
fn fit_label(word: &str, slot: u32) -> (String, u32) {
    if text_width(word, 2) <= slot {
        return (word.to_string(), 2);
    }
    let advance = GLYPH_W + 1;
    let max_chars = (slot / advance).max(1) as usize;
    (word.chars().take(max_chars).collect(), 1)
}

fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    (n * (GLYPH_W + 1) - 1) * scale
}

fn draw_text(img: &mut RgbImage, text: &str, x: u32, y: u32, scale: u32) {
    for (i, c) in text.chars().enumerate() {
        let gx = x + i as u32 * (GLYPH_W + 1) * scale;
        let rows = glyph(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                    let px = gx + col * scale;
                    let py = y + row as u32 * scale;
                    if px + scale <= img.width() && py + scale <= img.height() {
                        draw_filled_rect_mut(
                            img,
                            Rect::at(px as i32, py as i32).of_size(scale, scale),
                            TEXT,
                        );
                    }
                }
            }
        }
    }
}

fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        ' ' => [0; 7],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '_' => [0, 0, 0, 0, 0, 0, 0b11111],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}
