//! Software rasterizer: a [`Surface`] over an RGBA framebuffer.
//!
//! Pixel format matches `pixels`: tightly packed RGBA, four bytes per pixel.
//! Arcs are stroked per-pixel with distance-based anti-aliasing; text goes
//! through `rusttype` with the string centered on its anchor point.

use std::f64::consts::TAU;

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::config::Color;
use crate::surface::{Rect, StrokeStyle, Surface, TextStyle};

/// Rasterizing surface borrowing a frame for the duration of one draw pass.
pub struct FrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    font: &'a Font<'a>,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32, font: &'a Font<'a>) -> Self {
        Self {
            frame,
            width,
            height,
            font,
        }
    }

    /// Fills the whole frame with an opaque color.
    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }
}

impl Surface for FrameSurface<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_arc(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64, style: StrokeStyle) {
        if sweep_deg <= 0.0 {
            return;
        }
        let cx = bounds.center_x();
        let cy = bounds.center_y();
        let radius = bounds.width() / 2.0;
        let start = start_deg.to_radians();
        let sweep = sweep_deg.to_radians().min(TAU);
        stroke_arc(
            self.frame,
            self.width as usize,
            self.height as usize,
            cx,
            cy,
            radius,
            f64::from(style.width),
            start,
            sweep,
            style.color,
        );
        if style.rounded_caps && sweep < TAU {
            let cap_radius = (f64::from(style.width) / 2.0).round() as i32;
            for angle in [start, start + sweep] {
                fill_circle(
                    self.frame,
                    self.width as usize,
                    (cx + angle.cos() * radius).round() as i32,
                    (cy + angle.sin() * radius).round() as i32,
                    cap_radius,
                    style.color,
                );
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        draw_text_centered(
            self.frame,
            self.width as usize,
            self.height as usize,
            x.round() as i32,
            y.round() as i32,
            text,
            self.font,
            Scale::uniform(style.size),
            style.color,
        );
    }

    fn line_height(&self, style: TextStyle) -> f64 {
        let metrics = self.font.v_metrics(Scale::uniform(style.size));
        f64::from(metrics.ascent - metrics.descent)
    }
}

fn set_pixel(frame: &mut [u8], width: usize, x: usize, y: usize, color: Color, alpha: f32) {
    if x < width && y < frame.len() / (width * 4) {
        let idx = (y * width + x) * 4;
        let src = [color.r as f32, color.g as f32, color.b as f32];
        let a = alpha.clamp(0.0, 1.0);
        for (offset, channel) in src.iter().enumerate() {
            let dst = frame[idx + offset] as f32;
            frame[idx + offset] = (channel * a + dst * (1.0 - a)).round() as u8;
        }
        frame[idx + 3] = 0xff;
    }
}

/// Strokes an arc centered on `(cx, cy)` with the stroke straddling `radius`.
/// Angles are in radians, screen convention; the sweep may wrap past 2π.
#[allow(clippy::too_many_arguments)]
pub(crate) fn stroke_arc(
    frame: &mut [u8],
    width: usize,
    height: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    stroke_width: f64,
    start: f64,
    sweep: f64,
    color: Color,
) {
    let half = stroke_width / 2.0;
    let mut start = start.rem_euclid(TAU);
    let mut end = (start + sweep).rem_euclid(TAU);
    if (sweep - TAU).abs() < f64::EPSILON {
        // Full circle; avoid start == end collapsing the span.
        start = 0.0;
        end = TAU;
    }

    let reach = (radius + half + 1.0).ceil() as i32;
    let min_x = ((cx as i32) - reach).max(0);
    let max_x = ((cx as i32) + reach).min(width as i32 - 1);
    let min_y = ((cy as i32) - reach).max(0);
    let max_y = ((cy as i32) + reach).min(height as i32 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < radius - half - 1.0 || dist > radius + half + 1.0 {
                continue;
            }
            let angle = dy.atan2(dx).rem_euclid(TAU);
            let in_arc = if start <= end {
                angle >= start && angle <= end
            } else {
                angle >= start || angle <= end
            };
            if !in_arc {
                continue;
            }
            let aa = if dist > radius + half {
                1.0 - (dist - radius - half).min(1.0)
            } else if dist < radius - half {
                1.0 - (radius - half - dist).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                set_pixel(frame, width, x as usize, y as usize, color, aa as f32);
            }
        }
    }
}

pub(crate) fn fill_circle(
    frame: &mut [u8],
    width: usize,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) {
    for y in -radius..=radius {
        for x in -radius..=radius {
            let dist = f64::from(x * x + y * y).sqrt();
            let aa = if dist > f64::from(radius) {
                1.0 - (dist - f64::from(radius)).min(1.0)
            } else {
                1.0
            };
            if dist <= f64::from(radius) + 1.0 && aa > 0.0 {
                let px = cx + x;
                let py = cy + y;
                if px >= 0 && py >= 0 && (px as usize) < width {
                    set_pixel(frame, width, px as usize, py as usize, color, aa as f32);
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_text_centered(
    frame: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    text: &str,
    font: &Font,
    scale: Scale,
    color: Color,
) {
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<PositionedGlyph> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();
    let (min_x, max_x, min_y, max_y) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
        (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
        |(min_x, max_x, min_y, max_y), bb| {
            (
                min_x.min(bb.min.x),
                max_x.max(bb.max.x),
                min_y.min(bb.min.y),
                max_y.max(bb.max.y),
            )
        },
    );
    let width_px = if min_x < max_x { max_x - min_x } else { 0 };
    let height_px = if min_y < max_y { max_y - min_y } else { 0 };
    let offset_x = x - width_px / 2;
    let offset_y = y - height_px / 2;
    for glyph in glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = offset_x + gx as i32 + bb.min.x - min_x;
                let py = offset_y + gy as i32 + bb.min.y - min_y;
                if px >= 0 && px < width as i32 && py >= 0 && py < height as i32 {
                    set_pixel(frame, width, px as usize, py as usize, color, v);
                }
            });
        }
    }
}
