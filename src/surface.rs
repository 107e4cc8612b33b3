//! The drawing surface contract and a retained-mode recording surface.

use crate::config::Color;

/// Axis-aligned box the arcs are laid out in, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Stroke description for arc drawing. Built once per render from the
/// configuration and passed by value; surfaces hold no mutable paint state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub rounded_caps: bool,
}

/// Text description for label drawing. Text is always centered on the given
/// point horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
}

/// What the renderer needs from a drawing target: its viewport, stroked
/// arcs, centered text, and vertical text metrics.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Strokes an arc inscribed in `bounds`, starting at `start_deg` and
    /// sweeping `sweep_deg` clockwise.
    fn draw_arc(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64, style: StrokeStyle);

    /// Draws `text` centered horizontally on `x`, baseline region around `y`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);

    /// Vertical advance (descent minus ascent) of a line drawn with `style`.
    fn line_height(&self, style: TextStyle) -> f64;
}

/// One recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Arc {
        bounds: Rect,
        start_deg: f64,
        sweep_deg: f64,
        style: StrokeStyle,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
}

/// A surface that records draw calls instead of rasterizing them. Used by
/// tests and headless hosts; two renders of the same state record identical
/// call sequences.
#[derive(Debug)]
pub struct SceneRecorder {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl SceneRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for SceneRecorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_arc(&mut self, bounds: Rect, start_deg: f64, sweep_deg: f64, style: StrokeStyle) {
        self.calls.push(DrawCall::Arc {
            bounds,
            start_deg,
            sweep_deg,
            style,
        });
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }

    fn line_height(&self, style: TextStyle) -> f64 {
        // No font to measure against; the usual 1.2em approximation.
        f64::from(style.size) * 1.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_derives() {
        let rect = Rect {
            left: 15.0,
            top: 15.0,
            right: 385.0,
            bottom: 385.0,
        };
        assert_eq!(rect.width(), 370.0);
        assert_eq!(rect.height(), 370.0);
        assert_eq!(rect.center_x(), 200.0);
        assert_eq!(rect.center_y(), 200.0);
    }

    #[test]
    fn recorder_keeps_call_order() {
        let mut recorder = SceneRecorder::new(400, 400);
        let style = TextStyle {
            color: Color::new(0, 0, 0),
            size: 50.0,
        };
        recorder.draw_text("a", 1.0, 2.0, style);
        recorder.draw_text("b", 3.0, 4.0, style);
        assert_eq!(recorder.calls().len(), 2);
        assert!(matches!(&recorder.calls()[0], DrawCall::Text { text, .. } if text == "a"));
        recorder.clear();
        assert!(recorder.calls().is_empty());
    }
}
