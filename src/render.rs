//! Draw-call layout for one frame of the gauge.

use crate::angle::{MAX_SWEEP_DEG, START_ANGLE_DEG};
use crate::model::GaugeModel;
use crate::surface::{Rect, StrokeStyle, Surface, TextStyle};

/// Issues the frame's draw calls: background arc, foreground arc, then the
/// three labels. Reads the model only; layout is recomputed from the surface
/// dimensions on every call, so equal state yields an equal call sequence.
///
/// The gauge assumes a square viewport; bounds are derived from the width
/// alone, inset by the stroke width so the stroked arcs are not clipped. A
/// zero-area viewport draws nothing.
pub fn render_gauge<S: Surface>(model: &GaugeModel, surface: &mut S) {
    let width = surface.width();
    let height = surface.height();
    if width == 0 || height == 0 {
        return;
    }

    let config = model.config();
    let stroke = f64::from(config.stroke_width);
    let bounds = Rect {
        left: stroke,
        top: stroke,
        right: f64::from(width) - stroke,
        bottom: f64::from(width) - stroke,
    };

    let background = StrokeStyle {
        color: config.background_color,
        width: config.stroke_width,
        rounded_caps: true,
    };
    let foreground = StrokeStyle {
        color: config.meter_color,
        ..background
    };
    surface.draw_arc(bounds, START_ANGLE_DEG, MAX_SWEEP_DEG, background);
    surface.draw_arc(bounds, START_ANGLE_DEG, model.swept_angle(), foreground);

    let center_x = f64::from(width) / 2.0;
    let center_y = f64::from(height) / 2.0;
    let balance_style = TextStyle {
        color: config.text_color,
        size: config.balance_text_size,
    };
    let balance_line_height = surface.line_height(balance_style);
    surface.draw_text(
        &format!("{} {}", config.currency_symbol, model.formatted_value()),
        center_x,
        center_y,
        balance_style,
    );
    surface.draw_text(
        "remaining",
        center_x,
        center_y + balance_line_height,
        TextStyle {
            color: config.remaining_text_color,
            size: config.remaining_text_size,
        },
    );
    surface.draw_text(
        &format!("{} {} / day", model.formatted_max(), config.unit_label),
        center_x,
        bounds.bottom,
        TextStyle {
            color: config.text_color,
            size: config.max_label_text_size,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeterConfig;
    use crate::surface::{DrawCall, SceneRecorder};
    use approx::assert_relative_eq;

    fn model_at(value: f64) -> GaugeModel {
        let config = MeterConfig::builder()
            .currency_symbol("₵".to_string())
            .build();
        let mut model = GaugeModel::new(config).unwrap();
        model.set_current_value(value);
        model
    }

    #[test]
    fn draws_arcs_then_labels_in_order() {
        let model = model_at(1500.0);
        let mut recorder = SceneRecorder::new(400, 400);
        render_gauge(&model, &mut recorder);

        let calls = recorder.calls();
        assert_eq!(calls.len(), 5);
        assert!(matches!(
            calls[0],
            DrawCall::Arc { start_deg, sweep_deg, .. }
                if start_deg == START_ANGLE_DEG && sweep_deg == MAX_SWEEP_DEG
        ));
        match &calls[1] {
            DrawCall::Arc {
                start_deg,
                sweep_deg,
                ..
            } => {
                assert_relative_eq!(*start_deg, START_ANGLE_DEG);
                assert_relative_eq!(*sweep_deg, 135.0);
            }
            other => panic!("expected foreground arc, got {other:?}"),
        }
        assert!(matches!(&calls[2], DrawCall::Text { text, .. } if text == "₵ 1,500.00"));
        assert!(matches!(&calls[3], DrawCall::Text { text, .. } if text == "remaining"));
        assert!(matches!(&calls[4], DrawCall::Text { text, .. } if text == "3,000.00 GHS / day"));
    }

    #[test]
    fn bounds_are_square_and_inset_by_the_stroke() {
        let model = model_at(0.0);
        let mut recorder = SceneRecorder::new(400, 400);
        render_gauge(&model, &mut recorder);
        match recorder.calls()[0] {
            DrawCall::Arc { bounds, .. } => {
                assert_eq!(bounds.left, 15.0);
                assert_eq!(bounds.top, 15.0);
                assert_eq!(bounds.right, 385.0);
                assert_eq!(bounds.bottom, 385.0);
            }
            ref other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn labels_are_centered_and_stacked() {
        let model = model_at(0.0);
        let mut recorder = SceneRecorder::new(400, 400);
        render_gauge(&model, &mut recorder);
        let calls = recorder.calls();
        let line_height = 70.0 * 1.2;
        assert!(matches!(calls[2], DrawCall::Text { x, y, .. } if x == 200.0 && y == 200.0));
        match calls[3] {
            DrawCall::Text { x, y, .. } => {
                assert_eq!(x, 200.0);
                assert_relative_eq!(y, 200.0 + line_height);
            }
            ref other => panic!("expected text, got {other:?}"),
        }
        // Max-balance label sits on the bottom edge of the bounds.
        assert!(matches!(calls[4], DrawCall::Text { y, .. } if y == 385.0));
    }

    #[test]
    fn rendering_twice_records_the_same_sequence() {
        let model = model_at(421.37);
        let mut first = SceneRecorder::new(400, 400);
        let mut second = SceneRecorder::new(400, 400);
        render_gauge(&model, &mut first);
        render_gauge(&model, &mut second);
        assert_eq!(first.calls(), second.calls());
    }

    #[test]
    fn zero_area_viewport_is_a_no_op() {
        let model = model_at(1500.0);
        for (w, h) in [(0, 400), (400, 0), (0, 0)] {
            let mut recorder = SceneRecorder::new(w, h);
            render_gauge(&model, &mut recorder);
            assert!(recorder.calls().is_empty());
        }
    }
}
