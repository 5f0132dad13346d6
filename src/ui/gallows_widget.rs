use crate::game::stage::{Segment, CANVAS_HEIGHT, CANVAS_WIDTH, SCAFFOLD};
use crate::game::{Shape, Stage};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Line},
        Block, Borders,
    },
    Frame,
};

/// Gap between parallel strokes used to fake thick lines.
const STROKE_GAP: f64 = 2.0;

/// Render the gallows and every body part visible at `stage`.
pub fn render_gallows(frame: &mut Frame, stage: Stage, area: Rect) {
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Hangman"))
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(move |ctx| {
            for segment in SCAFFOLD {
                draw_segment(ctx, segment, Color::White);
            }
            for part in stage.visible_parts() {
                match part.shape() {
                    Shape::Circle { center, radius } => ctx.draw(&Circle {
                        x: center.0,
                        y: center.1,
                        radius,
                        color: Color::Red,
                    }),
                    Shape::Lines(segments) => {
                        for segment in segments {
                            draw_segment(ctx, segment, Color::Red);
                        }
                    }
                }
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_segment(ctx: &mut Context, segment: &Segment, color: Color) {
    let (x1, y1) = segment.from;
    let (x2, y2) = segment.to;

    // Unit normal, so wide strokes spread sideways from the center line.
    let (dx, dy) = (x2 - x1, y2 - y1);
    let len = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = if len > 0.0 { (-dy / len, dx / len) } else { (0.0, 0.0) };

    for offset in stroke_offsets(segment.width) {
        ctx.draw(&Line::new(
            x1 + nx * offset,
            y1 + ny * offset,
            x2 + nx * offset,
            y2 + ny * offset,
            color,
        ));
    }
}

fn stroke_offsets(width: u16) -> Vec<f64> {
    let strokes = (width as usize / 4).max(1);
    let half = (strokes - 1) as f64 / 2.0;
    (0..strokes)
        .map(|i| (i as f64 - half) * STROKE_GAP)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thin_lines_single_stroke() {
        assert_eq!(stroke_offsets(1), vec![0.0]);
        assert_eq!(stroke_offsets(2), vec![0.0]);
    }

    #[test]
    fn test_thick_lines_centered() {
        let offsets = stroke_offsets(10);
        assert_eq!(offsets.len(), 2);
        assert!((offsets.iter().sum::<f64>()).abs() < 1e-9);
    }
}
