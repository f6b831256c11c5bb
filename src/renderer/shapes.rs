//! Shape generation for 2D primitives
//!
//! Everything comes out as plain triangle lists in court pixel coordinates.
//! Score text uses seven-segment glyphs so no font files are needed.

use glam::{IVec2, Vec2};
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Triangle fan resolution for the ball
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (r.x as f32, r.y as f32);
    let (x1, y1) = (r.right() as f32, r.bottom() as f32);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Seven-segment glyph dimensions derived from a font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub width: i32,
    pub height: i32,
    /// Segment thickness, also used as the gap between glyphs
    pub stroke: i32,
}

impl GlyphMetrics {
    pub fn for_size(size: u32) -> Self {
        let size = size as i32;
        Self {
            width: (size * 3 / 8).max(3),
            height: (size * 2 / 3).max(5),
            stroke: (size / 12).max(1),
        }
    }
}

// Segment bits: a=top, b=top right, c=bottom right, d=bottom,
// e=bottom left, f=top left, g=middle
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,
    SEG_F | SEG_G | SEG_B | SEG_C,
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_C | SEG_D,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Lit segments for a character; unknown characters render as a blank cell
fn segments_for(ch: char) -> u8 {
    match ch {
        '0'..='9' => DIGITS[ch as usize - '0' as usize],
        '-' => SEG_G,
        _ => 0,
    }
}

/// Pixel size of `text` laid out at `size`
pub fn text_extent(text: &str, size: u32) -> IVec2 {
    let m = GlyphMetrics::for_size(size);
    let count = text.chars().count() as i32;
    if count == 0 {
        return IVec2::new(0, m.height);
    }
    IVec2::new(count * m.width + (count - 1) * m.stroke, m.height)
}

/// Segment rectangles of one glyph whose top-left corner is `origin`
pub fn glyph_rects(ch: char, origin: IVec2, m: GlyphMetrics) -> Vec<Rect> {
    let lit = segments_for(ch);
    let (x, y, w, h, s) = (origin.x, origin.y, m.width, m.height, m.stroke);
    let half = h / 2;

    [
        (SEG_A, Rect::new(x, y, w, s)),
        (SEG_B, Rect::new(x + w - s, y, s, half)),
        (SEG_C, Rect::new(x + w - s, y + half, s, h - half)),
        (SEG_D, Rect::new(x, y + h - s, w, s)),
        (SEG_E, Rect::new(x, y + half, s, h - half)),
        (SEG_F, Rect::new(x, y, s, half)),
        (SEG_G, Rect::new(x, y + half - s / 2, w, s)),
    ]
    .into_iter()
    .filter(|(bit, _)| lit & bit != 0)
    .map(|(_, r)| r)
    .collect()
}

/// Generate vertices for a text block: background fill, then glyphs
pub fn text(
    text: &str,
    origin: IVec2,
    size: u32,
    fg: [f32; 4],
    bg: [f32; 4],
) -> Vec<Vertex> {
    let m = GlyphMetrics::for_size(size);
    let extent = text_extent(text, size);
    let mut vertices = rect(Rect::new(origin.x, origin.y, extent.x, extent.y), bg);

    let advance = m.width + m.stroke;
    for (i, ch) in text.chars().enumerate() {
        let glyph_origin = IVec2::new(origin.x + i as i32 * advance, origin.y);
        for seg in glyph_rects(ch, glyph_origin, m) {
            vertices.extend(rect(seg, fg));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];
    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::new(247.0, 197.0), 5.0, WHITE, CIRCLE_SEGMENTS);
        assert_eq!(v.len(), (CIRCLE_SEGMENTS * 3) as usize);
        // Every rim vertex sits on the radius
        for vert in v.iter().skip(1).step_by(3) {
            let d = Vec2::from(vert.position).distance(Vec2::new(247.0, 197.0));
            assert!((d - 5.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rect_covers_region() {
        let v = rect(Rect::new(100, 180, 10, 40), WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|p| p.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|p| p.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 100.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 110.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 180.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 220.0);
    }

    #[test]
    fn test_score_font_metrics() {
        let m = GlyphMetrics::for_size(75);
        assert_eq!(m, GlyphMetrics { width: 28, height: 50, stroke: 6 });
        assert_eq!(text_extent("7", 75), IVec2::new(28, 50));
        assert_eq!(text_extent("11", 75), IVec2::new(62, 50));
        assert_eq!(text_extent("", 75), IVec2::new(0, 50));
    }

    #[test]
    fn test_glyph_segments() {
        let m = GlyphMetrics::for_size(75);
        assert_eq!(glyph_rects('8', IVec2::ZERO, m).len(), 7);
        assert_eq!(glyph_rects('1', IVec2::ZERO, m).len(), 2);
        assert_eq!(glyph_rects('-', IVec2::ZERO, m).len(), 1);
        assert!(glyph_rects('x', IVec2::ZERO, m).is_empty());
    }

    #[test]
    fn test_glyphs_stay_inside_block() {
        let origin = IVec2::new(5, 0);
        let m = GlyphMetrics::for_size(75);
        let extent = text_extent("10", 75);
        for (i, ch) in "10".chars().enumerate() {
            let o = IVec2::new(origin.x + i as i32 * (m.width + m.stroke), origin.y);
            for r in glyph_rects(ch, o, m) {
                assert!(r.x >= origin.x && r.right() <= origin.x + extent.x);
                assert!(r.y >= origin.y && r.bottom() <= origin.y + extent.y);
            }
        }
    }

    #[test]
    fn test_text_draws_background_first() {
        let v = text("0", IVec2::new(5, 0), 75, WHITE, BLACK);
        // background quad + six segments
        assert_eq!(v.len(), 6 + 6 * 6);
        assert!(v[..6].iter().all(|p| p.color == BLACK));
        assert!(v[6..].iter().all(|p| p.color == WHITE));
    }
}
