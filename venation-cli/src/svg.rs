//! Minimal SVG emission for merged vein polylines.
//!
//! One `<path>` per polyline, stroked at the polyline's width inside a
//! single black, fill-less group.

use std::fmt::Write;
use venation_core::paths::Polyline;

/// Renders the polylines as a complete SVG document string.
pub fn render_svg(width: f32, height: f32, polylines: &[Polyline]) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    let _ = write!(
        out,
        r#"<g stroke="black" fill="none" stroke-linejoin="round">"#
    );
    for line in polylines {
        let mut points = line.points.iter();
        let Some(first) = points.next() else {
            continue;
        };
        let _ = write!(
            out,
            r#"<path stroke-width="{}" d="M {} {}"#,
            line.width, first.x, first.y
        );
        for p in points {
            let _ = write!(out, " L {} {}", p.x, p.y);
        }
        let _ = write!(out, r#"" />"#);
    }
    out.push_str("</g></svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn renders_one_path_per_polyline() {
        let lines = vec![
            Polyline {
                width: 1.0,
                points: vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0)],
            },
            Polyline {
                width: 1.4,
                points: vec![Vec2::new(3.0, 3.0), Vec2::new(4.0, 3.0), Vec2::new(5.0, 5.0)],
            },
        ];

        let svg = render_svg(100.0, 100.0, &lines);

        assert!(svg.starts_with("<svg width=\"100\" height=\"100\""));
        assert!(svg.ends_with("</g></svg>"));
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(r#"stroke-width="1" d="M 0 0 L 1 2""#));
        assert!(svg.contains(r#"stroke-width="1.4" d="M 3 3 L 4 3 L 5 5""#));
    }

    #[test]
    fn empty_polylines_are_skipped() {
        let lines = vec![Polyline {
            width: 1.0,
            points: Vec::new(),
        }];
        let svg = render_svg(10.0, 10.0, &lines);
        assert_eq!(svg.matches("<path ").count(), 0);
    }
}
