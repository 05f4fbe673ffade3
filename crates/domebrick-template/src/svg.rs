//! SVG document builder for template sheets.
//!
//! Accumulates markers, measured segments, and text blocks, then renders one
//! printable SVG. Coordinates are sheet millimeters; the document applies a
//! single print scale on top.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use domebrick_math::{distance, Point2};

/// How a segment's measurement label is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPlacement {
    /// Along the segment itself, as SVG `textPath`; `inner` puts the text on
    /// the other side of the line.
    Along {
        /// Place the text below the line instead of above it.
        inner: bool,
    },
    /// Free-standing text offset from the segment's first point.
    Outside {
        /// Horizontal offset from the first point (mm).
        dx: f64,
        /// Vertical offset from the first point (mm).
        dy: f64,
    },
}

/// Stroke styling for a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentStyle {
    /// Stroke color.
    pub stroke: String,
    /// Render as a dashed line.
    pub dashed: bool,
    /// Stroke opacity; `Some(0.0)` keeps only the label visible.
    pub opacity: Option<f64>,
    /// Rotation of the label text (degrees).
    pub rotate_label: f64,
}

impl SegmentStyle {
    /// Solid stroke of the given color.
    pub fn stroke(color: &str) -> Self {
        SegmentStyle {
            stroke: color.to_string(),
            dashed: false,
            opacity: None,
            rotate_label: 0.0,
        }
    }

    /// Dashed stroke of the given color.
    pub fn dashed(color: &str) -> Self {
        SegmentStyle {
            dashed: true,
            ..SegmentStyle::stroke(color)
        }
    }

    /// Invisible stroke; used to place a measurement label on its own.
    pub fn hidden() -> Self {
        SegmentStyle {
            opacity: Some(0.0),
            ..SegmentStyle::stroke("black")
        }
    }

    /// Same style with the label rotated by `degrees`.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate_label = degrees;
        self
    }
}

impl Default for SegmentStyle {
    fn default() -> Self {
        SegmentStyle::stroke("black")
    }
}

#[derive(Debug, Clone)]
enum Shape {
    Marker {
        label: String,
        at: Point2,
        fill: String,
    },
    Segment {
        a: Point2,
        b: Point2,
        style: SegmentStyle,
        label: Option<(String, LabelPlacement)>,
    },
    Text {
        at: Point2,
        size: u32,
        fill: String,
        content: String,
    },
    Note {
        at: Point2,
        lines: Vec<String>,
    },
}

/// Sheet dimensions of the printed document (mm).
const SHEET_WIDTH: f64 = 1500.0;
const SHEET_HEIGHT: f64 = 7000.0;
/// Font size of measurement labels along segments.
const LABEL_FONT: u32 = 14;

/// SVG template sheet builder.
pub struct SvgDocument {
    scale: f64,
    shapes: Vec<Shape>,
}

impl SvgDocument {
    /// Create an empty document with the given print scale.
    pub fn new(scale: f64) -> Self {
        SvgDocument {
            scale,
            shapes: Vec::new(),
        }
    }

    /// Add a labeled point: a dot with its name beside it.
    pub fn add_marker(&mut self, label: &str, at: &Point2, fill: &str) {
        self.shapes.push(Shape::Marker {
            label: label.to_string(),
            at: *at,
            fill: fill.to_string(),
        });
    }

    /// Add an unlabeled segment.
    pub fn add_segment(&mut self, a: &Point2, b: &Point2, style: SegmentStyle) {
        self.shapes.push(Shape::Segment {
            a: *a,
            b: *b,
            style,
            label: None,
        });
    }

    /// Add a segment labeled with its own rounded length.
    pub fn add_measured_segment(
        &mut self,
        a: &Point2,
        b: &Point2,
        style: SegmentStyle,
        placement: LabelPlacement,
    ) {
        let text = format!("{}", distance(a, b));
        self.add_labeled_segment(a, b, style, placement, &text);
    }

    /// Add a segment with an arbitrary label.
    pub fn add_labeled_segment(
        &mut self,
        a: &Point2,
        b: &Point2,
        style: SegmentStyle,
        placement: LabelPlacement,
        text: &str,
    ) {
        self.shapes.push(Shape::Segment {
            a: *a,
            b: *b,
            style,
            label: Some((text.to_string(), placement)),
        });
    }

    /// Add a free-standing text line.
    pub fn add_text(&mut self, at: &Point2, size: u32, fill: &str, content: &str) {
        self.shapes.push(Shape::Text {
            at: *at,
            size,
            fill: fill.to_string(),
            content: content.to_string(),
        });
    }

    /// Add a small multi-line note (instruction captions).
    pub fn add_note(&mut self, at: &Point2, lines: &[&str]) {
        self.shapes.push(Shape::Note {
            at: *at,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        });
    }

    /// Number of shapes added so far.
    pub fn num_shapes(&self) -> usize {
        self.shapes.len()
    }

    /// Render the document to an SVG string.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        out.push_str(&format!(
            "<svg version=\"1.1\" width=\"{}mm\" height=\"{}mm\" xmlns=\"http://www.w3.org/2000/svg\" >\n",
            SHEET_WIDTH, SHEET_HEIGHT
        ));
        out.push_str(&format!("<g transform=\"scale({})\">\n", self.scale));

        // Path ids are sequential so the output is reproducible.
        let mut path_id = 0usize;
        for shape in &self.shapes {
            match shape {
                Shape::Marker { label, at, fill } => {
                    out.push_str(&format!(
                        "<text fill=\"{}\" x=\"{}\" y=\"{}\">{}</text>",
                        fill,
                        at.x - 20.0,
                        at.y - 10.0,
                        escape(label)
                    ));
                    out.push_str(&format!(
                        "<circle cx=\"{}\" cy=\"{}\" r=\"3\" fill=\"black\" fill-opacity=\"0.8\"/>\n",
                        at.x, at.y
                    ));
                }
                Shape::Segment {
                    a,
                    b,
                    style,
                    label,
                } => {
                    path_id += 1;
                    self.write_segment(&mut out, path_id, a, b, style, label.as_ref());
                }
                Shape::Text {
                    at,
                    size,
                    fill,
                    content,
                } => {
                    out.push_str(&format!(
                        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
                        at.x,
                        at.y,
                        size,
                        fill,
                        escape(content)
                    ));
                }
                Shape::Note { at, lines } => {
                    out.push_str(&format!(
                        "<text x=\"{}\" y=\"{}\" font-size=\"20\">",
                        at.x, at.y
                    ));
                    for (i, line) in lines.iter().enumerate() {
                        let dy = if i == 0 { ".6em" } else { "1.2em" };
                        out.push_str(&format!(
                            "<tspan x=\"{}\" dy=\"{}\">{}</tspan>",
                            at.x,
                            dy,
                            escape(line)
                        ));
                    }
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</g></svg>\n");
        out
    }

    fn write_segment(
        &self,
        out: &mut String,
        path_id: usize,
        a: &Point2,
        b: &Point2,
        style: &SegmentStyle,
        label: Option<&(String, LabelPlacement)>,
    ) {
        let dasharray = if style.dashed {
            " stroke-dasharray=\"6\""
        } else {
            ""
        };
        let opacity = match style.opacity {
            Some(o) => format!(" stroke-opacity=\"{o}\""),
            None => String::new(),
        };
        out.push_str(&format!(
            "<path id=\"path-{}\"{}{} stroke-width=\"2\" stroke=\"{}\" d=\"M{},{} L{},{}\" fill=\"none\" />\n",
            path_id, dasharray, opacity, style.stroke, a.x, a.y, b.x, b.y
        ));

        let (text, placement) = match label {
            Some((text, placement)) => (text, placement),
            None => return,
        };
        let transform = if style.rotate_label != 0.0 {
            format!(" transform=\"rotate({})\"", style.rotate_label)
        } else {
            String::new()
        };
        match placement {
            LabelPlacement::Along { inner } => {
                let dy = if *inner { 26.0 } else { -16.0 };
                out.push_str(&format!(
                    "<text dx=\"0\" dy=\"{}\" style=\"transform-box: fill-box; transform-origin: center;\"{}>\
<textPath href=\"#path-{}\" font-family=\"Verdana\" font-size=\"{}\" fill=\"{}\">{}</textPath></text>\n",
                    dy,
                    transform,
                    path_id,
                    LABEL_FONT,
                    style.stroke,
                    escape(text)
                ));
            }
            LabelPlacement::Outside { dx, dy } => {
                out.push_str(&format!(
                    "<text dx=\"{}\" dy=\"{}\" fill=\"{}\" style=\"transform-box: fill-box; transform-origin: center;\"{}>{}</text>\n",
                    a.x + dx,
                    a.y + dy,
                    style.stroke,
                    transform,
                    escape(text)
                ));
            }
        }
    }

    /// Write the rendered SVG to `path`.
    pub fn export(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.to_svg().as_bytes())?;
        writer.flush()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_prolog_and_scale() {
        let doc = SvgDocument::new(3.78);
        assert_eq!(doc.num_shapes(), 0);
        let svg = doc.to_svg();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("transform=\"scale(3.78)\""));
        assert!(svg.ends_with("</g></svg>\n"));
    }

    #[test]
    fn test_marker_renders_label_and_dot() {
        let mut doc = SvgDocument::new(1.0);
        doc.add_marker("A", &Point2::new(100.0, 50.0), "green");
        let svg = doc.to_svg();
        assert!(svg.contains("<text fill=\"green\" x=\"80\" y=\"40\">A</text>"));
        assert!(svg.contains("<circle cx=\"100\" cy=\"50\" r=\"3\""));
    }

    #[test]
    fn test_measured_segment_labels_rounded_length() {
        let mut doc = SvgDocument::new(1.0);
        doc.add_measured_segment(
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 10.0),
            SegmentStyle::stroke("orange"),
            LabelPlacement::Along { inner: false },
        );
        let svg = doc.to_svg();
        assert!(svg.contains(">14.1</textPath>"));
        assert!(svg.contains("href=\"#path-1\""));
    }

    #[test]
    fn test_path_ids_are_sequential() {
        let mut doc = SvgDocument::new(1.0);
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(5.0, 0.0);
        doc.add_segment(&a, &b, SegmentStyle::default());
        doc.add_segment(&b, &a, SegmentStyle::dashed("red"));
        assert_eq!(doc.num_shapes(), 2);
        let svg = doc.to_svg();
        assert!(svg.contains("id=\"path-1\""));
        assert!(svg.contains("id=\"path-2\""));
        assert!(svg.contains("stroke-dasharray=\"6\""));
    }

    #[test]
    fn test_hidden_style_keeps_label_only() {
        let mut doc = SvgDocument::new(1.0);
        doc.add_labeled_segment(
            &Point2::new(0.0, 0.0),
            &Point2::new(100.0, 0.0),
            SegmentStyle::hidden(),
            LabelPlacement::Outside { dx: 5.0, dy: -10.0 },
            "100",
        );
        let svg = doc.to_svg();
        assert!(svg.contains("stroke-opacity=\"0\""));
        assert!(svg.contains(">100</text>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut doc = SvgDocument::new(1.0);
        doc.add_text(&Point2::new(0.0, 0.0), 30, "brown", "a < b & c");
        assert!(doc.to_svg().contains("a &lt; b &amp; c"));
    }
}
