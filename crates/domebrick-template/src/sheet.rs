//! Template sheet layout.
//!
//! Places a solved [`DomePlan`] onto one long printable sheet: the dome
//! cross-section with the center line, a marking panel per course (top face,
//! verification face, brick blank, cut-angle triangle), the support form, and
//! the key brick blanks. Every number shown comes from the plan; nothing is
//! solved here.

use domebrick_math::{point_on_line, Point2};
use domebrick_solver::{Course, DomeParams, DomePlan, SupportForm};

use crate::svg::{LabelPlacement, SegmentStyle, SvgDocument};

const WARNING: &str = "Pre-alfa release of the script. Use it on your own risk, \
I don't guarantee correctness of any value computed.";

/// Left edge of the marking-face panel (sheet mm).
const MARK_PANEL_X: f64 = 80.0;
/// Left edge of the verification-face panel.
const VERIFY_PANEL_X: f64 = 650.0;
/// Left edge of the cut-angle triangle.
const DEGREE_PANEL_X: f64 = 310.0;
/// Vertical room each course panel takes.
const PANEL_STRIDE: f64 = 350.0;
/// Offset of the face drawings inside a panel.
const PANEL_FACE_Y: f64 = 120.0;

const ALONG: LabelPlacement = LabelPlacement::Along { inner: false };
const INNER: LabelPlacement = LabelPlacement::Along { inner: true };

/// Sheet position of the base circle center for the given dome: margins of
/// 200 mm left and 260 mm above the widest circle.
pub fn sheet_origin(params: &DomeParams) -> Point2 {
    Point2::new(
        200.0 + params.inner_radius,
        260.0 + params.inner_radius,
    )
}

/// Render the whole template sheet for `plan` at the given print scale.
pub fn render(plan: &DomePlan, scale: f64) -> SvgDocument {
    let mut doc = SvgDocument::new(scale);
    let params = &plan.params;
    let center = plan.surface_center;
    let dome_center = plan.profile.center;

    doc.add_text(&Point2::new(100.0, 30.0), 30, "brown", WARNING);

    // Center line, from the surface center up past the outer circle.
    let line_top = Point2::new(
        center.x,
        (center.y - 100.0) - (params.inner_radius + params.brick_width / 2.0 + 100.0),
    );
    doc.add_segment(
        &Point2::new(center.x, center.y - 100.0),
        &line_top,
        SegmentStyle::stroke("black"),
    );
    doc.add_marker("SCCP", &center, "green");

    let apex_inner = Point2::new(center.x, center.y - params.height);
    doc.add_marker("HI", &apex_inner, "green");
    doc.add_measured_segment(&apex_inner, &center, SegmentStyle::stroke("green"), ALONG);

    // Soldier course outline and its tie to the dome center.
    draw_course_outline(&mut doc, &plan.soldier.bottom_outer, &plan.soldier.top_outer,
        &plan.soldier.top_inner, &plan.soldier.bottom_inner, "#1-TOP");
    doc.add_measured_segment(
        &plan.soldier.top_inner,
        &dome_center,
        SegmentStyle::stroke("gray"),
        INNER,
    );

    let mut y = dome_center.y + 100.0;
    let outer_radius = params.inner_radius + params.brick_width / 2.0;
    doc.add_text(
        &Point2::new(100.0, y),
        30,
        "black",
        &format!(
            "#1 (soldier). (view from above) bricks: {}, seam: {}, \
bottom_outer_radius: {}, bottom_inner_radius: {}, \
top_outer_radius: {}, top_inner_radius: {}",
            plan.soldier_outer.count(),
            params.seam,
            outer_radius,
            params.inner_radius,
            outer_radius,
            params.inner_radius,
        ),
    );
    y += 185.0;

    for course in &plan.courses {
        draw_course(&mut doc, course, &dome_center, params, y);
        y += PANEL_STRIDE;
    }

    draw_support_form(&mut doc, &plan.support);

    y += 300.0;
    draw_key_brick(&mut doc, plan, y);

    doc
}

/// Cross-section outline of one course: three measured orange sides plus the
/// unmeasured bottom, and the top-outer corner marked.
fn draw_course_outline(
    doc: &mut SvgDocument,
    bottom_outer: &Point2,
    top_outer: &Point2,
    top_inner: &Point2,
    bottom_inner: &Point2,
    top_label: &str,
) {
    doc.add_measured_segment(bottom_outer, top_outer, SegmentStyle::stroke("orange"), ALONG);
    doc.add_measured_segment(top_outer, top_inner, SegmentStyle::stroke("orange"), INNER);
    doc.add_measured_segment(
        top_inner,
        bottom_inner,
        SegmentStyle::stroke("orange").rotated(180.0),
        INNER,
    );
    doc.add_segment(bottom_inner, bottom_outer, SegmentStyle::stroke("orange"));
    doc.add_marker(top_label, top_outer, "green");
}

fn draw_course(
    doc: &mut SvgDocument,
    course: &Course,
    dome_center: &Point2,
    params: &DomeParams,
    panel_y: f64,
) {
    let row = &course.row;
    let marks = &course.marks;

    draw_course_outline(
        doc,
        &row.bottom_outer,
        &row.top_outer,
        &row.top_inner,
        &row.bottom_inner,
        &format!("#{}-TOP", row.number),
    );
    doc.add_measured_segment(&row.top_inner, dome_center, SegmentStyle::stroke("gray"), INNER);

    let face_y = panel_y + PANEL_FACE_Y;
    let half_width = params.brick_width / 2.0;

    // Marking face: bottom-outer side on top, bottom-inner side below,
    // drawn over the brick blank.
    let a = Point2::new(MARK_PANEL_X, face_y);
    let b = Point2::new(MARK_PANEL_X + marks.bottom_outer_width, face_y);
    let ab_center = MARK_PANEL_X + (b.x - a.x) / 2.0;
    let c = Point2::new(ab_center + marks.bottom_inner_width / 2.0, face_y + half_width);
    let d = Point2::new(ab_center - marks.bottom_inner_width / 2.0, face_y + half_width);
    for (label, p) in [("A", &a), ("B", &b), ("C", &c), ("D", &d)] {
        doc.add_marker(label, p, "green");
    }

    let blank_lt = a;
    let blank_rt = Point2::new(a.x + params.brick_depth, face_y);
    let blank_rb = Point2::new(a.x + params.brick_depth, face_y + half_width);
    let blank_lb = Point2::new(a.x, face_y + half_width);
    doc.add_segment(&blank_lt, &blank_rt, SegmentStyle::stroke("orange"));
    doc.add_segment(&blank_rt, &blank_rb, SegmentStyle::stroke("orange"));
    doc.add_segment(&blank_rb, &blank_lb, SegmentStyle::stroke("orange"));
    doc.add_measured_segment(&blank_lb, &blank_lt, SegmentStyle::stroke("orange"), ALONG);

    doc.add_measured_segment(&a, &b, SegmentStyle::dashed("red").rotated(-20.0), ALONG);
    doc.add_segment(&b, &c, SegmentStyle::dashed("red"));
    doc.add_measured_segment(&c, &blank_lb, SegmentStyle::dashed("red").rotated(150.0), ALONG);
    doc.add_measured_segment(
        &d,
        &c,
        SegmentStyle::dashed("red"),
        LabelPlacement::Outside { dx: 10.0, dy: -10.0 },
    );
    doc.add_segment(&d, &a, SegmentStyle::dashed("red"));

    // Verification face: top sides, checked after the cut.
    let e = Point2::new(VERIFY_PANEL_X, face_y);
    let f = Point2::new(VERIFY_PANEL_X + marks.top_outer_width, face_y);
    let ef_center = VERIFY_PANEL_X + (f.x - e.x) / 2.0;
    let g = Point2::new(ef_center + marks.top_inner_width / 2.0, face_y + half_width);
    let h = Point2::new(ef_center - marks.top_inner_width / 2.0, face_y + half_width);
    for (label, p) in [("E", &e), ("F", &f), ("G", &g), ("H", &h)] {
        doc.add_marker(label, p, "green");
    }
    doc.add_measured_segment(
        &e,
        &f,
        SegmentStyle::stroke("gray"),
        LabelPlacement::Outside { dx: -10.0, dy: -10.0 },
    );
    doc.add_segment(&f, &g, SegmentStyle::stroke("gray"));
    doc.add_measured_segment(
        &g,
        &h,
        SegmentStyle::stroke("gray"),
        LabelPlacement::Outside { dx: -10.0, dy: 20.0 },
    );
    doc.add_segment(&h, &e, SegmentStyle::stroke("gray"));

    doc.add_text(
        &Point2::new(100.0, panel_y + 20.0),
        30,
        "black",
        &format!(
            "#{}. bricks: {}, seam: {}, bottom_outer_radius: {}, \
bottom_inner_radius: {}, top_outer_radius: {}, top_inner_radius: {}",
            marks.number,
            marks.bricks,
            marks.seam,
            marks.bottom_outer_radius,
            marks.bottom_inner_radius,
            marks.top_outer_radius,
            marks.top_inner_radius,
        ),
    );
    doc.add_note(
        &Point2::new(40.0, panel_y + 40.0),
        &["Step1: mark on the", "top of a brick"],
    );
    doc.add_note(
        &Point2::new(280.0, panel_y + 40.0),
        &["Step2: mark angles", "from A and B to the bottom"],
    );
    doc.add_note(
        &Point2::new(600.0, panel_y + 40.0),
        &["Step3: verify bottom", "sizes"],
    );

    // Distance from the blank corner to the marked corner, shown as a bare
    // number to help draw the cut.
    doc.add_measured_segment(
        &blank_lb,
        &d,
        SegmentStyle::hidden(),
        LabelPlacement::Outside { dx: -10.0, dy: 20.0 },
    );

    if let Some(angle) = marks.cut_angle_deg {
        draw_degree_triangle(doc, marks.bottom_outer_width, marks.top_outer_width,
            params.brick_width, panel_y, angle);
    }
}

/// Right triangle showing the wedge angle: base a brick width, apex dropped
/// by the marking gauge, half the width difference over.
fn draw_degree_triangle(
    doc: &mut SvgDocument,
    bottom_width: f64,
    top_width: f64,
    brick_width: f64,
    panel_y: f64,
    angle: f64,
) {
    let diff = bottom_width - top_width;
    let b = Point2::new(DEGREE_PANEL_X, panel_y + 130.0);
    let c = Point2::new(DEGREE_PANEL_X + brick_width, panel_y + 130.0);
    let d = Point2::new(DEGREE_PANEL_X + diff / 2.0, panel_y + 230.0);
    doc.add_marker("DPB", &b, "green");
    doc.add_marker("DPC", &c, "green");
    doc.add_marker("DPD", &d, "green");
    doc.add_segment(&b, &c, SegmentStyle::dashed("red"));
    doc.add_segment(&d, &b, SegmentStyle::dashed("red"));
    doc.add_marker(
        &format!("{angle}\u{b0}"),
        &Point2::new(DEGREE_PANEL_X + 30.0, panel_y + 160.0),
        "green",
    );
}

fn draw_support_form(doc: &mut SvgDocument, form: &SupportForm) {
    let top_left = form.top_left;
    let top_right = Point2::new(top_left.x + form.width, top_left.y);
    let bottom_right = Point2::new(top_right.x, top_left.y + form.height);
    let bottom_left = Point2::new(top_left.x, top_left.y + form.height);

    doc.add_marker("SRCP", &form.radius_center, "green");
    doc.add_segment(&top_left, &top_right, SegmentStyle::dashed("red"));
    doc.add_measured_segment(
        &top_right,
        &bottom_right,
        SegmentStyle::dashed("red").rotated(40.0),
        LabelPlacement::Outside { dx: 30.0, dy: form.height / 2.0 - 10.0 },
    );
    doc.add_measured_segment(&bottom_left, &top_left, SegmentStyle::dashed("red"), ALONG);
    doc.add_measured_segment(
        &bottom_left,
        &bottom_right,
        SegmentStyle::dashed("red"),
        LabelPlacement::Outside { dx: form.radius / 2.0 - 10.0, dy: 60.0 },
    );
    doc.add_measured_segment(
        &form.radius_center,
        &top_left,
        SegmentStyle::dashed("red").rotated(-90.0),
        LabelPlacement::Outside { dx: -40.0, dy: -form.height / 2.0 - 10.0 },
    );

    let mut previous: Option<Point2> = None;
    for (i, cut) in form.cuts.iter().enumerate() {
        doc.add_marker(&format!("{}", i + 1), &cut.arc_point, "green");
        if let Some(prev) = previous {
            if i == 1 {
                // The spacing repeats, show it once.
                doc.add_measured_segment(
                    &cut.arc_point,
                    &prev,
                    SegmentStyle::dashed("red"),
                    ALONG,
                );
            } else {
                doc.add_segment(&cut.arc_point, &prev, SegmentStyle::dashed("red"));
            }
        }
        doc.add_segment(&cut.cut_point, &cut.arc_point, SegmentStyle::dashed("red"));

        // Vertical guides for transferring the cut to the blank edge.
        let guide_top = Point2::new(cut.arc_point.x, top_left.y);
        let guide_bottom = Point2::new(cut.arc_point.x, bottom_left.y);
        doc.add_marker("", &guide_top, "green");
        doc.add_marker("", &guide_bottom, "green");
        doc.add_measured_segment(
            &guide_top,
            &top_left,
            SegmentStyle::hidden().rotated(-20.0),
            LabelPlacement::Outside { dx: -10.0, dy: -10.0 },
        );
        doc.add_measured_segment(
            &guide_bottom,
            &bottom_left,
            SegmentStyle::hidden().rotated(30.0),
            LabelPlacement::Outside { dx: 0.0, dy: 34.0 },
        );
        doc.add_measured_segment(
            &guide_top,
            &cut.arc_point,
            SegmentStyle::stroke("gray").rotated(40.0),
            LabelPlacement::Outside { dx: 10.0, dy: 36.0 },
        );
        doc.add_measured_segment(
            &guide_bottom,
            &cut.arc_point,
            SegmentStyle::stroke("gray").rotated(40.0),
            LabelPlacement::Outside { dx: 6.0, dy: -36.0 },
        );
        doc.add_segment(&form.radius_center, &cut.arc_point, SegmentStyle::stroke("gray"));

        // Screw positions holding the form batten.
        for dist in [70.0, 180.0] {
            if let Some(screw) = point_on_line(&cut.arc_point, &form.radius_center, dist) {
                doc.add_marker("", &screw, "green");
            }
        }

        previous = Some(cut.arc_point);
    }
}

/// Two stacked key-brick blanks plus the cut marks around the closing ring.
fn draw_key_brick(doc: &mut SvgDocument, plan: &DomePlan, y: f64) {
    let key = &plan.key_brick;
    let width = plan.params.brick_width;
    let x = 150.0;

    for (top, first) in [(y, true), (y + width / 2.0 + 6.0, false)] {
        let a = Point2::new(x, top);
        let b = Point2::new(x + width, top);
        let c = Point2::new(x + width, top + width / 2.0);
        let d = Point2::new(x, top + width / 2.0);
        if first {
            doc.add_marker("A", &a, "green");
            doc.add_marker("B", &b, "green");
        } else {
            doc.add_marker("C", &c, "green");
            doc.add_marker("D", &d, "green");
        }
        doc.add_measured_segment(&a, &b, SegmentStyle::stroke("orange"), ALONG);
        doc.add_measured_segment(&b, &c, SegmentStyle::stroke("orange"), INNER);
        doc.add_measured_segment(&c, &d, SegmentStyle::stroke("orange"), INNER);
        doc.add_segment(&d, &a, SegmentStyle::stroke("orange"));
    }

    let ring_center = Point2::new(x + key.radius, y + width / 2.0 + 3.0);
    doc.add_marker("O", &ring_center, "green");
    for (i, p) in key.points.iter().enumerate() {
        let mark = Point2::new(ring_center.x + p.x, ring_center.y + p.y);
        doc.add_marker("", &mark, "green");
        if i == 1 {
            // One wedge shown in full: the chord and both radius lines.
            let prev = Point2::new(
                ring_center.x + key.points[0].x,
                ring_center.y + key.points[0].y,
            );
            doc.add_measured_segment(&mark, &prev, SegmentStyle::stroke("black"), ALONG);
            doc.add_measured_segment(&mark, &ring_center, SegmentStyle::stroke("black"), ALONG);
            doc.add_measured_segment(&prev, &ring_center, SegmentStyle::stroke("black"), ALONG);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use domebrick_solver::solve_plan;

    fn rendered() -> String {
        let params = DomeParams::default();
        let plan = solve_plan(&params, &sheet_origin(&params)).unwrap();
        render(&plan, 3.78).to_svg()
    }

    #[test]
    fn test_sheet_origin_clears_margins() {
        let origin = sheet_origin(&DomeParams::default());
        assert_eq!(origin, Point2::new(703.0, 763.0));

        // The widest circle stays on the sheet: outer radius plus both
        // margins fits left of the origin.
        let params = DomeParams {
            inner_radius: 600.0,
            ..DomeParams::default()
        };
        let wide = sheet_origin(&params);
        assert_abs_diff_eq!(wide.x - params.inner_radius, 200.0, epsilon = 1e-12);
        assert_abs_diff_eq!(wide.y - params.inner_radius, 260.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sheet_carries_every_course_panel() {
        let params = DomeParams::default();
        let plan = solve_plan(&params, &sheet_origin(&params)).unwrap();
        let svg = rendered();
        assert!(svg.contains("#1 (soldier)."));
        for course in &plan.courses {
            assert!(svg.contains(&format!("#{}. bricks:", course.marks.number)));
            assert!(svg.contains(&format!("#{}-TOP", course.marks.number)));
        }
    }

    #[test]
    fn test_sheet_has_warning_and_scale() {
        let svg = rendered();
        assert!(svg.contains("Pre-alfa release"));
        assert!(svg.contains("scale(3.78)"));
    }

    #[test]
    fn test_sheet_shows_cut_angles() {
        let params = DomeParams::default();
        let plan = solve_plan(&params, &sheet_origin(&params)).unwrap();
        let svg = rendered();
        let angle = plan.courses[0].marks.cut_angle_deg.unwrap();
        assert!(svg.contains(&format!("{angle}\u{b0}")));
    }

    #[test]
    fn test_sheet_includes_support_form_and_key_marks() {
        let svg = rendered();
        assert!(svg.contains(">SRCP<"));
        assert!(svg.contains(">O<"));
    }
}
