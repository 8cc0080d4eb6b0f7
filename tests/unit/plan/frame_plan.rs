use super::*;
use crate::foundation::core::TimeWindow;
use crate::model::annotation::Visuals;
use crate::model::color::HexColor;

fn ann(id: u64, x: f64, y: f64, style: LabelStyle, kind: MarkerKind) -> Annotation {
    Annotation {
        id: AnnotationId(id),
        position: Point::new(x, y),
        time_window: TimeWindow::new(0.0, 10.0).unwrap(),
        text: format!("note {id}"),
        marker_kind: kind,
        label_style: style,
        visuals: Visuals::default(),
        always_visible: false,
    }
}

fn frame() -> MediaSize {
    MediaSize::new(1280, 720).unwrap()
}

#[test]
fn only_active_annotations_are_planned_in_rank_order() {
    let mut late = ann(3, 10.0, 10.0, LabelStyle::Label, MarkerKind::Dot);
    late.time_window = TimeWindow::new(20.0, 1.0).unwrap();
    let items = [
        ann(1, 10.0, 10.0, LabelStyle::Label, MarkerKind::Dot),
        late,
        ann(2, 10.0, 10.0, LabelStyle::Label, MarkerKind::Dot),
    ];
    let plan = plan_frame(&items, frame(), 5.0, &ApproxTextMeasure::default());
    let ids: Vec<_> = plan.items.iter().map(|d| (d.id.0, d.rank)).collect();
    assert_eq!(ids, vec![(1, 0), (2, 1)]);
    assert!(plan.items.iter().all(|d| d.label.is_some()));
}

#[test]
fn headlines_stack_by_rank() {
    let items = [
        ann(1, 0.0, 0.0, LabelStyle::Headline, MarkerKind::Dot),
        ann(2, 0.0, 0.0, LabelStyle::Headline, MarkerKind::Dot),
    ];
    let plan = plan_frame(&items, frame(), 1.0, &ApproxTextMeasure::default());
    let first = plan.items[0].label.as_ref().unwrap();
    let second = plan.items[1].label.as_ref().unwrap();
    assert_eq!(first.text_origin, Point::new(34.0, 660.0));
    assert_eq!(second.text_origin, Point::new(34.0, 610.0));
    assert_eq!(first.background, Rect::new(20.0, 630.0, 640.0, 670.0));
    assert_eq!(first.accent, Some(Rect::new(20.0, 630.0, 24.0, 670.0)));
}

#[test]
fn callout_box_stays_inside_margins() {
    let items = [ann(1, 1270.0, 5.0, LabelStyle::Callout, MarkerKind::Pin)];
    let plan = plan_frame(&items, frame(), 1.0, &ApproxTextMeasure::default());
    let label = plan.items[0].label.as_ref().unwrap();
    assert_eq!(label.background, Rect::new(1020.0, 20.0, 1260.0, 80.0));
    assert_eq!(
        label.leader,
        Some(Line::new((1020.0, 50.0), (1270.0, 5.0)))
    );
    assert!(label.border);
}

#[test]
fn label_floats_right_of_marker_and_clamps_at_edge() {
    let m = ApproxTextMeasure { advance: 0.5 };
    let items = [
        ann(1, 100.0, 200.0, LabelStyle::Label, MarkerKind::Dot),
        ann(2, 1275.0, 2.0, LabelStyle::Label, MarkerKind::Dot),
    ];
    let plan = plan_frame(&items, frame(), 1.0, &m);

    let near = plan.items[0].label.as_ref().unwrap();
    assert_eq!(near.text_origin, Point::new(126.0, 200.0));

    let edge = plan.items[1].label.as_ref().unwrap();
    let ext = m.measure(&edge.text, 16.0);
    assert_eq!(edge.text_origin.x, 1280.0 - ext.width - 10.0);
    assert_eq!(edge.text_origin.y, 16.0 + 10.0);
}

#[test]
fn markers_follow_kind() {
    let items = [
        ann(1, 100.0, 100.0, LabelStyle::Label, MarkerKind::Dot),
        ann(2, 100.0, 50.0, LabelStyle::Label, MarkerKind::Arrow),
        ann(3, 5000.0, -3.0, LabelStyle::Label, MarkerKind::Pin),
    ];
    let plan = plan_frame(&items, frame(), 1.0, &ApproxTextMeasure::default());

    match plan.items[0].marker.geometry {
        MarkerGeometry::Ring { ring, center } => {
            assert_eq!(ring.radius, 16.0);
            assert_eq!(center.radius, 4.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    match plan.items[1].marker.geometry {
        MarkerGeometry::Arrow { shaft, .. } => {
            assert_eq!(shaft, Line::new((52.0, 18.0), (100.0, 50.0)));
        }
        other => panic!("unexpected {other:?}"),
    }
    match plan.items[2].marker.geometry {
        MarkerGeometry::Diamond { bounds, .. } => {
            assert_eq!(bounds.center(), Point::new(1279.0, 0.0));
            assert_eq!(bounds.width(), 32.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(plan.items[0].marker.color, Rgba8::rgb(0x3b, 0x82, 0xf6));
    assert_eq!(plan.items[0].marker.center_fill, Some(Rgba8::rgb(255, 255, 255)));
    assert_eq!(plan.items[1].marker.center_fill, None);
    assert_eq!(plan.items[2].marker.center_fill, Some(Rgba8::rgb(255, 255, 255)));
}

#[test]
fn backdrop_contrasts_with_text_color() {
    let mut dark = ann(1, 10.0, 10.0, LabelStyle::Label, MarkerKind::Dot);
    dark.visuals.text_color = HexColor::parse("#111111").unwrap();
    let light = ann(2, 10.0, 10.0, LabelStyle::Label, MarkerKind::Dot);
    let plan = plan_frame(&[dark, light], frame(), 1.0, &ApproxTextMeasure::default());
    assert_eq!(
        plan.items[0].label.as_ref().unwrap().background_color,
        Rgba8::rgb(245, 245, 245)
    );
    assert_eq!(
        plan.items[1].label.as_ref().unwrap().background_color,
        Rgba8::rgb(10, 10, 10)
    );
}

#[test]
fn preview_applies_label_gate() {
    let mut pinned = ann(1, 10.0, 10.0, LabelStyle::Label, MarkerKind::Dot);
    pinned.always_visible = true;
    let loose = ann(2, 10.0, 10.0, LabelStyle::Label, MarkerKind::Dot);
    let items = [pinned, loose];

    let m = ApproxTextMeasure::default();
    let idle = plan_preview(&items, frame(), 1.0, &m, LabelContext::default());
    assert!(idle.items[0].label.is_some());
    assert!(idle.items[1].label.is_none());

    let dragging = LabelContext {
        dragged_id: Some(AnnotationId(2)),
        hovering: false,
    };
    let plan = plan_preview(&items, frame(), 1.0, &m, dragging);
    assert!(plan.items[1].label.is_some());
}

#[test]
fn blank_text_falls_back_to_id() {
    let mut a = ann(42, 0.0, 0.0, LabelStyle::Label, MarkerKind::Dot);
    a.text = "   ".to_owned();
    assert_eq!(display_text(&a), "#42");
}

#[test]
fn shorten_collapses_whitespace_and_cuts_on_words() {
    assert_eq!(shorten("  hello \n  world  ", 60), "hello world");
    let long = "word ".repeat(20);
    let out = shorten(&long, 60);
    assert!(out.ends_with("..."));
    assert!(out.chars().count() <= 60);
    assert_eq!(out, format!("{}...", ["word"; 11].join(" ")));
}

#[test]
fn shorten_drops_a_first_word_longer_than_the_budget() {
    assert_eq!(shorten(&"x".repeat(80), 10), "...");
    assert_eq!(shorten(&format!("{} tail", "y".repeat(70)), 60), "...");
}
