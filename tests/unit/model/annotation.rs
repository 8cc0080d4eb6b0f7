use super::*;
use serde_json::json;

fn sample() -> Annotation {
    Annotation {
        id: AnnotationId(1_700_000_000_123),
        position: Point::new(100.0, 50.0),
        time_window: TimeWindow::new(4.2, 3.0).unwrap(),
        text: "Click here".to_owned(),
        marker_kind: MarkerKind::Arrow,
        label_style: LabelStyle::Callout,
        visuals: Visuals {
            color: HexColor::parse("#3b82f6").unwrap(),
            text_color: HexColor::parse("#ffffff").unwrap(),
            marker_size: 16,
            text_size: 18,
            font_weight: "700".to_owned(),
            font_style: "italic".to_owned(),
            font_family: "Inter".to_owned(),
        },
        always_visible: false,
    }
}

#[test]
fn serializes_to_flat_contract_shape() {
    let v = serde_json::to_value(sample()).unwrap();
    assert_eq!(
        v,
        json!({
            "id": 1_700_000_000_123u64,
            "x": 100.0,
            "y": 50.0,
            "time_sec": 4.2,
            "duration_sec": 3.0,
            "text": "Click here",
            "marker_type": "arrow",
            "text_style": "callout",
            "color": "#3b82f6",
            "text_color": "#ffffff",
            "marker_size": 16,
            "text_size": 18,
            "font_weight": "700",
            "font_style": "italic",
            "font_family": "Inter",
            "label_always_visible": false
        })
    );
}

#[test]
fn deserializes_records_without_font_fields() {
    let v = json!({
        "id": 7,
        "x": 10,
        "y": 20.5,
        "time_sec": 1.0,
        "duration_sec": 3.0,
        "text": "",
        "marker_type": "pin",
        "text_style": "headline",
        "color": "#ff0000",
        "text_color": "#000000",
        "marker_size": 24,
        "label_always_visible": true
    });
    let ann: Annotation = serde_json::from_value(v).unwrap();
    assert_eq!(ann.position, Point::new(10.0, 20.5));
    assert_eq!(ann.marker_kind, MarkerKind::Pin);
    assert_eq!(ann.label_style, LabelStyle::Headline);
    assert_eq!(ann.visuals.text_size, 16);
    assert_eq!(ann.visuals.font_family, "Inter");
}

#[test]
fn validate_checks_window_and_frame() {
    let media = MediaSize::new(640, 360).unwrap();
    let mut ann = sample();
    assert!(ann.validate(Some(media)).is_ok());

    ann.position = Point::new(641.0, 10.0);
    assert!(ann.validate(Some(media)).is_err());
    assert!(ann.validate(None).is_ok());

    ann.position = Point::new(1.0, 1.0);
    ann.time_window.duration_sec = 0.0;
    assert!(ann.validate(Some(media)).is_err());
}

#[test]
fn edit_replaces_fields_and_keeps_identity() {
    let mut ann = sample();
    let edit = AnnotationEdit {
        text: Some("Next".to_owned()),
        label_style: Some(LabelStyle::Label),
        color: Some(HexColor::parse("#00ff00").unwrap()),
        duration_sec: Some(5.0),
        always_visible: Some(true),
        ..AnnotationEdit::default()
    };
    edit.apply_to(&mut ann).unwrap();
    assert_eq!(ann.id, AnnotationId(1_700_000_000_123));
    assert_eq!(ann.time_window.start_sec, 4.2);
    assert_eq!(ann.time_window.duration_sec, 5.0);
    assert_eq!(ann.text, "Next");
    assert_eq!(ann.label_style, LabelStyle::Label);
    assert_eq!(ann.visuals.color.as_str(), "#00ff00");
    assert!(ann.always_visible);
}

#[test]
fn invalid_edit_leaves_record_untouched() {
    let mut ann = sample();
    let before = ann.clone();
    let edit = AnnotationEdit {
        text: Some("changed".to_owned()),
        duration_sec: Some(-1.0),
        ..AnnotationEdit::default()
    };
    assert!(edit.apply_to(&mut ann).is_err());
    assert_eq!(ann, before);

    let edit = AnnotationEdit {
        text: Some("changed".to_owned()),
        marker_size: Some(0),
        ..AnnotationEdit::default()
    };
    assert!(edit.apply_to(&mut ann).is_err());
    assert_eq!(ann, before);
}
