use super::*;
use serde_json::json;

#[test]
fn keep_audio_defaults_to_true() {
    let req: RenderRequest =
        serde_json::from_value(json!({ "filename": "abc.mp4", "annotations": [] })).unwrap();
    assert!(req.keep_audio);
    assert!(req.annotations.is_empty());
}

#[test]
fn from_reader_rejects_blank_filename() {
    let body = r#"{ "filename": "  ", "annotations": [] }"#;
    let err = RenderRequest::from_reader(body.as_bytes()).unwrap_err();
    assert!(matches!(err, VidmarkError::Validation(_)));
}

#[test]
fn from_reader_rejects_bad_annotation_window() {
    let body = json!({
        "filename": "abc.mp4",
        "annotations": [{
            "id": 1, "x": 1.0, "y": 1.0, "time_sec": 0.0, "duration_sec": 0.0,
            "text": "x", "marker_type": "dot", "text_style": "label",
            "label_always_visible": true
        }]
    })
    .to_string();
    let err = RenderRequest::from_reader(body.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("duration"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = RenderRequest::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, VidmarkError::Serde(_)));
}

#[test]
fn upload_response_becomes_metadata() {
    let r: UploadResponse = serde_json::from_value(json!({
        "filename": "9f1c.mp4", "duration": 10.0, "width": 1280, "height": 720, "fps": 30.0
    }))
    .unwrap();
    let m = MediaMetadata::from(r);
    assert_eq!(m.filename, "9f1c.mp4");
    assert_eq!(m.duration_sec(), Some(10.0));
    assert_eq!(m.media_size().map(|s| (s.width, s.height)), Some((1280, 720)));
}
