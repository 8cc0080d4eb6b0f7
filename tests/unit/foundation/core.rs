use super::*;

#[test]
fn time_window_contains_both_boundaries() {
    let w = TimeWindow::new(2.0, 3.0).unwrap();
    assert!(!w.contains(1.999));
    assert!(w.contains(2.0));
    assert!(w.contains(3.5));
    assert!(w.contains(5.0));
    assert!(!w.contains(5.001));
}

#[test]
fn time_window_rejects_bad_inputs() {
    assert!(TimeWindow::new(-0.5, 1.0).is_err());
    assert!(TimeWindow::new(0.0, 0.0).is_err());
    assert!(TimeWindow::new(1.0, f64::NAN).is_err());
    assert!(TimeWindow::new(f64::INFINITY, 1.0).is_err());
    assert!(TimeWindow::new(0.0, 0.5).is_ok());
}

#[test]
fn time_window_uses_contract_field_names() {
    let w = TimeWindow::new(4.2, 3.0).unwrap();
    let v = serde_json::to_value(w).unwrap();
    assert_eq!(v, serde_json::json!({"time_sec": 4.2, "duration_sec": 3.0}));
}

#[test]
fn media_size_aspect_and_clamp() {
    let m = MediaSize::new(1920, 1080).unwrap();
    assert!((m.aspect_ratio().unwrap() - 16.0 / 9.0).abs() < 1e-12);
    assert_eq!(m.clamp_point(Point::new(-5.0, 2000.0)), Point::new(0.0, 1080.0));
    assert_eq!(m.clamp_point(Point::new(f64::NAN, 10.0)), Point::new(0.0, 10.0));
    assert!(MediaSize::new(0, 10).is_err());
}
