use super::*;

fn track() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 32.0)
}

#[test]
fn press_seeks_immediately() {
    let mut g = ScrubGesture::new();
    assert_eq!(g.press(100.0, track(), 100.0), 25.0);
    assert!(g.is_active());
}

#[test]
fn moves_outside_track_are_clamped_and_monotone() {
    let mut g = ScrubGesture::new();
    g.press(200.0, track(), 100.0);

    let xs = [-50.0, 0.0, 120.0, 399.0, 400.0, 900.0, 5_000.0];
    let times: Vec<f64> = xs.iter().map(|&x| g.drag_to(x).unwrap()).collect();
    assert_eq!(times.first().copied(), Some(0.0));
    assert_eq!(times.last().copied(), Some(100.0));
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    assert!(times.iter().all(|t| (0.0..=100.0).contains(t)));
}

#[test]
fn moves_after_release_yield_nothing() {
    let mut g = ScrubGesture::new();
    assert_eq!(g.drag_to(10.0), None);
    g.press(0.0, track(), 60.0);
    assert!(g.release());
    assert_eq!(g.drag_to(200.0), None);
    assert!(!g.release());
}
