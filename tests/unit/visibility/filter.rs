use super::*;
use crate::config::editor_config::AuthoringDefaults;
use crate::foundation::core::{Point, TimeWindow};
use crate::store::annotation_store::AnnotationStore;

fn store_with(windows: &[(f64, f64)]) -> AnnotationStore {
    let mut store = AnnotationStore::new();
    for (i, &(start, dur)) in windows.iter().enumerate() {
        let d = AuthoringDefaults {
            duration_sec: dur,
            ..AuthoringDefaults::default()
        };
        store.place(Point::new(0.0, 0.0), start, &d, i as u64).unwrap();
    }
    store
}

#[test]
fn boundaries_are_inclusive() {
    let store = store_with(&[(2.0, 3.0)]);
    assert_eq!(active_at(2.0, &store).len(), 1);
    assert_eq!(active_at(5.0, &store).len(), 1);
    assert!(active_at(5.001, &store).is_empty());
    assert!(active_at(1.999, &store).is_empty());
}

#[test]
fn result_keeps_creation_order() {
    let store = store_with(&[(3.0, 2.0), (0.0, 10.0), (4.0, 1.0), (8.0, 1.0)]);
    let ids: Vec<_> = active_at(4.5, &store).iter().map(|a| a.id).collect();
    let expected: Vec<_> = store.as_slice()[..3].iter().map(|a| a.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn same_inputs_same_outputs() {
    let store = store_with(&[(1.0, 1.0), (1.5, 0.5)]);
    let a: Vec<_> = active_at(1.75, &store).iter().map(|a| a.id).collect();
    let b: Vec<_> = active_at(1.75, store.as_slice()).iter().map(|a| a.id).collect();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn windows_past_end_of_media_are_kept_as_authored() {
    let store = store_with(&[(9.0, 3.0)]);
    assert_eq!(
        store.as_slice()[0].time_window,
        TimeWindow::new(9.0, 3.0).unwrap()
    );
    assert_eq!(active_at(11.5, &store).len(), 1);
}

#[test]
fn label_gate_combines_pin_drag_and_hover() {
    let mut store = store_with(&[(0.0, 1.0), (0.0, 1.0)]);
    let pinned = store.as_slice()[0].id;
    let loose = store.as_slice()[1].id;
    store
        .edit(
            loose,
            &crate::model::annotation::AnnotationEdit {
                always_visible: Some(false),
                ..Default::default()
            },
        )
        .unwrap();

    let idle = LabelContext::default();
    assert!(label_visible(store.get(pinned).unwrap(), idle));
    assert!(!label_visible(store.get(loose).unwrap(), idle));

    let hovering = LabelContext {
        hovering: true,
        ..idle
    };
    assert!(label_visible(store.get(loose).unwrap(), hovering));

    let dragging = LabelContext {
        dragged_id: Some(loose),
        hovering: false,
    };
    assert!(label_visible(store.get(loose).unwrap(), dragging));
    let dragging_other = LabelContext {
        dragged_id: Some(pinned),
        hovering: false,
    };
    assert!(!label_visible(store.get(loose).unwrap(), dragging_other));
}
