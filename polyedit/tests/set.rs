mod common;

use common::{ll, recording_bridge, RecordingMap};
use polyedit::{KeyChord, Mode, PolygonSet, SetSnapshot};
use serde_json::json;

#[test]
fn new_set_starts_with_one_disabled_polygon() {
    let mut set = PolygonSet::new(RecordingMap::default());
    assert_eq!(set.polygon_count(), 1);
    assert_eq!(set.current(), Some(0));
    assert!(!set.is_current_enabled());
    assert!(!set.handle_click(ll(1.0, 1.0)));
    assert_eq!(set.polygon(0), Some(vec![]));
}

#[test]
fn clicks_go_to_the_current_polygon_only() {
    let mut set = PolygonSet::new(RecordingMap::default());
    set.enable_current();
    set.handle_click(ll(1.0, 1.0));
    let second = set.add_polygon();
    assert_eq!(second, 1);
    assert_eq!(set.current(), Some(0), "adding does not select");

    set.select(second).unwrap();
    assert!(!set.handle_click(ll(2.0, 2.0)), "new polygons start disabled");
    set.enable_current();
    set.handle_click(ll(3.0, 3.0));

    assert_eq!(set.polygon(0), Some(vec![ll(1.0, 1.0)]));
    assert_eq!(set.polygon(1), Some(vec![ll(3.0, 3.0)]));
    // only the selected polygon is on the map
    assert_eq!(set.map().live.len(), 1);
    assert_eq!(set.map().live_points(), Some(&[ll(3.0, 3.0)][..]));
}

#[test]
fn select_hides_previous_overlay() {
    let mut set = PolygonSet::new(RecordingMap::default());
    set.enable_current();
    set.handle_click(ll(1.0, 1.0));
    set.add_polygon();
    set.select(1).unwrap();
    let snap = set.snapshot();
    assert_eq!(snap.current, Some(1));
    assert!(set.has_overlay());
    assert_eq!(set.map().live.len(), 1);
    assert_eq!(set.select(7).unwrap_err().code(), "invalid_index");
    assert_eq!(set.current(), Some(1));
}

#[test]
fn manual_mode_is_isolated() {
    let (bridge, calls) = recording_bridge();
    let mut set = PolygonSet::new(RecordingMap::default()).with_bridge(bridge);
    set.enable_current();
    set.handle_click(ll(1.0, 1.0));

    set.switch_mode();
    assert_eq!(set.mode(), Mode::Manual);
    // manual mode ignores per-polygon flags
    set.disable_current();
    assert!(set.handle_click(ll(5.0, 5.0)));
    assert!(set.handle_click(ll(6.0, 6.0)));
    assert_eq!(set.undo(), Some(ll(6.0, 6.0)));
    assert_eq!(set.manual_points(), vec![ll(5.0, 5.0)]);
    assert_eq!(set.polygon(0), Some(vec![ll(1.0, 1.0)]));

    set.clear();
    assert!(set.manual_points().is_empty());
    assert_eq!(set.polygon(0), Some(vec![ll(1.0, 1.0)]));

    set.switch_mode();
    assert_eq!(set.mode(), Mode::Interactive);
    assert_eq!(set.active_points(), Some(&[ll(1.0, 1.0)][..]));

    let calls = calls.borrow();
    assert_eq!(calls.last(), Some(&vec![]), "clear pushes the emptied manual list");
}

#[test]
fn remove_current_moves_selection_back_from_the_end() {
    let mut set = PolygonSet::new(RecordingMap::default());
    set.add_polygon();
    set.add_polygon();
    set.select(2).unwrap();
    set.remove_current();
    assert_eq!(set.current(), Some(1));
    assert_eq!(set.polygon_count(), 2);

    set.select(0).unwrap();
    set.remove_current();
    assert_eq!(set.current(), Some(0));
    assert_eq!(set.polygon_count(), 1);

    set.remove_current();
    assert_eq!(set.current(), None);
    assert_eq!(set.polygon_count(), 0);
    assert_eq!(set.remove_current(), None);

    // nothing to act on, and none of this panics
    assert!(!set.handle_click(ll(0.0, 0.0)));
    assert_eq!(set.undo(), None);
    set.clear();

    assert_eq!(set.add_polygon(), 0);
    assert_eq!(set.current(), Some(0));
}

#[test]
fn snapshot_restore_round_trip() {
    let mut set = PolygonSet::new(RecordingMap::default());
    set.enable_current();
    set.handle_click(ll(1.0, 2.0));
    set.handle_click(ll(3.0, 4.0));
    set.add_polygon();
    set.switch_mode();
    set.handle_click(ll(9.0, 9.0));
    let snap = set.snapshot();

    let v = serde_json::to_value(&snap).unwrap();
    assert_eq!(
        v,
        json!({
            "current": 0,
            "polygons": [[[1.0, 2.0], [3.0, 4.0]], []],
            "enabled": [true, false],
            "manual": [[9.0, 9.0]],
            "interactive": false
        })
    );

    let mut other = PolygonSet::new(RecordingMap::default());
    let back: SetSnapshot = serde_json::from_value(v).unwrap();
    other.restore(back).unwrap();
    assert_eq!(other.snapshot(), snap);
    assert_eq!(other.mode(), Mode::Manual);
    let map = other.into_map();
    assert!(map.live.is_empty());
    assert_eq!(map.last_color.as_deref(), Some("red"));
}

#[test]
fn restore_rejects_bad_current_and_keeps_state() {
    let mut set = PolygonSet::new(RecordingMap::default());
    set.enable_current();
    set.handle_click(ll(1.0, 1.0));
    let before = set.snapshot();
    let bad = SetSnapshot {
        current: Some(3),
        polygons: vec![vec![]],
        enabled: vec![true],
        manual: vec![],
        interactive: true,
    };
    assert_eq!(set.restore(bad).unwrap_err().code(), "invalid_index");
    assert_eq!(set.snapshot(), before);
}

#[test]
fn restore_defaults_missing_fields() {
    let snap: SetSnapshot = serde_json::from_value(json!({
        "current": 1,
        "polygons": [[[0.0, 0.0]], [[1.0, 1.0]]],
        "enabled": [true]
    }))
    .unwrap();
    let mut set = PolygonSet::new(RecordingMap::default());
    set.restore(snap).unwrap();
    assert_eq!(set.mode(), Mode::Interactive);
    assert!(!set.is_current_enabled());
    assert_eq!(set.active_points(), Some(&[ll(1.0, 1.0)][..]));
}

#[test]
fn try_add_polygon_caps_count() {
    let mut set = PolygonSet::new(RecordingMap::default());
    for _ in 1..polyedit::limits::MAX_POLYGONS {
        set.try_add_polygon().unwrap();
    }
    assert_eq!(set.try_add_polygon().unwrap_err().code(), "too_many_polygons");
}

#[test]
fn strict_click_on_disabled_slot_skips_validation() {
    let mut set = PolygonSet::new(RecordingMap::default());
    assert_eq!(set.try_handle_click(ll(f64::NAN, 0.0)), Ok(false));
    set.enable_current();
    assert_eq!(set.try_handle_click(ll(0.0, 200.0)).unwrap_err().code(), "out_of_range");

    set.switch_mode();
    set.disable_current();
    assert_eq!(set.try_handle_click(ll(f64::NAN, 0.0)).unwrap_err().code(), "non_finite");
    assert_eq!(set.try_handle_click(ll(2.0, 2.0)), Ok(true));
    assert_eq!(set.manual_points(), vec![ll(2.0, 2.0)]);
}

#[test]
fn undo_key_pops_the_active_list() {
    let (bridge, calls) = recording_bridge();
    let mut set = PolygonSet::new(RecordingMap::default()).with_bridge(bridge);
    set.enable_current();
    set.handle_click(ll(1.0, 1.0));
    set.handle_click(ll(2.0, 2.0));

    set.switch_mode();
    set.handle_click(ll(7.0, 7.0));
    set.handle_click(ll(8.0, 8.0));
    assert!(set.handle_key(&KeyChord::new("z", 90, true, false)));
    assert_eq!(set.manual_points(), vec![ll(7.0, 7.0)]);
    assert_eq!(set.polygon(0), Some(vec![ll(1.0, 1.0), ll(2.0, 2.0)]));

    set.switch_mode();
    assert!(set.handle_key(&KeyChord::new("z", 90, false, true)));
    assert_eq!(set.polygon(0), Some(vec![ll(1.0, 1.0)]));
    assert_eq!(set.manual_points(), vec![ll(7.0, 7.0)]);
    assert_eq!(calls.borrow().last(), Some(&vec![ll(1.0, 1.0)]));

    assert!(!set.handle_key(&KeyChord::new("y", 89, true, false)));
    assert!(!set.handle_key(&KeyChord::new("z", 90, false, false)));
    assert_eq!(set.polygon(0), Some(vec![ll(1.0, 1.0)]));
}
