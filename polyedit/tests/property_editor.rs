mod common;

use common::{recording_bridge, RecordingMap};
use polyedit::{LatLng, PolygonEditor};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Click { lat: i16, lng: i16 },
    Undo,
    Clear,
    Enable,
    Disable,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<i16>(), any::<i16>()).prop_map(|(lat, lng)| Op::Click { lat, lng }),
        2 => Just(Op::Undo),
        1 => Just(Op::Clear),
        1 => Just(Op::Enable),
        1 => Just(Op::Disable),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 2_000, .. ProptestConfig::default() })]
    #[test]
    fn editor_matches_vec_model(seq in prop::collection::vec(op_strategy(), 1..60)) {
        let (bridge, calls) = recording_bridge();
        let mut ed = PolygonEditor::new(RecordingMap::default(), vec![], true).with_bridge(bridge);
        let mut model: Vec<LatLng> = Vec::new();
        let mut enabled = true;
        let mut pushes = 0usize;

        for op in seq {
            match op {
                Op::Click { lat, lng } => {
                    let p = LatLng::new(lat as f64 * 0.001, lng as f64 * 0.001);
                    if enabled {
                        model.push(p);
                        pushes += 1;
                    }
                    prop_assert_eq!(ed.handle_click(p), enabled);
                }
                Op::Undo => {
                    let expect = model.pop();
                    if expect.is_some() {
                        pushes += 1;
                    }
                    prop_assert_eq!(ed.undo(), expect);
                }
                Op::Clear => {
                    model.clear();
                    pushes += 1;
                    ed.clear();
                    prop_assert!(!ed.has_overlay());
                }
                Op::Enable => { enabled = true; ed.enable_editing(); }
                Op::Disable => { enabled = false; ed.disable_editing(); }
            }
            prop_assert_eq!(ed.points(), model.clone());
            prop_assert!(ed.map().live.len() <= 1);
            prop_assert_eq!(calls.borrow().len(), pushes);
            // every model change is pushed, so the last push is the current state
            if let Some(last) = calls.borrow().last() {
                prop_assert_eq!(last, &model);
            }
        }
    }
}
