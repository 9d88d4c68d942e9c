//! Cross-crate snapshot tests: serialization round-trips and the
//! validate/evaluate contract.

use subcue_core::{AudioSpan, SubtitleEvent, TimelineSnapshot};
use subcue_pts::resolve;

fn populated_snapshot() -> TimelineSnapshot {
    TimelineSnapshot {
        timecodes: vec![0, 42, 83, 125, 167],
        keyframes: vec![0, 3],
        current_pts: 83,
        events: vec![SubtitleEvent::new(0, 2000), SubtitleEvent::new(2000, 4500)],
        selection: vec![1],
        audio_selection: Some(AudioSpan::new(1800, 4700)),
        audio_view: AudioSpan::new(0, 10_000),
        default_duration: 2000,
    }
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = populated_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: TimelineSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back.timecodes, snapshot.timecodes);
    assert_eq!(back.keyframes, snapshot.keyframes);
    assert_eq!(back.events, snapshot.events);
    assert_eq!(back.audio_selection, snapshot.audio_selection);

    // A deserialized snapshot resolves the same as the original.
    for text in ["cf", "ckf", "cs.s-500ms", "a.e", "dsd"] {
        assert_eq!(
            resolve(text, None, &back),
            resolve(text, None, &snapshot),
            "expression {text:?}"
        );
    }
}

#[test]
fn populated_snapshot_validates() {
    assert!(populated_snapshot().validate().is_ok());
}

#[test]
fn resolution_never_mutates_the_snapshot() {
    let snapshot = populated_snapshot();
    let before = serde_json::to_string(&snapshot).unwrap();
    let _ = resolve("cf+1f-2kf+500ms", Some(40), &snapshot);
    let after = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(before, after);
}
