//! # Hash Table Integration Tests
//!
//! The three hashing schemes and five collision resolution strategies,
//! driven through [`HashSession`]: probe traces on insert, full
//! probe-sequence search, and removal semantics.

use tracekit::session::HashSession;
use tracekit::{CollisionMethod, HashScheme, Slot, Verdict};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn modulo_session(method: CollisionMethod) -> HashSession {
    HashSession::new(10, 2, HashScheme::Modulo, method).unwrap()
}

#[test]
fn test_linear_probe_displaces_colliding_keys() {
    init_logs();
    let mut session = modulo_session(CollisionMethod::LinearProbe);
    for key in ["23", "13", "33"] {
        session.insert_text(key).unwrap();
    }

    // all three hash to slot 3; probing pushes them right
    assert_eq!(session.table().slot(3), &Slot::Single(23));
    assert_eq!(session.table().slot(4), &Slot::Single(13));
    assert_eq!(session.table().slot(5), &Slot::Single(33));
}

#[test]
fn test_search_rewalks_the_probe_sequence() {
    let mut session = modulo_session(CollisionMethod::LinearProbe);
    for key in ["23", "13", "33"] {
        session.insert_text(key).unwrap();
    }

    session.search_text("33").unwrap();
    let trace = session.playback().trace();
    let slots: Vec<usize> = trace.steps().iter().map(|s| s.slot).collect();
    assert_eq!(slots, vec![3, 4, 5]);
    assert_eq!(trace.verdict(), Verdict::Found(5));

    // a displaced key is still findable even though its home slot holds
    // another key
    session.search_text("13").unwrap();
    assert_eq!(session.playback().trace().verdict(), Verdict::Found(4));
}

#[test]
fn test_search_miss_stops_at_first_empty_slot() {
    let mut session = modulo_session(CollisionMethod::LinearProbe);
    session.insert_text("23").unwrap();
    session.search_text("43").unwrap();

    let trace = session.playback().trace();
    // slot 3 holds 23, slot 4 is empty: two probes, then give up
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.verdict(), Verdict::NotFound);
    assert_eq!(trace.steps()[1].occupant, None);
}

#[test]
fn test_every_strategy_finds_what_it_stored() {
    let strategies = [
        CollisionMethod::LinearProbe,
        CollisionMethod::QuadraticProbe,
        CollisionMethod::DoubleHash,
        CollisionMethod::Chaining,
        CollisionMethod::NestedArray { width: 3 },
    ];
    for method in strategies {
        let mut session = modulo_session(method);
        for key in ["23", "13", "33", "47", "59"] {
            session.insert_text(key).unwrap();
        }
        for key in ["23", "13", "33", "47", "59"] {
            session.search_text(key).unwrap();
            assert!(
                session.playback().trace().verdict().is_found(),
                "{key} lost under {method:?}"
            );
        }
        session.search_text("99").unwrap();
        assert_eq!(session.playback().trace().verdict(), Verdict::NotFound);
    }
}

#[test]
fn test_chaining_buckets_grow_without_failing() {
    let mut session = modulo_session(CollisionMethod::Chaining);
    for key in ["23", "13", "33", "43", "53", "63", "73", "83", "93"] {
        session.insert_text(key).unwrap();
    }
    match session.table().slot(3) {
        Slot::Bucket(keys) => assert_eq!(keys.len(), 9),
        other => panic!("expected a bucket, got {other:?}"),
    }
}

#[test]
fn test_nested_array_rejects_overflowing_bucket() {
    let mut session = modulo_session(CollisionMethod::NestedArray { width: 3 });
    for key in ["23", "13", "33"] {
        session.insert_text(key).unwrap();
    }
    assert!(session.insert_text("43").is_err());
    // the rejected insert left the table unchanged
    assert_eq!(session.table().key_count(), 3);
}

#[test]
fn test_direct_strategy_errors_on_collision() {
    let mut session = modulo_session(CollisionMethod::Direct);
    session.insert_text("23").unwrap();
    assert!(session.insert_text("13").is_err());
    assert_eq!(session.table().key_count(), 1);
}

#[test]
fn test_mid_square_scheme_places_by_central_digits() {
    init_logs();
    // 23² = 529, capacity 10 keeps one central digit: slot 2
    let mut session = HashSession::new(
        10,
        2,
        HashScheme::MidSquare,
        CollisionMethod::LinearProbe,
    )
    .unwrap();
    session.insert_text("23").unwrap();
    assert_eq!(session.table().slot(2), &Slot::Single(23));
}

#[test]
fn test_truncation_scheme_places_by_leading_digits() {
    // capacity 10 keeps one leading digit of the key: 87 lands in slot 8
    let mut session = HashSession::new(
        10,
        2,
        HashScheme::Truncation,
        CollisionMethod::LinearProbe,
    )
    .unwrap();
    session.insert_text("87").unwrap();
    assert_eq!(session.table().slot(8), &Slot::Single(87));
}

#[test]
fn test_remove_clears_slot_without_tombstone() {
    let mut session = modulo_session(CollisionMethod::LinearProbe);
    for key in ["23", "13", "33"] {
        session.insert_text(key).unwrap();
    }
    session.remove_text("13").unwrap();
    assert_eq!(session.table().slot(4), &Slot::Empty);

    // the hole now shadows the displaced 33: a known consequence of
    // tombstone-free removal
    session.search_text("33").unwrap();
    assert_eq!(session.playback().trace().verdict(), Verdict::NotFound);
}

#[test]
fn test_duplicate_rejected_wherever_it_lives() {
    let mut session = modulo_session(CollisionMethod::LinearProbe);
    session.insert_text("23").unwrap();
    session.insert_text("13").unwrap(); // displaced to slot 4
    assert!(session.insert_text("13").is_err());
}

#[test]
fn test_clear_empties_every_slot() {
    let mut session = modulo_session(CollisionMethod::Chaining);
    for key in ["23", "13", "42"] {
        session.insert_text(key).unwrap();
    }
    session.clear();
    assert_eq!(session.table().key_count(), 0);
    assert!(session.table().slots().iter().all(Slot::is_empty));
    assert_eq!(session.playback().cursor(), None);
}
