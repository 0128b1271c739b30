//! # Search Trace Integration Tests
//!
//! End-to-end checks of the binary and linear step generators through the
//! session facades: trace shapes, verdicts, and the interval bookkeeping a
//! renderer depends on.

use tracekit::session::{Binary, Linear, SearchSession};
use tracekit::{Terminal, Verdict};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn binary_session(keys: &[u32]) -> SearchSession<Binary> {
    let mut session = SearchSession::<Binary>::new(keys.len().max(1), 2);
    for &key in keys {
        session.insert_text(&key.to_string()).unwrap();
    }
    session
}

#[test]
fn test_binary_search_finds_middle_first() {
    init_logs();
    let mut session = binary_session(&[10, 20, 30, 40, 50]);
    session.search(30);

    let trace = session.playback().trace();
    assert_eq!(trace.len(), 1);
    let step = &trace.steps()[0];
    assert_eq!((step.low, step.high, step.mid, step.value), (0, 4, 2, 30));
    assert_eq!(trace.verdict(), Verdict::Found(2));
}

#[test]
fn test_binary_search_halves_toward_target() {
    init_logs();
    let mut session = binary_session(&[11, 22, 33, 44, 55, 66, 77]);
    session.search(66);

    let trace = session.playback().trace();
    let mids: Vec<usize> = trace.steps().iter().map(|s| s.mid).collect();
    assert_eq!(mids, vec![3, 5]);
    assert_eq!(trace.verdict(), Verdict::Found(5));

    session.search(12);
    assert_eq!(session.playback().trace().verdict(), Verdict::NotFound);
}

#[test]
fn test_binary_miss_below_smallest_key() {
    // The low bound would underflow past the first slot; the walk must
    // stop cleanly instead.
    let mut session = binary_session(&[10, 20, 30]);
    session.search(5);
    let trace = session.playback().trace();
    assert_eq!(trace.verdict(), Verdict::NotFound);
    assert!(trace.steps().iter().all(|s| s.low <= s.high));
}

#[test]
fn test_linear_search_stops_display_at_first_match() {
    init_logs();
    let mut session = SearchSession::<Linear>::new(3, 1);
    for key in ["7", "3", "9"] {
        session.insert_text(key).unwrap();
    }
    session.search(9);

    let trace = session.playback().trace();
    assert_eq!(trace.verdict(), Verdict::Found(2));
    assert_eq!(trace.match_step(), Some(2));

    // cursor can reach the match step but never pass it
    session.playback_mut().next();
    session.playback_mut().next();
    session.playback_mut().next();
    assert_eq!(session.playback().cursor(), Some(2));
    assert_eq!(session.playback().terminal(), Some(Terminal::Found(2)));
}

#[test]
fn test_linear_search_preserves_insertion_order() {
    let mut session = SearchSession::<Linear>::new(4, 2);
    for key in ["42", "17", "99", "23"] {
        session.insert_text(key).unwrap();
    }
    assert_eq!(session.keys().keys(), &[42, 17, 99, 23]);

    session.search(23);
    let visited: Vec<u32> = session
        .playback()
        .trace()
        .steps()
        .iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(visited, vec![42, 17, 99, 23]);
}

#[test]
fn test_search_over_empty_structure_is_a_miss() {
    let mut session = SearchSession::<Binary>::new(5, 2);
    session.search(42);
    assert!(session.playback().trace().is_empty());
    assert_eq!(session.playback().trace().verdict(), Verdict::NotFound);
    assert_eq!(session.playback().cursor(), None);
}

#[test]
fn test_generate_fills_sorted_distinct_keys() {
    init_logs();
    let mut session = SearchSession::<Binary>::new(10, 2);
    session.generate().unwrap();

    let keys = session.keys().keys();
    assert_eq!(keys.len(), 10);
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    assert!(keys.iter().all(|&k| (10..=99).contains(&k)));
}

#[test]
fn test_search_target_is_format_checked_only() {
    let mut session = binary_session(&[10, 20, 30]);
    // width mismatch with the structure's digits is a legal target
    assert!(session.search_text("7").is_ok());
    assert_eq!(session.playback().trace().verdict(), Verdict::NotFound);
    assert!(session.search_text("abc").is_err());
    assert!(session.search_text("").is_err());
}
