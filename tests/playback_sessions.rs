//! # Playback Integration Tests
//!
//! The playback controller driven the way an embedder drives it: manual
//! stepping, autoplay tickets against a host timer loop, and the
//! invalidation rules when the underlying structure changes mid-run.

use tracekit::session::{HashSession, Linear, SearchSession};
use tracekit::{CollisionMethod, HashScheme, Terminal, TickOutcome};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn miss_session() -> SearchSession<Linear> {
    let mut session = SearchSession::<Linear>::new(4, 2);
    for key in ["11", "22", "33", "44"] {
        session.insert_text(key).unwrap();
    }
    session.search(99);
    session
}

#[test]
fn test_manual_stepping_matches_cursor_arithmetic() {
    init_logs();
    let mut session = miss_session();
    let playback = session.playback_mut();

    assert_eq!(playback.cursor(), Some(0));
    playback.next();
    playback.next();
    playback.next();
    playback.prev();
    assert_eq!(playback.cursor(), Some(2));
}

#[test]
fn test_autoplay_drains_the_trace() {
    init_logs();
    let mut session = miss_session();
    let playback = session.playback_mut();

    let mut ticket = playback.toggle_play().unwrap();
    let mut ticks = 0;
    loop {
        match playback.tick(&ticket) {
            TickOutcome::Advanced => ticket = playback.ticket().unwrap(),
            TickOutcome::Finished => break,
            TickOutcome::Stale => panic!("live ticket reported stale"),
        }
        ticks += 1;
        assert!(ticks < 10, "autoplay never finished");
    }
    assert!(!playback.is_playing());
    assert_eq!(playback.terminal(), Some(Terminal::NotFound));
}

#[test]
fn test_new_search_invalidates_running_autoplay() {
    let mut session = miss_session();
    let ticket = session.playback_mut().toggle_play().unwrap();

    // starting a new search replaces the trace; the old timer's ticket
    // must bounce off
    session.search(22);
    assert_eq!(session.playback_mut().tick(&ticket), TickOutcome::Stale);
    assert_eq!(session.playback().cursor(), Some(0));
}

#[test]
fn test_mutation_discards_the_running_trace() {
    let mut session = miss_session();
    let ticket = session.playback_mut().toggle_play().unwrap();

    session.insert_text("55").unwrap();
    assert_eq!(session.playback().cursor(), None);
    assert_eq!(session.playback_mut().tick(&ticket), TickOutcome::Stale);
    assert_eq!(session.target(), None);
}

#[test]
fn test_hash_insert_trace_replays_probes() {
    let mut session =
        HashSession::new(10, 2, HashScheme::Modulo, CollisionMethod::LinearProbe).unwrap();
    session.insert_text("23").unwrap();
    session.insert_text("33").unwrap();

    // the second insert probed 3 then placed at 4; playback walks both
    let playback = session.playback_mut();
    assert_eq!(playback.trace().len(), 2);
    assert_eq!(playback.current_step().unwrap().slot, 3);
    playback.next();
    assert_eq!(playback.current_step().unwrap().slot, 4);
    assert_eq!(playback.terminal(), Some(Terminal::Found(4)));
}

#[test]
fn test_single_step_trace_concludes_immediately() {
    let mut session = SearchSession::<Linear>::new(2, 1);
    session.insert_text("7").unwrap();
    session.search(7);

    // trace concludes on its opening step; autoplay must not start a
    // pointless run
    assert_eq!(session.playback().terminal(), Some(Terminal::Found(0)));
    assert!(session.playback_mut().toggle_play().is_some());
    let ticket = session.playback_mut().ticket().unwrap();
    assert_eq!(session.playback_mut().tick(&ticket), TickOutcome::Finished);
    assert!(!session.playback().is_playing());
}

#[test]
fn test_ticket_interval_is_the_autoplay_cadence() {
    let mut session = miss_session();
    let ticket = session.playback_mut().toggle_play().unwrap();
    assert_eq!(ticket.interval().as_millis(), 650);
}
