//! Minigame domain: tests for session lifecycle and exit conditions.

use super::session::ReflexMinigame;

#[test]
fn test_session_starts_fresh() {
    let mut minigame = ReflexMinigame::default();
    assert!(!minigame.is_running());

    minigame.start(8.0, 5);
    assert!(minigame.is_running());
    assert!(!minigame.is_completed());
    assert_eq!(minigame.hits(), 0);
}

#[test]
fn test_target_count_completes_early() {
    let mut minigame = ReflexMinigame::default();
    minigame.start(8.0, 3);

    minigame.record_hit();
    minigame.record_hit();
    assert!(!minigame.is_completed());

    minigame.record_hit();
    assert!(minigame.is_completed());
    assert!(!minigame.is_running());
    assert!(minigame.target_reached());
}

#[test]
fn test_timer_expiry_completes_without_target() {
    let mut minigame = ReflexMinigame::default();
    minigame.start(1.0, 5);
    minigame.record_hit();

    minigame.tick(0.5);
    assert!(minigame.is_running());
    minigame.tick(0.6);

    assert!(minigame.is_completed());
    assert!(!minigame.is_running());
    assert!(!minigame.target_reached());
}

#[test]
fn test_hits_ignored_after_stop() {
    let mut minigame = ReflexMinigame::default();
    minigame.start(8.0, 2);
    minigame.stop();

    minigame.record_hit();
    assert_eq!(minigame.hits(), 0);
    assert!(!minigame.is_completed());
}

#[test]
fn test_stop_is_idempotent() {
    let mut minigame = ReflexMinigame::default();
    minigame.start(8.0, 2);
    minigame.stop();
    minigame.stop();
    assert!(!minigame.is_running());
}

#[test]
fn test_restart_discards_previous_session() {
    let mut minigame = ReflexMinigame::default();
    minigame.start(8.0, 1);
    minigame.record_hit();
    assert!(minigame.is_completed());

    minigame.start(8.0, 5);
    assert!(!minigame.is_completed());
    assert_eq!(minigame.hits(), 0);
}
