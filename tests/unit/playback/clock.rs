use super::*;

#[test]
fn starts_paused_at_zero() {
    let clock = PlaybackClock::new(0.1);
    assert_eq!(clock.state(), PlayState::Paused);
    assert_eq!(clock.current_time_sec(), 0.0);
}

#[test]
fn play_then_pause() {
    let mut engine = InMemoryEngine::new();
    let mut clock = PlaybackClock::new(0.1);

    assert_eq!(clock.play(&mut engine), PlayOutcome::Playing);
    assert!(clock.is_playing());
    assert!(engine.playing);

    clock.pause(&mut engine);
    assert!(!clock.is_playing());
    assert!(!engine.playing);
}

#[test]
fn refused_play_falls_back_to_paused() {
    let mut engine = InMemoryEngine::refusing("autoplay blocked");
    let mut clock = PlaybackClock::new(0.1);

    let out = clock.play(&mut engine);
    assert_eq!(out, PlayOutcome::Refused("autoplay blocked".to_owned()));
    assert_eq!(clock.state(), PlayState::Paused);
    assert!(!engine.playing);
}

#[test]
fn toggle_alternates() {
    let mut engine = InMemoryEngine::new();
    let mut clock = PlaybackClock::new(0.1);
    assert_eq!(clock.toggle(&mut engine), Some(PlayOutcome::Playing));
    assert_eq!(clock.toggle(&mut engine), None);
    assert!(!clock.is_playing());
}

#[test]
fn seek_within_tolerance_does_not_touch_engine() {
    let mut engine = InMemoryEngine {
        position_sec: 4.0,
        ..InMemoryEngine::default()
    };
    let mut clock = PlaybackClock::new(0.1);

    assert!(!clock.seek(4.05, &mut engine));
    assert_eq!(clock.current_time_sec(), 4.05);
    assert_eq!(engine.seeks, 0);

    assert!(clock.seek(7.5, &mut engine));
    assert_eq!(engine.position_sec, 7.5);
    assert_eq!(engine.seeks, 1);
}

#[test]
fn seek_floors_negative_times() {
    let mut engine = InMemoryEngine {
        position_sec: 3.0,
        ..InMemoryEngine::default()
    };
    let mut clock = PlaybackClock::new(0.1);
    clock.seek(-2.0, &mut engine);
    assert_eq!(clock.current_time_sec(), 0.0);
    assert_eq!(engine.position_sec, 0.0);
}

#[test]
fn time_updates_follow_engine_without_seeking() {
    let mut engine = InMemoryEngine::new();
    let mut clock = PlaybackClock::new(0.1);
    clock.play(&mut engine);
    clock.on_time_update(12.25);
    assert_eq!(clock.current_time_sec(), 12.25);
    clock.on_time_update(f64::NAN);
    assert_eq!(clock.current_time_sec(), 12.25);
    assert_eq!(engine.seeks, 0);
}

#[test]
fn reset_returns_to_paused_zero() {
    let mut engine = InMemoryEngine::new();
    let mut clock = PlaybackClock::new(0.1);
    clock.play(&mut engine);
    clock.on_time_update(30.0);
    clock.reset();
    assert_eq!(clock.state(), PlayState::Paused);
    assert_eq!(clock.current_time_sec(), 0.0);
}
