// playback.rs - Timing-dependent playback behavior

use std::thread;
use std::time::Duration;

use life::{Engine, MIN_INTERVAL};

#[test]
fn play_then_immediate_pause_steps_nothing() {
    let mut engine = Engine::new(4, 4).unwrap();
    engine.play(MIN_INTERVAL);
    assert!(engine.is_running());
    engine.pause();
    assert!(!engine.is_running());
    assert_eq!(engine.iterations(), 0);
}

#[test]
fn playback_advances_and_pause_is_final() {
    let mut engine = Engine::new(5, 5).unwrap();
    for col in 1..4 {
        engine.toggle_cell(2, col).unwrap();
    }

    engine.play(MIN_INTERVAL);
    thread::sleep(MIN_INTERVAL * 4);
    engine.pause();

    let after_pause = engine.iterations();
    assert!(after_pause >= 1, "ticker never stepped");

    // nothing may fire once pause has returned
    thread::sleep(MIN_INTERVAL * 3);
    assert_eq!(engine.iterations(), after_pause);
}

#[test]
fn play_while_running_is_a_no_op() {
    let mut engine = Engine::new(3, 3).unwrap();
    engine.play(Duration::from_millis(500));
    engine.play(Duration::from_millis(1500));
    // the second play neither restarts the ticker nor retunes the interval
    assert_eq!(engine.interval(), Duration::from_millis(500));
    engine.pause();
    engine.pause();
    assert!(!engine.is_running());
}

#[test]
fn play_clamps_the_requested_interval() {
    let mut engine = Engine::new(3, 3).unwrap();
    engine.play(Duration::from_millis(1));
    assert_eq!(engine.interval(), MIN_INTERVAL);
    engine.pause();
}

#[test]
fn manual_step_is_allowed_while_running() {
    let mut engine = Engine::new(4, 4).unwrap();
    engine.play(Duration::from_millis(2000));
    engine.step();
    assert!(engine.iterations() >= 1);
    engine.pause();
}

#[test]
fn set_speed_keeps_a_running_ticker_running() {
    let mut engine = Engine::new(3, 3).unwrap();
    engine.play(Duration::from_millis(1000));
    engine.set_speed(Duration::from_millis(200));
    assert!(engine.is_running());
    assert_eq!(engine.interval(), Duration::from_millis(200));
    engine.pause();
    assert!(!engine.is_running());
}
