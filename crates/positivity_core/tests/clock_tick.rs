use chrono::{DateTime, Duration};
use positivity_core::{
    builtin_catalog, Clock, DisplayConfig, DisplayController, ManualClock, ThreadRandom, TimerKind,
};

fn open() -> (ManualClock, DisplayController<ManualClock, ThreadRandom>) {
    let clock = ManualClock::new(
        DateTime::parse_from_rfc3339("2026-02-01T10:00:00+00:00").expect("rfc3339"),
    );
    let display = DisplayController::initialize(
        builtin_catalog(),
        DisplayConfig::default(),
        clock.clone(),
        ThreadRandom,
    )
    .expect("default config is valid");
    (clock, display)
}

#[test]
fn three_ticks_advance_time_by_three_minutes_only() {
    let (clock, mut display) = open();
    let start_time = display.current_time();
    let start_message = display.current_message();

    let mut ticks = 0;
    for _ in 0..3 {
        clock.advance(Duration::seconds(60));
        ticks += display
            .pump()
            .iter()
            .filter(|event| event.kind == TimerKind::ClockTick)
            .count();
    }

    assert_eq!(ticks, 3);
    assert_eq!(display.current_time() - start_time, Duration::seconds(180));
    assert_eq!(display.current_message(), start_message);
    assert!(!display.is_animating());
}

#[test]
fn no_tick_before_the_period_elapses() {
    let (clock, mut display) = open();
    let start_time = display.current_time();

    clock.advance(Duration::seconds(59));
    assert!(display.pump().is_empty());
    assert_eq!(display.current_time(), start_time);
}

#[test]
fn direct_tick_only_touches_current_time() {
    let (clock, mut display) = open();
    let before = *display.state();

    clock.advance(Duration::seconds(5));
    display.on_clock_tick();

    let after = *display.state();
    assert_eq!(after.current_message, before.current_message);
    assert_eq!(after.is_animating, before.is_animating);
    assert_eq!(after.current_time - before.current_time, Duration::seconds(5));
}

#[test]
fn no_tick_fires_after_teardown() {
    let (clock, mut display) = open();
    display.teardown();
    let frozen = display.current_time();

    clock.advance(Duration::minutes(10));
    assert!(display.pump().is_empty());
    assert_eq!(display.current_time(), frozen);
    assert!(display.is_torn_down());

    display.teardown();
    assert!(display.next_deadline().is_none());
}

#[test]
fn custom_period_from_config_drives_ticks() {
    let clock = ManualClock::new(
        DateTime::parse_from_rfc3339("2026-02-01T10:00:00+00:00").expect("rfc3339"),
    );
    let config = DisplayConfig {
        clock_period_ms: 1_000,
        ..DisplayConfig::default()
    };
    let mut display =
        DisplayController::initialize(builtin_catalog(), config, clock.clone(), ThreadRandom)
            .expect("valid config");

    clock.advance(Duration::seconds(1));
    assert_eq!(display.pump().len(), 1);
}

#[test]
fn millisecond_clock_resumed_after_a_month_ticks_once() {
    let clock = ManualClock::new(
        DateTime::parse_from_rfc3339("2026-02-01T10:00:00+00:00").expect("rfc3339"),
    );
    let config = DisplayConfig {
        clock_period_ms: 1,
        ..DisplayConfig::default()
    };
    let mut display =
        DisplayController::initialize(builtin_catalog(), config, clock.clone(), ThreadRandom)
            .expect("1ms period is valid");

    clock.advance(Duration::days(30));
    let fired = display.pump();

    assert_eq!(fired.len(), 1);
    assert_eq!(display.current_time(), clock.now());
    let next = display.next_deadline().expect("clock still armed");
    assert_eq!(next - clock.now(), Duration::milliseconds(1));
}
