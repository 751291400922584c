//! Integration tests for InterruptDispatcher

mod common;
use common::*;

use segment_clock::config::{SWITCH_CAUSE, TIMER_CAUSE};
use segment_clock::{
    CauseMatch, ClockConfig, ClockFormat, EdgeConfig, EdgeProfile, HourWrap, InterruptDispatcher,
    NoSwitches,
};

type SwitchClock = InterruptDispatcher<MockTimer, MockDisplay, MockSwitches>;

fn switch_clock(config: ClockConfig) -> SwitchClock {
    InterruptDispatcher::new(config, MockTimer::new(), MockDisplay::new(), MockSwitches::new())
        .unwrap()
}

fn timer_only_clock(
    config: ClockConfig,
) -> InterruptDispatcher<MockTimer, MockDisplay, NoSwitches> {
    InterruptDispatcher::new(config, MockTimer::new(), MockDisplay::new(), NoSwitches).unwrap()
}

#[test]
fn start_configures_timer_with_interrupt_and_draws_start_time() {
    let mut clock = timer_only_clock(ClockConfig::timer_interrupt());
    clock.start().unwrap();

    let setup = clock.timer().setup().unwrap();
    assert_eq!(setup.period, 2_999_999);
    assert!(setup.continuous);
    assert!(setup.interrupt_enabled);

    assert_eq!(clock.display().slots(), expected_slots(&[7, 5, 9, 5]));
    assert_eq!(clock.displayed().0, clock.display().slots());
}

#[test]
fn start_clears_latched_edges_and_unmasks_monitored_line() {
    let mut clock = switch_clock(ClockConfig::switch_interrupt());
    clock.switches_mut().toggle(0, true);
    clock.switches_mut().toggle(3, true);

    clock.start().unwrap();

    assert_eq!(clock.switches().pending(), 0);
    assert_eq!(clock.switches().acknowledged(), &[u32::MAX]);
    assert_eq!(clock.switches().interrupt_mask(), 1 << 3);
}

#[test]
fn three_timeouts_from_count_seven_advance_once() {
    let config = ClockConfig::timer_interrupt().with_initial_count(7);
    let mut clock = timer_only_clock(config);
    clock.start().unwrap();
    let renders_after_start = clock.display().renders();

    for _ in 0..2 {
        clock.timer_mut().fire();
        let outcome = clock.handle_interrupt(TIMER_CAUSE);
        assert!(outcome.timer_acknowledged);
        assert!(!outcome.second_elapsed);
    }
    assert_eq!(clock.display().renders(), renders_after_start);

    clock.timer_mut().fire();
    let outcome = clock.handle_interrupt(TIMER_CAUSE);
    assert!(outcome.second_elapsed);
    assert_eq!(clock.context().divider().count(), 0);

    let time = clock.context().time();
    assert_eq!((time.minutes(), time.seconds()), (59, 58));
    assert_eq!(clock.display().renders(), renders_after_start + 1);
    assert_eq!(clock.display().slots(), expected_slots(&[8, 5, 9, 5]));
    assert_eq!(clock.timer().acknowledgements(), 3);
}

#[test]
fn seconds_rollover_carries_into_minutes() {
    let config = ClockConfig::timer_interrupt()
        .with_layout(ClockFormat::HoursMinutesSeconds, HourWrap::Day)
        .with_start(10, 14, 59)
        .with_initial_count(9);
    let mut clock = timer_only_clock(config);

    clock.timer_mut().fire();
    assert!(clock.handle_interrupt(0).second_elapsed);

    let time = clock.context().time();
    assert_eq!((time.hours(), time.minutes(), time.seconds()), (10, 15, 0));
    assert_eq!(clock.display().slots(), expected_slots(&[0, 0, 5, 1, 0, 1]));
}

#[test]
fn one_second_per_ten_timeouts() {
    let mut clock = timer_only_clock(ClockConfig::timer_interrupt().with_start(0, 0, 0));

    for _ in 0..100 {
        clock.timer_mut().fire();
        clock.handle_interrupt(TIMER_CAUSE);
    }

    assert_eq!(clock.context().time().seconds(), 10);
    assert_eq!(clock.display().renders(), 10);
}

#[test]
fn timer_cause_without_timeout_flag_does_nothing() {
    let mut clock = timer_only_clock(ClockConfig::timer_interrupt());

    let outcome = clock.handle_interrupt(TIMER_CAUSE);
    assert!(outcome.is_ignored());
    assert_eq!(clock.timer().acknowledgements(), 0);
    assert_eq!(clock.context().divider().count(), 0);
}

#[test]
fn unrecognized_cause_is_ignored() {
    let mut clock = switch_clock(ClockConfig::switch_interrupt());
    clock.timer_mut().fire();
    clock.switches_mut().toggle(3, true);

    let outcome = clock.handle_interrupt(5);

    assert!(outcome.is_ignored());
    assert!(clock.timer().is_flag_set());
    assert_eq!(clock.switches().pending(), 1 << 3);
    assert_eq!(clock.display().writes(), 0);
}

#[test]
fn switch_cause_does_not_touch_timer() {
    let mut clock = switch_clock(ClockConfig::switch_interrupt());
    clock.timer_mut().fire();

    let outcome = clock.handle_interrupt(SWITCH_CAUSE);

    assert!(!outcome.timer_acknowledged);
    assert!(clock.timer().is_flag_set());
}

#[test]
fn active_edge_acknowledges_then_advances_twice_and_renders_once() {
    let mut clock = switch_clock(ClockConfig::switch_interrupt());
    clock.switches_mut().toggle(3, true);

    let outcome = clock.handle_interrupt(SWITCH_CAUSE);

    let edge = outcome.edge.unwrap();
    assert!(edge.level);
    assert_eq!(edge.advances, 2);
    assert_eq!(clock.switches().acknowledged(), &[1 << 3]);
    assert_eq!(clock.switches().pending(), 0);
    assert_eq!(clock.context().time().seconds(), 2);
    assert_eq!(clock.display().renders(), 1);
    assert_eq!(clock.display().slots(), expected_slots(&[2, 0, 0, 0]));
    assert!(clock.edge_channel().unwrap().latch().level());
}

#[test]
fn single_profile_advances_once() {
    let config = ClockConfig::switch_interrupt().with_edge(Some(EdgeConfig {
        line: 3,
        profile: EdgeProfile::Single,
        cause: CauseMatch::Exactly(SWITCH_CAUSE),
    }));
    let mut clock = switch_clock(config);
    clock.switches_mut().toggle(3, true);

    let edge = clock.handle_interrupt(SWITCH_CAUSE).edge.unwrap();

    assert_eq!(edge.advances, 1);
    assert_eq!(clock.context().time().seconds(), 1);
    assert_eq!(clock.display().renders(), 1);
}

#[test]
fn falling_edge_is_acknowledged_without_advancing() {
    let mut clock = switch_clock(ClockConfig::switch_interrupt());
    clock.switches_mut().toggle(3, true);
    clock.handle_interrupt(SWITCH_CAUSE);
    let renders = clock.display().renders();

    clock.switches_mut().toggle(3, false);
    let edge = clock.handle_interrupt(SWITCH_CAUSE).edge.unwrap();

    assert!(!edge.level);
    assert_eq!(edge.advances, 0);
    assert_eq!(clock.switches().pending(), 0);
    assert_eq!(clock.context().time().seconds(), 2);
    assert_eq!(clock.display().renders(), renders);
    assert!(!clock.edge_channel().unwrap().latch().level());
    assert_eq!(clock.edge_channel().unwrap().latch().edges_seen(), 2);
}

#[test]
fn acknowledged_edge_does_not_fire_again() {
    let mut clock = switch_clock(ClockConfig::switch_interrupt());
    clock.switches_mut().toggle(3, true);

    assert!(clock.handle_interrupt(SWITCH_CAUSE).edge.is_some());
    assert!(clock.handle_interrupt(SWITCH_CAUSE).edge.is_none());
    assert_eq!(clock.context().time().seconds(), 2);
}

#[test]
fn edge_on_other_line_is_left_latched() {
    let mut clock = switch_clock(ClockConfig::switch_interrupt());
    clock.switches_mut().toggle(1, true);

    let outcome = clock.handle_interrupt(SWITCH_CAUSE);

    assert!(outcome.edge.is_none());
    assert_eq!(clock.switches().pending(), 1 << 1);
    assert!(clock.switches().acknowledged().is_empty());
}

#[test]
fn shared_cause_handles_timer_and_edge_in_one_call() {
    let config = ClockConfig::switch_interrupt()
        .with_initial_count(9)
        .with_edge(Some(EdgeConfig {
            line: 3,
            profile: EdgeProfile::Double,
            cause: CauseMatch::Exactly(TIMER_CAUSE),
        }));
    let mut clock = switch_clock(config);
    clock.timer_mut().fire();
    clock.switches_mut().toggle(3, true);

    let outcome = clock.handle_interrupt(TIMER_CAUSE);

    assert!(outcome.second_elapsed);
    assert_eq!(outcome.edge.unwrap().advances, 2);
    assert_eq!(clock.context().time().seconds(), 3);
    assert_eq!(clock.display().renders(), 2);
}

#[test]
fn invalid_config_is_rejected() {
    let result = InterruptDispatcher::new(
        ClockConfig::timer_interrupt().with_divisor(0),
        MockTimer::new(),
        MockDisplay::new(),
        NoSwitches,
    );
    assert!(result.is_err());
}
