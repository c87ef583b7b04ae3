//! Integration tests for the command → state → frame pipeline.

use std::time::Duration;

use super::mock_io::{MockIo, RecordingSink};

use transit_leds::app::commands::AppCommand;
use transit_leds::app::events::AppEvent;
use transit_leds::app::service::SignalService;
use transit_leds::config::SignalConfig;
use transit_leds::drivers::line_frame::Line;
use transit_leds::error::{CommandError, Error};
use transit_leds::fsm::{Place, Product, Route, SignalMode};

fn make_service() -> (SignalService, MockIo, RecordingSink) {
    let mut service = SignalService::new(&SignalConfig::default());
    let mut io = MockIo::new();
    let mut sink = RecordingSink::new();
    service.start(&mut io, &mut sink);
    (service, io, sink)
}

// ── Route assignment ──────────────────────────────────────────

#[test]
fn route_command_clears_lines_then_stores_route() {
    let (mut svc, mut io, mut sink) = make_service();
    svc.handle_command(AppCommand::AssignProduct(2), &mut io, &mut sink);
    svc.tick(&mut io);
    assert!(!io.last_lit().is_empty());

    let ok = svc.handle_command(
        AppCommand::AssignRoute {
            departure: 3,
            arrival: 4,
        },
        &mut io,
        &mut sink,
    );

    assert!(ok);
    assert!(MockIo::all_off(io.last_frame().unwrap()));
    assert_eq!(svc.route(), Route::new(Place::OperatingRoom, Place::RecoverySector));
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::RouteAssigned(Route::new(
            Place::OperatingRoom,
            Place::RecoverySector
        )))
    );
}

#[test]
fn partially_invalid_route_applies_valid_half_and_fails() {
    let (mut svc, mut io, mut sink) = make_service();
    svc.handle_command(
        AppCommand::AssignRoute {
            departure: 2,
            arrival: 5,
        },
        &mut io,
        &mut sink,
    );
    svc.tick(&mut io);
    assert_eq!(io.last_lit(), vec![Line::Green]);
    let frames_before = io.frames.len();

    let ok = svc.handle_command(
        AppCommand::AssignRoute {
            departure: 1,
            arrival: 99,
        },
        &mut io,
        &mut sink,
    );

    assert!(!ok);
    assert_eq!(svc.route().departure, Place::ControlSector);
    assert_eq!(svc.route().arrival, Place::ExitSector);
    assert_eq!(io.frames.len(), frames_before + 1);
    assert!(MockIo::all_off(io.last_frame().unwrap()));
    assert_eq!(
        sink.events.last(),
        Some(&AppEvent::CommandRejected {
            command: "go_from_to",
            reason: Error::Command(CommandError::InvalidPlace(99)),
        })
    );
}

#[test]
fn both_codes_invalid_leaves_route_untouched() {
    let (mut svc, mut io, mut sink) = make_service();
    let ok = svc.assign_route(-1, 6, &mut io, &mut sink);
    assert!(!ok);
    assert_eq!(svc.route(), Route::IDLE);
    let rejected = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::CommandRejected { .. }))
        .count();
    assert_eq!(rejected, 2);
}

// ── Product assignment ────────────────────────────────────────

#[test]
fn laptop_tick_blinks_green_then_red() {
    let (mut svc, mut io, mut sink) = make_service();
    assert!(svc.handle_command(AppCommand::AssignProduct(5), &mut io, &mut sink));
    assert_eq!(svc.product(), Product::Laptop);
    assert_eq!(svc.mode(), SignalMode::CarryingOnly);

    assert!(svc.tick(&mut io));
    assert_eq!(io.last_lit(), vec![Line::Green]);
    svc.tick(&mut io);
    assert_eq!(io.last_lit(), vec![Line::Red]);
    svc.tick(&mut io);
    assert_eq!(io.last_lit(), vec![Line::Green]);
}

#[test]
fn invalid_product_code_fails_but_still_clears() {
    let (mut svc, mut io, mut sink) = make_service();
    svc.assign_product(1, &mut io, &mut sink);
    svc.tick(&mut io);

    assert!(!svc.handle_command(AppCommand::AssignProduct(0), &mut io, &mut sink));
    assert_eq!(svc.product(), Product::Tv);
    assert!(MockIo::all_off(io.last_frame().unwrap()));
}

#[test]
fn every_tick_broadcasts_once() {
    let (mut svc, mut io, mut sink) = make_service();
    svc.assign_product(3, &mut io, &mut sink);
    let before = io.frames.len();
    for _ in 0..5 {
        svc.tick(&mut io);
    }
    assert_eq!(io.frames.len(), before + 5);
    assert_eq!(svc.tick_count(), 5);
}

#[test]
fn product_and_route_compose_on_one_frame() {
    let (mut svc, mut io, mut sink) = make_service();
    // PHONE blinks (Green, Yellow); RECOVERY_SECTOR -> EXIT_SECTOR adds Yellow.
    svc.assign_product(3, &mut io, &mut sink);
    svc.assign_route(4, 5, &mut io, &mut sink);
    assert_eq!(svc.mode(), SignalMode::RoutingAndCarrying);

    // Pair lights Green; route toggles Yellow on.
    svc.tick(&mut io);
    assert_eq!(io.last_lit(), vec![Line::Green, Line::Yellow]);
    // Pair flips Green off and Yellow off; route toggles Yellow back on.
    svc.tick(&mut io);
    assert_eq!(io.last_lit(), vec![Line::Yellow]);
}

// ── Abort / end signal ────────────────────────────────────────

#[test]
fn abort_plays_three_flashes_and_ends_dark() {
    let (mut svc, mut io, mut sink) = make_service();
    svc.assign_product(4, &mut io, &mut sink);
    svc.assign_route(2, 3, &mut io, &mut sink);
    svc.tick(&mut io);
    let start = io.frames.len();

    assert!(svc.handle_command(AppCommand::Abort, &mut io, &mut sink));

    let blink = &io.frames[start..];
    assert_eq!(blink.len(), 7);
    assert!(MockIo::all_off(&blink[0]));
    for pair in blink[1..].chunks(2) {
        assert!(MockIo::core_on(&pair[0]));
        assert!(MockIo::all_off(&pair[1]));
    }
    assert_eq!(io.sleeps, vec![Duration::from_millis(500); 6]);
    assert!(svc.is_idle());
    assert_eq!(sink.events.last(), Some(&AppEvent::TransportStopped));
}

#[test]
fn abort_from_idle_still_succeeds() {
    let (mut svc, mut io, mut sink) = make_service();
    assert!(svc.abort(&mut io, &mut sink));
    assert!(MockIo::all_off(io.last_frame().unwrap()));
}

#[test]
fn frame_stamps_follow_virtual_time() {
    let (mut svc, mut io, mut sink) = make_service();
    svc.abort(&mut io, &mut sink);
    let stamps: Vec<u64> = io.frames.iter().map(|f| f.stamp_us).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*stamps.last().unwrap(), 3_000_000);
}

#[test]
fn publish_failures_do_not_fail_commands() {
    let (mut svc, mut io, mut sink) = make_service();
    io.fail_publish = true;
    assert!(svc.assign_product(2, &mut io, &mut sink));
    assert!(svc.tick(&mut io));
    assert!(svc.frame().is_lit(Line::Blue));
}

#[test]
fn faster_frequency_shortens_the_blink() {
    let config = SignalConfig {
        frequency_hz: 2.0,
        ..SignalConfig::default()
    };
    let mut svc = SignalService::new(&config);
    let mut io = MockIo::new();
    let mut sink = RecordingSink::new();
    svc.abort(&mut io, &mut sink);
    assert_eq!(io.now_us, 6 * 250_000);
}
