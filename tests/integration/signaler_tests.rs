//! Integration tests for the channel-driven control loop.

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use super::mock_io::{MockIo, RecordingSink};

use transit_leds::app::commands::AppCommand;
use transit_leds::app::service::SignalService;
use transit_leds::channels::{
    CommandChannel, CommandRequest, CommandResponse, ResponseChannel,
};
use transit_leds::config::SignalConfig;
use transit_leds::drivers::line_frame::Line;
use transit_leds::signaler::PeriodicSignaler;

fn send(channel: &CommandChannel, id: u32, command: AppCommand) {
    channel.try_send(CommandRequest { id, command }).unwrap();
}

#[test]
fn idle_cycles_do_not_broadcast() {
    let commands = CommandChannel::new();
    let responses = ResponseChannel::new();
    let config = SignalConfig::default();
    let mut svc = SignalService::new(&config);
    let mut io = MockIo::new();
    let mut sink = RecordingSink::new();
    let mut signaler = PeriodicSignaler::new(config.tick_period(), &commands, &responses);

    for _ in 0..4 {
        signaler.run_cycle(&mut svc, &mut io, &mut sink);
    }
    assert!(io.frames.is_empty());
    assert_eq!(signaler.cycles(), 4);
}

#[test]
fn commands_are_answered_in_order() {
    let commands = CommandChannel::new();
    let responses = ResponseChannel::new();
    let config = SignalConfig::default();
    let mut svc = SignalService::new(&config);
    let mut io = MockIo::new();
    let mut sink = RecordingSink::new();
    let mut signaler = PeriodicSignaler::new(config.tick_period(), &commands, &responses);

    send(&commands, 7, AppCommand::AssignProduct(9));
    send(
        &commands,
        8,
        AppCommand::AssignRoute {
            departure: 2,
            arrival: 3,
        },
    );
    signaler.run_cycle(&mut svc, &mut io, &mut sink);

    assert_eq!(
        responses.try_receive().unwrap(),
        CommandResponse {
            id: 7,
            succeed: false
        }
    );
    assert_eq!(
        responses.try_receive().unwrap(),
        CommandResponse {
            id: 8,
            succeed: true
        }
    );
    assert!(responses.try_receive().is_err());
}

#[test]
fn command_completes_before_next_tick() {
    let commands = CommandChannel::new();
    let responses = ResponseChannel::new();
    let config = SignalConfig::default();
    let mut svc = SignalService::new(&config);
    let mut io = MockIo::new();
    let mut sink = RecordingSink::new();
    let mut signaler = PeriodicSignaler::new(config.tick_period(), &commands, &responses);

    send(&commands, 1, AppCommand::AssignProduct(4));
    signaler.run_cycle(&mut svc, &mut io, &mut sink);
    // Clear-and-broadcast from the command, no tick yet (was idle).
    assert_eq!(io.frames.len(), 1);

    signaler.run_cycle(&mut svc, &mut io, &mut sink);
    assert_eq!(io.last_lit(), vec![Line::Red]);
    signaler.run_cycle(&mut svc, &mut io, &mut sink);
    assert_eq!(io.last_lit(), vec![Line::Blue]);

    send(&commands, 2, AppCommand::Abort);
    signaler.run_cycle(&mut svc, &mut io, &mut sink);
    assert!(MockIo::all_off(io.last_frame().unwrap()));
    assert!(svc.is_idle());

    let frames = io.frames.len();
    signaler.run_cycle(&mut svc, &mut io, &mut sink);
    assert_eq!(io.frames.len(), frames, "idle after abort, no more ticks");
}

#[test]
fn run_exits_when_shutdown_is_raised() {
    let commands = CommandChannel::new();
    let responses = ResponseChannel::new();
    let config = SignalConfig::default();
    let mut svc = SignalService::new(&config);
    let mut io = MockIo::new();
    let mut sink = RecordingSink::new();
    let mut signaler = PeriodicSignaler::new(config.tick_period(), &commands, &responses);

    let shutdown = AtomicBool::new(true);
    signaler.run(&mut svc, &mut io, &mut sink, &shutdown);
    assert_eq!(signaler.cycles(), 0);
}

#[test]
fn loop_paces_cycles_at_the_tick_period() {
    let commands = CommandChannel::new();
    let responses = ResponseChannel::new();
    let config = SignalConfig {
        frequency_hz: 2.0,
        ..SignalConfig::default()
    };
    let mut svc = SignalService::new(&config);
    let mut io = MockIo::new();
    let mut sink = RecordingSink::new();
    let mut signaler = PeriodicSignaler::new(config.tick_period(), &commands, &responses);

    let mut rate = transit_leds::signaler::LoopRate::new(config.tick_period());
    for _ in 0..3 {
        signaler.run_cycle(&mut svc, &mut io, &mut sink);
        rate.sleep(&mut io);
    }
    assert_eq!(io.sleeps, vec![Duration::from_millis(250); 3]);
}
