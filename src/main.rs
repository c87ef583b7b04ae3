//! Transit LED controller — host entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  stdin reader ──▶ CMD channel      LogEventSink (EventSink)  │
//! │  response log ◀── RESP channel     JsonConfigFile (Config)   │
//! │  Log/WireFramePublisher            HostTimeAdapter (Time)    │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ───────────────────    │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │     PeriodicSignaler ─▶ SignalService (pure logic)     │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `transit-leds [--wire] [config.json]`
//!
//! Commands are read from stdin one per line (`route 2 5`, `product 3`,
//! `abort`, `quit`).  With `--wire`, frames go to stdout as length-prefixed
//! postcard records for a downstream pin driver; otherwise they are logged.

#![deny(unused_must_use)]

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use anyhow::{Context, Result};
use futures_lite::future::block_on;
use log::{info, warn};

use transit_leds::adapters::config_file::JsonConfigFile;
use transit_leds::adapters::io::SignalIo;
use transit_leds::adapters::log_publisher::LogFramePublisher;
use transit_leds::adapters::log_sink::LogEventSink;
use transit_leds::adapters::time::HostTimeAdapter;
use transit_leds::adapters::wire_publisher::WireFramePublisher;
use transit_leds::app::commands::AppCommand;
use transit_leds::app::ports::{ConfigError, ConfigPort, FramePublisher};
use transit_leds::app::service::SignalService;
use transit_leds::channels::{CommandChannel, CommandRequest, ResponseChannel};
use transit_leds::config::SignalConfig;
use transit_leds::signaler::PeriodicSignaler;

static COMMANDS: CommandChannel = CommandChannel::new();
static RESPONSES: ResponseChannel = ResponseChannel::new();
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Transit LEDs v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let wire = args.iter().any(|a| a == "--wire");
    let config = load_config(args.iter().find(|a| !a.starts_with("--")));
    config.validate().context("invalid configuration")?;

    thread::Builder::new()
        .name("cmd-reader".into())
        .spawn(read_commands)
        .context("failed to spawn command reader")?;
    thread::Builder::new()
        .name("resp-logger".into())
        .spawn(log_responses)
        .context("failed to spawn response logger")?;

    if wire {
        run(WireFramePublisher::new(std::io::stdout()), &config);
    } else {
        run(LogFramePublisher::new(), &config);
    }
    Ok(())
}

fn load_config(path: Option<&String>) -> SignalConfig {
    let Some(path) = path else {
        return SignalConfig::default();
    };
    match JsonConfigFile::new(path).load() {
        Ok(config) => config,
        Err(ConfigError::NotFound) => {
            warn!("No config at {}, using defaults", path);
            SignalConfig::default()
        }
        Err(e) => {
            warn!("Config load failed ({}), using defaults", e);
            SignalConfig::default()
        }
    }
}

fn run(publisher: impl FramePublisher, config: &SignalConfig) {
    let mut io = SignalIo::new(publisher, HostTimeAdapter::new());
    let mut sink = LogEventSink::new();
    let mut service = SignalService::new(config);
    service.start(&mut io, &mut sink);

    let mut signaler = PeriodicSignaler::new(config.tick_period(), &COMMANDS, &RESPONSES);
    signaler.run(&mut service, &mut io, &mut sink, &SHUTDOWN);
}

// ── Worker threads ────────────────────────────────────────────

/// Parse stdin lines into requests until `quit` or end of input.
fn read_commands() {
    let stdin = std::io::stdin();
    let mut next_id: u32 = 0;

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        match line.parse::<AppCommand>() {
            Ok(command) => {
                next_id = next_id.wrapping_add(1);
                block_on(COMMANDS.send(CommandRequest {
                    id: next_id,
                    command,
                }));
            }
            Err(e) => warn!("Ignoring '{}': {}", line, e),
        }
    }

    info!("Command input closed, shutting down");
    SHUTDOWN.store(true, Ordering::Release);
}

fn log_responses() {
    loop {
        let response = block_on(RESPONSES.receive());
        info!("REPLY | #{} succeed={}", response.id, response.succeed);
    }
}
