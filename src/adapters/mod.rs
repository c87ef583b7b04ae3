//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter          | Implements       | Connects to                     |
//! |------------------|------------------|---------------------------------|
//! | `config_file`    | ConfigPort       | JSON file on disk               |
//! | `io`             | both I/O ports   | a publisher paired with a clock |
//! | `log_publisher`  | FramePublisher   | `log` facade (one line per frame)|
//! | `log_sink`       | EventSink        | `log` facade                    |
//! | `time`           | TimePort         | `std::time::Instant` + sleep    |
//! | `wire_publisher` | FramePublisher   | any `std::io::Write` (postcard) |

pub mod config_file;
pub mod io;
pub mod log_publisher;
pub mod log_sink;
pub mod time;
pub mod wire_publisher;
