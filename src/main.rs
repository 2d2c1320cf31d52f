//! Focus -- a line-oriented text front end for the Focus rules engine.
//!
//! Reads commands from stdin and writes responses to stdout. Diagnostics go
//! to stderr through `tracing`; set `RUST_LOG` to see them.

use std::io::{self, BufRead};

use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use focus_engine::engine::{Engine, Flow};
use focus_engine::protocol::parse_command;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    let mut input = stdin.lock();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("read failed: {}", e);
                break;
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(l) => l,
            Err(e) => {
                warn!("ignoring line that is not valid UTF-8: {}", e);
                continue;
            }
        };

        let cmd = match parse_command(line) {
            Some(c) => c,
            None => continue,
        };

        match engine.dispatch(cmd, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                error!("write failed: {}", e);
                break;
            }
        }
    }
}
