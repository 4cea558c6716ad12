//! hackrl-watch
//!
//! Attaches to a running bridge's snapshot channel and prints every message
//! as one JSON line on stdout until the sentinel arrives.
//!
//! Usage: `hackrl-watch <pid> [socket-dir]` or `hackrl-watch <socket-path>`

use anyhow::{Context, Result, bail};
use hackrl_core::channel::{pid_from_path, socket_path};
use hackrl_core::codec::read_message;
use interprocess::local_socket::{GenericFilePath, prelude::*};
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// Resolve the channel from `<pid> [socket-dir]` or `<socket-path>`
fn parse_target<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(target) = args.next() else {
        bail!("usage: hackrl-watch <pid> [socket-dir] | hackrl-watch <socket-path>");
    };

    if let Ok(pid) = target.parse::<u32>() {
        let dir = match args.next() {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        return Ok(socket_path(&dir, pid));
    }

    let path = PathBuf::from(&target);
    match pid_from_path(&path) {
        Some(pid) => {
            debug!("Channel {} belongs to pid {}", path.display(), pid);
            Ok(path)
        }
        None => bail!("{:?} is neither a pid nor a <pid>.nle.sock path", target),
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = parse_target(std::env::args().skip(1))?;

    // the bridge may not have bound yet
    let mut stream = loop {
        let name = path.as_path().to_fs_name::<GenericFilePath>()?;
        match LocalSocketStream::connect(name) {
            Ok(stream) => break stream,
            Err(e) => {
                info!("Waiting for bridge at {} ({})", path.display(), e);
                sleep(RETRY_INTERVAL);
            }
        }
    };
    info!("Attached to {}", path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0u64;

    while let Some(msg) = read_message(&mut stream)? {
        count += 1;
        debug!(
            "Snapshot {}: full={} windows={}",
            count,
            msg.is_full(),
            msg.windows.len()
        );
        serde_json::to_writer(&mut out, &msg)?;
        writeln!(out)?;
        out.flush()?;

        if msg.done {
            info!("Sentinel received after {} messages", count);
            return Ok(());
        }
    }

    warn!("Channel closed without a sentinel after {} messages", count);
    Ok(())
}
