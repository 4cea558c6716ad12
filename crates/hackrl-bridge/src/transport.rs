//! Local socket transport for snapshot frames
//!
//! The bridge is the server side of a one-way channel. At most one observer
//! is attached at a time; frames queue while nobody is reading and are
//! pushed out without ever blocking the host.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::BridgeConfig;
use hackrl_core::{HackRlError, Message, Result, codec};
use interprocess::local_socket::{
    GenericFilePath, ListenerNonblockingMode, ListenerOptions, prelude::*,
};
use tracing::{debug, info, warn};

/// Poll interval while lingering on shutdown
const LINGER_POLL: Duration = Duration::from_millis(1);

/// Server end of the snapshot channel
pub struct Transport {
    path: PathBuf,
    listener: Option<LocalSocketListener>,
    peer: Option<LocalSocketStream>,
    outbox: VecDeque<Vec<u8>>,
    /// Bytes of the front frame already written to the current peer
    written: usize,
    high_water_mark: usize,
    linger: Duration,
    dropped: u64,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("path", &self.path)
            .field("bound", &self.listener.is_some())
            .field("connected", &self.peer.is_some())
            .field("pending", &self.outbox.len())
            .field("dropped", &self.dropped)
            .finish()
    }
}

impl Transport {
    /// Bind the channel socket named by `config`
    pub fn bind(config: &BridgeConfig) -> Result<Self> {
        let path = config.socket_path();
        let name = path.as_path().to_fs_name::<GenericFilePath>().map_err(|e| {
            HackRlError::IpcError(format!("Bad socket path {}: {}", path.display(), e))
        })?;

        let listener = ListenerOptions::new()
            .name(name)
            .nonblocking(ListenerNonblockingMode::Both)
            .create_sync()
            .map_err(|e| HackRlError::IpcError(format!("Bind {} failed: {}", path.display(), e)))?;

        info!("Snapshot channel listening on {}", path.display());

        Ok(Self {
            path,
            listener: Some(listener),
            peer: None,
            outbox: VecDeque::new(),
            written: 0,
            high_water_mark: config.high_water_mark.max(1),
            linger: config.linger,
            dropped: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether an observer is attached
    pub fn is_connected(&self) -> bool {
        self.peer.is_some()
    }

    /// Frames waiting to be written
    pub fn pending(&self) -> usize {
        self.outbox.len()
    }

    /// Frames discarded at the high-water mark so far
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Encode, frame and send a message
    pub fn send(&mut self, msg: &Message) -> Result<()> {
        let frame = codec::encode_frame(msg)?;
        self.send_frame(frame);
        Ok(())
    }

    /// Queue an already framed message and flush what the socket takes
    pub fn send_frame(&mut self, frame: Vec<u8>) {
        self.outbox.push_back(frame);
        self.enforce_high_water_mark();
        self.pump();
    }

    /// Accept a waiting observer and write queued frames
    pub fn pump(&mut self) {
        self.accept_peer();
        self.flush();
    }

    /// Queue the sentinel, give the observer up to the linger period to
    /// drain, then unbind.
    pub fn shutdown(mut self, sentinel: &Message) {
        match codec::encode_frame(sentinel) {
            // queued past the mark so it is never evicted
            Ok(frame) => self.outbox.push_back(frame),
            Err(e) => warn!("Failed to encode sentinel: {}", e),
        }

        let deadline = Instant::now() + self.linger;
        loop {
            self.pump();
            if self.outbox.is_empty() || Instant::now() >= deadline {
                break;
            }
            thread::sleep(LINGER_POLL);
        }

        if !self.outbox.is_empty() {
            warn!(
                "Closing {} with {} undelivered frames",
                self.path.display(),
                self.outbox.len()
            );
        }
        self.release();
    }

    fn enforce_high_water_mark(&mut self) {
        // a partially written front frame must finish and does not count
        let pinned = usize::from(self.written > 0);
        while self.outbox.len() > self.high_water_mark + pinned {
            if self.outbox.remove(pinned).is_none() {
                break;
            }
            self.dropped += 1;
            warn!(
                "Observer queue over {} frames, dropped oldest ({} dropped total)",
                self.high_water_mark, self.dropped
            );
        }
    }

    fn accept_peer(&mut self) {
        if self.peer.is_some() {
            return;
        }
        let Some(listener) = &self.listener else {
            return;
        };

        match listener.accept() {
            Ok(stream) => {
                info!("Observer attached to {}", self.path.display());
                self.peer = Some(stream);
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
            Err(e) => warn!("Accept on {} failed: {}", self.path.display(), e),
        }
    }

    fn flush(&mut self) {
        let Some(peer) = self.peer.as_mut() else {
            return;
        };

        let mut lost = None;
        while let Some(front) = self.outbox.front() {
            match peer.write(&front[self.written..]) {
                Ok(0) => {
                    lost = Some(io::Error::from(io::ErrorKind::WriteZero));
                    break;
                }
                Ok(n) => {
                    self.written += n;
                    if self.written == front.len() {
                        self.outbox.pop_front();
                        self.written = 0;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    lost = Some(e);
                    break;
                }
            }
        }

        if let Some(e) = lost {
            warn!("Observer on {} lost: {}", self.path.display(), e);
            self.drop_peer();
        }
    }

    fn drop_peer(&mut self) {
        self.peer = None;
        if self.written > 0 {
            // the next observer must start on a frame boundary
            self.outbox.pop_front();
            self.written = 0;
        }
    }

    fn release(&mut self) {
        self.peer = None;
        if self.listener.take().is_none() {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", self.path.display(), e),
        }
        debug!("Snapshot channel {} closed", self.path.display());
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        self.release();
    }
}
