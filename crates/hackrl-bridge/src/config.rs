//! Bridge configuration

use hackrl_core::channel;
use std::path::PathBuf;
use std::time::Duration;

/// Default map width in cells
pub const DEFAULT_MAP_WIDTH: usize = 79;
/// Default map height in cells
pub const DEFAULT_MAP_HEIGHT: usize = 21;

/// Configuration for a bridge instance
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Directory the channel socket is created in (default: current directory)
    pub socket_dir: PathBuf,
    /// Process id used in the channel name (default: this process)
    pub process_id: u32,
    /// Map grid width
    pub map_width: usize,
    /// Map grid height
    pub map_height: usize,
    /// Frames held for a slow or absent observer before the oldest is dropped
    pub high_water_mark: usize,
    /// How long teardown keeps trying to deliver queued frames
    pub linger: Duration,
    /// Forward `delay_output` to the real interface
    pub forward_delays: bool,
    /// Forward `status_update` to the real interface
    pub forward_status: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        let socket_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            socket_dir,
            process_id: std::process::id(),
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            high_water_mark: 1000,
            linger: Duration::from_secs(1),
            forward_delays: false,
            forward_status: true,
        }
    }
}

impl BridgeConfig {
    /// Create config with a custom socket directory
    pub fn with_socket_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            socket_dir: dir.into(),
            ..Default::default()
        }
    }

    /// Full path of the channel socket
    pub fn socket_path(&self) -> PathBuf {
        channel::socket_path(&self.socket_dir, self.process_id)
    }
}
