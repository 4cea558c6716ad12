//! Channel naming
//!
//! A bridge binds exactly one channel, named after the directory it runs in
//! and its process id, so concurrent instances on one host never collide.

use std::path::{Path, PathBuf};

/// Suffix shared by every channel name
pub const SOCKET_SUFFIX: &str = ".nle.sock";

/// Socket path for the bridge of process `pid` running in `dir`
pub fn socket_path(dir: &Path, pid: u32) -> PathBuf {
    dir.join(format!("{}{}", pid, SOCKET_SUFFIX))
}

/// Process id encoded in a channel path, if it follows the naming convention
pub fn pid_from_path(path: &Path) -> Option<u32> {
    path.file_name()?
        .to_str()?
        .strip_suffix(SOCKET_SUFFIX)?
        .parse()
        .ok()
}
