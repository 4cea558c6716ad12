//! # hackrl-bridge
//!
//! State-export bridge for a terminal roguelike's window interface.
//!
//! The bridge wraps the host's real window procedures, mirrors what they are
//! asked to draw, and publishes a snapshot on a local socket every time the
//! host waits for a key:
//! - Shadow state: window registry, map frame buffer, status panel, inventory
//! - Call trace of the interface operations in progress
//! - Snapshot encoding with the lifecycle-dependent schema
//! - Non-blocking single-observer transport

pub mod bridge;
pub mod config;
pub mod encoder;
pub mod glyphs;
pub mod host;
pub mod inventory;
pub mod procs;
pub mod registry;
pub mod status;
pub mod trace;
pub mod transport;

#[cfg(test)]
mod testing;

pub use bridge::RlWindowProcs;
pub use config::BridgeConfig;
pub use encoder::{ShadowState, SnapshotContext, SnapshotEncoder};
pub use glyphs::GlyphFrameBuffer;
pub use host::{Attributes, HostFacts, MappedGlyph, PlayerFacts, PolymorphForm, SpecialStairs};
pub use inventory::InventoryMirror;
pub use procs::{
    Click, MenuHow, MenuPick, PositionedKey, StatusUpdate, StatusValue, WindowProcs,
};
pub use registry::WindowRegistry;
pub use status::{StatusPanel, decode_mixed};
pub use trace::{CallTrace, TraceGuard};
pub use transport::Transport;
