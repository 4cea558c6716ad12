//! # hackrl-core
//!
//! Core types for the hackrl state-export protocol.
//!
//! This crate provides the types shared by the bridge and its observers:
//! - Snapshot message envelope and its blocks
//! - Window, menu and status types
//! - Lifecycle phase tracking
//! - MessagePack codec with length-prefixed framing
//! - Channel naming

pub mod channel;
pub mod codec;
pub mod error;
pub mod message;
pub mod phase;
pub mod status;
pub mod window;

pub use channel::socket_path;
pub use error::{HackRlError, Result};
pub use message::{
    Blstats, DType, DungeonLevel, Internal, InventoryItem, Message, NdArray, Observation, STAT_CAP,
    Seeds, You,
};
pub use phase::{LifecyclePhase, PhaseTracker, ProgramState};
pub use status::{Condition, ConditionMask, FORMATTED_FIELDS, StatusBlock, StatusField};
pub use window::{BASE_WINDOW, Identifier, MenuItem, Window, WindowId, WindowType};
