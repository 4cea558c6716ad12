//! Snapshot message envelope
//!
//! One `Message` is pushed per key read. Before the move loop starts only the
//! windows, program-state flags and seeds are filled in; afterwards the
//! observation, stats, position and internal blocks are present as well.
//! The final message on a channel has `done` set and nothing else.

use serde::{Deserialize, Serialize};

use crate::phase::ProgramState;
use crate::status::StatusBlock;
use crate::window::Window;

/// Cap applied to hit points and energy before export
pub const STAT_CAP: i64 = 9999;

/// Element type of an `NdArray`, using numpy's dtype numbers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "i32", try_from = "i32")]
pub enum DType {
    UInt8,
    Int16,
}

impl DType {
    pub fn num(self) -> i32 {
        match self {
            DType::UInt8 => 2,
            DType::Int16 => 3,
        }
    }
}

impl From<DType> for i32 {
    fn from(dtype: DType) -> Self {
        dtype.num()
    }
}

impl TryFrom<i32> for DType {
    type Error = String;

    fn try_from(num: i32) -> Result<Self, Self::Error> {
        match num {
            2 => Ok(DType::UInt8),
            3 => Ok(DType::Int16),
            other => Err(format!("unsupported dtype number {}", other)),
        }
    }
}

/// Dense row-major array with explicit shape and element type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NdArray {
    pub shape: Vec<i64>,
    pub dtype: DType,
    /// Little-endian element bytes
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

impl NdArray {
    pub fn from_u8(rows: usize, cols: usize, values: &[u8]) -> Self {
        Self {
            shape: vec![rows as i64, cols as i64],
            dtype: DType::UInt8,
            data: values.to_vec(),
        }
    }

    pub fn from_i16(rows: usize, cols: usize, values: &[i16]) -> Self {
        Self {
            shape: vec![rows as i64, cols as i64],
            dtype: DType::Int16,
            data: values.iter().flat_map(|v| v.to_le_bytes()).collect(),
        }
    }

    /// Number of elements implied by the shape
    pub fn len(&self) -> usize {
        self.shape.iter().map(|&d| d.max(0) as usize).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the elements of an `Int16` array
    pub fn to_i16(&self) -> Option<Vec<i16>> {
        if self.dtype != DType::Int16 {
            return None;
        }
        Some(
            self.data
                .chunks_exact(2)
                .map(|b| i16::from_le_bytes([b[0], b[1]]))
                .collect(),
        )
    }
}

/// Carried item summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryItem {
    pub glyph: i32,
    pub text: String,
    pub letter: u8,
    pub object_class: u8,
    pub object_class_name: String,
}

/// Rendered map and UI facts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub glyphs: NdArray,
    pub chars: NdArray,
    pub colors: NdArray,
    pub specials: NdArray,
    pub status: StatusBlock,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

/// Compact scalar stats of the player
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blstats {
    /// 0-based column
    pub x: i64,
    pub y: i64,
    pub strength_percentage: i64,
    pub strength: i64,
    pub dexterity: i64,
    pub constitution: i64,
    pub intelligence: i64,
    pub wisdom: i64,
    pub charisma: i64,
    pub score: i64,
    pub hitpoints: i64,
    pub max_hitpoints: i64,
    pub depth: i64,
    pub gold: i64,
    pub energy: i64,
    pub max_energy: i64,
    pub armor_class: i64,
    pub monster_level: i64,
    pub experience_level: i64,
    pub experience_points: i64,
    pub time: i64,
    pub hunger_state: i64,
    pub carrying_capacity: i64,
}

/// Dungeon branch and level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DungeonLevel {
    pub dnum: i32,
    pub dlevel: i32,
}

/// Player position block
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct You {
    pub ux: i32,
    pub uy: i32,
    pub ux0: i32,
    pub uy0: i32,
    pub uz: DungeonLevel,
    pub uz0: DungeonLevel,
    pub uhunger: i32,
}

/// Diagnostic and bookkeeping block
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Internal {
    pub deepest_lev_reached: i32,
    /// Intercepted operations in effect at encode time, oldest first
    #[serde(default)]
    pub call_stack: Vec<String>,
    #[serde(default)]
    pub killer_name: Option<String>,
    /// A "press enter to continue" prompt is pending
    pub xwaitforspace: bool,
    pub stairs_down: bool,
}

/// Host RNG seeds
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seeds {
    pub core: u64,
    pub disp: u64,
}

/// Outbound snapshot envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    #[serde(default)]
    pub observation: Option<Observation>,
    #[serde(default)]
    pub blstats: Option<Blstats>,
    #[serde(default)]
    pub you: Option<You>,
    /// One entry per handle slot; destroyed handles stay as `None`
    #[serde(default)]
    pub windows: Vec<Option<Window>>,
    #[serde(default)]
    pub internal: Option<Internal>,
    pub program_state: ProgramState,
    pub seeds: Seeds,
    /// Set only on the final message of a channel
    #[serde(default)]
    pub done: bool,
}

impl Message {
    /// The terminal message of a channel
    pub fn sentinel() -> Self {
        Self {
            done: true,
            ..Default::default()
        }
    }

    /// Whether this message carries the full schema
    pub fn is_full(&self) -> bool {
        self.observation.is_some()
    }
}
