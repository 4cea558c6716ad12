//! Read-only query surface over the host's global facts

use hackrl_core::{DungeonLevel, InventoryItem, ProgramState, Seeds};

/// Rendered representation of a glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappedGlyph {
    pub ch: u8,
    pub color: u8,
    pub special: u8,
}

/// The six attribute scores, current values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes {
    pub strength: i64,
    pub dexterity: i64,
    pub constitution: i64,
    pub intelligence: i64,
    pub wisdom: i64,
    pub charisma: i64,
}

/// Monster form while polymorphed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolymorphForm {
    pub hp: i64,
    pub hp_max: i64,
    pub level: i64,
}

/// Special staircase on the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialStairs {
    pub x: i32,
    pub y: i32,
    pub up: bool,
}

/// Point-in-time player and game scalars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFacts {
    /// Column, 1-based
    pub ux: i32,
    /// Row, 0-based
    pub uy: i32,
    pub ux0: i32,
    pub uy0: i32,
    pub uz: DungeonLevel,
    pub uz0: DungeonLevel,
    pub uhunger: i32,
    /// Strength including the 18/xx percentage encoding
    pub strength_percentage: i64,
    pub attributes: Attributes,
    pub score: i64,
    pub hp: i64,
    pub hp_max: i64,
    pub polymorph: Option<PolymorphForm>,
    pub depth: i64,
    pub gold: i64,
    pub energy: i64,
    pub energy_max: i64,
    pub armor_class: i64,
    pub experience_level: i64,
    pub experience_points: i64,
    pub moves: i64,
    pub hunger_state: i64,
    pub carrying_capacity: i64,
    pub deepest_level: i32,
    /// Cause of death, empty while alive
    pub killer_name: String,
    /// A "--More--" prompt is waiting for enter
    pub waiting_for_space: bool,
    pub down_stairs: Option<(i32, i32)>,
    pub special_stairs: Option<SpecialStairs>,
}

impl PlayerFacts {
    /// Whether the player stands on a staircase leading down
    pub fn on_stairs_down(&self) -> bool {
        let here = (self.ux, self.uy);
        self.down_stairs == Some(here)
            || self
                .special_stairs
                .is_some_and(|s| !s.up && (s.x, s.y) == here)
    }
}

/// Queries the bridge makes against the host.
///
/// Every call returns a fresh value; the bridge never caches host state
/// across snapshots.
pub trait HostFacts {
    fn program_state(&self) -> ProgramState;

    fn seeds(&self) -> Seeds;

    fn player(&self) -> PlayerFacts;

    /// Current carried items, in inventory order
    fn inventory(&self) -> Vec<InventoryItem>;

    /// Render mapping for a glyph at a map position
    fn map_glyph(&self, glyph: i32, x: i32, y: i32) -> MappedGlyph;

    /// Check value embedded in mixed glyph text
    fn glyph_encoding_key(&self) -> u32;
}
