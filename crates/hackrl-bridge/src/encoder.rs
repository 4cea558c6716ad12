//! Snapshot assembly
//!
//! Turns the shadow state and a fresh read of the host's facts into one
//! `Message`. Which blocks are filled depends on whether the move loop has
//! been entered.

use crate::glyphs::GlyphFrameBuffer;
use crate::host::{HostFacts, PlayerFacts};
use crate::inventory::InventoryMirror;
use crate::registry::WindowRegistry;
use crate::status::StatusPanel;
use hackrl_core::{
    Blstats, Internal, Message, NdArray, Observation, ProgramState, STAT_CAP, You,
};

/// Everything the bridge mirrors from the interface
#[derive(Debug, Clone)]
pub struct ShadowState {
    pub windows: WindowRegistry,
    pub map: GlyphFrameBuffer,
    pub status: StatusPanel,
    pub inventory: InventoryMirror,
}

impl ShadowState {
    pub fn new(map_width: usize, map_height: usize) -> Self {
        Self {
            windows: WindowRegistry::new(),
            map: GlyphFrameBuffer::new(map_width, map_height),
            status: StatusPanel::new(),
            inventory: InventoryMirror::new(),
        }
    }
}

/// Inputs to one snapshot besides the shadow state
#[derive(Debug, Clone, Default)]
pub struct SnapshotContext {
    pub program_state: ProgramState,
    /// Use the full schema
    pub full: bool,
    /// Call trace at encode time, oldest first
    pub call_stack: Vec<String>,
}

/// Builds snapshot messages
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotEncoder;

impl SnapshotEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Assemble one snapshot
    pub fn encode<H>(&self, shadow: &ShadowState, host: &H, context: SnapshotContext) -> Message
    where
        H: HostFacts + ?Sized,
    {
        let mut msg = Message {
            windows: shadow.windows.records().to_vec(),
            program_state: context.program_state,
            seeds: host.seeds(),
            ..Default::default()
        };

        if !context.full {
            return msg;
        }

        let player = host.player();
        msg.observation = Some(observation(shadow));
        msg.blstats = Some(blstats(&player));
        msg.you = Some(you(&player));
        msg.internal = Some(internal(&player, &context.program_state, context.call_stack));
        msg
    }

    /// The final message of a channel
    pub fn sentinel(&self) -> Message {
        Message::sentinel()
    }
}

fn observation(shadow: &ShadowState) -> Observation {
    let map = &shadow.map;
    let (rows, cols) = (map.height(), map.width());

    Observation {
        glyphs: NdArray::from_i16(rows, cols, map.glyphs()),
        chars: NdArray::from_u8(rows, cols, map.chars()),
        colors: NdArray::from_u8(rows, cols, map.colors()),
        specials: NdArray::from_u8(rows, cols, map.specials()),
        status: shadow.status.block(),
        inventory: shadow.inventory.items().to_vec(),
    }
}

/// Compact stats with the export caps applied
pub fn blstats(player: &PlayerFacts) -> Blstats {
    let (hp, hp_max) = match player.polymorph {
        Some(form) => (form.hp, form.hp_max),
        None => (player.hp, player.hp_max),
    };
    let attrs = &player.attributes;

    Blstats {
        x: i64::from(player.ux) - 1,
        y: i64::from(player.uy),
        strength_percentage: player.strength_percentage,
        strength: attrs.strength,
        dexterity: attrs.dexterity,
        constitution: attrs.constitution,
        intelligence: attrs.intelligence,
        wisdom: attrs.wisdom,
        charisma: attrs.charisma,
        score: player.score,
        hitpoints: hp.max(0).min(STAT_CAP),
        max_hitpoints: hp_max.min(STAT_CAP),
        depth: player.depth,
        gold: player.gold,
        energy: player.energy.min(STAT_CAP),
        max_energy: player.energy_max.min(STAT_CAP),
        armor_class: player.armor_class,
        monster_level: player.polymorph.map_or(0, |form| form.level),
        experience_level: player.experience_level,
        experience_points: player.experience_points,
        time: player.moves,
        hunger_state: player.hunger_state,
        carrying_capacity: player.carrying_capacity,
    }
}

fn you(player: &PlayerFacts) -> You {
    You {
        ux: player.ux,
        uy: player.uy,
        ux0: player.ux0,
        uy0: player.uy0,
        uz: player.uz,
        uz0: player.uz0,
        uhunger: player.uhunger,
    }
}

fn internal(player: &PlayerFacts, state: &ProgramState, call_stack: Vec<String>) -> Internal {
    let killer_name = (state.gameover && !player.killer_name.is_empty())
        .then(|| player.killer_name.clone());

    Internal {
        deepest_lev_reached: player.deepest_level,
        call_stack,
        killer_name,
        xwaitforspace: player.waiting_for_space,
        stairs_down: player.on_stairs_down(),
    }
}
