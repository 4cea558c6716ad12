//! Status line fields and condition flags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Number of formatted status fields (everything but the condition mask)
pub const FORMATTED_FIELDS: usize = 22;

/// Status field indices as used by the host's status-update protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusField {
    Title = 0,
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
    Alignment,
    Score,
    Capacity,
    Gold,
    Energy,
    EnergyMax,
    ExperienceLevel,
    ArmorClass,
    HitDice,
    Time,
    Hunger,
    HitPoints,
    HitPointsMax,
    LevelDescription,
    Experience,
    Condition,
}

impl StatusField {
    /// Generic reset signal, carries no data
    pub const RESET_INDEX: i32 = -2;
    /// Flush signal, carries no data
    pub const FLUSH_INDEX: i32 = -1;
    /// One past the highest valid index
    pub const END_INDEX: i32 = 23;

    const ALL: [StatusField; 23] = [
        StatusField::Title,
        StatusField::Strength,
        StatusField::Dexterity,
        StatusField::Constitution,
        StatusField::Intelligence,
        StatusField::Wisdom,
        StatusField::Charisma,
        StatusField::Alignment,
        StatusField::Score,
        StatusField::Capacity,
        StatusField::Gold,
        StatusField::Energy,
        StatusField::EnergyMax,
        StatusField::ExperienceLevel,
        StatusField::ArmorClass,
        StatusField::HitDice,
        StatusField::Time,
        StatusField::Hunger,
        StatusField::HitPoints,
        StatusField::HitPointsMax,
        StatusField::LevelDescription,
        StatusField::Experience,
        StatusField::Condition,
    ];

    /// Field for a host index; reserved and out-of-range indices map to None
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

bitflags! {
    /// Condition bits as packed by the host
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ConditionMask: u64 {
        const STONE = 0x0001;
        const SLIME = 0x0002;
        const STRANGLED = 0x0004;
        const FOOD_POISONED = 0x0008;
        const TERMINALLY_ILL = 0x0010;
        const BLIND = 0x0020;
        const DEAF = 0x0040;
        const STUNNED = 0x0080;
        const CONFUSED = 0x0100;
        const HALLUCINATING = 0x0200;
        const LEVITATING = 0x0400;
        const FLYING = 0x0800;
        const RIDING = 0x1000;
    }
}

/// Decoded condition flags
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Condition {
    pub stone: bool,
    pub slime: bool,
    pub strangled: bool,
    pub food_poisoned: bool,
    pub terminally_ill: bool,
    pub blind: bool,
    pub deaf: bool,
    pub stunned: bool,
    pub confused: bool,
    pub hallucinating: bool,
    pub levitating: bool,
    pub flying: bool,
    pub riding: bool,
}

impl From<ConditionMask> for Condition {
    fn from(mask: ConditionMask) -> Self {
        Self {
            stone: mask.contains(ConditionMask::STONE),
            slime: mask.contains(ConditionMask::SLIME),
            strangled: mask.contains(ConditionMask::STRANGLED),
            food_poisoned: mask.contains(ConditionMask::FOOD_POISONED),
            terminally_ill: mask.contains(ConditionMask::TERMINALLY_ILL),
            blind: mask.contains(ConditionMask::BLIND),
            deaf: mask.contains(ConditionMask::DEAF),
            stunned: mask.contains(ConditionMask::STUNNED),
            confused: mask.contains(ConditionMask::CONFUSED),
            hallucinating: mask.contains(ConditionMask::HALLUCINATING),
            levitating: mask.contains(ConditionMask::LEVITATING),
            flying: mask.contains(ConditionMask::FLYING),
            riding: mask.contains(ConditionMask::RIDING),
        }
    }
}

/// Formatted status line as last reported by the host
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBlock {
    pub title: String,
    pub strength: String,
    pub dexterity: String,
    pub constitution: String,
    pub intelligence: String,
    pub wisdom: String,
    pub charisma: String,
    pub alignment: String,
    pub score: String,
    pub capacity: String,
    pub gold: String,
    pub energy: String,
    pub energy_max: String,
    pub experience_level: String,
    pub armor_class: String,
    pub hit_dice: String,
    pub time: String,
    pub hunger: String,
    pub hit_points: String,
    pub hit_points_max: String,
    pub level_description: String,
    pub experience: String,
    pub condition: Condition,
}

impl StatusBlock {
    /// Build from field slots indexed by `StatusField::index`
    pub fn from_fields(fields: &[String; FORMATTED_FIELDS], conditions: ConditionMask) -> Self {
        let field = |f: StatusField| fields[f.index()].clone();
        Self {
            title: field(StatusField::Title),
            strength: field(StatusField::Strength),
            dexterity: field(StatusField::Dexterity),
            constitution: field(StatusField::Constitution),
            intelligence: field(StatusField::Intelligence),
            wisdom: field(StatusField::Wisdom),
            charisma: field(StatusField::Charisma),
            alignment: field(StatusField::Alignment),
            score: field(StatusField::Score),
            capacity: field(StatusField::Capacity),
            gold: field(StatusField::Gold),
            energy: field(StatusField::Energy),
            energy_max: field(StatusField::EnergyMax),
            experience_level: field(StatusField::ExperienceLevel),
            armor_class: field(StatusField::ArmorClass),
            hit_dice: field(StatusField::HitDice),
            time: field(StatusField::Time),
            hunger: field(StatusField::Hunger),
            hit_points: field(StatusField::HitPoints),
            hit_points_max: field(StatusField::HitPointsMax),
            level_description: field(StatusField::LevelDescription),
            experience: field(StatusField::Experience),
            condition: conditions.into(),
        }
    }
}
