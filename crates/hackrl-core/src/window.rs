//! Window and menu types

use serde::{Deserialize, Serialize};

/// Window handle as issued by the real interface
pub type WindowId = i32;

/// Handle of the base window, created before any other
pub const BASE_WINDOW: WindowId = 0;

/// Kind of a window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    Message,
    Status,
    Map,
    Menu,
    Text,
    Base,
}

impl WindowType {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowType::Message => "message",
            WindowType::Status => "status",
            WindowType::Map => "map",
            WindowType::Menu => "menu",
            WindowType::Text => "text",
            WindowType::Base => "base",
        }
    }
}

/// Opaque per-item payload owned by the application.
///
/// Copied verbatim into the mirror and never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identifier(pub [u8; 8]);

impl Identifier {
    pub fn from_i64(value: i64) -> Self {
        Self(value.to_ne_bytes())
    }
}

/// A single menu entry as added by the application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Glyph shown next to the entry
    pub glyph: i32,

    /// Application identifier, not exported
    #[serde(skip)]
    pub identifier: Identifier,

    /// Keyboard accelerator (0 = none)
    pub accelerator: u8,

    /// Group accelerator (0 = none)
    pub group_accelerator: u8,

    /// Display label
    pub text: String,

    /// Display attribute code
    pub attribute: i32,

    /// Preselected by the application
    pub selected: bool,
}

/// Exported window record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Window {
    #[serde(rename = "type")]
    pub window_type: WindowType,

    /// Display lines in insertion order
    #[serde(default)]
    pub strings: Vec<String>,

    /// Menu entries in insertion order
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

impl Window {
    pub fn new(window_type: WindowType) -> Self {
        Self {
            window_type,
            strings: Vec::new(),
            menu_items: Vec::new(),
        }
    }
}
