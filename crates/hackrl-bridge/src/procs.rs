//! Window-procedure capability
//!
//! The host drives its interface exclusively through this trait. The real
//! renderer implements it, and the bridge implements it again by mirroring
//! state and delegating to the renderer.

use hackrl_core::{MenuItem, WindowId, WindowType};

/// Menu selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHow {
    None,
    One,
    Any,
}

/// One entry picked in a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPick {
    pub item: hackrl_core::Identifier,
    /// Requested count, -1 for "all"
    pub count: i64,
}

/// Mouse click accompanying a key read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub x: i32,
    pub y: i32,
    pub modifier: i32,
}

/// Result of a positional key read; `key == 0` means a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedKey {
    pub key: i32,
    pub click: Option<Click>,
}

/// Payload of a status update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusValue<'a> {
    /// Formatted field text
    Text(&'a str),
    /// Condition bitmask
    Conditions(u64),
}

/// A single status update as sent by the host
#[derive(Debug, Clone, Copy)]
pub struct StatusUpdate<'a> {
    pub field: i32,
    pub value: StatusValue<'a>,
    pub change: i32,
    pub percent: i32,
    pub color: i32,
    pub color_masks: &'a [u64],
}

/// The host's fixed set of interface operations
pub trait WindowProcs {
    fn init_windows(&mut self, args: &mut Vec<String>);

    fn player_selection(&mut self);

    fn ask_name(&mut self);

    fn get_event(&mut self);

    fn exit_windows(&mut self, message: &str);

    fn suspend_windows(&mut self, message: &str);

    fn resume_windows(&mut self);

    /// Create a window and return its handle
    fn create_window(&mut self, window_type: WindowType) -> WindowId;

    fn clear_window(&mut self, window: WindowId);

    /// Show a window; blocking displays wait for acknowledgement
    fn display_window(&mut self, window: WindowId, blocking: bool);

    fn destroy_window(&mut self, window: WindowId);

    fn cursor(&mut self, window: WindowId, x: i32, y: i32);

    fn put_str(&mut self, window: WindowId, attr: i32, text: &str);

    fn display_file(&mut self, name: &str, must_exist: bool);

    fn start_menu(&mut self, window: WindowId);

    fn add_menu(&mut self, window: WindowId, item: &MenuItem);

    fn end_menu(&mut self, window: WindowId, prompt: Option<&str>);

    /// Run a menu; `None` when the user cancelled
    fn select_menu(&mut self, window: WindowId, how: MenuHow) -> Option<Vec<MenuPick>>;

    fn update_inventory(&mut self);

    fn mark_sync(&mut self);

    fn wait_sync(&mut self);

    /// Keep the map scrolled around a position (clipping ports only)
    fn cliparound(&mut self, _x: i32, _y: i32) {}

    fn print_glyph(&mut self, window: WindowId, x: i32, y: i32, glyph: i32, background: i32);

    fn raw_print(&mut self, text: &str);

    fn raw_print_bold(&mut self, text: &str);

    /// Block until a key is available
    fn get_key(&mut self) -> i32;

    fn pos_key(&mut self) -> PositionedKey;

    fn bell(&mut self);

    fn prev_message(&mut self) -> i32;

    fn yn_function(&mut self, question: &str, choices: Option<&str>, default: u8) -> u8;

    fn get_line(&mut self, prompt: &str) -> String;

    fn get_ext_cmd(&mut self) -> i32;

    fn number_pad(&mut self, mode: i32);

    fn delay_output(&mut self);

    fn start_screen(&mut self);

    fn end_screen(&mut self);

    /// Render the tombstone
    fn outrip(&mut self, window: WindowId, how: i32, when: i64);

    fn get_msg_history(&mut self, init: bool) -> Option<String>;

    fn put_msg_history(&mut self, message: Option<&str>, restoring: bool);

    fn status_init(&mut self);

    fn status_update(&mut self, update: &StatusUpdate<'_>);
}
