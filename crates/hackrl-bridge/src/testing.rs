//! Fakes for exercising the facade in unit tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::host::{HostFacts, MappedGlyph, PlayerFacts};
use crate::procs::{MenuHow, MenuPick, PositionedKey, StatusUpdate, WindowProcs};
use hackrl_core::{InventoryItem, MenuItem, ProgramState, Seeds, WindowId, WindowType};

/// Renderer that records every call and answers from a key script
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<String>,
    pub keys: VecDeque<i32>,
    next_handle: WindowId,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            ..Default::default()
        }
    }

    pub fn with_keys(keys: &[i32]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            ..Self::new()
        }
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.iter().any(|c| c.split(' ').next() == Some(name))
    }

    fn log(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }
}

impl WindowProcs for Recorder {
    fn init_windows(&mut self, _args: &mut Vec<String>) {
        self.log("init_windows");
    }

    fn player_selection(&mut self) {
        self.log("player_selection");
    }

    fn ask_name(&mut self) {
        self.log("ask_name");
    }

    fn get_event(&mut self) {
        self.log("get_event");
    }

    fn exit_windows(&mut self, message: &str) {
        self.log(format!("exit_windows {}", message));
    }

    fn suspend_windows(&mut self, _message: &str) {
        self.log("suspend_windows");
    }

    fn resume_windows(&mut self) {
        self.log("resume_windows");
    }

    fn create_window(&mut self, window_type: WindowType) -> WindowId {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.log(format!("create_window {}", window_type.as_str()));
        handle
    }

    fn clear_window(&mut self, window: WindowId) {
        self.log(format!("clear_window {}", window));
    }

    fn display_window(&mut self, window: WindowId, _blocking: bool) {
        self.log(format!("display_window {}", window));
    }

    fn destroy_window(&mut self, window: WindowId) {
        self.log(format!("destroy_window {}", window));
    }

    fn cursor(&mut self, _window: WindowId, _x: i32, _y: i32) {
        self.log("cursor");
    }

    fn put_str(&mut self, window: WindowId, _attr: i32, text: &str) {
        self.log(format!("put_str {} {}", window, text));
    }

    fn display_file(&mut self, name: &str, _must_exist: bool) {
        self.log(format!("display_file {}", name));
    }

    fn start_menu(&mut self, window: WindowId) {
        self.log(format!("start_menu {}", window));
    }

    fn add_menu(&mut self, window: WindowId, item: &MenuItem) {
        self.log(format!("add_menu {} {}", window, item.text));
    }

    fn end_menu(&mut self, window: WindowId, _prompt: Option<&str>) {
        self.log(format!("end_menu {}", window));
    }

    fn select_menu(&mut self, window: WindowId, _how: MenuHow) -> Option<Vec<MenuPick>> {
        self.log(format!("select_menu {}", window));
        None
    }

    fn update_inventory(&mut self) {
        self.log("update_inventory");
    }

    fn mark_sync(&mut self) {
        self.log("mark_sync");
    }

    fn wait_sync(&mut self) {
        self.log("wait_sync");
    }

    fn print_glyph(&mut self, window: WindowId, x: i32, y: i32, glyph: i32, _background: i32) {
        self.log(format!("print_glyph {} {} {} {}", window, x, y, glyph));
    }

    fn raw_print(&mut self, text: &str) {
        self.log(format!("raw_print {}", text));
    }

    fn raw_print_bold(&mut self, text: &str) {
        self.log(format!("raw_print_bold {}", text));
    }

    fn get_key(&mut self) -> i32 {
        self.log("get_key");
        self.keys.pop_front().unwrap_or(27)
    }

    fn pos_key(&mut self) -> PositionedKey {
        self.log("pos_key");
        PositionedKey {
            key: self.keys.pop_front().unwrap_or(27),
            click: None,
        }
    }

    fn bell(&mut self) {
        self.log("bell");
    }

    fn prev_message(&mut self) -> i32 {
        self.log("prev_message");
        0
    }

    fn yn_function(&mut self, _question: &str, _choices: Option<&str>, default: u8) -> u8 {
        self.log("yn_function");
        default
    }

    fn get_line(&mut self, _prompt: &str) -> String {
        self.log("get_line");
        "Agent".into()
    }

    fn get_ext_cmd(&mut self) -> i32 {
        self.log("get_ext_cmd");
        -1
    }

    fn number_pad(&mut self, _mode: i32) {
        self.log("number_pad");
    }

    fn delay_output(&mut self) {
        self.log("delay_output");
    }

    fn start_screen(&mut self) {
        self.log("start_screen");
    }

    fn end_screen(&mut self) {
        self.log("end_screen");
    }

    fn outrip(&mut self, window: WindowId, _how: i32, _when: i64) {
        self.log(format!("outrip {}", window));
    }

    fn get_msg_history(&mut self, _init: bool) -> Option<String> {
        self.log("get_msg_history");
        None
    }

    fn put_msg_history(&mut self, _message: Option<&str>, _restoring: bool) {
        self.log("put_msg_history");
    }

    fn status_init(&mut self) {
        self.log("status_init");
    }

    fn status_update(&mut self, update: &StatusUpdate<'_>) {
        self.log(format!("status_update {}", update.field));
    }
}

/// Host facts tests can change while the bridge owns the host
#[derive(Debug, Clone, Default)]
pub struct HostState {
    pub program_state: ProgramState,
    pub player: PlayerFacts,
    pub inventory: Vec<InventoryItem>,
    pub encoding_key: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    pub state: Rc<RefCell<HostState>>,
}

impl FakeHost {
    pub fn new() -> (Self, Rc<RefCell<HostState>>) {
        let host = Self::default();
        let state = Rc::clone(&host.state);
        (host, state)
    }
}

impl HostFacts for FakeHost {
    fn program_state(&self) -> ProgramState {
        self.state.borrow().program_state
    }

    fn seeds(&self) -> Seeds {
        Seeds { core: 42, disp: 43 }
    }

    fn player(&self) -> PlayerFacts {
        self.state.borrow().player.clone()
    }

    fn inventory(&self) -> Vec<InventoryItem> {
        self.state.borrow().inventory.clone()
    }

    /// Glyph ids map to the character with the same low byte
    fn map_glyph(&self, glyph: i32, _x: i32, _y: i32) -> MappedGlyph {
        MappedGlyph {
            ch: (glyph & 0xff) as u8,
            color: 7,
            special: 0,
        }
    }

    fn glyph_encoding_key(&self) -> u32 {
        self.state.borrow().encoding_key
    }
}
