//! Interception facade
//!
//! `RlWindowProcs` sits between the host and its real renderer. Every
//! window operation updates the shadow state and is passed on; every key
//! read first publishes a snapshot on the channel.

use std::path::Path;

use crate::config::BridgeConfig;
use crate::encoder::{ShadowState, SnapshotContext, SnapshotEncoder};
use crate::glyphs::GlyphFrameBuffer;
use crate::host::HostFacts;
use crate::inventory::InventoryMirror;
use crate::procs::{MenuHow, MenuPick, PositionedKey, StatusUpdate, WindowProcs};
use crate::registry::WindowRegistry;
use crate::status::{StatusPanel, decode_mixed};
use crate::trace::CallTrace;
use crate::transport::Transport;
use hackrl_core::{
    BASE_WINDOW, LifecyclePhase, MenuItem, PhaseTracker, Result, WindowId, WindowType,
};
use tracing::{debug, error, info};

/// Window procedures that mirror the interface and export snapshots
pub struct RlWindowProcs<W, H> {
    config: BridgeConfig,
    inner: W,
    host: H,
    shadow: ShadowState,
    trace: CallTrace,
    phase: PhaseTracker,
    encoder: SnapshotEncoder,
    transport: Option<Transport>,
}

/// Unwrap a shadow-state result; a failure means the host broke the
/// window protocol and the mirror can no longer be trusted.
fn in_sync<T>(operation: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            error!("Shadow state out of sync in {}: {}", operation, e);
            panic!("shadow state out of sync in {}: {}", operation, e);
        }
    }
}

impl<W, H> RlWindowProcs<W, H> {
    pub fn registry(&self) -> &WindowRegistry {
        &self.shadow.windows
    }

    pub fn map(&self) -> &GlyphFrameBuffer {
        &self.shadow.map
    }

    pub fn status(&self) -> &StatusPanel {
        &self.shadow.status
    }

    pub fn inventory(&self) -> &InventoryMirror {
        &self.shadow.inventory
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase.phase()
    }

    pub fn trace(&self) -> &CallTrace {
        &self.trace
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// Whether the channel is still bound
    pub fn is_bound(&self) -> bool {
        self.transport.is_some()
    }

    /// Channel socket path while bound
    pub fn socket_path(&self) -> Option<&Path> {
        self.transport.as_ref().map(Transport::path)
    }

    /// Run `f` with `tag` on the call trace
    pub fn traced<R>(&mut self, tag: &'static str, f: impl FnOnce(&mut Self) -> R) -> R {
        let _guard = self.trace.enter(tag);
        f(self)
    }

    /// Send the sentinel and release the channel. Later calls do nothing.
    pub fn teardown(&mut self) {
        if let Some(transport) = self.transport.take() {
            info!("Tearing down snapshot channel {}", transport.path().display());
            transport.shutdown(&self.encoder.sentinel());
        }
    }
}

impl<W, H> RlWindowProcs<W, H>
where
    W: WindowProcs,
    H: HostFacts,
{
    /// Bind the channel and set up the shadow state around `inner`
    pub fn new(config: BridgeConfig, inner: W, host: H) -> Result<Self> {
        let transport = Transport::bind(&config)?;

        let mut shadow = ShadowState::new(config.map_width, config.map_height);
        shadow.windows.create(BASE_WINDOW, WindowType::Base)?;

        info!(
            "Bridge ready: map {}x{}, channel {}",
            shadow.map.width(),
            shadow.map.height(),
            transport.path().display()
        );

        Ok(Self {
            config,
            inner,
            host,
            shadow,
            trace: CallTrace::new(),
            phase: PhaseTracker::new(),
            encoder: SnapshotEncoder::new(),
            transport: Some(transport),
        })
    }

    /// Encode the current state and hand it to the channel
    pub fn send_snapshot(&mut self) {
        let program_state = self.host.program_state();
        if self.phase.observe(&program_state) {
            info!("Lifecycle phase is now {:?}", self.phase.phase());
        }

        let Some(transport) = self.transport.as_mut() else {
            debug!("Channel closed, snapshot skipped");
            return;
        };

        let context = SnapshotContext {
            program_state,
            full: self.phase.full_schema(),
            call_stack: self.trace.snapshot(),
        };
        let msg = self.encoder.encode(&self.shadow, &self.host, context);
        if let Err(e) = transport.send(&msg) {
            error!("Failed to send snapshot: {}", e);
        }
    }
}

impl<W, H> WindowProcs for RlWindowProcs<W, H>
where
    W: WindowProcs,
    H: HostFacts,
{
    fn init_windows(&mut self, args: &mut Vec<String>) {
        self.traced("init_nhwindows", |b| b.inner.init_windows(args))
    }

    fn player_selection(&mut self) {
        self.traced("player_selection", |b| {
            b.phase.advance(LifecyclePhase::PlayerSelection);
            b.inner.player_selection();
            in_sync("player_selection", b.shadow.windows.clear_lines(BASE_WINDOW));
        })
    }

    fn ask_name(&mut self) {
        self.traced("askname", |b| b.inner.ask_name())
    }

    fn get_event(&mut self) {
        self.traced("get_nh_event", |b| b.inner.get_event())
    }

    fn exit_windows(&mut self, message: &str) {
        self.traced("exit_nhwindows", |b| {
            b.teardown();
            b.inner.exit_windows(message);
        })
    }

    fn suspend_windows(&mut self, message: &str) {
        self.traced("suspend_nhwindows", |b| b.inner.suspend_windows(message))
    }

    fn resume_windows(&mut self) {
        self.traced("resume_nhwindows", |b| b.inner.resume_windows())
    }

    fn create_window(&mut self, window_type: WindowType) -> WindowId {
        self.traced("create_nhwindow", |b| {
            let window = b.inner.create_window(window_type);
            in_sync("create_window", b.shadow.windows.create(window, window_type));
            debug!("Created {} window {}", window_type.as_str(), window);
            window
        })
    }

    fn clear_window(&mut self, window: WindowId) {
        self.traced("clear_nhwindow", |b| {
            let window_type = in_sync("clear_window", b.shadow.windows.clear(window));
            if window_type == WindowType::Map {
                b.shadow.map.reset();
            }
            b.inner.clear_window(window);
        })
    }

    fn display_window(&mut self, window: WindowId, blocking: bool) {
        self.traced("display_nhwindow", |b| b.inner.display_window(window, blocking))
    }

    fn destroy_window(&mut self, window: WindowId) {
        self.traced("destroy_nhwindow", |b| {
            in_sync("destroy_window", b.shadow.windows.destroy(window));
            debug!("Destroyed window {}", window);
            b.inner.destroy_window(window);
        })
    }

    fn cursor(&mut self, window: WindowId, x: i32, y: i32) {
        self.traced("curs", |b| b.inner.cursor(window, x, y))
    }

    fn put_str(&mut self, window: WindowId, attr: i32, text: &str) {
        self.traced("putstr", |b| {
            in_sync("put_str", b.shadow.windows.append_line(window, text));
            b.inner.put_str(window, attr, text);
        })
    }

    fn display_file(&mut self, name: &str, must_exist: bool) {
        self.traced("display_file", |b| b.inner.display_file(name, must_exist))
    }

    fn start_menu(&mut self, window: WindowId) {
        self.traced("start_menu", |b| {
            in_sync("start_menu", b.shadow.windows.start_menu(window));
            b.inner.start_menu(window);
        })
    }

    fn add_menu(&mut self, window: WindowId, item: &MenuItem) {
        self.traced("add_menu", |b| {
            in_sync("add_menu", b.shadow.windows.append_menu_item(window, item.clone()));
            b.inner.add_menu(window, item);
        })
    }

    fn end_menu(&mut self, window: WindowId, prompt: Option<&str>) {
        self.traced("end_menu", |b| b.inner.end_menu(window, prompt))
    }

    fn select_menu(&mut self, window: WindowId, how: MenuHow) -> Option<Vec<MenuPick>> {
        self.traced("select_menu", |b| b.inner.select_menu(window, how))
    }

    fn update_inventory(&mut self) {
        self.traced("update_inventory", |b| {
            b.shadow.inventory.refresh(b.host.inventory());
            debug!("Inventory refreshed, {} items", b.shadow.inventory.len());
        })
    }

    fn mark_sync(&mut self) {
        self.traced("mark_synch", |b| b.inner.mark_sync())
    }

    fn wait_sync(&mut self) {
        self.traced("wait_synch", |b| b.inner.wait_sync())
    }

    fn cliparound(&mut self, x: i32, y: i32) {
        self.inner.cliparound(x, y);
    }

    fn print_glyph(&mut self, window: WindowId, x: i32, y: i32, glyph: i32, background: i32) {
        let on_map = self
            .shadow
            .windows
            .get(window)
            .is_some_and(|w| w.window_type == WindowType::Map);

        if on_map {
            self.shadow.map.write(x, y, glyph);
            let mapped = self.host.map_glyph(glyph, x, y);
            self.shadow.map.write_mapped(x, y, mapped);
        } else {
            debug!("Glyph {} printed on non-map window {}", glyph, window);
        }
        self.inner.print_glyph(window, x, y, glyph, background);
    }

    fn raw_print(&mut self, text: &str) {
        self.traced("raw_print", |b| b.inner.raw_print(text))
    }

    fn raw_print_bold(&mut self, text: &str) {
        self.traced("raw_bold_print", |b| b.inner.raw_print_bold(text))
    }

    fn get_key(&mut self) -> i32 {
        self.traced("nhgetch", |b| {
            b.send_snapshot();
            b.inner.get_key()
        })
    }

    fn pos_key(&mut self) -> PositionedKey {
        self.traced("nh_poskey", |b| PositionedKey {
            key: b.get_key(),
            click: None,
        })
    }

    fn bell(&mut self) {
        self.traced("nhbell", |b| b.inner.bell())
    }

    fn prev_message(&mut self) -> i32 {
        self.traced("doprev_message", |b| b.inner.prev_message())
    }

    fn yn_function(&mut self, question: &str, choices: Option<&str>, default: u8) -> u8 {
        self.traced("yn_function", |b| b.inner.yn_function(question, choices, default))
    }

    fn get_line(&mut self, prompt: &str) -> String {
        self.traced("getlin", |b| b.inner.get_line(prompt))
    }

    fn get_ext_cmd(&mut self) -> i32 {
        self.traced("get_ext_cmd", |b| b.inner.get_ext_cmd())
    }

    fn number_pad(&mut self, mode: i32) {
        self.traced("number_pad", |b| b.inner.number_pad(mode))
    }

    fn delay_output(&mut self) {
        if self.config.forward_delays {
            self.inner.delay_output();
        }
    }

    fn start_screen(&mut self) {
        self.traced("start_screen", |b| b.inner.start_screen())
    }

    fn end_screen(&mut self) {
        self.traced("end_screen", |b| {
            b.inner.end_screen();
            b.teardown();
        })
    }

    fn outrip(&mut self, window: WindowId, how: i32, when: i64) {
        self.inner.outrip(window, how, when);
    }

    fn get_msg_history(&mut self, init: bool) -> Option<String> {
        self.inner.get_msg_history(init)
    }

    fn put_msg_history(&mut self, message: Option<&str>, restoring: bool) {
        self.inner.put_msg_history(message, restoring);
    }

    fn status_init(&mut self) {
        self.traced("status_init", |b| b.inner.status_init())
    }

    fn status_update(&mut self, update: &StatusUpdate<'_>) {
        self.traced("status_update", |b| {
            let key = b.host.glyph_encoding_key();
            let host = &b.host;
            b.shadow.status.update(update.field, update.value, |text| {
                decode_mixed(text, key, |glyph| host.map_glyph(glyph, 0, 0).ch)
            });
            if b.config.forward_status {
                b.inner.status_update(update);
            }
        })
    }
}

impl<W, H> Drop for RlWindowProcs<W, H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procs::StatusValue;
    use crate::testing::{FakeHost, HostState, Recorder};
    use hackrl_core::codec::read_message;
    use hackrl_core::{HackRlError, Identifier, InventoryItem, Message, StatusField};
    use interprocess::local_socket::{GenericFilePath, prelude::*};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use tempfile::TempDir;

    type Bridge = RlWindowProcs<Recorder, FakeHost>;

    fn setup(keys: &[i32]) -> (TempDir, Bridge, Rc<RefCell<HostState>>) {
        let dir = tempfile::tempdir().unwrap();
        let config = BridgeConfig {
            linger: Duration::from_millis(200),
            ..BridgeConfig::with_socket_dir(dir.path())
        };
        let (host, state) = FakeHost::new();
        let bridge = RlWindowProcs::new(config, Recorder::with_keys(keys), host).unwrap();
        (dir, bridge, state)
    }

    fn observe(bridge: &Bridge) -> LocalSocketStream {
        let name = bridge
            .socket_path()
            .unwrap()
            .to_fs_name::<GenericFilePath>()
            .unwrap();
        LocalSocketStream::connect(name).unwrap()
    }

    fn next(client: &mut LocalSocketStream) -> Message {
        read_message(client).unwrap().unwrap()
    }

    fn in_moveloop(state: &Rc<RefCell<HostState>>) {
        state.borrow_mut().program_state.in_moveloop = true;
    }

    fn item(text: &str) -> MenuItem {
        MenuItem {
            glyph: 0,
            identifier: Identifier::from_i64(1),
            accelerator: b'a',
            group_accelerator: 0,
            text: text.into(),
            attribute: 0,
            selected: false,
        }
    }

    fn text_update(field: i32, text: &str) -> StatusUpdate<'_> {
        StatusUpdate {
            field,
            value: StatusValue::Text(text),
            change: 0,
            percent: 100,
            color: 0,
            color_masks: &[],
        }
    }

    #[test]
    fn test_new_creates_base_window() {
        let (_dir, bridge, _) = setup(&[]);
        let base = bridge.registry().get(BASE_WINDOW).unwrap();
        assert_eq!(base.window_type, WindowType::Base);
        assert!(bridge.is_bound());
        assert!(bridge.socket_path().unwrap().exists());
        assert_eq!(bridge.phase(), LifecyclePhase::Initializing);
    }

    #[test]
    fn test_bind_failure_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = BridgeConfig::with_socket_dir(dir.path().join("missing"));
        let (host, _) = FakeHost::new();
        let result = RlWindowProcs::new(config, Recorder::new(), host);
        assert!(matches!(result, Err(HackRlError::IpcError(_))));
    }

    #[test]
    fn test_map_clear_blanks_grid() {
        let (_dir, mut bridge, _) = setup(&[]);
        let map = bridge.create_window(WindowType::Map);

        bridge.print_glyph(map, 1, 0, 5, 0);
        assert_eq!(bridge.map().cell(0, 0).unwrap().0, 5);

        bridge.clear_window(map);
        assert!(bridge.map().is_blank());
        let (glyph, mapped) = bridge.map().cell(0, 0).unwrap();
        assert_eq!(glyph, 0);
        assert_eq!(mapped.ch, b' ');
        assert!(bridge.inner().called("clear_window"));
    }

    #[test]
    fn test_print_glyph_maps_through_host() {
        let (_dir, mut bridge, _) = setup(&[]);
        let message = bridge.create_window(WindowType::Message);
        let map = bridge.create_window(WindowType::Map);

        bridge.print_glyph(map, 3, 2, 0x140, 0);
        let (glyph, mapped) = bridge.map().cell(2, 2).unwrap();
        assert_eq!(glyph, 0x140);
        assert_eq!(mapped.ch, 0x40);
        assert_eq!(mapped.color, 7);

        bridge.print_glyph(message, 3, 2, 9, 0);
        assert_eq!(bridge.map().cell(2, 2).unwrap().0, 0x140);
        assert_eq!(
            bridge
                .inner()
                .calls
                .iter()
                .filter(|c| c.starts_with("print_glyph"))
                .count(),
            2
        );
    }

    #[test]
    fn test_menu_items_in_snapshot() {
        let (_dir, mut bridge, _) = setup(&[b'a' as i32]);
        let mut client = observe(&bridge);

        let menu = bridge.create_window(WindowType::Menu);
        bridge.start_menu(menu);
        bridge.add_menu(menu, &item("Attack"));
        bridge.add_menu(menu, &item("Wait"));
        bridge.end_menu(menu, Some("Do what?"));
        assert_eq!(bridge.get_key(), b'a' as i32);

        let msg = next(&mut client);
        let window = msg.windows[menu as usize].as_ref().unwrap();
        let labels: Vec<_> = window.menu_items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(labels, vec!["Attack", "Wait"]);
    }

    #[test]
    fn test_menu_identifier_copied_verbatim() {
        let (_dir, mut bridge, _) = setup(&[]);
        let menu = bridge.create_window(WindowType::Menu);
        let identifier = Identifier([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x7f]);

        bridge.start_menu(menu);
        bridge.add_menu(menu, &MenuItem { identifier, ..item("Quaff") });
        bridge.add_menu(menu, &MenuItem { identifier: Identifier::from_i64(-1), ..item("Read") });

        let items = &bridge.registry().get(menu).unwrap().menu_items;
        assert_eq!(items[0].identifier, identifier);
        assert_eq!(items[1].identifier, Identifier([0xff; 8]));
    }

    #[test]
    fn test_status_text_reaches_snapshot() {
        let (_dir, mut bridge, state) = setup(&[]);
        in_moveloop(&state);
        let mut client = observe(&bridge);

        bridge.status_update(&text_update(StatusField::HitPoints as i32, "15"));
        assert!(bridge.inner().called("status_update"));
        bridge.get_key();

        let msg = next(&mut client);
        assert_eq!(msg.observation.unwrap().status.hit_points, "15");
    }

    #[test]
    fn test_gold_is_decoded() {
        let (_dir, mut bridge, state) = setup(&[]);
        state.borrow_mut().encoding_key = 0x00ab;

        bridge.status_update(&text_update(10, "\\G00ab0024:120"));
        assert_eq!(bridge.status().field(StatusField::Gold), "$:120");
    }

    #[test]
    fn test_status_forwarding_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = BridgeConfig {
            forward_status: false,
            forward_delays: true,
            ..BridgeConfig::with_socket_dir(dir.path())
        };
        let (host, _) = FakeHost::new();
        let mut bridge = RlWindowProcs::new(config, Recorder::new(), host).unwrap();

        bridge.status_update(&text_update(0, "Agent the Stripling"));
        bridge.delay_output();
        assert_eq!(bridge.status().field(StatusField::Title), "Agent the Stripling");
        assert!(!bridge.inner().called("status_update"));
        assert!(bridge.inner().called("delay_output"));
    }

    #[test]
    fn test_delay_output_suppressed_by_default() {
        let (_dir, mut bridge, _) = setup(&[]);
        bridge.delay_output();
        assert!(!bridge.inner().called("delay_output"));
    }

    #[test]
    fn test_destroyed_slot_absent_in_snapshot() {
        let (_dir, mut bridge, _) = setup(&[]);
        let mut client = observe(&bridge);

        let handles: Vec<_> = (0..3)
            .map(|_| bridge.create_window(WindowType::Text))
            .collect();
        assert_eq!(handles, vec![1, 2, 3]);
        bridge.destroy_window(2);
        bridge.get_key();

        let msg = next(&mut client);
        assert_eq!(msg.windows.len(), 4);
        assert!(msg.windows[1].is_some());
        assert!(msg.windows[2].is_none());
        assert!(msg.windows[3].is_some());
    }

    #[test]
    fn test_teardown_before_move_loop() {
        let (_dir, mut bridge, _) = setup(&[]);
        let path = bridge.socket_path().unwrap().to_path_buf();
        let mut client = observe(&bridge);

        bridge.get_key();
        bridge.exit_windows("bye");
        assert!(!bridge.is_bound());
        assert!(!path.exists());
        assert_eq!(bridge.inner().calls.last().unwrap(), "exit_windows bye");

        // later teardown triggers send nothing
        bridge.end_screen();
        drop(bridge);

        let first = next(&mut client);
        assert!(!first.done);
        assert!(!first.is_full());

        let last = next(&mut client);
        assert!(last.done);
        assert!(last.observation.is_none());
        assert!(last.blstats.is_none());
        assert!(last.internal.is_none());

        assert!(read_message(&mut client).unwrap().is_none());
    }

    #[test]
    fn test_drop_tears_down() {
        let (_dir, bridge, _) = setup(&[]);
        let path = bridge.socket_path().unwrap().to_path_buf();
        let mut client = observe(&bridge);
        drop(bridge);

        assert!(!path.exists());
        assert!(next(&mut client).done);
    }

    #[test]
    fn test_end_screen_tears_down_after_delegating() {
        let (_dir, mut bridge, _) = setup(&[]);
        bridge.end_screen();
        assert!(bridge.inner().called("end_screen"));
        assert!(!bridge.is_bound());
    }

    #[test]
    fn test_pos_key_reports_nested_trace() {
        let (_dir, mut bridge, state) = setup(&[b'h' as i32]);
        in_moveloop(&state);
        let mut client = observe(&bridge);

        let key = bridge.pos_key();
        assert_eq!(key, PositionedKey { key: b'h' as i32, click: None });
        assert!(!bridge.inner().called("pos_key"));
        assert_eq!(bridge.trace().depth(), 0);

        let msg = next(&mut client);
        assert_eq!(
            msg.internal.unwrap().call_stack,
            vec!["nh_poskey", "nhgetch"]
        );
    }

    #[test]
    fn test_hit_points_capped_in_snapshot() {
        let (_dir, mut bridge, state) = setup(&[]);
        in_moveloop(&state);
        state.borrow_mut().player.hp = 12000;
        state.borrow_mut().player.hp_max = 12000;
        let mut client = observe(&bridge);

        bridge.get_key();
        let stats = next(&mut client).blstats.unwrap();
        assert_eq!(stats.hitpoints, 9999);
        assert_eq!(stats.max_hitpoints, 9999);
    }

    #[test]
    fn test_phase_follows_host() {
        let (_dir, mut bridge, state) = setup(&[]);
        let mut client = observe(&bridge);

        bridge.player_selection();
        assert_eq!(bridge.phase(), LifecyclePhase::PlayerSelection);
        bridge.get_key();
        assert!(!next(&mut client).is_full());

        in_moveloop(&state);
        bridge.get_key();
        assert_eq!(bridge.phase(), LifecyclePhase::InMoveLoop);
        assert!(next(&mut client).is_full());

        state.borrow_mut().program_state.gameover = true;
        state.borrow_mut().player.killer_name = "a newt".into();
        bridge.get_key();
        assert_eq!(bridge.phase(), LifecyclePhase::GameOver);
        let msg = next(&mut client);
        assert!(msg.program_state.gameover);
        assert_eq!(msg.internal.unwrap().killer_name.as_deref(), Some("a newt"));
    }

    #[test]
    fn test_player_selection_clears_base_lines() {
        let (_dir, mut bridge, _) = setup(&[]);
        bridge.put_str(BASE_WINDOW, 0, "Shall I pick a character for you?");
        bridge.player_selection();
        assert!(bridge.registry().get(BASE_WINDOW).unwrap().strings.is_empty());
        assert!(bridge.inner().called("player_selection"));
    }

    #[test]
    fn test_update_inventory_not_forwarded() {
        let (_dir, mut bridge, state) = setup(&[]);
        state.borrow_mut().inventory = vec![InventoryItem {
            glyph: 1900,
            text: "a +1 long sword (weapon in hand)".into(),
            letter: b'a',
            object_class: 2,
            object_class_name: "Weapons".into(),
        }];

        bridge.update_inventory();
        assert_eq!(bridge.inventory().len(), 1);
        assert!(!bridge.inner().called("update_inventory"));
    }

    #[test]
    fn test_put_str_lines_kept_in_order() {
        let (_dir, mut bridge, _) = setup(&[]);
        let text = bridge.create_window(WindowType::Text);
        bridge.put_str(text, 0, "first");
        bridge.put_str(text, 0, "second");
        assert_eq!(
            bridge.registry().get(text).unwrap().strings,
            vec!["first", "second"]
        );
        assert_eq!(bridge.trace().depth(), 0);
    }

    #[test]
    #[should_panic(expected = "shadow state out of sync")]
    fn test_unknown_window_is_fatal() {
        let (_dir, mut bridge, _) = setup(&[]);
        bridge.put_str(7, 0, "nowhere");
    }
}
