//! Shadow window registry

use hackrl_core::{HackRlError, MenuItem, Result, Window, WindowId, WindowType};

/// Shadow windows indexed by handle.
///
/// Slots are never compacted: a destroyed handle leaves an empty slot that
/// the next window created with that handle fills again.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    slots: Vec<Option<Window>>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_index(window: WindowId) -> Result<usize> {
        usize::try_from(window).map_err(|_| HackRlError::UnknownWindow(window))
    }

    fn live_mut(&mut self, window: WindowId) -> Result<&mut Window> {
        let index = Self::slot_index(window)?;
        self.slots
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(HackRlError::UnknownWindow(window))
    }

    /// Allocate the slot for a handle issued by the real interface
    pub fn create(&mut self, window: WindowId, window_type: WindowType) -> Result<()> {
        let index = Self::slot_index(window)?;
        if self.slots.len() <= index {
            self.slots.resize(index + 1, None);
        }
        if self.slots[index].is_some() {
            return Err(HackRlError::WindowExists(window));
        }
        self.slots[index] = Some(Window::new(window_type));
        Ok(())
    }

    /// Drop all lines and menu items; returns the window's type
    pub fn clear(&mut self, window: WindowId) -> Result<WindowType> {
        let win = self.live_mut(window)?;
        win.strings.clear();
        win.menu_items.clear();
        Ok(win.window_type)
    }

    /// Free the slot
    pub fn destroy(&mut self, window: WindowId) -> Result<()> {
        let index = Self::slot_index(window)?;
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                Ok(())
            }
            _ => Err(HackRlError::UnknownWindow(window)),
        }
    }

    pub fn append_line(&mut self, window: WindowId, text: &str) -> Result<()> {
        self.live_mut(window)?.strings.push(text.to_string());
        Ok(())
    }

    /// Drop the lines only, keeping menu items
    pub fn clear_lines(&mut self, window: WindowId) -> Result<()> {
        self.live_mut(window)?.strings.clear();
        Ok(())
    }

    pub fn start_menu(&mut self, window: WindowId) -> Result<()> {
        self.live_mut(window)?.menu_items.clear();
        Ok(())
    }

    pub fn append_menu_item(&mut self, window: WindowId, item: MenuItem) -> Result<()> {
        self.live_mut(window)?.menu_items.push(item);
        Ok(())
    }

    pub fn get(&self, window: WindowId) -> Option<&Window> {
        let index = usize::try_from(window).ok()?;
        self.slots.get(index)?.as_ref()
    }

    /// Number of live windows
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// All slots in handle order, absent ones included
    pub fn records(&self) -> &[Option<Window>] {
        &self.slots
    }
}
