//! User interface subsystem - screen navigation + rendering.
//!
//! [`UiContext`] is a Moore machine: the screen that renders is a pure
//! function of its state, and the only effects of an event are a new
//! `screen` or `menu_index`. Event/screen pairs without a transition are
//! no-ops, so encoder turns on Config / Running / Error are inert.
//!
//! ```text
//! Splash ── system ready ──► Home
//! Home   ── click @0 ──────► Config  ── Back  ──► Home
//! Home   ── click @1 ──────► Running ── Start ──► Home
//! Home   ── Start ─────────► Running
//! Home   ── click @2 ──────► Error   ── Back  ──► Home
//! ```

pub mod input_logic;
pub mod render;

use crate::config::MENU_MAX_ITEMS;
use crate::input::InputEvent;

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Boot splash - left by the supervisor, not by input.
    Splash,
    /// Hub with the main menu.
    Home,
    /// Session parameters.
    Config,
    /// Table is vibrating.
    Running,
    /// Error / diagnostics view.
    Error,
}

/// Entries of the Home menu, in cursor order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Config,
    Run,
    Error,
}

impl MenuItem {
    pub const ALL: [MenuItem; MENU_MAX_ITEMS] = [MenuItem::Config, MenuItem::Run, MenuItem::Error];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Config => "Config",
            MenuItem::Run => "Run",
            MenuItem::Error => "Error",
        }
    }

    /// Screen opened by clicking this entry.
    pub fn target(self) -> Screen {
        match self {
            MenuItem::Config => Screen::Config,
            MenuItem::Run => Screen::Running,
            MenuItem::Error => Screen::Error,
        }
    }
}

/// Navigation state, owned by the UI activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UiContext {
    screen: Screen,
    menu_index: usize,
}

impl UiContext {
    /// Splash screen, cursor on the first menu entry.
    pub const fn new() -> Self {
        Self {
            screen: Screen::Splash,
            menu_index: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Menu entry under the cursor.
    pub fn selected(&self) -> Option<MenuItem> {
        MenuItem::from_index(self.menu_index)
    }

    /// Apply one input event.
    pub fn apply(&mut self, event: InputEvent) {
        let next = match (self.screen, event) {
            (Screen::Home, InputEvent::EncoderRight) => {
                self.menu_index = input_logic::select_next(self.menu_index, MENU_MAX_ITEMS);
                return;
            }
            (Screen::Home, InputEvent::EncoderLeft) => {
                self.menu_index = input_logic::select_prev(self.menu_index);
                return;
            }
            (Screen::Home, InputEvent::EncoderClick) => match self.selected() {
                Some(item) => item.target(),
                None => return,
            },
            (Screen::Home, InputEvent::ButtonStart) => Screen::Running,
            (Screen::Config, InputEvent::ButtonBack) => Screen::Home,
            // START doubles as stop while running
            (Screen::Running, InputEvent::ButtonStart) => Screen::Home,
            (Screen::Error, InputEvent::ButtonBack) => Screen::Home,
            _ => return,
        };
        self.go_to(next);
    }

    /// Leave the boot splash once the system is ready. No effect elsewhere.
    pub fn leave_splash(&mut self) {
        if self.screen == Screen::Splash {
            self.go_to(Screen::Home);
        }
    }

    fn go_to(&mut self, next: Screen) {
        info!("UI: {} -> {}", self.screen, next);
        self.screen = next;
        self.menu_index = input_logic::clamp_selection(self.menu_index, MENU_MAX_ITEMS);
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}
