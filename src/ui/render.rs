//! Screen content.
//!
//! Rendering is pure output: it reads [`UiContext`] and a [`PanelStatus`]
//! snapshot and issues draw calls, nothing flows back into state.
//! Coordinates are in the logical 240 × 200 layout; the display adapter
//! scales them to the physical panel.

use core::fmt::Write;

use super::{MenuItem, Screen, UiContext};
use crate::config::{DEFAULT_FREQ_HZ, DEFAULT_SESSION_MIN};

/// Logical layout width.
pub const LAYOUT_WIDTH: i32 = 240;
/// Logical layout height.
pub const LAYOUT_HEIGHT: i32 = 200;

/// Left margin for every text line.
const MARGIN_X: i32 = 20;
const TITLE_Y: i32 = 20;
const LINE1_Y: i32 = 60;
const LINE2_Y: i32 = 90;
const MENU_Y: i32 = 120;
const MENU_PITCH: i32 = 20;

/// Text colours used by the screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Green,
    Cyan,
    Yellow,
    Red,
}

/// Drawing surface the UI renders onto.
pub trait Renderer {
    /// Blank the whole frame.
    fn clear(&mut self);
    /// Colour for subsequent text.
    fn set_color(&mut self, color: Color);
    /// Draw `text` with its top-left corner at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
    /// Push the finished frame to the panel, if the surface is buffered.
    fn flush(&mut self) {}
}

/// Read-only snapshot of the values the screens display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelStatus {
    /// System finished its self-test; the splash may be left.
    pub ready: bool,
    /// Vibration frequency setpoint (Hz).
    pub freq_hz: u16,
    /// Configured session length (minutes).
    pub session_min: u16,
    /// Time left in the current session (seconds).
    pub remaining_s: u32,
    /// Last recorded fault code, 0 = none.
    pub error_code: u8,
}

impl Default for PanelStatus {
    fn default() -> Self {
        Self {
            ready: false,
            freq_hz: DEFAULT_FREQ_HZ,
            session_min: DEFAULT_SESSION_MIN,
            remaining_s: u32::from(DEFAULT_SESSION_MIN) * 60,
            error_code: 0,
        }
    }
}

type Line = heapless::String<24>;

/// Draw one full frame for the current screen.
pub fn draw<R: Renderer>(ui: &UiContext, status: &PanelStatus, out: &mut R) {
    out.clear();
    match ui.screen() {
        Screen::Splash => draw_splash(status, out),
        Screen::Home => draw_home(ui, status, out),
        Screen::Config => draw_config(out),
        Screen::Running => draw_running(status, out),
        Screen::Error => draw_error(status, out),
    }
    out.flush();
}

fn draw_splash<R: Renderer>(status: &PanelStatus, out: &mut R) {
    out.set_color(Color::Green);
    out.draw_text("VIBRATION TABLE", MARGIN_X, 40);
    let msg = if status.error_code != 0 {
        "Self-test failed"
    } else {
        "Booting..."
    };
    out.draw_text(msg, MARGIN_X, 80);
}

fn draw_home<R: Renderer>(ui: &UiContext, status: &PanelStatus, out: &mut R) {
    out.set_color(Color::White);
    out.draw_text("HOME", MARGIN_X, TITLE_Y);
    out.draw_text(&freq_line(status.freq_hz), MARGIN_X, LINE1_Y);

    let mut time = Line::new();
    let _ = write!(time, "Time: {} min", status.session_min);
    out.draw_text(&time, MARGIN_X, LINE2_Y);

    for (row, item) in MenuItem::ALL.iter().enumerate() {
        let marker = if row == ui.menu_index() { ">" } else { " " };
        let mut line = Line::new();
        let _ = write!(line, "{} {}", marker, item.label());
        out.draw_text(&line, MARGIN_X, MENU_Y + row as i32 * MENU_PITCH);
    }
}

fn draw_config<R: Renderer>(out: &mut R) {
    out.set_color(Color::Cyan);
    out.draw_text("CONFIG", MARGIN_X, TITLE_Y);
    out.draw_text("> Frequency", MARGIN_X, LINE1_Y);
    out.draw_text("  Time", MARGIN_X, LINE2_Y);
}

fn draw_running<R: Renderer>(status: &PanelStatus, out: &mut R) {
    out.set_color(Color::Yellow);
    out.draw_text("RUNNING...", MARGIN_X, TITLE_Y);
    out.draw_text(&freq_line(status.freq_hz), MARGIN_X, LINE1_Y);

    let mut remaining = Line::new();
    let _ = write!(
        remaining,
        "Remaining: {:02}:{:02}",
        status.remaining_s / 60,
        status.remaining_s % 60
    );
    out.draw_text(&remaining, MARGIN_X, LINE2_Y);
}

fn draw_error<R: Renderer>(status: &PanelStatus, out: &mut R) {
    out.set_color(Color::Red);
    out.draw_text("ERROR", MARGIN_X, TITLE_Y);

    let mut code = Line::new();
    let _ = write!(code, "Code: E{:02}", status.error_code);
    out.draw_text(&code, MARGIN_X, LINE1_Y);
}

fn freq_line(freq_hz: u16) -> Line {
    let mut line = Line::new();
    let _ = write!(line, "Freq: {} Hz", freq_hz);
    line
}
