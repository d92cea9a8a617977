//! Front-panel input and UI core for a vibration-table controller.
//!
//! Pure logic only - encoder decoding, button debouncing, the event
//! queue, the screen state machine, and the boot supervisor - so it can
//! be tested on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib` / `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! (feature `embedded`) and supplies the GPIO, clock and display adapters.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod input;
pub mod panel;
pub mod queue;
pub mod supervisor;
pub mod ui;

pub use error::Error;
pub use input::{Clock, EventSink, GpioReader, InputEvent, Line};
pub use panel::{init, render_tick, sample_tick, Panel};
pub use queue::{EventQueue, PanelQueue};
pub use ui::render::{Color, PanelStatus, Renderer};
pub use ui::{Screen, UiContext};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - end-to-end through the tick functions
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    // ════════════════════════════════════════════════════════════════════════
    // Fakes
    // ════════════════════════════════════════════════════════════════════════

    struct Lines {
        levels: [bool; 5],
    }

    impl Lines {
        fn idle() -> Self {
            // Encoder at rest (0, 0), buttons released (high)
            Self {
                levels: [false, false, true, true, true],
            }
        }

        fn set(&mut self, line: Line, level: bool) {
            self.levels[line as usize] = level;
        }
    }

    impl GpioReader for Lines {
        fn read_level(&mut self, line: Line) -> bool {
            self.levels[line as usize]
        }
    }

    struct ManualClock(Cell<u32>);

    impl ManualClock {
        fn advance(&self, ms: u32) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u32 {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct FrameCounter {
        frames: usize,
        last_color: Option<Color>,
    }

    impl Renderer for FrameCounter {
        fn clear(&mut self) {
            self.frames += 1;
        }
        fn set_color(&mut self, color: Color) {
            self.last_color = Some(color);
        }
        fn draw_text(&mut self, _text: &str, _x: i32, _y: i32) {}
    }

    fn ready() -> PanelStatus {
        PanelStatus {
            ready: true,
            ..PanelStatus::default()
        }
    }

    /// Run one 5 ms sample tick.
    fn tick(panel: &mut Panel, lines: &mut Lines, clock: &ManualClock) {
        clock.advance(5);
        panel.sample_tick(lines, clock);
    }

    fn press(panel: &mut Panel, lines: &mut Lines, clock: &ManualClock, line: Line) {
        lines.set(line, false);
        for _ in 0..10 {
            tick(panel, lines, clock);
        }
        lines.set(line, true);
        for _ in 0..10 {
            tick(panel, lines, clock);
        }
    }

    fn detent_right(panel: &mut Panel, lines: &mut Lines, clock: &ManualClock) {
        for (a, b) in [(true, false), (true, true), (false, true), (false, false)] {
            lines.set(Line::EncoderA, a);
            lines.set(Line::EncoderB, b);
            tick(panel, lines, clock);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Scenarios
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn splash_until_ready() {
        let mut panel = init();
        let mut out = FrameCounter::default();
        panel.render_tick(&PanelStatus::default(), &mut out);
        assert_eq!(panel.ui.screen(), Screen::Splash);
        panel.render_tick(&ready(), &mut out);
        assert_eq!(panel.ui.screen(), Screen::Home);
        assert_eq!(out.frames, 2);
        assert_eq!(out.last_color, Some(Color::White));
    }

    #[test]
    fn input_before_ready_is_inert() {
        let mut panel = init();
        let mut lines = Lines::idle();
        let clock = ManualClock(Cell::new(100));
        let mut out = FrameCounter::default();

        press(&mut panel, &mut lines, &clock, Line::Start);
        assert_eq!(panel.render_tick(&PanelStatus::default(), &mut out), 1);
        assert_eq!(panel.ui.screen(), Screen::Splash);
    }

    #[test]
    fn events_sampled_on_splash_do_not_act_on_home() {
        let mut panel = init();
        let mut lines = Lines::idle();
        let clock = ManualClock(Cell::new(100));
        let mut out = FrameCounter::default();

        // Start pressed while still booting, drained in the same tick that
        // sees the ready status.
        press(&mut panel, &mut lines, &clock, Line::Start);
        assert_eq!(panel.render_tick(&ready(), &mut out), 1);
        assert_eq!(panel.ui.screen(), Screen::Home);
        assert_eq!(out.last_color, Some(Color::White));
    }

    #[test]
    fn navigate_to_config_and_back() {
        let mut panel = init();
        let mut lines = Lines::idle();
        let clock = ManualClock(Cell::new(100));
        let mut out = FrameCounter::default();
        panel.render_tick(&ready(), &mut out);

        press(&mut panel, &mut lines, &clock, Line::EncoderClick);
        panel.render_tick(&ready(), &mut out);
        assert_eq!(panel.ui.screen(), Screen::Config);
        assert_eq!(out.last_color, Some(Color::Cyan));

        press(&mut panel, &mut lines, &clock, Line::Back);
        panel.render_tick(&ready(), &mut out);
        assert_eq!(panel.ui.screen(), Screen::Home);
    }

    #[test]
    fn start_shortcut_wins_over_menu_position() {
        let mut panel = init();
        let mut lines = Lines::idle();
        let clock = ManualClock(Cell::new(100));
        let mut out = FrameCounter::default();
        panel.render_tick(&ready(), &mut out);

        for _ in 0..4 {
            detent_right(&mut panel, &mut lines, &clock);
        }
        press(&mut panel, &mut lines, &clock, Line::Start);

        // All five events drained and applied in one UI period
        assert_eq!(panel.render_tick(&ready(), &mut out), 5);
        assert_eq!(panel.ui.screen(), Screen::Running);
        assert_eq!(panel.ui.menu_index(), 2);
    }

    #[test]
    fn free_functions_share_only_the_queue() {
        let Panel {
            mut sampler,
            mut ui,
            mut queue,
        } = init();
        let mut lines = Lines::idle();
        let clock = ManualClock(Cell::new(500));
        let mut out = FrameCounter::default();

        lines.set(Line::Start, false);
        sample_tick(&mut sampler, &mut lines, &clock, &mut queue);
        assert!(queue.is_empty());
        clock.advance(35);
        sample_tick(&mut sampler, &mut lines, &clock, &mut queue);
        assert_eq!(queue.len(), 1);

        let applied = render_tick(&mut ui, queue.take_all(), &ready(), &mut out);
        assert_eq!(applied, 1);
        assert_eq!(ui.screen(), Screen::Running);
        assert!(queue.is_empty());
    }

    #[test]
    fn render_tick_draws_once_with_no_events() {
        let mut ui = UiContext::new();
        let mut out = FrameCounter::default();
        let applied = render_tick(&mut ui, core::iter::empty(), &ready(), &mut out);
        assert_eq!(applied, 0);
        assert_eq!(out.frames, 1);
    }
}
