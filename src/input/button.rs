//! Polled push-button debouncing.
//!
//! Buttons are active-low with pull-ups. A raw level that differs from
//! the debounced level is accepted only once it has held for more than
//! [`BUTTON_DEBOUNCE_MS`]; if it flips back earlier it is treated as
//! contact bounce and silently dropped (not queued, not retried). An
//! event fires only on an accepted high→low edge, never while the button
//! is held.

use super::{InputEvent, Line};
use crate::config::BUTTON_DEBOUNCE_MS;

/// Debounce state for one physical button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    line: Line,
    event: InputEvent,
    last_level: bool,
    last_change_ms: u32,
    /// When the raw level first started to differ from `last_level`.
    differing_since: Option<u32>,
}

impl ButtonState {
    /// A released button (line high) that last changed at t = 0.
    pub const fn new(line: Line, event: InputEvent) -> Self {
        Self {
            line,
            event,
            last_level: true,
            last_change_ms: 0,
            differing_since: None,
        }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn is_pressed(&self) -> bool {
        !self.last_level
    }

    /// Time of the last accepted level change.
    pub fn last_change_ms(&self) -> u32 {
        self.last_change_ms
    }

    /// Feed one raw sample taken at `now_ms`.
    pub fn update(&mut self, level: bool, now_ms: u32) -> Option<InputEvent> {
        if level == self.last_level {
            self.differing_since = None;
            return None;
        }

        let since = *self.differing_since.get_or_insert(now_ms);
        if now_ms.wrapping_sub(since) <= BUTTON_DEBOUNCE_MS {
            return None;
        }

        self.last_level = level;
        self.last_change_ms = now_ms;
        self.differing_since = None;

        if level {
            None
        } else {
            debug!("Button: {}", self.event);
            Some(self.event)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: bool = false;
    const HIGH: bool = true;

    fn back() -> ButtonState {
        ButtonState::new(Line::Back, InputEvent::ButtonBack)
    }

    /// Hold `level` from `from` to `to` (inclusive) in 5 ms samples.
    fn hold(btn: &mut ButtonState, level: bool, from: u32, to: u32) -> usize {
        (from..=to)
            .step_by(5)
            .filter_map(|t| btn.update(level, t))
            .count()
    }

    #[test]
    fn starts_released() {
        let btn = back();
        assert!(!btn.is_pressed());
        assert_eq!(btn.line(), Line::Back);
    }

    #[test]
    fn clean_press_fires_once_after_window() {
        let mut btn = back();
        assert_eq!(btn.update(LOW, 100), None);
        assert_eq!(btn.update(LOW, 100 + BUTTON_DEBOUNCE_MS), None);
        assert_eq!(
            btn.update(LOW, 100 + BUTTON_DEBOUNCE_MS + 1),
            Some(InputEvent::ButtonBack)
        );
        assert_eq!(btn.last_change_ms(), 100 + BUTTON_DEBOUNCE_MS + 1);
        // Held for a while - no repeats
        assert_eq!(hold(&mut btn, LOW, 135, 400), 0);
        assert!(btn.is_pressed());
    }

    #[test]
    fn short_glitch_after_quiet_period_is_dropped() {
        let mut btn = back();
        assert_eq!(hold(&mut btn, HIGH, 0, 995), 0);
        assert_eq!(btn.update(LOW, 1000), None);
        assert_eq!(btn.update(HIGH, 1005), None);
        assert_eq!(hold(&mut btn, HIGH, 1010, 1200), 0);
        assert!(!btn.is_pressed());
    }

    #[test]
    fn bounces_restart_the_window() {
        let mut btn = back();
        // Two bounces within 10 ms, then settled low
        assert_eq!(btn.update(LOW, 100), None);
        assert_eq!(btn.update(HIGH, 105), None);
        assert_eq!(btn.update(LOW, 110), None);
        assert_eq!(btn.update(LOW, 140), None);
        assert_eq!(btn.update(LOW, 145), Some(InputEvent::ButtonBack));
    }

    #[test]
    fn release_emits_nothing() {
        let mut btn = back();
        assert_eq!(hold(&mut btn, LOW, 100, 150), 1);
        assert_eq!(hold(&mut btn, HIGH, 200, 250), 0);
        assert!(!btn.is_pressed());
    }

    #[test]
    fn release_bounce_does_not_refire() {
        let mut btn = back();
        assert_eq!(hold(&mut btn, LOW, 100, 150), 1);
        // Brief lift while held
        assert_eq!(btn.update(HIGH, 200), None);
        assert_eq!(btn.update(LOW, 205), None);
        assert_eq!(hold(&mut btn, LOW, 210, 300), 0);
        assert!(btn.is_pressed());
    }

    #[test]
    fn second_press_after_release_fires_again() {
        let mut btn = back();
        assert_eq!(hold(&mut btn, LOW, 100, 150), 1);
        assert_eq!(hold(&mut btn, HIGH, 200, 250), 0);
        assert_eq!(hold(&mut btn, LOW, 300, 350), 1);
    }

    #[test]
    fn survives_clock_wraparound() {
        let mut btn = back();
        assert_eq!(btn.update(LOW, u32::MAX - 10), None);
        assert_eq!(btn.update(LOW, 25), Some(InputEvent::ButtonBack));
    }
}
