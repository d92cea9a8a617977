//! Quadrature decoder for a mechanical rotary encoder.
//!
//! Each sample shifts the current (A, B) pair into a 4-bit history
//! register:
//! ```text
//! bit 3..2: previous (A, B)
//! bit 1..0: current  (A, B)
//! ```
//! The history indexes [`TRANSITION_TABLE`], which yields +1 / -1 for a
//! valid single-step Gray-code transition and 0 for "no change" or an
//! impossible jump (both lines changed at once = bounce or missed sample).
//!
//! The encoder produces four electrical steps per detent, so deltas are
//! accumulated and one event fires per full detent.

use super::InputEvent;
use crate::config::STEPS_PER_DETENT;

/// Step direction for every (previous, current) state pair.
pub const TRANSITION_TABLE: [i8; 16] = [
    0, -1, 1, 0, //
    1, 0, 0, -1, //
    -1, 0, 0, 1, //
    0, 1, -1, 0, //
];

/// Look up the step for a history value. Only the low 4 bits are used.
pub fn transition_delta(history: u8) -> i8 {
    TRANSITION_TABLE[usize::from(history & 0x0F)]
}

/// Decode state, owned by the sampler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderState {
    history: u8,
    accumulator: i32,
}

impl EncoderState {
    pub const fn new() -> Self {
        Self {
            history: 0,
            accumulator: 0,
        }
    }

    /// Feed one sample of the A/B lines.
    ///
    /// Returns an event when the accumulated steps reach one detent.
    pub fn update(&mut self, a: bool, b: bool) -> Option<InputEvent> {
        self.history = ((self.history << 2) | (u8::from(a) << 1) | u8::from(b)) & 0x0F;

        let delta = transition_delta(self.history);
        if delta == 0 {
            return None;
        }

        self.accumulator += i32::from(delta);

        if self.accumulator >= STEPS_PER_DETENT {
            self.accumulator = 0;
            debug!("Encoder: right");
            Some(InputEvent::EncoderRight)
        } else if self.accumulator <= -STEPS_PER_DETENT {
            self.accumulator = 0;
            debug!("Encoder: left");
            Some(InputEvent::EncoderLeft)
        } else {
            None
        }
    }

    pub fn history(&self) -> u8 {
        self.history
    }

    /// Sub-detent step count since the last emitted event.
    pub fn accumulator(&self) -> i32 {
        self.accumulator
    }
}
