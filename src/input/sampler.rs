//! The periodic input sampler.
//!
//! One [`InputSampler::tick`] per sample period: encoder first, then the
//! buttons in [`Line::BUTTONS`] order. Events from the same tick reach the
//! sink in that order.

use super::button::ButtonState;
use super::encoder::EncoderState;
use super::{EventSink, GpioReader, InputEvent, Line};

/// Owns all decode and debounce state for the front panel.
#[derive(Clone, Debug)]
pub struct InputSampler {
    encoder: EncoderState,
    buttons: [ButtonState; 3],
}

impl InputSampler {
    pub const fn new() -> Self {
        Self {
            encoder: EncoderState::new(),
            buttons: [
                ButtonState::new(Line::EncoderClick, InputEvent::EncoderClick),
                ButtonState::new(Line::Back, InputEvent::ButtonBack),
                ButtonState::new(Line::Start, InputEvent::ButtonStart),
            ],
        }
    }

    /// Sample every line once and push resulting events into `sink`.
    pub fn tick<G, S>(&mut self, gpio: &mut G, now_ms: u32, sink: &mut S)
    where
        G: GpioReader,
        S: EventSink,
    {
        let a = gpio.read_level(Line::EncoderA);
        let b = gpio.read_level(Line::EncoderB);
        if let Some(evt) = self.encoder.update(a, b) {
            sink.push(evt);
        }

        for button in self.buttons.iter_mut() {
            let level = gpio.read_level(button.line());
            if let Some(evt) = button.update(level, now_ms) {
                sink.push(evt);
            }
        }
    }

    pub fn encoder(&self) -> &EncoderState {
        &self.encoder
    }

    pub fn buttons(&self) -> &[ButtonState; 3] {
        &self.buttons
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}
