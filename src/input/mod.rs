//! Front-panel input subsystem - rotary encoder + three buttons.
//!
//! The sampler polls every input line at a fixed rate, decodes the
//! encoder quadrature signal, debounces the buttons, and pushes
//! semantic [`InputEvent`]s into an [`EventSink`].
//!
//! ## Components
//!
//! - **Encoder**: Gray-code transition table + per-detent accumulator
//! - **Buttons**: ENCODER CLICK, BACK, START (active-low, edge-triggered)

pub mod button;
pub mod encoder;
pub mod sampler;

use crate::error::{Error, SelfTestFailure};

/// Debounced, decoded user intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// One detent counter-clockwise.
    EncoderLeft,
    /// One detent clockwise.
    EncoderRight,
    /// Encoder push switch pressed.
    EncoderClick,
    /// BACK button pressed.
    ButtonBack,
    /// START button pressed.
    ButtonStart,
}

/// Physical input lines on the front panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Encoder phase A.
    EncoderA,
    /// Encoder phase B.
    EncoderB,
    /// Encoder push switch.
    EncoderClick,
    /// BACK button.
    Back,
    /// START button.
    Start,
}

impl Line {
    /// The three push-button lines, in sampling order.
    pub const BUTTONS: [Line; 3] = [Line::EncoderClick, Line::Back, Line::Start];
}

/// Raw digital line levels. `true` = high.
///
/// Implementations must be cheap enough to call every sample tick.
pub trait GpioReader {
    fn read_level(&mut self, line: Line) -> bool;
}

/// Monotonic millisecond clock. Wraps at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Destination for events produced by the sampler.
pub trait EventSink {
    fn push(&mut self, event: InputEvent);
}

/// Power-on check that no push button is held (or shorted) low.
pub fn check_buttons_released<G: GpioReader>(gpio: &mut G) -> Result<(), Error> {
    if Line::BUTTONS.iter().any(|&line| !gpio.read_level(line)) {
        return Err(SelfTestFailure::InputStuck.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(fn(Line) -> bool);

    impl GpioReader for Fixed {
        fn read_level(&mut self, line: Line) -> bool {
            (self.0)(line)
        }
    }

    #[test]
    fn released_buttons_pass() {
        // Encoder lines may sit at either level
        let mut gpio = Fixed(|line| !matches!(line, Line::EncoderA | Line::EncoderB));
        assert_eq!(check_buttons_released(&mut gpio), Ok(()));
    }

    #[test]
    fn held_button_fails() {
        let mut gpio = Fixed(|line| line != Line::Back);
        assert_eq!(
            check_buttons_released(&mut gpio),
            Err(Error::SelfTest(SelfTestFailure::InputStuck))
        );
    }
}
