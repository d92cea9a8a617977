//! Front-panel GPIO lines and the uptime clock.
//!
//! Encoder A/B use the board's external pull-ups; the three buttons are
//! active-low with internal pull-ups.

use embassy_nrf::gpio::Input;
use embassy_time::Instant;
use vibtable_panel::{Clock, GpioReader, Line};

/// Input pins, one per [`Line`].
pub struct PanelPins {
    pub enc_a: Input<'static>,
    pub enc_b: Input<'static>,
    pub enc_click: Input<'static>,
    pub back: Input<'static>,
    pub start: Input<'static>,
}

impl GpioReader for PanelPins {
    fn read_level(&mut self, line: Line) -> bool {
        let pin = match line {
            Line::EncoderA => &self.enc_a,
            Line::EncoderB => &self.enc_b,
            Line::EncoderClick => &self.enc_click,
            Line::Back => &self.back,
            Line::Start => &self.start,
        };
        pin.is_high()
    }
}

/// Milliseconds since boot, truncated to `u32` (wraps after ~49 days).
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
