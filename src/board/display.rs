//! SSD1306 OLED display wrapper.
//!
//! The screens are laid out on a 240 × 200 logical canvas; this adapter
//! scales coordinates down to the 128 × 64 panel and maps every non-black
//! colour to "pixel on".

use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_4X6;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use vibtable_panel::ui::render::{LAYOUT_HEIGHT, LAYOUT_WIDTH};
use vibtable_panel::{Color, Error, Renderer};

const PANEL_WIDTH: i32 = 128;
const PANEL_HEIGHT: i32 = 64;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_4X6)
        .text_color(color)
        .build()
}

/// [`Renderer`] on the OLED frame buffer.
pub struct OledRenderer<I2C> {
    display: Display<I2C>,
    color: BinaryColor,
}

impl<I2C> OledRenderer<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>) -> Self {
        Self {
            display,
            color: BinaryColor::On,
        }
    }
}

impl<I2C> Renderer for OledRenderer<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn set_color(&mut self, color: Color) {
        self.color = match color {
            Color::Black => BinaryColor::Off,
            _ => BinaryColor::On,
        };
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let at = Point::new(x * PANEL_WIDTH / LAYOUT_WIDTH, y * PANEL_HEIGHT / LAYOUT_HEIGHT);
        let _ = Text::with_baseline(text, at, text_style(self.color), Baseline::Top)
            .draw(&mut self.display);
    }

    fn flush(&mut self) {
        if self.display.flush().is_err() {
            warn!("Display: {}", Error::Display);
        }
    }
}
