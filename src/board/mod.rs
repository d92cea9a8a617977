//! Hardware adapters for the nRF52840 board.
//!
//! Implement the library's capability traits on top of Embassy:
//!
//! - **Pins**: `GpioReader` over `embassy_nrf::gpio::Input`
//! - **Clock**: `Clock` over `embassy_time::Instant`
//! - **Display**: `Renderer` over an SSD1306 128×64 OLED via I²C
//! - **Queue**: `EventSink` over the critical-section-guarded event queue

pub mod display;
pub mod pins;

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use vibtable_panel::{EventSink, InputEvent, PanelQueue};

/// The queue shared by the sampling and UI tasks.
pub type SharedQueue = Mutex<CriticalSectionRawMutex, RefCell<PanelQueue>>;

/// Producer handle: each push is one critical section.
pub struct QueueSink(pub &'static SharedQueue);

impl EventSink for QueueSink {
    fn push(&mut self, event: InputEvent) {
        self.0.lock(|q| q.borrow_mut().push(event));
    }
}
