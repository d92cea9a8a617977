//! Vibration-table front panel firmware (nRF52840).
//!
//! Three Embassy tasks:
//!
//! - `sample_task`     200 Hz - encoder + buttons → event queue
//! - `ui_task`          25 Hz - event queue → screen state → OLED
//! - `supervisor_task`  10 Hz - boot splash, self-test, status snapshot
//!
//! The event queue is the only state shared between sampling and UI.

#![no_std]
#![no_main]

mod board;

use core::cell::RefCell;

use board::display::{self, OledRenderer};
use board::pins::{PanelPins, UptimeClock};
use board::{QueueSink, SharedQueue};
use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use vibtable_panel::config::{RENDER_PERIOD_MS, SAMPLE_PERIOD_MS, SUPERVISOR_PERIOD_MS};
use vibtable_panel::error::SelfTestFailure;
use vibtable_panel::input::check_buttons_released;
use vibtable_panel::input::sampler::InputSampler;
use vibtable_panel::supervisor::Supervisor;
use vibtable_panel::{Clock, Error, PanelQueue, PanelStatus, UiContext};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Sampler → UI events.
static EVENTS: SharedQueue = Mutex::new(RefCell::new(PanelQueue::new()));

/// Supervisor → UI status snapshots (latest wins).
static STATUS: Signal<CriticalSectionRawMutex, PanelStatus> = Signal::new();

type Oled = OledRenderer<Twim<'static, TWISPI0>>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    info!("Initializing front panel...");

    let mut pins = PanelPins {
        enc_a: Input::new(p.P0_03, Pull::None),
        enc_b: Input::new(p.P0_04, Pull::None),
        enc_click: Input::new(p.P0_11, Pull::Up),
        back: Input::new(p.P0_12, Pull::Up),
        start: Input::new(p.P0_24, Pull::Up),
    };
    let inputs_ok = check_buttons_released(&mut pins);

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let (display, display_ok) = match display::init(i2c) {
        Ok(d) => (Some(OledRenderer::new(d)), Ok(())),
        Err(e) => {
            defmt::error!("Display init failed: {}", e);
            (None, Err(Error::from(SelfTestFailure::Display)))
        }
    };

    unwrap!(spawner.spawn(sample_task(pins)));
    unwrap!(spawner.spawn(supervisor_task(display_ok.and(inputs_ok))));
    if let Some(display) = display {
        unwrap!(spawner.spawn(ui_task(display)));
    }

    info!("Front panel started.");
}

#[embassy_executor::task]
async fn sample_task(mut pins: PanelPins) {
    let mut sampler = InputSampler::new();
    let mut sink = QueueSink(&EVENTS);
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        vibtable_panel::sample_tick(&mut sampler, &mut pins, &UptimeClock, &mut sink);
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn ui_task(mut oled: Oled) {
    let mut ui = UiContext::new();
    let mut status = PanelStatus::default();
    let mut ticker = Ticker::every(Duration::from_millis(RENDER_PERIOD_MS));

    loop {
        if let Some(latest) = STATUS.try_take() {
            status = latest;
        }
        let events = EVENTS.lock(|q| q.borrow_mut().take_all());
        vibtable_panel::render_tick(&mut ui, events, &status, &mut oled);
        ticker.next().await;
    }
}

#[embassy_executor::task]
async fn supervisor_task(checks: Result<(), Error>) {
    let mut supervisor = Supervisor::new();
    let mut self_test = move || checks;
    let mut ticker = Ticker::every(Duration::from_millis(SUPERVISOR_PERIOD_MS));

    loop {
        supervisor.step(UptimeClock.now_ms(), &mut self_test);
        STATUS.signal(supervisor.context().status());
        ticker.next().await;
    }
}
