//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters, and UI limits live here so
//! they can be tuned in one place.

// Scheduling

/// Input sampling period (ms). 5 ms = 200 Hz.
pub const SAMPLE_PERIOD_MS: u64 = 5;

/// Render / event-consumption period (ms). 40 ms = 25 FPS.
pub const RENDER_PERIOD_MS: u64 = 40;

/// Supervisor period (ms).
pub const SUPERVISOR_PERIOD_MS: u64 = 100;

// Input decoding

/// Button debounce window (ms). A level change is accepted only once
/// more than this has elapsed since the last accepted change.
pub const BUTTON_DEBOUNCE_MS: u32 = 30;

/// Quadrature steps per mechanical detent.
pub const STEPS_PER_DETENT: i32 = 4;

/// Capacity of the sampler → UI event queue.
///
/// At 25 FPS the UI drains every 40 ms, i.e. every 8 sample ticks, and a
/// tick emits at most 4 events.
pub const EVENT_QUEUE_CAPACITY: usize = 16;

// UI

/// Number of entries in the Home menu.
pub const MENU_MAX_ITEMS: usize = 3;

/// How long the splash stays up before the self-test runs (ms).
pub const BOOT_SPLASH_MS: u32 = 1500;

/// Error code recorded when the power-on self-test fails.
pub const SELF_TEST_ERROR_CODE: u8 = 1;

// Session defaults shown on the Home / Running screens

/// Default vibration frequency setpoint (Hz).
pub const DEFAULT_FREQ_HZ: u16 = 50;

/// Default session length (minutes).
pub const DEFAULT_SESSION_MIN: u16 = 10;

// GPIO pin assignments (nRF52840-DK defaults)
//
// The library only knows logical `Line`s; the concrete
// `embassy_nrf::peripherals::*` pins are picked in `main.rs`.
//
//   Encoder A        → P0.03 (external pull-up)
//   Encoder B        → P0.04 (external pull-up)
//   Encoder click    → P0.11 (internal pull-up, active-low)
//   Button BACK      → P0.12 (internal pull-up, active-low)
//   Button START     → P0.24 (internal pull-up, active-low)
//   I²C SDA          → P0.26
//   I²C SCL          → P0.27
