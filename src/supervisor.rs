//! System supervisor - boot sequencing and the system-level state.
//!
//! Runs at a slow fixed rate next to the input and UI activities:
//!
//! 1. `Boot` holds the splash for [`BOOT_SPLASH_MS`].
//! 2. `SelfTest` runs the injected checks once.
//! 3. Pass → `Idle` (the UI may leave the splash); fail → `Error` with
//!    [`SELF_TEST_ERROR_CODE`].
//!
//! The remaining states belong to the actuator controller and the serial
//! link, which live outside this crate; the supervisor leaves them alone.

use crate::config::{
    BOOT_SPLASH_MS, DEFAULT_FREQ_HZ, DEFAULT_SESSION_MIN, SELF_TEST_ERROR_CODE,
};
use crate::error::Error;
use crate::ui::render::PanelStatus;

/// System-level operating state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    Boot,
    SelfTest,
    Idle,
    Config,
    Running,
    Error,
    Shutdown,
}

/// Everything the supervisor knows about the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemContext {
    pub state: SystemState,
    pub error_code: u8,
    /// Frequency setpoint handed to the actuator controller (Hz).
    pub freq_setpoint_hz: u16,
    /// Amplitude setpoint (percent of full stroke).
    pub amplitude_pct: u8,
    /// Time spent in the current run (ms).
    pub run_time_ms: u32,
    /// Planned length of a run (ms).
    pub session_ms: u32,
    pub serial_connected: bool,
}

impl SystemContext {
    pub const fn new() -> Self {
        Self {
            state: SystemState::Boot,
            error_code: 0,
            freq_setpoint_hz: 0,
            amplitude_pct: 0,
            run_time_ms: 0,
            session_ms: DEFAULT_SESSION_MIN as u32 * 60_000,
            serial_connected: false,
        }
    }

    /// Snapshot for the UI.
    ///
    /// An unset setpoint shows the default frequency.
    pub fn status(&self) -> PanelStatus {
        let freq_hz = if self.freq_setpoint_hz == 0 {
            DEFAULT_FREQ_HZ
        } else {
            self.freq_setpoint_hz
        };
        PanelStatus {
            ready: !matches!(
                self.state,
                SystemState::Boot | SystemState::SelfTest | SystemState::Error
            ),
            freq_hz,
            session_min: u16::try_from(self.session_ms / 60_000).unwrap_or(u16::MAX),
            remaining_s: self.session_ms.saturating_sub(self.run_time_ms) / 1000,
            error_code: self.error_code,
        }
    }
}

impl Default for SystemContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Power-on checks run once during `SelfTest`.
pub trait SelfTest {
    fn run(&mut self) -> Result<(), Error>;
}

impl<F> SelfTest for F
where
    F: FnMut() -> Result<(), Error>,
{
    fn run(&mut self) -> Result<(), Error> {
        self()
    }
}

/// Drives [`SystemContext`] through boot and self-test.
#[derive(Clone, Debug)]
pub struct Supervisor {
    ctx: SystemContext,
    boot_started_ms: Option<u32>,
}

impl Supervisor {
    pub const fn new() -> Self {
        Self {
            ctx: SystemContext::new(),
            boot_started_ms: None,
        }
    }

    pub fn context(&self) -> &SystemContext {
        &self.ctx
    }

    pub fn state(&self) -> SystemState {
        self.ctx.state
    }

    /// Advance one supervisor period. Returns the state after the step.
    pub fn step<T: SelfTest>(&mut self, now_ms: u32, self_test: &mut T) -> SystemState {
        match self.ctx.state {
            SystemState::Boot => {
                let started = *self.boot_started_ms.get_or_insert(now_ms);
                if now_ms.wrapping_sub(started) >= BOOT_SPLASH_MS {
                    self.set_state(SystemState::SelfTest);
                }
            }
            SystemState::SelfTest => match self_test.run() {
                Ok(()) => self.set_state(SystemState::Idle),
                Err(e) => {
                    warn!("Self-test failed: {}", e);
                    self.ctx.error_code = SELF_TEST_ERROR_CODE;
                    self.set_state(SystemState::Error);
                }
            },
            // Safe-stop on Error and the run states are handled by the
            // actuator controller.
            _ => {}
        }
        self.ctx.state
    }

    fn set_state(&mut self, next: SystemState) {
        info!("System: {} -> {}", self.ctx.state, next);
        self.ctx.state = next;
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}
