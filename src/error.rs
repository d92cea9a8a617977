//! Unified error type for the firmware integration layer.
//!
//! The input and UI core is infallible: bounced transitions and
//! unmatched events are no-ops. Errors only come from the hardware
//! around it. We avoid `alloc` - all variants carry fixed-size data.

/// Top-level error type used by the board adapters and self-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed (init or flush).
    Display,

    /// A power-on self-test check failed.
    SelfTest(SelfTestFailure),
}

/// Which self-test check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelfTestFailure {
    /// The display did not come up.
    Display,
    /// An input line is stuck in its active state.
    InputStuck,
}

impl From<SelfTestFailure> for Error {
    fn from(e: SelfTestFailure) -> Self {
        Error::SelfTest(e)
    }
}
