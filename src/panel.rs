//! Entry points driven by the scheduler.
//!
//! [`init`] builds the three owned pieces. The sampling activity calls
//! [`sample_tick`] every [`SAMPLE_PERIOD_MS`](crate::config::SAMPLE_PERIOD_MS);
//! the UI activity calls [`render_tick`] every
//! [`RENDER_PERIOD_MS`](crate::config::RENDER_PERIOD_MS). The queue is the
//! only thing the two share.

use crate::input::sampler::InputSampler;
use crate::input::{Clock, EventSink, GpioReader, InputEvent};
use crate::queue::PanelQueue;
use crate::ui::render::{self, PanelStatus, Renderer};
use crate::ui::UiContext;

/// Freshly initialised front-panel state.
pub struct Panel {
    /// Owned by the sampling activity.
    pub sampler: InputSampler,
    /// Owned by the UI activity.
    pub ui: UiContext,
    /// Shared between the two.
    pub queue: PanelQueue,
}

/// Initialise sampler, UI and queue.
pub fn init() -> Panel {
    Panel {
        sampler: InputSampler::new(),
        ui: UiContext::new(),
        queue: PanelQueue::new(),
    }
}

/// One sampling period: read every line, push resulting events.
pub fn sample_tick<G, C, S>(sampler: &mut InputSampler, gpio: &mut G, clock: &C, sink: &mut S)
where
    G: GpioReader,
    C: Clock,
    S: EventSink,
{
    sampler.tick(gpio, clock.now_ms(), sink);
}

/// One UI period: apply the pending events in arrival order, leave the
/// splash if the system is ready, then draw exactly one frame.
///
/// Events sampled while the splash was up are applied on the splash,
/// where they are inert.
///
/// Returns the number of events applied.
pub fn render_tick<I, R>(
    ui: &mut UiContext,
    events: I,
    status: &PanelStatus,
    renderer: &mut R,
) -> usize
where
    I: IntoIterator<Item = InputEvent>,
    R: Renderer,
{
    let mut applied = 0;
    for event in events {
        ui.apply(event);
        applied += 1;
    }

    if status.ready {
        ui.leave_splash();
    }

    render::draw(ui, status, renderer);
    applied
}

impl Panel {
    /// Single-threaded sampling step against the panel's own queue.
    pub fn sample_tick<G: GpioReader, C: Clock>(&mut self, gpio: &mut G, clock: &C) {
        sample_tick(&mut self.sampler, gpio, clock, &mut self.queue);
    }

    /// Single-threaded UI step draining the panel's own queue.
    pub fn render_tick<R: Renderer>(&mut self, status: &PanelStatus, renderer: &mut R) -> usize {
        let events = self.queue.take_all();
        render_tick(&mut self.ui, events, status, renderer)
    }
}
