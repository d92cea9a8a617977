//! Bounded event queue between the sampling and rendering activities.
//!
//! Single producer (sampler), single consumer (UI). On overflow the
//! **oldest** pending event is dropped: a stale encoder step matters less
//! than the press the user just made. Drops are counted.
//!
//! The queue itself is not `Sync`; the firmware wraps it in a
//! critical-section mutex so each `push` and `take_all` is atomic with
//! respect to the other task.

use crate::config::EVENT_QUEUE_CAPACITY;
use crate::input::{EventSink, InputEvent};
use heapless::Deque;

/// Queue sized for the firmware's sample/render ratio.
pub type PanelQueue = EventQueue<EVENT_QUEUE_CAPACITY>;

/// FIFO of pending input events with drop-oldest overflow.
#[derive(Clone, Debug)]
pub struct EventQueue<const N: usize> {
    events: Deque<InputEvent, N>,
    dropped: u32,
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Enqueue, evicting the oldest event when full.
    pub fn push(&mut self, event: InputEvent) {
        if let Err(event) = self.events.push_back(event) {
            self.events.pop_front();
            self.dropped = self.dropped.saturating_add(1);
            warn!("Event queue full, dropped oldest (total {})", self.dropped);
            let _ = self.events.push_back(event);
        }
    }

    /// Oldest pending event.
    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    /// Move every pending event out in one step, leaving the queue empty.
    ///
    /// Keeps the consumer's critical section to a single swap.
    pub fn take_all(&mut self) -> EventBatch<N> {
        EventBatch {
            events: core::mem::replace(&mut self.events, Deque::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events evicted by overflow since start.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventSink for EventQueue<N> {
    fn push(&mut self, event: InputEvent) {
        EventQueue::push(self, event);
    }
}

/// Events taken from the queue, yielded oldest first.
#[derive(Clone, Debug)]
pub struct EventBatch<const N: usize> {
    events: Deque<InputEvent, N>,
}

impl<const N: usize> Iterator for EventBatch<N> {
    type Item = InputEvent;

    fn next(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.events.len(), Some(self.events.len()))
    }
}
