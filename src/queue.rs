use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Duration;

use crate::action::KeyAction;
use crate::event::KeyEvent;

/// One entry of the behavior execution queue: invoke `binding` for the edge
/// carried by `event`, after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QueuedBehavior {
    pub binding: KeyAction,
    pub event: KeyEvent,
    pub delay: Duration,
}

/// Error returned by the queue when an entry cannot be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnqueueError {
    /// The queue is at capacity, the entry was not accepted.
    QueueFull,
}

/// Enqueue contract of the behavior execution queue.
///
/// Implementations must be bounded and non-blocking. Per-device ordering
/// and the actual execution of the queued binding belong to the queue.
pub trait BehaviorEnqueue {
    fn enqueue(&self, binding: KeyAction, event: KeyEvent, delay: Duration) -> Result<(), EnqueueError>;
}

impl<M: RawMutex, const N: usize> BehaviorEnqueue for Channel<M, QueuedBehavior, N> {
    fn enqueue(&self, binding: KeyAction, event: KeyEvent, delay: Duration) -> Result<(), EnqueueError> {
        self.try_send(QueuedBehavior { binding, event, delay })
            .map_err(|_| EnqueueError::QueueFull)
    }
}
