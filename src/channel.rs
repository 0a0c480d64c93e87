//! Exposed channels which carry events into the morph processor and out to
//! the behavior queue.

use embassy_sync::channel::Channel;

use crate::event::MorphEvent;
use crate::queue::QueuedBehavior;
use crate::{BEHAVIOR_QUEUE_SIZE, MORPH_EVENT_CHANNEL_SIZE, RawMutex};

/// Channel for key events routed to morph instances
pub static MORPH_EVENT_CHANNEL: Channel<RawMutex, MorphEvent, MORPH_EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel backing the behavior execution queue
pub static BEHAVIOR_QUEUE_CHANNEL: Channel<RawMutex, QueuedBehavior, BEHAVIOR_QUEUE_SIZE> = Channel::new();
