use crate::channel::MORPH_EVENT_CHANNEL;
use crate::config::MorphsConfig;
use crate::event::MorphEvent;
use crate::layer::LayerQuery;
use crate::queue::BehaviorEnqueue;

/// Trait for tasks that process events in an endless loop.
pub trait Runnable {
    /// Run the processing loop.
    async fn run(&mut self);
}

/// Receives routed key events and forwards the selected binding of the
/// targeted morph instance to the behavior queue.
pub struct MorphProcessor<'a, L: LayerQuery, Q: BehaviorEnqueue> {
    config: &'a MorphsConfig,
    layer_state: &'a L,
    queue: &'a Q,
}

impl<'a, L: LayerQuery, Q: BehaviorEnqueue> MorphProcessor<'a, L, Q> {
    pub fn new(config: &'a MorphsConfig, layer_state: &'a L, queue: &'a Q) -> Self {
        Self {
            config,
            layer_state,
            queue,
        }
    }

    /// Handle one routed event. The edge is dropped when the instance is
    /// unknown or the queue rejects it.
    pub fn process(&self, event: MorphEvent) {
        let Some(morph) = self.config.get(event.index) else {
            warn!("No layer morph configured at index {}", event.index);
            return;
        };
        if let Err(e) = morph.dispatch(event.key, self.layer_state, self.queue) {
            warn!(
                "Dropped key edge at ({}, {}): {:?}",
                event.key.row, event.key.col, e
            );
        }
    }
}

impl<L: LayerQuery, Q: BehaviorEnqueue> Runnable for MorphProcessor<'_, L, Q> {
    async fn run(&mut self) {
        loop {
            let event = MORPH_EVENT_CHANNEL.receive().await;
            self.process(event);
        }
    }
}
