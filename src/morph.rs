use embassy_time::Duration;
use heapless::Vec;

use crate::action::KeyAction;
use crate::event::KeyEvent;
use crate::layer::LayerQuery;
use crate::queue::{BehaviorEnqueue, EnqueueError};

/// Max number of layer morph behaviors
pub const MORPH_MAX_NUM: usize = 16;
/// Max number of trigger layers per morph
pub const MORPH_MAX_LAYERS: usize = 8;

/// Rejection of an invalid morph declaration at startup.
///
/// Fatal to the declared instance set, never patched up by truncating or
/// padding the declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MorphConfigError {
    /// A morph takes exactly two bindings; the declaration supplied this many.
    BindingCount(usize),
    /// The trigger layer list is empty.
    NoTriggerLayers,
    /// The trigger layer list exceeds `MORPH_MAX_LAYERS`.
    TooManyTriggerLayers,
    /// The declaration list exceeds `MORPH_MAX_NUM`.
    TooManyMorphs,
}

/// One layer-morph behavior: a key that emits `normal_binding`, or
/// `morphed_binding` while any of `trigger_layers` is active.
///
/// Immutable once constructed. Duplicate trigger layers are tolerated, the
/// check is any-of.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerMorph {
    pub(crate) normal_binding: KeyAction,
    pub(crate) morphed_binding: KeyAction,
    pub(crate) trigger_layers: Vec<u8, MORPH_MAX_LAYERS>,
}

impl LayerMorph {
    pub fn new(
        normal_binding: KeyAction,
        morphed_binding: KeyAction,
        trigger_layers: &[u8],
    ) -> Result<Self, MorphConfigError> {
        if trigger_layers.is_empty() {
            return Err(MorphConfigError::NoTriggerLayers);
        }
        let trigger_layers =
            Vec::from_slice(trigger_layers).map_err(|_| MorphConfigError::TooManyTriggerLayers)?;
        Ok(Self {
            normal_binding,
            morphed_binding,
            trigger_layers,
        })
    }

    /// Build from the raw binding list of a declaration. The list must hold
    /// exactly the normal and the morphed binding, in that order.
    pub fn from_bindings(
        bindings: &[KeyAction],
        trigger_layers: &[u8],
    ) -> Result<Self, MorphConfigError> {
        match bindings {
            [normal, morphed] => Self::new(*normal, *morphed, trigger_layers),
            _ => Err(MorphConfigError::BindingCount(bindings.len())),
        }
    }

    pub fn normal_binding(&self) -> KeyAction {
        self.normal_binding
    }

    pub fn morphed_binding(&self) -> KeyAction {
        self.morphed_binding
    }

    pub fn trigger_layers(&self) -> &[u8] {
        &self.trigger_layers
    }

    fn is_any_layer_active(&self, layers: &impl LayerQuery) -> bool {
        self.trigger_layers.iter().any(|layer| layers.is_layer_active(*layer))
    }

    /// Pick the binding for the current layer state.
    pub fn select(&self, layers: &impl LayerQuery) -> KeyAction {
        if self.is_any_layer_active(layers) {
            self.morphed_binding
        } else {
            self.normal_binding
        }
    }

    /// Route one key edge to the selected binding.
    ///
    /// The layer state is sampled at this call. Press and release are
    /// evaluated independently, so a layer change while the key is held
    /// splits the pair across the two bindings.
    ///
    /// The queue's result is returned unchanged; a rejected edge is not
    /// retried and never falls back to the other binding.
    pub fn dispatch<L: LayerQuery, Q: BehaviorEnqueue>(
        &self,
        event: KeyEvent,
        layers: &L,
        queue: &Q,
    ) -> Result<(), EnqueueError> {
        queue.enqueue(self.select(layers), event, Duration::from_ticks(0))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::k;
    use crate::layer::LayerState;

    #[test]
    fn test_binding_count_is_exactly_two() {
        assert_eq!(
            LayerMorph::from_bindings(&[], &[1]),
            Err(MorphConfigError::BindingCount(0))
        );
        assert_eq!(
            LayerMorph::from_bindings(&[k!(A)], &[1]),
            Err(MorphConfigError::BindingCount(1))
        );
        assert_eq!(
            LayerMorph::from_bindings(&[k!(A), k!(B), k!(C)], &[1]),
            Err(MorphConfigError::BindingCount(3))
        );
        assert!(LayerMorph::from_bindings(&[k!(A), k!(B)], &[1]).is_ok());
    }

    #[test]
    fn test_trigger_layers_must_be_non_empty() {
        assert_eq!(
            LayerMorph::new(k!(A), k!(B), &[]),
            Err(MorphConfigError::NoTriggerLayers)
        );
        assert_eq!(
            LayerMorph::new(k!(A), k!(B), &[0; MORPH_MAX_LAYERS + 1]),
            Err(MorphConfigError::TooManyTriggerLayers)
        );
    }

    #[test]
    fn test_select_follows_layer_state() {
        let morph = LayerMorph::new(k!(Dot), k!(Comma), &[1]).unwrap();
        let mut layers = LayerState::<4>::new();
        assert_eq!(morph.select(&layers), k!(Dot));
        layers.activate_layer(1);
        assert_eq!(morph.select(&layers), k!(Comma));
    }
}
