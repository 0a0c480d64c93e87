use core::cell::RefCell;

/// Read-only query of the runtime layer activation state.
///
/// The morph core never owns this state; it receives the capability and
/// samples it at dispatch time. Tests inject a plain [`LayerState`], the
/// firmware shares its own state behind a `RefCell`.
pub trait LayerQuery {
    /// Whether the given layer is active right now.
    fn is_layer_active(&self, layer: u8) -> bool;
}

/// Current activation state of each layer.
pub struct LayerState<const NUM_LAYER: usize> {
    layer_state: [bool; NUM_LAYER],
}

impl<const NUM_LAYER: usize> Default for LayerState<NUM_LAYER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_LAYER: usize> LayerState<NUM_LAYER> {
    pub const fn new() -> Self {
        Self {
            layer_state: [false; NUM_LAYER],
        }
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return;
        }
        self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
    }

    /// The highest active layer, if any.
    pub fn get_activated_layer(&self) -> Option<u8> {
        (0..NUM_LAYER).rev().find(|&idx| self.layer_state[idx]).map(|idx| idx as u8)
    }
}

impl<const NUM_LAYER: usize> LayerQuery for LayerState<NUM_LAYER> {
    fn is_layer_active(&self, layer: u8) -> bool {
        self.layer_state.get(layer as usize).copied().unwrap_or(false)
    }
}

impl<T: LayerQuery> LayerQuery for RefCell<T> {
    fn is_layer_active(&self, layer: u8) -> bool {
        self.borrow().is_layer_active(layer)
    }
}
