use embassy_time::Instant;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// One physical key actuation edge.
///
/// Position and timestamp are carried through dispatch untouched; whichever
/// binding is selected sees the event exactly as it was captured.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    /// true on the press edge, false on the release edge
    pub pressed: bool,
    /// Milliseconds since boot at capture time
    pub timestamp: u64,
}

impl KeyEvent {
    /// Capture an event at the current instant.
    pub fn new(row: u8, col: u8, pressed: bool) -> Self {
        Self {
            row,
            col,
            pressed,
            timestamp: Instant::now().as_millis(),
        }
    }
}

/// A key event already routed to a layer-morph instance by the keymap.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MorphEvent {
    /// Index of the targeted instance in the morph registry.
    pub index: u8,
    pub key: KeyEvent,
}
