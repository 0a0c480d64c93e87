#![no_std]

//! Layer-morph key behavior for keyboard firmware.
//!
//! A layer morph routes one physical key to one of two pre-bound actions:
//! the normal binding, or the morphed binding while any of its trigger
//! layers is active. The layer state is sampled independently for the press
//! and the release edge, then the selected binding is forwarded to the
//! behavior execution queue together with the original event.

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod action;
pub mod channel;
pub mod config;
pub mod event;
pub mod keycode;
pub mod layer;
pub mod layout_macro;
pub mod morph;
pub mod processor;
pub mod queue;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Mutex type used by the channels in this crate.
pub type RawMutex = CriticalSectionRawMutex;

/// Capacity of the routed key event channel.
pub const MORPH_EVENT_CHANNEL_SIZE: usize = 16;
/// Capacity of the behavior queue channel.
pub const BEHAVIOR_QUEUE_SIZE: usize = 16;
