use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use keymorph::config::{MorphDecl, MorphsConfig};
use keymorph::event::KeyEvent;
use keymorph::queue::QueuedBehavior;
use keymorph::{k, shifted};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub type TestQueue<const N: usize> = Channel<CriticalSectionRawMutex, QueuedBehavior, N>;

pub fn key_event(row: u8, col: u8, pressed: bool, timestamp: u64) -> KeyEvent {
    KeyEvent {
        row,
        col,
        pressed,
        timestamp,
    }
}

/// Drain everything the dispatcher forwarded to the queue.
pub fn drain<const N: usize>(queue: &TestQueue<N>) -> Vec<QueuedBehavior> {
    let mut entries = Vec::new();
    while let Ok(entry) = queue.try_receive() {
        entries.push(entry);
    }
    entries
}

/// Two-instance registry used across the tests:
/// morph 0 morphs `.` into `,` while layer 1 is held,
/// morph 1 morphs `a` into `A` while layer 1 or 2 is held.
pub fn test_morphs_config() -> MorphsConfig {
    MorphsConfig::from_decls(&[
        MorphDecl {
            bindings: &[k!(Dot), k!(Comma)],
            layers: &[1],
        },
        MorphDecl {
            bindings: &[k!(A), shifted!(A)],
            layers: &[1, 2],
        },
    ])
    .expect("test morph config is valid")
}
