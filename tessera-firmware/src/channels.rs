//! Shared state between tasks
//!
//! The clock counter is written by the 1 Hz tick task and reset/read by
//! the panel loop. It sits behind a blocking critical-section mutex; every
//! holder does a handful of integer operations inside the lock and nothing
//! else (no rendering, no I/O).

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use tessera_core::clock::ClockCounter;

/// Elapsed clock, advanced at 1 Hz, reset from the panel loop
pub static CLOCK: Mutex<CriticalSectionRawMutex, RefCell<ClockCounter>> =
    Mutex::new(RefCell::new(ClockCounter::new()));
