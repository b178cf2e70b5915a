//! Embassy async tasks
//!
//! Each task runs independently; the clock state is shared through
//! `crate::channels`.

pub mod panel;
pub mod tick;

pub use panel::{panel_task, Panel};
pub use tick::tick_task;
