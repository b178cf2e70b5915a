//! Elapsed clock counter
//!
//! A seconds/minutes counter advanced by the 1 Hz tick task and reset from
//! the panel loop. Minutes wrap silently at 100 - the display only has four
//! digits, so MMSS simply rolls over. That overflow is accepted, not an
//! error.

/// Elapsed minutes/seconds counter
///
/// `seconds` stays in `[0, 60)` and `minutes` in `[0, 100)`. Mutated only
/// by [`tick`](Self::tick) and [`reset`](Self::reset); both run inside the
/// firmware's clock critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockCounter {
    seconds: u8,
    minutes: u8,
}

impl ClockCounter {
    /// Create a counter at 00:00
    ///
    /// `const` so the counter can live in a static shared cell.
    pub const fn new() -> Self {
        Self {
            seconds: 0,
            minutes: 0,
        }
    }

    /// Advance by one second
    ///
    /// Seconds wrap to 0 at 60 and carry into minutes, which wrap at 100.
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes = (self.minutes + 1) % 100;
        }
    }

    /// Reset to 00:00 unconditionally
    pub fn reset(&mut self) {
        self.seconds = 0;
        self.minutes = 0;
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Pack as a four-digit MMSS value for rendering
    pub fn as_display_value(&self) -> u16 {
        self.minutes as u16 * 100 + self.seconds as u16
    }
}

impl Default for ClockCounter {
    fn default() -> Self {
        Self::new()
    }
}
