//! Button sampling
//!
//! Logical "pressed" from an electrical level. The panel's buttons are
//! wired active-low (pulled up, pressed shorts to ground); the polarity is
//! explicit so a board with active-high wiring only changes a constructor.
//!
//! Debounce is the caller's concern: the panel loop blocks for a fixed
//! window after acting on a press.

use tessera_hal::InputPin;

/// Momentary push button
pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin LOW
    active_low: bool,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button wired to ground with a pull-up (pressed reads low)
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Button wired to supply with a pull-down (pressed reads high)
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Sample the button once
    pub fn is_pressed(&self) -> bool {
        if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        }
    }
}
