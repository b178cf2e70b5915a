//! Shift register frame writer
//!
//! Bit-bangs two bytes into a 74HC595-style latch-and-shift display
//! controller over three GPIO lines. The protocol is SPI-like with no
//! acknowledgment: a stuck data or clock line just produces a wrong or
//! blank display, nothing is observable at this layer.

use tessera_hal::OutputPin;

/// Driver for a latch-and-shift display controller
///
/// Owns the three output lines. Between frames the latch idles high and
/// the clock low.
pub struct ShiftRegister<L, C, D> {
    latch: L,
    clock: C,
    data: D,
}

impl<L, C, D> ShiftRegister<L, C, D>
where
    L: OutputPin,
    C: OutputPin,
    D: OutputPin,
{
    /// Create the driver and put the lines into their idle state
    pub fn new(latch: L, clock: C, data: D) -> Self {
        let mut sr = Self { latch, clock, data };
        sr.latch.set_high();
        sr.clock.set_low();
        sr.data.set_low();
        sr
    }

    /// Shift one byte out, most significant bit first
    fn shift_out(&mut self, byte: u8) {
        for i in (0..8).rev() {
            self.data.set_state((byte >> i) & 0x01 == 1);
            self.clock.set_high();
            self.clock.set_low();
        }
    }

    /// Write one display frame
    ///
    /// Drops the latch, shifts the segment byte then the digit-select
    /// byte, and raises the latch to commit both to the output pins
    /// atomically.
    pub fn write_frame(&mut self, segments: u8, digit_select: u8) {
        self.latch.set_low();
        self.shift_out(segments);
        self.shift_out(digit_select);
        self.latch.set_high();
    }
}
