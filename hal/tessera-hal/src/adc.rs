//! Analog input abstraction
//!
//! A single-channel sampling trait. The panel only ever needs a normalized
//! reading; the raw counts and resolution are exposed so implementations
//! with different ADC widths still normalize correctly.

/// Analog input channel
pub trait AnalogInput {
    /// Read the raw ADC counts for one conversion
    fn read_raw(&mut self) -> u16;

    /// Full-scale raw value (4095 for a 12-bit converter)
    fn full_scale(&self) -> u16 {
        4095
    }

    /// Read one sample normalized to `[0.0, 1.0]`
    fn read_normalized(&mut self) -> f32 {
        let raw = self.read_raw().min(self.full_scale());
        raw as f32 / self.full_scale() as f32
    }
}
