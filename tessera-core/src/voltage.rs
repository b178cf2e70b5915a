//! Voltage scaling and min/max tracking
//!
//! Scales normalized ADC samples to volts and keeps the running extrema.
//! The bounds only ever widen; min starts at full scale and max at zero so
//! the first sample collapses both onto itself.

/// Voltage sampler state
///
/// The extrema are retained for future consumers (a min/max readout mode
/// is not part of the current panel flow) but are traced by the firmware.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoltageTracker {
    full_scale: f32,
    min_observed: f32,
    max_observed: f32,
}

impl VoltageTracker {
    /// Create a tracker for a sensor with the given full-scale voltage
    /// (3.3 for the panel's ADC reference)
    pub fn new(full_scale: f32) -> Self {
        Self {
            full_scale,
            min_observed: full_scale,
            max_observed: 0.0,
        }
    }

    /// Scale a normalized sample in `[0.0, 1.0]` to volts, widen the
    /// observed bounds, and return the instantaneous voltage
    pub fn update(&mut self, sample: f32) -> f32 {
        let volts = sample * self.full_scale;
        self.min_observed = self.min_observed.min(volts);
        self.max_observed = self.max_observed.max(volts);
        volts
    }

    /// Lowest voltage seen so far
    pub fn min_observed(&self) -> f32 {
        self.min_observed
    }

    /// Highest voltage seen so far
    pub fn max_observed(&self) -> f32 {
        self.max_observed
    }
}
