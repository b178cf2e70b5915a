//! Panel timing configuration
//!
//! Named constants for the panel's fixed timings, gathered in one struct so
//! the refresh rate and debounce window are tunable and testable
//! independently of hardware.

/// Panel configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Dwell time per digit during a refresh pass (µs)
    ///
    /// Four digits per pass; the pass must finish well under 20 ms to
    /// avoid visible flicker.
    pub digit_dwell_us: u32,
    /// Blocking debounce window after a reset press (ms)
    pub debounce_ms: u32,
    /// ADC full-scale reference voltage
    pub adc_vref_volts: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            digit_dwell_us: 2_000,
            debounce_ms: 200,
            adc_vref_volts: 3.3,
        }
    }
}
