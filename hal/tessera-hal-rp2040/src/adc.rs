//! ADC adapter over embassy-rp
//!
//! Blocking single-channel reads. The RP2040 ADC is 12-bit, matching the
//! trait's default full scale.

use embassy_rp::adc::{Adc, Blocking, Channel};
use tessera_hal::AnalogInput;

/// Blocking ADC channel adapter
pub struct PanelAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> PanelAdc<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for PanelAdc<'_> {
    fn read_raw(&mut self) -> u16 {
        // A conversion fault degrades to a zero reading; the panel has no
        // error path, a bad sample only distorts the displayed value.
        self.adc.blocking_read(&mut self.channel).unwrap_or(0)
    }
}
