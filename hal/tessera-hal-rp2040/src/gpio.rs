//! GPIO adapters over embassy-rp

use embassy_rp::gpio::{Input, Output};
use tessera_hal::{InputPin, OutputPin};

/// Output pin adapter
pub struct PanelOutput<'d> {
    pin: Output<'d>,
}

impl<'d> PanelOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for PanelOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Input pin adapter
pub struct PanelInput<'d> {
    pin: Input<'d>,
}

impl<'d> PanelInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for PanelInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
