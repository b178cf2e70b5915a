//! Tessera - Bench Panel Firmware
//!
//! Main firmware binary for RP2040-based boards driving a 4-digit
//! multiplexed 7-segment display through a 74HC595-style shift register.
//! Shows either an elapsed clock (MMSS) or the sampled voltage (X.XX),
//! toggled by a button; a second button resets the clock.
//!
//! Named after the Greek "tessera" meaning "four" - the panel's four
//! multiplexed digits.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use tessera_core::config::PanelConfig;
use tessera_core::voltage::VoltageTracker;
use tessera_drivers::button::Button;
use tessera_drivers::multiplexer::DisplayMultiplexer;
use tessera_drivers::shift_register::ShiftRegister;
use tessera_hal_rp2040::{PanelAdc, PanelInput, PanelOutput};

mod channels;
mod tasks;

use tasks::Panel;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tessera firmware starting...");

    let p = embassy_rp::init(Default::default());
    let config = PanelConfig::default();

    // Display lines to the shift register (latch, clock, data)
    let latch = PanelOutput::new(Output::new(p.PIN_2, Level::High));
    let sclk = PanelOutput::new(Output::new(p.PIN_3, Level::Low));
    let data = PanelOutput::new(Output::new(p.PIN_4, Level::Low));
    let frame_writer = ShiftRegister::new(latch, sclk, data);
    let display = DisplayMultiplexer::new(frame_writer, Delay, config.digit_dwell_us);

    // Buttons idle high, pressed shorts to ground
    let reset_button = Button::new_active_low(PanelInput::new(Input::new(p.PIN_14, Pull::Up)));
    let mode_button = Button::new_active_low(PanelInput::new(Input::new(p.PIN_15, Pull::Up)));

    // Potentiometer on ADC0
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let pot = Channel::new_pin(p.PIN_26, Pull::None);
    let probe = PanelAdc::new(adc, pot);

    let tracker = VoltageTracker::new(config.adc_vref_volts);

    info!("Peripherals initialized");

    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::panel_task(Panel {
            display,
            reset_button,
            mode_button,
            probe,
            tracker,
            config,
        }))
        .unwrap();

    info!("All tasks spawned, panel running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
