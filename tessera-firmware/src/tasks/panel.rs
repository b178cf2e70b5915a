//! Panel control loop
//!
//! Polls the two buttons and the analog input, picks the frame to show
//! (elapsed clock or voltage), and runs one display refresh pass per
//! iteration. There are no recoverable error paths here: a stuck pin or a
//! saturated ADC degrades the displayed value, the loop never halts.

use defmt::*;
use embassy_time::{Delay, Timer};

use tessera_core::config::PanelConfig;
use tessera_core::frame::DisplayValue;
use tessera_core::voltage::VoltageTracker;
use tessera_drivers::button::Button;
use tessera_drivers::multiplexer::DisplayMultiplexer;
use tessera_hal::AnalogInput;
use tessera_hal_rp2040::{PanelAdc, PanelInput, PanelOutput};

use crate::channels::CLOCK;

/// Display stack as wired on the panel board
pub type PanelDisplay =
    DisplayMultiplexer<PanelOutput<'static>, PanelOutput<'static>, PanelOutput<'static>, Delay>;

/// Everything the panel loop owns
pub struct Panel {
    pub display: PanelDisplay,
    pub reset_button: Button<PanelInput<'static>>,
    pub mode_button: Button<PanelInput<'static>>,
    pub probe: PanelAdc<'static>,
    pub tracker: VoltageTracker,
    pub config: PanelConfig,
}

/// Panel task - the main control loop, runs forever
#[embassy_executor::task]
pub async fn panel_task(mut panel: Panel) {
    info!("Panel task started");

    loop {
        // Reset button: act, then hold the whole loop for the debounce
        // window. The display freezes for its duration, and a held button
        // re-triggers after each window - long-standing panel behavior.
        if panel.reset_button.is_pressed() {
            CLOCK.lock(|clock| clock.borrow_mut().reset());
            debug!("Clock reset");
            Timer::after_millis(panel.config.debounce_ms as u64).await;
        }

        // Sample the input and widen the observed bounds
        let volts = panel.tracker.update(panel.probe.read_normalized());
        trace!(
            "sample: {=f32} V (min {=f32}, max {=f32})",
            volts,
            panel.tracker.min_observed(),
            panel.tracker.max_observed()
        );

        // Pick the frame for this pass
        let frame = if panel.mode_button.is_pressed() {
            DisplayValue::volts(volts)
        } else {
            DisplayValue::clock(CLOCK.lock(|clock| clock.borrow().as_display_value()))
        };

        // One refresh pass; its four dwell slices are the only
        // per-iteration delay
        panel.display.render(&frame).await;
    }
}
