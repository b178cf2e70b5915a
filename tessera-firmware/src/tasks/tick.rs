//! Clock tick task
//!
//! The panel's periodic timing source: advances the shared clock counter
//! once per second. Stands in for the timer interrupt on boards where the
//! counter was ISR-driven; the critical section stays just as small.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::CLOCK;

/// Clock advance period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick task - advances the elapsed clock at 1 Hz
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(TICK_PERIOD);

    loop {
        ticker.next().await;

        // Increment and read only; rendering happens in the panel loop
        let mmss = CLOCK.lock(|clock| {
            let mut clock = clock.borrow_mut();
            clock.tick();
            clock.as_display_value()
        });

        trace!("tick: {=u16}", mmss);
    }
}
