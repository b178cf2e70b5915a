//! 4-digit display multiplexer
//!
//! The display has no per-digit memory: a digit is only lit while its frame
//! sits on the shift register outputs. A render pass therefore writes each
//! digit in turn and holds it for a fixed dwell; cycling all four fast
//! enough (well under 20 ms per pass) makes the readout look steady.

use embedded_hal_async::delay::DelayNs;
use tessera_core::frame::{DisplayValue, DIGIT_COUNT};
use tessera_core::segment;
use tessera_hal::OutputPin;

use crate::shift_register::ShiftRegister;

/// One-hot digit select lines, left to right
pub const DIGIT_SELECT: [u8; DIGIT_COUNT] = [0x01, 0x02, 0x04, 0x08];

/// Multiplexed 4-digit display driver
pub struct DisplayMultiplexer<L, C, D, DL> {
    frame_writer: ShiftRegister<L, C, D>,
    delay: DL,
    digit_dwell_us: u32,
}

impl<L, C, D, DL> DisplayMultiplexer<L, C, D, DL>
where
    L: OutputPin,
    C: OutputPin,
    D: OutputPin,
    DL: DelayNs,
{
    pub fn new(frame_writer: ShiftRegister<L, C, D>, delay: DL, digit_dwell_us: u32) -> Self {
        Self {
            frame_writer,
            delay,
            digit_dwell_us,
        }
    }

    /// Run one refresh pass over all four digits
    ///
    /// Encodes each digit (decimal point only at the frame's decimal
    /// position), writes it with its one-hot select, and dwells before
    /// advancing. Exactly four frames per call.
    pub async fn render(&mut self, value: &DisplayValue) {
        for (position, digit) in value.digits().into_iter().enumerate() {
            let pattern = segment::encode(digit, value.decimal_at(position as u8));
            self.frame_writer.write_frame(pattern, DIGIT_SELECT[position]);
            self.delay.delay_us(self.digit_dwell_us).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{block_on, ClockPin, DataPin, Hc595, LatchPin, RecordingDelay};
    use core::cell::RefCell;
    use heapless::Vec;

    const DWELL_US: u32 = 2_000;

    fn render_one(value: DisplayValue) -> (RefCell<Hc595>, RefCell<Vec<u32, 16>>) {
        let chip = Hc595::new();
        let delays = RefCell::new(Vec::new());
        let sr = ShiftRegister::new(LatchPin(&chip), ClockPin(&chip), DataPin(&chip));
        let mut mux = DisplayMultiplexer::new(sr, RecordingDelay(&delays), DWELL_US);

        block_on(mux.render(&value));
        drop(mux);
        (chip, delays)
    }

    #[test]
    fn four_frames_with_one_hot_selects() {
        let (chip, _) = render_one(DisplayValue::clock(0));

        let chip = chip.borrow();
        assert_eq!(chip.committed.len(), 4);
        let selects: Vec<u8, 4> = chip.committed.iter().map(|w| *w as u8).collect();
        assert_eq!(selects.as_slice(), &[0x01, 0x02, 0x04, 0x08]);
    }

    #[test]
    fn dwell_after_every_frame() {
        let (_, delays) = render_one(DisplayValue::clock(0));

        let delays = delays.borrow();
        assert_eq!(delays.len(), 4);
        for &ns in delays.iter() {
            assert_eq!(ns, DWELL_US * 1_000);
        }
    }

    #[test]
    fn clock_frame_renders_mmss() {
        // minutes=12, seconds=34 packs to 1234
        let (chip, _) = render_one(DisplayValue::clock(1234));

        let chip = chip.borrow();
        for (i, &digit) in [1u8, 2, 3, 4].iter().enumerate() {
            let expected = (segment::encode(digit, false) as u16) << 8 | DIGIT_SELECT[i] as u16;
            assert_eq!(chip.committed[i], expected);
        }
    }

    #[test]
    fn voltage_frame_renders_with_decimal_point() {
        let (chip, _) = render_one(DisplayValue::volts(3.30));

        let chip = chip.borrow();
        let digits = [0u8, 3, 3, 0];
        for (i, &digit) in digits.iter().enumerate() {
            let expected =
                (segment::encode(digit, i == 1) as u16) << 8 | DIGIT_SELECT[i] as u16;
            assert_eq!(chip.committed[i], expected);
        }
        // The decimal overlay must differ from the plain pattern
        assert_ne!(
            chip.committed[1] >> 8,
            (segment::encode(3, false)) as u16
        );
    }
}
