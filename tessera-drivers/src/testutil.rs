//! Host-side test doubles
//!
//! A behavioral model of the 74HC595-style display controller: three pin
//! handles share one chip cell, clock rising edges shift the data line in,
//! and a latch rising edge commits the 16-bit shift word to the outputs.

use core::cell::RefCell;
use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};

use heapless::Vec;
use tessera_hal::OutputPin;

/// Virtual latch-and-shift display controller
pub struct Hc595 {
    latch: bool,
    clock: bool,
    data: bool,
    shift: u16,
    output: u16,
    /// Every word committed by a latch rising edge, in order
    pub committed: Vec<u16, 16>,
}

impl Hc595 {
    pub fn new() -> RefCell<Self> {
        RefCell::new(Self {
            latch: true,
            clock: false,
            data: false,
            shift: 0,
            output: 0,
            committed: Vec::new(),
        })
    }

    /// Word currently on the output pins
    pub fn output(&self) -> u16 {
        self.output
    }
}

pub struct LatchPin<'a>(pub &'a RefCell<Hc595>);
pub struct ClockPin<'a>(pub &'a RefCell<Hc595>);
pub struct DataPin<'a>(pub &'a RefCell<Hc595>);

impl OutputPin for LatchPin<'_> {
    fn set_high(&mut self) {
        let mut chip = self.0.borrow_mut();
        if !chip.latch {
            chip.latch = true;
            let word = chip.shift;
            chip.output = word;
            chip.committed.push(word).unwrap();
        }
    }

    fn set_low(&mut self) {
        self.0.borrow_mut().latch = false;
    }

    fn is_set_high(&self) -> bool {
        self.0.borrow().latch
    }
}

impl OutputPin for ClockPin<'_> {
    fn set_high(&mut self) {
        let mut chip = self.0.borrow_mut();
        if !chip.clock {
            chip.clock = true;
            let bit = chip.data as u16;
            chip.shift = (chip.shift << 1) | bit;
        }
    }

    fn set_low(&mut self) {
        self.0.borrow_mut().clock = false;
    }

    fn is_set_high(&self) -> bool {
        self.0.borrow().clock
    }
}

impl OutputPin for DataPin<'_> {
    fn set_high(&mut self) {
        self.0.borrow_mut().data = true;
    }

    fn set_low(&mut self) {
        self.0.borrow_mut().data = false;
    }

    fn is_set_high(&self) -> bool {
        self.0.borrow().data
    }
}

/// Mock input pin with a settable level
pub struct MockInput(pub RefCell<bool>);

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self(RefCell::new(high))
    }

    pub fn set_level(&self, high: bool) {
        *self.0.borrow_mut() = high;
    }
}

impl tessera_hal::InputPin for &MockInput {
    fn is_high(&self) -> bool {
        *self.0.borrow()
    }
}

/// Delay that records every requested duration instead of waiting
pub struct RecordingDelay<'a>(pub &'a RefCell<Vec<u32, 16>>);

impl embedded_hal_async::delay::DelayNs for RecordingDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(ns).unwrap();
    }
}

/// Drive a future to completion on the host
///
/// The driver futures never yield pending (the recording delay resolves
/// immediately), so a no-op waker is enough.
pub fn block_on<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
