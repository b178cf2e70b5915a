//! RP2040 implementations of the Tessera HAL traits
//!
//! Thin adapters over embassy-rp peripherals. The firmware constructs the
//! embassy pins and ADC, wraps them here, and hands them to the generic
//! drivers.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

pub use adc::PanelAdc;
pub use gpio::{PanelInput, PanelOutput};
