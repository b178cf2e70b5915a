//! Hardware driver implementations
//!
//! This crate provides the drivers between the core panel logic and the
//! HAL traits:
//!
//! - Shift register frame writer (bit-banged latch/clock/data)
//! - 4-digit display multiplexer
//! - Debounce-free button sampling (polarity handling only)
//!
//! Everything is generic over `tessera-hal` traits, so the drivers are
//! exercised against mock pins on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod multiplexer;
pub mod shift_register;

#[cfg(test)]
pub(crate) mod testutil;
