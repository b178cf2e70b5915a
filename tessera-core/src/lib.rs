//! Board-agnostic core logic for the Tessera panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - 7-segment digit encoding
//! - Elapsed clock counter (MMSS)
//! - Voltage scaling with min/max tracking
//! - Display frame decomposition
//! - Panel timing configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod config;
pub mod frame;
pub mod segment;
pub mod voltage;
