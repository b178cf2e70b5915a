//! Display frame decomposition
//!
//! A [`DisplayValue`] is the transient quantity handed to the multiplexer
//! each loop iteration: four decimal digits (leading zeros included) plus
//! an optional decimal point position.

/// Number of digit positions on the panel
pub const DIGIT_COUNT: usize = 4;

/// A four-digit value to render, with an optional decimal point
///
/// Values above 9999 alias on the thousands digit (the decomposition takes
/// each digit mod 10). Callers pre-clamp if wraparound is undesired; the
/// clock and voltage sources never exceed four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayValue {
    value: u16,
    decimal: Option<u8>,
}

impl DisplayValue {
    /// Frame a packed MMSS clock value, no decimal point
    pub fn clock(mmss: u16) -> Self {
        Self {
            value: mmss,
            decimal: None,
        }
    }

    /// Frame a voltage as X.XX
    ///
    /// The voltage is rendered in centivolts with the decimal point after
    /// the first digit, so 3.3 V reads "03.30".
    pub fn volts(volts: f32) -> Self {
        Self {
            value: (volts * 100.0 + 0.5) as u16,
            decimal: Some(1),
        }
    }

    /// Frame an arbitrary value with an explicit decimal position
    pub fn raw(value: u16, decimal: Option<u8>) -> Self {
        Self { value, decimal }
    }

    /// Decompose into four digits, left to right
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        [
            (self.value / 1000 % 10) as u8,
            (self.value / 100 % 10) as u8,
            (self.value / 10 % 10) as u8,
            (self.value % 10) as u8,
        ]
    }

    /// Whether the decimal point sits at the given digit position
    pub fn decimal_at(&self, position: u8) -> bool {
        self.decimal == Some(position)
    }
}
