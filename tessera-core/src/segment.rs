//! 7-segment digit encoding
//!
//! The display is active-low: a pattern bit of 0 turns the corresponding
//! segment on. Patterns are stored pre-inverted so the driver can shift
//! them out unchanged.

/// Active-low segment patterns for digits 0-9
///
/// Bit layout is the standard 7-segment order `dp g f e d c b a`
/// (bit 0 = segment A, bit 7 = decimal point).
const SEGMENT_PATTERNS: [u8; 10] = [
    !0x3F, // 0: A B C D E F
    !0x06, // 1: B C
    !0x5B, // 2: A B D E G
    !0x4F, // 3: A B C D G
    !0x66, // 4: B C F G
    !0x6D, // 5: A C D F G
    !0x7D, // 6: A C D E F G
    !0x07, // 7: A B C
    !0x7F, // 8: all segments
    !0x6F, // 9: A B C D F G
];

/// Decimal point bit within a segment pattern
pub const DP_BIT: u8 = 0x80;

/// Encode a single decimal digit as an active-low segment pattern
///
/// When `dp` is true the decimal-point bit is additionally cleared
/// (turned on).
///
/// Digits outside 0-9 are a caller precondition violation; callers
/// decompose values with mod 10 before encoding (see
/// `tessera_core::frame::DisplayValue::digits`).
pub fn encode(digit: u8, dp: bool) -> u8 {
    debug_assert!(digit <= 9, "digit must be decomposed to 0-9");

    let mut pattern = SEGMENT_PATTERNS[(digit % 10) as usize];
    if dp {
        pattern &= !DP_BIT;
    }
    pattern
}
