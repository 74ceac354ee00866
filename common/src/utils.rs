//! Common Utilities
//!
//! Bit helpers and GSM frame structure constants

/// Number of bits needed to represent `n` (position of the highest set bit)
///
/// Equal to floor(log2(n)) + 1 for n > 0, and 0 for n = 0.
pub fn bit_length(n: u8) -> u32 {
    u8::BITS - n.leading_zeros()
}

/// GSM frame structure constants (3GPP TS 05.02)
pub mod frame {
    /// Largest T1 value accepted by the hopping generator
    pub const T1_MAX: u8 = 63;
    /// Largest T2 value
    pub const T2_MAX: u8 = 25;
    /// Largest T3 value
    pub const T3_MAX: u8 = 50;

    /// T2 counts TDMA frames of the 26-multiframe
    pub const T2_MODULUS: u32 = 26;
    /// T3 counts TDMA frames of the 51-multiframe
    pub const T3_MODULUS: u32 = 51;

    /// TDMA frames per superframe (26 x 51)
    pub const FRAMES_PER_SUPERFRAME: u32 = T2_MODULUS * T3_MODULUS;

    /// Frames covered by T1 in [0, 63]: 26 x 51 x 64
    pub const FRAMES_PER_T1_CYCLE: u32 = FRAMES_PER_SUPERFRAME * (T1_MAX as u32 + 1);
}
