//! Hopping Sequence Generator
//!
//! Implements the MAI computation of 3GPP TS 05.02 section 6.2.3:
//!
//! ```text
//! if HSN = 0
//!     MAI = (FN + MAIO) mod N
//! else
//!     M  = (T2 + RNTABLE[HSN xor ((T1 mod 64) + T3)]) mod 2^(NBIN + 1)
//!     T' = T3 mod 2^(NBIN + 1)
//!     S  = M              if M < N
//!     S  = (M + T') mod N otherwise
//!     MAI = (MAIO + S) mod N
//! ```
//!
//! where NBIN is the number of bits needed to represent N.

use common::types::FrameTiming;
use common::utils::{bit_length, frame};

use crate::rntable;
use crate::InvalidInput;

/// Largest mobile allocation size accepted
pub const MAX_ALLOCATION_SIZE: u8 = 64;

/// Compute the mobile allocation index for one TDMA frame
///
/// Returns an index in `[0, n)` into the mobile allocation. `maio` is taken
/// modulo `n`; `hsn` selects cyclic hopping when zero and pseudo-random
/// hopping otherwise.
pub fn hsg(t1: u8, t2: u8, t3: u8, maio: u16, hsn: u8, n: u8) -> Result<u16, InvalidInput> {
    if t1 > frame::T1_MAX {
        return Err(InvalidInput::T1OutOfRange(t1));
    }
    if t2 > frame::T2_MAX {
        return Err(InvalidInput::T2OutOfRange(t2));
    }
    if t3 > frame::T3_MAX {
        return Err(InvalidInput::T3OutOfRange(t3));
    }
    if n == 0 || n > MAX_ALLOCATION_SIZE {
        return Err(InvalidInput::AllocationSizeOutOfRange(n));
    }

    let mai = if hsn == 0 {
        cyclic_mai(FrameTiming { t1, t2, t3 }, maio as u32, n as u32)
    } else {
        pseudo_random_mai(t1, t2, t3, maio as u32, hsn, n)?
    };

    Ok(mai as u16)
}

fn cyclic_mai(timing: FrameTiming, maio: u32, n: u32) -> u32 {
    (timing.frame_number() + maio) % n
}

fn pseudo_random_mai(t1: u8, t2: u8, t3: u8, maio: u32, hsn: u8, n: u8) -> Result<u32, InvalidInput> {
    // One bit wider than N needs
    let modulus = 2u32 << bit_length(n);
    let n = n as u32;

    let index = rntable_index(hsn, t1, t3);
    let r = rntable::lookup(index).ok_or(InvalidInput::RnTableIndexOutOfRange { index, hsn })?;

    let m = (t2 as u32 + r as u32) % modulus;
    let s = if m < n {
        m
    } else {
        let t = t3 as u32 % modulus;
        (m + t) % n
    };

    Ok((maio + s) % n)
}

/// RNTABLE index used by the pseudo-random path
///
/// Callers must have validated `t1 <= 63` and `t3 <= 50`, so the sum fits a
/// byte. The result may still exceed the table.
pub fn rntable_index(hsn: u8, t1: u8, t3: u8) -> u8 {
    hsn ^ ((t1 % 64) + t3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_vectors() {
        assert_eq!(hsg(0, 0, 0, 0, 0, 6), Ok(0));
        // FN = 52, (52 + 3) mod 6
        assert_eq!(hsg(0, 0, 1, 3, 0, 6), Ok(1));
        // FN = 84863
        assert_eq!(hsg(63, 25, 50, 0, 0, 6), Ok(5));
        assert_eq!(hsg(63, 25, 50, 5, 0, 64), Ok(4));
    }

    #[test]
    fn test_cyclic_wraps_negative_difference() {
        // T3 - T2 = -1 must become 25, giving FN = 1275
        assert_eq!(hsg(0, 1, 0, 0, 0, 64), Ok((1275 % 64) as u16));
    }

    #[test]
    fn test_pseudo_random_vectors() {
        // RNTABLE[51] = 19, 19 mod 16 = 3 < 6
        assert_eq!(hsg(0, 0, 0, 0, 51, 6), Ok(3));
        // RNTABLE[50] = 87, 87 mod 16 = 7 >= 6, (7 + 1) mod 6
        assert_eq!(hsg(0, 0, 1, 0, 51, 6), Ok(2));
        assert_eq!(hsg(1, 5, 10, 2, 51, 6), Ok(0));
        assert_eq!(hsg(10, 20, 30, 4, 51, 6), Ok(4));
        assert_eq!(hsg(20, 25, 40, 0, 51, 6), Ok(4));
        assert_eq!(hsg(0, 0, 0, 0, 1, 64), Ok(34));
        assert_eq!(hsg(63, 25, 50, 0, 1, 64), Ok(42));
    }

    #[test]
    fn test_single_channel_allocation() {
        assert_eq!(hsg(5, 3, 7, 0, 7, 1), Ok(0));
        assert_eq!(hsg(5, 3, 7, 9, 0, 1), Ok(0));
    }

    #[test]
    fn test_range_checks() {
        assert!(hsg(63, 25, 50, 0, 0, 6).is_ok());
        assert_eq!(hsg(64, 0, 0, 0, 0, 6), Err(InvalidInput::T1OutOfRange(64)));
        assert_eq!(hsg(0, 26, 0, 0, 0, 6), Err(InvalidInput::T2OutOfRange(26)));
        assert_eq!(hsg(0, 0, 51, 0, 0, 6), Err(InvalidInput::T3OutOfRange(51)));
        assert_eq!(hsg(0, 0, 0, 0, 0, 65), Err(InvalidInput::AllocationSizeOutOfRange(65)));
        assert_eq!(hsg(0, 0, 0, 0, 0, 0), Err(InvalidInput::AllocationSizeOutOfRange(0)));
        assert_eq!(hsg(0, 0, 0, 0, 51, 0), Err(InvalidInput::AllocationSizeOutOfRange(0)));
    }

    #[test]
    fn test_table_index_out_of_range() {
        // 51 xor 76 = 127
        assert_eq!(rntable_index(51, 26, 50), 127);
        assert_eq!(
            hsg(26, 0, 50, 0, 51, 6),
            Err(InvalidInput::RnTableIndexOutOfRange { index: 127, hsn: 51 })
        );
    }

    #[test]
    fn test_maio_taken_modulo_n() {
        for hsn in [0u8, 1, 51] {
            assert_eq!(hsg(3, 4, 5, 6, hsn, 6), hsg(3, 4, 5, 0, hsn, 6));
            assert_eq!(hsg(3, 4, 5, 600 + 2, hsn, 6), hsg(3, 4, 5, 2, hsn, 6));
        }
    }
}
