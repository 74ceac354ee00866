//! Common Types for GSM Frequency Hopping
//!
//! Defines the frame timing, channel and hopping parameter types used
//! throughout the hopping sequence generator (3GPP TS 05.02).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::frame;
use crate::CommonError;

/// Frame timing counters T1, T2 and T3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameTiming {
    /// Superframe counter (0-63)
    pub t1: u8,
    /// Frame number mod 26 (0-25)
    pub t2: u8,
    /// Frame number mod 51 (0-50)
    pub t3: u8,
}

impl FrameTiming {
    /// Create frame timing with validation
    pub fn new(t1: u8, t2: u8, t3: u8) -> Option<Self> {
        if t1 <= frame::T1_MAX && t2 <= frame::T2_MAX && t3 <= frame::T3_MAX {
            Some(Self { t1, t2, t3 })
        } else {
            None
        }
    }

    /// Reconstruct the frame number
    ///
    /// FN = 51 * ((T3 - T2) mod 26) + T3 + 51 * 26 * T1, where the difference
    /// is reduced into [0, 26) before multiplying.
    pub fn frame_number(&self) -> u32 {
        let diff = (self.t3 as i32 - self.t2 as i32).rem_euclid(frame::T2_MODULUS as i32) as u32;

        frame::T3_MODULUS * diff + self.t3 as u32 + frame::FRAMES_PER_SUPERFRAME * self.t1 as u32
    }

    /// Split a frame number into T1, T2 and T3
    ///
    /// The frame number is first reduced modulo 64 superframes, the range
    /// covered by a 6-bit T1.
    pub fn from_frame_number(fn_: u32) -> Self {
        let fn_ = fn_ % frame::FRAMES_PER_T1_CYCLE;

        Self {
            t1: (fn_ / frame::FRAMES_PER_SUPERFRAME) as u8,
            t2: (fn_ % frame::T2_MODULUS) as u8,
            t3: (fn_ % frame::T3_MODULUS) as u8,
        }
    }
}

/// Absolute Radio Frequency Channel Number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Arfcn(pub u16);

impl Arfcn {
    /// Maximum valid ARFCN value (0-1023)
    pub const MAX: u16 = 1023;

    /// Create a new ARFCN with validation
    pub fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the ARFCN value
    pub fn value(&self) -> u16 {
        self.0
    }
}

/// Mobile Allocation: the ordered channel list a link hops across
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileAllocation {
    arfcns: Vec<Arfcn>,
}

impl MobileAllocation {
    /// Maximum number of channels in a mobile allocation
    pub const MAX_LEN: usize = 64;

    /// Create a mobile allocation from an ARFCN list
    pub fn new(arfcns: Vec<Arfcn>) -> Result<Self, CommonError> {
        if arfcns.is_empty() {
            return Err(CommonError::EmptyAllocation);
        }
        if arfcns.len() > Self::MAX_LEN {
            return Err(CommonError::AllocationTooLarge(arfcns.len()));
        }

        debug!("Mobile allocation with {} channels: {:?}", arfcns.len(), arfcns);
        Ok(Self { arfcns })
    }

    /// Create a mobile allocation from raw channel numbers
    pub fn from_raw(values: &[u16]) -> Result<Self, CommonError> {
        let arfcns = values
            .iter()
            .map(|&v| Arfcn::new(v).ok_or(CommonError::InvalidArfcn(v)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(arfcns)
    }

    /// Number of channels (N)
    pub fn len(&self) -> u8 {
        self.arfcns.len() as u8
    }

    /// Whether the allocation holds no channels
    pub fn is_empty(&self) -> bool {
        self.arfcns.is_empty()
    }

    /// Channel selected by a mobile allocation index (MA[MAI])
    pub fn channel(&self, mai: u16) -> Option<Arfcn> {
        self.arfcns.get(mai as usize).copied()
    }

    /// All channels in allocation order
    pub fn arfcns(&self) -> &[Arfcn] {
        &self.arfcns
    }
}

/// Hopping pattern selected by the HSN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoppingMode {
    /// HSN 0: channels used in turn
    Cyclic,
    /// Nonzero HSN: RNTABLE driven sequence
    PseudoRandom,
}

/// Per-link hopping parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoppingParams {
    /// Hopping Sequence Number
    pub hsn: u8,
    /// Mobile Allocation Index Offset
    pub maio: u16,
}

impl HoppingParams {
    /// Create hopping parameters
    pub fn new(hsn: u8, maio: u16) -> Self {
        Self { hsn, maio }
    }

    /// Hopping pattern implied by the HSN
    pub fn mode(&self) -> HoppingMode {
        if self.hsn == 0 {
            HoppingMode::Cyclic
        } else {
            HoppingMode::PseudoRandom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_frame_timing_validation() {
        assert!(FrameTiming::new(0, 0, 0).is_some());
        assert!(FrameTiming::new(63, 25, 50).is_some());
        assert!(FrameTiming::new(64, 0, 0).is_none());
        assert!(FrameTiming::new(0, 26, 0).is_none());
        assert!(FrameTiming::new(0, 0, 51).is_none());
    }

    #[test]
    fn test_frame_number() {
        assert_eq!(FrameTiming { t1: 0, t2: 0, t3: 0 }.frame_number(), 0);
        assert_eq!(FrameTiming { t1: 0, t2: 0, t3: 1 }.frame_number(), 52);
        // T3 < T2 wraps into [0, 26)
        assert_eq!(FrameTiming { t1: 0, t2: 1, t3: 0 }.frame_number(), 51 * 25);
        assert_eq!(FrameTiming { t1: 1, t2: 0, t3: 0 }.frame_number(), 1326);
    }

    #[test]
    fn test_frame_number_round_trip() {
        for fn_ in 0..frame::FRAMES_PER_T1_CYCLE {
            let timing = FrameTiming::from_frame_number(fn_);
            assert_eq!(timing.frame_number(), fn_);
        }
    }

    #[test]
    fn test_from_frame_number_wraps() {
        let timing = FrameTiming::from_frame_number(frame::FRAMES_PER_T1_CYCLE + 52);
        assert_eq!(timing, FrameTiming { t1: 0, t2: 0, t3: 1 });
    }

    #[test]
    fn test_arfcn_validation() {
        assert!(Arfcn::new(0).is_some());
        assert!(Arfcn::new(1023).is_some());
        assert!(Arfcn::new(1024).is_none());
    }

    #[test]
    fn test_mobile_allocation() {
        let ma = MobileAllocation::from_raw(&[813, 820, 826, 850, 857, 880]).unwrap();
        assert_eq!(ma.len(), 6);
        assert_eq!(ma.channel(0), Some(Arfcn(813)));
        assert_eq!(ma.channel(5), Some(Arfcn(880)));
        assert_eq!(ma.channel(6), None);
    }

    #[test]
    fn test_mobile_allocation_limits() {
        assert_eq!(MobileAllocation::from_raw(&[]), Err(CommonError::EmptyAllocation));
        assert_eq!(MobileAllocation::from_raw(&[2000]), Err(CommonError::InvalidArfcn(2000)));

        let full: Vec<u16> = (0..64).collect();
        assert_eq!(MobileAllocation::from_raw(&full).unwrap().len(), 64);

        let oversized: Vec<u16> = (0..65).collect();
        assert_eq!(
            MobileAllocation::from_raw(&oversized),
            Err(CommonError::AllocationTooLarge(65))
        );
    }

    #[test]
    fn test_hopping_mode() {
        assert_eq!(HoppingParams::new(0, 3).mode(), HoppingMode::Cyclic);
        assert_eq!(HoppingParams::new(51, 0).mode(), HoppingMode::PseudoRandom);
    }
}
