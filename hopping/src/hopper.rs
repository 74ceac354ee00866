//! Per-link hopping state and hyperframe enumeration
//!
//! `Hopper` binds a mobile allocation to one link's HSN and MAIO and turns
//! frame timing into a radio channel (RFCHN = MA[MAI]). `HyperframeSweep`
//! walks every valid (T1, T2, T3) for a set of MAIO values, producing the
//! vectors used for conformance checks.

use std::ops::Range;

use common::types::{Arfcn, FrameTiming, HoppingMode, HoppingParams, MobileAllocation};
use common::utils::frame;
use tracing::debug;

use crate::hsg::hsg;
use crate::InvalidInput;

/// Hopping sequence generator bound to one link
#[derive(Debug, Clone)]
pub struct Hopper {
    allocation: MobileAllocation,
    params: HoppingParams,
}

impl Hopper {
    /// Create a hopper for a mobile allocation and hopping parameters
    pub fn new(allocation: MobileAllocation, params: HoppingParams) -> Self {
        debug!(
            "Hopper configured: HSN {} ({:?}), MAIO {}, N {}",
            params.hsn,
            params.mode(),
            params.maio,
            allocation.len()
        );

        Self { allocation, params }
    }

    /// Mobile allocation in use
    pub fn allocation(&self) -> &MobileAllocation {
        &self.allocation
    }

    /// Hopping parameters in use
    pub fn params(&self) -> HoppingParams {
        self.params
    }

    /// Hopping pattern of this link
    pub fn mode(&self) -> HoppingMode {
        self.params.mode()
    }

    /// Mobile allocation index for a frame
    pub fn mai(&self, timing: FrameTiming) -> Result<u16, InvalidInput> {
        hsg(
            timing.t1,
            timing.t2,
            timing.t3,
            self.params.maio,
            self.params.hsn,
            self.allocation.len(),
        )
    }

    /// Radio channel for a frame
    pub fn arfcn(&self, timing: FrameTiming) -> Result<Arfcn, InvalidInput> {
        let mai = self.mai(timing)?;
        // hsg keeps MAI below N
        Ok(self.allocation.arfcns()[mai as usize])
    }

    /// Enumerate every frame of the T1 cycle with this link's MAIO
    ///
    /// The MAIO is reported reduced modulo N.
    pub fn sweep(&self) -> HyperframeSweep {
        let maio = self.params.maio % self.allocation.len() as u16;
        HyperframeSweep::new(self.params.hsn, self.allocation.len(), maio..maio + 1)
    }

    /// Enumerate every frame of the T1 cycle for all MAIO values in [0, N)
    pub fn sweep_all_offsets(&self) -> HyperframeSweep {
        HyperframeSweep::new(self.params.hsn, self.allocation.len(), 0..self.allocation.len() as u16)
    }
}

/// One enumerated generator evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopVector {
    /// Frame timing
    pub timing: FrameTiming,
    /// MAIO used
    pub maio: u16,
    /// Generator outcome
    pub result: Result<u16, InvalidInput>,
}

/// Iterator over all (T1, T2, T3, MAIO) combinations
///
/// Ordered by T1, then T2, then T3, with MAIO varying fastest.
#[derive(Debug, Clone)]
pub struct HyperframeSweep {
    hsn: u8,
    n: u8,
    maios: Range<u16>,
    position: u64,
    total: u64,
}

impl HyperframeSweep {
    /// Create a sweep for a given HSN and allocation size
    pub fn new(hsn: u8, n: u8, maios: Range<u16>) -> Self {
        let maio_count = maios.len() as u64;

        Self {
            hsn,
            n,
            maios,
            position: 0,
            total: frame::FRAMES_PER_T1_CYCLE as u64 * maio_count,
        }
    }

    /// Total number of vectors the sweep produces
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Iterator for HyperframeSweep {
    type Item = HopVector;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total {
            return None;
        }

        let maio_count = self.maios.len() as u64;
        let maio = self.maios.start + (self.position % maio_count) as u16;
        let frame_index = self.position / maio_count;
        self.position += 1;

        let t3 = (frame_index % frame::T3_MODULUS as u64) as u8;
        let t2 = ((frame_index / frame::T3_MODULUS as u64) % frame::T2_MODULUS as u64) as u8;
        let t1 = (frame_index / frame::FRAMES_PER_SUPERFRAME as u64) as u8;

        let timing = FrameTiming { t1, t2, t3 };
        let result = hsg(t1, t2, t3, maio, self.hsn, self.n);

        Some(HopVector { timing, maio, result })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HyperframeSweep {}
