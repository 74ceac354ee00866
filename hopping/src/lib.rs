//! GSM Frequency Hopping Library
//!
//! This crate implements the hopping sequence generator of 3GPP TS 05.02
//! section 6.2.3, which maps frame timing and hopping parameters to a
//! mobile allocation index (MAI).

pub mod hopper;
pub mod hsg;
pub mod rntable;

use thiserror::Error;

pub use hopper::{HopVector, Hopper, HyperframeSweep};
pub use hsg::hsg;

/// Invalid input to the hopping sequence generator
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("T1 out of range: {0} (expected 0-63)")]
    T1OutOfRange(u8),

    #[error("T2 out of range: {0} (expected 0-25)")]
    T2OutOfRange(u8),

    #[error("T3 out of range: {0} (expected 0-50)")]
    T3OutOfRange(u8),

    #[error("Mobile allocation size out of range: {0} (expected 1-64)")]
    AllocationSizeOutOfRange(u8),

    #[error("RNTABLE index {index} out of range for HSN {hsn} (expected 0-113)")]
    RnTableIndexOutOfRange { index: u8, hsn: u8 },
}
