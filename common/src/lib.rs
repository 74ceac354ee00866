//! Common Utilities and Types Library
//!
//! This crate provides the GSM frame timing, channel and mobile allocation
//! types shared by the hopping sequence generator and its tooling.

pub mod types;
pub mod utils;

use thiserror::Error;

// Re-export commonly used items
pub use types::*;
pub use utils::*;

/// Errors raised when building common types from raw values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("Mobile allocation is empty")]
    EmptyAllocation,

    #[error("Mobile allocation holds {0} channels, at most {max} allowed", max = types::MobileAllocation::MAX_LEN)]
    AllocationTooLarge(usize),

    #[error("Invalid ARFCN: {0}")]
    InvalidArfcn(u16),
}
