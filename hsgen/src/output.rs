//! Vector output and consistency checking

use std::io::Write;

use hopping::{HopVector, Hopper, HyperframeSweep};
use serde::Serialize;
use tracing::trace;

use crate::config::OutputFormat;

/// Outcome of a sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    /// Vectors evaluated
    pub total: u64,
    /// Vectors with a MAI inside the allocation
    pub ok: u64,
    /// Vectors rejected by the generator or outside the allocation
    pub failed: u64,
}

/// JSON line for one vector
#[derive(Debug, Serialize)]
struct VectorRecord {
    hsn: u8,
    t1: u8,
    t2: u8,
    t3: u8,
    maio: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    mai: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arfcn: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Write every vector of a sweep and count consistency failures
pub fn write_vectors<W: Write>(
    out: &mut W,
    hopper: &Hopper,
    sweep: HyperframeSweep,
    format: OutputFormat,
    summary_only: bool,
) -> anyhow::Result<SweepSummary> {
    let hsn = hopper.params().hsn;
    let allocation = hopper.allocation();
    let mut summary = SweepSummary::default();

    for vector in sweep {
        let HopVector { timing, maio, result } = vector;
        summary.total += 1;

        let channel = result.ok().and_then(|mai| allocation.channel(mai).map(|arfcn| (mai, arfcn)));
        match channel {
            Some(_) => summary.ok += 1,
            None => {
                summary.failed += 1;
                trace!("Consistency check failed at {:?}, MAIO {}: {:?}", timing, maio, result);
            }
        }

        if summary_only {
            continue;
        }

        match format {
            OutputFormat::Text => match channel {
                Some((mai, arfcn)) => writeln!(
                    out,
                    "HSN: {}\tT1: {}\tT2: {}\tT3: {}\tMAIO: {}\tMAI: {}\tMA[MAI]: {}",
                    hsn, timing.t1, timing.t2, timing.t3, maio, mai, arfcn.value()
                )?,
                None => match result {
                    Err(e) => writeln!(out, "Error: MAI - consistency check failed ({})", e)?,
                    Ok(mai) => writeln!(out, "Error: MAI - consistency check failed (MAI {})", mai)?,
                },
            },
            OutputFormat::Json => {
                let record = VectorRecord {
                    hsn,
                    t1: timing.t1,
                    t2: timing.t2,
                    t3: timing.t3,
                    maio,
                    mai: channel.map(|(mai, _)| mai),
                    arfcn: channel.map(|(_, arfcn)| arfcn.value()),
                    error: result.err().map(|e| e.to_string()),
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
    }

    Ok(summary)
}
