//! GSM Hopping Sequence Vector Generator
//!
//! Enumerates every (T1, T2, T3, MAIO) combination of a T1 cycle for a
//! configured HSN and mobile allocation, printing the MAI and selected
//! ARFCN of each frame and checking that every index stays inside the
//! allocation.

mod config;
mod output;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{BufWriter, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use common::types::{HoppingParams, MobileAllocation};
use hopping::Hopper;

use crate::config::{HsgenConfig, OutputFormat};

/// GSM hopping sequence vector generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML or YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Hopping Sequence Number (0 = cyclic hopping)
    #[arg(long)]
    hsn: Option<u8>,

    /// Mobile allocation as comma separated ARFCNs (e.g., "813,820,826")
    #[arg(long)]
    ma: Option<String>,

    /// Enumerate a single MAIO instead of all of [0, N)
    #[arg(long)]
    maio: Option<u16>,

    /// Vector output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Only print the consistency summary
    #[arg(long)]
    summary_only: bool,
}

impl Args {
    /// Apply command line overrides on top of the file configuration
    fn apply(&self, config: &mut HsgenConfig) -> Result<()> {
        if let Some(hsn) = self.hsn {
            config.hopping.hsn = hsn;
        }
        if let Some(maio) = self.maio {
            config.hopping.maio = Some(maio);
        }
        if let Some(ma) = &self.ma {
            config.allocation.arfcns = HsgenConfig::parse_arfcn_list(ma)?;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.summary_only {
            config.output.summary_only = true;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging on stderr, stdout carries the vectors
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    info!("Starting hopping sequence vector generator");

    let mut config = match &args.config {
        Some(path) => {
            info!("Configuration file: {}", path);
            HsgenConfig::from_file(path)?
        }
        None => HsgenConfig::default(),
    };
    args.apply(&mut config)?;
    debug!("Effective configuration: {:?}", config);

    let allocation = MobileAllocation::from_raw(&config.allocation.arfcns)
        .context("Invalid mobile allocation")?;
    let n = allocation.len();

    if let Some(maio) = config.hopping.maio {
        if maio >= n as u16 {
            warn!("MAIO {} is not below N = {}, it will be reduced modulo N", maio, n);
        }
    }

    let params = HoppingParams::new(config.hopping.hsn, config.hopping.maio.unwrap_or(0));
    let hopper = Hopper::new(allocation, params);

    info!("Hopping configuration:");
    info!("  HSN: {} ({:?})", params.hsn, hopper.mode());
    info!("  N: {}", n);
    match config.hopping.maio {
        Some(maio) => info!("  MAIO: {}", maio),
        None => info!("  MAIO: 0-{}", n - 1),
    }

    let sweep = match config.hopping.maio {
        Some(_) => hopper.sweep(),
        None => hopper.sweep_all_offsets(),
    };
    info!("Enumerating {} vectors", sweep.total());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = output::write_vectors(
        &mut out,
        &hopper,
        sweep,
        config.output.format,
        config.output.summary_only,
    )?;
    out.flush()?;

    info!("Sweep summary:");
    info!("  Total vectors: {}", summary.total);
    info!("  Consistent: {}", summary.ok);
    info!("  Failed: {}", summary.failed);

    if summary.failed > 0 {
        bail!(
            "MAI consistency check failed for {} of {} vectors",
            summary.failed,
            summary.total
        );
    }

    info!("All vectors consistent");
    Ok(())
}
