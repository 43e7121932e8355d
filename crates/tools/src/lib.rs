//! File-level driver for the block map transforms: load a document, run one
//! operation over its `blocks`, save the result.

pub mod cli;
pub mod persistence;

use anyhow::{Context, Result};
use blockmap_engine::transform::{TransformReport, transform_with_report};

use crate::cli::Invocation;

/// Run one invocation end to end. Nothing is written unless the whole map
/// transforms successfully.
pub fn run(invocation: &Invocation) -> Result<TransformReport> {
    let document = persistence::load_document(&invocation.input)?;
    let (blocks, merged) = document
        .blocks_counted()
        .with_context(|| format!("reading blocks from {}", invocation.input.display()))?;
    if merged > 0 {
        tracing::info!(
            "{}: {} keys named an already-listed position and were merged",
            invocation.input.display(),
            merged
        );
    }

    let transform = invocation.operation.transform();
    let (moved, report) = transform_with_report(&blocks, &transform).with_context(|| {
        format!(
            "applying {} to {}",
            transform.name(),
            invocation.input.display()
        )
    })?;

    tracing::info!(
        "{}: {} blocks in, {} out ({} dropped, {} overwritten)",
        transform.name(),
        report.input_len,
        report.output_len,
        report.dropped,
        report.overwritten,
    );

    persistence::save_document(&document.with_blocks(&moved), &invocation.output)?;
    Ok(report)
}
