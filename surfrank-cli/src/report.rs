//! Rendering of rank results as text or JSON.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use surfrank_core::Ranks;

use crate::CliError;

/// Output format for the `rank` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportFormat {
    /// Headed plain-text listing with four decimal places.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Ranks produced by both rankers for one corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RankReport {
    pub(crate) sampling: SamplingSection,
    pub(crate) iteration: IterationSection,
}

/// Sampling results together with the number of draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SamplingSection {
    pub(crate) samples: usize,
    pub(crate) ranks: Ranks,
}

/// Iterative results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct IterationSection {
    pub(crate) ranks: Ranks,
}

pub(crate) fn write_report(
    writer: &mut dyn Write,
    report: &RankReport,
    format: ReportFormat,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Text => write_text(writer, report).map_err(CliError::WriteReport),
        ReportFormat::Json => write_json(writer, report),
    }
}

fn write_text(writer: &mut dyn Write, report: &RankReport) -> std::io::Result<()> {
    writeln!(
        writer,
        "PageRank Results from Sampling (n = {})",
        report.sampling.samples
    )?;
    write_ranks(writer, &report.sampling.ranks)?;
    writeln!(writer, "PageRank Results from Iteration")?;
    write_ranks(writer, &report.iteration.ranks)
}

fn write_ranks(writer: &mut dyn Write, ranks: &Ranks) -> std::io::Result<()> {
    for (page, rank) in ranks.iter() {
        writeln!(writer, "  {page}: {rank:.4}")?;
    }
    Ok(())
}

fn write_json(writer: &mut dyn Write, report: &RankReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}
