//! Rank command implementation for the surfrank CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfrank_core::{DampingFactor, LinkGraph, Ranker, Ranks, SampleCount};
use surfrank_fs::{create_utf8_file, path_is_dir};
use surfrank_iterative::{IterationConfig, IterativeRanker};
use surfrank_sampling::{SamplingConfig, SamplingRanker};

use crate::report::{IterationSection, RankReport, ReportFormat, SamplingSection, write_report};
use crate::{
    ARG_CORPUS, ARG_DAMPING, ARG_FORMAT, ARG_MAX_ITERATIONS, ARG_OUTPUT, ARG_SAMPLES, ARG_SEED,
    ARG_TOLERANCE, CliError, ENV_CORPUS,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Crawl a directory of HTML pages and rank every page twice: \
                 once by sampling a random surfer's walk and once by \
                 iterating the PageRank equation until it settles. Options \
                 can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Rank the pages of a corpus directory"
)]
#[ortho_config(prefix = "SURFRANK")]
pub(crate) struct RankArgs {
    /// Directory containing the `.html` pages to rank.
    #[arg(value_name = "dir")]
    #[serde(default)]
    pub(crate) corpus: Option<Utf8PathBuf>,
    /// Probability of following a link rather than jumping (default 0.85).
    #[arg(long = ARG_DAMPING, value_name = "factor")]
    #[serde(default)]
    pub(crate) damping: Option<f64>,
    /// Number of pages drawn by the sampling ranker (default 10000).
    #[arg(long = ARG_SAMPLES, value_name = "count")]
    #[serde(default)]
    pub(crate) samples: Option<usize>,
    /// Seed for the sampling ranker; omit for a fresh seed per run.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Largest per-page change at which iteration stops (default 0.001).
    #[arg(long = ARG_TOLERANCE, value_name = "delta")]
    #[serde(default)]
    pub(crate) tolerance: Option<f64>,
    /// Iteration cap before reporting non-convergence (default 10000).
    #[arg(long = ARG_MAX_ITERATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_iterations: Option<usize>,
    /// Report format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<ReportFormat>,
    /// Write the report to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Directory holding the corpus pages.
    pub(crate) corpus: Utf8PathBuf,
    pub(crate) sampling: SamplingConfig,
    pub(crate) iteration: IterationConfig,
    pub(crate) format: ReportFormat,
    /// Report destination; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RankConfig {
    pub(crate) fn validate_corpus(&self) -> Result<(), CliError> {
        match path_is_dir(&self.corpus) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::CorpusNotDirectory {
                path: self.corpus.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::CorpusNotDirectory {
                    path: self.corpus.clone(),
                })
            }
            Err(source) => Err(CliError::InspectCorpus {
                path: self.corpus.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let corpus = args.corpus.ok_or(CliError::MissingArgument {
            field: ARG_CORPUS,
            env: ENV_CORPUS,
        })?;

        let damping = args
            .damping
            .map(DampingFactor::new)
            .transpose()?
            .unwrap_or_default();
        let samples = args
            .samples
            .map(SampleCount::new)
            .transpose()?
            .unwrap_or_default();

        let defaults = IterationConfig::default();
        let iteration = IterationConfig {
            damping,
            tolerance: args.tolerance.unwrap_or(defaults.tolerance),
            max_iterations: args.max_iterations.unwrap_or(defaults.max_iterations),
        };
        iteration.validate()?;

        Ok(Self {
            corpus,
            sampling: SamplingConfig {
                damping,
                samples,
                seed: args.seed,
            },
            iteration,
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

/// Run the `rank` command, writing to `stdout` unless `--output` is set.
pub(crate) fn run_rank_with(args: RankArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let report = execute_rank(&config)?;
    match &config.output {
        Some(path) => write_report_file(path, &report, config.format),
        None => write_report(stdout, &report, config.format),
    }
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_corpus()?;
    Ok(config)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<RankReport, CliError> {
    let graph = surfrank_corpus::crawl(&config.corpus)?;
    let sampled = rank_with(&SamplingRanker::new(config.sampling), &graph)?;
    let iterated = rank_with(&IterativeRanker::new(config.iteration), &graph)?;
    Ok(RankReport {
        sampling: SamplingSection {
            samples: config.sampling.samples.get(),
            ranks: sampled,
        },
        iteration: IterationSection { ranks: iterated },
    })
}

fn rank_with(ranker: &dyn Ranker, graph: &LinkGraph) -> Result<Ranks, CliError> {
    let ranks = ranker.rank(graph).map_err(|source| CliError::Rank {
        ranker: ranker.name(),
        source,
    })?;
    info!("{} ranker ranked {} pages", ranker.name(), ranks.len());
    Ok(ranks)
}

fn write_report_file(
    path: &Utf8Path,
    report: &RankReport,
    format: ReportFormat,
) -> Result<(), CliError> {
    let mut file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_report(&mut file, report, format)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
