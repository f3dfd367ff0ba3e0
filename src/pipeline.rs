//! Analysis Pipeline
//! Loader → {segmenter, platform aggregator, similarity} → effect size.

use crate::config::AnalysisConfig;
use crate::data::{DataLoader, LoadOutcome, Table};
use crate::error::AnalysisError;
use crate::stats::{
    age_income_similarity, aggregate_by_platform, segment_by_profession, PlatformStats,
    ProfessionSegments, SimilarityPair, StatsCalculator,
};
use log::{debug, info};
use serde::Serialize;
use std::path::Path;

/// Everything one run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub segments: ProfessionSegments,
    pub platforms: PlatformStats,
    /// `None` when there was no data to analyze.
    pub similarity: Option<SimilarityPair>,
    /// Students against non-students; 0 when the pooled deviation is zero.
    pub cohens_d: f64,
}

impl AnalysisReport {
    /// Result for unreadable or row-less input.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.similarity.is_none() && self.segments.is_empty() && self.platforms.is_empty()
    }
}

/// Load `path` and analyze it. Input without data rows yields the empty report.
pub fn run(path: &Path, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    run_outcome(DataLoader::load_path(path), config)
}

/// Analyze an already attempted load.
pub fn run_outcome(
    outcome: LoadOutcome,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    match outcome {
        LoadOutcome::Loaded(table) => analyze(&table, config),
        LoadOutcome::HeaderOnly(_) => {
            info!("Input has a header but no data rows");
            Ok(AnalysisReport::empty())
        }
        LoadOutcome::Empty => {
            info!("Input is empty");
            Ok(AnalysisReport::empty())
        }
        // Already logged by the loader.
        LoadOutcome::Unreadable(_) => Ok(AnalysisReport::empty()),
    }
}

/// Run every analyzer over a loaded table.
///
/// The three table scans are independent and run on the rayon pool. Errors
/// are reported in a fixed order: segments, platforms, similarity.
pub fn analyze(table: &Table, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    debug!("Analyzing {} rows", table.row_count());

    let (segments, (platforms, similarity)) = rayon::join(
        || segment_by_profession(table, config),
        || {
            rayon::join(
                || aggregate_by_platform(table, config),
                || age_income_similarity(table, config),
            )
        },
    );
    let segments = segments?;
    let platforms = platforms?;
    let similarity = similarity?;

    let (student_times, non_student_times) = segments.engagement_samples();
    let cohens_d = StatsCalculator::cohens_d(&student_times, &non_student_times)?;

    info!(
        "{} students, {} non-students, {} platforms, d = {}",
        segments.students.len(),
        segments.non_students.len(),
        platforms.len(),
        cohens_d
    );

    Ok(AnalysisReport {
        segments,
        platforms,
        similarity: Some(similarity),
        cohens_d,
    })
}
