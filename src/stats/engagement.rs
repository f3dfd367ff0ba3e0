//! Platform Engagement Aggregator
//! Total, mean and sample deviation of engagement-time per platform.

use super::calculator::StatsCalculator;
use super::keyed::KeyedMap;
use crate::config::AnalysisConfig;
use crate::data::{normalize_key, parse_decimal, Table};
use crate::error::AnalysisError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformStat {
    pub total: f64,
    pub average: f64,
    pub stdev: f64,
}

impl PlatformStat {
    /// Summarize one platform's engagement-times.
    ///
    /// The average divides the already-rounded total. A single value uses a
    /// variance divisor of 1 so the deviation collapses to zero.
    pub fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        let total = StatsCalculator::round4(StatsCalculator::sum(values));
        let average = StatsCalculator::round4(total / count as f64);

        let divisor = if count > 1 { count - 1 } else { 1 };
        let variance = values
            .iter()
            .map(|x| (x - average).powi(2))
            .fold(0.0, |acc, x| acc + x)
            / divisor as f64;

        Self {
            total,
            average,
            stdev: StatsCalculator::round4(variance.sqrt()),
        }
    }
}

/// Per-platform stats in first-seen order.
pub type PlatformStats = KeyedMap<PlatformStat>;

/// Aggregate `round4(time_spent_hour * engagement_score / 100)` by platform.
pub fn aggregate_by_platform(
    table: &Table,
    config: &AnalysisConfig,
) -> Result<PlatformStats, AnalysisError> {
    let names = &config.columns;
    let idx_platform = table.column_index(&names.platform)?;
    let idx_engagement_score = table.column_index(&names.engagement_score)?;
    let idx_time_spent_hour = table.column_index(&names.time_spent_hour)?;

    let mut platform_data: KeyedMap<Vec<f64>> = KeyedMap::new();

    for row in table.well_formed_rows() {
        let (Ok(time_spent_hour), Ok(engagement_score)) = (
            parse_decimal(&row[idx_time_spent_hour]),
            parse_decimal(&row[idx_engagement_score]),
        ) else {
            continue;
        };

        let engagement_time = StatsCalculator::round4(time_spent_hour * engagement_score / 100.0);
        platform_data
            .entry_or_default(&normalize_key(&row[idx_platform]))
            .push(engagement_time);
    }

    let mut result = PlatformStats::new();
    for (platform, times) in platform_data.iter() {
        result.insert(platform.to_string(), PlatformStat::from_values(times));
    }
    Ok(result)
}
