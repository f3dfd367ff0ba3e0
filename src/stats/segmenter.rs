//! Profession Segmenter
//! Splits valid rows into student and non-student records keyed by user id.

use super::keyed::KeyedMap;
use crate::config::AnalysisConfig;
use crate::data::{normalize_key, parse_decimal, parse_positive_count, FieldError, Table};
use crate::error::AnalysisError;
use log::trace;
use serde::Serialize;

/// One user's usage figures after validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementRecord {
    pub age: u32,
    pub time_spent_hour: f64,
    pub engagement_score: f64,
}

impl EngagementRecord {
    /// `time_spent_hour * engagement_score / 100`, unrounded.
    pub fn engagement_time(&self) -> f64 {
        self.time_spent_hour * self.engagement_score / 100.0
    }
}

/// Records per normalized user id, in first-seen order.
pub type SegmentMap = KeyedMap<EngagementRecord>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfessionSegments {
    pub students: SegmentMap,
    pub non_students: SegmentMap,
}

impl ProfessionSegments {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.non_students.is_empty()
    }

    /// Engagement-time of every student and every non-student, in map order.
    pub fn engagement_samples(&self) -> (Vec<f64>, Vec<f64>) {
        let sample = |map: &SegmentMap| -> Vec<f64> {
            map.values().map(EngagementRecord::engagement_time).collect()
        };
        (sample(&self.students), sample(&self.non_students))
    }
}

struct Columns {
    profession: usize,
    id: usize,
    age: usize,
    time_spent_hour: usize,
    engagement_score: usize,
}

fn parse_record(row: &[String], cols: &Columns) -> Result<EngagementRecord, FieldError> {
    Ok(EngagementRecord {
        age: parse_positive_count(&row[cols.age])?,
        time_spent_hour: parse_decimal(&row[cols.time_spent_hour])?,
        engagement_score: parse_decimal(&row[cols.engagement_score])?,
    })
}

/// Bucket every valid row by profession. A later row with the same id
/// replaces the earlier one.
pub fn segment_by_profession(
    table: &Table,
    config: &AnalysisConfig,
) -> Result<ProfessionSegments, AnalysisError> {
    let names = &config.columns;
    let cols = Columns {
        profession: table.column_index(&names.profession)?,
        id: table.column_index(&names.id)?,
        age: table.column_index(&names.age)?,
        time_spent_hour: table.column_index(&names.time_spent_hour)?,
        engagement_score: table.column_index(&names.engagement_score)?,
    };

    let mut segments = ProfessionSegments::default();

    for row in table.well_formed_rows() {
        let record = match parse_record(row, &cols) {
            Ok(record) => record,
            Err(reason) => {
                trace!("segmenter skipped row: {reason}");
                continue;
            }
        };

        let user_id = normalize_key(&row[cols.id]);
        if normalize_key(&row[cols.profession]) == config.student_label {
            segments.students.insert(user_id, record);
        } else {
            segments.non_students.insert(user_id, record);
        }
    }

    Ok(segments)
}
