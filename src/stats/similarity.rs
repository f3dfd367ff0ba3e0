//! Similarity Analyzer
//! Cosine similarity between age and income within each profession segment.

use super::calculator::StatsCalculator;
use crate::config::AnalysisConfig;
use crate::data::{normalize_key, parse_count, parse_decimal, Table};
use crate::error::AnalysisError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityPair {
    pub student: f64,
    pub non_student: f64,
}

/// Paired age and income vectors for one segment.
#[derive(Debug, Default)]
struct AgeIncome {
    ages: Vec<u32>,
    incomes: Vec<f64>,
}

impl AgeIncome {
    fn push(&mut self, age: u32, income: f64) {
        self.ages.push(age);
        self.incomes.push(income);
    }

    fn similarity(&self) -> Result<f64, AnalysisError> {
        StatsCalculator::cosine_similarity(&self.ages, &self.incomes)
    }
}

/// Re-scan the table for (age, income) pairs. Unlike the segmenter, an age
/// of zero is accepted here.
pub fn age_income_similarity(
    table: &Table,
    config: &AnalysisConfig,
) -> Result<SimilarityPair, AnalysisError> {
    let names = &config.columns;
    let idx_profession = table.column_index(&names.profession)?;
    let idx_age = table.column_index(&names.age)?;
    let idx_income = table.column_index(&names.income)?;

    let mut students = AgeIncome::default();
    let mut non_students = AgeIncome::default();

    for row in table.well_formed_rows() {
        let (Ok(age), Ok(income)) = (parse_count(&row[idx_age]), parse_decimal(&row[idx_income]))
        else {
            continue;
        };

        if normalize_key(&row[idx_profession]) == config.student_label {
            students.push(age, income);
        } else {
            non_students.push(age, income);
        }
    }

    Ok(SimilarityPair {
        student: students.similarity()?,
        non_student: non_students.similarity()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;

    fn similarity(text: &str) -> Result<SimilarityPair, AnalysisError> {
        let table = DataLoader::load_reader(text.as_bytes()).into_table().unwrap();
        age_income_similarity(&table, &AnalysisConfig::default())
    }

    #[test]
    fn colinear_students_orthogonal_others() {
        let pair = similarity(
            "profession,age,income\n\
             student,1,1\n\
             student,2,2\n\
             student,3,3\n\
             worker,1,0\n\
             worker,0,1\n",
        )
        .unwrap();
        assert_eq!(pair, SimilarityPair { student: 1.0, non_student: 0.0 });
    }

    #[test]
    fn empty_segment_is_zero() {
        let pair = similarity("profession,age,income\nstudent,20,100\n").unwrap();
        assert_eq!(pair.student, 1.0);
        assert_eq!(pair.non_student, 0.0);
    }

    #[test]
    fn zero_age_is_kept_but_signed_values_are_not() {
        // The zero-age row adds income magnitude only, pulling similarity below 1.
        let pair = similarity(
            "profession,age,income\n\
             student,0,1\n\
             student,1,1\n\
             student,-1,5\n\
             student,1,-5\n",
        )
        .unwrap();
        assert_eq!(pair.student, 0.7071);
    }

    #[test]
    fn missing_income_column_is_fatal() {
        assert_eq!(
            similarity("profession,age\nstudent,20\n"),
            Err(AnalysisError::ColumnNotFound("income".to_string()))
        );
    }
}
