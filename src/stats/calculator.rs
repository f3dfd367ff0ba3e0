//! Statistics Calculator Module
//! Numeric kernels: rounding, cosine similarity and Cohen's d.
//!
//! Sums run left to right in input order so repeated runs are bit-identical.

use crate::error::AnalysisError;

/// Decimal places kept on every reported statistic.
pub const DECIMALS: usize = 4;

/// Handles statistical calculations over plain `f64` samples.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Round to [`DECIMALS`] places, correctly rounded from the exact binary value.
    pub fn round4(value: f64) -> f64 {
        Self::round_to(value, DECIMALS)
    }

    pub fn round_to(value: f64, decimals: usize) -> f64 {
        if !value.is_finite() {
            return value;
        }
        format!("{value:.decimals$}").parse().unwrap_or(value)
    }

    pub fn sum(values: &[f64]) -> f64 {
        values.iter().fold(0.0, |acc, x| acc + x)
    }

    pub fn mean(values: &[f64]) -> f64 {
        Self::sum(values) / values.len() as f64
    }

    /// Bessel-corrected variance around a given mean. Callers guarantee `n >= 2`.
    fn sample_variance(values: &[f64], mean: f64) -> f64 {
        values.iter().map(|x| (x - mean).powi(2)).fold(0.0, |acc, x| acc + x)
            / (values.len() - 1) as f64
    }

    /// Cosine similarity between ages and incomes, rounded. Exactly zero when
    /// either vector has zero magnitude, including empty vectors.
    pub fn cosine_similarity(ages: &[u32], incomes: &[f64]) -> Result<f64, AnalysisError> {
        if ages.len() != incomes.len() {
            return Err(AnalysisError::LengthMismatch {
                ages: ages.len(),
                incomes: incomes.len(),
            });
        }

        let dot = ages
            .iter()
            .zip(incomes)
            .fold(0.0, |acc, (&a, &b)| acc + f64::from(a) * b);
        // Ages are integers: square and sum exactly before converting.
        let age_sq: u128 = ages.iter().map(|&a| u128::from(a) * u128::from(a)).sum();
        let norm_a = (age_sq as f64).sqrt();
        let norm_b = incomes.iter().fold(0.0, |acc, b| acc + b * b).sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return Ok(0.0);
        }

        Ok(Self::round4(dot / (norm_a * norm_b)))
    }

    /// Cohen's d with pooled standard deviation.
    ///
    /// Both samples need at least two values for their variance; anything
    /// less is a fault, not a zero. A zero pooled deviation yields `0.0`.
    pub fn cohens_d(group1: &[f64], group2: &[f64]) -> Result<f64, AnalysisError> {
        let (n1, n2) = (group1.len(), group2.len());
        if n1 < 2 || n2 < 2 {
            return Err(AnalysisError::InsufficientSamples {
                first: n1,
                second: n2,
            });
        }

        let mean1 = Self::mean(group1);
        let mean2 = Self::mean(group2);
        let var1 = Self::sample_variance(group1, mean1);
        let var2 = Self::sample_variance(group2, mean2);

        let pooled_std = (((n1 - 1) as f64 * var1 + (n2 - 1) as f64 * var2)
            / (n1 + n2 - 2) as f64)
            .sqrt();

        if pooled_std == 0.0 {
            return Ok(0.0);
        }
        Ok(Self::round4((mean1 - mean2) / pooled_std))
    }
}
