//! Report Module
//! Presents an [`AnalysisReport`] as polars tables or JSON.

use crate::pipeline::AnalysisReport;
use crate::stats::{PlatformStats, ProfessionSegments, SegmentMap};
use polars::prelude::*;

/// One row per platform: platform, total, average, stdev.
pub fn platform_frame(platforms: &PlatformStats) -> PolarsResult<DataFrame> {
    let mut names: Vec<String> = Vec::with_capacity(platforms.len());
    let mut totals: Vec<f64> = Vec::with_capacity(platforms.len());
    let mut averages: Vec<f64> = Vec::with_capacity(platforms.len());
    let mut stdevs: Vec<f64> = Vec::with_capacity(platforms.len());

    for (platform, stat) in platforms.iter() {
        names.push(platform.to_string());
        totals.push(stat.total);
        averages.push(stat.average);
        stdevs.push(stat.stdev);
    }

    DataFrame::new(vec![
        Column::new("platform".into(), names),
        Column::new("total".into(), totals),
        Column::new("average".into(), averages),
        Column::new("stdev".into(), stdevs),
    ])
}

/// One row per user: segment, id, age, time_spent_hour, engagement_score.
pub fn segment_frame(segments: &ProfessionSegments) -> PolarsResult<DataFrame> {
    let mut labels: Vec<String> = Vec::new();
    let mut ids: Vec<String> = Vec::new();
    let mut ages: Vec<u32> = Vec::new();
    let mut hours: Vec<f64> = Vec::new();
    let mut scores: Vec<f64> = Vec::new();

    let parts: [(&str, &SegmentMap); 2] = [
        ("student", &segments.students),
        ("non_student", &segments.non_students),
    ];
    for (label, map) in parts {
        for (id, record) in map.iter() {
            labels.push(label.to_string());
            ids.push(id.to_string());
            ages.push(record.age);
            hours.push(record.time_spent_hour);
            scores.push(record.engagement_score);
        }
    }

    DataFrame::new(vec![
        Column::new("segment".into(), labels),
        Column::new("id".into(), ids),
        Column::new("age".into(), ages),
        Column::new("time_spent_hour".into(), hours),
        Column::new("engagement_score".into(), scores),
    ])
}

/// Human-readable report: both tables followed by the scalar measures.
pub fn render_text(report: &AnalysisReport) -> PolarsResult<String> {
    if report.is_empty() {
        return Ok("No data to analyze.\n".to_string());
    }

    let segments = segment_frame(&report.segments)?;
    let platforms = platform_frame(&report.platforms)?;

    let mut out = format!(
        "Profession segments:\n{segments}\n\nPlatform engagement:\n{platforms}\n\n"
    );
    if let Some(sim) = &report.similarity {
        out.push_str(&format!(
            "Age/income cosine similarity:\n  students:     {:.4}\n  non-students: {:.4}\n",
            sim.student, sim.non_student
        ));
    }
    out.push_str(&format!(
        "Cohen's d (students vs non-students): {:.4}\n",
        report.cohens_d
    ));

    Ok(out)
}

pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
