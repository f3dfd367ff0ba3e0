//! Stats module - segmenting, aggregation and statistical measures

mod calculator;
mod engagement;
mod keyed;
mod segmenter;
mod similarity;

pub use calculator::{StatsCalculator, DECIMALS};
pub use engagement::{aggregate_by_platform, PlatformStat, PlatformStats};
pub use keyed::KeyedMap;
pub use segmenter::{segment_by_profession, EngagementRecord, ProfessionSegments, SegmentMap};
pub use similarity::{age_income_similarity, SimilarityPair};
