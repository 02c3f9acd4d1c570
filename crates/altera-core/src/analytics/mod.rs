mod client;
mod funnel;
mod heatmap;
mod model;
mod roi;
mod score;
mod stats;

pub use client::AnalyticsClient;
pub use funnel::{build_funnel, is_completed, question_progress, CandidateProgress, QuestionStage};
pub use heatmap::{cell_tone, CellTone};
pub use model::{
    CandidateEntry, ClaimAxisEntry, Distributions, FunnelStage, Heatmap, HeatmapAxes, HeatmapCell,
    JobDetail, JobInfo, JobSummary, RelevancyAxisEntry, RoiCalculated, RoiReport, RoiVariables,
    ScoreStats, StatisticsBlock, SummaryBlock, Totals,
};
pub use roi::{compute_roi, RoiInputs};
pub use score::{
    claim_matrix_index, claim_validity_average, claim_validity_axis, claim_validity_bucket,
    combined_score, distribution_bin, initials, is_diamond, relevancy_axis, relevancy_bucket,
    relevancy_matrix_index, relevancy_score, CLAIM_NO_SCORE_INDEX, CLAIM_WEIGHT,
    RELEVANCY_NO_SCORE_INDEX, RELEVANCY_WEIGHT,
};
pub use stats::score_stats;
