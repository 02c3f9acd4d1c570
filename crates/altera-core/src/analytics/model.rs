//! Typed mirror of the analytics service's JSON payloads.
//!
//! The analytics microservice is an external collaborator; these types give
//! its responses a checked shape on the way in (the schema-validation role
//! the web client performed). Field names follow the wire format.

use serde::{Deserialize, Serialize};

/// One row of `GET /analytics/summary`: a job posting with applicant counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub jd_code: String,
    pub jd_title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub posted: Option<String>,
    pub applicants: u64,
    pub diamonds_found: u64,
}

/// Job header inside the detail payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub posted: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub applied: u64,
    pub diamonds_found: u64,
    pub completion_pct: f64,
    pub completed: u64,
}

/// Relevancy axis entry (heatmap rows).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevancyAxisEntry {
    pub index: usize,
    pub label: String,
    pub value: Option<u8>,
    pub is_no_score: bool,
}

/// Claim-validity axis entry (heatmap columns).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimAxisEntry {
    pub index: usize,
    pub label: String,
    pub bucket: u8,
    pub is_no_score: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapAxes {
    pub relevancy: Vec<RelevancyAxisEntry>,
    pub claim_validity: Vec<ClaimAxisEntry>,
}

/// Candidate entry shown in heatmap cells and the diamonds roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub id: i64,
    pub name: String,
    pub initials: String,
    pub claim_validity_score: f64,
    pub relevancy_score: f64,
    pub combined_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub relevancy: usize,
    pub claim: usize,
    #[serde(default)]
    pub candidates: Vec<CandidateEntry>,
}

/// Relevancy × claim-validity matrix with axis metadata.
///
/// `matrix[row][col]`: 7 rows (5/5 … 0/5, No Score) by 6 columns
/// (>4 … >0, No Score).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heatmap {
    pub matrix: Vec<Vec<u64>>,
    pub axes: HeatmapAxes,
    #[serde(default)]
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distributions {
    /// 7 bins: [No Score, >=0, >=1, >=2, >=3, >=4, =5].
    pub claim_validity: Vec<u64>,
    pub relevancy: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryBlock {
    pub total_candidates: u64,
    pub diamonds_found: u64,
    pub completion_rate: f64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiVariables {
    pub total_applicants: u64,
    pub diamonds_count: u64,
    pub manual_time_per_applicant: u64,
    pub assisted_time_per_applicant: u64,
    pub hourly_rate: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiCalculated {
    pub time_saved_hours: f64,
    pub cost_saved: f64,
    /// Absent when no diamonds were found.
    #[serde(default)]
    pub speed_improvement: Option<f64>,
    pub efficiency_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiReport {
    pub variables: RoiVariables,
    pub calculated: RoiCalculated,
}

/// Mean/median/std-dev over raw (unbucketed) scores. All fields are absent
/// when no candidate carried a score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreStats {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsBlock {
    pub claim_validity: ScoreStats,
    pub relevancy: ScoreStats,
}

/// Full payload of `GET /analytics/job/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    pub jd: JobInfo,
    pub totals: Totals,
    pub heatmap: Heatmap,
    pub distributions: Distributions,
    pub summary: SummaryBlock,
    #[serde(default)]
    pub diamonds: Vec<CandidateEntry>,
    #[serde(default)]
    pub completion_funnel: Vec<FunnelStage>,
    pub roi: RoiReport,
    pub statistics: StatisticsBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_row_decodes_with_nullable_fields() {
        let row: JobSummary = serde_json::from_str(
            r#"{
                "jd_code": "ENG-01",
                "jd_title": "Backend Engineer",
                "status": "open",
                "department": null,
                "team": null,
                "posted": "2026-07-01",
                "applicants": 42,
                "diamonds_found": 3
            }"#,
        )
        .unwrap();
        assert_eq!(row.jd_code, "ENG-01");
        assert!(row.department.is_none());
        assert_eq!(row.diamonds_found, 3);
    }

    #[test]
    fn score_stats_decode_nulls_as_absent() {
        let stats: ScoreStats =
            serde_json::from_str(r#"{"mean": null, "median": null, "std_dev": null}"#).unwrap();
        assert_eq!(
            stats,
            ScoreStats {
                mean: None,
                median: None,
                std_dev: None
            }
        );
    }
}
