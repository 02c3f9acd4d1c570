//! HTTP client for the analytics microservice.
//!
//! The service is an external collaborator; this client wraps its two
//! endpoints and decodes the responses into the typed model. Every request
//! carries the tenant slug as a query parameter.

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::analytics::model::{JobDetail, JobSummary};
use crate::error::ApiError;
use crate::storage::ApiConfig;

/// Client for `GET /analytics/summary` and `GET /analytics/job/{code}`.
#[derive(Debug)]
pub struct AnalyticsClient {
    http: Client,
    base_url: Url,
    tenant: String,
}

impl AnalyticsClient {
    /// Build a client for the given service base URL and tenant slug.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse.
    pub fn new(base_url: &str, tenant: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            http: Client::new(),
            base_url,
            tenant: tenant.to_string(),
        })
    }

    /// Build a client from the application config.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, &config.tenant)
    }

    /// All job postings for the tenant, with applicant and diamond counts.
    pub async fn fetch_summary(&self) -> Result<Vec<JobSummary>, ApiError> {
        self.get_json("analytics/summary").await
    }

    /// Full dashboard payload for one job posting.
    pub async fn fetch_job_detail(&self, jd_code: &str) -> Result<JobDetail, ApiError> {
        self.get_json(&format!("analytics/job/{jd_code}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                message: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("tenant", &self.tenant);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const SUMMARY_BODY: &str = r#"[
        {
            "jd_code": "ENG-01",
            "jd_title": "Backend Engineer",
            "status": "open",
            "department": "Engineering",
            "team": "Platform",
            "posted": "2026-07-01",
            "applicants": 42,
            "diamonds_found": 3
        },
        {
            "jd_code": "SLS-02",
            "jd_title": "Account Executive",
            "status": null,
            "department": null,
            "team": null,
            "posted": null,
            "applicants": 7,
            "diamonds_found": 0
        }
    ]"#;

    #[tokio::test]
    async fn fetch_summary_decodes_rows_and_sends_tenant() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/analytics/summary")
            .match_query(Matcher::UrlEncoded("tenant".into(), "acme".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SUMMARY_BODY)
            .create_async()
            .await;

        let client = AnalyticsClient::new(&server.url(), "acme").unwrap();
        let rows = client.fetch_summary().await.unwrap();

        mock.assert_async().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].jd_code, "ENG-01");
        assert_eq!(rows[0].diamonds_found, 3);
        assert!(rows[1].department.is_none());
    }

    #[tokio::test]
    async fn fetch_job_detail_decodes_full_payload() {
        let body = r#"{
            "jd": {"code": "ENG-01", "title": "Backend Engineer", "status": "open",
                   "department": "Engineering", "team": "Platform", "posted": "2026-07-01"},
            "totals": {"applied": 3, "diamonds_found": 1, "completion_pct": 66.7, "completed": 2},
            "heatmap": {
                "matrix": [[1,0,0,0,0,0],[0,0,0,0,0,0],[0,1,0,0,0,0],
                           [0,0,0,0,0,0],[0,0,0,0,0,0],[0,0,0,0,0,0],[0,0,0,0,0,1]],
                "axes": {
                    "relevancy": [
                        {"index": 0, "label": "5/5", "value": 5, "is_no_score": false},
                        {"index": 6, "label": "No Score", "value": null, "is_no_score": true}
                    ],
                    "claim_validity": [
                        {"index": 0, "label": ">4", "bucket": 5, "is_no_score": false},
                        {"index": 5, "label": "No Score", "bucket": 0, "is_no_score": true}
                    ]
                },
                "cells": [
                    {"relevancy": 0, "claim": 0, "candidates": [
                        {"id": 11, "name": "Ada Lovelace", "initials": "AL",
                         "claim_validity_score": 4.5, "relevancy_score": 5.0,
                         "combined_score": 4.73}
                    ]}
                ]
            },
            "distributions": {"claim_validity": [1,0,0,0,1,1,0], "relevancy": [1,0,0,0,0,1,1]},
            "summary": {"total_candidates": 3, "diamonds_found": 1,
                        "completion_rate": 66.7, "last_updated": "2026-08-20T09:30:00"},
            "diamonds": [
                {"id": 11, "name": "Ada Lovelace", "initials": "AL",
                 "claim_validity_score": 4.5, "relevancy_score": 5.0, "combined_score": 4.73}
            ],
            "completion_funnel": [
                {"stage": "Applied (Resume Upload)", "count": 3, "percentage": 100.0},
                {"stage": "Question 1 Completed", "count": 2, "percentage": 66.7}
            ],
            "roi": {
                "variables": {"total_applicants": 3, "diamonds_count": 1,
                              "manual_time_per_applicant": 10,
                              "assisted_time_per_applicant": 5, "hourly_rate": 50},
                "calculated": {"time_saved_hours": 0.42, "cost_saved": 20.83,
                               "speed_improvement": 6.0, "efficiency_percentage": 33.3}
            },
            "statistics": {
                "claim_validity": {"mean": 3.1, "median": 3.2, "std_dev": 1.2},
                "relevancy": {"mean": null, "median": null, "std_dev": null}
            }
        }"#;

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/analytics/job/ENG-01")
            .match_query(Matcher::UrlEncoded("tenant".into(), "acme".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = AnalyticsClient::new(&server.url(), "acme").unwrap();
        let detail = client.fetch_job_detail("ENG-01").await.unwrap();

        mock.assert_async().await;
        assert_eq!(detail.jd.code, "ENG-01");
        assert_eq!(detail.heatmap.matrix.len(), 7);
        assert_eq!(detail.heatmap.cells[0].candidates[0].initials, "AL");
        assert_eq!(detail.roi.calculated.speed_improvement, Some(6.0));
        assert!(detail.statistics.relevancy.mean.is_none());
        assert_eq!(detail.completion_funnel.len(), 2);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/analytics/job/NOPE")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("job not found")
            .create_async()
            .await;

        let client = AnalyticsClient::new(&server.url(), "acme").unwrap();
        let err = client.fetch_job_detail("NOPE").await.unwrap_err();
        match err {
            ApiError::Status { status, .. } => assert_eq!(status, 404),
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/analytics/summary")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = AnalyticsClient::new(&server.url(), "acme").unwrap();
        let err = client.fetch_summary().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = AnalyticsClient::new("not a url", "acme").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }
}
