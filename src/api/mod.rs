//! Client side of the evaluation service contract.
//!
//! The service owns parsing, matching and scoring; this module only knows
//! its endpoints and payload shapes.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Evaluation, EvaluationDetail, EvaluationFilter, EvaluationOutcome, JobDescription, Resume,
    UploadReceipt, UploadRequest,
};

mod http;

pub use http::HttpEvaluationService;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("invalid response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    /// The `detail` message the service attached to an error response
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for a user-facing notification.
    ///
    /// Service errors show their `detail`, or `failed` when there is none.
    /// Transport failures get a retry hint.
    pub fn notification_text(&self, failed: &str) -> String {
        match self {
            ApiError::Status { .. } => self
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| failed.to_string()),
            ApiError::Http(_) | ApiError::Decode { .. } => format!("{}. Please try again.", failed),
        }
    }
}

/// Operations offered by the evaluation service
#[async_trait]
pub trait EvaluationService: Send + Sync {
    async fn list_resumes(&self) -> ApiResult<Vec<Resume>>;

    async fn list_job_descriptions(&self) -> ApiResult<Vec<JobDescription>>;

    async fn list_evaluations(&self, filter: &EvaluationFilter) -> ApiResult<Vec<Evaluation>>;

    async fn get_evaluation(&self, evaluation_id: i64) -> ApiResult<EvaluationDetail>;

    async fn upload(&self, request: UploadRequest) -> ApiResult<UploadReceipt>;

    async fn evaluate(&self, resume_id: i64, jd_id: i64) -> ApiResult<EvaluationOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_prefers_detail() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Unsupported file format".to_string()),
        };
        assert_eq!(err.detail(), Some("Unsupported file format"));
        assert_eq!(err.notification_text("Upload failed"), "Unsupported file format");
    }

    #[test]
    fn test_notification_fallback_without_detail() {
        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.notification_text("Upload failed"), "Upload failed");
    }

    #[test]
    fn test_notification_for_bad_payload() {
        let err = ApiError::Decode {
            url: "http://svc/evaluate/1/2".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.notification_text("Evaluation failed"),
            "Evaluation failed. Please try again."
        );
    }
}
