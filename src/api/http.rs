use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiError, ApiResult, EvaluationService};
use crate::cli::ServiceSettings;
use crate::models::{
    Evaluation, EvaluationDetail, EvaluationFilter, EvaluationOutcome, JobDescription, Resume,
    UploadReceipt, UploadRequest,
};

const USER_AGENT_VALUE: &str = concat!("resume-dashboard/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed client for the evaluation service
#[derive(Debug, Clone)]
pub struct HttpEvaluationService {
    client: Client,
    base_url: String,
}

impl HttpEvaluationService {
    pub fn new(settings: &ServiceSettings) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(USER_AGENT_VALUE)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a JSON body, mapping non-2xx to `ApiError::Status`
    async fn send_json<T: DeserializeOwned>(&self, url: &str, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            let detail = error_detail(&body);
            warn!(url = %url, status = status.as_u16(), detail = ?detail, "evaluation service error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        self.send_json(&url, self.client.get(&url)).await
    }
}

/// Pull `detail` out of an error body. FastAPI validation errors carry a
/// list there, which is passed through as JSON text.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl EvaluationService for HttpEvaluationService {
    async fn list_resumes(&self) -> ApiResult<Vec<Resume>> {
        self.get_json("/resumes").await
    }

    async fn list_job_descriptions(&self) -> ApiResult<Vec<JobDescription>> {
        self.get_json("/job-descriptions").await
    }

    async fn list_evaluations(&self, filter: &EvaluationFilter) -> ApiResult<Vec<Evaluation>> {
        let url = self.url("/evaluations");
        debug!(url = %url, filter = ?filter, "GET");
        let request = self.client.get(&url).query(&filter.query_pairs());
        self.send_json(&url, request).await
    }

    async fn get_evaluation(&self, evaluation_id: i64) -> ApiResult<EvaluationDetail> {
        self.get_json(&format!("/evaluation/{}", evaluation_id)).await
    }

    async fn upload(&self, request: UploadRequest) -> ApiResult<UploadReceipt> {
        let url = self.url(request.form.kind().path());
        debug!(url = %url, file = %request.file.file_name, size = request.file.size(), "POST upload");

        let mut form = Form::new();
        for (name, value) in request.form.fields() {
            form = form.text(name, value.to_string());
        }
        let part = Part::bytes(request.file.content).file_name(request.file.file_name);
        form = form.part("file", part);

        self.send_json(&url, self.client.post(&url).multipart(form))
            .await
    }

    async fn evaluate(&self, resume_id: i64, jd_id: i64) -> ApiResult<EvaluationOutcome> {
        let url = self.url(&format!("/evaluate/{}/{}", resume_id, jd_id));
        debug!(url = %url, "POST evaluate");
        self.send_json(&url, self.client.post(&url)).await
    }
}
