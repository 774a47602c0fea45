//! HTTP handlers for the web UI
//!
//! Each handler turns the request into a [`UiEvent`], lets the dashboard
//! resolve and run it, and renders the resulting screen.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use askama::Template;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

use super::pages::{
    Chrome, DashboardPage, DetailPage, EvaluatePage, ResultsPage, UploadPage, VERDICTS,
};
use super::state::AppState;
use crate::dashboard::{intents, Screen, Section, UiEvent, View};
use crate::models::{EvaluationFilter, UploadFile, UploadForm, UploadKind};

/// Filter parameters as they arrive from the results form. Values are kept
/// as text so blank or malformed inputs count as "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub jd_id: Option<String>,
    pub min_score: Option<String>,
    pub verdict: Option<String>,
}

impl From<FilterQuery> for EvaluationFilter {
    fn from(query: FilterQuery) -> Self {
        EvaluationFilter::from_form(
            query.jd_id.as_deref(),
            query.min_score.as_deref(),
            query.verdict.as_deref(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct EvaluateForm {
    pub resume_id: Option<String>,
    pub jd_id: Option<String>,
}

fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

// ============================================================================
// Rendering
// ============================================================================

fn render<T: Template>(page: T) -> Response {
    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render template: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn export_href(filter: &EvaluationFilter) -> String {
    if filter.is_empty() {
        "/results/export".to_string()
    } else {
        format!("/results/export?{}", filter.query_string())
    }
}

fn render_screen(state: &AppState, screen: Screen) -> Response {
    let Screen {
        section,
        view,
        notifications,
    } = screen;
    let chrome = Chrome::new(section, notifications);

    match view {
        View::Summary(summary) => render(DashboardPage { chrome, summary }),
        View::Upload(view) => {
            let limits = state.limits();
            render(UploadPage {
                chrome,
                view,
                max_file_mb: limits.max_file_size_bytes / (1024 * 1024),
                accept: limits
                    .allowed_extensions
                    .iter()
                    .map(|ext| format!(".{}", ext))
                    .collect::<Vec<_>>()
                    .join(","),
            })
        }
        View::Evaluate(view) => render(EvaluatePage { chrome, view }),
        View::Results(view) => render(ResultsPage {
            chrome,
            export_href: export_href(&view.filter),
            view,
            verdicts: VERDICTS.to_vec(),
        }),
        View::Detail(detail) => render(DetailPage { chrome, detail }),
        View::Export(export) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.file_name),
                ),
            ],
            export.content,
        )
            .into_response(),
    }
}

async fn run(state: &AppState, event: UiEvent) -> Response {
    let intent = intents::handle(event, state.limits());
    let screen = state.dashboard.dispatch(intent).await;
    render_screen(state, screen)
}

// ============================================================================
// Page Handlers (HTML)
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    run(&state, UiEvent::Navigate(Section::Dashboard)).await
}

pub async fn upload_page(State(state): State<Arc<AppState>>) -> Response {
    run(&state, UiEvent::Navigate(Section::Upload)).await
}

pub async fn evaluate_page(State(state): State<Arc<AppState>>) -> Response {
    run(&state, UiEvent::Navigate(Section::Evaluate)).await
}

pub async fn results_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Response {
    run(&state, UiEvent::ApplyFilters(query.into())).await
}

pub async fn export_results(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Response {
    run(&state, UiEvent::Export(query.into())).await
}

pub async fn evaluation_detail(
    State(state): State<Arc<AppState>>,
    Path(evaluation_id): Path<i64>,
) -> Response {
    run(&state, UiEvent::ViewDetail(evaluation_id)).await
}

pub async fn submit_evaluation(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EvaluateForm>,
) -> Response {
    let event = UiEvent::SubmitEvaluation {
        resume_id: parse_id(form.resume_id.as_deref()),
        jd_id: parse_id(form.jd_id.as_deref()),
    };
    run(&state, event).await
}

/// What came out of an upload form body
enum UploadBody {
    Complete {
        fields: HashMap<String, String>,
        file: Option<UploadFile>,
    },
    /// The file part grew past the size limit; reading stopped there
    Oversized { received: u64 },
}

/// Text fields and the `file` part of an upload form. A file input left
/// empty arrives as a part with no file name and is treated as absent.
async fn read_upload(mut multipart: Multipart, limit: u64) -> Result<UploadBody, MultipartError> {
    let mut fields = HashMap::new();
    let mut file = None;

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let mut content = Vec::new();
            while let Some(chunk) = field.chunk().await? {
                content.extend_from_slice(&chunk);
                if content.len() as u64 > limit {
                    return Ok(UploadBody::Oversized {
                        received: content.len() as u64,
                    });
                }
            }
            if !file_name.is_empty() {
                file = Some(UploadFile::new(file_name, content));
            }
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    Ok(UploadBody::Complete { fields, file })
}

async fn submit_upload(state: &AppState, kind: UploadKind, multipart: Multipart) -> Response {
    let limits = state.limits();
    let (mut fields, file) = match read_upload(multipart, limits.max_file_size_bytes).await {
        Ok(UploadBody::Complete { fields, file }) => (fields, file),
        Ok(UploadBody::Oversized { received }) => {
            debug!(received, "Upload cut off at the size limit");
            return reject_oversized(state, received).await;
        }
        // Body limit hit before the file part could be read
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!("Upload body over the request limit: {}", e);
            return reject_oversized(state, 0).await;
        }
        Err(e) => {
            debug!("Rejected upload body: {}", e);
            return (e.status(), e.body_text()).into_response();
        }
    };
    let mut take = |name: &str| fields.remove(name).unwrap_or_default();

    let form = match kind {
        UploadKind::Resume => UploadForm::Resume {
            student_name: take("student_name"),
            student_email: take("student_email"),
        },
        UploadKind::JobDescription => UploadForm::JobDescription {
            title: take("title"),
            location: take("location"),
        },
    };

    run(state, UiEvent::SubmitUpload { form, file }).await
}

async fn reject_oversized(state: &AppState, received: u64) -> Response {
    let intent = intents::on_oversized_upload(received, state.limits());
    let screen = state.dashboard.dispatch(intent).await;
    render_screen(state, screen)
}

pub async fn upload_resume(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    submit_upload(&state, UploadKind::Resume, multipart).await
}

pub async fn upload_job_description(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    submit_upload(&state, UploadKind::JobDescription, multipart).await
}

// ============================================================================
// API Handlers (JSON)
// ============================================================================

/// Health check endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "resume-dashboard"
    }))
}
