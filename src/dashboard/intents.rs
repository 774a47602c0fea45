//! UI events and the intents they resolve to.
//!
//! Event handling is pure: it decides what should happen next without
//! touching the network, so local rejections can be tested directly.

use crate::cli::UploadLimits;
use crate::models::{EvaluationFilter, UploadFile, UploadForm, UploadRequest};

use super::notify::Notification;
use super::upload::{prepare_upload, UploadRejection};
use super::view::Section;

/// Something the user did
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Navigate(Section),
    SubmitUpload {
        form: UploadForm,
        file: Option<UploadFile>,
    },
    SubmitEvaluation {
        resume_id: Option<i64>,
        jd_id: Option<i64>,
    },
    ApplyFilters(EvaluationFilter),
    ViewDetail(i64),
    Export(EvaluationFilter),
}

/// What the dashboard should do in response
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    LoadSummary,
    ShowUploadForms,
    LoadEvaluateOptions,
    LoadResults(EvaluationFilter),
    Upload(UploadRequest),
    Evaluate { resume_id: i64, jd_id: i64 },
    ShowDetail(i64),
    Export(EvaluationFilter),
    /// Refused locally; no request is made
    Reject {
        section: Section,
        notification: Notification,
    },
}

impl Intent {
    /// The section whose view this intent renders into
    pub fn section(&self) -> Section {
        match self {
            Intent::LoadSummary => Section::Dashboard,
            Intent::ShowUploadForms | Intent::Upload(_) => Section::Upload,
            Intent::LoadEvaluateOptions | Intent::Evaluate { .. } => Section::Evaluate,
            Intent::LoadResults(_) | Intent::ShowDetail(_) | Intent::Export(_) => {
                Section::Results
            }
            Intent::Reject { section, .. } => *section,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Intent::Reject { .. })
    }
}

/// Intent for entering a section
pub fn on_navigate(section: Section) -> Intent {
    match section {
        Section::Dashboard => Intent::LoadSummary,
        Section::Upload => Intent::ShowUploadForms,
        Section::Evaluate => Intent::LoadEvaluateOptions,
        Section::Results => Intent::LoadResults(EvaluationFilter::default()),
    }
}

pub fn on_submit_upload(
    form: UploadForm,
    file: Option<UploadFile>,
    limits: &UploadLimits,
) -> Intent {
    match prepare_upload(form, file, limits) {
        Ok(request) => Intent::Upload(request),
        Err(rejection) => Intent::Reject {
            section: Section::Upload,
            notification: Notification::warning(rejection.to_string()),
        },
    }
}

/// Upload whose body was cut off once it passed the size limit.
/// `received` is how many file bytes were read before giving up.
pub fn on_oversized_upload(received: u64, limits: &UploadLimits) -> Intent {
    let rejection = UploadRejection::TooLarge {
        size: received.max(limits.max_file_size_bytes.saturating_add(1)),
        limit_mb: limits.max_file_size_bytes / (1024 * 1024),
    };
    Intent::Reject {
        section: Section::Upload,
        notification: Notification::warning(rejection.to_string()),
    }
}

pub fn on_submit_evaluation(resume_id: Option<i64>, jd_id: Option<i64>) -> Intent {
    match (resume_id, jd_id) {
        (Some(resume_id), Some(jd_id)) => Intent::Evaluate { resume_id, jd_id },
        _ => Intent::Reject {
            section: Section::Evaluate,
            notification: Notification::warning(
                "Please select both resume and job description",
            ),
        },
    }
}

/// Resolve any UI event to an intent
pub fn handle(event: UiEvent, limits: &UploadLimits) -> Intent {
    match event {
        UiEvent::Navigate(section) => on_navigate(section),
        UiEvent::SubmitUpload { form, file } => on_submit_upload(form, file, limits),
        UiEvent::SubmitEvaluation { resume_id, jd_id } => on_submit_evaluation(resume_id, jd_id),
        UiEvent::ApplyFilters(filter) => Intent::LoadResults(filter),
        UiEvent::ViewDetail(id) => Intent::ShowDetail(id),
        UiEvent::Export(filter) => Intent::Export(filter),
    }
}
