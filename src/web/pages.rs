//! Askama page templates, one per view.

use askama::Template;
use chrono::Utc;

use crate::dashboard::{
    DashboardSummary, DetailView, EvaluateView, NavItem, Notification, ResultsView, Section,
    UploadView,
};

/// Chrome shared by every page
pub struct Chrome {
    pub title: &'static str,
    pub nav: Vec<NavItem>,
    pub notifications: Vec<Notification>,
}

impl Chrome {
    pub fn new(section: Section, notifications: Vec<Notification>) -> Self {
        let now = Utc::now();
        Self {
            title: section.title(),
            nav: section.nav(),
            notifications: notifications
                .into_iter()
                .filter(|n| !n.is_expired(now))
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub chrome: Chrome,
    pub summary: DashboardSummary,
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage {
    pub chrome: Chrome,
    pub view: UploadView,
    pub max_file_mb: u64,
    pub accept: String,
}

#[derive(Template)]
#[template(path = "evaluate.html")]
pub struct EvaluatePage {
    pub chrome: Chrome,
    pub view: EvaluateView,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage {
    pub chrome: Chrome,
    pub view: ResultsView,
    pub export_href: String,
    pub verdicts: Vec<&'static str>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage {
    pub chrome: Chrome,
    pub detail: DetailView,
}

/// Verdicts offered by the results filter
pub const VERDICTS: [&str; 3] = ["High", "Medium", "Low"];
