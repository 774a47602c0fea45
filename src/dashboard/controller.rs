//! Executes intents against the evaluation service and produces the view
//! to render. Failures never escape: they become notifications on a
//! still-renderable screen.

use chrono::Duration;
use tracing::{debug, info, warn};

use crate::api::{ApiError, EvaluationService};
use crate::cli::{DashboardConfig, UploadLimits};
use crate::models::{EvaluationFilter, JobDescription, Resume, UploadRequest};

use super::breakdown::{DetailView, OutcomeView};
use super::intents::Intent;
use super::notify::Notification;
use super::results::{job_filter_options, ResultsTable, CSV_FILE_NAME};
use super::summary::DashboardSummary;
use super::view::Section;

#[derive(Debug, Clone, PartialEq)]
pub struct PickerOption {
    pub value: i64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluateView {
    pub resumes: Vec<PickerOption>,
    pub job_descriptions: Vec<PickerOption>,
    pub selected_resume: Option<i64>,
    pub selected_jd: Option<i64>,
    pub outcome: Option<OutcomeView>,
}

impl EvaluateView {
    pub fn is_resume_selected(&self, option: &PickerOption) -> bool {
        self.selected_resume == Some(option.value)
    }

    pub fn is_jd_selected(&self, option: &PickerOption) -> bool {
        self.selected_jd == Some(option.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadView {
    /// Refreshed library counts after a successful upload
    pub library: Option<DashboardSummary>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
    pub filter: EvaluationFilter,
    pub table: ResultsTable,
    pub job_options: Vec<i64>,
}

impl ResultsView {
    pub fn is_job_selected(&self, jd_id: &i64) -> bool {
        self.filter.jd_id == Some(*jd_id)
    }

    pub fn is_verdict_selected(&self, verdict: &str) -> bool {
        self.filter.verdict.as_deref() == Some(verdict)
    }

    pub fn min_score_value(&self) -> String {
        self.filter
            .min_score
            .map(|score| score.to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Summary(DashboardSummary),
    Upload(UploadView),
    Evaluate(EvaluateView),
    Results(ResultsView),
    Detail(DetailView),
    Export(CsvExport),
}

/// Everything needed to render one response
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub section: Section,
    pub view: View,
    pub notifications: Vec<Notification>,
}

impl Screen {
    fn new(section: Section, view: View) -> Self {
        Self {
            section,
            view,
            notifications: Vec::new(),
        }
    }

    fn with(mut self, notification: Notification) -> Self {
        self.notifications.push(notification);
        self
    }

    /// First warning or error raised while producing this screen
    pub fn failure(&self) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.level.is_failure())
    }
}

/// The dashboard client: intents in, screens out
#[derive(Debug, Clone)]
pub struct Dashboard<S> {
    service: S,
    limits: UploadLimits,
    recent_limit: usize,
    notification_ttl: Duration,
}

impl<S: EvaluationService> Dashboard<S> {
    pub fn new(service: S, config: &DashboardConfig) -> Self {
        Self {
            service,
            limits: config.uploads.clone(),
            recent_limit: config.ui.recent_limit,
            notification_ttl: config.ui.notification_ttl(),
        }
    }

    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    fn notice(&self, notification: Notification) -> Notification {
        notification.with_ttl(self.notification_ttl)
    }

    pub async fn dispatch(&self, intent: Intent) -> Screen {
        debug!(
            section = ?intent.section(),
            rejected = intent.is_rejection(),
            "dispatching intent"
        );
        match intent {
            Intent::LoadSummary => self.load_summary().await,
            Intent::ShowUploadForms => {
                Screen::new(Section::Upload, View::Upload(UploadView::default()))
            }
            Intent::LoadEvaluateOptions => self.load_evaluate_options().await,
            Intent::LoadResults(filter) => self.load_results(filter).await,
            Intent::Upload(request) => self.upload(request).await,
            Intent::Evaluate { resume_id, jd_id } => self.evaluate(resume_id, jd_id).await,
            Intent::ShowDetail(id) => self.show_detail(id).await,
            Intent::Export(filter) => self.export(filter).await,
            Intent::Reject {
                section,
                notification,
            } => {
                warn!(section = ?section, message = %notification.message, "rejected locally");
                let screen = self.load_section(section).await;
                screen.with(self.notice(notification))
            }
        }
    }

    async fn load_section(&self, section: Section) -> Screen {
        match section {
            Section::Dashboard => self.load_summary().await,
            Section::Upload => Screen::new(Section::Upload, View::Upload(UploadView::default())),
            Section::Evaluate => self.load_evaluate_options().await,
            Section::Results => self.load_results(EvaluationFilter::default()).await,
        }
    }

    async fn fetch_summary(&self) -> Result<DashboardSummary, ApiError> {
        let no_filter = EvaluationFilter::default();
        let (resumes, job_descriptions, evaluations) = tokio::try_join!(
            self.service.list_resumes(),
            self.service.list_job_descriptions(),
            self.service.list_evaluations(&no_filter),
        )?;

        Ok(DashboardSummary::compute(
            &resumes,
            &job_descriptions,
            &evaluations,
            self.recent_limit,
        ))
    }

    pub async fn load_summary(&self) -> Screen {
        match self.fetch_summary().await {
            Ok(summary) => {
                info!(
                    resumes = summary.total_resumes,
                    job_descriptions = summary.total_job_descriptions,
                    evaluations = summary.total_evaluations,
                    "dashboard loaded"
                );
                Screen::new(Section::Dashboard, View::Summary(summary))
            }
            Err(e) => {
                warn!("Error loading dashboard: {}", e);
                Screen::new(Section::Dashboard, View::Summary(DashboardSummary::default()))
                    .with(self.notice(Notification::danger("Error loading dashboard data")))
            }
        }
    }

    async fn fetch_pickers(&self) -> Result<(Vec<Resume>, Vec<JobDescription>), ApiError> {
        tokio::try_join!(
            self.service.list_resumes(),
            self.service.list_job_descriptions()
        )
    }

    fn evaluate_view(resumes: &[Resume], job_descriptions: &[JobDescription]) -> EvaluateView {
        EvaluateView {
            resumes: resumes
                .iter()
                .map(|r| PickerOption {
                    value: r.id,
                    label: r.label(),
                })
                .collect(),
            job_descriptions: job_descriptions
                .iter()
                .map(|j| PickerOption {
                    value: j.id,
                    label: j.label(),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub async fn load_evaluate_options(&self) -> Screen {
        match self.fetch_pickers().await {
            Ok((resumes, job_descriptions)) => Screen::new(
                Section::Evaluate,
                View::Evaluate(Self::evaluate_view(&resumes, &job_descriptions)),
            ),
            Err(e) => {
                warn!("Error loading evaluate data: {}", e);
                Screen::new(Section::Evaluate, View::Evaluate(EvaluateView::default()))
                    .with(self.notice(Notification::danger("Error loading data")))
            }
        }
    }

    pub async fn load_results(&self, filter: EvaluationFilter) -> Screen {
        let fetched = if filter.is_empty() {
            self.service
                .list_evaluations(&filter)
                .await
                .map(|all| (all.clone(), all))
        } else {
            let no_filter = EvaluationFilter::default();
            tokio::try_join!(
                self.service.list_evaluations(&filter),
                self.service.list_evaluations(&no_filter)
            )
        };

        match fetched {
            Ok((evaluations, all)) => {
                info!(filter = ?filter, rows = evaluations.len(), "results loaded");
                Screen::new(
                    Section::Results,
                    View::Results(ResultsView {
                        table: ResultsTable::from_evaluations(&evaluations),
                        job_options: job_filter_options(&all),
                        filter,
                    }),
                )
            }
            Err(e) => {
                warn!("Error loading results: {}", e);
                let message = if filter.is_empty() {
                    "Error loading results"
                } else {
                    "Error applying filters"
                };
                Screen::new(
                    Section::Results,
                    View::Results(ResultsView {
                        filter,
                        ..Default::default()
                    }),
                )
                .with(self.notice(Notification::danger(message)))
            }
        }
    }

    pub async fn upload(&self, request: UploadRequest) -> Screen {
        let kind = request.form.kind();
        info!(kind = kind.label(), file = %request.file.file_name, "uploading");

        match self.service.upload(request).await {
            Ok(_) => {
                let screen = Screen::new(Section::Upload, View::Upload(UploadView::default()))
                    .with(self.notice(Notification::success(format!(
                        "{} uploaded successfully!",
                        kind.label()
                    ))));
                match self.fetch_summary().await {
                    Ok(summary) => Screen {
                        view: View::Upload(UploadView {
                            library: Some(summary),
                        }),
                        ..screen
                    },
                    Err(e) => {
                        warn!("Error reloading dashboard after upload: {}", e);
                        let stale = Notification::info("Dashboard counts could not be refreshed");
                        screen.with(self.notice(stale))
                    }
                }
            }
            Err(e) => {
                warn!("Upload error: {}", e);
                Screen::new(Section::Upload, View::Upload(UploadView::default()))
                    .with(self.notice(Notification::danger(e.notification_text("Upload failed"))))
            }
        }
    }

    pub async fn evaluate(&self, resume_id: i64, jd_id: i64) -> Screen {
        info!(resume_id, jd_id, "starting evaluation");

        let (outcome, pickers) =
            tokio::join!(self.service.evaluate(resume_id, jd_id), self.fetch_pickers());

        let mut view = match pickers {
            Ok((resumes, job_descriptions)) => Self::evaluate_view(&resumes, &job_descriptions),
            Err(e) => {
                warn!("Error loading evaluate data: {}", e);
                EvaluateView::default()
            }
        };
        view.selected_resume = Some(resume_id);
        view.selected_jd = Some(jd_id);

        match outcome {
            Ok(outcome) => {
                info!(
                    score = outcome.relevance_score,
                    verdict = %outcome.verdict,
                    "evaluation completed"
                );
                view.outcome = Some(OutcomeView::from(&outcome));
                Screen::new(Section::Evaluate, View::Evaluate(view))
                    .with(self.notice(Notification::success("Evaluation completed successfully!")))
            }
            Err(e) => {
                warn!("Evaluation error: {}", e);
                Screen::new(Section::Evaluate, View::Evaluate(view)).with(
                    self.notice(Notification::danger(e.notification_text("Evaluation failed"))),
                )
            }
        }
    }

    pub async fn show_detail(&self, evaluation_id: i64) -> Screen {
        match self.service.get_evaluation(evaluation_id).await {
            Ok(detail) => Screen::new(Section::Results, View::Detail(DetailView::from(&detail))),
            Err(e) => {
                warn!(evaluation_id, "Error loading evaluation details: {}", e);
                self.load_results(EvaluationFilter::default())
                    .await
                    .with(self.notice(Notification::danger("Error loading evaluation details")))
            }
        }
    }

    pub async fn export(&self, filter: EvaluationFilter) -> Screen {
        match self.service.list_evaluations(&filter).await {
            Ok(evaluations) => {
                let table = ResultsTable::from_evaluations(&evaluations);
                info!(rows = table.rows.len(), "exporting results");
                Screen::new(
                    Section::Results,
                    View::Export(CsvExport {
                        file_name: CSV_FILE_NAME.to_string(),
                        content: table.to_csv(),
                    }),
                )
            }
            Err(e) => {
                warn!("Error exporting results: {}", e);
                self.load_results(filter)
                    .await
                    .with(self.notice(Notification::danger("Error exporting results")))
            }
        }
    }
}
