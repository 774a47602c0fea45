use crate::models::{format_score, Evaluation, JobDescription, Resume, ScoreClass};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Counts and recent activity shown on the dashboard view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub total_resumes: usize,
    pub total_job_descriptions: usize,
    pub total_evaluations: usize,
    pub high_scores: usize,
    pub recent: Vec<RecentEvaluation>,
}

/// One line of the "recent evaluations" list
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEvaluation {
    pub evaluation_id: i64,
    pub resume_id: i64,
    pub job_description_id: i64,
    pub score: String,
    pub score_class: ScoreClass,
    pub date: String,
}

impl From<&Evaluation> for RecentEvaluation {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            evaluation_id: evaluation.id,
            resume_id: evaluation.resume_id,
            job_description_id: evaluation.job_description_id,
            score: format_score(evaluation.relevance_score),
            score_class: evaluation.score_class(),
            date: evaluation.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Number of evaluations whose verdict is exactly `High`
pub fn high_score_count(evaluations: &[Evaluation]) -> usize {
    evaluations.iter().filter(|e| e.is_high()).count()
}

impl DashboardSummary {
    /// Summarise the three library listings. The recent list keeps the
    /// service's ordering and takes the first `recent_limit` entries.
    pub fn compute(
        resumes: &[Resume],
        job_descriptions: &[JobDescription],
        evaluations: &[Evaluation],
        recent_limit: usize,
    ) -> Self {
        Self {
            total_resumes: resumes.len(),
            total_job_descriptions: job_descriptions.len(),
            total_evaluations: evaluations.len(),
            high_scores: high_score_count(evaluations),
            recent: evaluations
                .iter()
                .take(recent_limit)
                .map(RecentEvaluation::from)
                .collect(),
        }
    }
}
