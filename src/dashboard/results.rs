//! Results table and its CSV export.

use crate::models::{format_score, verdict_color, Evaluation, ScoreClass};

use super::summary::DATE_FORMAT;

pub const CSV_HEADER: &str = "Student,Job Title,Score,Verdict,Date";
pub const CSV_FILE_NAME: &str = "evaluation_results.csv";
pub const EMPTY_TABLE_MESSAGE: &str = "No evaluations found";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub evaluation_id: i64,
    pub resume: String,
    pub job: String,
    pub score: String,
    pub score_class: ScoreClass,
    pub verdict: String,
    pub verdict_color: &'static str,
    pub date: String,
}

impl ResultRow {
    /// Text of the data cells, in column order
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.resume.clone(),
            self.job.clone(),
            self.score.clone(),
            self.verdict.clone(),
            self.date.clone(),
        ]
    }
}

impl From<&Evaluation> for ResultRow {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            evaluation_id: evaluation.id,
            resume: format!("Resume #{}", evaluation.resume_id),
            job: format!("Job #{}", evaluation.job_description_id),
            score: format_score(evaluation.relevance_score),
            score_class: evaluation.score_class(),
            verdict: evaluation.verdict.clone(),
            verdict_color: verdict_color(&evaluation.verdict),
            date: evaluation.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// The rendered results table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    pub rows: Vec<ResultRow>,
}

impl ResultsTable {
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        Self {
            rows: evaluations.iter().map(ResultRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text of every rendered row, including the single-cell
    /// placeholder row shown when the table is empty
    pub fn rendered_cells(&self) -> Vec<Vec<String>> {
        if self.rows.is_empty() {
            return vec![vec![EMPTY_TABLE_MESSAGE.to_string()]];
        }
        self.rows.iter().map(ResultRow::cells).collect()
    }

    pub fn to_csv(&self) -> String {
        rows_to_csv(&self.rendered_cells())
    }
}

/// Distinct job description ids in first-seen order, for the job filter
pub fn job_filter_options(evaluations: &[Evaluation]) -> Vec<i64> {
    let mut ids = Vec::new();
    for evaluation in evaluations {
        if !ids.contains(&evaluation.job_description_id) {
            ids.push(evaluation.job_description_id);
        }
    }
    ids
}

/// Serialize table rows under the fixed header. Rows with at most one
/// non-empty cell (placeholders, spacers) are skipped.
pub fn rows_to_csv(rows: &[Vec<String>]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for row in rows {
        let filled = row.iter().filter(|cell| !cell.trim().is_empty()).count();
        if filled <= 1 {
            continue;
        }
        let line: Vec<String> = row.iter().map(|cell| escape_field(cell.trim())).collect();
        csv.push_str(&line.join(","));
        csv.push('\n');
    }

    csv
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
