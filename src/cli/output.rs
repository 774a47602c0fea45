//! Plain-text rendering of dashboard screens for the terminal

use crate::dashboard::{DashboardSummary, DetailView, OutcomeView, Screen, View};
use crate::dashboard::{EvaluateView, ResultsView, UploadView};

/// Print a screen to stdout
pub fn print_screen(screen: &Screen) {
    print!("{}", format_screen(screen));
}

pub fn format_screen(screen: &Screen) -> String {
    let mut out = String::new();

    for note in &screen.notifications {
        out.push_str(&format!("[{}] {}\n", note.level.as_str().to_uppercase(), note.message));
    }

    match &screen.view {
        View::Summary(summary) => write_summary(&mut out, summary),
        View::Upload(view) => write_upload(&mut out, view),
        View::Evaluate(view) => write_evaluate(&mut out, view),
        View::Results(view) => write_results(&mut out, view),
        View::Detail(detail) => write_detail(&mut out, detail),
        // Written to disk by the caller
        View::Export(_) => {}
    }

    out
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", "=".repeat(60)));
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "=".repeat(60)));
}

fn write_summary(out: &mut String, summary: &DashboardSummary) {
    heading(out, "DASHBOARD");
    out.push_str(&format!("  Resumes:          {}\n", summary.total_resumes));
    out.push_str(&format!("  Job descriptions: {}\n", summary.total_job_descriptions));
    out.push_str(&format!("  Evaluations:      {}\n", summary.total_evaluations));
    out.push_str(&format!("  High scores:      {}\n", summary.high_scores));

    out.push_str("\nRecent Evaluations:\n");
    if summary.recent.is_empty() {
        out.push_str("  No evaluations yet.\n");
    }
    for recent in &summary.recent {
        out.push_str(&format!(
            "  #{} Resume #{} vs Job #{} - {} ({})\n",
            recent.evaluation_id,
            recent.resume_id,
            recent.job_description_id,
            recent.score,
            recent.date
        ));
    }
}

fn write_upload(out: &mut String, view: &UploadView) {
    if let Some(library) = &view.library {
        out.push_str(&format!(
            "Library: {} resumes, {} job descriptions, {} evaluations\n",
            library.total_resumes, library.total_job_descriptions, library.total_evaluations
        ));
    }
}

fn write_evaluate(out: &mut String, view: &EvaluateView) {
    match &view.outcome {
        Some(outcome) => write_outcome(out, outcome),
        None => {
            out.push_str("\nResumes:\n");
            for option in &view.resumes {
                out.push_str(&format!("  {:>4}  {}\n", option.value, option.label));
            }
            out.push_str("\nJob Descriptions:\n");
            for option in &view.job_descriptions {
                out.push_str(&format!("  {:>4}  {}\n", option.value, option.label));
            }
        }
    }
}

fn write_outcome(out: &mut String, outcome: &OutcomeView) {
    heading(out, "EVALUATION RESULT");
    out.push_str(&format!("  Score:   {}\n", outcome.score));
    out.push_str(&format!("  Verdict: {}\n", outcome.verdict));
    if let Some(confidence) = &outcome.confidence {
        out.push_str(&format!("  Confidence: {}\n", confidence));
    }

    out.push_str("\nScore Breakdown:\n");
    for sub in &outcome.sub_scores {
        out.push_str(&format!("  {:<18} {}%\n", sub.label, sub.percent));
    }

    if let Some(summary) = &outcome.summary {
        out.push_str(&format!("\nSummary:\n  {}\n", summary));
    }

    if outcome.all_skills_present() {
        out.push_str("\nAll critical skills are present.\n");
    } else {
        out.push_str("\nMissing Critical Skills:\n");
        for skill in &outcome.missing_skills {
            out.push_str(&format!("  - {}\n", skill));
        }
        if outcome.more_missing > 0 {
            out.push_str(&format!("  +{} more\n", outcome.more_missing));
        }
    }

    if !outcome.suggestions.is_empty() {
        out.push_str("\nRecommendations:\n");
        for suggestion in &outcome.suggestions {
            out.push_str(&format!("  - {}\n", suggestion));
        }
    }

    if let Some(skills) = &outcome.skills_analysis {
        out.push_str(&format!("\nSkills matched: {}/{}\n", skills.matched, skills.required));
        for bonus in &skills.bonuses {
            out.push_str(&format!("  {}\n", bonus));
        }
    }
    if let Some(experience) = &outcome.experience_analysis {
        out.push_str(&format!(
            "Experience: {} (required {}), {} years\n",
            experience.candidate_level, experience.required_level, experience.total_years
        ));
    }
}

fn write_results(out: &mut String, view: &ResultsView) {
    heading(out, "EVALUATION RESULTS");
    if view.table.is_empty() {
        out.push_str("  No evaluations found\n");
        return;
    }

    out.push_str(&format!(
        "  {:>4}  {:<14} {:<10} {:>7}  {:<16} {}\n",
        "ID", "Student", "Job", "Score", "Verdict", "Date"
    ));
    for row in &view.table.rows {
        out.push_str(&format!(
            "  {:>4}  {:<14} {:<10} {:>7}  {:<16} {}\n",
            row.evaluation_id, row.resume, row.job, row.score, row.verdict, row.date
        ));
    }
}

fn write_detail(out: &mut String, detail: &DetailView) {
    heading(out, &format!("EVALUATION #{}", detail.evaluation_id));
    out.push_str(&format!("  Student: {} <{}>\n", detail.student_name, detail.student_email));
    out.push_str(&format!("  Job:     {} ({})\n", detail.job_title, detail.job_location));
    out.push_str(&format!("  Score:   {} - {} Suitability\n", detail.score, detail.verdict));
    out.push_str(&format!("  Hard match: {}%\n", detail.hard_match_percent));

    if !detail.missing_skills.is_empty() {
        out.push_str(&format!("\nMissing Skills: {}\n", detail.missing_skills.join(", ")));
    }
    if !detail.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for suggestion in &detail.suggestions {
            out.push_str(&format!("  - {}\n", suggestion));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Notification, Section};

    #[test]
    fn test_notifications_come_first() {
        let screen = Screen {
            section: Section::Dashboard,
            view: View::Summary(DashboardSummary::default()),
            notifications: vec![Notification::danger("Error loading dashboard data")],
        };
        let text = format_screen(&screen);

        assert!(text.starts_with("[DANGER] Error loading dashboard data\n"));
        assert!(text.contains("No evaluations yet."));
    }

    #[test]
    fn test_empty_results() {
        let screen = Screen {
            section: Section::Results,
            view: View::Results(ResultsView::default()),
            notifications: Vec::new(),
        };
        assert!(format_screen(&screen).contains("No evaluations found"));
    }
}
