//! Presentation of a single evaluation: the fresh outcome after triggering
//! one, and the stored detail joined with its resume and job description.

use crate::models::{format_score, EvaluationDetail, EvaluationOutcome, ScoreClass};

/// Missing skills shown before collapsing into a "+N more" badge
pub const MAX_MISSING_SKILLS: usize = 8;
/// Suggestions shown with a fresh outcome
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub label: &'static str,
    pub percent: f64,
    pub bar: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeView {
    pub score: String,
    pub score_class: ScoreClass,
    pub verdict: String,
    pub confidence: Option<String>,
    pub sub_scores: Vec<SubScore>,
    pub summary: Option<String>,
    pub missing_skills: Vec<String>,
    /// Count of missing skills beyond `MAX_MISSING_SKILLS`
    pub more_missing: usize,
    pub suggestions: Vec<String>,
    pub skills_analysis: Option<SkillsAnalysisView>,
    pub experience_analysis: Option<ExperienceAnalysisView>,
}

impl OutcomeView {
    pub fn all_skills_present(&self) -> bool {
        self.missing_skills.is_empty()
    }

    pub fn has_advanced_analysis(&self) -> bool {
        self.skills_analysis.is_some() || self.experience_analysis.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsAnalysisView {
    pub matched: u32,
    pub required: u32,
    /// Bonus lines such as `Skill diversity: +5.0%`, only for non-zero bonuses
    pub bonuses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceAnalysisView {
    pub candidate_level: String,
    pub required_level: String,
    pub total_years: f64,
}

fn bonus_line(label: &str, bonus: f64) -> Option<String> {
    (bonus > 0.0).then(|| format!("{}: +{:.1}%", label, bonus * 100.0))
}

impl From<&EvaluationOutcome> for OutcomeView {
    fn from(outcome: &EvaluationOutcome) -> Self {
        let sub_scores = vec![
            SubScore {
                label: "Skills Match",
                percent: outcome.skills_score(),
                bar: "primary",
            },
            SubScore {
                label: "Experience Match",
                percent: outcome.experience_match_score.unwrap_or(0.0),
                bar: "success",
            },
            SubScore {
                label: "Semantic Match",
                percent: outcome.semantic_match_score.unwrap_or(0.0),
                bar: "info",
            },
            SubScore {
                label: "Education Match",
                percent: outcome.education_match_score.unwrap_or(0.0),
                bar: "warning",
            },
        ];

        let analysis = outcome.detailed_analysis.as_ref().filter(|a| !a.is_empty());

        let skills_analysis = analysis.and_then(|a| a.skills_match.as_ref()).map(|skills| {
            let bonuses = skills
                .bonuses
                .as_ref()
                .map(|b| {
                    [
                        bonus_line("Good-to-have skills", b.good_to_have_bonus),
                        bonus_line("Skill diversity", b.diversity_bonus),
                        bonus_line("Domain expertise", b.expertise_bonus),
                    ]
                    .into_iter()
                    .flatten()
                    .collect()
                })
                .unwrap_or_default();
            SkillsAnalysisView {
                matched: skills.skills_matched,
                required: skills.total_skills_required,
                bonuses,
            }
        });

        let experience_analysis = analysis
            .and_then(|a| a.experience_match.as_ref())
            .map(|exp| {
                let level = exp.experience_level.as_ref();
                ExperienceAnalysisView {
                    candidate_level: level
                        .and_then(|l| l.candidate_level.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    required_level: level
                        .and_then(|l| l.required_level.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    total_years: exp.total_years,
                }
            });

        Self {
            score: format_score(outcome.relevance_score),
            score_class: outcome.score_class(),
            verdict: outcome.verdict.clone(),
            confidence: outcome.match_confidence.clone(),
            sub_scores,
            summary: outcome.evaluation_summary.clone().filter(|s| !s.is_empty()),
            missing_skills: outcome
                .missing_skills
                .iter()
                .take(MAX_MISSING_SKILLS)
                .cloned()
                .collect(),
            more_missing: outcome.missing_skills.len().saturating_sub(MAX_MISSING_SKILLS),
            suggestions: outcome
                .suggestions
                .iter()
                .take(MAX_SUGGESTIONS)
                .cloned()
                .collect(),
            skills_analysis,
            experience_analysis,
        }
    }
}

/// Stored evaluation joined with its resume and job description
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub evaluation_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub job_title: String,
    pub job_location: String,
    pub score: String,
    pub score_class: ScoreClass,
    pub verdict: String,
    pub hard_match_percent: f64,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
}

impl From<&EvaluationDetail> for DetailView {
    fn from(detail: &EvaluationDetail) -> Self {
        let evaluation = &detail.evaluation;
        Self {
            evaluation_id: evaluation.id,
            student_name: detail.resume.student_name.clone(),
            student_email: detail.resume.student_email.clone(),
            job_title: detail.job_description.title.clone(),
            job_location: detail.job_description.location.clone(),
            score: format_score(evaluation.relevance_score),
            score_class: evaluation.score_class(),
            verdict: evaluation.verdict.clone(),
            hard_match_percent: evaluation.hard_match_percent(),
            missing_skills: evaluation.missing_skills.clone(),
            suggestions: evaluation.suggestions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome() -> EvaluationOutcome {
        EvaluationOutcome {
            relevance_score: 76.0,
            verdict: "Strong Match".to_string(),
            match_confidence: Some("High".to_string()),
            skills_match_score: Some(80.0),
            experience_match_score: Some(70.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_skills_capped_with_overflow_count() {
        let mut outcome = outcome();
        outcome.missing_skills = (0..11).map(|i| format!("skill-{}", i)).collect();
        let view = OutcomeView::from(&outcome);

        assert_eq!(view.missing_skills.len(), MAX_MISSING_SKILLS);
        assert_eq!(view.more_missing, 3);
        assert!(!view.all_skills_present());
    }

    #[test]
    fn test_suggestions_capped() {
        let mut outcome = outcome();
        outcome.suggestions = (0..9).map(|i| format!("tip {}", i)).collect();
        let view = OutcomeView::from(&outcome);
        assert_eq!(view.suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_no_missing_skills() {
        let view = OutcomeView::from(&outcome());
        assert!(view.all_skills_present());
        assert_eq!(view.more_missing, 0);
        assert_eq!(view.score_class, ScoreClass::High);
        assert_eq!(view.sub_scores[0].percent, 80.0);
        assert_eq!(view.sub_scores[2].percent, 0.0);
    }

    #[test]
    fn test_bonus_lines_only_for_positive_bonuses() {
        let mut outcome = outcome();
        outcome.detailed_analysis = serde_json::from_value(json!({
            "skills_match": {
                "skills_matched": 6,
                "total_skills_required": 8,
                "bonuses": {
                    "good_to_have_bonus": 0.0,
                    "diversity_bonus": 0.05,
                    "expertise_bonus": 0.125
                }
            }
        }))
        .unwrap();
        let view = OutcomeView::from(&outcome);
        let skills = view.skills_analysis.unwrap();

        assert_eq!(
            skills.bonuses,
            vec!["Skill diversity: +5.0%", "Domain expertise: +12.5%"]
        );
        assert!(view.experience_analysis.is_none());
    }

    #[test]
    fn test_experience_levels_default_to_unknown() {
        let mut outcome = outcome();
        outcome.detailed_analysis = serde_json::from_value(json!({
            "experience_match": {"total_years": 3.5}
        }))
        .unwrap();
        let view = OutcomeView::from(&outcome);
        assert!(view.has_advanced_analysis());

        let experience = view.experience_analysis.as_ref().unwrap();
        assert_eq!(experience.candidate_level, "Unknown");
        assert_eq!(experience.total_years, 3.5);
    }

    #[test]
    fn test_empty_analysis_is_not_advanced() {
        let mut outcome = outcome();
        outcome.detailed_analysis = serde_json::from_value(json!({})).unwrap();
        assert!(!OutcomeView::from(&outcome).has_advanced_analysis());
    }
}
