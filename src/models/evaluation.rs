use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::library::{JobDescription, Resume};
use super::wire;

/// Visual class used for score badges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreClass {
    High,
    Medium,
    Low,
}

impl ScoreClass {
    /// Map a verdict label to its visual class.
    ///
    /// Both the short labels (`High`/`Medium`/`Low`) and the descriptive
    /// `... Match` labels are recognised. Anything else is `Low`.
    pub fn for_verdict(verdict: &str) -> Self {
        match verdict {
            "High" | "Excellent Match" | "Strong Match" => ScoreClass::High,
            "Medium" | "Good Match" | "Potential Match" | "Moderate Match" => ScoreClass::Medium,
            _ => ScoreClass::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreClass::High => "high",
            ScoreClass::Medium => "medium",
            ScoreClass::Low => "low",
        }
    }
}

/// Bootstrap-style colour for a verdict badge in the results table
pub fn verdict_color(verdict: &str) -> &'static str {
    match verdict {
        "High" => "success",
        "Medium" => "warning",
        "Low" => "danger",
        _ => "secondary",
    }
}

/// Render a 0-100 score the way the dashboard shows it (`78%`, `81.5%`)
pub fn format_score(score: f64) -> String {
    format!("{}%", score)
}

/// A stored evaluation as returned by `GET /evaluations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub id: i64,
    pub resume_id: i64,
    pub job_description_id: i64,
    /// Relevance score (0-100)
    pub relevance_score: f64,
    pub verdict: String,
    #[serde(deserialize_with = "wire::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, deserialize_with = "wire::string_list")]
    pub missing_skills: Vec<String>,
    #[serde(default, deserialize_with = "wire::string_list")]
    pub suggestions: Vec<String>,
}

impl Evaluation {
    pub fn is_high(&self) -> bool {
        self.verdict == "High"
    }

    pub fn score_class(&self) -> ScoreClass {
        ScoreClass::for_verdict(&self.verdict)
    }
}

/// Response body of `POST /evaluate/{resume_id}/{jd_id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EvaluationOutcome {
    pub relevance_score: f64,
    pub verdict: String,
    #[serde(default)]
    pub match_confidence: Option<String>,
    #[serde(default, deserialize_with = "wire::string_list")]
    pub missing_skills: Vec<String>,
    #[serde(default, deserialize_with = "wire::string_list")]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub skills_match_score: Option<f64>,
    /// Older services report the skills score under this name
    #[serde(default)]
    pub hard_match_score: Option<f64>,
    #[serde(default)]
    pub experience_match_score: Option<f64>,
    #[serde(default)]
    pub semantic_match_score: Option<f64>,
    #[serde(default)]
    pub education_match_score: Option<f64>,
    #[serde(default)]
    pub evaluation_summary: Option<String>,
    #[serde(default)]
    pub detailed_analysis: Option<DetailedAnalysis>,
}

impl EvaluationOutcome {
    pub fn score_class(&self) -> ScoreClass {
        ScoreClass::for_verdict(&self.verdict)
    }

    pub fn skills_score(&self) -> f64 {
        self.skills_match_score
            .or(self.hard_match_score)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailedAnalysis {
    #[serde(default)]
    pub skills_match: Option<SkillsAnalysis>,
    #[serde(default)]
    pub experience_match: Option<ExperienceAnalysis>,
}

impl DetailedAnalysis {
    pub fn is_empty(&self) -> bool {
        self.skills_match.is_none() && self.experience_match.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillsAnalysis {
    #[serde(default)]
    pub skills_matched: u32,
    #[serde(default)]
    pub total_skills_required: u32,
    #[serde(default)]
    pub bonuses: Option<SkillBonuses>,
}

/// Fractional bonuses applied on top of the skills score
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SkillBonuses {
    #[serde(default)]
    pub good_to_have_bonus: f64,
    #[serde(default)]
    pub diversity_bonus: f64,
    #[serde(default)]
    pub expertise_bonus: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExperienceAnalysis {
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub total_years: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExperienceLevel {
    #[serde(default)]
    pub candidate_level: Option<String>,
    #[serde(default)]
    pub required_level: Option<String>,
}

/// Response body of `GET /evaluation/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationDetail {
    pub resume: Resume,
    pub job_description: JobDescription,
    pub evaluation: StoredEvaluation,
}

/// Evaluation row joined into a detail response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredEvaluation {
    pub id: i64,
    pub relevance_score: f64,
    pub verdict: String,
    #[serde(default, deserialize_with = "wire::string_list")]
    pub missing_skills: Vec<String>,
    #[serde(default, deserialize_with = "wire::string_list")]
    pub suggestions: Vec<String>,
    /// The full outcome the service stored when the evaluation ran
    #[serde(default, deserialize_with = "wire::embedded_json")]
    pub evaluation_data: Value,
    #[serde(default, deserialize_with = "wire::optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl StoredEvaluation {
    pub fn score_class(&self) -> ScoreClass {
        ScoreClass::for_verdict(&self.verdict)
    }

    /// `hard_match.skills_match` from the stored data as a percentage, or 0
    pub fn hard_match_percent(&self) -> f64 {
        self.evaluation_data
            .get("hard_match")
            .and_then(|h| h.get("skills_match"))
            .and_then(Value::as_f64)
            .map(|v| v * 100.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_class_known_verdicts() {
        assert_eq!(ScoreClass::for_verdict("High"), ScoreClass::High);
        assert_eq!(ScoreClass::for_verdict("Excellent Match"), ScoreClass::High);
        assert_eq!(ScoreClass::for_verdict("Strong Match"), ScoreClass::High);
        assert_eq!(ScoreClass::for_verdict("Good Match"), ScoreClass::Medium);
        assert_eq!(ScoreClass::for_verdict("Moderate Match"), ScoreClass::Medium);
        assert_eq!(ScoreClass::for_verdict("Poor Match"), ScoreClass::Low);
    }

    #[test]
    fn test_score_class_defaults_to_low() {
        for verdict in ["", "Error", "high", "Unknown Match"] {
            assert_eq!(ScoreClass::for_verdict(verdict), ScoreClass::Low);
            assert_eq!(ScoreClass::for_verdict(verdict).as_str(), "low");
        }
    }

    #[test]
    fn test_verdict_color() {
        assert_eq!(verdict_color("High"), "success");
        assert_eq!(verdict_color("Low"), "danger");
        assert_eq!(verdict_color("Strong Match"), "secondary");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(78.0), "78%");
        assert_eq!(format_score(81.5), "81.5%");
    }

    #[test]
    fn test_evaluation_list_item() {
        let eval: Evaluation = serde_json::from_str(
            r#"{"id": 1, "resume_id": 2, "job_description_id": 3,
                "relevance_score": 82.5, "verdict": "High",
                "missing_skills": "[\"docker\"]", "suggestions": "[]",
                "created_at": "2024-05-02T09:30:00"}"#,
        )
        .unwrap();
        assert!(eval.is_high());
        assert_eq!(eval.missing_skills, vec!["docker"]);
        assert!(eval.suggestions.is_empty());
    }

    #[test]
    fn test_outcome_falls_back_to_hard_match() {
        let outcome: EvaluationOutcome = serde_json::from_str(
            r#"{"relevance_score": 55, "verdict": "Potential Match", "hard_match_score": 61.0}"#,
        )
        .unwrap();
        assert_eq!(outcome.skills_score(), 61.0);
        assert_eq!(outcome.score_class(), ScoreClass::Medium);
        assert!(outcome.detailed_analysis.is_none());
    }

    #[test]
    fn test_outcome_with_detailed_analysis() {
        let outcome: EvaluationOutcome = serde_json::from_str(
            r#"{"relevance_score": 88, "verdict": "Strong Match",
                "skills_match_score": 90, "match_confidence": "High",
                "detailed_analysis": {
                    "skills_match": {"skills_matched": 7, "total_skills_required": 8,
                                     "bonuses": {"diversity_bonus": 0.05}},
                    "experience_match": {"total_years": 4,
                                         "experience_level": {"candidate_level": "mid"}}
                }}"#,
        )
        .unwrap();
        let analysis = outcome.detailed_analysis.unwrap();
        let skills = analysis.skills_match.unwrap();
        assert_eq!(skills.skills_matched, 7);
        assert_eq!(skills.bonuses.unwrap().good_to_have_bonus, 0.0);
        assert_eq!(analysis.experience_match.unwrap().total_years, 4.0);
    }

    #[test]
    fn test_detail_hard_match_percent() {
        let detail: EvaluationDetail = serde_json::from_str(
            r#"{"resume": {"id": 1, "student_name": "A", "student_email": "a@x.io"},
                "job_description": {"id": 2, "title": "SRE", "location": "Remote"},
                "evaluation": {"id": 9, "relevance_score": 70, "verdict": "Medium",
                               "missing_skills": null, "suggestions": "[\"Learn k8s\"]",
                               "evaluation_data": "{\"hard_match\": {\"skills_match\": 0.75}}",
                               "created_at": "2024-05-02T09:30:00"}}"#,
        )
        .unwrap();
        assert_eq!(detail.evaluation.hard_match_percent(), 75.0);
        assert_eq!(detail.evaluation.suggestions, vec!["Learn k8s"]);
    }

    #[test]
    fn test_hard_match_percent_missing_data() {
        let stored = StoredEvaluation {
            id: 1,
            relevance_score: 10.0,
            verdict: "Low".to_string(),
            missing_skills: vec![],
            suggestions: vec![],
            evaluation_data: Value::Null,
            created_at: None,
        };
        assert_eq!(stored.hard_match_percent(), 0.0);
    }
}
