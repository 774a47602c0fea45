use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::wire;

/// An uploaded resume as listed by the evaluation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resume {
    pub id: i64,
    pub student_name: String,
    pub student_email: String,
    #[serde(default, deserialize_with = "wire::optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Resume {
    /// Label used in pickers: `Name (email)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.student_name, self.student_email)
    }
}

/// An uploaded job description as listed by the evaluation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobDescription {
    pub id: i64,
    pub title: String,
    pub location: String,
    #[serde(default, deserialize_with = "wire::optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl JobDescription {
    /// Label used in pickers: `Title - Location`
    pub fn label(&self) -> String {
        format!("{} - {}", self.title, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_from_service_json() {
        let resume: Resume = serde_json::from_str(
            r#"{"id": 4, "student_name": "Asha", "student_email": "asha@example.com",
                "created_at": "2024-05-02T09:30:00.000001"}"#,
        )
        .unwrap();
        assert_eq!(resume.id, 4);
        assert!(resume.created_at.is_some());
        assert_eq!(resume.label(), "Asha (asha@example.com)");
    }

    #[test]
    fn test_job_description_without_timestamp() {
        let jd: JobDescription =
            serde_json::from_str(r#"{"id": 2, "title": "Data Engineer", "location": "Pune"}"#)
                .unwrap();
        assert_eq!(jd.created_at, None);
        assert_eq!(jd.label(), "Data Engineer - Pune");
    }
}
