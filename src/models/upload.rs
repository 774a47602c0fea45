use serde::{Deserialize, Serialize};

/// Which library a document is uploaded into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Resume,
    JobDescription,
}

impl UploadKind {
    /// Service endpoint path for this kind of upload
    pub fn path(&self) -> &'static str {
        match self {
            UploadKind::Resume => "/upload/resume",
            UploadKind::JobDescription => "/upload/job-description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadKind::Resume => "Resume",
            UploadKind::JobDescription => "Job description",
        }
    }
}

/// Metadata submitted alongside the uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadForm {
    Resume {
        student_name: String,
        student_email: String,
    },
    JobDescription {
        title: String,
        location: String,
    },
}

impl UploadForm {
    pub fn kind(&self) -> UploadKind {
        match self {
            UploadForm::Resume { .. } => UploadKind::Resume,
            UploadForm::JobDescription { .. } => UploadKind::JobDescription,
        }
    }

    /// Multipart text fields, in the order the service expects them
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        match self {
            UploadForm::Resume {
                student_name,
                student_email,
            } => [
                ("student_name", student_name.as_str()),
                ("student_email", student_email.as_str()),
            ],
            UploadForm::JobDescription { title, location } => {
                [("title", title.as_str()), ("location", location.as_str())]
            }
        }
    }
}

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Lowercased extension without the dot, if any
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }
}

/// A validated upload ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub form: UploadForm,
    pub file: UploadFile,
}

/// Success body of an upload endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resume_id: Option<i64>,
    #[serde(default)]
    pub jd_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_per_kind() {
        let form = UploadForm::JobDescription {
            title: "Backend Engineer".to_string(),
            location: "Berlin".to_string(),
        };
        assert_eq!(form.kind(), UploadKind::JobDescription);
        assert_eq!(
            form.fields(),
            [("title", "Backend Engineer"), ("location", "Berlin")]
        );
        assert_eq!(form.kind().path(), "/upload/job-description");
    }

    #[test]
    fn test_file_extension_lowercased() {
        let file = UploadFile::new("CV.PDF", vec![1, 2, 3]);
        assert_eq!(file.extension().as_deref(), Some("pdf"));
        assert_eq!(file.size(), 3);
        assert_eq!(UploadFile::new("README", vec![]).extension(), None);
    }
}
