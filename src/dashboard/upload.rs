//! Checks run on a picked file before anything is sent to the service.

use thiserror::Error;

use crate::cli::UploadLimits;
use crate::models::{UploadFile, UploadForm, UploadRequest};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Please select a file")]
    MissingFile,

    #[error("File size must be less than {limit_mb}MB")]
    TooLarge { size: u64, limit_mb: u64 },

    #[error("Unsupported file type .{extension}. Allowed: {allowed}")]
    UnsupportedType { extension: String, allowed: String },
}

/// Validate a picked file against the configured limits.
///
/// An absent or zero-byte file is `MissingFile`; a file larger than the
/// limit is `TooLarge`.
pub fn validate_file(file: Option<&UploadFile>, limits: &UploadLimits) -> Result<(), UploadRejection> {
    let file = match file {
        Some(file) if file.size() > 0 => file,
        _ => return Err(UploadRejection::MissingFile),
    };

    if file.size() > limits.max_file_size_bytes {
        return Err(UploadRejection::TooLarge {
            size: file.size(),
            limit_mb: limits.max_file_size_bytes / (1024 * 1024),
        });
    }

    if !limits.allowed_extensions.is_empty() {
        let extension = file.extension().unwrap_or_default();
        let allowed = limits
            .allowed_extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(&extension));
        if !allowed {
            return Err(UploadRejection::UnsupportedType {
                extension,
                allowed: limits.allowed_extensions.join(", "),
            });
        }
    }

    Ok(())
}

/// Validate and pair the form with its file
pub fn prepare_upload(
    form: UploadForm,
    file: Option<UploadFile>,
    limits: &UploadLimits,
) -> Result<UploadRequest, UploadRejection> {
    validate_file(file.as_ref(), limits)?;
    match file {
        Some(file) => Ok(UploadRequest { form, file }),
        None => Err(UploadRejection::MissingFile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_form() -> UploadForm {
        UploadForm::Resume {
            student_name: "Asha".to_string(),
            student_email: "asha@example.com".to_string(),
        }
    }

    #[test]
    fn test_missing_file_rejected() {
        let limits = UploadLimits::default();
        assert_eq!(validate_file(None, &limits), Err(UploadRejection::MissingFile));
    }

    #[test]
    fn test_empty_file_rejected() {
        let limits = UploadLimits::default();
        let file = UploadFile::new("cv.pdf", Vec::new());
        assert_eq!(
            validate_file(Some(&file), &limits),
            Err(UploadRejection::MissingFile)
        );
    }

    #[test]
    fn test_oversized_file_rejected() {
        let limits = UploadLimits::default();
        let file = UploadFile::new("cv.pdf", vec![0u8; 10 * 1024 * 1024 + 1]);
        let err = validate_file(Some(&file), &limits).unwrap_err();
        assert!(matches!(err, UploadRejection::TooLarge { limit_mb: 10, .. }));
        assert_eq!(err.to_string(), "File size must be less than 10MB");
    }

    #[test]
    fn test_exactly_at_limit_accepted() {
        let limits = UploadLimits::default();
        let file = UploadFile::new("cv.pdf", vec![0u8; 10 * 1024 * 1024]);
        assert!(validate_file(Some(&file), &limits).is_ok());
    }

    #[test]
    fn test_extension_checked_case_insensitively() {
        let limits = UploadLimits::default();
        assert!(validate_file(Some(&UploadFile::new("CV.DOCX", vec![1])), &limits).is_ok());

        let err = validate_file(Some(&UploadFile::new("cv.exe", vec![1])), &limits).unwrap_err();
        assert!(matches!(err, UploadRejection::UnsupportedType { .. }));
    }

    #[test]
    fn test_no_extension_list_accepts_anything() {
        let limits = UploadLimits {
            allowed_extensions: vec![],
            ..Default::default()
        };
        assert!(validate_file(Some(&UploadFile::new("notes", vec![1])), &limits).is_ok());
    }

    #[test]
    fn test_prepare_upload_pairs_form_and_file() {
        let limits = UploadLimits::default();
        let request = prepare_upload(
            resume_form(),
            Some(UploadFile::new("cv.txt", b"hello".to_vec())),
            &limits,
        )
        .unwrap();
        assert_eq!(request.file.file_name, "cv.txt");
        assert_eq!(request.form, resume_form());
    }
}
