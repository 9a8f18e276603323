//! File staging for the upload form.
//!
//! `FileIntake` is generic over the file handle so the acceptance rules can be
//! exercised without a browser; the component instantiates it with
//! `web_sys::File`.

use crate::config::UiConfig;
use crate::error::IntakeError;

/// A file accepted for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedFile<F> {
    pub file: F,
    pub name: String,
    pub size: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FileIntake<F> {
    staged: Option<StagedFile<F>>,
}

impl<F> Default for FileIntake<F> {
    fn default() -> Self {
        Self { staged: None }
    }
}

impl<F> FileIntake<F> {
    /// Validates and stages `file`. On rejection any previously staged file is
    /// dropped, leaving the intake empty.
    pub fn offer(
        &mut self,
        file: F,
        name: &str,
        size: u64,
        config: &UiConfig,
    ) -> Result<&StagedFile<F>, IntakeError> {
        if let Err(err) = validate_selection(name, size, config) {
            self.staged = None;
            return Err(err);
        }
        Ok(&*self.staged.insert(StagedFile {
            file,
            name: name.to_string(),
            size,
        }))
    }

    pub fn clear(&mut self) {
        self.staged = None;
    }

    pub fn staged(&self) -> Option<&StagedFile<F>> {
        self.staged.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.staged.is_some()
    }
}

/// Extension is the text after the last `.`, compared case-insensitively.
pub fn file_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

pub fn validate_selection(name: &str, size: u64, config: &UiConfig) -> Result<(), IntakeError> {
    let allowed = file_extension(name)
        .map(|ext| config.allowed_extensions.iter().any(|a| *a == ext))
        .unwrap_or(false);
    if !allowed {
        return Err(IntakeError::UnsupportedType);
    }
    if size > config.max_upload_bytes {
        return Err(IntakeError::TooLarge {
            limit: config.max_upload_label(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn accepts_pdf_and_docx_in_any_case() {
        let config = UiConfig::default();
        for name in ["cv.pdf", "CV.PDF", "resume.final.Docx"] {
            let mut intake = FileIntake::default();
            let staged = intake.offer((), name, 1000, &config).unwrap();
            assert_eq!(staged.name, name);
            assert!(intake.can_submit());
        }
    }

    #[test]
    fn rejects_other_extensions() {
        let config = UiConfig::default();
        for name in ["cv.doc", "cv.txt", "pdf", "cv.pdf.zip", "cv."] {
            let mut intake = FileIntake::default();
            assert_eq!(
                intake.offer((), name, 1000, &config).unwrap_err(),
                IntakeError::UnsupportedType
            );
            assert!(intake.staged().is_none());
            assert!(!intake.can_submit());
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        let config = UiConfig::default();
        let mut intake = FileIntake::default();
        assert!(intake.offer((), "cv.pdf", 2 * MIB, &config).is_ok());

        let err = intake.offer((), "cv.pdf", 2 * MIB + 1, &config).unwrap_err();
        assert_eq!(err.to_string(), "File size exceeds 2MB. Please upload a smaller file.");
        assert!(!intake.can_submit());
    }

    #[test]
    fn rejection_drops_previous_selection() {
        let config = UiConfig::default();
        let mut intake = FileIntake::default();
        intake.offer(1, "first.pdf", 10, &config).unwrap();
        assert!(intake.offer(2, "second.exe", 10, &config).is_err());
        assert!(intake.staged().is_none());
    }

    #[test]
    fn new_selection_replaces_old() {
        let config = UiConfig::default();
        let mut intake = FileIntake::default();
        intake.offer(1, "first.pdf", 10, &config).unwrap();
        intake.offer(2, "second.docx", 20, &config).unwrap();
        let staged = intake.staged().unwrap();
        assert_eq!((staged.file, staged.name.as_str(), staged.size), (2, "second.docx", 20));
    }

    #[test]
    fn clear_empties_intake() {
        let config = UiConfig::default();
        let mut intake = FileIntake::default();
        intake.offer((), "cv.pdf", 10, &config).unwrap();
        intake.clear();
        intake.clear();
        assert!(!intake.can_submit());
    }
}
