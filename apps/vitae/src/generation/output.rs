//! Persist-to-disk output mode and file naming.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::GenerateError;
use crate::generation::assembler::{generate, GeneratedDocument};
use crate::models::cv::Cv;

const FALLBACK_FILE_NAME: &str = "CV.pdf";

/// File name derived from the person's full name: `Ada_Lovelace_CV.pdf`.
///
/// Whitespace becomes `_`, anything but letters, digits, `-` and `_` is
/// dropped. Falls back to `CV.pdf` when nothing usable is left.
pub fn file_name(full_name: &str) -> String {
    let mut stem = String::new();
    for c in full_name.trim().chars() {
        let c = if c.is_whitespace() { '_' } else { c };
        if !(c.is_alphanumeric() || c == '-' || c == '_') {
            continue;
        }
        if c == '_' && (stem.is_empty() || stem.ends_with('_')) {
            continue;
        }
        stem.push(c);
    }
    let stem = stem.trim_end_matches('_');
    if stem.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        format!("{stem}_CV.pdf")
    }
}

impl GeneratedDocument {
    /// Writes the document into `dir` under its suggested file name.
    ///
    /// The bytes go to a temporary file in `dir` first and are renamed into
    /// place, so a failure never leaves a truncated PDF behind.
    pub fn persist(&self, dir: &Path) -> Result<PathBuf, GenerateError> {
        let target = dir.join(&self.file_name);
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GenerateError::io(dir, e))?;
        tmp.write_all(&self.bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| GenerateError::io(tmp.path(), e))?;
        tmp.persist(&target)
            .map_err(|e| GenerateError::io(&target, e.error))?;

        info!(path = %target.display(), bytes = self.bytes.len(), "CV document saved");
        Ok(target)
    }
}

/// Persist-to-disk output mode. Returns the path written.
pub fn save_to_dir(cv: &Cv, style_id: &str, dir: &Path) -> Result<PathBuf, GenerateError> {
    generate(cv, style_id)?.persist(dir)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::assembler::generate_blob;
    use crate::models::cv::PersonalInfo;

    fn cv(name: &str) -> Cv {
        Cv {
            personal_info: PersonalInfo {
                full_name: name.to_string(),
                summary: "Builds things.".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    // ── file_name ───────────────────────────────────────────────────────────

    #[test]
    fn test_file_name_from_full_name() {
        assert_eq!(file_name("Ada Lovelace"), "Ada_Lovelace_CV.pdf");
        assert_eq!(file_name("  Jean-Luc   Picard "), "Jean-Luc_Picard_CV.pdf");
        assert_eq!(file_name("O'Brien / Miles"), "OBrien_Miles_CV.pdf");
        assert_eq!(file_name("Zoë Ødegaard"), "Zoë_Ødegaard_CV.pdf");
    }

    #[test]
    fn test_file_name_falls_back_when_empty() {
        assert_eq!(file_name(""), "CV.pdf");
        assert_eq!(file_name("   "), "CV.pdf");
        assert_eq!(file_name("../"), "CV.pdf");
    }

    // ── save_to_dir ─────────────────────────────────────────────────────────

    #[test]
    fn test_saved_file_matches_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_to_dir(&cv("Ada Lovelace"), "minimal-spacious", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("Ada_Lovelace_CV.pdf"));

        let written = std::fs::read(&path).unwrap();
        let blob = generate_blob(&cv("Ada Lovelace"), "minimal-spacious").unwrap();
        assert_eq!(written, blob.to_vec());
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        save_to_dir(&cv(""), "classic-ats", dir.path()).unwrap();
        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["CV.pdf"]);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Ada_Lovelace_CV.pdf"), b"stale").unwrap();
        let path = save_to_dir(&cv("Ada Lovelace"), "classic-ats", dir.path()).unwrap();
        assert!(std::fs::read(path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = save_to_dir(&cv("Ada"), "classic-ats", &missing).unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
    }
}
