//! Output file naming and persistence.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use tlxml_model::ConversionMode;

use crate::common::{REQUIREMENTS_PREFIX, TESTCASES_MARKER, XML_EXTENSION};
use crate::error::{OutputError, Result};

/// Derive the output file name from the input path.
///
/// Testcase imports keep the input stem (`LoginTestcases.csv` becomes
/// `LoginTestcases.xml`). Requirement imports drop the first `Testcases`
/// from the stem and gain a `Requirements` prefix (`RequirementsLogin.xml`).
pub fn output_file_name(input: &Path, mode: ConversionMode) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(OsStr::to_str)
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| OutputError::InvalidInputName {
            path: input.to_path_buf(),
        })?;
    let name = match mode {
        ConversionMode::Testcase => format!("{stem}.{XML_EXTENSION}"),
        ConversionMode::Requirement => {
            let base = stem.replacen(TESTCASES_MARKER, "", 1);
            format!("{REQUIREMENTS_PREFIX}{base}.{XML_EXTENSION}")
        }
    };
    Ok(PathBuf::from(name))
}

/// Write `bytes` to `dir/file_name`, replacing any existing file atomically.
///
/// The bytes go to a temporary file in `dir` first; the destination only
/// appears once everything is written and synced.
pub fn write_output(dir: &Path, file_name: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let write_err = |source: std::io::Error| OutputError::Write {
        dir: dir.to_path_buf(),
        source,
    };
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    let path = dir.join(file_name);
    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(bytes).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(&path).map_err(|err| OutputError::Persist {
        path: path.clone(),
        source: err.error,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "output written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testcase_name_keeps_stem() {
        let name = output_file_name(
            Path::new("data/LoginTestcases.csv"),
            ConversionMode::Testcase,
        )
        .unwrap();
        assert_eq!(name, PathBuf::from("LoginTestcases.xml"));
    }

    #[test]
    fn requirement_name_strips_first_marker() {
        let name = output_file_name(
            Path::new("TestcasesLoginTestcases.csv"),
            ConversionMode::Requirement,
        )
        .unwrap();
        assert_eq!(name, PathBuf::from("RequirementsLoginTestcases.xml"));
    }

    #[test]
    fn requirement_name_without_marker() {
        let name = output_file_name(Path::new("srs.csv"), ConversionMode::Requirement).unwrap();
        assert_eq!(name, PathBuf::from("Requirementssrs.xml"));
    }

    #[test]
    fn no_stem_is_rejected() {
        assert!(matches!(
            output_file_name(Path::new("/"), ConversionMode::Testcase),
            Err(OutputError::InvalidInputName { .. })
        ));
    }
}
