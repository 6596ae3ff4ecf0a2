use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{ExportError, ExportFormat};

/// Base file name used when no other name is configured.
pub const DEFAULT_BASE_NAME: &str = "sedori_profit_data";

/// A finished export file, ready to be offered for download or saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn new(
        format: ExportFormat,
        base_name: &str,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            format,
            file_name: format.file_name(base_name),
            mime_type: format.mime_type(),
            bytes,
        }
    }

    /// Writes the file into `dir` (created if missing) and returns its path.
    ///
    /// The bytes go to a `.part` file first and are renamed into place, so an
    /// interrupted write never leaves a truncated file under the final name.
    pub fn save_in(
        &self,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        let partial = dir.join(format!("{}.part", self.file_name));

        fs::write(&partial, &self.bytes)?;
        if let Err(e) = fs::rename(&partial, &path) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }

        info!(path = %path.display(), bytes = self.bytes.len(), "export saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_derives_name_and_mime_from_format() {
        let artifact = ExportArtifact::new(ExportFormat::Csv, DEFAULT_BASE_NAME, b"a,b\n".to_vec());

        assert_eq!(artifact.file_name, "sedori_profit_data.csv");
        assert_eq!(artifact.mime_type, "text/csv");
    }

    #[test]
    fn save_in_writes_file_and_leaves_no_partial() {
        let dir = std::env::temp_dir().join(format!("sedori-artifact-{}", std::process::id()));
        let artifact = ExportArtifact::new(ExportFormat::Csv, "saved", b"a,b\n".to_vec());

        let path = artifact.save_in(&dir).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"a,b\n".to_vec());
        assert!(!dir.join("saved.csv.part").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
