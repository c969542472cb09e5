use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::shared::constants::IMAGE_EXTENSIONS;

/// Image bytes delivered by the UI, with the name they were uploaded under.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Lowercased extension, if it is one of the accepted image formats.
    pub fn image_extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }
}

/// Persists each upload to its own uniquely named temporary file.
///
/// The file lives as long as the returned handle and is removed on drop,
/// so concurrent requests never share a path.
#[derive(Clone, Debug, Default)]
pub struct UploadStore {
    dir: Option<PathBuf>,
}

impl UploadStore {
    /// Store uploads in the system temporary directory.
    pub fn new() -> Self {
        Self { dir: None }
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn persist(&self, upload: &Upload, extension: &str) -> std::io::Result<NamedTempFile> {
        let suffix = format!(".{extension}");
        let mut builder = tempfile::Builder::new();
        builder.prefix("moodwatch-upload-").suffix(&suffix);
        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(&upload.bytes)?;
        file.flush()?;
        Ok(file)
    }
}
