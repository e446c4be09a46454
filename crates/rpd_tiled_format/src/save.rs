//! Transactional file writing.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use rpd_tiled_core::OutputDocument;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::WriterConfig;
use crate::error::FormatError;

/// A file that only replaces its target on [`commit`](Self::commit).
///
/// With safe saving the data goes to a temporary file next to the target. The
/// temporary file is deleted if the `SaveFile` is dropped uncommitted or the
/// final rename fails, so the previous target survives any failure.
#[derive(Debug)]
pub struct SaveFile {
    target: PathBuf,
    sink: Sink,
}

#[derive(Debug)]
enum Sink {
    Temporary(NamedTempFile),
    Direct(File),
}

impl SaveFile {
    pub fn create(path: impl AsRef<Path>, config: &WriterConfig) -> Result<Self, FormatError> {
        let target = path.as_ref().to_path_buf();
        let sink = if config.safe_saving {
            let temp = NamedTempFile::new_in(parent_dir(&target)).map_err(FormatError::Open)?;
            Sink::Temporary(temp)
        } else {
            Sink::Direct(File::create(&target).map_err(FormatError::Open)?)
        };
        Ok(Self { target, sink })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), FormatError> {
        let result = match &mut self.sink {
            Sink::Temporary(temp) => temp.write_all(bytes).and_then(|()| temp.flush()),
            Sink::Direct(file) => file.write_all(bytes).and_then(|()| file.flush()),
        };
        result.map_err(FormatError::Write)
    }

    /// Make the written data visible at the target path.
    pub fn commit(self) -> Result<(), FormatError> {
        match self.sink {
            Sink::Temporary(temp) => {
                temp.as_file().sync_all().map_err(FormatError::Commit)?;
                temp.persist(&self.target)
                    .map_err(|error| FormatError::Commit(error.error))?;
            }
            Sink::Direct(file) => file.sync_all().map_err(FormatError::Commit)?,
        }
        debug!("Saved {}", self.target.display());
        Ok(())
    }
}

/// Directory a target file lives in; bare file names live in `.`.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Serialize `document` as pretty JSON and save it to `path`.
pub fn write_document(
    document: &OutputDocument,
    path: &Path,
    config: &WriterConfig,
) -> Result<(), FormatError> {
    let text = document.to_pretty_json()?;
    let mut file = SaveFile::create(path, config)?;
    file.write_all(text.as_bytes())?;
    file.commit()
}
