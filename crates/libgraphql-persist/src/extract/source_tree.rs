use crate::ExtractError;
use crate::file_reader;
use crate::file_reader::ReadContentError;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// One input file, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub contents: String,
    pub extension: Option<String>,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        Self {
            contents: contents.into(),
            extension,
            path,
        }
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        self.extension.as_deref() == Some(normalize_extension(extension))
    }
}

/// Every file under an input root that matches the configured extension,
/// in depth-first traversal order.
///
/// Entries of each directory are visited sorted by file name so that the
/// aggregated document (and therefore sequential ids) does not depend on
/// the platform's directory-listing order.
#[derive(Clone, Debug)]
pub struct SourceTree {
    files: Vec<SourceFile>,
    root: PathBuf,
}

impl SourceTree {
    /// Walks `root` and reads every matching file.
    ///
    /// Reads are issued concurrently but joined back in traversal order.
    /// The first traversal or read failure aborts the whole load.
    pub async fn load(
        root: impl AsRef<Path>,
        extension: &str,
    ) -> Result<Self, ExtractError> {
        let root = root.as_ref();
        log::debug!("Scanning {root:?} for `.{}` files...", normalize_extension(extension));

        let mut file_paths = vec![];
        let mut num_skipped = 0;
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|err| ExtractError::DirectoryWalk {
                path: root.to_path_buf(),
                err,
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:?}.");
                continue;
            }
            if extension_matches(path, extension) {
                log::trace!("Found source file at {path:?}.");
                file_paths.push(path.to_path_buf());
            } else {
                log::trace!("Skipping {path:?}: extension does not match.");
                num_skipped += 1;
            }
        }
        log::debug!(
            "Found {} matching files ({num_skipped} skipped).",
            file_paths.len(),
        );

        let files = futures::future::try_join_all(
            file_paths.into_iter().map(|path| async move {
                let contents = file_reader::read_content(&path).await?;
                Ok::<_, ReadContentError>(SourceFile::new(path, contents))
            })
        ).await?;

        Ok(Self {
            files,
            root: root.to_path_buf(),
        })
    }

    pub fn files(&self) -> &[SourceFile] {
        self.files.as_slice()
    }

    pub fn into_files(self) -> Vec<SourceFile> {
        self.files
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }
}

fn normalize_extension(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(extension)
}

fn extension_matches(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == normalize_extension(extension))
}
