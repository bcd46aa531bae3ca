use crate::sink::KeyValueSink;
use crate::sink::SinkError;
use std::path::Path;
use std::path::PathBuf;

/// Stores each key as a file named after the key inside one directory.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, SinkError> {
        let is_plain_file_name =
            !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !is_plain_file_name {
            return Err(SinkError::Rejected {
                key: key.to_string(),
                reason: "not usable as a file name".to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueSink for DirectoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SinkError> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SinkError::Io {
                key: key.to_string(),
                err,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SinkError> {
        let path = self.key_path(key)?;
        let io_err = |err| SinkError::Io {
            key: key.to_string(),
            err,
        };
        tokio::fs::create_dir_all(&self.dir).await.map_err(io_err)?;
        tokio::fs::write(&path, value).await.map_err(io_err)?;
        log::trace!("Wrote {path:?}.");
        Ok(())
    }
}
