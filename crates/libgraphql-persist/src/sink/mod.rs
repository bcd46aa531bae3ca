//! Pushing the inverted output map (identifier -> query text) into an
//! external key-value store, where a persisted-query server can look
//! queries up by id.

mod directory_store;
mod memory_store;

pub use directory_store::DirectoryStore;
pub use memory_store::MemoryStore;

use crate::OutputMap;
use thiserror::Error;

pub const DEFAULT_NAMESPACE: &str = "persisted-query:";

/// A minimal get/set capability over some key-value store.
#[allow(async_fn_in_trait)]
pub trait KeyValueSink {
    async fn get(&self, key: &str) -> Result<Option<String>, SinkError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), SinkError>;
}

/// Writes every entry of `output` to `sink` as `{namespace}{id} -> query`.
///
/// All writes are issued together and awaited together. If any of them
/// fails, the first failure is returned once every write has settled;
/// writes that did succeed stay written.
pub async fn push_inverted<S: KeyValueSink>(
    output: &OutputMap,
    sink: &S,
    namespace: &str,
) -> Result<usize, SinkError> {
    let inverted = output.inverted();
    log::debug!(
        "Pushing {} entries under namespace `{namespace}`...",
        inverted.len(),
    );

    let writes = inverted.iter().map(|(id, key)| {
        let sink_key = format!("{namespace}{id}");
        async move { sink.set(&sink_key, key.as_str()).await }
    });

    let mut num_written = 0;
    let mut first_err = None;
    for result in futures::future::join_all(writes).await {
        match result {
            Ok(()) => num_written += 1,
            Err(err) => {
                log::error!("{err}");
                first_err.get_or_insert(err);
            },
        }
    }

    match first_err {
        Some(err) => Err(err),
        None => Ok(num_written),
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O failure for key `{key}`: {err}")]
    Io {
        key: String,
        err: std::io::Error,
    },

    #[error("Key `{key}` rejected by the store: {reason}")]
    Rejected {
        key: String,
        reason: String,
    },
}
