use hyper::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use tokio::sync::RwLock;

/// The redirection table: an exact-match mapping from request path to
/// destination, plus the status code used for every redirect it serves.
/// Readers and writers from any number of connection tasks share one
/// instance; the lock makes each mutation atomic as a whole, including a
/// multi-entry merge.
pub struct RedirectTable {
    code: StatusCode,
    entries: RwLock<BTreeMap<String, String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("error reading configuration: {0}")]
    Io(#[from] io::Error),
    #[error("error decoding JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialized form, and the shape of the configuration file:
/// `{"redirections": {"/source": "/destination", ...}}`.
#[derive(Serialize)]
struct Document<'a> {
    redirections: &'a BTreeMap<String, String>,
}

impl RedirectTable {
    pub fn new(code: StatusCode) -> Self {
        Self {
            code,
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// The status code sent with every redirect. Fixed at startup.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Exact string match only: no prefix matching, no normalization.
    pub async fn lookup(&self, path: &str) -> Option<String> {
        self.entries.read().await.get(path).cloned()
    }

    /// Insert or overwrite one redirection. The destination is stored
    /// verbatim; anything the client sent is accepted.
    pub async fn put(&self, from: String, to: String) {
        self.entries.write().await.insert(from, to);
    }

    /// Remove one redirection, returning its destination if it existed.
    pub async fn delete(&self, from: &str) -> Option<String> {
        self.entries.write().await.remove(from)
    }

    /// Merge a JSON configuration document into the table, overwriting
    /// same-named entries and preserving the rest. Returns how many
    /// redirections the document contained.
    ///
    /// A document without a `redirections` object merges nothing; a
    /// document that is not valid JSON, or whose redirections are not all
    /// strings, is an error and leaves the table untouched.
    pub async fn load_merge(&self, document: &[u8]) -> Result<usize, LoadError> {
        // parse before taking the lock, so a bad document contributes
        // nothing and readers never see a partial merge
        let mut doc: serde_json::Value = serde_json::from_slice(document)?;
        let merged = match doc.get_mut("redirections") {
            Some(v) if v.is_object() => {
                serde_json::from_value::<BTreeMap<String, String>>(v.take())?
            }
            _ => BTreeMap::new(),
        };

        let count = merged.len();
        let mut entries = self.entries.write().await;
        for (from, to) in merged {
            entries.insert(from, to);
        }
        Ok(count)
    }

    pub async fn load_file(&self, path: &Path) -> Result<usize, LoadError> {
        let document = tokio::fs::read(path).await?;
        self.load_merge(&document).await
    }

    /// Drop every redirection. The status code is unaffected.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// The table as a pretty-printed JSON document, suitable for storing
    /// as the configuration file.
    pub async fn serialize(&self) -> Result<String, serde_json::Error> {
        let entries = self.entries.read().await;
        serde_json::to_string_pretty(&Document {
            redirections: &entries,
        })
    }
}
