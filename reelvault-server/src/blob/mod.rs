//! Blob-store seam for uploaded assets, addressed by container + name.

use std::fmt;
use std::path::Path as FsPath;
use std::sync::Arc;

use bytes::Bytes;
use object_store::{ObjectStore, local::LocalFileSystem, memory::InMemory, path::Path};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

/// The fixed logical container uploads land in. Deliberately not
/// configurable.
pub const CONTAINER: &str = "netflix-files";

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("object store error: {0}")]
    Store(#[from] object_store::Error),
}

/// Handle onto the object store plus the public base URL stored objects
/// resolve against.
#[derive(Clone)]
pub struct BlobVault {
    store: Arc<dyn ObjectStore>,
    public_base: Url,
}

impl fmt::Debug for BlobVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobVault")
            .field("public_base", &self.public_base.as_str())
            .finish_non_exhaustive()
    }
}

impl BlobVault {
    /// Filesystem-backed vault rooted at `root`.
    pub fn local(root: &FsPath, public_base: Url) -> Result<Self, BlobError> {
        let store = LocalFileSystem::new_with_prefix(root)?;
        Ok(Self {
            store: Arc::new(store),
            public_base,
        })
    }

    /// In-memory vault for tests.
    pub fn in_memory(public_base: Url) -> Self {
        Self {
            store: Arc::new(InMemory::new()),
            public_base,
        }
    }

    /// Write the full byte content under the generated name, overwriting
    /// any pre-existing object of that name.
    pub async fn store(&self, name: &str, content: Bytes) -> Result<(), BlobError> {
        let path = Path::from(format!("{CONTAINER}/{name}"));
        self.store.put(&path, content.into()).await?;
        Ok(())
    }

    /// Resolve the public URL of a stored object.
    pub fn url_for(&self, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base.as_str().trim_end_matches('/'),
            CONTAINER,
            name
        )
    }
}

/// Derive a storage-unique name: a fresh UUID plus the original filename's
/// extension (the part after the last `.`, empty when there is none).
pub fn stored_name(original: &str) -> String {
    let extension = original.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    format!("{}.{}", Uuid::new_v4(), extension)
}
