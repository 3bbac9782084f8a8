use std::{fmt, sync::Arc};

use crate::blob::BlobVault;
use crate::errors::{ApiError, ApiResult};
use crate::infra::config::Config;
use crate::store::TitleStore;

/// Shared, immutable per-process state handed to every handler. Stores are
/// `None` when their connection configuration was absent at startup; the
/// accessors turn that absence into the configuration-error response the
/// API contract requires.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub titles: Option<Arc<dyn TitleStore>>,
    pub blobs: Option<Arc<BlobVault>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn titles(&self) -> ApiResult<&Arc<dyn TitleStore>> {
        self.titles
            .as_ref()
            .ok_or_else(|| ApiError::configuration("DATABASE_URL is not set"))
    }

    pub fn blobs(&self) -> ApiResult<&Arc<BlobVault>> {
        self.blobs
            .as_ref()
            .ok_or_else(|| ApiError::configuration("BLOB_ROOT is not set"))
    }
}
