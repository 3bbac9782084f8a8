use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::{StoreError, TitleStore};
use reelvault_model::{PageRequest, TitleFilters};

/// In-memory title store for tests and local development. Predicate
/// semantics are shared with the SQL backend through
/// [`TitleFilters::matches`].
#[derive(Debug, Default)]
pub struct MemoryTitleStore {
    docs: RwLock<Vec<Value>>,
}

impl MemoryTitleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_docs(docs: Vec<Value>) -> Self {
        Self {
            docs: RwLock::new(docs),
        }
    }

    fn snapshot_desc(&self) -> Vec<Value> {
        let mut docs = self
            .docs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        // ISO-8601 UTC strings sort lexicographically, so a string sort is a
        // time sort.
        docs.sort_by(|a, b| created_at(b).cmp(created_at(a)));
        docs
    }
}

fn created_at(doc: &Value) -> &str {
    doc.get("created_at").and_then(Value::as_str).unwrap_or("")
}

#[async_trait]
impl TitleStore for MemoryTitleStore {
    async fn find(&self, filters: &TitleFilters) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .snapshot_desc()
            .into_iter()
            .filter(|doc| filters.matches(doc))
            .collect())
    }

    async fn list(&self, page: &PageRequest) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .snapshot_desc()
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let docs = self
            .docs
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(docs.len() as i64)
    }

    async fn insert(&self, doc: &Value) -> Result<(), StoreError> {
        self.docs
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(doc.clone());
        Ok(())
    }
}
