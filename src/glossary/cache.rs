use std::sync::Arc;
use tokio::sync::Mutex;

use super::{GlossaryData, GlossaryLoader};
use crate::error::LoadError;

/// Memoizes the first successful glossary load across calls.
///
/// Failed loads are not remembered, so the next call fetches again.
#[derive(Clone, Default)]
pub struct GlossaryCache {
    data: Arc<Mutex<Option<Arc<GlossaryData>>>>,
}

impl GlossaryCache {
    /// Return the cached glossary, loading it through `loader` on first use.
    ///
    /// The lock is held across the fetch so concurrent callers share one request.
    pub async fn get_or_load(&self, loader: &GlossaryLoader) -> Result<Arc<GlossaryData>, LoadError> {
        let mut guard = self.data.lock().await;
        if let Some(data) = guard.as_ref() {
            return Ok(data.clone());
        }
        let data = Arc::new(loader.load_glossary_data().await?);
        *guard = Some(data.clone());
        Ok(data)
    }

    pub async fn invalidate(&self) {
        self.data.lock().await.take();
    }

    pub async fn is_loaded(&self) -> bool {
        self.data.lock().await.is_some()
    }
}
