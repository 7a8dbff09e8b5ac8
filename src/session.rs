use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::TaggerConfig;
use crate::error::Result;
use crate::glossary::{GlossaryCache, GlossaryData, GlossaryLoader};
use crate::registry::ShotButtonGrid;
use crate::shot::CurrentShot;

/// Everything one tagging surface needs: where the glossary comes from, the
/// optional cache in front of it, the button grid and the shot being tagged.
///
/// Managed as Tauri state by the plugin and owned directly by the CLI.
pub struct TaggerSession {
    loader: Mutex<GlossaryLoader>,
    cache: GlossaryCache,
    use_cache: AtomicBool,
    pub grid: Mutex<ShotButtonGrid>,
    pub current: Mutex<CurrentShot>,
}

impl Default for TaggerSession {
    fn default() -> Self {
        Self::from_config(&TaggerConfig::default())
    }
}

impl TaggerSession {
    pub fn from_config(config: &TaggerConfig) -> Self {
        Self::with_loader(GlossaryLoader::new(config.glossary_source()), config.cache_glossary)
    }

    pub fn with_loader(loader: GlossaryLoader, cache_glossary: bool) -> Self {
        Self {
            loader: Mutex::new(loader),
            cache: GlossaryCache::default(),
            use_cache: AtomicBool::new(cache_glossary),
            grid: Mutex::new(ShotButtonGrid::new()),
            current: Mutex::new(CurrentShot::default()),
        }
    }

    /// Load the glossary, through the cache when caching is enabled.
    ///
    /// The loader lock is held for the whole load so [`apply_config`](Self::apply_config)
    /// cannot swap sources underneath a cache fill.
    pub async fn glossary(&self) -> Result<Arc<GlossaryData>> {
        let loader = self.loader.lock().await;
        if self.use_cache.load(Ordering::SeqCst) {
            Ok(self.cache.get_or_load(&loader).await?)
        } else {
            Ok(Arc::new(loader.load_glossary_data().await?))
        }
    }

    /// Load the glossary and rebuild the grid from its shots.
    pub async fn render_glossary(&self) -> Result<usize> {
        let glossary = self.glossary().await?;
        let mut grid = self.grid.lock().await;
        grid.setup_shot_buttons(&glossary.shots);
        Ok(grid.len())
    }

    /// Switch to the glossary source and caching mode in `config`. The cached
    /// copy is dropped; the grid and current shot are kept.
    pub async fn apply_config(&self, config: &TaggerConfig) {
        let mut loader = self.loader.lock().await;
        *loader = GlossaryLoader::new(config.glossary_source());
        self.use_cache.store(config.cache_glossary, Ordering::SeqCst);
        self.cache.invalidate().await;
    }
}
