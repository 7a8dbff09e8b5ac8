use tauri::State;

use crate::config::{self as store, TaggerConfig};
use crate::error::Result;
use crate::session::TaggerSession;

#[tauri::command]
pub async fn load_config() -> Option<TaggerConfig> {
    store::load_config()
}

/// Validate and persist the config, then switch the running state over to it.
#[tauri::command]
pub async fn save_config(state: State<'_, TaggerSession>, config: TaggerConfig) -> Result<()> {
    store::save_config(&config)?;
    state.apply_config(&config).await;
    Ok(())
}
