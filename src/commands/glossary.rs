use tauri::State;

use crate::error::Result;
use crate::glossary::{Dimension, GlossaryData, ShotDefinition};
use crate::session::TaggerSession;

#[tauri::command]
pub async fn load_glossary(state: State<'_, TaggerSession>) -> Result<GlossaryData> {
    Ok(state.glossary().await?.as_ref().clone())
}

#[tauri::command]
pub async fn get_shot_types(state: State<'_, TaggerSession>) -> Result<Vec<ShotDefinition>> {
    Ok(state.glossary().await?.shots.clone())
}

#[tauri::command]
pub async fn get_dimensions(state: State<'_, TaggerSession>) -> Result<Vec<Dimension>> {
    Ok(state.glossary().await?.dimensions.clone())
}
