use std::time::Instant;

use serde::Serialize;
use tauri::ipc::Channel;
use tauri::State;

use crate::error::Result;
use crate::registry::ButtonView;
use crate::session::TaggerSession;
use crate::shot::CurrentShot;

/// Status lines streamed to the webview while a shot is selected.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "event", content = "data")]
pub enum StatusEvent {
    Status { message: String },
}

/// Rebuild the button grid. Malformed input leaves the grid as it was.
#[tauri::command]
pub async fn setup_shot_buttons(
    state: State<'_, TaggerSession>,
    shots: serde_json::Value,
) -> Result<Vec<ButtonView>> {
    let mut grid = state.grid.lock().await;
    grid.setup_from_value(&shots);
    Ok(grid.views(Instant::now()))
}

#[tauri::command]
pub async fn select_shot(
    state: State<'_, TaggerSession>,
    index: usize,
    on_status: Channel<StatusEvent>,
) -> Result<Vec<ButtonView>> {
    let mut grid = state.grid.lock().await;
    let mut current = state.current.lock().await;

    let mut status = |message: &str| {
        if let Err(e) = on_status.send(StatusEvent::Status {
            message: message.to_string(),
        }) {
            tracing::debug!("Status channel closed: {}", e);
        }
    };
    grid.activate(index, &mut current, &mut status)?;
    Ok(grid.views(Instant::now()))
}

#[tauri::command]
pub async fn get_selected_shot_button(
    state: State<'_, TaggerSession>,
) -> Result<Option<ButtonView>> {
    let grid = state.grid.lock().await;
    let now = Instant::now();
    Ok(grid
        .selected_index()
        .and_then(|i| grid.views(now).into_iter().nth(i)))
}

#[tauri::command]
pub async fn clear_shot_button_selection(
    state: State<'_, TaggerSession>,
) -> Result<Vec<ButtonView>> {
    let mut grid = state.grid.lock().await;
    grid.clear_shot_button_selection();
    Ok(grid.views(Instant::now()))
}

#[tauri::command]
pub async fn get_current_shot(state: State<'_, TaggerSession>) -> Result<CurrentShot> {
    Ok(state.current.lock().await.clone())
}

#[tauri::command]
pub async fn set_current_shot(state: State<'_, TaggerSession>, shot: CurrentShot) -> Result<()> {
    *state.current.lock().await = shot;
    Ok(())
}

#[tauri::command]
pub async fn mark_shot_start(state: State<'_, TaggerSession>, seconds: f64) -> Result<CurrentShot> {
    let mut current = state.current.lock().await;
    current.mark_start(seconds)?;
    Ok(current.clone())
}

#[tauri::command]
pub async fn mark_shot_end(state: State<'_, TaggerSession>, seconds: f64) -> Result<CurrentShot> {
    let mut current = state.current.lock().await;
    current.mark_end(seconds)?;
    Ok(current.clone())
}
