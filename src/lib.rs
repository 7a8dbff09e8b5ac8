//! Shot tagging for badminton coaching videos.
//!
//! A glossary of shot types is loaded from a JSON document and rendered as a
//! grid of buttons. Picking a button writes the shot type into the
//! caller-owned [`CurrentShot`] and reports a status line.

mod assets;
pub mod config;
pub mod error;
pub mod glossary;
pub mod panel;
pub mod registry;
pub mod session;
pub mod shot;
pub mod util;

#[cfg(feature = "tauri")]
mod commands;

pub use error::{LoadError, Result, TaggerError};
pub use glossary::{Dimension, GlossaryData, GlossaryLoader, GlossarySource, ShotDefinition};
pub use registry::{ShotButton, ShotButtonGrid, StatusSink};
pub use session::TaggerSession;
pub use shot::CurrentShot;

/// Tauri plugin that exposes the glossary and the shot-button grid to the webview.
///
/// Register with `tauri::Builder::default().plugin(shot_tagger_lib::init())`.
#[cfg(feature = "tauri")]
pub fn init<R: tauri::Runtime>() -> tauri::plugin::TauriPlugin<R> {
    use tauri::Manager;

    tauri::plugin::Builder::new("shot-tagger")
        .invoke_handler(tauri::generate_handler![
            commands::glossary::load_glossary,
            commands::glossary::get_shot_types,
            commands::glossary::get_dimensions,
            commands::shots::setup_shot_buttons,
            commands::shots::select_shot,
            commands::shots::get_selected_shot_button,
            commands::shots::clear_shot_button_selection,
            commands::shots::get_current_shot,
            commands::shots::set_current_shot,
            commands::shots::mark_shot_start,
            commands::shots::mark_shot_end,
            commands::config::load_config,
            commands::config::save_config,
        ])
        .setup(|app, _api| {
            let config = config::load_config_or_default();
            if let Err(e) = config.validate() {
                tracing::warn!("Config rejected, using defaults: {}", e);
                app.manage(TaggerSession::default());
            } else {
                app.manage(TaggerSession::from_config(&config));
            }
            Ok(())
        })
        .build()
}
