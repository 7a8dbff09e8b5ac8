pub mod feedback;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaggerError};
use crate::glossary::ShotDefinition;
use crate::shot::CurrentShot;

pub use feedback::{PressFeedback, PRESS_FEEDBACK};

/// Receives human-readable status lines from the registry.
pub trait StatusSink {
    fn update_status(&mut self, message: &str);
}

impl<F: FnMut(&str)> StatusSink for F {
    fn update_status(&mut self, message: &str) {
        self(message)
    }
}

/// Confirmation line reported after a shot type is picked.
pub fn selection_message(name: &str) -> String {
    format!("Selected shot type: {name}")
}

/// One rendered shot-type control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShotButton {
    shot: ShotDefinition,
}

impl ShotButton {
    pub fn shot(&self) -> &ShotDefinition {
        &self.shot
    }

    pub fn label(&self) -> &str {
        &self.shot.name
    }

    /// Hover / accessibility text.
    pub fn title(&self) -> &str {
        self.shot.description()
    }
}

/// Render-ready snapshot of a button for hosts that draw the grid themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub index: usize,
    pub label: String,
    pub title: String,
    pub selected: bool,
    pub pressed: bool,
}

/// Grid of shot-type buttons built from the glossary.
///
/// Selection lives in `selected` and every visual marker is derived from it,
/// so at most one button can ever read as selected.
#[derive(Clone, Debug, Default)]
pub struct ShotButtonGrid {
    buttons: Vec<ShotButton>,
    selected: Option<usize>,
    feedback: PressFeedback,
}

impl ShotButtonGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every button with one per shot, in order. Any previous
    /// selection is discarded along with the old buttons.
    pub fn setup_shot_buttons(&mut self, shots: &[ShotDefinition]) {
        self.buttons = shots
            .iter()
            .cloned()
            .map(|shot| ShotButton { shot })
            .collect();
        self.selected = None;
        self.feedback.clear();
        tracing::debug!("Rendered {} shot buttons", self.buttons.len());
    }

    /// Same as [`setup_shot_buttons`](Self::setup_shot_buttons) for untyped
    /// input. Anything that is not an array of shots is logged and ignored,
    /// leaving the current buttons in place. Returns whether the grid was rebuilt.
    pub fn setup_from_value(&mut self, shots: &serde_json::Value) -> bool {
        let Some(entries) = shots.as_array() else {
            tracing::warn!("Shot buttons not rendered: expected an array of shots, got {shots}");
            return false;
        };
        let parsed: std::result::Result<Vec<ShotDefinition>, _> = entries
            .iter()
            .map(|entry| ShotDefinition::deserialize(entry))
            .collect();
        match parsed {
            Ok(shots) => {
                self.setup_shot_buttons(&shots);
                true
            }
            Err(e) => {
                tracing::warn!("Shot buttons not rendered: malformed shot entry: {e}");
                false
            }
        }
    }

    /// Handle activation of the button at `index`.
    ///
    /// Writes the shot name into `current.label`, moves the selection to this
    /// button, reports a status line and starts the press highlight. An
    /// unknown index changes nothing.
    pub fn activate(
        &mut self,
        index: usize,
        current: &mut CurrentShot,
        status: &mut impl StatusSink,
    ) -> Result<&ShotButton> {
        if index >= self.buttons.len() {
            return Err(TaggerError::UnknownShotButton(index));
        }

        let name = self.buttons[index].label().to_string();
        current.label = name.clone();

        self.clear_shot_button_selection();
        self.selected = Some(index);

        status.update_status(&selection_message(&name));
        self.feedback.press(index, Instant::now());

        Ok(&self.buttons[index])
    }

    pub fn activate_by_name(
        &mut self,
        name: &str,
        current: &mut CurrentShot,
        status: &mut impl StatusSink,
    ) -> Result<&ShotButton> {
        let index = self
            .position(name)
            .ok_or_else(|| TaggerError::UnknownShotType(name.to_string()))?;
        self.activate(index, current, status)
    }

    pub fn selected_shot_button(&self) -> Option<&ShotButton> {
        self.selected.and_then(|i| self.buttons.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn clear_shot_button_selection(&mut self) {
        self.selected = None;
    }

    pub fn buttons(&self) -> &[ShotButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == name)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn is_pressed(&self, index: usize, now: Instant) -> bool {
        self.feedback.pressed(now) == Some(index)
    }

    pub fn views(&self, now: Instant) -> Vec<ButtonView> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(index, button)| ButtonView {
                index,
                label: button.label().to_string(),
                title: button.title().to_string(),
                selected: self.is_selected(index),
                pressed: self.is_pressed(index, now),
            })
            .collect()
    }

    /// Plain-text grid, `columns` buttons per row. The selected button is
    /// drawn as `[*Name*]`, the rest as `[ Name ]`.
    pub fn render_text(&self, columns: usize) -> String {
        let columns = columns.max(1);
        let cells: Vec<String> = self
            .buttons
            .iter()
            .enumerate()
            .map(|(i, b)| {
                if self.is_selected(i) {
                    format!("[*{}*]", b.label())
                } else {
                    format!("[ {} ]", b.label())
                }
            })
            .collect();
        cells
            .chunks(columns)
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn scenario_shots() -> Vec<ShotDefinition> {
        vec![
            ShotDefinition::new("Smash"),
            ShotDefinition::new("Clear").with_description("High, deep clear"),
        ]
    }

    fn recorder(messages: &mut Vec<String>) -> impl FnMut(&str) + '_ {
        move |m: &str| messages.push(m.to_string())
    }

    #[test]
    fn test_renders_buttons_in_order() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());

        let labels: Vec<&str> = grid.buttons().iter().map(|b| b.label()).collect();
        assert_eq!(labels, ["Smash", "Clear"]);
        assert_eq!(grid.buttons()[0].title(), "Smash");
        assert_eq!(grid.buttons()[1].title(), "High, deep clear");
        assert!(grid.selected_shot_button().is_none());
    }

    #[test]
    fn test_selection_scenario() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        let mut current = CurrentShot::default();
        let mut messages = Vec::new();

        grid.activate(1, &mut current, &mut recorder(&mut messages)).unwrap();
        assert_eq!(current.label, "Clear");
        assert_eq!(grid.selected_shot_button().map(|b| b.label()), Some("Clear"));
        assert!(messages[0].contains("Clear"));

        grid.activate(0, &mut current, &mut recorder(&mut messages)).unwrap();
        assert_eq!(current.label, "Smash");
        assert!(grid.is_selected(0));
        assert!(!grid.is_selected(1));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_at_most_one_selected() {
        let shots: Vec<_> = ["Clear", "Drop", "Smash", "Net Shot"]
            .into_iter()
            .map(ShotDefinition::new)
            .collect();
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&shots);
        let mut current = CurrentShot::default();
        let mut status = |_: &str| {};

        for index in [2, 0, 3, 3, 1, 2] {
            grid.activate(index, &mut current, &mut status).unwrap();
            let now = Instant::now();
            let selected: Vec<_> = grid.views(now).into_iter().filter(|v| v.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].index, index);
        }
    }

    #[test]
    fn test_only_label_is_written() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        let mut current = CurrentShot {
            label: "old".into(),
            start_time: Some(4.0),
            player: Some("A. Player".into()),
            notes: Some("late prep".into()),
            ..Default::default()
        };
        let before = current.clone();

        grid.activate(0, &mut current, &mut |_: &str| {}).unwrap();
        assert_eq!(
            current,
            CurrentShot {
                label: "Smash".into(),
                ..before
            }
        );
    }

    #[test]
    fn test_rerender_is_idempotent_and_resets_selection() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        grid.activate(1, &mut CurrentShot::default(), &mut |_: &str| {})
            .unwrap();

        grid.clear_shot_button_selection();
        grid.setup_shot_buttons(&scenario_shots());
        assert_eq!(grid.len(), 2);
        assert!(grid.selected_shot_button().is_none());

        grid.activate(1, &mut CurrentShot::default(), &mut |_: &str| {})
            .unwrap();
        grid.setup_shot_buttons(&scenario_shots());
        assert_eq!(grid.len(), 2);
        assert!(grid.selected_shot_button().is_none());
        assert!(!grid.is_pressed(1, Instant::now()));
    }

    #[test]
    fn test_clear_selection() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        grid.activate(0, &mut CurrentShot::default(), &mut |_: &str| {})
            .unwrap();
        grid.clear_shot_button_selection();
        assert!(grid.selected_shot_button().is_none());
        assert!(grid.views(Instant::now()).iter().all(|v| !v.selected));
    }

    #[test]
    fn test_unknown_index_changes_nothing() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        grid.activate(0, &mut CurrentShot::default(), &mut |_: &str| {})
            .unwrap();

        let mut current = CurrentShot::default();
        let mut messages = Vec::new();
        let err = grid
            .activate(5, &mut current, &mut recorder(&mut messages))
            .unwrap_err();
        assert!(matches!(err, TaggerError::UnknownShotButton(5)));
        assert_eq!(current, CurrentShot::default());
        assert!(messages.is_empty());
        assert_eq!(grid.selected_index(), Some(0));
    }

    #[test]
    fn test_activate_by_name() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        let mut current = CurrentShot::default();

        grid.activate_by_name("Clear", &mut current, &mut |_: &str| {})
            .unwrap();
        assert_eq!(grid.selected_index(), Some(1));
        assert!(matches!(
            grid.activate_by_name("Lob", &mut current, &mut |_: &str| {}),
            Err(TaggerError::UnknownShotType(name)) if name == "Lob"
        ));
    }

    #[test]
    fn test_malformed_value_is_a_no_op() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());

        for bad in [json!(null), json!({"name": "Smash"}), json!("Smash"), json!([{"label": 1}])] {
            assert!(!grid.setup_from_value(&bad));
            assert_eq!(grid.len(), 2);
        }

        assert!(grid.setup_from_value(&json!([{"name": "Drop"}])));
        assert_eq!(grid.buttons()[0].title(), "Drop");
        assert!(grid.setup_from_value(&json!([])));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_press_feedback_is_transient() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        grid.activate(1, &mut CurrentShot::default(), &mut |_: &str| {})
            .unwrap();

        let later = Instant::now() + PRESS_FEEDBACK + Duration::from_millis(1);
        assert!(!grid.is_pressed(1, later));
        assert!(grid.is_selected(1));
    }

    #[test]
    fn test_render_text() {
        let mut grid = ShotButtonGrid::new();
        grid.setup_shot_buttons(&scenario_shots());
        grid.activate(1, &mut CurrentShot::default(), &mut |_: &str| {})
            .unwrap();

        assert_eq!(grid.render_text(2), "[ Smash ] [*Clear*]");
        assert_eq!(grid.render_text(0), "[ Smash ]\n[*Clear*]");
    }
}
