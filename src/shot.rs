use serde::{Deserialize, Serialize};

use crate::error::{Result, TaggerError};

/// The shot being tagged. Owned by the caller; the button registry only ever
/// writes `label`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentShot {
    #[serde(default)]
    pub label: String,
    /// Video timestamps in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rally_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CurrentShot {
    /// Record where the shot starts. An end time earlier than the new start is dropped.
    pub fn mark_start(&mut self, seconds: f64) -> Result<()> {
        check_timestamp(seconds)?;
        self.start_time = Some(seconds);
        if self.end_time.is_some_and(|end| end < seconds) {
            self.end_time = None;
        }
        Ok(())
    }

    pub fn mark_end(&mut self, seconds: f64) -> Result<()> {
        check_timestamp(seconds)?;
        if let Some(start) = self.start_time {
            if seconds < start {
                return Err(TaggerError::InvalidShotTiming(format!(
                    "end {seconds:.3}s is before start {start:.3}s"
                )));
            }
        }
        self.end_time = Some(seconds);
        Ok(())
    }

    pub fn duration(&self) -> Option<f64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn check_timestamp(seconds: f64) -> Result<()> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(TaggerError::InvalidShotTiming(format!(
            "timestamp {seconds} is not a non-negative number of seconds"
        )));
    }
    Ok(())
}
