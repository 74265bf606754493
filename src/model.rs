use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    /// Current form field values, always fully populated
    pub form: SettingsForm,

    // UI state
    pub is_loading: bool,
    pub status: Option<StatusLine>,
}

impl Model {
    /// Start a loading operation (sets is_loading=true, clears the status line)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.status = None;
    }

    /// Stop loading without touching the status line
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
    }

    /// Overwrite the status line. Each call replaces the previous status;
    /// there is no queue or history.
    pub fn show_status(&mut self, message: impl Into<String>, success: bool) {
        self.is_loading = false;
        self.status = Some(StatusLine {
            message: message.into(),
            success,
        });
    }

    /// Overwrite the status line and return a render command
    ///
    /// This is a convenience method that combines `show_status()` with
    /// `render()`, which is the common failure-path pattern in `update/`.
    pub fn show_status_and_render(
        &mut self,
        message: impl Into<String>,
        success: bool,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.show_status(message, success);
        crux_core::render::render()
    }
}
