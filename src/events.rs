use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the portal
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Shell actions
    /// Page ready: fetch the stored settings and populate the form
    Load,
    /// Form submitted with the current field values
    Save { form: SettingsForm },
    /// Restart button clicked (confirmation still pending)
    Restart,

    // UI actions
    ClearStatus,

    // Shell responses (internal events, skipped from serialization)
    #[serde(skip)]
    RestartConfirmed(bool),

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    LoadResponse(Result<StoredSettings, String>),
    #[serde(skip)]
    SaveResponse(Result<String, String>),
    #[serde(skip)]
    RestartResponse(Result<String, String>),
}
