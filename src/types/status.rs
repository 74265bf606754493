use serde::{Deserialize, Serialize};

/// Outcome of the most recent operation, rendered by the shell as the
/// status region. `success` selects the success or error styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub success: bool,
}
