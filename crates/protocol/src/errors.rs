//! Roster errors module

use thiserror::Error;

/// Errors raised when a roster change is rejected.
///
/// The `Display` text is what clients see in the `detail` field, so it is
/// kept free of internal identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String, capacity: u32 },
}

impl RosterError {
    /// True when the activity itself does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::ActivityNotFound { .. })
    }
}
