use axum::http::StatusCode;
use thiserror::Error;

/// Why a roster request was refused. The `Display` text is the `detail`
/// string returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
    #[error("Email is required")]
    InvalidEmail,
    #[error("Activity is full")]
    ActivityFull,
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::NotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadyRegistered
            | RosterError::NotRegistered
            | RosterError::ActivityFull => StatusCode::BAD_REQUEST,
            RosterError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RosterError::NotFound => "not_found",
            RosterError::AlreadyRegistered => "already_registered",
            RosterError::NotRegistered => "not_registered",
            RosterError::InvalidEmail => "invalid_email",
            RosterError::ActivityFull => "activity_full",
        }
    }
}
