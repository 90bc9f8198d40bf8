use serde::Deserialize;
use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::error::RosterError;
use crate::models::ActivityListing;

/// Where `GET /` sends visitors.
pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Debug, Deserialize, Default)]
pub struct RosterQuery {
    pub email: Option<String>,
}

pub fn list_activities(directory: &ActivityDirectory) -> ActivityListing {
    directory.snapshot()
}

/// Registers `email` for `activity_name` and returns the confirmation message.
pub fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: Option<&str>,
) -> Result<String, RosterError> {
    let email = require_email(email)?;
    match directory.add_participant(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "roster_signup");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, kind = e.kind(), "roster_signup_rejected");
            Err(e)
        }
    }
}

/// Removes `email` from `activity_name` and returns the confirmation message.
pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: Option<&str>,
) -> Result<String, RosterError> {
    let email = require_email(email)?;
    match directory.remove_participant(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "roster_unregister");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, kind = e.kind(), "roster_unregister_rejected");
            Err(e)
        }
    }
}

pub fn redirect_root() -> &'static str {
    LANDING_PAGE
}

// Presence only; the address format is never checked.
fn require_email(email: Option<&str>) -> Result<&str, RosterError> {
    email.filter(|e| !e.is_empty()).ok_or(RosterError::InvalidEmail)
}
