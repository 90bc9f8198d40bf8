use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::RosterError;
use crate::models::{Activity, ActivityListing};

/// Shared handle to the in-memory activity directory.
///
/// Cloning is cheap; every clone sees the same state. The set of activity
/// names is fixed at construction and only rosters change afterwards.
#[derive(Clone, Debug)]
pub struct ActivityDirectory {
    activities: Arc<RwLock<Vec<Activity>>>,
    enforce_capacity: bool,
}

impl ActivityDirectory {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
            enforce_capacity: false,
        }
    }

    /// Refuse signups once a roster reaches `max_participants`.
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    pub fn activity_count(&self) -> usize {
        self.activities.read().len()
    }

    pub fn snapshot(&self) -> ActivityListing {
        ActivityListing::new(self.activities.read().clone())
    }

    /// Appends `email` to the roster of `activity_name`.
    pub fn add_participant(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;

        if activity.is_registered(email) {
            return Err(RosterError::AlreadyRegistered);
        }
        if self.enforce_capacity && activity.is_full() {
            return Err(RosterError::ActivityFull);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes the first occurrence of `email` from the roster of `activity_name`.
    pub fn remove_participant(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}

fn find_mut<'a>(
    activities: &'a mut [Activity],
    name: &str,
) -> Result<&'a mut Activity, RosterError> {
    activities
        .iter_mut()
        .find(|a| a.name == name)
        .ok_or(RosterError::NotFound)
}
