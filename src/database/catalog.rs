use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Activity, ActivityListing};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("activity `{activity}` lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

// (name, description, schedule, max_participants, participants)
const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Basketball",
        "Team sport focusing on basketball skills and competitive play",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn and practice tennis with coaching and tournaments",
        "Tuesdays and Thursdays, 3:45 PM - 5:00 PM",
        16,
        &["sarah@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, and various art mediums",
        "Wednesdays, 3:30 PM - 5:00 PM",
        25,
        &["luna@mergington.edu", "marco@mergington.edu"],
    ),
    (
        "Music Band",
        "Join the school band and perform at events",
        "Thursdays, 4:00 PM - 5:30 PM",
        20,
        &["grace@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop argumentation and public speaking skills",
        "Mondays and Fridays, 3:30 PM - 4:45 PM",
        18,
        &["james@mergington.edu", "isabella@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Prepare for math competitions and solve challenging problems",
        "Tuesdays, 3:30 PM - 4:30 PM",
        14,
        &["lucas@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

/// The built-in Mergington catalog.
pub fn seed_catalog() -> Vec<Activity> {
    SEED.iter()
        .map(
            |(name, description, schedule, max_participants, participants)| Activity {
                name: name.to_string(),
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
        .collect()
}

/// Reads a catalog file shaped like the `GET /activities` response.
pub fn load_catalog(path: &Path) -> Result<Vec<Activity>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let listing: ActivityListing =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let activities = listing.into_inner();
    check_unique_participants(&activities)?;
    Ok(activities)
}

fn check_unique_participants(activities: &[Activity]) -> Result<(), CatalogError> {
    for activity in activities {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(CatalogError::DuplicateParticipant {
                    activity: activity.name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}
