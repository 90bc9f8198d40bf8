use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One extracurricular activity and its roster.
///
/// `name` is the directory key. On the wire it is the key of the enclosing
/// JSON object, so it is skipped when the record itself is (de)serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Student emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// Ordered name -> activity map, as returned by `GET /activities`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing(Vec<Activity>);

impl ActivityListing {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self(activities)
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Activity> {
        self.0
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityListing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListingVisitor;

        impl<'de> Visitor<'de> for ListingVisitor {
            type Value = ActivityListing;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by activity name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut activities = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, mut activity)) = access.next_entry::<String, Activity>()? {
                    if activities.iter().any(|a: &Activity| a.name == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate activity `{}`",
                            name
                        )));
                    }
                    activity.name = name;
                    activities.push(activity);
                }
                Ok(ActivityListing(activities))
            }
        }

        deserializer.deserialize_map(ListingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity {
            name: "Chess Club".to_string(),
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 2,
            participants: vec!["michael@mergington.edu".to_string()],
        }
    }

    #[test]
    fn listing_serializes_as_object_keyed_by_name() {
        let listing = ActivityListing::new(vec![chess()]);
        let value = serde_json::to_value(&listing).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "Chess Club": {
                    "description": "Learn strategies and compete in chess tournaments",
                    "schedule": "Fridays, 3:30 PM - 5:00 PM",
                    "max_participants": 2,
                    "participants": ["michael@mergington.edu"]
                }
            })
        );
    }

    #[test]
    fn listing_keeps_key_order_when_parsed() {
        let raw = r#"{
            "Zumba": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []},
            "Archery": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []}
        }"#;
        let listing: ActivityListing = serde_json::from_str(raw).unwrap();
        let names: Vec<&str> = listing.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Zumba", "Archery"]);
    }

    #[test]
    fn listing_rejects_repeated_names() {
        let raw = r#"{
            "Zumba": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []},
            "Zumba": {"description": "d", "schedule": "s", "max_participants": 1, "participants": []}
        }"#;
        assert!(serde_json::from_str::<ActivityListing>(raw).is_err());
    }

    #[test]
    fn capacity_helpers() {
        let mut activity = chess();
        assert!(activity.is_registered("michael@mergington.edu"));
        assert!(!activity.is_registered("MICHAEL@mergington.edu"));
        assert!(!activity.is_full());
        activity.participants.push("daniel@mergington.edu".to_string());
        assert!(activity.is_full());
    }
}
