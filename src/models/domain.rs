use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Study location as read from the catalog
///
/// The catalog is sparse and loosely typed, so the record is kept as an open
/// JSON object. Scoring reads the attributes it knows and ignores the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location {
    pub attributes: Map<String, Value>,
}

impl Location {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Builder used by seed data and tests
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Catalog identifier, if the record carries an integer `id`
    pub fn id(&self) -> Option<i64> {
        self.attributes.get("id").and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for Location {
    fn from(attributes: Map<String, Value>) -> Self {
        Self::new(attributes)
    }
}

/// Survey answers submitted with a recommendation request
///
/// Answers are kept exactly as submitted so that a key sent with a null or
/// non-string value still counts as an answer. Only string answers are ever
/// scored; anything else reads as "no preference".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyPreferences {
    pub answers: BTreeMap<String, Value>,
}

impl SurveyPreferences {
    /// Builder used by tests and benchmarks
    pub fn with(mut self, key: &str, answer: impl Into<Value>) -> Self {
        self.answers.insert(key.to_string(), answer.into());
        self
    }

    /// True when no key at all was submitted
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// String answer for a survey key, by its wire name (`busyness`, `powerAccess`, ...)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.answers.get(key).and_then(Value::as_str)
    }
}

/// Location annotated with its match score for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLocation {
    #[serde(flatten)]
    pub location: Location,
    pub match_score: u32,
}

impl ScoredLocation {
    pub fn new(mut location: Location, match_score: u32) -> Self {
        // The score is an output field; never echo a stored one.
        location.attributes.remove("match_score");
        Self { location, match_score }
    }
}

/// Stored review of a study spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: i64,
    #[serde(rename = "studySpotId")]
    pub study_spot_id: i64,
    pub name: String,
    pub stars: i32,
    pub review: String,
    #[serde(with = "review_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Review accepted for insertion, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub study_spot_id: i64,
    pub name: String,
    pub stars: i32,
    pub review: String,
}

/// Reviews are rendered as `YYYY-MM-DD HH:MM:SS` in UTC
mod review_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_preferences_wire_names() {
        let prefs: SurveyPreferences = serde_json::from_value(json!({
            "busyness": "quiet",
            "powerAccess": "essential",
            "foodPreference": "Coffee shops",
            "noiseLevel": "silent",
            "lighting": "Some natural light",
            "locationType": "Library"
        }))
        .unwrap();

        assert_eq!(prefs.get("busyness"), Some("quiet"));
        assert_eq!(prefs.get("powerAccess"), Some("essential"));
        assert_eq!(prefs.get("foodPreference"), Some("Coffee shops"));
        assert_eq!(prefs.get("noiseLevel"), Some("silent"));
        assert_eq!(prefs.get("lighting"), Some("Some natural light"));
        assert_eq!(prefs.get("locationType"), Some("Library"));
        assert!(!prefs.is_empty());
    }

    #[test]
    fn test_non_string_answers_are_present_but_unscored() {
        let prefs: SurveyPreferences = serde_json::from_value(json!({
            "busyness": null,
            "powerAccess": false,
            "lighting": 3
        }))
        .unwrap();

        assert!(!prefs.is_empty());
        assert_eq!(prefs.get("busyness"), None);
        assert_eq!(prefs.get("powerAccess"), None);
        assert_eq!(prefs.get("lighting"), None);
    }

    #[test]
    fn test_unscored_answers_still_count_as_input() {
        let prefs: SurveyPreferences =
            serde_json::from_value(json!({ "travelTime": "Walking distance" })).unwrap();
        assert!(!prefs.is_empty());
        assert!(SurveyPreferences::default().is_empty());
    }

    #[test]
    fn test_scored_location_appends_score() {
        let location = Location::default()
            .with("id", 7)
            .with("match_score", 99);
        let scored = ScoredLocation::new(location, 4);

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value, json!({ "id": 7, "match_score": 4 }));
        assert_eq!(scored.location.id(), Some(7));
    }

    #[test]
    fn test_review_timestamp_format() {
        let review = Review {
            id: 1,
            study_spot_id: 3,
            name: "Ada".to_string(),
            stars: 5,
            review: "Great outlets".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 12, 30, 0).unwrap(),
        };

        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["created_at"], "2024-01-02 12:30:00");
        assert_eq!(value["studySpotId"], 3);

        let back: Review = serde_json::from_value(value).unwrap();
        assert_eq!(back, review);
    }
}
