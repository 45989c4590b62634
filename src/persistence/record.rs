//! Save record and file layout

use chrono::{Local, NaiveDateTime};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Timestamp layout: fixed-width, 19 characters
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One persisted snapshot of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Player top-left corner, stored as `[x, y]`
    pub position: Vec2,
    /// May be negative when saved at game over
    pub score: i32,
    pub date: String,
}

impl SaveRecord {
    pub fn new(position: Vec2, score: i32, date: impl Into<String>) -> Self {
        Self {
            position,
            score,
            date: date.into(),
        }
    }

    /// Record stamped with the current local time
    pub fn now(position: Vec2, score: i32) -> Self {
        Self::new(position, score, Local::now().format(DATE_FORMAT).to_string())
    }

    /// Parsed timestamp, if the date field is well-formed
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

/// Whole save file
///
/// Top-level keys other than `games` are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default)]
    pub games: Vec<SaveRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_date_is_fixed_width() {
        let record = SaveRecord::now(Vec2::new(1.0, 2.0), 3);
        assert_eq!(record.date.len(), 19);
        assert!(record.timestamp().is_some());
    }

    #[test]
    fn test_record_json_shape() {
        let record = SaveRecord::new(Vec2::new(575.5, 350.0), -1, "2024-05-01 12:30:00");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": [575.5, 350.0],
                "score": -1,
                "date": "2024-05-01 12:30:00"
            })
        );
    }

    #[test]
    fn test_missing_games_key_is_empty() {
        let file: SaveFile = serde_json::from_str(r#"{"player": "ufo"}"#).unwrap();
        assert!(file.games.is_empty());
        assert_eq!(file.extra.get("player"), Some(&Value::from("ufo")));
    }

    #[test]
    fn test_record_missing_field_is_malformed() {
        let result: Result<SaveFile, _> =
            serde_json::from_str(r#"{"games": [{"position": [1.0, 2.0], "date": "x"}]}"#);
        assert!(result.is_err());
    }
}
