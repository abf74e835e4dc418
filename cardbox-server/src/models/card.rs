//! Card records and their wire shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Card row as stored in the `cards` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Card {
    pub id: i32,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub template: String,
    pub created_at: DateTime<Utc>,
}

/// Inbound payload for create and update.
///
/// All fields are required; update replaces every mutable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub template: String,
}

/// Card as returned to clients (`created_at` is not exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: i32,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub template: String,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            name: card.name,
            x: card.x,
            y: card.y,
            template: card.template,
        }
    }
}

/// Readiness response for `GET /`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_omits_created_at() {
        let card = Card {
            id: 7,
            name: "Alice".into(),
            x: 10,
            y: 20,
            template: "blue".into(),
            created_at: Utc::now(),
        };

        let body = serde_json::to_value(CardResponse::from(card)).unwrap();
        assert_eq!(
            body,
            json!({"id": 7, "name": "Alice", "x": 10, "y": 20, "template": "blue"})
        );
    }

    #[test]
    fn snapshot_requires_every_field() {
        let missing = serde_json::from_value::<CardSnapshot>(json!({
            "name": "Alice", "x": 10, "y": 20
        }));
        assert!(missing.is_err());

        let wrong_type = serde_json::from_value::<CardSnapshot>(json!({
            "name": "Alice", "x": "ten", "y": 20, "template": "blue"
        }));
        assert!(wrong_type.is_err());
    }

    #[test]
    fn snapshot_ignores_unknown_fields() {
        let snapshot: CardSnapshot = serde_json::from_value(json!({
            "name": "Alice", "x": 10, "y": 20, "template": "blue", "id": 99
        }))
        .unwrap();
        assert_eq!(snapshot.name, "Alice");
        assert_eq!(snapshot.template, "blue");
    }
}
