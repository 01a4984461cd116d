//
// JSON boundary types for the DotSpark backend.
//
// What this does:
// - Mirrors the thoughts-listing response (`{ thoughts: [...] }`) as typed
//   structs instead of untyped records
// - Mirrors the notifications response as tagged variants keyed on
//   `notificationType`, so downstream code matches exhaustively
// - Rejects malformed payloads at the boundary with a message-carrying error
//
// The backend owns the endpoints and field semantics; this module only
// validates shape. Unknown notification types are a validation error, not a
// passthrough.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Denormalized author info attached to a thought (display only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtAuthor {
    pub id: i64,
    pub full_name: Option<String>,
    pub avatar: Option<String>,
}

/// A single captured thought as delivered by the backend.
///
/// `id` is the stable primary key and the position-cache key; everything else
/// is display metadata except `created_at`, which drives the recency filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtItem {
    pub id: i64,
    pub heading: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ThoughtAuthor>,
}

/// The thoughts-listing envelope: `{ "thoughts": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtFeed {
    pub thoughts: Vec<ThoughtItem>,
}

/// Boundary validation error with a human-readable message.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedError {
    pub msg: String,
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError { msg: e.to_string() }
    }
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for FeedError {}

/// Parse and validate a thoughts-listing response body.
pub fn parse_feed(json: &str) -> Result<ThoughtFeed, FeedError> {
    Ok(serde_json::from_str(json)?)
}

/// A user referenced by a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationActor {
    pub id: i64,
    pub full_name: Option<String>,
    pub avatar: Option<String>,
}

/// Badge metadata embedded in `badge_unlocked` notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// The type-specific payload of a notification, tagged on `notificationType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "notificationType", rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone shared a new thought to the social feed.
    #[serde(rename_all = "camelCase")]
    NewThought {
        thought_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_heading: Option<String>,
    },
    /// Someone added a perspective to one of your thoughts.
    #[serde(rename_all = "camelCase")]
    NewPerspective {
        thought_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_heading: Option<String>,
    },
    /// Someone saved your thought as a spark.
    #[serde(rename_all = "camelCase")]
    SparkSaved {
        thought_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought_heading: Option<String>,
    },
    /// You unlocked a badge.
    #[serde(rename_all = "camelCase")]
    BadgeUnlocked {
        badge_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<Badge>,
    },
    /// You were invited to a ThinQ Circle.
    #[serde(rename_all = "camelCase")]
    CircleInvite {
        circle_invite_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        circle_name: Option<String>,
    },
}

/// A notification with its common fields plus the tagged payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub recipient_id: i64,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub actors: Vec<NotificationActor>,
    #[serde(default)]
    pub actor_count: u32,
    #[serde(flatten)]
    pub kind: NotificationKind,
}

/// The notifications envelope: `{ "notifications": [...], "unreadCount": n }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPayload {
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub unread_count: u32,
}

/// Parse and validate a notifications response body.
pub fn parse_notifications(json: &str) -> Result<NotificationsPayload, FeedError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feed_with_optional_fields_missing() {
        let json = r#"{
            "thoughts": [
                {
                    "id": 42,
                    "heading": "On focus",
                    "summary": "Deep work beats busy work",
                    "createdAt": "2025-08-20T09:30:00Z"
                }
            ]
        }"#;
        let feed = parse_feed(json).unwrap();
        assert_eq!(feed.thoughts.len(), 1);
        let t = &feed.thoughts[0];
        assert_eq!(t.id, 42);
        assert!(t.emotion.is_none());
        assert!(t.user.is_none());
    }

    #[test]
    fn parses_feed_with_author() {
        let json = r#"{
            "thoughts": [
                {
                    "id": 7,
                    "heading": "h",
                    "summary": "s",
                    "emotion": "curious",
                    "imageUrl": "https://cdn.example/7.png",
                    "channel": "write",
                    "createdAt": "2025-08-21T12:00:00Z",
                    "user": { "id": 3, "fullName": "Priya", "avatar": null }
                }
            ]
        }"#;
        let feed = parse_feed(json).unwrap();
        let t = &feed.thoughts[0];
        assert_eq!(t.channel.as_deref(), Some("write"));
        assert_eq!(t.user.as_ref().unwrap().full_name.as_deref(), Some("Priya"));
    }

    #[test]
    fn rejects_malformed_feed() {
        assert!(parse_feed("{\"thoughts\": [{\"id\": \"not a number\"}]}").is_err());
        assert!(parse_feed("not json").is_err());
    }

    #[test]
    fn parses_tagged_notifications() {
        let json = r#"{
            "notifications": [
                {
                    "id": 1,
                    "recipientId": 3,
                    "isRead": false,
                    "createdAt": "2025-08-22T08:00:00Z",
                    "actors": [{ "id": 9, "fullName": "Ana", "avatar": null }],
                    "actorCount": 1,
                    "notificationType": "circle_invite",
                    "circleInviteId": 55,
                    "circleName": "Night Owls"
                },
                {
                    "id": 2,
                    "recipientId": 3,
                    "isRead": true,
                    "createdAt": "2025-08-22T09:00:00Z",
                    "notificationType": "badge_unlocked",
                    "badgeId": 4,
                    "badge": { "id": 4, "name": "Spark Starter", "icon": "trophy", "description": "First spark saved" }
                }
            ],
            "unreadCount": 1
        }"#;
        let payload = parse_notifications(json).unwrap();
        assert_eq!(payload.unread_count, 1);
        match &payload.notifications[0].kind {
            NotificationKind::CircleInvite { circle_name, .. } => {
                assert_eq!(circle_name.as_deref(), Some("Night Owls"));
            }
            other => panic!("expected circle_invite, got {other:?}"),
        }
        match &payload.notifications[1].kind {
            NotificationKind::BadgeUnlocked { badge, .. } => {
                assert_eq!(badge.as_ref().unwrap().name, "Spark Starter");
            }
            other => panic!("expected badge_unlocked, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_notification_type() {
        let json = r#"{
            "notifications": [
                {
                    "id": 1,
                    "recipientId": 3,
                    "isRead": false,
                    "createdAt": "2025-08-22T08:00:00Z",
                    "notificationType": "mystery_event"
                }
            ]
        }"#;
        assert!(parse_notifications(json).is_err());
    }
}
