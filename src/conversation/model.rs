// Data package records
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<visible>.{3})(?P<hidden>.+)(?P<domain>@.*)$").expect("valid email pattern")
});

/// Author role of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub role: Role,
}

/// A single message inside a conversation mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub author: Author,
    /// Epoch seconds, absent or null on some system nodes
    #[serde(default)]
    pub create_time: Option<f64>,
}

impl Message {
    /// Creation time in milliseconds when this message was written by the user
    pub fn user_timestamp(&self) -> Option<TimestampMs> {
        if self.author.role != Role::User {
            return None;
        }
        self.create_time
            .filter(|secs| secs.is_finite())
            .map(TimestampMs::from_secs)
            .filter(|ts| ts.to_datetime().is_some())
    }
}

/// Mapping entry; the root node of every export carries no message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageNode {
    #[serde(default)]
    pub message: Option<Message>,
}

/// A conversation from `conversations.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub create_time: f64,
    #[serde(default)]
    pub mapping: IndexMap<String, MessageNode>,
}

impl Conversation {
    pub fn created_at(&self) -> TimestampMs {
        TimestampMs::from_secs(self.create_time)
    }
}

/// The account owner from `user.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
}

impl UserRecord {
    pub fn masked_email(&self) -> String {
        mask_email(&self.email)
    }
}

/// Epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TimestampMs(pub f64);

impl TimestampMs {
    pub fn from_secs(secs: f64) -> Self {
        Self(secs * 1000.0)
    }

    pub fn as_millis(self) -> f64 {
        self.0
    }

    /// Whole-millisecond instant, `None` outside the representable range
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(self.0.trunc() as i64)
    }
}

/// Hide every local-part character after the third one.
///
/// The local part ends at the last `@`. Local parts of three characters or
/// fewer are returned untouched, as are strings without an `@`.
pub fn mask_email(email: &str) -> String {
    match EMAIL_RE.captures(email) {
        Some(caps) => format!(
            "{}{}{}",
            &caps["visible"],
            "*".repeat(caps["hidden"].chars().count()),
            &caps["domain"]
        ),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("abcdef@x.com"), "abc***@x.com");
        assert_eq!(mask_email("abcd@x.com"), "abc*@x.com");
        assert_eq!(mask_email("abc@x.com"), "abc@x.com");
        assert_eq!(mask_email("ab@x.com"), "ab@x.com");
        assert_eq!(mask_email("not-an-email"), "not-an-email");
    }

    #[test]
    fn test_mask_email_splits_at_last_at() {
        assert_eq!(mask_email("ab@cd@e.com"), "ab@**@e.com");
        assert_eq!(mask_email("jérôme@x.fr"), "jér***@x.fr");
    }

    #[test]
    fn test_parse_conversation() {
        let json = r#"{
            "title": "Hello",
            "create_time": 1700000000.5,
            "mapping": {
                "root": { "id": "root", "message": null, "children": ["a"] },
                "a": { "message": { "author": { "role": "user" }, "create_time": 1700000001.0 } },
                "b": { "message": { "author": { "role": "critic" }, "create_time": null } },
                "c": {}
            }
        }"#;

        let conversation: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conversation.create_time, 1700000000.5);
        assert_eq!(conversation.mapping.len(), 4);
        assert!(conversation.mapping["root"].message.is_none());
        assert!(conversation.mapping["c"].message.is_none());

        let other = conversation.mapping["b"].message.as_ref().unwrap();
        assert_eq!(other.author.role, Role::Other);
        assert_eq!(other.create_time, None);

        let keys: Vec<_> = conversation.mapping.keys().cloned().collect();
        assert_eq!(keys, vec!["root", "a", "b", "c"]);
    }

    #[test]
    fn test_user_timestamp() {
        let message = |role, create_time| Message {
            author: Author { role },
            create_time,
        };

        assert_eq!(
            message(Role::User, Some(1.5)).user_timestamp(),
            Some(TimestampMs(1500.0))
        );
        assert_eq!(message(Role::Assistant, Some(1.5)).user_timestamp(), None);
        assert_eq!(message(Role::User, None).user_timestamp(), None);
        assert_eq!(message(Role::User, Some(f64::NAN)).user_timestamp(), None);
        assert_eq!(message(Role::User, Some(1e20)).user_timestamp(), None);
    }
}
