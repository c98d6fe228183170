//! Contact message domain model and gateway contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A message submitted through the public contact form.
///
/// Created by visitors via the gateway, read and deleted from the admin
/// side, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(with = "iso_datetime")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

/// The backend serializes message timestamps as naive ISO strings
/// (`2025-07-15T10:30:00`, no offset); accept those as UTC alongside
/// proper RFC 3339.
mod iso_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(date.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

/// Public contact form payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Remote contract for contact messages.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Lists stored messages (authenticated).
    async fn list(&self) -> Result<Vec<ContactMessage>>;

    /// Deletes a message (authenticated).
    async fn delete(&self, id: &str) -> Result<()>;

    /// Submits the public contact form (anonymous).
    async fn submit(&self, draft: &MessageDraft) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_backend_timestamps_deserialize_as_utc() {
        let json = serde_json::json!({
            "id": "m1",
            "name": "Ana",
            "email": "ana@example.com",
            "subject": "Hola",
            "message": "Me interesa tu trabajo",
            "date": "2025-07-15T10:30:00.123456",
        });
        let message: ContactMessage = serde_json::from_value(json).unwrap();
        assert_eq!(message.date.to_rfc3339(), "2025-07-15T10:30:00.123456+00:00");
        assert!(!message.read);
    }

    #[test]
    fn rfc3339_timestamps_also_deserialize() {
        let json = serde_json::json!({
            "id": "m2",
            "name": "Ana",
            "email": "ana@example.com",
            "subject": "Hola",
            "message": "Saludos",
            "date": "2025-07-15T10:30:00+02:00",
            "read": true,
        });
        let message: ContactMessage = serde_json::from_value(json).unwrap();
        assert_eq!(message.date.to_rfc3339(), "2025-07-15T08:30:00+00:00");
        assert!(message.read);
    }
}
