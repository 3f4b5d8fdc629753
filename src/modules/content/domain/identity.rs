use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Identity of a dashboard record.
///
/// A `Pending` identity tags a record that exists only in dashboard memory
/// and has never been persisted; `Persisted` carries the id the database
/// assigned. Save routes INSERT vs UPDATE on this distinction, and delete of
/// a `Pending` record never reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    Pending(Uuid),
    Persisted(Uuid),
}

impl Identity {
    /// Mint a fresh local-only identity for a record about to be drafted.
    pub fn pending() -> Self {
        Identity::Pending(Uuid::new_v4())
    }

    pub fn persisted(id: Uuid) -> Self {
        Identity::Persisted(id)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Identity::Pending(_))
    }

    /// The database id, if the record has one.
    pub fn persisted_id(&self) -> Option<Uuid> {
        match self {
            Identity::Pending(_) => None,
            Identity::Persisted(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid identity `{0}`: expected a UUID or `draft-<uuid>`")]
pub struct ParseIdentityError(String);

// Wire format: persisted ids travel as the bare UUID, pending ones as
// `draft-<uuid>`. The prefix exists only at the serialization boundary; code
// always works with the enum.
impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Pending(token) => write!(f, "draft-{token}"),
            Identity::Persisted(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Identity {
    type Err = ParseIdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(token) = s.strip_prefix("draft-") {
            let token = Uuid::parse_str(token).map_err(|_| ParseIdentityError(s.to_string()))?;
            return Ok(Identity::Pending(token));
        }

        Uuid::parse_str(s)
            .map(Identity::Persisted)
            .map_err(|_| ParseIdentityError(s.to_string()))
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_pending() {
        let id = Identity::pending();
        assert!(id.is_pending());
        assert!(id.persisted_id().is_none());
    }

    #[test]
    fn test_persisted_exposes_uuid() {
        let uuid = Uuid::new_v4();
        let id = Identity::persisted(uuid);
        assert!(!id.is_pending());
        assert_eq!(id.persisted_id(), Some(uuid));
    }

    #[test]
    fn test_two_pending_identities_differ() {
        assert_ne!(Identity::pending(), Identity::pending());
    }

    #[test]
    fn test_wire_roundtrip_persisted() {
        let id = Identity::persisted(Uuid::new_v4());
        let parsed: Identity = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_wire_roundtrip_pending() {
        let id = Identity::pending();
        let encoded = id.to_string();
        assert!(encoded.starts_with("draft-"));
        let parsed: Identity = encoded.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-an-id".parse::<Identity>().is_err());
        assert!("draft-not-a-uuid".parse::<Identity>().is_err());
        assert!("".parse::<Identity>().is_err());
    }

    #[test]
    fn test_json_is_a_plain_string() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_value(Identity::persisted(uuid)).unwrap();
        assert_eq!(json, serde_json::json!(uuid.to_string()));

        let back: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(back, Identity::persisted(uuid));
    }
}
