//! Credential store record and its persistence. The record is loaded once at
//! startup and saved explicitly after each mutation; nothing rehydrates behind
//! the caller's back. Tokens in the record must never be logged.

use crate::{claims::decode_claims, error::Error};
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::HashMap};
use tracing::{debug, warn};

/// Default storage key for the persisted session.
pub const DEFAULT_STORAGE_KEY: &str = "flawless_admin_session";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl SessionRecord {
    /// Record written by the primary login step: email only, no tokens.
    pub fn pending(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// True only for a decodable, unexpired token carrying the Admin role.
    pub fn is_authenticated(&self, now_unix: i64) -> bool {
        if self.token.is_empty() {
            return false;
        }
        match decode_claims(&self.token) {
            Ok(claims) => claims.is_admin() && !claims.is_expired(now_unix),
            Err(_) => false,
        }
    }
}

/// Key/value backend for the persisted record.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error>;
    fn write(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// In-process storage, used by tests and when the browser denies storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn encode_record(record: &SessionRecord) -> Result<String, Error> {
    Ok(serde_json::to_string(record)?)
}

pub fn decode_record(raw: &str) -> Result<SessionRecord, Error> {
    Ok(serde_json::from_str(raw)?)
}

/// Loads the persisted record. Missing, unreadable, or corrupt entries yield an
/// empty record so the console always starts at the login step.
pub fn load_session<S: SessionStorage + ?Sized>(storage: &S, key: &str) -> SessionRecord {
    match storage.read(key) {
        Ok(Some(raw)) => decode_record(&raw).unwrap_or_else(|err| {
            warn!("Discarding unreadable persisted session: {err}");
            SessionRecord::default()
        }),
        Ok(None) => SessionRecord::default(),
        Err(err) => {
            warn!("Session storage unavailable: {err}");
            SessionRecord::default()
        }
    }
}

pub fn save_session<S: SessionStorage + ?Sized>(
    storage: &S,
    key: &str,
    record: &SessionRecord,
) -> Result<(), Error> {
    let raw = encode_record(record)?;
    storage.write(key, &raw)?;
    debug!("Persisted session record");
    Ok(())
}

pub fn clear_session<S: SessionStorage + ?Sized>(storage: &S, key: &str) -> Result<(), Error> {
    storage.remove(key)
}

#[cfg(test)]
mod tests {
    use super::{
        MemoryStorage, SessionRecord, SessionStorage, clear_session, decode_record, load_session,
        save_session,
    };
    use crate::claims::ROLE_CLAIM;
    use crate::error::Error;
    use base64ct::{Base64UrlUnpadded, Encoding};
    use serde_json::json;

    fn token(role: &str, exp: i64) -> String {
        let payload = json!({ ROLE_CLAIM: role, "exp": exp }).to_string();
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.sig",
            Base64UrlUnpadded::encode_string(payload.as_bytes())
        )
    }

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, Error> {
            Err(Error::Storage("denied".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), Error> {
            Err(Error::Storage("denied".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), Error> {
            Err(Error::Storage("denied".to_string()))
        }
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let record = decode_record(r#"{"email":"a@b.com","token":"t","refreshToken":"r1"}"#)
            .expect("record");
        assert_eq!(record.refresh_token, "r1");
        assert_eq!(decode_record("{}").expect("empty record"), SessionRecord::default());
    }

    #[test]
    fn save_then_load_survives_restart() {
        let storage = MemoryStorage::new();
        let record = SessionRecord {
            email: "a@b.com".to_string(),
            token: token("Admin", 2_000),
            refresh_token: "r1".to_string(),
        };
        save_session(&storage, "key", &record).expect("save");

        assert_eq!(load_session(&storage, "key"), record);
        assert_eq!(load_session(&storage, "other"), SessionRecord::default());
    }

    #[test]
    fn corrupt_or_unavailable_storage_loads_empty() {
        let storage = MemoryStorage::new();
        storage.write("key", "{not json").expect("write");
        assert_eq!(load_session(&storage, "key"), SessionRecord::default());
        assert_eq!(load_session(&BrokenStorage, "key"), SessionRecord::default());
        assert!(save_session(&BrokenStorage, "key", &SessionRecord::default()).is_err());
    }

    #[test]
    fn clear_removes_entry() {
        let storage = MemoryStorage::new();
        save_session(&storage, "key", &SessionRecord::pending("a@b.com")).expect("save");
        clear_session(&storage, "key").expect("clear");
        assert_eq!(storage.read("key").expect("read"), None);
    }

    #[test]
    fn authentication_requires_admin_unexpired_token() {
        let mut record = SessionRecord::pending("a@b.com");
        assert!(record.has_email());
        assert!(!record.is_authenticated(1_000));

        record.token = token("Admin", 2_000);
        assert!(record.is_authenticated(1_000));
        assert!(!record.is_authenticated(2_000));

        record.token = token("User", 2_000);
        assert!(!record.is_authenticated(1_000));

        record.token = "garbage".to_string();
        assert!(!record.is_authenticated(1_000));
    }
}
