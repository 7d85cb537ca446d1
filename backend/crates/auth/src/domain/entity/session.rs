//! Session Entity
//!
//! A small bag of named values carried entirely inside the signed session
//! cookie. Nothing about a session lives on the server between requests.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::value_object::user_id::UserId;

/// Session key holding the bound user's id
pub const AUTH_UNIQUE_ID_KEY: &str = "AUTHUNIQUEID";

/// Session entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    values: BTreeMap<String, serde_json::Value>,
}

impl Session {
    /// Empty (anonymous) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed read. A value of the wrong shape reads as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Returns whether the key was present
    pub fn delete(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.get(AUTH_UNIQUE_ID_KEY)
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id().is_none()
    }

    /// Bind a user. Rebinding the same user leaves the session unchanged.
    pub fn bind_user(&mut self, user_id: UserId) -> Result<(), serde_json::Error> {
        self.set(AUTH_UNIQUE_ID_KEY, &user_id)
    }

    /// Returns whether a user was bound
    pub fn unbind_user(&mut self) -> bool {
        self.delete(AUTH_UNIQUE_ID_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.is_anonymous());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_bind_and_unbind() {
        let mut session = Session::new();
        session.bind_user(UserId::new(42)).unwrap();
        assert_eq!(session.user_id(), Some(UserId::new(42)));
        assert!(!session.is_anonymous());

        assert!(session.unbind_user());
        assert!(session.is_anonymous());
        assert!(!session.unbind_user());
    }

    #[test]
    fn test_bind_twice_is_idempotent() {
        let mut once = Session::new();
        once.bind_user(UserId::new(1)).unwrap();

        let mut twice = once.clone();
        twice.bind_user(UserId::new(1)).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_mistyped_identity_reads_as_anonymous() {
        let mut session = Session::new();
        session.set(AUTH_UNIQUE_ID_KEY, &"not-a-number").unwrap();
        assert!(session.is_anonymous());
    }

    #[test]
    fn test_other_values_survive_unbind() {
        let mut session = Session::new();
        session.set("theme", &"dark").unwrap();
        session.bind_user(UserId::new(3)).unwrap();
        session.unbind_user();

        assert_eq!(session.get::<String>("theme").as_deref(), Some("dark"));
        session.clear();
        assert!(session.is_empty());
    }

    #[test]
    fn test_serialized_form_is_a_flat_map() {
        let mut session = Session::new();
        session.bind_user(UserId::new(5)).unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json, serde_json::json!({ "AUTHUNIQUEID": 5 }));
    }
}
