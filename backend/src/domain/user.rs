//! User data model.
//!
//! A [`User`] mirrors one row of the `tb_user` table. Identifiers are assigned
//! by storage; usernames and emails are opaque text with no format checks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned user identifier.
///
/// Serialises as a bare JSON integer and deserialises from path segments such
/// as `/users/42`.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id = UserId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(serde_json::to_string(&id).unwrap(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw storage identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw storage identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Username and email submitted when creating or replacing a user.
///
/// Any `id` field in the request body is ignored; identifiers come from the
/// path or from storage.
///
/// # Examples
/// ```
/// use users_api::domain::UserDraft;
///
/// let draft: UserDraft =
///     serde_json::from_str(r#"{"id":9,"username":"ana","email":"ana@x.com"}"#).unwrap();
/// assert_eq!(draft.username(), "ana");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    username: String,
    email: String,
}

impl UserDraft {
    /// Build a draft from its parts.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Submitted username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Submitted email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes afterwards.
///
/// JSON shape: `{"id": 1, "username": "ana", "email": "ana@x.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    email: String,
}

impl User {
    /// Attach a storage identifier to submitted user fields.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { username, email } = draft;
        Self {
            id,
            username,
            email,
        }
    }

    /// Storage identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Username as stored.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Email as stored.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn user_serialises_with_flat_shape() {
        let user = User::new(UserId::new(1), UserDraft::new("ana", "ana@x.com"));
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            json!({"id": 1, "username": "ana", "email": "ana@x.com"})
        );
    }

    #[rstest]
    fn draft_ignores_submitted_identifier() {
        let draft: UserDraft =
            serde_json::from_value(json!({"id": 77, "username": "bo", "email": "bo@x.com"}))
                .expect("draft decodes");
        assert_eq!(draft, UserDraft::new("bo", "bo@x.com"));
    }

    #[rstest]
    #[case(json!({"username": "bo"}))]
    #[case(json!({"email": "bo@x.com"}))]
    #[case(json!({"username": 5, "email": "bo@x.com"}))]
    #[case(json!([]))]
    fn draft_rejects_missing_or_mistyped_fields(#[case] body: serde_json::Value) {
        assert!(serde_json::from_value::<UserDraft>(body).is_err());
    }

    #[rstest]
    fn user_id_round_trips_through_display() {
        let id = UserId::from(-3);
        assert_eq!(id.to_string(), "-3");
        assert_eq!(id.get(), -3);
    }
}
