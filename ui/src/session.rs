//! The signed-in user's session, shared with the whole tree as a context
//! signal.

use api::storage;
use api::types::User;

/// Who is signed in, if anyone. The bearer token itself stays in storage and
/// is only ever read by the api client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Rebuilds the session a previous login persisted, if any.
    pub fn restore() -> Self {
        let user = storage::get_item(storage::USER_KEY)
            .and_then(|json| serde_json::from_str(&json).ok());
        Self { user }
    }

    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::BloodGroup;

    // Single test so the shared storage key is not raced by parallel tests.
    #[test]
    fn restore_follows_the_stored_profile() {
        storage::remove_item(storage::USER_KEY);
        assert!(!Session::restore().logged_in());

        storage::set_item(
            storage::USER_KEY,
            r#"{"username": "joao", "bloodGroup": "A+", "city": "Porto", "state": ""}"#,
        );
        let session = Session::restore();
        assert!(session.logged_in());
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("joao"));
        assert_eq!(
            session.user().and_then(|u| u.blood_group),
            Some(BloodGroup::APositive)
        );

        // Corrupt data reads as logged out rather than failing.
        storage::set_item(storage::USER_KEY, "not json");
        assert!(!Session::restore().logged_in());

        storage::remove_item(storage::USER_KEY);
    }

    #[test]
    fn with_user_is_logged_in() {
        let session = Session::with_user(User {
            username: "maria".to_string(),
            blood_group: Some(BloodGroup::ONegative),
            city: "Lisbon".to_string(),
            state: "Lisboa".to_string(),
        });
        assert!(session.logged_in());
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("maria"));
    }
}
