use api::storage;
use api::types::{AuthPayload, User};
use dioxus::prelude::*;

use crate::session::Session;

/// Copy handle over the session context. Logging in and out goes through
/// here so persisted credentials and the reactive state never drift apart.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: Signal<Session>,
}

impl SessionHandle {
    pub fn is_logged_in(&self) -> bool {
        self.session.read().logged_in()
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    /// Persists the issued token and profile, then flips the tree to
    /// logged in.
    pub fn log_in(&mut self, auth: AuthPayload) {
        storage::set_item(storage::TOKEN_KEY, &auth.token);
        if let Ok(json) = serde_json::to_string(&auth.user) {
            storage::set_item(storage::USER_KEY, &json);
        }
        self.session.set(Session::with_user(auth.user));
    }

    /// Clears persisted credentials, then flips the tree to logged out.
    pub fn log_out(&mut self) {
        storage::remove_item(storage::TOKEN_KEY);
        storage::remove_item(storage::USER_KEY);
        self.session.set(Session::default());
    }
}

pub fn use_session() -> SessionHandle {
    let session = use_context::<Signal<Session>>();
    SessionHandle { session }
}
