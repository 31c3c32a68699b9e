//! Players taking part in prediction games.

use serde::{Deserialize, Serialize};

use super::id::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            avatar_url: None,
        }
    }

    /// An authenticated account with a freshly generated id.
    pub fn registered(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: PlayerId::generate(),
            name: name.into(),
            email: Some(email.into()),
            avatar_url: None,
        }
    }

    /// A guest identified by sign-in provider and session.
    pub fn guest(provider: &str, session: &str, name: impl Into<String>) -> Self {
        Self::new(PlayerId::guest(provider, session), name)
    }

    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.id.is_guest()
    }
}
