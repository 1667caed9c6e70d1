use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    db::user::{User, UserCore},
    mongodb::{hex_id, Id},
};

/// A user as submitted by a client. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserSpec {
    /// Stamp the creation time and assign an ID.
    pub fn into_user(self, created_at: DateTime<Utc>) -> User {
        User::new(UserCore {
            name: self.name,
            email: self.email,
            password: self.password,
            created_at,
        })
    }
}

/// A user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDescription {
    #[serde(with = "hex_id")]
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDescription {
    fn from(user: User) -> Self {
        let core = user.user;
        Self {
            id: user.id,
            name: core.name,
            email: core.email,
            password: core.password,
            created_at: core.created_at,
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl UserSpec {
        pub fn example() -> Self {
            Self {
                name: Some("A".to_string()),
                email: Some("a@x.com".to_string()),
                password: Some("p".to_string()),
            }
        }
    }
}
