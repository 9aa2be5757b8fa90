//! The signed-in demo user.

use philagri_core::{Role, UserId};
use serde::{Deserialize, Serialize};

/// A marketplace/farm account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub location: String,
    pub phone: String,
    pub verified: bool,
    pub join_date: String,
    pub avatar: String,
}

impl User {
    /// First letter of the name, for the avatar fallback.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}
