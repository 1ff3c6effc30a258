//! User Account Domain Model
//!
//! Represents a registered user of the companion app.

use uuid::Uuid;

/// Opaque user identifier
///
/// Freshly generated ids are 32 lowercase hex characters with no separators.
/// Ids received from clients are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(String);

impl Uid {
    /// Generate a new random Uid
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Uid {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Uid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Keyword ban profile applied to a user's chat feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BanSettings {
    pub active: bool,
    pub all_content: String,
    pub selected_content: String,
}

/// Data required to register a new account
#[derive(Debug, Clone)]
pub struct RegisterUserData {
    pub username: String,
    pub nickname: String,
    pub password: String,
}

/// Profile and ban changes applied by a user info update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfoChanges {
    pub nickname: String,
    pub ban: BanSettings,
}

/// User account entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    uid: Uid,
    username: String,
    nickname: String,
    password: String,
    ban: BanSettings,
}

impl UserAccount {
    /// Create a new account with a freshly generated uid and no bans
    #[must_use]
    pub fn new(data: RegisterUserData) -> Self {
        Self {
            uid: Uid::generate(),
            username: data.username,
            nickname: data.nickname,
            password: data.password,
            ban: BanSettings::default(),
        }
    }

    /// Restore an account from persisted data
    #[must_use]
    pub fn restore(
        uid: Uid,
        username: String,
        nickname: String,
        password: String,
        ban: BanSettings,
    ) -> Self {
        Self {
            uid,
            username,
            nickname,
            password,
            ban,
        }
    }

    /// Apply profile and ban changes, returning a new instance
    #[must_use]
    pub fn with_changes(self, changes: UserInfoChanges) -> Self {
        Self {
            nickname: changes.nickname,
            ban: changes.ban,
            ..self
        }
    }

    // Getters

    #[must_use]
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn ban(&self) -> &BanSettings {
        &self.ban
    }
}
